use std::path::Path;
use std::sync::Arc;

use rayon::prelude::*;

use crate::alias::AliasCatalog;
use crate::compile::{compile, CompiledQuery};
use crate::detect::detect;
use crate::error::Result;
use crate::lookup::{plan_lookup, TimeSeriesQuery};
use crate::normalize::normalize;
use crate::query::QuerySpec;
use crate::request::SearchRequest;
use crate::route::ModeRouter;

/// Text in, search request out, over one shared read-only catalog.
///
/// Cloning is cheap and every clone reads the same catalog, so one
/// interpreter can serve many threads.
#[derive(Debug, Clone)]
pub struct QueryInterpreter {
    catalog: Arc<AliasCatalog>,
    router: ModeRouter,
}

impl QueryInterpreter {
    pub fn new(catalog: Arc<AliasCatalog>) -> Self {
        Self {
            catalog,
            router: ModeRouter::new(),
        }
    }

    /// Interpreter over the built-in vocabulary.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(Arc::new(AliasCatalog::builtin()?)))
    }

    /// Interpreter over an alias catalog file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let catalog = AliasCatalog::from_path(path)?;
        tracing::info!(path = %path.display(), "alias catalog loaded from file");
        Ok(Self::new(Arc::new(catalog)))
    }

    pub fn catalog(&self) -> &Arc<AliasCatalog> {
        &self.catalog
    }

    /// Never fails: unrecognized input becomes a single-stock overview.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn interpret(&self, input: &str) -> QuerySpec {
        let text = normalize(input);
        let found = detect(&text, &self.catalog);
        self.router.route(&found)
    }

    pub fn compile(&self, input: &str) -> CompiledQuery {
        compile(&self.interpret(input))
    }

    pub fn search_request(&self, input: &str) -> SearchRequest {
        SearchRequest::from(&self.compile(input))
    }

    /// Interprets many inputs in parallel. Output order matches input order.
    pub fn interpret_batch<S>(&self, inputs: &[S]) -> Vec<QuerySpec>
    where
        S: AsRef<str> + Sync,
    {
        let specs: Vec<QuerySpec> = inputs
            .par_iter()
            .map(|input| self.interpret(input.as_ref()))
            .collect();
        tracing::debug!(count = specs.len(), "batch interpreted");
        specs
    }

    pub fn plan_lookup(&self, symbol: &str, input: &str) -> Result<TimeSeriesQuery> {
        plan_lookup(symbol, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryMode;
    use std::io::Write;

    #[test]
    fn is_send_sync_and_clone() {
        fn assert_traits<T: Send + Sync + Clone>() {}
        assert_traits::<QueryInterpreter>();
    }

    #[test]
    fn clones_share_the_catalog() {
        let interpreter = QueryInterpreter::builtin().unwrap();
        let clone = interpreter.clone();
        assert!(Arc::ptr_eq(interpreter.catalog(), clone.catalog()));
    }

    #[test]
    fn batch_preserves_order() {
        let interpreter = QueryInterpreter::builtin().unwrap();
        let inputs = ["nifty 50 stocks", "pe of reliance", "", "pharma stocks"];
        let modes: Vec<QueryMode> = interpreter
            .interpret_batch(&inputs[..])
            .iter()
            .map(QuerySpec::mode)
            .collect();
        assert_eq!(
            modes,
            vec![
                QueryMode::ListByIndex,
                QueryMode::SingleStockMetric,
                QueryMode::SingleStockOverview,
                QueryMode::ListBySector,
            ]
        );
    }

    #[test]
    fn batch_matches_sequential() {
        let interpreter = QueryInterpreter::builtin().unwrap();
        let inputs: Vec<String> = (0..64)
            .map(|i| format!("nifty it stocks with pe under {i}"))
            .collect();
        let parallel = interpreter.interpret_batch(inputs.as_slice());
        for (input, spec) in inputs.iter().zip(parallel) {
            assert_eq!(spec, interpreter.interpret(input));
        }
    }

    #[test]
    fn custom_catalog_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "index": [ {{ "canonical": "SENSEX", "aliases": ["sensex"] }} ] }}"#
        )
        .unwrap();

        let interpreter = QueryInterpreter::from_path(file.path()).unwrap();
        let request = interpreter.search_request("sensex stocks");
        assert_eq!(
            request.filter.as_deref(),
            Some("AllIndices/any(i: i eq 'SENSEX')")
        );
    }

    #[test]
    fn lookup_passes_through() {
        let interpreter = QueryInterpreter::builtin().unwrap();
        let plan = interpreter.plan_lookup("TCS", "tcs price").unwrap();
        assert_eq!(plan.symbol, "TCS");
    }
}
