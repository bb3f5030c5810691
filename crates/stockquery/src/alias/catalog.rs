//! The process-wide set of alias tables and its JSON source format.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, StockQueryError};
use crate::query::{ComparisonOp, Metric};

use super::builtin::builtin_entries;
use super::table::{AliasCategory, AliasEntry, AliasTable};

/// On-disk alias source. Categories left out fall back to the built-in tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AliasCatalogSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric: Option<Vec<AliasEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<Vec<AliasEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sector: Option<Vec<AliasEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparator: Option<Vec<AliasEntry>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_entity: Option<Vec<AliasEntry>>,
}

impl AliasCatalogSource {
    fn take(&mut self, category: AliasCategory) -> Option<Vec<AliasEntry>> {
        match category {
            AliasCategory::Metric => self.metric.take(),
            AliasCategory::Index => self.index.take(),
            AliasCategory::Sector => self.sector.take(),
            AliasCategory::Comparator => self.comparator.take(),
            AliasCategory::StockEntity => self.stock_entity.take(),
        }
    }
}

/// All five alias tables. Built once, then only ever read.
#[derive(Debug, Clone)]
pub struct AliasCatalog {
    pub metric: AliasTable,
    pub index: AliasTable,
    pub sector: AliasTable,
    pub comparator: AliasTable,
    pub stock_entity: AliasTable,
}

impl AliasCatalog {
    /// The built-in vocabulary.
    pub fn builtin() -> Result<Self> {
        Self::from_source(AliasCatalogSource::default())
    }

    pub fn from_source(mut source: AliasCatalogSource) -> Result<Self> {
        let mut build = |category: AliasCategory| -> Result<AliasTable> {
            let entries = source
                .take(category)
                .unwrap_or_else(|| builtin_entries(category));
            AliasTable::new(category, entries)
        };

        let catalog = Self {
            metric: build(AliasCategory::Metric)?,
            index: build(AliasCategory::Index)?,
            sector: build(AliasCategory::Sector)?,
            comparator: build(AliasCategory::Comparator)?,
            stock_entity: build(AliasCategory::StockEntity)?,
        };
        catalog.validate()?;

        tracing::debug!(
            metric = catalog.metric.len(),
            index = catalog.index.len(),
            sector = catalog.sector.len(),
            comparator = catalog.comparator.len(),
            stock_entity = catalog.stock_entity.len(),
            "alias catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_json_str(data: &str) -> Result<Self> {
        let source: AliasCatalogSource = serde_json::from_str(data).map_err(|error| {
            StockQueryError::ConfigurationLoad(format!("failed to parse alias catalog: {error}"))
        })?;
        Self::from_source(source)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path).map_err(|error| {
            StockQueryError::ConfigurationLoad(format!(
                "failed to read alias catalog {}: {error}",
                path.display()
            ))
        })?;
        let source: AliasCatalogSource = serde_json::from_str(&data).map_err(|error| {
            StockQueryError::ConfigurationLoad(format!(
                "failed to parse alias catalog {}: {error}",
                path.display()
            ))
        })?;
        Self::from_source(source)
    }

    pub fn table(&self, category: AliasCategory) -> &AliasTable {
        match category {
            AliasCategory::Metric => &self.metric,
            AliasCategory::Index => &self.index,
            AliasCategory::Sector => &self.sector,
            AliasCategory::Comparator => &self.comparator,
            AliasCategory::StockEntity => &self.stock_entity,
        }
    }

    /// Metric and comparator canonicals must name something the compiler knows.
    fn validate(&self) -> Result<()> {
        for canonical in self.metric.canonicals() {
            if Metric::from_canonical(canonical).is_none() {
                return Err(StockQueryError::UnknownCanonical {
                    category: AliasCategory::Metric,
                    canonical: canonical.clone(),
                });
            }
        }
        for canonical in self.comparator.canonicals() {
            if ComparisonOp::from_canonical(canonical).is_none() {
                return Err(StockQueryError::UnknownCanonical {
                    category: AliasCategory::Comparator,
                    canonical: canonical.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alias::resolve;
    use crate::normalize::normalize;
    use std::io::Write;

    #[test]
    fn every_builtin_alias_resolves_to_its_canonical() {
        let catalog = AliasCatalog::builtin().unwrap();
        for category in AliasCategory::ALL {
            for entry in builtin_entries(category) {
                for alias in &entry.aliases {
                    let text = normalize(alias);
                    let detection = resolve(text.as_str(), catalog.table(category))
                        .unwrap_or_else(|| panic!("{category} alias {alias:?} did not resolve"));
                    assert_eq!(
                        detection.canonical, entry.canonical,
                        "{category} alias {alias:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn json_source_overrides_only_named_categories() {
        let catalog = AliasCatalog::from_json_str(
            r#"{ "index": [ { "canonical": "SENSEX", "aliases": ["sensex", "bse sensex"] } ] }"#,
        )
        .unwrap();

        assert_eq!(catalog.index.canonical_for("bse sensex"), Some("SENSEX"));
        assert_eq!(catalog.index.canonical_for("nifty 50"), None);
        assert_eq!(catalog.sector.canonical_for("bank"), Some("Financials"));
    }

    #[test]
    fn unknown_metric_canonical_is_rejected() {
        let result = AliasCatalog::from_json_str(
            r#"{ "metric": [ { "canonical": "Sector", "aliases": ["sector"] } ] }"#,
        );
        assert!(matches!(
            result,
            Err(StockQueryError::UnknownCanonical {
                category: AliasCategory::Metric,
                ..
            })
        ));
    }

    #[test]
    fn unknown_comparator_canonical_is_rejected() {
        let result = AliasCatalog::from_json_str(
            r#"{ "comparator": [ { "canonical": "ne", "aliases": ["not"] } ] }"#,
        );
        assert!(matches!(
            result,
            Err(StockQueryError::UnknownCanonical {
                category: AliasCategory::Comparator,
                ..
            })
        ));
    }

    #[test]
    fn malformed_json_is_a_configuration_error() {
        let result = AliasCatalog::from_json_str(r#"{ "sectors": [] }"#);
        assert!(matches!(result, Err(StockQueryError::ConfigurationLoad(_))));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "sector": [ {{ "canonical": "Financials", "aliases": ["bank", "lender"] }} ] }}"#
        )
        .unwrap();

        let catalog = AliasCatalog::from_path(file.path()).unwrap();
        assert_eq!(catalog.sector.canonical_for("lender"), Some("Financials"));
        assert_eq!(catalog.sector.canonical_for("pharma"), None);
    }

    #[test]
    fn missing_file_is_a_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = AliasCatalog::from_path(&dir.path().join("aliases.json"));
        assert!(matches!(result, Err(StockQueryError::ConfigurationLoad(_))));
    }

    #[test]
    fn duplicate_alias_in_file_fails_load() {
        let result = AliasCatalog::from_json_str(
            r#"{ "sector": [
                { "canonical": "Financials", "aliases": ["bank"] },
                { "canonical": "Banking", "aliases": ["bank"] }
            ] }"#,
        );
        assert!(matches!(result, Err(StockQueryError::DuplicateAlias { .. })));
    }
}
