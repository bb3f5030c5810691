//! Alias table types and load-time validation.

use std::fmt;

use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StockQueryError};
use crate::normalize::normalize;

/// Vocabulary category. Tables never compare values across categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AliasCategory {
    Metric,
    Index,
    Sector,
    Comparator,
    StockEntity,
}

impl AliasCategory {
    pub const ALL: [AliasCategory; 5] = [
        AliasCategory::Metric,
        AliasCategory::Index,
        AliasCategory::Sector,
        AliasCategory::Comparator,
        AliasCategory::StockEntity,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AliasCategory::Metric => "metric",
            AliasCategory::Index => "index",
            AliasCategory::Sector => "sector",
            AliasCategory::Comparator => "comparator",
            AliasCategory::StockEntity => "stock_entity",
        }
    }
}

impl fmt::Display for AliasCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One canonical value and the text variants that map to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasEntry {
    pub canonical: String,
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl AliasEntry {
    pub fn new(canonical: impl Into<String>, aliases: &[&str]) -> Self {
        Self {
            canonical: canonical.into(),
            aliases: aliases.iter().map(|alias| alias.to_string()).collect(),
        }
    }
}

/// Immutable canonical → variants mapping for a single category.
///
/// Variants are stored normalized. The canonical value is always one of its
/// own variants.
#[derive(Debug, Clone)]
pub struct AliasTable {
    category: AliasCategory,
    canonicals: Vec<String>,
    variants: FnvHashMap<String, usize>,
}

impl AliasTable {
    /// Builds a table, rejecting any variant claimed by two canonicals.
    pub fn new(category: AliasCategory, entries: Vec<AliasEntry>) -> Result<Self> {
        let mut canonicals: Vec<String> = Vec::with_capacity(entries.len());
        let mut variants: FnvHashMap<String, usize> = FnvHashMap::default();

        for entry in entries {
            let canonical = entry.canonical.trim().to_string();
            if canonical.is_empty() {
                return Err(StockQueryError::ConfigurationLoad(format!(
                    "{category} entry has an empty canonical value"
                )));
            }

            let slot = match canonicals.iter().position(|known| *known == canonical) {
                Some(existing) => existing,
                None => {
                    canonicals.push(canonical.clone());
                    canonicals.len() - 1
                }
            };

            let raw_variants = std::iter::once(canonical.as_str())
                .chain(entry.aliases.iter().map(String::as_str));
            for raw in raw_variants {
                let variant = normalize(raw).as_str().to_string();
                if variant.is_empty() {
                    return Err(StockQueryError::ConfigurationLoad(format!(
                        "{category} entry {canonical:?} has an empty alias"
                    )));
                }
                if let Some(&owner) = variants.get(&variant) {
                    if owner != slot {
                        return Err(StockQueryError::DuplicateAlias {
                            category,
                            alias: variant,
                            first: canonicals[owner].clone(),
                            second: canonical.clone(),
                        });
                    }
                    continue;
                }
                variants.insert(variant, slot);
            }
        }

        Ok(Self {
            category,
            canonicals,
            variants,
        })
    }

    pub fn category(&self) -> AliasCategory {
        self.category
    }

    /// Canonical values in first-seen order.
    pub fn canonicals(&self) -> &[String] {
        self.canonicals.as_slice()
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Exact lookup of an already-normalized variant.
    pub fn canonical_for(&self, variant: &str) -> Option<&str> {
        self.variants
            .get(variant)
            .map(|&slot| self.canonicals[slot].as_str())
    }

    /// Iterates `(variant, canonical)` pairs in no particular order.
    pub fn variants(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.variants
            .iter()
            .map(|(variant, &slot)| (variant.as_str(), self.canonicals[slot].as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_are_normalized() {
        let table = AliasTable::new(
            AliasCategory::Index,
            vec![AliasEntry::new("NIFTY50", &["Nifty  50", "nifty fifty"])],
        )
        .unwrap();

        assert_eq!(table.canonical_for("nifty 50"), Some("NIFTY50"));
        assert_eq!(table.canonical_for("nifty fifty"), Some("NIFTY50"));
        assert_eq!(table.canonical_for("nifty50"), Some("NIFTY50"));
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn duplicate_alias_across_canonicals_is_rejected() {
        let result = AliasTable::new(
            AliasCategory::Sector,
            vec![
                AliasEntry::new("Financials", &["bank"]),
                AliasEntry::new("Banking", &["Bank"]),
            ],
        );

        match result {
            Err(StockQueryError::DuplicateAlias {
                category,
                alias,
                first,
                second,
            }) => {
                assert_eq!(category, AliasCategory::Sector);
                assert_eq!(alias, "bank");
                assert_eq!(first, "Financials");
                assert_eq!(second, "Banking");
            }
            other => panic!("expected duplicate alias error, got {other:?}"),
        }
    }

    #[test]
    fn repeated_alias_under_same_canonical_is_collapsed() {
        let table = AliasTable::new(
            AliasCategory::Metric,
            vec![AliasEntry::new("PE", &["pe", "p/e", "P/E"])],
        )
        .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.canonicals(), ["PE".to_string()]);
    }

    #[test]
    fn empty_values_are_configuration_errors() {
        let blank_canonical =
            AliasTable::new(AliasCategory::Metric, vec![AliasEntry::new("  ", &["pe"])]);
        assert!(matches!(
            blank_canonical,
            Err(StockQueryError::ConfigurationLoad(_))
        ));

        let blank_alias =
            AliasTable::new(AliasCategory::Metric, vec![AliasEntry::new("PE", &[" "])]);
        assert!(matches!(blank_alias, Err(StockQueryError::ConfigurationLoad(_))));
    }

    #[test]
    fn category_display_matches_config_keys() {
        assert_eq!(AliasCategory::StockEntity.to_string(), "stock_entity");
        assert_eq!(
            serde_json::to_string(&AliasCategory::StockEntity).unwrap(),
            "\"stock_entity\""
        );
    }
}
