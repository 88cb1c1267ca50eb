//! Three-way classification of a normalized path against a catalog.

use crate::config::DecorationConfig;
use crate::core::catalog::TranslationCatalog;

/// How a path relates to the catalog. Variants are checked in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchClass {
    /// The path has a translated value.
    Exact(String),
    /// The path prefixes stored keys but has no value itself.
    Partial,
    /// No relation to the catalog.
    Potential,
    /// Dropped, nothing is annotated.
    None,
}

impl MatchClass {
    /// Apply the visibility rule for unresolved paths.
    ///
    /// `Potential` survives only when potential identifiers are enabled and the
    /// path is not empty; the other classes pass through unchanged.
    pub fn gate(self, config: &DecorationConfig, path: &str) -> Self {
        match self {
            MatchClass::Potential if !config.show_potential_identifiers || path.is_empty() => {
                MatchClass::None
            }
            other => other,
        }
    }
}

/// Classify `path`: exact value first, then partial prefix, else potential.
pub fn classify<C>(path: &str, catalog: &C) -> MatchClass
where
    C: TranslationCatalog + ?Sized,
{
    if path.is_empty() {
        return MatchClass::Potential;
    }

    if let Some(text) = catalog.lookup_exact(path) {
        MatchClass::Exact(text.to_string())
    } else if catalog.is_partial_prefix(path) {
        MatchClass::Partial
    } else {
        MatchClass::Potential
    }
}
