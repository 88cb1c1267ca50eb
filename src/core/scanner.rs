//! Single-pass scan of a document for quoted translation paths.
//!
//! Every quoted literal made of `[a-zA-Z0-9._-]` is normalized, classified
//! against the catalog and turned into an annotation. The result is recomputed
//! from scratch on every call and fully replaces whatever a host displayed
//! before.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::DecorationConfig;
use crate::core::annotate::{Annotation, DocumentSpan, Range, annotate};
use crate::core::catalog::TranslationCatalog;
use crate::core::classify::classify;
use crate::core::path::normalize_path;
use crate::core::position::{LineIndex, PositionMapper};

/// A quote, one or more path characters, a quote. Opening and closing quote
/// may differ.
static LITERAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"['"`]([a-zA-Z0-9._-]+)['"`]"#).unwrap());

/// The two annotation layers produced by one scan, each in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanOutput {
    /// Exact and partial matches.
    pub translation_annotations: Vec<Annotation>,
    /// Literals unrelated to the catalog, only when enabled.
    pub potential_annotations: Vec<Annotation>,
}

impl ScanOutput {
    pub fn is_empty(&self) -> bool {
        self.translation_annotations.is_empty() && self.potential_annotations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.translation_annotations.len() + self.potential_annotations.len()
    }

    /// Both layers merged and ordered by position.
    pub fn iter_by_position(&self) -> impl Iterator<Item = &Annotation> {
        let mut all: Vec<&Annotation> = self
            .translation_annotations
            .iter()
            .chain(self.potential_annotations.iter())
            .collect();
        all.sort_by_key(|a| a.span);
        all.into_iter()
    }
}

/// Scan `text` and build both annotation layers.
///
/// Returns empty layers without looking at the text when the catalog is empty.
pub fn scan<C, P>(
    text: &str,
    catalog: &C,
    config: &DecorationConfig,
    positions: &P,
) -> ScanOutput
where
    C: TranslationCatalog + ?Sized,
    P: PositionMapper + ?Sized,
{
    let mut output = ScanOutput::default();

    if catalog.is_empty() {
        tracing::debug!("catalog is empty, skipping scan");
        return output;
    }

    let mut literals = 0usize;
    for literal in LITERAL_REGEX.find_iter(text) {
        literals += 1;

        // Interior of the literal: drop exactly one character on each side.
        let span = DocumentSpan::new(literal.start() + 1, literal.end() - 1);
        let range = Range {
            start: positions.offset_to_position(span.start),
            end: positions.offset_to_position(span.end),
        };

        let path = normalize_path(literal.as_str());
        let class = classify(&path, catalog).gate(config, &path);

        if let Some(annotation) = annotate(&class, &path, span, range, config) {
            if annotation.kind.is_translation_layer() {
                output.translation_annotations.push(annotation);
            } else {
                output.potential_annotations.push(annotation);
            }
        }
    }

    tracing::debug!(
        literals,
        translations = output.translation_annotations.len(),
        potential = output.potential_annotations.len(),
        "scanned document"
    );

    output
}

/// [`scan`] with positions computed from the text itself.
pub fn scan_text<C>(text: &str, catalog: &C, config: &DecorationConfig) -> ScanOutput
where
    C: TranslationCatalog + ?Sized,
{
    scan(text, catalog, config, &LineIndex::new(text))
}
