//! Translation annotation engine.
//!
//! The pipeline for one document is:
//!
//! 1. `scanner` finds quoted literals and maps them to positions
//! 2. `path` normalizes each literal into a dotted path
//! 3. `classify` checks the path against a `catalog` (exact, partial, potential)
//! 4. `annotate` builds hover and inline text for the result
//!
//! `parsers` and `files` load the inputs for the command-line host, and `style`
//! holds the two decoration styles the annotation layers are drawn with.

pub mod annotate;
pub mod catalog;
pub mod classify;
pub mod files;
pub mod parsers;
pub mod path;
pub mod position;
pub mod scanner;
pub mod style;

pub use annotate::{Annotation, AnnotationKind, DocumentSpan, Range, annotate, truncate};
pub use catalog::{TranslationCatalog, TranslationSet, TranslationSets};
pub use classify::{MatchClass, classify};
pub use path::normalize_path;
pub use position::{LineIndex, Position, PositionMapper};
pub use scanner::{ScanOutput, scan, scan_text};
