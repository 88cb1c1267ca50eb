//! Translation file parsers.
//!
//! - `json`: nested locale JSON files flattened into dotted paths

pub mod json;
