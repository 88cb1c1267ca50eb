//! Lingua - translation path annotations for source files
//!
//! Lingua finds quoted dotted literals such as `'greeting.hello'` in source text,
//! looks them up in a translation catalog and describes how an editor should
//! decorate them: the translated value for exact matches, a hint for partial
//! matches, and an optional marker for paths that match nothing.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: `.lingua` configuration loading, validation and saving
//! - `core`: Annotation engine, catalog and its loaders

pub mod cli;
pub mod config;
pub mod core;
