use std::fs;

use anyhow::{Context, Result};
use colored::Colorize;

use super::helper::{display_path, select_translation_file, workspace_root};
use crate::cli::args::LocateCommand;
use crate::cli::exit_status::ExitStatus;
use crate::config::load_config;
use crate::core::{
    TranslationCatalog, normalize_path,
    parsers::json::{find_key_line, parse_json_str},
};

/// Where a key is declared in a translation file.
#[derive(Debug, PartialEq, Eq)]
pub struct KeyLocation {
    pub line: usize,
    /// Translated value, `None` for a key that only groups other keys.
    pub value: Option<String>,
}

pub fn locate(cmd: LocateCommand) -> Result<ExitStatus> {
    let start_dir = workspace_root(&cmd.common)?;
    let loaded = load_config(&start_dir)?;
    let file = select_translation_file(&loaded, cmd.lang.as_deref())?;

    let path = loaded.resolve(file);
    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read translation file: {:?}", path))?;

    let key = normalize_path(&cmd.key);
    let shown = display_path(&path, &loaded.root);

    let location = locate_key(&content, &file.lang, &key)
        .with_context(|| format!("Failed to parse translation file: {:?}", path))?;

    match location {
        Some(location) => {
            println!("{}:{}", shown, location.line);
            if let Some(value) = location.value {
                println!("  {} {} {}", "=".blue(), "value:".bold(), value);
            }
            Ok(ExitStatus::Success)
        }
        None => {
            eprintln!(
                "{} Key \"{}\" not found in {}",
                "error:".bold().red(),
                key,
                shown
            );
            Ok(ExitStatus::Failure)
        }
    }
}

/// Find `key` in the JSON text of a translation file.
///
/// Keys that have a value and keys that prefix other keys are both found.
pub fn locate_key(content: &str, lang: &str, key: &str) -> Result<Option<KeyLocation>> {
    let set = parse_json_str(content, lang)?;

    let value = set.lookup_exact(key).map(str::to_string);
    if value.is_none() && !set.is_partial_prefix(key) {
        return Ok(None);
    }

    Ok(Some(KeyLocation {
        line: find_key_line(content, key).unwrap_or(1),
        value,
    }))
}
