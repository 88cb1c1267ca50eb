use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use colored::Colorize;

use crate::cli::args::CommonArgs;
use crate::config::{CONFIG_FILE_NAME, ConfigLoadResult, TranslationFile};
use crate::core::{
    TranslationSet, TranslationSets,
    parsers::json::parse_json_file,
};

/// Directory the `.lingua` lookup starts from.
pub fn workspace_root(common: &CommonArgs) -> Result<PathBuf> {
    match &common.root {
        Some(root) => {
            if !root.is_dir() {
                bail!("Root directory '{}' does not exist.", root.display());
            }
            Ok(root.clone())
        }
        None => env::current_dir().context("Failed to determine the current directory"),
    }
}

/// Load every configured translation file.
pub fn load_translation_sets(loaded: &ConfigLoadResult) -> Result<TranslationSets> {
    let mut sets = TranslationSets::new();
    for file in &loaded.config.translation_files {
        let set = parse_json_file(&loaded.resolve(file), &file.lang)?;
        tracing::debug!(lang = %file.lang, entries = set.len(), "loaded translation file");
        sets.insert(set);
    }
    Ok(sets)
}

/// Load the catalog to annotate with.
///
/// Without any configured translation file this warns and returns an empty
/// set, which makes every scan a no-op.
pub fn load_catalog(loaded: &ConfigLoadResult, lang: Option<&str>) -> Result<TranslationSet> {
    if loaded.config.translation_files.is_empty() {
        print_no_translation_files_warning();
        return Ok(TranslationSet::default());
    }

    let sets = load_translation_sets(loaded)?;
    match sets.select(lang, &loaded.config.default_language) {
        Some(set) => Ok(set.clone()),
        None => bail!(
            "No translation file configured for language '{}'. Configured: {}",
            lang.unwrap_or_default(),
            sets.languages().join(", ")
        ),
    }
}

/// Pick the translation file entry for a language, with the same fallbacks as
/// [`TranslationSets::select`].
pub fn select_translation_file<'a>(
    loaded: &'a ConfigLoadResult,
    lang: Option<&str>,
) -> Result<&'a TranslationFile> {
    let files = &loaded.config.translation_files;
    if files.is_empty() {
        bail!(
            "No translation file configured in {}.\n\
             Hint: Register one with `lingua select-locale <FILE> --locale <LANG>`.",
            CONFIG_FILE_NAME
        );
    }

    let by_lang = |lang: &str| files.iter().find(|f| f.lang == lang);
    let selected = match lang {
        Some(lang) => by_lang(lang),
        None => by_lang(&loaded.config.default_language).or_else(|| files.first()),
    };

    selected.with_context(|| {
        format!(
            "No translation file configured for language '{}'",
            lang.unwrap_or_default()
        )
    })
}

/// Path shown to the user: relative to `root` when below it.
pub fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}

fn print_no_translation_files_warning() {
    eprintln!(
        "{} No translation file is configured in {}. To use lingua, register one with {}",
        "warning:".bold().yellow(),
        CONFIG_FILE_NAME,
        "lingua select-locale <FILE> --locale <LANG>".cyan()
    );
}
