use std::{fs, path::Path};

use anyhow::{Context, Result, bail};
use colored::Colorize;

use super::helper::workspace_root;
use crate::cli::args::SelectLocaleCommand;
use crate::cli::exit_status::ExitStatus;
use crate::cli::report::SUCCESS_MARK;
use crate::config::{CONFIG_FILE_NAME, load_config, save_config};
use crate::core::parsers::json::parse_json_file;

pub fn select_locale(cmd: SelectLocaleCommand) -> Result<ExitStatus> {
    let locale = cmd.locale.trim();
    if locale.is_empty() {
        bail!("Locale must not be empty (e.g. 'de' or 'en')");
    }

    let start_dir = workspace_root(&cmd.common)?;
    let mut loaded = load_config(&start_dir)?;

    if !cmd.file.is_file() {
        bail!("Translation file '{}' does not exist.", cmd.file.display());
    }
    // Refuse files the catalog could not load later on.
    let set = parse_json_file(&cmd.file, locale)?;

    let relative = relative_to_root(&cmd.file, &loaded.root)?;
    let replaced = loaded.config.register_translation_file(locale, &relative);

    let config_path = loaded.config_path();
    save_config(&config_path, &loaded.config)?;

    tracing::debug!(entries = set.len(), replaced, "registered translation file");
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "{} {} as '{}' translation file in {}",
            if replaced { "Updated" } else { "Registered" },
            relative,
            locale,
            CONFIG_FILE_NAME
        )
        .green()
    );

    Ok(ExitStatus::Success)
}

/// Path of `file` relative to `root`, or absolute when it lies outside.
fn relative_to_root(file: &Path, root: &Path) -> Result<String> {
    let file = fs::canonicalize(file)
        .with_context(|| format!("Failed to resolve path: {}", file.display()))?;
    let root = fs::canonicalize(root)
        .with_context(|| format!("Failed to resolve path: {}", root.display()))?;

    let path = file.strip_prefix(&root).unwrap_or(&file);
    Ok(path.to_string_lossy().replace('\\', "/"))
}
