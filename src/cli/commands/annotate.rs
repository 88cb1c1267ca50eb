use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use colored::Colorize;
use rayon::prelude::*;
use serde::Serialize;

use super::helper::{display_path, load_catalog, workspace_root};
use crate::cli::args::{AnnotateCommand, OutputFormat};
use crate::cli::exit_status::ExitStatus;
use crate::cli::report;
use crate::config::{DecorationConfig, load_config};
use crate::core::{ScanOutput, TranslationSet, files::scan_files, scan_text, style};

/// Scan result of one source file.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotatedFile {
    /// Path as shown to the user.
    pub file: String,
    /// Source text, kept only when the file is rendered as text with annotations.
    #[serde(skip)]
    pub text: String,
    #[serde(flatten)]
    pub output: ScanOutput,
}

pub fn annotate(cmd: AnnotateCommand) -> Result<ExitStatus> {
    let start_dir = workspace_root(&cmd.common)?;
    let loaded = load_config(&start_dir)?;

    let decoration = decoration_overrides(loaded.config.decoration, &cmd);
    decoration.validate()?;

    let catalog = load_catalog(&loaded, cmd.lang.as_deref())?;

    let paths: Vec<PathBuf> = if cmd.files.is_empty() {
        let scanned = scan_files(
            &loaded.root,
            &loaded.config.analysis_extensions,
            &loaded.config.ignores,
            cmd.common.verbose,
        );
        scanned.files.into_iter().collect()
    } else {
        cmd.files.clone()
    };

    // Scanning is independent per file; collect keeps the input order.
    let results: Vec<Result<AnnotatedFile>> = paths
        .par_iter()
        .map(|path| annotate_file(path, &loaded.root, &catalog, &decoration, cmd.format))
        .collect();

    let mut files = Vec::with_capacity(results.len());
    let mut unreadable = 0usize;
    for result in results {
        match result {
            Ok(file) => files.push(file),
            Err(e) => {
                unreadable += 1;
                eprintln!("{} {:#}", "warning:".bold().yellow(), e);
            }
        }
    }

    match cmd.format {
        OutputFormat::Text => {
            let styles = style::init();
            report::report(&files, &styles);
            style::dispose();
        }
        OutputFormat::Json => report::report_json_to(&files, &mut std::io::stdout().lock())?,
    }

    log_catalog(&catalog, files.len());

    if unreadable > 0 {
        Ok(ExitStatus::Error)
    } else {
        Ok(ExitStatus::Success)
    }
}

fn annotate_file(
    path: &Path,
    root: &Path,
    catalog: &TranslationSet,
    decoration: &DecorationConfig,
    format: OutputFormat,
) -> Result<AnnotatedFile> {
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let output = scan_text(&text, catalog, decoration);

    let text = if format == OutputFormat::Text && !output.is_empty() {
        text
    } else {
        String::new()
    };

    Ok(AnnotatedFile {
        file: display_path(path, root),
        text,
        output,
    })
}

/// Apply command-line flags on top of the configured decoration settings.
fn decoration_overrides(mut decoration: DecorationConfig, cmd: &AnnotateCommand) -> DecorationConfig {
    if cmd.show_potential {
        decoration.show_potential_identifiers = true;
    }
    if cmd.no_inline {
        decoration.show_inline_translation = false;
    }
    if let Some(max_length) = cmd.max_length {
        decoration.max_translation_length = max_length;
    }
    decoration
}

fn log_catalog(catalog: &TranslationSet, files: usize) {
    tracing::debug!(
        lang = %catalog.lang,
        entries = catalog.len(),
        files,
        "annotation finished"
    );
}
