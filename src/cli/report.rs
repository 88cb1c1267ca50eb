//! Terminal rendering of annotation layers.
//!
//! Annotations are printed cargo-style: a header, a clickable location and the
//! source line with the literal underlined in its layer's decoration style.
//! Inline text follows the underline; hover text is shown as a note.

use std::io::{self, Write};

use colored::{ColoredString, Colorize};
use unicode_width::UnicodeWidthStr;

use super::commands::annotate::AnnotatedFile;
use crate::core::{
    Annotation, AnnotationKind, LineIndex,
    style::{self, DecorationStyles, UnderlineKind},
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print the annotations of every file followed by a summary.
pub fn report(files: &[AnnotatedFile], styles: &DecorationStyles) {
    report_to(files, styles, &mut io::stdout().lock());
}

/// Print annotations to a custom writer.
pub fn report_to<W: Write>(files: &[AnnotatedFile], styles: &DecorationStyles, writer: &mut W) {
    for file in files {
        print_file(file, styles, writer);
    }
    print_summary(files, writer);
}

/// Print both annotation layers as JSON.
pub fn report_json_to<W: Write>(files: &[AnnotatedFile], writer: &mut W) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, files)?;
    writeln!(writer)?;
    Ok(())
}

fn print_file<W: Write>(file: &AnnotatedFile, styles: &DecorationStyles, writer: &mut W) {
    if file.output.is_empty() {
        return;
    }

    let lines = LineIndex::new(&file.text);
    let max_line_width = file
        .output
        .iter_by_position()
        .map(|a| a.range.start.line + 1)
        .max()
        .map(|n| n.to_string().len())
        .unwrap_or(1);

    for annotation in file.output.iter_by_position() {
        print_annotation(file, annotation, &lines, styles, writer, max_line_width);
    }
}

fn print_annotation<W: Write>(
    file: &AnnotatedFile,
    annotation: &Annotation,
    lines: &LineIndex<'_>,
    styles: &DecorationStyles,
    writer: &mut W,
    max_line_width: usize,
) {
    let start = annotation.range.start;
    let literal = &file.text[annotation.span.start..annotation.span.end];

    let label = match annotation.kind {
        AnnotationKind::Translation => "translation".bold().green(),
        AnnotationKind::Partial => "partial".bold().cyan(),
        AnnotationKind::PotentialIdentifier => "potential".bold().yellow(),
    };
    let _ = writeln!(writer, "{}: \"{}\"", label, literal);

    // Clickable location: --> path:line:col
    let _ = writeln!(
        writer,
        "  {} {}:{}:{}",
        "-->".blue(),
        file.file,
        start.line + 1,
        start.column + 1
    );

    let source_line = lines.line_text(start.line).unwrap_or_default();
    let _ = writeln!(
        writer,
        "{:>width$} {}",
        "",
        "|".blue(),
        width = max_line_width
    );
    let _ = writeln!(
        writer,
        "{:>width$} {} {}",
        (start.line + 1).to_string().blue(),
        "|".blue(),
        source_line,
        width = max_line_width
    );

    let prefix: String = source_line.chars().take(start.column).collect();
    let padding = UnicodeWidthStr::width(prefix.as_str());
    let inline = annotation
        .inline_text
        .as_deref()
        .map(|text| text.dimmed().to_string())
        .unwrap_or_default();
    let _ = writeln!(
        writer,
        "{:>width$} {} {:>padding$}{}{}",
        "",
        "|".blue(),
        "",
        underline(annotation, styles),
        inline,
        width = max_line_width,
        padding = padding
    );

    if let Some(hover) = &annotation.hover_text {
        let _ = writeln!(
            writer,
            "{:>width$} {} {} {}",
            "",
            "=".blue(),
            "hover:".bold(),
            hover,
            width = max_line_width
        );
    }

    let _ = writeln!(writer);
}

/// Underline the literal in the style registered for its layer.
fn underline(annotation: &Annotation, styles: &DecorationStyles) -> ColoredString {
    let handle = if annotation.kind.is_translation_layer() {
        styles.translation
    } else {
        styles.potential_identifier
    };
    let width = annotation.span.len().max(1);

    match style::resolve(handle) {
        Some(style) => {
            let marker = match style.underline {
                UnderlineKind::Solid => "^",
                UnderlineKind::Wavy => "~",
            };
            let carets = marker.repeat(width);
            match style.rgb() {
                Some((r, g, b)) => carets.truecolor(r, g, b),
                None => carets.normal(),
            }
        }
        None => "^".repeat(width).normal(),
    }
}

fn print_summary<W: Write>(files: &[AnnotatedFile], writer: &mut W) {
    let translations: usize = files
        .iter()
        .map(|f| f.output.translation_annotations.len())
        .sum();
    let potential: usize = files
        .iter()
        .map(|f| f.output.potential_annotations.len())
        .sum();

    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Scanned {} {}: {} {}, {} potential {}",
            files.len(),
            if files.len() == 1 { "file" } else { "files" },
            translations,
            if translations == 1 {
                "translation"
            } else {
                "translations"
            },
            potential,
            if potential == 1 {
                "identifier"
            } else {
                "identifiers"
            }
        )
        .green()
    );
}
