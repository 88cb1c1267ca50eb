//! Annotation payloads built from a classified literal.

use serde::Serialize;

use crate::config::DecorationConfig;
use crate::core::classify::MatchClass;
use crate::core::position::Position;

/// Prefix of the inline text rendered after an exact match.
pub const INLINE_PREFIX: &str = " \u{2022} "; // " • "

/// Hover prefix for partial matches.
pub const PARTIAL_HOVER_PREFIX: &str = "Translations available: ";

/// Half-open byte range `[start, end)` of a literal's content, quotes excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct DocumentSpan {
    pub start: usize,
    pub end: usize,
}

impl DocumentSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Start and end positions of a span in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

/// Which output layer an annotation belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnnotationKind {
    Translation,
    Partial,
    PotentialIdentifier,
}

impl AnnotationKind {
    /// True for kinds that go to the translation layer.
    pub fn is_translation_layer(self) -> bool {
        matches!(self, AnnotationKind::Translation | AnnotationKind::Partial)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AnnotationKind::Translation => "translation",
            AnnotationKind::Partial => "partial",
            AnnotationKind::PotentialIdentifier => "potential",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Annotation {
    pub kind: AnnotationKind,
    pub span: DocumentSpan,
    pub range: Range,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_text: Option<String>,
}

/// Shorten `s` to `max_len` characters, the last three being `...`.
///
/// Strings that fit are returned unchanged. Counts characters, not bytes.
/// `max_len` below 2 is rejected when the configuration is loaded.
///
/// # Examples
///
/// ```
/// use lingua::core::truncate;
///
/// assert_eq!(truncate("Hello", 80), "Hello");
/// assert_eq!(truncate("Hello world", 6), "Hello...");
/// ```
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let head: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}...", head)
    } else {
        s.to_string()
    }
}

/// Build the annotation for a classified literal, or `None` for [`MatchClass::None`].
pub fn annotate(
    class: &MatchClass,
    path: &str,
    span: DocumentSpan,
    range: Range,
    config: &DecorationConfig,
) -> Option<Annotation> {
    let max_len = config.max_translation_length;

    let (kind, hover_text, inline_text) = match class {
        MatchClass::Exact(text) => {
            let display = truncate(text, max_len);
            let inline = config
                .show_inline_translation
                .then(|| format!("{}{}", INLINE_PREFIX, display));
            (AnnotationKind::Translation, Some(display), inline)
        }
        MatchClass::Partial => {
            let display = truncate(path, max_len);
            let hover = format!("{}{} ...", PARTIAL_HOVER_PREFIX, display);
            (AnnotationKind::Partial, Some(hover), None)
        }
        MatchClass::Potential => (AnnotationKind::PotentialIdentifier, None, None),
        MatchClass::None => return None,
    };

    Some(Annotation {
        kind,
        span,
        range,
        hover_text,
        inline_text,
    })
}
