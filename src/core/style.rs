//! Decoration styles for the two annotation layers.
//!
//! Styles are registered once per process with [`init`] and referenced through
//! [`StyleHandle`]s afterwards. [`dispose`] drops them; handles issued before a
//! dispose no longer resolve, even after a later `init`.

use std::sync::{Mutex, PoisonError};

use serde::Serialize;

/// Colour token hosts use for inline translation text.
pub const INLINE_COLOR_TOKEN: &str = "lingua.lookupColor";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum UnderlineKind {
    Solid,
    Wavy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecorationStyle {
    pub name: &'static str,
    pub underline: UnderlineKind,
    /// Underline colour as `#rrggbb`.
    pub color: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_color: Option<&'static str>,
}

impl DecorationStyle {
    pub fn translation() -> Self {
        Self {
            name: "translation",
            underline: UnderlineKind::Solid,
            color: "#494949",
            inline_color: Some(INLINE_COLOR_TOKEN),
        }
    }

    pub fn potential_identifier() -> Self {
        Self {
            name: "potential-identifier",
            underline: UnderlineKind::Wavy,
            color: "#b7950b",
            inline_color: None,
        }
    }

    /// CSS-like `text-decoration` value, e.g. `underline #b7950b wavy`.
    pub fn text_decoration(&self) -> String {
        match self.underline {
            UnderlineKind::Solid => format!("underline {}", self.color),
            UnderlineKind::Wavy => format!("underline {} wavy", self.color),
        }
    }

    /// Parse `color` into RGB components.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        let hex = self.color.strip_prefix('#')?;
        if hex.len() != 6 {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        Some((channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Opaque reference to a registered style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleHandle {
    generation: u64,
    index: usize,
}

/// Handles of the two built-in layer styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecorationStyles {
    pub translation: StyleHandle,
    pub potential_identifier: StyleHandle,
}

/// Style storage with an explicit init/dispose lifecycle.
#[derive(Debug, Default)]
pub struct StyleRegistry {
    generation: u64,
    styles: Vec<DecorationStyle>,
    builtin: Option<DecorationStyles>,
}

impl StyleRegistry {
    pub const fn new() -> Self {
        Self {
            generation: 0,
            styles: Vec::new(),
            builtin: None,
        }
    }

    /// Register the built-in styles, or return them if already registered.
    pub fn init(&mut self) -> DecorationStyles {
        if let Some(builtin) = self.builtin {
            return builtin;
        }

        let builtin = DecorationStyles {
            translation: self.register(DecorationStyle::translation()),
            potential_identifier: self.register(DecorationStyle::potential_identifier()),
        };
        self.builtin = Some(builtin);
        builtin
    }

    pub fn register(&mut self, style: DecorationStyle) -> StyleHandle {
        self.styles.push(style);
        StyleHandle {
            generation: self.generation,
            index: self.styles.len() - 1,
        }
    }

    pub fn resolve(&self, handle: StyleHandle) -> Option<&DecorationStyle> {
        if handle.generation != self.generation {
            return None;
        }
        self.styles.get(handle.index)
    }

    /// Drop every style and invalidate all issued handles.
    pub fn dispose(&mut self) {
        self.styles.clear();
        self.builtin = None;
        self.generation += 1;
    }

    pub fn is_initialized(&self) -> bool {
        self.builtin.is_some()
    }
}

static REGISTRY: Mutex<StyleRegistry> = Mutex::new(StyleRegistry::new());

/// Register the built-in styles in the process-wide registry.
pub fn init() -> DecorationStyles {
    REGISTRY
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .init()
}

pub fn resolve(handle: StyleHandle) -> Option<DecorationStyle> {
    REGISTRY
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .resolve(handle)
        .cloned()
}

pub fn dispose() {
    REGISTRY
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .dispose();
}
