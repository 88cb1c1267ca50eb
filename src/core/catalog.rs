//! Read-only lookup over known translation paths.
//!
//! The scanner only talks to the [`TranslationCatalog`] trait. [`TranslationSet`]
//! is the in-memory implementation built from one language's message file, and
//! [`TranslationSets`] groups the sets of every configured language.

use std::collections::{BTreeMap, HashMap, HashSet};

/// Query interface the scanner uses to classify a path.
///
/// Implementations are queried many times per scan and, when files are scanned
/// in parallel, from several threads at once. They must not change observable
/// state while being queried.
pub trait TranslationCatalog {
    /// True when the catalog holds no translation at all.
    fn is_empty(&self) -> bool;

    /// Translated text stored exactly at `path`.
    fn lookup_exact(&self, path: &str) -> Option<&str>;

    /// True if `path` is a prefix of stored keys but has no value of its own.
    fn is_partial_prefix(&self, path: &str) -> bool;
}

/// Flattened translations of a single language.
#[derive(Debug, Clone, Default)]
pub struct TranslationSet {
    pub lang: String,
    entries: BTreeMap<String, String>,
    /// Every strict segment prefix of every key (`a`, `a.b` for `a.b.c`).
    prefixes: HashSet<String>,
}

impl TranslationSet {
    pub fn new(lang: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            entries: BTreeMap::new(),
            prefixes: HashSet::new(),
        }
    }

    /// Insert a translation at a dotted path, replacing any previous value.
    pub fn insert(&mut self, path: impl Into<String>, value: impl Into<String>) {
        let path = path.into();
        if path.is_empty() {
            return;
        }

        for (idx, _) in path.match_indices('.') {
            self.prefixes.insert(path[..idx].to_string());
        }
        self.entries.insert(path, value.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn contains_key(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    /// Iterate over `(path, value)` pairs in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TranslationSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut set = TranslationSet::default();
        for (path, value) in iter {
            set.insert(path, value);
        }
        set
    }
}

impl TranslationCatalog for TranslationSet {
    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn lookup_exact(&self, path: &str) -> Option<&str> {
        if path.is_empty() {
            return None;
        }
        self.entries.get(path).map(String::as_str)
    }

    fn is_partial_prefix(&self, path: &str) -> bool {
        !path.is_empty() && self.prefixes.contains(path) && !self.entries.contains_key(path)
    }
}

/// Translation sets keyed by language tag.
#[derive(Debug, Default)]
pub struct TranslationSets {
    sets: HashMap<String, TranslationSet>,
    /// Languages in the order they were added.
    order: Vec<String>,
}

impl TranslationSets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, set: TranslationSet) {
        if !self.sets.contains_key(&set.lang) {
            self.order.push(set.lang.clone());
        }
        self.sets.insert(set.lang.clone(), set);
    }

    pub fn get(&self, lang: &str) -> Option<&TranslationSet> {
        self.sets.get(lang)
    }

    pub fn languages(&self) -> &[String] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Pick the set to annotate with.
    ///
    /// Tries `requested`, then `default_language`, then the first language added.
    /// An explicitly requested language that is not loaded yields `None`.
    pub fn select(&self, requested: Option<&str>, default_language: &str) -> Option<&TranslationSet> {
        if let Some(lang) = requested {
            return self.get(lang);
        }
        if !default_language.is_empty()
            && let Some(set) = self.get(default_language)
        {
            return Some(set);
        }
        self.order.first().and_then(|lang| self.get(lang))
    }
}
