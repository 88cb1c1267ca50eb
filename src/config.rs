use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const CONFIG_FILE_NAME: &str = ".lingua";

/// Smallest accepted `maxTranslationLength`; below this a truncated value is
/// nothing but the ellipsis.
pub const MIN_TRANSLATION_LENGTH: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// File extensions scanned when no explicit files are given.
    #[serde(default = "default_analysis_extensions")]
    pub analysis_extensions: Vec<String>,
    #[serde(default)]
    pub translation_files: Vec<TranslationFile>,
    /// Language annotated by default. Empty means the first translation file.
    #[serde(default)]
    pub default_language: String,
    #[serde(default = "default_ignores")]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub decoration: DecorationConfig,
    /// Keys lingua does not read, written back unchanged on save.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A locale file and the language it holds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TranslationFile {
    #[serde(alias = "locale")]
    pub lang: String,
    /// Path relative to the directory containing the config file.
    #[serde(alias = "uri")]
    pub path: String,
}

/// How annotations are rendered. Passed unchanged to every scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecorationConfig {
    /// Append the translation after exact matches.
    #[serde(default = "default_show_inline_translation")]
    pub show_inline_translation: bool,
    /// Characters after which hover and inline text are truncated.
    #[serde(default = "default_max_translation_length")]
    pub max_translation_length: usize,
    /// Underline quoted paths that match nothing in the catalog.
    #[serde(default, alias = "showPotentialIdentifieres")]
    pub show_potential_identifiers: bool,
}

fn default_analysis_extensions() -> Vec<String> {
    ["ts", "html"].map(String::from).to_vec()
}

fn default_ignores() -> Vec<String> {
    vec!["**/node_modules/**".to_string()]
}

fn default_show_inline_translation() -> bool {
    true
}

fn default_max_translation_length() -> usize {
    80
}

impl Default for DecorationConfig {
    fn default() -> Self {
        Self {
            show_inline_translation: default_show_inline_translation(),
            max_translation_length: default_max_translation_length(),
            show_potential_identifiers: false,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analysis_extensions: default_analysis_extensions(),
            translation_files: Vec::new(),
            default_language: String::new(),
            ignores: default_ignores(),
            decoration: DecorationConfig::default(),
            extra: Map::new(),
        }
    }
}

impl DecorationConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_translation_length < MIN_TRANSLATION_LENGTH {
            bail!(
                "Invalid 'maxTranslationLength': {} (must be at least {})",
                self.max_translation_length,
                MIN_TRANSLATION_LENGTH
            );
        }
        Ok(())
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Rejects a too small `maxTranslationLength`, empty or dotted extensions,
    /// translation files without a language and invalid glob patterns in `ignores`.
    pub fn validate(&self) -> Result<()> {
        self.decoration.validate()?;

        for ext in &self.analysis_extensions {
            if ext.is_empty() || ext.starts_with('.') {
                bail!(
                    "Invalid extension in 'analysisExtensions': \"{}\" (use e.g. \"ts\", without a dot)",
                    ext
                );
            }
        }

        for file in &self.translation_files {
            if file.lang.trim().is_empty() {
                bail!(
                    "Translation file \"{}\" in 'translationFiles' has no language",
                    file.path
                );
            }
        }

        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        Ok(())
    }

    /// Add a translation file, replacing the entry for the same language.
    ///
    /// Returns true if an existing entry was replaced.
    pub fn register_translation_file(&mut self, lang: &str, path: &str) -> bool {
        let entry = TranslationFile {
            lang: lang.to_string(),
            path: path.to_string(),
        };

        match self.translation_files.iter_mut().find(|f| f.lang == lang) {
            Some(existing) => {
                *existing = entry;
                true
            }
            None => {
                self.translation_files.push(entry);
                false
            }
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.is_file() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    pub config: Config,
    /// Config file that was loaded, `None` when using defaults.
    pub path: Option<PathBuf>,
    /// Directory translation file paths are relative to.
    pub root: PathBuf,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }

    /// Where the config file is, or would be written.
    pub fn config_path(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| self.root.join(CONFIG_FILE_NAME))
    }

    pub fn resolve(&self, file: &TranslationFile) -> PathBuf {
        self.root.join(&file.path)
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {:?}", path))?;

            let root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| start_dir.to_path_buf());
            tracing::debug!(path = %path.display(), "loaded config");

            Ok(ConfigLoadResult {
                config,
                path: Some(path),
                root,
            })
        }
        None => {
            tracing::debug!("no {} found, using defaults", CONFIG_FILE_NAME);
            Ok(ConfigLoadResult {
                config: Config::default(),
                path: None,
                root: start_dir.to_path_buf(),
            })
        }
    }
}

pub fn save_config(path: &Path, config: &Config) -> Result<()> {
    let json = serde_json::to_string_pretty(config).context("Failed to serialize config.")?;
    fs::write(path, format!("{}\n", json))
        .with_context(|| format!("Failed to write config file: {:?}", path))?;
    Ok(())
}
