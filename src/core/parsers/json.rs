use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde_json::Value;

use crate::core::{
    catalog::TranslationSet,
    position::{LineIndex, PositionMapper},
};

/// Load a locale JSON file into a translation set for `lang`.
pub fn parse_json_file(path: &Path, lang: &str) -> Result<TranslationSet> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read translation file: {:?}", path))?;

    parse_json_str(&content, lang)
        .with_context(|| format!("Failed to parse translation file: {:?}", path))
}

pub fn parse_json_str(content: &str, lang: &str) -> Result<TranslationSet> {
    let json: Value = serde_json::from_str(content)?;

    let mut set = TranslationSet::new(lang);
    flatten_json(&json, String::new(), &mut set);
    Ok(set)
}

/// Flatten nested objects into dotted paths.
///
/// Arrays are expanded with their indices (`faq.items.0.question`). Only string
/// leaves become translations.
fn flatten_json(value: &Value, prefix: String, result: &mut TranslationSet) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                flatten_json(val, join_key(&prefix, key), result);
            }
        }
        Value::Array(arr) => {
            for (index, val) in arr.iter().enumerate() {
                flatten_json(val, join_key(&prefix, &index.to_string()), result);
            }
        }
        Value::String(s) => result.insert(prefix, s.clone()),
        _ => {}
    }
}

fn join_key(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

/// Find the 1-based line where a dotted key is declared in JSON text.
///
/// Segment `k` only matches a key at nesting depth `k + 1` inside the object
/// opened by segment `k - 1`, so `Common.submit` finds the `"submit"` directly
/// under `"Common"` rather than one under a nested or sibling object. Only
/// quoted strings followed by `:` count as keys. Returns `None` when a segment
/// cannot be found.
pub fn find_key_line(content: &str, key_path: &str) -> Option<usize> {
    if key_path.is_empty() {
        return None;
    }

    let segments: Vec<&str> = key_path.split('.').collect();
    let bytes = content.as_bytes();
    let mut matched = 0;
    let mut depth = 0usize;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'"' => {
                let end = string_end(bytes, i)?;
                let after = content[end..].trim_start();

                if depth == matched + 1
                    && content[i + 1..end - 1] == *segments[matched]
                    && after.starts_with(':')
                {
                    matched += 1;
                    if matched == segments.len() {
                        return Some(LineIndex::new(content).offset_to_position(i).line + 1);
                    }
                    // Only an object value can hold the next segment.
                    if !after[1..].trim_start().starts_with('{') {
                        return None;
                    }
                }
                i = end;
                continue;
            }
            b'{' | b'[' => depth += 1,
            b'}' | b']' => {
                // Leaving the object of the last matched segment.
                if matched > 0 && depth == matched + 1 {
                    return None;
                }
                depth = depth.saturating_sub(1);
            }
            _ => {}
        }
        i += 1;
    }

    None
}

/// Offset just past the closing quote of the string starting at `start`.
fn string_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return Some(i + 1),
            _ => i += 1,
        }
    }
    None
}
