//! ARB bundle generation.
//!
//! An ARB file is a flat JSON object:
//!
//! ```json
//! {
//!   "@@locale": "en",
//!   "greeting": "Hello, {name}!",
//!   "@greeting": {
//!     "placeholders": {
//!       "name": {
//!         "type": "String"
//!       }
//!     }
//!   }
//! }
//! ```
//!
//! `@key` metadata is only written for the template locale, which
//! `flutter gen-l10n` treats as the source of truth for message signatures.

use std::sync::LazyLock;

use anyhow::{Context, Result, bail};
use regex::Regex;
use serde_json::{Map, Value, json};

use super::extract::StringTable;

pub const LOCALE_KEY: &str = "@@locale";

/// Type written for every detected placeholder.
pub const PLACEHOLDER_TYPE: &str = "String";

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\w+)\}").unwrap());

/// One locale's ARB document, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct Bundle {
    data: Map<String, Value>,
}

impl Bundle {
    pub fn new(locale: &str) -> Self {
        let mut data = Map::new();
        data.insert(LOCALE_KEY.to_string(), Value::String(locale.to_string()));
        Self { data }
    }

    /// Parse a serialized bundle. The root must be an object with `@@locale`.
    pub fn from_json(content: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(content).context("Failed to parse ARB JSON")?;
        let Value::Object(data) = value else {
            bail!("Root of ARB file must be an object");
        };
        if !data.get(LOCALE_KEY).is_some_and(Value::is_string) {
            bail!("ARB file has no string \"{}\" entry", LOCALE_KEY);
        }
        Ok(Self { data })
    }

    pub fn locale(&self) -> &str {
        self.data
            .get(LOCALE_KEY)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.data.get(key)
    }

    /// Number of entries, metadata included.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: `@@locale` is present from construction.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Translatable keys, skipping `@@locale` and `@key` metadata.
    pub fn message_keys(&self) -> impl Iterator<Item = &str> {
        self.data
            .keys()
            .filter(|k| !k.starts_with('@'))
            .map(String::as_str)
    }

    /// Keys that carry a `@key` placeholder entry.
    pub fn placeholder_keys(&self) -> Vec<&str> {
        self.data
            .keys()
            .filter(|k| !k.starts_with("@@"))
            .filter_map(|k| k.strip_prefix('@'))
            .collect()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.data
    }

    /// Pretty JSON with 2-space indentation and a trailing newline.
    /// Non-ASCII characters are written as-is.
    pub fn to_pretty_json(&self) -> Result<String> {
        let content =
            serde_json::to_string_pretty(&self.data).context("Failed to serialize ARB JSON")?;
        Ok(format!("{}\n", content))
    }

    fn insert_message(&mut self, key: &str, value: &str) {
        self.data
            .insert(key.to_string(), Value::String(value.to_string()));
    }

    fn insert_placeholders(&mut self, key: &str, names: &[&str]) {
        let placeholders: Map<String, Value> = names
            .iter()
            .map(|name| (name.to_string(), json!({ "type": PLACEHOLDER_TYPE })))
            .collect();
        self.data.insert(
            format!("@{}", key),
            json!({ "placeholders": Value::Object(placeholders) }),
        );
    }
}

/// Build the ARB document for one locale.
///
/// With `is_template`, each value containing `{token}` markers is followed by
/// its `@key` placeholder description.
pub fn generate_bundle(strings: &StringTable, locale: &str, is_template: bool) -> Bundle {
    let mut bundle = Bundle::new(locale);

    for (key, value) in strings.iter() {
        bundle.insert_message(key, value);

        if is_template {
            let names = find_placeholders(value);
            if !names.is_empty() {
                bundle.insert_placeholders(key, &names);
            }
        }
    }

    bundle
}

/// Placeholder names in first-seen order, without duplicates.
pub fn find_placeholders(value: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for caps in PLACEHOLDER_REGEX.captures_iter(value) {
        let name = caps.get(1).map_or("", |m| m.as_str());
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
}
