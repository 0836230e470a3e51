//! String constant extraction from Dart localization classes.
//!
//! Localization sources look like:
//!
//! ```dart
//! class AppLocalizationsEn {
//!   static const String greeting = 'Hello, {name}!';
//!   static const String longText = 'First part '
//!       'second part';
//! }
//! ```
//!
//! Declarations are matched with a regex instead of a Dart parser. The input
//! grammar is narrow, and anything the pattern does not recognize is skipped.
//! Escapes other than `\'` are kept as written, so `"Say \"hi\""` extracts
//! as `Say \"hi\"`.

use std::{collections::HashMap, fs, path::Path, sync::LazyLock};

use anyhow::{Context, Result};
use regex::Regex;

/// `static const String <ident> = '<value>';` with either quote style.
/// The literal may only cross a line at a closing-quote/newline/reopening-quote
/// join, so an unterminated literal never swallows the next declaration.
/// Group 2 holds single-quoted bodies, group 3 double-quoted ones.
static DECLARATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"static const String (\w+) =\s*"#,
        r#"(?:'((?:[^'\\\n]|\\.|'[ \t\r]*\n\s*')*)'"#,
        r#"|"((?:[^"\\\n]|\\.|"[ \t\r]*\n\s*")*)");"#,
    ))
    .unwrap()
});

/// Adjacent literals split over lines: `'Hello '\n    'World'`.
static CONTINUATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"['"][ \t\r]*\n\s*['"]"#).unwrap());

/// Ordered identifier -> text mapping of one source file.
///
/// Re-inserting an identifier keeps its first position and replaces the value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringTable {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl StringTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous one if the identifier existed.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos].1, value)),
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StringTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut table = StringTable::new();
        for (key, value) in iter {
            table.insert(key, value);
        }
        table
    }
}

/// Extract all string constants from Dart source text.
pub fn extract_strings(content: &str) -> StringTable {
    let mut table = StringTable::new();

    for caps in DECLARATION_REGEX.captures_iter(content) {
        let Some(body) = caps.get(2).or_else(|| caps.get(3)) else {
            continue;
        };
        table.insert(&caps[1], normalize_literal(body.as_str()));
    }

    table
}

/// Read a Dart file and extract its string constants.
pub fn extract_file(path: &Path) -> Result<StringTable> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    Ok(extract_strings(&content))
}

/// Unescape `\'` and stitch adjacent literal fragments.
fn normalize_literal(raw: &str) -> String {
    let unescaped = raw.replace("\\'", "'");
    CONTINUATION_REGEX.replace_all(&unescaped, "").into_owned()
}
