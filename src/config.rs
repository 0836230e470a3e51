use std::{
    collections::HashSet,
    fmt, fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".arbgenrc.json";

/// Placeholder substituted with a locale's suffix in `inputFileName`.
pub const SUFFIX_VAR: &str = "{suffix}";

/// Placeholder substituted with a locale's tag in `outputFileName`.
pub const LOCALE_VAR: &str = "{locale}";

/// A source locale: `suffix` picks the input file, `locale` is written to
/// `@@locale` and the output file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LocaleEntryRepr")]
pub struct LocaleEntry {
    pub suffix: String,
    pub locale: String,
}

/// Config files may list a locale as `"en"` or `{"suffix": "en", "locale": "en_US"}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum LocaleEntryRepr {
    Tag(String),
    Full { suffix: String, locale: String },
}

impl From<LocaleEntryRepr> for LocaleEntry {
    fn from(repr: LocaleEntryRepr) -> Self {
        match repr {
            LocaleEntryRepr::Tag(tag) => LocaleEntry::same(tag),
            LocaleEntryRepr::Full { suffix, locale } => LocaleEntry { suffix, locale },
        }
    }
}

impl LocaleEntry {
    pub fn new(suffix: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
            locale: locale.into(),
        }
    }

    /// Entry whose suffix equals its tag.
    pub fn same(tag: impl Into<String>) -> Self {
        let tag = tag.into();
        Self {
            suffix: tag.clone(),
            locale: tag,
        }
    }
}

/// Parses `en` or `en=en_US` (suffix=tag), as accepted by `--locales`.
impl FromStr for LocaleEntry {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let entry = match s.split_once('=') {
            Some((suffix, locale)) => LocaleEntry::new(suffix.trim(), locale.trim()),
            None => LocaleEntry::same(s.trim()),
        };
        if entry.suffix.is_empty() || entry.locale.is_empty() {
            bail!("Invalid locale \"{}\": expected TAG or SUFFIX=TAG", s);
        }
        Ok(entry)
    }
}

impl fmt::Display for LocaleEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.suffix == self.locale {
            write!(f, "{}", self.locale)
        } else {
            write!(f, "{}={}", self.suffix, self.locale)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_locales")]
    pub locales: Vec<LocaleEntry>,
    #[serde(default = "default_template_locale")]
    pub template_locale: String,
    #[serde(default = "default_input_dir")]
    pub input_dir: String,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    #[serde(default = "default_input_file_name")]
    pub input_file_name: String,
    #[serde(default = "default_output_file_name")]
    pub output_file_name: String,
}

fn default_locales() -> Vec<LocaleEntry> {
    ["es", "en", "fr", "pt", "de", "it"]
        .into_iter()
        .map(LocaleEntry::same)
        .collect()
}

fn default_template_locale() -> String {
    "en".to_string()
}

fn default_input_dir() -> String {
    "lib/core/localization".to_string()
}

fn default_output_dir() -> String {
    "lib/l10n".to_string()
}

fn default_input_file_name() -> String {
    format!("app_localizations_{}.dart", SUFFIX_VAR)
}

fn default_output_file_name() -> String {
    format!("app_{}.arb", LOCALE_VAR)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locales: default_locales(),
            template_locale: default_template_locale(),
            input_dir: default_input_dir(),
            output_dir: default_output_dir(),
            input_file_name: default_input_file_name(),
            output_file_name: default_output_file_name(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Duplicate locale tags are rejected since they would write the same
    /// output file twice.
    pub fn validate(&self) -> Result<()> {
        if self.locales.is_empty() {
            bail!("'locales' must list at least one locale");
        }

        let mut seen = HashSet::new();
        for entry in &self.locales {
            if entry.suffix.is_empty() || entry.locale.is_empty() {
                bail!("Locale entries need a non-empty suffix and locale: \"{}\"", entry);
            }
            if !seen.insert(entry.locale.as_str()) {
                bail!("Duplicate locale in 'locales': \"{}\"", entry.locale);
            }
        }

        if self.template_locale.is_empty() {
            bail!("'templateLocale' must not be empty");
        }
        if !self.input_file_name.contains(SUFFIX_VAR) {
            bail!(
                "'inputFileName' must contain {}: \"{}\"",
                SUFFIX_VAR,
                self.input_file_name
            );
        }
        if !self.output_file_name.contains(LOCALE_VAR) {
            bail!(
                "'outputFileName' must contain {}: \"{}\"",
                LOCALE_VAR,
                self.output_file_name
            );
        }

        Ok(())
    }

    pub fn is_template(&self, locale: &str) -> bool {
        locale == self.template_locale
    }

    pub fn input_file_for(&self, entry: &LocaleEntry) -> String {
        self.input_file_name.replace(SUFFIX_VAR, &entry.suffix)
    }

    pub fn output_file_for(&self, entry: &LocaleEntry) -> String {
        self.output_file_name.replace(LOCALE_VAR, &entry.locale)
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
        if config_path.exists() {
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
}

impl ConfigLoadResult {
    /// Directory holding the loaded config file.
    pub fn config_dir(&self) -> Option<&Path> {
        self.path.as_deref().and_then(Path::parent)
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
