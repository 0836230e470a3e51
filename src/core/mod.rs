//! Conversion engine.
//!
//! - `extract`: Dart string constants -> ordered `StringTable`
//! - `bundle`: `StringTable` -> ARB `Bundle` (placeholder metadata for the template locale)
//! - `writer`: `Bundle` -> pretty JSON file
//! - `pipeline`: per-locale jobs built from `Config`

pub mod bundle;
pub mod extract;
pub mod pipeline;
pub mod writer;

pub use bundle::{Bundle, generate_bundle};
pub use extract::{StringTable, extract_file, extract_strings};
pub use pipeline::{
    ConvertedLocale, Converter, LocaleJob, LocaleOutcome, PreparedLocale, SkipReason,
};
pub use writer::{BundleWriter, WriteAction};
