//! Arbgen - Dart localization constants to Flutter ARB bundles
//!
//! Arbgen reads `static const String` declarations from per-locale Dart
//! classes and writes one ARB file per locale for `flutter gen-l10n`. The
//! template locale also gets `@key` placeholder metadata.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, commands, reporting)
//! - `config`: Configuration file loading and parsing
//! - `core`: Extraction, bundle generation and writing

pub mod cli;
pub mod config;
pub mod core;
