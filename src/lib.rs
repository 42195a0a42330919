//! gl-suggest: suggestion generators for Gitless (`gl`) command-line completion.
//!
//! A completion engine owns parsing, rendering and running commands. This
//! crate only turns what the engine collected into suggestions:
//! [`filter::filter`] keeps the entries of a `filepaths` template listing that
//! match a [`filter::FilterConfig`], and [`parse::parse`] turns the captured
//! output of a command such as `gl branch` into named values. Both are pure.
//!
//! # Architecture
//!
//! - **[`suggestion`]**: suggestion and template-entry types.
//! - **[`filter`]**: Filepath filter: folder policy, name rules, compound extensions.
//! - **[`parse`]**: Command-output parser and script tokenizer.
//! - **[`generators`]**: Named generators and the registry built from config.
//! - **[`config`]**: Configuration loading: embedded defaults + user overlay merge.
//! - **[`logging`]**: File logging to `~/.local/share/gl-suggest/gl-suggest.log`.

/// Configuration types, loading, and overlay merge logic.
pub mod config;
/// Errors raised around the core (config, requests).
pub mod error;
/// Filepath suggestion filter.
pub mod filter;
/// Named generators and their registry.
pub mod generators;
/// File-based logging.
pub mod logging;
/// Command-output parsing and script tokenizing.
pub mod parse;
/// Suggestion and template-entry types.
pub mod suggestion;

pub use error::{Error, Result};
pub use suggestion::{EntryKind, Suggestion, SuggestionKind, TemplateEntry};

use generators::{Collected, GeneratorRegistry};

/// Build the registry from default config and run the named generators.
///
/// This is the main entry point for tests and simple usage.
/// For CLI usage with the user config, build the registry directly.
pub fn suggest<S: AsRef<str>>(generators: &[S], collected: &Collected) -> Result<Vec<Suggestion>> {
    let config = config::Config::default_config();
    let registry = GeneratorRegistry::from_config(&config)?;
    registry.suggest_all(generators, collected)
}
