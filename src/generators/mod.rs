//! Named suggestion generators.
//!
//! A generator is either template-driven (the host lists a directory and the
//! generator filters it) or script-driven (the host runs a command and the
//! generator parses its output). [`GeneratorRegistry`] builds one boxed
//! [`Generator`] per configured name.

/// Template-driven generator wrapping the filepath filter.
pub mod filepaths;
/// Script-driven generator wrapping the command-output parser.
pub mod script;

pub use filepaths::FilepathsGenerator;
pub use script::ScriptGenerator;

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::suggestion::{Suggestion, TemplateEntry};

/// What the host collected for a generator.
#[derive(Debug, Clone, Copy)]
pub enum GeneratorInput<'a> {
    /// Entries from the `filepaths` template.
    Template(&'a [TemplateEntry]),
    /// Captured stdout of the generator's script, or its sentinel-prefixed error text.
    Output(&'a str),
}

/// What the host must collect before calling a generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorSource<'a> {
    Template,
    /// Run this argv and capture its output verbatim.
    Script(&'a [String]),
}

/// Trait for suggestion generators.
///
/// Implementations are pure: all I/O happens in the host before `generate`.
pub trait Generator: Send + Sync {
    fn source(&self) -> GeneratorSource<'_>;

    /// Produce suggestions from the collected input. Input of the wrong shape yields nothing.
    fn generate(&self, input: &GeneratorInput) -> Vec<Suggestion>;
}

/// Everything the host collected for one completion request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Collected {
    /// The `filepaths` listing, shared by every template generator.
    #[serde(default)]
    pub entries: Option<Vec<TemplateEntry>>,
    /// Captured output per script generator name.
    #[serde(default)]
    pub output: BTreeMap<String, String>,
}

/// Registry of all generators, keyed by name.
pub struct GeneratorRegistry {
    generators: BTreeMap<String, Box<dyn Generator>>,
}

impl GeneratorRegistry {
    /// Build the registry from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut generators: BTreeMap<String, Box<dyn Generator>> = BTreeMap::new();

        for (name, options) in &config.scripts {
            let g = ScriptGenerator::from_options(name, options, config)?;
            generators.insert(name.clone(), Box::new(g));
        }

        // Filepath generators override a script generator of the same name
        for (name, options) in &config.filepaths {
            let g = FilepathsGenerator::from_options(name, options)?;
            if generators.insert(name.clone(), Box::new(g)).is_some() {
                log::warn!("generator `{name}` defined as both script and filepaths; using filepaths");
            }
        }

        log::debug!("registry: {} generator(s)", generators.len());
        Ok(Self { generators })
    }

    /// Look up a generator by name.
    pub fn get(&self, name: &str) -> Option<&dyn Generator> {
        self.generators.get(name).map(|b| b.as_ref())
    }

    /// All generators in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn Generator)> {
        self.generators
            .iter()
            .map(|(name, g)| (name.as_str(), g.as_ref()))
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Run one generator on already-collected input.
    pub fn suggest(&self, name: &str, input: &GeneratorInput) -> Result<Vec<Suggestion>> {
        let g = self
            .get(name)
            .ok_or_else(|| Error::UnknownGenerator(name.to_string()))?;
        Ok(g.generate(input))
    }

    /// Run several generators and concatenate their suggestions in `names` order.
    ///
    /// A generator whose input was not collected contributes nothing.
    pub fn suggest_all<S: AsRef<str>>(
        &self,
        names: &[S],
        collected: &Collected,
    ) -> Result<Vec<Suggestion>> {
        let mut suggestions = Vec::new();
        for name in names {
            let name = name.as_ref();
            let g = self
                .get(name)
                .ok_or_else(|| Error::UnknownGenerator(name.to_string()))?;

            let produced = match g.source() {
                GeneratorSource::Template => match collected.entries {
                    Some(ref entries) => g.generate(&GeneratorInput::Template(entries)),
                    None => {
                        log::debug!("{name}: no template listing collected");
                        continue;
                    }
                },
                GeneratorSource::Script(_) => match collected.output.get(name) {
                    Some(raw) => g.generate(&GeneratorInput::Output(raw)),
                    None => {
                        log::debug!("{name}: no command output collected");
                        continue;
                    }
                },
            };
            suggestions.extend(produced);
        }
        Ok(suggestions)
    }
}
