use regex::Regex;

use crate::config::FilepathsOptions;
use crate::error::{Error, Result};
use crate::filter::{self, Annotate, Annotation, FilterConfig};
use crate::generators::{Generator, GeneratorInput, GeneratorSource};
use crate::suggestion::Suggestion;

/// Filters the host's `filepaths` template listing.
pub struct FilepathsGenerator {
    config: FilterConfig,
}

impl FilepathsGenerator {
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    /// Build from config. Fails only if `matches` is not a valid regex.
    pub fn from_options(name: &str, options: &FilepathsOptions) -> Result<Self> {
        let mut config = FilterConfig::new()
            .extensions(options.extensions.iter().cloned())
            .equals(options.equals.iter().cloned())
            .folder_policy(options.suggest_folders);

        if let Some(ref needle) = options.includes {
            config = config.includes(needle.clone());
        }
        if let Some(ref pattern) = options.matches {
            let re = Regex::new(pattern).map_err(|source| Error::InvalidPattern {
                generator: name.to_string(),
                source,
            })?;
            config = config.matches(re);
        }
        if options.priorities.is_some() || options.icons.is_some() {
            let priorities = options.priorities.as_ref();
            let icons = options.icons.as_ref();
            config = config.annotate(Annotate {
                file: Annotation {
                    priority: priorities.and_then(|p| p.file),
                    icon: icons.and_then(|i| i.file.clone()),
                },
                folder: Annotation {
                    priority: priorities.and_then(|p| p.folder),
                    icon: icons.and_then(|i| i.folder.clone()),
                },
            });
        }

        Ok(Self::new(config))
    }

    pub fn filter_config(&self) -> &FilterConfig {
        &self.config
    }
}

impl Generator for FilepathsGenerator {
    fn source(&self) -> GeneratorSource<'_> {
        GeneratorSource::Template
    }

    fn generate(&self, input: &GeneratorInput) -> Vec<Suggestion> {
        match input {
            GeneratorInput::Template(entries) => filter::filter(entries, &self.config),
            GeneratorInput::Output(_) => {
                log::debug!("filepaths: got command output, expected a template listing");
                Vec::new()
            }
        }
    }
}
