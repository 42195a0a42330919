use crate::config::{Config, ScriptOptions};
use crate::error::{Error, Result};
use crate::generators::{Generator, GeneratorInput, GeneratorSource};
use crate::parse::{self, ParseConfig, SkipRule};
use crate::suggestion::Suggestion;

/// Parses the captured output of an external command (`gl branch`, `gl remote`, ...).
pub struct ScriptGenerator {
    config: ParseConfig,
}

impl ScriptGenerator {
    pub fn new(config: ParseConfig) -> Self {
        Self { config }
    }

    /// Build from config. Fails if the script does not split into argv.
    pub fn from_options(name: &str, options: &ScriptOptions, config: &Config) -> Result<Self> {
        let command = parse::tokenize(&options.script).ok_or_else(|| Error::InvalidScript {
            generator: name.to_string(),
            script: options.script.clone(),
        })?;

        Ok(Self::new(ParseConfig {
            command,
            suffix: options.suffix.clone(),
            label: options.label.clone(),
            error_sentinel: config.sentinel_for(options).to_string(),
            skip: SkipRule {
                headers: options.headers.clone(),
                marker_glyphs: options.marker_glyphs.clone(),
            },
            selection_marker: options.selection_marker.clone(),
        }))
    }

    pub fn parse_config(&self) -> &ParseConfig {
        &self.config
    }
}

impl Generator for ScriptGenerator {
    fn source(&self) -> GeneratorSource<'_> {
        GeneratorSource::Script(&self.config.command)
    }

    fn generate(&self, input: &GeneratorInput) -> Vec<Suggestion> {
        match input {
            GeneratorInput::Output(raw) => parse::parse(raw, &self.config),
            GeneratorInput::Template(_) => {
                log::debug!("script: got a template listing, expected command output");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generator(name: &str) -> ScriptGenerator {
        let config = Config::default_config();
        ScriptGenerator::from_options(name, &config.scripts[name], &config).unwrap()
    }

    #[test]
    fn branches_from_default_config() {
        let g = generator("branches");
        assert!(matches!(g.source(), GeneratorSource::Script(argv) if argv == ["gl", "branch"]));
        let out = g.generate(&GeneratorInput::Output(
            "List of branches:\n  ➜ Tracked branch is marked with a '*'\n    * master (upstream is origin/master)\n      feature\n",
        ));
        let names: Vec<&str> = out.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["master", "feature"]);
        assert_eq!(out[0].description.as_deref(), Some("Branch"));
    }

    #[test]
    fn remote_refs_get_slash() {
        let g = generator("remote-refs");
        let out = g.generate(&GeneratorInput::Output("List of remotes:\n  origin\n"));
        assert_eq!(out[0].name, "origin/");
    }

    #[test]
    fn inherits_settings_sentinel() {
        let g = generator("remotes");
        assert_eq!(g.parse_config().error_sentinel, "fatal:");
        assert!(
            g.generate(&GeneratorInput::Output("fatal: not in a gl repository"))
                .is_empty()
        );
    }

    #[test]
    fn bad_script_is_reported() {
        let config = Config::default_config();
        let options = ScriptOptions {
            script: "gl 'branch".into(),
            ..config.scripts["branches"].clone()
        };
        let err = ScriptGenerator::from_options("oops", &options, &config)
            .err()
            .unwrap();
        assert!(matches!(err, Error::InvalidScript { ref generator, .. } if generator == "oops"));
    }

    #[test]
    fn template_input_yields_nothing() {
        let g = generator("branches");
        assert!(g.generate(&GeneratorInput::Template(&[])).is_empty());
    }
}
