use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::filter::FolderPolicy;

/// Embedded default configuration.
const DEFAULT_CONFIG: &str = include_str!("../config.default.toml");

/// Environment variable naming an alternative user config file.
pub const CONFIG_ENV_VAR: &str = "GL_SUGGEST_CONFIG";

// ── Final (merged) config types ──

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
    /// Script generators by name.
    #[serde(default)]
    pub scripts: BTreeMap<String, ScriptOptions>,
    /// Filepath generators by name.
    #[serde(default)]
    pub filepaths: BTreeMap<String, FilepathsOptions>,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Settings {
    /// Sentinel used by script generators that do not set their own.
    #[serde(default)]
    pub error_sentinel: String,
}

/// A generator that parses the output of an external command.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ScriptOptions {
    /// Command line, split into argv with shell quoting rules.
    pub script: String,
    /// Description attached to every suggestion.
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub suffix: String,
    /// Overrides `settings.error_sentinel`.
    #[serde(default)]
    pub error_sentinel: Option<String>,
    /// Banner lines to skip.
    #[serde(default)]
    pub headers: Vec<String>,
    /// Lines starting with one of these (after trimming) are hints, not data.
    #[serde(default)]
    pub marker_glyphs: Vec<String>,
    #[serde(default)]
    pub selection_marker: Option<String>,
}

/// Per-kind values for filepath annotations.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PerKind<T> {
    #[serde(default, alias = "files")]
    pub file: Option<T>,
    #[serde(default)]
    pub folder: Option<T>,
}

/// A generator that filters the host's `filepaths` template listing.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct FilepathsOptions {
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub includes: Option<String>,
    #[serde(default)]
    pub equals: Vec<String>,
    /// Regular expression, matched anywhere in the name.
    #[serde(default)]
    pub matches: Option<String>,
    #[serde(default)]
    pub suggest_folders: FolderPolicy,
    #[serde(default)]
    pub priorities: Option<PerKind<i32>>,
    #[serde(default)]
    pub icons: Option<PerKind<String>>,
}

// ── Overlay types (user config that merges with defaults) ──

#[derive(Debug, Deserialize, Default)]
struct ConfigOverlay {
    #[serde(default)]
    settings: SettingsOverlay,
    #[serde(default)]
    scripts: SectionOverlay<ScriptOptions>,
    #[serde(default)]
    filepaths: SectionOverlay<FilepathsOptions>,
}

#[derive(Debug, Deserialize, Default)]
struct SettingsOverlay {
    error_sentinel: Option<String>,
}

/// A `[scripts]` or `[filepaths]` section of the overlay.
#[derive(Debug, Deserialize)]
struct SectionOverlay<T> {
    #[serde(default)]
    replace: bool,
    #[serde(default)]
    remove: Vec<String>,
    #[serde(flatten)]
    entries: BTreeMap<String, T>,
}

impl<T> Default for SectionOverlay<T> {
    fn default() -> Self {
        Self {
            replace: false,
            remove: Vec::new(),
            entries: BTreeMap::new(),
        }
    }
}

// ── Merge logic ──

/// Merge a user section into a default section.
/// In replace mode: user entries replace the defaults entirely.
/// In merge mode: remove names first, then insert user entries (same name wins).
fn merge_section<T>(base: &mut BTreeMap<String, T>, overlay: SectionOverlay<T>) {
    if overlay.replace {
        base.clear();
    } else {
        for name in &overlay.remove {
            base.remove(name);
        }
    }
    base.extend(overlay.entries);
}

impl Config {
    /// Load the default embedded configuration.
    pub fn default_config() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config must parse")
    }

    /// Defaults with the overlay in `toml_str` applied.
    pub fn with_overlay_str(toml_str: &str) -> Result<Self> {
        let overlay: ConfigOverlay = toml::from_str(toml_str)?;
        let mut config = Self::default_config();
        config.apply_overlay(overlay);
        Ok(config)
    }

    /// Load configuration with resolution order:
    /// 1. Start with embedded defaults
    /// 2. Merge the user overlay from `$GL_SUGGEST_CONFIG` or
    ///    `~/.config/gl-suggest/config.toml` (if it exists)
    ///
    /// An overlay that does not parse is logged and ignored.
    pub fn load() -> Self {
        let Some(path) = Self::overlay_path() else {
            return Self::default_config();
        };
        let Ok(content) = std::fs::read_to_string(&path) else {
            return Self::default_config();
        };
        match Self::with_overlay_str(&content) {
            Ok(config) => {
                log::debug!("config: applied overlay {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("config: ignoring {}: {e}", path.display());
                eprintln!("gl-suggest: {}: {e}", path.display());
                Self::default_config()
            }
        }
    }

    /// Where the user overlay is read from. `~` and `$VARS` in the env override are expanded.
    fn overlay_path() -> Option<PathBuf> {
        if let Some(raw) = std::env::var_os(CONFIG_ENV_VAR) {
            let raw = raw.to_string_lossy().into_owned();
            return match shellexpand::full(&raw) {
                Ok(expanded) => Some(PathBuf::from(expanded.into_owned())),
                Err(e) => {
                    log::warn!("config: cannot expand {CONFIG_ENV_VAR}={raw}: {e}");
                    None
                }
            };
        }
        let path = shellexpand::tilde("~/.config/gl-suggest/config.toml");
        if path.starts_with('~') {
            return None;
        }
        Some(PathBuf::from(path.into_owned()))
    }

    /// Apply an overlay on top of this config (merge semantics).
    fn apply_overlay(&mut self, overlay: ConfigOverlay) {
        if let Some(v) = overlay.settings.error_sentinel {
            self.settings.error_sentinel = v;
        }
        merge_section(&mut self.scripts, overlay.scripts);
        merge_section(&mut self.filepaths, overlay.filepaths);
    }

    /// The sentinel a script generator actually uses.
    pub fn sentinel_for<'a>(&'a self, options: &'a ScriptOptions) -> &'a str {
        options
            .error_sentinel
            .as_deref()
            .unwrap_or(&self.settings.error_sentinel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_parses() {
        let config = Config::default_config();
        assert!(!config.scripts.is_empty());
        assert!(!config.filepaths.is_empty());
        assert_eq!(config.settings.error_sentinel, "fatal:");
    }

    #[test]
    fn default_config_has_gl_generators() {
        let config = Config::default_config();
        let branches = &config.scripts["branches"];
        assert_eq!(branches.script, "gl branch");
        assert_eq!(branches.label, "Branch");
        assert_eq!(branches.selection_marker.as_deref(), Some("*"));
        assert_eq!(branches.headers, vec!["List of branches:"]);

        assert_eq!(config.scripts["remotes"].suffix, "");
        assert_eq!(config.scripts["remote-refs"].suffix, "/");
        assert!(config.scripts["remotes"].selection_marker.is_none());

        let files = &config.filepaths["files"];
        assert_eq!(files.suggest_folders, FolderPolicy::AlwaysAccept);
        assert_eq!(files.matches.as_deref(), Some(".*"));
    }

    #[test]
    fn sentinel_falls_back_to_settings() {
        let config = Config::default_config();
        assert_eq!(config.sentinel_for(&config.scripts["branches"]), "fatal:");
        let own = ScriptOptions {
            error_sentinel: Some("error:".into()),
            ..config.scripts["branches"].clone()
        };
        assert_eq!(config.sentinel_for(&own), "error:");
    }

    // ── Merge semantics ──

    #[test]
    fn overlay_adds_generator() {
        let config = Config::with_overlay_str(
            r#"
            [scripts.tags]
            script = "gl tag"
            label = "Tag"
        "#,
        )
        .unwrap();
        assert_eq!(config.scripts["tags"].label, "Tag");
        // Defaults still present
        assert!(config.scripts.contains_key("branches"));
    }

    #[test]
    fn overlay_same_name_replaces_generator() {
        let config = Config::with_overlay_str(
            r#"
            [scripts.branches]
            script = "gl branch -r"
            label = "Any branch"
        "#,
        )
        .unwrap();
        let b = &config.scripts["branches"];
        assert_eq!(b.script, "gl branch -r");
        // Whole table replaced, not merged field by field
        assert!(b.headers.is_empty());
        assert!(b.selection_marker.is_none());
    }

    #[test]
    fn overlay_removes_generator() {
        let config = Config::with_overlay_str(
            r#"
            [scripts]
            remove = ["remote-refs"]
        "#,
        )
        .unwrap();
        assert!(!config.scripts.contains_key("remote-refs"));
        assert!(config.scripts.contains_key("remotes"));
    }

    #[test]
    fn overlay_replace_section() {
        let config = Config::with_overlay_str(
            r#"
            [filepaths]
            replace = true

            [filepaths.archives]
            extensions = ["tar.gz", "zip"]
            suggest_folders = "never"
            priorities = { files = 80 }
        "#,
        )
        .unwrap();
        assert_eq!(config.filepaths.len(), 1);
        let a = &config.filepaths["archives"];
        assert_eq!(a.extensions, vec!["tar.gz", "zip"]);
        assert_eq!(a.suggest_folders, FolderPolicy::NeverAccept);
        assert_eq!(
            a.priorities,
            Some(PerKind {
                file: Some(80),
                folder: None
            })
        );
        // Other sections untouched
        assert!(config.scripts.contains_key("branches"));
    }

    #[test]
    fn overlay_settings() {
        let config = Config::with_overlay_str(
            r#"
            [settings]
            error_sentinel = "error:"
        "#,
        )
        .unwrap();
        assert_eq!(config.settings.error_sentinel, "error:");
    }

    #[test]
    fn overlay_omitted_settings_unchanged() {
        let config = Config::with_overlay_str(
            r#"
            [scripts]
            remove = ["remotes"]
        "#,
        )
        .unwrap();
        assert_eq!(config.settings.error_sentinel, "fatal:");
    }

    #[test]
    fn overlay_bad_folder_policy_is_error() {
        let result = Config::with_overlay_str(
            r#"
            [filepaths.x]
            suggest_folders = "sometimes"
        "#,
        );
        assert!(matches!(result, Err(crate::error::Error::Config(_))));
    }

    #[test]
    fn empty_overlay_changes_nothing() {
        let original = Config::default_config();
        let config = Config::with_overlay_str("").unwrap();
        assert_eq!(config.scripts, original.scripts);
        assert_eq!(config.filepaths, original.filepaths);
    }
}
