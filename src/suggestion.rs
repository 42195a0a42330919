//! Types shared by the filepath filter and the command-output parser.

use serde::{Deserialize, Serialize};

/// What a suggestion stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    File,
    Folder,
    /// A value parsed out of external command output (branch, remote, ...).
    Value,
}

impl SuggestionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SuggestionKind::File => "file",
            SuggestionKind::Folder => "folder",
            SuggestionKind::Value => "value",
        }
    }
}

/// Kind of an entry in the host's directory listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Folder,
}

impl From<EntryKind> for SuggestionKind {
    fn from(kind: EntryKind) -> Self {
        match kind {
            EntryKind::File => SuggestionKind::File,
            EntryKind::Folder => SuggestionKind::Folder,
        }
    }
}

/// One record of the host's `filepaths` template listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateEntry {
    pub name: String,
    pub kind: EntryKind,
}

impl TemplateEntry {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
        }
    }

    pub fn folder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Folder,
        }
    }
}

/// A single candidate completion handed back to the host engine.
///
/// `None` in any optional field means "use the engine default". Those fields
/// are omitted from the serialized form: the engine treats an explicit value
/// as an override, so `None` must never turn into `null` or `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Text inserted on the command line.
    pub name: String,
    pub kind: SuggestionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ranking hint; higher sorts first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Suggestion {
    /// A bare suggestion with every optional field left to the engine.
    pub fn new(name: impl Into<String>, kind: SuggestionKind) -> Self {
        Self {
            name: name.into(),
            kind,
            description: None,
            priority: None,
            icon: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl From<TemplateEntry> for Suggestion {
    fn from(entry: TemplateEntry) -> Self {
        Suggestion::new(entry.name, entry.kind.into())
    }
}
