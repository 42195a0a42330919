//! Filepath suggestion filter.
//!
//! Takes the entries the host engine's `filepaths` template already listed and
//! keeps the ones a [`FilterConfig`] accepts. The rules are an ordered,
//! short-circuiting OR:
//!
//! 1. folder policy (final for folders when not [`FolderPolicy::FilterLikeFiles`])
//! 2. exact name in `equals`
//! 3. `matches` pattern
//! 4. `includes` substring
//! 5. extension stack in `extensions` (see [`extension::stacks`])
//!
//! Accepted entries then receive the per-kind priority/icon overrides.

/// Compound file-extension matching.
pub mod extension;

use std::collections::HashSet;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::suggestion::{EntryKind, Suggestion, TemplateEntry};

/// How folders are treated by the filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FolderPolicy {
    /// Folders go through the same name rules as files.
    #[default]
    #[serde(rename = "filter")]
    FilterLikeFiles,
    /// Every folder is suggested, whatever its name.
    #[serde(rename = "always")]
    AlwaysAccept,
    /// No folder is ever suggested.
    #[serde(rename = "never")]
    NeverAccept,
}

/// Display overrides for one suggestion kind. Unset fields stay unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotation {
    pub priority: Option<i32>,
    pub icon: Option<String>,
}

/// Overrides applied to accepted entries, keyed by entry kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotate {
    pub file: Annotation,
    pub folder: Annotation,
}

impl Annotate {
    fn for_kind(&self, kind: EntryKind) -> &Annotation {
        match kind {
            EntryKind::File => &self.file,
            EntryKind::Folder => &self.folder,
        }
    }
}

/// Declarative filter for one filepath-completing argument.
///
/// With nothing configured, files are rejected and folders are filtered like
/// files (and so rejected too).
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    pub extensions: HashSet<String>,
    pub includes: Option<String>,
    pub equals: HashSet<String>,
    pub matches: Option<Regex>,
    pub folder_policy: FolderPolicy,
    pub annotate: Option<Annotate>,
}

impl FilterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept names whose suffix stack is one of `extensions`. Empty strings are ignored.
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions.extend(
            extensions
                .into_iter()
                .map(Into::into)
                .filter(|e: &String| !e.is_empty()),
        );
        self
    }

    /// Accept names containing `needle`. An empty needle is treated as unset.
    pub fn includes(mut self, needle: impl Into<String>) -> Self {
        let needle = needle.into();
        self.includes = (!needle.is_empty()).then_some(needle);
        self
    }

    pub fn equals<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.equals.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn matches(mut self, pattern: Regex) -> Self {
        self.matches = Some(pattern);
        self
    }

    pub fn folder_policy(mut self, policy: FolderPolicy) -> Self {
        self.folder_policy = policy;
        self
    }

    pub fn annotate(mut self, annotate: Annotate) -> Self {
        self.annotate = Some(annotate);
        self
    }

    /// Whether `entry` survives the filter.
    pub fn accepts(&self, entry: &TemplateEntry) -> bool {
        let name = entry.name.as_str();

        if entry.kind == EntryKind::Folder && self.folder_policy != FolderPolicy::FilterLikeFiles {
            return self.folder_policy == FolderPolicy::AlwaysAccept;
        }
        if self.equals.contains(name) {
            return true;
        }
        if let Some(ref re) = self.matches
            && re.is_match(name)
        {
            return true;
        }
        if let Some(ref needle) = self.includes
            && name.contains(needle.as_str())
        {
            return true;
        }
        extension::matches(name, &self.extensions)
    }

    /// Turn an accepted entry into a suggestion carrying the overrides for its kind.
    pub fn annotate_entry(&self, entry: TemplateEntry) -> Suggestion {
        let kind = entry.kind;
        let mut suggestion = Suggestion::from(entry);
        if let Some(ref annotate) = self.annotate {
            let a = annotate.for_kind(kind);
            suggestion.priority = a.priority;
            suggestion.icon = a.icon.clone();
        }
        suggestion
    }
}

/// Filter `entries` through `config`, preserving their relative order.
pub fn filter(entries: &[TemplateEntry], config: &FilterConfig) -> Vec<Suggestion> {
    let accepted: Vec<Suggestion> = entries
        .iter()
        .filter(|entry| {
            let ok = config.accepts(entry);
            if !ok {
                log::trace!("filepaths: rejected {} ({:?})", entry.name, entry.kind);
            }
            ok
        })
        .cloned()
        .map(|entry| config.annotate_entry(entry))
        .collect();

    log::debug!(
        "filepaths: accepted {} of {} entries",
        accepted.len(),
        entries.len()
    );
    accepted
}
