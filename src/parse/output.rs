use crate::suggestion::{Suggestion, SuggestionKind};

/// Lines of tool output that carry no data.
///
/// Blank and whitespace-only lines are always skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkipRule {
    /// Banner lines, compared against the whole line (e.g. `List of branches:`).
    pub headers: Vec<String>,
    /// Glyphs that, at the start of a trimmed line, mark a hint rather than a row (e.g. `➜`).
    pub marker_glyphs: Vec<String>,
}

impl SkipRule {
    pub fn skips(&self, line: &str) -> bool {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return true;
        }
        if self.headers.iter().any(|h| h == line) {
            return true;
        }
        self.marker_glyphs
            .iter()
            .any(|g| !g.is_empty() && trimmed.starts_with(g.as_str()))
    }
}

/// How to turn one command's text output into suggestions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseConfig {
    /// Argv the host runs to produce the output.
    pub command: Vec<String>,
    /// Appended to every parsed name.
    pub suffix: String,
    /// Description stamped on every suggestion.
    pub label: String,
    /// Output starting with this prefix is a failure report. Empty disables the check.
    pub error_sentinel: String,
    pub skip: SkipRule,
    /// Marker for the currently selected row (`*` in `gl branch`). First occurrence is removed.
    pub selection_marker: Option<String>,
}

impl ParseConfig {
    fn is_failure(&self, raw: &str) -> bool {
        !self.error_sentinel.is_empty() && raw.starts_with(self.error_sentinel.as_str())
    }

    /// Extract the name from a data line, suffix included.
    pub fn line_name(&self, line: &str) -> String {
        let unmarked = match self.selection_marker {
            Some(ref m) if !m.is_empty() => line.replacen(m.as_str(), "", 1),
            _ => line.to_string(),
        };
        let head = unmarked.split('(').next().unwrap_or_default();
        let mut name = head.trim().to_string();
        name.push_str(&self.suffix);
        name
    }
}

/// Parse raw command output into value suggestions, in output order.
///
/// Output beginning with the error sentinel yields nothing. Leftover text is
/// not validated: a line that reduces to punctuation is still suggested.
pub fn parse(raw: &str, config: &ParseConfig) -> Vec<Suggestion> {
    if config.is_failure(raw) {
        log::debug!(
            "output: sentinel {:?} hit for {:?}",
            config.error_sentinel,
            config.command
        );
        return Vec::new();
    }

    let suggestions: Vec<Suggestion> = raw
        .lines()
        .filter(|line| !config.skip.skips(line))
        .filter_map(|line| {
            let name = config.line_name(line);
            if name.is_empty() {
                log::trace!("output: line {line:?} left no name");
                return None;
            }
            Some(Suggestion::new(name, SuggestionKind::Value).with_description(&config.label))
        })
        .collect();

    log::debug!(
        "output: {} suggestion(s) from {:?}",
        suggestions.len(),
        config.command
    );
    suggestions
}
