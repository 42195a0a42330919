/// Split a configured script string into argv using shlex (POSIX word splitting).
///
/// Returns `None` for unbalanced quoting or a script with no words: a broken
/// script in config should be reported, not guessed at.
pub fn tokenize(script: &str) -> Option<Vec<String>> {
    let words = shlex::split(script)?;
    if words.is_empty() {
        return None;
    }
    Some(words)
}

/// Render argv back into a single shell-quoted line for display.
pub fn display(argv: &[String]) -> String {
    shlex::try_join(argv.iter().map(String::as_str)).unwrap_or_else(|_| argv.join(" "))
}
