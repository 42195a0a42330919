use std::collections::HashSet;

/// Dot-delimited suffix stacks of `name`, shortest first.
///
/// Segments start after the first dot that is not the leading character and
/// are grown right-to-left with their dots kept: `a.tar.gz` yields `gz`, then
/// `tar.gz`. Names with no dot after their first character (`README`,
/// `.bashrc`) yield nothing.
pub fn stacks(name: &str) -> impl Iterator<Item = &str> {
    let rest = name
        .char_indices()
        .skip(1)
        .find(|&(_, c)| c == '.')
        .map(|(i, _)| &name[i + 1..]);

    rest.into_iter().flat_map(|rest| {
        rest.rmatch_indices('.')
            .map(move |(i, _)| &rest[i + 1..])
            .chain(std::iter::once(rest))
    })
}

/// Whether any suffix stack of `name` is listed in `extensions`. Case-sensitive.
pub fn matches(name: &str, extensions: &HashSet<String>) -> bool {
    if extensions.is_empty() {
        return false;
    }
    stacks(name).any(|stack| extensions.contains(stack))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(name: &str) -> Vec<&str> {
        stacks(name).collect()
    }

    fn set(exts: &[&str]) -> HashSet<String> {
        exts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn single_extension() {
        assert_eq!(collect("main.rs"), vec!["rs"]);
    }

    #[test]
    fn compound_extension_grows_right_to_left() {
        assert_eq!(collect("archive.tar.gz"), vec!["gz", "tar.gz"]);
        assert_eq!(collect("x.y.tar.gz"), vec!["gz", "tar.gz", "y.tar.gz"]);
    }

    #[test]
    fn no_dot_yields_nothing() {
        assert!(collect("README").is_empty());
        assert!(collect("").is_empty());
    }

    #[test]
    fn leading_dot_is_not_an_extension() {
        assert!(collect(".bashrc").is_empty());
        assert_eq!(collect(".config.json"), vec!["json"]);
    }

    #[test]
    fn multibyte_first_char() {
        assert_eq!(collect("é.md"), vec!["md"]);
    }

    #[test]
    fn match_short_or_compound() {
        assert!(matches("archive.tar.gz", &set(&["tar.gz"])));
        assert!(matches("archive.tar.gz", &set(&["gz"])));
        assert!(!matches("archive.tar.gz", &set(&["zip"])));
        assert!(!matches("archive.tar.gz", &set(&["tar"])));
        assert!(matches("a.b.c", &set(&["c"])));
    }

    #[test]
    fn match_is_case_sensitive() {
        assert!(!matches("IMAGE.PNG", &set(&["png"])));
        assert!(matches("IMAGE.PNG", &set(&["PNG"])));
    }

    #[test]
    fn empty_set_never_matches() {
        assert!(!matches("a.rs", &HashSet::new()));
    }
}
