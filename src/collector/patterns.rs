//! Glob pattern compilation.
//!
//! Patterns support `*` (any run of characters, path separators included)
//! and `?` (exactly one character). Every other character matches itself;
//! regex metacharacters are escaped during translation, so any input string
//! is a usable pattern.

use log::warn;
use regex::{Regex, RegexBuilder};

/// Translate a glob into an anchored regular expression source string.
fn glob_to_regex(glob: &str) -> String {
    let mut expr = String::with_capacity(glob.len() + 8);
    expr.push('^');
    for c in glob.chars() {
        match c {
            '*' => expr.push_str(".*"),
            '?' => expr.push('.'),
            '.' | '\\' | '(' | ')' | '+' | '|' | '^' | '$' | '[' | ']' | '{' | '}' => {
                expr.push('\\');
                expr.push(c);
            }
            _ => expr.push(c),
        }
    }
    expr.push('$');
    expr
}

/// An ordered set of compiled glob patterns with match-any semantics.
pub struct PatternSet {
    regexes: Vec<Regex>,
}

impl PatternSet {
    /// Compile globs into case-insensitive full-match regexes.
    ///
    /// Translation escapes every metacharacter, so compilation cannot fail
    /// for any input; should a pattern still refuse to compile it is logged
    /// and skipped rather than aborting the run.
    pub fn compile(globs: &[String]) -> Self {
        let regexes = globs
            .iter()
            .filter_map(|glob| {
                let expr = glob_to_regex(glob);
                match RegexBuilder::new(&expr).case_insensitive(true).build() {
                    Ok(regex) => Some(regex),
                    Err(e) => {
                        warn!("Skipping unusable pattern '{}': {}", glob, e);
                        None
                    }
                }
            })
            .collect();

        PatternSet { regexes }
    }

    /// True when no patterns are registered.
    pub fn is_empty(&self) -> bool {
        self.regexes.is_empty()
    }

    /// True if any pattern matches the whole of `candidate`.
    pub fn matches(&self, candidate: &str) -> bool {
        self.regexes.iter().any(|regex| regex.is_match(candidate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(globs: &[&str]) -> PatternSet {
        let owned: Vec<String> = globs.iter().map(|g| g.to_string()).collect();
        PatternSet::compile(&owned)
    }

    #[test]
    fn test_star_matches_any_run_including_separators() {
        let patterns = set(&["*.cpp"]);
        assert!(patterns.matches("b.cpp"));
        assert!(patterns.matches("sub/b.cpp"));
        assert!(patterns.matches("deep/er/tree/x.cpp"));
        assert!(!patterns.matches("b.cpph"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let patterns = set(&["*.cpp"]);
        assert!(patterns.matches("B.CPP"));
        assert!(patterns.matches("Sub/Mixed.Cpp"));
    }

    #[test]
    fn test_question_mark_matches_exactly_one_character() {
        let patterns = set(&["a?.txt"]);
        assert!(patterns.matches("ab.txt"));
        assert!(patterns.matches("a1.txt"));
        assert!(!patterns.matches("a.txt"));
        assert!(!patterns.matches("abc.txt"));
    }

    #[test]
    fn test_dot_is_literal_not_wildcard() {
        let patterns = set(&["a.txt"]);
        assert!(patterns.matches("a.txt"));
        assert!(!patterns.matches("axtxt"));
    }

    #[test]
    fn test_match_covers_the_whole_candidate() {
        let patterns = set(&["b.cpp"]);
        assert!(!patterns.matches("sub.cpp.bak"));
        assert!(!patterns.matches("xb.cpp"));
        assert!(!patterns.matches("b.cppx"));
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let patterns = set(&["file(1)+x.txt"]);
        assert!(patterns.matches("file(1)+x.txt"));
        assert!(!patterns.matches("file1x.txt"));

        let patterns = set(&["[draft]*"]);
        assert!(patterns.matches("[draft] notes.md"));
        assert!(!patterns.matches("d notes.md"));
    }

    #[test]
    fn test_hostile_input_compiles_and_matches_itself() {
        for glob in ["[[[", "a{b", "\\", "(((", "a|b", "^$", "{1,2}"] {
            let patterns = set(&[glob]);
            assert!(patterns.matches(glob), "pattern {:?} should match itself", glob);
            assert!(!patterns.matches("anything"));
        }
    }

    #[test]
    fn test_empty_pattern_matches_only_empty_string() {
        let patterns = set(&[""]);
        assert!(patterns.matches(""));
        assert!(!patterns.matches("a"));
    }

    #[test]
    fn test_empty_set_matches_nothing() {
        let patterns = set(&[]);
        assert!(patterns.is_empty());
        assert!(!patterns.matches("a.txt"));
    }

    #[test]
    fn test_any_registered_pattern_may_match() {
        let patterns = set(&["*.cpp", "*.md"]);
        assert!(patterns.matches("a.cpp"));
        assert!(patterns.matches("a.md"));
        assert!(!patterns.matches("a.txt"));
    }
}
