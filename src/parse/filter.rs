use std::collections::HashSet;

use crate::config::Suffixes;
use crate::models::PolicyName;

/// Trimmed lines of a config, for whole-line lookups
#[derive(Debug, Default)]
pub struct LineSet<'a>(HashSet<&'a str>);

impl<'a> LineSet<'a> {
    pub fn new(lines: &[&'a str]) -> Self {
        LineSet(lines.iter().map(|&l| l.trim()).collect())
    }

    pub fn contains(&self, line: &str) -> bool {
        self.0.contains(line)
    }
}

/// Is the participant prefix-list of this policy matched exactly?
/// Anything other than the literal `prefix-list-filter <LIST> exact;` line counts as "orlonger"
pub fn is_exact(policy: &PolicyName, lines: &LineSet, suffixes: &Suffixes) -> bool {
    let list = policy.participant_list(suffixes);
    lines.contains(&format!("prefix-list-filter {} exact;", list))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exact(policy: &str, lines: &[&str]) -> bool {
        is_exact(
            &PolicyName::from(policy),
            &LineSet::new(lines),
            &Suffixes::default(),
        )
    }

    #[test]
    fn test_exact() {
        let lines = ["term participant {", "prefix-list-filter FOO-PARTICIPANT exact;"];
        assert!(exact("FOO-IN", &lines));
    }

    #[test]
    fn test_orlonger() {
        assert!(!exact("FOO-IN", &["prefix-list-filter FOO-PARTICIPANT orlonger;"]));
        assert!(!exact("FOO-IN", &["prefix-list-filter FOO-PARTICIPANT;"]));
        assert!(!exact("FOO-IN", &[]));
    }

    #[test]
    fn test_whole_line_only() {
        assert!(!exact(
            "FOO-IN",
            &["from prefix-list-filter FOO-PARTICIPANT exact;"]
        ));
        assert!(!exact(
            "FOO-IN",
            &["prefix-list-filter FOO-PARTICIPANT exact; ## note"]
        ));
        assert!(!exact("FOO-IN", &["prefix-list-filter  FOO-PARTICIPANT exact;"]));
    }

    #[test]
    fn test_other_list() {
        assert!(!exact("FOO-IN", &["prefix-list-filter BAR-PARTICIPANT exact;"]));
    }

    #[test]
    fn test_untrimmed_input() {
        assert!(exact(
            "FOO-IN",
            &["        prefix-list-filter FOO-PARTICIPANT exact;   "]
        ));
    }
}
