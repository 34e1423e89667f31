use crate::config::{ExtractorConfig, Suffixes};
use crate::models::PolicyName;

const POLICY_STATEMENT: &str = "policy-statement";
const INACTIVE: &str = "inactive:";

/// Find every `policy-statement <NAME>-IN {` whose first term is the participant term
///
/// ```text
/// policy-statement FOO-IN {
///     term participant {
/// ```
/// Blank lines between the header and the term are skipped; any other line
/// in between disqualifies the policy. Zero matches is a normal result.
pub fn participant_policies(lines: &[&str], config: &ExtractorConfig) -> Vec<PolicyName> {
    let mut policies = Vec::new();
    for (i, line) in lines.iter().enumerate() {
        let name = match policy_header(line, &config.suffixes) {
            Some(name) => name,
            None => continue,
        };
        let first_term = lines[i + 1..].iter().find(|l| !l.trim().is_empty());
        if first_term.map_or(false, |l| opens_term(l, &config.participant_term)) {
            policies.push(name);
        }
    }
    policies
}

/// [`participant_policies`] over the raw text of a config
pub fn participant_policies_in(text: &str, config: &ExtractorConfig) -> Vec<PolicyName> {
    let lines: Vec<&str> = text.lines().collect();
    participant_policies(&lines, config)
}

/// Match a block opening: `[inactive: ]policy-statement <word chars><suffix> {`
fn policy_header(line: &str, suffixes: &Suffixes) -> Option<PolicyName> {
    let mut tokens = line.split_whitespace().peekable();
    if tokens.peek() == Some(&INACTIVE) {
        tokens.next();
    }
    match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
        (Some(POLICY_STATEMENT), Some(name), Some("{"), None) => {
            let stem = name.strip_suffix(suffixes.policy.as_str())?;
            if stem.chars().all(is_word_char) {
                Some(PolicyName::new(name))
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Line is `term <name>`, optionally followed by the term body opening
fn opens_term(line: &str, term: &str) -> bool {
    let mut tokens = line.split_whitespace();
    tokens.next() == Some("term") && tokens.next() == Some(term)
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
