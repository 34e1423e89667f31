use std::fmt;

use serde::Serialize;

use crate::config::Suffixes;

/// Name of a `policy-statement`, as written in the config
#[derive(Serialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct PolicyName(String);

impl PolicyName {
    pub fn new<S: Into<String>>(name: S) -> Self {
        PolicyName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derive the prefix-list name this policy filters on
    /// E.g. "FOO-IN" -> "FOO-PARTICIPANT"
    pub fn participant_list(&self, suffixes: &Suffixes) -> ParticipantListName {
        let stem = self
            .0
            .strip_suffix(suffixes.policy.as_str())
            .unwrap_or(&self.0);
        ParticipantListName(format!("{}{}", stem, suffixes.participant))
    }
}

impl fmt::Display for PolicyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PolicyName {
    fn from(name: &str) -> Self {
        PolicyName::new(name)
    }
}

/// Name of the prefix-list holding a participant's prefixes
#[derive(Serialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct ParticipantListName(String);

impl ParticipantListName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParticipantListName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
