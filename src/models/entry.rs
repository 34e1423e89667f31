use std::fmt;

use serde::Serialize;

use super::ParticipantListName;

/// The participant prefix-list a neighbor is filtered by, and whether
/// the filter matches exactly (otherwise "orlonger")
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ParticipantEntry {
    #[serde(rename = "participant_list")]
    pub list: ParticipantListName,
    pub exact: bool,
}

impl ParticipantEntry {
    pub fn new(list: ParticipantListName, exact: bool) -> Self {
        Self { list, exact }
    }

    pub fn match_type(&self) -> &'static str {
        if self.exact {
            "exact"
        } else {
            "orlonger"
        }
    }
}

impl fmt::Display for ParticipantEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(\"{}\", {})", self.list, self.exact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Suffixes;
    use crate::models::PolicyName;

    #[test]
    fn test_display() {
        let list = PolicyName::from("FOO-IN").participant_list(&Suffixes::default());
        let entry = ParticipantEntry::new(list.clone(), true);
        assert_eq!(entry.to_string(), "(\"FOO-PARTICIPANT\", true)");
        assert_eq!(entry.match_type(), "exact");

        let entry = ParticipantEntry::new(list, false);
        assert_eq!(entry.to_string(), "(\"FOO-PARTICIPANT\", false)");
        assert_eq!(entry.match_type(), "orlonger");
    }
}
