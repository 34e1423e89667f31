use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::ExtractError;

struct Defaults {}

impl Defaults {
    fn extension() -> String {
        "cfg".to_owned()
    }

    fn policy_suffix() -> String {
        "-IN".to_owned()
    }

    fn participant_suffix() -> String {
        "-PARTICIPANT".to_owned()
    }

    fn participant_term() -> String {
        "participant".to_owned()
    }

    fn skip_unreadable() -> bool {
        false
    }
}

/// Config (toml) representation of the extractor settings
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(super) struct ExtractorConfigSpec {
    // Only files with this extension are scanned (E.g. "cfg" for r1.cfg)
    #[serde(default = "Defaults::extension")]
    pub(super) extension: String,

    // Import policies carrying a participant term end with this suffix
    #[serde(default = "Defaults::policy_suffix")]
    pub(super) policy_suffix: String,
    // ...and filter on a prefix-list named with this suffix instead
    #[serde(default = "Defaults::participant_suffix")]
    pub(super) participant_suffix: String,

    // Name of the first term in a participant policy
    #[serde(default = "Defaults::participant_term")]
    pub(super) participant_term: String,

    // Log and skip files that can't be read, instead of failing the run
    #[serde(default = "Defaults::skip_unreadable")]
    pub(super) skip_unreadable: bool,
}

impl Default for ExtractorConfigSpec {
    fn default() -> Self {
        Self {
            extension: Defaults::extension(),
            policy_suffix: Defaults::policy_suffix(),
            participant_suffix: Defaults::participant_suffix(),
            participant_term: Defaults::participant_term(),
            skip_unreadable: Defaults::skip_unreadable(),
        }
    }
}

impl ExtractorConfigSpec {
    pub(super) fn from_file(path: &Path) -> Result<Self, ExtractError> {
        let mut file = File::open(path).map_err(|err| ExtractError::io(path, err))?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)
            .map_err(|err| ExtractError::io(path, err))?;
        Self::from_contents(&contents)
    }

    pub(super) fn from_contents(contents: &str) -> Result<Self, ExtractError> {
        let config: ExtractorConfigSpec = toml::from_str(contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let config = ExtractorConfigSpec::from_file(Path::new("./demos/participants.toml")).unwrap();
        assert_eq!(config.extension, "conf");
        assert_eq!(config.policy_suffix, "-IN");
        assert_eq!(config.participant_suffix, "-PARTICIPANT");
        assert_eq!(config.participant_term, "participant");
        assert!(config.skip_unreadable);
    }

    #[test]
    fn test_parse_empty_config() {
        let config = ExtractorConfigSpec::from_contents("").unwrap();
        assert_eq!(config.extension, "cfg");
        assert_eq!(config.policy_suffix, "-IN");
        assert_eq!(config.participant_suffix, "-PARTICIPANT");
        assert!(!config.skip_unreadable);
    }

    #[test]
    fn test_parse_unknown_field() {
        let err = ExtractorConfigSpec::from_contents("suffix = \"-IN\"").unwrap_err();
        assert!(matches!(err, ExtractError::Config(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = ExtractorConfigSpec::from_file(Path::new("./demos/missing.toml")).unwrap_err();
        assert!(matches!(err, ExtractError::Io { .. }));
    }
}
