mod file;

use std::path::Path;

use crate::error::ExtractError;

/// Parse a TOML settings file and return an ExtractorConfig
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<ExtractorConfig, ExtractError> {
    let spec = file::ExtractorConfigSpec::from_file(path.as_ref())?;
    ExtractorConfig::from_spec(spec)
}

/// Policy/prefix-list naming convention
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suffixes {
    /// E.g. "-IN" for "FOO-IN"
    pub policy: String,
    /// E.g. "-PARTICIPANT" for "FOO-PARTICIPANT"
    pub participant: String,
}

impl Default for Suffixes {
    fn default() -> Self {
        let spec = file::ExtractorConfigSpec::default();
        Self {
            policy: spec.policy_suffix,
            participant: spec.participant_suffix,
        }
    }
}

/// In-Memory representation of the extractor settings
#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    pub extension: String,
    pub suffixes: Suffixes,
    pub participant_term: String,
    pub skip_unreadable: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        // Defaults are always valid
        Self::build(file::ExtractorConfigSpec::default())
    }
}

impl ExtractorConfig {
    pub fn from_toml(contents: &str) -> Result<Self, ExtractError> {
        let spec = file::ExtractorConfigSpec::from_contents(contents)?;
        Self::from_spec(spec)
    }

    fn from_spec(spec: file::ExtractorConfigSpec) -> Result<Self, ExtractError> {
        if spec.policy_suffix.is_empty() || spec.participant_suffix.is_empty() {
            return Err(ExtractError::Config(
                "policy_suffix and participant_suffix must not be empty".to_owned(),
            ));
        }
        if spec.participant_term.is_empty()
            || spec.participant_term.contains(char::is_whitespace)
        {
            return Err(ExtractError::Config(format!(
                "Invalid participant_term: '{}'",
                spec.participant_term
            )));
        }
        Ok(Self::build(spec))
    }

    fn build(spec: file::ExtractorConfigSpec) -> Self {
        Self {
            extension: spec.extension.trim_start_matches('.').to_owned(),
            suffixes: Suffixes {
                policy: spec.policy_suffix,
                participant: spec.participant_suffix,
            },
            participant_term: spec.participant_term,
            skip_unreadable: spec.skip_unreadable,
        }
    }

    /// Override the input file extension (E.g. from the CLI)
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_owned();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExtractorConfig::default();
        assert_eq!(config.extension, "cfg");
        assert_eq!(config.suffixes, Suffixes::default());
        assert_eq!(config.suffixes.policy, "-IN");
        assert_eq!(config.participant_term, "participant");
        assert!(!config.skip_unreadable);
    }

    #[test]
    fn test_from_toml() {
        let config = ExtractorConfig::from_toml(
            r#"
            extension = ".junos"
            policy_suffix = "-IMPORT"
            participant_suffix = "-PL"
            "#,
        )
        .unwrap();
        assert_eq!(config.extension, "junos");
        assert_eq!(config.suffixes.policy, "-IMPORT");
        assert_eq!(config.suffixes.participant, "-PL");
        assert_eq!(config.participant_term, "participant");
    }

    #[test]
    fn test_invalid_settings() {
        assert!(ExtractorConfig::from_toml("policy_suffix = \"\"").is_err());
        assert!(ExtractorConfig::from_toml("participant_term = \"two words\"").is_err());
    }

    #[test]
    fn test_with_extension() {
        let config = ExtractorConfig::default().with_extension(".conf");
        assert_eq!(config.extension, "conf");
    }
}
