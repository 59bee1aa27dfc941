//! Translation configuration.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use jsonc_parser::ParseOptions;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{DefaultVisitor, NoopVisitor, PythonVisitor, TranslateError, Visitor};

/// Configuration file names, in lookup order.
pub const CONFIG_FILES: &[&str] = &[".tsxlate.jsonc", ".tsxlate.json"];

/// Target notation of a translation.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    /// Dump the syntax tree.
    #[default]
    Noop,
    /// Default renderings only.
    Default,
    /// Python-like text.
    Python,
}

impl Target {
    /// All targets, in declaration order.
    pub const ALL: [Target; 3] = [Target::Noop, Target::Default, Target::Python];

    /// Returns the target's name.
    pub const fn name(&self) -> &'static str {
        match self {
            Target::Noop => "noop",
            Target::Default => "default",
            Target::Python => "python",
        }
    }

    /// Returns the visitor implementing this target.
    pub fn visitor(&self) -> Box<dyn Visitor> {
        match self {
            Target::Noop => Box::new(NoopVisitor),
            Target::Default => Box::new(DefaultVisitor),
            Target::Python => Box::new(PythonVisitor),
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration for a translation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TranslateConfig {
    /// Target notation.
    #[serde(default)]
    pub target: Target,

    /// Treat unknown syntax in the output as a failure.
    #[serde(default)]
    pub strict: bool,
}

impl TranslateConfig {
    /// Loads configuration from a file.
    ///
    /// Supports `.tsxlate.jsonc`, `.tsxlate.json`. Comments and trailing
    /// commas are accepted in both.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TranslateError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TranslateError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        debug!("Loaded config from {}", path.display());
        Self::from_json(&content)
    }

    /// Parses configuration from JSON or JSONC text.
    ///
    /// An empty document yields the default configuration.
    pub fn from_json(json: &str) -> Result<Self, TranslateError> {
        let value = jsonc_parser::parse_to_serde_value(json, &ParseOptions::default())
            .map_err(|e| TranslateError::config(format!("Invalid JSON: {}", e)))?;

        match value {
            Some(value) => serde_json::from_value(value)
                .map_err(|e| TranslateError::config(format!("Invalid config: {}", e))),
            None => Ok(Self::default()),
        }
    }

    /// Finds a configuration file in `dir`.
    pub fn discover(dir: impl AsRef<Path>) -> Option<PathBuf> {
        let dir = dir.as_ref();
        CONFIG_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = TranslateConfig::default();
        assert_eq!(config.target, Target::Noop);
        assert!(!config.strict);
    }

    #[test]
    fn test_from_json() {
        let config = TranslateConfig::from_json(r#"{ "target": "python", "strict": true }"#).unwrap();
        assert_eq!(
            config,
            TranslateConfig {
                target: Target::Python,
                strict: true,
            }
        );
    }

    #[test]
    fn test_from_jsonc_with_comments() {
        let json = r#"{
            // Default renderings only
            "target": /* inline */ "default",
        }"#;
        let config = TranslateConfig::from_json(json).unwrap();
        assert_eq!(config.target, Target::Default);
        assert!(!config.strict);
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(TranslateConfig::from_json("").unwrap(), TranslateConfig::default());
        assert_eq!(TranslateConfig::from_json("{}").unwrap(), TranslateConfig::default());
    }

    #[rstest]
    #[case(r#"{ "target": "ruby" }"#)]
    #[case(r#"{ "strict": "yes" }"#)]
    #[case(r#"{ "unknown": 1 }"#)]
    #[case(r#"{ "target": "#)]
    fn test_invalid_config(#[case] json: &str) {
        let err = TranslateConfig::from_json(json).unwrap_err();
        assert!(matches!(err, TranslateError::Config(_)));
    }

    #[test]
    fn test_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".tsxlate.jsonc");
        fs::write(&path, r#"{ "target": "python" }"#).unwrap();

        let config = TranslateConfig::from_file(&path).unwrap();
        assert_eq!(config.target, Target::Python);
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempdir().unwrap();
        let err = TranslateConfig::from_file(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, TranslateError::Config(_)));
    }

    #[test]
    fn test_discover_prefers_jsonc() {
        let dir = tempdir().unwrap();
        assert_eq!(TranslateConfig::discover(dir.path()), None);

        fs::write(dir.path().join(".tsxlate.json"), "{}").unwrap();
        assert_eq!(
            TranslateConfig::discover(dir.path()),
            Some(dir.path().join(".tsxlate.json"))
        );

        fs::write(dir.path().join(".tsxlate.jsonc"), "{}").unwrap();
        assert_eq!(
            TranslateConfig::discover(dir.path()),
            Some(dir.path().join(".tsxlate.jsonc"))
        );
    }

    #[test]
    fn test_target_names_match_config_values() {
        for target in Target::ALL {
            let json = format!(r#"{{ "target": "{}" }}"#, target);
            assert_eq!(TranslateConfig::from_json(&json).unwrap().target, target);
        }
    }
}
