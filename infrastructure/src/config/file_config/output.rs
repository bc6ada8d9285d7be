//! Output configuration from TOML (`[output]` section)

use serde::{Deserialize, Serialize};

/// Raw output configuration from TOML
///
/// The format string is interpreted by the presentation layer; the CLI
/// flag takes precedence over this section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format: "full", "final", or "json"
    pub format: Option<String>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_output_deserialize() {
        let toml_str = r#"
[output]
format = "json"
color = false
"#;
        let config: super::super::FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.output.format.as_deref(), Some("json"));
        assert!(!config.output.color);
    }

    #[test]
    fn test_output_defaults() {
        let config = super::super::FileConfig::default();
        assert!(config.output.format.is_none());
        assert!(config.output.color);
    }
}
