//! Model value object representing a reasoning endpoint

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Available reasoning models (Value Object)
///
/// A model is the concrete endpoint that embodies a role for one run.
/// The registry binds every role to a model; the gateway speaks model
/// identifiers on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    // Claude models
    ClaudeSonnet45,
    ClaudeHaiku45,
    ClaudeOpus45,
    // GPT models
    Gpt52,
    Gpt51,
    Gpt5,
    Gpt5Mini,
    Gpt41,
    // Gemini models
    Gemini3Pro,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::ClaudeSonnet45 => "claude-sonnet-4.5",
            Model::ClaudeHaiku45 => "claude-haiku-4.5",
            Model::ClaudeOpus45 => "claude-opus-4.5",
            Model::Gpt52 => "gpt-5.2",
            Model::Gpt51 => "gpt-5.1",
            Model::Gpt5 => "gpt-5",
            Model::Gpt5Mini => "gpt-5-mini",
            Model::Gpt41 => "gpt-4.1",
            Model::Gemini3Pro => "gemini-3-pro-preview",
            Model::Custom(s) => s,
        }
    }
}

impl Default for Model {
    /// Returns the default model (GPT-5.2)
    fn default() -> Self {
        Model::Gpt52
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "claude-sonnet-4.5" => Model::ClaudeSonnet45,
            "claude-haiku-4.5" => Model::ClaudeHaiku45,
            "claude-opus-4.5" => Model::ClaudeOpus45,
            "gpt-5.2" => Model::Gpt52,
            "gpt-5.1" => Model::Gpt51,
            "gpt-5" => Model::Gpt5,
            "gpt-5-mini" => Model::Gpt5Mini,
            "gpt-4.1" => Model::Gpt41,
            "gemini-3-pro-preview" => Model::Gemini3Pro,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_roundtrip() {
        let models = vec![Model::ClaudeSonnet45, Model::Gpt52, Model::Gemini3Pro];
        for model in models {
            let s = model.to_string();
            let parsed: Model = s.parse().unwrap();
            assert_eq!(model, parsed);
        }
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "in-house-model-v2".parse().unwrap();
        assert_eq!(model, Model::Custom("in-house-model-v2".to_string()));
        assert_eq!(model.to_string(), "in-house-model-v2");
    }

    #[test]
    fn test_model_default() {
        assert_eq!(Model::default(), Model::Gpt52);
    }
}
