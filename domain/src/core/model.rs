//! Model value object representing a hosted text-generation model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Hosted text-generation models (Value Object)
///
/// Identified by their hub repository id. Anything other than the default
/// model is carried verbatim as [`Model::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Llama3_8bInstruct,
    Custom(String),
}

impl Model {
    /// Get the repository id for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Llama3_8bInstruct => "meta-llama/Meta-Llama-3-8B-Instruct",
            Model::Custom(s) => s,
        }
    }
}

impl Default for Model {
    /// Returns the default model (Meta-Llama-3-8B-Instruct)
    fn default() -> Self {
        Model::Llama3_8bInstruct
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
            "meta-llama/Meta-Llama-3-8B-Instruct" => Model::Llama3_8bInstruct,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        match s.parse() {
            Ok(model) => model,
            Err(never) => match never {},
        }
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
        Ok(Model::from(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model_roundtrip() {
        let parsed: Model = Model::Llama3_8bInstruct.to_string().parse().unwrap();
        assert_eq!(parsed, Model::Llama3_8bInstruct);
    }

    #[test]
    fn test_serde_uses_repo_id() {
        let json = serde_json::to_string(&Model::default()).unwrap();
        assert_eq!(json, "\"meta-llama/Meta-Llama-3-8B-Instruct\"");
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "google/gemma-2-9b-it".parse().unwrap();
        assert_eq!(model, Model::Custom("google/gemma-2-9b-it".to_string()));
        assert_eq!(model.to_string(), "google/gemma-2-9b-it");
    }

    #[test]
    fn test_model_default() {
        let model = Model::default();
        assert_eq!(model.as_str(), "meta-llama/Meta-Llama-3-8B-Instruct");
    }
}
