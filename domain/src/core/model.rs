//! Model value object representing an LLM model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Backend model identifiers (Value Object)
///
/// Well-known Chat Completions models get their own variant; anything else
/// is carried through unchanged as [`Model::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Gpt4oMini,
    Gpt4o,
    Gpt41,
    Gpt41Mini,
    Gpt41Nano,
    O3Mini,
    O4Mini,
    // Custom
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gpt4oMini => "gpt-4o-mini",
            Model::Gpt4o => "gpt-4o",
            Model::Gpt41 => "gpt-4.1",
            Model::Gpt41Mini => "gpt-4.1-mini",
            Model::Gpt41Nano => "gpt-4.1-nano",
            Model::O3Mini => "o3-mini",
            Model::O4Mini => "o4-mini",
            Model::Custom(s) => s,
        }
    }

    /// Get the default set of models for the panel
    pub fn default_models() -> Vec<Model> {
        vec![Model::Gpt4oMini]
    }

    /// Check if this is a reasoning (o-series) model
    pub fn is_reasoning(&self) -> bool {
        matches!(self, Model::O3Mini | Model::O4Mini)
    }

    /// Parse a comma separated model list (`"gpt-4o,gpt-4o-mini"`).
    ///
    /// Blank entries are dropped.
    pub fn parse_list(s: &str) -> Vec<Model> {
        s.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(Model::from_name)
            .collect()
    }

    fn from_name(s: &str) -> Model {
        match s {
            "gpt-4o-mini" => Model::Gpt4oMini,
            "gpt-4o" => Model::Gpt4o,
            "gpt-4.1" => Model::Gpt41,
            "gpt-4.1-mini" => Model::Gpt41Mini,
            "gpt-4.1-nano" => Model::Gpt41Nano,
            "o3-mini" => Model::O3Mini,
            "o4-mini" => Model::O4Mini,
            other => Model::Custom(other.to_string()),
        }
    }
}

impl Default for Model {
    /// Returns the default model (gpt-4o-mini)
    fn default() -> Self {
        Model::Gpt4oMini
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
        Ok(Model::from_name(s))
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        Model::from_name(s)
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
        Ok(Model::from_name(&s))
    }
}
