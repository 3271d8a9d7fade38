//! Agent value objects

use serde::{Deserialize, Serialize};

/// Identifier of one panel member (e.g. `Agent0`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentId(String);

impl AgentId {
    /// Creates an AgentId from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Roster identifier for the agent at `index` (`Agent<index>`).
    pub fn numbered(index: usize) -> Self {
        Self(format!("Agent{}", index))
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AgentId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for AgentId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl std::fmt::Display for AgentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_id() {
        assert_eq!(AgentId::numbered(3).as_str(), "Agent3");
        assert_eq!(AgentId::from("x").to_string(), "x");
    }
}
