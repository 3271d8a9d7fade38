//! Provider configuration from TOML (`[providers]` section)

use serde::{Deserialize, Serialize};

/// OpenAI-compatible Chat Completions provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOpenAiConfig {
    /// Environment variable name for the API key (default: "OPENAI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (not recommended, use the env var instead).
    pub api_key: Option<String>,
    /// Base URL, without the `/v1/...` suffix.
    pub base_url: String,
    /// Cap on generated tokens per reply. Omitted from requests when unset.
    pub max_tokens: Option<u32>,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for FileOpenAiConfig {
    fn default() -> Self {
        Self {
            api_key_env: "OPENAI_API_KEY".to_string(),
            api_key: None,
            base_url: "https://api.openai.com".to_string(),
            max_tokens: None,
            timeout_secs: 120,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProvidersConfig {
    pub openai: FileOpenAiConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openai_defaults() {
        let config = FileOpenAiConfig::default();
        assert_eq!(config.api_key_env, "OPENAI_API_KEY");
        assert_eq!(config.base_url, "https://api.openai.com");
        assert!(config.max_tokens.is_none());
    }

    #[test]
    fn test_partial_section_fills_defaults() {
        let config: FileProvidersConfig = toml::from_str(
            r#"
[openai]
base_url = "http://localhost:11434"
max_tokens = 512
"#,
        )
        .unwrap();

        assert_eq!(config.openai.base_url, "http://localhost:11434");
        assert_eq!(config.openai.max_tokens, Some(512));
        assert_eq!(config.openai.timeout_secs, 120);
    }
}
