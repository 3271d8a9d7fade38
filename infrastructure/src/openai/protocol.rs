//! Chat Completions wire types.

use panel_domain::{Message, Model};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<WireMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Reasoning models reject `max_tokens` and take this instead
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_completion_tokens: Option<u32>,
}

impl<'a> ChatRequest<'a> {
    pub fn new(model: &'a Model, messages: &'a [Message], max_tokens: Option<u32>) -> Self {
        let (max_tokens, max_completion_tokens) = if model.is_reasoning() {
            (None, max_tokens)
        } else {
            (max_tokens, None)
        };

        Self {
            model: model.as_str(),
            messages: messages
                .iter()
                .map(|m| WireMessage {
                    role: m.role.as_str(),
                    content: &m.content,
                })
                .collect(),
            max_tokens,
            max_completion_tokens,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct WireMessage<'a> {
    pub role: &'a str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    /// `null` when the model produced no text
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatResponse {
    /// Content of the first choice. `None` when there are no choices;
    /// an empty string when the first choice carries no content.
    pub fn into_text(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.unwrap_or_default())
    }
}

/// Error envelope returned with non-2xx statuses
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let model = Model::Gpt4o;
        let messages = vec![Message::system("sys"), Message::user("hi")];

        let json = serde_json::to_value(ChatRequest::new(&model, &messages, None)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "model": "gpt-4o",
                "messages": [
                    {"role": "system", "content": "sys"},
                    {"role": "user", "content": "hi"}
                ]
            })
        );
    }

    #[test]
    fn test_reasoning_model_uses_completion_tokens() {
        let model = Model::O3Mini;
        let messages = vec![Message::user("hi")];

        let json = serde_json::to_value(ChatRequest::new(&model, &messages, Some(256))).unwrap();

        assert_eq!(json["max_completion_tokens"], 256);
        assert!(json.get("max_tokens").is_none());
    }

    #[test]
    fn test_first_choice_text() {
        let body = r#"{"id":"x","choices":[{"index":0,"message":{"role":"assistant","content":"hello"}},{"index":1,"message":{"role":"assistant","content":"other"}}]}"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.into_text().as_deref(), Some("hello"));
    }

    #[test]
    fn test_null_content_is_empty() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.into_text().as_deref(), Some(""));
    }

    #[test]
    fn test_no_choices() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(response.into_text().is_none());
    }
}
