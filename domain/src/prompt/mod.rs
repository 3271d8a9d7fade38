//! Prompt templates and sentinel replies.

pub mod template;

pub use template::PromptTemplate;
