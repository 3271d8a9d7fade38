//! Discussion context loader
//!
//! Resolves a [`ContextSource`] (`--file` and/or `--text`) into the topic
//! string handed to the panel.
//!
//! - file only: the file content
//! - text only: the text
//! - both: file content, a blank line, then the text
//!
//! A file that cannot be read is logged and the whole context becomes the
//! empty string; the run still goes ahead.

use panel_domain::{ContextSource, DomainError};
use std::fs;
use tracing::{debug, warn};

/// Context loader that reads from the local file system.
#[derive(Debug, Clone, Default)]
pub struct LocalContextLoader;

impl LocalContextLoader {
    pub fn new() -> Self {
        Self
    }

    /// Resolve `source` into the discussion topic.
    ///
    /// Errors only when neither a file nor a non-empty text is given.
    pub fn load(&self, source: &ContextSource) -> Result<String, DomainError> {
        if source.is_empty() {
            return Err(DomainError::MissingContext);
        }

        let text = source.text.as_deref().filter(|t| !t.is_empty());

        let Some(path) = &source.file else {
            return Ok(text.unwrap_or_default().to_string());
        };

        match fs::read_to_string(path) {
            Ok(content) => {
                debug!(path = %path.display(), bytes = content.len(), "Loaded context file");
                Ok(match text {
                    Some(text) => format!("{}\n\n{}", content, text),
                    None => content,
                })
            }
            Err(e) => {
                warn!("Error reading file {}: {}", path.display(), e);
                Ok(String::new())
            }
        }
    }
}
