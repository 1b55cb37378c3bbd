use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Speaker roles for a conversation turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One message in a conversation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    /// Create a new user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Create a new assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Produces an in-character reply to a player message.
///
/// Implementations only fail when they are misconfigured; every other
/// problem is expected to be turned into displayable text.
#[async_trait]
pub trait Chatter: Send + Sync {
    async fn send(&self, message: &str, history: &[Turn]) -> Result<String, ConfigurationError>;
}
