use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error, warn};

use crate::clean::clean_reply;
use crate::config::GeminiConfig;
use crate::error::{ConfigurationError, ReplyError};
use crate::gemini::{GenerateContentRequest, GenerateContentResponse};
use crate::persona::{FALLBACK_REPLY, Persona};
use crate::types::{Chatter, Turn};

/// Speaks for the ancient spirit through a Gemini model.
///
/// A guide holds no conversation state. Each [`send`](Self::send) is given
/// the transcript so far and issues exactly one request, so a guide can be
/// shared between tasks behind an `Arc`.
pub struct DungeonGuide {
    client: Client,
    config: GeminiConfig,
    persona: Persona,
}

impl DungeonGuide {
    /// Create a guide speaking as [`Persona::dungeon_guide`].
    ///
    /// # Errors
    ///
    /// Fails only if the HTTP client cannot be initialised. A missing API
    /// key is not checked here; it is reported by [`send`](Self::send).
    pub fn new(config: GeminiConfig) -> reqwest::Result<Self> {
        let client = Client::builder().timeout(config.timeout()).build()?;
        Ok(Self::with_client(client, config, Persona::dungeon_guide()))
    }

    /// Create a guide around an existing client and persona.
    pub fn with_client(client: Client, config: GeminiConfig, persona: Persona) -> Self {
        Self {
            client,
            config,
            persona,
        }
    }

    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    /// Ask the spirit to answer `message`, given the earlier `history`.
    ///
    /// Returns [`FALLBACK_REPLY`] whenever the remote model cannot produce a
    /// usable answer.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError`] if no API key is configured. No request is made
    /// in that case.
    pub async fn send(
        &self,
        message: &str,
        history: &[Turn],
    ) -> Result<String, ConfigurationError> {
        let Some(key) = self.config.api_key() else {
            error!("Gemini API key not found; chat is unavailable");
            return Err(ConfigurationError);
        };
        match self.request_reply(key, message, history).await {
            Ok(reply) => Ok(reply),
            Err(e) => {
                match &e {
                    ReplyError::RemoteService { status, body } => {
                        warn!(%status, ?body, "Gemini API returned an error")
                    }
                    other => warn!(error = %other, "Gemini API call failed"),
                }
                Ok(FALLBACK_REPLY.to_string())
            }
        }
    }

    async fn request_reply(
        &self,
        key: &str,
        message: &str,
        history: &[Turn],
    ) -> Result<String, ReplyError> {
        let request = GenerateContentRequest::new(&self.persona, history, message);
        debug!(turns = request.contents.len(), "requesting reply from Gemini");
        let resp = self
            .client
            .post(self.config.endpoint())
            .query(&[("key", key)])
            .json(&request)
            .send()
            .await
            .map_err(ReplyError::Network)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp
                .text()
                .await
                .ok()
                .and_then(|text| serde_json::from_str(&text).ok());
            return Err(ReplyError::RemoteService { status, body });
        }

        let reply: GenerateContentResponse =
            resp.json().await.map_err(ReplyError::MalformedResponse)?;
        let text = reply.first_text().ok_or(ReplyError::EmptyResponse)?;
        Ok(clean_reply(text))
    }
}

#[async_trait]
impl Chatter for DungeonGuide {
    async fn send(&self, message: &str, history: &[Turn]) -> Result<String, ConfigurationError> {
        DungeonGuide::send(self, message, history).await
    }
}
