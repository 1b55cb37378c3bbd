use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

/// The guide has no credential for the remote model.
///
/// This is a setup defect: callers should disable chat rather than retry.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Gemini API key not configured; set GEMINI_API_KEY")]
pub struct ConfigurationError;

/// Reasons a single exchange with the remote model produced no reply.
///
/// These never leave [`DungeonGuide::send`](crate::DungeonGuide::send); each
/// is logged and replaced by [`FALLBACK_REPLY`](crate::FALLBACK_REPLY).
#[derive(Debug, Error)]
pub enum ReplyError {
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),
    #[error("remote service returned {status}: {}", describe_body(.body))]
    RemoteService {
        status: StatusCode,
        body: Option<Value>,
    },
    #[error("malformed response: {0}")]
    MalformedResponse(#[source] reqwest::Error),
    #[error("no reply text in response")]
    EmptyResponse,
}

fn describe_body(body: &Option<Value>) -> String {
    body.as_ref().map(Value::to_string).unwrap_or_default()
}
