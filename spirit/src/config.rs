use std::time::Duration;

/// Gemini endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent";

/// Upper bound on a single request, including reading the response.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings for reaching the Gemini service.
///
/// The credential is optional here so a guide can be built before the key is
/// known; [`DungeonGuide::send`](crate::DungeonGuide::send) refuses to run
/// without one.
#[derive(Clone)]
pub struct GeminiConfig {
    api_key: Option<String>,
    endpoint: String,
    timeout: Duration,
}

impl GeminiConfig {
    /// Create a configuration targeting [`DEFAULT_ENDPOINT`].
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the full `generateContent` URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the `generateContent` URL for a named model, e.g. `gemini-pro`.
    pub fn endpoint_for_model(model: &str) -> String {
        format!("https://generativelanguage.googleapis.com/v1beta/models/{model}:generateContent")
    }

    /// The credential, if one is set and not blank.
    ///
    /// A blank key counts as missing; any other key is returned, and sent,
    /// exactly as configured.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &self.api_key().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish()
    }
}
