//! The translation gateway seam.
//!
//! The coordinator only ever sees [`TranslationGateway`]: a blocking,
//! single-shot call that either returns translated text or a
//! [`GatewayError`] carrying a message. HTTP backends are async and are
//! driven on a tokio runtime by [`BlockingGateway`].

use tokio::runtime::Handle;

use super::google::GoogleClient;
use super::openai::OpenAiClient;

/// Any failure while translating. The coordinator treats all variants alike.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Unknown language: '{0}'")]
    UnknownLanguage(String),
    #[error("Failed to reach translation service: {0}")]
    Transport(String),
    #[error("Translation service returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Unexpected response from translation service: {0}")]
    MalformedResponse(String),
    #[error("Translation failed: {0}")]
    Internal(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::MalformedResponse(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// Text returned by a gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub text: String,
    /// Source language code reported by the service, when it detected one.
    pub detected_source: Option<String>,
}

impl Translation {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            detected_source: None,
        }
    }
}

/// A potentially slow, potentially failing, single-shot translation call.
///
/// Implementations are called from worker threads, never from the UI thread.
pub trait TranslationGateway: Send + Sync {
    fn translate(&self, text: &str, source: &str, target: &str)
    -> Result<Translation, GatewayError>;
}

/// HTTP backends selectable through provider configuration.
pub enum GatewayClient {
    Google(GoogleClient),
    OpenAi(OpenAiClient),
}

impl GatewayClient {
    pub async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<Translation, GatewayError> {
        match self {
            Self::Google(client) => client.translate(text, source, target).await,
            Self::OpenAi(client) => client.translate(text, source, target).await,
        }
    }
}

/// Runs an async [`GatewayClient`] to completion on the caller's thread.
pub struct BlockingGateway {
    client: GatewayClient,
    runtime: Handle,
}

impl BlockingGateway {
    pub const fn new(client: GatewayClient, runtime: Handle) -> Self {
        Self { client, runtime }
    }
}

impl TranslationGateway for BlockingGateway {
    fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<Translation, GatewayError> {
        // Must not be called from inside the runtime; worker threads are plain OS threads
        self.runtime
            .block_on(self.client.translate(text, source, target))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_error_messages() {
        assert_eq!(
            GatewayError::UnknownLanguage("Klingon".into()).to_string(),
            "Unknown language: 'Klingon'"
        );
        assert_eq!(
            GatewayError::Status {
                status: 429,
                body: "slow down".into()
            }
            .to_string(),
            "Translation service returned 429: slow down"
        );
    }

    #[test]
    fn test_blocking_gateway_reports_unreachable_service() {
        let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| panic!("{e}"));
        // Nothing listens on port 9 (discard) locally
        let gateway = BlockingGateway::new(
            GatewayClient::Google(GoogleClient::new("http://127.0.0.1:9".to_string())),
            runtime.handle().clone(),
        );

        assert!(gateway.translate("Hello", "auto", "fr").is_err());
    }
}
