//! Client for the public Google Translate web endpoint.

use reqwest::{Client, Request, Url};
use serde_json::Value;

use super::{GatewayError, Translation};

/// Endpoint used when the `google` provider has no explicit one.
pub const DEFAULT_GOOGLE_ENDPOINT: &str = "https://translate.googleapis.com";

pub struct GoogleClient {
    client: Client,
    endpoint: String,
}

impl GoogleClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    fn request_url(&self, source: &str, target: &str) -> Result<Url, GatewayError> {
        let base = format!(
            "{}/translate_a/single",
            self.endpoint.trim_end_matches('/')
        );
        Url::parse_with_params(
            &base,
            &[
                ("client", "gtx"),
                ("sl", source),
                ("tl", target),
                ("dt", "t"),
            ],
        )
        .map_err(|e| GatewayError::Transport(format!("Invalid endpoint URL '{base}': {e}")))
    }

    /// Languages travel in the query string, the text in a form body so
    /// long inputs stay clear of URL length limits.
    fn build_request(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<Request, GatewayError> {
        let url = self.request_url(source, target)?;
        self.client
            .post(url)
            .form(&[("q", text)])
            .build()
            .map_err(GatewayError::from)
    }

    pub async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<Translation, GatewayError> {
        let request = self.build_request(text, source, target)?;
        crate::debug!("POST {}/translate_a/single ({source} -> {target})", self.endpoint);

        let response = self.client.execute(request).await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status { status, body });
        }

        let body: Value = response.json().await?;
        parse_response(&body)
    }
}

/// Extracts the translation from the nested-array response.
///
/// Shape: `[[["Bonjour","Hello",...], ...], null, "en", ...]`. Element 0
/// holds one segment per sentence; element 2 is the detected source code.
fn parse_response(body: &Value) -> Result<Translation, GatewayError> {
    let segments = body
        .get(0)
        .and_then(Value::as_array)
        .ok_or_else(|| GatewayError::MalformedResponse("missing sentence segments".into()))?;

    let text: String = segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(Value::as_str))
        .collect();

    if text.is_empty() {
        return Err(GatewayError::MalformedResponse(
            "response contained no translated text".into(),
        ));
    }

    let detected_source = body.get(2).and_then(Value::as_str).map(str::to_string);

    Ok(Translation {
        text,
        detected_source,
    })
}
