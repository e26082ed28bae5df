//! Client for OpenAI-compatible chat completion endpoints.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::catalog::{AUTO_CODE, LanguageCatalog};
use super::prompt::build_system_prompt;
use super::{GatewayError, Translation};

// Use Cow to avoid cloning strings that are only borrowed for serialization
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

pub struct OpenAiClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
    catalog: LanguageCatalog,
}

impl OpenAiClient {
    pub fn new(endpoint: String, model: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            model,
            api_key,
            catalog: LanguageCatalog::builtin(),
        }
    }

    /// Models get language names, not codes; unknown codes pass through verbatim.
    fn language_name<'a>(&'a self, code: &'a str) -> &'a str {
        self.catalog.label_for_code(code).unwrap_or(code)
    }

    fn build_request<'a>(
        &'a self,
        text: &'a str,
        source: &'a str,
        target: &'a str,
    ) -> ChatCompletionRequest<'a> {
        let source_name = (source != AUTO_CODE).then(|| self.language_name(source));
        let system_prompt = build_system_prompt(source_name, self.language_name(target));

        ChatCompletionRequest {
            model: &self.model,
            messages: vec![
                Message {
                    role: "system",
                    content: Cow::Owned(system_prompt),
                },
                Message {
                    role: "user",
                    content: Cow::Borrowed(text),
                },
            ],
            stream: false,
        }
    }

    pub async fn translate(
        &self,
        text: &str,
        source: &str,
        target: &str,
    ) -> Result<Translation, GatewayError> {
        let url = format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        );
        crate::debug!("POST {url} (model {}, {source} -> {target})", self.model);

        let chat_request = self.build_request(text, source, target);
        let mut http_request = self.client.post(&url).json(&chat_request);

        // Add Authorization header if API key is present
        if let Some(api_key) = &self.api_key {
            http_request = http_request.header("Authorization", format!("Bearer {api_key}"));
        }

        let response = http_request.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status { status, body });
        }

        let completion: ChatCompletionResponse = response.json().await?;
        extract_text(completion).map(Translation::new)
    }
}

fn extract_text(completion: ChatCompletionResponse) -> Result<String, GatewayError> {
    let content: String = completion
        .choices
        .into_iter()
        .filter_map(|c| c.message.content)
        .collect();

    if content.trim().is_empty() {
        Err(GatewayError::MalformedResponse(
            "completion contained no text".into(),
        ))
    } else {
        Ok(content.trim_end().to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client() -> OpenAiClient {
        OpenAiClient::new(
            "http://localhost:11434".to_string(),
            "gemma3:12b".to_string(),
            None,
        )
    }

    #[test]
    fn test_build_request_names_languages() {
        let client = client();
        let request = client.build_request("Hello", "en", "fr");
        assert_eq!(request.model, "gemma3:12b");
        assert!(!request.stream);
        assert!(request.messages[0].content.contains("from English to French"));
        assert_eq!(request.messages[1].content, "Hello");
    }

    #[test]
    fn test_build_request_auto_source() {
        let client = client();
        let request = client.build_request("Hello", "auto", "ja");
        assert!(request.messages[0].content.contains("to Japanese"));
        assert!(!request.messages[0].content.contains("auto"));
    }

    #[test]
    fn test_request_serializes_like_openai() {
        let client = client();
        let json = serde_json::to_value(client.build_request("Hi", "en", "de")).unwrap();
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["stream"], false);
    }

    #[test]
    fn test_extract_text() {
        let completion: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"Bonjour\n"}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_text(completion).unwrap(), "Bonjour");
    }

    #[test]
    fn test_extract_text_empty_content() {
        let completion: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"content":null}}]}"#).unwrap();
        assert!(matches!(
            extract_text(completion),
            Err(GatewayError::MalformedResponse(_))
        ));
    }
}
