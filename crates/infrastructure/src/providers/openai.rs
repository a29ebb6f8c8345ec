use super::http_client::send_json;
use async_trait::async_trait;
use dnsrpc_application::ports::TextGenerator;
use dnsrpc_domain::config::ProvidersConfig;
use dnsrpc_domain::DomainError;
use serde::{Deserialize, Serialize};

const SYSTEM_PROMPT: &str = "You are a DNS-based AI assistant. Provide concise, accurate answers \
that fit within DNS TXT record limits (255 characters).";
const SERVICE: &str = "openai";

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    user: &'a str,
    messages: [ChatMessage<'a>; 2],
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Chat-completions client for any OpenAI-compatible endpoint.
pub struct OpenAiTextGenerator {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
    max_tokens: u32,
}

impl OpenAiTextGenerator {
    pub fn new(client: reqwest::Client, config: &ProvidersConfig) -> Self {
        Self {
            client,
            base_url: config.openai_base_url.trim_end_matches('/').to_string(),
            api_key: config.openai_api_key.clone(),
            model: config.openai_model.clone(),
            max_tokens: config.openai_max_tokens,
        }
    }
}

#[async_trait]
impl TextGenerator for OpenAiTextGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| DomainError::Upstream("OpenAI API key not configured".to_string()))?;

        let body = ChatRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            user: "dns-server",
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
        };
        let body = serde_json::to_vec(&body)
            .map_err(|e| DomainError::Internal(format!("Failed to encode request: {}", e)))?;

        let request = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body);

        let response: ChatResponse = send_json(SERVICE, request).await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or_else(|| DomainError::Upstream("openai returned no content".to_string()))
    }
}
