//! OpenAI-compatible implementation of [`GenerationBackend`].
//!
//! Builds one chat completion per request: a system message from the handler
//! persona plus the expected-output hint, and a user message from the task
//! description.

use anyhow::Result;
use async_openai::{
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use tracing::instrument;

use super::{mask_token, EnvBackendConfig, GenerationBackend, GenerationRequest};

/// Chat-completion backend. Wraps the async-openai client; the API key is
/// stored only for masked logging.
#[derive(Clone)]
pub struct OpenAIBackend {
    client: Client<async_openai::config::OpenAIConfig>,
    model: String,
    api_key_for_logging: String,
}

impl OpenAIBackend {
    pub fn new(api_key: String) -> Self {
        let config = async_openai::config::OpenAIConfig::new().with_api_key(api_key.clone());
        Self {
            client: Client::with_config(config),
            model: "gpt-3.5-turbo".to_string(),
            api_key_for_logging: api_key,
        }
    }

    /// Builds a client with a custom base URL (proxies or compatible endpoints).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let config = async_openai::config::OpenAIConfig::new()
            .with_api_key(api_key.clone())
            .with_api_base(base_url);
        Self {
            client: Client::with_config(config),
            model: "gpt-3.5-turbo".to_string(),
            api_key_for_logging: api_key,
        }
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn from_config(config: &EnvBackendConfig) -> Self {
        Self::with_base_url(config.api_key.clone(), config.base_url.clone())
            .with_model(config.model.clone())
    }

    fn system_content(request: &GenerationRequest) -> String {
        format!(
            "{}\nExpected output: {}",
            request.persona, request.expected_output
        )
    }
}

#[async_trait]
impl GenerationBackend for OpenAIBackend {
    #[instrument(skip(self, request))]
    async fn generate(&self, request: &GenerationRequest) -> Result<String> {
        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(Self::system_content(request))
                .build()?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(request.task_description.clone())
                .build()?
                .into(),
        ];

        tracing::info!(
            model = %self.model,
            api_key = %mask_token(&self.api_key_for_logging),
            "chat completion request"
        );

        let completion_request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .build()?;

        if let Ok(json) = serde_json::to_string_pretty(&completion_request) {
            tracing::debug!(request_json = %json, "chat completion request JSON");
        }

        let response = self.client.chat().create(completion_request).await?;

        if let Some(ref u) = response.usage {
            tracing::info!(
                prompt_tokens = u.prompt_tokens,
                completion_tokens = u.completion_tokens,
                total_tokens = u.total_tokens,
                "chat completion usage"
            );
        }

        if let Some(choice) = response.choices.first() {
            Ok(choice.message.content.clone().unwrap_or_default())
        } else {
            anyhow::bail!("No response from backend");
        }
    }
}
