//! Gemini generateContent 接口的实现

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::GenerativeModel;
use super::types::{GenerateContentRequest, PromptPayload, error_message, first_candidate_text};
use crate::config::ModelConfig;
use crate::error::{PipelineError, Result};

const SERVICE: &str = "gemini";

/// Gemini客户端
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    config: ModelConfig,
}

impl GeminiClient {
    pub fn new(config: ModelConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(timeout));
        }
        let http = builder.build()?;
        Ok(Self { http, config })
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }
}

#[async_trait]
impl GenerativeModel for GeminiClient {
    async fn complete(&self, payload: &PromptPayload) -> Result<Option<String>> {
        tracing::info!("发送请求到 {}: {}", self.config.model, payload.summary());

        let request = GenerateContentRequest::from(payload);
        let response = self
            .http
            .post(self.config.endpoint())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let message =
                error_message(&body).unwrap_or_else(|| format!("HTTP {}: {}", status.as_u16(), body));
            tracing::error!("Gemini API 错误: {}", message);
            return Err(PipelineError::upstream(SERVICE, message));
        }

        let value: Value = serde_json::from_str(&body).map_err(|e| {
            PipelineError::upstream(SERVICE, format!("malformed response body: {e}"))
        })?;
        tracing::debug!(
            "Gemini API 响应: {}",
            serde_json::to_string_pretty(&value).unwrap_or_else(|_| body.clone())
        );

        Ok(first_candidate_text(&value))
    }
}
