use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::{KnowledgeService, LOOKUP_FAILED, NO_DETAILS};
use crate::config::KnowledgeConfig;
use crate::error::{PipelineError, Result};

const SERVICE: &str = "wikipedia";

/// Wikipedia REST 摘要接口
#[derive(Clone)]
pub struct WikipediaService {
    http: reqwest::Client,
    base_url: String,
}

impl WikipediaService {
    pub fn new(config: &KnowledgeConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(timeout));
        }
        Ok(Self {
            http: builder.build()?,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn summary_url(&self, name: &str) -> String {
        format!(
            "{}/page/summary/{}",
            self.base_url,
            urlencoding::encode(name)
        )
    }

    /// 返回摘要的 extract 字段；没有该字段时为 `Ok(None)`
    pub async fn fetch_summary(&self, name: &str) -> Result<Option<String>> {
        let url = self.summary_url(name);
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PipelineError::upstream(
                SERVICE,
                format!("HTTP {} for {}", status.as_u16(), url),
            ));
        }

        let value: Value = response.json().await?;
        Ok(value
            .get("extract")
            .and_then(Value::as_str)
            .filter(|extract| !extract.is_empty())
            .map(ToOwned::to_owned))
    }
}

#[async_trait]
impl KnowledgeService for WikipediaService {
    async fn lookup(&self, name: &str) -> String {
        tracing::info!("获取 Wikipedia 数据: {}", name);
        match self.fetch_summary(name).await {
            Ok(Some(extract)) => extract,
            Ok(None) => NO_DETAILS.to_string(),
            Err(err) => {
                tracing::error!("Wikipedia API 错误: {}", err);
                LOOKUP_FAILED.to_string()
            }
        }
    }
}
