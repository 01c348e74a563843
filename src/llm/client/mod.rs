//! LLM客户端 - 提供统一的生成式模型服务接口

use async_trait::async_trait;

use crate::error::Result;

mod providers;
pub mod types;

pub use providers::GeminiClient;
pub use types::PromptPayload;

/// 响应中没有候选文本时返回的固定文本
pub const NO_RESPONSE: &str = "No response from AI.";

/// 生成式模型服务
#[async_trait]
pub trait GenerativeModel: Send + Sync {
    /// 发送提示并返回第一个候选的文本；`Ok(None)` 表示响应中没有候选文本。
    /// 传输失败与非2xx响应以错误返回。
    async fn complete(&self, payload: &PromptPayload) -> Result<Option<String>>;

    /// 不会失败的调用方式：缺少候选时返回 [`NO_RESPONSE`]，出错时返回 `Error: ...` 文本
    async fn generate(&self, payload: &PromptPayload) -> String {
        match self.complete(payload).await {
            Ok(Some(text)) => text,
            Ok(None) => NO_RESPONSE.to_string(),
            Err(err) => {
                tracing::error!("模型调用失败: {}", err);
                format!("Error: {}", err.user_message())
            }
        }
    }
}
