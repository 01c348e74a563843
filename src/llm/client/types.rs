//! generateContent 接口的请求/响应结构

use serde::Serialize;
use serde_json::Value;

use crate::types::ImageData;

/// 发送给模型的一段提示内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptPayload {
    /// 文本提示，`role` 为空时请求体中不带 role 字段
    Text { role: Option<String>, text: String },
    /// 图片提示（不附带文本）
    InlineData(ImageData),
}

impl PromptPayload {
    /// 以 user 角色发送的文本
    pub fn user_text(text: impl Into<String>) -> Self {
        Self::Text {
            role: Some("user".to_string()),
            text: text.into(),
        }
    }

    /// 不带角色的文本
    pub fn bare_text(text: impl Into<String>) -> Self {
        Self::Text {
            role: None,
            text: text.into(),
        }
    }

    pub fn image(image: ImageData) -> Self {
        Self::InlineData(image)
    }

    /// 供日志使用的简短描述，不输出图片内容
    pub fn summary(&self) -> String {
        match self {
            Self::Text { text, .. } => {
                let preview: String = text.chars().take(50).collect();
                format!("text({} chars): {}", text.chars().count(), preview)
            }
            Self::InlineData(image) => {
                format!("image({}, {} bytes)", image.mime_type, image.bytes.len())
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Part {
    Text { text: String },
    InlineData { inline_data: InlineData },
}

#[derive(Debug, Clone, Serialize)]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

impl From<&PromptPayload> for GenerateContentRequest {
    fn from(payload: &PromptPayload) -> Self {
        let content = match payload {
            PromptPayload::Text { role, text } => Content {
                role: role.clone(),
                parts: vec![Part::Text { text: text.clone() }],
            },
            PromptPayload::InlineData(image) => Content {
                role: None,
                parts: vec![Part::InlineData {
                    inline_data: InlineData {
                        mime_type: image.mime_type.clone(),
                        data: image.base64_payload(),
                    },
                }],
            },
        };
        Self {
            contents: vec![content],
        }
    }
}

/// 取 `candidates[0].content.parts[0].text`，缺失或为空时返回 None
pub fn first_candidate_text(response: &Value) -> Option<String> {
    response
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .get(0)?
        .get("text")?
        .as_str()
        .filter(|text| !text.is_empty())
        .map(ToOwned::to_owned)
}

/// 从错误响应体中取 `error.message`
pub fn error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    value
        .get("error")?
        .get("message")?
        .as_str()
        .map(ToOwned::to_owned)
}
