use std::sync::LazyLock;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use regex::Regex;

use crate::error::{PipelineError, Result};

static DATA_URI_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^data:([A-Za-z0-9!#$&^_.+-]+/[A-Za-z0-9!#$&^_.+-]+);base64,")
        .expect("valid regex")
});

/// 用户上传的图片
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    /// MIME类型，形如 `image/jpeg`
    pub mime_type: String,
    /// 解码后的原始字节
    pub bytes: Vec<u8>,
}

impl ImageData {
    /// 从 `data:<mime>;base64,<payload>` 形式的 data URI 解析图片
    pub fn from_data_uri(data_uri: &str) -> Result<Self> {
        let data_uri = data_uri.trim();
        let captures = DATA_URI_PREFIX.captures(data_uri).ok_or_else(|| {
            PipelineError::InvalidInput("missing data:<mime>;base64, prefix".to_string())
        })?;

        let prefix_len = captures.get(0).map(|m| m.end()).unwrap_or_default();
        let mime_type = captures[1].to_string();
        let payload = data_uri[prefix_len..].trim();
        if payload.is_empty() {
            return Err(PipelineError::InvalidInput(
                "empty image payload".to_string(),
            ));
        }

        let bytes = STANDARD
            .decode(payload)
            .map_err(|e| PipelineError::InvalidInput(format!("payload is not base64: {e}")))?;

        Ok(Self { mime_type, bytes })
    }

    /// 图片内容的base64编码，用于放入请求体
    pub fn base64_payload(&self) -> String {
        STANDARD.encode(&self.bytes)
    }

    pub fn to_data_uri(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64_payload())
    }
}

/// 一次查询的输入
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Text(String),
    Image(ImageData),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_data_uri() {
        let image = ImageData::from_data_uri("data:image/png;base64,aGVsbG8=").unwrap();
        assert_eq!(image.mime_type, "image/png");
        assert_eq!(image.bytes, b"hello");
        assert_eq!(image.base64_payload(), "aGVsbG8=");
        assert_eq!(image.to_data_uri(), "data:image/png;base64,aGVsbG8=");
    }

    #[test]
    fn test_reject_missing_prefix() {
        for input in [
            "aGVsbG8=",
            "image/png;base64,aGVsbG8=",
            "data:;base64,aGVsbG8=",
            "data:image;base64,aGVsbG8=",
            "data:image/png,aGVsbG8=",
            "",
        ] {
            let result = ImageData::from_data_uri(input);
            assert!(
                matches!(result, Err(PipelineError::InvalidInput(_))),
                "expected invalid input for {input:?}"
            );
        }
    }

    #[test]
    fn test_reject_bad_payload() {
        assert!(matches!(
            ImageData::from_data_uri("data:image/jpeg;base64,"),
            Err(PipelineError::InvalidInput(_))
        ));
        assert!(matches!(
            ImageData::from_data_uri("data:image/jpeg;base64,@@not base64@@"),
            Err(PipelineError::InvalidInput(_))
        ));
    }
}
