//! 从模型的自由文本输出中提取地标名称

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{PipelineError, Result};

/// 冠词后接的首字母大写词组，例如 "the Eiffel Tower"
static DETERMINER_PHRASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:the|a|an) ([A-Z][a-z]+(?: [A-Z][a-z]+)*)").expect("valid regex")
});

/// 名称提取策略
pub trait NameExtractionStrategy: Send + Sync {
    /// 返回提取到的名称；结果为空时返回 [`PipelineError::NoResult`]
    fn extract(&self, model_output: &str) -> Result<String>;
}

/// 默认策略：优先取冠词后的大写词组，否则取第一行。
///
/// 这是启发式规则，任何跟在 "the" 后面的大写词组都会被当作地标名称。
#[derive(Debug, Default, Clone, Copy)]
pub struct DeterminerPhraseExtractor;

impl NameExtractionStrategy for DeterminerPhraseExtractor {
    fn extract(&self, model_output: &str) -> Result<String> {
        let name = match DETERMINER_PHRASE.captures(model_output) {
            Some(captures) => captures[1].to_string(),
            None => model_output
                .split('\n')
                .next()
                .unwrap_or_default()
                .trim()
                .to_string(),
        };

        if name.is_empty() {
            return Err(PipelineError::NoResult(
                "no landmark name in model output".to_string(),
            ));
        }
        Ok(name)
    }
}
