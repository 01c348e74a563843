use std::sync::Arc;

use crate::config::Config;
use crate::error::Result;
use crate::generator::extractor::{DeterminerPhraseExtractor, NameExtractionStrategy};
use crate::knowledge::{KnowledgeService, WikipediaService};
use crate::llm::client::{GeminiClient, GenerativeModel};

/// 一次请求所需的全部外部协作者，只读共享
#[derive(Clone)]
pub struct GeneratorContext {
    /// 生成式模型，用于文本与图片提示
    pub model: Arc<dyn GenerativeModel>,
    /// 百科摘要服务
    pub knowledge: Arc<dyn KnowledgeService>,
    /// 地标名称提取策略
    pub extractor: Arc<dyn NameExtractionStrategy>,
    /// 配置
    pub config: Config,
}

impl GeneratorContext {
    /// 按配置创建生产环境使用的上下文
    pub fn new(config: Config) -> Result<Self> {
        let model = Arc::new(GeminiClient::new(config.model.clone())?);
        let knowledge = Arc::new(WikipediaService::new(&config.knowledge)?);

        Ok(Self {
            model,
            knowledge,
            extractor: Arc::new(DeterminerPhraseExtractor),
            config,
        })
    }

    /// 使用指定的协作者创建上下文
    pub fn with_services(
        config: Config,
        model: Arc<dyn GenerativeModel>,
        knowledge: Arc<dyn KnowledgeService>,
    ) -> Self {
        Self {
            model,
            knowledge,
            extractor: Arc::new(DeterminerPhraseExtractor),
            config,
        }
    }

    /// 替换名称提取策略
    pub fn with_extractor(mut self, extractor: Arc<dyn NameExtractionStrategy>) -> Self {
        self.extractor = extractor;
        self
    }
}
