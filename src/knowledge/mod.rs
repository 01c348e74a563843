//! 百科知识服务

use async_trait::async_trait;

mod wikipedia;

pub use wikipedia::WikipediaService;

/// 摘要中没有 extract 字段时的固定文本
pub const NO_DETAILS: &str = "Wikipedia has no details on this topic.";
/// 查询失败时的固定文本
pub const LOOKUP_FAILED: &str = "Error retrieving Wikipedia information.";

/// 根据名称查询一段摘要。查不到内容属于正常结果，因此该接口不返回错误。
#[async_trait]
pub trait KnowledgeService: Send + Sync {
    async fn lookup(&self, name: &str) -> String;
}
