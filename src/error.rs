use thiserror::Error;

/// 流水线错误分类
#[derive(Debug, Error)]
pub enum PipelineError {
    /// 输入在发出任何网络请求之前就被拒绝
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// 外部服务的网络/传输错误，或响应格式不符合预期
    #[error("{service} error: {message}")]
    Upstream { service: String, message: String },

    /// 提取阶段没有得到可用的地标名称
    #[error("no result: {0}")]
    NoResult(String),

    /// 行程生成失败（包装了底层错误）
    #[error("{message}")]
    Generation {
        message: String,
        #[source]
        source: Box<PipelineError>,
    },
}

impl PipelineError {
    pub fn upstream(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Upstream {
            service: service.into(),
            message: message.into(),
        }
    }

    /// 面向用户的简短错误描述，上游错误只保留服务端返回的消息
    pub fn user_message(&self) -> String {
        match self {
            Self::Upstream { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// 请求地址的查询串里带有 API KEY，错误文本中不能出现地址
impl From<reqwest::Error> for PipelineError {
    fn from(err: reqwest::Error) -> Self {
        Self::upstream("http", err.without_url().to_string())
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
