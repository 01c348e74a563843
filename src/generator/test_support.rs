//! 单元测试使用的替身服务

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::config::Config;
use crate::error::{PipelineError, Result};
use crate::generator::context::GeneratorContext;
use crate::knowledge::KnowledgeService;
use crate::llm::client::{GenerativeModel, PromptPayload};

type Responder = dyn Fn(&PromptPayload) -> Result<Option<String>> + Send + Sync;

/// 按脚本应答的模型，并记录收到的所有提示
pub struct ScriptedModel {
    responder: Box<Responder>,
    calls: Mutex<Vec<PromptPayload>>,
}

impl ScriptedModel {
    pub fn new<F>(responder: F) -> Arc<Self>
    where
        F: Fn(&PromptPayload) -> Result<Option<String>> + Send + Sync + 'static,
    {
        Arc::new(Self {
            responder: Box::new(responder),
            calls: Mutex::new(Vec::new()),
        })
    }

    /// 原样返回文本提示
    pub fn echo() -> Arc<Self> {
        Self::new(|payload| Ok(Some(prompt_text(payload).to_string())))
    }

    /// 每次调用都以上游错误失败
    pub fn failing() -> Arc<Self> {
        Self::new(|_| Err(PipelineError::upstream("gemini", "connection refused")))
    }

    pub fn calls(&self) -> Vec<PromptPayload> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl GenerativeModel for ScriptedModel {
    async fn complete(&self, payload: &PromptPayload) -> Result<Option<String>> {
        self.calls.lock().unwrap().push(payload.clone());
        (self.responder)(payload)
    }
}

/// 返回固定摘要的知识服务
pub struct StubKnowledge {
    summary: String,
    lookups: Mutex<Vec<String>>,
}

impl StubKnowledge {
    pub fn new(summary: &str) -> Arc<Self> {
        Arc::new(Self {
            summary: summary.to_string(),
            lookups: Mutex::new(Vec::new()),
        })
    }

    pub fn lookups(&self) -> Vec<String> {
        self.lookups.lock().unwrap().clone()
    }
}

#[async_trait]
impl KnowledgeService for StubKnowledge {
    async fn lookup(&self, name: &str) -> String {
        self.lookups.lock().unwrap().push(name.to_string());
        self.summary.clone()
    }
}

/// 文本提示的内容；图片提示返回空串
pub fn prompt_text(payload: &PromptPayload) -> &str {
    match payload {
        PromptPayload::Text { text, .. } => text,
        PromptPayload::InlineData(_) => "",
    }
}

pub fn context_with(
    model: Arc<dyn GenerativeModel>,
    knowledge: Arc<dyn KnowledgeService>,
) -> GeneratorContext {
    GeneratorContext::with_services(Config::default(), model, knowledge)
}
