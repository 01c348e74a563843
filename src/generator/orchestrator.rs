use crate::error::{PipelineError, Result};
use crate::generator::agents::{ContentRefiner, ItineraryPlanner, ItineraryStyle, TravelAdvisor};
use crate::generator::context::GeneratorContext;
use crate::generator::workflow::{TimingKeys, TimingScope};
use crate::llm::client::{NO_RESPONSE, PromptPayload};
use crate::types::{ImageData, LandmarkRecognition, Query};

/// 旅行建议部分的标题
pub const RECOMMENDATIONS_HEADER: &str = "##🔹 **Travel Recommendations:**";
pub const INVALID_IMAGE: &str = "Invalid image format. Please upload a valid image.";
pub const NO_LANDMARK: &str = "❌ No recognizable landmark detected.";

/// 知识查询的入口：直接给出名称，或给出图片先识别
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KnowledgeRequest {
    Subject(String),
    Image(ImageData),
}

/// 拼接最终回答
pub fn compose_answer(refined: &str, recommendations: &str) -> String {
    format!("{refined}\n\n{RECOMMENDATIONS_HEADER}\n{recommendations}")
}

/// 请求编排器
///
/// 知识查询路径上每个阶段都会自行降级为占位文本，所以该路径总是返回字符串；
/// 行程路径则把失败作为 [`PipelineError::Generation`] 返回给调用方。
#[derive(Clone)]
pub struct Orchestrator {
    context: GeneratorContext,
}

impl Orchestrator {
    pub fn new(context: GeneratorContext) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &GeneratorContext {
        &self.context
    }

    /// 原始文本直接交给模型
    pub async fn handle_text_query(&self, text: &str) -> String {
        tracing::info!("发送文本查询: {}", text);
        self.context
            .model
            .generate(&PromptPayload::user_text(text))
            .await
    }

    pub async fn handle_query(&self, query: Query) -> String {
        match query {
            Query::Text(text) => self.handle_text_query(&text).await,
            Query::Image(image) => {
                self.handle_knowledge_request(KnowledgeRequest::Image(image))
                    .await
            }
        }
    }

    /// 识别图片中的地标，任何失败都返回错误
    pub async fn identify(&self, image: &ImageData) -> Result<LandmarkRecognition> {
        tracing::info!("发送图片到模型识别 ({})...", image.mime_type);
        let description = self
            .context
            .model
            .complete(&PromptPayload::image(image.clone()))
            .await?
            .unwrap_or_else(|| NO_RESPONSE.to_string());
        tracing::info!("模型识别结果: {}", description);

        let landmark_name = self.context.extractor.extract(&description)?;
        Ok(LandmarkRecognition {
            landmark_name,
            description,
        })
    }

    /// 从 data URI 识别地标
    pub async fn recognize_landmark(&self, data_uri: &str) -> Result<LandmarkRecognition> {
        let image = ImageData::from_data_uri(data_uri)?;
        self.identify(&image).await
    }

    /// 百科查询 → 重新排版 → 旅行建议，按顺序执行并拼接
    pub async fn handle_knowledge_request(&self, request: KnowledgeRequest) -> String {
        let mut timing = TimingScope::new();

        let name = match request {
            KnowledgeRequest::Subject(name) => name.trim().to_string(),
            KnowledgeRequest::Image(image) => {
                timing.start_phase(TimingKeys::VISION);
                let recognition = self.identify(&image).await;
                timing.end_phase(TimingKeys::VISION);
                match recognition {
                    Ok(recognition) => recognition.landmark_name,
                    Err(PipelineError::NoResult(_)) => return NO_LANDMARK.to_string(),
                    Err(err) => {
                        tracing::error!("处理图片出错: {}", err);
                        return format!("Error processing image: {}", err.user_message());
                    }
                }
            }
        };
        if name.is_empty() {
            return NO_LANDMARK.to_string();
        }

        timing.start_phase(TimingKeys::KNOWLEDGE);
        let summary = self.context.knowledge.lookup(&name).await;
        timing.end_phase(TimingKeys::KNOWLEDGE);

        timing.start_phase(TimingKeys::REFINE);
        let refined = ContentRefiner.refine(&self.context, &name, &summary).await;
        timing.end_phase(TimingKeys::REFINE);

        timing.start_phase(TimingKeys::RECOMMEND);
        let recommendations = TravelAdvisor.recommend(&self.context, &name).await;
        timing.end_phase(TimingKeys::RECOMMEND);

        tracing::debug!("{} 的处理耗时\n{}", name, timing.generate_timing_report());
        compose_answer(&refined, &recommendations)
    }

    /// HTML标签风格的行程
    pub async fn handle_itinerary_request(&self, destination: &str, days: u32) -> Result<String> {
        self.itinerary(destination, days, ItineraryStyle::HtmlTagged)
            .await
    }

    /// 纯文本风格的行程
    pub async fn generate_holiday_plan(&self, destination: &str, days: u32) -> Result<String> {
        self.itinerary(destination, days, ItineraryStyle::Plain).await
    }

    pub async fn itinerary(
        &self,
        destination: &str,
        days: u32,
        style: ItineraryStyle,
    ) -> Result<String> {
        ItineraryPlanner
            .build_itinerary(&self.context, destination, days, style)
            .await
            .inspect_err(|err| {
                let cause = std::error::Error::source(err)
                    .map(ToString::to_string)
                    .unwrap_or_default();
                tracing::error!("生成行程失败: {} {}", err, cause);
            })
    }

    pub async fn category_info(&self, name: &str, category_number: usize) -> Result<String> {
        TravelAdvisor
            .category_info(&self.context, name, category_number)
            .await
    }

    // 以下为提供给外层应用的接口

    pub async fn send_text(&self, text: &str) -> String {
        self.handle_text_query(text).await
    }

    /// 图片以 `data:<mime>;base64,<payload>` 传入，格式不对时不会发出任何请求
    pub async fn send_image(&self, data_uri: &str) -> String {
        let preview: String = data_uri.chars().take(50).collect();
        tracing::info!("收到图片数据: {}", preview);

        match ImageData::from_data_uri(data_uri) {
            Ok(image) => {
                self.handle_knowledge_request(KnowledgeRequest::Image(image))
                    .await
            }
            Err(err) => {
                tracing::error!("图片格式无效: {}", err);
                INVALID_IMAGE.to_string()
            }
        }
    }

    pub async fn fetch_knowledge(&self, name: &str) -> String {
        self.handle_knowledge_request(KnowledgeRequest::Subject(name.to_string()))
            .await
    }

    pub async fn generate_itinerary(&self, destination: &str, days: u32) -> Result<String> {
        self.handle_itinerary_request(destination, days).await
    }
}
