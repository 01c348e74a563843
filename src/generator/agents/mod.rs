use crate::llm::client::{GenerativeModel, PromptPayload};

pub mod content_refiner;
pub mod itinerary_planner;
pub mod travel_advisor;

pub use content_refiner::ContentRefiner;
pub use itinerary_planner::{ItineraryPlanner, ItineraryStyle};
pub use travel_advisor::{TravelAdvisor, TravelCategory};

/// 调用模型，缺少候选或出错时分别以固定文本代替
async fn complete_or_placeholder(
    model: &dyn GenerativeModel,
    payload: &PromptPayload,
    stage: &str,
    when_missing: &str,
    when_failed: &str,
) -> String {
    match model.complete(payload).await {
        Ok(Some(text)) => text,
        Ok(None) => {
            tracing::warn!("{} 没有返回内容", stage);
            when_missing.to_string()
        }
        Err(err) => {
            tracing::error!("{} 失败: {}", stage, err);
            when_failed.to_string()
        }
    }
}
