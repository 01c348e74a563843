use std::fmt::Write as _;

use crate::error::{PipelineError, Result};
use crate::generator::context::GeneratorContext;
use crate::llm::client::PromptPayload;

pub const ITINERARY_MISSING: &str = "No itinerary generated.";
pub const ITINERARY_FAILED: &str = "Failed to generate holiday plan. Please try again.";
/// 行程天数上限，HTML提示按天展开，天数决定提示长度
pub const MAX_ITINERARY_DAYS: u32 = 30;

/// 行程提示的两种风格
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItineraryStyle {
    /// 宽松排版的纯文本
    Plain,
    /// 使用 `<b>` / `<br>` 标签排版
    #[default]
    HtmlTagged,
}

impl std::fmt::Display for ItineraryStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItineraryStyle::Plain => write!(f, "plain"),
            ItineraryStyle::HtmlTagged => write!(f, "html"),
        }
    }
}

impl std::str::FromStr for ItineraryStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" | "text" => Ok(ItineraryStyle::Plain),
            "html" | "html-tagged" => Ok(ItineraryStyle::HtmlTagged),
            _ => Err(format!("Unknown itinerary style: {}", s)),
        }
    }
}

impl ItineraryStyle {
    pub fn build_prompt(&self, destination: &str, days: u32) -> String {
        match self {
            ItineraryStyle::Plain => plain_prompt(destination, days),
            ItineraryStyle::HtmlTagged => html_prompt(destination, days),
        }
    }
}

fn plain_prompt(destination: &str, days: u32) -> String {
    format!(
        "Create a detailed {days}-day travel itinerary for {destination}. For each day, include:

1. Morning activities (including breakfast recommendations)
2. Afternoon activities (including lunch recommendations)
3. Evening activities (including dinner recommendations)
4. Estimated timings for each activity
5. Transportation tips between locations
6. Estimated costs (in local currency and USD)
7. Local customs and etiquette tips
8. Weather-appropriate clothing suggestions
9. Photo opportunity spots
10. Alternative indoor options in case of bad weather

Format the response day by day, with clear headings and bullet points. Make the itinerary realistic and well-paced, considering travel times between locations. Include local specialties and hidden gems, not just tourist spots."
    )
}

const HTML_DAY_BLOCK: &str = "<b>Morning (Time: 9:00 AM - 12:00 PM)</b>
• <b>Activities:</b> [List with timings]
• <b>Breakfast recommendation:</b> [Details]
• <b>Transportation details:</b> [Details]
• <b>Photo opportunities:</b> [Details]
• <b>Estimated costs:</b> [Details in local currency and USD]

<b>Afternoon (Time: 12:00 PM - 5:00 PM)</b>
• <b>Activities:</b> [List with timings]
• <b>Lunch recommendation:</b> [Details]
• <b>Transportation details:</b> [Details]
• <b>Photo opportunities:</b> [Details]
• <b>Estimated costs:</b> [Details in local currency and USD]

<b>Evening (Time: 5:00 PM - 9:00 PM)</b>
• <b>Activities:</b> [List with timings]
• <b>Dinner recommendation:</b> [Details]
• <b>Transportation details:</b> [Details]
• <b>Photo opportunities:</b> [Details]
• <b>Estimated costs:</b> [Details in local currency and USD]";

fn html_prompt(destination: &str, days: u32) -> String {
    let mut daily = String::new();
    for day in 1..=days {
        if day > 1 {
            daily.push_str("\n\n<br><br>\n\n");
        }
        let _ = write!(daily, "Day {day}: [Theme/Area Focus]\n\n");
        if day == 1 {
            daily.push_str(HTML_DAY_BLOCK);
        } else {
            daily.push_str("[Same structure as Day 1]");
        }
    }

    format!(
        "Create a detailed {days}-day travel itinerary for {destination}. Use HTML tags for formatting and structure the response as follows:

{destination} {days}-Day Itinerary

Essential Information

• <b>Weather and Best Time:</b> [Details]
• <b>Local Currency and Costs:</b> [Details]
• <b>Local Customs & Etiquette:</b> [Details]
• <b>What to Pack:</b> [Details]

<br>

Daily Itineraries

<br>

{daily}

<br><br>

Additional Information

• <b>Rainy Day Alternatives:</b> [Details]
• <b>Emergency Contacts:</b> [Details]
• <b>Local Transportation Tips:</b> [Details]
• <b>Money-Saving Tips:</b> [Details]

Format the response with proper HTML bold tags (<b>text</b>), clear bullet points, and double line breaks (<br><br>) between days for better readability. Include specific details like restaurant names, costs, and timing. Make the itinerary realistic and well-paced."
    )
}

/// 行程生成；失败时返回错误而不是占位文本
#[derive(Default)]
pub struct ItineraryPlanner;

impl ItineraryPlanner {
    pub async fn build_itinerary(
        &self,
        context: &GeneratorContext,
        destination: &str,
        days: u32,
        style: ItineraryStyle,
    ) -> Result<String> {
        let destination = destination.trim();
        if destination.is_empty() {
            return Err(PipelineError::InvalidInput(
                "destination must not be empty".to_string(),
            ));
        }
        if !(1..=MAX_ITINERARY_DAYS).contains(&days) {
            return Err(PipelineError::InvalidInput(format!(
                "number of days must be between 1 and {}, got {}",
                MAX_ITINERARY_DAYS, days
            )));
        }

        tracing::info!("生成 {} 的 {} 天行程 ({})", destination, days, style);
        let payload = PromptPayload::bare_text(style.build_prompt(destination, days));

        match context.model.complete(&payload).await {
            Ok(Some(text)) => Ok(text),
            Ok(None) => Ok(ITINERARY_MISSING.to_string()),
            Err(err) => Err(PipelineError::Generation {
                message: ITINERARY_FAILED.to_string(),
                source: Box::new(err),
            }),
        }
    }
}
