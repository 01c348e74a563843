use std::fmt::Display;

use super::complete_or_placeholder;
use crate::error::{PipelineError, Result};
use crate::generator::context::GeneratorContext;
use crate::llm::client::PromptPayload;

pub const RECOMMEND_MISSING: &str = "No travel recommendations available.";
pub const RECOMMEND_FAILED: &str = "Error generating travel recommendations.";
pub const CATEGORY_MISSING: &str = "No category information available.";
pub const CATEGORY_FAILED: &str = "Error retrieving category information.";

/// 旅行建议的固定分类，编号与提示中的顺序一致（从1开始）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TravelCategory {
    BestTimeToVisit,
    HowToGetThere,
    WhatToSeeAndDo,
    LocalTips,
    Weather,
    Restaurants,
    Accommodation,
    Attractions,
    Shopping,
    Nightlife,
    DayTrips,
    LocalTransportation,
    PackingList,
}

impl TravelCategory {
    pub const ALL: [TravelCategory; 13] = [
        TravelCategory::BestTimeToVisit,
        TravelCategory::HowToGetThere,
        TravelCategory::WhatToSeeAndDo,
        TravelCategory::LocalTips,
        TravelCategory::Weather,
        TravelCategory::Restaurants,
        TravelCategory::Accommodation,
        TravelCategory::Attractions,
        TravelCategory::Shopping,
        TravelCategory::Nightlife,
        TravelCategory::DayTrips,
        TravelCategory::LocalTransportation,
        TravelCategory::PackingList,
    ];

    /// 按编号（1..=13）取分类
    pub fn from_number(number: usize) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|index| Self::ALL.get(index))
            .copied()
    }

    pub fn number(&self) -> usize {
        Self::ALL
            .iter()
            .position(|category| category == self)
            .map(|index| index + 1)
            .unwrap_or_default()
    }

    pub fn title(&self) -> &'static str {
        match self {
            TravelCategory::BestTimeToVisit => "Best Time to Visit",
            TravelCategory::HowToGetThere => "How to Get There",
            TravelCategory::WhatToSeeAndDo => "What to See and Do",
            TravelCategory::LocalTips => "Local Tips and Advice",
            TravelCategory::Weather => "Weather in the Area",
            TravelCategory::Restaurants => "Best Restaurants and Cafes",
            TravelCategory::Accommodation => "Best Hotels and Accommodations",
            TravelCategory::Attractions => "Best Activities and Attractions",
            TravelCategory::Shopping => "Best Shopping and Markets",
            TravelCategory::Nightlife => "Best Nightlife and Entertainment",
            TravelCategory::DayTrips => "Best Day Trips and Excursions",
            TravelCategory::LocalTransportation => "Best Local Transportation and Getting Around",
            TravelCategory::PackingList => "Packing List and Essentials",
        }
    }
}

impl Display for TravelCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// 旅行建议生成
#[derive(Default)]
pub struct TravelAdvisor;

impl TravelAdvisor {
    pub fn build_prompt(&self, name: &str) -> String {
        let sections = TravelCategory::ALL
            .iter()
            .map(|category| format!("{}. {}", category.number(), category.title()))
            .collect::<Vec<_>>()
            .join("\n");

        format!(
            "You are a travel expert. Please provide detailed travel recommendations for {name}. Include the following sections:

{sections}

For each section, provide at least 3-4 bullet points with detailed and specific recommendations. Include practical tips, insider advice, and any important considerations. Format the response with clear headings and bullet points. If any section is not applicable, please explain why."
        )
    }

    pub fn build_category_prompt(&self, name: &str, category: TravelCategory) -> String {
        format!(
            "You are a travel expert. Please provide in-depth information about \"{title}\" for {name}.

Give at least 5 bullet points with specific names, prices, opening hours or seasons where relevant. Include practical tips and insider advice. Format the response with a clear heading and bullet points.",
            title = category.title()
        )
    }

    pub async fn recommend(&self, context: &GeneratorContext, name: &str) -> String {
        tracing::info!("获取 {} 的旅行建议...", name);
        let payload = PromptPayload::user_text(self.build_prompt(name));
        complete_or_placeholder(
            context.model.as_ref(),
            &payload,
            "TravelAdvisor",
            RECOMMEND_MISSING,
            RECOMMEND_FAILED,
        )
        .await
    }

    /// 单个分类的详细信息；编号不在 1..=13 时在发请求前报错
    pub async fn category_info(
        &self,
        context: &GeneratorContext,
        name: &str,
        category_number: usize,
    ) -> Result<String> {
        let category = TravelCategory::from_number(category_number).ok_or_else(|| {
            PipelineError::InvalidInput(format!(
                "category number must be between 1 and {}, got {}",
                TravelCategory::ALL.len(),
                category_number
            ))
        })?;

        tracing::info!("获取 {} 的分类信息: {}", name, category);
        let payload = PromptPayload::user_text(self.build_category_prompt(name, category));
        Ok(complete_or_placeholder(
            context.model.as_ref(),
            &payload,
            "TravelAdvisor::category_info",
            CATEGORY_MISSING,
            CATEGORY_FAILED,
        )
        .await)
    }
}
