use crate::config::Config;
use crate::generator::agents::ItineraryStyle;
use crate::generator::context::GeneratorContext;
use crate::generator::orchestrator::Orchestrator;

use anyhow::Result;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// 时间跟踪作用域
pub struct TimingScope {
    start_time: Instant,
    phase_start_times: HashMap<&'static str, Instant>,
    phase_durations: Vec<(&'static str, Duration)>,
}

impl Default for TimingScope {
    fn default() -> Self {
        Self::new()
    }
}

impl TimingScope {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            phase_start_times: HashMap::new(),
            phase_durations: Vec::new(),
        }
    }

    /// 开始一个新的阶段计时
    pub fn start_phase(&mut self, phase_name: &'static str) {
        self.phase_start_times.insert(phase_name, Instant::now());
    }

    /// 结束一个阶段的计时，未开始的阶段返回 None
    pub fn end_phase(&mut self, phase_name: &'static str) -> Option<Duration> {
        let start_time = self.phase_start_times.remove(phase_name)?;
        let duration = start_time.elapsed();
        self.phase_durations.push((phase_name, duration));
        Some(duration)
    }

    /// 获取总执行时间
    pub fn get_total_duration(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// 按结束顺序返回各阶段的执行时间
    pub fn get_phase_durations(&self) -> &[(&'static str, Duration)] {
        &self.phase_durations
    }

    /// 获取格式化的执行时间报告
    pub fn generate_timing_report(&self) -> String {
        let mut report = format!(
            "总执行时间: {:.2}秒\n",
            self.get_total_duration().as_secs_f64()
        );

        if !self.phase_durations.is_empty() {
            report.push_str("\n各阶段执行时间:\n");
            for (phase, duration) in &self.phase_durations {
                report.push_str(&format!("- {}: {:.3}秒\n", phase, duration.as_secs_f64()));
            }
        }

        report
    }
}

/// 时间跟踪常量
pub struct TimingKeys;

impl TimingKeys {
    pub const VISION: &'static str = "vision";
    pub const KNOWLEDGE: &'static str = "knowledge";
    pub const REFINE: &'static str = "refine";
    pub const RECOMMEND: &'static str = "recommend";
}

/// 一次命令行请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// 文本直接发给模型
    Text(String),
    /// `data:<mime>;base64,<payload>` 形式的图片
    Image(String),
    /// 按名称查询地标知识
    Knowledge(String),
    /// 生成行程
    Itinerary {
        destination: String,
        days: u32,
        style: ItineraryStyle,
    },
    /// 单个旅行建议分类
    Category { name: String, number: usize },
}

/// 按配置创建编排器并处理请求
pub async fn launch(config: &Config, request: Request) -> Result<String> {
    let context = GeneratorContext::new(config.clone())?;
    run(Orchestrator::new(context), request).await
}

/// 使用给定的编排器处理请求；只有行程与分类请求会返回错误
pub async fn run(orchestrator: Orchestrator, request: Request) -> Result<String> {
    let answer = match request {
        Request::Text(text) => orchestrator.send_text(&text).await,
        Request::Image(data_uri) => orchestrator.send_image(&data_uri).await,
        Request::Knowledge(name) => orchestrator.fetch_knowledge(&name).await,
        Request::Itinerary {
            destination,
            days,
            style,
        } => {
            orchestrator
                .itinerary(&destination, days, style)
                .await?
        }
        Request::Category { name, number } => orchestrator.category_info(&name, number).await?,
    };
    Ok(answer)
}
