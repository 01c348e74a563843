use crate::config::Config;
use crate::generator::agents::ItineraryStyle;
use crate::generator::workflow::Request;
use crate::types::ImageData;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Landmark Guide - 由Gemini与Wikipedia驱动的地标识别与旅行助手
#[derive(Parser, Debug)]
#[command(name = "landmark-guide")]
#[command(
    about = "Identify landmarks from photos, look them up on Wikipedia, and generate travel recommendations and itineraries with Gemini."
)]
#[command(version)]
pub struct Args {
    /// 配置文件路径
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// 是否启用详细日志
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Gemini API KEY
    #[arg(long, global = true)]
    pub api_key: Option<String>,

    /// 模型名称
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Gemini API基地址
    #[arg(long, global = true)]
    pub api_base_url: Option<String>,

    /// Wikipedia REST API基地址
    #[arg(long, global = true)]
    pub knowledge_base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 直接向模型提问
    Text {
        query: String,
    },
    /// 识别图片中的地标并给出介绍与旅行建议
    Image {
        /// 图片文件路径，或 data:<mime>;base64,<payload>
        image: String,
    },
    /// 按名称查询地标介绍与旅行建议
    Knowledge {
        name: String,
    },
    /// 生成多日行程
    Itinerary {
        destination: String,

        /// 天数
        #[arg(short, long)]
        days: u32,

        /// 行程风格 (plain, html)
        #[arg(long, default_value_t = ItineraryStyle::HtmlTagged)]
        style: ItineraryStyle,
    },
    /// 获取单个旅行建议分类的详细信息 (1-13)
    Category {
        name: String,
        number: usize,
    },
}

impl Args {
    /// 将CLI参数转换为配置
    pub fn into_config(&self) -> Result<Config> {
        let mut config = Config::load(self.config.as_deref())?;

        // 覆盖配置文件中的设置
        if let Some(api_key) = &self.api_key {
            config.model.api_key = api_key.clone();
        }
        if let Some(model) = &self.model {
            config.model.model = model.clone();
        }
        if let Some(api_base_url) = &self.api_base_url {
            config.model.api_base_url = api_base_url.clone();
        }
        if let Some(knowledge_base_url) = &self.knowledge_base_url {
            config.knowledge.api_base_url = knowledge_base_url.clone();
        }
        config.verbose = config.verbose || self.verbose;

        Ok(config)
    }

    /// 将子命令转换为工作流请求
    pub fn into_request(self) -> Result<Request> {
        let request = match self.command {
            Command::Text { query } => Request::Text(query),
            Command::Image { image } => Request::Image(image_argument_to_data_uri(&image)?),
            Command::Knowledge { name } => Request::Knowledge(name),
            Command::Itinerary {
                destination,
                days,
                style,
            } => Request::Itinerary {
                destination,
                days,
                style,
            },
            Command::Category { name, number } => Request::Category { name, number },
        };
        Ok(request)
    }
}

/// data URI 原样返回；存在的文件读取后编码为 data URI；其余原样返回，交由后续校验
pub fn image_argument_to_data_uri(argument: &str) -> Result<String> {
    if argument.starts_with("data:") {
        return Ok(argument.to_string());
    }

    let path = Path::new(argument);
    if !path.is_file() {
        return Ok(argument.to_string());
    }

    let bytes =
        std::fs::read(path).context(format!("Failed to read image file: {:?}", path))?;
    let image = ImageData {
        mime_type: guess_mime_type(path).to_string(),
        bytes,
    };
    Ok(image.to_data_uri())
}

/// 按扩展名推断图片MIME类型
pub fn guess_mime_type(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase());

    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("heic") => "image/heic",
        Some("heif") => "image/heif",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}
