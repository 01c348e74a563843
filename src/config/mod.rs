use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// 默认配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "landmark.toml";

/// 应用程序配置
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    /// 生成式模型配置
    pub model: ModelConfig,

    /// 百科服务配置
    pub knowledge: KnowledgeConfig,

    /// 是否启用详细日志
    pub verbose: bool,
}

/// 生成式模型配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ModelConfig {
    /// API KEY，作为查询参数 `key` 发送
    pub api_key: String,

    /// API基地址
    pub api_base_url: String,

    /// API版本路径段
    pub api_version: String,

    /// 模型名称
    pub model: String,

    /// 超时时间（秒），未设置时不限制
    pub timeout_seconds: Option<u64>,
}

/// 百科摘要服务配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct KnowledgeConfig {
    /// REST API基地址，摘要接口为 `{api_base_url}/page/summary/{title}`
    pub api_base_url: String,

    /// 请求时携带的User-Agent
    pub user_agent: String,

    /// 超时时间（秒），未设置时不限制
    pub timeout_seconds: Option<u64>,
}

impl Config {
    /// 从文件加载配置
    pub fn from_file(path: &Path) -> Result<Self> {
        let mut file =
            File::open(path).context(format!("Failed to open config file: {:?}", path))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }

    /// 显式路径优先，其次是当前目录下的默认配置文件，都没有时使用默认值
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path {
            return Self::from_file(path);
        }

        let default_config_path = std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(DEFAULT_CONFIG_FILE);

        if default_config_path.exists() {
            Self::from_file(&default_config_path)
        } else {
            Ok(Config::default())
        }
    }
}

impl ModelConfig {
    /// generateContent 接口地址（不含 key）
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}/models/{}:generateContent",
            self.api_base_url.trim_end_matches('/'),
            self.api_version.trim_matches('/'),
            self.model
        )
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_key: std::env::var("GEMINI_API_KEY").unwrap_or_default(),
            api_base_url: String::from("https://generativelanguage.googleapis.com"),
            api_version: String::from("v1"),
            model: String::from("gemini-1.5-flash"),
            timeout_seconds: None,
        }
    }
}

impl Default for KnowledgeConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::from("https://en.wikipedia.org/api/rest_v1"),
            user_agent: format!("landmark-guide/{}", env!("CARGO_PKG_VERSION")),
            timeout_seconds: None,
        }
    }
}
