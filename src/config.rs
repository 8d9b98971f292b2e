use crate::error::ConfigError;
use crate::workflow::session_store::{DEFAULT_MAX_SESSIONS, DEFAULT_SESSION_IDLE_MINUTES};
use serde::Deserialize;
use std::path::Path;

/// 配置文件路径的环境变量名
pub const CONFIG_PATH_ENV: &str = "STUDY_ASSISTANT_CONFIG";
/// 默认配置文件路径
pub const DEFAULT_CONFIG_PATH: &str = "study_assistant.toml";

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Web 服务监听地址
    pub bind_addr: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    // --- LLM 配置 ---
    pub llm_api_key: String,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
    /// 开启采样时使用的温度
    pub sampling_temperature: f32,
    // --- 会话配置 ---
    /// 会话闲置多少分钟后过期
    pub session_idle_minutes: i64,
    /// 同时保留的会话数量上限
    pub max_sessions: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8501".to_string(),
            verbose_logging: false,
            llm_api_key: String::new(),
            llm_api_base_url: "https://api.openai.com/v1".to_string(),
            llm_model_name: "gpt-4o-mini".to_string(),
            sampling_temperature: 0.7,
            session_idle_minutes: DEFAULT_SESSION_IDLE_MINUTES,
            max_sessions: DEFAULT_MAX_SESSIONS,
        }
    }
}

impl Config {
    /// 先读取 TOML 配置文件，再用环境变量覆盖
    pub fn load() -> Result<Self, ConfigError> {
        let explicit = std::env::var(CONFIG_PATH_ENV).ok();
        Ok(Self::base_config(explicit.as_deref())?.with_env_overrides())
    }

    /// 显式指定的配置文件必须存在；默认路径下的文件可以缺省
    fn base_config(explicit_path: Option<&str>) -> Result<Self, ConfigError> {
        match explicit_path {
            Some(path) => Self::from_file(Path::new(path))?.ok_or_else(|| ConfigError::NotFound {
                path: path.to_string(),
            }),
            None => Ok(Self::from_file(Path::new(DEFAULT_CONFIG_PATH))?.unwrap_or_default()),
        }
    }

    /// 只使用默认值和环境变量
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 读取 TOML 配置文件，文件不存在时返回 `None`
    pub fn from_file(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content, &path.display().to_string()).map(Some)
    }

    fn from_toml_str(content: &str, path: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::TomlParseFailed {
            path: path.to_string(),
            source,
        })
    }

    fn with_env_overrides(self) -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or(self.bind_addr),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(self.verbose_logging),
            llm_api_key: std::env::var("LLM_API_KEY").unwrap_or(self.llm_api_key),
            llm_api_base_url: std::env::var("LLM_API_BASE_URL").unwrap_or(self.llm_api_base_url),
            llm_model_name: std::env::var("LLM_MODEL_NAME").unwrap_or(self.llm_model_name),
            sampling_temperature: std::env::var("LLM_TEMPERATURE").ok().and_then(|v| v.parse().ok()).unwrap_or(self.sampling_temperature),
            session_idle_minutes: std::env::var("SESSION_IDLE_MINUTES").ok().and_then(|v| v.parse().ok()).unwrap_or(self.session_idle_minutes),
            max_sessions: std::env::var("MAX_SESSIONS").ok().and_then(|v| v.parse().ok()).unwrap_or(self.max_sessions),
        }
    }
}
