use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 用户输入不合法（例如空主题）
    #[error("输入错误: {0}")]
    InvalidInput(String),
    /// LLM 服务错误
    #[error("LLM错误: {0}")]
    Llm(#[from] LlmError),
    /// 测验生成失败（解析失败或生成失败，均不区分字段）
    #[error("测验生成失败")]
    QuizUnavailable,
    /// 会话状态错误
    #[error("会话错误: {0}")]
    Session(#[from] SessionError),
}

/// LLM 服务错误
#[derive(Debug, Error)]
pub enum LlmError {
    /// 构建请求失败
    #[error("构建 LLM 请求失败: {0}")]
    RequestBuildFailed(String),
    /// API 调用失败
    #[error("LLM API调用失败 (模型: {model}): {message}")]
    ApiCallFailed { model: String, message: String },
    /// 返回内容为空
    #[error("LLM返回内容为空 (模型: {model})")]
    EmptyContent { model: String },
}

/// 测验解析错误
///
/// 只用于运维诊断日志，调用方永远只看到"有记录 / 无记录"。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizParseError {
    /// 找不到以指定前缀开头的行
    #[error("找不到以 {prefix:?} 开头的行")]
    MissingLine { prefix: &'static str },
}

/// 会话状态错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// 会话不存在
    #[error("会话不存在: {0}")]
    UnknownSession(uuid::Uuid),
    /// 当前会话还没有生成测验
    #[error("当前没有可作答的测验")]
    NoQuiz,
    /// 当前题目已经评分过
    #[error("当前题目已经评分，请生成新的题目")]
    AlreadyScored,
}

/// 配置错误
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 显式指定的配置文件不存在
    #[error("配置文件不存在: {path}")]
    NotFound { path: String },
    /// 读取配置文件失败
    #[error("读取配置文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建输入错误
    pub fn invalid_input(message: impl Into<String>) -> Self {
        AppError::InvalidInput(message.into())
    }

    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Llm(_) => StatusCode::BAD_GATEWAY,
            AppError::QuizUnavailable => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Session(SessionError::UnknownSession(_) | SessionError::NoQuiz) => {
                StatusCode::NOT_FOUND
            }
            AppError::Session(SessionError::AlreadyScored) => StatusCode::CONFLICT,
        }
    }

    /// 展示给最终用户的信息
    fn user_message(&self) -> String {
        match self {
            AppError::InvalidInput(message) => message.clone(),
            AppError::Llm(_) => "Could not generate notes right now. Please try again.".to_string(),
            AppError::QuizUnavailable => {
                "Could not generate quiz. Try another topic or rephrase.".to_string()
            }
            AppError::Session(SessionError::UnknownSession(_)) => {
                "Your session has expired. Generate a new quiz.".to_string()
            }
            AppError::Session(SessionError::NoQuiz) => "Generate a quiz first.".to_string(),
            AppError::Session(SessionError::AlreadyScored) => {
                "This question has already been scored. Generate a new one.".to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("❌ 请求失败: {}", self);
        } else {
            tracing::warn!("⚠️ 请求被拒绝: {}", self);
        }
        let mut body = json!({ "error": self.user_message() });
        if matches!(self, AppError::Session(SessionError::UnknownSession(_))) {
            body["session_expired"] = json!(true);
        }
        (status, Json(body)).into_response()
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::invalid_input("empty").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::QuizUnavailable.status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            AppError::from(SessionError::AlreadyScored).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::from(SessionError::NoQuiz).status_code(),
            StatusCode::NOT_FOUND
        );
        let llm = LlmError::EmptyContent {
            model: "m".to_string(),
        };
        assert_eq!(AppError::from(llm).status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_llm_details_not_leaked_to_user() {
        let err = AppError::from(LlmError::ApiCallFailed {
            model: "secret-model".to_string(),
            message: "401 bad key".to_string(),
        });
        assert!(!err.user_message().contains("401"));
        assert!(err.to_string().contains("secret-model"));
    }
}
