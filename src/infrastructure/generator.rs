//! 文本生成能力
//!
//! ## 技术栈
//! - 使用 `async-openai` crate 进行 API 调用
//! - 兼容 OpenAI API 的服务（自建推理服务、Azure 等）均可通过 `llm_api_base_url` 接入

use std::future::Future;
use std::sync::Arc;

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use tokio::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::LlmError;
use crate::models::GenerationRequest;

/// 文本生成能力
///
/// 输入提示词、长度上限与采样开关，输出一段生成文本。
pub trait TextGenerator: Send + Sync {
    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> impl Future<Output = Result<String, LlmError>> + Send;
}

/// 基于 OpenAI 兼容接口的文本生成器
pub struct OpenAiGenerator {
    client: Client<OpenAIConfig>,
    model_name: String,
    sampling_temperature: f32,
}

impl OpenAiGenerator {
    /// 创建新的生成器
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(&config.llm_api_key)
            .with_api_base(&config.llm_api_base_url);

        Self {
            client: Client::with_config(openai_config),
            model_name: config.llm_model_name.clone(),
            sampling_temperature: config.sampling_temperature,
        }
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// 采样关闭时使用贪心解码
    fn temperature_for(&self, request: &GenerationRequest) -> f32 {
        if request.sampling_enabled {
            self.sampling_temperature
        } else {
            0.0
        }
    }
}

impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError> {
        debug!("调用 LLM API，模型: {}", self.model_name);
        debug!("提示词长度: {} 字符", request.prompt.len());

        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(request.prompt.as_str())
            .build()
            .map_err(|e| LlmError::RequestBuildFailed(e.to_string()))?;

        let chat_request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(vec![ChatCompletionRequestMessage::User(user_msg)])
            .temperature(self.temperature_for(request))
            .max_tokens(request.max_length)
            .build()
            .map_err(|e| LlmError::RequestBuildFailed(e.to_string()))?;

        let response = self.client.chat().create(chat_request).await.map_err(|e| {
            warn!("LLM API 调用失败: {}", e);
            LlmError::ApiCallFailed {
                model: self.model_name.clone(),
                message: e.to_string(),
            }
        })?;

        debug!("LLM API 调用成功");

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| LlmError::EmptyContent {
                model: self.model_name.clone(),
            })
    }
}

static SHARED_GENERATOR: OnceCell<Arc<OpenAiGenerator>> = OnceCell::const_new();

/// 进程级共享的生成器
///
/// 第一次调用时创建并缓存，之后的调用（包括并发的首次调用）都返回同一个实例。
pub async fn shared_generator(config: &Config) -> Arc<OpenAiGenerator> {
    SHARED_GENERATOR
        .get_or_init(|| async {
            info!("🤖 初始化文本生成模型: {}", config.llm_model_name);
            Arc::new(OpenAiGenerator::new(config))
        })
        .await
        .clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_shared_generator_is_memoized() {
        let first = shared_generator(&Config::default()).await;
        let other_config = Config {
            llm_model_name: "another-model".to_string(),
            ..Config::default()
        };
        let second = shared_generator(&other_config).await;

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.model_name(), first.model_name());
    }

    #[test]
    fn test_temperature_follows_sampling_flag() {
        let generator = OpenAiGenerator::new(&Config {
            sampling_temperature: 0.9,
            ..Config::default()
        });
        let mut request = GenerationRequest::sampled("prompt", 16);
        assert_eq!(generator.temperature_for(&request), 0.9);
        request.sampling_enabled = false;
        assert_eq!(generator.temperature_for(&request), 0.0);
    }
}
