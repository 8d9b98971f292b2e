//! 测试用的脚本化生成器

use std::sync::Mutex;

use crate::error::LlmError;
use crate::infrastructure::TextGenerator;
use crate::models::GenerationRequest;

/// 按预设内容回复，并记录收到的请求
pub(crate) struct ScriptedGenerator {
    reply: Option<String>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedGenerator {
    pub(crate) fn replying(reply: &str) -> Self {
        Self {
            reply: Some(reply.to_string()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            reply: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn last_request(&self) -> Option<GenerationRequest> {
        self.requests.lock().unwrap().last().cloned()
    }
}

impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        self.reply.clone().ok_or_else(|| LlmError::ApiCallFailed {
            model: "scripted".to_string(),
            message: "connection refused".to_string(),
        })
    }
}
