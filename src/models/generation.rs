use serde::{Deserialize, Serialize};
use std::fmt;

/// 用户输入的学习主题
///
/// 原样嵌入提示词，不做任何规范化；唯一的约束是不能为空。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic(String);

impl Topic {
    /// 创建主题，空字符串返回 `None`
    ///
    /// 只含空白的字符串同样视为空，对应界面上"请输入主题"的提示。
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 一次文本生成请求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    /// 生成长度上限
    pub max_length: u32,
    /// 是否开启采样
    pub sampling_enabled: bool,
}

impl GenerationRequest {
    pub fn sampled(prompt: impl Into<String>, max_length: u32) -> Self {
        Self {
            prompt: prompt.into(),
            max_length,
            sampling_enabled: true,
        }
    }
}
