//! 基础设施层：持有稀缺资源（文本生成模型），只暴露能力

pub mod generator;

pub use generator::{shared_generator, OpenAiGenerator, TextGenerator};

#[cfg(test)]
pub(crate) mod scripted;
