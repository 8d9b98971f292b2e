//! 学习笔记生成

use tracing::{debug, info};

use crate::error::LlmError;
use crate::infrastructure::TextGenerator;
use crate::models::{GenerationRequest, Topic};
use crate::services::prompts::{build_notes_prompt, NOTES_MAX_LENGTH};

/// 生成学习笔记
///
/// 除去首尾空白外不对模型输出做任何处理；生成失败直接返回给调用方。
pub async fn generate_notes<G: TextGenerator>(
    generator: &G,
    topic: &Topic,
) -> Result<String, LlmError> {
    info!("📝 生成学习笔记: {}", topic);

    let request = GenerationRequest::sampled(build_notes_prompt(topic), NOTES_MAX_LENGTH);
    let generated = generator.generate(&request).await?;

    debug!("笔记长度: {} 字符", generated.len());

    Ok(generated.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::scripted::ScriptedGenerator;

    #[tokio::test]
    async fn test_notes_are_trimmed_only() {
        let raw = "\n  # Photosynthesis\n- Key concept: light  \n\n";
        let generator = ScriptedGenerator::replying(raw);
        let topic = Topic::new("Photosynthesis").unwrap();

        let notes = generate_notes(&generator, &topic).await.unwrap();

        assert_eq!(notes, raw.trim());
        let request = generator.last_request().unwrap();
        assert_eq!(request.max_length, NOTES_MAX_LENGTH);
        assert!(request.sampling_enabled);
        assert_eq!(request.prompt, build_notes_prompt(&topic));
    }

    #[tokio::test]
    async fn test_generation_failure_propagates() {
        let generator = ScriptedGenerator::failing();
        let topic = Topic::new("Photosynthesis").unwrap();

        let result = generate_notes(&generator, &topic).await;

        tokio_test::assert_err!(result);
    }
}
