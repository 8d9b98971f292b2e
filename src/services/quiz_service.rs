//! 单选题生成

use tracing::{debug, info, warn};

use crate::infrastructure::TextGenerator;
use crate::logger::truncate_text;
use crate::models::{GenerationRequest, QuizRecord, Topic};
use crate::services::prompts::{build_quiz_prompt, QUIZ_MAX_LENGTH};
use crate::services::quiz_parser::parse_quiz;

/// 生成一道单选题
///
/// 生成失败或输出格式不符时返回 `None`，具体原因只写入日志。
pub async fn generate_quiz<G: TextGenerator>(generator: &G, topic: &Topic) -> Option<QuizRecord> {
    info!("🧠 生成测验: {}", topic);

    let request = GenerationRequest::sampled(build_quiz_prompt(topic), QUIZ_MAX_LENGTH);
    let generated = match generator.generate(&request).await {
        Ok(text) => text,
        Err(e) => {
            warn!("⚠️ 测验生成失败: {}", e);
            return None;
        }
    };

    debug!("模型原始输出: {}", generated);

    match parse_quiz(&generated) {
        Ok(record) => {
            info!("✓ 测验解析成功: {}", truncate_text(&record.question, 60));
            Some(record)
        }
        Err(e) => {
            warn!("⚠️ 测验解析失败: {}", e);
            None
        }
    }
}
