//! 提示词模板

use crate::models::Topic;

/// 笔记生成的长度上限
pub const NOTES_MAX_LENGTH: u32 = 512;
/// 测验生成的长度上限
pub const QUIZ_MAX_LENGTH: u32 = 256;

/// 构建学习笔记提示词
pub fn build_notes_prompt(topic: &Topic) -> String {
    format!(
        r#"Generate detailed study notes about the topic "{}". 
Include:
- Key concepts
- Definitions
- Examples
- Clear headings and bullet points."#,
        topic
    )
}

/// 构建单选题提示词，要求模型按固定格式输出
pub fn build_quiz_prompt(topic: &Topic) -> String {
    format!(
        r#"Create one multiple-choice question about "{}" in this exact format:
Question: ...
A. ...
B. ...
C. ...
D. ...
Answer: ...
"#,
        topic
    )
}
