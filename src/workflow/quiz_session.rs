//! 单个用户的测验会话

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::SessionError;
use crate::models::{LearningPreferences, OptionLetter, QuizRecord};

/// 评分结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreOutcome {
    pub correct: bool,
    /// 正确答案字母（模型原文）
    pub correct_letter: String,
    /// 正确答案对应的选项文本；答案不在 A-D 中时为空
    pub correct_text: Option<String>,
}

/// 测验会话
///
/// 持有当前题目及其是否已评分；每道题只能评分一次。
#[derive(Debug, Clone, Default)]
pub struct QuizSession {
    current: Option<QuizRecord>,
    generated_at: Option<DateTime<Utc>>,
    scored: bool,
    pub preferences: LearningPreferences,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// 替换当前题目并重置评分状态
    pub fn replace_quiz(&mut self, record: QuizRecord) {
        self.current = Some(record);
        self.generated_at = Some(Utc::now());
        self.scored = false;
    }

    pub fn current_quiz(&self) -> Option<&QuizRecord> {
        self.current.as_ref()
    }

    pub fn generated_at(&self) -> Option<DateTime<Utc>> {
        self.generated_at
    }

    pub fn is_scored(&self) -> bool {
        self.scored
    }

    /// 对当前题目评分
    pub fn submit_answer(&mut self, selected: OptionLetter) -> Result<ScoreOutcome, SessionError> {
        let record = self.current.as_ref().ok_or(SessionError::NoQuiz)?;
        if self.scored {
            return Err(SessionError::AlreadyScored);
        }

        let outcome = ScoreOutcome {
            correct: selected.as_str() == record.correct,
            correct_letter: record.correct.clone(),
            correct_text: record.correct_option_text().map(str::to_string),
        };
        self.scored = true;
        Ok(outcome)
    }
}
