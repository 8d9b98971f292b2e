use serde::{Deserialize, Serialize};

/// 每日学习目标允许的范围（分钟）
pub const MIN_DAILY_GOAL: u32 = 10;
pub const MAX_DAILY_GOAL: u32 = 180;
pub const DEFAULT_DAILY_GOAL: u32 = 30;

/// 偏好科目
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Subject {
    #[default]
    Math,
    Science,
    History,
    #[serde(rename = "Computer Science")]
    ComputerScience,
    English,
}

/// 学习风格
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LearningStyle {
    #[default]
    Visual,
    Auditory,
    #[serde(rename = "Reading/Writing")]
    ReadingWriting,
    Kinesthetic,
}

/// 学习偏好设置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningPreferences {
    pub subject: Subject,
    pub style: LearningStyle,
    /// 每日学习目标（分钟）
    pub daily_goal_minutes: u32,
}

impl Default for LearningPreferences {
    fn default() -> Self {
        Self {
            subject: Subject::default(),
            style: LearningStyle::default(),
            daily_goal_minutes: DEFAULT_DAILY_GOAL,
        }
    }
}

impl LearningPreferences {
    pub fn goal_in_range(&self) -> bool {
        (MIN_DAILY_GOAL..=MAX_DAILY_GOAL).contains(&self.daily_goal_minutes)
    }
}
