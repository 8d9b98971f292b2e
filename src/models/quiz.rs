use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// 选项字母
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OptionLetter {
    A,
    B,
    C,
    D,
}

impl OptionLetter {
    pub const ALL: [OptionLetter; 4] = [
        OptionLetter::A,
        OptionLetter::B,
        OptionLetter::C,
        OptionLetter::D,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OptionLetter::A => "A",
            OptionLetter::B => "B",
            OptionLetter::C => "C",
            OptionLetter::D => "D",
        }
    }

    /// 生成文本中该选项所在行的前缀，例如 `"A."`
    pub fn line_prefix(self) -> &'static str {
        match self {
            OptionLetter::A => "A.",
            OptionLetter::B => "B.",
            OptionLetter::C => "C.",
            OptionLetter::D => "D.",
        }
    }
}

impl fmt::Display for OptionLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 一道单选题
///
/// 只能通过 [`QuizRecord::new`] 一次性构造，四个选项必须全部存在。
/// `correct` 是模型给出的答案原文（已转大写），不保证落在 A-D 之内。
///
/// 不支持反序列化，避免绕过构造函数得到缺少选项的题目：
/// ```compile_fail
/// let _ = serde_json::from_str::<study_assistant::QuizRecord>("{}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizRecord {
    pub question: String,
    options: BTreeMap<OptionLetter, String>,
    pub correct: String,
}

impl QuizRecord {
    pub fn new(question: String, options: [String; 4], correct: String) -> Self {
        Self {
            question,
            options: OptionLetter::ALL.into_iter().zip(options).collect(),
            correct,
        }
    }

    pub fn options(&self) -> &BTreeMap<OptionLetter, String> {
        &self.options
    }

    pub fn option(&self, letter: OptionLetter) -> &str {
        self.options.get(&letter).map(String::as_str).unwrap_or_default()
    }

    /// 正确答案对应的选项文本；答案不是 A-D 时为 `None`
    pub fn correct_option_text(&self) -> Option<&str> {
        OptionLetter::ALL
            .into_iter()
            .find(|letter| letter.as_str() == self.correct)
            .map(|letter| self.option(letter))
    }
}
