//! 从模型的自由文本中提取单选题
//!
//! 逐行扫描，按字面前缀（区分大小写）查找五类行，行的先后顺序无关。
//! 任何一类行缺失都视为整体失败，不返回部分结果。

use crate::error::QuizParseError;
use crate::models::{OptionLetter, QuizRecord};

const QUESTION_PREFIX: &str = "Question:";
const ANSWER_PREFIX: &str = "Answer:";

/// 解析生成文本
pub fn parse_quiz(generated: &str) -> Result<QuizRecord, QuizParseError> {
    let lines: Vec<&str> = generated.trim().split('\n').collect();

    let question = after_first_colon(find_line(&lines, QUESTION_PREFIX)?);

    let mut options: [String; 4] = Default::default();
    for (slot, letter) in options.iter_mut().zip(OptionLetter::ALL) {
        let prefix = letter.line_prefix();
        *slot = find_line(&lines, prefix)?[prefix.len()..].trim().to_string();
    }

    let correct = after_first_colon(find_line(&lines, ANSWER_PREFIX)?).to_uppercase();

    Ok(QuizRecord::new(question, options, correct))
}

/// 第一行以 `prefix` 开头的文本
pub fn find_line_with_prefix<'a>(lines: &[&'a str], prefix: &str) -> Option<&'a str> {
    lines.iter().copied().find(|line| line.starts_with(prefix))
}

fn find_line<'a>(lines: &[&'a str], prefix: &'static str) -> Result<&'a str, QuizParseError> {
    find_line_with_prefix(lines, prefix).ok_or(QuizParseError::MissingLine { prefix })
}

/// 取第一个冒号之后的内容（调用方已保证行内存在冒号）
fn after_first_colon(line: &str) -> String {
    line.split_once(':')
        .map(|(_, rest)| rest)
        .unwrap_or_default()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WELL_FORMED: &str = "Question: What is 2+2?\nA. 3\nB. 4\nC. 5\nD. 22\nAnswer: B";

    #[test]
    fn test_well_formed_output() {
        let record = parse_quiz(WELL_FORMED).unwrap();
        assert_eq!(
            record,
            QuizRecord::new(
                "What is 2+2?".to_string(),
                ["3", "4", "5", "22"].map(String::from),
                "B".to_string(),
            )
        );
    }

    #[test]
    fn test_missing_option_fails_whole_parse() {
        let text = "Question: What is 2+2?\nA. 3\nB. 4\nC. 5\nAnswer: B";
        assert_eq!(
            parse_quiz(text),
            Err(QuizParseError::MissingLine { prefix: "D." })
        );
    }

    #[test]
    fn test_missing_question_and_answer() {
        assert_eq!(
            parse_quiz("A. 3\nB. 4\nC. 5\nD. 22\nAnswer: B"),
            Err(QuizParseError::MissingLine { prefix: "Question:" })
        );
        assert_eq!(
            parse_quiz("Question: q\nA. 3\nB. 4\nC. 5\nD. 22"),
            Err(QuizParseError::MissingLine { prefix: "Answer:" })
        );
    }

    #[test]
    fn test_line_order_is_irrelevant() {
        let text = "Answer: b\nD. 22\nQuestion: What is 2+2?\nC. 5\nB. 4\nA. 3";
        let record = parse_quiz(text).unwrap();
        assert_eq!(record.question, "What is 2+2?");
        assert_eq!(record.option(OptionLetter::A), "3");
        assert_eq!(record.correct, "B");
    }

    #[test]
    fn test_prefixes_are_case_sensitive() {
        let text = "Question: What is 2+2?\nA. 3\nB. 4\nC. 5\nD. 22\nanswer: B";
        assert_eq!(
            parse_quiz(text),
            Err(QuizParseError::MissingLine { prefix: "Answer:" })
        );

        let parenthesised = "Question: q\nA) 3\nB. 4\nC. 5\nD. 22\nAnswer: B";
        assert!(parse_quiz(parenthesised).is_err());
    }

    #[test]
    fn test_first_matching_line_wins() {
        let text = "Question: first\nQuestion: second\nA. 3\nA. three\nB. 4\nC. 5\nD. 22\nAnswer: C\nAnswer: D";
        let record = parse_quiz(text).unwrap();
        assert_eq!(record.question, "first");
        assert_eq!(record.option(OptionLetter::A), "3");
        assert_eq!(record.correct, "C");
    }

    #[test]
    fn test_text_after_prefix_is_kept_whole() {
        let text = "Question: Ratio: what is 1:2?\nA. U.S.A.\nB. 4\nC. 5\nD. 22\nAnswer:  a ";
        let record = parse_quiz(text).unwrap();
        assert_eq!(record.question, "Ratio: what is 1:2?");
        assert_eq!(record.option(OptionLetter::A), "U.S.A.");
        assert_eq!(record.correct, "A");
    }

    #[test]
    fn test_surrounding_noise_and_crlf() {
        let text = "\n\nSure! Here you go:\r\nQuestion: Capital of France?\r\nA. Paris\r\nB. Rome\r\nC. Berlin\r\nD. Madrid\r\nAnswer: A\r\n";
        let record = parse_quiz(text).unwrap();
        assert_eq!(record.question, "Capital of France?");
        assert_eq!(record.option(OptionLetter::D), "Madrid");
        assert_eq!(record.correct, "A");
    }

    #[test]
    fn test_indented_lines_do_not_match() {
        let text = "A. 3\n  Question: q\nB. 4\nC. 5\nD. 22\nAnswer: B";
        assert!(parse_quiz(text).is_err());
    }

    #[test]
    fn test_answer_key_not_validated() {
        let text = "Question: q\nA. 3\nB. 4\nC. 5\nD. 22\nAnswer: B. 4";
        assert_eq!(parse_quiz(text).unwrap().correct, "B. 4");
    }
}
