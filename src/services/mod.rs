//! 业务能力层：描述"我能做什么"，不关心界面与会话

pub mod notes_service;
pub mod prompts;
pub mod quiz_parser;
pub mod quiz_service;

pub use notes_service::generate_notes;
pub use quiz_parser::parse_quiz;
pub use quiz_service::generate_quiz;
