//! 流程层：一次测验交互（出题 → 作答 → 评分）的会话状态

pub mod quiz_session;
pub mod session_store;

pub use quiz_session::{QuizSession, ScoreOutcome};
pub use session_store::SessionStore;
