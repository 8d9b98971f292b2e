//! # Study Assistant
//!
//! 根据用户输入的主题生成学习笔记与单选题，并对作答进行评分的 Web 应用
//!
//! ## 架构设计
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（文本生成模型），只暴露 `generate` 能力
//! - `shared_generator` - 进程级单例，首次使用时初始化
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 笔记生成、测验生成、测验文本解析
//! - 不持有任何会话状态
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 一次测验交互的会话状态（当前题目 + 是否已评分）
//!
//! ### ④ 界面层（Web）
//! - `web/` - axum 路由、单页界面、空主题拦截与错误提示

pub mod app;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod services;
pub mod web;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{shared_generator, OpenAiGenerator, TextGenerator};
pub use models::{GenerationRequest, OptionLetter, QuizRecord, Topic};
pub use services::{generate_notes, generate_quiz, parse_quiz};
pub use workflow::{QuizSession, ScoreOutcome};
