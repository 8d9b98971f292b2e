//! 界面层：axum 路由与会话状态
//!
//! 负责拦截空主题、保存每个会话的当前题目与评分状态，
//! 并把错误转换成面向用户的提示。

pub mod handlers;
pub mod markdown;
pub mod page;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::infrastructure::TextGenerator;
use crate::workflow::SessionStore;

/// 路由共享状态
pub struct AppState<G> {
    pub generator: Arc<G>,
    pub sessions: SessionStore,
}

impl<G> AppState<G> {
    pub fn new(generator: Arc<G>) -> Self {
        Self::with_sessions(generator, SessionStore::new())
    }

    pub fn with_sessions(generator: Arc<G>, sessions: SessionStore) -> Self {
        Self {
            generator,
            sessions,
        }
    }
}

impl<G> Clone for AppState<G> {
    fn clone(&self) -> Self {
        Self {
            generator: Arc::clone(&self.generator),
            sessions: self.sessions.clone(),
        }
    }
}

/// 构建完整路由
pub fn router<G: TextGenerator + 'static>(state: AppState<G>) -> Router {
    Router::new()
        .route("/", get(page::index))
        .route("/api/notes", post(handlers::create_notes::<G>))
        .route("/api/quiz", post(handlers::create_quiz::<G>))
        .route("/api/quiz/answer", post(handlers::submit_answer::<G>))
        .route(
            "/api/settings",
            get(handlers::get_settings::<G>).post(handlers::save_settings::<G>),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
