use std::collections::BTreeMap;

use axum::extract::{Query, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::infrastructure::TextGenerator;
use crate::models::{LearningPreferences, OptionLetter, QuizRecord, Topic};
use crate::models::preferences::{MAX_DAILY_GOAL, MIN_DAILY_GOAL};
use crate::services::{generate_notes, generate_quiz};
use crate::web::markdown::render_notes_html;
use crate::web::AppState;
use crate::workflow::ScoreOutcome;

#[derive(Debug, Deserialize)]
pub struct NotesRequest {
    pub topic: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NotesResponse {
    pub notes: String,
    /// 渲染后的 HTML，原始 HTML 标签已转义
    pub notes_html: String,
}

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub session_id: Option<Uuid>,
    pub topic: String,
}

/// 发给浏览器的题目，不含答案
#[derive(Debug, Serialize, Deserialize)]
pub struct QuizView {
    pub session_id: Uuid,
    pub question: String,
    pub options: BTreeMap<OptionLetter, String>,
    pub generated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub session_id: Uuid,
    pub letter: OptionLetter,
}

#[derive(Debug, Deserialize)]
pub struct SettingsQuery {
    #[serde(default)]
    pub session_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct SaveSettingsRequest {
    #[serde(default)]
    pub session_id: Option<Uuid>,
    pub preferences: LearningPreferences,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SettingsResponse {
    pub session_id: Option<Uuid>,
    pub preferences: LearningPreferences,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

fn require_topic(raw: String, warning: &str) -> AppResult<Topic> {
    Topic::new(raw).ok_or_else(|| AppError::invalid_input(warning))
}

pub async fn create_notes<G: TextGenerator + 'static>(
    State(state): State<AppState<G>>,
    Json(request): Json<NotesRequest>,
) -> AppResult<Json<NotesResponse>> {
    let topic = require_topic(request.topic, "Please enter a topic to generate notes.")?;
    let notes = generate_notes(state.generator.as_ref(), &topic).await?;
    let notes_html = render_notes_html(&notes);
    Ok(Json(NotesResponse { notes, notes_html }))
}

pub async fn create_quiz<G: TextGenerator + 'static>(
    State(state): State<AppState<G>>,
    Json(request): Json<QuizRequest>,
) -> AppResult<Json<QuizView>> {
    let topic = require_topic(request.topic, "Please enter a topic.")?;

    // 生成失败时会话中已有的题目保持不变
    let record = generate_quiz(state.generator.as_ref(), &topic)
        .await
        .ok_or(AppError::QuizUnavailable)?;

    let (session_id, generated_at) = state
        .sessions
        .with_session_or_create(request.session_id, |session| {
            session.replace_quiz(record.clone());
            session.generated_at()
        })
        .await;

    info!("✓ 会话 {} 获得新题目", session_id);
    Ok(Json(quiz_view(session_id, &record, generated_at)))
}

fn quiz_view(session_id: Uuid, record: &QuizRecord, generated_at: Option<DateTime<Utc>>) -> QuizView {
    QuizView {
        session_id,
        question: record.question.clone(),
        options: record.options().clone(),
        generated_at,
    }
}

pub async fn submit_answer<G: TextGenerator + 'static>(
    State(state): State<AppState<G>>,
    Json(request): Json<AnswerRequest>,
) -> AppResult<Json<ScoreOutcome>> {
    let outcome = state
        .sessions
        .with_session(request.session_id, |session| {
            session.submit_answer(request.letter)
        })
        .await??;

    info!(
        "📊 会话 {} 作答 {}: {}",
        request.session_id,
        request.letter,
        if outcome.correct { "正确" } else { "错误" }
    );
    Ok(Json(outcome))
}

pub async fn get_settings<G: TextGenerator + 'static>(
    State(state): State<AppState<G>>,
    Query(query): Query<SettingsQuery>,
) -> AppResult<Json<SettingsResponse>> {
    let preferences = match query.session_id {
        Some(id) => {
            state
                .sessions
                .with_session(id, |session| session.preferences.clone())
                .await?
        }
        None => LearningPreferences::default(),
    };

    Ok(Json(SettingsResponse {
        session_id: query.session_id,
        preferences,
        message: None,
    }))
}

pub async fn save_settings<G: TextGenerator + 'static>(
    State(state): State<AppState<G>>,
    Json(request): Json<SaveSettingsRequest>,
) -> AppResult<Json<SettingsResponse>> {
    if !request.preferences.goal_in_range() {
        warn!(
            "⚠️ 每日目标超出范围: {}",
            request.preferences.daily_goal_minutes
        );
        return Err(AppError::invalid_input(format!(
            "Daily study goal must be between {} and {} minutes.",
            MIN_DAILY_GOAL, MAX_DAILY_GOAL
        )));
    }

    let preferences = request.preferences;
    let (session_id, _) = state
        .sessions
        .with_session_or_create(request.session_id, |session| {
            session.preferences = preferences.clone();
        })
        .await;

    Ok(Json(SettingsResponse {
        session_id: Some(session_id),
        preferences,
        message: Some("Preferences saved!".to_string()),
    }))
}
