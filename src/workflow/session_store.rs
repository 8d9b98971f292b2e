//! 内存中的会话表
//!
//! 闲置超过 `idle_ttl` 的会话在新建会话时被清理；
//! 清理后仍达到 `max_sessions` 时淘汰最久未访问的会话。

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use crate::error::SessionError;
use crate::workflow::QuizSession;

/// 默认闲置过期时间（分钟）
pub const DEFAULT_SESSION_IDLE_MINUTES: i64 = 60;
/// 默认会话数量上限
pub const DEFAULT_MAX_SESSIONS: usize = 10_000;

struct StoredSession {
    session: QuizSession,
    last_access: DateTime<Utc>,
}

/// 会话表，进程重启后清空
#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<Mutex<HashMap<Uuid, StoredSession>>>,
    idle_ttl: Duration,
    max_sessions: usize,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_limits(
            Duration::minutes(DEFAULT_SESSION_IDLE_MINUTES),
            DEFAULT_MAX_SESSIONS,
        )
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 指定闲置过期时间与数量上限（上限至少为 1）
    pub fn with_limits(idle_ttl: Duration, max_sessions: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(HashMap::new())),
            idle_ttl,
            max_sessions: max_sessions.max(1),
        }
    }

    /// 对会话执行操作
    ///
    /// `id` 为空或已不存在（例如服务重启后）时新建会话，返回实际使用的 id。
    pub async fn with_session_or_create<T>(
        &self,
        id: Option<Uuid>,
        f: impl FnOnce(&mut QuizSession) -> T,
    ) -> (Uuid, T) {
        let now = Utc::now();
        let mut sessions = self.sessions.lock().await;

        let id = match id {
            Some(id) if sessions.contains_key(&id) => id,
            requested => {
                if let Some(stale) = requested {
                    debug!("会话 {} 已不存在，创建新会话", stale);
                }
                self.make_room(&mut sessions, now);
                Uuid::new_v4()
            }
        };

        let stored = sessions.entry(id).or_insert_with(|| StoredSession {
            session: QuizSession::new(),
            last_access: now,
        });
        stored.last_access = now;
        (id, f(&mut stored.session))
    }

    /// 对已有会话执行操作
    pub async fn with_session<T>(
        &self,
        id: Uuid,
        f: impl FnOnce(&mut QuizSession) -> T,
    ) -> Result<T, SessionError> {
        let mut sessions = self.sessions.lock().await;
        let stored = sessions
            .get_mut(&id)
            .ok_or(SessionError::UnknownSession(id))?;
        stored.last_access = Utc::now();
        Ok(f(&mut stored.session))
    }

    /// 清理在 `now` 时刻已闲置超时的会话，返回清理数量
    pub async fn prune_expired(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.lock().await;
        self.remove_expired(&mut sessions, now)
    }

    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    fn remove_expired(&self, sessions: &mut HashMap<Uuid, StoredSession>, now: DateTime<Utc>) -> usize {
        let before = sessions.len();
        sessions.retain(|_, stored| now - stored.last_access <= self.idle_ttl);
        before - sessions.len()
    }

    /// 为新会话腾出位置
    fn make_room(&self, sessions: &mut HashMap<Uuid, StoredSession>, now: DateTime<Utc>) {
        let expired = self.remove_expired(sessions, now);
        if expired > 0 {
            debug!("清理了 {} 个过期会话", expired);
        }

        while sessions.len() >= self.max_sessions {
            let oldest = sessions
                .iter()
                .min_by_key(|(_, stored)| stored.last_access)
                .map(|(id, _)| *id);
            match oldest {
                Some(id) => {
                    sessions.remove(&id);
                }
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_then_reuse() {
        let store = SessionStore::new();
        let (id, _) = store.with_session_or_create(None, |_| ()).await;
        let (same, scored) = store
            .with_session_or_create(Some(id), |s| s.is_scored())
            .await;

        assert_eq!(id, same);
        assert!(!scored);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_unknown_session() {
        let store = SessionStore::new();
        let id = Uuid::new_v4();

        assert_eq!(
            store.with_session(id, |_| ()).await,
            Err(SessionError::UnknownSession(id))
        );
    }

    #[tokio::test]
    async fn test_stale_id_gets_fresh_session() {
        let store = SessionStore::new();
        let stale = Uuid::new_v4();

        let (id, _) = store.with_session_or_create(Some(stale), |_| ()).await;

        assert_ne!(id, stale);
        assert!(store.with_session(id, |_| ()).await.is_ok());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_idle_sessions_expire() {
        let store = SessionStore::with_limits(Duration::minutes(30), 100);
        let (old, _) = store.with_session_or_create(None, |_| ()).await;

        assert_eq!(store.prune_expired(Utc::now()).await, 0);
        assert_eq!(
            store.prune_expired(Utc::now() + Duration::minutes(31)).await,
            1
        );
        assert_eq!(store.len().await, 0);
        assert!(store.with_session(old, |_| ()).await.is_err());
    }

    #[tokio::test]
    async fn test_capacity_evicts_least_recently_used() {
        let store = SessionStore::with_limits(Duration::minutes(30), 2);
        let (first, _) = store.with_session_or_create(None, |_| ()).await;
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let (second, _) = store.with_session_or_create(None, |_| ()).await;
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        // 访问 first，使 second 成为最久未访问的会话
        store.with_session(first, |_| ()).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;

        let (third, _) = store.with_session_or_create(None, |_| ()).await;

        assert_eq!(store.len().await, 2);
        assert!(store.with_session(first, |_| ()).await.is_ok());
        assert!(store.with_session(second, |_| ()).await.is_err());
        assert!(store.with_session(third, |_| ()).await.is_ok());
    }
}
