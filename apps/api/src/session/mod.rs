//! Per-session context store.
//!
//! Each session owns one `SessionContext` (form inputs plus the saved profile).
//! Contexts are created by `create`, torn down by `end`, and purged once idle
//! longer than the configured TTL.

pub mod handlers;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use crate::profile::{FormInput, Profile};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Session {0} not found or expired")]
    NotFound(Uuid),
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionContext {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub last_seen: DateTime<Utc>,
    pub form: FormInput,
    pub profile: Option<Profile>,
}

impl SessionContext {
    fn new(now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: now,
            last_seen: now,
            form: FormInput::default(),
            profile: None,
        }
    }
}

#[derive(Clone)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, SessionContext>>>,
    ttl: chrono::Duration,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            ttl: chrono::Duration::from_std(ttl).unwrap_or(chrono::Duration::MAX),
        }
    }

    pub async fn create(&self) -> SessionContext {
        let context = SessionContext::new(Utc::now());
        self.sessions
            .write()
            .await
            .insert(context.id, context.clone());
        info!(session_id = %context.id, "Session started");
        context
    }

    /// Returns a snapshot of the session and refreshes its idle timer.
    pub async fn get(&self, id: Uuid) -> Result<SessionContext, SessionError> {
        self.update(id, |_| ()).await.map(|(ctx, _)| ctx)
    }

    /// Stores a validated profile together with the form it was built from,
    /// replacing any earlier submission.
    pub async fn save_profile(
        &self,
        id: Uuid,
        form: FormInput,
        profile: Profile,
    ) -> Result<SessionContext, SessionError> {
        self.update(id, move |ctx| {
            ctx.form = form;
            ctx.profile = Some(profile);
        })
        .await
        .map(|(ctx, _)| ctx)
    }

    /// Resets the form and profile but keeps the session alive.
    pub async fn clear_profile(&self, id: Uuid) -> Result<SessionContext, SessionError> {
        self.update(id, |ctx| {
            ctx.form = FormInput::default();
            ctx.profile = None;
        })
        .await
        .map(|(ctx, _)| ctx)
    }

    pub async fn end(&self, id: Uuid) -> Result<(), SessionError> {
        match self.sessions.write().await.remove(&id) {
            Some(_) => {
                info!(session_id = %id, "Session ended");
                Ok(())
            }
            None => Err(SessionError::NotFound(id)),
        }
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Drops every session idle for longer than the TTL as of `now`.
    pub async fn purge_expired(&self, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, ctx| !self.is_expired(ctx, now));
        let purged = before - sessions.len();
        if purged > 0 {
            debug!(purged, "Purged idle sessions");
        }
        purged
    }

    /// Spawns a background task that purges idle sessions every `interval`.
    pub fn spawn_sweeper(&self, interval: Duration) -> tokio::task::JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.tick().await;
            loop {
                ticker.tick().await;
                store.purge_expired(Utc::now()).await;
            }
        })
    }

    fn is_expired(&self, ctx: &SessionContext, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(ctx.last_seen) > self.ttl
    }

    async fn update<F, R>(&self, id: Uuid, f: F) -> Result<(SessionContext, R), SessionError>
    where
        F: FnOnce(&mut SessionContext) -> R,
    {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;

        let expired = match sessions.get(&id) {
            Some(ctx) => self.is_expired(ctx, now),
            None => return Err(SessionError::NotFound(id)),
        };
        if expired {
            sessions.remove(&id);
            debug!(session_id = %id, "Session expired on access");
            return Err(SessionError::NotFound(id));
        }

        let ctx = sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;
        ctx.last_seen = now;
        let out = f(ctx);
        Ok((ctx.clone(), out))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::ProfileBuilder;

    fn store() -> SessionStore {
        SessionStore::new(Duration::from_secs(60 * 60))
    }

    fn form() -> FormInput {
        FormInput {
            interests_input: "AI".to_string(),
            strengths_input: "math".to_string(),
            ..FormInput::default()
        }
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let store = store();
        let ctx = store.create().await;
        let fetched = store.get(ctx.id).await.unwrap();
        assert_eq!(fetched.id, ctx.id);
        assert!(fetched.profile.is_none());
        assert!(fetched.last_seen >= ctx.last_seen);
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let id = Uuid::new_v4();
        assert_eq!(store().get(id).await.unwrap_err(), SessionError::NotFound(id));
    }

    #[tokio::test]
    async fn test_save_overwrites_and_clear_resets() {
        let store = store();
        let id = store.create().await.id;

        let first = ProfileBuilder::from_form(&form()).unwrap();
        store.save_profile(id, form(), first).await.unwrap();

        let mut second_form = form();
        second_form.interests_input = "robotics".to_string();
        let second = ProfileBuilder::from_form(&second_form).unwrap();
        let ctx = store.save_profile(id, second_form, second).await.unwrap();
        assert_eq!(ctx.form.interests_input, "robotics");
        assert_eq!(ctx.profile.unwrap().interests(), ["robotics"]);

        let cleared = store.clear_profile(id).await.unwrap();
        assert!(cleared.profile.is_none());
        assert_eq!(cleared.form, FormInput::default());
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = store();
        let a = store.create().await.id;
        let b = store.create().await.id;

        let profile = ProfileBuilder::from_form(&form()).unwrap();
        store.save_profile(a, form(), profile).await.unwrap();

        assert!(store.get(a).await.unwrap().profile.is_some());
        assert!(store.get(b).await.unwrap().profile.is_none());
    }

    #[tokio::test]
    async fn test_end_removes_session() {
        let store = store();
        let id = store.create().await.id;
        store.end(id).await.unwrap();
        assert!(store.get(id).await.is_err());
        assert_eq!(store.end(id).await.unwrap_err(), SessionError::NotFound(id));
    }

    #[tokio::test]
    async fn test_purge_drops_only_idle_sessions() {
        let store = store();
        let id = store.create().await.id;
        assert_eq!(store.purge_expired(Utc::now()).await, 0);

        let later = Utc::now() + chrono::Duration::hours(2);
        assert_eq!(store.purge_expired(later).await, 1);
        assert_eq!(store.len().await, 0);
        assert!(store.get(id).await.is_err());
    }

    #[tokio::test]
    async fn test_expired_session_is_rejected_on_access() {
        let store = SessionStore::new(Duration::ZERO);
        let id = store.create().await.id;
        tokio::time::sleep(Duration::from_millis(5)).await;
        assert_eq!(store.get(id).await.unwrap_err(), SessionError::NotFound(id));
        assert_eq!(store.len().await, 0);
    }
}
