use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;

/// One candidate's working state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: Uuid,
    pub skills: Vec<String>,
    /// Set once skills have been supplied by manual entry or resume upload.
    pub is_processed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Session {
    fn new(skills: Vec<String>) -> Self {
        let now = Utc::now();
        Session {
            id: Uuid::new_v4(),
            is_processed: !skills.is_empty(),
            skills,
            created_at: now,
            updated_at: now,
        }
    }

    /// Skills for scoring, or a validation error if none were ever supplied.
    pub fn processed_skills(&self) -> Result<&[String], AppError> {
        if !self.is_processed {
            return Err(AppError::Validation(
                "Upload a resume or enter your skills first".to_string(),
            ));
        }
        Ok(&self.skills)
    }
}

/// Sessions idle longer than this are dropped.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(60 * 60);

struct Entry {
    session: Session,
    last_active: Instant,
}

impl Entry {
    fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        now.duration_since(self.last_active) >= ttl
    }
}

/// In-memory session map with idle expiry. Cheap to clone; clones share the
/// same map. Expired sessions are swept whenever a new one is created and
/// are invisible to every other operation.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Entry>>>,
    idle_ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_TTL)
    }
}

impl SessionStore {
    pub fn new(idle_ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            idle_ttl,
        }
    }

    pub fn idle_ttl(&self) -> Duration {
        self.idle_ttl
    }

    pub async fn create(&self, skills: Vec<String>) -> Session {
        let session = Session::new(skills);
        let now = Instant::now();

        let mut sessions = self.inner.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| !entry.is_expired(now, self.idle_ttl));
        let evicted = before - sessions.len();
        if evicted > 0 {
            debug!(evicted, "Evicted idle sessions");
        }

        sessions.insert(
            session.id,
            Entry {
                session: session.clone(),
                last_active: now,
            },
        );
        info!(session_id = %session.id, skills = session.skills.len(), "Session created");
        session
    }

    /// Fetches a live session and counts the read as activity.
    pub async fn get(&self, id: Uuid) -> Result<Session, AppError> {
        let now = Instant::now();
        let mut sessions = self.inner.write().await;
        let entry = live_entry(&mut sessions, id, now, self.idle_ttl)?;
        entry.last_active = now;
        Ok(entry.session.clone())
    }

    /// Replaces the skill list and marks the session processed.
    pub async fn replace_skills(&self, id: Uuid, skills: Vec<String>) -> Result<Session, AppError> {
        if skills.is_empty() {
            return Err(AppError::Validation(
                "Please enter at least one skill".to_string(),
            ));
        }

        self.update(id, |session| {
            session.skills = skills;
            session.is_processed = true;
        })
        .await
    }

    /// Appends a trimmed skill unless blank or already present verbatim.
    pub async fn add_skill(&self, id: Uuid, skill: &str) -> Result<Session, AppError> {
        let skill = skill.trim();
        if skill.is_empty() {
            return Err(AppError::Validation("skill cannot be empty".to_string()));
        }

        self.update(id, |session| {
            if !session.skills.iter().any(|s| s == skill) {
                session.skills.push(skill.to_string());
            }
        })
        .await
    }

    /// Removes every exact occurrence of `skill`.
    pub async fn remove_skill(&self, id: Uuid, skill: &str) -> Result<Session, AppError> {
        self.update(id, |session| session.skills.retain(|s| s != skill))
            .await
    }

    /// Drops the session and everything in it.
    pub async fn clear(&self, id: Uuid) -> Result<(), AppError> {
        let now = Instant::now();
        let mut sessions = self.inner.write().await;
        live_entry(&mut sessions, id, now, self.idle_ttl)?;
        sessions.remove(&id);
        info!(session_id = %id, "Session cleared");
        Ok(())
    }

    /// Number of sessions currently held, expired or not.
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    async fn update<F>(&self, id: Uuid, apply: F) -> Result<Session, AppError>
    where
        F: FnOnce(&mut Session),
    {
        let now = Instant::now();
        let mut sessions = self.inner.write().await;
        let entry = live_entry(&mut sessions, id, now, self.idle_ttl)?;
        apply(&mut entry.session);
        entry.session.updated_at = Utc::now();
        entry.last_active = now;
        Ok(entry.session.clone())
    }
}

/// Looks up `id`, dropping it on the spot if it has gone idle.
fn live_entry(
    sessions: &mut HashMap<Uuid, Entry>,
    id: Uuid,
    now: Instant,
    ttl: Duration,
) -> Result<&mut Entry, AppError> {
    if sessions.get(&id).is_some_and(|e| e.is_expired(now, ttl)) {
        sessions.remove(&id);
    }
    sessions.get_mut(&id).ok_or_else(|| not_found(id))
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Session {id} not found"))
}
