// src/infrastructure/security/session_store.rs
use crate::application::{
    ApplicationResult,
    dto::{CurrentUser, SessionDto, UserDto},
    ports::{session::SessionStore, time::Clock},
};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use uuid::Uuid;

struct SessionRecord {
    user: CurrentUser,
    expires_at: DateTime<Utc>,
}

/// Process-local sessions keyed by the SHA-256 digest of their bearer token.
/// Sessions do not survive a restart.
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<String, SessionRecord>>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
}

impl InMemorySessionStore {
    pub fn new(clock: Arc<dyn Clock>, ttl: std::time::Duration) -> Self {
        Self {
            sessions: Mutex::new(HashMap::new()),
            clock,
            ttl: Duration::from_std(ttl).unwrap_or_else(|_| Duration::days(1)),
        }
    }

    fn digest(token: &str) -> String {
        let hash = Sha256::digest(token.as_bytes());
        hash.iter().map(|b| format!("{b:02x}")).collect()
    }

    // A poisoned map only means another request panicked mid-update; the
    // entries themselves are still usable.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, SessionRecord>> {
        self.sessions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn purge_expired(map: &mut HashMap<String, SessionRecord>, now: DateTime<Utc>) {
        map.retain(|_, record| record.expires_at > now);
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn open(&self, user: CurrentUser) -> ApplicationResult<SessionDto> {
        let now = self.clock.now();
        let token = format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple());
        let expires_at = now + self.ttl;
        let user_dto = UserDto::from(&user);

        let mut sessions = self.lock();
        Self::purge_expired(&mut sessions, now);
        sessions.insert(Self::digest(&token), SessionRecord { user, expires_at });

        Ok(SessionDto {
            token,
            issued_at: now,
            expires_at,
            user: user_dto,
        })
    }

    async fn resolve(&self, token: &str) -> ApplicationResult<Option<CurrentUser>> {
        let now = self.clock.now();
        let key = Self::digest(token);
        let mut sessions = self.lock();

        match sessions.get(&key) {
            Some(record) if record.expires_at > now => Ok(Some(record.user.clone())),
            Some(_) => {
                sessions.remove(&key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    async fn revoke(&self, token: &str) -> ApplicationResult<()> {
        self.lock().remove(&Self::digest(token));
        Ok(())
    }
}
