//! Session state and storage.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default session timeout (30 minutes).
#[allow(dead_code)]
const DEFAULT_SESSION_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// The fixed first transcript entry.
pub const CHAT_GREETING: &str = "Hi, how can I help you today?";

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    /// The signed-in visitor.
    User,
    /// The rental agent assistant.
    Bot,
}

/// One entry in a session's chat transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub speaker: Speaker,
    pub text: String,
}

/// State for one browser session.
///
/// Cheap to clone; all clones share the same interior state.
#[derive(Debug)]
pub struct Session {
    inner: Arc<SessionInner>,
}

#[derive(Debug)]
struct SessionInner {
    /// Unique session identifier, mirrored in the `sid` cookie.
    id: String,
    /// The signed-in user, if any.
    user_id: RwLock<Option<i64>>,
    /// Property ids the user has liked. Flipped optimistically; resynced from
    /// the favourites endpoint on sign-in.
    favourites: RwLock<HashSet<i64>>,
    /// Chat transcript, append-only for the session lifetime.
    transcript: RwLock<Vec<ChatMessage>>,
    /// Session creation time.
    #[allow(dead_code)]
    created_at: DateTime<Utc>,
    /// Last activity time.
    last_activity: RwLock<DateTime<Utc>>,
}

impl Clone for Session {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl Session {
    /// Create a new anonymous session with the given ID.
    fn new(id: String) -> Self {
        let now = Utc::now();
        Self {
            inner: Arc::new(SessionInner {
                id,
                user_id: RwLock::new(None),
                favourites: RwLock::new(HashSet::new()),
                transcript: RwLock::new(vec![ChatMessage {
                    speaker: Speaker::Bot,
                    text: CHAT_GREETING.to_string(),
                }]),
                created_at: now,
                last_activity: RwLock::new(now),
            }),
        }
    }

    /// Get the session ID.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.inner.id
    }

    /// Whether a user is signed in.
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.inner.user_id.read().unwrap().is_some()
    }

    /// The signed-in user id, if any.
    #[must_use]
    pub fn user_id(&self) -> Option<i64> {
        *self.inner.user_id.read().unwrap()
    }

    /// The id sent upstream as the viewer: the user id, or zero when
    /// anonymous.
    #[must_use]
    pub fn viewer_id(&self) -> i64 {
        self.user_id().unwrap_or(0)
    }

    /// Store the user id and seed the favourites set from the server.
    pub fn sign_in(&self, user_id: i64, favourite_ids: Vec<i64>) {
        *self.inner.user_id.write().unwrap() = Some(user_id);
        *self.inner.favourites.write().unwrap() = favourite_ids.into_iter().collect();
        self.touch();
    }

    /// Clear the login state. The favourites set and transcript are left in
    /// place; neither is rendered while signed out, and in-flight requests
    /// are unaffected.
    pub fn sign_out(&self) {
        *self.inner.user_id.write().unwrap() = None;
        self.touch();
    }

    /// Replace the favourites set wholesale.
    pub fn set_favourites(&self, ids: Vec<i64>) {
        *self.inner.favourites.write().unwrap() = ids.into_iter().collect();
        self.touch();
    }

    /// Flip local membership for a property id, returning the new state.
    /// Always succeeds; callers fire the upstream like request separately.
    pub fn toggle_favourite(&self, property_id: i64) -> bool {
        let mut guard = self.inner.favourites.write().unwrap();
        let now_liked = if guard.contains(&property_id) {
            guard.remove(&property_id);
            false
        } else {
            guard.insert(property_id);
            true
        };
        drop(guard);
        self.touch();
        now_liked
    }

    /// Whether the property is in the local favourites set.
    #[must_use]
    pub fn is_favourite(&self, property_id: i64) -> bool {
        self.inner.favourites.read().unwrap().contains(&property_id)
    }

    /// Snapshot of the favourite ids.
    #[must_use]
    pub fn favourites(&self) -> HashSet<i64> {
        self.inner.favourites.read().unwrap().clone()
    }

    /// Append a visitor message to the transcript.
    pub fn push_user_message(&self, text: impl Into<String>) {
        self.push_message(Speaker::User, text.into());
    }

    /// Append an assistant message to the transcript.
    pub fn push_bot_message(&self, text: impl Into<String>) {
        self.push_message(Speaker::Bot, text.into());
    }

    fn push_message(&self, speaker: Speaker, text: String) {
        let mut guard = self.inner.transcript.write().unwrap();
        guard.push(ChatMessage { speaker, text });
        drop(guard);
        self.touch();
    }

    /// Snapshot of the chat transcript.
    #[must_use]
    pub fn transcript(&self) -> Vec<ChatMessage> {
        self.inner.transcript.read().unwrap().clone()
    }

    /// Update the last activity timestamp.
    fn touch(&self) {
        let mut guard = self.inner.last_activity.write().unwrap();
        *guard = Utc::now();
    }

    /// Check if the session has been inactive longer than the timeout.
    #[must_use]
    #[allow(dead_code)]
    pub fn is_expired_with_timeout(&self, timeout: Duration) -> bool {
        let last = *self.inner.last_activity.read().unwrap();
        let now = Utc::now();
        if let Ok(duration) = (now - last).to_std() {
            duration > timeout
        } else {
            // Negative duration means clock skew or "last" is in future.
            false
        }
    }
}

/// Thread-safe store for sessions.
#[derive(Debug, Clone)]
pub struct SessionStore {
    inner: Arc<SessionStoreInner>,
}

#[derive(Debug)]
struct SessionStoreInner {
    sessions: RwLock<HashMap<String, Session>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Create a new session store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(SessionStoreInner {
                sessions: RwLock::new(HashMap::new()),
            }),
        }
    }

    /// Create a new session and return it.
    #[must_use]
    pub fn create(&self) -> Session {
        let id = Uuid::new_v4().to_string();
        let session = Session::new(id.clone());
        let mut guard = self.inner.sessions.write().unwrap();
        guard.insert(id, session.clone());
        session
    }

    /// Get a session by ID.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<Session> {
        let guard = self.inner.sessions.read().unwrap();
        guard.get(id).cloned()
    }

    /// Remove a session by ID.
    pub fn remove(&self, id: &str) -> Option<Session> {
        let mut guard = self.inner.sessions.write().unwrap();
        guard.remove(id)
    }

    /// Get the number of active sessions.
    #[must_use]
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.inner.sessions.read().unwrap().len()
    }

    /// Check if there are no sessions.
    #[must_use]
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove sessions that have been inactive longer than the timeout.
    #[allow(dead_code)]
    pub fn cleanup_expired_with_timeout(&self, timeout: Duration) -> usize {
        let mut guard = self.inner.sessions.write().unwrap();
        let before = guard.len();
        guard.retain(|_, session| !session.is_expired_with_timeout(timeout));
        before - guard.len()
    }
}
