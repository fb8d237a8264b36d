//! In-memory session store.
//!
//! Maps opaque bearer tokens to signed-in sessions, each carrying the
//! user's identity and the live quiz state. Sessions die with the process;
//! durable or distributed session storage is out of scope.

use std::collections::HashMap;

use quiz_core::{QuizPlan, QuizSessionState};
use tokio::sync::RwLock;
use uuid::Uuid;

/// One signed-in browser session.
#[derive(Debug, Clone)]
pub struct Session {
    pub user_id: Uuid,
    pub nickname: String,
    /// The immutable plan of the quiz underway, if any.
    pub plan: Option<QuizPlan>,
    /// Live progress through that plan.
    pub quiz: QuizSessionState,
}

impl Session {
    fn new(user_id: Uuid, nickname: String) -> Self {
        Self {
            user_id,
            nickname,
            plan: None,
            quiz: QuizSessionState::new(),
        }
    }
}

/// Token-keyed session storage.
#[derive(Default)]
pub struct SessionStore {
    sessions: RwLock<HashMap<String, Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a session for a signed-in user and return its token.
    pub async fn create(&self, user_id: Uuid, nickname: &str) -> String {
        let token = Uuid::new_v4().to_string();
        self.sessions
            .write()
            .await
            .insert(token.clone(), Session::new(user_id, nickname.to_string()));
        token
    }

    /// Get a snapshot of the session behind `token`.
    pub async fn get(&self, token: &str) -> Option<Session> {
        self.sessions.read().await.get(token).cloned()
    }

    /// Run `f` with mutable access to the session behind `token`.
    ///
    /// The whole call happens under the store's write lock, so quiz
    /// mutations for one token are serialized even when a client
    /// double-submits.
    pub async fn with_session<F, T>(&self, token: &str, f: F) -> Option<T>
    where
        F: FnOnce(&mut Session) -> T,
    {
        self.sessions.write().await.get_mut(token).map(f)
    }

    /// Drop the session behind `token`, invalidating it.
    pub async fn remove(&self, token: &str) {
        self.sessions.write().await.remove(token);
    }
}
