use std::sync::{Arc, RwLock};

/// Signed-in user as supplied by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub token: String,
    pub is_iconic: bool,
}

/// Auth provider capability.
pub trait AuthContext: Send + Sync {
    fn session(&self) -> Option<Session>;

    /// Records a confirmed membership upgrade for the current session.
    fn mark_iconic(&self);

    fn is_iconic(&self) -> bool {
        self.session().is_some_and(|s| s.is_iconic)
    }

    fn token(&self) -> Option<String> {
        self.session().map(|s| s.token)
    }
}

impl<T: AuthContext + ?Sized> AuthContext for Arc<T> {
    fn session(&self) -> Option<Session> {
        (**self).session()
    }

    fn mark_iconic(&self) {
        (**self).mark_iconic()
    }
}

/// Session held in memory for the lifetime of the process.
#[derive(Debug, Default)]
pub struct StaticAuth {
    session: RwLock<Option<Session>>,
}

impl StaticAuth {
    pub fn new(session: Session) -> Self {
        Self {
            session: RwLock::new(Some(session)),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }
}

impl AuthContext for StaticAuth {
    fn session(&self) -> Option<Session> {
        self.session
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn mark_iconic(&self) {
        let mut session = self
            .session
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(session) = session.as_mut() {
            tracing::debug!(user_id = %session.user_id, "Session marked ICONIC");
            session.is_iconic = true;
        }
    }
}
