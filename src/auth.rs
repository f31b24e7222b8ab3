//! Authentication state as seen by the application.

use log::info;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
}

impl User {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: format!("local:{}", name.to_lowercase()),
            name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<User>,
    pub is_loading: bool,
}

impl AuthState {
    pub fn loading() -> Self {
        Self {
            user: None,
            is_loading: true,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }
}

pub trait AuthProvider: Send + Sync {
    /// Receiver that always holds the latest state.
    fn subscribe(&self) -> watch::Receiver<AuthState>;

    fn current(&self) -> AuthState {
        self.subscribe().borrow().clone()
    }
}

/// In-process provider: no backend, the user is whoever signs in.
#[derive(Debug)]
pub struct LocalAuth {
    tx: watch::Sender<AuthState>,
}

impl Default for LocalAuth {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalAuth {
    /// Starts in the loading state.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(AuthState::loading());
        Self { tx }
    }

    pub fn signed_in(user: User) -> Self {
        let auth = Self::new();
        auth.sign_in(user);
        auth
    }

    pub fn sign_in(&self, user: User) {
        info!("signed in as {}", user.name);
        self.tx.send_replace(AuthState {
            user: Some(user),
            is_loading: false,
        });
    }

    pub fn sign_out(&self) {
        info!("signed out");
        self.tx.send_replace(AuthState {
            user: None,
            is_loading: false,
        });
    }

    /// Leave the loading state without a user.
    pub fn finish_loading(&self) {
        self.tx.send_modify(|state| state.is_loading = false);
    }
}

impl AuthProvider for LocalAuth {
    fn subscribe(&self) -> watch::Receiver<AuthState> {
        self.tx.subscribe()
    }
}
