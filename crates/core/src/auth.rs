//! Identity-provider boundary.
//!
//! Sign-in itself belongs to an external collaborator; this module only
//! fixes the operations the client consumes and ships a local provider
//! so the shell and the tests can run without one.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use thiserror::Error;
use tokio::sync::watch;
use ulid::Ulid;

use crate::model::Identity;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("sign-in failed: {0}")]
    SignIn(String),
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Interactive sign-in. Control may leave the application (redirect
    /// flows) and resolves with the established identity or an error.
    async fn sign_in(&self) -> Result<Identity, AuthError>;

    /// Idempotent; always succeeds locally.
    fn sign_out(&self);

    /// Current identity or none, re-delivered on every change
    /// including the initial state.
    fn watch(&self) -> watch::Receiver<Option<Identity>>;
}

struct DevState {
    rejecting: bool,
}

/// Local provider that establishes a fixed profile instantly. Stands in
/// for the external provider during development and in tests;
/// `set_rejecting` forces sign-in failures.
pub struct DevIdentity {
    profile: Identity,
    tx: watch::Sender<Option<Identity>>,
    state: Arc<Mutex<DevState>>,
}

impl DevIdentity {
    pub fn new(display_name: &str) -> Self {
        let profile = Identity {
            uid: Ulid::new().to_string(),
            display_name: display_name.to_string(),
        };
        let (tx, _rx) = watch::channel(None);
        Self {
            profile,
            tx,
            state: Arc::new(Mutex::new(DevState { rejecting: false })),
        }
    }

    pub fn set_rejecting(&self, rejecting: bool) {
        self.state.lock().rejecting = rejecting;
    }

    pub fn profile(&self) -> &Identity {
        &self.profile
    }
}

#[async_trait]
impl IdentityProvider for DevIdentity {
    async fn sign_in(&self) -> Result<Identity, AuthError> {
        if self.state.lock().rejecting {
            return Err(AuthError::SignIn("provider rejected the request".into()));
        }
        tracing::debug!(uid = %self.profile.uid, "dev identity signed in");
        self.tx.send_replace(Some(self.profile.clone()));
        Ok(self.profile.clone())
    }

    fn sign_out(&self) {
        self.tx.send_replace(None);
    }

    fn watch(&self) -> watch::Receiver<Option<Identity>> {
        self.tx.subscribe()
    }
}
