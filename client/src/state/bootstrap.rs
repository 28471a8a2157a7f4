//! One-time session verification at application start.
//!
//! DESIGN
//! ======
//! `Uninitialized -> Verifying -> Initialized`. Only the first call to
//! [`Bootstrapper::run`] hits `/verify-cookie-token`; calls made while that
//! request is in flight, or after it finished, return immediately. The phase
//! reaches `Initialized` on every outcome so the loading screen cannot hang.
//!
//! There is no retry: a failed verification means "anonymous".

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::transport::Transport;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BootstrapPhase {
    #[default]
    Uninitialized,
    Verifying,
    Initialized,
}

/// Drives the bootstrap state machine. Clones share one phase.
#[derive(Clone)]
pub struct Bootstrapper {
    phase: ArcRwSignal<BootstrapPhase>,
}

impl Default for Bootstrapper {
    fn default() -> Self {
        Self::new()
    }
}

impl Bootstrapper {
    #[must_use]
    pub fn new() -> Self {
        Self { phase: ArcRwSignal::new(BootstrapPhase::Uninitialized) }
    }

    /// Current phase, subscribing the running effect (if any).
    #[must_use]
    pub fn phase(&self) -> BootstrapPhase {
        self.phase.get()
    }

    /// Whether verification has completed, subscribing the running effect.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.phase() == BootstrapPhase::Initialized
    }

    /// Verify the session cookie once and publish the result to the client's
    /// session store.
    pub async fn run<T: Transport>(&self, api: &ApiClient<T>) {
        if self.phase.get_untracked() != BootstrapPhase::Uninitialized {
            return;
        }
        self.phase.set(BootstrapPhase::Verifying);

        let session = api.session();
        match api.verify_session().await {
            Ok(payload) => match payload.into_authenticated_user() {
                Some(user) => {
                    log::debug!("session verified for user {}", user.id);
                    session.set_authenticated(user);
                }
                None => {
                    log::debug!("no active session");
                    session.set_anonymous();
                }
            },
            Err(e) => {
                log::warn!("session verification failed: {e}");
                session.set_anonymous();
            }
        }

        self.phase.set(BootstrapPhase::Initialized);
    }
}
