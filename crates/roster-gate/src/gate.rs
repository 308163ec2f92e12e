//! The login state machine.
//!
//! ```text
//!                 submit
//! Unauthenticated ──────▶ Authenticating ──ok──▶ Authenticated
//!    ▲    │                     │
//!    │    │ cancel              │ rejected
//!    │    ▼                     │
//!    │  Aborted                 │
//!    └──────────────────────────┘
//! ```
//!
//! `Authenticated` and `Aborted` are terminal.

use roster_core::{Credentials, LoginOutcome, Session};
use std::fmt;
use tracing::{debug, info, warn};

use crate::authenticator::Authenticator;
use crate::error::GateError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateState {
    Unauthenticated,
    Authenticating,
    Authenticated,
    Aborted,
}

impl GateState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GateState::Authenticated | GateState::Aborted)
    }
}

impl fmt::Display for GateState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GateState::Unauthenticated => "unauthenticated",
            GateState::Authenticating => "authenticating",
            GateState::Authenticated => "authenticated",
            GateState::Aborted => "aborted",
        };
        f.write_str(name)
    }
}

/// Source of operator input for [`LoginGate::run`].
pub trait CredentialPrompt {
    /// Ask for credentials. `failed_attempts` counts rejections so far.
    /// `Ok(None)` means the operator cancelled.
    fn prompt(&mut self, failed_attempts: u32) -> Result<Option<Credentials>, GateError>;
}

pub struct LoginGate<A: Authenticator> {
    authenticator: A,
    state: GateState,
    attempts: u32,
    failures: u32,
    session: Option<Session>,
}

impl<A: Authenticator> LoginGate<A> {
    pub fn new(authenticator: A) -> Self {
        Self {
            authenticator,
            state: GateState::Unauthenticated,
            attempts: 0,
            failures: 0,
            session: None,
        }
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    /// Credentials submitted so far.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Submissions that were rejected.
    pub fn failures(&self) -> u32 {
        self.failures
    }

    /// The session opened by a successful login.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Submit one set of credentials.
    ///
    /// An attempt interrupted while `Authenticating` (its future dropped)
    /// leaves the gate able to accept the next submission.
    pub async fn attempt_login(
        &mut self,
        credentials: Credentials,
    ) -> Result<LoginOutcome, GateError> {
        if self.state.is_terminal() {
            return Err(GateError::Closed { state: self.state });
        }

        self.state = GateState::Authenticating;
        self.attempts += 1;
        debug!(attempt = self.attempts, username = %credentials.username, "Verifying credentials");

        let verdict = self.authenticator.verify(&credentials).await;
        match verdict {
            Ok(true) => {
                let session = Session::start(credentials.username);
                info!(
                    attempt = self.attempts,
                    session_id = %session.id,
                    username = %session.username,
                    "Login succeeded"
                );
                self.session = Some(session);
                self.state = GateState::Authenticated;
                Ok(LoginOutcome::Success)
            }
            Ok(false) => {
                self.failures += 1;
                self.state = GateState::Unauthenticated;
                warn!(attempt = self.attempts, username = %credentials.username, "Login rejected");
                Ok(LoginOutcome::Failure)
            }
            Err(e) => {
                self.state = GateState::Unauthenticated;
                warn!(attempt = self.attempts, error = %e, "Authenticator failed");
                Err(GateError::Authenticator(e))
            }
        }
    }

    /// Operator cancel. Only a gate that has not authenticated can abort.
    pub fn cancel(&mut self) -> Result<LoginOutcome, GateError> {
        match self.state {
            GateState::Authenticated => Err(GateError::Closed { state: self.state }),
            GateState::Aborted => Ok(LoginOutcome::Aborted),
            GateState::Unauthenticated | GateState::Authenticating => {
                self.state = GateState::Aborted;
                info!(attempts = self.attempts, "Login aborted by operator");
                Ok(LoginOutcome::Aborted)
            }
        }
    }

    /// Prompt until the operator authenticates or cancels.
    ///
    /// Returns `Success` or `Aborted`; there is no attempt limit.
    pub async fn run<P>(&mut self, prompt: &mut P) -> Result<LoginOutcome, GateError>
    where
        P: CredentialPrompt + ?Sized,
    {
        if self.state.is_terminal() {
            return Err(GateError::Closed { state: self.state });
        }

        loop {
            let Some(credentials) = prompt.prompt(self.failures)? else {
                return self.cancel();
            };

            let outcome = self.attempt_login(credentials).await?;
            if outcome.is_final() {
                return Ok(outcome);
            }
        }
    }
}
