//! Error types for the login gate.

use thiserror::Error;

use crate::gate::GateState;

/// Errors raised by the gate itself. A rejected login is not one of them:
/// that is `LoginOutcome::Failure`.
#[derive(Debug, Error)]
pub enum GateError {
    /// The gate reached a terminal state and accepts no further input.
    #[error("login gate is closed ({state})")]
    Closed { state: GateState },

    /// The authenticator could not reach a verdict.
    #[error("authenticator failure: {0}")]
    Authenticator(#[source] anyhow::Error),

    /// The credential prompt could not read operator input.
    #[error("credential prompt failed: {0}")]
    Prompt(String),
}
