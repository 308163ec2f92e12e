//! # roster-gate
//!
//! Login gate in front of the employee directory.
//!
//! The gate sequences authentication attempts and tracks where the operator
//! is in the login flow. What counts as valid credentials is entirely up to
//! the [`Authenticator`] it is built with.
//!
//! ## Usage
//!
//! ```no_run
//! use roster_core::{Credentials, LoginOutcome};
//! use roster_gate::{LoginGate, StaticAuthenticator};
//!
//! # async fn demo() -> Result<(), roster_gate::GateError> {
//! let auth = StaticAuthenticator::new(Credentials::new("admin", "letmein"));
//! let mut gate = LoginGate::new(auth);
//!
//! match gate.attempt_login(Credentials::new("admin", "letmein")).await? {
//!     LoginOutcome::Success => println!("welcome"),
//!     LoginOutcome::Failure => println!("try again"),
//!     LoginOutcome::Aborted => unreachable!(),
//! }
//! # Ok(())
//! # }
//! ```

pub mod authenticator;
pub mod error;
pub mod gate;

pub use authenticator::{Authenticator, StaticAuthenticator};
pub use error::GateError;
pub use gate::{CredentialPrompt, GateState, LoginGate};
