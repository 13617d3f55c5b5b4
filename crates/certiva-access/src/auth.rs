//! # Admin Login Gate
//!
//! The credential check guarding the admin surface. The trait is the
//! interface a real authentication backend would implement; the bundled
//! [`MockCredentialCheck`] is a demo stand-in that accepts any non-empty
//! username/password pair. Swapping in a real backend touches nothing
//! but the injection site.

use thiserror::Error;

/// Failures from the login gate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    /// The supplied credentials were rejected.
    #[error("invalid credentials: username and password must be non-empty")]
    InvalidCredentials,
}

/// An authenticated admin session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminSession {
    /// The username the session was opened for.
    pub username: String,
}

/// The interface a credential backend implements.
pub trait CredentialCheck {
    /// Authenticate a username/password pair, returning a session on
    /// success.
    fn authenticate(&self, username: &str, password: &str) -> Result<AdminSession, AccessError>;
}

/// Demo stand-in: accepts any non-empty username/password pair.
///
/// This performs no real authentication. It exists so the admin surface
/// exercises the same gate a production deployment would, with the same
/// rejection path for blank input.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockCredentialCheck;

impl CredentialCheck for MockCredentialCheck {
    fn authenticate(&self, username: &str, password: &str) -> Result<AdminSession, AccessError> {
        if username.trim().is_empty() || password.trim().is_empty() {
            return Err(AccessError::InvalidCredentials);
        }
        tracing::debug!(username, "mock login accepted");
        Ok(AdminSession {
            username: username.to_string(),
        })
    }
}
