//! # certiva-access — Presentation-boundary stand-ins
//!
//! The two mock seams at the edge of the demo system, each behind the
//! trait a real implementation would use so they can be swapped without
//! touching the registry:
//!
//! - **Login gate** ([`CredentialCheck`] / [`MockCredentialCheck`]):
//!   accepts any non-empty username/password pair. No real
//!   authentication.
//! - **QR decoding** ([`QrDecoder`] / [`DigestQrDecoder`]): hashes the
//!   uploaded image bytes and picks a candidate identifier. No real
//!   image or QR processing.
//!
//! Neither stand-in holds certificate state or verification logic; both
//! route their results through the registry like any other caller.

pub mod auth;
pub mod scan;

// Re-export primary types.
pub use auth::{AccessError, AdminSession, CredentialCheck, MockCredentialCheck};
pub use scan::{DigestQrDecoder, QrDecoder};
