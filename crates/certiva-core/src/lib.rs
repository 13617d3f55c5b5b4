//! # certiva-core — Foundational types for Certiva
//!
//! Domain primitives shared by the registry, the access stand-ins, and
//! the CLI:
//!
//! - **Identity newtypes** ([`CertificateId`], [`CertificateNumber`]) with
//!   validating constructors and the registry's id-generation scheme.
//! - **Status enum** ([`CertificateStatus`]) — the administrator-asserted
//!   lifecycle flag, stored independently of the derived expiry check.
//! - **Calendar-date helpers** ([`today_utc()`], [`parse_date()`]).
//! - **Structured errors** ([`CoreError`]) for construction-time
//!   validation. "Not found" is never an error anywhere in Certiva; it is
//!   an `Option::None` sentinel handled as a normal branch.

pub mod error;
pub mod identity;
pub mod status;
pub mod temporal;

// Re-export primary types.
pub use error::CoreError;
pub use identity::{CertificateId, CertificateNumber};
pub use status::CertificateStatus;
pub use temporal::{parse_date, today_utc};
