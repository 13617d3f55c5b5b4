//! # certiva-registry — Certificate Registry and Verification Engine
//!
//! The authoritative in-memory owner of the certificate collection.
//! Provides:
//!
//! - **Record shape** ([`Certificate`], [`CertificateDraft`],
//!   [`CertificateUpdate`], decorative [`BlockchainData`]).
//! - **CRUD** over the collection via [`CertificateRegistry`]:
//!   list / get / create / update / delete, with dual-key lookups
//!   (id or certificate number) for reads.
//! - **Verification** ([`CertificateRegistry::verify()`]): the single
//!   decision procedure mapping an identifier to a [`VerificationReport`].
//!   Precedence is fixed: not found, then revoked, then expired (explicit
//!   status before derived date), then valid.
//! - **Seed data** ([`seed::demo_certificates()`]) for the demo
//!   deployment and tests.
//!
//! ## Ownership
//!
//! A registry instance is constructed once per process or session and
//! passed by reference to all callers. Reads return clones; not-found is
//! an `Option::None` sentinel, never an error. Contents live for the
//! process only — persistence is out of scope.

pub mod certificate;
pub mod registry;
pub mod seed;
pub mod verify;

// Re-export primary types.
pub use certificate::{BlockchainData, Certificate, CertificateDraft, CertificateUpdate};
pub use registry::CertificateRegistry;
pub use verify::{
    VerificationReport, Verdict, MSG_EXPIRED, MSG_NOT_FOUND, MSG_REVOKED, MSG_VALID,
};
