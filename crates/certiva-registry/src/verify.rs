//! # Verification Decision Procedure
//!
//! The single authoritative mapping from a looked-up record to a
//! valid/invalid judgment with a human-readable message. Every
//! verification display in the system routes through
//! [`CertificateRegistry::verify()`](crate::CertificateRegistry::verify)
//! and therefore through this module; no other component may carry its
//! own copy of the policy.
//!
//! ## Policy, in order
//!
//! 1. No record → invalid, no certificate attached.
//! 2. `revoked` status → invalid. Revocation is an administrator-issued
//!    signal and outranks expiry: a revoked-and-expired certificate
//!    reports as revoked.
//! 3. `expired` status, or an `expiry_date` before the evaluation date →
//!    invalid. The explicit flag short-circuits before the date is even
//!    consulted, and an `active`-flagged record past its date is still
//!    caught here. This is the one place the two independently stored
//!    expiry signals are reconciled.
//! 4. Otherwise → valid.
//!
//! An invalid verdict is an expected business outcome, never a fault.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use certiva_core::CertificateStatus;

use crate::certificate::Certificate;

/// Message for an identifier that matched no record.
pub const MSG_NOT_FOUND: &str = "Certificate not found.";
/// Message for a revoked certificate.
pub const MSG_REVOKED: &str = "This certificate has been revoked.";
/// Message for an expired certificate (by status or by date).
pub const MSG_EXPIRED: &str = "This certificate has expired.";
/// Message for a valid certificate.
pub const MSG_VALID: &str = "Valid certificate.";

/// The verification judgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// The certificate is in good standing.
    Valid,
    /// The certificate is missing, revoked, or expired.
    Invalid,
}

impl Verdict {
    /// Returns `true` for [`Verdict::Valid`].
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Valid => f.write_str("valid"),
            Verdict::Invalid => f.write_str("invalid"),
        }
    }
}

/// The outcome of a verification query.
///
/// The certificate is attached whenever a record was found — including
/// revoked and expired outcomes, so callers can display what was found
/// alongside why it failed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerificationReport {
    /// The judgment.
    pub verdict: Verdict,
    /// The matched record, if any. Cloned out of the registry; mutating
    /// it does not touch registry state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<Certificate>,
    /// Human-readable explanation of the verdict.
    pub message: String,
}

/// Apply the decision procedure to a lookup result.
///
/// `looked_up` is the outcome of the registry's dual-key match; `on` is
/// the evaluation date for the derived-expiry check.
pub(crate) fn evaluate(looked_up: Option<&Certificate>, on: NaiveDate) -> VerificationReport {
    let Some(cert) = looked_up else {
        return VerificationReport {
            verdict: Verdict::Invalid,
            certificate: None,
            message: MSG_NOT_FOUND.to_string(),
        };
    };

    if cert.status == CertificateStatus::Revoked {
        return VerificationReport {
            verdict: Verdict::Invalid,
            certificate: Some(cert.clone()),
            message: MSG_REVOKED.to_string(),
        };
    }

    let expired_by_date = cert.expiry_date.is_some_and(|expiry| expiry < on);
    if cert.status == CertificateStatus::Expired || expired_by_date {
        return VerificationReport {
            verdict: Verdict::Invalid,
            certificate: Some(cert.clone()),
            message: MSG_EXPIRED.to_string(),
        };
    }

    VerificationReport {
        verdict: Verdict::Valid,
        certificate: Some(cert.clone()),
        message: MSG_VALID.to_string(),
    }
}
