//! # Certificate Status
//!
//! The administrator-asserted lifecycle flag on a certificate record.
//! Stored independently of the record's expiry date; the verification
//! engine reconciles the two signals at query time, never on write.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Administrator-asserted certificate status.
///
/// `Revoked` is a permanent invalidation and outranks expiry during
/// verification. `Expired` can be set explicitly even when the record's
/// expiry date has not passed (or is absent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CertificateStatus {
    /// The certificate is in good standing.
    Active,
    /// Explicitly marked expired by an administrator.
    Expired,
    /// Permanently invalidated by an administrator.
    Revoked,
}

impl CertificateStatus {
    /// Returns the lowercase wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Expired => "expired",
            Self::Revoked => "revoked",
        }
    }
}

impl std::fmt::Display for CertificateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CertificateStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "expired" => Ok(Self::Expired),
            "revoked" => Ok(Self::Revoked),
            other => Err(CoreError::UnknownStatus(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&CertificateStatus::Active).unwrap(),
            "\"active\""
        );
        assert_eq!(
            serde_json::to_string(&CertificateStatus::Revoked).unwrap(),
            "\"revoked\""
        );
    }

    #[test]
    fn parses_wire_names() {
        assert_eq!(
            "expired".parse::<CertificateStatus>().unwrap(),
            CertificateStatus::Expired
        );
        assert!("ACTIVE".parse::<CertificateStatus>().is_err());
        assert!("".parse::<CertificateStatus>().is_err());
    }

    #[test]
    fn display_matches_wire_name() {
        assert_eq!(CertificateStatus::Revoked.to_string(), "revoked");
    }
}
