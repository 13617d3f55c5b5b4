//! # Certificate Record Shape
//!
//! The sole entity owned by the registry, plus its creation input
//! ([`CertificateDraft`]) and shallow-merge patch ([`CertificateUpdate`]).
//!
//! ## Field Naming
//!
//! Serde rename attributes map between Rust snake_case and the camelCase
//! wire field names (`recipientName`, `issueDate`, `blockchainData`, ...),
//! so serialized records match the shape presentation layers already
//! consume.
//!
//! ## Two expiry signals
//!
//! `status` and `expiry_date` are stored independently: an administrator
//! can flag a record `expired` (or `revoked`) without touching its date,
//! and a still-`active`-flagged record can age past its `expiry_date`.
//! Nothing normalizes the two on write — the verification engine
//! reconciles them at query time.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use certiva_core::{CertificateId, CertificateNumber, CertificateStatus};

/// A certificate record.
///
/// `id` is assigned by the registry at creation time and immutable
/// thereafter; every other field is mutable through
/// [`CertificateRegistry::update()`](crate::CertificateRegistry::update).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    /// Registry-assigned primary key.
    pub id: CertificateId,

    /// Who the certificate was issued to.
    #[serde(rename = "recipientName")]
    pub recipient_name: String,

    /// The issuing organization.
    #[serde(rename = "issuerName")]
    pub issuer_name: String,

    /// The course or program the certificate attests.
    #[serde(rename = "courseName")]
    pub course_name: String,

    /// Calendar date of issuance.
    #[serde(rename = "issueDate")]
    pub issue_date: NaiveDate,

    /// Optional calendar expiry date. When present and in the past at
    /// verification time, the certificate is expired even if `status`
    /// still says `active`.
    #[serde(
        rename = "expiryDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub expiry_date: Option<NaiveDate>,

    /// Human-facing alternate lookup key.
    #[serde(rename = "certificateNumber")]
    pub certificate_number: CertificateNumber,

    /// Administrator-asserted lifecycle flag.
    pub status: CertificateStatus,

    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Optional ordered list of achievement labels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievements: Option<Vec<String>>,

    /// Optional decorative blockchain record. Displayed as-is; never
    /// checked for consistency or recomputed.
    #[serde(
        rename = "blockchainData",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub blockchain_data: Option<BlockchainData>,
}

impl Certificate {
    /// Materialize a draft into a full record under the given id.
    pub(crate) fn from_draft(id: CertificateId, draft: CertificateDraft) -> Self {
        Self {
            id,
            recipient_name: draft.recipient_name,
            issuer_name: draft.issuer_name,
            course_name: draft.course_name,
            issue_date: draft.issue_date,
            expiry_date: draft.expiry_date,
            certificate_number: draft.certificate_number,
            status: draft.status,
            description: draft.description,
            achievements: draft.achievements,
            blockchain_data: draft.blockchain_data,
        }
    }

    /// Shallow-merge a patch over this record.
    ///
    /// Fields the patch leaves as `None` are unchanged byte-for-byte.
    /// `None` never clears an optional field; the original system's
    /// spread-merge could not clear one either, and that behavior is
    /// preserved exactly.
    pub(crate) fn apply(&mut self, patch: CertificateUpdate) {
        if let Some(v) = patch.recipient_name {
            self.recipient_name = v;
        }
        if let Some(v) = patch.issuer_name {
            self.issuer_name = v;
        }
        if let Some(v) = patch.course_name {
            self.course_name = v;
        }
        if let Some(v) = patch.issue_date {
            self.issue_date = v;
        }
        if let Some(v) = patch.expiry_date {
            self.expiry_date = Some(v);
        }
        if let Some(v) = patch.certificate_number {
            self.certificate_number = v;
        }
        if let Some(v) = patch.status {
            self.status = v;
        }
        if let Some(v) = patch.description {
            self.description = Some(v);
        }
        if let Some(v) = patch.achievements {
            self.achievements = Some(v);
        }
        if let Some(v) = patch.blockchain_data {
            self.blockchain_data = Some(v);
        }
    }
}

/// Decorative blockchain block attached to some records.
///
/// Carried for display parity with the original data set. No component
/// verifies hash chaining or recomputes these values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockchainData {
    /// Position in the decorative chain.
    pub index: u64,
    /// Local timestamp of the decorative block.
    pub timestamp: NaiveDateTime,
    /// Hex digest of the previous decorative block.
    pub previous_hash: String,
    /// Hex digest of this decorative block.
    pub hash: String,
    /// Proof-of-work-style nonce, inert here.
    pub nonce: u64,
}

/// Creation input: a [`Certificate`] minus its `id`.
///
/// The registry performs no business-rule validation on drafts; required
/// non-empty fields are the calling layer's responsibility (the newtypes
/// still reject empty certificate numbers at construction).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CertificateDraft {
    /// Who the certificate is issued to.
    #[serde(rename = "recipientName")]
    pub recipient_name: String,

    /// The issuing organization.
    #[serde(rename = "issuerName")]
    pub issuer_name: String,

    /// The course or program being attested.
    #[serde(rename = "courseName")]
    pub course_name: String,

    /// Calendar date of issuance.
    #[serde(rename = "issueDate")]
    pub issue_date: NaiveDate,

    /// Optional calendar expiry date.
    #[serde(
        rename = "expiryDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub expiry_date: Option<NaiveDate>,

    /// Human-facing alternate lookup key.
    #[serde(rename = "certificateNumber")]
    pub certificate_number: CertificateNumber,

    /// Administrator-asserted lifecycle flag.
    pub status: CertificateStatus,

    /// Optional free-text description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Optional ordered list of achievement labels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievements: Option<Vec<String>>,

    /// Optional decorative blockchain record.
    #[serde(
        rename = "blockchainData",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub blockchain_data: Option<BlockchainData>,
}

/// Shallow-merge patch for [`CertificateRegistry::update()`](crate::CertificateRegistry::update).
///
/// Every field is optional; `None` means "leave unchanged". The record's
/// `id` is not patchable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CertificateUpdate {
    /// New recipient name, if changing.
    #[serde(
        rename = "recipientName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub recipient_name: Option<String>,

    /// New issuer name, if changing.
    #[serde(
        rename = "issuerName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub issuer_name: Option<String>,

    /// New course name, if changing.
    #[serde(
        rename = "courseName",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub course_name: Option<String>,

    /// New issue date, if changing.
    #[serde(
        rename = "issueDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub issue_date: Option<NaiveDate>,

    /// New expiry date, if changing.
    #[serde(
        rename = "expiryDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub expiry_date: Option<NaiveDate>,

    /// New certificate number, if changing.
    #[serde(
        rename = "certificateNumber",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub certificate_number: Option<CertificateNumber>,

    /// New status, if changing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CertificateStatus>,

    /// New description, if changing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New achievements list, if changing. Replaces the whole list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievements: Option<Vec<String>>,

    /// New decorative blockchain record, if changing.
    #[serde(
        rename = "blockchainData",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub blockchain_data: Option<BlockchainData>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample() -> Certificate {
        Certificate {
            id: CertificateId::new("cert-1234-abcd-5678").unwrap(),
            recipient_name: "Jane Doe".to_string(),
            issuer_name: "Tech Academy".to_string(),
            course_name: "Full Stack Web Development".to_string(),
            issue_date: NaiveDate::from_ymd_opt(2023, 6, 15).unwrap(),
            expiry_date: NaiveDate::from_ymd_opt(2026, 6, 15),
            certificate_number: CertificateNumber::new("TA-FS-2023-001").unwrap(),
            status: CertificateStatus::Active,
            description: Some("600 hours of training.".to_string()),
            achievements: Some(vec!["React".to_string(), "TypeScript".to_string()]),
            blockchain_data: None,
        }
    }

    #[test]
    fn wire_field_names_are_camel_case() {
        let val = serde_json::to_value(sample()).unwrap();
        assert!(val.get("recipientName").is_some());
        assert!(val.get("issuerName").is_some());
        assert!(val.get("courseName").is_some());
        assert!(val.get("issueDate").is_some());
        assert!(val.get("expiryDate").is_some());
        assert!(val.get("certificateNumber").is_some());
        assert!(val.get("recipient_name").is_none());
        assert!(val.get("issue_date").is_none());
    }

    #[test]
    fn absent_optionals_are_omitted() {
        let mut cert = sample();
        cert.expiry_date = None;
        cert.description = None;
        cert.achievements = None;
        let val = serde_json::to_value(cert).unwrap();
        assert!(val.get("expiryDate").is_none());
        assert!(val.get("description").is_none());
        assert!(val.get("achievements").is_none());
        assert!(val.get("blockchainData").is_none());
    }

    #[test]
    fn dates_serialize_as_iso_calendar_dates() {
        let val = serde_json::to_value(sample()).unwrap();
        assert_eq!(val["issueDate"], "2023-06-15");
        assert_eq!(val["expiryDate"], "2026-06-15");
    }

    #[test]
    fn blockchain_timestamp_matches_original_shape() {
        let block = BlockchainData {
            index: 1,
            timestamp: NaiveDate::from_ymd_opt(2023, 6, 15)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap(),
            previous_hash: "0".repeat(64),
            hash: "000abc123def456789...".to_string(),
            nonce: 3542,
        };
        let val = serde_json::to_value(block).unwrap();
        assert_eq!(val["timestamp"], "2023-06-15T10:30:00");
        assert!(val.get("previousHash").is_some());
    }

    #[test]
    fn apply_merges_only_supplied_fields() {
        let mut cert = sample();
        let before = cert.clone();

        cert.apply(CertificateUpdate {
            status: Some(CertificateStatus::Revoked),
            description: Some("Revoked for cause.".to_string()),
            ..Default::default()
        });

        assert_eq!(cert.status, CertificateStatus::Revoked);
        assert_eq!(cert.description.as_deref(), Some("Revoked for cause."));
        // Everything else untouched.
        assert_eq!(cert.id, before.id);
        assert_eq!(cert.recipient_name, before.recipient_name);
        assert_eq!(cert.issuer_name, before.issuer_name);
        assert_eq!(cert.course_name, before.course_name);
        assert_eq!(cert.issue_date, before.issue_date);
        assert_eq!(cert.expiry_date, before.expiry_date);
        assert_eq!(cert.certificate_number, before.certificate_number);
        assert_eq!(cert.achievements, before.achievements);
        assert_eq!(cert.blockchain_data, before.blockchain_data);
    }

    #[test]
    fn apply_with_empty_patch_is_identity() {
        let mut cert = sample();
        let before = cert.clone();
        cert.apply(CertificateUpdate::default());
        assert_eq!(cert, before);
    }

    #[test]
    fn apply_cannot_clear_optionals() {
        let mut cert = sample();
        cert.apply(CertificateUpdate {
            recipient_name: Some("Janet Doe".to_string()),
            ..Default::default()
        });
        // expiry_date and description survive an unrelated patch.
        assert!(cert.expiry_date.is_some());
        assert!(cert.description.is_some());
    }

    #[test]
    fn update_deserializes_from_partial_json() {
        let patch: CertificateUpdate =
            serde_json::from_str(r#"{"status":"expired","courseName":"Intro"}"#).unwrap();
        assert_eq!(patch.status, Some(CertificateStatus::Expired));
        assert_eq!(patch.course_name.as_deref(), Some("Intro"));
        assert!(patch.recipient_name.is_none());
    }
}
