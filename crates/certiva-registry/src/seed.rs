//! # Demo Seed Records
//!
//! The three certificates the demo deployment ships with, including
//! their decorative blockchain records. [`CertificateRegistry::with_seed()`](crate::CertificateRegistry::with_seed)
//! builds on these; tests and the CLI use them as a known-good fixture.

use chrono::{NaiveDate, NaiveDateTime};

use certiva_core::{CertificateId, CertificateNumber, CertificateStatus};

use crate::certificate::{BlockchainData, Certificate};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("seed date literal")
}

fn datetime(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).expect("seed time literal")
}

fn id(raw: &str) -> CertificateId {
    CertificateId::new(raw).expect("seed id literal")
}

fn number(raw: &str) -> CertificateNumber {
    CertificateNumber::new(raw).expect("seed number literal")
}

/// The bundled demo certificates, in insertion order.
pub fn demo_certificates() -> Vec<Certificate> {
    vec![
        Certificate {
            id: id("cert-1234-abcd-5678"),
            recipient_name: "Jane Doe".to_string(),
            issuer_name: "Tech Academy".to_string(),
            course_name: "Full Stack Web Development".to_string(),
            issue_date: date(2023, 6, 15),
            expiry_date: Some(date(2026, 6, 15)),
            certificate_number: number("TA-FS-2023-001"),
            status: CertificateStatus::Active,
            description: Some(
                "Completed 600 hours of intensive training in modern web development technologies."
                    .to_string(),
            ),
            achievements: Some(vec![
                "React".to_string(),
                "Node.js".to_string(),
                "MongoDB".to_string(),
                "Express".to_string(),
                "TypeScript".to_string(),
            ]),
            blockchain_data: Some(BlockchainData {
                index: 1,
                timestamp: datetime(2023, 6, 15, 10, 30),
                previous_hash:
                    "0000000000000000000000000000000000000000000000000000000000000000".to_string(),
                hash: "000abc123def456789...".to_string(),
                nonce: 3542,
            }),
        },
        Certificate {
            id: id("cert-5678-efgh-9012"),
            recipient_name: "John Smith".to_string(),
            issuer_name: "Design Institute".to_string(),
            course_name: "UX/UI Design Fundamentals".to_string(),
            issue_date: date(2023, 4, 10),
            expiry_date: None,
            certificate_number: number("DI-UX-2023-042"),
            status: CertificateStatus::Active,
            description: Some(
                "Mastered user-centered design principles and prototyping techniques.".to_string(),
            ),
            achievements: Some(vec![
                "User Research".to_string(),
                "Wireframing".to_string(),
                "Figma".to_string(),
                "Usability Testing".to_string(),
            ]),
            blockchain_data: Some(BlockchainData {
                index: 2,
                timestamp: datetime(2023, 4, 10, 14, 20),
                previous_hash: "000abc123def456789...".to_string(),
                hash: "000def456789abc123...".to_string(),
                nonce: 2891,
            }),
        },
        Certificate {
            id: id("cert-9012-ijkl-3456"),
            recipient_name: "John Doe".to_string(),
            issuer_name: "Tech Academy".to_string(),
            course_name: "Blockchain Fundamentals".to_string(),
            issue_date: date(2025, 4, 1),
            expiry_date: None,
            certificate_number: number("EDU12345"),
            status: CertificateStatus::Active,
            description: Some(
                "Comprehensive understanding of blockchain technology and its applications."
                    .to_string(),
            ),
            achievements: Some(vec![
                "Blockchain".to_string(),
                "Smart Contracts".to_string(),
                "Cryptography".to_string(),
            ]),
            blockchain_data: Some(BlockchainData {
                index: 2,
                timestamp: datetime(2025, 4, 8, 12, 45),
                previous_hash: "00a1b2c3...".to_string(),
                hash: "004acbd45f...".to_string(),
                nonce: 4871,
            }),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_has_three_records_with_distinct_keys() {
        let certs = demo_certificates();
        assert_eq!(certs.len(), 3);

        let ids: HashSet<_> = certs.iter().map(|c| c.id.clone()).collect();
        assert_eq!(ids.len(), 3);
        let numbers: HashSet<_> = certs.iter().map(|c| c.certificate_number.clone()).collect();
        assert_eq!(numbers.len(), 3);
    }

    #[test]
    fn seed_records_are_all_active() {
        assert!(demo_certificates()
            .iter()
            .all(|c| c.status == CertificateStatus::Active));
    }

    #[test]
    fn only_the_first_seed_record_expires() {
        let certs = demo_certificates();
        assert_eq!(certs[0].expiry_date, Some(date(2026, 6, 15)));
        assert!(certs[1].expiry_date.is_none());
        assert!(certs[2].expiry_date.is_none());
    }
}
