//! # Certificate Registry
//!
//! The explicitly owned, in-process owner of the certificate collection.
//! Constructed once per process or session and passed by reference to all
//! callers — there is no ambient global list, so tests build isolated
//! instances freely.
//!
//! ## Ownership contract
//!
//! The registry is the sole owner of its records. Every read operation
//! returns clones, so no caller can mutate registry state through
//! aliasing; all mutation goes through [`update()`](CertificateRegistry::update)
//! and [`delete()`](CertificateRegistry::delete).
//!
//! ## Lookup keys
//!
//! Records are addressed by their registry-assigned `id` and, for
//! end-user verification, by their human-facing `certificateNumber`.
//! Number uniqueness is not enforced at write time; dual-key lookups
//! return the first match in insertion order (permanent policy).
//!
//! Contents are process-lifetime only — no durability across restarts.

use std::collections::HashSet;

use chrono::NaiveDate;

use certiva_core::{today_utc, CertificateId};

use crate::certificate::{Certificate, CertificateDraft, CertificateUpdate};
use crate::seed;
use crate::verify::{self, VerificationReport};

/// The in-memory certificate collection and its operations.
#[derive(Debug, Default)]
pub struct CertificateRegistry {
    /// Records in insertion order.
    records: Vec<Certificate>,
    /// Every id this registry has ever assigned or ingested, including
    /// ids of since-deleted records. Ids are never reused.
    issued: HashSet<CertificateId>,
}

impl CertificateRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the bundled demo records.
    pub fn with_seed() -> Self {
        Self::from_records(seed::demo_certificates())
    }

    /// Create a registry from existing records, preserving their order
    /// and recording their ids as issued.
    pub fn from_records(records: Vec<Certificate>) -> Self {
        let issued = records.iter().map(|c| c.id.clone()).collect();
        Self { records, issued }
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when the registry holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Snapshot of all certificates in insertion order.
    ///
    /// The returned records are clones; mutating them does not touch
    /// registry state.
    pub fn list(&self) -> Vec<Certificate> {
        self.records.clone()
    }

    /// Look up a certificate by `id` or, failing that, by
    /// `certificateNumber`. First match wins on duplicate numbers.
    ///
    /// End users verify by certificate number; internal code references
    /// by id — both arrive through the same entry point.
    pub fn get(&self, identifier: &str) -> Option<Certificate> {
        self.find(identifier).cloned()
    }

    /// Create a record from a draft, assigning a fresh unique id.
    ///
    /// The id is drawn from the `cert-xxxx-xxxx-xxxx` generator and
    /// re-drawn on the (unlikely) collision with any id ever issued by
    /// this registry, so ids stay unique across the registry's entire
    /// history — deletion does not free an id for reuse.
    pub fn create(&mut self, draft: CertificateDraft) -> Certificate {
        let id = loop {
            let candidate = CertificateId::generate();
            if self.issued.insert(candidate.clone()) {
                break candidate;
            }
        };

        tracing::debug!(id = %id, number = %draft.certificate_number, "certificate created");
        let cert = Certificate::from_draft(id, draft);
        self.records.push(cert.clone());
        cert
    }

    /// Shallow-merge a patch over the record with the given `id`.
    ///
    /// Lookup is by id only — certificate numbers do not address
    /// mutations. Returns the updated record, or `None` (and performs no
    /// mutation) when the id is unknown.
    pub fn update(&mut self, id: &str, patch: CertificateUpdate) -> Option<Certificate> {
        let Some(record) = self.records.iter_mut().find(|c| c.id.as_str() == id) else {
            tracing::debug!(id, "update target not found");
            return None;
        };
        record.apply(patch);
        Some(record.clone())
    }

    /// Remove the record with the given `id`, returning it.
    ///
    /// Lookup is by id only. Returns `None` (and performs no mutation)
    /// when the id is unknown. The removed id remains reserved forever.
    pub fn delete(&mut self, id: &str) -> Option<Certificate> {
        let Some(index) = self.records.iter().position(|c| c.id.as_str() == id) else {
            tracing::debug!(id, "delete target not found");
            return None;
        };
        Some(self.records.remove(index))
    }

    /// Verify a certificate by `id` or `certificateNumber` against
    /// today's UTC date.
    ///
    /// An invalid verdict is a normal business outcome; this method
    /// never fails.
    pub fn verify(&self, identifier: &str) -> VerificationReport {
        self.verify_on(identifier, today_utc())
    }

    /// Verify against an explicit evaluation date.
    ///
    /// This is the deterministic seam the default [`verify()`](Self::verify)
    /// delegates to; tests pin the date here instead of mocking a clock.
    pub fn verify_on(&self, identifier: &str, on: NaiveDate) -> VerificationReport {
        verify::evaluate(self.find(identifier), on)
    }

    /// Dual-key match: first by id, then by certificate number.
    fn find(&self, identifier: &str) -> Option<&Certificate> {
        self.records
            .iter()
            .find(|c| c.id.as_str() == identifier)
            .or_else(|| {
                self.records
                    .iter()
                    .find(|c| c.certificate_number.as_str() == identifier)
            })
    }
}
