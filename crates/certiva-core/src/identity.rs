//! # Identity Newtypes
//!
//! Domain-primitive newtypes for the two ways a certificate is addressed.
//! Each identifier is a distinct type — you cannot pass a
//! [`CertificateNumber`] where a [`CertificateId`] is expected.
//!
//! ## Validation
//!
//! Both newtypes validate at construction time: the wrapped string must be
//! non-empty after trimming. Deserialization routes through the same
//! constructors, so invalid values are rejected at the serde boundary
//! rather than silently accepted.
//!
//! ## Id format
//!
//! Registry-assigned ids look like `cert-ab12-xy34-9f0a`: the literal
//! `cert-` prefix followed by three 4-character lowercase base-36 segments.
//! The format is recognizable, not load-bearing — uniqueness is enforced
//! by the registry, which tracks every id it has ever issued.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Helper macro to implement `Deserialize` for string newtypes that must
/// validate their contents. Deserializes as a plain `String`, then routes
/// through the type's `new()` constructor so that invalid values are
/// rejected at deserialization time — not silently accepted.
macro_rules! impl_validating_deserialize {
    ($ty:ident) => {
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                Self::new(raw).map_err(serde::de::Error::custom)
            }
        }
    };
}

/// Alphabet for generated id segments: lowercase base-36.
const ID_SEGMENT_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Length of each generated id segment.
const ID_SEGMENT_LEN: usize = 4;

/// The registry-assigned primary key of a certificate.
///
/// Assigned once at creation time and immutable thereafter. Unique across
/// the entire history of a registry, including after deletion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CertificateId(String);

impl CertificateId {
    /// Wrap an existing identifier string.
    ///
    /// # Errors
    ///
    /// Rejects empty or whitespace-only input.
    pub fn new(raw: impl Into<String>) -> Result<Self, CoreError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(CoreError::Empty {
                field: "certificate id",
            });
        }
        Ok(Self(raw))
    }

    /// Generate a fresh random identifier using the thread-local RNG.
    ///
    /// Collision resistance comes from 12 random base-36 characters
    /// (roughly 62 bits); the registry still checks the result against
    /// its issued-id history before accepting it.
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::thread_rng())
    }

    /// Generate a fresh identifier from the supplied RNG.
    ///
    /// Tests use this with a seeded RNG for reproducible ids.
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut id = String::with_capacity(4 + 3 * (ID_SEGMENT_LEN + 1));
        id.push_str("cert");
        for _ in 0..3 {
            id.push('-');
            for _ in 0..ID_SEGMENT_LEN {
                let idx = rng.gen_range(0..ID_SEGMENT_CHARS.len());
                id.push(ID_SEGMENT_CHARS[idx] as char);
            }
        }
        Self(id)
    }

    /// Access the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl_validating_deserialize!(CertificateId);

impl std::fmt::Display for CertificateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for CertificateId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for CertificateId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// The human-facing alphanumeric label printed on a certificate
/// (e.g. `TA-FS-2023-001`).
///
/// Serves as an alternate lookup key. Uniqueness is **not** enforced at
/// write time; lookups return the first match in insertion order. That
/// first-match behavior is permanent policy, documented on the registry's
/// `get` and `verify` operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CertificateNumber(String);

impl CertificateNumber {
    /// Wrap a certificate number string.
    ///
    /// # Errors
    ///
    /// Rejects empty or whitespace-only input.
    pub fn new(raw: impl Into<String>) -> Result<Self, CoreError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(CoreError::Empty {
                field: "certificate number",
            });
        }
        Ok(Self(raw))
    }

    /// Access the number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl_validating_deserialize!(CertificateNumber);

impl std::fmt::Display for CertificateNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for CertificateNumber {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for CertificateNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
