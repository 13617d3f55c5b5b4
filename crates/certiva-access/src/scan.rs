//! # QR Scan Simulator
//!
//! The decoder behind the "scan a certificate's QR code" flow. The trait
//! is the interface a real decoder (e.g. a zxing binding) would
//! implement: image bytes in, embedded identifier out. The bundled
//! [`DigestQrDecoder`] does **no** image or QR processing — it hashes the
//! uploaded bytes with SHA-256 and uses the digest to pick one of the
//! caller-supplied candidate identifiers. The pick is pseudo-random but
//! stable: the same image always resolves to the same identifier.
//!
//! The selected identifier still goes through the registry's `verify`
//! like any hand-typed one; the decoder holds no certificate state.

use sha2::{Digest, Sha256};

/// The interface a QR decoder implements.
///
/// `candidates` is the pool of identifiers the decode may resolve to —
/// for the demo, the ids of the registry's current records. Returns
/// `None` when nothing can be decoded (for the stand-in: an empty pool).
pub trait QrDecoder {
    /// Decode an identifier from uploaded image bytes.
    fn decode(&self, image: &[u8], candidates: &[String]) -> Option<String>;
}

/// Demo stand-in: SHA-256 digest of the image bytes indexes into the
/// candidate list.
#[derive(Debug, Clone, Copy, Default)]
pub struct DigestQrDecoder;

impl QrDecoder for DigestQrDecoder {
    fn decode(&self, image: &[u8], candidates: &[String]) -> Option<String> {
        if candidates.is_empty() {
            return None;
        }

        let digest = Sha256::digest(image);
        let mut prefix = [0u8; 8];
        prefix.copy_from_slice(&digest[..8]);
        let index = (u64::from_be_bytes(prefix) % candidates.len() as u64) as usize;

        tracing::debug!(index, pool = candidates.len(), "simulated QR decode");
        Some(candidates[index].clone())
    }
}
