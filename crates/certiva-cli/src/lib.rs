//! # certiva-cli — CLI front end for the Certiva registry
//!
//! Provides the `certiva` command-line interface over a registry seeded
//! with the bundled demo records.
//!
//! ## Subcommands
//!
//! - `certiva list` / `get` / `create` / `update` / `delete` — admin CRUD.
//! - `certiva verify` — run the verification decision procedure.
//! - `certiva scan` — simulated QR decode of an image file, then verify.
//! - `certiva login` — exercise the mock admin login gate.
//!
//! ## State model
//!
//! The registry lives for the invocation only — there is no persistence
//! in this system, so each run starts from the demo seed. Mutating
//! commands print the resulting record so the effect is visible.

pub mod admin;
pub mod login;
pub mod verify;

use certiva_registry::{Certificate, CertificateRegistry};

/// Build the demo-seeded registry every subcommand operates on.
pub fn seeded_registry() -> CertificateRegistry {
    CertificateRegistry::with_seed()
}

/// Print a record as pretty JSON on stdout.
pub(crate) fn print_certificate(cert: &Certificate) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(cert)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_registry_holds_demo_records() {
        let registry = seeded_registry();
        assert_eq!(registry.len(), 3);
        assert!(registry.get("TA-FS-2023-001").is_some());
    }
}
