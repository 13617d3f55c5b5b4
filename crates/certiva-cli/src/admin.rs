//! # Admin CRUD Subcommands
//!
//! The admin-panel operations: list, get, create, update, delete. Input
//! validation (required fields non-empty, date formats) happens here at
//! the calling layer — the registry itself performs no business-rule
//! validation. "Not found" prints as a plain informational notice, never
//! a process failure.

use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::Args;

use certiva_core::{parse_date, CertificateNumber, CertificateStatus};
use certiva_registry::{CertificateDraft, CertificateRegistry, CertificateUpdate};

use crate::print_certificate;

/// Parse a `--status` value into a [`CertificateStatus`].
fn parse_status(s: &str) -> Result<CertificateStatus, String> {
    s.parse().map_err(|e| format!("{e}"))
}

/// Parse a `YYYY-MM-DD` CLI date.
fn parse_cli_date(s: &str) -> Result<NaiveDate, String> {
    parse_date(s).map_err(|e| format!("{e}"))
}

/// Arguments for `certiva get`.
#[derive(Args, Debug)]
pub struct GetArgs {
    /// Certificate id or certificate number.
    pub identifier: String,
}

/// Arguments for `certiva create`.
#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Recipient name.
    #[arg(long)]
    pub recipient: String,

    /// Issuing organization.
    #[arg(long)]
    pub issuer: String,

    /// Course or program name.
    #[arg(long)]
    pub course: String,

    /// Issue date (YYYY-MM-DD).
    #[arg(long, value_parser = parse_cli_date)]
    pub issue_date: NaiveDate,

    /// Expiry date (YYYY-MM-DD).
    #[arg(long, value_parser = parse_cli_date)]
    pub expiry_date: Option<NaiveDate>,

    /// Human-facing certificate number.
    #[arg(long)]
    pub number: String,

    /// Status flag: active, expired, or revoked.
    #[arg(long, default_value = "active", value_parser = parse_status)]
    pub status: CertificateStatus,

    /// Free-text description.
    #[arg(long)]
    pub description: Option<String>,

    /// Achievement label. Repeat for multiple.
    #[arg(long = "achievement")]
    pub achievements: Vec<String>,
}

/// Arguments for `certiva update`.
#[derive(Args, Debug)]
pub struct UpdateArgs {
    /// Certificate id (updates do not address by number).
    pub id: String,

    /// New recipient name.
    #[arg(long)]
    pub recipient: Option<String>,

    /// New issuing organization.
    #[arg(long)]
    pub issuer: Option<String>,

    /// New course or program name.
    #[arg(long)]
    pub course: Option<String>,

    /// New issue date (YYYY-MM-DD).
    #[arg(long, value_parser = parse_cli_date)]
    pub issue_date: Option<NaiveDate>,

    /// New expiry date (YYYY-MM-DD).
    #[arg(long, value_parser = parse_cli_date)]
    pub expiry_date: Option<NaiveDate>,

    /// New certificate number.
    #[arg(long)]
    pub number: Option<String>,

    /// New status flag: active, expired, or revoked.
    #[arg(long, value_parser = parse_status)]
    pub status: Option<CertificateStatus>,

    /// New free-text description.
    #[arg(long)]
    pub description: Option<String>,

    /// Replacement achievement label. Repeat for multiple; replaces the
    /// whole list.
    #[arg(long = "achievement")]
    pub achievements: Vec<String>,
}

/// Arguments for `certiva delete`.
#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Certificate id (deletes do not address by number).
    pub id: String,
}

/// Execute `certiva list`.
pub fn run_list(registry: &CertificateRegistry) -> Result<u8> {
    let certs = registry.list();
    println!(
        "{:<22} {:<16} {:<20} {:<32} {}",
        "ID", "NUMBER", "RECIPIENT", "COURSE", "STATUS"
    );
    for cert in &certs {
        println!(
            "{:<22} {:<16} {:<20} {:<32} {}",
            cert.id, cert.certificate_number, cert.recipient_name, cert.course_name, cert.status
        );
    }
    println!("{} certificate(s)", certs.len());
    Ok(0)
}

/// Execute `certiva get`.
pub fn run_get(args: &GetArgs, registry: &CertificateRegistry) -> Result<u8> {
    match registry.get(&args.identifier) {
        Some(cert) => {
            print_certificate(&cert)?;
            Ok(0)
        }
        None => {
            println!("No certificate matches {:?}.", args.identifier);
            Ok(0)
        }
    }
}

/// Execute `certiva create`.
pub fn run_create(args: CreateArgs, registry: &mut CertificateRegistry) -> Result<u8> {
    for (field, value) in [
        ("--recipient", &args.recipient),
        ("--issuer", &args.issuer),
        ("--course", &args.course),
    ] {
        if value.trim().is_empty() {
            bail!("{field} must not be empty");
        }
    }

    let draft = CertificateDraft {
        recipient_name: args.recipient,
        issuer_name: args.issuer,
        course_name: args.course,
        issue_date: args.issue_date,
        expiry_date: args.expiry_date,
        certificate_number: CertificateNumber::new(args.number)?,
        status: args.status,
        description: args.description,
        achievements: if args.achievements.is_empty() {
            None
        } else {
            Some(args.achievements)
        },
        blockchain_data: None,
    };

    let cert = registry.create(draft);
    print_certificate(&cert)?;
    Ok(0)
}

/// Execute `certiva update`.
pub fn run_update(args: UpdateArgs, registry: &mut CertificateRegistry) -> Result<u8> {
    let certificate_number = match args.number {
        Some(raw) => Some(CertificateNumber::new(raw)?),
        None => None,
    };

    let patch = CertificateUpdate {
        recipient_name: args.recipient,
        issuer_name: args.issuer,
        course_name: args.course,
        issue_date: args.issue_date,
        expiry_date: args.expiry_date,
        certificate_number,
        status: args.status,
        description: args.description,
        achievements: if args.achievements.is_empty() {
            None
        } else {
            Some(args.achievements)
        },
        blockchain_data: None,
    };

    match registry.update(&args.id, patch) {
        Some(cert) => {
            print_certificate(&cert)?;
            Ok(0)
        }
        None => {
            println!("No certificate with id {:?}.", args.id);
            Ok(0)
        }
    }
}

/// Execute `certiva delete`.
pub fn run_delete(args: &DeleteArgs, registry: &mut CertificateRegistry) -> Result<u8> {
    match registry.delete(&args.id) {
        Some(cert) => {
            println!("Deleted {} ({}).", cert.id, cert.certificate_number);
            Ok(0)
        }
        None => {
            println!("No certificate with id {:?}.", args.id);
            Ok(0)
        }
    }
}
