//! # Login Subcommand
//!
//! Exercises the mock admin login gate. The gate accepts any non-empty
//! username/password pair — there is no real authentication in this
//! system, and this command exists to demonstrate the seam a real
//! backend would plug into.

use anyhow::Result;
use clap::Args;

use certiva_access::{CredentialCheck, MockCredentialCheck};

/// Arguments for `certiva login`.
#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Admin username.
    pub username: String,

    /// Admin password.
    pub password: String,
}

/// Execute `certiva login`.
pub fn run_login(args: &LoginArgs) -> Result<u8> {
    match MockCredentialCheck.authenticate(&args.username, &args.password) {
        Ok(session) => {
            println!("Login successful. Welcome, {}.", session.username);
            Ok(0)
        }
        Err(e) => {
            println!("Login failed: {e}");
            Ok(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_credentials_succeed() {
        let args = LoginArgs {
            username: "admin".to_string(),
            password: "hunter2".to_string(),
        };
        assert_eq!(run_login(&args).unwrap(), 0);
    }

    #[test]
    fn blank_credentials_fail_with_nonzero_code() {
        let args = LoginArgs {
            username: "".to_string(),
            password: "hunter2".to_string(),
        };
        assert_eq!(run_login(&args).unwrap(), 1);
    }
}
