//! Sanitize command implementation.
//!
//! This module implements the `sanitize` command, which prints the
//! filesystem-safe form of a file name.

use clap::Args;

use crate::error::CliError;
use crate::utils::GlobalOptions;

/// Sanitize a file name for common filesystems.
#[derive(Args)]
pub struct SanitizeCommand {
    /// File name to sanitize
    #[arg(value_name = "NAME")]
    pub name: String,
}

impl SanitizeCommand {
    /// Execute the sanitize command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        println!("{}", pathclaim::sanitize(&self.name));
        Ok(())
    }
}
