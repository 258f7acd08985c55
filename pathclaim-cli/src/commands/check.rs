//! Check command implementation.
//!
//! This module implements the `check` command, which reports whether a
//! single path is free through the process exit code.

use std::path::PathBuf;

use clap::Args;
use pathclaim::{FsProbe, PathProbe};

use crate::error::CliError;
use crate::utils::GlobalOptions;

/// Check whether a single path is free.
#[derive(Args)]
pub struct CheckCommand {
    /// Path to check
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Invert the check (fail if the path is free)
    #[arg(long)]
    pub not: bool,
}

impl CheckCommand {
    /// Execute the check command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        let occupied = FsProbe.exists(&self.path)?;

        let success = if self.not { occupied } else { !occupied };

        if success {
            Ok(())
        } else {
            let msg = if self.not {
                format!("Check failed: {} is free", self.path.display())
            } else {
                format!("Check failed: {} is taken", self.path.display())
            };
            Err(CliError::SemanticFailure(msg))
        }
    }
}
