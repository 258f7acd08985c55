//! Next command implementation.
//!
//! This module implements the `next` command, which finds an unused file
//! path for a requested name and prints it.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, ValueEnum};
use pathclaim::PathFinder;

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};

/// Output format for the `next` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Print the reserved path, one line.
    Text,
    /// Print a JSON object with path, folder, and file name.
    Json,
}

/// Find an unused file path for a requested name.
#[derive(Args)]
pub struct NextCommand {
    /// Desired file name, including extension
    #[arg(value_name = "FILE_NAME")]
    pub file_name: String,

    /// Folder to search in (default: current directory)
    #[arg(long, value_name = "PATH", env = "PATHCLAIM_DIR")]
    pub dir: Option<PathBuf>,

    /// Maximum number of attempts before giving up
    #[arg(long, value_name = "N")]
    pub max_attempts: Option<u32>,

    /// Only count attempts that reach the filesystem
    #[arg(long)]
    pub fs_attempts_only: bool,

    /// Create the file at the found path before printing
    #[arg(long)]
    pub touch: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: OutputFormat,
}

impl NextCommand {
    /// Execute the next command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;

        let mut options = config.find_options(&self.file_name);
        if let Some(dir) = &self.dir {
            options = options.with_folder_path(dir);
        }
        if let Some(max_attempts) = self.max_attempts {
            options = options.with_max_attempts(max_attempts);
        }
        if self.fs_attempts_only {
            options = options.with_count_filesystem_attempts_only(true);
        }

        let finder = PathFinder::new().with_incrementer(Arc::new(config.incrementer()));
        let claim = finder.find(&options)?;

        if self.touch {
            // The reservation only outlives this process if the file does.
            std::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(claim.file_path())?;
        }

        match self.format {
            OutputFormat::Text => println!("{}", claim.file_path().display()),
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "file_path": claim.file_path(),
                    "folder_path": claim.folder_path(),
                    "file_name": claim.file_name(),
                });
                println!("{value:#}");
            }
        }

        Ok(())
    }
}
