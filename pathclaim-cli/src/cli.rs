//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CheckCommand, CompletionsCommand, NextCommand, SanitizeCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for reserving unused file paths.
#[derive(Parser)]
#[command(name = "pathclaim")]
#[command(version, about = "Find unused file paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Path to a configuration file
    #[arg(long, value_name = "PATH", global = true, env = "PATHCLAIM_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Find an unused file path for a requested name
    Next(NextCommand),

    /// Check whether a single path is free
    Check(CheckCommand),

    /// Sanitize a file name for common filesystems
    Sanitize(SanitizeCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
