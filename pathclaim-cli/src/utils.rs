//! Utility functions for CLI operations.
//!
//! This module provides the global options shared across commands and the
//! configuration loading pipeline.

use std::path::PathBuf;

use pathclaim::Config;

use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // verbose/quiet are consumed by the logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Path to a configuration file.
    pub config: Option<PathBuf>,
}

/// Load configuration for a command.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables (highest priority)
/// 2. The configuration file, when one is given
/// 3. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut config = match &global.config {
        Some(path) => Config::load(path).map_err(|e| CliError::Config(e.to_string()))?,
        None => Config::default(),
    };

    config
        .apply_env()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(config)
}
