//! Error types for condaswap operations.
//!
//! This module defines [`CondaswapError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! Two kinds of failure are surfaced to callers: an operation that ran but
//! failed ([`CondaswapError::CommandFailed`], [`CondaswapError::EnvCreateFailed`])
//! and a resource that could not be located ([`CondaswapError::ToolNotFound`],
//! [`CondaswapError::ActiveEnvUnset`]). Unexpected errors flow through
//! `anyhow::Error` via `CondaswapError::Other`.

use std::path::Path;
use thiserror::Error;

/// Core error type for condaswap operations.
#[derive(Debug, Error)]
pub enum CondaswapError {
    /// External command exited with a non-zero status or failed to spawn.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Conda environment creation failed.
    #[error("Failed to create environment '{env}': {message}")]
    EnvCreateFailed { env: String, message: String },

    /// An expected executable could not be located.
    #[error("'{tool}' not found: {message}")]
    ToolNotFound { tool: String, message: String },

    /// The active-environment variable is not set.
    #[error(
        "Active conda environment could not be determined (CONDA_DEFAULT_ENV is not set). \
         Activate the desired environment and retry."
    )]
    ActiveEnvUnset,

    /// Privileged operations are required but escalation is unavailable.
    #[error("Cannot escalate privileges: {message}")]
    PrivilegeUnavailable { message: String },

    /// The conda base directory could not be resolved.
    #[error("Unable to determine conda base directory: {message}")]
    BaseDirUnavailable { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CondaswapError {
    /// Build a `ToolNotFound` for an executable missing from the search path.
    pub fn not_on_path(tool: &str) -> Self {
        Self::ToolNotFound {
            tool: tool.to_string(),
            message: "not found on PATH".to_string(),
        }
    }

    /// Build a `ToolNotFound` for an executable missing from an environment's
    /// bin directory.
    pub fn not_in_env(tool: &str, env: &str, bin_dir: &Path) -> Self {
        Self::ToolNotFound {
            tool: tool.to_string(),
            message: format!(
                "not found in environment '{}' at {}",
                env,
                bin_dir.display()
            ),
        }
    }
}

/// Result type alias for condaswap operations.
pub type Result<T> = std::result::Result<T, CondaswapError>;
