//! Error types for crossroot
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Workspace validation errors
#[derive(Error, Debug)]
pub enum WorkspaceError {
    /// A required workspace component is absent
    #[error("Missing workspace component '{component}': expected at '{path}'")]
    MissingComponent { component: String, path: PathBuf },

    /// The supplied custom setup script does not exist
    #[error("Custom setup script not found: {path}")]
    InvalidCustomScript { path: PathBuf },
}

impl WorkspaceError {
    /// Which workspace component the validation stopped on, if any
    pub fn component(&self) -> Option<&str> {
        match self {
            Self::MissingComponent { component, .. } => Some(component),
            Self::InvalidCustomScript { .. } => None,
        }
    }
}

/// Docker backend errors
#[derive(Error, Debug)]
pub enum DockerError {
    /// The docker binary is not installed or not on PATH
    #[error("Docker binary not found on PATH. Install Docker to build sysroot images.")]
    BinaryNotFound,

    /// Failed to launch the docker process
    #[error("Failed to launch docker {subcommand}: {error}")]
    Spawn { subcommand: String, error: String },

    /// Docker reported failure during a build phase
    #[error("Docker {phase} failed ({status}): {stderr}")]
    PhaseFailed {
        phase: String,
        status: String,
        stderr: String,
    },

    /// Docker produced output the client could not interpret
    #[error("Unexpected docker output for '{subcommand}': {output}")]
    UnexpectedOutput { subcommand: String, output: String },
}

/// Metrics collection and persistence errors
#[derive(Error, Debug)]
pub enum MetricsError {
    /// Failed to create the metrics output directory
    #[error("Failed to create metrics directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to write the metrics file
    #[error("Failed to write metrics file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },

    /// Failed to serialize collected data
    #[error("Failed to serialize metrics: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Top-level crossroot error type
#[derive(Error, Debug)]
pub enum CrossrootError {
    /// Workspace error
    #[error("Workspace error: {0}")]
    Workspace(#[from] WorkspaceError),

    /// Docker error
    #[error("Docker error: {0}")]
    Docker(#[from] DockerError),

    /// Metrics error
    #[error("Metrics error: {0}")]
    Metrics(#[from] MetricsError),
}
