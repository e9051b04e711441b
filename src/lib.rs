//! Crossroot - Cross-architecture sysroot builder
//!
//! This library provides the core functionality for assembling a
//! cross-compilation sysroot for a foreign architecture/OS/distribution
//! combination using a Docker build backend and QEMU user-mode emulation.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Business logic (platform model, workspace orchestration)
//! - [`metrics`] - Time-series build metrics collection and persistence
//! - [`infra`] - Infrastructure layer (Docker invocation, filesystem, identity)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;
pub mod metrics;
