//! Configuration and constants
//!
//! Fixed names of the workspace tree and default values used across the crate.

pub mod defaults;
