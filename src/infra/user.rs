//! Process-owner identity
//!
//! The username embedded in the workspace image tag is environment-dependent
//! state. Environment variables can override the lookup:
//! - `CROSSROOT_USER` - explicit override
//!
//! Falls back to the platform's conventional variables, then `"unknown"`.

use std::env;

/// Environment variable name for the username override
pub const ENV_USER_OVERRIDE: &str = "CROSSROOT_USER";

/// Username of the current process owner
pub fn current_username() -> String {
    env::var(ENV_USER_OVERRIDE)
        .or_else(|_| env::var("USER"))
        .or_else(|_| env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string())
}
