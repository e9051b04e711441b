//! Docker build configuration model
//!
//! Options handed to the Docker build backend. The cache flag is kept
//! verbatim as supplied by the caller; interpretation happens only when the
//! backend assembles its command line.

use std::fmt;

/// Immutable description of Docker build-backend options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DockerBuildConfig {
    base_image: String,
    network_mode: String,
    nocache: String,
}

impl DockerBuildConfig {
    pub fn new(base_image: &str, network_mode: &str, nocache: &str) -> Self {
        Self {
            base_image: base_image.to_string(),
            network_mode: network_mode.to_string(),
            nocache: nocache.to_string(),
        }
    }

    /// Base image the workspace image builds from
    pub fn base_image(&self) -> &str {
        &self.base_image
    }

    /// Docker network mode (e.g. `host`)
    pub fn network_mode(&self) -> &str {
        &self.network_mode
    }

    /// Cache-disable flag exactly as supplied
    pub fn nocache(&self) -> &str {
        &self.nocache
    }

    /// Whether the build should bypass the Docker layer cache
    pub fn cache_disabled(&self) -> bool {
        matches!(self.nocache.to_ascii_lowercase().as_str(), "true" | "1")
    }
}

impl fmt::Display for DockerBuildConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Base Image: {}\nNetwork Mode: {}\nCaching: {}",
            self.base_image, self.network_mode, self.nocache
        )
    }
}
