//! Target platform model
//!
//! Describes the architecture/OS/distribution/middleware combination a
//! sysroot is built for, and derives the identity string used to tag the
//! produced workspace image.

use std::fmt;

use crate::infra::user;

/// Immutable description of the target platform
///
/// The identity string (the `Display` rendering) combines all five fields in
/// a fixed, stable order, so equal field tuples always yield an equal image
/// tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformConfig {
    arch: String,
    os: String,
    distro: String,
    rmw: String,
    base_image: String,
}

impl PlatformConfig {
    pub fn new(arch: &str, os: &str, distro: &str, rmw: &str, base_image: &str) -> Self {
        Self {
            arch: arch.to_string(),
            os: os.to_string(),
            distro: distro.to_string(),
            rmw: rmw.to_string(),
            base_image: base_image.to_string(),
        }
    }

    /// Target CPU architecture (e.g. `aarch64`)
    pub fn arch(&self) -> &str {
        &self.arch
    }

    /// Target OS identifier (e.g. `ubuntu`)
    pub fn os(&self) -> &str {
        &self.os
    }

    /// Target distribution codename (e.g. `dashing`)
    pub fn distro(&self) -> &str {
        &self.distro
    }

    /// Middleware implementation identifier (e.g. `fastrtps`)
    pub fn rmw(&self) -> &str {
        &self.rmw
    }

    /// Base image the workspace image builds from
    pub fn base_image(&self) -> &str {
        &self.base_image
    }

    /// Tag of the produced workspace image for the current process owner
    pub fn workspace_image_tag(&self) -> String {
        self.image_tag_for_user(&user::current_username())
    }

    /// Tag of the produced workspace image for an explicit username
    ///
    /// Pure in the five platform fields and the given name; the
    /// environment-dependent lookup stays in [`workspace_image_tag`].
    ///
    /// [`workspace_image_tag`]: Self::workspace_image_tag
    pub fn image_tag_for_user(&self, username: &str) -> String {
        format!("{username}/{self}:latest")
    }
}

impl fmt::Display for PlatformConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-{}-{}",
            self.arch, self.os, self.distro, self.rmw, self.base_image
        )
    }
}
