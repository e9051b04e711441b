//! Docker backend invocation
//!
//! The orchestrator talks to Docker through the [`DockerBackend`] trait so
//! tests can substitute a recording fake. The production implementation
//! shells out to the `docker` CLI and interprets nothing beyond
//! success/failure and the reported image size.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::core::docker::DockerBuildConfig;
use crate::error::DockerError;

/// External container build backend
pub trait DockerBackend {
    /// Build the workspace image from the given descriptor and context
    fn build_image(
        &self,
        tag: &str,
        dockerfile: &Path,
        context: &Path,
        config: &DockerBuildConfig,
    ) -> Result<(), DockerError>;

    /// Size in bytes of a built image
    fn image_size(&self, tag: &str) -> Result<u64, DockerError>;

    /// Export a built image to a tar archive at `dest`
    fn export_image(&self, tag: &str, dest: &Path) -> Result<(), DockerError>;
}

/// Docker CLI backend
pub struct DockerCli {
    binary: PathBuf,
}

impl DockerCli {
    /// Locate the docker binary on PATH
    pub fn new() -> Result<Self, DockerError> {
        let binary = which::which("docker").map_err(|_| DockerError::BinaryNotFound)?;
        tracing::debug!("Using docker binary at {}", binary.display());
        Ok(Self { binary })
    }

    /// Run a docker subcommand, failing on a non-zero exit status
    fn run(&self, phase: &str, args: &[OsString]) -> Result<std::process::Output, DockerError> {
        tracing::debug!("docker {phase}: {args:?}");
        let output = Command::new(&self.binary)
            .args(args)
            .output()
            .map_err(|e| DockerError::Spawn {
                subcommand: phase.to_string(),
                error: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(DockerError::PhaseFailed {
                phase: phase.to_string(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(output)
    }
}

impl DockerBackend for DockerCli {
    fn build_image(
        &self,
        tag: &str,
        dockerfile: &Path,
        context: &Path,
        config: &DockerBuildConfig,
    ) -> Result<(), DockerError> {
        let mut args: Vec<OsString> = vec![
            "build".into(),
            "--tag".into(),
            tag.into(),
            "--file".into(),
            dockerfile.into(),
            "--network".into(),
            config.network_mode().into(),
            "--build-arg".into(),
            format!("BASE_IMAGE={}", config.base_image()).into(),
        ];
        if config.cache_disabled() {
            args.push("--no-cache".into());
        }
        args.push(context.into());

        self.run("build", &args)?;
        Ok(())
    }

    fn image_size(&self, tag: &str) -> Result<u64, DockerError> {
        let args: Vec<OsString> = vec![
            "image".into(),
            "inspect".into(),
            tag.into(),
            "--format".into(),
            "{{.Size}}".into(),
        ];
        let output = self.run("image inspect", &args)?;
        let stdout = String::from_utf8_lossy(&output.stdout);
        stdout
            .trim()
            .parse::<u64>()
            .map_err(|_| DockerError::UnexpectedOutput {
                subcommand: "image inspect".to_string(),
                output: stdout.trim().to_string(),
            })
    }

    fn export_image(&self, tag: &str, dest: &Path) -> Result<(), DockerError> {
        let args: Vec<OsString> = vec![
            "save".into(),
            "--output".into(),
            dest.into(),
            tag.into(),
        ];
        self.run("save", &args)?;
        Ok(())
    }
}
