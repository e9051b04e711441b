//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod build;
pub mod check;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::config::defaults;
use crate::core::docker::DockerBuildConfig;
use crate::core::platform::PlatformConfig;

/// Target platform and workspace arguments shared by subcommands
#[derive(Args, Debug, Clone)]
pub struct WorkspaceArgs {
    /// Target CPU architecture (e.g. aarch64, armhf)
    #[arg(long)]
    pub arch: String,

    /// Target OS identifier (e.g. ubuntu, debian)
    #[arg(long)]
    pub os: String,

    /// Target distribution codename (e.g. dashing)
    #[arg(long)]
    pub distro: String,

    /// Middleware implementation (e.g. fastrtps, cyclonedds)
    #[arg(long)]
    pub rmw: String,

    /// Base image the sysroot image builds from
    #[arg(long)]
    pub sysroot_base_image: String,

    /// Docker network mode for the build
    #[arg(long, default_value = defaults::DEFAULT_NETWORK_MODE)]
    pub docker_network_mode: String,

    /// Disable the Docker build cache ("True"/"False")
    #[arg(long, default_value = "False")]
    pub sysroot_nocache: String,

    /// Root directory containing the sysroot tree
    #[arg(long, default_value = ".")]
    pub sysroot_path: PathBuf,

    /// Name of the ROS workspace directory inside the sysroot
    #[arg(long, default_value = defaults::DEFAULT_ROS_WORKSPACE)]
    pub ros_workspace: String,

    /// Custom setup script used in place of the default build-setup script
    #[arg(long)]
    pub custom_setup_script: Option<PathBuf>,
}

impl WorkspaceArgs {
    /// Platform description from the parsed arguments
    pub fn platform(&self) -> PlatformConfig {
        PlatformConfig::new(
            &self.arch,
            &self.os,
            &self.distro,
            &self.rmw,
            &self.sysroot_base_image,
        )
    }

    /// Docker build options from the parsed arguments
    pub fn docker_config(&self) -> DockerBuildConfig {
        DockerBuildConfig::new(
            &self.sysroot_base_image,
            &self.docker_network_mode,
            &self.sysroot_nocache,
        )
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the sysroot image and export the sysroot archive
    Build {
        #[command(flatten)]
        workspace: WorkspaceArgs,

        /// Print collected metrics to the console after the run
        #[arg(long)]
        print_metrics: bool,

        /// Metrics output filename under cc_internals/metrics
        #[arg(long, default_value = defaults::DEFAULT_METRICS_FILENAME)]
        metrics_file: String,
    },

    /// Validate the workspace tree without building
    Check {
        #[command(flatten)]
        workspace: WorkspaceArgs,
    },
}

impl Commands {
    /// Execute the selected command
    pub fn run(self) -> Result<()> {
        match self {
            Self::Build {
                workspace,
                print_metrics,
                metrics_file,
            } => build::execute(&workspace, print_metrics, &metrics_file),
            Self::Check { workspace } => check::execute(&workspace),
        }
    }
}
