//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crossroot::config::defaults::{
    QEMU_BINARY_NAME, QEMU_DIR_NAME, SYSROOT_DIR_NAME, WORKSPACE_DOCKERFILE_NAME,
};

/// Test workspace context
///
/// Creates a temporary directory for workspace trees and provides
/// utilities for provisioning them piece by piece.
pub struct TestWorkspace {
    /// Temporary directory holding the workspace root
    pub dir: TempDir,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new empty workspace root in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the workspace root
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a directory under the workspace root
    pub fn create_dir(&self, name: impl AsRef<Path>) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::create_dir_all(&path).expect("Failed to create directory");
        path
    }

    /// Create a file under the workspace root
    pub fn create_file(&self, name: impl AsRef<Path>, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Provision the complete workspace tree the orchestrator expects
    pub fn provision_sysroot(&self, ros_workspace_name: &str) {
        let sysroot = self.create_dir(SYSROOT_DIR_NAME);
        std::fs::create_dir_all(sysroot.join(ros_workspace_name))
            .expect("Failed to create ROS workspace");
        let qemu_dir = sysroot.join(QEMU_DIR_NAME);
        std::fs::create_dir_all(&qemu_dir).expect("Failed to create qemu directory");
        std::fs::write(qemu_dir.join(QEMU_BINARY_NAME), "").expect("Failed to create qemu binary");
        std::fs::write(sysroot.join(WORKSPACE_DOCKERFILE_NAME), "FROM scratch\n")
            .expect("Failed to create Dockerfile");
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}
