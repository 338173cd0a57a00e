#![cfg(test)]

//! Stub external tools for pipeline tests.
//!
//! The real pipeline shells out to `mac`, `shntool`, and `cuetag`. Tests
//! substitute small executable shell scripts so the pipeline's control flow
//! can be exercised without any of the real tools installed.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Tools;

/// Write an executable shell script into `dir` and return its path.
#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("Failed to write script");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
        .expect("Failed to make script executable");
    path
}

/// Tools pointing at binaries that do not exist, for spawn-failure paths.
pub fn missing_tools() -> Tools {
    Tools {
        mac: PathBuf::from("/nonexistent/mac"),
        shntool: PathBuf::from("/nonexistent/shntool"),
        cuetag: PathBuf::from("/nonexistent/cuetag"),
    }
}
