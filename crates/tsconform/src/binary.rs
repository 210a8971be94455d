//! Locating the external checker executables.
//!
//! The checker binaries (`ts-node` for snippet mode, `tsc` for config-file
//! mode) come from the project under test, not from us. Search order:
//! 1. `node_modules/.bin/<name>` walking up from the working directory
//! 2. `<name>` in PATH
//!
//! If neither finds anything the bare name is returned and the spawn itself
//! reports the launch failure.

use std::path::{Path, PathBuf};

/// Default snippet-mode checker executable.
pub const TS_NODE: &str = "ts-node";

/// Default config-file-mode checker executable.
pub const TSC: &str = "tsc";

/// Find a checker executable by name.
pub fn find_checker(name: &str) -> PathBuf {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    if let Some(local) = find_in_node_modules(name, &cwd) {
        tracing::debug!("found {} in node_modules at {:?}", name, local);
        return local;
    }

    if let Ok(path) = which::which(name) {
        tracing::debug!("found {} in PATH at {:?}", name, path);
        return path;
    }

    PathBuf::from(name)
}

/// Walk ancestor directories looking for `node_modules/.bin/<name>`.
fn find_in_node_modules(name: &str, start: &Path) -> Option<PathBuf> {
    let mut current = Some(start);
    while let Some(dir) = current {
        let candidate = dir.join("node_modules/.bin").join(name);
        if candidate.exists() {
            return Some(candidate);
        }
        current = dir.parent();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_name_falls_back_to_bare() {
        let path = find_checker("definitely-not-a-real-checker-binary");
        assert_eq!(path, PathBuf::from("definitely-not-a-real-checker-binary"));
    }

    #[cfg(unix)]
    #[test]
    fn test_finds_binary_in_path() {
        // `sh` exists on every unix PATH
        let path = find_checker("sh");
        assert!(path.is_absolute());
    }

    #[cfg(unix)]
    #[test]
    fn test_finds_local_node_modules_bin() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::TempDir::new().unwrap();
        let bin_dir = dir.path().join("node_modules/.bin");
        std::fs::create_dir_all(&bin_dir).unwrap();
        let stub = bin_dir.join("fake-checker");
        std::fs::write(&stub, "#!/bin/sh\nexit 0\n").unwrap();
        std::fs::set_permissions(&stub, std::fs::Permissions::from_mode(0o755)).unwrap();

        let found = find_in_node_modules("fake-checker", dir.path()).unwrap();
        assert_eq!(found, stub);

        // Also found from a nested working directory
        let nested = dir.path().join("src/deep");
        std::fs::create_dir_all(&nested).unwrap();
        let found = find_in_node_modules("fake-checker", &nested).unwrap();
        assert_eq!(found, stub);
    }
}
