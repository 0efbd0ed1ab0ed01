//! Search-path parsing and executable resolution.
//!
//! Resolution iterates PATH entries directly instead of shelling out to
//! `which`, whose behavior varies across systems and is sometimes a shell
//! builtin with inconsistent error handling.

use std::path::{Path, PathBuf};

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Resolve the first of several candidate names found on the given entries.
///
/// The runtime is looked up as `python` then `python3` for compatibility
/// across images that only ship one of the two names.
pub fn resolve_first(names: &[&str], path_entries: &[PathBuf]) -> Option<PathBuf> {
    names
        .iter()
        .find_map(|name| resolve_tool_path(name, path_entries))
}

/// Resolve a tool on the real system PATH.
pub fn resolve_on_system_path(tool: &str) -> Option<PathBuf> {
    resolve_tool_path(tool, &parse_system_path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Create a fake binary at a path (creates parent dirs as needed).
    fn create_fake_binary(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    /// Create a non-executable file at a path.
    #[cfg(unix)]
    fn create_non_executable_file(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "not executable").unwrap();
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o644)).unwrap();
    }

    #[test]
    fn resolve_tool_path_finds_first_match() {
        let temp = TempDir::new().unwrap();
        let dir_a = temp.path().join("a");
        let dir_b = temp.path().join("b");
        fs::create_dir_all(&dir_a).unwrap();
        fs::create_dir_all(&dir_b).unwrap();

        create_fake_binary(&dir_a.join("conda"));
        create_fake_binary(&dir_b.join("conda"));

        let result = resolve_tool_path("conda", &[dir_a.clone(), dir_b.clone()]);
        assert_eq!(result, Some(dir_a.join("conda")));
    }

    #[test]
    fn resolve_tool_path_returns_none_when_not_found() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("empty");
        fs::create_dir_all(&dir).unwrap();

        let result = resolve_tool_path("conda", &[dir]);
        assert!(result.is_none());
    }

    #[test]
    fn resolve_tool_path_on_empty_entries() {
        assert!(resolve_tool_path("conda", &[]).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn resolve_tool_path_skips_non_executable() {
        let temp = TempDir::new().unwrap();
        let dir_a = temp.path().join("a");
        let dir_b = temp.path().join("b");

        create_non_executable_file(&dir_a.join("python"));
        create_fake_binary(&dir_b.join("python"));

        let result = resolve_tool_path("python", &[dir_a.clone(), dir_b.clone()]);
        assert_eq!(result, Some(dir_b.join("python")));
    }

    #[test]
    fn resolve_first_falls_back_to_later_names() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("bin");
        create_fake_binary(&dir.join("python3"));

        let result = resolve_first(&["python", "python3"], std::slice::from_ref(&dir));
        assert_eq!(result, Some(dir.join("python3")));
    }

    #[test]
    fn resolve_first_prefers_earlier_names() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("bin");
        create_fake_binary(&dir.join("python"));
        create_fake_binary(&dir.join("python3"));

        let result = resolve_first(&["python", "python3"], std::slice::from_ref(&dir));
        assert_eq!(result, Some(dir.join("python")));
    }

    #[cfg(unix)]
    #[test]
    fn is_executable_returns_true_for_executable_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test_bin");
        create_fake_binary(&path);
        assert!(is_executable(&path));
    }

    #[cfg(unix)]
    #[test]
    fn is_executable_returns_false_for_non_executable_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("test_file");
        create_non_executable_file(&path);
        assert!(!is_executable(&path));
    }

    #[test]
    fn is_executable_returns_false_for_nonexistent_file() {
        assert!(!is_executable(Path::new("/nonexistent/path/to/file")));
    }
}
