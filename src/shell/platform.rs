//! Platform and privilege detection.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{CondaswapError, Result};

/// Check if running in a CI environment.
///
/// Used to auto-detect CI and force non-interactive mode in `main()`.
/// Checks common CI environment variables: `CI`, `GITHUB_ACTIONS`,
/// `GITLAB_CI`, `CIRCLECI`, `TRAVIS`, `JENKINS_URL`.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}

/// Check if running as root/admin.
pub fn is_elevated() -> bool {
    #[cfg(unix)]
    {
        // SAFETY: geteuid() is a simple syscall that returns the effective user ID
        unsafe { libc::geteuid() == 0 }
    }

    #[cfg(windows)]
    {
        std::env::var("ADMIN").is_ok()
    }

    #[cfg(not(any(unix, windows)))]
    {
        false
    }
}

/// Check whether sudo can run without prompting for a password.
pub fn sudo_noninteractive() -> bool {
    Command::new("sudo")
        .args(["-n", "true"])
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

/// How to run privileged filesystem operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrivilegeMode {
    /// Already elevated; run operations directly.
    Direct,
    /// Escalate each operation through `sudo`.
    Sudo,
}

impl PrivilegeMode {
    /// Determine how privileged operations can run, failing up front if
    /// escalation would block on an interactive password prompt.
    ///
    /// Hosted notebook platforms run as root or with passwordless sudo, so
    /// this only fails on ordinary workstations.
    pub fn detect() -> Result<Self> {
        if is_elevated() {
            return Ok(Self::Direct);
        }
        if sudo_noninteractive() {
            return Ok(Self::Sudo);
        }
        Err(CondaswapError::PrivilegeUnavailable {
            message: "not running as root and `sudo -n` requires a password; \
                      re-run in an elevated shell"
                .to_string(),
        })
    }

    /// Wrap an argv list according to the privilege mode.
    pub fn wrap(self, program: &Path, args: &[String]) -> (PathBuf, Vec<String>) {
        match self {
            Self::Direct => (program.to_path_buf(), args.to_vec()),
            Self::Sudo => {
                let mut wrapped = vec![program.display().to_string()];
                wrapped.extend(args.iter().cloned());
                (PathBuf::from("sudo"), wrapped)
            }
        }
    }
}
