//! Typed wrapper over the conda command-line interface.
//!
//! All conda subcommand argv lists are built here so the rest of the crate
//! never assembles conda arguments by hand. The wrapper holds the resolved
//! binary path; callers that need a different binary (tests, bundled
//! installs) construct one with [`CondaCli::at`].

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CondaswapError, Result};
use crate::shell;

/// Environment variable conda's shell integration sets for the active environment.
pub const ACTIVE_ENV_VAR: &str = "CONDA_DEFAULT_ENV";

/// Handle to a conda installation.
#[derive(Debug, Clone)]
pub struct CondaCli {
    program: PathBuf,
}

impl CondaCli {
    /// Use `conda` as found on the search path at invocation time.
    pub fn new() -> Self {
        Self {
            program: PathBuf::from("conda"),
        }
    }

    /// Use a specific conda binary.
    pub fn at(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Path of the wrapped binary.
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Query the installed version string (`conda 23.1.0` style).
    ///
    /// Returns the trimmed stdout on success, or the failing command error
    /// when the binary is present but broken.
    pub fn version(&self) -> Result<String> {
        let args = vec!["--version".to_string()];
        let result = shell::execute_quiet(&self.program, &args)?;
        if result.success {
            Ok(result.stdout.trim().to_string())
        } else {
            Err(CondaswapError::CommandFailed {
                command: shell::display_argv(&self.program, &args),
                code: result.exit_code,
            })
        }
    }

    /// Whether `conda --version` exits successfully.
    pub fn version_ok(&self) -> bool {
        self.version().is_ok()
    }

    /// Resolve the conda base directory via `conda info --base`.
    pub fn base_dir(&self) -> Result<PathBuf> {
        let args = vec!["info".to_string(), "--base".to_string()];
        let result = shell::execute_quiet(&self.program, &args)?;
        if !result.success {
            return Err(CondaswapError::BaseDirUnavailable {
                message: result.stderr.trim().to_string(),
            });
        }

        let base = result.stdout.trim();
        if base.is_empty() {
            return Err(CondaswapError::BaseDirUnavailable {
                message: "conda info --base produced no output".to_string(),
            });
        }
        debug!(base, "resolved conda base directory");
        Ok(PathBuf::from(base))
    }

    /// Argv for creating an environment with a pinned Python and ipython.
    pub fn create_args(env_name: &str, python_version: &str) -> Vec<String> {
        vec![
            "create".to_string(),
            "-n".to_string(),
            env_name.to_string(),
            format!("python={}", python_version),
            "ipython".to_string(),
            "-y".to_string(),
        ]
    }

    /// Create a new environment, failing on a non-zero exit.
    ///
    /// Output is streamed to `callback` line by line so long solver runs
    /// show progress.
    pub fn create_env(
        &self,
        env_name: &str,
        python_version: &str,
        callback: shell::OutputCallback,
    ) -> Result<()> {
        let args = Self::create_args(env_name, python_version);
        debug!(env = env_name, python = python_version, "creating environment");

        let options = shell::CommandOptions::default();
        let result = shell::execute_streaming(&self.program, &args, &options, callback)?;

        if result.success {
            Ok(())
        } else {
            let mut message = result.stderr.trim().to_string();
            if message.is_empty() {
                message = format!("conda create exited with code {:?}", result.exit_code);
            }
            Err(CondaswapError::EnvCreateFailed {
                env: env_name.to_string(),
                message,
            })
        }
    }

    /// Bin directory of a named environment under a base directory.
    pub fn env_bin_dir(base_dir: &Path, env_name: &str) -> PathBuf {
        base_dir.join("envs").join(env_name).join("bin")
    }
}

impl Default for CondaCli {
    fn default() -> Self {
        Self::new()
    }
}

/// Read the active environment name from the process environment.
pub fn active_env_name() -> Option<String> {
    std::env::var(ACTIVE_ENV_VAR).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_args_pin_python_and_include_ipython() {
        let args = CondaCli::create_args("py310", "3.10");
        assert_eq!(
            args,
            vec!["create", "-n", "py310", "python=3.10", "ipython", "-y"]
        );
    }

    #[test]
    fn env_bin_dir_layout() {
        let bin = CondaCli::env_bin_dir(Path::new("/opt/conda"), "py310");
        assert_eq!(bin, PathBuf::from("/opt/conda/envs/py310/bin"));
    }

    #[test]
    fn at_uses_given_program() {
        let cli = CondaCli::at("/tmp/fake-conda");
        assert_eq!(cli.program(), Path::new("/tmp/fake-conda"));
    }

    #[test]
    fn default_program_is_conda() {
        let cli = CondaCli::default();
        assert_eq!(cli.program(), Path::new("conda"));
    }

    #[test]
    fn version_of_missing_binary_is_command_failed() {
        let cli = CondaCli::at("/nonexistent/conda");
        assert!(matches!(
            cli.version(),
            Err(CondaswapError::CommandFailed { .. })
        ));
        assert!(!cli.version_ok());
    }

    #[cfg(unix)]
    #[test]
    fn version_reads_fake_binary_output() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::TempDir::new().unwrap();
        let fake = temp.path().join("conda");
        fs::write(&fake, "#!/bin/sh\necho 'conda 23.1.0'\n").unwrap();
        fs::set_permissions(&fake, fs::Permissions::from_mode(0o755)).unwrap();

        let cli = CondaCli::at(&fake);
        assert_eq!(cli.version().unwrap(), "conda 23.1.0");
        assert!(cli.version_ok());
    }

    #[cfg(unix)]
    #[test]
    fn base_dir_trims_output() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::TempDir::new().unwrap();
        let fake = temp.path().join("conda");
        fs::write(&fake, "#!/bin/sh\necho '/opt/conda'\n").unwrap();
        fs::set_permissions(&fake, fs::Permissions::from_mode(0o755)).unwrap();

        let cli = CondaCli::at(&fake);
        assert_eq!(cli.base_dir().unwrap(), PathBuf::from("/opt/conda"));
    }

    #[cfg(unix)]
    #[test]
    fn base_dir_failure_is_base_dir_unavailable() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let temp = tempfile::TempDir::new().unwrap();
        let fake = temp.path().join("conda");
        fs::write(&fake, "#!/bin/sh\necho 'boom' >&2\nexit 2\n").unwrap();
        fs::set_permissions(&fake, fs::Permissions::from_mode(0o755)).unwrap();

        let cli = CondaCli::at(&fake);
        assert!(matches!(
            cli.base_dir(),
            Err(CondaswapError::BaseDirUnavailable { .. })
        ));
    }
}
