//! Global symlink repointing.
//!
//! Switching the default interpreter means making the global `python`,
//! `python3`, and `pip` names resolve into the new environment's bin
//! directory. The plan is built as data first so the exact operation
//! sequence is inspectable and testable; execution happens one privileged
//! operation at a time, aborting on the first failure with no rollback.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::conda::CondaCli;
use crate::error::{CondaswapError, Result};
use crate::shell::{self, PrivilegeMode};

/// One privileged filesystem operation in the repointing sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkOp {
    /// `rm -f <target>`
    Remove { target: PathBuf },
    /// `ln -sf <source> <target>`
    Symlink { source: PathBuf, target: PathBuf },
}

impl LinkOp {
    /// Program and argv for this operation.
    pub fn argv(&self) -> (PathBuf, Vec<String>) {
        match self {
            Self::Remove { target } => (
                PathBuf::from("rm"),
                vec!["-f".to_string(), target.display().to_string()],
            ),
            Self::Symlink { source, target } => (
                PathBuf::from("ln"),
                vec![
                    "-sf".to_string(),
                    source.display().to_string(),
                    target.display().to_string(),
                ],
            ),
        }
    }

    /// Human-readable rendering for progress output.
    pub fn describe(&self) -> String {
        let (program, args) = self.argv();
        shell::display_argv(&program, &args)
    }
}

/// Build the six-operation repointing sequence.
///
/// `python_path` is the currently resolved global `python`; its directory
/// also holds the `python3` and `pip` names. Removals come first so stale
/// regular files (not just old links) are cleared before linking.
pub fn link_plan(base_dir: &Path, env_name: &str, python_path: &Path) -> Vec<LinkOp> {
    let python_dir = python_path.parent().unwrap_or_else(|| Path::new("/"));
    let env_bin = CondaCli::env_bin_dir(base_dir, env_name);
    let new_python = env_bin.join("python3");
    let new_pip = env_bin.join("pip");

    let python3_path = python_dir.join("python3");
    let pip_path = python_dir.join("pip");

    vec![
        LinkOp::Remove {
            target: python_path.to_path_buf(),
        },
        LinkOp::Remove {
            target: python3_path.clone(),
        },
        LinkOp::Remove {
            target: pip_path.clone(),
        },
        LinkOp::Symlink {
            source: new_python.clone(),
            target: python_path.to_path_buf(),
        },
        LinkOp::Symlink {
            source: new_python,
            target: python3_path,
        },
        LinkOp::Symlink {
            source: new_pip,
            target: pip_path,
        },
    ]
}

/// Execute one operation under the given privilege mode.
pub fn run_link_op(op: &LinkOp, mode: PrivilegeMode) -> Result<()> {
    let (program, args) = op.argv();
    let (program, args) = mode.wrap(&program, &args);
    debug!(command = %shell::display_argv(&program, &args), "running link operation");

    let result = shell::execute_quiet(&program, &args)?;
    if result.success {
        Ok(())
    } else {
        Err(CondaswapError::CommandFailed {
            command: shell::display_argv(&program, &args),
            code: result.exit_code,
        })
    }
}
