//! PATH-first tool execution with active-environment fallback.
//!
//! pip console scripts installed into a conda environment are not on the
//! global search path until the environment is activated in a shell, and
//! notebook cells never activate one. `run_tool` executes a command
//! directly when it resolves on PATH, and otherwise looks it up inside
//! the active environment's bin directory.
//!
//! Fallback order is fixed: the active-environment variable is read before
//! the base-directory query, so a missing `CONDA_DEFAULT_ENV` fails before
//! any external command or filesystem access runs.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::conda::{self, CondaCli};
use crate::error::{CondaswapError, Result};
use crate::shell;

/// Mockable dependencies for tool execution.
pub struct RunnerContext<'a> {
    /// Resolve a command name on the search path.
    pub resolve: &'a dyn Fn(&str) -> Option<PathBuf>,
    /// Read the active environment name.
    pub active_env: &'a dyn Fn() -> Option<String>,
    /// Query the conda base directory.
    pub base_dir: &'a dyn Fn() -> Result<PathBuf>,
    /// Execute a resolved binary with arguments, returning its exit code.
    pub exec: &'a dyn Fn(&Path, &[String]) -> Result<Option<i32>>,
}

/// Execute `tool` with `args`, falling back to the active environment's bin
/// directory when the name is not globally resolvable.
///
/// Returns the child's exit code so callers can propagate it.
pub fn run_tool(ctx: &RunnerContext<'_>, tool: &str, args: &[String]) -> Result<Option<i32>> {
    if let Some(path) = (ctx.resolve)(tool) {
        debug!(tool, path = %path.display(), "resolved on search path");
        return (ctx.exec)(&path, args);
    }

    let env_name = (ctx.active_env)().ok_or(CondaswapError::ActiveEnvUnset)?;
    let base_dir = (ctx.base_dir)()?;
    let env_bin = CondaCli::env_bin_dir(&base_dir, &env_name);
    let candidate = env_bin.join(tool);

    if !candidate.exists() {
        return Err(CondaswapError::not_in_env(tool, &env_name, &env_bin));
    }

    info!(tool, path = %candidate.display(), env = %env_name, "running from environment bin");
    (ctx.exec)(&candidate, args)
}

/// Execute a binary with stdio inherited, surfacing only spawn failures.
///
/// A non-zero child exit is not an error here; the code is handed back so
/// the CLI can exit with it.
pub fn exec_inherit(program: &Path, args: &[String]) -> Result<Option<i32>> {
    let result = shell::execute_interactive(program, args)?;
    Ok(result.exit_code)
}

/// Build the default `RunnerContext` for production use.
pub fn default_context() -> RunnerContext<'static> {
    RunnerContext {
        resolve: &shell::resolve_on_system_path,
        active_env: &conda::active_env_name,
        base_dir: &|| CondaCli::new().base_dir(),
        exec: &exec_inherit,
    }
}
