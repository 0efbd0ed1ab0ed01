//! Toolchain presence and version probing.
//!
//! A probe answers two questions: is the tool resolvable on the given
//! search-path entries, and what does its version flag report. The version
//! query is injected as a closure so probes are testable without real
//! binaries, mirroring the explicit-PATH threading used everywhere else in
//! the crate.
//!
//! A binary that resolves but whose version query fails is reported as
//! present-but-degraded rather than missing: the version field stays empty
//! but the probe is still truthy.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

use crate::shell;

/// Names the package manager resolves under.
pub const CONDA_NAMES: &[&str] = &["conda"];

/// Names the runtime resolves under, in preference order.
pub const PYTHON_NAMES: &[&str] = &["python", "python3"];

/// Result of probing for a tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolStatus {
    /// Resolved on the search path.
    Present {
        path: PathBuf,
        /// Reported version string; `None` when the version query failed.
        version: Option<String>,
    },
    /// Not resolvable on the search path.
    Missing,
}

impl ToolStatus {
    /// Whether the tool was found at all (degraded still counts).
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present { .. })
    }

    /// Resolved binary path, if present.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Present { path, .. } => Some(path),
            Self::Missing => None,
        }
    }

    /// Reported version, if the query succeeded.
    pub fn version(&self) -> Option<&str> {
        match self {
            Self::Present { version, .. } => version.as_deref(),
            Self::Missing => None,
        }
    }
}

/// Machine-readable probe report, one per tool.
#[derive(Debug, Clone, Serialize)]
pub struct ToolReport {
    pub present: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Raw reported string, e.g. `conda 23.1.0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Numeric part extracted from the reported string, e.g. `23.1.0`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_number: Option<String>,
}

impl From<&ToolStatus> for ToolReport {
    fn from(status: &ToolStatus) -> Self {
        match status {
            ToolStatus::Present { path, version } => Self {
                present: true,
                path: Some(path.clone()),
                version: version.clone(),
                version_number: version.as_deref().and_then(extract_version),
            },
            ToolStatus::Missing => Self {
                present: false,
                path: None,
                version: None,
                version_number: None,
            },
        }
    }
}

/// Combined report for the `check --json` output.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    pub conda: ToolReport,
    pub python: ToolReport,
}

/// Probe for a tool using an injected version query.
///
/// `names` are tried in order against `path_entries`; the first resolvable
/// executable wins. `query` returns the reported version string, or `None`
/// when the binary answered the version flag with a non-zero exit.
pub fn probe_tool<F>(names: &[&str], path_entries: &[PathBuf], query: F) -> ToolStatus
where
    F: Fn(&Path) -> Option<String>,
{
    let Some(path) = shell::resolve_first(names, path_entries) else {
        debug!(tool = names[0], "not found on search path");
        return ToolStatus::Missing;
    };

    let version = query(&path);
    debug!(tool = names[0], path = %path.display(), ?version, "probe hit");
    ToolStatus::Present { path, version }
}

/// Run `<binary> --version` and capture the reported string.
///
/// Some runtimes print the version to stderr, so stdout and stderr are
/// both consulted. Returns `None` on a non-zero exit (present but
/// degraded) or when the binary cannot be spawned.
pub fn query_version(binary: &Path) -> Option<String> {
    let args = vec!["--version".to_string()];
    let result = shell::execute_quiet(binary, &args).ok()?;
    if !result.success {
        return None;
    }

    let raw = if result.stdout.trim().is_empty() {
        result.stderr
    } else {
        result.stdout
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Probe for conda on the given search-path entries.
pub fn check_conda(path_entries: &[PathBuf]) -> ToolStatus {
    probe_tool(CONDA_NAMES, path_entries, query_version)
}

/// Probe for the Python runtime on the given search-path entries.
pub fn check_python(path_entries: &[PathBuf]) -> ToolStatus {
    probe_tool(PYTHON_NAMES, path_entries, query_version)
}

/// Extract a dotted version number from a reported string.
///
/// `conda 23.1.0` and `Python 3.10.12` both yield their numeric part.
pub fn extract_version(reported: &str) -> Option<String> {
    static VERSION_RE: OnceLock<Regex> = OnceLock::new();
    let re = VERSION_RE.get_or_init(|| Regex::new(r"(\d+\.\d+(?:\.\d+)?)").unwrap());
    re.captures(reported)
        .map(|caps| caps[1].to_string())
}
