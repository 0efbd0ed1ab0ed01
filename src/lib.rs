//! condaswap - Conda environment provisioning and switching for hosted notebooks.
//!
//! condaswap is a CLI tool for Colab/Kaggle-style images: it probes for the
//! conda/python toolchain, bootstraps conda via condacolab when absent,
//! provisions pinned-Python environments and repoints the global
//! `python`/`pip` names at them, and runs environment-local commands that
//! never made it onto the global search path.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`conda`] - Typed wrapper over the conda CLI
//! - [`error`] - Error types and result aliases
//! - [`provision`] - Environment creation and symlink repointing
//! - [`runner`] - PATH-first tool execution with environment fallback
//! - [`shell`] - Process execution, PATH resolution, privilege detection
//! - [`toolchain`] - Toolchain probing, bootstrap, and repair
//! - [`ui`] - Terminal output, prompts, and spinners
//!
//! # Example
//!
//! ```
//! use condaswap::toolchain::probe::check_conda;
//!
//! // Probe an explicit set of search-path entries
//! let status = check_conda(&[]);
//! assert!(!status.is_present());
//! ```

pub mod cli;
pub mod conda;
pub mod error;
pub mod provision;
pub mod runner;
pub mod shell;
pub mod toolchain;
pub mod ui;

pub use error::{CondaswapError, Result};
