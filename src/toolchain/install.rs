//! Conda bootstrap via the condacolab helper.
//!
//! Hosted notebook images ship Python but not conda; condacolab is the
//! supported way to get a working conda into them. The flow is a no-op
//! when conda is already present, otherwise it installs the helper with
//! pip and invokes its install entry point. Either stage failing is
//! fatal after being reported.

use tracing::{info, warn};

use crate::error::{CondaswapError, Result};
use crate::shell;
use crate::toolchain::probe::PYTHON_NAMES;
use crate::ui::UserInterface;

/// Mockable dependencies for the bootstrap flow.
pub struct BootstrapContext<'a> {
    /// Whether conda is currently resolvable.
    pub conda_present: &'a dyn Fn() -> bool,
    /// Install the condacolab package (`python -m pip install -q condacolab`).
    pub pip_install: &'a dyn Fn() -> Result<()>,
    /// Invoke condacolab's install entry point.
    pub run_helper: &'a dyn Fn() -> Result<()>,
}

/// Install conda when absent.
///
/// Returns `Ok` without side effects when conda is already present.
pub fn install_conda(ctx: &BootstrapContext<'_>, ui: &mut dyn UserInterface) -> Result<()> {
    if (ctx.conda_present)() {
        ui.success("Conda is already installed.");
        return Ok(());
    }

    ui.message("Conda not found. Installing condacolab to bootstrap it...");
    info!("bootstrapping conda via condacolab");

    if let Err(e) = (ctx.pip_install)() {
        ui.error(&format!("Failed to install condacolab: {}", e));
        return Err(e);
    }

    // condacolab.install() restarts the kernel on Colab; warn before it runs
    ui.warning("condacolab may restart the notebook kernel; re-run setup afterwards if it does.");

    match (ctx.run_helper)() {
        Ok(()) => {
            ui.success("Conda installation complete!");
            Ok(())
        }
        Err(e) => {
            warn!("condacolab install entry point failed: {}", e);
            ui.error(&format!("Error during condacolab install: {}", e));
            Err(e)
        }
    }
}

/// Run the resolved Python with the given arguments, stdio inherited.
fn run_python(args: &[&str]) -> Result<()> {
    let python = shell::resolve_first(PYTHON_NAMES, &shell::parse_system_path())
        .ok_or_else(|| CondaswapError::not_on_path("python"))?;
    let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();

    let result = shell::execute_interactive(&python, &args)?;
    if result.success {
        Ok(())
    } else {
        Err(CondaswapError::CommandFailed {
            command: shell::display_argv(&python, &args),
            code: result.exit_code,
        })
    }
}

/// Build the default `BootstrapContext` for production use.
pub fn default_context() -> BootstrapContext<'static> {
    BootstrapContext {
        conda_present: &|| shell::resolve_on_system_path("conda").is_some(),
        pip_install: &|| run_python(&["-m", "pip", "install", "-q", "condacolab"]),
        run_helper: &|| run_python(&["-c", "import condacolab; condacolab.install()"]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::cell::Cell;

    #[test]
    fn present_conda_short_circuits() {
        let pip_called = Cell::new(false);
        let ctx = BootstrapContext {
            conda_present: &|| true,
            pip_install: &|| {
                pip_called.set(true);
                Ok(())
            },
            run_helper: &|| Ok(()),
        };
        let mut ui = MockUI::new();

        install_conda(&ctx, &mut ui).unwrap();

        assert!(!pip_called.get());
        assert!(ui.successes.iter().any(|m| m.contains("already installed")));
    }

    #[test]
    fn pip_failure_propagates() {
        let helper_called = Cell::new(false);
        let ctx = BootstrapContext {
            conda_present: &|| false,
            pip_install: &|| {
                Err(CondaswapError::CommandFailed {
                    command: "python -m pip install -q condacolab".into(),
                    code: Some(1),
                })
            },
            run_helper: &|| {
                helper_called.set(true);
                Ok(())
            },
        };
        let mut ui = MockUI::new();

        let result = install_conda(&ctx, &mut ui);

        assert!(matches!(
            result,
            Err(CondaswapError::CommandFailed { .. })
        ));
        assert!(!helper_called.get());
        assert!(!ui.errors.is_empty());
    }

    #[test]
    fn helper_failure_propagates_after_logging() {
        let ctx = BootstrapContext {
            conda_present: &|| false,
            pip_install: &|| Ok(()),
            run_helper: &|| {
                Err(CondaswapError::CommandFailed {
                    command: "python -c ...".into(),
                    code: Some(1),
                })
            },
        };
        let mut ui = MockUI::new();

        let result = install_conda(&ctx, &mut ui);

        assert!(result.is_err());
        assert!(!ui.errors.is_empty());
    }

    #[test]
    fn full_bootstrap_reports_success() {
        let ctx = BootstrapContext {
            conda_present: &|| false,
            pip_install: &|| Ok(()),
            run_helper: &|| Ok(()),
        };
        let mut ui = MockUI::new();

        install_conda(&ctx, &mut ui).unwrap();

        assert!(ui
            .successes
            .iter()
            .any(|m| m.contains("installation complete")));
        // Kernel-restart caveat is surfaced before the helper runs
        assert!(ui.warnings.iter().any(|m| m.contains("kernel")));
    }
}
