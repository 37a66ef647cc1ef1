//! Shell command implementation
//!
//! Interactive session over the workflow controller. Failures are already
//! shown by the terminal ports, so the loop only logs them and carries on.

use super::build_controller;
use crate::cli::ShellArgs;
use crate::interactive::{self, AuthChoice, ShellAction};
use crate::output::OutputWriter;
use crate::parcel_input;
use crate::progress;
use crate::reports;
use anyhow::Result;
use ndvi_core::config::LayeredConfig;
use ndvi_core::workflow::AuthMode;
use ndvi_core::WorkflowController;

pub async fn execute(args: ShellArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let mut controller = build_controller(config, output)?;
    let mut last_email = args.email;

    loop {
        if !controller.state().is_logged_in() {
            match interactive::prompt_auth(last_email.as_deref())? {
                AuthChoice::Quit => break,
                AuthChoice::Authenticate(mode, credentials) => {
                    last_email = Some(credentials.email.clone());
                    log_failure(controller.authenticate(mode, credentials).await);
                }
            }
            continue;
        }

        match interactive::prompt_action()? {
            ShellAction::DrawBoundingBox => {
                let input = interactive::prompt_bbox()?;
                match parcel_input::parse_bbox(&input) {
                    Ok(parcel) => controller.on_draw_created(parcel),
                    Err(err) => err.display(),
                }
            }
            ShellAction::LoadParcel => {
                let input = interactive::prompt_parcel_path()?;
                match parcel_input::load_parcel(&input) {
                    Ok(parcel) => controller.on_draw_created(parcel),
                    Err(err) => err.display(),
                }
            }
            ShellAction::Compute => compute(&mut controller).await?,
            ShellAction::ViewChart => log_failure(controller.view_chart()),
            ShellAction::CloseChart => controller.close_chart(),
            ShellAction::DownloadReport => match controller.download_report().await {
                Ok(report) => {
                    let path = reports::save_report(&report, &config.report_dir.value)?;
                    output.success(format!("Report saved to {}", path.display()));
                }
                Err(err) => log_failure::<()>(Err(err)),
            },
            ShellAction::NdviMap => log_failure(controller.request_ndvi_map().await),
            ShellAction::Relogin => {
                let credentials = interactive::prompt_credentials(last_email.as_deref())?;
                last_email = Some(credentials.email.clone());
                log_failure(controller.authenticate(AuthMode::Login, credentials).await);
            }
            ShellAction::Logout => controller.logout(),
            ShellAction::Quit => break,
        }
    }

    if controller.state().is_logged_in() {
        controller.logout();
    }
    Ok(())
}

async fn compute(controller: &mut WorkflowController) -> Result<()> {
    let name = if controller.current_feature().is_some() {
        interactive::prompt_parcel_name()?
    } else {
        None
    };

    let spinner = progress::create_spinner("Computing NDVI...");
    match controller.compute(name).await {
        Ok(_) => progress::finish_success(&spinner, "NDVI computed"),
        Err(err) => {
            progress::finish_error(&spinner, "NDVI computation failed");
            log_failure::<()>(Err(err));
        }
    }
    Ok(())
}

/// Workflow errors were already shown to the user; keep a trace for debugging
fn log_failure<T>(outcome: ndvi_core::Result<T>) {
    if let Err(err) = outcome {
        if err.is_precondition() {
            tracing::debug!(error = %err, "Action rejected");
        } else {
            tracing::debug!(error = %err, "Action failed");
        }
    }
}
