//! Analyze command implementation
//!
//! One-shot run of the workflow: authenticate, set the parcel, compute, then
//! optionally chart, fetch the map overlay and download the report.

use super::build_controller;
use crate::cli::AnalyzeArgs;
use crate::errors;
use crate::interactive;
use crate::output::OutputWriter;
use crate::output_types::AnalyzeOutput;
use crate::parcel_input;
use crate::progress;
use crate::reports;
use anyhow::Result;
use ndvi_core::config::LayeredConfig;
use ndvi_core::workflow::{AuthMode, Credentials};
use ndvi_core::NdviError;

pub async fn execute(args: AnalyzeArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let api_url = config.api_url.value.as_str();

    let parcel = match (&args.parcel, &args.bbox) {
        (Some(parcel), _) => parcel_input::load_parcel(parcel)?,
        (None, Some(bbox)) => parcel_input::parse_bbox(bbox)?,
        (None, None) => return Err(errors::parcel_required().into()),
    };

    let password = match args.password {
        Some(password) => password,
        None => interactive::prompt_password()?,
    };
    let mode = if args.signup { AuthMode::Signup } else { AuthMode::Login };

    let mut controller = build_controller(config, output)?;

    controller
        .authenticate(mode, Credentials::new(&args.email, password))
        .await
        .map_err(|e| match e {
            NdviError::Application { message } => errors::authentication_failed(&message),
            other => errors::from_workflow(other, api_url),
        })?;

    controller.on_draw_created(parcel);

    let spinner = progress::request_spinner("Computing NDVI...", output.is_json());
    let result = match controller.compute(args.name.clone()).await {
        Ok(result) => {
            progress::finish_success(&spinner, "NDVI computed");
            result
        }
        Err(err) => {
            progress::finish_error(&spinner, "NDVI computation failed");
            return Err(errors::from_workflow(err, api_url).into());
        }
    };

    let user_id = controller.user_id().map(ToString::to_string).unwrap_or_default();
    let series = controller.store().series().points().to_vec();
    let mut summary = AnalyzeOutput::new(user_id, result, series);

    if args.chart {
        controller.view_chart().map_err(|e| errors::from_workflow(e, api_url))?;
        controller.close_chart();
    }

    if args.ndvi_map {
        let url = controller.request_ndvi_map().await.map_err(|e| errors::from_workflow(e, api_url))?;
        summary.overlay_url = Some(url);
    }

    if args.report {
        let spinner = progress::request_spinner("Downloading report...", output.is_json());
        let report = match controller.download_report().await {
            Ok(report) => report,
            Err(err) => {
                progress::finish_error(&spinner, "Report download failed");
                return Err(errors::from_workflow(err, api_url).into());
            }
        };
        let path = reports::save_report(&report, &config.report_dir.value)?;
        progress::finish_success(&spinner, &format!("Report saved to {}", path.display()));
        summary.report_path = Some(path.display().to_string());
    }

    controller.logout();

    if output.is_json() {
        output.result(summary)?;
    } else if let Some(path) = &summary.report_path {
        output.success(format!("Analysis of parcel {} complete, report at {}", summary.parcel_id, path));
    } else {
        output.success(format!("Analysis of parcel {} complete", summary.parcel_id));
    }

    Ok(())
}
