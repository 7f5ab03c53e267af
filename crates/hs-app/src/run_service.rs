//! Run orchestration: load the network, derive its zones, report.

use std::path::Path;
use std::time::Instant;

use crate::cancel::CancelToken;
use crate::error::AppResult;
use crate::progress::{RunProgressEvent, RunStage};
use crate::report::RunReport;

/// Request to execute a run against a validated `.inp` path.
pub struct RunRequest<'a> {
    pub input: &'a Path,
}

fn emit_progress(
    progress_cb: &mut Option<&mut dyn FnMut(RunProgressEvent)>,
    input: &Path,
    stage: RunStage,
    started: Instant,
    message: Option<String>,
) {
    tracing::debug!(stage = stage.label(), "run stage");
    if let Some(cb) = progress_cb.as_deref_mut() {
        cb(RunProgressEvent::stage(
            input.to_path_buf(),
            stage,
            started.elapsed().as_secs_f64(),
            message,
        ));
    }
}

/// Execute a run, checking `cancel` between stages.
pub fn run(
    request: &RunRequest,
    cancel: &CancelToken,
    mut progress_cb: Option<&mut dyn FnMut(RunProgressEvent)>,
) -> AppResult<RunReport> {
    let started = Instant::now();
    let _span = tracing::info_span!("run", input = %request.input.display()).entered();

    cancel.check()?;
    emit_progress(
        &mut progress_cb,
        request.input,
        RunStage::LoadingNetwork,
        started,
        Some("Reading network identifiers".to_string()),
    );
    let network = hs_network::read_inp(request.input)?;

    cancel.check()?;
    emit_progress(
        &mut progress_cb,
        request.input,
        RunStage::ExtractingZones,
        started,
        Some(format!(
            "{} nodes, {} links",
            network.nodes().len(),
            network.links().len()
        )),
    );
    let zones = hs_network::zones_of(&network);

    cancel.check()?;
    let report = RunReport::new(request.input.to_path_buf(), &network, zones);
    emit_progress(
        &mut progress_cb,
        request.input,
        RunStage::Completed,
        started,
        None,
    );
    tracing::info!(
        nodes = report.node_count,
        links = report.link_count,
        zones = report.zones.len(),
        elapsed_s = started.elapsed().as_secs_f64(),
        "run finished"
    );

    Ok(report)
}
