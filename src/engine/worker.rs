use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::mpsc::{Receiver, Sender};
use std::thread;
use std::time::Instant;

use super::messages::{JobEvent, JobKind, JobOutcome, JobRequest};

use crate::analysis::{compute_frequency, compute_recommendations};
use crate::config::DF;
use crate::data::load_workbook;
use crate::errors::{AnalysisError, AnalysisResult, AnalysisStage};
use crate::models::{LoadedTables, RecommendationComputed};
use crate::report::{build_report, export_report};

/// Spawns the background thread that runs jobs one at a time until the request channel closes.
pub fn spawn_worker_thread(rx: Receiver<JobRequest>, tx: Sender<JobEvent>) {
    thread::spawn(move || {
        while let Ok(req) = rx.recv() {
            run_contained(req, &tx, process_request_sync);
        }
        if DF.log_worker {
            log::info!("Worker: request channel closed, exiting");
        }
    });
}

/// Runs one job to completion, reporting progress and a single final outcome on `tx`.
pub fn process_request_sync(req: JobRequest, tx: &Sender<JobEvent>) {
    let kind = req.kind();
    let start = Instant::now();
    let progress = |fraction: f32, message: String| {
        let _ = tx.send(JobEvent::Progress { fraction, message });
    };

    if DF.log_worker {
        log::info!("Worker: starting {} job", kind);
    }

    let outcome = crate::trace_time!(&format!("{} job", kind), 50_000, {
        match req {
            JobRequest::Load { path } => {
                progress(0.1, format!("Reading {}...", path.display()));
                load_workbook(&path).map(|tables| JobOutcome::Loaded(Arc::new(tables)))
            }
            JobRequest::Analyze { tables } => {
                analyze(&tables, &progress).map(|r| JobOutcome::Analyzed(Arc::new(r)))
            }
            JobRequest::Export { analysis, path } => {
                progress(0.2, "Analyzing movement types...".to_string());
                let report = build_report(&analysis);
                progress(0.6, format!("Writing {}...", path.display()));
                export_report(&report, &path).map(|()| JobOutcome::Exported(path))
            }
        }
    })
    .unwrap_or_else(JobOutcome::Failed);

    match &outcome {
        JobOutcome::Failed(_) => progress(0.0, format!("{} failed", kind)),
        _ => progress(1.0, format!("{} complete", kind)),
    }

    let _ = tx.send(JobEvent::Finished {
        kind,
        duration_ms: start.elapsed().as_millis(),
        outcome,
    });
}

/// Runs `job`, turning a panic inside it into a `Failed` outcome so the worker
/// survives and the form leaves its working state.
fn run_contained(
    req: JobRequest,
    tx: &Sender<JobEvent>,
    job: impl FnOnce(JobRequest, &Sender<JobEvent>),
) {
    let kind = req.kind();
    let failure_target = req.clone();
    let start = Instant::now();

    if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| job(req, tx))) {
        let message = panic_message(payload.as_ref());
        log::error!("Worker: {} job panicked: {}", kind, message);
        let _ = tx.send(JobEvent::Progress {
            fraction: 0.0,
            message: format!("{} failed", kind),
        });
        let _ = tx.send(JobEvent::Finished {
            kind,
            duration_ms: start.elapsed().as_millis(),
            outcome: JobOutcome::Failed(failure_for(&failure_target, message)),
        });
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&str>() {
        (*text).to_string()
    } else if let Some(text) = payload.downcast_ref::<String>() {
        text.clone()
    } else {
        "unexpected internal error".to_string()
    }
}

fn failure_for(req: &JobRequest, message: String) -> AnalysisError {
    let reason = anyhow::anyhow!("internal error: {}", message);
    match req {
        JobRequest::Load { path } => AnalysisError::load(path, reason),
        JobRequest::Analyze { .. } => {
            AnalysisError::computation(AnalysisStage::Recommendation, format!("{:#}", reason))
        }
        JobRequest::Export { path, .. } => AnalysisError::export(path, reason),
    }
}

fn analyze(
    tables: &LoadedTables,
    progress: &impl Fn(f32, String),
) -> AnalysisResult<RecommendationComputed> {
    progress(0.1, "Computing company frequencies...".to_string());
    let frequency = compute_frequency(tables)?;
    progress(
        0.4,
        format!(
            "Fitting service-time model on {} companies...",
            frequency.companies.len()
        ),
    );
    let recommendations = compute_recommendations(&frequency)?;
    progress(0.8, "Recommendations ready".to_string());
    Ok(recommendations)
}
