use std::sync::mpsc::{Receiver, Sender, channel};

use crate::config::DF;

use super::messages::{JobEvent, JobKind, JobRequest};
use super::worker;

/// Owns the worker thread and the channels to it. One job at a time.
pub struct AnalysisEngine {
    job_tx: Sender<JobRequest>,    // UI writes to this
    event_rx: Receiver<JobEvent>,  // UI reads from this
    running: Option<JobKind>,
    progress: f32,
    status: String,
}

impl AnalysisEngine {
    pub fn new() -> Self {
        let (job_tx, job_rx) = channel::<JobRequest>();
        let (event_tx, event_rx) = channel::<JobEvent>();
        worker::spawn_worker_thread(job_rx, event_tx);

        Self {
            job_tx,
            event_rx,
            running: None,
            progress: 0.0,
            status: String::new(),
        }
    }

    /// Queues a job unless one is already running. Returns whether it was accepted.
    pub fn submit(&mut self, req: JobRequest) -> bool {
        if let Some(kind) = self.running {
            if DF.log_worker {
                log::info!("Engine: {} job still running, request ignored", kind);
            }
            return false;
        }

        let kind = req.kind();
        match self.job_tx.send(req) {
            Ok(()) => {
                self.running = Some(kind);
                self.progress = 0.0;
                self.status = format!("{} started", kind);
                true
            }
            Err(_) => {
                log::error!("Engine: worker thread is gone, {} job not started", kind);
                false
            }
        }
    }

    /// Drains everything the worker has sent since the last frame.
    /// Progress is folded into the engine; finished jobs are handed to the caller.
    pub fn poll(&mut self) -> Vec<JobEvent> {
        let mut finished = Vec::new();
        while let Ok(event) = self.event_rx.try_recv() {
            match event {
                JobEvent::Progress { fraction, message } => {
                    self.progress = fraction;
                    self.status = message;
                }
                done @ JobEvent::Finished { .. } => {
                    self.running = None;
                    finished.push(done);
                }
            }
        }
        finished
    }

    pub fn is_busy(&self) -> bool {
        self.running.is_some()
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn status(&self) -> &str {
        &self.status
    }
}

impl Default for AnalysisEngine {
    fn default() -> Self {
        Self::new()
    }
}
