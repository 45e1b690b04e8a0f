mod core;
mod messages;
mod worker;

pub use self::core::AnalysisEngine;

pub use messages::{JobEvent, JobKind, JobOutcome, JobRequest};

pub use worker::process_request_sync;
