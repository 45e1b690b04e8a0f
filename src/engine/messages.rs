use {
    crate::{
        errors::AnalysisError,
        models::{LoadedTables, RecommendationComputed},
    },
    std::{path::PathBuf, sync::Arc},
    strum_macros::Display,
};

/// Work the form hands to the background worker.
#[derive(Debug, Clone)]
pub enum JobRequest {
    Load {
        path: PathBuf,
    },
    Analyze {
        tables: Arc<LoadedTables>,
    },
    Export {
        analysis: Arc<RecommendationComputed>,
        path: PathBuf,
    },
}

impl JobRequest {
    pub fn kind(&self) -> JobKind {
        match self {
            Self::Load { .. } => JobKind::Load,
            Self::Analyze { .. } => JobKind::Analyze,
            Self::Export { .. } => JobKind::Export,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum JobKind {
    #[strum(to_string = "Load")]
    Load,
    #[strum(to_string = "Analysis")]
    Analyze,
    #[strum(to_string = "Export")]
    Export,
}

/// What the worker sends back: any number of progress updates, then exactly one `Finished`.
#[derive(Debug)]
pub enum JobEvent {
    Progress {
        fraction: f32,
        message: String,
    },
    Finished {
        kind: JobKind,
        duration_ms: u128,
        outcome: JobOutcome,
    },
}

#[derive(Debug)]
pub enum JobOutcome {
    Loaded(Arc<LoadedTables>),
    Analyzed(Arc<RecommendationComputed>),
    Exported(PathBuf),
    Failed(AnalysisError),
}
