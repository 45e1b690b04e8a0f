//! Typed failures for the three pipeline boundaries: load, computation, export.

use {
    std::path::{Path, PathBuf},
    strum_macros::Display,
    thiserror::Error,
};

/// The computation stage that produced a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum AnalysisStage {
    #[strum(to_string = "Frequency analysis")]
    Frequency,
    #[strum(to_string = "Recommendation analysis")]
    Recommendation,
    #[strum(to_string = "Movement-type analysis")]
    MovementTypes,
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Could not load workbook {}: {reason}", path.display())]
    Load { path: PathBuf, reason: String },

    #[error("{stage} failed: {reason}")]
    Computation { stage: AnalysisStage, reason: String },

    #[error("Could not export report to {}: {reason}", path.display())]
    Export { path: PathBuf, reason: String },
}

pub type AnalysisResult<T> = Result<T, AnalysisError>;

impl AnalysisError {
    /// Renders the whole `anyhow` cause chain into the reason.
    pub(crate) fn load(path: &Path, err: anyhow::Error) -> Self {
        Self::Load {
            path: path.to_path_buf(),
            reason: format!("{:#}", err),
        }
    }

    pub(crate) fn computation(stage: AnalysisStage, reason: impl Into<String>) -> Self {
        Self::Computation {
            stage,
            reason: reason.into(),
        }
    }

    pub(crate) fn export(path: &Path, err: anyhow::Error) -> Self {
        Self::Export {
            path: path.to_path_buf(),
            reason: format!("{:#}", err),
        }
    }

    /// Hint shown to the user next to the failure, per failure kind.
    pub fn user_hint(&self) -> &'static str {
        match self {
            Self::Load { .. } => "Check the workbook sheets and columns, then load it again.",
            Self::Computation { .. } => "Check the data in the 'Movimentação' sheet.",
            Self::Export { .. } => "Check the output path and try exporting again.",
        }
    }
}
