// src/app/state.rs

use std::sync::Arc;

use crate::{
    engine::{JobKind, JobOutcome},
    models::{LoadedTables, RecommendationComputed},
};

pub(crate) enum AppState {
    Idle(IdleState),
    Working(WorkingState),
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Idle(IdleState)
    }
}

#[derive(Default, Clone)]
pub(crate) struct IdleState;

#[derive(Clone)]
pub(crate) struct WorkingState {
    pub(crate) job: JobKind,
}

/// What the form currently holds. Each successful job replaces it; failures leave it alone.
#[derive(Default, Clone)]
pub(crate) enum Session {
    #[default]
    Empty,
    Loaded(Arc<LoadedTables>),
    Analyzed {
        tables: Arc<LoadedTables>,
        analysis: Arc<RecommendationComputed>,
    },
}

impl Session {
    pub(crate) fn tables(&self) -> Option<&Arc<LoadedTables>> {
        match self {
            Session::Empty => None,
            Session::Loaded(tables) | Session::Analyzed { tables, .. } => Some(tables),
        }
    }

    pub(crate) fn analysis(&self) -> Option<&Arc<RecommendationComputed>> {
        match self {
            Session::Analyzed { analysis, .. } => Some(analysis),
            _ => None,
        }
    }

    pub(crate) fn can_analyze(&self) -> bool {
        self.tables().is_some()
    }

    pub(crate) fn can_export(&self) -> bool {
        self.analysis().is_some()
    }

    /// Session after a finished job. New data drops any previous analysis.
    pub(crate) fn after(&self, outcome: &JobOutcome) -> Session {
        match outcome {
            JobOutcome::Loaded(tables) => Session::Loaded(tables.clone()),
            JobOutcome::Analyzed(analysis) => match self.tables() {
                Some(tables) => Session::Analyzed {
                    tables: tables.clone(),
                    analysis: analysis.clone(),
                },
                None => self.clone(),
            },
            JobOutcome::Exported(_) | JobOutcome::Failed(_) => self.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LogLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub(crate) struct LogLine {
    pub(crate) level: LogLevel,
    pub(crate) text: String,
}

/// Lines shown in the form's log area. Everything is mirrored to the `log` facade.
#[derive(Default, Clone)]
pub(crate) struct ActivityLog {
    lines: Vec<LogLine>,
}

impl ActivityLog {
    pub(crate) fn push(&mut self, level: LogLevel, text: impl Into<String>) {
        let text = text.into();
        match level {
            LogLevel::Error => log::error!("{}", text),
            LogLevel::Info | LogLevel::Success => log::info!("{}", text),
        }
        self.lines.push(LogLine { level, text });
    }

    pub(crate) fn lines(&self) -> &[LogLine] {
        &self.lines
    }
}
