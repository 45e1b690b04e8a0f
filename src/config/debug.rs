//! Debugging feature flags.

pub struct LogFlags {
    /// Per-sheet row counts and column positions while reading the workbook.
    pub log_loader: bool,

    /// Per-company aggregates after the frequency stage.
    pub log_frequency: bool,

    /// Slot recommendations and the fitted regression.
    pub log_recommendation: bool,

    pub log_movement_types: bool,

    pub log_export: bool,

    /// Activate trace_time macro (scope-level timing of pipeline steps)
    pub log_performance: bool,

    /// Every job request and outcome passing through the worker channel.
    pub log_worker: bool,
}

pub const DF: LogFlags = LogFlags {
    log_loader: true,
    log_frequency: false,
    log_recommendation: true,
    log_movement_types: false,
    log_export: true,
    log_performance: false,
    log_worker: false,
};
