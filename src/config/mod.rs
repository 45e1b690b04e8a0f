//! Configuration module for the archive slotting application.

// Can all be private now because we have a public re-export.
mod analysis;
mod debug;
mod persistence;
mod report;
mod workbook;

// Re-export commonly used items
pub use analysis::{
    ANALYSIS, AnalysisConfig, DifficultyWeights, RecommendationSettings, SlotBounds,
    StatisticsSettings,
};
pub use debug::DF;
pub use persistence::{PERSISTENCE, default_report_path};
pub use report::{REPORT, ReportConfig};
pub use workbook::{WORKBOOK, WorkbookSchema};
