//! File persistence configuration
use std::path::{Path, PathBuf};

use crate::config::REPORT;

/// Configuration for Application State Persistence
pub struct AppPersistenceConfig {
    /// Path for saving/loading application UI state
    pub state_path: &'static str,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub app: AppPersistenceConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    app: AppPersistenceConfig {
        state_path: ".archive_slotting_state.json",
    },
};

/// Report path next to the input workbook.
/// Example: "data/movimentos.xlsx" -> "data/movimentos_analise.xlsx"
pub fn default_report_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "relatorio".to_string());
    input.with_file_name(format!("{}{}", stem, REPORT.default_output_suffix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_path_sits_next_to_input() {
        let path = default_report_path(Path::new("data/movimentos.xlsx"));
        assert_eq!(path, PathBuf::from("data/movimentos_analise.xlsx"));
    }

    #[test]
    fn report_path_for_bare_name() {
        let path = default_report_path(Path::new("input.xlsx"));
        assert_eq!(path, PathBuf::from("input_analise.xlsx"));
    }
}
