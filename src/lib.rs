#![allow(clippy::collapsible_if)]
#![allow(clippy::type_complexity)]

// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod errors;
mod headless;
pub mod models;
pub mod report;
pub mod ui;
pub mod utils;

// Re-export commonly used types outside of crate (for main.rs, make_sample_workbook.rs and tests/)
pub use analysis::run_pipeline;
pub use app::App;
pub use config::{PERSISTENCE, WORKBOOK};
pub use data::load_workbook;
pub use errors::{AnalysisError, AnalysisResult};
pub use headless::run_headless;
pub use report::{build_report, export_report};

// CLI argument parsing
use {
    clap::{Parser, Subcommand},
    std::path::PathBuf,
};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Workbook to pre-fill in the form
    #[arg(long)]
    pub input: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Load, analyze and export without opening a window
    Analyze {
        /// Input workbook with the company, movement and movement-type sheets
        #[arg(long)]
        input: PathBuf,

        /// Report path (defaults to `<input stem>_analise.xlsx` next to the input)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Print the results as JSON instead of a table
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn analyze_subcommand_parses() {
        let cli = Cli::try_parse_from([
            "archive-slotting",
            "analyze",
            "--input",
            "movimentos.xlsx",
            "--json",
        ])
        .unwrap();
        match cli.command {
            Some(Command::Analyze {
                input,
                output,
                json,
            }) => {
                assert_eq!(input, PathBuf::from("movimentos.xlsx"));
                assert!(output.is_none());
                assert!(json);
            }
            None => panic!("expected analyze subcommand"),
        }
    }

    #[test]
    fn bare_invocation_opens_form() {
        let cli = Cli::try_parse_from(["archive-slotting", "--input", "a.xlsx"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.input, Some(PathBuf::from("a.xlsx")));
    }
}
