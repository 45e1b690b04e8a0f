#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // Windows release: hide console window
use {
    anyhow::anyhow,
    archive_slotting::{Cli, Command, PERSISTENCE, run_app, run_headless},
    clap::Parser,
    eframe::NativeOptions,
    std::{panic, path::PathBuf},
};

fn main() -> anyhow::Result<()> {
    panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::force_capture();
        log::error!("CRITICAL PANIC:\n{}\nStack Trace:\n{}", info, backtrace);
    }));

    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Info)
    };

    let mut builder = env_logger::Builder::new();

    builder
        .filter(None, global_level)
        .filter(Some("archive_slotting"), my_code_level)
        .parse_default_env()
        .init();

    let args = Cli::parse();

    if let Some(Command::Analyze {
        input,
        output,
        json,
    }) = args.command.clone()
    {
        run_headless(&input, output, json)?;
        return Ok(());
    }

    let options = NativeOptions {
        persistence_path: Some(PathBuf::from(PERSISTENCE.app.state_path)),
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_title("Archive Slotting - Movimentação do Arquivo"),
        ..Default::default()
    };

    eframe::run_native(
        "Archive Slotting",
        options,
        Box::new(move |cc| Ok(Box::new(run_app(cc, args)))),
    )
    .map_err(|e| anyhow!("{e}"))
}
