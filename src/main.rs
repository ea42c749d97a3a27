use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

use sakina::core::config;
use sakina::tui;

#[derive(Parser)]
#[command(
    name = "sakina",
    about = "A terminal companion: comfort through Qur'an, Hadith and Stories"
)]
struct Args {
    /// Log verbosity (error, warn, info, debug, trace, off)
    #[arg(long)]
    log_level: Option<String>,

    /// Where to write the log file
    #[arg(long)]
    log_file: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("sakina: {e}");
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(
        &file_config,
        args.log_level.as_deref(),
        args.log_file.as_deref(),
    );

    // File logger only - nothing may print over the TUI
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    log::info!("Sakina starting up");

    tui::run(resolved)
}
