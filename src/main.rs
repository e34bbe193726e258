mod cli;
mod extract;
mod logging;
mod model;
mod util;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, error};

use crate::cli::Cli;
use crate::logging::LogSettings;
use crate::model::ExtractOptions;
use crate::util::default_log_directory;

fn main() {
    let cli = Cli::parse();

    let log_context = logging::init(&LogSettings {
        directory: cli
            .log_dir
            .clone()
            .unwrap_or_else(default_log_directory),
        verbose: cli.verbose,
    });
    if let Some(directory) = log_context.directory() {
        debug!(directory = %directory.display(), "logging to file");
    }

    if let Err(err) = run(&cli) {
        error!(error = %err, "command failed");
        for cause in err.chain().skip(1) {
            error!(cause = %cause, "caused by");
        }
        eprintln!("Error: {err:#}");
        drop(log_context);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let options = ExtractOptions::from(cli);
    extract::run(&cli.pdf_path, &options)
}
