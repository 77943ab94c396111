//! ph - personal helper CLI
//!
//! Keeps profile details, a cover letter, custom info and work experience in
//! one place, ready to copy into job applications.
//!
//! # Examples
//!
//! ```bash
//! # Show the profile
//! ph profile show --pretty
//!
//! # Copy the GitHub URL to the clipboard
//! ph profile copy github-url | pbcopy
//!
//! # Add an experience
//! ph experience add --title "Engineer" --company "Acme" --from 2021-03
//!
//! # Export everything to experiences.json
//! ph experience export
//! ```

use ph_cli::{App, Cli, CliResult, Prompt, logger};
use ph_config::Config;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use log::info;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config_dir.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let log_file = config
        .logging
        .file
        .as_ref()
        .map(|file| config.config_dir.join(file));
    if let Err(e) = logger::initialize(config.logging.level, log_file, config.logging.colored) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    info!("Starting ph v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let mut app = match App::from_config(&config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut prompt = Prompt::stdio();
    let result = app.run(cli.command, &mut prompt).await;

    for notice in app.take_notices() {
        eprintln!("{notice}");
    }

    match result {
        Ok(Value::Null) => ExitCode::SUCCESS,
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{json}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Load from `--config-dir` when given, else the default location, then validate.
fn load_config(config_dir: Option<&Path>) -> CliResult<Config> {
    let config = match config_dir {
        Some(dir) => Config::load_from(dir)?,
        None => Config::load()?,
    };
    config.validate()?;
    Ok(config)
}
