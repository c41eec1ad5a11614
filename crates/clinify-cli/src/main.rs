use std::process::ExitCode;

use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;

use cli::{Cli, Command, LogFormat};

fn init_logging(cli: &Cli, format: LogFormat) {
    // RUST_LOG wins unless -v/-q was given explicitly
    let filter = if cli.verbosity.is_present() {
        EnvFilter::new(cli.verbosity.tracing_level_filter().to_string())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn main() -> Result<ExitCode> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config_path = config::config_path(cli.config.as_deref())?;
    let config = config::load_config(&config_path)?;
    init_logging(&cli, cli.log_format.unwrap_or(config.log_format));

    match &cli.command {
        Command::Normalize { file } => commands::normalize(file)?,
        Command::Default {
            discipline,
            note_type,
            override_file,
            normalize,
        } => commands::default_template(
            discipline,
            note_type,
            override_file.as_deref(),
            *normalize,
            &config,
        )?,
        Command::Validate {
            template,
            section_id,
            data,
        } => return commands::validate(template, section_id, data),
        Command::Progress {
            template,
            note_data,
        } => commands::progress(template, note_data)?,
        Command::Adapt { file } => commands::adapt(file, &config)?,
        Command::Score {
            assessment,
            responses,
        } => commands::score(assessment, responses)?,
        Command::InitConfig => commands::init_config(&config_path)?,
    }

    Ok(ExitCode::SUCCESS)
}
