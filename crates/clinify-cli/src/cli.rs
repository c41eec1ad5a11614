use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(
    name = "clinify",
    version,
    about = "Normalize, merge and check clinical note templates"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Log output format; falls back to the tool config, then pretty.
    #[arg(long = "log-format", value_enum, global = true)]
    pub log_format: Option<LogFormat>,

    /// Tool config file (default: $CLINIFY_CONFIG or the user config dir).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse a template file and print its normalized form.
    Normalize {
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the default template for a discipline and note type.
    Default {
        /// Discipline code (PT, OT, ST, ...).
        discipline: String,
        /// Note type (Evaluation, Visit, ...).
        note_type: String,
        /// Partial template to merge over the default.
        #[arg(long = "override", value_name = "FILE")]
        override_file: Option<PathBuf>,
        /// Fill section defaults after merging.
        #[arg(long)]
        normalize: bool,
    },

    /// Validate a section's data against its field rules.
    Validate {
        #[arg(value_name = "TEMPLATE")]
        template: PathBuf,
        #[arg(value_name = "SECTION_ID")]
        section_id: String,
        #[arg(value_name = "DATA")]
        data: PathBuf,
    },

    /// Print section navigation and completion for a note.
    Progress {
        #[arg(value_name = "TEMPLATE")]
        template: PathBuf,
        /// Note data object keyed by section id.
        #[arg(value_name = "NOTE_DATA")]
        note_data: PathBuf,
    },

    /// Adapt a backend template-service response into a template config.
    Adapt {
        #[arg(value_name = "BACKEND_JSON")]
        file: PathBuf,
    },

    /// Score a standardized assessment form (barthel, slums, fall_risk).
    Score {
        #[arg(value_name = "ASSESSMENT")]
        assessment: String,
        /// Responses object keyed by item id.
        #[arg(value_name = "RESPONSES")]
        responses: PathBuf,
    },

    /// Write a default tool config file.
    InitConfig,
}
