//! CLI argument definitions for the approval portal.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use portal_model::{MonthWindow, Role};

#[derive(Parser)]
#[command(
    name = "approval-portal",
    version,
    about = "Approval portal - role-driven purchase workflow simulator",
    long_about = "Simulate a purchase approval workflow from the point of view of a\n\
                  single role: coordinator, supervisor, manager, vendor, finance\n\
                  officer or procurement officer.\n\n\
                  The record set lives in memory for the lifetime of one command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Walk the seeded scenario through every role and print each screen.
    Demo(DemoArgs),

    /// Apply a JSON intent script against the seeded record set.
    Script(ScriptArgs),

    /// Render one role's dashboard and exit.
    Dashboard(DashboardArgs),

    /// List the available roles and their landing views.
    Roles,
}

#[derive(Parser)]
pub struct DemoArgs {
    /// Month window to act in (default: the seeded 2026-01).
    #[arg(long = "window", value_name = "YYYY-MM")]
    pub window: Option<MonthWindow>,
}

#[derive(Parser)]
pub struct ScriptArgs {
    /// Path to a JSON array of intents.
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Print step results as JSON instead of text.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct DashboardArgs {
    /// Role whose dashboard to render (e.g. Coordinator, Vendor).
    #[arg(value_name = "ROLE")]
    pub role: Role,

    /// Month window to render (default: the seeded 2026-01).
    #[arg(long = "window", value_name = "YYYY-MM")]
    pub window: Option<MonthWindow>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
