use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Cake birthday tracker.
#[derive(Parser)]
#[command(
    name = "cake",
    version,
    about = "Birthday countdowns, ages and reminders"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Options shared by every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Options accepted before or after any subcommand.
#[derive(clap::Args)]
pub struct GlobalArgs {
    /// Path to TOML configuration file [default: cake.toml, optional].
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override roster JSON path from config.
    #[arg(short, long, global = true)]
    pub roster: Option<PathBuf>,

    /// Reference date (YYYY-MM-DD or DD/MM/YYYY) instead of the local clock.
    #[arg(long, global = true)]
    pub today: Option<String>,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// List birthdays with countdowns.
    List(ListArgs),
    /// Show roster statistics.
    Stats(StatsArgs),
    /// Show reminders due today.
    Remind,
    /// Project a single birth date.
    Project(ProjectArgs),
}

/// Arguments for the `list` subcommand.
#[derive(clap::Args)]
pub struct ListArgs {
    /// Keep one urgency tier: all, urgent, soon, upcoming, distant.
    #[arg(short, long)]
    pub tier: Option<String>,

    /// Ordering: proximity, name, name-desc. Overrides config.
    #[arg(short, long)]
    pub sort: Option<String>,

    /// Case-insensitive text to find in names and descriptions.
    #[arg(long)]
    pub search: Option<String>,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `stats` subcommand.
#[derive(clap::Args)]
pub struct StatsArgs {
    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `project` subcommand.
#[derive(clap::Args)]
pub struct ProjectArgs {
    /// Birth date, YYYY-MM-DD or DD/MM/YYYY.
    pub birth_date: String,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}
