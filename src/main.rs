mod cli;
mod clock;
mod config;
mod convert;
mod list_cmd;
mod logging;
mod project_cmd;
mod remind_cmd;
mod render;
mod session;
mod stats_cmd;
mod store;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::session::Session;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let session = Session::open(&cli.global)?;
    match cli.command {
        Command::List(args) => list_cmd::run(&session, args),
        Command::Stats(args) => stats_cmd::run(&session, args),
        Command::Remind => remind_cmd::run(&session),
        Command::Project(args) => project_cmd::run(&session, args),
    }
}
