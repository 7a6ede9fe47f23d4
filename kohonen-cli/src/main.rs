//! A command line interface to run *Kohonen map* experiments.
//!

mod commands;

use crate::commands::create_write_buffer;
use crate::commands::run::{get_run_app, run_experiment_command};
use clap::Command;
use std::process;

fn main() {
    let matches = Command::new("Kohonen map experiments")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to train Kohonen maps and query them for inverse estimates")
        .subcommand(get_run_app())
        .get_matches();

    let result = match matches.subcommand() {
        Some(("run", run_matches)) => run_experiment_command(run_matches, create_write_buffer),
        Some((name, _)) => Err(format!("unknown subcommand: '{name}'")),
        None => Err("no subcommand was used. Use -h to print help information.".to_string()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
