#[cfg(test)]
#[path = "../../tests/unit/commands/run_test.rs"]
mod run_test;

use super::*;
use kohonen::prelude::{DefaultRandom, Environment, InfoLogger, Random};
use kohonen_cli::extensions::config::{Config, read_config};
use kohonen_cli::extensions::experiment::{run_experiment, write_report};
use std::io::BufReader;
use std::sync::Arc;

const CONFIG_ARG_NAME: &str = "config";
const SEED_ARG_NAME: &str = "seed";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const LOG_ARG_NAME: &str = "log";

pub fn get_run_app() -> Command {
    Command::new("run")
        .about("Trains a map on two-link arm samples and estimates hand positions from motor positions")
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to the file with experiment configuration")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Specifies a seed of random generator to get repeatable results")
                .short('s')
                .long(SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether training progress is written to stderr")
                .short('l')
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

pub fn run_experiment_command(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    let config = match matches.get_one::<String>(CONFIG_ARG_NAME) {
        Some(path) => read_config(BufReader::new(open_file(path, "config")?))?,
        None => Config::default(),
    };

    let seed = parse_int_value::<u64>(matches, SEED_ARG_NAME, "seed")?;
    let environment = create_environment(seed, matches.get_flag(LOG_ARG_NAME));

    let report = run_experiment(&config, &environment).map_err(|err| format!("cannot run experiment: '{err}'"))?;

    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result"));
    let out_result = out_result.transpose()?;

    write_report(out_writer_func(out_result), &report)
}

fn create_environment(seed: Option<u64>, is_logging: bool) -> Environment {
    let random: Arc<dyn Random> = match seed {
        Some(seed) => Arc::new(DefaultRandom::new_repeatable(seed)),
        None => Arc::new(DefaultRandom::default()),
    };

    let logger: InfoLogger = if is_logging { Arc::new(|msg: &str| eprintln!("{msg}")) } else { Arc::new(|_: &str| {}) };

    Environment::new(random, logger)
}
