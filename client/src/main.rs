use std::{env, process::exit};

use colored::Colorize;
use config::ExperimentConfig;

mod cli;
mod config;
mod experiment;

fn main() {
    let mut args = env::args().skip(1);

    let result = match args.next() {
        Some(config_path) => run_config(&config_path),
        None => cli::run_dialogue(),
    };

    if let Err(e) = result {
        eprintln!("{} {e:?}", "!".red());
        exit(1);
    }
}

fn run_config(config_path: &str) -> anyhow::Result<()> {
    let config = ExperimentConfig::load(config_path)?;
    let mut controller = config.build_controller()?;

    if let Some(last_step) = controller.run() {
        println!("{} stopped at step {last_step}", "OK".green());
    }

    Ok(())
}
