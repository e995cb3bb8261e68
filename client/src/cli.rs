use std::io::{self, BufRead, Lines, Write};

use anyhow::{Context, bail};
use colored::Colorize;
use libcellsim::{logger::LoggerKind, terminator::FixedStepTerminator};
use strum::IntoEnumIterator;

use crate::{
    config::{ExperimentConfig, TerminatorConfig},
    experiment::Experiment,
};

/// Numeric menu on top of a line-based input. Invalid selections and input that
/// isn't a number are reported and asked again; running out of input closes
/// the dialogue like choosing 0 does.
pub struct Dialogue<R, W> {
    lines: Lines<R>,
    output: W,
}

impl<R, W> Dialogue<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self {
            lines: input.lines(),
            output,
        }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        while let Some((experiment, config)) = self.next_experiment()? {
            match config.build_controller() {
                Ok(mut controller) => {
                    if let Some(last_step) = controller.run() {
                        writeln!(
                            self.output,
                            "{} {experiment} stopped at step {last_step}",
                            "OK".green()
                        )?;
                    }
                }
                Err(e) => eprintln!("{} {e:?}", "!".red()),
            }
        }

        writeln!(self.output, "Application was closed.")?;
        Ok(())
    }

    /// Asks for an experiment, a terminator and a logger. `None` means the user is done.
    pub fn next_experiment(&mut self) -> anyhow::Result<Option<(Experiment, ExperimentConfig)>> {
        let Some(experiment) = self.ask(&experiment_menu(), parse_experiment)? else {
            return Ok(None);
        };
        let Some(experiment) = experiment else {
            return Ok(None);
        };

        let Some(terminator) = self.ask_terminator()? else {
            return Ok(None);
        };

        let logger_menu = "Which logger do you want to use?\n\
            (1) Discard output\n\
            (2) Console\n\
            (3) File\n\
            (4) Console and file";
        let Some(logger) = self.ask(logger_menu, parse_logger)? else {
            return Ok(None);
        };

        Ok(Some((experiment, experiment.config(terminator, logger))))
    }

    fn ask_terminator(&mut self) -> anyhow::Result<Option<TerminatorConfig>> {
        let terminator_menu = "Which terminator do you want to use?\n\
            (1) Fixed number of steps\n\
            (2) Stable state\n\
            (3) Fixed number of steps or stable state";

        let Some(selection) = self.ask(terminator_menu, |number| match number {
            1..=3 => Ok(number),
            _ => bail!(
                "Invalid terminator selection. Please enter a number between 1 and 3. [UI-401]"
            ),
        })?
        else {
            return Ok(None);
        };

        if selection == 2 {
            return Ok(Some(TerminatorConfig::StableState));
        }

        let Some(max_steps) = self.ask("What are the max steps of the simulation?", |number| {
            FixedStepTerminator::new(number)?;
            Ok(number)
        })?
        else {
            return Ok(None);
        };

        Ok(Some(if selection == 1 {
            TerminatorConfig::FixedStep { max_steps }
        } else {
            TerminatorConfig::Combined { max_steps }
        }))
    }

    fn ask<T, F>(&mut self, prompt: &str, parse: F) -> anyhow::Result<Option<T>>
    where
        F: Fn(u64) -> anyhow::Result<T>,
    {
        loop {
            writeln!(self.output, "{}", prompt.bold())?;
            self.output.flush()?;

            let Some(line_res) = self.lines.next() else {
                return Ok(None);
            };
            let line = line_res.context("Couldn't read input")?;

            match parse_number(&line).and_then(&parse) {
                Ok(value) => return Ok(Some(value)),
                Err(e) => eprintln!("{} {e}", "!".red()),
            }
        }
    }
}

pub fn run_dialogue() -> anyhow::Result<()> {
    Dialogue::new(io::stdin().lock(), io::stdout()).run()
}

fn experiment_menu() -> String {
    let mut menu = String::from("Which experiment do you want to execute?\n(0) Close the application");

    for (index, experiment) in Experiment::iter().enumerate() {
        menu.push_str(&format!("\n({}) {experiment}", index + 1));
    }

    menu
}

fn parse_number(line: &str) -> anyhow::Result<u64> {
    line.trim()
        .parse::<u64>()
        .context("Invalid input. Please enter a number. [UI-404]")
}

/// `Ok(None)` is the request to close the application.
fn parse_experiment(number: u64) -> anyhow::Result<Option<Experiment>> {
    if number == 0 {
        return Ok(None);
    }

    match Experiment::from_menu_number(number) {
        Some(experiment) => Ok(Some(experiment)),
        None => bail!(
            "Invalid experiment selection. Please enter a number between 0 and {}. [UI-400]",
            Experiment::count()
        ),
    }
}

fn parse_logger(number: u64) -> anyhow::Result<LoggerKind> {
    Ok(match number {
        1 => LoggerKind::Null,
        2 => LoggerKind::Console,
        3 => LoggerKind::File,
        4 => LoggerKind::Combined,
        _ => bail!("Invalid logger selection. Please enter a number between 1 and 4. [UI-402]"),
    })
}
