//! Sinks for per-step grid snapshots.
//!
//! Every sink renders the same text: a `### <step>` header followed by one line
//! of `0`/`1` characters per grid row.

use std::{
    fs::{self, OpenOptions},
    io::{self, Stdout, Write},
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::{error::Result, grid::CellGrid};

pub const END_OF_SIMULATION: &str = "END OF SIMULATION";

pub trait Logger {
    fn log(&mut self, grid: &dyn CellGrid, step: u64) -> Result<()>;

    fn log_end_of_simulation(&mut self) -> Result<()>;
}

pub fn render_grid(grid: &dyn CellGrid, step: u64) -> Result<String> {
    let mut rendered = format!("### {step}\n");

    for y in 0..grid.height() {
        let row = (0..grid.width())
            .map(|x| grid.cell_state(y, x).map(|state| char::from(b'0' + state)))
            .collect::<Result<String>>()?;

        rendered.push_str(&row);
        rendered.push('\n');
    }

    Ok(rendered)
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLogger;

impl Logger for NullLogger {
    fn log(&mut self, _grid: &dyn CellGrid, _step: u64) -> Result<()> {
        Ok(())
    }

    fn log_end_of_simulation(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Writes snapshots to stdout, or to any other writer.
#[derive(Debug)]
pub struct ConsoleLogger<W = Stdout> {
    writer: W,
}

impl ConsoleLogger {
    pub fn new() -> Self {
        Self {
            writer: io::stdout(),
        }
    }
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl<W> ConsoleLogger<W>
where
    W: Write,
{
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> Logger for ConsoleLogger<W>
where
    W: Write,
{
    fn log(&mut self, grid: &dyn CellGrid, step: u64) -> Result<()> {
        self.writer.write_all(render_grid(grid, step)?.as_bytes())?;
        Ok(())
    }

    fn log_end_of_simulation(&mut self) -> Result<()> {
        writeln!(self.writer, "{END_OF_SIMULATION}\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Appends snapshots to one text file per run. The file is reopened in append
/// mode for every write and never truncated.
#[derive(Debug, Clone)]
pub struct FileLogger {
    path: PathBuf,
}

impl FileLogger {
    pub const LOG_DIR: &'static str = "logs";

    /// Logs to `logs/log_<timestamp>.txt`, creating the directory if needed.
    pub fn new() -> Result<Self> {
        let file_name = format!(
            "log_{}.txt",
            chrono::Local::now().format("%Y%d%m_%H%M%S")
        );

        Self::with_path(Path::new(Self::LOG_DIR).join(file_name))
    }

    pub fn with_path<P>(path: P) -> Result<Self>
    where
        P: Into<PathBuf>,
    {
        let path = path.into();

        if let Some(parent_path) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent_path)?;
        }

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, text: &str) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        file.write_all(text.as_bytes())?;
        Ok(())
    }
}

impl Logger for FileLogger {
    fn log(&mut self, grid: &dyn CellGrid, step: u64) -> Result<()> {
        self.append(&render_grid(grid, step)?)
    }

    fn log_end_of_simulation(&mut self) -> Result<()> {
        self.append(&format!("{END_OF_SIMULATION}\n"))
    }
}

/// Forwards every call to each inner logger in order.
#[derive(Default)]
pub struct CombinedLogger {
    loggers: Vec<Box<dyn Logger>>,
}

impl CombinedLogger {
    pub fn new(loggers: Vec<Box<dyn Logger>>) -> Self {
        Self { loggers }
    }

    pub fn console_and_file() -> Result<Self> {
        Ok(Self::new(vec![
            Box::new(ConsoleLogger::new()),
            Box::new(FileLogger::new()?),
        ]))
    }
}

impl Logger for CombinedLogger {
    fn log(&mut self, grid: &dyn CellGrid, step: u64) -> Result<()> {
        for logger in &mut self.loggers {
            logger.log(grid, step)?;
        }

        Ok(())
    }

    fn log_end_of_simulation(&mut self) -> Result<()> {
        for logger in &mut self.loggers {
            logger.log_end_of_simulation()?;
        }

        Ok(())
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LoggerKind {
    Null,
    Console,
    File,
    Combined,
}

impl LoggerKind {
    pub fn logger(self) -> Result<Box<dyn Logger>> {
        Ok(match self {
            LoggerKind::Null => Box::new(NullLogger),
            LoggerKind::Console => Box::new(ConsoleLogger::new()),
            LoggerKind::File => Box::new(FileLogger::new()?),
            LoggerKind::Combined => Box::new(CombinedLogger::console_and_file()?),
        })
    }
}
