//! Error type shared by every engine component.
//!
//! Messages end with the component error code (`COMPONENT-STATUS`) so that
//! reports from the front end can be matched against the engine's taxonomy.

use std::io;

use colored::Colorize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SimError>;

#[derive(Debug, Error)]
pub enum SimError {
    /// A grid was asked for with a zero height or width.
    #[error("height and width of a grid must be greater than 0, got {height}x{width} [GRID_STRUCTURE-400]")]
    InvalidDimensions { height: usize, width: usize },

    /// Rows handed to a grid were not all the same length.
    #[error("row {row} has {got} cells, expected {expected} [GRID_STRUCTURE-402]")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// A caller-supplied cell sits in a slot that doesn't match its own coordinates.
    #[error("cell ({cell_y}, {cell_x}) was placed at ({y}, {x}) [GRID_STRUCTURE-403]")]
    MisplacedCell {
        y: usize,
        x: usize,
        cell_y: usize,
        cell_x: usize,
    },

    /// A caller-supplied sparse grid has no cell for a coordinate inside its bounds.
    #[error("no cell stored for ({y}, {x}) [GRID_STRUCTURE-404]")]
    MissingCell { y: usize, x: usize },

    /// A sparse map carries an entry that no coordinate inside the bounds owns.
    #[error("unexpected cell entry {key:?} outside of the {height}x{width} grid [GRID_STRUCTURE-405]")]
    StrayCell {
        key: String,
        height: usize,
        width: usize,
    },

    #[error("position ({y}, {x}) lies outside of the {height}x{width} grid [GRID_STRUCTURE-401]")]
    OutOfRange {
        y: usize,
        x: usize,
        height: usize,
        width: usize,
    },

    #[error("neighbors requested for ({y}, {x}), outside of the {height}x{width} grid [NEIGHBORHOOD-400]")]
    NeighborOutOfRange {
        y: usize,
        x: usize,
        height: usize,
        width: usize,
    },

    #[error("invalid number of alive neighbors: {count}, allowed are 0 to {max} [RULESET-400]")]
    InvalidNeighborCount { count: u8, max: u8 },

    /// Written to a cell, as opposed to handed to a rule set.
    #[error("a cell can't have {count} alive neighbors, allowed are 0 to {max} [CELL-402]")]
    InvalidAliveNeighbors { count: u8, max: u8 },

    #[error("invalid cell state: {0}, must be 0 (dead) or 1 (alive) [CELL-401]")]
    InvalidState(u8),

    #[error("invalid pattern character {0:?}, must be '0' or '1' [CELL-403]")]
    InvalidPatternChar(char),

    #[error("max steps must be positive [TERMINATOR-400]")]
    InvalidMaxSteps,

    #[error(
        "can't compare a {current_height}x{current_width} grid with a \
         {previous_height}x{previous_width} one [TERMINATOR-403]"
    )]
    ShapeMismatch {
        current_height: usize,
        current_width: usize,
        previous_height: usize,
        previous_width: usize,
    },

    #[error("the current simulation step has to be at least 1, got {0} [SIMULATION_STATE-400]")]
    InvalidStep(u64),

    #[error("grid backing kind {0:?} is not supported [GRID_STRUCTURE-500]")]
    UnsupportedBackingKind(String),

    #[error("can't place {requested} alive cells on a grid with {available} cells [SEED-400]")]
    TooManyAliveCells { requested: usize, available: usize },

    #[error("couldn't write simulation log [LOGGER-500]")]
    Io(#[from] io::Error),
}

/// Receives errors that escape a simulation run.
pub trait ErrorReporter {
    fn report(&mut self, err: &SimError);
}

/// Prints errors to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrReporter;

impl ErrorReporter for StderrReporter {
    fn report(&mut self, err: &SimError) {
        eprintln!("{} An error has occurred in the simulation: {err}", "!".red());

        if let SimError::Io(source) = err {
            eprintln!("  {}", source.to_string().red());
        }
    }
}
