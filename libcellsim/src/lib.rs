//! Discrete 2-D cellular automata.
//!
//! A [`SimulationController`] repeatedly counts alive neighbors with a
//! [`NeighborhoodStrategy`], applies a [`RuleSet`] into a scratch grid, asks a
//! [`Terminator`] whether to stop and copies the new generation back, handing a
//! snapshot of every step to a [`Logger`].

use error::{ErrorReporter, Result, StderrReporter};
use grid::{CellGrid, Grid, GridFactory};
use logger::Logger;
use neighborhood::NeighborhoodStrategy;
use pos::positions;
use rule::RuleSet;
use state::SimulationState;
use terminator::Terminator;

pub mod cell;
pub mod error;
pub mod grid;
pub mod logger;
pub mod neighborhood;
pub mod pos;
pub mod rule;
pub mod seed;
pub mod state;
pub mod terminator;

pub struct SimulationController {
    state: SimulationState,
    rule_set: Box<dyn RuleSet>,
    neighborhood: Box<dyn NeighborhoodStrategy>,
    terminator: Box<dyn Terminator>,
    logger: Box<dyn Logger>,
    error_reporter: Box<dyn ErrorReporter>,
}

impl SimulationController {
    /// Sets up a run starting from `grid`. The scratch grid for the next
    /// generation comes from `grid_factory`, and the step counter starts at 1.
    pub fn new<GF>(
        grid: Grid,
        grid_factory: &GF,
        rule_set: Box<dyn RuleSet>,
        neighborhood: Box<dyn NeighborhoodStrategy>,
        terminator: Box<dyn Terminator>,
        logger: Box<dyn Logger>,
    ) -> Result<Self>
    where
        GF: GridFactory + ?Sized,
    {
        let scratch_grid = grid_factory.create_grid(&grid)?;
        let state = SimulationState::new(scratch_grid, grid, 1)?;

        Ok(Self::with_state(
            state,
            rule_set,
            neighborhood,
            terminator,
            logger,
        ))
    }

    /// Sets up a run from an already built state. Its previous grid is the seed.
    pub fn with_state(
        state: SimulationState,
        rule_set: Box<dyn RuleSet>,
        neighborhood: Box<dyn NeighborhoodStrategy>,
        terminator: Box<dyn Terminator>,
        logger: Box<dyn Logger>,
    ) -> Self {
        Self {
            state,
            rule_set,
            neighborhood,
            terminator,
            logger,
            error_reporter: Box::new(StderrReporter),
        }
    }

    pub fn with_error_reporter(mut self, error_reporter: Box<dyn ErrorReporter>) -> Self {
        self.error_reporter = error_reporter;
        self
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn into_state(self) -> SimulationState {
        self.state
    }

    /// Runs until the terminator fires. An error aborts the run and is handed to
    /// the error reporter; nothing is rolled back.
    ///
    /// Returns the step at which the terminator fired, or `None` if the run was aborted.
    pub fn run(&mut self) -> Option<u64> {
        match self.try_run() {
            Ok(last_step) => Some(last_step),
            Err(e) => {
                self.error_reporter.report(&e);
                None
            }
        }
    }

    /// Like [`SimulationController::run`] but hands the error back instead of reporting it.
    pub fn try_run(&mut self) -> Result<u64> {
        self.logger.log(self.state.previous_grid(), 0)?;

        loop {
            let step = self.state.current_step();

            self.count_alive_neighbors()?;
            self.apply_rule_set()?;

            let terminate = self.terminator.should_terminate(&self.state)?;

            self.state.transfer_current_to_previous()?;

            if terminate {
                self.logger.log_end_of_simulation()?;
            } else {
                self.logger.log(self.state.current_grid(), step)?;
            }

            self.state.advance_step();

            if terminate {
                return Ok(step);
            }
        }
    }

    fn count_alive_neighbors(&mut self) -> Result<()> {
        let grid = self.state.previous_grid_mut();

        for pos in positions(grid.height(), grid.width()) {
            let alive_neighbors = self
                .neighborhood
                .compute_alive_neighbors(&*grid, pos.y, pos.x)?;

            grid.set_alive_neighbors(pos.y, pos.x, alive_neighbors)?;
        }

        Ok(())
    }

    // NOTE: Must only run after count_alive_neighbors has finished for the whole
    //       grid, since it reads the neighbor counts cached on the previous grid.
    fn apply_rule_set(&mut self) -> Result<()> {
        let (previous_grid, current_grid) = self.state.grids_mut();

        for pos in positions(previous_grid.height(), previous_grid.width()) {
            let cell = previous_grid.cell(pos.y, pos.x)?;
            let next_state = self.rule_set.compute_next_state(cell)?;

            current_grid.set_cell_state(pos.y, pos.x, next_state)?;
        }

        Ok(())
    }
}
