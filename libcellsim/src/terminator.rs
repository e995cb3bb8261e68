use crate::{
    error::{Result, SimError},
    grid::CellGrid,
    pos::positions,
    state::SimulationState,
};

/// Decides after every step whether the run should stop.
pub trait Terminator {
    fn should_terminate(&self, state: &SimulationState) -> Result<bool>;
}

/// Stops once the step counter has passed `max_steps`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedStepTerminator {
    max_steps: u64,
}

impl FixedStepTerminator {
    pub fn new(max_steps: u64) -> Result<Self> {
        if max_steps == 0 {
            return Err(SimError::InvalidMaxSteps);
        }

        Ok(Self { max_steps })
    }

    pub fn max_steps(&self) -> u64 {
        self.max_steps
    }
}

impl Terminator for FixedStepTerminator {
    fn should_terminate(&self, state: &SimulationState) -> Result<bool> {
        Ok(state.current_step() > self.max_steps)
    }
}

/// Stops once a step produced no change, i.e. the current grid equals the previous one.
#[derive(Debug, Clone, Copy, Default)]
pub struct StableStateTerminator;

impl Terminator for StableStateTerminator {
    fn should_terminate(&self, state: &SimulationState) -> Result<bool> {
        let current_grid = state.current_grid();
        let previous_grid = state.previous_grid();

        if (current_grid.height(), current_grid.width())
            != (previous_grid.height(), previous_grid.width())
        {
            return Err(SimError::ShapeMismatch {
                current_height: current_grid.height(),
                current_width: current_grid.width(),
                previous_height: previous_grid.height(),
                previous_width: previous_grid.width(),
            });
        }

        for pos in positions(current_grid.height(), current_grid.width()) {
            if current_grid.cell_state(pos.y, pos.x)? != previous_grid.cell_state(pos.y, pos.x)? {
                return Ok(false);
            }
        }

        Ok(true)
    }
}

/// Stops on whichever of [`FixedStepTerminator`] and [`StableStateTerminator`] fires first.
#[derive(Debug, Clone, Copy)]
pub struct CombinedTerminator {
    fixed_step: FixedStepTerminator,
    stable_state: StableStateTerminator,
}

impl CombinedTerminator {
    pub fn new(max_steps: u64) -> Result<Self> {
        Ok(Self {
            fixed_step: FixedStepTerminator::new(max_steps)?,
            stable_state: StableStateTerminator,
        })
    }
}

impl Terminator for CombinedTerminator {
    fn should_terminate(&self, state: &SimulationState) -> Result<bool> {
        // Both are evaluated so that an error from either one surfaces.
        let fixed_step_reached = self.fixed_step.should_terminate(state)?;
        let stable = self.stable_state.should_terminate(state)?;

        Ok(fixed_step_reached || stable)
    }
}
