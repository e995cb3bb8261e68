use crate::{
    error::{Result, SimError},
    grid::{CellGrid, Grid},
    pos::positions,
};

/// The two grid buffers of a run plus the step counter.
///
/// `previous_grid` is what a step reads from (and where neighbor counts are
/// cached), `current_grid` is where the step's results are written.
#[derive(Debug, Clone)]
pub struct SimulationState {
    current_grid: Grid,
    previous_grid: Grid,
    current_step: u64,
}

impl SimulationState {
    pub fn new(current_grid: Grid, previous_grid: Grid, current_step: u64) -> Result<Self> {
        check_step(current_step)?;

        Ok(Self {
            current_grid,
            previous_grid,
            current_step,
        })
    }

    pub fn current_grid(&self) -> &Grid {
        &self.current_grid
    }

    pub fn current_grid_mut(&mut self) -> &mut Grid {
        &mut self.current_grid
    }

    pub fn set_current_grid(&mut self, grid: Grid) {
        self.current_grid = grid;
    }

    pub fn previous_grid(&self) -> &Grid {
        &self.previous_grid
    }

    pub fn previous_grid_mut(&mut self) -> &mut Grid {
        &mut self.previous_grid
    }

    pub fn set_previous_grid(&mut self, grid: Grid) {
        self.previous_grid = grid;
    }

    /// Reads from the previous grid while writing into the current one.
    pub fn grids_mut(&mut self) -> (&Grid, &mut Grid) {
        (&self.previous_grid, &mut self.current_grid)
    }

    pub fn current_step(&self) -> u64 {
        self.current_step
    }

    pub fn set_current_step(&mut self, step: u64) -> Result<()> {
        check_step(step)?;
        self.current_step = step;
        Ok(())
    }

    pub fn advance_step(&mut self) {
        self.current_step += 1;
    }

    /// Copies every cell state of the current grid into the previous grid.
    ///
    /// This is a value copy, the buffers are never swapped: after it the previous
    /// grid holds the new generation while keeping its own cells (and their cached
    /// neighbor counts from this step).
    pub fn transfer_current_to_previous(&mut self) -> Result<()> {
        let (height, width) = (self.previous_grid.height(), self.previous_grid.width());

        for pos in positions(height, width) {
            let state = self.current_grid.cell_state(pos.y, pos.x)?;
            self.previous_grid.set_cell_state(pos.y, pos.x, state)?;
        }

        Ok(())
    }
}

fn check_step(step: u64) -> Result<()> {
    if step < 1 {
        return Err(SimError::InvalidStep(step));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::grid::BackingKind;

    use super::*;

    fn state_with(kind: BackingKind) -> SimulationState {
        let current = Grid::empty(kind, 3, 3).unwrap();
        let previous = Grid::empty(kind, 3, 3).unwrap();
        SimulationState::new(current, previous, 1).unwrap()
    }

    #[test]
    fn step_must_be_positive() {
        let grid = Grid::empty(BackingKind::Dense, 1, 1).unwrap();

        assert!(matches!(
            SimulationState::new(grid.clone(), grid.clone(), 0),
            Err(SimError::InvalidStep(0))
        ));

        let mut state = SimulationState::new(grid.clone(), grid, 1).unwrap();
        assert!(state.set_current_step(0).is_err());
        assert_eq!(state.current_step(), 1);

        state.set_current_step(41).unwrap();
        state.advance_step();
        assert_eq!(state.current_step(), 42);
    }

    #[test]
    fn transfer_copies_values_without_aliasing() {
        let mut state = state_with(BackingKind::Sparse);
        state.current_grid_mut().set_cell_state(0, 2, 1).unwrap();
        state.current_grid_mut().set_cell_state(2, 1, 1).unwrap();
        state.previous_grid_mut().set_cell_state(1, 1, 1).unwrap();
        state.previous_grid_mut().set_alive_neighbors(1, 1, 2).unwrap();

        state.transfer_current_to_previous().unwrap();

        assert_eq!(state.previous_grid().cell_state(0, 2).unwrap(), 1);
        assert_eq!(state.previous_grid().cell_state(2, 1).unwrap(), 1);
        assert_eq!(state.previous_grid().cell_state(1, 1).unwrap(), 0);
        // Neighbor counts stay with the buffer they were cached in.
        assert_eq!(state.previous_grid().cell(1, 1).unwrap().alive_neighbors(), 2);

        // Later writes to the current grid don't leak into the previous one.
        state.current_grid_mut().set_cell_state(0, 2, 0).unwrap();
        assert_eq!(state.previous_grid().cell_state(0, 2).unwrap(), 1);
    }

    #[test]
    fn grids_can_be_replaced() {
        let mut state = state_with(BackingKind::Dense);
        state.set_previous_grid(Grid::empty(BackingKind::Sparse, 3, 3).unwrap());
        state.set_current_grid(Grid::empty(BackingKind::Sparse, 3, 3).unwrap());

        assert_eq!(state.previous_grid().backing_kind(), BackingKind::Sparse);
        assert_eq!(state.current_grid().backing_kind(), BackingKind::Sparse);
    }
}
