use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, SimError},
    pos::Position,
};

/// Highest alive neighbor count any supported neighborhood can produce.
pub const MAX_ALIVE_NEIGHBORS: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellState {
    Alive,

    #[default]
    Dead,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }
}

impl From<CellState> for u8 {
    fn from(value: CellState) -> Self {
        match value {
            CellState::Alive => 1,
            CellState::Dead => 0,
        }
    }
}

impl TryFrom<u8> for CellState {
    type Error = SimError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(CellState::Dead),
            1 => Ok(CellState::Alive),
            other => Err(SimError::InvalidState(other)),
        }
    }
}

/// A single grid element. Its position is fixed at construction; state and the
/// cached neighbor count are rewritten every step and validated on each write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pos: Position,
    state: CellState,
    alive_neighbors: u8,
}

impl Cell {
    pub fn new(y: usize, x: usize) -> Self {
        Self {
            pos: Position { y, x },
            state: CellState::Dead,
            alive_neighbors: 0,
        }
    }

    pub fn position(&self) -> Position {
        self.pos
    }

    pub fn y(&self) -> usize {
        self.pos.y
    }

    pub fn x(&self) -> usize {
        self.pos.x
    }

    /// Current state as 0 (dead) or 1 (alive).
    pub fn state(&self) -> u8 {
        self.state.into()
    }

    pub fn cell_state(&self) -> CellState {
        self.state
    }

    pub fn set_state(&mut self, state: u8) -> Result<()> {
        self.state = CellState::try_from(state)?;
        Ok(())
    }

    pub fn alive_neighbors(&self) -> u8 {
        self.alive_neighbors
    }

    pub fn set_alive_neighbors(&mut self, count: u8) -> Result<()> {
        if count > MAX_ALIVE_NEIGHBORS {
            return Err(SimError::InvalidAliveNeighbors {
                count,
                max: MAX_ALIVE_NEIGHBORS,
            });
        }

        self.alive_neighbors = count;
        Ok(())
    }
}

pub trait CellFactory {
    fn create_cell(&self, y: usize, x: usize) -> Cell;
}

/// Creates dead cells with no alive neighbors.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCellFactory;

impl CellFactory for DefaultCellFactory {
    fn create_cell(&self, y: usize, x: usize) -> Cell {
        Cell::new(y, x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_dead_and_lonely() {
        let cell = DefaultCellFactory.create_cell(3, 5);

        assert_eq!(cell.y(), 3);
        assert_eq!(cell.x(), 5);
        assert_eq!(cell.state(), 0);
        assert_eq!(cell.alive_neighbors(), 0);
    }

    #[test]
    fn state_write_is_validated() {
        let mut cell = Cell::new(0, 0);

        cell.set_state(1).unwrap();
        assert_eq!(cell.state(), 1);
        assert!(cell.cell_state().is_alive());

        assert!(matches!(cell.set_state(2), Err(SimError::InvalidState(2))));
        // A rejected write leaves the previous state in place.
        assert_eq!(cell.state(), 1);
    }

    #[test]
    fn neighbor_count_write_is_validated() {
        let mut cell = Cell::new(0, 0);

        cell.set_alive_neighbors(8).unwrap();
        assert_eq!(cell.alive_neighbors(), 8);

        assert!(matches!(
            cell.set_alive_neighbors(9),
            Err(SimError::InvalidAliveNeighbors { count: 9, max: 8 })
        ));
        assert!(cell.set_alive_neighbors(9).unwrap_err().to_string().ends_with("[CELL-402]"));
        assert_eq!(cell.alive_neighbors(), 8);
    }

    #[test]
    fn cell_state_converts_from_raw() {
        assert_eq!(CellState::try_from(0).unwrap(), CellState::Dead);
        assert_eq!(CellState::try_from(1).unwrap(), CellState::Alive);
        assert!(CellState::try_from(7).is_err());
        assert_eq!(u8::from(CellState::Alive), 1);
    }
}
