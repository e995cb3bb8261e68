use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::{
    error::{Result, SimError},
    grid::CellGrid,
    pos::Position,
};

/// Counts the alive cells around a coordinate. Edges are hard boundaries:
/// offsets that leave the grid are skipped, so border cells have fewer neighbors.
pub trait NeighborhoodStrategy {
    /// `[dy, dx]` offsets of the neighborhood, never including `[0, 0]`.
    fn offsets(&self) -> &'static [[isize; 2]];

    fn compute_alive_neighbors(&self, grid: &dyn CellGrid, y: usize, x: usize) -> Result<u8> {
        if !grid.contains(y, x) {
            return Err(SimError::NeighborOutOfRange {
                y,
                x,
                height: grid.height(),
                width: grid.width(),
            });
        }

        let mut alive_count = 0;

        for offset in self.offsets() {
            let Some(neighbor) = Position::new(y, x).offset(*offset) else {
                continue;
            };

            if grid.contains(neighbor.y, neighbor.x) {
                alive_count += grid.cell_state(neighbor.y, neighbor.x)?;
            }
        }

        Ok(alive_count)
    }
}

/// The 8 surrounding cells, diagonals included.
#[derive(Debug, Clone, Copy, Default)]
pub struct MooreNeighborhood;

impl NeighborhoodStrategy for MooreNeighborhood {
    fn offsets(&self) -> &'static [[isize; 2]] {
        const MOORE_OFFSETS: &[[isize; 2]] = &[
            [-1, -1],
            [-1, 0],
            [-1, 1],
            [0, -1],
            [0, 1],
            [1, -1],
            [1, 0],
            [1, 1],
        ];

        MOORE_OFFSETS
    }
}

/// The 4 orthogonally adjacent cells.
#[derive(Debug, Clone, Copy, Default)]
pub struct VonNeumannNeighborhood;

impl NeighborhoodStrategy for VonNeumannNeighborhood {
    fn offsets(&self) -> &'static [[isize; 2]] {
        const VON_NEUMANN_OFFSETS: &[[isize; 2]] = &[
            [-1, 0], // up
            [0, 1],  // right
            [1, 0],  // down
            [0, -1], // left
        ];

        VON_NEUMANN_OFFSETS
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum NeighborhoodKind {
    Moore,
    VonNeumann,
}

impl NeighborhoodKind {
    pub fn strategy(self) -> Box<dyn NeighborhoodStrategy> {
        match self {
            NeighborhoodKind::Moore => Box::new(MooreNeighborhood),
            NeighborhoodKind::VonNeumann => Box::new(VonNeumannNeighborhood),
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use crate::{
        grid::{BackingKind, Grid},
        pos::positions,
    };

    use super::*;

    fn full_grid(kind: BackingKind, height: usize, width: usize) -> Grid {
        let mut grid = Grid::empty(kind, height, width).unwrap();
        for pos in positions(height, width) {
            grid.set_cell_state(pos.y, pos.x, 1).unwrap();
        }
        grid
    }

    #[test]
    fn full_grid_counts_depend_on_border_distance() {
        for kind in BackingKind::iter() {
            let grid = full_grid(kind, 5, 5);

            // corner, edge, interior
            assert_eq!(MooreNeighborhood.compute_alive_neighbors(&grid, 0, 0).unwrap(), 3);
            assert_eq!(MooreNeighborhood.compute_alive_neighbors(&grid, 0, 2).unwrap(), 5);
            assert_eq!(MooreNeighborhood.compute_alive_neighbors(&grid, 2, 2).unwrap(), 8);
            assert_eq!(MooreNeighborhood.compute_alive_neighbors(&grid, 4, 4).unwrap(), 3);

            assert_eq!(VonNeumannNeighborhood.compute_alive_neighbors(&grid, 0, 0).unwrap(), 2);
            assert_eq!(VonNeumannNeighborhood.compute_alive_neighbors(&grid, 4, 2).unwrap(), 3);
            assert_eq!(VonNeumannNeighborhood.compute_alive_neighbors(&grid, 2, 2).unwrap(), 4);
        }
    }

    #[test]
    fn counts_stay_within_neighborhood_size() {
        let mut grid = Grid::empty(BackingKind::Dense, 6, 7).unwrap();
        for pos in positions(6, 7).filter(|pos| (pos.y * 3 + pos.x) % 4 != 0) {
            grid.set_cell_state(pos.y, pos.x, 1).unwrap();
        }

        for pos in positions(6, 7) {
            assert!(MooreNeighborhood.compute_alive_neighbors(&grid, pos.y, pos.x).unwrap() <= 8);
            assert!(VonNeumannNeighborhood.compute_alive_neighbors(&grid, pos.y, pos.x).unwrap() <= 4);
        }
    }

    #[test]
    fn centre_cell_is_not_its_own_neighbor() {
        let mut grid = Grid::empty(BackingKind::Sparse, 3, 3).unwrap();
        grid.set_cell_state(1, 1, 1).unwrap();

        assert_eq!(MooreNeighborhood.compute_alive_neighbors(&grid, 1, 1).unwrap(), 0);
        assert_eq!(VonNeumannNeighborhood.compute_alive_neighbors(&grid, 1, 1).unwrap(), 0);
        assert_eq!(MooreNeighborhood.compute_alive_neighbors(&grid, 0, 0).unwrap(), 1);
        assert_eq!(VonNeumannNeighborhood.compute_alive_neighbors(&grid, 0, 0).unwrap(), 0);
        assert_eq!(VonNeumannNeighborhood.compute_alive_neighbors(&grid, 0, 1).unwrap(), 1);
    }

    #[test]
    fn edges_do_not_wrap() {
        let mut grid = Grid::empty(BackingKind::Dense, 3, 3).unwrap();
        grid.set_cell_state(0, 2, 1).unwrap();
        grid.set_cell_state(2, 0, 1).unwrap();

        assert_eq!(MooreNeighborhood.compute_alive_neighbors(&grid, 0, 0).unwrap(), 0);
    }

    #[test]
    fn rejects_coordinates_outside_the_grid() {
        let grid = Grid::empty(BackingKind::Dense, 2, 2).unwrap();

        for strategy in NeighborhoodKind::iter().map(NeighborhoodKind::strategy) {
            assert!(matches!(
                strategy.compute_alive_neighbors(&grid, 2, 0),
                Err(SimError::NeighborOutOfRange { y: 2, x: 0, .. })
            ));

            let err = strategy.compute_alive_neighbors(&grid, 0, 2).unwrap_err();
            assert!(err.to_string().ends_with("[NEIGHBORHOOD-400]"));
        }
    }

    #[test]
    fn kind_names() {
        assert_eq!(NeighborhoodKind::VonNeumann.to_string(), "von-neumann");
        assert_eq!("moore".parse::<NeighborhoodKind>().unwrap(), NeighborhoodKind::Moore);
    }
}
