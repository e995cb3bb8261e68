use std::collections::HashMap;

use crate::{
    cell::{Cell, CellFactory},
    error::{Result, SimError},
    pos::{Position, positions},
};

use super::{BackingKind, CellGrid};

/// Grid backed by a map from `"y,x"` keys to cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SparseGrid {
    width: usize,
    height: usize,
    cells: HashMap<String, Cell>,
}

impl SparseGrid {
    pub fn new<F>(height: usize, width: usize, cell_factory: &F) -> Result<Self>
    where
        F: CellFactory + ?Sized,
    {
        super::check_dimensions(height, width)?;

        let cells = positions(height, width)
            .map(|pos| (pos.sparse_key(), cell_factory.create_cell(pos.y, pos.x)))
            .collect();

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Wraps a caller-built map. Every coordinate inside the bounds needs an entry
    /// whose cell carries the same coordinates as its key, and no other entries
    /// may be present.
    pub fn from_cells(cells: HashMap<String, Cell>, height: usize, width: usize) -> Result<Self> {
        super::check_dimensions(height, width)?;

        for Position { y, x } in positions(height, width) {
            let cell = cells
                .get(&Position { y, x }.sparse_key())
                .ok_or(SimError::MissingCell { y, x })?;
            super::check_placement(cell, y, x)?;
        }

        // every in-bounds key is present, so anything beyond that count is stray
        if cells.len() > height * width {
            let key = cells
                .keys()
                .find(|key| !key_in_bounds(key, height, width))
                .cloned()
                .unwrap_or_default();

            return Err(SimError::StrayCell { key, height, width });
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    fn lookup_key(&self, y: usize, x: usize) -> Result<String> {
        self.check_bounds(y, x)?;
        Ok(Position { y, x }.sparse_key())
    }
}

fn key_in_bounds(key: &str, height: usize, width: usize) -> bool {
    let Some((y, x)) = key.split_once(',') else {
        return false;
    };

    matches!(
        (y.parse::<usize>(), x.parse::<usize>()),
        (Ok(y), Ok(x)) if y < height && x < width && Position { y, x }.sparse_key() == key
    )
}

impl CellGrid for SparseGrid {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn backing_kind(&self) -> BackingKind {
        BackingKind::Sparse
    }

    fn cell(&self, y: usize, x: usize) -> Result<&Cell> {
        let key = self.lookup_key(y, x)?;
        self.cells.get(&key).ok_or(SimError::MissingCell { y, x })
    }

    fn cell_mut(&mut self, y: usize, x: usize) -> Result<&mut Cell> {
        let key = self.lookup_key(y, x)?;
        self.cells.get_mut(&key).ok_or(SimError::MissingCell { y, x })
    }
}
