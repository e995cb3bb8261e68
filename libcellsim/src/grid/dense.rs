use crate::{
    cell::{Cell, CellFactory},
    error::{Result, SimError},
    pos::{Position, positions},
};

use super::{BackingKind, CellGrid};

/// Grid backed by one contiguous row-major vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl DenseGrid {
    pub fn new<F>(height: usize, width: usize, cell_factory: &F) -> Result<Self>
    where
        F: CellFactory + ?Sized,
    {
        super::check_dimensions(height, width)?;

        let cells = positions(height, width)
            .map(|Position { y, x }| cell_factory.create_cell(y, x))
            .collect();

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Wraps caller-built rows. Every row must have the same length and every
    /// cell must sit at the coordinates it was created with.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        super::check_dimensions(height, width)?;

        let mut cells = Vec::with_capacity(width * height);

        for (y, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(SimError::RaggedRows {
                    row: y,
                    expected: width,
                    got: row.len(),
                });
            }

            for (x, cell) in row.into_iter().enumerate() {
                super::check_placement(&cell, y, x)?;
                cells.push(cell);
            }
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn enumerate_cells(&self) -> impl Iterator<Item = (Position, &Cell)> {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (self.index_to_pos(index), cell))
    }

    fn pos_to_index(&self, y: usize, x: usize) -> Result<usize> {
        self.check_bounds(y, x)?;
        Ok(x + (y * self.width))
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let y = index / self.width;
        let x = index % self.width;
        Position { y, x }
    }
}

impl CellGrid for DenseGrid {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn backing_kind(&self) -> BackingKind {
        BackingKind::Dense
    }

    fn cell(&self, y: usize, x: usize) -> Result<&Cell> {
        let index = self.pos_to_index(y, x)?;
        Ok(&self.cells[index])
    }

    fn cell_mut(&mut self, y: usize, x: usize) -> Result<&mut Cell> {
        let index = self.pos_to_index(y, x)?;
        Ok(&mut self.cells[index])
    }
}
