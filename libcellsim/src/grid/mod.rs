//! Grid storage.
//!
//! Two backings exist, [`DenseGrid`] and [`SparseGrid`], with identical
//! observable behavior. [`Grid`] tags which one is in use so that a
//! [`GridFactory`] can allocate a same-shaped scratch grid without the rest of
//! the engine caring about the backing.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::{
    cell::{Cell, CellFactory, DefaultCellFactory},
    error::{Result, SimError},
    pos::positions,
};

pub use dense::DenseGrid;
pub use sparse::SparseGrid;

pub mod dense;
pub mod sparse;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(try_from = "String", into = "String")]
pub enum BackingKind {
    Dense,
    Sparse,
}

impl BackingKind {
    pub fn from_name(name: &str) -> Result<Self> {
        name.trim()
            .parse()
            .map_err(|_| SimError::UnsupportedBackingKind(name.to_owned()))
    }
}

impl TryFrom<String> for BackingKind {
    type Error = SimError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_name(&value)
    }
}

impl From<BackingKind> for String {
    fn from(value: BackingKind) -> Self {
        value.to_string()
    }
}

/// Rectangular, fixed-size collection of cells addressed by `(y, x)`.
///
/// Every coordinate-taking method fails with [`SimError::OutOfRange`] when the
/// coordinate lies outside `[0, height) x [0, width)`.
pub trait CellGrid {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    fn backing_kind(&self) -> BackingKind;

    fn cell(&self, y: usize, x: usize) -> Result<&Cell>;

    fn cell_mut(&mut self, y: usize, x: usize) -> Result<&mut Cell>;

    fn cell_state(&self, y: usize, x: usize) -> Result<u8> {
        Ok(self.cell(y, x)?.state())
    }

    fn set_cell_state(&mut self, y: usize, x: usize, state: u8) -> Result<()> {
        self.cell_mut(y, x)?.set_state(state)
    }

    fn set_alive_neighbors(&mut self, y: usize, x: usize, count: u8) -> Result<()> {
        self.cell_mut(y, x)?.set_alive_neighbors(count)
    }

    fn contains(&self, y: usize, x: usize) -> bool {
        y < self.height() && x < self.width()
    }

    fn check_bounds(&self, y: usize, x: usize) -> Result<()> {
        if self.contains(y, x) {
            Ok(())
        } else {
            Err(SimError::OutOfRange {
                y,
                x,
                height: self.height(),
                width: self.width(),
            })
        }
    }

    fn alive_count(&self) -> usize {
        positions(self.height(), self.width())
            .filter(|pos| self.cell_state(pos.y, pos.x).is_ok_and(|state| state == 1))
            .count()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grid {
    Dense(DenseGrid),
    Sparse(SparseGrid),
}

impl Grid {
    pub fn new<F>(kind: BackingKind, height: usize, width: usize, cell_factory: &F) -> Result<Self>
    where
        F: CellFactory + ?Sized,
    {
        Ok(match kind {
            BackingKind::Dense => DenseGrid::new(height, width, cell_factory)?.into(),
            BackingKind::Sparse => SparseGrid::new(height, width, cell_factory)?.into(),
        })
    }

    /// All-dead grid of the given backing and shape.
    pub fn empty(kind: BackingKind, height: usize, width: usize) -> Result<Self> {
        Self::new(kind, height, width, &DefaultCellFactory)
    }

    fn storage(&self) -> &dyn CellGrid {
        match self {
            Grid::Dense(grid) => grid,
            Grid::Sparse(grid) => grid,
        }
    }

    fn storage_mut(&mut self) -> &mut dyn CellGrid {
        match self {
            Grid::Dense(grid) => grid,
            Grid::Sparse(grid) => grid,
        }
    }
}

impl From<DenseGrid> for Grid {
    fn from(value: DenseGrid) -> Self {
        Grid::Dense(value)
    }
}

impl From<SparseGrid> for Grid {
    fn from(value: SparseGrid) -> Self {
        Grid::Sparse(value)
    }
}

impl CellGrid for Grid {
    fn width(&self) -> usize {
        self.storage().width()
    }

    fn height(&self) -> usize {
        self.storage().height()
    }

    fn backing_kind(&self) -> BackingKind {
        self.storage().backing_kind()
    }

    fn cell(&self, y: usize, x: usize) -> Result<&Cell> {
        self.storage().cell(y, x)
    }

    fn cell_mut(&mut self, y: usize, x: usize) -> Result<&mut Cell> {
        self.storage_mut().cell_mut(y, x)
    }
}

/// Allocates the scratch grid a simulation writes its next generation into.
pub trait GridFactory {
    /// Returns an all-dead grid with the same backing kind and shape as `source`.
    fn create_grid(&self, source: &dyn CellGrid) -> Result<Grid>;
}

/// Allocates all-dead grids with [`DefaultCellFactory`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultGridFactory;

impl DefaultGridFactory {
    pub fn new() -> Self {
        Self
    }
}

impl GridFactory for DefaultGridFactory {
    fn create_grid(&self, source: &dyn CellGrid) -> Result<Grid> {
        Grid::empty(source.backing_kind(), source.height(), source.width())
    }
}
