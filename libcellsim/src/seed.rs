//! Helpers for putting an initial pattern on a grid.

use itertools::Itertools;

use crate::{
    error::{Result, SimError},
    grid::CellGrid,
    pos::{Position, positions},
};

/// Marks the listed `(y, x)` coordinates alive.
pub fn pattern<G>(grid: &mut G, alive: &[(usize, usize)]) -> Result<()>
where
    G: CellGrid + ?Sized,
{
    for &(y, x) in alive {
        grid.set_cell_state(y, x, 1)?;
    }

    Ok(())
}

/// Copies rows of `'0'`/`'1'` characters onto the grid, starting at the top left.
pub fn from_rows<G, S>(grid: &mut G, rows: &[S]) -> Result<()>
where
    G: CellGrid + ?Sized,
    S: AsRef<str>,
{
    for (y, row) in rows.iter().enumerate() {
        for (x, c) in row.as_ref().chars().enumerate() {
            let state = match c {
                '0' => 0,
                '1' => 1,
                other => return Err(SimError::InvalidPatternChar(other)),
            };

            grid.set_cell_state(y, x, state)?;
        }
    }

    Ok(())
}

/// Horizontal stripes two rows wide: rows with `y % 4` of 0 or 3 are alive,
/// all other rows dead.
pub fn stripes<G>(grid: &mut G) -> Result<()>
where
    G: CellGrid + ?Sized,
{
    for Position { y, x } in positions(grid.height(), grid.width()) {
        let alive = matches!(y % 4, 0 | 3);
        grid.set_cell_state(y, x, alive.into())?;
    }

    Ok(())
}

/// A 2x2 block of alive cells around the centre of the grid.
pub fn centre_block<G>(grid: &mut G) -> Result<()>
where
    G: CellGrid + ?Sized,
{
    let (height, width) = (grid.height(), grid.width());
    if height < 2 || width < 2 {
        return Err(SimError::InvalidDimensions { height, width });
    }

    let (cy, cx) = (height / 2, width / 2);
    pattern(grid, &[(cy - 1, cx - 1), (cy, cx - 1), (cy - 1, cx), (cy, cx)])
}

/// Makes `alive_cells` randomly chosen, distinct cells alive.
pub fn scatter<G>(grid: &mut G, alive_cells: usize) -> Result<()>
where
    G: CellGrid + ?Sized,
{
    let mut available_positions = positions(grid.height(), grid.width()).collect_vec();

    if alive_cells > available_positions.len() {
        return Err(SimError::TooManyAliveCells {
            requested: alive_cells,
            available: available_positions.len(),
        });
    }

    for _ in 0..alive_cells {
        let chosen_index = rand::random_range(0..available_positions.len());
        let Position { y, x } = available_positions.swap_remove(chosen_index);

        grid.set_cell_state(y, x, 1)?;
    }

    Ok(())
}
