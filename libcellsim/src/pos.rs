use itertools::Itertools;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub y: usize,
    pub x: usize,
}

impl Position {
    pub fn new(y: usize, x: usize) -> Self {
        Self { y, x }
    }

    /// Applies a `[dy, dx]` offset, returning `None` when the result would go below zero.
    pub fn offset(self, [dy, dx]: [isize; 2]) -> Option<Position> {
        Some(Position {
            y: self.y.checked_add_signed(dy)?,
            x: self.x.checked_add_signed(dx)?,
        })
    }

    /// Key used by the sparse grid backing.
    pub fn sparse_key(self) -> String {
        format!("{},{}", self.y, self.x)
    }
}

impl From<(usize, usize)> for Position {
    fn from((y, x): (usize, usize)) -> Self {
        Self { y, x }
    }
}

impl From<Position> for (usize, usize) {
    fn from(value: Position) -> Self {
        (value.y, value.x)
    }
}

/// All positions of a `height` x `width` grid in row-major order.
pub fn positions(height: usize, width: usize) -> impl Iterator<Item = Position> {
    (0..height)
        .cartesian_product(0..width)
        .map(|(y, x)| Position { y, x })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_stops_at_zero() {
        let origin = Position::new(0, 0);

        assert_eq!(origin.offset([-1, 0]), None);
        assert_eq!(origin.offset([0, -1]), None);
        assert_eq!(origin.offset([1, 1]), Some(Position::new(1, 1)));
    }

    #[test]
    fn positions_are_row_major() {
        let all = positions(2, 3).map(<(usize, usize)>::from).collect_vec();

        assert_eq!(all, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn sparse_key_is_row_then_column() {
        assert_eq!(Position::new(4, 17).sparse_key(), "4,17");
    }
}
