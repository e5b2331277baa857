use std::fmt::{Display, Formatter};

use super::Position;

impl Position {
    /// Create a new Position object based on the byte index, row and column number.
    pub fn new(index: usize, row: usize, col: usize) -> Self {
        Self { index, row, col }
    }

    /// The position of the first character of any input.
    pub fn origin() -> Self {
        Self {
            index: 0,
            row: 1,
            col: 1,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("")
            .field("row", &self.row)
            .field("col", &self.col)
            .finish()
    }
}
