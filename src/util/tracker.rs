use super::{Position, PositionTracker};

impl PositionTracker {
    pub fn new() -> Self {
        Self {
            current: Position::origin(),
        }
    }

    /// Current position, i.e. the start of the next chunk to be consumed.
    pub fn position(&self) -> Position {
        self.current
    }

    /// Advance the cursor over a consumed chunk and return the covered span.
    ///
    /// Rows advance on any of the line terminators `\r\n`, `\r` and `\n`,
    /// where the pair counts once. After a row advance the column restarts at
    /// one plus the characters following the last terminator; a chunk without
    /// a terminator adds its character length to the running column.
    pub fn advance(&mut self, chunk: &str) -> (Position, Position) {
        let start = self.current;
        let bytes = chunk.as_bytes();
        let mut rows = 0;
        let mut tail = 0; // byte offset just past the last line terminator
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\r' => {
                    rows += 1;
                    i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                    tail = i;
                }
                b'\n' => {
                    rows += 1;
                    i += 1;
                    tail = i;
                }
                _ => i += 1,
            }
        }
        let tail_chars = chunk[tail..].chars().count();
        let end = Position::new(
            start.index + chunk.len(),
            start.row + rows,
            if rows > 0 {
                1 + tail_chars
            } else {
                start.col + tail_chars
            },
        );
        self.current = end;
        (start, end)
    }
}

impl Default for PositionTracker {
    fn default() -> Self {
        Self::new()
    }
}
