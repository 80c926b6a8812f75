use std::iter::FusedIterator;

use log::warn;

use crate::{GeneratorError, Position};

/// Step-by-step producer of the 64 board positions in column-major order:
/// A1, A2, .., A8, B1, .., H8. Each generator is an independent traversal
/// starting at A1.
#[derive(Debug, Clone)]
pub struct PositionGenerator {
    column: u8, // 0-7 ('A'-'H')
    row: u8,    // 1-8
}

impl PositionGenerator {
    pub fn new() -> Self {
        Self { column: 0, row: 1 }
    }

    /// True until all 64 positions have been produced. Does not mutate.
    pub fn has_more(&self) -> bool {
        self.column <= 7
    }

    /// Emits the next position, then steps the counters: row first, and
    /// past row 8 the row resets to 1 and the column moves on.
    pub fn advance(&mut self) -> Result<Position, GeneratorError> {
        if !self.has_more() {
            warn!("advance() called on an exhausted position sequence");
            return Err(GeneratorError::ExhaustedSequence);
        }

        let position = Position {
            column: self.column,
            row: self.row,
        };
        self.row += 1;
        if self.row > 8 {
            self.row = 1;
            self.column += 1;
        }
        Ok(position)
    }

    fn remaining(&self) -> usize {
        if !self.has_more() {
            return 0;
        }
        (7 - self.column) as usize * 8 + (9 - self.row) as usize
    }
}

impl Default for PositionGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for PositionGenerator {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.has_more() {
            self.advance().ok()
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PositionGenerator {}

impl FusedIterator for PositionGenerator {}

/// Declarative equivalent of [`PositionGenerator`]: the cartesian product
/// of the column range and the row range, column varying slowest.
pub fn positions() -> impl Iterator<Item = Position> {
    (0..8u8).flat_map(|column| (1..=8u8).map(move |row| Position { column, row }))
}
