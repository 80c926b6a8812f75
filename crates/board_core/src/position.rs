use std::fmt;

// `column` is declared first so the derived `Ord` matches column-major
// traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub column: u8, // 0-7 ('A'-'H')
    pub row: u8,    // 1-8
}

impl Position {
    pub fn new(column: u8, row: u8) -> Option<Self> {
        if column <= 7 && (1..=8).contains(&row) {
            Some(Self { column, row })
        } else {
            None
        }
    }

    pub fn column_letter(&self) -> char {
        (b'A' + self.column) as char
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column_letter(), self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_only_board_squares() {
        assert_eq!(Position::new(0, 1), Some(Position { column: 0, row: 1 }));
        assert_eq!(Position::new(7, 8), Some(Position { column: 7, row: 8 }));
        assert_eq!(Position::new(8, 1), None);
        assert_eq!(Position::new(0, 0), None);
        assert_eq!(Position::new(0, 9), None);
    }

    #[test]
    fn displays_as_letter_and_digit() {
        assert_eq!(Position { column: 0, row: 1 }.to_string(), "A1");
        assert_eq!(Position { column: 2, row: 5 }.to_string(), "C5");
        assert_eq!(Position { column: 7, row: 8 }.to_string(), "H8");
    }

    #[test]
    fn ordering_is_column_major() {
        let a8 = Position { column: 0, row: 8 };
        let b1 = Position { column: 1, row: 1 };
        assert!(a8 < b1);
    }
}
