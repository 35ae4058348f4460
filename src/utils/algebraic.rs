//! Algebraic square names (`a1` through `h8`) for `Position`.
//!
//! Off-board positions still print, as `(file,rank)`, so errors about them
//! stay readable.

use std::fmt;
use std::str::FromStr;

use crate::errors::ChessError;
use crate::game_state::position::Position;

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_on_board() {
            let file = char::from(b'a' + (self.file() - 1) as u8);
            write!(f, "{file}{}", self.rank())
        } else {
            write!(f, "({},{})", self.file(), self.rank())
        }
    }
}

impl FromStr for Position {
    type Err = ChessError;

    /// Parse a lowercase square name such as `"e4"`.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let invalid = || ChessError::InvalidSquareName(name.to_owned());
        let &[file, rank] = name.as_bytes() else {
            return Err(invalid());
        };

        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(invalid());
        }

        Ok(Position::new((file - b'a' + 1) as i8, (rank - b'0') as i8))
    }
}
