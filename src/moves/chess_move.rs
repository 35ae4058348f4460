//! Move values.

use std::collections::BTreeSet;
use std::fmt;

use crate::game_state::chess_types::PieceKind;
use crate::game_state::position::Position;

/// A move from one square to another, optionally promoting a pawn.
///
/// Equality, hashing and ordering cover all three fields, so the four
/// promotions onto the same square are four distinct moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    from: Position,
    to: Position,
    promotion: Option<PieceKind>,
}

/// Move collections use set semantics with a stable iteration order.
pub type MoveSet = BTreeSet<Move>;

impl Move {
    #[inline]
    pub const fn new(from: Position, to: Position) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    #[inline]
    pub const fn with_promotion(from: Position, to: Position, promotion: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion: Some(promotion),
        }
    }

    #[inline]
    pub const fn from(self) -> Position {
        self.from
    }

    #[inline]
    pub const fn to(self) -> Position {
        self.to
    }

    #[inline]
    pub const fn promotion(self) -> Option<PieceKind> {
        self.promotion
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "={}", kind.letter())?;
        }
        Ok(())
    }
}
