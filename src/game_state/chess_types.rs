//! Core value types shared by the board, move generators, and game logic.
//!
//! Teams and piece kinds are closed enums so every rule that dispatches on
//! them is checked for exhaustiveness at compile time.

use std::fmt;

/// Side a piece belongs to. White moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Team {
    White,
    Black,
}

impl Team {
    pub const ALL: [Team; 2] = [Team::White, Team::Black];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Team::White => 0,
            Team::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::White => write!(f, "white"),
            Team::Black => write!(f, "black"),
        }
    }
}

/// Piece kind. Team is carried separately on [`Piece`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    King,
    Queen,
    Bishop,
    Knight,
    Rook,
    Pawn,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
        PieceKind::Pawn,
    ];

    /// Upper-case letter used in diagnostics (`K`, `Q`, `B`, `N`, `R`, `P`).
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'N',
            PieceKind::Rook => 'R',
            PieceKind::Pawn => 'P',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::King => "king",
            PieceKind::Queen => "queen",
            PieceKind::Bishop => "bishop",
            PieceKind::Knight => "knight",
            PieceKind::Rook => "rook",
            PieceKind::Pawn => "pawn",
        };
        f.write_str(name)
    }
}

/// A chess piece. Two pieces with the same team and kind are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    team: Team,
    kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(team: Team, kind: PieceKind) -> Self {
        Self { team, kind }
    }

    #[inline]
    pub const fn team(self) -> Team {
        self.team
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    #[inline]
    pub fn is(self, team: Team, kind: PieceKind) -> bool {
        self.team == team && self.kind == kind
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.team, self.kind)
    }
}

/// Per-team castle eligibility.
///
/// Tracked as the game progresses but not consulted by any move rule;
/// castling itself is not generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastleRights {
    can_castle: [bool; 2],
}

impl Default for CastleRights {
    fn default() -> Self {
        Self {
            can_castle: [true; 2],
        }
    }
}

impl CastleRights {
    #[inline]
    pub const fn none() -> Self {
        Self {
            can_castle: [false; 2],
        }
    }

    #[inline]
    pub const fn can_castle(&self, team: Team) -> bool {
        self.can_castle[team.index()]
    }

    #[inline]
    pub fn revoke(&mut self, team: Team) {
        self.can_castle[team.index()] = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_team_round_trips() {
        for team in Team::ALL {
            assert_eq!(team.opposite().opposite(), team);
            assert_ne!(team.opposite(), team);
        }
    }

    #[test]
    fn pieces_compare_by_team_and_kind() {
        let a = Piece::new(Team::White, PieceKind::Knight);
        let b = Piece::new(Team::White, PieceKind::Knight);
        let c = Piece::new(Team::Black, PieceKind::Knight);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.is(Team::White, PieceKind::Knight));
    }

    #[test]
    fn castle_rights_start_granted_and_revoke_per_team() {
        let mut rights = CastleRights::default();
        rights.revoke(Team::Black);
        assert!(rights.can_castle(Team::White));
        assert!(!rights.can_castle(Team::Black));
        assert!(!CastleRights::none().can_castle(Team::White));
    }
}
