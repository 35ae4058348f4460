//! Rule variants selectable per game.
//!
//! The defaults give standard chess semantics. `RulesConfig::reference()`
//! reproduces the narrower stalemate test some existing clients expect.

/// Which pieces are inspected when deciding stalemate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StalemateScope {
    /// No piece of the team has a legal move.
    WholeTeam,
    /// Only the king's own mobility is inspected; other pieces are ignored.
    KingOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RulesConfig {
    pub stalemate_scope: StalemateScope,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            stalemate_scope: StalemateScope::WholeTeam,
        }
    }
}

impl RulesConfig {
    /// King-only stalemate detection, as answered by earlier clients of this rules core.
    pub const fn reference() -> Self {
        Self {
            stalemate_scope: StalemateScope::KingOnly,
        }
    }
}
