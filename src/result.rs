//! Round result types for showdown.

use core::fmt;

/// A side of the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Party {
    /// The player.
    Player,
    /// The dealer.
    Dealer,
}

/// Classification of a completed round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player has the higher score.
    PlayerWin,
    /// Dealer has the higher score.
    DealerWin,
    /// Equal scores.
    Push,
    /// Player went over 21.
    PlayerBust,
    /// Dealer went over 21.
    DealerBust,
    /// Player was dealt a blackjack.
    PlayerBlackjack,
    /// Dealer was dealt a blackjack.
    DealerBlackjack,
    /// Both sides were dealt a blackjack.
    PushBlackjack,
}

impl Outcome {
    /// All classifications.
    pub const ALL: [Self; 8] = [
        Self::PlayerWin,
        Self::DealerWin,
        Self::Push,
        Self::PlayerBust,
        Self::DealerBust,
        Self::PlayerBlackjack,
        Self::DealerBlackjack,
        Self::PushBlackjack,
    ];

    /// Returns the side that won, or `None` for a push.
    #[must_use]
    pub const fn winner(self) -> Option<Party> {
        match self {
            Self::PlayerWin | Self::DealerBust | Self::PlayerBlackjack => Some(Party::Player),
            Self::DealerWin | Self::PlayerBust | Self::DealerBlackjack => Some(Party::Dealer),
            Self::Push | Self::PushBlackjack => None,
        }
    }

    /// Returns whether the round was decided by the initial deal.
    #[must_use]
    pub const fn is_blackjack(self) -> bool {
        matches!(
            self,
            Self::PlayerBlackjack | Self::DealerBlackjack | Self::PushBlackjack
        )
    }

    /// Returns a stable tag naming the classification.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::PlayerWin => "player-win",
            Self::DealerWin => "dealer-win",
            Self::Push => "push",
            Self::PlayerBust => "player-bust",
            Self::DealerBust => "dealer-bust",
            Self::PlayerBlackjack => "player-blackjack",
            Self::DealerBlackjack => "dealer-blackjack",
            Self::PushBlackjack => "push-blackjack",
        }
    }

    /// Looks up a classification by its [`tag`](Self::tag).
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|outcome| outcome.tag() == tag)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Result of the round after it has been classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// The classification of the round.
    pub outcome: Outcome,
    /// The player's final score.
    pub player_score: u8,
    /// The dealer's final score.
    pub dealer_score: u8,
    /// Whether the player was dealt a blackjack.
    pub player_blackjack: bool,
    /// Whether the dealer was dealt a blackjack.
    pub dealer_blackjack: bool,
}
