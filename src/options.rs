//! Game configuration options.

use core::time::Duration;

/// Configuration options for a blackjack game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use core::time::Duration;
/// use commjack::GameOptions;
///
/// let options = GameOptions::default()
///     .with_stand_on_soft_17(false)
///     .with_dealer_pause(Duration::ZERO);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Score at which the dealer stops drawing.
    pub dealer_stands_at: u8,
    /// Whether the dealer stands on a soft score equal to `dealer_stands_at`.
    pub stand_on_soft_17: bool,
    /// Pause between dealer draws. Presentation only; never affects results.
    pub dealer_pause: Duration,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            dealer_stands_at: 17,
            stand_on_soft_17: true,
            dealer_pause: Duration::from_secs(1),
        }
    }
}

impl GameOptions {
    /// Sets the score at which the dealer stops drawing.
    ///
    /// # Example
    ///
    /// ```
    /// use commjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_at(18);
    /// assert_eq!(options.dealer_stands_at, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_at(mut self, score: u8) -> Self {
        self.dealer_stands_at = score;
        self
    }

    /// Sets whether dealer stands on soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use commjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_stand_on_soft_17(false);
    /// assert_eq!(options.stand_on_soft_17, false);
    /// ```
    #[must_use]
    pub const fn with_stand_on_soft_17(mut self, stand: bool) -> Self {
        self.stand_on_soft_17 = stand;
        self
    }

    /// Sets the pause between dealer draws.
    ///
    /// # Example
    ///
    /// ```
    /// use core::time::Duration;
    /// use commjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_pause(Duration::from_millis(250));
    /// assert_eq!(options.dealer_pause, Duration::from_millis(250));
    /// ```
    #[must_use]
    pub const fn with_dealer_pause(mut self, pause: Duration) -> Self {
        self.dealer_pause = pause;
        self
    }
}
