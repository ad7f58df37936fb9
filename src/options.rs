//! Game configuration options.

use crate::game::Seat;

/// Configuration options for a gin rummy game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use ginrs::GameOptions;
///
/// let options = GameOptions::default()
///     .with_target_score(150)
///     .with_gin_bonus(20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Highest deadwood total a seat may knock with.
    pub knock_limit: u32,
    /// Bonus added to the defender's deadwood when a hand goes gin.
    pub gin_bonus: u32,
    /// Bonus awarded to the defender on an undercut.
    pub undercut_bonus: u32,
    /// Cumulative score that ends the game.
    pub target_score: u32,
    /// Seat that opens the first round, and any round after one without a
    /// winner.
    pub first_turn: Seat,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            knock_limit: 10,
            gin_bonus: 25,
            undercut_bonus: 25,
            target_score: 100,
            first_turn: Seat::Player,
        }
    }
}

impl GameOptions {
    /// Sets the knock limit.
    ///
    /// # Example
    ///
    /// ```
    /// use ginrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_knock_limit(7);
    /// assert_eq!(options.knock_limit, 7);
    /// ```
    #[must_use]
    pub const fn with_knock_limit(mut self, limit: u32) -> Self {
        self.knock_limit = limit;
        self
    }

    /// Sets the gin bonus.
    ///
    /// # Example
    ///
    /// ```
    /// use ginrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_gin_bonus(20);
    /// assert_eq!(options.gin_bonus, 20);
    /// ```
    #[must_use]
    pub const fn with_gin_bonus(mut self, bonus: u32) -> Self {
        self.gin_bonus = bonus;
        self
    }

    /// Sets the undercut bonus.
    ///
    /// # Example
    ///
    /// ```
    /// use ginrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_undercut_bonus(10);
    /// assert_eq!(options.undercut_bonus, 10);
    /// ```
    #[must_use]
    pub const fn with_undercut_bonus(mut self, bonus: u32) -> Self {
        self.undercut_bonus = bonus;
        self
    }

    /// Sets the score that ends the game.
    ///
    /// # Example
    ///
    /// ```
    /// use ginrs::GameOptions;
    ///
    /// let options = GameOptions::default().with_target_score(250);
    /// assert_eq!(options.target_score, 250);
    /// ```
    #[must_use]
    pub const fn with_target_score(mut self, score: u32) -> Self {
        self.target_score = score;
        self
    }

    /// Sets the seat that opens the game.
    ///
    /// # Example
    ///
    /// ```
    /// use ginrs::{GameOptions, Seat};
    ///
    /// let options = GameOptions::default().with_first_turn(Seat::Opponent);
    /// assert_eq!(options.first_turn, Seat::Opponent);
    /// ```
    #[must_use]
    pub const fn with_first_turn(mut self, seat: Seat) -> Self {
        self.first_turn = seat;
        self
    }
}
