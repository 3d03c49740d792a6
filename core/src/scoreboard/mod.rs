//! Score, lives and credit displays for laserdisc games.
//!
//! A scoreboard keeps the LED digit values latched by the game and repaints
//! them into an overlay when they change. The digit layout follows the
//! Dragon's Lair / Space Ace cabinet: two six-digit player scores, one lives
//! digit per player, and a two-digit credit counter.

pub mod collection;
pub mod leds;
pub mod overlay_board;

pub use collection::ScoreboardCollection;
pub use leds::{LED_HEIGHT, LED_WIDTH, draw_overlay_leds, draw_string};
pub use overlay_board::{OverlayScoreboard, ScoreboardLayout};

/// Number of distinct LED glyphs: 16 segment patterns plus the "A" used by
/// Space Ace Enhanced.
pub const LED_RANGE: u8 = 17;
/// LED value that lights no segments.
pub const LED_BLANK: u8 = 0x0F;
/// LED value for the Space Ace Enhanced "A".
pub const LED_SAE_A: u8 = 0x10;

/// Digits in a full scoreboard.
pub const DIGIT_COUNT: usize = 16;
/// Digits in one player's score.
pub const SCORE_DIGITS: usize = 6;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Player {
    One,
    Two,
}

/// Index of one LED digit on the scoreboard.
///
/// Score digits are numbered from the most significant (leftmost) place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WhichDigit(usize);

impl WhichDigit {
    pub const PLAYER1_0: Self = Self(0);
    pub const PLAYER2_0: Self = Self(6);
    pub const LIVES0: Self = Self(12);
    pub const LIVES1: Self = Self(13);
    pub const CREDITS1_0: Self = Self(14);
    pub const CREDITS1_1: Self = Self(15);

    /// Score digit `place` (0 = leftmost) for `player`.
    pub const fn score(player: Player, place: usize) -> Option<Self> {
        if place >= SCORE_DIGITS {
            return None;
        }
        match player {
            Player::One => Some(Self(Self::PLAYER1_0.0 + place)),
            Player::Two => Some(Self(Self::PLAYER2_0.0 + place)),
        }
    }

    pub const fn lives(player: Player) -> Self {
        match player {
            Player::One => Self::LIVES0,
            Player::Two => Self::LIVES1,
        }
    }

    pub const fn index(self) -> usize {
        self.0
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors reported when latching scoreboard values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoreboardError {
    /// LED value has no glyph (must be below [`LED_RANGE`]).
    DigitOutOfRange { which: WhichDigit, value: u8 },

    /// A decimal value does not fit in the digits available for it.
    ValueOutOfRange { value: u32, max: u32 },

    /// A collection was asked to store a digit but holds no scoreboards.
    Empty,
}

impl std::fmt::Display for ScoreboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DigitOutOfRange { which, value } => write!(
                f,
                "LED value 0x{value:02X} for digit {} is out of range",
                which.index()
            ),
            Self::ValueOutOfRange { value, max } => {
                write!(f, "value {value} does not fit the display (max {max})")
            }
            Self::Empty => write!(f, "scoreboard collection is empty"),
        }
    }
}

impl std::error::Error for ScoreboardError {}

// ---------------------------------------------------------------------------
// Scoreboard trait
// ---------------------------------------------------------------------------

/// Common interface for every scoreboard implementation.
pub trait Scoreboard {
    /// Force the next [`Scoreboard::repaint_if_needed`] to redraw.
    fn invalidate(&mut self);

    /// Redraw if anything changed since the last repaint. Returns whether a
    /// repaint happened.
    fn repaint_if_needed(&mut self) -> bool;

    /// Show or hide the scoreboard. Returns whether visibility changed.
    fn change_visibility(&mut self, visible: bool) -> bool;

    /// Latch an LED value into one digit.
    fn set_digit(&mut self, value: u8, which: WhichDigit) -> Result<(), ScoreboardError>;

    /// Currently latched LED value of one digit.
    fn digit(&self, which: WhichDigit) -> u8;

    fn is_repaint_needed(&self) -> bool;

    /// Latch a decimal score, blanking leading zeros.
    fn set_score(&mut self, player: Player, score: u32) -> Result<(), ScoreboardError> {
        const MAX: u32 = 999_999;
        if score > MAX {
            return Err(ScoreboardError::ValueOutOfRange { value: score, max: MAX });
        }
        let mut remaining = score;
        let mut leading = true;
        let mut divisor = 100_000;
        for place in 0..SCORE_DIGITS {
            let d = (remaining / divisor) as u8;
            remaining %= divisor;
            divisor /= 10;
            leading &= d == 0 && place + 1 < SCORE_DIGITS;
            let value = if leading { LED_BLANK } else { d };
            if let Some(which) = WhichDigit::score(player, place) {
                self.set_digit(value, which)?;
            }
        }
        Ok(())
    }

    fn set_lives(&mut self, player: Player, lives: u8) -> Result<(), ScoreboardError> {
        if lives > 9 {
            return Err(ScoreboardError::ValueOutOfRange {
                value: lives as u32,
                max: 9,
            });
        }
        self.set_digit(lives, WhichDigit::lives(player))
    }

    /// Latch the two-digit credit counter.
    fn set_credits(&mut self, credits: u8) -> Result<(), ScoreboardError> {
        if credits > 99 {
            return Err(ScoreboardError::ValueOutOfRange {
                value: credits as u32,
                max: 99,
            });
        }
        self.set_digit(credits / 10, WhichDigit::CREDITS1_0)?;
        self.set_digit(credits % 10, WhichDigit::CREDITS1_1)
    }
}

/// Validated storage for the latched LED values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DigitBank {
    values: [u8; DIGIT_COUNT],
}

impl Default for DigitBank {
    fn default() -> Self {
        Self {
            values: [LED_BLANK; DIGIT_COUNT],
        }
    }
}

impl DigitBank {
    /// Store `value`; returns whether it differs from the previous value.
    pub fn set(&mut self, value: u8, which: WhichDigit) -> Result<bool, ScoreboardError> {
        if value >= LED_RANGE {
            return Err(ScoreboardError::DigitOutOfRange { which, value });
        }
        let slot = &mut self.values[which.index()];
        let changed = *slot != value;
        *slot = value;
        Ok(changed)
    }

    pub fn get(&self, which: WhichDigit) -> u8 {
        self.values[which.index()]
    }

    pub fn slice(&self, first: WhichDigit, count: usize) -> &[u8] {
        &self.values[first.index()..first.index() + count]
    }
}
