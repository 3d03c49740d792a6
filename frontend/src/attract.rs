//! Stand-in game logic that keeps the scoreboard moving: coins raise the
//! credit count, starting a game costs a credit, and running games score
//! points and lose lives on a fixed schedule.

use lasergate_core::scoreboard::{Player, Scoreboard, ScoreboardError};

const START_LIVES: u8 = 3;
const MAX_CREDITS: u8 = 99;
const MAX_SCORE: u32 = 999_999;
/// Frames between score increments.
const SCORE_PERIOD: u64 = 30;
const SCORE_STEP: u32 = 250;
/// Frames between lost lives.
const DEATH_PERIOD: u64 = 600;

/// Something worth telling the player about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Started(Player),
    LifeLost(Player),
    GameOver(Player),
}

#[derive(Clone, Copy, Debug, Default)]
struct Seat {
    playing: bool,
    score: u32,
    lives: u8,
    started_at: u64,
}

#[derive(Debug, Default)]
pub struct Attract {
    credits: u8,
    seats: [Seat; 2],
    frame: u64,
}

fn seat_index(player: Player) -> usize {
    match player {
        Player::One => 0,
        Player::Two => 1,
    }
}

impl Attract {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn credits(&self) -> u8 {
        self.credits
    }

    pub fn is_playing(&self, player: Player) -> bool {
        self.seats[seat_index(player)].playing
    }

    pub fn score(&self, player: Player) -> u32 {
        self.seats[seat_index(player)].score
    }

    /// Push the whole state to `board`, e.g. after attaching a new one.
    pub fn sync(&self, board: &mut dyn Scoreboard) -> Result<(), ScoreboardError> {
        board.set_credits(self.credits)?;
        for player in [Player::One, Player::Two] {
            let seat = &self.seats[seat_index(player)];
            board.set_score(player, seat.score)?;
            board.set_lives(player, seat.lives)?;
        }
        Ok(())
    }

    pub fn insert_coin(&mut self, board: &mut dyn Scoreboard) -> Result<(), ScoreboardError> {
        self.credits = (self.credits + 1).min(MAX_CREDITS);
        board.set_credits(self.credits)
    }

    /// Start a game for `player` if a credit is available and the seat is
    /// free.
    pub fn start(
        &mut self,
        player: Player,
        board: &mut dyn Scoreboard,
    ) -> Result<Option<GameEvent>, ScoreboardError> {
        let frame = self.frame;
        let seat = &mut self.seats[seat_index(player)];
        if seat.playing || self.credits == 0 {
            return Ok(None);
        }
        self.credits -= 1;
        *seat = Seat {
            playing: true,
            score: 0,
            lives: START_LIVES,
            started_at: frame,
        };
        let seat = *seat;

        board.set_credits(self.credits)?;
        board.set_score(player, seat.score)?;
        board.set_lives(player, seat.lives)?;
        Ok(Some(GameEvent::Started(player)))
    }

    /// Advance one frame.
    pub fn tick(&mut self, board: &mut dyn Scoreboard) -> Result<Vec<GameEvent>, ScoreboardError> {
        self.frame += 1;
        let mut events = Vec::new();
        for player in [Player::One, Player::Two] {
            let seat = &mut self.seats[seat_index(player)];
            if !seat.playing {
                continue;
            }
            let age = self.frame - seat.started_at;

            if age % SCORE_PERIOD == 0 {
                seat.score = (seat.score + SCORE_STEP).min(MAX_SCORE);
                board.set_score(player, seat.score)?;
            }
            if age % DEATH_PERIOD == 0 {
                seat.lives = seat.lives.saturating_sub(1);
                board.set_lives(player, seat.lives)?;
                if seat.lives == 0 {
                    seat.playing = false;
                    events.push(GameEvent::GameOver(player));
                } else {
                    events.push(GameEvent::LifeLost(player));
                }
            }
        }
        Ok(events)
    }
}
