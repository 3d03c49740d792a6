use super::{LED_BLANK, Scoreboard, ScoreboardError, WhichDigit};

/// Several scoreboards driven as one (for example an overlay scoreboard plus
/// a hardware LED panel).
///
/// Every member sees every call; a repaint request reaches all members even
/// when an earlier one already repainted.
#[derive(Default)]
pub struct ScoreboardCollection<'a> {
    boards: Vec<Box<dyn Scoreboard + 'a>>,
}

impl<'a> ScoreboardCollection<'a> {
    pub fn new() -> Self {
        Self { boards: Vec::new() }
    }

    pub fn add(&mut self, board: Box<dyn Scoreboard + 'a>) {
        self.boards.push(board);
    }

    pub fn len(&self) -> usize {
        self.boards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }
}

impl Scoreboard for ScoreboardCollection<'_> {
    fn invalidate(&mut self) {
        for board in &mut self.boards {
            board.invalidate();
        }
    }

    fn repaint_if_needed(&mut self) -> bool {
        self.boards
            .iter_mut()
            .fold(false, |any, board| board.repaint_if_needed() | any)
    }

    fn change_visibility(&mut self, visible: bool) -> bool {
        self.boards
            .iter_mut()
            .fold(false, |any, board| board.change_visibility(visible) | any)
    }

    /// Stores the digit in every member. All members are attempted; the first
    /// error is returned.
    fn set_digit(&mut self, value: u8, which: WhichDigit) -> Result<(), ScoreboardError> {
        if self.boards.is_empty() {
            return Err(ScoreboardError::Empty);
        }
        let mut result = Ok(());
        for board in &mut self.boards {
            if let Err(e) = board.set_digit(value, which)
                && result.is_ok()
            {
                result = Err(e);
            }
        }
        result
    }

    /// Value held by the first member, or blank when empty.
    fn digit(&self, which: WhichDigit) -> u8 {
        self.boards
            .first()
            .map_or(LED_BLANK, |board| board.digit(which))
    }

    fn is_repaint_needed(&self) -> bool {
        self.boards.iter().any(|board| board.is_repaint_needed())
    }
}
