use std::rc::Rc;

use log::{trace, warn};

use crate::video::{DrawList, OverlayRef};

use super::leds::{LED_HEIGHT, LED_WIDTH, draw_overlay_leds, draw_string};
use super::{DigitBank, SCORE_DIGITS, Scoreboard, ScoreboardError, WhichDigit};

/// Which cabinet's scoreboard to draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScoreboardLayout {
    /// Dragon's Lair / Space Ace: two scores, two lives digits, credits.
    #[default]
    DragonsLair,
    /// Thayer's Quest only uses the credit digits, labelled "Time".
    ThayersQuest,
}

/// Scoreboard drawn into an overlay on top of the laserdisc video.
///
/// The overlay and the LED sprite sheet are handed in at construction; the
/// owner of the overlay keeps it alive and nests it wherever the scoreboard
/// should appear.
pub struct OverlayScoreboard<T> {
    overlay: OverlayRef<T>,
    led_sheet: Rc<T>,
    layout: ScoreboardLayout,
    old_osd: bool,
    visible: bool,
    needs_repaint: bool,
    digits: DigitBank,
}

impl<T> OverlayScoreboard<T> {
    pub fn new(overlay: OverlayRef<T>, led_sheet: Rc<T>, layout: ScoreboardLayout) -> Self {
        Self {
            overlay,
            led_sheet,
            layout,
            old_osd: false,
            visible: true,
            needs_repaint: true,
            digits: DigitBank::default(),
        }
    }

    /// Use the label positions of the older on-screen display.
    pub fn with_old_osd(mut self, old_osd: bool) -> Self {
        self.old_osd = old_osd;
        self
    }

    pub fn overlay(&self) -> &OverlayRef<T> {
        &self.overlay
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    fn paint(&self, list: &mut DrawList<T>, w: i32) {
        match self.layout {
            ScoreboardLayout::DragonsLair => {
                let credits_col = w / 12 - if w == 360 { 4 } else { 3 };
                if self.old_osd {
                    draw_string(list, "Credits", credits_col, 0);
                    draw_string(list, "Player 1: ", 1, 0);
                    draw_string(list, "Player 2: ", w / 6 - 19, 0);
                    draw_string(list, "Lives: ", 1, 14);
                    draw_string(list, "Lives: ", w / 6 - 10 + 1, 14);
                } else {
                    draw_string(list, "Credits", credits_col + 5, 1);
                    draw_string(list, "Player 1: ", 2, 1);
                    draw_string(list, "Player 2: ", w / 6 - 19 + 7, 1);
                    draw_string(list, "Lives: ", 2, 15);
                    draw_string(list, "Lives: ", w / 6 - 10 + 10, 15);
                }

                // Player 2's score hugs the right edge, which moves with the
                // width of the video the overlay was authored for.
                let led_w = LED_WIDTH as i32;
                let p1 = self.digits.slice(WhichDigit::PLAYER1_0, SCORE_DIGITS);
                let p2 = self.digits.slice(WhichDigit::PLAYER2_0, SCORE_DIGITS);
                draw_overlay_leds(list, &self.led_sheet, p1, 65, 0);
                draw_overlay_leds(list, &self.led_sheet, p2, w - 7 * led_w, 0);

                let lives_y = LED_HEIGHT as i32;
                let l1 = self.digits.slice(WhichDigit::LIVES0, 1);
                let l2 = self.digits.slice(WhichDigit::LIVES1, 1);
                draw_overlay_leds(list, &self.led_sheet, l1, 48, lives_y);
                draw_overlay_leds(list, &self.led_sheet, l2, w - 2 * led_w, lives_y);
            }
            ScoreboardLayout::ThayersQuest => {
                if self.old_osd {
                    draw_string(list, "Time", w / 12 - 2, 0);
                } else {
                    draw_string(list, "Time", w / 12 + 3, 1);
                }
            }
        }
        self.paint_credits(list, w);
    }

    fn paint_credits(&self, list: &mut DrawList<T>, w: i32) {
        // shift a bit to look centered
        let fudge = match (self.layout, w == 360) {
            (ScoreboardLayout::ThayersQuest, true) => 4,
            (ScoreboardLayout::ThayersQuest, false) => 3,
            (ScoreboardLayout::DragonsLair, true) => 2,
            (ScoreboardLayout::DragonsLair, false) => 0,
        };
        let credits = self.digits.slice(WhichDigit::CREDITS1_0, 2);
        let x = w / 2 - (LED_WIDTH as i32 + fudge);
        draw_overlay_leds(list, &self.led_sheet, credits, x, LED_HEIGHT as i32);
    }
}

impl<T> Scoreboard for OverlayScoreboard<T> {
    fn invalidate(&mut self) {
        self.needs_repaint = true;
    }

    fn repaint_if_needed(&mut self) -> bool {
        if !self.needs_repaint {
            return false;
        }

        let Ok(mut overlay) = self.overlay.try_borrow_mut() else {
            warn!("scoreboard overlay is busy; repaint deferred");
            return false;
        };
        self.needs_repaint = false;

        let w = overlay.width() as i32;
        let list = overlay.draw_list_mut();
        list.clear();
        if self.visible {
            self.paint(list, w);
        }
        trace!("scoreboard repainted ({} items)", list.len());
        true
    }

    fn change_visibility(&mut self, visible: bool) -> bool {
        if visible == self.visible {
            return false;
        }
        self.visible = visible;
        self.needs_repaint = true;
        true
    }

    fn set_digit(&mut self, value: u8, which: WhichDigit) -> Result<(), ScoreboardError> {
        if self.digits.set(value, which)? {
            self.needs_repaint = true;
        }
        Ok(())
    }

    fn digit(&self, which: WhichDigit) -> u8 {
        self.digits.get(which)
    }

    fn is_repaint_needed(&self) -> bool {
        self.needs_repaint
    }
}
