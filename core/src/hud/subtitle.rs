use crate::video::{DrawList, Rect, TEXT_ADVANCE};

/// Height of the backing bar behind a subtitle line.
pub const BAR_HEIGHT: f32 = 14.0;
/// Gap between the bar and the bottom edge of the canvas.
pub const BAR_MARGIN: f32 = 4.0;
const BAR_COLOR: u32 = 0xA000_0000; // translucent black

/// One line of subtitle text that disappears after a number of frames.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Subtitle {
    text: Option<String>,
    frames_left: u32,
}

impl Subtitle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `text` for `frames` frames, replacing any current line. Zero
    /// frames keeps the line up until [`Subtitle::hide`].
    pub fn show(&mut self, text: impl Into<String>, frames: u32) {
        self.text = Some(text.into());
        self.frames_left = frames;
    }

    pub fn hide(&mut self) {
        self.text = None;
        self.frames_left = 0;
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Advance one frame. Returns `true` when the line expired on this frame
    /// and the overlay needs repainting.
    pub fn tick(&mut self) -> bool {
        if self.text.is_none() || self.frames_left == 0 {
            return false;
        }
        self.frames_left -= 1;
        if self.frames_left == 0 {
            self.text = None;
            return true;
        }
        false
    }

    /// Record the bar and the centered text near the bottom of a
    /// `canvas_w` x `canvas_h` logical canvas.
    pub fn draw<T>(&self, list: &mut DrawList<T>, canvas_w: f32, canvas_h: f32) {
        let Some(text) = &self.text else {
            return;
        };
        let bar = Rect::new(0.0, canvas_h - BAR_HEIGHT - BAR_MARGIN, canvas_w, BAR_HEIGHT);
        list.fill_rect(bar, BAR_COLOR);

        let text_w = (text.chars().count() as u32 * TEXT_ADVANCE) as f32;
        let x = ((canvas_w - text_w) / 2.0).max(0.0).floor();
        list.text(text.as_str(), x, bar.y + 3.0);
    }
}
