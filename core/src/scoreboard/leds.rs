use std::rc::Rc;

use crate::video::{DrawList, Rect, TEXT_ADVANCE};

use super::{LED_BLANK, LED_RANGE};

/// Width of one LED cell in the sprite sheet and on the overlay.
pub const LED_WIDTH: u32 = 8;
/// Height of one LED cell in the sprite sheet and on the overlay.
pub const LED_HEIGHT: u32 = 13;

/// Record a row of LED digits starting at (`x`, `y`).
///
/// `sheet` is a horizontal strip of [`LED_RANGE`] cells, one per LED value;
/// each digit blits its cell. Values without a glyph are drawn blank.
pub fn draw_overlay_leds<T>(list: &mut DrawList<T>, sheet: &Rc<T>, values: &[u8], x: i32, y: i32) {
    for (i, &value) in values.iter().enumerate() {
        let value = if value < LED_RANGE { value } else { LED_BLANK };
        let src = Rect::new(
            (value as u32 * LED_WIDTH) as f32,
            0.0,
            LED_WIDTH as f32,
            LED_HEIGHT as f32,
        );
        let dest = Rect::new(
            (x + i as i32 * LED_WIDTH as i32) as f32,
            y as f32,
            LED_WIDTH as f32,
            LED_HEIGHT as f32,
        );
        list.image_region(sheet, src, dest);
    }
}

/// Record `text` at text column `column` and pixel row `y`.
pub fn draw_string<T>(list: &mut DrawList<T>, text: &str, column: i32, y: i32) {
    list.text(text, (column * TEXT_ADVANCE as i32) as f32, y as f32);
}
