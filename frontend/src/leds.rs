//! Procedural seven-segment sprite sheet for the scoreboard.
//!
//! One 8x13 cell per LED value, left to right. Values 0x0-0xE follow the
//! BCD "code B" decoder (0-9, `-`, E, H, L, P), 0xF is blank and 0x10 is
//! the Space Ace Enhanced "A".

use lasergate_core::scoreboard::{LED_HEIGHT, LED_RANGE, LED_WIDTH};

pub const SHEET_WIDTH: u32 = LED_WIDTH * LED_RANGE as u32;
pub const SHEET_HEIGHT: u32 = LED_HEIGHT;

const LIT: [u8; 4] = [0xFF, 0x30, 0x20, 0xFF];
const UNLIT: [u8; 4] = [0x50, 0x08, 0x08, 0xFF];
const BACKGROUND: [u8; 4] = [0x00, 0x00, 0x00, 0xFF];

// Segment bits: a=top, b=upper right, c=lower right, d=bottom,
// e=lower left, f=upper left, g=middle.
const SEG_A: u8 = 0x01;
const SEG_B: u8 = 0x02;
const SEG_C: u8 = 0x04;
const SEG_D: u8 = 0x08;
const SEG_E: u8 = 0x10;
const SEG_F: u8 = 0x20;
const SEG_G: u8 = 0x40;

const PATTERNS: [u8; LED_RANGE as usize] = [
    0x3F, // 0
    0x06, // 1
    0x5B, // 2
    0x4F, // 3
    0x66, // 4
    0x6D, // 5
    0x7D, // 6
    0x07, // 7
    0x7F, // 8
    0x6F, // 9
    0x40, // -
    0x79, // E
    0x76, // H
    0x38, // L
    0x73, // P
    0x00, // blank
    0x77, // A
];

/// Pixel spans of each segment inside a cell: (x, y, w, h).
const SEGMENTS: [(u8, (u32, u32, u32, u32)); 7] = [
    (SEG_A, (2, 1, 4, 1)),
    (SEG_B, (6, 2, 1, 4)),
    (SEG_C, (6, 7, 1, 4)),
    (SEG_D, (2, 11, 4, 1)),
    (SEG_E, (1, 7, 1, 4)),
    (SEG_F, (1, 2, 1, 4)),
    (SEG_G, (2, 6, 4, 1)),
];

/// Segment mask lit for an LED value; values without a glyph are blank.
pub fn segments(value: u8) -> u8 {
    PATTERNS.get(value as usize).copied().unwrap_or(0)
}

/// RGBA8 pixels of the whole sheet, `SHEET_WIDTH` x `SHEET_HEIGHT`.
pub fn sheet_pixels() -> Vec<u8> {
    let mut pixels = BACKGROUND.repeat((SHEET_WIDTH * SHEET_HEIGHT) as usize);
    for value in 0..LED_RANGE {
        let cell_x = value as u32 * LED_WIDTH;
        let lit = segments(value);
        for &(bit, (x, y, w, h)) in &SEGMENTS {
            let color = if lit & bit != 0 { LIT } else { UNLIT };
            for py in y..y + h {
                for px in cell_x + x..cell_x + x + w {
                    let offset = ((py * SHEET_WIDTH + px) * 4) as usize;
                    pixels[offset..offset + 4].copy_from_slice(&color);
                }
            }
        }
    }
    pixels
}
