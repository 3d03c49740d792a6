use lasergate_core::video::TEXT_ADVANCE;
use lasergate_core::video::Rect;

/// Built-in 5x7 bitmap font. Each row uses the low 5 bits, bit 4 is the
/// leftmost column. Lowercase letters render as uppercase.
const GLYPHS: &[(&[u8; 7], u8)] = &[
    (&[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], b' '),
    (&[0x04, 0x04, 0x04, 0x04, 0x04, 0x00, 0x04], b'!'),
    (&[0x0C, 0x04, 0x08, 0x00, 0x00, 0x00, 0x00], b'\''),
    (&[0x18, 0x19, 0x02, 0x04, 0x08, 0x13, 0x03], b'%'),
    (&[0x00, 0x00, 0x00, 0x00, 0x0C, 0x04, 0x08], b','),
    (&[0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00], b'-'),
    (&[0x00, 0x00, 0x00, 0x00, 0x00, 0x0C, 0x0C], b'.'),
    (&[0x00, 0x01, 0x02, 0x04, 0x08, 0x10, 0x00], b'/'),
    (&[0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E], b'0'),
    (&[0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E], b'1'),
    (&[0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F], b'2'),
    (&[0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E], b'3'),
    (&[0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02], b'4'),
    (&[0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E], b'5'),
    (&[0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E], b'6'),
    (&[0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08], b'7'),
    (&[0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E], b'8'),
    (&[0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C], b'9'),
    (&[0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00], b':'),
    (&[0x0E, 0x11, 0x01, 0x02, 0x04, 0x00, 0x04], b'?'),
    (&[0x0E, 0x11, 0x11, 0x11, 0x1F, 0x11, 0x11], b'A'),
    (&[0x1E, 0x11, 0x11, 0x1E, 0x11, 0x11, 0x1E], b'B'),
    (&[0x0E, 0x11, 0x10, 0x10, 0x10, 0x11, 0x0E], b'C'),
    (&[0x1C, 0x12, 0x11, 0x11, 0x11, 0x12, 0x1C], b'D'),
    (&[0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x1F], b'E'),
    (&[0x1F, 0x10, 0x10, 0x1E, 0x10, 0x10, 0x10], b'F'),
    (&[0x0E, 0x11, 0x10, 0x17, 0x11, 0x11, 0x0F], b'G'),
    (&[0x11, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11], b'H'),
    (&[0x0E, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E], b'I'),
    (&[0x07, 0x02, 0x02, 0x02, 0x02, 0x12, 0x0C], b'J'),
    (&[0x11, 0x12, 0x14, 0x18, 0x14, 0x12, 0x11], b'K'),
    (&[0x10, 0x10, 0x10, 0x10, 0x10, 0x10, 0x1F], b'L'),
    (&[0x11, 0x1B, 0x15, 0x15, 0x11, 0x11, 0x11], b'M'),
    (&[0x11, 0x11, 0x19, 0x15, 0x13, 0x11, 0x11], b'N'),
    (&[0x0E, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], b'O'),
    (&[0x1E, 0x11, 0x11, 0x1E, 0x10, 0x10, 0x10], b'P'),
    (&[0x0E, 0x11, 0x11, 0x11, 0x15, 0x12, 0x0D], b'Q'),
    (&[0x1E, 0x11, 0x11, 0x1E, 0x14, 0x12, 0x11], b'R'),
    (&[0x0F, 0x10, 0x10, 0x0E, 0x01, 0x01, 0x1E], b'S'),
    (&[0x1F, 0x04, 0x04, 0x04, 0x04, 0x04, 0x04], b'T'),
    (&[0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E], b'U'),
    (&[0x11, 0x11, 0x11, 0x11, 0x11, 0x0A, 0x04], b'V'),
    (&[0x11, 0x11, 0x11, 0x15, 0x15, 0x15, 0x0A], b'W'),
    (&[0x11, 0x11, 0x0A, 0x04, 0x0A, 0x11, 0x11], b'X'),
    (&[0x11, 0x11, 0x11, 0x0A, 0x04, 0x04, 0x04], b'Y'),
    (&[0x1F, 0x01, 0x02, 0x04, 0x08, 0x10, 0x1F], b'Z'),
];

pub const GLYPH_W: u32 = 5;
pub const GLYPH_H: u32 = 7;
/// Horizontal advance per character; matches the scoreboard's text columns.
pub const ADVANCE: u32 = TEXT_ADVANCE;

const BANNER_PADDING: u32 = 2;
const BANNER_BG: [u8; 4] = [0x00, 0x00, 0x00, 0xC0];
const BANNER_FG: [u8; 4] = [0xFF, 0xFF, 0xFF, 0xFF];

fn glyph_for(ch: char) -> &'static [u8; 7] {
    let wanted = if ch.is_ascii() {
        ch.to_ascii_uppercase() as u8
    } else {
        b'?'
    };
    let mut fallback = GLYPHS[0].0;
    for &(data, c) in GLYPHS {
        if c == wanted {
            return data;
        }
        if c == b'?' {
            fallback = data;
        }
    }
    fallback
}

/// Horizontal runs of lit pixels, one per glyph row, for `text` anchored at
/// (`x`, `y`) with each font pixel scaled by `scale`.
pub fn glyph_rects(text: &str, x: f32, y: f32, scale: (f32, f32)) -> Vec<Rect> {
    let (sx, sy) = scale;
    let mut rects = Vec::new();
    for (i, ch) in text.chars().enumerate() {
        let cell_x = (i as u32 * ADVANCE) as f32;
        for (row, &bits) in glyph_for(ch).iter().enumerate() {
            let mut col = 0;
            while col < GLYPH_W {
                if bits & (0x10 >> col) == 0 {
                    col += 1;
                    continue;
                }
                let start = col;
                while col < GLYPH_W && bits & (0x10 >> col) != 0 {
                    col += 1;
                }
                rects.push(Rect::new(
                    x + (cell_x + start as f32) * sx,
                    y + row as f32 * sy,
                    (col - start) as f32 * sx,
                    sy,
                ));
            }
        }
    }
    rects
}

/// RGBA8 image of a text line, for textures uploaded once.
pub struct Bitmap {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Render `text` as white on a translucent black plate.
pub fn rasterize(text: &str) -> Bitmap {
    let chars = text.chars().count() as u32;
    let text_w = (chars * ADVANCE).saturating_sub(ADVANCE - GLYPH_W);
    let width = text_w + 2 * BANNER_PADDING;
    let height = GLYPH_H + 2 * BANNER_PADDING;

    let mut pixels = BANNER_BG.repeat((width * height) as usize);
    let origin = BANNER_PADDING as f32;
    for run in glyph_rects(text, origin, origin, (1.0, 1.0)) {
        let py = run.y as u32;
        for px in run.x as u32..(run.x + run.w) as u32 {
            let offset = ((py * width + px) * 4) as usize;
            pixels[offset..offset + 4].copy_from_slice(&BANNER_FG);
        }
    }

    Bitmap {
        width,
        height,
        pixels,
    }
}
