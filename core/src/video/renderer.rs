use super::rect::{Rect, Rgba};

/// Horizontal advance of one text column, in logical pixels at scale 1.
/// Backends lay glyphs out on this grid so text positioned by column lines
/// up with what is drawn.
pub const TEXT_ADVANCE: u32 = 6;

/// Graphics backend interface consumed by draw lists at render time.
///
/// The compositor never touches pixels itself. Every rectangle and anchor
/// handed to these methods has already been mapped into the backend's
/// top-left-origin, pixel-unit destination space. Implementations should log
/// and swallow their own failures: one bad HUD element must not interrupt
/// the frame.
pub trait Renderer {
    /// Backend texture handle stored in draw lists.
    type Texture;

    /// Blit `texture` into `dest`, optionally taking only the `src`
    /// sub-rectangle of the texture (in texel units, unscaled).
    fn copy(&mut self, texture: &Self::Texture, src: Option<Rect>, dest: Rect);

    /// Fill `rect` with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    /// Draw `text` with its top-left corner at (`x`, `y`), scaling glyphs
    /// independently on each axis.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, scale: (f32, f32));
}
