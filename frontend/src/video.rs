use std::marker::PhantomData;

use lasergate_core::video::{Rect, Renderer, Rgba};
use log::warn;
use sdl2::pixels::{Color, PixelFormatEnum};
use sdl2::render::{BlendMode, Canvas, Texture, TextureCreator};
use sdl2::video::{FullscreenType, Window, WindowContext};

use crate::config::VideoConfig;
use crate::error::{FrontendError, sdl_err};
use crate::font;

const CLEAR_COLOR: Color = Color::RGB(0, 0, 0);
const TEXT_COLOR: Color = Color::RGBA(0xFF, 0xFF, 0xFF, 0xFF);

pub struct Video {
    canvas: Canvas<Window>,
}

impl Video {
    /// Create a resizable SDL window and an accelerated canvas.
    pub fn new(
        sdl_video: &sdl2::VideoSubsystem,
        title: &str,
        config: &VideoConfig,
    ) -> Result<Self, FrontendError> {
        let mut window = sdl_video
            .window(title, config.width, config.height)
            .position_centered()
            .resizable()
            .allow_highdpi()
            .build()
            .map_err(sdl_err)?;
        if config.fullscreen {
            window.set_fullscreen(FullscreenType::Desktop)?;
        }

        let mut builder = window.into_canvas().accelerated();
        if config.vsync {
            builder = builder.present_vsync();
        }
        let mut canvas = builder.build().map_err(sdl_err)?;
        canvas.set_blend_mode(BlendMode::Blend);

        Ok(Self { canvas })
    }

    /// A creator for textures drawn on this canvas. Textures borrow it, so
    /// keep it alive for as long as any of them.
    pub fn texture_creator(&self) -> TextureCreator<WindowContext> {
        self.canvas.texture_creator()
    }

    /// Drawable size in pixels (differs from the window size on high-DPI
    /// displays).
    pub fn output_size(&self) -> Result<(u32, u32), FrontendError> {
        Ok(self.canvas.output_size()?)
    }

    /// Factor from window coordinates (mouse events) to output pixels.
    pub fn pointer_scale(&self) -> (f32, f32) {
        let (win_w, win_h) = self.canvas.window().size();
        match self.canvas.output_size() {
            Ok((out_w, out_h)) if win_w > 0 && win_h > 0 => {
                (out_w as f32 / win_w as f32, out_h as f32 / win_h as f32)
            }
            _ => (1.0, 1.0),
        }
    }

    pub fn clear(&mut self) {
        self.canvas.set_draw_color(CLEAR_COLOR);
        self.canvas.clear();
    }

    pub fn renderer<'r>(&mut self) -> SdlRenderer<'_, 'r> {
        SdlRenderer {
            canvas: &mut self.canvas,
            _textures: PhantomData,
        }
    }

    /// Read back the current frame as RGB24. Call before [`Video::present`].
    pub fn read_rgb(&self) -> Result<(u32, u32, Vec<u8>), FrontendError> {
        let (w, h) = self.output_size()?;
        let pixels = self.canvas.read_pixels(None, PixelFormatEnum::RGB24)?;
        Ok((w, h, pixels))
    }

    pub fn present(&mut self) {
        self.canvas.present();
    }
}

/// Upload an RGBA8 image as a blended static texture.
pub fn upload_rgba<'r>(
    creator: &'r TextureCreator<WindowContext>,
    width: u32,
    height: u32,
    pixels: &[u8],
) -> Result<Texture<'r>, FrontendError> {
    let mut texture = creator
        .create_texture_static(PixelFormatEnum::RGBA32, width, height)
        .map_err(sdl_err)?;
    texture
        .update(None, pixels, (width * 4) as usize)
        .map_err(sdl_err)?;
    texture.set_blend_mode(BlendMode::Blend);
    Ok(texture)
}

// ---------------------------------------------------------------------------
// Renderer backend
// ---------------------------------------------------------------------------

/// Draws overlay items straight onto the SDL canvas.
///
/// SDL failures are logged and the item is skipped; rendering never stops
/// half-way through a frame.
pub struct SdlRenderer<'c, 'r> {
    canvas: &'c mut Canvas<Window>,
    _textures: PhantomData<&'r TextureCreator<WindowContext>>,
}

/// Snap a float rectangle to whole pixels. Edges are rounded separately so
/// neighbouring rectangles stay seamless. Empty results are `None`.
pub fn to_sdl_rect(rect: Rect) -> Option<sdl2::rect::Rect> {
    let x0 = rect.x.round();
    let y0 = rect.y.round();
    let x1 = (rect.x + rect.w).round();
    let y1 = (rect.y + rect.h).round();
    if ![x0, y0, x1, y1].iter().all(|v| v.is_finite()) || x1 <= x0 || y1 <= y0 {
        return None;
    }
    Some(sdl2::rect::Rect::new(
        x0 as i32,
        y0 as i32,
        (x1 - x0) as u32,
        (y1 - y0) as u32,
    ))
}

impl<'r> Renderer for SdlRenderer<'_, 'r> {
    type Texture = Texture<'r>;

    fn copy(&mut self, texture: &Texture<'r>, src: Option<Rect>, dest: Rect) {
        let Some(dest) = to_sdl_rect(dest) else {
            return;
        };
        let src = match src {
            Some(src) => match to_sdl_rect(src) {
                Some(src) => Some(src),
                None => return,
            },
            None => None,
        };
        if let Err(e) = self.canvas.copy(texture, src, dest) {
            warn!("texture copy failed: {e}");
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        let Some(rect) = to_sdl_rect(rect) else {
            return;
        };
        self.canvas
            .set_draw_color(Color::RGBA(color.r, color.g, color.b, color.a));
        if let Err(e) = self.canvas.fill_rect(rect) {
            warn!("fill failed: {e}");
        }
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, scale: (f32, f32)) {
        let runs: Vec<_> = font::glyph_rects(text, x, y, scale)
            .into_iter()
            .filter_map(to_sdl_rect)
            .collect();
        if runs.is_empty() {
            return;
        }
        self.canvas.set_draw_color(TEXT_COLOR);
        if let Err(e) = self.canvas.fill_rects(&runs) {
            warn!("text draw failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rects_snap_edges_to_pixels() {
        let r = to_sdl_rect(Rect::new(53.333, 0.0, 533.333, 400.0)).unwrap();
        assert_eq!((r.x(), r.y(), r.width(), r.height()), (53, 0, 534, 400));
    }

    #[test]
    fn adjacent_rects_share_an_edge() {
        let a = to_sdl_rect(Rect::new(0.0, 0.0, 1.5, 1.0)).unwrap();
        let b = to_sdl_rect(Rect::new(1.5, 0.0, 1.5, 1.0)).unwrap();
        assert_eq!(a.x() + a.width() as i32, b.x());
    }

    #[test]
    fn empty_or_invalid_rects_are_dropped() {
        assert!(to_sdl_rect(Rect::new(10.0, 10.0, 0.0, 5.0)).is_none());
        assert!(to_sdl_rect(Rect::new(10.0, 10.0, 0.2, 5.0)).is_none());
        assert!(to_sdl_rect(Rect::new(10.0, 10.0, -4.0, 5.0)).is_none());
        assert!(to_sdl_rect(Rect::new(f32::NAN, 0.0, 4.0, 4.0)).is_none());
    }
}
