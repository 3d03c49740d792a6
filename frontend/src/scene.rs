//! The overlay tree shown in the window.
//!
//! ```text
//! root (320x240, letterboxed into the window)
//! ├── backdrop fill
//! ├── scoreboard overlay (at the configured rect)
//! ├── hud overlay (crosshair, subtitle, fps)
//! └── notice overlay (one owned banner texture)
//! ```
//!
//! The scene is generic over the texture type so it can run without a
//! window.

use std::fmt::Display;
use std::rc::Rc;

use lasergate_core::hud::{Crosshair, Subtitle};
use lasergate_core::scoreboard::{OverlayScoreboard, Scoreboard, ScoreboardLayout};
use lasergate_core::video::{LEGACY_HEIGHT, LEGACY_WIDTH, Overlay, OverlayRef, Rect, Renderer};
use log::{debug, warn};

use crate::config::Config;

const BACKDROP_COLOR: u32 = 0xFF30_1810;
const BANNER_Y: f32 = 96.0;

pub struct Scene<T> {
    root: OverlayRef<T>,
    hud: OverlayRef<T>,
    notice: OverlayRef<T>,
    board: OverlayScoreboard<T>,
    crosshair: Crosshair,
    subtitle: Subtitle,
    show_crosshair: bool,
    show_subtitles: bool,
    show_fps: bool,
    notice_frames: u32,
}

fn canvas_rect() -> Rect {
    Rect::from_size(LEGACY_WIDTH as f32, LEGACY_HEIGHT as f32)
}

impl<T> Scene<T> {
    pub fn new(config: &Config, led_sheet: Rc<T>) -> Self {
        let root = Overlay::with_size(LEGACY_WIDTH, LEGACY_HEIGHT).into_ref();
        let board_overlay = Overlay::with_size(LEGACY_WIDTH, LEGACY_HEIGHT).into_ref();
        let hud = Overlay::with_size(LEGACY_WIDTH, LEGACY_HEIGHT).into_ref();
        let notice = Overlay::with_size(LEGACY_WIDTH, LEGACY_HEIGHT).into_ref();

        let [x, y, w, h] = config.scoreboard.rect;
        {
            let mut root_mut = root.borrow_mut();
            let list = root_mut.draw_list_mut();
            list.fill_rect(canvas_rect(), BACKDROP_COLOR);
            list.overlay(&board_overlay, Rect::new(x, y, w, h));
            list.overlay(&hud, canvas_rect());
            list.overlay(&notice, canvas_rect());
        }

        let layout = if config.scoreboard.thayers {
            ScoreboardLayout::ThayersQuest
        } else {
            ScoreboardLayout::DragonsLair
        };
        let mut board = OverlayScoreboard::new(board_overlay, led_sheet, layout)
            .with_old_osd(config.scoreboard.old_osd);
        board.change_visibility(config.scoreboard.enabled);

        Self {
            root,
            hud,
            notice,
            board,
            crosshair: Crosshair::new(),
            subtitle: Subtitle::new(),
            show_crosshair: config.hud.crosshair,
            show_subtitles: config.hud.subtitles,
            show_fps: config.hud.fps,
            notice_frames: 0,
        }
    }

    /// Letterbox the game canvas into a `width` x `height` output.
    pub fn fit(&mut self, width: u32, height: u32) {
        let dest = Rect::from_size(width as f32, height as f32);
        self.root.borrow_mut().set_position(dest);
        debug!("scene fitted to {width}x{height}");
    }

    /// Refit to a queried output size. A failed query keeps the current fit.
    pub fn fit_output<E: Display>(&mut self, size: Result<(u32, u32), E>) {
        match size {
            Ok((width, height)) => self.fit(width, height),
            Err(e) => warn!("cannot read output size, keeping previous fit: {e}"),
        }
    }

    /// Move the crosshair to an output pixel position. Positions outside the
    /// game canvas are ignored.
    pub fn pointer(&mut self, x: f32, y: f32) {
        let Some((lx, ly)) = self.root.borrow().transform().unmap_point(x, y) else {
            return;
        };
        let canvas = canvas_rect();
        if lx >= 0.0 && ly >= 0.0 && lx < canvas.w && ly < canvas.h {
            self.crosshair.set_position(lx, ly);
        }
    }

    pub fn board(&mut self) -> &mut OverlayScoreboard<T> {
        &mut self.board
    }

    pub fn subtitle(&mut self) -> &mut Subtitle {
        &mut self.subtitle
    }

    /// Flip scoreboard visibility; returns the new state.
    pub fn toggle_scoreboard(&mut self) -> bool {
        let visible = !self.board.is_visible();
        self.board.change_visibility(visible);
        visible
    }

    /// Replace the current banner with `texture` for `frames` frames. The
    /// scene owns the texture from here on.
    pub fn show_notice(&mut self, texture: T, width: u32, height: u32, frames: u32) {
        let dest = Rect::new(
            ((LEGACY_WIDTH as f32 - width as f32) / 2.0).floor(),
            BANNER_Y,
            width as f32,
            height as f32,
        );
        let mut notice = self.notice.borrow_mut();
        let list = notice.draw_list_mut();
        list.clear();
        list.image_owned(texture, dest);
        self.notice_frames = frames.max(1);
    }

    /// Advance timers and repaint whatever changed. `fps` is shown when the
    /// HUD asks for it.
    pub fn tick(&mut self, fps: Option<f32>) {
        self.subtitle.tick();
        if self.notice_frames > 0 {
            self.notice_frames -= 1;
            if self.notice_frames == 0 {
                self.notice.borrow_mut().draw_list_mut().clear();
            }
        }
        self.board.repaint_if_needed();
        self.repaint_hud(fps);
    }

    fn repaint_hud(&mut self, fps: Option<f32>) {
        let mut hud = self.hud.borrow_mut();
        let list = hud.draw_list_mut();
        list.clear();
        if self.show_subtitles {
            self.subtitle.draw(list, LEGACY_WIDTH as f32, LEGACY_HEIGHT as f32);
        }
        if self.show_crosshair {
            self.crosshair.draw(list);
        }
        if self.show_fps
            && let Some(fps) = fps
        {
            list.text(format!("{fps:.1}"), 2.0, LEGACY_HEIGHT as f32 - 10.0);
        }
    }

    pub fn render<R>(&self, renderer: &mut R)
    where
        R: Renderer<Texture = T>,
    {
        self.root.borrow().render(renderer);
    }
}
