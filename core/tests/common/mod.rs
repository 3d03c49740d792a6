#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use lasergate_core::video::{Rect, Renderer, Rgba};

/// Shared log of texture ids in the order they were released.
pub type ReleaseLog = Rc<RefCell<Vec<u32>>>;

pub fn release_log() -> ReleaseLog {
    Rc::new(RefCell::new(Vec::new()))
}

/// Stand-in for a backend texture that records when it is destroyed.
pub struct TestTexture {
    pub id: u32,
    released: ReleaseLog,
}

impl TestTexture {
    pub fn new(id: u32, released: &ReleaseLog) -> Self {
        Self {
            id,
            released: Rc::clone(released),
        }
    }
}

impl Drop for TestTexture {
    fn drop(&mut self) {
        self.released.borrow_mut().push(self.id);
    }
}

/// One backend call as seen by the recording renderer.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Copy {
        texture: u32,
        src: Option<Rect>,
        dest: Rect,
    },
    Fill {
        rect: Rect,
        color: Rgba,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        scale: (f32, f32),
    },
}

/// Renderer that records every call instead of drawing.
#[derive(Default)]
pub struct RecordingRenderer {
    pub calls: Vec<Call>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }
}

impl Renderer for RecordingRenderer {
    type Texture = TestTexture;

    fn copy(&mut self, texture: &TestTexture, src: Option<Rect>, dest: Rect) {
        self.calls.push(Call::Copy {
            texture: texture.id,
            src,
            dest,
        });
    }

    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.calls.push(Call::Fill { rect, color });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, scale: (f32, f32)) {
        self.calls.push(Call::Text {
            text: text.to_string(),
            x,
            y,
            scale,
        });
    }
}

pub fn approx_rect(a: Rect, b: Rect) -> bool {
    const EPS: f32 = 1e-3;
    (a.x - b.x).abs() < EPS
        && (a.y - b.y).abs() < EPS
        && (a.w - b.w).abs() < EPS
        && (a.h - b.h).abs() < EPS
}
