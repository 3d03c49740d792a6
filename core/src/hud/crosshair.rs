use crate::video::{DrawList, LEGACY_HEIGHT, LEGACY_WIDTH, Rect};

/// Gun-game crosshair: two solid bars crossing at a logical position.
#[derive(Clone, Debug, PartialEq)]
pub struct Crosshair {
    x: f32,
    y: f32,
    arm: f32,
    thickness: f32,
    color: u32,
    visible: bool,
}

impl Default for Crosshair {
    fn default() -> Self {
        Self {
            x: LEGACY_WIDTH as f32 / 2.0,
            y: LEGACY_HEIGHT as f32 / 2.0,
            arm: 6.0,
            thickness: 1.0,
            color: 0xFF00_FFFF, // opaque yellow
            visible: true,
        }
    }
}

impl Crosshair {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, arm: f32, thickness: f32) -> Self {
        self.arm = arm;
        self.thickness = thickness;
        self
    }

    /// Color packed as `0xAABBGGRR`.
    pub fn with_color(mut self, color: u32) -> Self {
        self.color = color;
        self
    }

    /// Move the crosshair; returns whether it actually moved.
    pub fn set_position(&mut self, x: f32, y: f32) -> bool {
        if (self.x, self.y) == (x, y) {
            return false;
        }
        self.x = x;
        self.y = y;
        true
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn draw<T>(&self, list: &mut DrawList<T>) {
        if !self.visible {
            return;
        }
        let half = self.thickness / 2.0;
        let span = self.arm * 2.0;
        list.fill_rect(
            Rect::new(self.x - self.arm, self.y - half, span, self.thickness),
            self.color,
        );
        list.fill_rect(
            Rect::new(self.x - half, self.y - self.arm, self.thickness, span),
            self.color,
        );
    }
}
