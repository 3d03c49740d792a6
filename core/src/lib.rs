pub mod hud;
pub mod scoreboard;
pub mod video;

pub mod prelude {
    pub use crate::hud::{Crosshair, Subtitle};
    pub use crate::scoreboard::{OverlayScoreboard, Player, Scoreboard, ScoreboardCollection};
    pub use crate::video::{DrawList, Overlay, OverlayRef, Rect, Renderer, Rgba, Transform};
}
