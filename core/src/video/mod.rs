//! Overlay compositing: logical canvases, their recorded draw lists, and the
//! letterbox transforms that place them inside containers.

pub mod draw_list;
pub mod overlay;
pub mod rect;
pub mod renderer;
pub mod transform;

pub use draw_list::{DrawItem, DrawList};
pub use overlay::{LEGACY_HEIGHT, LEGACY_WIDTH, Overlay, OverlayRef};
pub use rect::{Rect, Rgba};
pub use renderer::{Renderer, TEXT_ADVANCE};
pub use transform::Transform;
