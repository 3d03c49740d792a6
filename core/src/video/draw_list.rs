use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, warn};

use super::overlay::{Overlay, OverlayRef};
use super::rect::{Rect, Rgba};
use super::renderer::Renderer;
use super::transform::Transform;

/// At most this many overlays are rendered along one nesting path.
pub const MAX_NESTING_DEPTH: usize = 16;

/// Overlays currently being rendered, outermost first. A nested overlay
/// already on the path is a cycle and is skipped.
pub(crate) type RenderPath<T> = Vec<*const Overlay<T>>;

/// One recorded drawing operation, in the logical space of the canvas that
/// owns the list.
pub enum DrawItem<T> {
    /// Blit of a texture owned elsewhere. Skipped at render time once the
    /// owner has dropped its last strong handle.
    Image {
        texture: Weak<T>,
        dest: Rect,
        src: Option<Rect>,
    },
    /// Blit of a texture owned by the list. Released when the list is
    /// cleared, the entry is replaced, or the list is dropped.
    ImageOwned {
        texture: T,
        dest: Rect,
        src: Option<Rect>,
    },
    /// Text anchored at its top-left corner.
    Text { text: String, x: f32, y: f32 },
    /// Solid rectangle, color packed as `0xAABBGGRR`.
    FillRect { rect: Rect, color: u32 },
    /// Another overlay, already positioned inside `dest` of this canvas.
    Overlay {
        overlay: Weak<RefCell<Overlay<T>>>,
        dest: Rect,
    },
}

/// Ordered log of drawing operations for one canvas.
///
/// Mutators only record; nothing reaches the backend until [`DrawList::render`]
/// or [`DrawList::render_with`]. Items render in insertion order, so later
/// items land on top of earlier ones. Rendering never mutates the list, so a
/// list can be presented any number of times per frame.
pub struct DrawList<T> {
    items: Vec<DrawItem<T>>,
}

impl<T> Default for DrawList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> DrawList<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Remove every item. Owned textures are dropped here, once each.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[DrawItem<T>] {
        &self.items
    }

    /// Draw the whole of a caller-owned texture into `dest`.
    pub fn image(&mut self, texture: &Rc<T>, dest: Rect) {
        self.items.push(DrawItem::Image {
            texture: Rc::downgrade(texture),
            dest,
            src: None,
        });
    }

    /// Draw the `src` region of a caller-owned texture into `dest`.
    pub fn image_region(&mut self, texture: &Rc<T>, src: Rect, dest: Rect) {
        self.items.push(DrawItem::Image {
            texture: Rc::downgrade(texture),
            dest,
            src: Some(src),
        });
    }

    /// Hand a texture over to the list and draw it into `dest`.
    pub fn image_owned(&mut self, texture: T, dest: Rect) {
        self.items.push(DrawItem::ImageOwned {
            texture,
            dest,
            src: None,
        });
    }

    pub fn image_owned_region(&mut self, texture: T, src: Rect, dest: Rect) {
        self.items.push(DrawItem::ImageOwned {
            texture,
            dest,
            src: Some(src),
        });
    }

    pub fn text(&mut self, text: impl Into<String>, x: f32, y: f32) {
        self.items.push(DrawItem::Text {
            text: text.into(),
            x,
            y,
        });
    }

    pub fn fill_rect(&mut self, rect: Rect, color: u32) {
        self.items.push(DrawItem::FillRect { rect, color });
    }

    /// Nest `overlay` inside `dest` of this canvas.
    ///
    /// Inserting positions: the child's transform is recomputed right here,
    /// not at render time. Resizing the child afterwards does not move it
    /// until it is positioned again.
    ///
    /// Returns `false` (and records nothing) if the child is currently
    /// borrowed, which happens when an overlay is nested inside itself.
    pub fn overlay(&mut self, overlay: &OverlayRef<T>, dest: Rect) -> bool {
        if !position_child(overlay, dest) {
            return false;
        }
        self.items.push(DrawItem::Overlay {
            overlay: Rc::downgrade(overlay),
            dest,
        });
        true
    }

    /// Overwrite the item at `index`. The previous item is dropped, which
    /// releases its texture if it owned one. A replacement nested overlay is
    /// positioned the same way [`DrawList::overlay`] does.
    ///
    /// If `index` is out of range or the replacement overlay cannot be
    /// positioned, the list is left untouched and `item` is handed back.
    pub fn replace(&mut self, index: usize, item: DrawItem<T>) -> Result<(), DrawItem<T>> {
        if index >= self.items.len() {
            return Err(item);
        }
        if let DrawItem::Overlay { overlay, dest } = &item {
            let positioned = match overlay.upgrade() {
                Some(child) => position_child(&child, *dest),
                None => {
                    warn!("replacement overlay was already destroyed; item {index} kept");
                    false
                }
            };
            if !positioned {
                return Err(item);
            }
        }
        self.items[index] = item;
        Ok(())
    }

    /// Render in destination coordinates as recorded (identity transform).
    pub fn render<R>(&self, renderer: &mut R)
    where
        R: Renderer<Texture = T>,
    {
        self.render_with(renderer, &Transform::identity());
    }

    /// Render every item through `transform`.
    pub fn render_with<R>(&self, renderer: &mut R, transform: &Transform)
    where
        R: Renderer<Texture = T>,
    {
        self.render_on_path(renderer, transform, &mut Vec::new());
    }

    pub(crate) fn render_on_path<R>(
        &self,
        renderer: &mut R,
        transform: &Transform,
        path: &mut RenderPath<T>,
    ) where
        R: Renderer<Texture = T>,
    {
        for item in &self.items {
            match item {
                DrawItem::Image { texture, dest, src } => match texture.upgrade() {
                    Some(texture) => renderer.copy(&texture, *src, transform.map_rect(*dest)),
                    None => debug!("skipping image whose texture was already released"),
                },
                DrawItem::ImageOwned { texture, dest, src } => {
                    renderer.copy(texture, *src, transform.map_rect(*dest));
                }
                DrawItem::Text { text, x, y } => {
                    let (x, y) = transform.map_point(*x, *y);
                    renderer.draw_text(text, x, y, transform.scales());
                }
                DrawItem::FillRect { rect, color } => {
                    renderer.fill_rect(transform.map_rect(*rect), Rgba::from_packed(*color));
                }
                DrawItem::Overlay { overlay, .. } => {
                    let Some(child) = overlay.upgrade() else {
                        debug!("skipping nested overlay that was destroyed");
                        continue;
                    };
                    if path.contains(&child.as_ptr().cast_const()) {
                        debug!("skipping nested overlay that contains itself");
                        continue;
                    }
                    if path.len() >= MAX_NESTING_DEPTH {
                        debug!("skipping overlays nested deeper than {MAX_NESTING_DEPTH}");
                        continue;
                    }
                    match child.try_borrow() {
                        Ok(child) => child.render_nested(renderer, transform, path),
                        Err(_) => warn!("skipping nested overlay that is being mutated"),
                    }
                }
            }
        }
    }
}

fn position_child<T>(overlay: &RefCell<Overlay<T>>, dest: Rect) -> bool {
    match overlay.try_borrow_mut() {
        Ok(mut child) => {
            child.set_position(dest);
            true
        }
        Err(_) => {
            warn!("cannot nest an overlay that is already borrowed (nested inside itself?)");
            false
        }
    }
}
