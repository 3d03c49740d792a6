use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use super::draw_list::{DrawList, RenderPath};
use super::rect::Rect;
use super::renderer::Renderer;
use super::transform::Transform;

/// Logical width every overlay ends up with, whatever size is requested.
pub const LEGACY_WIDTH: u32 = 320;
/// Logical height every overlay ends up with, whatever size is requested.
pub const LEGACY_HEIGHT: u32 = 240;

/// Shared handle to an overlay. The constructing subsystem holds the strong
/// reference; parent draw lists only keep weak ones.
pub type OverlayRef<T> = Rc<RefCell<Overlay<T>>>;

/// A rectangular logical canvas that records images, text, rectangles and
/// other overlays, and knows where it sits inside its container.
///
/// Nothing is drawn when an element is added. [`Overlay::render`] replays the
/// draw list through the overlay's own transform (container is the screen);
/// [`Overlay::render_in`] additionally applies the container's transform
/// (container is another overlay).
pub struct Overlay<T> {
    width: u32,
    height: u32,
    draw_list: DrawList<T>,
    transform: Transform,
}

impl<T> Default for Overlay<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Overlay<T> {
    /// An unsized overlay with an empty list and identity placement.
    pub fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            draw_list: DrawList::new(),
            transform: Transform::identity(),
        }
    }

    pub fn with_size(w: u32, h: u32) -> Self {
        let mut overlay = Self::new();
        overlay.set_size(w, h);
        overlay
    }

    pub fn into_ref(self) -> OverlayRef<T> {
        Rc::new(RefCell::new(self))
    }

    /// Set the logical size of this overlay.
    ///
    /// Legacy behavior: the requested size is ignored and the canvas is always
    /// 320x240, which is what every existing HUD layout is authored against.
    /// The placement is not recomputed; call [`Overlay::set_position`] again
    /// to refit.
    pub fn set_size(&mut self, w: u32, h: u32) {
        if (w, h) != (LEGACY_WIDTH, LEGACY_HEIGHT) {
            debug!("overlay size {w}x{h} requested, using {LEGACY_WIDTH}x{LEGACY_HEIGHT}");
        }
        self.width = LEGACY_WIDTH;
        self.height = LEGACY_HEIGHT;
    }

    /// Place this overlay inside `dest` of its container (another overlay's
    /// logical space, or screen pixels).
    pub fn set_position(&mut self, dest: Rect) {
        self.transform.reset();
        self.transform.update(self.width as f32, self.height as f32, dest);
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn draw_list(&self) -> &DrawList<T> {
        &self.draw_list
    }

    pub fn draw_list_mut(&mut self) -> &mut DrawList<T> {
        &mut self.draw_list
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Render with only this overlay's own placement. Use when the container
    /// is the screen.
    pub fn render<R>(&self, renderer: &mut R)
    where
        R: Renderer<Texture = T>,
    {
        self.render_nested(renderer, &Transform::identity(), &mut Vec::new());
    }

    /// Render inside a container: this overlay's placement first, then the
    /// container's `transform`.
    pub fn render_in<R>(&self, renderer: &mut R, container: &Transform)
    where
        R: Renderer<Texture = T>,
    {
        self.render_nested(renderer, container, &mut Vec::new());
    }

    pub(crate) fn render_nested<R>(
        &self,
        renderer: &mut R,
        container: &Transform,
        path: &mut RenderPath<T>,
    ) where
        R: Renderer<Texture = T>,
    {
        let composed = self.transform.then(container);
        path.push(self as *const Self);
        self.draw_list.render_on_path(renderer, &composed, path);
        path.pop();
    }
}
