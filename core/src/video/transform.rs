use super::rect::Rect;

/// Maps an overlay's logical space into its container's space.
///
/// The mapping is restricted to uniform scale plus translation, stored as a
/// pivot in the source space, a scale factor, and the point the pivot lands
/// on in the destination space:
///
/// ```text
/// dest = (src - pivot) * scale + anchor
/// ```
///
/// Keeping the pivot explicit means a letterbox stage maps the logical center
/// onto the destination center without any rounding error. There is no
/// rotation or shear term, so a single scalar always describes how widths,
/// heights and glyphs scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    scale: f32,
    pivot_x: f32,
    pivot_y: f32,
    anchor_x: f32,
    anchor_y: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub const fn identity() -> Self {
        Self {
            scale: 1.0,
            pivot_x: 0.0,
            pivot_y: 0.0,
            anchor_x: 0.0,
            anchor_y: 0.0,
        }
    }

    /// A single letterbox stage fitting a `src_w` x `src_h` logical canvas
    /// inside `dest`.
    ///
    /// The scale is the largest factor that keeps the whole canvas visible
    /// (`min(dest.w / src_w, dest.h / src_h)`), and the canvas is centered,
    /// so the padding on the constrained axis is split evenly.
    ///
    /// A zero, negative or non-finite dimension on either side produces a
    /// scale of 1; the stage then only moves the logical center onto the
    /// destination center.
    pub fn letterbox(src_w: f32, src_h: f32, dest: Rect) -> Self {
        let scale = if [src_w, src_h, dest.w, dest.h].iter().all(|&v| usable(v)) {
            (dest.w / src_w).min(dest.h / src_h)
        } else {
            1.0
        };
        let (dest_cx, dest_cy) = dest.center();

        Self {
            scale,
            pivot_x: half_or_zero(src_w),
            pivot_y: half_or_zero(src_h),
            anchor_x: finite_or_zero(dest_cx),
            anchor_y: finite_or_zero(dest_cy),
        }
    }

    /// Return to the identity mapping.
    pub fn reset(&mut self) {
        *self = Self::identity();
    }

    /// Append a letterbox stage (see [`Transform::letterbox`]) after the
    /// current mapping.
    pub fn update(&mut self, src_w: f32, src_h: f32, dest: Rect) {
        *self = self.then(&Self::letterbox(src_w, src_h, dest));
    }

    /// Append `outer` after the current mapping.
    pub fn update_with(&mut self, outer: &Transform) {
        *self = self.then(outer);
    }

    /// Compose two transforms: the result applies `self` first, then `outer`.
    pub fn then(&self, outer: &Transform) -> Transform {
        if self.is_identity() {
            // Keeps outer's pivot, so a freshly positioned stage stays exact.
            return *outer;
        }
        // ((p - p1) * s1 + a1 - p2) * s2 + a2
        //   = (p - p1) * (s1 * s2) + ((a1 - p2) * s2 + a2)
        Transform {
            scale: self.scale * outer.scale,
            pivot_x: self.pivot_x,
            pivot_y: self.pivot_y,
            anchor_x: (self.anchor_x - outer.pivot_x) * outer.scale + outer.anchor_x,
            anchor_y: (self.anchor_y - outer.pivot_y) * outer.scale + outer.anchor_y,
        }
    }

    pub fn map_point(&self, x: f32, y: f32) -> (f32, f32) {
        (
            (x - self.pivot_x) * self.scale + self.anchor_x,
            (y - self.pivot_y) * self.scale + self.anchor_y,
        )
    }

    /// Map a rectangle: the origin goes through [`Transform::map_point`] and
    /// the extent is multiplied by the uniform scale.
    pub fn map_rect(&self, rect: Rect) -> Rect {
        let (x, y) = self.map_point(rect.x, rect.y);
        let (sx, sy) = self.scales();
        Rect::new(x, y, rect.w * sx, rect.h * sy)
    }

    /// Inverse of [`Transform::map_point`], for turning output-space positions
    /// (mouse pointers, light guns) back into logical coordinates.
    ///
    /// Returns `None` when the mapping collapses everything onto one point.
    pub fn unmap_point(&self, x: f32, y: f32) -> Option<(f32, f32)> {
        if self.scale == 0.0 || !self.scale.is_finite() {
            return None;
        }
        Some((
            (x - self.anchor_x) / self.scale + self.pivot_x,
            (y - self.anchor_y) / self.scale + self.pivot_y,
        ))
    }

    /// Horizontal and vertical scale factors, for backends that scale text by
    /// two scalars rather than a matrix. Always equal.
    pub fn scales(&self) -> (f32, f32) {
        (self.scale, self.scale)
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn is_identity(&self) -> bool {
        self.map_point(0.0, 0.0) == (0.0, 0.0) && self.scale == 1.0
    }
}

fn usable(v: f32) -> bool {
    v.is_finite() && v > 0.0
}

fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() { v } else { 0.0 }
}

fn half_or_zero(v: f32) -> f32 {
    finite_or_zero(v) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn identity_maps_points_unchanged() {
        let t = Transform::identity();
        assert_eq!(t.map_point(12.5, -3.0), (12.5, -3.0));
        assert_eq!(t.scales(), (1.0, 1.0));
        assert!(t.is_identity());
    }

    #[test]
    fn letterbox_wide_destination_pads_left_and_right() {
        // 320x240 into 640x400: height is the constraint.
        let t = Transform::letterbox(320.0, 240.0, Rect::new(0.0, 0.0, 640.0, 400.0));
        let content = t.map_rect(Rect::from_size(320.0, 240.0));

        assert!(approx(t.scale(), 400.0 / 240.0));
        assert!(approx(content.w, 533.333));
        assert!(approx(content.h, 400.0));
        assert!(approx(content.x, 53.333));
        assert!(approx(640.0 - content.right(), 53.333));
        assert!(approx(content.y, 0.0));
        assert!(approx(content.bottom(), 400.0));
    }

    #[test]
    fn letterbox_tall_destination_pads_top_and_bottom() {
        let t = Transform::letterbox(320.0, 240.0, Rect::new(0.0, 0.0, 320.0, 480.0));
        let content = t.map_rect(Rect::from_size(320.0, 240.0));

        assert!(approx(t.scale(), 1.0));
        assert!(approx(content.x, 0.0));
        assert!(approx(content.y, 120.0));
        assert!(approx(480.0 - content.bottom(), 120.0));
    }

    #[test]
    fn letterbox_matching_aspect_fills_destination() {
        let dest = Rect::new(0.0, 0.0, 1280.0, 960.0);
        let t = Transform::letterbox(320.0, 240.0, dest);
        let content = t.map_rect(Rect::from_size(320.0, 240.0));
        assert_eq!(content, dest);
    }

    #[test]
    fn logical_center_lands_on_destination_center() {
        let cases = [
            (320.0, 240.0, Rect::new(0.0, 0.0, 640.0, 400.0)),
            (360.0, 240.0, Rect::new(17.0, 3.0, 1013.0, 777.0)),
            (256.0, 224.0, Rect::new(-40.0, 10.5, 99.0, 1000.0)),
        ];
        for (w, h, dest) in cases {
            let t = Transform::letterbox(w, h, dest);
            assert_eq!(t.map_point(w / 2.0, h / 2.0), dest.center());
        }
    }

    #[test]
    fn zero_dimensions_do_not_produce_nan() {
        let cases = [
            (0.0, 240.0, Rect::new(0.0, 0.0, 640.0, 480.0)),
            (320.0, 0.0, Rect::new(0.0, 0.0, 640.0, 480.0)),
            (320.0, 240.0, Rect::new(0.0, 0.0, 0.0, 480.0)),
            (320.0, 240.0, Rect::new(0.0, 0.0, 640.0, 0.0)),
            (0.0, 0.0, Rect::new(0.0, 0.0, 0.0, 0.0)),
        ];
        for (w, h, dest) in cases {
            let mut t = Transform::identity();
            t.update(w, h, dest);
            let (x, y) = t.map_point(10.0, 10.0);
            assert!(x.is_finite() && y.is_finite(), "NaN for {w}x{h} -> {dest:?}");
            assert_eq!(t.scale(), 1.0);
        }
    }

    #[test]
    fn zero_dimension_stage_still_centers() {
        let dest = Rect::new(0.0, 0.0, 640.0, 0.0);
        let t = Transform::letterbox(320.0, 240.0, dest);
        assert_eq!(t.map_point(160.0, 120.0), (320.0, 0.0));
    }

    #[test]
    fn non_finite_inputs_are_guarded() {
        let t = Transform::letterbox(f32::NAN, 240.0, Rect::new(0.0, 0.0, f32::INFINITY, 10.0));
        let (x, y) = t.map_point(1.0, 1.0);
        assert!(x.is_finite() && y.is_finite());
    }

    #[test]
    fn update_applies_existing_stage_first() {
        let inner = Transform::letterbox(100.0, 100.0, Rect::new(0.0, 0.0, 200.0, 200.0));
        let outer = Transform::letterbox(200.0, 200.0, Rect::new(50.0, 50.0, 100.0, 100.0));

        let mut t = inner;
        t.update(200.0, 200.0, Rect::new(50.0, 50.0, 100.0, 100.0));

        for &(x, y) in &[(0.0, 0.0), (100.0, 100.0), (25.0, 75.0), (-10.0, 130.0)] {
            let (ix, iy) = inner.map_point(x, y);
            let (ex, ey) = outer.map_point(ix, iy);
            let (cx, cy) = t.map_point(x, y);
            assert!(approx(cx, ex) && approx(cy, ey), "({x}, {y})");
        }
        assert!(approx(t.scale(), 1.0));
    }

    #[test]
    fn update_with_matches_then() {
        let a = Transform::letterbox(320.0, 240.0, Rect::new(10.0, 10.0, 100.0, 50.0));
        let b = Transform::letterbox(320.0, 240.0, Rect::new(0.0, 0.0, 1920.0, 1080.0));
        let mut t = a;
        t.update_with(&b);
        assert_eq!(t, a.then(&b));
    }

    #[test]
    fn composition_is_not_commutative() {
        let a = Transform::letterbox(10.0, 10.0, Rect::new(100.0, 0.0, 20.0, 20.0));
        let b = Transform::letterbox(10.0, 10.0, Rect::new(0.0, 0.0, 30.0, 30.0));
        assert_ne!(a.then(&b).map_point(0.0, 0.0), b.then(&a).map_point(0.0, 0.0));
    }

    #[test]
    fn reset_returns_to_identity() {
        let mut t = Transform::letterbox(320.0, 240.0, Rect::new(5.0, 5.0, 640.0, 480.0));
        assert!(!t.is_identity());
        t.reset();
        assert_eq!(t, Transform::identity());
    }

    #[test]
    fn map_rect_scales_extent_uniformly() {
        let t = Transform::letterbox(320.0, 240.0, Rect::new(0.0, 0.0, 960.0, 720.0));
        let r = t.map_rect(Rect::new(10.0, 20.0, 8.0, 13.0));
        assert_eq!(r, Rect::new(30.0, 60.0, 24.0, 39.0));
    }

    #[test]
    fn unmap_inverts_map() {
        let t = Transform::letterbox(320.0, 240.0, Rect::new(0.0, 0.0, 640.0, 400.0));
        let (x, y) = t.map_point(100.0, 50.0);
        let (lx, ly) = t.unmap_point(x, y).unwrap();
        assert!(approx(lx, 100.0) && approx(ly, 50.0));
    }

    #[test]
    fn unmap_of_degenerate_scale_is_none() {
        let t = Transform::identity().then(&Transform {
            scale: 0.0,
            ..Transform::identity()
        });
        assert_eq!(t.unmap_point(1.0, 1.0), None);
    }
}
