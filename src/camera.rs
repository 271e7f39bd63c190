#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::consts::{GRID_SIZE_PX, ZOOM_MAX, ZOOM_MIN};

/// A point in client (CSS pixel) space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise `self - other`.
    #[must_use]
    pub fn delta_from(self, other: Point) -> Point {
        Point { x: self.x - other.x, y: self.y - other.y }
    }
}

/// Pan offset and zoom factor for the plan canvas.
///
/// `x` / `y` are in CSS pixels and unbounded; the canvas is infinite.
/// `zoom` stays inside the configured bounds once it has passed through
/// [`Viewport::set_zoom_clamped`] or [`Viewport::zoom_at`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0, zoom: 1.0 }
    }
}

/// Inclusive zoom range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomBounds {
    pub min: f64,
    pub max: f64,
}

impl Default for ZoomBounds {
    fn default() -> Self {
        Self { min: ZOOM_MIN, max: ZOOM_MAX }
    }
}

impl ZoomBounds {
    #[must_use]
    pub fn clamp(self, zoom: f64) -> f64 {
        zoom.clamp(self.min, self.max)
    }
}

impl Viewport {
    /// Offset the viewport by a screen-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    pub fn set_zoom_clamped(&mut self, zoom: f64, bounds: ZoomBounds) {
        self.zoom = bounds.clamp(zoom);
    }

    /// Change zoom by `step` while keeping the content under `pivot` fixed.
    ///
    /// `pivot` is relative to the canvas element's top-left corner. Returns
    /// `true` when the zoom actually changed.
    pub fn zoom_at(&mut self, pivot: Point, step: f64, bounds: ZoomBounds) -> bool {
        let old_zoom = self.zoom;
        let new_zoom = bounds.clamp(old_zoom + step);
        if (new_zoom - old_zoom).abs() < f64::EPSILON {
            return false;
        }
        let ratio = new_zoom / old_zoom;
        self.x = pivot.x - (pivot.x - self.x) * ratio;
        self.y = pivot.y - (pivot.y - self.y) * ratio;
        self.zoom = new_zoom;
        true
    }

    /// Map a content-space point to its position on screen.
    #[must_use]
    pub fn content_to_screen(&self, content: Point) -> Point {
        Point { x: content.x * self.zoom + self.x, y: content.y * self.zoom + self.y }
    }

    /// Map a screen point back into content space.
    #[must_use]
    pub fn screen_to_content(&self, screen: Point) -> Point {
        Point { x: (screen.x - self.x) / self.zoom, y: (screen.y - self.y) / self.zoom }
    }

    /// Styles the host writes for this viewport.
    #[must_use]
    pub fn transform(&self, grid_size_px: f64) -> Transform {
        let grid = grid_size_px * self.zoom;
        Transform {
            controller: format!("translate({}px, {}px) scale({})", self.x, self.y, self.zoom),
            grid_size: format!("{grid}px {grid}px"),
            grid_position: format!("{}px {}px", self.x, self.y),
            zoom: self.zoom,
        }
    }
}

/// Rendered CSS for one viewport state.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// `transform` of the `[data-canvas-controller]` child.
    pub controller: String,
    /// `background-size` of the grid layer.
    pub grid_size: String,
    /// `background-position` of the grid layer.
    pub grid_position: String,
    /// Value mirrored into the canvas `data-zoom` attribute.
    pub zoom: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Viewport::default().transform(GRID_SIZE_PX)
    }
}
