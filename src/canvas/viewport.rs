use crate::graph::Position;

/// Grid pitch used by position snapping.
pub const GRID_SIZE: f64 = 20.0;

/// The visible window onto the canvas: pan offset plus zoom factor.
///
/// Screen coordinates arrive from the UI shell; the graph stores projected
/// canvas coordinates so a saved automation is viewport-independent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub pan: Position,
    pub zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            pan: Position::default(),
            zoom: 1.0,
        }
    }
}

impl Viewport {
    /// Translates a screen coordinate into graph coordinates.
    pub fn project(&self, screen: Position) -> Position {
        Position::new(
            (screen.x - self.pan.x) / self.zoom,
            (screen.y - self.pan.y) / self.zoom,
        )
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan.x += dx;
        self.pan.y += dy;
    }

    /// Sets the zoom factor, clamped to the range the builders render at.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(0.25, 2.0);
    }
}

/// Rounds a position to the nearest grid intersection. A presentational
/// convenience, never a model invariant.
pub fn snap_to_grid(position: Position) -> Position {
    Position::new(
        (position.x / GRID_SIZE).round() * GRID_SIZE,
        (position.y / GRID_SIZE).round() * GRID_SIZE,
    )
}
