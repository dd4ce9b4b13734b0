use pipeforge_graph::Position;

pub const MIN_ZOOM: f32 = 0.25;
pub const MAX_ZOOM: f32 = 2.5;
pub const ZOOM_STEP: f32 = 0.25;

/// A point in view (screen) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPoint {
  pub x: f32,
  pub y: f32,
}

impl ViewPoint {
  pub fn new(x: f32, y: f32) -> Self {
    Self { x, y }
  }
}

/// Transient pan/zoom state, local to the canvas.
///
/// view = world * zoom + pan. Node extents differ per domain's default
/// graph, so the shell calls [`Viewport::reset`] on every domain switch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
  pub pan_x: f32,
  pub pan_y: f32,
  pub zoom: f32,
}

impl Default for Viewport {
  fn default() -> Self {
    Self {
      pan_x: 0.0,
      pan_y: 0.0,
      zoom: 1.0,
    }
  }
}

impl Viewport {
  pub fn reset(&mut self) {
    *self = Self::default();
  }

  pub fn zoom_in(&mut self) {
    self.set_zoom(self.zoom + ZOOM_STEP);
  }

  pub fn zoom_out(&mut self) {
    self.set_zoom(self.zoom - ZOOM_STEP);
  }

  pub fn set_zoom(&mut self, zoom: f32) {
    self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
  }

  pub fn pan_by(&mut self, dx: f32, dy: f32) {
    self.pan_x += dx;
    self.pan_y += dy;
  }

  pub fn world_to_view(&self, world: Position) -> ViewPoint {
    ViewPoint::new(world.x * self.zoom + self.pan_x, world.y * self.zoom + self.pan_y)
  }

  pub fn view_to_world(&self, view: ViewPoint) -> Position {
    Position::new((view.x - self.pan_x) / self.zoom, (view.y - self.pan_y) / self.zoom)
  }

  /// Map a drop landing at `view` to world coordinates, or None when the
  /// drop ended outside the canvas rectangle (no state change, no error).
  pub fn resolve_drop(
    &self,
    view: ViewPoint,
    view_width: f32,
    view_height: f32,
  ) -> Option<Position> {
    if view.x < 0.0 || view.y < 0.0 || view.x > view_width || view.y > view_height {
      return None;
    }
    Some(self.view_to_world(view))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_zoom_clamped() {
    let mut viewport = Viewport::default();
    for _ in 0..20 {
      viewport.zoom_in();
    }
    assert_eq!(viewport.zoom, MAX_ZOOM);
    for _ in 0..20 {
      viewport.zoom_out();
    }
    assert_eq!(viewport.zoom, MIN_ZOOM);
  }

  #[test]
  fn test_reset_restores_identity() {
    let mut viewport = Viewport::default();
    viewport.zoom_in();
    viewport.pan_by(40.0, -12.0);
    viewport.reset();
    assert_eq!(viewport, Viewport::default());
  }

  #[test]
  fn test_world_view_roundtrip() {
    let mut viewport = Viewport::default();
    viewport.set_zoom(1.5);
    viewport.pan_by(30.0, 10.0);
    let world = Position::new(350.0, 80.0);
    let back = viewport.view_to_world(viewport.world_to_view(world));
    assert!((back.x - world.x).abs() < 1e-3);
    assert!((back.y - world.y).abs() < 1e-3);
  }

  #[test]
  fn test_drop_outside_canvas_is_ignored() {
    let viewport = Viewport::default();
    assert!(viewport.resolve_drop(ViewPoint::new(-5.0, 10.0), 800.0, 600.0).is_none());
    assert!(viewport.resolve_drop(ViewPoint::new(10.0, 700.0), 800.0, 600.0).is_none());
    let world = viewport.resolve_drop(ViewPoint::new(120.0, 80.0), 800.0, 600.0);
    assert_eq!(world, Some(Position::new(120.0, 80.0)));
  }
}
