//! Viewport adapter: canvas size, pointer state and the specimen transform.

mod listeners;
mod pointer;
mod transform;

pub use listeners::{InputChannel, ListenerId, ListenerRegistry};
pub use pointer::{DragTracker, PointerState};
pub use transform::{StainMode, ViewportTransform, FOCUS_MAX, FOCUS_SHARP};

use glam::Vec2;

/// Usable drawing size, or `None` when the surface has no area yet
pub fn drawable_size(size: Vec2) -> Option<Vec2> {
    (size.x > 0.0 && size.y > 0.0 && size.is_finite()).then_some(size)
}

/// Offset that centres a `canvas` inside a `surface`, pinned to the top-left
/// when the canvas is larger
pub fn centred_origin(surface: Vec2, canvas: Vec2) -> Vec2 {
    ((surface - canvas) / 2.0).max(Vec2::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drawable_size() {
        assert!(drawable_size(Vec2::new(0.0, 300.0)).is_none());
        assert!(drawable_size(Vec2::new(f32::NAN, 300.0)).is_none());
        assert_eq!(drawable_size(Vec2::new(4.0, 3.0)), Some(Vec2::new(4.0, 3.0)));
    }

    #[test]
    fn test_centred_origin() {
        assert_eq!(centred_origin(Vec2::new(800.0, 600.0), Vec2::new(400.0, 300.0)), Vec2::new(200.0, 150.0));
        assert_eq!(centred_origin(Vec2::new(300.0, 600.0), Vec2::new(400.0, 300.0)), Vec2::new(0.0, 150.0));
    }
}
