//! Pointer position and drag tracking.

use glam::Vec2;

/// Last known pointer position over a view's canvas.
///
/// Input handlers only write this; the physics step only reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    position: Option<Vec2>,
}

impl PointerState {
    pub fn move_to(&mut self, position: Vec2) {
        self.position = Some(position);
    }

    /// The pointer left the canvas; it no longer attracts anything
    pub fn leave(&mut self) {
        self.position = None;
    }

    pub fn position(&self) -> Option<Vec2> {
        self.position
    }
}

/// Converts a stream of pointer positions into drag deltas
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragTracker {
    last: Option<Vec2>,
}

impl DragTracker {
    pub fn begin(&mut self, position: Vec2) {
        self.last = Some(position);
    }

    /// Delta since the previous drag position, or `None` when not dragging
    pub fn drag_to(&mut self, position: Vec2) -> Option<Vec2> {
        let last = self.last?;
        self.last = Some(position);
        Some(position - last)
    }

    pub fn end(&mut self) {
        self.last = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.last.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_deltas_chain() {
        let mut drag = DragTracker::default();
        assert_eq!(drag.drag_to(Vec2::new(5.0, 5.0)), None);
        drag.begin(Vec2::new(10.0, 10.0));
        assert_eq!(drag.drag_to(Vec2::new(15.0, 8.0)), Some(Vec2::new(5.0, -2.0)));
        assert_eq!(drag.drag_to(Vec2::new(15.0, 18.0)), Some(Vec2::new(0.0, 10.0)));
        drag.end();
        assert!(!drag.is_dragging());
        assert_eq!(drag.drag_to(Vec2::new(0.0, 0.0)), None);
    }

    #[test]
    fn test_pointer_leave_clears() {
        let mut pointer = PointerState::default();
        assert!(pointer.position().is_none());
        pointer.move_to(Vec2::new(3.0, 4.0));
        assert_eq!(pointer.position(), Some(Vec2::new(3.0, 4.0)));
        pointer.leave();
        assert!(pointer.position().is_none());
    }
}
