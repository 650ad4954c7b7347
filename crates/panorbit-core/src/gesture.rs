/// Distinguishes a drag-release from a click-release on the drop
/// target.
///
/// Fed from window-global pointer events each frame: a drag can start
/// anywhere in the window and still end over the drop hint, where a
/// trailing click would otherwise open the file picker. The `dragging`
/// flag survives one tick past pointer-up so that a click delivered in
/// the same tick as the release still observes the finished drag.
#[derive(Debug, Default)]
pub struct GestureTracker {
    pointer_down: bool,
    dragging: bool,
    release_pending: bool,
}

impl GestureTracker {
    pub fn on_pointer_down(&mut self) {
        self.pointer_down = true;
    }

    pub fn on_pointer_moved(&mut self) {
        if self.pointer_down {
            self.dragging = true;
        }
    }

    pub fn on_pointer_up(&mut self) {
        self.pointer_down = false;
        if self.dragging {
            self.release_pending = true;
        }
    }

    /// Deferred reset, called once at the end of every tick.
    pub fn end_tick(&mut self) {
        if self.release_pending {
            self.release_pending = false;
            self.dragging = false;
        }
    }

    /// True while a click event must not trigger the default action.
    pub fn suppresses_click(&self) -> bool {
        self.dragging
    }
}
