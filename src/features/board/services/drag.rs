use crate::models::CardSize;

/// Pointer bookkeeping for one mouse-down → mouse-up cycle.
///
/// Deltas are measured from the previous move, not from where the drag started.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragTracker {
    active: bool,
    last_x: i32,
    last_y: i32,
}

impl DragTracker {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn begin(&mut self, x: i32, y: i32) {
        self.active = true;
        self.last_x = x;
        self.last_y = y;
    }

    /// Returns `(dx, dy)` since the last pointer position, or `None` when idle.
    pub fn track(&mut self, x: i32, y: i32) -> Option<(i32, i32)> {
        if !self.active {
            return None;
        }
        let delta = (x - self.last_x, y - self.last_y);
        self.last_x = x;
        self.last_y = y;
        Some(delta)
    }

    pub fn end(&mut self) {
        self.active = false;
    }
}

/// A drag in progress together with whatever keeps its listeners alive.
///
/// The subscription is dropped on release, on a fresh press, and when the
/// session itself is dropped.
pub struct DragSession<S> {
    tracker: DragTracker,
    subscription: Option<S>,
}

impl<S> Default for DragSession<S> {
    fn default() -> Self {
        Self {
            tracker: DragTracker::default(),
            subscription: None,
        }
    }
}

impl<S> DragSession<S> {
    pub fn is_active(&self) -> bool {
        self.tracker.is_active()
    }

    /// Starts a drag at `(x, y)`, replacing any stale subscription.
    pub fn press(&mut self, x: i32, y: i32, subscription: S) {
        self.subscription = Some(subscription);
        self.tracker.begin(x, y);
    }

    /// Size `current` grows to after moving to `(x, y)`, or `None` when idle.
    pub fn resize_to(&mut self, x: i32, y: i32, current: CardSize) -> Option<CardSize> {
        self.tracker.track(x, y).map(|delta| current.grow(delta))
    }

    /// Ends the drag and drops its subscription. Returns whether a drag was running.
    pub fn release(&mut self) -> bool {
        let was_active = self.is_active();
        self.tracker.end();
        self.subscription = None;
        was_active
    }
}
