//! State machines for the floating window.
//!
//! Both are plain data so the drag arithmetic and visibility transitions can
//! be exercised without a running event loop.

use iced::Point;

/// Drag bookkeeping for the text surface.
///
/// Active only between a primary-button press on the surface and the next
/// button release; a drag never spans multiple press/release cycles.
#[derive(Debug, Clone, Copy)]
pub struct DragState {
    active: bool,
    offset: Point,
}

impl Default for DragState {
    fn default() -> Self {
        Self { active: false, offset: Point::ORIGIN }
    }
}

impl DragState {
    /// Record a primary-button press at a window-local point.
    pub fn press(&mut self, at: Point) {
        self.active = true;
        self.offset = at;
    }

    /// Clear the drag unconditionally, whichever button was released.
    pub fn release(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Where the window should move for the current pointer point, or `None`
    /// when no drag is in progress.
    ///
    /// The window follows the pointer 1:1, anchored at the original press
    /// point: new position = window position + pointer point - press offset.
    pub fn target(&self, window: Point, cursor: Point) -> Option<Point> {
        self.active.then(|| {
            Point::new(
                window.x + cursor.x - self.offset.x,
                window.y + cursor.y - self.offset.y,
            )
        })
    }
}

/// Accumulates fractional wheel deltas so fine-grained trackpad scrolls are
/// not lost to integer truncation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollAccumulator {
    remainder: f32,
}

impl ScrollAccumulator {
    /// Add a delta in lines, returning the whole lines to scroll now. The
    /// fractional remainder carries over to the next delta.
    pub fn add(&mut self, lines: f32) -> i32 {
        self.remainder += lines;
        let whole = self.remainder.trunc();
        self.remainder -= whole;
        whole as i32
    }
}

/// Whether the window's controls (import, transparency, close) are shown.
///
/// Driven by pointer enter/leave on the window's bounding area; transitions
/// are idempotent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlsVisibility {
    #[default]
    Hidden,
    Visible,
}

impl ControlsVisibility {
    pub fn pointer_entered(&mut self) {
        *self = ControlsVisibility::Visible;
    }

    pub fn pointer_left(&mut self) {
        *self = ControlsVisibility::Hidden;
    }

    pub fn shown(self) -> bool {
        self == ControlsVisibility::Visible
    }
}
