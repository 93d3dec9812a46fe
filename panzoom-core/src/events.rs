use serde::{Deserialize, Serialize};

use crate::points::Point;

/// Input events the gesture controller understands, in client coordinates.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum GestureEvent {
    /// Mouse wheel or trackpad scroll. Negative `delta_y` zooms in.
    Wheel { client: Point, delta_y: f64 },

    /// Primary button pressed over the viewport.
    PointerDown { client: Point },

    PointerMove { client: Point },

    PointerUp { client: Point },

    /// Pointer left the viewport. Ends a drag like `PointerUp`.
    PointerLeave { client: Point },

    /// `touches` lists every touch currently on the surface, not just the changed ones.
    TouchStart { touches: Vec<Point> },

    TouchMove { touches: Vec<Point> },

    /// Also used for `touchcancel`.
    TouchEnd { touches: Vec<Point> },
}

/// What the caller has to do with the originating platform event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EventResponse {
    /// Suppress the platform default (page scroll, text selection, native pinch).
    pub prevent_default: bool,
}

impl EventResponse {
    pub fn prevent_default() -> Self {
        Self {
            prevent_default: true,
        }
    }

    pub fn pass_through() -> Self {
        Self::default()
    }
}
