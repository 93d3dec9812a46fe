use serde::{Deserialize, Serialize};

/// Mutable interaction state owned by one gesture controller.
///
/// `end_x`/`end_y` are the surface's committed top-left offset; they match the
/// surface's `left`/`top` whenever no gesture is in progress.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InteractionState {
    pub scale: f64,
    pub panning: bool,
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
    pub initial_touch_gap: f64,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            panning: false,
            start_x: 0.0,
            start_y: 0.0,
            end_x: 0.0,
            end_y: 0.0,
            initial_touch_gap: 0.0,
        }
    }
}

impl InteractionState {
    /// Live surface position while a drag is in progress.
    pub fn drag_position(&self, client_x: f64, client_y: f64) -> (f64, f64) {
        (
            self.end_x + (client_x - self.start_x),
            self.end_y + (client_y - self.start_y),
        )
    }

    /// Fold a finished drag into the resting offset.
    pub fn commit_drag(&mut self, client_x: f64, client_y: f64) {
        self.end_x += client_x - self.start_x;
        self.end_y += client_y - self.start_y;
    }
}
