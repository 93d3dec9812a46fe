//! Gesture-to-transform state machine.
//!
//! Translates wheel, mouse and touch events into a uniform scale plus a
//! `left`/`top` translation of the surface, keeping the zoom focal point
//! (cursor or pinch midpoint) visually fixed.

use crate::config::{ConfigError, ZoomConfig};
use crate::css::{format_px, format_scale};
use crate::events::{EventResponse, GestureEvent};
use crate::host::{StyleHost, StyleProperty, Target};
use crate::points::Point;
use crate::state::InteractionState;

const CURSOR_GRAB: &str = "grab";
const CURSOR_GRABBING: &str = "grabbing";

/// Owns the interaction state of one viewport/surface pair.
#[derive(Debug, Clone, Default)]
pub struct GestureController {
    config: ZoomConfig,
    state: InteractionState,
}

impl GestureController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ZoomConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            state: InteractionState::default(),
        })
    }

    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    /// Snapshot of the current interaction state.
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Return to the pristine state. Call when the surface is torn down so a
    /// later `attach` starts from scratch.
    pub fn reset(&mut self) {
        self.state = InteractionState::default();
    }

    /// Prepare the element pair: clip the viewport, make the surface positionable,
    /// and show a grab cursor unless `user_agent` is a touch-first platform.
    ///
    /// Listener registration is left to the platform binding.
    pub fn attach<H: StyleHost + ?Sized>(&self, host: &mut H, user_agent: &str) {
        host.set_style(Target::Viewport, StyleProperty::Overflow, "hidden");
        host.set_style(Target::Surface, StyleProperty::Position, "relative");

        if !self.config.is_mobile_user_agent(user_agent) {
            host.set_style(Target::Viewport, StyleProperty::Cursor, CURSOR_GRAB);
        }
    }

    /// Run one event to completion against `host`.
    pub fn handle<H: StyleHost + ?Sized>(
        &mut self,
        host: &mut H,
        event: &GestureEvent,
    ) -> EventResponse {
        match event {
            GestureEvent::Wheel { client, delta_y } => self.on_wheel(host, *client, *delta_y),
            GestureEvent::PointerDown { client } => self.on_pointer_down(host, *client),
            GestureEvent::PointerMove { client } => self.on_pointer_move(host, *client),
            GestureEvent::PointerUp { client } | GestureEvent::PointerLeave { client } => {
                self.on_pointer_up(host, *client)
            }
            GestureEvent::TouchStart { touches } => self.on_touch_start(host, touches),
            GestureEvent::TouchMove { touches } => self.on_touch_move(host, touches),
            GestureEvent::TouchEnd { .. } => self.on_touch_end(host),
        }
    }

    fn on_wheel<H: StyleHost + ?Sized>(
        &mut self,
        host: &mut H,
        client: Point,
        delta_y: f64,
    ) -> EventResponse {
        let raw = self.state.scale - delta_y * self.config.wheel_sensitivity;
        let stepped = round_to_step(self.config.clamp_scale(raw), self.config.wheel_step);
        self.state.scale = self.config.clamp_scale(stepped);
        log::debug!("wheel zoom: scale={}", self.state.scale);

        if let Some(position) = self.zoom_at(host, client) {
            self.state.end_x = position.x;
            self.state.end_y = position.y;
        }

        EventResponse::prevent_default()
    }

    fn on_pointer_down<H: StyleHost + ?Sized>(
        &mut self,
        host: &mut H,
        client: Point,
    ) -> EventResponse {
        host.set_style(Target::Viewport, StyleProperty::Cursor, CURSOR_GRABBING);
        self.begin_pan(client);
        EventResponse::prevent_default()
    }

    fn on_pointer_move<H: StyleHost + ?Sized>(
        &mut self,
        host: &mut H,
        client: Point,
    ) -> EventResponse {
        if self.state.panning {
            self.preview_pan(host, client);
        }
        EventResponse::pass_through()
    }

    fn on_pointer_up<H: StyleHost + ?Sized>(
        &mut self,
        host: &mut H,
        client: Point,
    ) -> EventResponse {
        if self.state.panning {
            host.set_style(Target::Viewport, StyleProperty::Cursor, CURSOR_GRAB);
            self.state.panning = false;
            self.state.commit_drag(client.x, client.y);
            log::debug!(
                "pan committed: end=({}, {})",
                self.state.end_x,
                self.state.end_y
            );
        }
        EventResponse::pass_through()
    }

    fn on_touch_start<H: StyleHost + ?Sized>(
        &mut self,
        host: &mut H,
        touches: &[Point],
    ) -> EventResponse {
        match touches {
            [touch] => self.begin_pan(*touch),
            [first, second] => {
                self.state.initial_touch_gap = first.distance(second);
                // Another party may have restyled the surface since our last write
                self.state.scale = self.config.clamp_scale(host.rendered_scale());
                log::debug!(
                    "pinch start: gap={}, scale={}",
                    self.state.initial_touch_gap,
                    self.state.scale
                );
            }
            _ => {}
        }
        EventResponse::prevent_default()
    }

    fn on_touch_move<H: StyleHost + ?Sized>(
        &mut self,
        host: &mut H,
        touches: &[Point],
    ) -> EventResponse {
        match touches {
            [touch] if self.state.panning => self.preview_pan(host, *touch),
            [first, second] => {
                let midpoint = first.midpoint(second);
                let gap = first.distance(second);

                let baseline = self.state.initial_touch_gap;
                let ratio = if baseline.is_finite() && baseline > 0.0 {
                    gap / baseline
                } else {
                    // Both fingers started on the same spot; measure from here instead
                    self.state.initial_touch_gap = gap;
                    1.0
                };

                let factor = 1.0 + self.config.pinch_damper * (ratio - 1.0);
                self.state.scale = self.config.clamp_scale(self.state.scale * factor);
                log::debug!("pinch zoom: scale={}", self.state.scale);

                self.zoom_at(host, midpoint);
            }
            _ => {}
        }
        EventResponse::prevent_default()
    }

    fn on_touch_end<H: StyleHost + ?Sized>(&mut self, host: &mut H) -> EventResponse {
        self.state.panning = false;

        // Read back rather than accumulate: the last move may have been a pan or a pinch
        match host.rendered_offset() {
            Some(offset) => {
                self.state.end_x = offset.x;
                self.state.end_y = offset.y;
            }
            None => log::warn!("Surface offset unavailable on touch end, keeping last position"),
        }
        EventResponse::pass_through()
    }

    fn begin_pan(&mut self, client: Point) {
        self.state.panning = true;
        self.state.start_x = client.x;
        self.state.start_y = client.y;
    }

    fn preview_pan<H: StyleHost + ?Sized>(&self, host: &mut H, client: Point) {
        let (x, y) = self.state.drag_position(client.x, client.y);
        host.set_style(Target::Surface, StyleProperty::Left, &format_px(x));
        host.set_style(Target::Surface, StyleProperty::Top, &format_px(y));
    }

    /// Apply the current scale around `anchor` and shift the surface so the anchor
    /// stays put on screen. Returns the new top-left offset, or `None` when the host
    /// could not resolve the origin (position is then left unchanged).
    fn zoom_at<H: StyleHost + ?Sized>(&self, host: &mut H, anchor: Point) -> Option<Point> {
        let rect = host.bounding_box(Target::Surface);
        let percent = rect.percent_of(anchor).unwrap_or_else(|| {
            log::warn!("Degenerate surface box {:?}, zooming about its centre", rect);
            Point::new(50.0, 50.0)
        });

        let origin = host.resolve_origin(percent);
        host.set_style(
            Target::Surface,
            StyleProperty::Transform,
            &format_scale(self.state.scale),
        );
        let origin = origin?;

        let position = Point::new(anchor.x - origin.x, anchor.y - origin.y);
        host.set_style(Target::Surface, StyleProperty::Left, &format_px(position.x));
        host.set_style(Target::Surface, StyleProperty::Top, &format_px(position.y));
        Some(position)
    }
}

/// Round to the nearest multiple of `step`, e.g. one decimal for `0.1`.
fn round_to_step(value: f64, step: f64) -> f64 {
    let inverse = 1.0 / step;
    (value * inverse).round() / inverse
}
