pub mod config;
pub mod controller;
pub mod css;
pub mod events;
pub mod geometric;
pub mod host;
pub mod points;
pub mod state;

pub use config::{ConfigError, ZoomConfig, MAX_ZOOM, MIN_ZOOM, MOBILE_USER_AGENT_TOKENS};
pub use controller::GestureController;
pub use css::{zoom_level, CssValueError};
pub use events::{EventResponse, GestureEvent};
pub use geometric::GeometricSurface;
pub use host::{StyleHost, StyleProperty, Target};
pub use points::{Point, Rect};
pub use state::InteractionState;
