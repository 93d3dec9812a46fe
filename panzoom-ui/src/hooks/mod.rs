mod use_zoomable;

pub use use_zoomable::{use_zoomable, ZoomControls};
