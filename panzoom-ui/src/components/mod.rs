pub mod zoomable;

pub use zoomable::Zoomable;
