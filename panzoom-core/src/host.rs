//! Style capability the controller drives.
//!
//! The controller never touches a rendering engine directly. It writes style
//! properties and reads resolved values through a [`StyleHost`], so a browser
//! DOM, a canvas scene or a plain geometric model can all sit underneath it.

use crate::css::{self, format_origin_percent};
use crate::points::{Point, Rect};

/// Which of the two attached elements a style operation addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// Outer clipping container.
    Viewport,
    /// Inner element that is scaled and translated.
    Surface,
}

/// Every style property the controller writes or reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    Overflow,
    Cursor,
    Position,
    TransformOrigin,
    Transform,
    Left,
    Top,
}

impl StyleProperty {
    pub fn as_css(&self) -> &'static str {
        match self {
            StyleProperty::Overflow => "overflow",
            StyleProperty::Cursor => "cursor",
            StyleProperty::Position => "position",
            StyleProperty::TransformOrigin => "transform-origin",
            StyleProperty::Transform => "transform",
            StyleProperty::Left => "left",
            StyleProperty::Top => "top",
        }
    }
}

pub trait StyleHost {
    /// Write an inline style property.
    fn set_style(&mut self, target: Target, property: StyleProperty, value: &str);

    /// Read the resolved (computed) value of a property, if the host can provide it.
    fn computed_style(&self, target: Target, property: StyleProperty) -> Option<String>;

    /// Current on-screen box of the element, transforms included.
    fn bounding_box(&self, target: Target) -> Rect;

    /// Set the surface's transform origin as a percentage of its own box and return
    /// the origin resolved to pixels relative to that box.
    ///
    /// The default performs the write/read round trip through computed style. Hosts
    /// that know their geometry can override this with a direct computation.
    fn resolve_origin(&mut self, percent: Point) -> Option<Point> {
        self.set_style(
            Target::Surface,
            StyleProperty::TransformOrigin,
            &format_origin_percent(percent),
        );

        let resolved = self.computed_style(Target::Surface, StyleProperty::TransformOrigin)?;
        match css::parse_origin(&resolved) {
            Ok((x, y)) => Some(Point::new(x, y)),
            Err(e) => {
                log::warn!("Unusable computed transform-origin {:?}: {}", resolved, e);
                None
            }
        }
    }

    /// Uniform scale of the surface's rendered transform, 1 when there is none.
    fn rendered_scale(&self) -> f64 {
        self.computed_style(Target::Surface, StyleProperty::Transform)
            .map(|transform| css::zoom_level(&transform))
            .unwrap_or(1.0)
    }

    /// Resolved `left`/`top` of the surface.
    fn rendered_offset(&self) -> Option<Point> {
        let read = |property: StyleProperty| {
            let value = self.computed_style(Target::Surface, property)?;
            match css::parse_px(&value) {
                Ok(px) => Some(px),
                Err(e) => {
                    log::warn!("Unusable computed {}: {}", property.as_css(), e);
                    None
                }
            }
        };

        Some(Point::new(read(StyleProperty::Left)?, read(StyleProperty::Top)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Host that echoes written values back as computed ones.
    #[derive(Default)]
    struct EchoHost {
        styles: HashMap<(Target, StyleProperty), String>,
    }

    impl StyleHost for EchoHost {
        fn set_style(&mut self, target: Target, property: StyleProperty, value: &str) {
            self.styles.insert((target, property), value.to_string());
        }

        fn computed_style(&self, target: Target, property: StyleProperty) -> Option<String> {
            self.styles.get(&(target, property)).cloned()
        }

        fn bounding_box(&self, _target: Target) -> Rect {
            Rect::new(0.0, 0.0, 100.0, 100.0)
        }
    }

    #[test]
    fn property_names() {
        assert_eq!(StyleProperty::TransformOrigin.as_css(), "transform-origin");
        assert_eq!(StyleProperty::Left.as_css(), "left");
    }

    #[test]
    fn default_resolve_origin_round_trips_through_computed_style() {
        let mut host = EchoHost::default();

        // Echo host resolves against a 100x100 box, so percent == px
        let resolved = host.resolve_origin(Point::new(40.0, 25.0));
        assert_eq!(resolved, Some(Point::new(40.0, 25.0)));
        assert_eq!(
            host.computed_style(Target::Surface, StyleProperty::TransformOrigin),
            Some("40% 25%".to_string())
        );
    }

    #[test]
    fn rendered_scale_defaults_to_one() {
        let mut host = EchoHost::default();
        assert_eq!(host.rendered_scale(), 1.0);

        host.set_style(Target::Surface, StyleProperty::Transform, "none");
        assert_eq!(host.rendered_scale(), 1.0);

        host.set_style(
            Target::Surface,
            StyleProperty::Transform,
            "matrix(3, 0, 0, 3, 0, 0)",
        );
        assert_eq!(host.rendered_scale(), 3.0);
    }

    #[test]
    fn rendered_offset_needs_both_axes() {
        let mut host = EchoHost::default();
        host.set_style(Target::Surface, StyleProperty::Left, "12px");
        assert_eq!(host.rendered_offset(), None);

        host.set_style(Target::Surface, StyleProperty::Top, "-8.5px");
        assert_eq!(host.rendered_offset(), Some(Point::new(12.0, -8.5)));

        host.set_style(Target::Surface, StyleProperty::Top, "auto");
        assert_eq!(host.rendered_offset(), None);
    }
}
