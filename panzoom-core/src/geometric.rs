//! Layout-free [`StyleHost`] that resolves everything geometrically.
//!
//! Models a `position: relative` surface of fixed layout size sitting at the
//! top-left of its viewport, scaled about its transform origin. Useful for
//! canvas-style renderers and for driving the controller in tests.

use std::collections::HashMap;

use crate::css::{self, format_px};
use crate::host::{StyleHost, StyleProperty, Target};
use crate::points::{Point, Rect};

#[derive(Debug, Clone)]
pub struct GeometricSurface {
    viewport: Rect,
    width: f64,
    height: f64,
    left: f64,
    top: f64,
    scale: f64,
    transformed: bool,
    /// Origin as percentages of the surface box
    origin_percent: Point,
    styles: HashMap<(Target, StyleProperty), String>,
}

impl GeometricSurface {
    /// Surface of `width` x `height` layout pixels inside `viewport`.
    pub fn new(viewport: Rect, width: f64, height: f64) -> Self {
        Self {
            viewport,
            width,
            height,
            left: 0.0,
            top: 0.0,
            scale: 1.0,
            transformed: false,
            origin_percent: Point::new(50.0, 50.0),
            styles: HashMap::new(),
        }
    }

    /// Apply a transform behind the controller's back, as external styling would.
    pub fn with_transform(mut self, scale: f64) -> Self {
        self.scale = scale;
        self.transformed = true;
        self
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Last value written to a property, exactly as the controller wrote it.
    pub fn style(&self, target: Target, property: StyleProperty) -> Option<&str> {
        self.styles.get(&(target, property)).map(String::as_str)
    }

    /// Transform origin resolved to pixels relative to the surface's own box.
    pub fn resolved_origin(&self) -> Point {
        Point::new(
            self.origin_percent.x / 100.0 * self.width,
            self.origin_percent.y / 100.0 * self.height,
        )
    }

    /// Transform origin in client coordinates. Scaling leaves this point in place.
    pub fn page_origin(&self) -> Point {
        let origin = self.resolved_origin();
        Point::new(
            self.viewport.left + self.left + origin.x,
            self.viewport.top + self.top + origin.y,
        )
    }

    fn apply(&mut self, property: StyleProperty, value: &str) {
        match property {
            StyleProperty::Left => match css::parse_px(value) {
                Ok(px) => self.left = px,
                Err(e) => log::warn!("Ignoring left {:?}: {}", value, e),
            },
            StyleProperty::Top => match css::parse_px(value) {
                Ok(px) => self.top = px,
                Err(e) => log::warn!("Ignoring top {:?}: {}", value, e),
            },
            StyleProperty::Transform => {
                self.scale = css::zoom_level(value);
                self.transformed = value.trim() != "none";
            }
            StyleProperty::TransformOrigin => match css::parse_origin(value) {
                Ok((x, y)) => self.origin_percent = Point::new(x, y),
                Err(e) => log::warn!("Ignoring transform-origin {:?}: {}", value, e),
            },
            StyleProperty::Overflow | StyleProperty::Cursor | StyleProperty::Position => {}
        }
    }
}

impl StyleHost for GeometricSurface {
    fn set_style(&mut self, target: Target, property: StyleProperty, value: &str) {
        if target == Target::Surface {
            self.apply(property, value);
        }
        self.styles.insert((target, property), value.to_string());
    }

    fn computed_style(&self, target: Target, property: StyleProperty) -> Option<String> {
        if target == Target::Viewport {
            return self.styles.get(&(target, property)).cloned();
        }

        match property {
            StyleProperty::Left => Some(format_px(self.left)),
            StyleProperty::Top => Some(format_px(self.top)),
            StyleProperty::Transform if self.transformed => Some(format!(
                "matrix({s}, 0, 0, {s}, 0, 0)",
                s = self.scale
            )),
            StyleProperty::Transform => Some("none".to_string()),
            StyleProperty::TransformOrigin => {
                let origin = self.resolved_origin();
                Some(format!("{} {}", format_px(origin.x), format_px(origin.y)))
            }
            _ => self.styles.get(&(target, property)).cloned(),
        }
    }

    fn bounding_box(&self, target: Target) -> Rect {
        match target {
            Target::Viewport => self.viewport,
            Target::Surface => {
                let origin = self.resolved_origin();
                let layout_left = self.viewport.left + self.left;
                let layout_top = self.viewport.top + self.top;
                Rect::new(
                    layout_left + origin.x * (1.0 - self.scale),
                    layout_top + origin.y * (1.0 - self.scale),
                    self.width * self.scale,
                    self.height * self.scale,
                )
            }
        }
    }

    fn resolve_origin(&mut self, percent: Point) -> Option<Point> {
        self.set_style(
            Target::Surface,
            StyleProperty::TransformOrigin,
            &css::format_origin_percent(percent),
        );
        Some(self.resolved_origin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface() -> GeometricSurface {
        GeometricSurface::new(Rect::new(0.0, 0.0, 800.0, 600.0), 400.0, 200.0)
    }

    #[test]
    fn unscaled_box_matches_layout() {
        let mut s = surface();
        s.set_style(Target::Surface, StyleProperty::Left, "30px");
        s.set_style(Target::Surface, StyleProperty::Top, "-10px");

        assert_eq!(
            s.bounding_box(Target::Surface),
            Rect::new(30.0, -10.0, 400.0, 200.0)
        );
    }

    #[test]
    fn scaling_keeps_origin_fixed() {
        let mut s = surface();
        s.resolve_origin(Point::new(25.0, 50.0));
        let before = s.page_origin();

        s.set_style(Target::Surface, StyleProperty::Transform, "scale(2)");
        let rect = s.bounding_box(Target::Surface);

        assert_eq!(s.page_origin(), before);
        assert_eq!(rect.width, 800.0);
        // Origin sits at 25% of the scaled box as well
        assert_eq!(rect.left + rect.width * 0.25, before.x);
        assert_eq!(rect.top + rect.height * 0.5, before.y);
    }

    #[test]
    fn computed_values() {
        let mut s = surface();
        assert_eq!(
            s.computed_style(Target::Surface, StyleProperty::Transform),
            Some("none".to_string())
        );
        assert_eq!(
            s.computed_style(Target::Surface, StyleProperty::TransformOrigin),
            Some("200px 100px".to_string())
        );

        s.set_style(Target::Surface, StyleProperty::Transform, "scale(1.5)");
        assert_eq!(s.rendered_scale(), 1.5);

        s.set_style(Target::Viewport, StyleProperty::Cursor, "grab");
        assert_eq!(
            s.computed_style(Target::Viewport, StyleProperty::Cursor),
            Some("grab".to_string())
        );
    }

    #[test]
    fn external_transform_is_visible_to_probe() {
        let s = surface().with_transform(4.0);
        assert_eq!(s.rendered_scale(), 4.0);
    }
}
