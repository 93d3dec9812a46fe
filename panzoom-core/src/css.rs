//! Formatting of the style values the controller writes, and parsing of the
//! computed values it reads back.

use thiserror::Error;

use crate::points::Point;

#[derive(Debug, Error, PartialEq)]
pub enum CssValueError {
    #[error("Empty CSS value")]
    Empty,

    #[error("CSS value {value:?} has no component at index {index}")]
    MissingComponent { value: String, index: usize },

    #[error("Not a number: {0:?}")]
    NotANumber(String),

    #[error("No transform function in {0:?}")]
    NoTransformFunction(String),
}

pub fn format_px(value: f64) -> String {
    format!("{}px", value)
}

/// `transform-origin` value expressed as percentages of the element box.
pub fn format_origin_percent(percent: Point) -> String {
    format!("{}% {}%", percent.x, percent.y)
}

pub fn format_scale(scale: f64) -> String {
    format!("scale({})", scale)
}

/// Parse the leading number of a CSS length, the way `parseFloat` reads `"12.5px"`.
pub fn parse_px(value: &str) -> Result<f64, CssValueError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CssValueError::Empty);
    }

    let numeric: String = trimmed
        .chars()
        .take_while(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
        .collect();

    numeric
        .parse::<f64>()
        .map_err(|_| CssValueError::NotANumber(trimmed.to_string()))
}

/// Parse a resolved `transform-origin` such as `"120px 45.5px"` or `"120px 45.5px 0px"`.
pub fn parse_origin(value: &str) -> Result<(f64, f64), CssValueError> {
    if value.trim().is_empty() {
        return Err(CssValueError::Empty);
    }

    let mut parts = value.split_whitespace();
    let mut component = |index: usize| {
        parts
            .next()
            .ok_or_else(|| CssValueError::MissingComponent {
                value: value.to_string(),
                index,
            })
            .and_then(parse_px)
    };

    let x = component(0)?;
    let y = component(1)?;
    Ok((x, y))
}

/// First numeric argument of a transform function, e.g. `2` in `matrix(2, 0, 0, 2, 0, 0)`.
pub fn parse_matrix_scale(transform: &str) -> Result<f64, CssValueError> {
    let trimmed = transform.trim();
    if trimmed.is_empty() {
        return Err(CssValueError::Empty);
    }

    let first = trimmed.split(',').next().unwrap_or(trimmed);
    let (_, argument) = first
        .split_once('(')
        .ok_or_else(|| CssValueError::NoTransformFunction(trimmed.to_string()))?;

    parse_px(argument)
}

/// Approximate uniform zoom of a computed 2D transform.
///
/// Yields 1 for `none`, an empty value, or anything without a numeric first argument.
pub fn zoom_level(transform: &str) -> f64 {
    match parse_matrix_scale(transform) {
        Ok(scale) if scale.is_finite() => scale,
        _ => 1.0,
    }
}
