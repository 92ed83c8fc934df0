use crate::constants::CSS_DECIMALS;
use std::fmt::Write;

/// Visual transform written to the surface once per frame (or on press).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CardTransform {
    Tilt {
        rotate_x_deg: f32,
        rotate_y_deg: f32,
        perspective_px: f32,
    },
    Pressed {
        scale: f32,
        perspective_px: f32,
    },
}

impl CardTransform {
    /// Render as a CSS `transform` value.
    pub fn to_css(&self) -> String {
        let mut out = String::with_capacity(64);
        match *self {
            CardTransform::Tilt {
                rotate_x_deg,
                rotate_y_deg,
                perspective_px,
            } => {
                _ = write!(
                    out,
                    "perspective({}px) rotateX({}deg) rotateY({}deg)",
                    css_number(perspective_px),
                    css_number(rotate_x_deg),
                    css_number(rotate_y_deg)
                );
            }
            CardTransform::Pressed {
                scale,
                perspective_px,
            } => {
                _ = write!(
                    out,
                    "perspective({}px) scale({})",
                    css_number(perspective_px),
                    css_number(scale)
                );
            }
        }
        out
    }
}

/// Fixed-precision number without trailing zeros; `-0` prints as `0`.
pub fn css_number(v: f32) -> String {
    let mut s = format!("{:.*}", CSS_DECIMALS, v);
    if s.contains('.') {
        while s.ends_with('0') {
            s.pop();
        }
        if s.ends_with('.') {
            s.pop();
        }
    }
    if s == "-0" {
        s.remove(0);
    }
    s
}
