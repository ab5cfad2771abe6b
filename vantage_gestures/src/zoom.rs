// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Zoom scale computation and focal-point-preserving position shifts.
//!
//! Wheel ticks and discrete step commands use different empirically tuned
//! formulas; both are preserved exactly for behavioral compatibility. The
//! position shift keeps the focal point — the content-space coordinate under
//! the cursor or pinch midpoint — visually stationary across the scale
//! change, up to bounding-area clamping applied by the caller.

use kurbo::Point;

use vantage_geometry::round_to;

use crate::settings::Settings;

/// Computes the scale produced by one zoom gesture tick.
///
/// An explicit `target` scale is used verbatim (delta and step are ignored).
/// Otherwise the wheel formula applies when `step` is `None` and the step
/// formula when it is `Some`, both rounded to two decimals. A result that
/// would cross a finite `max_scale` from below snaps to exactly `max_scale`;
/// symmetric at `min_scale`.
#[must_use]
pub fn next_scale(
    settings: &Settings,
    scale: f64,
    delta: f64,
    step: Option<f64>,
    target: Option<f64>,
) -> f64 {
    if let Some(target) = target {
        return target;
    }
    let mut new_scale = match step {
        None => round_to(scale + delta * (settings.sensitivity * 0.1) * scale, 2),
        Some(step) => round_to(scale + step * delta * scale * 0.1 / 0.5, 2),
    };
    if settings.max_scale.is_finite() && new_scale >= settings.max_scale && scale < settings.max_scale
    {
        new_scale = settings.max_scale;
    }
    if settings.min_scale.is_finite() && new_scale <= settings.min_scale && scale > settings.min_scale
    {
        new_scale = settings.min_scale;
    }
    new_scale
}

/// Returns `true` when `scale` falls strictly outside the configured bounds.
///
/// The upper check only applies while both bounds are finite, matching the
/// scale invariant; a scale below `min_scale` is always out of bounds.
#[must_use]
pub fn outside_scale_bounds(settings: &Settings, scale: f64) -> bool {
    (settings.max_scale.is_finite() && settings.min_scale.is_finite() && scale > settings.max_scale)
        || scale < settings.min_scale
}

/// Shifts a translate offset so the focal point stays visually fixed.
///
/// `focal` is in content-space coordinates; the returned position is not yet
/// clamped to the bounding area.
#[must_use]
pub fn anchored_position(position: Point, focal: Point, scale_delta: f64) -> Point {
    Point::new(
        position.x - focal.x * scale_delta,
        position.y - focal.y * scale_delta,
    )
}
