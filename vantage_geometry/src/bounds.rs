// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

/// Legal range of translate offsets for the current wrapper/content sizes.
///
/// Produced fresh by [`bounding_area`] on every gesture tick; never cached.
/// Ranges may be inverted or collapsed to a single value — [`bound_limiter`]
/// treats an inverted range as "no effective clamp".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundingArea {
    /// Minimum translate offset on the X axis.
    pub min_x: f64,
    /// Maximum translate offset on the X axis.
    pub max_x: f64,
    /// Minimum translate offset on the Y axis.
    pub min_y: f64,
    /// Maximum translate offset on the Y axis.
    pub max_y: f64,
}

/// Computes the pan range for one axis.
///
/// `diff` is `wrapper - content`. When content exceeds the wrapper the content
/// may slide until its far edge meets the wrapper edge, giving `[diff, 0]`.
/// When content fits, the axis is pinned centered at `diff / 2`, unless
/// `zoomed_out_panning` opens the full `[0, diff]` deficit so content can be
/// dragged back into view below 1:1.
fn axis_range(wrapper: f64, content: f64, zoomed_out_panning: bool) -> (f64, f64) {
    let diff = wrapper - content;
    if content > wrapper {
        (diff, 0.0)
    } else if zoomed_out_panning {
        (0.0, diff)
    } else {
        (diff / 2.0, diff / 2.0)
    }
}

/// Computes the bounding area for the given wrapper and content sizes.
///
/// Each axis follows the rule documented on [`BoundingArea`]: oversized
/// content pans within `[deficit, 0]`; undersized content is centered, or —
/// with `zoomed_out_panning` — pans across the full deficit.
#[must_use]
pub fn bounding_area(wrapper: Size, content: Size, zoomed_out_panning: bool) -> BoundingArea {
    let (min_x, max_x) = axis_range(wrapper.width, content.width, zoomed_out_panning);
    let (min_y, max_y) = axis_range(wrapper.height, content.height, zoomed_out_panning);
    BoundingArea {
        min_x,
        max_x,
        min_y,
        max_y,
    }
}

/// Clamps `value` into `[min, max]` when `limit_enabled` is set.
///
/// An inverted range (`min > max`, including `NaN` endpoints) applies no
/// clamp at all: the `[negative, 0]` oversized-content ranges only hold when
/// content actually exceeds the wrapper, and callers with bounds limiting
/// disabled pass through unchanged.
#[must_use]
pub fn bound_limiter(value: f64, min: f64, max: f64, limit_enabled: bool) -> f64 {
    if !limit_enabled || !(min <= max) {
        value
    } else {
        value.clamp(min, max)
    }
}
