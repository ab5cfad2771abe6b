// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

/// Pointer and box geometry for one gesture tick.
///
/// Computed fresh by [`measure`] from the current wrapper and content
/// rectangles; nothing here survives the tick it was measured on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    /// Pointer X relative to the wrapper's top-left corner.
    pub x: f64,
    /// Pointer Y relative to the wrapper's top-left corner.
    pub y: f64,
    /// Wrapper width.
    pub wrapper_width: f64,
    /// Wrapper height.
    pub wrapper_height: f64,
    /// Content width.
    pub content_width: f64,
    /// Content height.
    pub content_height: f64,
    /// `wrapper_width - content_width`; negative when content overflows.
    pub diff_width: f64,
    /// `wrapper_height - content_height`; negative when content overflows.
    pub diff_height: f64,
}

/// Measures a pointer position against the wrapper and content rectangles.
///
/// `pointer` must be in the same coordinate space as the rectangles. For
/// touch events, callers pass the first touch point.
#[must_use]
pub fn measure(pointer: Point, wrapper: Rect, content: Rect) -> Measurement {
    let wrapper_size = wrapper.size();
    let content_size = content.size();
    Measurement {
        x: pointer.x - wrapper.x0,
        y: pointer.y - wrapper.y0,
        wrapper_width: wrapper_size.width,
        wrapper_height: wrapper_size.height,
        content_width: content_size.width,
        content_height: content_size.height,
        diff_width: wrapper_size.width - content_size.width,
        diff_height: wrapper_size.height - content_size.height,
    }
}

/// Euclidean distance between two screen points.
#[must_use]
pub fn distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

/// Midpoint of two screen points, converted into content-local coordinates.
///
/// The midpoint is offset by the content origin and divided by `scale`, so a
/// pinch gesture can feed it straight into the zoom engine as a focal point.
#[must_use]
pub fn midpoint_in_content(a: Point, b: Point, content_origin: Point, scale: f64) -> Point {
    let mid = a.midpoint(b);
    Point::new(
        (mid.x - content_origin.x) / scale,
        (mid.y - content_origin.y) / scale,
    )
}

/// Rounds `value` to the given number of decimal places.
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let mut factor = 1.0;
    for _ in 0..decimals {
        factor *= 10.0;
    }
    round(value * factor) / factor
}

/// Returns `candidate` if it is a finite number, otherwise `fallback`.
#[must_use]
pub fn finite_or(candidate: f64, fallback: f64) -> f64 {
    if candidate.is_finite() {
        candidate
    } else {
        fallback
    }
}

#[inline]
fn round(x: f64) -> f64 {
    #[cfg(feature = "std")]
    {
        x.round()
    }
    #[cfg(all(not(feature = "std"), feature = "libm"))]
    {
        libm::round(x)
    }
}
