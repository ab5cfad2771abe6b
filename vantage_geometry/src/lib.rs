// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage Geometry: pure geometry helpers for viewport pan/zoom.
//!
//! This crate provides the small, stateless computations that a pan/zoom
//! engine needs on every gesture tick:
//!
//! - [`measure`]: pointer position relative to a wrapper rectangle, plus
//!   wrapper/content dimensions and their size deficits.
//! - [`bounding_area`]: the legal range of translate offsets for the current
//!   wrapper and content sizes.
//! - [`bound_limiter`]: clamping that tolerates inverted and disabled ranges.
//! - [`distance`] / [`midpoint_in_content`]: two-pointer helpers for pinch
//!   gestures.
//! - [`round_to`] / [`finite_or`]: numeric hygiene helpers.
//!
//! Everything here is a pure function over [`kurbo`] primitives; no state is
//! kept between calls. Stateful gesture tracking lives in `vantage_gestures`.
//!
//! ## Coordinate conventions
//!
//! The *wrapper* is the fixed viewport rectangle; the *content* is the
//! transformable surface inside it. Pointer positions handed to [`measure`]
//! are expected in the same coordinate space as the wrapper rectangle
//! (typically window/page pixels); the result is wrapper-relative.
//!
//! Translate offsets follow the content's top-left corner: an offset of zero
//! aligns content and wrapper origins, negative X slides the content left.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use vantage_geometry::{bound_limiter, bounding_area, measure};
//!
//! let wrapper = Rect::new(100.0, 100.0, 600.0, 600.0);
//! let content = Rect::new(100.0, 100.0, 800.0, 600.0);
//!
//! let m = measure(Point::new(350.0, 400.0), wrapper, content);
//! assert_eq!(m.x, 250.0);
//! assert_eq!(m.diff_width, -200.0);
//!
//! // Content is wider than the wrapper: it may slide left by the deficit.
//! let area = bounding_area(Size::new(500.0, 500.0), Size::new(700.0, 500.0), false);
//! assert_eq!((area.min_x, area.max_x), (-200.0, 0.0));
//!
//! // Dragging past the wrapper's left edge clamps back to zero.
//! assert_eq!(bound_limiter(50.0, area.min_x, area.max_x, true), 0.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("vantage_geometry requires either the `std` or `libm` feature");

mod bounds;
mod coords;

pub use bounds::{BoundingArea, bound_limiter, bounding_area};
pub use coords::{Measurement, distance, finite_or, measure, midpoint_in_content, round_to};
