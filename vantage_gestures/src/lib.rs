// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage Gestures: a headless pan/zoom gesture engine.
//!
//! This crate turns a raw pointer/touch/wheel event stream into a clamped 2D
//! affine transform (`scale`, `position_x`, `position_y`) over a content
//! surface hosted inside a fixed wrapper viewport. It owns the numerical and
//! state-machine core only:
//!
//! - wheel zoom with focal-point preservation and an optional throttle window,
//! - single-pointer (and single-touch) panning with bounding-area clamps,
//! - two-touch pinch zoom with direction-reversal hysteresis,
//! - step zoom commands ([`GestureEngine::zoom_in`], double click) and
//!   programmatic reset,
//! - a gesture phase machine that keeps exactly one gesture family driving
//!   the transform at a time.
//!
//! It does **not** render, attach event listeners, or own any element tree.
//! Hosts provide:
//!
//! - a [`ViewportMetrics`] implementation returning the current wrapper and
//!   content rectangles (queried fresh on every tick, never cached here),
//! - the event stream, translated into the engine's entry points,
//! - a monotonic `now` timestamp in host time units (typically milliseconds)
//!   with every call.
//!
//! There are no real timers: the engine tracks deadlines (wheel-idle timeout,
//! animation-tag clearing) internally and fires them either lazily on the
//! next call or when the host invokes [`GestureEngine::advance`] at the
//! instant reported by [`GestureEngine::next_deadline`].
//!
//! Every entry point returns the [`GestureEvent`]s produced by that call —
//! lifecycle transitions carrying a complete [`GestureSnapshot`] — which the
//! host forwards to its own callbacks.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use vantage_gestures::{GestureEngine, Lifecycle, Settings, ViewportMetrics};
//!
//! struct Fixed;
//! impl ViewportMetrics for Fixed {
//!     fn wrapper_rect(&self) -> Rect {
//!         Rect::new(0.0, 0.0, 500.0, 500.0)
//!     }
//!     fn content_rect(&self) -> Rect {
//!         Rect::new(0.0, 0.0, 500.0, 500.0)
//!     }
//! }
//!
//! let mut engine = GestureEngine::new(Settings::default());
//!
//! // A wheel tick with negative delta zooms in around the pointer.
//! let events = engine.wheel(&Fixed, Point::new(250.0, 250.0), -1.0, 0);
//! assert_eq!(events[0].lifecycle, Lifecycle::WheelStart);
//! assert_eq!(events[1].lifecycle, Lifecycle::Wheel);
//! assert_eq!(engine.transform().scale, 1.1);
//!
//! // The wheel gesture ends once its idle timeout elapses.
//! assert_eq!(engine.next_deadline(), Some(100));
//! let events = engine.advance(100);
//! assert_eq!(events[0].lifecycle, Lifecycle::WheelStop);
//! ```
//!
//! ## Failure modes
//!
//! Nothing here panics or returns errors: disabled gestures, wrong pointer
//! counts, out-of-bounds zoom targets, and non-finite focal coordinates all
//! degrade to "transform unchanged, no event emitted". Misuse worth
//! surfacing — a step zoom command without its triggering event, or a
//! non-finite pointer offset — is reported through the [`log`] facade.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod engine;
mod events;
mod pan;
mod pinch;
mod settings;
mod transform;
mod zoom;

pub use engine::GestureEngine;
pub use events::{AnimationTag, GestureEvent, GesturePhase, Lifecycle, ViewportMetrics};
pub use pan::PanState;
pub use pinch::PinchTracker;
pub use settings::Settings;
pub use transform::{GestureSnapshot, Transform};
pub use zoom::{anchored_position, next_scale, outside_scale_bounds};
