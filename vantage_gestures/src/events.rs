// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use kurbo::Rect;

use crate::transform::GestureSnapshot;

/// Measurement service for the hosting environment's element geometry.
///
/// The engine queries this fresh on every gesture tick — implementations must
/// return current geometry, and the engine never caches the result across
/// ticks. Both rectangles are expected in the same coordinate space as the
/// pointer positions handed to the engine.
pub trait ViewportMetrics {
    /// Rectangle of the fixed wrapper viewport.
    fn wrapper_rect(&self) -> Rect;
    /// Rectangle of the content surface hosted inside the wrapper.
    fn content_rect(&self) -> Rect;
}

/// Lifecycle notifications emitted by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// First wheel tick of a wheel gesture.
    WheelStart,
    /// A wheel tick within an active wheel gesture.
    Wheel,
    /// The wheel-idle timeout elapsed.
    WheelStop,
    /// A drag began.
    PanStart,
    /// The transform moved during a drag.
    Pan,
    /// The drag ended.
    PanStop,
    /// A second touch point appeared.
    PinchStart,
    /// A pinch tick changed the scale.
    Pinch,
    /// A tracked pinch ended.
    PinchStop,
}

/// One lifecycle notification plus the state snapshot taken as it fired.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureEvent {
    /// Which lifecycle transition occurred.
    pub lifecycle: Lifecycle,
    /// Transform and configuration at emission time.
    pub snapshot: GestureSnapshot,
}

/// Tag carried by [`GesturePhase::Animation`].
///
/// Hosts typically key CSS-transition/animation timing off this value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AnimationTag {
    /// A programmatic reset to the default transform.
    Reset,
    /// A discrete zoom command (zoom in/out buttons, double click).
    StepZoom,
    /// A caller-supplied animation name.
    Custom(String),
}

/// Classification of the current interactive session.
///
/// Exposed for UI affordances — e.g. suppressing transitions during a drag
/// and enabling them during an animated reset. Exactly one gesture family
/// drives the transform at a time.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A wheel gesture is active (idle timeout pending).
    Wheel,
    /// A drag is active.
    Pan,
    /// A two-touch pinch is active.
    Pinch,
    /// A programmatic transform change; cleared shortly after so a render
    /// pass can pick the tag up for animation timing.
    Animation(AnimationTag),
}
