// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::settings::Settings;

/// The 2D affine transform maintained by the engine.
///
/// While bounds are enabled, `scale` stays within the configured scale range
/// and the translate offsets stay within the bounding area derived from the
/// current wrapper/content sizes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Uniform scale factor applied to the content.
    pub scale: f64,
    /// Translate offset of the content's left edge, in wrapper pixels.
    pub position_x: f64,
    /// Translate offset of the content's top edge, in wrapper pixels.
    pub position_y: f64,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            position_x: 0.0,
            position_y: 0.0,
        }
    }
}

/// Complete state snapshot handed to every lifecycle callback.
///
/// One explicit value combining the current [`Transform`] with the engine's
/// [`Settings`], so callbacks always see a consistent picture without
/// reaching back into the engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureSnapshot {
    /// Transform at the moment the event was emitted.
    pub transform: Transform,
    /// The engine's immutable configuration.
    pub settings: Settings,
}
