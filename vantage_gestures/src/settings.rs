// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Immutable per-instance configuration for a [`crate::GestureEngine`].
///
/// The engine reads these on every operation and never mutates them. Scale
/// bounds only take effect while both are finite numbers; the engine does not
/// validate contradictory configurations such as `min_scale > max_scale`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settings {
    /// Lower bound for `scale`.
    pub min_scale: f64,
    /// Upper bound for `scale`.
    pub max_scale: f64,
    /// Wheel zoom sensitivity; scale moves by `delta * sensitivity * 0.1`
    /// per tick, proportionally to the current scale.
    pub sensitivity: f64,
    /// Step applied by [`crate::GestureEngine::zoom_in`].
    pub zoom_in_step: f64,
    /// Step applied by [`crate::GestureEngine::zoom_out`].
    pub zoom_out_step: f64,
    /// Step applied by a double click.
    pub double_click_step: f64,
    /// Pinch zoom sensitivity multiplier.
    pub pinch_sensitivity: f64,
    /// Clamp translate offsets to the bounding area.
    pub limit_to_bounds: bool,
    /// Allow panning across the full size deficit while zoomed below 1:1.
    pub zoomed_out_panning: bool,
    /// Master switch for all zoom gestures.
    pub zooming_enabled: bool,
    /// Master switch for panning.
    pub panning_enabled: bool,
    /// Master switch for pinch zoom.
    pub pinch_enabled: bool,
    /// When cleared, scale and position mutations are suppressed entirely.
    pub transform_enabled: bool,
    /// Disables every gesture; in-flight state may still be torn down by
    /// stop events.
    pub disabled: bool,
    /// Step zoom commands aim at the last recorded pointer position instead
    /// of the pointer that triggered them.
    pub last_position_zoom_enabled: bool,
    /// Suppress further zooms for a short window after each applied zoom.
    pub zoom_throttling_enabled: bool,
    /// Enable double-click step zoom.
    pub double_click_enabled: bool,
    /// Scale restored by [`crate::GestureEngine::reset_transform`].
    pub default_scale: f64,
    /// X offset restored by [`crate::GestureEngine::reset_transform`].
    pub default_position_x: f64,
    /// Y offset restored by [`crate::GestureEngine::reset_transform`].
    pub default_position_y: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_scale: 0.5,
            max_scale: 8.0,
            sensitivity: 1.0,
            zoom_in_step: 1.0,
            zoom_out_step: 1.0,
            double_click_step: 2.0,
            pinch_sensitivity: 1.0,
            limit_to_bounds: true,
            zoomed_out_panning: false,
            zooming_enabled: true,
            panning_enabled: true,
            pinch_enabled: true,
            transform_enabled: true,
            disabled: false,
            last_position_zoom_enabled: false,
            zoom_throttling_enabled: false,
            double_click_enabled: true,
            default_scale: 1.0,
            default_position_x: 0.0,
            default_position_y: 0.0,
        }
    }
}
