// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-touch pinch tracking.
//!
//! [`PinchTracker`] keeps the last two observed finger separations. The
//! previous distance only advances when the separation direction reverses,
//! so per-frame micro-jitter is not read as a reversal; the running diff
//! against that baseline feeds the empirically tuned [`pinch_scale`]
//! formula. Both behaviors are preserved exactly from field-tuned values —
//! no cleaner physics has a documented derivation.

use vantage_geometry::round_to;

use crate::settings::Settings;

/// Distance history for an in-flight pinch gesture.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PinchTracker {
    distance: Option<f64>,
    previous: Option<f64>,
}

impl PinchTracker {
    /// Feeds one observed finger separation into the history.
    ///
    /// Returns the separation diff (`previous - length`) to zoom by, or
    /// `None` on the seeding observation when no direction baseline exists
    /// yet.
    pub fn observe(&mut self, length: f64) -> Option<f64> {
        let Some(current) = self.distance else {
            self.distance = Some(length);
            self.previous = Some(length);
            return None;
        };
        if let Some(previous) = self.previous {
            let reversed = (current < length && previous > length)
                || (current > length && previous < length);
            if reversed {
                self.previous = Some(current);
            }
        }
        self.distance = Some(length);
        self.previous.map(|previous| previous - length)
    }

    /// Returns `true` once a separation has been observed.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.distance.is_some()
    }

    /// Clears the distance history.
    pub fn reset(&mut self) {
        self.distance = None;
        self.previous = None;
    }
}

/// Computes the candidate scale for one pinch tick.
///
/// `diff` is the separation diff returned by [`PinchTracker::observe`]; a
/// shrinking separation (positive diff) zooms out, a growing one zooms in.
#[must_use]
pub fn pinch_scale(
    settings: &Settings,
    scale: f64,
    wrapper_width: f64,
    content_width: f64,
    diff: f64,
) -> f64 {
    let delta = if diff > 0.0 { 1.0 } else { -1.0 };
    let factor = (content_width - diff) / scale / wrapper_width * settings.pinch_sensitivity;
    round_to(scale - factor * scale * delta * 0.025, 2)
}
