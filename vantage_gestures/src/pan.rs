// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag session bookkeeping for the pan engine.
//!
//! A pan records the offset between the pointer and the content origin at
//! gesture start and holds it constant through the drag: each move maps the
//! current pointer position back to a candidate translate offset, which the
//! engine then clamps against the bounding area for the current tick.

use kurbo::{Point, Vec2};

use vantage_geometry::round_to;

/// Tracks one drag session.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanState {
    start_offset: Option<Vec2>,
    last_pointer: Option<Point>,
}

impl PanState {
    /// Starts a drag with the pointer at `pointer_rel` (wrapper-relative)
    /// while the content sits at `position`.
    pub fn start(&mut self, pointer_rel: Point, position: Point) {
        self.start_offset = Some(pointer_rel - position);
        self.last_pointer = Some(pointer_rel);
    }

    /// Returns `true` while a drag session is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.start_offset.is_some()
    }

    /// Maps a pointer position to the translate offset that keeps the start
    /// offset constant, rounded to two decimals. `None` unless dragging.
    pub fn target_position(&mut self, pointer_rel: Point) -> Option<Point> {
        let offset = self.start_offset?;
        self.last_pointer = Some(pointer_rel);
        Some(Point::new(
            round_to(pointer_rel.x - offset.x, 2),
            round_to(pointer_rel.y - offset.y, 2),
        ))
    }

    /// Ends the drag, returning the last pointer position translated into
    /// content coordinates for later zoom-to-last-position use.
    pub fn end(&mut self, scale: f64) -> Option<Point> {
        self.start_offset = None;
        self.last_pointer
            .take()
            .map(|p| Point::new(p.x / scale, p.y / scale))
    }
}
