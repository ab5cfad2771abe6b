// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture engine: event routing, phase machine, and deadlines.

use alloc::string::ToString;
use alloc::vec::Vec;

use kurbo::{Point, Size};
use log::{error, warn};

use vantage_geometry::{
    Measurement, bound_limiter, bounding_area, distance, finite_or, measure, midpoint_in_content,
    round_to,
};

use crate::events::{AnimationTag, GestureEvent, GesturePhase, Lifecycle, ViewportMetrics};
use crate::pan::PanState;
use crate::pinch::{PinchTracker, pinch_scale};
use crate::settings::Settings;
use crate::transform::{GestureSnapshot, Transform};
use crate::zoom::{anchored_position, next_scale, outside_scale_bounds};

/// Idle window after the last wheel tick before the wheel gesture ends.
const WHEEL_IDLE_TIMEOUT: u64 = 100;
/// Guard window suppressing further zooms after an applied zoom.
const ZOOM_THROTTLE_WINDOW: u64 = 1;
/// Delay before an [`GesturePhase::Animation`] tag is cleared again.
const ANIMATION_CLEAR_DELAY: u64 = 1;
/// Travel distance before a single touch arms a pan, in pixels.
const TOUCH_PAN_SLOP: f64 = 1.0;

/// Headless pan/zoom gesture engine for one wrapper/content pair.
///
/// All entry points take a monotonic `now` timestamp in host time units and
/// return the lifecycle events produced by the call; see the crate docs for
/// the host contract. One engine instance owns all of its gesture state —
/// hosting several independent viewports means one engine each, with no
/// cross-instance coupling.
#[derive(Clone, Debug)]
pub struct GestureEngine {
    settings: Settings,
    transform: Transform,
    phase: GesturePhase,
    pan: PanState,
    pinch: PinchTracker,
    /// Touch X recorded at a one-touch start; panning arms once the touch
    /// travels past the slop distance.
    touch_pan_anchor: Option<f64>,
    /// Last focal/pointer position in content space, for
    /// `last_position_zoom_enabled`.
    last_zoom_position: Option<Point>,
    wheel_deadline: Option<u64>,
    animation_clear: Option<(u64, AnimationTag)>,
    throttle_until: Option<u64>,
}

impl GestureEngine {
    /// Creates an engine with the given configuration and the transform at
    /// the configured defaults.
    #[must_use]
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            transform: Transform {
                scale: finite_or(settings.default_scale, 1.0),
                position_x: finite_or(settings.default_position_x, 0.0),
                position_y: finite_or(settings.default_position_y, 0.0),
            },
            phase: GesturePhase::Idle,
            pan: PanState::default(),
            pinch: PinchTracker::default(),
            touch_pan_anchor: None,
            last_zoom_position: None,
            wheel_deadline: None,
            animation_clear: None,
            throttle_until: None,
        }
    }

    /// Returns the current transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Returns the current gesture classification.
    #[must_use]
    pub fn phase(&self) -> &GesturePhase {
        &self.phase
    }

    /// Returns the engine's configuration.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns a complete snapshot of transform and configuration.
    #[must_use]
    pub fn snapshot(&self) -> GestureSnapshot {
        GestureSnapshot {
            transform: self.transform,
            settings: self.settings,
        }
    }

    /// Earliest pending deadline, if any.
    ///
    /// Hosts schedule a wake-up for this instant and call
    /// [`GestureEngine::advance`] when it arrives; deadlines also fire lazily
    /// on the next input event.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        let mut next = self.wheel_deadline;
        if let Some((deadline, _)) = &self.animation_clear {
            next = Some(next.map_or(*deadline, |n| n.min(*deadline)));
        }
        next
    }

    /// Fires any deadline that is due at `now`.
    pub fn advance(&mut self, now: u64) -> Vec<GestureEvent> {
        let mut events = Vec::new();
        self.advance_into(now, &mut events);
        events
    }

    /// A wheel tick at `pos` with the event's vertical delta.
    ///
    /// The first tick since the last idle expiry starts the wheel gesture;
    /// every tick resets the idle deadline. Negative `delta_y` zooms in.
    pub fn wheel(
        &mut self,
        metrics: &dyn ViewportMetrics,
        pos: Point,
        delta_y: f64,
        now: u64,
    ) -> Vec<GestureEvent> {
        let mut events = Vec::new();
        self.advance_into(now, &mut events);
        if self.settings.disabled || self.pan.is_active() || self.phase == GesturePhase::Pinch {
            return events;
        }
        if self.wheel_deadline.is_none() {
            self.phase = GesturePhase::Wheel;
            self.emit(&mut events, Lifecycle::WheelStart);
        }
        let delta = if delta_y < 0.0 { 1.0 } else { -1.0 };
        self.apply_zoom(metrics, pos, None, Some(delta), None, None, now);
        self.emit(&mut events, Lifecycle::Wheel);
        self.wheel_deadline = Some(now + WHEEL_IDLE_TIMEOUT);
        events
    }

    /// Pointer-button press; starts a pan when it lands inside the wrapper.
    pub fn pointer_down(
        &mut self,
        metrics: &dyn ViewportMetrics,
        pos: Point,
        inside_wrapper: bool,
        now: u64,
    ) -> Vec<GestureEvent> {
        let mut events = Vec::new();
        self.advance_into(now, &mut events);
        if self.pan.is_active()
            || !self.settings.panning_enabled
            || self.settings.disabled
            || !inside_wrapper
        {
            return events;
        }
        let m = self.measure_at(metrics, pos);
        self.start_pan(&m, &mut events);
        events
    }

    /// Pointer movement; drives an active pan.
    pub fn pointer_move(
        &mut self,
        metrics: &dyn ViewportMetrics,
        pos: Point,
        now: u64,
    ) -> Vec<GestureEvent> {
        let mut events = Vec::new();
        self.advance_into(now, &mut events);
        self.pan_move(metrics, pos, &mut events);
        events
    }

    /// Pointer-button release; ends an active pan.
    pub fn pointer_up(&mut self, now: u64) -> Vec<GestureEvent> {
        let mut events = Vec::new();
        self.advance_into(now, &mut events);
        self.pan_stop(&mut events);
        events
    }

    /// Touch contact change with the full list of active touch points.
    ///
    /// One touch records the pan anchor; two touches claim a pinch (ending
    /// any pan in flight).
    pub fn touch_start(&mut self, touches: &[Point], now: u64) -> Vec<GestureEvent> {
        let mut events = Vec::new();
        self.advance_into(now, &mut events);
        match touches {
            [touch] => {
                if !self.pan.is_active() && self.settings.panning_enabled && !self.settings.disabled
                {
                    self.touch_pan_anchor = Some(touch.x);
                }
            }
            [_, _] => {
                if self.settings.pinch_enabled && !self.settings.disabled {
                    self.pan_stop(&mut events);
                    self.phase = GesturePhase::Pinch;
                    self.emit(&mut events, Lifecycle::PinchStart);
                }
            }
            _ => {}
        }
        events
    }

    /// Touch movement with the full list of active touch points.
    ///
    /// A single touch drives (or, past the slop distance, arms) a pan; two
    /// touches drive the pinch engine.
    pub fn touch_move(
        &mut self,
        metrics: &dyn ViewportMetrics,
        touches: &[Point],
        now: u64,
    ) -> Vec<GestureEvent> {
        let mut events = Vec::new();
        self.advance_into(now, &mut events);
        match touches {
            [touch] => {
                let armed = self
                    .touch_pan_anchor
                    .is_some_and(|x| (x - touch.x).abs() > TOUCH_PAN_SLOP);
                if armed
                    && !self.pan.is_active()
                    && self.settings.panning_enabled
                    && !self.settings.disabled
                {
                    let m = self.measure_at(metrics, *touch);
                    self.start_pan(&m, &mut events);
                }
                self.pan_move(metrics, *touch, &mut events);
            }
            [a, b] => {
                if self.settings.pinch_enabled && !self.settings.disabled {
                    self.pinch_move(metrics, *a, *b, &mut events, now);
                }
            }
            _ => {}
        }
        events
    }

    /// Touch release with the list of touch points that remain.
    ///
    /// A tracked pinch ends here; a single surviving touch hands off to pan
    /// tracking, and a full release cascades into pan-stop.
    pub fn touch_end(&mut self, remaining: &[Point], now: u64) -> Vec<GestureEvent> {
        let mut events = Vec::new();
        self.advance_into(now, &mut events);
        let tracked = self.pinch.is_tracking();
        self.pinch.reset();
        if self.phase == GesturePhase::Pinch {
            self.phase = GesturePhase::Idle;
        }
        if tracked {
            self.emit(&mut events, Lifecycle::PinchStop);
        }
        match remaining {
            [touch, ..] => {
                // The surviving finger continues as a pan candidate.
                self.touch_pan_anchor = Some(touch.x);
            }
            [] => {
                self.pan_stop(&mut events);
            }
        }
        events
    }

    /// Double-click step zoom at `pos`.
    ///
    /// `None` means the caller lost the triggering event; that is reported
    /// and the command aborted.
    pub fn double_click(
        &mut self,
        metrics: &dyn ViewportMetrics,
        pos: Option<Point>,
        now: u64,
    ) -> Vec<GestureEvent> {
        let mut events = Vec::new();
        self.advance_into(now, &mut events);
        let Some(pos) = pos else {
            error!("double click zoom requires its triggering event");
            return events;
        };
        if !self.settings.zooming_enabled
            || self.settings.disabled
            || !self.settings.double_click_enabled
        {
            return events;
        }
        let step = self.settings.double_click_step;
        if self.apply_zoom(metrics, pos, None, Some(1.0), Some(step), None, now) {
            self.begin_animation(AnimationTag::StepZoom, now);
        }
        events
    }

    /// Discrete zoom-in command, e.g. from a toolbar button.
    ///
    /// `pointer` is the triggering event's position; `None` is reported and
    /// aborted. With `last_position_zoom_enabled` the zoom aims at the last
    /// recorded pointer position, falling back to the wrapper center.
    pub fn zoom_in(
        &mut self,
        metrics: &dyn ViewportMetrics,
        pointer: Option<Point>,
        now: u64,
    ) -> Vec<GestureEvent> {
        let step = self.settings.zoom_in_step;
        self.step_zoom(metrics, pointer, 1.0, step, "zoom in", now)
    }

    /// Discrete zoom-out command; mirror of [`GestureEngine::zoom_in`].
    pub fn zoom_out(
        &mut self,
        metrics: &dyn ViewportMetrics,
        pointer: Option<Point>,
        now: u64,
    ) -> Vec<GestureEvent> {
        let step = self.settings.zoom_out_step;
        self.step_zoom(metrics, pointer, -1.0, step, "zoom out", now)
    }

    /// Sets the transform directly; used by controlled-mode hosts.
    ///
    /// A no-op while transforms are disabled. `NaN` components are ignored
    /// individually, so a caller can update a single field.
    pub fn set_transform(&mut self, position_x: f64, position_y: f64, scale: f64) {
        if !self.settings.transform_enabled {
            return;
        }
        if !scale.is_nan() {
            self.set_scale(scale);
        }
        if !position_x.is_nan() {
            self.set_position_x(position_x);
        }
        if !position_y.is_nan() {
            self.set_position_y(position_y);
        }
    }

    /// Sets the scale directly.
    pub fn set_scale(&mut self, scale: f64) {
        self.transform.scale = scale;
    }

    /// Sets the X translate offset directly, rounded to three decimals.
    pub fn set_position_x(&mut self, position_x: f64) {
        self.transform.position_x = round_to(position_x, 3);
    }

    /// Sets the Y translate offset directly, rounded to three decimals.
    pub fn set_position_y(&mut self, position_y: f64) {
        self.transform.position_y = round_to(position_y, 3);
    }

    /// Restores the default transform, tagging the phase for animated
    /// rendering.
    ///
    /// `tag` overrides the [`AnimationTag::Reset`] classification with a
    /// caller-supplied animation name. A no-op while disabled or when the
    /// transform already matches the defaults — repeated resets emit nothing.
    pub fn reset_transform(&mut self, tag: Option<&str>, now: u64) -> Vec<GestureEvent> {
        let mut events = Vec::new();
        self.advance_into(now, &mut events);
        if self.settings.disabled {
            return events;
        }
        let s = self.settings;
        let defaults = Transform {
            scale: finite_or(s.default_scale, 1.0),
            position_x: finite_or(s.default_position_x, 0.0),
            position_y: finite_or(s.default_position_y, 0.0),
        };
        if self.transform == defaults {
            return events;
        }
        self.transform.scale = defaults.scale;
        self.set_position_x(defaults.position_x);
        self.set_position_y(defaults.position_y);
        let tag = tag.map_or(AnimationTag::Reset, |t| AnimationTag::Custom(t.to_string()));
        self.begin_animation(tag, now);
        events
    }

    fn step_zoom(
        &mut self,
        metrics: &dyn ViewportMetrics,
        pointer: Option<Point>,
        delta: f64,
        step: f64,
        command: &str,
        now: u64,
    ) -> Vec<GestureEvent> {
        let mut events = Vec::new();
        self.advance_into(now, &mut events);
        let Some(pointer) = pointer else {
            error!("{command} requires its triggering event");
            return events;
        };
        if !self.settings.zooming_enabled || self.settings.disabled {
            return events;
        }
        let focal = self.step_zoom_focus(metrics);
        if self.apply_zoom(metrics, pointer, focal, Some(delta), Some(step), None, now) {
            self.begin_animation(AnimationTag::StepZoom, now);
        }
        events
    }

    /// Focal point for step zoom commands under `last_position_zoom_enabled`:
    /// the last recorded pointer position, or the wrapper's geometric center
    /// when none exists yet.
    fn step_zoom_focus(&self, metrics: &dyn ViewportMetrics) -> Option<Point> {
        if !self.settings.last_position_zoom_enabled {
            return None;
        }
        Some(self.last_zoom_position.unwrap_or_else(|| {
            let wrapper = metrics.wrapper_rect().size();
            let scale = self.transform.scale;
            Point::new(wrapper.width / 2.0 / scale, wrapper.height / 2.0 / scale)
        }))
    }

    /// Central zoom computation shared by wheel, pinch, and step commands.
    ///
    /// Returns `true` when a new transform was committed. `focal` overrides
    /// the content-space focal point; without it the pointer position decides.
    fn apply_zoom(
        &mut self,
        metrics: &dyn ViewportMetrics,
        pointer: Point,
        focal: Option<Point>,
        delta: Option<f64>,
        step: Option<f64>,
        target_scale: Option<f64>,
        now: u64,
    ) -> bool {
        if self.throttle_until.is_some_and(|until| now < until) {
            return false;
        }
        if self.pan.is_active() || !self.settings.zooming_enabled || self.settings.disabled {
            return false;
        }
        let scale = self.transform.scale;
        if target_scale == Some(scale) {
            return false;
        }
        let m = self.measure_at(metrics, pointer);

        let new_scale = next_scale(&self.settings, scale, delta.unwrap_or(0.0), step, target_scale);
        if new_scale == scale || outside_scale_bounds(&self.settings, new_scale) {
            return false;
        }

        let focal = focal.unwrap_or_else(|| Point::new(m.x / scale, m.y / scale));
        if !focal.x.is_finite() || !focal.y.is_finite() {
            warn!("no finite pointer or touch offset for zoom");
            return false;
        }
        if !self.settings.transform_enabled {
            return false;
        }

        // Bounding area for the content size the new scale produces.
        let wrapper = Size::new(m.wrapper_width, m.wrapper_height);
        let new_content = Size::new(m.wrapper_width * new_scale, m.wrapper_height * new_scale);
        let area = bounding_area(wrapper, new_content, self.settings.zoomed_out_panning);
        let limit = self.settings.limit_to_bounds;

        let position = Point::new(self.transform.position_x, self.transform.position_y);
        let moved = anchored_position(position, focal, new_scale - scale);
        self.transform.scale = new_scale;
        self.transform.position_x = bound_limiter(moved.x, area.min_x, area.max_x, limit);
        self.transform.position_y = bound_limiter(moved.y, area.min_y, area.max_y, limit);
        self.last_zoom_position = Some(focal);

        if self.settings.zoom_throttling_enabled {
            self.throttle_until = Some(now + ZOOM_THROTTLE_WINDOW);
        }
        true
    }

    fn start_pan(&mut self, m: &Measurement, events: &mut Vec<GestureEvent>) {
        self.pan.start(
            Point::new(m.x, m.y),
            Point::new(self.transform.position_x, self.transform.position_y),
        );
        self.phase = GesturePhase::Pan;
        self.emit(events, Lifecycle::PanStart);
    }

    fn pan_move(&mut self, metrics: &dyn ViewportMetrics, pos: Point, events: &mut Vec<GestureEvent>) {
        if !self.pan.is_active() || !self.settings.panning_enabled || self.settings.disabled {
            return;
        }
        let m = self.measure_at(metrics, pos);
        let Some(target) = self.pan.target_position(Point::new(m.x, m.y)) else {
            return;
        };
        let wrapper = Size::new(m.wrapper_width, m.wrapper_height);
        let content = Size::new(m.content_width, m.content_height);
        let area = bounding_area(wrapper, content, self.settings.zoomed_out_panning);
        let limit = self.settings.limit_to_bounds;
        self.set_position_x(bound_limiter(target.x, area.min_x, area.max_x, limit));
        self.set_position_y(bound_limiter(target.y, area.min_y, area.max_y, limit));
        self.emit(events, Lifecycle::Pan);
    }

    fn pan_stop(&mut self, events: &mut Vec<GestureEvent>) {
        let was_active = self.pan.is_active();
        if let Some(last) = self.pan.end(self.transform.scale) {
            self.last_zoom_position = Some(last);
        }
        if was_active {
            self.touch_pan_anchor = None;
            if self.phase == GesturePhase::Pan {
                self.phase = GesturePhase::Idle;
            }
            self.emit(events, Lifecycle::PanStop);
        }
    }

    fn pinch_move(
        &mut self,
        metrics: &dyn ViewportMetrics,
        a: Point,
        b: Point,
        events: &mut Vec<GestureEvent>,
        now: u64,
    ) {
        let length = distance(a, b);
        let Some(diff) = self.pinch.observe(length) else {
            return;
        };
        let scale = self.transform.scale;
        let m = self.measure_at(metrics, a);
        let candidate = pinch_scale(&self.settings, scale, m.wrapper_width, m.content_width, diff);
        if candidate == scale {
            return;
        }
        let focal = midpoint_in_content(a, b, metrics.content_rect().origin(), candidate);
        if self.apply_zoom(metrics, a, Some(focal), None, None, Some(candidate), now) {
            self.emit(events, Lifecycle::Pinch);
        }
    }

    fn begin_animation(&mut self, tag: AnimationTag, now: u64) {
        self.phase = GesturePhase::Animation(tag.clone());
        self.animation_clear = Some((now + ANIMATION_CLEAR_DELAY, tag));
    }

    fn advance_into(&mut self, now: u64, events: &mut Vec<GestureEvent>) {
        if let Some(deadline) = self.wheel_deadline
            && now >= deadline
        {
            self.wheel_deadline = None;
            // Another gesture may have claimed the phase since the last tick.
            if self.phase == GesturePhase::Wheel {
                self.phase = GesturePhase::Idle;
            }
            self.emit(events, Lifecycle::WheelStop);
        }
        if let Some((deadline, tag)) = self.animation_clear.take() {
            if now >= deadline {
                if self.phase == GesturePhase::Animation(tag) {
                    self.phase = GesturePhase::Idle;
                }
            } else {
                self.animation_clear = Some((deadline, tag));
            }
        }
        if self.throttle_until.is_some_and(|until| now >= until) {
            self.throttle_until = None;
        }
    }

    fn measure_at(&self, metrics: &dyn ViewportMetrics, pos: Point) -> Measurement {
        measure(pos, metrics.wrapper_rect(), metrics.content_rect())
    }

    fn emit(&self, events: &mut Vec<GestureEvent>, lifecycle: Lifecycle) {
        events.push(GestureEvent {
            lifecycle,
            snapshot: self.snapshot(),
        });
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::{Point, Rect};

    use super::*;

    struct Fixed {
        wrapper: Rect,
        content: Rect,
    }

    impl ViewportMetrics for Fixed {
        fn wrapper_rect(&self) -> Rect {
            self.wrapper
        }
        fn content_rect(&self) -> Rect {
            self.content
        }
    }

    fn square(size: f64) -> Fixed {
        Fixed {
            wrapper: Rect::new(0.0, 0.0, size, size),
            content: Rect::new(0.0, 0.0, size, size),
        }
    }

    fn wide_content() -> Fixed {
        Fixed {
            wrapper: Rect::new(0.0, 0.0, 500.0, 500.0),
            content: Rect::new(0.0, 0.0, 700.0, 500.0),
        }
    }

    fn kinds(events: &[GestureEvent]) -> Vec<Lifecycle> {
        events.iter().map(|e| e.lifecycle).collect()
    }

    fn center() -> Point {
        Point::new(250.0, 250.0)
    }

    #[test]
    fn wheel_tick_zooms_in_around_the_pointer() {
        let mut engine = GestureEngine::new(Settings::default());
        let metrics = square(500.0);

        let events = engine.wheel(&metrics, center(), -1.0, 0);

        assert_eq!(kinds(&events), [Lifecycle::WheelStart, Lifecycle::Wheel]);
        assert_eq!(engine.transform().scale, 1.1);
        // Content still fits loosely enough that no clamp triggers.
        assert!((engine.transform().position_x + 25.0).abs() < 1e-9);
        assert!((engine.transform().position_y + 25.0).abs() < 1e-9);
        assert_eq!(engine.phase(), &GesturePhase::Wheel);
        // The start snapshot precedes the zoom; the tick snapshot carries it.
        assert_eq!(events[0].snapshot.transform.scale, 1.0);
        assert_eq!(events[1].snapshot.transform.scale, 1.1);
    }

    #[test]
    fn positive_wheel_delta_zooms_out() {
        let mut engine = GestureEngine::new(Settings::default());
        let metrics = square(500.0);

        engine.wheel(&metrics, center(), 1.0, 0);

        assert_eq!(engine.transform().scale, 0.9);
        // Undersized content pins to the centered offset.
        assert_eq!(engine.transform().position_x, 25.0);
        assert_eq!(engine.transform().position_y, 25.0);
    }

    #[test]
    fn wheel_gesture_ends_after_the_idle_timeout() {
        let mut engine = GestureEngine::new(Settings::default());
        let metrics = square(500.0);

        engine.wheel(&metrics, center(), -1.0, 0);
        assert_eq!(engine.next_deadline(), Some(100));

        assert!(engine.advance(99).is_empty());
        let events = engine.advance(100);
        assert_eq!(kinds(&events), [Lifecycle::WheelStop]);
        assert_eq!(engine.phase(), &GesturePhase::Idle);

        // The next tick starts a fresh wheel gesture.
        let events = engine.wheel(&metrics, center(), -1.0, 200);
        assert_eq!(kinds(&events), [Lifecycle::WheelStart, Lifecycle::Wheel]);
    }

    #[test]
    fn wheel_ticks_extend_the_idle_window() {
        let mut engine = GestureEngine::new(Settings::default());
        let metrics = square(500.0);

        engine.wheel(&metrics, center(), -1.0, 0);
        let events = engine.wheel(&metrics, center(), -1.0, 50);
        assert_eq!(kinds(&events), [Lifecycle::Wheel]);
        assert_eq!(engine.next_deadline(), Some(150));

        assert!(engine.advance(120).is_empty());
        assert_eq!(kinds(&engine.advance(150)), [Lifecycle::WheelStop]);
    }

    #[test]
    fn wheel_stop_does_not_clobber_a_gesture_that_superseded_it() {
        let mut engine = GestureEngine::new(Settings::default());
        let metrics = square(500.0);

        engine.wheel(&metrics, center(), -1.0, 0);
        let touches = [Point::new(200.0, 250.0), Point::new(300.0, 250.0)];
        engine.touch_start(&touches, 10);
        assert_eq!(engine.phase(), &GesturePhase::Pinch);

        let events = engine.advance(150);
        assert_eq!(kinds(&events), [Lifecycle::WheelStop]);
        assert_eq!(engine.phase(), &GesturePhase::Pinch);
    }

    #[test]
    fn scale_snaps_exactly_to_the_bounds_and_stays_there() {
        let mut engine = GestureEngine::new(Settings::default());
        let metrics = square(500.0);

        engine.set_scale(7.9);
        engine.wheel(&metrics, center(), -1.0, 0);
        assert_eq!(engine.transform().scale, 8.0);
        engine.wheel(&metrics, center(), -1.0, 10);
        assert_eq!(engine.transform().scale, 8.0);

        engine.set_scale(0.55);
        engine.wheel(&metrics, center(), 1.0, 20);
        assert_eq!(engine.transform().scale, 0.5);
        engine.wheel(&metrics, center(), 1.0, 30);
        assert_eq!(engine.transform().scale, 0.5);
    }

    #[test]
    fn focal_point_stays_fixed_while_unclamped() {
        let settings = Settings {
            limit_to_bounds: false,
            ..Settings::default()
        };
        let mut engine = GestureEngine::new(settings);
        let metrics = square(500.0);
        let pointer = Point::new(100.0, 150.0);

        let before = engine.transform();
        engine.wheel(&metrics, pointer, -1.0, 0);
        let after = engine.transform();

        // The content point under the pointer maps to the same wrapper pixel.
        let focal = Point::new(pointer.x / before.scale, pointer.y / before.scale);
        let pixel_before = Point::new(
            focal.x * before.scale + before.position_x,
            focal.y * before.scale + before.position_y,
        );
        let pixel_after = Point::new(
            focal.x * after.scale + after.position_x,
            focal.y * after.scale + after.position_y,
        );
        assert!((pixel_before.x - pixel_after.x).abs() < 1e-9);
        assert!((pixel_before.y - pixel_after.y).abs() < 1e-9);
    }

    #[test]
    fn reset_restores_defaults_once_and_is_then_idempotent() {
        let mut engine = GestureEngine::new(Settings::default());

        engine.set_transform(40.0, 20.0, 2.0);
        let events = engine.reset_transform(None, 0);
        assert!(events.is_empty());
        assert_eq!(engine.transform(), Transform::default());
        assert_eq!(
            engine.phase(),
            &GesturePhase::Animation(AnimationTag::Reset)
        );

        assert!(engine.advance(1).is_empty());
        assert_eq!(engine.phase(), &GesturePhase::Idle);

        // Already at defaults: no phase change, nothing emitted.
        assert!(engine.reset_transform(None, 2).is_empty());
        assert_eq!(engine.phase(), &GesturePhase::Idle);
    }

    #[test]
    fn reset_carries_a_caller_supplied_tag() {
        let mut engine = GestureEngine::new(Settings::default());
        engine.set_position_x(5.0);

        engine.reset_transform(Some("bounce"), 0);
        assert_eq!(
            engine.phase(),
            &GesturePhase::Animation(AnimationTag::Custom("bounce".to_string()))
        );
    }

    #[test]
    fn pan_clamps_oversized_content_to_the_bounding_area() {
        let mut engine = GestureEngine::new(Settings::default());
        let metrics = wide_content();

        let events = engine.pointer_down(&metrics, Point::new(100.0, 100.0), true, 0);
        assert_eq!(kinds(&events), [Lifecycle::PanStart]);
        assert_eq!(engine.phase(), &GesturePhase::Pan);

        // +50px: the content's left edge cannot pass the wrapper's.
        let events = engine.pointer_move(&metrics, Point::new(150.0, 100.0), 1);
        assert_eq!(kinds(&events), [Lifecycle::Pan]);
        assert_eq!(engine.transform().position_x, 0.0);

        engine.pointer_move(&metrics, Point::new(40.0, 100.0), 2);
        assert_eq!(engine.transform().position_x, -60.0);

        // Far past the other end: clamps to the deficit.
        engine.pointer_move(&metrics, Point::new(-400.0, 100.0), 3);
        assert_eq!(engine.transform().position_x, -200.0);

        let events = engine.pointer_up(4);
        assert_eq!(kinds(&events), [Lifecycle::PanStop]);
        assert_eq!(engine.phase(), &GesturePhase::Idle);
    }

    #[test]
    fn pan_is_unclamped_without_limit_to_bounds() {
        let settings = Settings {
            limit_to_bounds: false,
            ..Settings::default()
        };
        let mut engine = GestureEngine::new(settings);
        let metrics = wide_content();

        engine.pointer_down(&metrics, Point::new(100.0, 100.0), true, 0);
        engine.pointer_move(&metrics, Point::new(150.0, 100.0), 1);
        assert_eq!(engine.transform().position_x, 50.0);
    }

    #[test]
    fn pan_needs_a_press_inside_the_wrapper() {
        let mut engine = GestureEngine::new(Settings::default());
        let metrics = wide_content();

        assert!(
            engine
                .pointer_down(&metrics, Point::new(100.0, 100.0), false, 0)
                .is_empty()
        );
        assert!(
            engine
                .pointer_move(&metrics, Point::new(150.0, 100.0), 1)
                .is_empty()
        );
        assert_eq!(engine.transform(), Transform::default());
    }

    #[test]
    fn zoom_is_rejected_while_a_drag_is_active() {
        let mut engine = GestureEngine::new(Settings::default());
        let metrics = square(500.0);

        engine.pointer_down(&metrics, Point::new(100.0, 100.0), true, 0);
        let events = engine.wheel(&metrics, center(), -1.0, 1);
        assert!(events.is_empty());
        assert_eq!(engine.transform().scale, 1.0);
        assert_eq!(engine.phase(), &GesturePhase::Pan);
    }

    #[test]
    fn throttle_window_admits_exactly_one_zoom() {
        let settings = Settings {
            zoom_throttling_enabled: true,
            ..Settings::default()
        };
        let mut engine = GestureEngine::new(settings);
        let metrics = square(500.0);

        engine.wheel(&metrics, center(), -1.0, 0);
        assert_eq!(engine.transform().scale, 1.1);

        // Second tick within the window: lifecycle fires, transform holds.
        let events = engine.wheel(&metrics, center(), -1.0, 0);
        assert_eq!(kinds(&events), [Lifecycle::Wheel]);
        assert_eq!(engine.transform().scale, 1.1);

        engine.wheel(&metrics, center(), -1.0, 1);
        assert_eq!(engine.transform().scale, 1.21);
    }

    #[test]
    fn pinch_in_zooms_out_and_hands_off_to_pan() {
        let mut engine = GestureEngine::new(Settings::default());
        let metrics = square(500.0);

        let spread = [Point::new(200.0, 250.0), Point::new(300.0, 250.0)];
        let events = engine.touch_start(&spread, 0);
        assert_eq!(kinds(&events), [Lifecycle::PinchStart]);
        assert_eq!(engine.phase(), &GesturePhase::Pinch);

        // First observation only seeds the distance history.
        assert!(engine.touch_move(&metrics, &spread, 1).is_empty());
        assert_eq!(engine.transform().scale, 1.0);

        let pinched = [Point::new(210.0, 250.0), Point::new(290.0, 250.0)];
        let events = engine.touch_move(&metrics, &pinched, 2);
        assert_eq!(kinds(&events), [Lifecycle::Pinch]);
        assert_eq!(engine.transform().scale, 0.98);

        // Lifting to one finger ends the pinch and re-arms pan tracking.
        let events = engine.touch_end(&pinched[..1], 3);
        assert_eq!(kinds(&events), [Lifecycle::PinchStop]);
        assert_eq!(engine.phase(), &GesturePhase::Idle);

        let events = engine.touch_move(&metrics, &[Point::new(220.0, 250.0)], 4);
        assert_eq!(kinds(&events), [Lifecycle::PanStart, Lifecycle::Pan]);
        assert_eq!(engine.phase(), &GesturePhase::Pan);

        let events = engine.touch_end(&[], 5);
        assert_eq!(kinds(&events), [Lifecycle::PanStop]);
        assert_eq!(engine.phase(), &GesturePhase::Idle);
    }

    #[test]
    fn a_second_touch_claims_an_active_pan() {
        let mut engine = GestureEngine::new(Settings::default());
        let metrics = square(500.0);

        engine.touch_start(&[Point::new(100.0, 100.0)], 0);
        let events = engine.touch_move(&metrics, &[Point::new(110.0, 100.0)], 1);
        assert_eq!(kinds(&events), [Lifecycle::PanStart, Lifecycle::Pan]);

        let spread = [Point::new(110.0, 100.0), Point::new(200.0, 200.0)];
        let events = engine.touch_start(&spread, 2);
        assert_eq!(kinds(&events), [Lifecycle::PanStop, Lifecycle::PinchStart]);
        assert_eq!(engine.phase(), &GesturePhase::Pinch);
    }

    #[test]
    fn untracked_pinch_release_emits_no_stop() {
        let mut engine = GestureEngine::new(Settings::default());

        let spread = [Point::new(200.0, 250.0), Point::new(300.0, 250.0)];
        engine.touch_start(&spread, 0);
        // Fingers lift before any move was observed.
        let events = engine.touch_end(&[], 1);
        assert!(events.is_empty());
        assert_eq!(engine.phase(), &GesturePhase::Idle);
    }

    #[test]
    fn step_zoom_falls_back_to_the_wrapper_center() {
        let settings = Settings {
            last_position_zoom_enabled: true,
            ..Settings::default()
        };
        let mut engine = GestureEngine::new(settings);
        let metrics = square(500.0);

        // No pointer position has ever been recorded.
        engine.zoom_in(&metrics, Some(Point::new(0.0, 0.0)), 0);

        assert_eq!(engine.transform().scale, 1.2);
        assert!((engine.transform().position_x + 50.0).abs() < 1e-9);
        assert!((engine.transform().position_y + 50.0).abs() < 1e-9);
        assert_eq!(
            engine.phase(),
            &GesturePhase::Animation(AnimationTag::StepZoom)
        );
        engine.advance(1);
        assert_eq!(engine.phase(), &GesturePhase::Idle);
    }

    #[test]
    fn step_zoom_without_an_event_is_reported_and_aborted() {
        let mut engine = GestureEngine::new(Settings::default());
        let metrics = square(500.0);

        assert!(engine.zoom_in(&metrics, None, 0).is_empty());
        assert!(engine.zoom_out(&metrics, None, 1).is_empty());
        assert!(engine.double_click(&metrics, None, 2).is_empty());
        assert_eq!(engine.transform(), Transform::default());
    }

    #[test]
    fn zoom_out_steps_the_scale_down() {
        let mut engine = GestureEngine::new(Settings::default());
        let metrics = square(500.0);

        engine.zoom_out(&metrics, Some(center()), 0);
        assert_eq!(engine.transform().scale, 0.8);
    }

    #[test]
    fn double_click_applies_its_own_step() {
        let mut engine = GestureEngine::new(Settings::default());
        let metrics = square(500.0);

        engine.double_click(&metrics, Some(center()), 0);
        assert_eq!(engine.transform().scale, 1.4);
        assert_eq!(
            engine.phase(),
            &GesturePhase::Animation(AnimationTag::StepZoom)
        );

        let settings = Settings {
            double_click_enabled: false,
            ..Settings::default()
        };
        let mut engine = GestureEngine::new(settings);
        engine.double_click(&metrics, Some(center()), 0);
        assert_eq!(engine.transform().scale, 1.0);
    }

    #[test]
    fn disabled_engine_starts_no_gesture() {
        let settings = Settings {
            disabled: true,
            ..Settings::default()
        };
        let mut engine = GestureEngine::new(settings);
        let metrics = square(500.0);
        let touches = [Point::new(200.0, 250.0), Point::new(300.0, 250.0)];

        assert!(engine.wheel(&metrics, center(), -1.0, 0).is_empty());
        assert!(
            engine
                .pointer_down(&metrics, center(), true, 1)
                .is_empty()
        );
        assert!(engine.touch_start(&touches, 2).is_empty());
        assert!(engine.zoom_in(&metrics, Some(center()), 3).is_empty());
        assert!(engine.reset_transform(None, 4).is_empty());
        assert_eq!(engine.transform(), Transform::default());
        assert_eq!(engine.phase(), &GesturePhase::Idle);
    }

    #[test]
    fn set_transform_ignores_nan_components_individually() {
        let mut engine = GestureEngine::new(Settings::default());

        engine.set_transform(f64::NAN, 12.3456, f64::NAN);
        assert_eq!(engine.transform().scale, 1.0);
        assert_eq!(engine.transform().position_x, 0.0);
        assert_eq!(engine.transform().position_y, 12.346);

        let settings = Settings {
            transform_enabled: false,
            ..Settings::default()
        };
        let mut engine = GestureEngine::new(settings);
        engine.set_transform(1.0, 1.0, 2.0);
        assert_eq!(engine.transform(), Transform::default());
    }

    #[test]
    fn zoomed_out_panning_frees_undersized_content() {
        let narrow = Fixed {
            wrapper: Rect::new(0.0, 0.0, 500.0, 500.0),
            content: Rect::new(0.0, 0.0, 300.0, 500.0),
        };

        let mut engine = GestureEngine::new(Settings::default());
        engine.pointer_down(&narrow, Point::new(100.0, 100.0), true, 0);
        engine.pointer_move(&narrow, Point::new(150.0, 100.0), 1);
        // Pinned to the centered offset while zoomed-out panning is off.
        assert_eq!(engine.transform().position_x, 100.0);

        let settings = Settings {
            zoomed_out_panning: true,
            ..Settings::default()
        };
        let mut engine = GestureEngine::new(settings);
        engine.pointer_down(&narrow, Point::new(100.0, 100.0), true, 0);
        engine.pointer_move(&narrow, Point::new(150.0, 100.0), 1);
        assert_eq!(engine.transform().position_x, 50.0);
    }

    #[test]
    fn next_deadline_reports_the_earliest_pending_timer() {
        let mut engine = GestureEngine::new(Settings::default());
        let metrics = square(500.0);

        engine.wheel(&metrics, center(), -1.0, 0);
        engine.set_position_x(5.0);
        engine.reset_transform(None, 10);
        assert_eq!(engine.next_deadline(), Some(11));

        engine.advance(11);
        assert_eq!(engine.phase(), &GesturePhase::Idle);
        assert_eq!(engine.next_deadline(), Some(100));
        assert_eq!(kinds(&engine.advance(100)), [Lifecycle::WheelStop]);
    }
}
