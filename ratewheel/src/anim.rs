// Copyright 2026 the Ratewheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timed attribute interpolation.
//!
//! Visual transitions are modeled as data: a pending request with a target, duration, and easing,
//! sampled against a caller-advanced millisecond clock. Requesting a new transition samples the
//! in-flight value as the new start and replaces the request: transitions are superseded, never
//! queued, so the last writer wins on each attribute.

use kurbo::Vec2;

/// Easing applied to a transition's progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Constant-rate interpolation.
    #[default]
    Linear,
    /// Quadratic ease-in (slow start).
    QuadIn,
}

impl Easing {
    fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::QuadIn => t * t,
        }
    }
}

/// An `f64` attribute with an optional in-flight transition.
#[derive(Clone, Copy, Debug)]
pub struct Animated {
    from: f64,
    to: f64,
    start: f64,
    duration: f64,
    easing: Easing,
}

impl Animated {
    /// Creates a settled attribute at `value`.
    pub fn new(value: f64) -> Self {
        Self {
            from: value,
            to: value,
            start: 0.0,
            duration: 0.0,
            easing: Easing::Linear,
        }
    }

    /// Sets the attribute instantly, dropping any in-flight transition.
    pub fn set(&mut self, value: f64) {
        self.from = value;
        self.to = value;
        self.duration = 0.0;
    }

    /// Starts a transition toward `target`, superseding any in-flight one.
    ///
    /// The current value at `now` becomes the new start point.
    pub fn animate_to(&mut self, target: f64, now: f64, duration: f64, easing: Easing) {
        self.from = self.value(now);
        self.to = target;
        self.start = now;
        self.duration = duration.max(0.0);
        self.easing = easing;
    }

    /// Samples the attribute at clock time `now`.
    pub fn value(&self, now: f64) -> f64 {
        if self.duration <= 0.0 || now >= self.start + self.duration {
            return self.to;
        }
        if now <= self.start {
            return self.from;
        }
        let t = (now - self.start) / self.duration;
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    /// The value this attribute is headed toward.
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Whether the attribute has reached its target at `now`.
    pub fn is_settled(&self, now: f64) -> bool {
        self.duration <= 0.0 || now >= self.start + self.duration
    }
}

/// A 2D vector attribute with an optional in-flight transition.
#[derive(Clone, Copy, Debug)]
pub struct AnimatedVec2 {
    x: Animated,
    y: Animated,
}

impl AnimatedVec2 {
    /// Creates a settled attribute at `value`.
    pub fn new(value: Vec2) -> Self {
        Self {
            x: Animated::new(value.x),
            y: Animated::new(value.y),
        }
    }

    /// Sets the attribute instantly, dropping any in-flight transition.
    pub fn set(&mut self, value: Vec2) {
        self.x.set(value.x);
        self.y.set(value.y);
    }

    /// Starts a transition toward `target`, superseding any in-flight one.
    pub fn animate_to(&mut self, target: Vec2, now: f64, duration: f64, easing: Easing) {
        self.x.animate_to(target.x, now, duration, easing);
        self.y.animate_to(target.y, now, duration, easing);
    }

    /// Samples the attribute at clock time `now`.
    pub fn value(&self, now: f64) -> Vec2 {
        Vec2::new(self.x.value(now), self.y.value(now))
    }

    /// The value this attribute is headed toward.
    pub fn target(&self) -> Vec2 {
        Vec2::new(self.x.target(), self.y.target())
    }

    /// Whether the attribute has reached its target at `now`.
    pub fn is_settled(&self, now: f64) -> bool {
        self.x.is_settled(now) && self.y.is_settled(now)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn linear_transition_interpolates_and_settles() {
        let mut a = Animated::new(0.0);
        a.animate_to(10.0, 0.0, 100.0, Easing::Linear);

        assert_eq!(a.value(0.0), 0.0);
        assert!((a.value(50.0) - 5.0).abs() < 1e-12);
        assert_eq!(a.value(100.0), 10.0);
        assert_eq!(a.value(250.0), 10.0);
        assert!(a.is_settled(100.0));
    }

    #[test]
    fn quad_in_starts_slow() {
        let mut a = Animated::new(0.0);
        a.animate_to(10.0, 0.0, 100.0, Easing::QuadIn);
        assert!((a.value(50.0) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn new_request_supersedes_from_the_sampled_value() {
        let mut a = Animated::new(0.0);
        a.animate_to(10.0, 0.0, 100.0, Easing::Linear);

        // Halfway through, retarget back to zero: the in-flight value becomes the start.
        a.animate_to(0.0, 50.0, 100.0, Easing::Linear);
        assert!((a.value(50.0) - 5.0).abs() < 1e-12);
        assert!((a.value(100.0) - 2.5).abs() < 1e-12);
        assert_eq!(a.value(150.0), 0.0);
        assert_eq!(a.target(), 0.0);
    }

    #[test]
    fn set_drops_any_transition() {
        let mut a = Animated::new(0.0);
        a.animate_to(10.0, 0.0, 100.0, Easing::Linear);
        a.set(3.0);
        assert_eq!(a.value(10.0), 3.0);
        assert!(a.is_settled(0.0));
    }

    #[test]
    fn zero_duration_jumps_to_target() {
        let mut a = Animated::new(1.0);
        a.animate_to(4.0, 10.0, 0.0, Easing::Linear);
        assert_eq!(a.value(10.0), 4.0);
    }

    #[test]
    fn vec2_components_move_together() {
        let mut v = AnimatedVec2::new(Vec2::ZERO);
        v.animate_to(Vec2::new(2.0, -4.0), 0.0, 100.0, Easing::Linear);
        let mid = v.value(50.0);
        assert!((mid.x - 1.0).abs() < 1e-12);
        assert!((mid.y + 2.0).abs() < 1e-12);
        assert_eq!(v.value(100.0), Vec2::new(2.0, -4.0));
    }
}
