// Copyright 2026 the Ratewheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie geometry.
//!
//! Converts an ordered sequence of relative weights into angular spans and provides the polar
//! math used to displace a segment outward along its own bisector. Angles follow the SVG pie
//! convention: radians, measured clockwise from 12 o'clock.

extern crate alloc;

use alloc::vec::Vec;

use core::f64::consts::TAU;

use kurbo::Vec2;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// The angular span of one pie segment.
///
/// `start` and `end` are radians, clockwise from 12 o'clock, with `start <= end`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleSpan {
    /// Start angle in radians.
    pub start: f64,
    /// End angle in radians.
    pub end: f64,
}

impl AngleSpan {
    /// Creates a span from start/end angles.
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// The angle swept by this span.
    pub fn sweep(&self) -> f64 {
        self.end - self.start
    }

    /// The angular midpoint of this span.
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.start + self.end)
    }

    /// Polar orientation of the span's midpoint, rounded to two decimals.
    ///
    /// The midpoint is clockwise-from-top; subtracting it from a 450 degree (7.85 rad) reference
    /// yields the polar angle of the outward bisector direction.
    pub fn bisector_orientation(&self) -> f64 {
        round2(7.85 - self.midpoint())
    }

    /// Whether a clockwise-from-top angle falls inside this span.
    ///
    /// Zero-width spans contain nothing.
    pub fn contains(&self, angle: f64) -> bool {
        self.start <= angle && angle < self.end
    }
}

/// Computes angular spans for an ordered weight sequence.
///
/// Spans are proportional to each weight's share of the total and sum to a full circle. Input
/// order is preserved: a segment's position is determined solely by the cumulative weight before
/// it. A weight that is non-finite or not positive contributes a zero-width span, and a
/// degenerate total produces all zero-width spans rather than dividing by zero.
pub fn pie_spans(weights: &[f64]) -> Vec<AngleSpan> {
    let total = effective_total(weights);
    if !(total > 0.0) {
        return weights.iter().map(|_| AngleSpan::new(0.0, 0.0)).collect();
    }

    let mut acc = 0.0;
    weights
        .iter()
        .map(|w| {
            let start = acc / total * TAU;
            acc += effective(*w);
            let end = acc / total * TAU;
            AngleSpan::new(start, end)
        })
        .collect()
}

/// The displacement that moves a segment outward along its bisector.
///
/// `angle` is a polar orientation (as returned by [`AngleSpan::bisector_orientation`]); the
/// y-component is negated for screen coordinates.
pub fn radial_offset(angle: f64, distance: f64) -> Vec2 {
    Vec2::new(distance * angle.cos(), -distance * angle.sin())
}

/// Sum of the weights that actually contribute span (finite and positive).
pub(crate) fn effective_total(weights: &[f64]) -> f64 {
    weights.iter().map(|w| effective(*w)).sum()
}

fn effective(w: f64) -> f64 {
    if w.is_finite() && w > 0.0 { w } else { 0.0 }
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::f64::consts::{FRAC_PI_2, PI};

    use super::*;

    #[test]
    fn spans_sum_to_a_full_circle() {
        let spans = pie_spans(&[30.0, 20.0, 25.0, 25.0]);
        let sum: f64 = spans.iter().map(AngleSpan::sweep).sum();
        assert!((sum - TAU).abs() < 1e-12);
        assert!((spans[3].end - TAU).abs() < 1e-12);
    }

    #[test]
    fn spans_keep_input_order() {
        let spans = pie_spans(&[10.0, 60.0, 15.0, 15.0]);
        // Segment 1 starts exactly where segment 0's share ends.
        assert!((spans[0].end - 0.1 * TAU).abs() < 1e-12);
        assert!((spans[1].start - spans[0].end).abs() < 1e-12);
        assert!((spans[1].sweep() - 0.6 * TAU).abs() < 1e-12);
    }

    #[test]
    fn zero_sum_weights_produce_zero_width_spans() {
        let spans = pie_spans(&[0.0, 0.0, 0.0]);
        assert_eq!(spans.len(), 3);
        for span in &spans {
            assert_eq!(span.sweep(), 0.0);
        }
    }

    #[test]
    fn non_positive_weights_contribute_nothing() {
        let spans = pie_spans(&[50.0, 0.0, 50.0]);
        assert_eq!(spans[1].sweep(), 0.0);
        assert!((spans[0].sweep() - PI).abs() < 1e-12);
        assert!((spans[2].sweep() - PI).abs() < 1e-12);
    }

    #[test]
    fn single_weight_spans_the_whole_circle() {
        let spans = pie_spans(&[7.0]);
        assert!((spans[0].sweep() - TAU).abs() < 1e-12);
    }

    #[test]
    fn bisector_orientation_rounds_to_two_decimals() {
        // Midpoint of [0, pi/2] is ~0.7854; 7.85 - 0.7854 rounds to 7.07.
        let span = AngleSpan::new(0.0, FRAC_PI_2);
        assert_eq!(span.bisector_orientation(), 7.07);
    }

    #[test]
    fn radial_offset_points_along_the_polar_angle() {
        let v = radial_offset(0.0, 3.0);
        assert!((v.x - 3.0).abs() < 1e-12);
        assert!(v.y.abs() < 1e-12);

        let v = radial_offset(FRAC_PI_2, 3.0);
        assert!(v.x.abs() < 1e-9);
        assert!((v.y + 3.0).abs() < 1e-9);
    }

    #[test]
    fn contains_is_half_open_and_empty_for_zero_width() {
        let span = AngleSpan::new(0.0, FRAC_PI_2);
        assert!(span.contains(0.0));
        assert!(span.contains(1.0));
        assert!(!span.contains(FRAC_PI_2));

        let empty = AngleSpan::new(1.0, 1.0);
        assert!(!empty.contains(1.0));
    }
}
