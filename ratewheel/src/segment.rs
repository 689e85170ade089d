// Copyright 2026 the Ratewheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-segment view-model.

use kurbo::Vec2;

use crate::anim::{Animated, AnimatedVec2};
use crate::pie::AngleSpan;

/// One wedge of the chart, derived from one entry in the rate sequence.
///
/// `hovered` and `selected` are managed by [`crate::RatingChart`] and the interaction layer; the
/// animated visual state (radial offset, lift) is crate-private and sampled through the chart.
#[derive(Clone, Debug)]
pub struct Segment {
    /// Stable index, assigned by input position.
    pub index: usize,
    /// The raw rate value backing this segment.
    pub value: f64,
    /// Angular span, clockwise from 12 o'clock.
    pub span: AngleSpan,
    /// Whether this segment is currently lifted by a pointer hover.
    pub hovered: bool,
    /// Whether this segment is the user's chosen rating.
    pub selected: bool,
    pub(crate) offset: AnimatedVec2,
    pub(crate) lift: Animated,
}

impl Segment {
    pub(crate) fn new(index: usize, value: f64, span: AngleSpan) -> Self {
        Self {
            index,
            value,
            span,
            hovered: false,
            selected: false,
            offset: AnimatedVec2::new(Vec2::ZERO),
            lift: Animated::new(0.0),
        }
    }
}
