// Copyright 2026 the Ratewheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer/touch interaction for [`RatingChart`].
//!
//! [`InteractionController`] wraps a chart and owns the hover/rate/touch state machine. It
//! consumes either semantic events (`pointer_entered_segment`, `touched`, ...) or raw
//! coordinates (`pointer_moved`, `touch_at`), which are translated through the chart's hit test.
//!
//! All transitions are synchronous with the triggering event; the resulting visual changes are
//! animations that never block further input. The one-shot global touch listener acquired when a
//! first tap arms the controller is released on every exit path: confirm, cancel, and reset.

extern crate alloc;

use alloc::boxed::Box;

use kurbo::Point;

use crate::chart::RatingChart;
use crate::pie::AngleSpan;

/// The controller's current mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionState {
    /// No pointer over the chart, no touch armed.
    Idle,
    /// The pointer is over the given segment, which is lifted.
    Hovered(usize),
    /// The pointer is over the chart but over no specific segment; segments are equalized and
    /// separated as a rating affordance.
    RateMode,
    /// A first tap landed on the given segment; awaiting a confirming or cancelling touch.
    TouchArmed(usize),
}

/// Where a touch landed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchTarget {
    /// On the given segment.
    Segment(usize),
    /// Outside any chart interaction. Only observed while the global listener is held.
    Outside,
}

/// Payload passed to the selection callback on a confirmed click or tap.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SelectEvent {
    /// The `id` of the chart's dataset.
    pub chart_id: u64,
    /// Index of the chosen segment.
    pub index: usize,
    /// The segment's current rate value.
    pub value: f64,
    /// The segment's current angular span.
    pub span: AngleSpan,
}

type SelectHandler = Box<dyn FnMut(SelectEvent)>;

/// Wraps a [`RatingChart`] and drives its visual state from input events.
pub struct InteractionController {
    chart: RatingChart,
    state: InteractionState,
    pointer_in_chart: bool,
    touch_listener: bool,
    on_select: SelectHandler,
}

impl core::fmt::Debug for InteractionController {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InteractionController")
            .field("chart", &self.chart)
            .field("state", &self.state)
            .field("pointer_in_chart", &self.pointer_in_chart)
            .field("touch_listener", &self.touch_listener)
            .field("on_select", &"<fn>")
            .finish()
    }
}

impl InteractionController {
    /// Wraps `chart` with an idle controller and a no-op selection callback.
    pub fn new(chart: RatingChart) -> Self {
        Self {
            chart,
            state: InteractionState::Idle,
            pointer_in_chart: false,
            touch_listener: false,
            on_select: Box::new(|_| {}),
        }
    }

    /// Registers the selection callback.
    ///
    /// Invoked on a confirmed click or tap with the segment's index and current datum. Selecting
    /// is the caller's decision: the controller never mutates the chart's selected arc itself.
    pub fn on_select(&mut self, handler: impl FnMut(SelectEvent) + 'static) {
        self.on_select = Box::new(handler);
    }

    /// The controller's current state.
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// The wrapped chart.
    pub fn chart(&self) -> &RatingChart {
        &self.chart
    }

    /// The wrapped chart, mutably.
    pub fn chart_mut(&mut self) -> &mut RatingChart {
        &mut self.chart
    }

    /// Unwraps the controller, returning the chart.
    pub fn into_chart(self) -> RatingChart {
        self.chart
    }

    /// Advances the wrapped chart's animation clock.
    pub fn advance(&mut self, dt_ms: f64) {
        self.chart.advance(dt_ms);
    }

    /// Whether the one-shot global touch listener is currently held.
    pub fn has_touch_listener(&self) -> bool {
        self.touch_listener
    }

    /// The pointer entered the chart's bounding area (not yet over any segment).
    pub fn pointer_entered_chart(&mut self) {
        if self.is_touch_armed() {
            return;
        }
        self.pointer_in_chart = true;
        if !self.chart.options().hover {
            return;
        }
        self.chart.enable_rate_mode();
        self.state = InteractionState::RateMode;
    }

    /// The pointer left the chart area entirely.
    pub fn pointer_left_chart(&mut self) {
        if self.is_touch_armed() {
            return;
        }
        self.pointer_in_chart = false;
        if !self.chart.options().hover {
            return;
        }
        self.chart.disable_rate_mode();
        self.state = InteractionState::Idle;
    }

    /// The pointer entered a specific segment.
    pub fn pointer_entered_segment(&mut self, index: usize) {
        if self.is_touch_armed() || !self.chart.options().hover {
            return;
        }
        if index >= self.chart.segments().len() {
            return;
        }
        self.chart.hover_arc(index);
        self.state = InteractionState::Hovered(index);
    }

    /// The pointer left a specific segment.
    pub fn pointer_left_segment(&mut self, index: usize) {
        if self.is_touch_armed() || !self.chart.options().hover {
            return;
        }
        self.chart.unhover_arc(index);
        self.state = if self.pointer_in_chart {
            InteractionState::RateMode
        } else {
            InteractionState::Idle
        };
    }

    /// A click landed on a segment. Ignored while a touch sequence is armed.
    pub fn clicked(&mut self, index: usize) {
        if self.is_touch_armed() {
            return;
        }
        self.fire(index);
    }

    /// A touch landed.
    ///
    /// A first touch on a segment arms the controller: rate-mode visuals, the global listener
    /// acquired. A second touch on a segment confirms with that segment's index; one outside
    /// cancels silently. Both release the listener and return to idle.
    pub fn touched(&mut self, target: TouchTarget) {
        if self.is_touch_armed() {
            self.release_touch_listener();
            if let TouchTarget::Segment(index) = target {
                self.fire(index);
            }
            self.chart.disable_rate_mode();
            self.state = InteractionState::Idle;
            return;
        }

        if let TouchTarget::Segment(index) = target {
            if index >= self.chart.segments().len() {
                return;
            }
            self.chart.enable_rate_mode();
            self.acquire_touch_listener();
            self.state = InteractionState::TouchArmed(index);
        }
    }

    /// Forces the controller back to idle, releasing the global listener if held.
    pub fn reset(&mut self) {
        if self.touch_listener {
            self.release_touch_listener();
        }
        self.chart.disable_rate_mode();
        self.state = InteractionState::Idle;
    }

    /// Translates a raw pointer position into enter/leave transitions.
    ///
    /// Segment-leave fires before chart-leave, matching the event order a nested DOM structure
    /// would produce.
    pub fn pointer_moved(&mut self, point: Point) {
        let inside = self.chart.bounds().contains(point);
        let over = if inside {
            self.chart.segment_at(point)
        } else {
            None
        };
        let prev = match self.state {
            InteractionState::Hovered(i) => Some(i),
            _ => None,
        };

        if let Some(i) = prev
            && over != prev
        {
            self.pointer_left_segment(i);
        }
        if inside && !self.pointer_in_chart {
            self.pointer_entered_chart();
        }
        if !inside && self.pointer_in_chart {
            self.pointer_left_chart();
        }
        if let Some(i) = over
            && over != prev
        {
            self.pointer_entered_segment(i);
        }
    }

    /// Translates the pointer leaving the scene entirely.
    pub fn pointer_out(&mut self) {
        if let InteractionState::Hovered(i) = self.state {
            self.pointer_left_segment(i);
        }
        if self.pointer_in_chart {
            self.pointer_left_chart();
        }
    }

    /// Translates a raw touch position through the chart's hit test.
    pub fn touch_at(&mut self, point: Point) {
        let target = match self.chart.segment_at(point) {
            Some(index) => TouchTarget::Segment(index),
            None => TouchTarget::Outside,
        };
        self.touched(target);
    }

    fn is_touch_armed(&self) -> bool {
        matches!(self.state, InteractionState::TouchArmed(_))
    }

    fn acquire_touch_listener(&mut self) {
        debug_assert!(!self.touch_listener, "touch listener already held");
        self.touch_listener = true;
    }

    fn release_touch_listener(&mut self) {
        debug_assert!(self.touch_listener, "touch listener not held");
        self.touch_listener = false;
    }

    fn fire(&mut self, index: usize) {
        let Some(seg) = self.chart.segments().get(index) else {
            return;
        };
        let event = SelectEvent {
            chart_id: self.chart.data().id,
            index,
            value: seg.value,
            span: seg.span,
        };
        (self.on_select)(event);
    }
}
