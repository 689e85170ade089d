// Copyright 2026 the Ratewheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rating chart component.
//!
//! [`RatingChart`] owns the segment collection derived from its dataset, the selection and
//! rate-mode state, and the animated per-segment visuals. It emits concrete geometry
//! ([`ChartFrame`]) for a host renderer; input handling lives in
//! [`crate::InteractionController`].

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use core::f64::consts::{FRAC_PI_2, TAU};

use kurbo::{BezPath, Circle, Point, Rect, Shape, Vec2};
use peniko::{Brush, Color};
use smallvec::SmallVec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::anim::Easing;
use crate::options::{ChartConfig, ConfigError, RenderOptions};
use crate::pie::{self, AngleSpan};
use crate::segment::Segment;

/// Duration of hover-enter transitions.
const HOVER_IN_MS: f64 = 150.0;
/// Duration of every other geometry transition (hover-exit, refresh, margins).
const SETTLE_MS: f64 = 100.0;

/// Class applied at chart level while loading mode is on.
const CLASS_LOADING: &str = "chart-loading";

/// An interactive rating pie chart.
#[derive(Clone, Debug)]
pub struct RatingChart {
    container: String,
    opts: RenderOptions,
    data: ChartConfig,
    original_data: ChartConfig,
    segments: Vec<Segment>,
    selected: Option<usize>,
    loading: bool,
    no_votes: bool,
    clock: f64,
}

impl RatingChart {
    /// Creates a chart over `config`, mounted at the host-side `container` identifier.
    ///
    /// Builds the full segment set, shows the "no votes" marker when the weight sum is zero, and
    /// applies `config.rated` unless it is `None`. Fails when a rate is negative or non-finite.
    pub fn new(
        container: impl Into<String>,
        config: ChartConfig,
        options: RenderOptions,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let no_votes = pie::effective_total(&config.rates) <= 0.0;
        let mut chart = Self {
            container: container.into(),
            opts: options,
            original_data: config.clone(),
            data: config,
            segments: Vec::new(),
            selected: None,
            loading: false,
            no_votes,
            clock: 0.0,
        };
        chart.layout_segments();
        if chart.data.rated.is_some() {
            let rated = chart.data.rated;
            chart.set_selected_arc(rated);
        }
        Ok(chart)
    }

    /// Advances the animation clock by `dt_ms` milliseconds.
    ///
    /// The chart has no clock of its own; the host drives time. Transitions never block input:
    /// a request arriving mid-flight supersedes the running one.
    pub fn advance(&mut self, dt_ms: f64) {
        self.clock += dt_ms.max(0.0);
    }

    /// Replaces the live dataset.
    ///
    /// Unless `keep_original`, the baseline dataset (restored when temporary modes end) is
    /// replaced as well. Segments are rebuilt, not diffed: a different `rates` length is fully
    /// supported, and surviving indices keep their hover flag and in-flight animations. With
    /// `apply_margin`, every segment's offset heads outward along its bisector by the
    /// whole-chart-hover distance; otherwise back to zero. Lifted segments re-target the lifted
    /// radius, the rest the base radius. Removes the "no votes" marker, and reselects when the
    /// incoming `rated` differs from the current selection.
    pub fn refresh(&mut self, data: ChartConfig, keep_original: bool, apply_margin: bool) {
        if !keep_original {
            self.original_data = data.clone();
        }
        self.data = data;
        self.layout_segments();

        let now = self.clock;
        let onhover_move = self.opts.onhover_move;
        let radius_delta = self.opts.radius_delta;
        for seg in &mut self.segments {
            let target = if apply_margin {
                pie::radial_offset(seg.span.bisector_orientation(), onhover_move)
            } else {
                Vec2::ZERO
            };
            seg.offset.animate_to(target, now, SETTLE_MS, Easing::Linear);

            let lift = if seg.hovered { radius_delta } else { 0.0 };
            seg.lift.animate_to(lift, now, SETTLE_MS, Easing::Linear);
        }

        self.no_votes = false;

        if self.data.rated != self.selected {
            let rated = self.data.rated;
            self.set_selected_arc(rated);
        }
    }

    /// Marks the segment at `index` as the chosen rating.
    ///
    /// Clears the selected flag from every segment first; an out-of-range index clears with no
    /// match. The index is stored verbatim as the current selection either way. Hover state is
    /// always reset afterward.
    pub fn set_selected_arc(&mut self, index: Option<usize>) {
        for seg in &mut self.segments {
            seg.selected = false;
        }
        if let Some(i) = index
            && let Some(seg) = self.segments.get_mut(i)
        {
            seg.selected = true;
        }
        self.selected = index;
        self.reset_hovers();
    }

    /// The current selection index, or `None` for no selection.
    pub fn selected_arc(&self) -> Option<usize> {
        self.selected
    }

    /// The live (possibly rate-mode-modified) dataset.
    pub fn data(&self) -> &ChartConfig {
        &self.data
    }

    /// The derived segment collection, in input order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The render options this chart was built with.
    pub fn options(&self) -> &RenderOptions {
        &self.opts
    }

    /// The host-side mount identifier.
    pub fn container(&self) -> &str {
        &self.container
    }

    /// Applies or removes the loading visual marker. No geometry change.
    pub fn toggle_loading_mode(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Whether loading mode is on.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether the "no votes" marker is currently shown.
    pub fn has_no_votes_marker(&self) -> bool {
        self.no_votes
    }

    /// Lifts the segment at `index`: thickened radius, displaced outward along its bisector.
    ///
    /// Transitions over 150 ms with quadratic easing. A segment whose raw value is exactly 100
    /// is a full circle and is exempted; the call is a no-op.
    pub fn hover_arc(&mut self, index: usize) {
        let now = self.clock;
        let move_distance = self.opts.move_distance;
        let radius_delta = self.opts.radius_delta;
        let Some(seg) = self.segments.get_mut(index) else {
            return;
        };
        // Skip a full arc.
        if seg.value == 100.0 {
            return;
        }
        seg.hovered = true;
        let target = pie::radial_offset(seg.span.bisector_orientation(), move_distance);
        seg.offset.animate_to(target, now, HOVER_IN_MS, Easing::QuadIn);
        seg.lift
            .animate_to(radius_delta, now, HOVER_IN_MS, Easing::QuadIn);
    }

    /// Reverts the segment at `index` to base radius and position over 100 ms.
    pub fn unhover_arc(&mut self, index: usize) {
        let now = self.clock;
        let Some(seg) = self.segments.get_mut(index) else {
            return;
        };
        seg.hovered = false;
        seg.offset
            .animate_to(Vec2::ZERO, now, SETTLE_MS, Easing::Linear);
        seg.lift.animate_to(0.0, now, SETTLE_MS, Easing::Linear);
    }

    /// Reverts every lifted segment.
    pub fn reset_hovers(&mut self) {
        let hovered: SmallVec<[usize; 4]> = self
            .segments
            .iter()
            .filter(|seg| seg.hovered)
            .map(|seg| seg.index)
            .collect();
        for index in hovered {
            self.unhover_arc(index);
        }
    }

    /// Enters rating mode: equal-share weights, separated outward, baseline kept.
    pub fn enable_rate_mode(&mut self) {
        let n = self.original_data.rates.len();
        let rates = if n == 0 {
            Vec::new()
        } else {
            alloc::vec![100.0 / n as f64; n]
        };
        let data = ChartConfig {
            rates,
            ..self.original_data.clone()
        };
        self.refresh(data, true, true);
    }

    /// Leaves rating mode: restores the baseline dataset and resets hover visuals.
    pub fn disable_rate_mode(&mut self) {
        let baseline = self.original_data.clone();
        self.refresh(baseline, false, false);
        self.reset_hovers();
    }

    /// The segment's percentage of the total, rounded to the configured precision.
    ///
    /// Returns `Some(0.0)` for every segment of a zero-sum dataset.
    pub fn share(&self, index: usize) -> Option<f64> {
        let seg = self.segments.get(index)?;
        let total = pie::effective_total(&self.data.rates);
        if total <= 0.0 {
            return Some(0.0);
        }
        let factor = 10.0_f64.powi(i32::from(self.opts.decimals));
        Some((seg.value / total * 100.0 * factor).round() / factor)
    }

    /// The chart's bounding rectangle in scene coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, 2.0 * self.opts.radius, 2.0 * self.opts.radius)
    }

    /// The chart's center point.
    pub fn center(&self) -> Point {
        Point::new(self.opts.radius, self.opts.radius)
    }

    /// The segment under `point`, honoring current animated offsets and radii.
    pub fn segment_at(&self, point: Point) -> Option<usize> {
        let now = self.clock;
        let center = self.center();
        for seg in &self.segments {
            let outer = self.opts.radius + seg.lift.value(now);
            let rel = (point - center) - seg.offset.value(now);
            if rel.hypot2() > outer * outer {
                continue;
            }
            let mut angle = rel.x.atan2(-rel.y);
            if angle < 0.0 {
                angle += TAU;
            }
            if seg.span.contains(angle) {
                return Some(seg.index);
            }
        }
        None
    }

    /// The segment's current radial offset.
    pub fn arc_offset(&self, index: usize) -> Option<Vec2> {
        Some(self.segments.get(index)?.offset.value(self.clock))
    }

    /// The segment's current outer radius (base radius plus lift).
    pub fn arc_outer_radius(&self, index: usize) -> Option<f64> {
        Some(self.opts.radius + self.segments.get(index)?.lift.value(self.clock))
    }

    /// Emits the chart's current visual state for a host renderer.
    pub fn render(&self) -> ChartFrame {
        let now = self.clock;
        let center = self.center();
        let fills = Self::default_segment_fills(self.segments.len().max(1));

        let arcs = self
            .segments
            .iter()
            .map(|seg| {
                let outer = self.opts.radius + seg.lift.value(now);
                let inner = (outer - self.opts.radius_highlight).max(0.0);
                let mut classes: SmallVec<[String; 2]> = SmallVec::new();
                if seg.selected {
                    classes.push(self.opts.class_selected.clone());
                }
                RenderedArc {
                    index: seg.index,
                    offset: seg.offset.value(now),
                    body: sector_path(center, 0.0, outer, seg.span, self.opts.tolerance),
                    highlight: sector_path(center, inner, outer, seg.span, self.opts.tolerance),
                    fill: fills[seg.index % fills.len()].clone(),
                    classes,
                    hovered: seg.hovered,
                }
            })
            .collect();

        let mut classes: SmallVec<[String; 2]> = SmallVec::new();
        if self.loading {
            classes.push(String::from(CLASS_LOADING));
        }

        ChartFrame {
            container: self.container.clone(),
            width: 2.0 * self.opts.radius,
            height: 2.0 * self.opts.radius,
            center,
            classes,
            no_votes_class: self.no_votes.then(|| self.opts.class_no_votes.clone()),
            arcs,
        }
    }

    /// The default categorical segment palette, repeating if `count` exceeds its length.
    pub fn default_segment_fills(count: usize) -> Vec<Brush> {
        let palette = [
            Color::from_rgb8(0xe7, 0xde, 0x37),
            Color::from_rgb8(0xf5, 0x84, 0x1e),
            Color::from_rgb8(0xeb, 0x6a, 0x67),
            Color::from_rgb8(0x86, 0xc7, 0x78),
        ];
        (0..count)
            .map(|i| Brush::Solid(palette[i % palette.len()]))
            .collect()
    }

    /// Rebuilds segment values and spans from the live dataset.
    ///
    /// Surviving indices keep their flags and animation state; excess segments are dropped and
    /// new ones appended settled at base geometry.
    fn layout_segments(&mut self) {
        let spans = pie::pie_spans(&self.data.rates);
        self.segments.truncate(spans.len());
        for (index, span) in spans.into_iter().enumerate() {
            let value = self.data.rates[index];
            match self.segments.get_mut(index) {
                Some(seg) => {
                    seg.value = value;
                    seg.span = span;
                }
                None => self.segments.push(Segment::new(index, value, span)),
            }
        }
    }
}

/// One segment's renderable state.
#[derive(Clone, Debug)]
pub struct RenderedArc {
    /// Segment index.
    pub index: usize,
    /// Current displacement from base position.
    pub offset: Vec2,
    /// The filled wedge.
    pub body: BezPath,
    /// The thin inner highlight arc (rendered white over the body).
    pub highlight: BezPath,
    /// Fill paint for the body.
    pub fill: Brush,
    /// CSS-like classes carried by this segment.
    pub classes: SmallVec<[String; 2]>,
    /// Whether this segment is lifted.
    pub hovered: bool,
}

/// A full chart snapshot for a host renderer.
#[derive(Clone, Debug)]
pub struct ChartFrame {
    /// Host-side mount identifier.
    pub container: String,
    /// Frame width in scene coordinates.
    pub width: f64,
    /// Frame height in scene coordinates.
    pub height: f64,
    /// Center of the pie.
    pub center: Point,
    /// Chart-level classes (loading mode).
    pub classes: SmallVec<[String; 2]>,
    /// Class name of the "no votes" marker, when it should be shown.
    pub no_votes_class: Option<String>,
    /// Per-segment renderable state, in input order.
    pub arcs: Vec<RenderedArc>,
}

fn sector_path(center: Point, inner: f64, outer: f64, span: AngleSpan, tolerance: f64) -> BezPath {
    let circle = Circle::new(center, outer);
    // Spans are clockwise from 12 o'clock; path angles start at the positive x axis.
    circle
        .segment(inner, span.start - FRAC_PI_2, span.sweep())
        .path_elements(tolerance)
        .collect()
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    fn chart(rates: Vec<f64>, rated: Option<usize>) -> RatingChart {
        let mut config = ChartConfig::new(1, rates);
        config.rated = rated;
        RatingChart::new("#chart-1", config, RenderOptions::default()).unwrap()
    }

    #[test]
    fn construct_selects_the_rated_segment() {
        let chart = chart(vec![30.0, 20.0, 25.0, 25.0], Some(0));
        assert_eq!(chart.selected_arc(), Some(0));
        assert!(chart.segments()[0].selected);
        assert!(!chart.segments()[1].selected);
    }

    #[test]
    fn construct_rejects_malformed_rates() {
        let config = ChartConfig::new(1, vec![10.0, -2.0]);
        let err = RatingChart::new("#c", config, RenderOptions::default()).unwrap_err();
        assert_eq!(err, ConfigError::NegativeRate { index: 1 });
    }

    #[test]
    fn refresh_reselects_and_respans() {
        let mut chart = chart(vec![30.0, 20.0, 25.0, 25.0], Some(0));
        let mut next = ChartConfig::new(1, vec![10.0, 10.0, 10.0, 70.0]);
        next.rated = Some(3);
        chart.refresh(next, false, false);

        assert_eq!(chart.selected_arc(), Some(3));
        assert!(chart.segments()[3].selected);
        let sweep = chart.segments()[3].span.sweep();
        assert!((sweep - 0.7 * TAU).abs() < 1e-12);
    }

    #[test]
    fn selection_roundtrips_and_sentinel_clears() {
        let mut chart = chart(vec![30.0, 20.0, 25.0, 25.0], None);
        chart.set_selected_arc(Some(2));
        assert_eq!(chart.selected_arc(), Some(2));
        assert!(chart.segments()[2].selected);

        chart.set_selected_arc(None);
        assert_eq!(chart.selected_arc(), None);
        assert!(chart.segments().iter().all(|s| !s.selected));
    }

    #[test]
    fn out_of_range_selection_marks_nothing() {
        let mut chart = chart(vec![30.0, 20.0, 25.0, 25.0], None);
        chart.set_selected_arc(Some(10));
        assert_eq!(chart.selected_arc(), Some(10));
        assert!(chart.segments().iter().all(|s| !s.selected));
    }

    #[test]
    fn rate_mode_roundtrip_restores_the_baseline() {
        let mut chart = chart(vec![30.0, 20.0, 25.0, 25.0], Some(1));
        let baseline = chart.data().clone();

        chart.enable_rate_mode();
        assert_eq!(chart.data().rates, vec![25.0, 25.0, 25.0, 25.0]);
        assert_eq!(chart.data().rated, baseline.rated);

        chart.disable_rate_mode();
        assert_eq!(chart.data(), &baseline);
    }

    #[test]
    fn rate_mode_equalizes_any_segment_count() {
        let mut chart = chart(vec![10.0, 60.0, 15.0, 10.0, 5.0], None);
        chart.enable_rate_mode();
        assert_eq!(chart.data().rates, vec![20.0; 5]);
    }

    #[test]
    fn rate_mode_applies_the_outward_margin() {
        let mut chart = chart(vec![30.0, 20.0, 25.0, 25.0], None);
        chart.enable_rate_mode();
        chart.advance(SETTLE_MS);
        for i in 0..4 {
            let offset = chart.arc_offset(i).unwrap();
            let distance = offset.hypot();
            assert!((distance - 1.0).abs() < 1e-9, "segment {i} moved {distance}");
        }

        chart.disable_rate_mode();
        chart.advance(SETTLE_MS);
        for i in 0..4 {
            assert!(chart.arc_offset(i).unwrap().hypot() < 1e-9);
        }
    }

    #[test]
    fn hover_lifts_and_unhover_settles_back() {
        let mut chart = chart(vec![30.0, 20.0, 25.0, 25.0], None);
        chart.hover_arc(1);
        assert!(chart.segments()[1].hovered);
        chart.advance(HOVER_IN_MS);
        assert!((chart.arc_outer_radius(1).unwrap() - 65.0).abs() < 1e-9);
        assert!((chart.arc_offset(1).unwrap().hypot() - 3.0).abs() < 1e-9);

        chart.unhover_arc(1);
        assert!(!chart.segments()[1].hovered);
        chart.advance(SETTLE_MS);
        assert!((chart.arc_outer_radius(1).unwrap() - 60.0).abs() < 1e-9);
        assert!(chart.arc_offset(1).unwrap().hypot() < 1e-9);
    }

    #[test]
    fn full_arc_hover_is_a_noop() {
        let mut chart = chart(vec![100.0], None);
        let before = chart.arc_offset(0).unwrap();
        chart.hover_arc(0);
        chart.advance(HOVER_IN_MS);
        assert!(!chart.segments()[0].hovered);
        assert_eq!(chart.arc_offset(0).unwrap(), before);
        assert_eq!(chart.arc_outer_radius(0).unwrap(), 60.0);
    }

    #[test]
    fn zero_sum_construct_shows_the_no_votes_marker() {
        let chart = chart(vec![0.0, 0.0, 0.0], None);
        assert!(chart.has_no_votes_marker());
        assert!(chart.segments().iter().all(|s| s.span.sweep() == 0.0));
        let frame = chart.render();
        assert_eq!(frame.no_votes_class.as_deref(), Some("chart__no-votes"));
    }

    #[test]
    fn refresh_removes_the_no_votes_marker() {
        let mut chart = chart(vec![0.0, 0.0], None);
        chart.refresh(ChartConfig::new(1, vec![1.0, 3.0]), false, false);
        assert!(!chart.has_no_votes_marker());
        assert!(chart.render().no_votes_class.is_none());
    }

    #[test]
    fn refresh_supports_length_changes() {
        let mut chart = chart(vec![30.0, 20.0, 25.0, 25.0], None);
        chart.refresh(ChartConfig::new(1, vec![50.0, 50.0]), false, false);
        assert_eq!(chart.segments().len(), 2);

        chart.refresh(ChartConfig::new(1, vec![20.0; 5]), false, false);
        assert_eq!(chart.segments().len(), 5);
        let sum: f64 = chart.segments().iter().map(|s| s.span.sweep()).sum();
        assert!((sum - TAU).abs() < 1e-9);
    }

    #[test]
    fn hit_test_maps_points_to_segments() {
        let chart = chart(vec![50.0, 50.0], None);
        // Segment 0 covers the right half, segment 1 the left.
        assert_eq!(chart.segment_at(Point::new(90.0, 60.0)), Some(0));
        assert_eq!(chart.segment_at(Point::new(30.0, 60.0)), Some(1));
        assert_eq!(chart.segment_at(Point::new(160.0, 60.0)), None);
    }

    #[test]
    fn hit_test_finds_nothing_in_a_zero_sum_chart() {
        let chart = chart(vec![0.0, 0.0], None);
        assert_eq!(chart.segment_at(Point::new(60.0, 40.0)), None);
    }

    #[test]
    fn loading_mode_toggles_the_chart_class() {
        let mut chart = chart(vec![30.0, 70.0], None);
        chart.toggle_loading_mode(true);
        assert!(chart.is_loading());
        assert!(chart.render().classes.iter().any(|c| c == "chart-loading"));

        chart.toggle_loading_mode(false);
        assert!(chart.render().classes.is_empty());
    }

    #[test]
    fn share_rounds_to_the_configured_precision() {
        let config = ChartConfig::new(1, vec![1.0, 2.0]);
        let chart = RatingChart::new("#c", config, RenderOptions::default()).unwrap();
        assert_eq!(chart.share(0), Some(33.3));
        assert_eq!(chart.share(1), Some(66.7));
        assert_eq!(chart.share(2), None);
    }

    #[test]
    fn render_emits_selected_class_and_highlight_paths() {
        let chart = chart(vec![30.0, 20.0, 25.0, 25.0], Some(2));
        let frame = chart.render();
        assert_eq!(frame.arcs.len(), 4);
        assert!(frame.arcs[2].classes.iter().any(|c| c == "selected"));
        assert!(frame.arcs[0].classes.is_empty());
        assert!(!frame.arcs[0].body.elements().is_empty());
        assert!(!frame.arcs[0].highlight.elements().is_empty());
        assert_eq!(frame.width, 120.0);
    }
}
