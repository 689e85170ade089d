// Copyright 2026 the Ratewheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An interactive rating pie chart.
//!
//! A [`RatingChart`] turns an ordered sequence of relative weights into pie segments and lets a
//! user both view the distribution and cast a rating by clicking (or double-tapping) a segment:
//! - **Geometry** ([`pie_spans`], [`AngleSpan`], [`radial_offset`]) converts weights into
//!   clockwise angular spans and outward bisector displacements.
//! - **Visual state** (hover lift, selection, rating mode, loading) is owned by the chart, which
//!   emits concrete `kurbo`/`peniko` geometry ([`ChartFrame`]) for a host renderer.
//! - **Interaction** ([`InteractionController`]) is a small state machine over pointer and touch
//!   events, with a selection callback and a paired acquire/release contract for the one-shot
//!   global touch listener mobile rating needs.
//!
//! The crate is `no_std` + `alloc`; float math dispatches to `libm` unless the `std` feature is
//! enabled. Animation is data sampled against a caller-advanced clock: the library never blocks
//! on time, and a transition requested mid-flight supersedes the running one.
//!
//! Rating persistence is the caller's concern: the controller reports a chosen segment through
//! its callback and the caller decides whether to call [`RatingChart::set_selected_arc`].

#![no_std]

extern crate alloc;

mod anim;
mod chart;
#[cfg(not(feature = "std"))]
mod float;
mod interaction;
mod options;
mod pie;
mod segment;

pub use anim::{Animated, AnimatedVec2, Easing};
pub use chart::{ChartFrame, RatingChart, RenderedArc};
pub use interaction::{InteractionController, InteractionState, SelectEvent, TouchTarget};
pub use options::{ChartConfig, ConfigError, RenderOptions};
pub use pie::{AngleSpan, pie_spans, radial_offset};
pub use segment::Segment;
