// Copyright 2026 the Ratewheel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Caller-supplied chart configuration and render options.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// Errors produced when validating a chart configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A rate was NaN or infinite.
    NonFiniteRate {
        /// Position of the offending rate.
        index: usize,
    },
    /// A rate was negative.
    NegativeRate {
        /// Position of the offending rate.
        index: usize,
    },
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NonFiniteRate { index } => {
                write!(f, "rate at index {index} is not a finite number")
            }
            Self::NegativeRate { index } => write!(f, "rate at index {index} is negative"),
        }
    }
}

impl core::error::Error for ConfigError {}

/// The dataset backing one chart.
///
/// `rates` are relative non-negative weights; they need not sum to 100. `rated` is the index of
/// the segment the user has chosen, or `None` when no rating has been cast.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    /// Caller-side identifier carried through selection events.
    pub id: u64,
    /// Ordered relative weights, one per segment.
    pub rates: Vec<f64>,
    /// Index of the rated segment, or `None` for no selection.
    pub rated: Option<usize>,
}

impl ChartConfig {
    /// Creates a configuration with no rating cast.
    pub fn new(id: u64, rates: Vec<f64>) -> Self {
        Self {
            id,
            rates,
            rated: None,
        }
    }

    /// Sets the rated segment index.
    pub fn with_rated(mut self, rated: usize) -> Self {
        self.rated = Some(rated);
        self
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for (index, rate) in self.rates.iter().enumerate() {
            if !rate.is_finite() {
                return Err(ConfigError::NonFiniteRate { index });
            }
            if *rate < 0.0 {
                return Err(ConfigError::NegativeRate { index });
            }
        }
        Ok(())
    }
}

/// Visual options for a chart. All fields have defaults; override any subset via the `with_*`
/// builders.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderOptions {
    /// Base outer radius in scene coordinates.
    pub radius: f64,
    /// Whether pointer-hover interactions are enabled. Click and touch rating are unaffected.
    pub hover: bool,
    /// Extra outer radius applied to a lifted (hovered) segment.
    pub radius_delta: f64,
    /// Thickness of the thin inner highlight arc.
    pub radius_highlight: f64,
    /// How far a hovered segment moves outward along its bisector.
    pub move_distance: f64,
    /// How far every segment moves outward while the whole chart is hovered (rating mode).
    pub onhover_move: f64,
    /// Decimal precision for percentage shares.
    pub decimals: u8,
    /// Class name of the "no votes" marker.
    pub class_no_votes: String,
    /// Class name applied to the selected segment.
    pub class_selected: String,
    /// Curve flattening tolerance when converting sectors to paths.
    pub tolerance: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            radius: 60.0,
            hover: true,
            radius_delta: 5.0,
            radius_highlight: 3.0,
            move_distance: 3.0,
            onhover_move: 1.0,
            decimals: 1,
            class_no_votes: String::from("chart__no-votes"),
            class_selected: String::from("selected"),
            tolerance: 0.1,
        }
    }
}

impl RenderOptions {
    /// Sets the base outer radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Enables or disables pointer-hover interactions.
    pub fn with_hover(mut self, hover: bool) -> Self {
        self.hover = hover;
        self
    }

    /// Sets the lifted-segment radius delta.
    pub fn with_radius_delta(mut self, radius_delta: f64) -> Self {
        self.radius_delta = radius_delta;
        self
    }

    /// Sets the highlight arc thickness.
    pub fn with_radius_highlight(mut self, radius_highlight: f64) -> Self {
        self.radius_highlight = radius_highlight;
        self
    }

    /// Sets the hovered-segment outward displacement.
    pub fn with_move_distance(mut self, move_distance: f64) -> Self {
        self.move_distance = move_distance;
        self
    }

    /// Sets the whole-chart-hover outward displacement.
    pub fn with_onhover_move(mut self, onhover_move: f64) -> Self {
        self.onhover_move = onhover_move;
        self
    }

    /// Sets the percentage share precision.
    pub fn with_decimals(mut self, decimals: u8) -> Self {
        self.decimals = decimals;
        self
    }

    /// Sets the "no votes" marker class name.
    pub fn with_class_no_votes(mut self, class: impl Into<String>) -> Self {
        self.class_no_votes = class.into();
        self
    }

    /// Sets the selected-segment class name.
    pub fn with_class_selected(mut self, class: impl Into<String>) -> Self {
        self.class_selected = class.into();
        self
    }

    /// Sets the curve flattening tolerance used for path conversion.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn validate_reports_the_offending_index() {
        let config = ChartConfig::new(1, vec![10.0, f64::NAN]);
        assert_eq!(config.validate(), Err(ConfigError::NonFiniteRate { index: 1 }));

        let config = ChartConfig::new(1, vec![10.0, -1.0]);
        assert_eq!(config.validate(), Err(ConfigError::NegativeRate { index: 1 }));

        let config = ChartConfig::new(1, vec![0.0, 10.0]);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn builder_overrides_win_over_defaults() {
        let opts = RenderOptions::default()
            .with_radius(80.0)
            .with_hover(false)
            .with_class_selected("picked");
        assert_eq!(opts.radius, 80.0);
        assert!(!opts.hover);
        assert_eq!(opts.class_selected, "picked");
        // Untouched fields keep their defaults.
        assert_eq!(opts.radius_delta, 5.0);
        assert_eq!(opts.class_no_votes, "chart__no-votes");
    }
}
