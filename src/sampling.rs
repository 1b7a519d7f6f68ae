//! Sampling a formula over an evenly spaced range of `x`.

use crate::error::{ConfigError, ParseError};
use crate::expression::Expression;

/// Upper bound on `width`; every sample is kept in memory at once.
pub const MAX_WIDTH: usize = 1 << 20;

/// `width` columns between `x_min` and `x_max`; samples sit on the
/// `width + 1` column borders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleGrid {
    pub x_min: f64,
    pub x_max: f64,
    pub width: usize,
}

impl Default for SampleGrid {
    fn default() -> Self {
        SampleGrid {
            x_min: -2.0,
            x_max: 2.0,
            width: 60,
        }
    }
}

impl SampleGrid {
    pub fn new(x_min: f64, x_max: f64, width: usize) -> Result<Self, ConfigError> {
        let grid = SampleGrid { x_min, x_max, width };
        grid.validate()?;
        Ok(grid)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.width > MAX_WIDTH {
            return Err(ConfigError::InvalidWidth(self.width));
        }
        if !self.x_min.is_finite() || !self.x_max.is_finite() || self.x_min >= self.x_max {
            return Err(ConfigError::EmptyRange {
                x_min: self.x_min,
                x_max: self.x_max,
            });
        }
        Ok(())
    }

    pub fn step(&self) -> f64 {
        (self.x_max - self.x_min) / self.width as f64
    }

    pub fn point_count(&self) -> usize {
        self.width + 1
    }

    /// The sample abscissas, left to right. The last one is exactly `x_max`.
    pub fn abscissas(&self) -> impl Iterator<Item = f64> + '_ {
        let step = self.step();
        (0..=self.width).map(move |i| {
            if i == self.width {
                self.x_max
            } else {
                self.x_min + i as f64 * step
            }
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

/// What a renderer gets for one formula: either a sampled curve or, when the
/// formula does not parse, a blank area of the same size.
#[derive(Debug, Clone, PartialEq)]
pub enum Plot {
    Curve(Vec<Sample>),
    Blank { error: ParseError, grid: SampleGrid },
}

impl Plot {
    pub fn from_expression(expr: &Expression, grid: &SampleGrid) -> Plot {
        log::debug!(
            "sampling {:?} at {} points over [{}, {}]",
            expr.source(),
            grid.point_count(),
            grid.x_min,
            grid.x_max
        );
        let samples = grid
            .abscissas()
            .map(|x| Sample {
                x,
                y: expr.evaluate(x),
            })
            .collect();
        Plot::Curve(samples)
    }

    pub fn from_formula(formula: &str, grid: &SampleGrid) -> Plot {
        match Expression::parse(formula) {
            Ok(expr) => Plot::from_expression(&expr, grid),
            Err(error) => Plot::Blank { error, grid: *grid },
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Plot::Blank { .. })
    }

    pub fn error(&self) -> Option<&ParseError> {
        match self {
            Plot::Curve(_) => None,
            Plot::Blank { error, .. } => Some(error),
        }
    }

    /// Empty for a blank plot.
    pub fn samples(&self) -> &[Sample] {
        match self {
            Plot::Curve(samples) => samples,
            Plot::Blank { .. } => &[],
        }
    }

    /// Smallest and largest finite `y`, if any sample is finite.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        self.samples()
            .iter()
            .map(|s| s.y)
            .filter(|y| y.is_finite())
            .fold(None, |range, y| match range {
                None => Some((y, y)),
                Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
            })
    }
}
