//! Ingestion and analysis configuration

use crate::error::{GraphError, Result};
use std::fmt;

/// How trailing columns of an edge-list line are interpreted
///
/// Callers pick the mode that matches the analyzer they intend to run: shortest path and
/// spanning trees read weights, max flow reads capacities, min-cost flow reads both.
/// Columns beyond the ones a mode reads are accepted and silently dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ParseMode {
    /// `u v`
    ///
    /// Any further columns are ignored, so a weighted file parsed in this mode yields
    /// unattributed edges (weight 1, capacity 1, cost 0).
    #[default]
    Plain,
    /// `u v weight`
    Weighted,
    /// `u v capacity`
    Capacitated,
    /// `u v weight capacity`; the weight doubles as per-unit cost
    WeightedCapacitated,
}

impl ParseMode {
    /// Number of columns required after the two endpoints
    #[must_use]
    pub const fn extra_columns(self) -> usize {
        match self {
            Self::Plain => 0,
            Self::Weighted | Self::Capacitated => 1,
            Self::WeightedCapacitated => 2,
        }
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Weighted => write!(f, "weighted"),
            Self::Capacitated => write!(f, "capacitated"),
            Self::WeightedCapacitated => write!(f, "weighted+capacitated"),
        }
    }
}

/// Default relative tolerance for rounding a Laplacian determinant to an integer
pub const DEFAULT_DETERMINANT_TOLERANCE: f64 = 1e-6;

/// Numeric settings for analyzers that work in floating point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisConfig {
    /// Relative distance from the nearest integer above which a determinant is rejected
    pub determinant_tolerance: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            determinant_tolerance: DEFAULT_DETERMINANT_TOLERANCE,
        }
    }
}

impl AnalysisConfig {
    /// Set the determinant tolerance
    #[must_use]
    pub fn with_determinant_tolerance(mut self, tolerance: f64) -> Self {
        self.determinant_tolerance = tolerance;
        self
    }

    /// Check the configuration
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidConfig`] if the tolerance is not a finite positive number
    pub fn validate(&self) -> Result<()> {
        if !self.determinant_tolerance.is_finite() || self.determinant_tolerance <= 0.0 {
            return Err(GraphError::InvalidConfig(format!(
                "determinant tolerance must be finite and positive, got {}",
                self.determinant_tolerance
            )));
        }
        Ok(())
    }
}
