use math::*;
use crate::*;
use cfg_if::cfg_if;

/// One detected reversal of motion direction, i.e. half a repetition.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge
{
    /// Normalized direction of the sample that fired the edge.
    pub direction: Vector,

    /// Similarity measure that fell below the tolerance.
    pub measure: f64,
}

/// Turns the raw sample stream into edges by comparing each normalized sample with the baseline,
/// the previously accepted direction.
///
pub struct EdgeDetector
{
    config: DetectorConfig,

    /// Last accepted unit direction; the zero vector until the first admitted sample.
    baseline: Vector,

    /// Similarity measure computed for the last evaluated sample, NaN when that sample never got
    /// compared (outside the gate or used for bootstrap).
    #[cfg(feature = "debug")]
    pub last_measure: f64,
}

impl EdgeDetector
{
    #[inline]
    pub fn new(config: DetectorConfig) -> Self {
        EdgeDetector {
            config,
            baseline: Vector::zero(),
            #[cfg(feature = "debug")]
            last_measure: f64::NAN,
        }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    pub fn baseline(&self) -> Vector {
        self.baseline
    }

    /// Has the first admitted sample of the session been seen?
    ///
    pub fn is_bootstrapped(&self) -> bool {
        !self.baseline.is_near_zero(self.config.bootstrap_band)
    }

    /// Forget the baseline, the next admitted sample bootstraps again.
    ///
    pub fn reset(&mut self) {
        self.baseline = Vector::zero();
    }

    /// Similarity between the baseline and `current` under the configured policy. Axis-wise
    /// requires every axis to be below the tolerance, which is the same as requiring the largest
    /// axis to be.
    ///
    pub fn measure(&self, current: &Vector) -> f64 {
        let sum = self.baseline + *current;
        match self.config.policy {
            EdgePolicy::CombinedSum => sum.component_sum(),
            EdgePolicy::AxisWise => libm::fmax(libm::fmax(sum.x, sum.y), sum.z),
        }
    }

    /// Evaluate one raw sample. Samples outside the magnitude gate are dropped without touching
    /// any state.
    ///
    pub fn evaluate(&mut self, sample: Vector) -> Option<Edge> {
        cfg_if! { if #[cfg(feature = "debug")] {
            self.last_measure = f64::NAN;
        }}

        let magnitude_squared = sample.magnitude_squared();
        if !self.config.gate.admits(magnitude_squared) {
            log::trace!("sample {:?} outside gate (|v|^2 = {})", sample, magnitude_squared);
            return None;
        }

        let current = sample.normalize();

        // The first admitted sample only seeds the baseline.
        if !self.is_bootstrapped() {
            log::debug!("baseline bootstrapped to {:?}", current);
            self.baseline = current;
            return None;
        }

        let measure = self.measure(&current);

        cfg_if! { if #[cfg(feature = "debug")] {
            self.last_measure = measure;
        }}

        let edge = if measure < self.config.tolerance {
            log::debug!("edge: measure {} < tolerance {}", measure, self.config.tolerance);
            Some(Edge { direction: current, measure })
        } else {
            None
        };

        if edge.is_some() || self.config.baseline_update == BaselineUpdate::Always {
            self.baseline = current;
        }

        edge
    }
}
