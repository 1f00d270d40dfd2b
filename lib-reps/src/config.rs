use crate::*;

/// Squared magnitude a sample must exceed before it is considered motion rather than noise.
pub const DEFAULT_GATE_MIN: f64 = 1.0;

/// Squared magnitude above which a sample is treated as an implausible spike.
pub const DEFAULT_GATE_MAX: f64 = 10.0;

/// Similarity measures strictly below this fire an edge.
pub const DEFAULT_EDGE_TOLERANCE: f64 = 0.0001;

/// A baseline with every axis within this distance of zero counts as uninitialized.
pub const DEFAULT_BOOTSTRAP_BAND: f64 = 0.1;

/// Every unit vector has at least one component of magnitude 1/sqrt(3) (~0.577), so any band up
/// to this value is guaranteed to recognize an initialized baseline.
pub const MAX_BOOTSTRAP_BAND: f64 = 0.5;

/// Inter-edge intervals longer than this are "too slow".
pub const DEFAULT_SLOW_AFTER_MS: u64 = 1000;

/// Inter-edge intervals shorter than this are "too fast".
pub const DEFAULT_FAST_BELOW_MS: u64 = 500;

/// Admission filter on the squared magnitude of raw samples. Both bounds are exclusive.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MagnitudeGate
{
    pub min: f64,
    pub max: f64,
}

impl MagnitudeGate
{
    pub const fn new(min: f64, max: f64) -> Self {
        MagnitudeGate { min, max }
    }

    /// Gate with only a lower bound.
    ///
    pub const fn at_least(min: f64) -> Self {
        MagnitudeGate { min, max: f64::INFINITY }
    }

    /// NaN never passes since both comparisons are false.
    #[inline]
    pub fn admits(&self, magnitude_squared: f64) -> bool {
        self.min < magnitude_squared && magnitude_squared < self.max
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min.is_nan() || self.max.is_nan() || self.min < 0.0 || self.min >= self.max {
            return Err(ConfigError::InvalidGate { min: self.min, max: self.max });
        }
        Ok(())
    }
}

impl Default for MagnitudeGate {
    fn default() -> Self {
        MagnitudeGate::new(DEFAULT_GATE_MIN, DEFAULT_GATE_MAX)
    }
}

/// How the baseline and current direction are combined into the single similarity measure that
/// gets compared against the edge tolerance.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgePolicy
{
    /// Sum of all six baseline and current components. Fires when the direction reversed across
    /// all axes in aggregate.
    #[default]
    CombinedSum,

    /// Per axis sum of baseline and current, every axis has to pass. Stricter than
    /// `CombinedSum`, it requires each axis to reverse on its own.
    AxisWise,
}

/// When the baseline is replaced by the current direction.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BaselineUpdate
{
    /// After every admitted sample, edge or not. Recommended: the next comparison is always
    /// against the most recent direction, so slow, smoothly turning motion is not counted twice.
    #[default]
    Always,

    /// Only when an edge fires. The baseline then lags behind the motion between edges.
    OnEdge,
}

/// Tuning of the magnitude gate and edge detector.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectorConfig
{
    pub gate: MagnitudeGate,
    pub tolerance: f64,
    pub bootstrap_band: f64,
    pub policy: EdgePolicy,
    pub baseline_update: BaselineUpdate,
}

impl DetectorConfig
{
    /// Lower bound only gate, combined-sum measure.
    ///
    pub fn simplified(gate_min: f64) -> Self {
        DetectorConfig {
            gate: MagnitudeGate::at_least(gate_min),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gate.validate()?;
        if self.tolerance.is_nan() {
            return Err(ConfigError::InvalidTolerance(self.tolerance));
        }
        if !(self.bootstrap_band > 0.0 && self.bootstrap_band <= MAX_BOOTSTRAP_BAND) {
            return Err(ConfigError::InvalidBootstrapBand(self.bootstrap_band));
        }
        Ok(())
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        DetectorConfig {
            gate: MagnitudeGate::default(),
            tolerance: DEFAULT_EDGE_TOLERANCE,
            bootstrap_band: DEFAULT_BOOTSTRAP_BAND,
            policy: EdgePolicy::default(),
            baseline_update: BaselineUpdate::default(),
        }
    }
}

/// Interval thresholds for cadence classification, both exclusive.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CadenceThresholds
{
    pub slow_after_ms: u64,
    pub fast_below_ms: u64,
}

impl CadenceThresholds
{
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.fast_below_ms > self.slow_after_ms {
            return Err(ConfigError::InvalidCadence {
                fast_below_ms: self.fast_below_ms,
                slow_after_ms: self.slow_after_ms,
            });
        }
        Ok(())
    }
}

impl Default for CadenceThresholds {
    fn default() -> Self {
        CadenceThresholds {
            slow_after_ms: DEFAULT_SLOW_AFTER_MS,
            fast_below_ms: DEFAULT_FAST_BELOW_MS,
        }
    }
}

/// Everything that tunes how a session turns samples into repetitions.
///
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackingConfig
{
    pub detector: DetectorConfig,
    pub cadence: CadenceThresholds,
}

impl TrackingConfig
{
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.detector.validate()?;
        self.cadence.validate()
    }
}
