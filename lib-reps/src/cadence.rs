use core::fmt;
use crate::*;

/// Speed of the movement, judged from the time between two consecutive edges.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cadence
{
    TooSlow,
    TooFast,
    Optimal,
}

impl Cadence
{
    /// Both thresholds are strict, an interval of exactly `slow_after_ms` or `fast_below_ms` is
    /// still optimal.
    ///
    pub fn classify(interval_ms: u64, thresholds: &CadenceThresholds) -> Self {
        if interval_ms > thresholds.slow_after_ms {
            Cadence::TooSlow
        } else if interval_ms < thresholds.fast_below_ms {
            Cadence::TooFast
        } else {
            Cadence::Optimal
        }
    }

    /// Fill level in percent for a progress-bar style indicator.
    ///
    pub fn fill_level(&self) -> u8 {
        match self {
            Cadence::TooSlow => 2,
            Cadence::TooFast => 100,
            Cadence::Optimal => 50,
        }
    }

    /// Should the indicator be highlighted as a warning?
    ///
    pub fn is_alert(&self) -> bool {
        !matches!(self, Cadence::Optimal)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Cadence::TooSlow => "too slow",
            Cadence::TooFast => "too fast",
            Cadence::Optimal => "optimal",
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}
