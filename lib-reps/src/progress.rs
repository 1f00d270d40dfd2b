use core::{fmt, num::NonZeroU32};
use crate::*;

/// How many full repetitions finish an exercise.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target
{
    Reps(NonZeroU32),

    /// Free session, runs until stopped from the outside.
    Untimed,
}

impl Target
{
    /// Counts of zero or below mean an untimed session.
    ///
    pub fn from_count(count: i32) -> Self {
        match u32::try_from(count).ok().and_then(NonZeroU32::new) {
            Some(reps) => Target::Reps(reps),
            None => Target::Untimed,
        }
    }

    pub fn is_timed(&self) -> bool {
        matches!(self, Target::Reps(_))
    }
}

/// Repetition progress as shown to the user.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress
{
    Fraction { reps: u32, target: u32 },
    Count(u32),
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Progress::Fraction { reps, target } => write!(f, "{}/{}", reps, target),
            Progress::Count(reps) => write!(f, "{}", reps),
        }
    }
}

/// Result of registering one edge with the tracker.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeOutcome
{
    pub cadence: Cadence,
    pub interval_ms: u64,
    pub progress: Progress,

    /// The target was reached with this edge. The half-repetition counter has already been reset.
    pub complete: bool,
}

/// Counts half repetitions, times them and decides when the target is reached.
///
pub struct ProgressTracker
{
    target: Target,
    thresholds: CadenceThresholds,

    /// Edges seen since the session started or the target was last reached.
    half_reps: u32,

    /// In milliseconds; time of the previous edge, or of the session start before the first one.
    last_edge_ms: u64,
}

impl ProgressTracker
{
    pub fn new(target: Target, thresholds: CadenceThresholds, start_ms: u64) -> Self {
        ProgressTracker {
            target,
            thresholds,
            half_reps: 0,
            last_edge_ms: start_ms,
        }
    }

    pub fn target(&self) -> Target {
        self.target
    }

    pub fn half_reps(&self) -> u32 {
        self.half_reps
    }

    /// Two half repetitions make one, an unpaired half is not shown.
    ///
    pub fn full_reps(&self) -> u32 {
        self.half_reps / 2
    }

    pub fn last_edge_ms(&self) -> u64 {
        self.last_edge_ms
    }

    /// Start counting from zero again, timing from `now_ms`.
    ///
    pub fn reset(&mut self, now_ms: u64) {
        self.half_reps = 0;
        self.last_edge_ms = now_ms;
    }

    /// Register one edge observed at `now_ms`.
    ///
    pub fn on_edge(&mut self, now_ms: u64) -> EdgeOutcome {
        self.half_reps = self.half_reps.saturating_add(1);

        let interval_ms = now_ms.saturating_sub(self.last_edge_ms);
        self.last_edge_ms = now_ms;
        let cadence = Cadence::classify(interval_ms, &self.thresholds);

        let reps = self.full_reps();
        log::debug!("half rep #{}: {} ms since last edge ({})", self.half_reps, interval_ms, cadence);

        let (progress, complete) = match self.target {
            Target::Reps(target) => {
                let target = target.get();
                let complete = reps >= target;
                if complete {
                    self.half_reps = 0;
                }
                (Progress::Fraction { reps, target }, complete)
            }
            Target::Untimed => (Progress::Count(reps), false),
        };

        EdgeOutcome { cadence, interval_ms, progress, complete }
    }
}
