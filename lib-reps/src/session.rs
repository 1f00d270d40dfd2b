use math::*;
use crate::*;

/// Parameters an exercise session is started with. Fixed for the lifetime of the session.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig<'a>
{
    /// Identifier of the exercise being tracked.
    pub exercise: &'a str,

    pub target: Target,

    /// Position in the exercise sequence, see `NextStep::after`.
    pub position: i32,
}

impl<'a> SessionConfig<'a>
{
    /// Repetition counts of zero or below make an untimed session.
    ///
    pub fn new(exercise: &'a str, target_reps: i32, position: i32) -> Self {
        SessionConfig {
            exercise,
            target: Target::from_count(target_reps),
            position,
        }
    }

    pub fn validate(&self) -> Result<(), SessionError> {
        if self.exercise.trim().is_empty() {
            return Err(SessionError::MissingExercise);
        }
        // An exercise inside a sequence has to be able to finish, otherwise the sequence stalls.
        if self.position > 0 && !self.target.is_timed() {
            return Err(SessionError::UntimedSequenceEntry { position: self.position });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState
{
    /// No sample has passed the gate yet.
    AwaitingFirstSample,
    Accumulating,

    /// Target reached or exercise skipped; the navigator has been told.
    Complete,
    Stopped,
}

/// One exercise tracking run. Samples go in through `on_sample`, feedback goes out through the
/// display sink and the navigator. Every session owns its own detector state.
///
pub struct ExerciseSession<'a, C: Clock, S: DisplaySink, N: Navigator>
{
    config: SessionConfig<'a>,
    detector: EdgeDetector,
    tracker: ProgressTracker,
    state: SessionState,

    clock: C,
    sink: S,
    navigator: N,
}

impl<'a, C: Clock, S: DisplaySink, N: Navigator> ExerciseSession<'a, C, S, N>
{
    /// Validate the configuration and start tracking. The cadence timer starts now.
    ///
    pub fn start(
        config: SessionConfig<'a>,
        tracking: TrackingConfig,
        clock: C,
        sink: S,
        navigator: N,
    ) -> Result<Self, SessionError> {
        config.validate()?;
        tracking.validate()?;

        let start_ms = clock.now_ms();
        log::info!(
            "starting '{}' (target {:?}, position {}) at {} ms",
            config.exercise, config.target, config.position, start_ms
        );

        Ok(ExerciseSession {
            config,
            detector: EdgeDetector::new(tracking.detector),
            tracker: ProgressTracker::new(config.target, tracking.cadence, start_ms),
            state: SessionState::AwaitingFirstSample,
            clock,
            sink,
            navigator,
        })
    }

    pub fn config(&self) -> &SessionConfig<'a> {
        &self.config
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn half_reps(&self) -> u32 {
        self.tracker.half_reps()
    }

    pub fn detector(&self) -> &EdgeDetector {
        &self.detector
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Process one accelerometer sample. Returns the outcome when the sample completed a half
    /// repetition. Samples reaching a completed or stopped session are ignored.
    ///
    pub fn on_sample(&mut self, x: f64, y: f64, z: f64) -> Option<EdgeOutcome> {
        match self.state {
            SessionState::Complete | SessionState::Stopped => {
                log::trace!("session {:?}, sample ignored", self.state);
                return None;
            }
            SessionState::AwaitingFirstSample | SessionState::Accumulating => {}
        }

        let edge = self.detector.evaluate(Vector::new(x, y, z));
        if self.state == SessionState::AwaitingFirstSample && self.detector.is_bootstrapped() {
            self.state = SessionState::Accumulating;
        }
        edge?;

        let outcome = self.tracker.on_edge(self.clock.now_ms());
        self.sink.show_cadence(outcome.cadence, outcome.cadence.fill_level());
        self.sink.show_progress(outcome.progress);

        if outcome.complete {
            self.complete();
        }
        Some(outcome)
    }

    /// Finish the exercise right away, regardless of the repetitions done. Returns false if the
    /// session had already completed or was stopped.
    ///
    pub fn skip(&mut self) -> bool {
        match self.state {
            SessionState::Complete | SessionState::Stopped => false,
            SessionState::AwaitingFirstSample | SessionState::Accumulating => {
                log::info!("'{}' skipped after {} half reps", self.config.exercise, self.tracker.half_reps());
                self.complete();
                true
            }
        }
    }

    /// Start over with a fresh baseline and counter, keeping the configuration.
    ///
    pub fn restart(&mut self) {
        let now_ms = self.clock.now_ms();
        log::info!("restarting '{}' at {} ms", self.config.exercise, now_ms);
        self.detector.reset();
        self.tracker.reset(now_ms);
        self.state = SessionState::AwaitingFirstSample;
    }

    /// Stop evaluating samples. A stopped session can be revived with `restart`.
    ///
    pub fn stop(&mut self) {
        log::info!("stopping '{}'", self.config.exercise);
        self.state = SessionState::Stopped;
    }

    /// End the session and hand back the collaborators.
    ///
    pub fn into_parts(self) -> (C, S, N) {
        (self.clock, self.sink, self.navigator)
    }

    fn complete(&mut self) {
        self.state = SessionState::Complete;
        let next = NextStep::after(self.config.position);
        log::info!("'{}' complete, next: {:?}", self.config.exercise, next);
        self.navigator.exercise_complete(next);
    }
}
