use crate::*;
use super::*;

type TestSession<'a> = ExerciseSession<'static, &'a ManualClock, RecordingDisplay, RecordingNavigator>;

fn start<'a>(clock: &'a ManualClock, target: i32, position: i32) -> TestSession<'a> {
    ExerciseSession::start(
        SessionConfig::new("squats", target, position),
        TrackingConfig::default(),
        clock,
        RecordingDisplay::default(),
        RecordingNavigator::default(),
    )
    .expect("valid session")
}

/// Feed one bootstrap sample and then `edges` alternating reversals, `spacing_ms` apart.
fn feed_edges(session: &mut TestSession<'_>, clock: &ManualClock, edges: usize, spacing_ms: u64) {
    session.on_sample(UP.0, UP.1, UP.2);
    for i in 0..edges {
        clock.advance(spacing_ms);
        let (x, y, z) = if i % 2 == 0 { DOWN } else { UP };
        assert!(session.on_sample(x, y, z).is_some(), "edge {} did not fire", i + 1);
    }
}

#[test]
fn timed_session_end_to_end() {
    let clock = ManualClock::new(0);
    let mut session = start(&clock, 10, 3);

    feed_edges(&mut session, &clock, 20, 700);

    let sink = session.sink();
    let cadences = sink.cadences();
    assert_eq!(cadences.len(), 20);
    assert!(cadences.iter().all(|c| *c == Cadence::Optimal));

    let mut texts = sink.progress_texts();
    assert_eq!(texts.len(), 20);
    assert_eq!(texts.last().map(String::as_str), Some("10/10"));
    texts.dedup();
    let expected: Vec<String> = (0..=10).map(|reps| format!("{}/10", reps)).collect();
    assert_eq!(texts, expected);

    assert_eq!(session.navigator().completions, [NextStep::Exercise(2)]);
    assert_eq!(session.half_reps(), 0);
    assert_eq!(session.state(), SessionState::Complete);
}

#[test]
fn cadence_and_progress_alternate_in_order() {
    let clock = ManualClock::new(0);
    let mut session = start(&clock, 10, 1);
    feed_edges(&mut session, &clock, 2, 300);

    assert_eq!(
        session.sink().updates,
        [
            DisplayUpdate::Cadence { cadence: Cadence::TooFast, fill: 100 },
            DisplayUpdate::Progress(Progress::Fraction { reps: 0, target: 10 }),
            DisplayUpdate::Cadence { cadence: Cadence::TooFast, fill: 100 },
            DisplayUpdate::Progress(Progress::Fraction { reps: 1, target: 10 }),
        ]
    );
}

#[test]
fn untimed_session_end_to_end() {
    let clock = ManualClock::new(0);
    let mut session = start(&clock, 0, -22);

    feed_edges(&mut session, &clock, 6, 700);

    assert_eq!(session.sink().progress_texts(), ["0", "1", "1", "2", "2", "3"]);
    assert!(session.navigator().completions.is_empty());
    assert_eq!(session.state(), SessionState::Accumulating);
}

#[test]
fn last_exercise_of_sequence_returns_to_main_menu() {
    let clock = ManualClock::new(0);
    let mut session = start(&clock, 1, 1);
    feed_edges(&mut session, &clock, 2, 700);
    assert_eq!(session.navigator().completions, [NextStep::MainMenu]);
}

#[test]
fn free_session_returns_to_picker_regardless_of_target() {
    let clock = ManualClock::new(0);
    let mut session = start(&clock, 2, -22);
    feed_edges(&mut session, &clock, 4, 700);
    assert_eq!(session.navigator().completions, [NextStep::FreeSessionPicker]);

    let mut untimed = start(&clock, 0, -22);
    assert!(untimed.skip());
    assert_eq!(untimed.navigator().completions, [NextStep::FreeSessionPicker]);
}

#[test]
fn next_step_after_position() {
    assert_eq!(NextStep::after(5), NextStep::Exercise(4));
    assert_eq!(NextStep::after(2), NextStep::Exercise(1));
    assert_eq!(NextStep::after(1), NextStep::MainMenu);
    assert_eq!(NextStep::after(0), NextStep::FreeSessionPicker);
    assert_eq!(NextStep::after(-22), NextStep::FreeSessionPicker);
    assert_eq!(NextStep::after(i32::MIN), NextStep::FreeSessionPicker);
}

#[test]
fn state_machine() {
    let clock = ManualClock::new(0);
    let mut session = start(&clock, 1, 2);
    assert_eq!(session.state(), SessionState::AwaitingFirstSample);

    // Out of gate, still waiting.
    assert_eq!(session.on_sample(0.1, 0.1, 0.1), None);
    assert_eq!(session.state(), SessionState::AwaitingFirstSample);

    assert_eq!(session.on_sample(UP.0, UP.1, UP.2), None);
    assert_eq!(session.state(), SessionState::Accumulating);

    session.on_sample(DOWN.0, DOWN.1, DOWN.2);
    session.on_sample(UP.0, UP.1, UP.2);
    assert_eq!(session.state(), SessionState::Complete);

    // Completion is one-shot, later samples and skips are ignored.
    assert_eq!(session.on_sample(DOWN.0, DOWN.1, DOWN.2), None);
    assert!(!session.skip());
    assert_eq!(session.navigator().completions, [NextStep::Exercise(1)]);
}

#[test]
fn stopped_session_ignores_samples_until_restart() {
    let clock = ManualClock::new(0);
    let mut session = start(&clock, 10, 1);
    session.on_sample(UP.0, UP.1, UP.2);
    clock.advance(700);
    session.on_sample(DOWN.0, DOWN.1, DOWN.2);
    assert_eq!(session.half_reps(), 1);

    session.stop();
    assert_eq!(session.state(), SessionState::Stopped);
    assert_eq!(session.on_sample(UP.0, UP.1, UP.2), None);
    assert_eq!(session.half_reps(), 1);
    assert!(!session.skip());

    clock.advance(5_000);
    session.restart();
    assert_eq!(session.state(), SessionState::AwaitingFirstSample);
    assert_eq!(session.half_reps(), 0);
    assert!(!session.detector().is_bootstrapped());

    // The timer restarted as well: the first edge is 600 ms after the restart.
    session.on_sample(UP.0, UP.1, UP.2);
    clock.advance(600);
    let outcome = session.on_sample(DOWN.0, DOWN.1, DOWN.2).expect("edge");
    assert_eq!(outcome.interval_ms, 600);
}

#[test]
fn skip_completes_immediately() {
    let clock = ManualClock::new(0);
    let mut session = start(&clock, 10, 4);
    assert!(session.skip());
    assert_eq!(session.state(), SessionState::Complete);
    assert_eq!(session.navigator().completions, [NextStep::Exercise(3)]);
    assert!(session.sink().updates.is_empty());
}

#[test]
fn sessions_are_independent() {
    let clock = ManualClock::new(0);
    let mut a = start(&clock, 10, 1);
    let mut b = start(&clock, 10, 1);

    feed_edges(&mut a, &clock, 3, 700);
    assert_eq!(a.half_reps(), 3);
    assert_eq!(b.half_reps(), 0);
    assert!(!b.detector().is_bootstrapped());

    assert_eq!(b.on_sample(DOWN.0, DOWN.1, DOWN.2), None);
}

#[test]
fn collaborators_can_be_borrowed() {
    let clock = ManualClock::new(0);
    let mut display = RecordingDisplay::default();
    let mut navigator = RecordingNavigator::default();
    {
        let mut session = ExerciseSession::start(
            SessionConfig::new("lunges", 1, 1),
            TrackingConfig::default(),
            &clock,
            &mut display,
            &mut navigator,
        )
        .expect("valid session");
        session.on_sample(UP.0, UP.1, UP.2);
        session.on_sample(DOWN.0, DOWN.1, DOWN.2);
        session.on_sample(UP.0, UP.1, UP.2);
    }
    assert_eq!(display.progress_texts(), ["0/1", "1/1"]);
    assert_eq!(navigator.completions, [NextStep::MainMenu]);
}

#[test]
fn invalid_configuration_is_rejected_at_start() {
    let clock = ManualClock::new(0);
    let start_with = |config: SessionConfig<'static>, tracking: TrackingConfig| {
        ExerciseSession::start(
            config,
            tracking,
            &clock,
            RecordingDisplay::default(),
            RecordingNavigator::default(),
        )
        .err()
    };

    assert_eq!(
        start_with(SessionConfig::new("  ", 10, 1), TrackingConfig::default()),
        Some(SessionError::MissingExercise)
    );
    assert_eq!(
        start_with(SessionConfig::new("squats", -5, 3), TrackingConfig::default()),
        Some(SessionError::UntimedSequenceEntry { position: 3 })
    );

    let inverted = TrackingConfig {
        cadence: CadenceThresholds { slow_after_ms: 100, fast_below_ms: 200 },
        ..Default::default()
    };
    assert_eq!(
        start_with(SessionConfig::new("squats", 10, 1), inverted),
        Some(SessionError::Config(ConfigError::InvalidCadence { fast_below_ms: 200, slow_after_ms: 100 }))
    );

    // Untimed free sessions are fine.
    assert_eq!(start_with(SessionConfig::new("squats", 0, -22), TrackingConfig::default()), None);
}

#[test]
fn error_messages() {
    let err = SessionError::from(ConfigError::InvalidTolerance(f64::NAN));
    assert!(err.to_string().starts_with("Invalid tracking configuration"));
    assert!(std::error::Error::source(&err).is_some());
    assert_eq!(
        SessionError::UntimedSequenceEntry { position: 2 }.to_string(),
        "Exercise at sequence position 2 needs a positive repetition target"
    );
}
