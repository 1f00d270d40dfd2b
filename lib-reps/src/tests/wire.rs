use math::*;
use crate::*;

#[test]
fn assembles_sample_on_timestamp() {
    let mut assembler = SampleAssembler::new();
    assert_eq!(assembler.feed("x0.5"), Ok(None));
    assert_eq!(assembler.feed("y-1.25"), Ok(None));
    assert_eq!(assembler.feed("z2"), Ok(None));
    assert_eq!(
        assembler.feed("t1456789012345"),
        Ok(Some(TimedSample { timestamp_ms: 1456789012345, accel: Vector::new(0.5, -1.25, 2.0) }))
    );

    // The assembler starts over after a complete sample.
    assert_eq!(assembler.feed("t1456789012400"), Err(WireError::IncompleteSample));
}

#[test]
fn axes_in_any_order_and_whitespace() {
    let mut assembler = SampleAssembler::new();
    for message in ["z 3\n", "  x1", "y2 "] {
        assert_eq!(assembler.feed(message), Ok(None));
    }
    let sample = assembler.feed("t10").expect("valid").expect("complete");
    assert_eq!(sample.accel, Vector::new(1.0, 2.0, 3.0));
}

#[test]
fn repeated_axis_keeps_latest_value() {
    let mut assembler = SampleAssembler::new();
    for message in ["x1", "y1", "x4", "z1"] {
        assembler.feed(message).expect("valid");
    }
    let sample = assembler.feed("t0").expect("valid").expect("complete");
    assert_eq!(sample.accel.x, 4.0);
}

#[test]
fn incomplete_sample_is_discarded() {
    let mut assembler = SampleAssembler::new();
    assembler.feed("x1").expect("valid");
    assembler.feed("y1").expect("valid");
    assert_eq!(assembler.feed("t5"), Err(WireError::IncompleteSample));

    // The partial x/y values are gone.
    assembler.feed("z1").expect("valid");
    assert_eq!(assembler.feed("t6"), Err(WireError::IncompleteSample));
}

#[test]
fn malformed_messages() {
    let mut assembler = SampleAssembler::new();
    assert_eq!(assembler.feed(""), Err(WireError::Empty));
    assert_eq!(assembler.feed("   "), Err(WireError::Empty));
    assert_eq!(assembler.feed("w1.0"), Err(WireError::UnknownTag('w')));
    assert!(matches!(assembler.feed("xabc"), Err(WireError::InvalidAxis { axis: 'x', .. })));
    assert!(matches!(assembler.feed("t-5"), Err(WireError::InvalidTimestamp(_))));
    assert!(matches!(assembler.feed("t"), Err(WireError::InvalidTimestamp(_))));
}

#[test]
fn malformed_timestamp_discards_pending_axes() {
    let mut assembler = SampleAssembler::new();
    for message in ["x1", "y2", "z3"] {
        assembler.feed(message).expect("valid");
    }
    assert!(matches!(assembler.feed("tnope"), Err(WireError::InvalidTimestamp(_))));

    // The axes of the broken sample must not pair with the next timestamp.
    assert_eq!(assembler.feed("t20"), Err(WireError::IncompleteSample));
}
