use super::*;

fn run_to_end(ramp: &mut CounterRamp) -> Vec<CounterFrame> {
    let mut frames = Vec::new();
    for _ in 0..10_000 {
        let frame = ramp.step();
        let done = frame.done;
        frames.push(frame);
        if done {
            break;
        }
    }
    frames
}

fn value_of(frame: &CounterFrame) -> i64 {
    frame.text.trim_end_matches('+').parse().unwrap()
}

// --- parse_target ---

#[test]
fn parse_target_reads_integer() {
    assert_eq!(parse_target(Some("150")).unwrap(), 150);
    assert_eq!(parse_target(Some(" 42 ")).unwrap(), 42);
}

#[test]
fn parse_target_rejects_missing_attribute() {
    let err = parse_target(None).unwrap_err();
    assert!(matches!(err, PageError::InvalidCounterTarget { value: None }));
}

#[test]
fn parse_target_rejects_non_numeric() {
    let err = parse_target(Some("lots")).unwrap_err();
    assert!(matches!(err, PageError::InvalidCounterTarget { value: Some(ref v) } if v == "lots"));
}

// --- ramp ---

#[test]
fn target_150_ends_with_exact_text() {
    let mut ramp = CounterRamp::new(150, 2000.0, 16.0);
    let frames = run_to_end(&mut ramp);
    assert_eq!(frames.last().map(|f| f.text.as_str()), Some("150+"));
    assert!(ramp.is_done());
}

#[test]
fn intermediate_values_are_non_decreasing_and_below_target() {
    let mut ramp = CounterRamp::new(150, 2000.0, 16.0);
    let frames = run_to_end(&mut ramp);
    let (last, intermediate) = frames.split_last().unwrap();
    assert!(last.done);
    let mut prev = 0;
    for frame in intermediate {
        assert!(!frame.done);
        let value = value_of(frame);
        assert!(value >= prev, "{value} < {prev}");
        assert!(value < 150);
        prev = value;
    }
}

#[test]
fn every_frame_has_plus_suffix() {
    let mut ramp = CounterRamp::new(37, 2000.0, 16.0);
    assert!(run_to_end(&mut ramp).iter().all(|f| f.text.ends_with('+')));
}

#[test]
fn ramp_takes_about_duration_over_frame_steps() {
    let mut ramp = CounterRamp::new(1000, 2000.0, 16.0);
    let frames = run_to_end(&mut ramp);
    // 2000 / 16 = 125 increments; float accumulation may add one frame.
    assert!((125..=126).contains(&frames.len()), "{} frames", frames.len());
}

#[test]
fn small_target_floors_early_frames_to_zero() {
    let mut ramp = CounterRamp::new(5, 2000.0, 16.0);
    assert_eq!(ramp.step().text, "0+");
}

#[test]
fn zero_target_finishes_on_first_frame() {
    let mut ramp = CounterRamp::new(0, 2000.0, 16.0);
    assert_eq!(ramp.step(), CounterFrame { text: "0+".into(), done: true });
}

#[test]
fn negative_target_finishes_on_first_frame() {
    let mut ramp = CounterRamp::new(-10, 2000.0, 16.0);
    assert_eq!(ramp.step(), CounterFrame { text: "-10+".into(), done: true });
}

#[test]
fn stepping_after_done_repeats_final_frame() {
    let mut ramp = CounterRamp::new(3, 32.0, 16.0);
    run_to_end(&mut ramp);
    assert_eq!(ramp.step(), CounterFrame { text: "3+".into(), done: true });
}

#[test]
fn zero_frame_interval_completes_in_one_step() {
    let mut ramp = CounterRamp::new(80, 2000.0, 0.0);
    assert_eq!(ramp.step().text, "80+");
    assert_eq!(ramp.target(), 80);
}
