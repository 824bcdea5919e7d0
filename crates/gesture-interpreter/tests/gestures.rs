use std::time::Duration;

use gesture_interpreter::prelude::*;

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

fn interpreter() -> GestureInterpreter {
    GestureInterpreter::new(GestureConfig {
        rotation_speed: 0.5,
        zoom_speed: 0.1,
        pan_speed: 0.01,
        min_scale: 0.1,
        max_scale: 5.0,
        ..Default::default()
    })
    .unwrap()
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

/// Touch pair whose points are exactly `distance` apart.
fn pinch(distance: f32) -> [Pos2; 2] {
    [Pos2::new(200.0, 200.0), Pos2::new(200.0 + distance, 200.0)]
}

/// Deterministic xorshift sequence of values in -500..500.
fn deltas(mut seed: u64, count: usize) -> Vec<f64> {
    (0..count)
        .map(|_| {
            seed ^= seed << 13;
            seed ^= seed >> 7;
            seed ^= seed << 17;
            (seed % 1000) as f64 - 500.0
        })
        .collect()
}

#[test]
fn double_click_then_drag_rotates() {
    let mut interpreter = interpreter();
    let mut target = Transform::default();

    interpreter.on_pointer_down(Pos2::new(100.0, 100.0), PointerButton::Primary, ms(0));
    interpreter.on_pointer_up();
    interpreter.on_pointer_down(Pos2::new(100.0, 100.0), PointerButton::Primary, ms(50));
    assert_eq!(interpreter.mode(), GestureMode::Rotating);

    let result = interpreter.on_pointer_move(Pos2::new(110.0, 115.0), &mut target);

    assert!(matches!(result, Some(GestureResult::Rotation { .. })));
    assert_close(target.rotation.x, -7.5);
    assert_close(target.rotation.y, 5.0);
    assert_close(target.rotation.z, 0.0);
    assert_eq!(target.position, Transform::default().position);
}

#[test]
fn slow_second_click_pans() {
    let mut interpreter = interpreter();
    let mut target = Transform::default();

    interpreter.on_pointer_down(Pos2::new(100.0, 100.0), PointerButton::Primary, ms(0));
    interpreter.on_pointer_up();
    interpreter.on_pointer_down(Pos2::new(100.0, 100.0), PointerButton::Primary, ms(300));
    assert_eq!(interpreter.mode(), GestureMode::Panning);

    let result = interpreter.on_pointer_move(Pos2::new(110.0, 115.0), &mut target);

    assert!(matches!(result, Some(GestureResult::Translation { .. })));
    assert_close(target.position.x, 0.1);
    assert_close(target.position.y, 0.15);
    assert_close(target.position.z, 0.0);
    assert_eq!(target.rotation, Transform::default().rotation);
}

#[test]
fn rotation_is_relative_to_previous_move() {
    let mut interpreter = interpreter();
    let mut target = Transform::default();

    interpreter.on_pointer_down(Pos2::new(0.0, 0.0), PointerButton::Primary, ms(0));
    interpreter.on_pointer_down(Pos2::new(0.0, 0.0), PointerButton::Primary, ms(10));
    interpreter.on_pointer_move(Pos2::new(10.0, 0.0), &mut target);
    interpreter.on_pointer_move(Pos2::new(20.0, 0.0), &mut target);
    interpreter.on_pointer_move(Pos2::new(20.0, 0.0), &mut target);

    assert_close(target.rotation.y, 10.0);
}

#[test]
fn wheel_up_clamps_to_max_scale() {
    let mut interpreter = interpreter();
    let mut target = Transform::default();

    let result = interpreter.on_wheel(-100.0, &mut target);

    assert_eq!(result, Some(GestureResult::Scale { factor: 5.0 }));
    assert_close(interpreter.scale(), 5.0);
    assert_close(target.scale, 5.0);
    assert_eq!(interpreter.mode(), GestureMode::Idle);

    assert_eq!(interpreter.on_wheel(-100.0, &mut target), None);
}

#[test]
fn pinch_spread_increases_scale() {
    let mut interpreter = interpreter();
    let mut target = Transform::default();

    interpreter.on_touch_start(&pinch(50.0), ms(0));
    assert_eq!(interpreter.mode(), GestureMode::Zooming);
    assert_eq!(interpreter.state().last_pinch_distance(), Some(50.0));

    interpreter.on_touch_move(&pinch(80.0), &mut target);

    assert_close(interpreter.scale(), 0.1 + 3.0);
    assert_close(target.scale, 0.1 + 3.0);
    assert_eq!(interpreter.state().last_pinch_distance(), Some(80.0));
}

#[test]
fn pinch_is_monotonic_in_distance_change() {
    let config = GestureConfig {
        zoom_speed: 0.001,
        ..Default::default()
    };
    let mut interpreter = GestureInterpreter::new(config).unwrap();
    let mut target = Transform::default();

    interpreter.on_touch_start(&pinch(100.0), ms(0));

    let mut distance = 100.0;
    for step in deltas(7, 200) {
        let next = (distance + step as f32 / 10.0).max(1.0);
        let before = interpreter.scale();

        interpreter.on_touch_move(&pinch(next), &mut target);

        let after = interpreter.scale();
        if next > distance {
            assert!(after >= before, "spreading from {distance} to {next} shrank");
        } else if next < distance {
            assert!(after <= before, "pinching from {distance} to {next} grew");
        }
        distance = next;
    }
}

#[test]
fn scale_stays_within_bounds() {
    let mut interpreter = interpreter();
    let mut target = Transform::default();
    let config = *interpreter.config();

    for delta in deltas(42, 1000) {
        interpreter.zoom(delta / 10.0, &mut target);

        assert!(interpreter.scale() >= config.min_scale);
        assert!(interpreter.scale() <= config.max_scale);
    }
}

#[test]
fn non_finite_wheel_delta_is_ignored() {
    let mut interpreter = interpreter();
    let mut target = Transform::default();

    assert_eq!(interpreter.on_wheel(f64::NAN, &mut target), None);
    assert_eq!(interpreter.on_wheel(f64::INFINITY, &mut target), None);
    assert_close(interpreter.scale(), 0.1);
    assert_close(target.scale, 1.0);

    interpreter.on_wheel(-10.0, &mut target);
    assert_close(interpreter.scale(), 1.1);
}

#[test]
fn non_finite_touch_does_not_break_pinch() {
    let mut interpreter = interpreter();
    let mut target = Transform::default();

    interpreter.on_touch_start(&pinch(50.0), ms(0));
    let broken = [Pos2::new(200.0, 200.0), Pos2::new(f32::NAN, 200.0)];
    assert_eq!(interpreter.on_touch_move(&broken, &mut target), None);
    assert_eq!(interpreter.state().last_pinch_distance(), Some(50.0));

    interpreter.on_touch_move(&pinch(80.0), &mut target);

    assert_close(interpreter.scale(), 0.1 + 3.0);
    assert_close(target.scale, 0.1 + 3.0);
}

#[test]
fn end_events_always_reset_to_idle() {
    let starts: [fn(&mut GestureInterpreter); 4] = [
        |_| {},
        |interpreter| {
            interpreter.on_pointer_down(Pos2::ZERO, PointerButton::Primary, ms(0));
        },
        |interpreter| interpreter.on_touch_start(&[Pos2::ZERO], ms(0)),
        |interpreter| interpreter.on_touch_start(&pinch(10.0), ms(0)),
    ];
    let ends: [fn(&mut GestureInterpreter); 3] = [
        GestureInterpreter::on_pointer_up,
        GestureInterpreter::on_touch_end,
        GestureInterpreter::on_touch_cancel,
    ];

    for start in starts {
        for end in ends {
            let mut interpreter = interpreter();
            start(&mut interpreter);
            end(&mut interpreter);

            assert_eq!(interpreter.mode(), GestureMode::Idle);
        }
    }
}

#[test]
fn one_finger_rotates_and_three_fingers_pan() {
    let mut interpreter = interpreter();
    let mut target = Transform::default();

    interpreter.on_touch_start(&[Pos2::new(0.0, 0.0)], ms(0));
    assert_eq!(interpreter.mode(), GestureMode::Rotating);
    interpreter.on_touch_move(&[Pos2::new(0.0, 10.0)], &mut target);
    assert_close(target.rotation.x, -5.0);
    interpreter.on_touch_end();

    let three = [Pos2::new(0.0, 0.0), Pos2::new(50.0, 0.0), Pos2::new(0.0, 50.0)];
    interpreter.on_touch_start(&three, ms(1000));
    assert_eq!(interpreter.mode(), GestureMode::Panning);

    let moved = three.map(|touch| touch + emath_vec(100.0, 0.0));
    interpreter.on_touch_move(&moved, &mut target);
    assert_close(target.position.x, 1.0);
}

#[test]
fn custom_touch_mapping() {
    let mut interpreter = GestureInterpreter::new(GestureConfig {
        touch_mapping: TouchMapping {
            one_finger: Some(GestureKind::Pan),
            two_fingers: Some(GestureKind::Zoom),
            three_fingers: None,
        },
        ..Default::default()
    })
    .unwrap();
    let mut target = Transform::default();

    interpreter.on_touch_start(&[Pos2::new(0.0, 0.0)], ms(0));
    assert_eq!(interpreter.mode(), GestureMode::Panning);
    interpreter.on_touch_move(&[Pos2::new(100.0, 0.0)], &mut target);
    assert_close(target.position.x, 1.0);

    interpreter.on_touch_start(&[Pos2::ZERO; 3], ms(10));
    assert_eq!(interpreter.mode(), GestureMode::Idle);
}

#[test]
fn degenerate_touch_lists_are_ignored() {
    let mut interpreter = interpreter();
    let mut target = Transform::default();

    interpreter.on_touch_start(&[], ms(0));
    assert_eq!(interpreter.mode(), GestureMode::Idle);
    assert_eq!(interpreter.on_touch_move(&[], &mut target), None);

    interpreter.on_touch_start(&pinch(50.0), ms(0));
    assert_eq!(interpreter.on_touch_move(&[Pos2::ZERO], &mut target), None);
    assert_eq!(interpreter.on_touch_move(&[], &mut target), None);
    assert_eq!(interpreter.mode(), GestureMode::Zooming);
    assert_eq!(target, Transform::default());
}

#[test]
fn tap_then_click_counts_as_double_click() {
    let mut interpreter = interpreter();

    interpreter.on_touch_start(&[Pos2::ZERO], ms(0));
    interpreter.on_touch_end();
    interpreter.on_pointer_down(Pos2::ZERO, PointerButton::Primary, ms(100));

    assert_eq!(interpreter.mode(), GestureMode::Rotating);
}

fn emath_vec(x: f32, y: f32) -> gesture_interpreter::math::Vec2 {
    gesture_interpreter::math::Vec2::new(x, y)
}
