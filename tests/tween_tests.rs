use cube_scene::easing::EasingFunction;
use cube_scene::tween::{Repeat, Tween};

fn scene_tween() -> Tween {
    Tween::new(0.0, 2.0, 2.0)
        .with_easing(EasingFunction::QuadraticInOut)
        .with_yoyo(true)
        .with_repeat(Repeat::Infinite)
}

#[test]
fn first_leg_ends_on_target() {
    let tween = scene_tween();
    assert_eq!(tween.value_at(2.0), 2.0);
}

#[test]
fn yoyo_leg_ends_on_initial_value() {
    let tween = scene_tween();
    assert_eq!(tween.value_at(4.0), 0.0);
}

#[test]
fn value_bounded_for_all_time() {
    let tween = scene_tween();

    for i in 0..10_000 {
        let time = i as f32 * 0.0173; // deliberately not a divisor of the leg length
        let value = tween.value_at(time);
        assert!(
            (0.0..=2.0).contains(&value),
            "value {} escaped [0, 2] at time {}",
            value,
            time
        );
    }
}

#[test]
fn legs_alternate_direction_forever() {
    let tween = scene_tween();

    for leg in 0..50u32 {
        let end = (leg + 1) as f32 * 2.0;
        let expected = if leg % 2 == 0 { 2.0 } else { 0.0 };
        assert_eq!(
            tween.value_at(end),
            expected,
            "wrong endpoint after leg {}",
            leg
        );
    }
}

#[test]
fn eased_quarter_point_lags_linear() {
    let tween = scene_tween();

    // Ease-in: at a quarter of the leg the eased value trails the linear one
    let quarter = tween.value_at(0.5);
    assert!(quarter < 0.5, "ease-in should lag linear, got {}", quarter);
    assert!(quarter > 0.0);
}

#[test]
fn midpoint_crosses_half_span() {
    let tween = scene_tween();
    assert!((tween.value_at(1.0) - 1.0).abs() < 1e-6);
}

#[test]
fn advancing_matches_absolute_sampling() {
    let mut advanced = scene_tween();
    let sampled = scene_tween();

    let mut elapsed = 0.0f32;
    for _ in 0..500 {
        let value = advanced.advance(0.013);
        elapsed += 0.013;
        let expected = sampled.value_at(elapsed);
        assert!(
            (value - expected).abs() < 1e-5,
            "advance and value_at disagree at {}: {} vs {}",
            elapsed,
            value,
            expected
        );
    }
}
