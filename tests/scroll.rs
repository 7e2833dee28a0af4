use folio_viz::ease::Ease;
use folio_viz::scroll::{ScrollConfig, ScrollController, ScrollDirection, Smoothing};

const FRAME: f64 = 1.0 / 60.0;

fn run(controller: &mut ScrollController, seconds: f64) {
    let frames = (seconds / FRAME).ceil() as usize;
    for _ in 0..frames {
        controller.advance(FRAME);
    }
}

#[test]
fn wheel_moves_target_not_offset() {
    let mut controller = ScrollController::new(ScrollConfig::default(), 5_000.0);
    controller.on_wheel(300.0);
    let state = controller.state();
    assert_eq!(state.target, 300.0);
    assert_eq!(state.current, 0.0);
    assert!(!controller.is_settled());
}

#[test]
fn duration_smoothing_converges() {
    let mut controller = ScrollController::new(ScrollConfig::default(), 5_000.0);
    controller.on_wheel(600.0);

    let first = controller.advance(FRAME);
    assert!(first > 0.0 && first < 600.0);
    assert_eq!(controller.direction(), ScrollDirection::Down);
    assert!(controller.state().velocity > 0.0);

    run(&mut controller, 1.2);
    assert_eq!(controller.offset(), 600.0);
    assert!(controller.is_settled());
}

#[test]
fn damp_smoothing_converges() {
    let config = ScrollConfig {
        smoothing: Smoothing::Damp { lerp: 0.1 },
        ..ScrollConfig::default()
    };
    let mut controller = ScrollController::new(config, 5_000.0);
    controller.on_wheel(400.0);
    let first = controller.advance(FRAME);
    assert!(first > 0.0 && first < 400.0);
    run(&mut controller, 3.0);
    assert_eq!(controller.offset(), 400.0);
}

#[test]
fn offsets_are_clamped_to_the_limit() {
    let mut controller = ScrollController::new(ScrollConfig::default(), 1_000.0);
    controller.on_wheel(-250.0);
    assert_eq!(controller.state().target, 0.0);

    controller.on_wheel(5_000.0);
    assert_eq!(controller.state().target, 1_000.0);
    run(&mut controller, 2.0);
    assert_eq!(controller.offset(), 1_000.0);

    controller.set_limit(400.0);
    assert_eq!(controller.offset(), 400.0);
    assert_eq!(controller.state().target, 400.0);
    assert_eq!(controller.limit(), 400.0);
}

#[test]
fn touch_jumps_by_default() {
    let mut controller = ScrollController::new(ScrollConfig::default(), 5_000.0);
    controller.on_touch(50.0);
    // Touch deltas are doubled and applied without easing.
    assert_eq!(controller.offset(), 100.0);
    assert!(controller.is_settled());
}

#[test]
fn smooth_touch_eases() {
    let config = ScrollConfig {
        smooth_touch: true,
        ..ScrollConfig::default()
    };
    let mut controller = ScrollController::new(config, 5_000.0);
    controller.on_touch(50.0);
    assert_eq!(controller.offset(), 0.0);
    run(&mut controller, 1.5);
    assert_eq!(controller.offset(), 100.0);
}

#[test]
fn scrolling_up_reports_direction() {
    let mut controller = ScrollController::new(ScrollConfig::default(), 5_000.0);
    controller.scroll_to(800.0, true);
    controller.scroll_to(200.0, false);
    controller.advance(FRAME);
    assert_eq!(controller.direction(), ScrollDirection::Up);
    assert!(controller.state().velocity < 0.0);
    run(&mut controller, 1.5);
    assert_eq!(controller.offset(), 200.0);
    controller.advance(FRAME);
    assert_eq!(controller.direction(), ScrollDirection::Idle);
    assert_eq!(controller.state().velocity, 0.0);
}

#[test]
fn zero_dt_has_no_velocity() {
    let mut controller = ScrollController::new(ScrollConfig::default(), 5_000.0);
    controller.on_wheel(100.0);
    controller.advance(0.0);
    assert_eq!(controller.state().velocity, 0.0);
}

#[test]
fn config_deserializes_with_defaults() {
    let config: ScrollConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config, ScrollConfig::default());
    assert_eq!(
        config.smoothing,
        Smoothing::Duration {
            seconds: 1.2,
            ease: Ease::OutExpo
        }
    );

    let config: ScrollConfig =
        serde_json::from_str(r#"{"smoothing":{"mode":"damp","lerp":0.08},"smooth_touch":true}"#).unwrap();
    assert_eq!(config.smoothing, Smoothing::Damp { lerp: 0.08 });
    assert!(config.smooth_touch);
    assert_eq!(config.touch_multiplier, 2.0);
}
