use folio_viz::clock::{FrameClock, RepeatingTimer, MAX_FRAME_DT};
use folio_viz::visual::{Cycle, GlyphMotion, VariantCycler, IMAGE_CATALOG};
use folio_viz::VizError;

#[test]
fn first_tick_anchors() {
    let mut clock = FrameClock::new();
    assert_eq!(clock.tick(12_345.0), 0.0);
    assert!((clock.tick(12_361.0) - 0.016).abs() < 1e-12);
    assert!((clock.elapsed() - 0.016).abs() < 1e-12);
}

#[test]
fn long_gaps_are_clamped() {
    let mut clock = FrameClock::new();
    clock.tick(0.0);
    assert_eq!(clock.tick(5_000.0), MAX_FRAME_DT);
    // Timestamps going backwards never produce negative time.
    assert_eq!(clock.tick(4_000.0), 0.0);
    assert!((clock.elapsed() - MAX_FRAME_DT).abs() < 1e-12);
}

#[test]
fn real_time_clock_keeps_pace_at_low_frame_rates() {
    let mut clock = FrameClock::real_time();
    let mut cycler = VariantCycler::new(IMAGE_CATALOG, 0, Cycle::Every(200.0)).unwrap();
    cycler.start();

    // Ten seconds at 8 fps.
    clock.tick(0.0);
    let mut changes = 0;
    for frame in 1..=80 {
        let dt = clock.tick(frame as f64 * 125.0);
        assert_eq!(dt, 0.125);
        if cycler.advance(dt * 1000.0) {
            changes += 1;
        }
    }
    assert!((clock.elapsed() - 10.0).abs() < 1e-9);
    assert_eq!(changes, 50);
    assert_eq!(cycler.index(), 50 % IMAGE_CATALOG.len());

    let pose = GlyphMotion::default().pose(clock.elapsed());
    assert!((pose.rotation_y - 1.8).abs() < 1e-9);

    // Stalls are not clamped either, but time never runs backwards.
    assert_eq!(clock.tick(15_000.0), 5.0);
    assert_eq!(clock.tick(14_000.0), 0.0);
}

#[test]
fn timer_counts_whole_intervals_and_carries() {
    let mut timer = RepeatingTimer::new(200.0).unwrap();
    timer.start();
    assert_eq!(timer.advance(150.0), 0);
    assert_eq!(timer.advance(100.0), 1);
    assert_eq!(timer.advance(350.0), 2);
    assert_eq!(timer.advance(1_000.0), 5);
}

#[test]
fn stopped_timer_does_not_fire() {
    let mut timer = RepeatingTimer::new(200.0).unwrap();
    assert!(!timer.is_running());
    assert_eq!(timer.advance(1_000.0), 0);

    timer.start();
    assert_eq!(timer.advance(150.0), 0);
    timer.stop();
    timer.start();
    // The partial interval was discarded on stop.
    assert_eq!(timer.advance(100.0), 0);
    assert_eq!(timer.interval_ms(), 200.0);
}

#[test]
fn rejects_non_positive_intervals() {
    assert!(matches!(RepeatingTimer::new(0.0), Err(VizError::InvalidInterval(_))));
    assert!(RepeatingTimer::new(-5.0).is_err());
    assert!(RepeatingTimer::new(f64::NAN).is_err());
    assert!(RepeatingTimer::new(f64::INFINITY).is_err());
}
