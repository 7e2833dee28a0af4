use folio_viz::nav::{NavConfig, NavOverlay, NavStyle, NavVisibility};
use folio_viz::theme::{DARK, LIGHT};

fn settled() -> NavOverlay {
    let mut overlay = NavOverlay::new(NavConfig::default());
    overlay.advance(1.0);
    overlay
}

#[test]
fn hides_once_past_the_threshold() {
    let mut overlay = settled();
    let mut changes = Vec::new();
    for y in (0..=400).step_by(20) {
        if let Some(visibility) = overlay.on_scroll(y as f64) {
            changes.push((y, visibility));
        }
    }
    assert_eq!(changes, vec![(120, NavVisibility::Hidden)]);
    assert_eq!(overlay.visibility(), NavVisibility::Hidden);
}

#[test]
fn stays_shown_below_threshold() {
    let mut overlay = settled();
    for y in [10.0, 50.0, 90.0, 100.0] {
        assert_eq!(overlay.on_scroll(y), None);
    }
    assert_eq!(overlay.visibility(), NavVisibility::Shown);
}

#[test]
fn scrolling_up_shows_again() {
    let mut overlay = settled();
    overlay.on_scroll(300.0);
    assert_eq!(overlay.visibility(), NavVisibility::Hidden);
    assert_eq!(overlay.on_scroll(280.0), Some(NavVisibility::Shown));
    assert_eq!(overlay.on_scroll(260.0), None);
}

#[test]
fn slide_animates_to_minus_hundred_percent() {
    let mut overlay = settled();
    assert!(!overlay.is_animating());
    overlay.on_scroll(200.0);
    assert!(overlay.is_animating());

    let mid = overlay.advance(0.15);
    assert!(mid.y_percent < 0.0 && mid.y_percent > -100.0);

    let end = overlay.advance(0.2);
    assert_eq!(end.y_percent, -100.0);
    assert!(!overlay.is_animating());
}

#[test]
fn reversal_starts_from_current_position() {
    let mut overlay = settled();
    overlay.on_scroll(200.0);
    let partial = overlay.advance(0.1).y_percent;
    overlay.on_scroll(150.0);
    assert_eq!(overlay.pose().y_percent, partial);
    assert_eq!(overlay.advance(0.3).y_percent, 0.0);
}

#[test]
fn intro_fades_and_drops_in() {
    let mut overlay = NavOverlay::new(NavConfig::default());
    let start = overlay.pose();
    assert_eq!(start.opacity, 0.0);
    assert_eq!(start.intro_y, -50.0);
    assert!(overlay.is_animating());

    let done = overlay.advance(0.8);
    assert_eq!(done.opacity, 1.0);
    assert_eq!(done.intro_y, 0.0);
    assert_eq!(done.css_transform(), "translateY(calc(0.000% + 0.00px))");
}

#[test]
fn style_follows_palette() {
    let dark = NavStyle::from_palette(&DARK);
    assert_eq!(dark.background, "rgba(0, 0, 0, 0.8)");
    assert_eq!(dark.border, "rgba(107, 114, 128, 0.3)");
    assert_eq!(dark.text, "#ffffff");
    assert_eq!(dark.link_hover, "#10b981");

    let light = NavStyle::from_palette(&LIGHT);
    assert_eq!(light.background, "rgba(249, 250, 251, 0.8)");
    assert_eq!(light.text, "#111827");
}

#[test]
fn config_deserializes() {
    let config: NavConfig = serde_json::from_str(r#"{"threshold":64}"#).unwrap();
    assert_eq!(config.threshold, 64.0);
    assert_eq!(config.slide_duration, 0.3);
}
