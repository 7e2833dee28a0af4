use folio_viz::theme::{DARK, LIGHT};
use folio_viz::visual::{tunnel_colors, tunnel_lines, tunnel_offset, TunnelConfig, MAX_TUNNEL_SEGMENTS};
use folio_viz::VizError;

#[test]
fn default_grid_size() {
    let lines = tunnel_lines(&TunnelConfig::default());
    // 11 ceiling/floor rails, 11 wall rails (two each) and 51 rings of four.
    assert_eq!(lines.len(), 2 * (22 + 22 + 51 * 4));
}

#[test]
fn grid_stays_inside_the_box() {
    let config = TunnelConfig::default();
    for [x, y, z] in tunnel_lines(&config) {
        assert!(x.abs() <= 10.0 && y.abs() <= 10.0);
        assert!((-100.0..=0.0).contains(&z));
    }
}

#[test]
fn offset_wraps_every_spacing() {
    let config = TunnelConfig::default();
    assert_eq!(tunnel_offset(0.0, &config), 0.0);
    assert!((tunnel_offset(0.5, &config) - 1.0).abs() < 1e-12);
    assert!(tunnel_offset(1.0, &config).abs() < 1e-12);
    assert!((tunnel_offset(10.25, &config) - 0.5).abs() < 1e-9);
    for i in 0..1000 {
        let offset = tunnel_offset(i as f64 * 0.037, &config);
        assert!((0.0..2.0).contains(&offset));
    }

    let flat = TunnelConfig {
        spacing: 0.0,
        ..TunnelConfig::default()
    };
    assert_eq!(tunnel_offset(3.0, &flat), 0.0);
    assert!(tunnel_lines(&flat).is_empty());
}

#[test]
fn colors_track_theme() {
    assert_eq!(tunnel_colors(&DARK), (DARK.muted, DARK.background));
    assert_eq!(tunnel_colors(&LIGHT), (LIGHT.muted, LIGHT.background));
}

#[test]
fn config_overrides() {
    let config: TunnelConfig = serde_json::from_str(r#"{"speed":4,"depth":50}"#).unwrap();
    assert_eq!(config.speed, 4.0);
    assert_eq!(config.spacing, 2.0);
    assert_eq!(tunnel_lines(&config).len(), 2 * (22 + 22 + 26 * 4));
}

#[test]
fn validation_bounds_the_grid() {
    let config = TunnelConfig::default();
    assert!(config.validate().is_ok());
    assert_eq!(config.segment_count() as usize * 2, tunnel_lines(&config).len());

    let tiny = TunnelConfig {
        spacing: 1e-9,
        ..TunnelConfig::default()
    };
    assert!(tiny.segment_count() > MAX_TUNNEL_SEGMENTS as f64);
    assert!(matches!(tiny.validate(), Err(VizError::Config(_))));

    for spacing in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let config = TunnelConfig {
            spacing,
            ..TunnelConfig::default()
        };
        assert!(config.validate().is_err(), "spacing {spacing}");
    }
    let inverted = TunnelConfig {
        depth: -10.0,
        ..TunnelConfig::default()
    };
    assert!(inverted.validate().is_err());
}
