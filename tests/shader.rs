use folio_viz::theme::{DARK, LIGHT};
use folio_viz::visual::{
    AnimationUniformState, Cycle, GlyphMotion, GlyphVisualConfig, ImageVisualConfig, ShaderVariant,
    VariantCycler, GLYPH_CATALOG, IMAGE_CATALOG,
};
use folio_viz::VizError;

#[test]
fn image_catalog_order() {
    let names: Vec<_> = IMAGE_CATALOG.iter().map(|v| v.name()).collect();
    assert_eq!(
        names,
        ["halftone", "glitch", "scanline", "noise", "pixelate", "hologram", "matrix"]
    );
    let names: Vec<_> = GLYPH_CATALOG.iter().map(|v| v.name()).collect();
    assert_eq!(names, ["gradient", "neon", "iridescent", "fluid"]);
}

#[test]
fn cycles_one_step_per_interval() {
    let n = IMAGE_CATALOG.len();
    for initial in 0..n {
        for k in 0..20 {
            let mut cycler = VariantCycler::new(IMAGE_CATALOG, initial, Cycle::Every(200.0)).unwrap();
            cycler.start();
            cycler.advance(k as f64 * 200.0);
            assert_eq!(cycler.index(), (initial + k) % n, "initial {initial}, k {k}");
        }
    }
}

#[test]
fn cycling_accumulates_across_frames() {
    let mut cycler = VariantCycler::new(IMAGE_CATALOG, 0, Cycle::Every(200.0)).unwrap();
    cycler.start();
    let mut changes = 0;
    // 60 frames of 16 ms is 960 ms: four whole intervals.
    for _ in 0..60 {
        if cycler.advance(16.0) {
            changes += 1;
        }
    }
    assert_eq!(changes, 4);
    assert_eq!(cycler.current(), ShaderVariant::Pixelate);
}

#[test]
fn stopped_cycler_holds() {
    let mut cycler = VariantCycler::new(IMAGE_CATALOG, 2, Cycle::Every(200.0)).unwrap();
    assert!(!cycler.is_running());
    assert!(!cycler.advance(10_000.0));
    assert_eq!(cycler.current(), ShaderVariant::Scanline);

    cycler.start();
    assert!(cycler.is_running());
    cycler.stop();
    assert!(!cycler.advance(10_000.0));
}

#[test]
fn dormant_cycler_never_changes() {
    let mut cycler = VariantCycler::fixed(GLYPH_CATALOG, ShaderVariant::Iridescent).unwrap();
    cycler.start();
    for _ in 0..100 {
        assert!(!cycler.advance(1_000.0));
    }
    assert_eq!(cycler.current(), ShaderVariant::Iridescent);
    assert!(!cycler.is_running());

    let fallback = VariantCycler::fixed(GLYPH_CATALOG, ShaderVariant::Matrix).unwrap();
    assert_eq!(fallback.current(), ShaderVariant::Gradient);
}

#[test]
fn cycler_rejects_bad_input() {
    assert!(VariantCycler::new(&[], 0, Cycle::Dormant).is_err());
    assert!(matches!(
        VariantCycler::new(IMAGE_CATALOG, 0, Cycle::Every(0.0)),
        Err(VizError::InvalidInterval(_))
    ));
    let wrapped = VariantCycler::new(IMAGE_CATALOG, 9, Cycle::Dormant).unwrap();
    assert_eq!(wrapped.index(), 2);
}

#[test]
fn names_parse_case_insensitively() {
    for variant in GLYPH_CATALOG.iter().chain(IMAGE_CATALOG) {
        assert_eq!(variant.name().parse::<ShaderVariant>().unwrap(), *variant);
        assert_eq!(variant.to_string(), variant.name());
    }
    assert_eq!("HoloGram".parse::<ShaderVariant>().unwrap(), ShaderVariant::Hologram);
    assert!(matches!("sparkle".parse::<ShaderVariant>(), Err(VizError::UnknownVariant(_))));
}

#[test]
fn uniform_schemas() {
    for variant in IMAGE_CATALOG {
        let schema = variant.uniforms();
        assert!(schema.texture && variant.is_image(), "{variant}");
        assert!(!schema.color);
        assert!(variant.program().fragment.contains("uniform sampler2D tex"));
    }
    for variant in GLYPH_CATALOG {
        let schema = variant.uniforms();
        assert!(!schema.texture && schema.color, "{variant}");
        assert!(variant.program().vertex.contains("a_normal"));
    }
    assert!(ShaderVariant::Gradient.uniforms().color2);
    assert!(!ShaderVariant::Neon.uniforms().color2);
    assert!(ShaderVariant::Halftone.uniforms().resolution);
}

#[test]
fn time_is_continuous_across_swaps() {
    let mut cycler = VariantCycler::new(IMAGE_CATALOG, 0, Cycle::Every(200.0)).unwrap();
    let mut state = AnimationUniformState::new();
    cycler.start();
    let mut last = 0.0;
    for _ in 0..50 {
        cycler.advance(50.0);
        state.advance(0.05);
        let time = state.uniforms(&DARK, [1.0, 1.0]).time;
        assert!(time > last);
        last = time;
    }
    assert!((state.elapsed - 2.5).abs() < 1e-9);
    state.advance(-1.0);
    assert!((state.elapsed - 2.5).abs() < 1e-9);
}

#[test]
fn uniforms_follow_palette() {
    let mut state = AnimationUniformState::new();
    state.advance(10.0);
    let dark = state.uniforms(&DARK, [800.0, 600.0]);
    let light = state.uniforms(&LIGHT, [800.0, 600.0]);
    assert_eq!(dark.color, DARK.primary.to_rgb_f32());
    assert_eq!(dark.color2, DARK.secondary.to_rgb_f32());
    assert_eq!(light.color, LIGHT.primary.to_rgb_f32());
    assert_eq!(dark.time, light.time);
    assert_eq!(dark.resolution, [800.0, 600.0]);
    assert!(state.phases.bob < std::f64::consts::TAU);
}

#[test]
fn glyph_motion_is_time_based() {
    let motion = GlyphMotion::default();
    let pose = motion.pose(0.0);
    assert_eq!((pose.rotation_x, pose.rotation_y, pose.y), (0.0, 0.0, 0.0));

    let pose = motion.pose(10.0);
    assert!((pose.rotation_y - 1.8).abs() < 1e-9);
    assert!(pose.y.abs() <= 0.15);
    assert!(pose.rotation_x.abs() <= 0.1);

    let origin = pose.model_matrix().transform_point3(glam::Vec3::ZERO);
    assert!((origin.y as f64 - pose.y).abs() < 1e-6);
}

#[test]
fn visual_configs_deserialize_with_defaults() {
    let image: ImageVisualConfig = serde_json::from_str(r#"{"src":"me.jpg"}"#).unwrap();
    assert_eq!(image.src, "me.jpg");
    assert_eq!(image.interval_ms, 200.0);
    assert_eq!(image.fov_deg, 50.0);
    let cycler = image.cycler().unwrap();
    assert_eq!(cycler.current(), ShaderVariant::Halftone);

    let glyph: GlyphVisualConfig = serde_json::from_str(r#"{"variant":"Neon","motion":{"rotation_speed":1.0}}"#).unwrap();
    assert_eq!(glyph.text, "<br>");
    assert_eq!(glyph.variant, ShaderVariant::Neon);
    assert_eq!(glyph.motion.rotation_speed, 1.0);
    assert_eq!(glyph.motion.float_intensity, 0.15);
    assert_eq!(glyph.layout.font_size, 1.5);
    assert_eq!(glyph.cycler().unwrap().current(), ShaderVariant::Neon);

    assert!(serde_json::from_str::<GlyphVisualConfig>(r#"{"variant":"sparkle"}"#).is_err());
}
