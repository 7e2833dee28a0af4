use glam::Vec2;

use folio_viz::glyph::{parse_outline, GlyphFont, GlyphLayout, GlyphMesh, PathCommand};
use folio_viz::VizError;

const SQUARE_FONT: &str = r#"{
  "glyphs": {
    "a": { "ha": 1000, "x_min": 0, "x_max": 1000, "o": "m 0 0 l 1000 0 l 1000 1000 l 0 1000 z" },
    " ": { "ha": 500, "x_min": 0, "x_max": 0, "o": "" }
  },
  "familyName": "Square Mono",
  "ascender": 800,
  "descender": -200,
  "underlineThickness": 50,
  "boundingBox": { "xMin": 0, "yMin": -200, "xMax": 1000, "yMax": 800 },
  "resolution": 1000
}"#;

fn font() -> GlyphFont {
    GlyphFont::from_json(SQUARE_FONT).unwrap()
}

#[test]
fn parses_every_opcode() {
    let commands = parse_outline("m 1 2 l 3 4 q 5 6 7 8 b 9 10 11 12 13 14 z").unwrap();
    assert_eq!(
        commands,
        vec![
            PathCommand::MoveTo(Vec2::new(1.0, 2.0)),
            PathCommand::LineTo(Vec2::new(3.0, 4.0)),
            PathCommand::QuadTo {
                ctrl: Vec2::new(5.0, 6.0),
                to: Vec2::new(7.0, 8.0)
            },
            PathCommand::CubicTo {
                ctrl1: Vec2::new(9.0, 10.0),
                ctrl2: Vec2::new(11.0, 12.0),
                to: Vec2::new(13.0, 14.0)
            },
            PathCommand::Close,
        ]
    );
    assert!(parse_outline("").unwrap().is_empty());
}

#[test]
fn rejects_malformed_outlines() {
    assert!(matches!(parse_outline("x 1 2"), Err(VizError::Glyph(_))));
    assert!(matches!(parse_outline("m 1"), Err(VizError::Glyph(_))));
    assert!(matches!(parse_outline("q 1 2 3"), Err(VizError::Glyph(_))));
    assert!(matches!(parse_outline("l 1 up"), Err(VizError::Glyph(_))));
}

#[test]
fn loads_font_metadata() {
    let font = font();
    assert_eq!(font.family_name, "Square Mono");
    assert_eq!(font.resolution, 1000.0);
    assert_eq!(font.bounding_box.y_max, 800.0);
    assert_eq!(font.line_height(), 1050.0);
    assert_eq!(font.glyph('a').unwrap().ha, 1000.0);
    assert!(font.glyph('b').is_none());
}

#[test]
fn rejects_bad_fonts() {
    assert!(matches!(GlyphFont::from_json("{"), Err(VizError::Glyph(_))));
    let zero = SQUARE_FONT.replace("\"resolution\": 1000", "\"resolution\": 0");
    assert!(matches!(GlyphFont::from_json(&zero), Err(VizError::Glyph(_))));
}

#[test]
fn extrudes_a_square() {
    let layout = GlyphLayout::default();
    let mesh = GlyphMesh::extrude(&font(), "a", &layout).unwrap();

    assert_eq!(mesh.positions.len(), mesh.normals.len());
    assert_eq!(mesh.indices.len() % 3, 0);
    assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertex_count()));
    assert!(mesh.triangle_count() >= 4 + 8);

    // Four side walls, four corners each.
    let walls = mesh.normals.iter().filter(|n| n[2] == 0.0).count();
    assert_eq!(walls, 16);
    let fronts = mesh.normals.iter().filter(|n| n[2] == 1.0).count();
    let backs = mesh.normals.iter().filter(|n| n[2] == -1.0).count();
    assert_eq!(fronts, backs);
    assert!(fronts >= 4);

    let (lo, hi) = mesh.bounds().unwrap();
    assert!((lo.x + 0.75).abs() < 1e-5 && (hi.x - 0.75).abs() < 1e-5);
    assert!((lo.y + 0.75).abs() < 1e-5 && (hi.y - 0.75).abs() < 1e-5);
    assert!((lo.z + 0.15).abs() < 1e-6 && (hi.z - 0.15).abs() < 1e-6);

    assert_eq!(mesh.interleaved().len(), mesh.vertex_count() * 6);
}

#[test]
fn wall_normals_point_outward() {
    let mesh = GlyphMesh::extrude(&font(), "a", &GlyphLayout::default()).unwrap();
    for (p, n) in mesh.positions.iter().zip(&mesh.normals) {
        if n[2] != 0.0 {
            continue;
        }
        // Centred square: an outward normal points the same way as the
        // position along its axis.
        let along = p[0] * n[0] + p[1] * n[1];
        assert!(along > 0.0, "normal {n:?} at {p:?}");
    }
}

fn font_with_outline(outline: &str) -> GlyphFont {
    let json = SQUARE_FONT.replace("m 0 0 l 1000 0 l 1000 1000 l 0 1000 z", outline);
    GlyphFont::from_json(&json).unwrap()
}

/// Asserts every wall normal points away from the solid of a centred
/// square ring whose hole edges sit inside `hole_extent`.
fn assert_walls_face_out(mesh: &GlyphMesh, hole_extent: f32) {
    let mut outer = 0;
    let mut inner = 0;
    for (p, n) in mesh.positions.iter().zip(&mesh.normals) {
        if n[2] != 0.0 {
            continue;
        }
        let along = p[0] * n[0] + p[1] * n[1];
        if p[0].abs().max(p[1].abs()) > hole_extent {
            assert!(along > 0.0, "outer normal {n:?} at {p:?}");
            outer += 1;
        } else {
            assert!(along < 0.0, "hole normal {n:?} at {p:?}");
            inner += 1;
        }
    }
    assert_eq!(outer, 16);
    assert_eq!(inner, if hole_extent > 0.0 { 16 } else { 0 });
}

#[test]
fn clockwise_outline_walls_point_outward() {
    let font = font_with_outline("m 0 0 l 0 1000 l 1000 1000 l 1000 0 z");
    let mesh = GlyphMesh::extrude(&font, "a", &GlyphLayout::default()).unwrap();
    assert_walls_face_out(&mesh, 0.0);
}

#[test]
fn hole_walls_face_into_the_hole() {
    // Font-unit convention: clockwise outline, counter-clockwise hole.
    let font = font_with_outline(
        "m 0 0 l 0 1000 l 1000 1000 l 1000 0 z m 250 250 l 750 250 l 750 750 l 250 750 z",
    );
    let mesh = GlyphMesh::extrude(&font, "a", &GlyphLayout::default()).unwrap();
    // Outer edges at 0.75, hole edges at 0.375.
    assert_walls_face_out(&mesh, 0.5);

    // The reverse convention produces the same facing.
    let font = font_with_outline(
        "m 0 0 l 1000 0 l 1000 1000 l 0 1000 z m 250 250 l 250 750 l 750 750 l 750 250 z",
    );
    let mesh = GlyphMesh::extrude(&font, "a", &GlyphLayout::default()).unwrap();
    assert_walls_face_out(&mesh, 0.5);
}

#[test]
fn lays_out_glyphs_with_spacing() {
    let layout = GlyphLayout::default();
    let mesh = GlyphMesh::extrude(&font(), "a a", &layout).unwrap();
    let (lo, hi) = mesh.bounds().unwrap();
    // Two 1.5 squares, a 0.75 space, and two 0.03 letter gaps.
    let expected = 1.5 + 0.03 + 0.75 + 0.03 + 1.5;
    assert!(((hi.x - lo.x) - expected).abs() < 1e-4, "width {}", hi.x - lo.x);
    assert_eq!(mesh.normals.iter().filter(|n| n[2] == 0.0).count(), 32);
}

#[test]
fn missing_glyph_is_an_error() {
    let err = GlyphMesh::extrude(&font(), "ab", &GlyphLayout::default()).unwrap_err();
    assert!(matches!(err, VizError::Glyph(_)));
    assert!(err.to_string().contains("'b'"));
}
