use glam::{Vec2, Vec3};
use lyon::math::point;
use lyon::path::iterator::PathIterator;
use lyon::path::{Path, PathEvent};
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillRule, FillTessellator, FillVertex, VertexBuffers,
};

use super::font::GlyphFont;
use super::outline::PathCommand;
use crate::error::{VizError, VizResult};

#[derive(Clone, Copy, Debug, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct GlyphLayout {
    /// Em size in world units.
    pub font_size: f32,
    /// Extra advance between glyphs, in ems.
    pub letter_spacing: f32,
    /// Extrusion depth in world units.
    pub depth: f32,
    /// Maximum curve flattening error in world units.
    pub tolerance: f32,
}

impl Default for GlyphLayout {
    fn default() -> Self {
        Self {
            font_size: 1.5,
            letter_spacing: 0.02,
            depth: 0.3,
            tolerance: 0.005,
        }
    }
}

/// Indexed triangle mesh of extruded text, centred on the origin.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GlyphMesh {
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub indices: Vec<u32>,
}

impl GlyphMesh {
    pub fn extrude(font: &GlyphFont, text: &str, layout: &GlyphLayout) -> VizResult<Self> {
        let path = layout_path(font, text, layout)?;

        let mut face: VertexBuffers<Vec2, u32> = VertexBuffers::new();
        let options = FillOptions::tolerance(layout.tolerance).with_fill_rule(FillRule::NonZero);
        FillTessellator::new()
            .tessellate_path(
                &path,
                &options,
                &mut BuffersBuilder::new(&mut face, |vertex: FillVertex| {
                    Vec2::from(vertex.position().to_array())
                }),
            )
            .map_err(|err| VizError::Tessellation(format!("{err:?}")))?;

        let mut mesh = GlyphMesh::default();
        let front = layout.depth / 2.0;
        let back = -front;

        // Front cap.
        let base = mesh.positions.len() as u32;
        for v in &face.vertices {
            mesh.push(v.extend(front), Vec3::Z);
        }
        mesh.indices.extend(face.indices.iter().map(|i| base + i));

        // Back cap, wound the other way.
        let base = mesh.positions.len() as u32;
        for v in &face.vertices {
            mesh.push(v.extend(back), Vec3::NEG_Z);
        }
        for tri in face.indices.chunks_exact(3) {
            mesh.indices
                .extend([base + tri[0], base + tri[2], base + tri[1]]);
        }

        let contours = flatten_contours(&path, layout.tolerance);
        for (i, contour) in contours.iter().enumerate() {
            let enclosing = contours
                .iter()
                .enumerate()
                .filter(|&(j, other)| j != i && contains(other, contour[0]))
                .count();
            let hole = enclosing % 2 == 1;
            // Outside the solid is right of each edge for a counter-clockwise
            // outline and for a clockwise hole.
            let outward_right = (signed_area(contour) > 0.0) != hole;
            for (k, &from) in contour.iter().enumerate() {
                let to = contour[(k + 1) % contour.len()];
                mesh.wall(from, to, front, back, outward_right);
            }
        }

        mesh.center();
        Ok(mesh)
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Axis-aligned bounds as `(min, max)`.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut iter = self.positions.iter().map(|p| Vec3::from(*p));
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }

    /// Interleaved `[x, y, z, nx, ny, nz]` vertex data.
    pub fn interleaved(&self) -> Vec<f32> {
        self.positions
            .iter()
            .zip(&self.normals)
            .flat_map(|(p, n)| [p[0], p[1], p[2], n[0], n[1], n[2]])
            .collect()
    }

    fn push(&mut self, position: Vec3, normal: Vec3) {
        self.positions.push(position.to_array());
        self.normals.push(normal.to_array());
    }

    fn wall(&mut self, from: Vec2, to: Vec2, front: f32, back: f32, outward_right: bool) {
        let edge = to - from;
        if edge.length_squared() == 0.0 {
            return;
        }
        let right = Vec2::new(edge.y, -edge.x).normalize();
        let normal = (if outward_right { right } else { -right }).extend(0.0);
        let base = self.positions.len() as u32;
        self.push(from.extend(front), normal);
        self.push(to.extend(front), normal);
        self.push(to.extend(back), normal);
        self.push(from.extend(back), normal);
        if outward_right {
            self.indices
                .extend([base, base + 2, base + 1, base, base + 3, base + 2]);
        } else {
            self.indices
                .extend([base, base + 1, base + 2, base, base + 2, base + 3]);
        }
    }

    fn center(&mut self) {
        let Some((lo, hi)) = self.bounds() else {
            return;
        };
        let mid = (lo + hi) / 2.0;
        for p in &mut self.positions {
            p[0] -= mid.x;
            p[1] -= mid.y;
        }
    }
}

/// Flattens every sub-path into a closed polyline. The closing edge is
/// implicit and degenerate contours are dropped.
fn flatten_contours(path: &Path, tolerance: f32) -> Vec<Vec<Vec2>> {
    let mut contours = Vec::new();
    let mut current = Vec::new();
    for event in path.iter().flattened(tolerance) {
        match event {
            PathEvent::Begin { at } => current = vec![Vec2::new(at.x, at.y)],
            PathEvent::Line { to, .. } => current.push(Vec2::new(to.x, to.y)),
            PathEvent::End { .. } => {
                let mut points = std::mem::take(&mut current);
                if points.len() > 1 && points.first() == points.last() {
                    points.pop();
                }
                if points.len() >= 3 {
                    contours.push(points);
                }
            }
            _ => {}
        }
    }
    contours
}

/// Shoelace area, positive for counter-clockwise winding.
fn signed_area(contour: &[Vec2]) -> f32 {
    let mut sum = 0.0;
    for (k, a) in contour.iter().enumerate() {
        let b = contour[(k + 1) % contour.len()];
        sum += a.x * b.y - b.x * a.y;
    }
    sum / 2.0
}

/// Even-odd point in polygon test.
fn contains(polygon: &[Vec2], p: Vec2) -> bool {
    let mut inside = false;
    let mut prev = polygon[polygon.len() - 1];
    for &next in polygon {
        if (next.y > p.y) != (prev.y > p.y)
            && p.x < (prev.x - next.x) * (p.y - next.y) / (prev.y - next.y) + next.x
        {
            inside = !inside;
        }
        prev = next;
    }
    inside
}

/// Lays `text` out on one line and converts every outline into a single
/// lyon path in world units.
fn layout_path(font: &GlyphFont, text: &str, layout: &GlyphLayout) -> VizResult<Path> {
    let scale = layout.font_size / font.resolution as f32;
    let spacing = layout.letter_spacing * layout.font_size;
    let mut builder = Path::builder();
    let mut pen_x = 0.0f32;

    for ch in text.chars() {
        let glyph = font
            .glyph(ch)
            .ok_or_else(|| VizError::glyph(format!("font has no glyph for {ch:?}")))?;
        let at = |p: Vec2| point(pen_x + p.x * scale, p.y * scale);

        let mut open = false;
        let mut cursor = Vec2::ZERO;
        for command in glyph.outline()? {
            match command {
                PathCommand::MoveTo(p) => {
                    if open {
                        builder.end(false);
                    }
                    builder.begin(at(p));
                    open = true;
                    cursor = p;
                }
                PathCommand::LineTo(p) => {
                    if !open {
                        builder.begin(at(cursor));
                        open = true;
                    }
                    builder.line_to(at(p));
                    cursor = p;
                }
                PathCommand::QuadTo { ctrl, to } => {
                    if !open {
                        builder.begin(at(cursor));
                        open = true;
                    }
                    builder.quadratic_bezier_to(at(ctrl), at(to));
                    cursor = to;
                }
                PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                    if !open {
                        builder.begin(at(cursor));
                        open = true;
                    }
                    builder.cubic_bezier_to(at(ctrl1), at(ctrl2), at(to));
                    cursor = to;
                }
                PathCommand::Close => {
                    if open {
                        builder.end(true);
                        open = false;
                    }
                }
            }
        }
        if open {
            builder.end(true);
        }
        pen_x += glyph.ha as f32 * scale + spacing;
    }
    Ok(builder.build())
}
