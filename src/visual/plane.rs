/// World-space extent visible to a camera at the plane's depth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Visible extent at `distance` in front of a perspective camera with a
    /// vertical field of view of `fov_deg`.
    pub fn from_perspective(fov_deg: f64, distance: f64, aspect: f64) -> Self {
        let height = 2.0 * distance * (fov_deg.to_radians() / 2.0).tan();
        Self {
            width: height * aspect,
            height,
        }
    }

    pub fn aspect(&self) -> f64 {
        if self.height == 0.0 {
            1.0
        } else {
            self.width / self.height
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneSize {
    pub width: f64,
    pub height: f64,
}

/// Sizes an image plane so it covers the whole viewport without letterboxing.
/// A wider image fits the height and overflows horizontally; otherwise it fits
/// the width and overflows vertically.
pub fn cover_plane(image_aspect: f64, viewport: Viewport) -> PlaneSize {
    let image_aspect = if image_aspect > 0.0 && image_aspect.is_finite() {
        image_aspect
    } else {
        1.0
    };
    if image_aspect > viewport.aspect() {
        PlaneSize {
            width: viewport.height * image_aspect,
            height: viewport.height,
        }
    } else {
        PlaneSize {
            width: viewport.width,
            height: viewport.width / image_aspect,
        }
    }
}

/// Interleaved `[x, y, z, u, v]` vertices of a centred quad, as a triangle
/// strip.
pub fn plane_vertices(size: PlaneSize) -> [f32; 20] {
    let hw = (size.width / 2.0) as f32;
    let hh = (size.height / 2.0) as f32;
    [
        -hw, -hh, 0.0, 0.0, 0.0, //
        hw, -hh, 0.0, 1.0, 0.0, //
        -hw, hh, 0.0, 0.0, 1.0, //
        hw, hh, 0.0, 1.0, 1.0,
    ]
}
