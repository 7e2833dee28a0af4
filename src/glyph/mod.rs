//! Glyph outline fonts and the extruded text mesh built from them.

mod font;
mod mesh;
mod outline;

pub use font::{BoundingBox, GlyphData, GlyphFont};
pub use mesh::{GlyphLayout, GlyphMesh};
pub use outline::{parse_outline, PathCommand};
