use glam::{Mat4, Vec3};
use web_sys::{HtmlCanvasElement, WebGl2RenderingContext as GL};

use super::gl::{self, Geometry, Program, ATTR_NORMAL, ATTR_POSITION};
use super::render::{self, LoopSlot, VisualHandle};
use super::{assets, SharedTheme};
use crate::clock::FrameClock;
use crate::error::VizResult;
use crate::glyph::{GlyphFont, GlyphMesh};
use crate::visual::{AnimationUniformState, GlyphVisualConfig, VariantCycler};

/// Extruded text spinning slowly in front of a perspective camera.
struct GlyphVisual {
    gl: GL,
    canvas: HtmlCanvasElement,
    program: Program,
    mesh: Geometry,
    cycler: VariantCycler,
    uniforms: AnimationUniformState,
    clock: FrameClock,
    config: GlyphVisualConfig,
    store: SharedTheme,
}

pub fn mount(canvas: &HtmlCanvasElement, config: GlyphVisualConfig, store: SharedTheme) -> VizResult<VisualHandle> {
    let gl = gl::context(canvas)?;
    let cycler = config.cycler()?;

    let slot = LoopSlot::default();
    let pending = slot.clone();
    let canvas = canvas.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let font = match assets::fetch_text(&config.font).await.and_then(|json| GlyphFont::from_json(&json)) {
            Ok(font) => font,
            Err(err) => {
                log::warn!("glyph visual not rendered: {err}");
                return;
            }
        };
        if pending.is_cancelled() {
            return;
        }
        let started = GlyphVisual::new(gl, canvas, &font, config, cycler, store)
            .and_then(|mut visual| render::run(move |now| visual.frame(now)));
        match started {
            Ok(animation) => pending.fill(animation),
            Err(err) => log::warn!("glyph visual not rendered: {err}"),
        }
    });
    Ok(VisualHandle::new(slot))
}

impl GlyphVisual {
    fn new(
        gl: GL,
        canvas: HtmlCanvasElement,
        font: &GlyphFont,
        config: GlyphVisualConfig,
        cycler: VariantCycler,
        store: SharedTheme,
    ) -> VizResult<Self> {
        let extruded = GlyphMesh::extrude(font, &config.text, &config.layout)?;
        log::debug!(
            "glyph {:?}: {} vertices, {} triangles",
            config.text,
            extruded.vertex_count(),
            extruded.triangle_count()
        );
        let mut mesh = Geometry::new(&gl)?;
        mesh.vertex_buffer(&extruded.interleaved(), &[(ATTR_POSITION, 3), (ATTR_NORMAL, 3)])?;
        mesh.index_buffer(&extruded.indices)?;

        let source = cycler.current().program();
        let program = Program::new(&gl, source.vertex, source.fragment)?;
        Ok(Self {
            gl,
            canvas,
            program,
            mesh,
            cycler,
            uniforms: AnimationUniformState::new(),
            clock: FrameClock::real_time(),
            config,
            store,
        })
    }

    fn frame(&mut self, now: f64) {
        let dt = self.clock.tick(now);
        self.uniforms.advance(dt);

        let (w, h) = gl::fit_canvas(&self.canvas);
        let aspect = w as f32 / h.max(1) as f32;
        let gl = &self.gl;
        gl.viewport(0, 0, w as i32, h as i32);
        gl.clear_color(0.0, 0.0, 0.0, 0.0);
        gl.clear(GL::COLOR_BUFFER_BIT | GL::DEPTH_BUFFER_BIT);
        gl.enable(GL::DEPTH_TEST);

        let projection = Mat4::perspective_rh_gl((self.config.fov_deg as f32).to_radians(), aspect, 0.1, 100.0);
        let view = Mat4::look_at_rh(
            Vec3::new(0.0, 0.0, self.config.camera_distance as f32),
            Vec3::ZERO,
            Vec3::Y,
        );
        let model = self.config.motion.pose(self.uniforms.elapsed).model_matrix();
        let values = self
            .uniforms
            .uniforms(&render::palette(&self.store), [w as f32, h as f32]);
        let schema = self.cycler.current().uniforms();

        let program = &mut self.program;
        program.use_program();
        program.set_mat4("u_projection", &projection);
        program.set_mat4("u_view", &view);
        program.set_mat4("u_model", &model);
        program.set_f32("time", values.time);
        if schema.color {
            program.set_vec3("color", values.color);
        }
        if schema.color2 {
            program.set_vec3("color2", values.color2);
        }

        self.mesh.bind();
        gl.draw_elements_with_i32(GL::TRIANGLES, self.mesh.count, GL::UNSIGNED_INT, 0);
    }
}
