use std::collections::HashMap;

use glam::{Mat4, Vec3};
use web_sys::{HtmlCanvasElement, HtmlImageElement, WebGl2RenderingContext as GL, WebGlTexture};

use super::gl::{self, Geometry, Program, ATTR_POSITION, ATTR_UV};
use super::render::{self, LoopSlot, VisualHandle};
use super::{assets, SharedTheme};
use crate::clock::FrameClock;
use crate::error::{VizError, VizResult};
use crate::visual::{
    cover_plane, plane_vertices, AnimationUniformState, ImageVisualConfig, PlaneSize, ShaderVariant,
    VariantCycler, Viewport,
};

/// Image drawn on a cover-fitted plane whose shader swaps on a timer.
struct ImageVisual {
    gl: GL,
    canvas: HtmlCanvasElement,
    texture: WebGlTexture,
    image_aspect: f64,
    // `None` marks a variant that failed to compile; it is skipped.
    programs: HashMap<ShaderVariant, Option<Program>>,
    plane: Option<(PlaneSize, Geometry)>,
    cycler: VariantCycler,
    uniforms: AnimationUniformState,
    clock: FrameClock,
    config: ImageVisualConfig,
    store: SharedTheme,
}

pub fn mount(canvas: &HtmlCanvasElement, config: ImageVisualConfig, store: SharedTheme) -> VizResult<VisualHandle> {
    if config.src.is_empty() {
        return Err(VizError::config("image visual needs a src"));
    }
    let gl = gl::context(canvas)?;
    let mut cycler = config.cycler()?;
    cycler.start();

    let slot = LoopSlot::default();
    let pending = slot.clone();
    let canvas = canvas.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let image = match assets::load_image(&config.src).await {
            Ok(image) => image,
            Err(err) => {
                log::warn!("image visual not rendered: {err}");
                return;
            }
        };
        if pending.is_cancelled() {
            return;
        }
        let started = ImageVisual::new(gl, canvas, &image, config, cycler, store).and_then(|mut visual| {
            render::run(move |now| visual.frame(now))
        });
        match started {
            Ok(animation) => pending.fill(animation),
            Err(err) => log::warn!("image visual not rendered: {err}"),
        }
    });
    Ok(VisualHandle::new(slot))
}

impl ImageVisual {
    fn new(
        gl: GL,
        canvas: HtmlCanvasElement,
        image: &HtmlImageElement,
        config: ImageVisualConfig,
        cycler: VariantCycler,
        store: SharedTheme,
    ) -> VizResult<Self> {
        let texture = upload_texture(&gl, image)?;
        let image_aspect = image.natural_width() as f64 / image.natural_height() as f64;
        log::debug!(
            "image {} loaded at {}x{}",
            config.src,
            image.natural_width(),
            image.natural_height()
        );
        Ok(Self {
            gl,
            canvas,
            texture,
            image_aspect,
            programs: HashMap::new(),
            plane: None,
            cycler,
            uniforms: AnimationUniformState::new(),
            clock: FrameClock::real_time(),
            config,
            store,
        })
    }

    fn frame(&mut self, now: f64) {
        let dt = self.clock.tick(now);
        if self.cycler.advance(dt * 1000.0) {
            log::trace!("image shader -> {}", self.cycler.current());
        }
        self.uniforms.advance(dt);

        let (w, h) = gl::fit_canvas(&self.canvas);
        let aspect = w as f64 / h.max(1) as f64;
        let viewport = Viewport::from_perspective(self.config.fov_deg, self.config.camera_distance, aspect);
        let size = cover_plane(self.image_aspect, viewport);
        if self.plane.as_ref().map(|(current, _)| *current) != Some(size) {
            match quad(&self.gl, size) {
                Ok(geometry) => self.plane = Some((size, geometry)),
                Err(err) => {
                    log::warn!("{err}");
                    return;
                }
            }
        }

        let gl = &self.gl;
        gl.viewport(0, 0, w as i32, h as i32);
        gl.clear_color(0.0, 0.0, 0.0, 0.0);
        gl.clear(GL::COLOR_BUFFER_BIT);

        let variant = self.cycler.current();
        let program = self.programs.entry(variant).or_insert_with(|| {
            let source = variant.program();
            Program::new(gl, source.vertex, source.fragment)
                .map_err(|err| log::warn!("{variant} disabled: {err}"))
                .ok()
        });
        let (Some(program), Some((_, plane))) = (program.as_mut(), self.plane.as_ref()) else {
            return;
        };

        let projection = Mat4::perspective_rh_gl(
            (self.config.fov_deg as f32).to_radians(),
            aspect as f32,
            0.1,
            100.0,
        );
        let model_view = Mat4::from_translation(Vec3::new(0.0, 0.0, -self.config.camera_distance as f32));
        let values = self
            .uniforms
            .uniforms(&render::palette(&self.store), [w as f32, h as f32]);

        program.use_program();
        program.set_mat4("u_projection", &projection);
        program.set_mat4("u_model_view", &model_view);
        program.set_f32("time", values.time);
        program.set_vec2("resolution", values.resolution);
        gl.active_texture(GL::TEXTURE0);
        gl.bind_texture(GL::TEXTURE_2D, Some(&self.texture));
        program.set_i32("tex", 0);

        gl.enable(GL::BLEND);
        gl.blend_func(GL::SRC_ALPHA, GL::ONE_MINUS_SRC_ALPHA);
        plane.bind();
        gl.draw_arrays(GL::TRIANGLE_STRIP, 0, plane.count);
    }
}

impl Drop for ImageVisual {
    fn drop(&mut self) {
        self.cycler.stop();
        self.gl.delete_texture(Some(&self.texture));
    }
}

fn upload_texture(gl: &GL, image: &HtmlImageElement) -> VizResult<WebGlTexture> {
    let texture = gl
        .create_texture()
        .ok_or_else(|| VizError::shader("unable to create texture"))?;
    gl.bind_texture(GL::TEXTURE_2D, Some(&texture));
    gl.pixel_storei(GL::UNPACK_FLIP_Y_WEBGL, 1);
    gl.tex_image_2d_with_u32_and_u32_and_html_image_element(
        GL::TEXTURE_2D,
        0,
        GL::RGBA as i32,
        GL::RGBA,
        GL::UNSIGNED_BYTE,
        image,
    )
    .map_err(|err| VizError::shader(format!("texture upload: {err:?}")))?;
    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_MIN_FILTER, GL::LINEAR as i32);
    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_MAG_FILTER, GL::LINEAR as i32);
    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_S, GL::CLAMP_TO_EDGE as i32);
    gl.tex_parameteri(GL::TEXTURE_2D, GL::TEXTURE_WRAP_T, GL::CLAMP_TO_EDGE as i32);
    Ok(texture)
}

fn quad(gl: &GL, size: PlaneSize) -> VizResult<Geometry> {
    let mut geometry = Geometry::new(gl)?;
    geometry.vertex_buffer(&plane_vertices(size), &[(ATTR_POSITION, 3), (ATTR_UV, 2)])?;
    Ok(geometry)
}
