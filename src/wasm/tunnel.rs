use glam::Mat4;
use web_sys::{HtmlCanvasElement, WebGl2RenderingContext as GL};

use super::gl::{self, Geometry, Program, ATTR_POSITION};
use super::render::{self, LoopSlot, VisualHandle};
use super::SharedTheme;
use crate::clock::FrameClock;
use crate::error::VizResult;
use crate::visual::{tunnel_colors, tunnel_lines, tunnel_offset, TunnelConfig, TUNNEL_FRAGMENT, TUNNEL_VERTEX};

/// Wireframe corridor scrolling towards the camera, fogged into the page
/// background.
pub fn mount(canvas: &HtmlCanvasElement, config: TunnelConfig, store: SharedTheme) -> VizResult<VisualHandle> {
    config.validate()?;
    let gl = gl::context(canvas)?;
    let mut program = Program::new(&gl, TUNNEL_VERTEX, TUNNEL_FRAGMENT)?;

    let points: Vec<f32> = tunnel_lines(&config).into_iter().flatten().collect();
    let mut lines = Geometry::new(&gl)?;
    lines.vertex_buffer(&points, &[(ATTR_POSITION, 3)])?;
    log::debug!("tunnel: {} segments", lines.count / 2);

    let canvas = canvas.clone();
    let mut clock = FrameClock::real_time();
    let animation = render::run(move |now| {
        clock.tick(now);
        let (w, h) = gl::fit_canvas(&canvas);
        let aspect = w as f32 / h.max(1) as f32;
        let (line, fog) = tunnel_colors(&render::palette(&store));
        let fog = fog.to_rgb_f32();

        gl.viewport(0, 0, w as i32, h as i32);
        gl.clear_color(fog[0], fog[1], fog[2], 1.0);
        gl.clear(GL::COLOR_BUFFER_BIT);

        let projection = Mat4::perspective_rh_gl(
            (config.fov_deg as f32).to_radians(),
            aspect,
            0.1,
            (config.depth + config.spacing) as f32,
        );
        program.use_program();
        program.set_mat4("u_projection", &projection);
        program.set_f32("u_offset", tunnel_offset(clock.elapsed(), &config) as f32);
        program.set_vec3("u_line", line.to_rgb_f32());
        program.set_vec3("u_fog", fog);
        program.set_vec2("u_fog_range", [config.fog_near as f32, config.depth as f32]);

        lines.bind();
        gl.draw_arrays(GL::LINES, 0, lines.count);
    })?;

    let slot = LoopSlot::default();
    slot.fill(animation);
    Ok(VisualHandle::new(slot))
}
