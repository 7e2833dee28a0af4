use std::collections::HashMap;

use glam::Mat4;
use wasm_bindgen::JsCast;
use web_sys::{
    HtmlCanvasElement, WebGl2RenderingContext as GL, WebGlBuffer, WebGlProgram, WebGlShader,
    WebGlUniformLocation, WebGlVertexArrayObject,
};

use crate::error::{VizError, VizResult};

pub const ATTR_POSITION: u32 = 0;
pub const ATTR_NORMAL: u32 = 1;
pub const ATTR_UV: u32 = 2;

pub fn context(canvas: &HtmlCanvasElement) -> VizResult<GL> {
    let context = canvas
        .get_context("webgl2")
        .map_err(|err| VizError::shader(format!("{err:?}")))?
        .ok_or_else(|| VizError::shader("WebGL2 not supported"))?;
    context
        .dyn_into::<GL>()
        .map_err(|_| VizError::shader("context is not WebGL2"))
}

/// Matches the drawing buffer to the canvas' CSS size, capping the pixel
/// ratio at 2. Returns the buffer size.
pub fn fit_canvas(canvas: &HtmlCanvasElement) -> (u32, u32) {
    let dpr = web_sys::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0)
        .clamp(1.0, 2.0);
    let w = ((canvas.client_width().max(1) as f64) * dpr) as u32;
    let h = ((canvas.client_height().max(1) as f64) * dpr) as u32;
    if canvas.width() != w {
        canvas.set_width(w);
    }
    if canvas.height() != h {
        canvas.set_height(h);
    }
    (w, h)
}

fn compile(gl: &GL, kind: u32, source: &str) -> VizResult<WebGlShader> {
    let shader = gl
        .create_shader(kind)
        .ok_or_else(|| VizError::shader("unable to create shader object"))?;
    gl.shader_source(&shader, source);
    gl.compile_shader(&shader);
    let ok = gl
        .get_shader_parameter(&shader, GL::COMPILE_STATUS)
        .as_bool()
        .unwrap_or(false);
    if ok {
        Ok(shader)
    } else {
        let info = gl.get_shader_info_log(&shader).unwrap_or_default();
        gl.delete_shader(Some(&shader));
        Err(VizError::shader(format!("compile failed: {info}")))
    }
}

/// Linked program with lazily looked-up uniform locations.
pub struct Program {
    gl: GL,
    program: WebGlProgram,
    locations: HashMap<&'static str, Option<WebGlUniformLocation>>,
}

impl Program {
    pub fn new(gl: &GL, vertex: &str, fragment: &str) -> VizResult<Self> {
        let vs = compile(gl, GL::VERTEX_SHADER, vertex)?;
        let fs = compile(gl, GL::FRAGMENT_SHADER, fragment)?;
        let program = gl
            .create_program()
            .ok_or_else(|| VizError::shader("unable to create program"))?;
        gl.attach_shader(&program, &vs);
        gl.attach_shader(&program, &fs);
        // Fixed slots so one vertex array works with every variant.
        gl.bind_attrib_location(&program, ATTR_POSITION, "a_position");
        gl.bind_attrib_location(&program, ATTR_NORMAL, "a_normal");
        gl.bind_attrib_location(&program, ATTR_UV, "a_uv");
        gl.link_program(&program);
        gl.delete_shader(Some(&vs));
        gl.delete_shader(Some(&fs));

        let ok = gl
            .get_program_parameter(&program, GL::LINK_STATUS)
            .as_bool()
            .unwrap_or(false);
        if !ok {
            let info = gl.get_program_info_log(&program).unwrap_or_default();
            gl.delete_program(Some(&program));
            return Err(VizError::shader(format!("link failed: {info}")));
        }
        Ok(Self {
            gl: gl.clone(),
            program,
            locations: HashMap::new(),
        })
    }

    pub fn use_program(&self) {
        self.gl.use_program(Some(&self.program));
    }

    fn location(&mut self, name: &'static str) -> Option<WebGlUniformLocation> {
        let gl = &self.gl;
        let program = &self.program;
        self.locations
            .entry(name)
            .or_insert_with(|| gl.get_uniform_location(program, name))
            .clone()
    }

    pub fn set_f32(&mut self, name: &'static str, value: f32) {
        let loc = self.location(name);
        self.gl.uniform1f(loc.as_ref(), value);
    }

    pub fn set_i32(&mut self, name: &'static str, value: i32) {
        let loc = self.location(name);
        self.gl.uniform1i(loc.as_ref(), value);
    }

    pub fn set_vec2(&mut self, name: &'static str, value: [f32; 2]) {
        let loc = self.location(name);
        self.gl.uniform2f(loc.as_ref(), value[0], value[1]);
    }

    pub fn set_vec3(&mut self, name: &'static str, value: [f32; 3]) {
        let loc = self.location(name);
        self.gl.uniform3f(loc.as_ref(), value[0], value[1], value[2]);
    }

    pub fn set_mat4(&mut self, name: &'static str, value: &Mat4) {
        let loc = self.location(name);
        self.gl
            .uniform_matrix4fv_with_f32_array(loc.as_ref(), false, &value.to_cols_array());
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        self.gl.delete_program(Some(&self.program));
    }
}

/// Vertex array plus the buffers it references.
pub struct Geometry {
    gl: GL,
    pub vao: WebGlVertexArrayObject,
    buffers: Vec<WebGlBuffer>,
    pub count: i32,
}

impl Geometry {
    pub fn new(gl: &GL) -> VizResult<Self> {
        let vao = gl
            .create_vertex_array()
            .ok_or_else(|| VizError::shader("unable to create vertex array"))?;
        Ok(Self {
            gl: gl.clone(),
            vao,
            buffers: Vec::new(),
            count: 0,
        })
    }

    pub fn bind(&self) {
        self.gl.bind_vertex_array(Some(&self.vao));
    }

    /// Uploads interleaved floats and describes `(location, components)`
    /// attributes packed in order.
    pub fn vertex_buffer(&mut self, data: &[f32], layout: &[(u32, i32)]) -> VizResult<()> {
        let gl = &self.gl;
        gl.bind_vertex_array(Some(&self.vao));
        let buffer = gl
            .create_buffer()
            .ok_or_else(|| VizError::shader("unable to create buffer"))?;
        gl.bind_buffer(GL::ARRAY_BUFFER, Some(&buffer));
        let array = js_sys::Float32Array::from(data);
        gl.buffer_data_with_array_buffer_view(GL::ARRAY_BUFFER, &array, GL::STATIC_DRAW);

        let stride: i32 = layout.iter().map(|(_, n)| n * 4).sum();
        let mut offset = 0;
        for &(location, components) in layout {
            gl.enable_vertex_attrib_array(location);
            gl.vertex_attrib_pointer_with_i32(location, components, GL::FLOAT, false, stride, offset);
            offset += components * 4;
        }
        self.buffers.push(buffer);
        self.count = (data.len() as i32 * 4) / stride.max(1);
        Ok(())
    }

    pub fn index_buffer(&mut self, indices: &[u32]) -> VizResult<()> {
        let gl = &self.gl;
        gl.bind_vertex_array(Some(&self.vao));
        let buffer = gl
            .create_buffer()
            .ok_or_else(|| VizError::shader("unable to create index buffer"))?;
        gl.bind_buffer(GL::ELEMENT_ARRAY_BUFFER, Some(&buffer));
        let array = js_sys::Uint32Array::from(indices);
        gl.buffer_data_with_array_buffer_view(GL::ELEMENT_ARRAY_BUFFER, &array, GL::STATIC_DRAW);
        self.buffers.push(buffer);
        self.count = indices.len() as i32;
        Ok(())
    }
}

impl Drop for Geometry {
    fn drop(&mut self) {
        for buffer in &self.buffers {
            self.gl.delete_buffer(Some(buffer));
        }
        self.gl.delete_vertex_array(Some(&self.vao));
    }
}
