// GLSL ES 3.00 sources for every shader variant.

pub const IMAGE_VERTEX: &str = r#"#version 300 es
in vec3 a_position;
in vec2 a_uv;
uniform mat4 u_projection;
uniform mat4 u_model_view;
out vec2 vUv;

void main() {
  vUv = a_uv;
  gl_Position = u_projection * u_model_view * vec4(a_position, 1.0);
}
"#;

pub const GLYPH_VERTEX: &str = r#"#version 300 es
in vec3 a_position;
in vec3 a_normal;
uniform mat4 u_projection;
uniform mat4 u_view;
uniform mat4 u_model;
uniform float time;
out vec3 vNormal;
out vec3 vPosition;
out vec3 vWorld;

void main() {
  vec4 world = u_model * vec4(a_position, 1.0);
  vNormal = normalize(mat3(u_model) * a_normal);
  vPosition = a_position;
  vWorld = world.xyz;
  gl_Position = u_projection * u_view * world;
}
"#;

pub const HALFTONE_FRAGMENT: &str = r#"#version 300 es
precision highp float;
uniform float time;
uniform sampler2D tex;
uniform vec2 resolution;
in vec2 vUv;
out vec4 fragColor;

void main() {
  vec4 texColor = texture(tex, vUv);
  float gray = dot(texColor.rgb, vec3(0.299, 0.587, 0.114));

  float scale = 80.0;
  vec2 aspect = vec2(resolution.x / max(resolution.y, 1.0), 1.0);
  float pattern = length(fract(vUv * scale * aspect) - 0.5);
  float threshold = gray * 0.8 + sin(time * 3.0) * 0.05;

  vec3 finalColor = pattern < threshold ? texColor.rgb : texColor.rgb * 0.3;
  fragColor = vec4(finalColor, texColor.a);
}
"#;

pub const GLITCH_FRAGMENT: &str = r#"#version 300 es
precision highp float;
uniform float time;
uniform sampler2D tex;
in vec2 vUv;
out vec4 fragColor;

void main() {
  float glitchStrength = step(0.95, sin(time * 30.0)) * 0.03;
  float offset = sin(vUv.y * 100.0 + time * 20.0) * glitchStrength;

  float r = texture(tex, vUv + vec2(offset, 0.0)).r;
  float g = texture(tex, vUv).g;
  float b = texture(tex, vUv - vec2(offset, 0.0)).b;
  float a = texture(tex, vUv).a;

  vec3 color = vec3(r, g, b);
  float line = step(0.98, sin(vUv.y * 500.0 + time * 50.0));
  color = mix(color, vec3(1.0), line * glitchStrength * 10.0);

  fragColor = vec4(color, a);
}
"#;

pub const SCANLINE_FRAGMENT: &str = r#"#version 300 es
precision highp float;
uniform float time;
uniform sampler2D tex;
in vec2 vUv;
out vec4 fragColor;

void main() {
  vec4 texColor = texture(tex, vUv);

  float scanline = sin((vUv.y + time * 0.5) * 400.0) * 0.5 + 0.5;
  scanline = pow(scanline, 1.5) * 0.15 + 0.85;

  vec3 color = texColor.rgb * scanline;
  color += vec3(0.0, 0.02, 0.05) * (1.0 - scanline);

  float vignette = 1.0 - length((vUv - 0.5) * 1.2);
  color *= vignette;

  fragColor = vec4(color, texColor.a);
}
"#;

pub const NOISE_FRAGMENT: &str = r#"#version 300 es
precision highp float;
uniform float time;
uniform sampler2D tex;
in vec2 vUv;
out vec4 fragColor;

float random(vec2 st) {
  return fract(sin(dot(st.xy, vec2(12.9898, 78.233))) * 43758.5453123);
}

void main() {
  vec4 texColor = texture(tex, vUv);

  float noise = random(vUv + fract(time)) * 0.15;
  vec3 color = texColor.rgb + vec3(noise - 0.075);

  float gray = dot(color, vec3(0.299, 0.587, 0.114));
  color = mix(color, vec3(gray * 1.1, gray, gray * 0.9), 0.1);

  fragColor = vec4(color, texColor.a);
}
"#;

pub const PIXELATE_FRAGMENT: &str = r#"#version 300 es
precision highp float;
uniform float time;
uniform sampler2D tex;
in vec2 vUv;
out vec4 fragColor;

void main() {
  float pixelSize = 100.0 + sin(time * 2.0) * 20.0;
  vec2 pixelUv = floor(vUv * pixelSize) / pixelSize;

  vec4 texColor = texture(tex, pixelUv);
  vec3 color = floor(texColor.rgb * 8.0) / 8.0;

  fragColor = vec4(color, texColor.a);
}
"#;

pub const HOLOGRAM_FRAGMENT: &str = r#"#version 300 es
precision highp float;
uniform float time;
uniform sampler2D tex;
in vec2 vUv;
out vec4 fragColor;

void main() {
  vec4 texColor = texture(tex, vUv);

  float lines = sin(vUv.y * 200.0 + time * 5.0) * 0.5 + 0.5;
  vec3 holoColor = vec3(
    texColor.r * 0.5,
    texColor.g * 0.8 + 0.1,
    texColor.b + 0.3
  );
  float flicker = 0.95 + sin(time * 20.0) * 0.05;
  vec3 color = holoColor * (0.7 + lines * 0.3) * flicker;

  float edge = 1.0 - abs(vUv.x - 0.5) * 2.0;
  color += vec3(0.0, 0.2, 0.3) * edge * 0.2;

  fragColor = vec4(color, texColor.a * 0.9);
}
"#;

pub const MATRIX_FRAGMENT: &str = r#"#version 300 es
precision highp float;
uniform float time;
uniform sampler2D tex;
in vec2 vUv;
out vec4 fragColor;

float random(vec2 st) {
  return fract(sin(dot(st.xy, vec2(12.9898, 78.233))) * 43758.5453123);
}

void main() {
  vec4 texColor = texture(tex, vUv);

  float cols = 40.0;
  float col = floor(vUv.x * cols);
  float speed = random(vec2(col, 0.0)) * 2.0 + 1.0;
  float drop = fract(vUv.y + time * speed * 0.3 + random(vec2(col, 1.0)));
  float trail = smoothstep(0.0, 0.4, drop) * (1.0 - smoothstep(0.4, 1.0, drop));

  float gray = dot(texColor.rgb, vec3(0.299, 0.587, 0.114));
  vec3 matrixColor = vec3(gray * 0.2, gray * 0.8 + trail * 0.3, gray * 0.2);

  fragColor = vec4(matrixColor, texColor.a);
}
"#;

pub const GRADIENT_FRAGMENT: &str = r#"#version 300 es
precision highp float;
uniform float time;
uniform vec3 color;
uniform vec3 color2;
in vec3 vNormal;
in vec3 vPosition;
in vec3 vWorld;
out vec4 fragColor;

void main() {
  vec3 light = normalize(vec3(5.0, 5.0, 5.0));
  float diffuse = max(dot(vNormal, light), 0.0) * 0.7 + 0.3;
  float t = sin(vPosition.x * 0.8 + time * 1.5) * 0.5 + 0.5;
  vec3 base = mix(color, color2, t);
  fragColor = vec4(base * diffuse, 1.0);
}
"#;

pub const NEON_FRAGMENT: &str = r#"#version 300 es
precision highp float;
uniform float time;
uniform vec3 color;
in vec3 vNormal;
in vec3 vPosition;
in vec3 vWorld;
out vec4 fragColor;

void main() {
  vec3 view = normalize(vec3(0.0, 0.0, 6.0) - vWorld);
  float rim = 1.0 - max(dot(vNormal, view), 0.0);
  float pulse = 0.75 + sin(time * 4.0) * 0.25;
  vec3 glow = color * (0.35 + pow(rim, 2.0) * 1.6) * pulse;
  fragColor = vec4(glow, 1.0);
}
"#;

pub const IRIDESCENT_FRAGMENT: &str = r#"#version 300 es
precision highp float;
uniform float time;
uniform vec3 color;
uniform vec3 color2;
in vec3 vNormal;
in vec3 vPosition;
in vec3 vWorld;
out vec4 fragColor;

void main() {
  vec3 view = normalize(vec3(0.0, 0.0, 6.0) - vWorld);
  float facing = max(dot(vNormal, view), 0.0);
  float fresnel = pow(1.0 - facing, 3.0);
  vec3 film = 0.5 + 0.5 * cos(6.28318 * (vec3(0.0, 0.33, 0.67) + facing * 1.5 + time * 0.2));
  vec3 base = mix(color, color2, facing);
  vec3 lit = base * (0.4 + 0.6 * facing);
  fragColor = vec4(mix(lit, film, 0.35 + fresnel * 0.5), 1.0);
}
"#;

pub const FLUID_FRAGMENT: &str = r#"#version 300 es
precision highp float;
uniform float time;
uniform vec3 color;
uniform vec3 color2;
in vec3 vNormal;
in vec3 vPosition;
in vec3 vWorld;
out vec4 fragColor;

void main() {
  vec2 p = vPosition.xy * 1.5;
  for (int i = 1; i < 4; i++) {
    float fi = float(i);
    p.x += 0.3 / fi * sin(fi * 3.0 * p.y + time * 0.8);
    p.y += 0.3 / fi * cos(fi * 3.0 * p.x + time * 0.6);
  }
  float t = sin(p.x + p.y) * 0.5 + 0.5;
  vec3 light = normalize(vec3(-5.0, 5.0, 5.0));
  float diffuse = max(dot(vNormal, light), 0.0) * 0.6 + 0.4;
  fragColor = vec4(mix(color, color2, t) * diffuse, 1.0);
}
"#;

pub const TUNNEL_VERTEX: &str = r#"#version 300 es
in vec3 a_position;
uniform mat4 u_projection;
uniform float u_offset;
out float vDepth;

void main() {
  vec4 view = vec4(a_position.xy, a_position.z + u_offset, 1.0);
  vDepth = -view.z;
  gl_Position = u_projection * view;
}
"#;

pub const TUNNEL_FRAGMENT: &str = r#"#version 300 es
precision highp float;
uniform vec3 u_line;
uniform vec3 u_fog;
uniform vec2 u_fog_range;
in float vDepth;
out vec4 fragColor;

void main() {
  float fog = smoothstep(u_fog_range.x, u_fog_range.y, vDepth);
  fragColor = vec4(mix(u_line, u_fog, fog), 1.0);
}
"#;
