//! GL globe pipeline.
//!
//! Draws the textured globe and the translucent cloud shell through an
//! `egui_glow` paint callback. The sphere is convex, so back-face culling
//! stands in for depth testing and no depth buffer is required. Event
//! markers are not drawn here; the globe view overlays them in egui paint
//! space using the same camera.

use glow::HasContext as _;
use glam::Mat4;

use super::mesh::{build_sphere_mesh, SphereMesh};
use super::texture::{clouds_texture, earth_texture, TextureImage};
use crate::geo::GLOBE_RADIUS;

/// Sphere tessellation (matches the original scene's 64-segment globe).
const SPHERE_RINGS: u32 = 32;
const SPHERE_SEGMENTS: u32 = 64;

/// Cloud shell sits just above the surface.
const CLOUD_SHELL_SCALE: f32 = 1.01;
const CLOUD_ALPHA: f32 = 0.3;

/// Scene light direction (over the western Atlantic, as in the original).
const LIGHT_DIR: [f32; 3] = [-1.0, 0.0, 1.0];

/// GL resources for the globe and cloud passes.
///
/// Holds only handle types so the renderer stays `Send`/`Sync` and can be
/// shared with the paint callback on every target; uniform locations are
/// looked up at paint time.
pub struct GlobeRenderer {
    program: glow::Program,
    vertex_array: glow::VertexArray,
    vertex_buffer: glow::Buffer,
    index_buffer: glow::Buffer,
    index_count: i32,
    earth: glow::Texture,
    clouds: glow::Texture,
}

impl GlobeRenderer {
    /// Compiles the pipeline and uploads mesh and textures.
    pub fn new(gl: &glow::Context) -> Result<Self, String> {
        let mesh = build_sphere_mesh(SPHERE_RINGS, SPHERE_SEGMENTS);

        unsafe {
            let program = compile_program(gl)?;

            let (vertex_array, vertex_buffer, index_buffer) = upload_mesh(gl, &mesh)?;

            let earth = upload_texture(gl, &earth_texture())?;
            let clouds = upload_texture(gl, &clouds_texture())?;

            Ok(Self {
                program,
                vertex_array,
                vertex_buffer,
                index_buffer,
                index_count: mesh.index_count(),
                earth,
                clouds,
            })
        }
    }

    /// Draws the globe (and optionally the cloud shell) with the given
    /// camera matrix. Called from inside an egui paint callback, which has
    /// already set viewport and scissor to the panel rect.
    pub fn paint(&self, gl: &glow::Context, view_proj: Mat4, show_clouds: bool) {
        unsafe {
            gl.use_program(Some(self.program));
            gl.bind_vertex_array(Some(self.vertex_array));
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(self.index_buffer));

            gl.enable(glow::CULL_FACE);
            gl.cull_face(glow::BACK);
            gl.front_face(glow::CCW);

            let u_view_proj = gl.get_uniform_location(self.program, "u_view_proj");
            let u_radius = gl.get_uniform_location(self.program, "u_radius");
            let u_alpha = gl.get_uniform_location(self.program, "u_alpha");
            let u_light_dir = gl.get_uniform_location(self.program, "u_light_dir");
            let u_texture = gl.get_uniform_location(self.program, "u_texture");

            gl.uniform_matrix_4_f32_slice(
                u_view_proj.as_ref(),
                false,
                &view_proj.to_cols_array(),
            );
            gl.uniform_3_f32(
                u_light_dir.as_ref(),
                LIGHT_DIR[0],
                LIGHT_DIR[1],
                LIGHT_DIR[2],
            );
            gl.uniform_1_i32(u_texture.as_ref(), 0);
            gl.active_texture(glow::TEXTURE0);

            // Surface pass.
            gl.bind_texture(glow::TEXTURE_2D, Some(self.earth));
            gl.uniform_1_f32(u_radius.as_ref(), GLOBE_RADIUS as f32);
            gl.uniform_1_f32(u_alpha.as_ref(), 1.0);
            gl.draw_elements(glow::TRIANGLES, self.index_count, glow::UNSIGNED_INT, 0);

            // Cloud shell pass, alpha-blended over the surface.
            if show_clouds {
                gl.enable(glow::BLEND);
                gl.blend_func(glow::SRC_ALPHA, glow::ONE_MINUS_SRC_ALPHA);

                gl.bind_texture(glow::TEXTURE_2D, Some(self.clouds));
                gl.uniform_1_f32(u_radius.as_ref(), GLOBE_RADIUS as f32 * CLOUD_SHELL_SCALE);
                gl.uniform_1_f32(u_alpha.as_ref(), CLOUD_ALPHA);
                gl.draw_elements(glow::TRIANGLES, self.index_count, glow::UNSIGNED_INT, 0);

                gl.disable(glow::BLEND);
            }

            gl.disable(glow::CULL_FACE);
            gl.bind_vertex_array(None);
        }
    }

    /// Releases all GL resources. Must be called before the context dies.
    pub fn destroy(&self, gl: &glow::Context) {
        unsafe {
            gl.delete_program(self.program);
            gl.delete_vertex_array(self.vertex_array);
            gl.delete_buffer(self.vertex_buffer);
            gl.delete_buffer(self.index_buffer);
            gl.delete_texture(self.earth);
            gl.delete_texture(self.clouds);
        }
    }
}

const VERTEX_SHADER: &str = r#"
    layout(location = 0) in vec3 a_position;
    layout(location = 1) in vec2 a_uv;

    uniform mat4 u_view_proj;
    uniform float u_radius;

    out vec2 v_uv;
    out vec3 v_normal;

    void main() {
        v_uv = a_uv;
        v_normal = a_position;
        gl_Position = u_view_proj * vec4(a_position * u_radius, 1.0);
    }
"#;

const FRAGMENT_SHADER: &str = r#"
    precision mediump float;

    in vec2 v_uv;
    in vec3 v_normal;

    uniform sampler2D u_texture;
    uniform float u_alpha;
    uniform vec3 u_light_dir;

    out vec4 frag_color;

    void main() {
        vec4 tex = texture(u_texture, v_uv);
        float diffuse = max(dot(normalize(v_normal), normalize(u_light_dir)), 0.0);
        float light = 0.45 + 0.55 * diffuse;
        frag_color = vec4(tex.rgb * light, tex.a * u_alpha);
    }
"#;

unsafe fn compile_program(gl: &glow::Context) -> Result<glow::Program, String> {
    let shader_version = if cfg!(target_arch = "wasm32") {
        "#version 300 es"
    } else {
        "#version 330 core"
    };

    let program = gl.create_program()?;

    let sources = [
        (glow::VERTEX_SHADER, VERTEX_SHADER),
        (glow::FRAGMENT_SHADER, FRAGMENT_SHADER),
    ];

    let mut shaders = Vec::with_capacity(sources.len());
    for (kind, source) in sources {
        let shader = gl.create_shader(kind)?;
        gl.shader_source(shader, &format!("{}\n{}", shader_version, source));
        gl.compile_shader(shader);
        if !gl.get_shader_compile_status(shader) {
            return Err(format!(
                "Shader compile failed: {}",
                gl.get_shader_info_log(shader)
            ));
        }
        gl.attach_shader(program, shader);
        shaders.push(shader);
    }

    gl.link_program(program);
    if !gl.get_program_link_status(program) {
        return Err(format!(
            "Program link failed: {}",
            gl.get_program_info_log(program)
        ));
    }

    for shader in shaders {
        gl.detach_shader(program, shader);
        gl.delete_shader(shader);
    }

    Ok(program)
}

unsafe fn upload_mesh(
    gl: &glow::Context,
    mesh: &SphereMesh,
) -> Result<(glow::VertexArray, glow::Buffer, glow::Buffer), String> {
    let vertex_array = gl.create_vertex_array()?;
    gl.bind_vertex_array(Some(vertex_array));

    let vertex_buffer = gl.create_buffer()?;
    gl.bind_buffer(glow::ARRAY_BUFFER, Some(vertex_buffer));
    gl.buffer_data_u8_slice(
        glow::ARRAY_BUFFER,
        bytemuck::cast_slice(&mesh.vertices),
        glow::STATIC_DRAW,
    );

    let index_buffer = gl.create_buffer()?;
    gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(index_buffer));
    gl.buffer_data_u8_slice(
        glow::ELEMENT_ARRAY_BUFFER,
        bytemuck::cast_slice(&mesh.indices),
        glow::STATIC_DRAW,
    );

    // Interleaved layout: vec3 position, vec2 uv.
    let stride = (5 * std::mem::size_of::<f32>()) as i32;
    gl.vertex_attrib_pointer_f32(0, 3, glow::FLOAT, false, stride, 0);
    gl.enable_vertex_attrib_array(0);
    gl.vertex_attrib_pointer_f32(
        1,
        2,
        glow::FLOAT,
        false,
        stride,
        (3 * std::mem::size_of::<f32>()) as i32,
    );
    gl.enable_vertex_attrib_array(1);

    gl.bind_vertex_array(None);

    Ok((vertex_array, vertex_buffer, index_buffer))
}

unsafe fn upload_texture(
    gl: &glow::Context,
    image: &TextureImage,
) -> Result<glow::Texture, String> {
    let texture = gl.create_texture()?;
    gl.bind_texture(glow::TEXTURE_2D, Some(texture));

    gl.tex_parameter_i32(
        glow::TEXTURE_2D,
        glow::TEXTURE_MIN_FILTER,
        glow::LINEAR as i32,
    );
    gl.tex_parameter_i32(
        glow::TEXTURE_2D,
        glow::TEXTURE_MAG_FILTER,
        glow::LINEAR as i32,
    );
    // Wrap east-west so the seam column samples cleanly; clamp at the poles.
    gl.tex_parameter_i32(glow::TEXTURE_2D, glow::TEXTURE_WRAP_S, glow::REPEAT as i32);
    gl.tex_parameter_i32(
        glow::TEXTURE_2D,
        glow::TEXTURE_WRAP_T,
        glow::CLAMP_TO_EDGE as i32,
    );

    gl.tex_image_2d(
        glow::TEXTURE_2D,
        0,
        glow::RGBA8 as i32,
        image.width as i32,
        image.height as i32,
        0,
        glow::RGBA,
        glow::UNSIGNED_BYTE,
        glow::PixelUnpackData::Slice(Some(&image.pixels)),
    );

    gl.bind_texture(glow::TEXTURE_2D, None);
    Ok(texture)
}
