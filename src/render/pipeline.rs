use web_sys::{
    WebGl2RenderingContext, WebGlBuffer, WebGlFramebuffer, WebGlProgram, WebGlTexture,
    WebGlUniformLocation, WebGlVertexArrayObject,
};

use super::gl::GlContext;
use super::shaders::*;

/// Vertices drawn per pass: the shared unit quad as two triangles.
const QUAD_VERTEX_COUNT: i32 = 6;

/// Shared unit quad, interleaved position + texcoord.
const QUAD_VERTICES: [f32; 24] = [
    // positions   // texcoords
    -1.0, 1.0, 0.0, 1.0,
    -1.0, -1.0, 0.0, 0.0,
    1.0, -1.0, 1.0, 0.0,
    -1.0, 1.0, 0.0, 1.0,
    1.0, -1.0, 1.0, 0.0,
    1.0, 1.0, 1.0, 1.0,
];

/// Cached uniform locations for the panel shader
struct PanelUniforms {
    points: Option<WebGlUniformLocation>,
}

/// Cached uniform locations for the composite shader
struct CompositeUniforms {
    window_size: Option<WebGlUniformLocation>,
    screen_texture: Option<WebGlUniformLocation>,
}

/// Two-pass pipeline for the panel: pass A renders the deformed quad into
/// the offscreen frame target, pass B samples that target onto the
/// visible surface. The passes run strictly A-then-B every frame.
pub struct RenderPipeline {
    ctx: GlContext,

    // Shaders
    panel_program: WebGlProgram,
    composite_program: WebGlProgram,

    // Uniform locations
    panel_uniforms: PanelUniforms,
    composite_uniforms: CompositeUniforms,

    // Shared unit quad
    quad_vao: WebGlVertexArrayObject,
    quad_buffer: WebGlBuffer,

    // Offscreen frame target
    frame_texture: WebGlTexture,
    frame_fbo: WebGlFramebuffer,

    // Dimensions
    width: i32,
    height: i32,
}

impl RenderPipeline {
    pub fn new(gl: WebGl2RenderingContext, width: i32, height: i32) -> Result<Self, String> {
        let ctx = GlContext::new(gl);

        // Compile shaders; compile/link diagnostics are non-fatal
        let panel_program =
            ctx.create_program("panel", PANEL_VERTEX_SHADER, PANEL_FRAGMENT_SHADER)?;
        let composite_program = ctx.create_program(
            "composite",
            COMPOSITE_VERTEX_SHADER,
            COMPOSITE_FRAGMENT_SHADER,
        )?;

        let panel_uniforms = PanelUniforms {
            points: ctx.get_uniform_location(&panel_program, "points"),
        };
        let composite_uniforms = CompositeUniforms {
            window_size: ctx.get_uniform_location(&composite_program, "windowSize"),
            screen_texture: ctx.get_uniform_location(&composite_program, "screenTexture"),
        };

        let (quad_vao, quad_buffer) = Self::create_unit_quad(&ctx)?;

        // Offscreen frame target; incompleteness is logged, not fatal
        let frame_texture = ctx.create_target_texture(width, height)?;
        let frame_fbo = ctx.create_framebuffer(&frame_texture)?;

        Ok(Self {
            ctx,
            panel_program,
            composite_program,
            panel_uniforms,
            composite_uniforms,
            quad_vao,
            quad_buffer,
            frame_texture,
            frame_fbo,
            width,
            height,
        })
    }

    /// Upload the shared unit quad and describe its vertex layout
    fn create_unit_quad(ctx: &GlContext) -> Result<(WebGlVertexArrayObject, WebGlBuffer), String> {
        let gl = &ctx.gl;

        let vao = ctx.create_vao()?;
        gl.bind_vertex_array(Some(&vao));

        let buffer = ctx.create_buffer_f32(&QUAD_VERTICES, WebGl2RenderingContext::STATIC_DRAW)?;
        gl.bind_buffer(WebGl2RenderingContext::ARRAY_BUFFER, Some(&buffer));

        // Layout: position(2) + texcoord(2)
        let stride = 4 * 4;

        gl.enable_vertex_attrib_array(0);
        gl.vertex_attrib_pointer_with_i32(0, 2, WebGl2RenderingContext::FLOAT, false, stride, 0);

        gl.enable_vertex_attrib_array(1);
        gl.vertex_attrib_pointer_with_i32(1, 2, WebGl2RenderingContext::FLOAT, false, stride, 8);

        gl.bind_vertex_array(None);

        Ok((vao, buffer))
    }

    /// Render one frame from the transformed corner positions, given in
    /// base-point order (bottom-left, bottom-right, top-right, top-left).
    pub fn render(&self, corners: &[f32; 8]) {
        let gl = &self.ctx.gl;

        // === Pass A: deformed panel into the frame target ===
        gl.bind_framebuffer(WebGl2RenderingContext::FRAMEBUFFER, Some(&self.frame_fbo));
        self.ctx.viewport(0, 0, self.width, self.height);
        self.ctx.enable_depth_test();
        self.ctx.clear(0.1, 0.1, 0.1, 1.0);

        gl.use_program(Some(&self.panel_program));
        self.ctx.uniform_2fv(self.panel_uniforms.points.as_ref(), corners);

        gl.bind_vertex_array(Some(&self.quad_vao));
        gl.draw_arrays(WebGl2RenderingContext::TRIANGLES, 0, QUAD_VERTEX_COUNT);

        // === Pass B: composite the frame target onto the surface ===
        gl.bind_framebuffer(WebGl2RenderingContext::FRAMEBUFFER, None);
        self.ctx.viewport(0, 0, self.width, self.height);
        self.ctx.disable_depth_test();
        self.ctx.clear(1.0, 1.0, 1.0, 1.0);

        gl.use_program(Some(&self.composite_program));
        self.ctx.uniform_2f(
            self.composite_uniforms.window_size.as_ref(),
            self.width as f32,
            self.height as f32,
        );

        gl.active_texture(WebGl2RenderingContext::TEXTURE0);
        gl.bind_texture(WebGl2RenderingContext::TEXTURE_2D, Some(&self.frame_texture));
        self.ctx
            .uniform_1i(self.composite_uniforms.screen_texture.as_ref(), 0);

        gl.draw_arrays(WebGl2RenderingContext::TRIANGLES, 0, QUAD_VERTEX_COUNT);

        gl.bind_vertex_array(None);
    }

    /// Recreate the frame target at a new surface size
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), String> {
        let gl = &self.ctx.gl;

        gl.delete_framebuffer(Some(&self.frame_fbo));
        gl.delete_texture(Some(&self.frame_texture));

        self.width = width;
        self.height = height;
        self.frame_texture = self.ctx.create_target_texture(width, height)?;
        self.frame_fbo = self.ctx.create_framebuffer(&self.frame_texture)?;
        Ok(())
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}

impl Drop for RenderPipeline {
    /// Release GL objects in reverse order of acquisition
    fn drop(&mut self) {
        let gl = &self.ctx.gl;
        gl.delete_framebuffer(Some(&self.frame_fbo));
        gl.delete_texture(Some(&self.frame_texture));
        gl.delete_buffer(Some(&self.quad_buffer));
        gl.delete_vertex_array(Some(&self.quad_vao));
        gl.delete_program(Some(&self.composite_program));
        gl.delete_program(Some(&self.panel_program));
    }
}
