use wasm_bindgen::JsValue;
use web_sys::{
    WebGl2RenderingContext, WebGlBuffer, WebGlFramebuffer, WebGlProgram, WebGlShader,
    WebGlTexture, WebGlUniformLocation, WebGlVertexArrayObject,
};

/// Wrapper around the WebGL2 context with the helper operations the
/// pipeline needs.
///
/// Failure policy: `Err` is reserved for object allocation failures,
/// which are fatal at initialization. Shader compile/link problems and
/// incomplete framebuffers are logged to the console and execution
/// continues with the (possibly invalid) handle, so the frame loop keeps
/// presenting instead of aborting.
pub struct GlContext {
    pub gl: WebGl2RenderingContext,
}

impl GlContext {
    pub fn new(gl: WebGl2RenderingContext) -> Self {
        Self { gl }
    }

    /// Compile a shader from source. A failed compile is logged with the
    /// program name and stage; the shader object is still returned.
    fn compile_shader(
        &self,
        name: &str,
        shader_type: u32,
        source: &str,
    ) -> Result<WebGlShader, String> {
        let gl = &self.gl;

        let shader = gl
            .create_shader(shader_type)
            .ok_or("Failed to create shader object")?;

        gl.shader_source(&shader, source);
        gl.compile_shader(&shader);

        if !gl
            .get_shader_parameter(&shader, WebGl2RenderingContext::COMPILE_STATUS)
            .as_bool()
            .unwrap_or(false)
        {
            let stage = if shader_type == WebGl2RenderingContext::VERTEX_SHADER {
                "vertex"
            } else {
                "fragment"
            };
            let log = gl.get_shader_info_log(&shader).unwrap_or_default();
            warn(&format!(
                "Shader '{}' {} stage failed to compile: {}",
                name, stage, log
            ));
        }

        Ok(shader)
    }

    /// Create a shader program from vertex and fragment sources. Compile
    /// and link diagnostics are logged under `name`; the program handle is
    /// returned even when linking failed, leaving rendering undefined
    /// rather than fatal.
    pub fn create_program(
        &self,
        name: &str,
        vert_src: &str,
        frag_src: &str,
    ) -> Result<WebGlProgram, String> {
        let gl = &self.gl;

        let vert_shader =
            self.compile_shader(name, WebGl2RenderingContext::VERTEX_SHADER, vert_src)?;
        let frag_shader =
            self.compile_shader(name, WebGl2RenderingContext::FRAGMENT_SHADER, frag_src)?;

        let program = gl.create_program().ok_or("Failed to create program")?;

        gl.attach_shader(&program, &vert_shader);
        gl.attach_shader(&program, &frag_shader);
        gl.link_program(&program);

        // Shaders are linked into the program now
        gl.delete_shader(Some(&vert_shader));
        gl.delete_shader(Some(&frag_shader));

        if !gl
            .get_program_parameter(&program, WebGl2RenderingContext::LINK_STATUS)
            .as_bool()
            .unwrap_or(false)
        {
            let log = gl.get_program_info_log(&program).unwrap_or_default();
            warn(&format!("Program '{}' failed to link: {}", name, log));
        }

        Ok(program)
    }

    /// Create a buffer and upload vertex data
    pub fn create_buffer_f32(&self, data: &[f32], usage: u32) -> Result<WebGlBuffer, String> {
        let gl = &self.gl;

        let buffer = gl.create_buffer().ok_or("Failed to create buffer")?;
        gl.bind_buffer(WebGl2RenderingContext::ARRAY_BUFFER, Some(&buffer));

        // Safety: the view does not outlive the call and no allocation
        // happens while it is alive
        unsafe {
            let array = js_sys::Float32Array::view(data);
            gl.buffer_data_with_array_buffer_view(
                WebGl2RenderingContext::ARRAY_BUFFER,
                &array,
                usage,
            );
        }

        gl.bind_buffer(WebGl2RenderingContext::ARRAY_BUFFER, None);
        Ok(buffer)
    }

    /// Create a Vertex Array Object
    pub fn create_vao(&self) -> Result<WebGlVertexArrayObject, String> {
        self.gl
            .create_vertex_array()
            .ok_or("Failed to create VAO".to_string())
    }

    /// Create an RGBA color texture sized for a render target
    pub fn create_target_texture(&self, width: i32, height: i32) -> Result<WebGlTexture, String> {
        let gl = &self.gl;

        let texture = gl.create_texture().ok_or("Failed to create texture")?;
        gl.bind_texture(WebGl2RenderingContext::TEXTURE_2D, Some(&texture));

        gl.tex_image_2d_with_i32_and_i32_and_i32_and_format_and_type_and_opt_u8_array(
            WebGl2RenderingContext::TEXTURE_2D,
            0,
            WebGl2RenderingContext::RGBA as i32,
            width,
            height,
            0,
            WebGl2RenderingContext::RGBA,
            WebGl2RenderingContext::UNSIGNED_BYTE,
            None,
        )
        .map_err(|e| format!("Failed to allocate texture storage: {:?}", e))?;

        gl.tex_parameteri(
            WebGl2RenderingContext::TEXTURE_2D,
            WebGl2RenderingContext::TEXTURE_MIN_FILTER,
            WebGl2RenderingContext::LINEAR as i32,
        );
        gl.tex_parameteri(
            WebGl2RenderingContext::TEXTURE_2D,
            WebGl2RenderingContext::TEXTURE_MAG_FILTER,
            WebGl2RenderingContext::LINEAR as i32,
        );
        gl.tex_parameteri(
            WebGl2RenderingContext::TEXTURE_2D,
            WebGl2RenderingContext::TEXTURE_WRAP_S,
            WebGl2RenderingContext::CLAMP_TO_EDGE as i32,
        );
        gl.tex_parameteri(
            WebGl2RenderingContext::TEXTURE_2D,
            WebGl2RenderingContext::TEXTURE_WRAP_T,
            WebGl2RenderingContext::CLAMP_TO_EDGE as i32,
        );

        gl.bind_texture(WebGl2RenderingContext::TEXTURE_2D, None);
        Ok(texture)
    }

    /// Create a framebuffer with a color attachment. An incomplete target
    /// is logged and the framebuffer returned anyway; output is degraded
    /// for the run, not fatal.
    pub fn create_framebuffer(&self, texture: &WebGlTexture) -> Result<WebGlFramebuffer, String> {
        let gl = &self.gl;

        let fbo = gl.create_framebuffer().ok_or("Failed to create framebuffer")?;
        gl.bind_framebuffer(WebGl2RenderingContext::FRAMEBUFFER, Some(&fbo));

        gl.framebuffer_texture_2d(
            WebGl2RenderingContext::FRAMEBUFFER,
            WebGl2RenderingContext::COLOR_ATTACHMENT0,
            WebGl2RenderingContext::TEXTURE_2D,
            Some(texture),
            0,
        );

        let status = gl.check_framebuffer_status(WebGl2RenderingContext::FRAMEBUFFER);
        if status != WebGl2RenderingContext::FRAMEBUFFER_COMPLETE {
            warn(&format!("Offscreen target incomplete: status {}", status));
        }

        gl.bind_framebuffer(WebGl2RenderingContext::FRAMEBUFFER, None);
        Ok(fbo)
    }

    /// Get uniform location
    pub fn get_uniform_location(
        &self,
        program: &WebGlProgram,
        name: &str,
    ) -> Option<WebGlUniformLocation> {
        self.gl.get_uniform_location(program, name)
    }

    /// Set vec2 uniform
    pub fn uniform_2f(&self, location: Option<&WebGlUniformLocation>, x: f32, y: f32) {
        self.gl.uniform2f(location, x, y);
    }

    /// Set vec2 array uniform
    pub fn uniform_2fv(&self, location: Option<&WebGlUniformLocation>, data: &[f32]) {
        self.gl.uniform2fv_with_f32_array(location, data);
    }

    /// Set integer uniform (sampler unit)
    pub fn uniform_1i(&self, location: Option<&WebGlUniformLocation>, value: i32) {
        self.gl.uniform1i(location, value);
    }

    /// Clear the bound target
    pub fn clear(&self, r: f32, g: f32, b: f32, a: f32) {
        self.gl.clear_color(r, g, b, a);
        self.gl.clear(
            WebGl2RenderingContext::COLOR_BUFFER_BIT | WebGl2RenderingContext::DEPTH_BUFFER_BIT,
        );
    }

    /// Enable depth testing
    pub fn enable_depth_test(&self) {
        self.gl.enable(WebGl2RenderingContext::DEPTH_TEST);
    }

    /// Disable depth testing
    pub fn disable_depth_test(&self) {
        self.gl.disable(WebGl2RenderingContext::DEPTH_TEST);
    }

    /// Set viewport
    pub fn viewport(&self, x: i32, y: i32, width: i32, height: i32) {
        self.gl.viewport(x, y, width, height);
    }
}

fn warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}
