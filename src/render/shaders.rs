/// Vertex shader for the panel pass. The mesh is the static unit quad;
/// the `points` uniform carries the transformed corners in base-point
/// order (bottom-left, bottom-right, top-right, top-left) and the quad is
/// mapped onto them bilinearly.
pub const PANEL_VERTEX_SHADER: &str = r#"#version 300 es
precision highp float;

layout(location = 0) in vec2 a_position;
layout(location = 1) in vec2 a_uv;

uniform vec2 points[4];

out vec2 v_uv;

void main() {
    vec2 bottom = mix(points[0], points[1], a_uv.x);
    vec2 top = mix(points[3], points[2], a_uv.x);
    vec2 pos = mix(bottom, top, a_uv.y);

    v_uv = a_uv;
    gl_Position = vec4(pos, 0.0, 1.0);
}
"#;

/// Fragment shader for the panel pass: conveyor-belt surface with
/// transverse slats and darkened rims.
pub const PANEL_FRAGMENT_SHADER: &str = r#"#version 300 es
precision highp float;

in vec2 v_uv;

out vec4 fragColor;

void main() {
    vec3 belt = vec3(0.16, 0.17, 0.19);
    vec3 slat = vec3(0.38, 0.36, 0.32);

    // Transverse slats across the belt
    float band = smoothstep(0.35, 0.4, fract(v_uv.x * 8.0))
               - smoothstep(0.9, 0.95, fract(v_uv.x * 8.0));
    vec3 color = mix(belt, slat, band);

    // Darken toward the long edges
    float rim = smoothstep(0.0, 0.08, v_uv.y) * smoothstep(1.0, 0.92, v_uv.y);
    color *= 0.6 + 0.4 * rim;

    fragColor = vec4(color, 1.0);
}
"#;

/// Vertex shader for the composite pass: the unit quad already covers
/// clip space.
pub const COMPOSITE_VERTEX_SHADER: &str = r#"#version 300 es
precision highp float;

layout(location = 0) in vec2 a_position;
layout(location = 1) in vec2 a_uv;

void main() {
    gl_Position = vec4(a_position, 0.0, 1.0);
}
"#;

/// Fragment shader for the composite pass: sample the offscreen texture
/// across the visible surface, addressed by fragment position over
/// `windowSize` in pixels.
pub const COMPOSITE_FRAGMENT_SHADER: &str = r#"#version 300 es
precision highp float;

uniform vec2 windowSize;
uniform sampler2D screenTexture;

out vec4 fragColor;

void main() {
    vec2 uv = gl_FragCoord.xy / windowSize;
    fragColor = texture(screenTexture, uv);
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shaders_not_empty() {
        assert!(!PANEL_VERTEX_SHADER.is_empty());
        assert!(!PANEL_FRAGMENT_SHADER.is_empty());
        assert!(!COMPOSITE_VERTEX_SHADER.is_empty());
        assert!(!COMPOSITE_FRAGMENT_SHADER.is_empty());
    }

    #[test]
    fn test_shader_version() {
        for src in [
            PANEL_VERTEX_SHADER,
            PANEL_FRAGMENT_SHADER,
            COMPOSITE_VERTEX_SHADER,
            COMPOSITE_FRAGMENT_SHADER,
        ] {
            assert!(src.starts_with("#version 300 es"));
        }
    }

    #[test]
    fn test_uniform_contract_names() {
        // The backend uploads by these exact names.
        assert!(PANEL_VERTEX_SHADER.contains("uniform vec2 points[4]"));
        assert!(COMPOSITE_FRAGMENT_SHADER.contains("uniform vec2 windowSize"));
        assert!(COMPOSITE_FRAGMENT_SHADER.contains("uniform sampler2D screenTexture"));
    }
}
