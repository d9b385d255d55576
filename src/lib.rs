use wasm_bindgen::prelude::*;
use web_sys::{HtmlCanvasElement, WebGl2RenderingContext};

pub mod animation;
pub mod geometry;
pub mod math;
pub mod render;

use animation::{ConveyorCycle, PanelParams};
use geometry::{PanelQuad, BASE_QUAD};
use render::RenderPipeline;

/// Fixed surface size in pixels; the hosting page may override by
/// recompiling.
pub const PANEL_WIDTH: u32 = 800;
pub const PANEL_HEIGHT: u32 = 800;

/// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// The animated conveyor panel exposed to JavaScript. Owns the animation
/// cycle, the panel geometry, and the two-pass pipeline; one `frame()`
/// call advances and renders exactly one tick.
#[wasm_bindgen]
pub struct ConveyorPanel {
    pipeline: RenderPipeline,
    quad: PanelQuad,
    cycle: ConveyorCycle,
}

#[wasm_bindgen]
impl ConveyorPanel {
    /// Create a panel bound to a canvas. Context acquisition and GL
    /// object allocation failures are fatal and surface as a JS
    /// exception.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement) -> Result<ConveyorPanel, JsValue> {
        canvas.set_width(PANEL_WIDTH);
        canvas.set_height(PANEL_HEIGHT);

        let gl = canvas
            .get_context("webgl2")?
            .ok_or("Failed to get WebGL2 context")?
            .dyn_into::<WebGl2RenderingContext>()?;

        let pipeline = RenderPipeline::new(gl, PANEL_WIDTH as i32, PANEL_HEIGHT as i32)
            .map_err(|e| JsValue::from_str(&e))?;

        Ok(Self {
            pipeline,
            quad: PanelQuad::new(BASE_QUAD),
            cycle: ConveyorCycle::new(),
        })
    }

    /// Advance the animation by one tick and render both passes. Called
    /// once per requestAnimationFrame callback.
    #[wasm_bindgen]
    pub fn frame(&mut self) {
        self.cycle.tick();
        apply_params(&mut self.quad, self.cycle.params());
        self.pipeline.render(&self.quad.transformed_vertices());
    }

    /// Restart the animation cycle from its baseline pose.
    #[wasm_bindgen]
    pub fn restart(&mut self) {
        self.cycle = ConveyorCycle::new();
        self.quad.reset();
    }

    /// Current tick within the cycle.
    #[wasm_bindgen]
    pub fn tick_count(&self) -> u32 {
        self.cycle.tick_count()
    }

    /// Resize the rendering surface.
    #[wasm_bindgen]
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), JsValue> {
        self.pipeline
            .resize(width as i32, height as i32)
            .map_err(|e| JsValue::from_str(&e))
    }
}

/// Apply one frame's animation parameters to the panel geometry. The
/// trapezoid factor deforms the left and right edges symmetrically.
fn apply_params(quad: &mut PanelQuad, params: PanelParams) {
    quad.set_translation(params.translation.0, params.translation.1);
    quad.set_rotation_degrees(params.rotation_degrees);
    quad.set_scale(params.scale.0, params.scale.1);
    quad.set_deform(0.0, 0.0, params.trapezoid, -params.trapezoid);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warmup_frame_vertices() {
        let mut quad = PanelQuad::new(BASE_QUAD);
        let cycle = ConveyorCycle::new();
        apply_params(&mut quad, cycle.params());

        // Baseline pose: y scaled by 0.3 about the origin centroid, then
        // lifted by 0.4. No rotation, no deformation.
        let v = quad.transformed_vertices();
        let expected = [-1.0, 0.1, 1.0, 0.1, 1.0, 0.7, -1.0, 0.7];
        for i in 0..8 {
            assert!((v[i] - expected[i]).abs() < 0.0001, "component {}", i);
        }
    }

    #[test]
    fn test_trapezoid_deform_is_symmetric() {
        let mut quad = PanelQuad::new(BASE_QUAD);
        let mut cycle = ConveyorCycle::new();
        // Run into the animate phase.
        for _ in 0..250 {
            cycle.tick();
        }
        let params = cycle.params();
        assert!(params.trapezoid > 0.0);
        apply_params(&mut quad, params);

        let d = quad.state().deform;
        // left = trapezoid, right = -trapezoid: the left edge stretches
        // vertically while the right edge contracts by the same amount.
        assert_eq!(d[0], math::Vec2::new(0.0, -params.trapezoid));
        assert_eq!(d[1], math::Vec2::new(0.0, params.trapezoid));
        assert_eq!(d[2], math::Vec2::new(0.0, -params.trapezoid));
        assert_eq!(d[3], math::Vec2::new(0.0, params.trapezoid));
    }

    #[test]
    fn test_full_cycle_returns_to_baseline_vertices() {
        let mut quad = PanelQuad::new(BASE_QUAD);
        let mut cycle = ConveyorCycle::new();
        apply_params(&mut quad, cycle.params());
        let baseline = quad.transformed_vertices();

        for _ in 0..animation::CYCLE_TICKS {
            cycle.tick();
        }
        apply_params(&mut quad, cycle.params());
        assert_eq!(quad.transformed_vertices(), baseline);
    }
}
