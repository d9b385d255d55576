use crate::math::{Mat4, Vec2};

/// Base quad corners: bottom-left, bottom-right, top-right, top-left
/// (counter-clockwise). The panel never uses any other rest shape.
pub const BASE_QUAD: [Vec2; 4] = [
    Vec2::new(-1.0, -1.0),
    Vec2::new(1.0, -1.0),
    Vec2::new(1.0, 1.0),
    Vec2::new(-1.0, 1.0),
];

/// Transform parameters for the panel, mutated only through the
/// `PanelQuad` setters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformState {
    pub translation: Vec2,
    pub scale: Vec2,
    pub rotation_degrees: f32,
    /// Per-vertex offsets in base-point order, applied before the
    /// shared pivot transform.
    pub deform: [Vec2; 4],
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            translation: Vec2::ZERO,
            scale: Vec2::ONE,
            rotation_degrees: 0.0,
            deform: [Vec2::ZERO; 4],
        }
    }
}

/// The deformable panel: 4 immutable base points, their centroid, and the
/// current transform state.
#[derive(Debug, Clone)]
pub struct PanelQuad {
    base: [Vec2; 4],
    center: Vec2,
    state: TransformState,
}

impl PanelQuad {
    /// Create a panel from 4 base points (bottom-left, bottom-right,
    /// top-right, top-left). The centroid is fixed here and never
    /// recomputed from transformed points.
    pub fn new(base: [Vec2; 4]) -> Self {
        let center = (base[0] + base[1] + base[2] + base[3]).scale(0.25);
        Self {
            base,
            center,
            state: TransformState::default(),
        }
    }

    pub fn set_translation(&mut self, x: f32, y: f32) {
        self.state.translation = Vec2::new(x, y);
    }

    /// No range validation: zero or negative scale legitimately
    /// degenerates or mirrors the quad.
    pub fn set_scale(&mut self, sx: f32, sy: f32) {
        self.state.scale = Vec2::new(sx, sy);
    }

    pub fn set_rotation_degrees(&mut self, degrees: f32) {
        self.state.rotation_degrees = degrees;
    }

    /// Per-vertex deformation offsets. Each named parameter couples to
    /// exactly two adjacent corners:
    /// bottom-left = (-bottom, -left), bottom-right = (bottom, -right),
    /// top-right = (top, right), top-left = (-top, left).
    /// `left`/`right` differing gives a trapezoidal skew, `top`/`bottom`
    /// differing a shear/taper.
    pub fn set_deform(&mut self, top: f32, bottom: f32, left: f32, right: f32) {
        self.state.deform = [
            Vec2::new(-bottom, -left),
            Vec2::new(bottom, -right),
            Vec2::new(top, right),
            Vec2::new(-top, left),
        ];
    }

    /// Restore construction-time defaults without recreating the base quad.
    pub fn reset(&mut self) {
        self.state = TransformState::default();
    }

    pub fn state(&self) -> &TransformState {
        &self.state
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Final corner positions as 8 floats in base-point order. Recomputed
    /// on every call from the current state, never cached.
    pub fn transformed_vertices(&self) -> [f32; 8] {
        transform_vertices(&self.base, self.center, &self.state)
    }
}

/// Pure vertex computation. For each vertex the composite transform,
/// applied right-to-left to the homogeneous base point, is:
/// deform[i], -center, scale, rotate(Z), +center, translation.
/// Rotation and scale therefore pivot exactly on the centroid while each
/// deform offset displaces the rest shape before that pivot transform.
pub fn transform_vertices(base: &[Vec2; 4], center: Vec2, state: &TransformState) -> [f32; 8] {
    let shared = Mat4::translation(state.translation)
        .mul(&Mat4::translation(center))
        .mul(&Mat4::rotation_z(state.rotation_degrees.to_radians()))
        .mul(&Mat4::scale(state.scale))
        .mul(&Mat4::translation(-center));

    let mut out = [0.0f32; 8];
    for i in 0..4 {
        let m = shared.mul(&Mat4::translation(state.deform[i]));
        let p = m.transform_point(base[i]);
        out[i * 2] = p.x;
        out[i * 2 + 1] = p.y;
    }
    out
}
