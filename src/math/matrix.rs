use super::Vec2;

/// 4x4 matrix for transformations (column-major for WebGL)
#[derive(Debug, Clone, Copy)]
pub struct Mat4 {
    pub data: [f32; 16],
}

impl Mat4 {
    pub fn identity() -> Self {
        Self {
            data: [
                1.0, 0.0, 0.0, 0.0,
                0.0, 1.0, 0.0, 0.0,
                0.0, 0.0, 1.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    pub fn translation(v: Vec2) -> Self {
        let mut m = Self::identity();
        m.data[12] = v.x;
        m.data[13] = v.y;
        m
    }

    pub fn scale(v: Vec2) -> Self {
        let mut m = Self::identity();
        m.data[0] = v.x;
        m.data[5] = v.y;
        m
    }

    /// Rotation about the Z axis, angle in radians
    pub fn rotation_z(angle: f32) -> Self {
        let c = angle.cos();
        let s = angle.sin();
        Self {
            data: [
                c, s, 0.0, 0.0,
                -s, c, 0.0, 0.0,
                0.0, 0.0, 1.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Matrix multiplication
    pub fn mul(&self, other: &Mat4) -> Self {
        let mut result = [0.0f32; 16];

        for row in 0..4 {
            for col in 0..4 {
                let mut sum = 0.0;
                for k in 0..4 {
                    sum += self.data[row + k * 4] * other.data[k + col * 4];
                }
                result[row + col * 4] = sum;
            }
        }

        Self { data: result }
    }

    /// Transform a 2D point as the homogeneous column (x, y, 0, 1)
    pub fn transform_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.data[0] * p.x + self.data[4] * p.y + self.data[12],
            self.data[1] * p.x + self.data[5] * p.y + self.data[13],
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let m = Mat4::identity();
        assert_eq!(m.data[0], 1.0);
        assert_eq!(m.data[5], 1.0);
        assert_eq!(m.data[10], 1.0);
        assert_eq!(m.data[15], 1.0);
    }

    #[test]
    fn test_translation() {
        let m = Mat4::translation(Vec2::new(1.0, 2.0));
        let result = m.transform_point(Vec2::ZERO);
        assert!((result.x - 1.0).abs() < 0.0001);
        assert!((result.y - 2.0).abs() < 0.0001);
    }

    #[test]
    fn test_scale() {
        let m = Mat4::scale(Vec2::new(2.0, 3.0));
        let result = m.transform_point(Vec2::ONE);
        assert!((result.x - 2.0).abs() < 0.0001);
        assert!((result.y - 3.0).abs() < 0.0001);
    }

    #[test]
    fn test_rotation_z() {
        let m = Mat4::rotation_z(std::f32::consts::FRAC_PI_2);
        let result = m.transform_point(Vec2::new(1.0, 0.0));
        assert!((result.x).abs() < 0.0001);
        assert!((result.y - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_matrix_mul() {
        let t = Mat4::translation(Vec2::new(1.0, 0.0));
        let s = Mat4::scale(Vec2::new(2.0, 2.0));
        let combined = t.mul(&s);
        let result = combined.transform_point(Vec2::new(1.0, 0.0));
        assert!((result.x - 3.0).abs() < 0.0001);
    }
}
