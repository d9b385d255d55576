pub mod vec2;
pub mod matrix;

pub use vec2::Vec2;
pub use matrix::Mat4;
