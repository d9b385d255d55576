//! Panel geometry
//!
//! Holds the immutable base quad and the current transform parameters,
//! and computes the final corner positions fed to the panel shader.

mod quad;

pub use quad::{PanelQuad, TransformState, transform_vertices, BASE_QUAD};
