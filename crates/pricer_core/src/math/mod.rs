//! Numerical utilities shared by the pricing kernels.
//!
//! - `mesh`: Regularly spaced ascending meshes `(start, end, step)`

pub mod mesh;

pub use mesh::{generate_mesh, Mesh, MeshIter, DEFAULT_MAX_MESH_POINTS};
