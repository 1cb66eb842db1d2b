//! Constructive solid geometry on triangulatable polygon soups.
//!
//! Solids are closed boundary representations made of convex planar
//! polygons. Booleans work by BSP-tree clipping; primitives are validated on
//! construction so degenerate dimensions surface as typed errors instead of
//! collapsed geometry downstream.

pub mod bsp;
pub mod error;
pub mod mesh;
pub mod plane;
pub mod polygon;
pub mod primitives;
pub mod solid;

pub use error::GeometryError;
pub use nalgebra::{Point3, Vector3};
pub use mesh::TriangleMesh;
pub use plane::Plane;
pub use polygon::{Polygon, Vertex};
pub use primitives::{cuboid, cylinder, lathe, tetrahedron, torus};
pub use solid::Solid;

/// Classification tolerance shared by plane splitting and validation.
pub const EPSILON: f64 = 1e-5;
