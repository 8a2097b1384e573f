mod config;
mod error;
mod geometry;
mod mesh;
mod normalize;
mod normals;
mod transform;
mod vertex_index;

pub use config::*;
pub use error::*;
pub use geometry::*;
pub use mesh::*;
pub use normalize::*;
pub use vertex_index::*;

pub trait TriangleMesh: Sized {
    /// Creates a TriangleMesh from a list of triangles.
    ///
    /// # Arguments
    ///
    /// * `triangles` - A vector of the triangles of the mesh.
    fn from_triangles(triangles: Vec<Triangle>) -> Self;

    /// Returns the number of triangles that comprises this mesh, counting a polygon with `n`
    /// corners as `n - 2` triangles.
    fn triangle_count(&self) -> usize;
}
