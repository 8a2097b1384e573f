use cgmath::Zero;

use crate::{
    error::{MeshError, Result},
    geometry::Vector3,
    mesh::Mesh,
};

/// The transform applied by [`Mesh::normalize`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normalization {
    pub centroid: Vector3,
    /// The uniform divisor; the largest per-axis deviation from the centroid.
    pub extent: f32,
}

/// Returns the arithmetic mean of `points`.
pub fn centroid(points: &[Vector3]) -> Result<Vector3> {
    if points.is_empty() {
        return Err(MeshError::DegenerateMesh("mesh has no vertices"));
    }
    let sum = points.iter().fold(Vector3::zero(), |acc, p| acc + *p);
    Ok(sum / points.len() as f32)
}

/// Returns the largest absolute difference, over every point and every axis, between a point's
/// coordinate and the matching coordinate of `center`.
///
/// This is a single scalar rather than a per-axis size so that rescaling by it is uniform.
pub fn extent(points: &[Vector3], center: Vector3) -> f32 {
    points.iter().fold(0.0f32, |max, p| {
        let d = *p - center;
        max.max(d.x.abs()).max(d.y.abs()).max(d.z.abs())
    })
}

impl Mesh {
    /// Moves the centroid to the origin and divides every position by the extent, so that the
    /// mesh fits the [-1, 1] cube and touches its boundary on at least one axis.
    ///
    /// Fails with `DegenerateMesh` when there are no vertices or they all coincide.
    pub fn normalize(&mut self) -> Result<Normalization> {
        log::debug!("normalizing {} vertices", self.positions.len());
        let center = centroid(&self.positions)?;
        let extent = extent(&self.positions, center);
        if extent == 0.0 || !extent.is_finite() {
            return Err(MeshError::DegenerateMesh("vertices have no extent"));
        }
        for p in self.positions.iter_mut() {
            *p = (*p - center) / extent;
        }
        self.centroid = center;
        Ok(Normalization {
            centroid: center,
            extent,
        })
    }
}
