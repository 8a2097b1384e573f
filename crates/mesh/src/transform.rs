use cgmath::{ElementWise, InnerSpace, Matrix4, Rad, Zero};

use crate::{
    error::{MeshError, Result},
    geometry::Vector3,
    mesh::Mesh,
};

// These transforms only move positions. Normals are never transformed here; a transform that
// can change their direction marks them stale, and `recompute_normals` brings them back in
// line.
impl Mesh {
    /// Rotates every position by `angle` radians around `axis` (right-hand rule).
    pub fn rotate(&mut self, angle: f32, axis: Vector3) -> Result<()> {
        let len = axis.magnitude();
        if len == 0.0 || !len.is_finite() {
            return Err(MeshError::DegenerateMesh("rotation axis has no direction"));
        }
        log::debug!("rotating mesh by {} rad around {:?}", angle, axis);
        let m = Matrix4::from_axis_angle(axis / len, Rad(angle));
        for p in self.positions.iter_mut() {
            let h = m * p.extend(1.0);
            *p = h.truncate() / h.w;
        }
        self.normals_stale = true;
        Ok(())
    }

    /// Moves every position by `offset`.
    pub fn translate(&mut self, offset: Vector3) {
        // A zero offset is a no-op so signed zeros survive.
        if offset == Vector3::zero() {
            return;
        }
        log::debug!("translating mesh by {:?}", offset);
        for p in self.positions.iter_mut() {
            *p += offset;
        }
    }

    /// Multiplies every position component-wise by `factors`.
    ///
    /// A uniform positive scale keeps normals valid. Anything else marks them stale.
    pub fn scale(&mut self, factors: Vector3) {
        log::debug!("scaling mesh by {:?}", factors);
        for p in self.positions.iter_mut() {
            *p = p.mul_element_wise(factors);
        }
        let uniform = factors.x == factors.y && factors.y == factors.z && factors.x > 0.0;
        if !uniform {
            self.normals_stale = true;
        }
    }
}
