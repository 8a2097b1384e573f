use cgmath::Zero;

use crate::{error::Result, geometry::normalize_or_zero, geometry::Vector3, mesh::Mesh};

impl Mesh {
    /// Derives one unit normal per face from its first three corners.
    ///
    /// Faces with more than three corners are assumed planar; only corners 0, 1 and 2 are used.
    /// A face whose leading corners are collinear gets the zero vector.
    pub fn compute_face_normals(&mut self) -> Result<()> {
        log::debug!("computing {} face normals", self.faces.len());
        let normals = self
            .triangles()
            .map(|t| t.map(|t| t.normal()))
            .collect::<Result<Vec<_>>>()?;
        self.face_normals = normals;
        Ok(())
    }

    /// Derives one normal per vertex by averaging the normals of every face touching it.
    ///
    /// The average is unweighted and counts a face once per corner that references the vertex.
    /// A vertex no face touches (or whose face normals cancel out) gets the zero vector. Corners
    /// referencing vertices outside the mesh are ignored.
    ///
    /// Face normals are computed first if they do not cover every face.
    pub fn compute_vertex_normals(&mut self) -> Result<()> {
        if self.face_normals.len() != self.faces.len() {
            self.compute_face_normals()?;
        }
        log::debug!("computing {} vertex normals", self.positions.len());
        let mut sums = vec![Vector3::zero(); self.positions.len()];
        for (face, normal) in self.faces.iter().zip(self.face_normals.iter()) {
            for &v in face.vertices() {
                if let Some(sum) = sums.get_mut(v as usize) {
                    *sum += *normal;
                }
            }
        }
        self.vertex_normals = sums.into_iter().map(normalize_or_zero).collect();
        Ok(())
    }

    /// Recomputes face normals, and vertex normals if the mesh had them, from the current
    /// positions.
    pub fn recompute_normals(&mut self) -> Result<()> {
        let had_vertex_normals = !self.vertex_normals.is_empty();
        self.compute_face_normals()?;
        if had_vertex_normals {
            self.compute_vertex_normals()?;
        }
        self.normals_stale = false;
        Ok(())
    }
}
