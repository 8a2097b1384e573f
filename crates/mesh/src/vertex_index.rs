use std::collections::HashMap;

use cgmath::Zero;
use ordered_float::OrderedFloat;

use crate::{
    error::{MeshError, Result},
    geometry::{flatten2, flatten3, Vector2, Vector3},
    mesh::Mesh,
};

/// How the indexing pass treats repeated corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexMode {
    /// One buffer entry per triangle corner; suitable for a non-indexed draw.
    #[default]
    Expanded,
    /// Corners with identical attributes share one buffer entry.
    Deduplicated,
}

/// A mesh flattened into a single vertex stream for upload to a GPU.
///
/// Formats such as OBJ index positions, normals and texture coordinates independently, while
/// a draw call takes one index per vertex. Here every vertex carries all its attributes and
/// triangles are described by `indices`, three per triangle, in the winding order of the
/// source faces.
///
/// As a simple example, consider a quad split into two triangles:
///
///    3-------2
///    |     / |
///    |   /   |
///    | /     |
///    0-------1
///
/// Expanded, the faces (0,1,2) and (0,2,3) become 6 vertices with indices 0..6. Deduplicated,
/// corners 0 and 2 are shared (they have the same position and normal) so only 4 vertices
/// remain, with indices (0,1,2,0,2,3).
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedMesh {
    pub positions: Vec<Vector3>,
    pub normals: Vec<Vector3>,
    /// Present when every face of the source mesh carries texture coordinates.
    pub uvs: Option<Vec<Vector2>>,
    pub indices: Vec<u32>,
}

impl IndexedMesh {
    /// Number of distinct vertices in the attribute buffers.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangle corners to draw; three per triangle.
    pub fn corner_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn position_floats(&self) -> &[f32] {
        flatten3(&self.positions)
    }

    pub fn normal_floats(&self) -> &[f32] {
        flatten3(&self.normals)
    }

    pub fn uv_floats(&self) -> Option<&[f32]> {
        self.uvs.as_deref().map(flatten2)
    }
}

/// The attributes of one triangle corner.
#[derive(Clone, Copy)]
struct Corner {
    position: Vector3,
    normal: Vector3,
    uv: Vector2,
}

impl Corner {
    // Floats are not hash nor eq, so we use the ordered-float crate. This compares the values
    // read from the file, which is what we want: corners that came from the same source
    // attributes are bit-identical.
    fn key(&self) -> [OrderedFloat<f32>; 8] {
        [
            self.position.x,
            self.position.y,
            self.position.z,
            self.normal.x,
            self.normal.y,
            self.normal.z,
            self.uv.x,
            self.uv.y,
        ]
        .map(OrderedFloat)
    }
}

impl Mesh {
    /// Flattens the faces into a per-vertex stream.
    ///
    /// Faces with more than three corners are split into a fan around their first corner. Each
    /// corner takes its normal from the first available source:
    ///  1. the vertex normal, if vertex normals were computed;
    ///  2. the normal literal the face references, if the file supplied normals;
    ///  3. the face normal.
    pub fn index(&self, mode: IndexMode) -> Result<IndexedMesh> {
        if self.normals_stale {
            log::warn!("indexing {} with stale normals", self.name);
        }
        let with_uvs = !self.faces.is_empty()
            && self.faces.iter().all(|f| !f.uv_indices().is_empty());

        let mut out = IndexedMesh {
            positions: Vec::new(),
            normals: Vec::new(),
            uvs: if with_uvs { Some(Vec::new()) } else { None },
            indices: Vec::new(),
        };
        let mut seen = HashMap::<[OrderedFloat<f32>; 8], u32>::new();

        for face_index in 0..self.faces.len() {
            let n = self.faces[face_index].corner_count();
            for i in 1..n.saturating_sub(1) {
                for corner in [0, i, i + 1] {
                    let c = self.corner(face_index, corner, with_uvs)?;
                    let next = out.positions.len() as u32;
                    let index = match mode {
                        IndexMode::Expanded => next,
                        IndexMode::Deduplicated => *seen.entry(c.key()).or_insert(next),
                    };
                    if index == next {
                        out.positions.push(c.position);
                        out.normals.push(c.normal);
                        if let Some(uvs) = out.uvs.as_mut() {
                            uvs.push(c.uv);
                        }
                    }
                    out.indices.push(index);
                }
            }
        }
        log::debug!(
            "indexed {} faces into {} vertices and {} corners",
            self.faces.len(),
            out.vertex_count(),
            out.corner_count()
        );
        Ok(out)
    }

    fn corner(&self, face_index: usize, corner: usize, with_uvs: bool) -> Result<Corner> {
        let face = &self.faces[face_index];
        let vertex = face.vertices()[corner];
        let lookup = |list: &[Vector3], index: u32| {
            list.get(index as usize)
                .copied()
                .ok_or(MeshError::IndexOutOfRange {
                    face: face_index,
                    index,
                    count: list.len(),
                })
        };

        let position = lookup(&self.positions, vertex)?;
        let normal = if !self.vertex_normals.is_empty() {
            lookup(&self.vertex_normals, vertex)?
        } else if !face.normal_indices().is_empty() {
            lookup(&self.normals, face.normal_indices()[corner])?
        } else {
            self.face_normals
                .get(face_index)
                .copied()
                .unwrap_or_else(Vector3::zero)
        };
        let uv = if with_uvs {
            let index = face.uv_indices()[corner];
            self.uvs
                .get(index as usize)
                .copied()
                .ok_or(MeshError::IndexOutOfRange {
                    face: face_index,
                    index,
                    count: self.uvs.len(),
                })?
        } else {
            Vector2::zero()
        };
        Ok(Corner {
            position,
            normal,
            uv,
        })
    }
}
