use std::collections::HashMap;

use cgmath::Zero;

use crate::{
    config::LoadOptions,
    error::{MeshError, Result},
    geometry::{Triangle, Vector2, Vector3},
    TriangleMesh,
};

/// A polygon described by indices into the attribute lists of its [`Mesh`].
///
/// Every face has an ordered list of vertex indices (3 for a triangle). Formats that index
/// texture coordinates and normals separately from positions also carry parallel uv and normal
/// index lists; when present these have one entry per corner.
///
/// ```text
///    v2
///    | \
///    |  \        vertices: [v0, v1, v2]
///    |   \       uvs:      [t0, t1, t2]   (optional)
///    |    \      normals:  [n0, n1, n2]   (optional)
///    v0---v1
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Face {
    vertices: Vec<u32>,
    uvs: Vec<u32>,
    normals: Vec<u32>,
}

impl Face {
    pub fn new(vertices: Vec<u32>) -> Self {
        Self {
            vertices,
            uvs: Vec::new(),
            normals: Vec::new(),
        }
    }

    /// Creates a face with per-corner uv and normal indices.
    ///
    /// Either attribute list may be empty; a non-empty list must have one entry per vertex.
    pub fn with_attributes(vertices: Vec<u32>, uvs: Vec<u32>, normals: Vec<u32>) -> Result<Self> {
        if !uvs.is_empty() && uvs.len() != vertices.len() {
            return Err(MeshError::InvalidFace(format!(
                "{} uv indices for {} corners",
                uvs.len(),
                vertices.len()
            )));
        }
        if !normals.is_empty() && normals.len() != vertices.len() {
            return Err(MeshError::InvalidFace(format!(
                "{} normal indices for {} corners",
                normals.len(),
                vertices.len()
            )));
        }
        Ok(Self {
            vertices,
            uvs,
            normals,
        })
    }

    pub fn corner_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertices(&self) -> &[u32] {
        &self.vertices
    }

    pub fn uv_indices(&self) -> &[u32] {
        &self.uvs
    }

    pub fn normal_indices(&self) -> &[u32] {
        &self.normals
    }
}

/// An undirected edge between two vertices, shared by up to two faces.
///
/// Two edges are equal when they join the same pair of vertices in either order. The adjacent
/// face slots do not take part in the comparison.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub vertices: [u32; 2],
    pub faces: [Option<u32>; 2],
}

impl Edge {
    pub fn new(a: u32, b: u32) -> Self {
        Self {
            vertices: [a, b],
            faces: [None, None],
        }
    }

    fn key(&self) -> (u32, u32) {
        let [a, b] = self.vertices;
        (a.min(b), a.max(b))
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Edge {}

impl std::hash::Hash for Edge {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key().hash(state)
    }
}

/// An indexed polygon mesh.
///
/// Positions, face normals and vertex normals live in separate lists: `face_normals[i]` belongs
/// to `faces[i]` while `vertex_normals[i]` belongs to `positions[i]`. `normals` holds the
/// normal literals read from the file (if any), which faces reference through their normal
/// indices.
#[derive(Debug, Clone)]
pub struct Mesh {
    /// Where the mesh came from, usually the file path.
    pub name: String,
    /// The format tag, ex: "OBJ" or the header token of an OFF file.
    pub format: String,
    pub positions: Vec<Vector3>,
    pub uvs: Vec<Vector2>,
    pub normals: Vec<Vector3>,
    pub face_normals: Vec<Vector3>,
    pub vertex_normals: Vec<Vector3>,
    pub faces: Vec<Face>,
    pub edges: Vec<Edge>,
    /// The centroid removed by the last call to `normalize`.
    pub centroid: Vector3,
    /// Edge count declared by the source file. Only OFF files carry one.
    pub declared_edge_count: usize,
    pub(crate) normals_stale: bool,
}

impl Mesh {
    pub fn new(name: impl Into<String>, format: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            format: format.into(),
            positions: Vec::new(),
            uvs: Vec::new(),
            normals: Vec::new(),
            face_normals: Vec::new(),
            vertex_normals: Vec::new(),
            faces: Vec::new(),
            edges: Vec::new(),
            centroid: Vector3::zero(),
            declared_edge_count: 0,
            normals_stale: false,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns the number of built edges, or the count declared by the file if edges were never
    /// built.
    pub fn edge_count(&self) -> usize {
        if self.edges.is_empty() {
            self.declared_edge_count
        } else {
            self.edges.len()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty() && self.faces.is_empty()
    }

    /// True once a transform has moved the positions out from under the computed normals.
    pub fn normals_stale(&self) -> bool {
        self.normals_stale
    }

    /// Looks up the position of corner `corner` of face `face`.
    pub(crate) fn corner_position(&self, face: usize, corner: usize) -> Result<Vector3> {
        let index = self.faces[face].vertices[corner];
        self.positions
            .get(index as usize)
            .copied()
            .ok_or(MeshError::IndexOutOfRange {
                face,
                index,
                count: self.positions.len(),
            })
    }

    /// Returns the triangle spanned by the first three corners of a face.
    ///
    /// Fails with `IndexOutOfRange` if there is no such face or a corner is outside `positions`.
    pub fn triangle(&self, face: usize) -> Result<Triangle> {
        let corners = self
            .faces
            .get(face)
            .ok_or(MeshError::IndexOutOfRange {
                face,
                index: u32::try_from(face).unwrap_or(u32::MAX),
                count: self.faces.len(),
            })?
            .corner_count();
        if corners < 3 {
            return Err(MeshError::InvalidFace(format!(
                "face {} has {} corners",
                face, corners
            )));
        }
        Ok(Triangle {
            p0: self.corner_position(face, 0)?,
            p1: self.corner_position(face, 1)?,
            p2: self.corner_position(face, 2)?,
        })
    }

    /// Iterates the leading triangle of every face, in face order.
    pub fn triangles(&self) -> Triangles<'_> {
        Triangles {
            mesh: self,
            next: 0,
        }
    }

    /// Runs the pipeline every loader applies after parsing: normalize, face normals, then
    /// vertex normals when requested.
    pub fn finalize(&mut self, options: &LoadOptions) -> Result<()> {
        if options.normalize {
            self.normalize()?;
        }
        self.compute_face_normals()?;
        if options.vertex_normals {
            self.compute_vertex_normals()?;
        }
        Ok(())
    }

    /// Populates `edges` from the face boundaries.
    ///
    /// Each face contributes the edges between consecutive corners, including the closing edge
    /// from the last corner back to the first. The first two faces found on an edge fill its
    /// face slots.
    pub fn build_edges(&mut self) {
        let mut lookup = HashMap::<Edge, usize>::new();
        let mut edges = Vec::<Edge>::new();
        for (face_index, face) in self.faces.iter().enumerate() {
            let n = face.vertices.len();
            for i in 0..n {
                let edge = Edge::new(face.vertices[i], face.vertices[(i + 1) % n]);
                let slot = *lookup.entry(edge).or_insert_with(|| {
                    edges.push(edge);
                    edges.len() - 1
                });
                let faces = &mut edges[slot].faces;
                if faces[0].is_none() {
                    faces[0] = Some(face_index as u32);
                } else if faces[1].is_none() && faces[0] != Some(face_index as u32) {
                    faces[1] = Some(face_index as u32);
                } else {
                    log::trace!("edge {:?} has more than two faces", edges[slot].vertices);
                }
            }
        }
        log::debug!("built {} edges from {} faces", edges.len(), self.faces.len());
        self.edges = edges;
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new("", "")
    }
}

pub struct Triangles<'a> {
    mesh: &'a Mesh,
    next: usize,
}

impl<'a> Iterator for Triangles<'a> {
    type Item = Result<Triangle>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next < self.mesh.faces.len() {
            let t = self.mesh.triangle(self.next);
            self.next += 1;
            Some(t)
        } else {
            None
        }
    }
}

impl TriangleMesh for Mesh {
    /// Every triangle gets its own three vertices; nothing is shared between faces.
    fn from_triangles(triangles: Vec<Triangle>) -> Self {
        let mut mesh = Mesh::new("", "");
        mesh.positions.reserve(triangles.len() * 3);
        for (i, t) in triangles.iter().enumerate() {
            mesh.positions.extend_from_slice(&[t.p0, t.p1, t.p2]);
            let base = 3 * i as u32;
            mesh.faces.push(Face::new(vec![base, base + 1, base + 2]));
        }
        mesh
    }

    fn triangle_count(&self) -> usize {
        self.faces
            .iter()
            .map(|f| f.corner_count().saturating_sub(2))
            .sum()
    }
}
