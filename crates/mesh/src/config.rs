/// Controls the post-parse pipeline shared by every loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Derive a smoothed normal for every vertex in addition to the face normals.
    pub vertex_normals: bool,

    /// Center the mesh on its centroid and rescale it so the largest deviation along any axis
    /// is 1. Disabling this keeps positions exactly as they appear in the file.
    pub normalize: bool,
}

impl LoadOptions {
    pub fn with_vertex_normals() -> Self {
        Self {
            vertex_normals: true,
            ..Self::default()
        }
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            vertex_normals: false,
            normalize: true,
        }
    }
}
