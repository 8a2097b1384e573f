pub struct TestModel {
    pub bytes: &'static [u8],
    pub vertex_count: usize,
    pub face_count: usize,
}

/// A single triangle with no texture coordinates or normals.
pub const OBJ_TRIANGLE: TestModel = TestModel {
    bytes: include_bytes!("../../../res/triangle/triangle.obj"),
    vertex_count: 3,
    face_count: 1,
};

/// Two triangles with `v/vt/vn` corners.
pub const OBJ_TEXTURED_QUAD: TestModel = TestModel {
    bytes: include_bytes!("../../../res/quad/quad-textured.obj"),
    vertex_count: 4,
    face_count: 2,
};

/// A square pyramid with `v/vt` corners.
pub const OBJ_PYRAMID: TestModel = TestModel {
    bytes: include_bytes!("../../../res/pyramid/pyramid-uv.obj"),
    vertex_count: 5,
    face_count: 6,
};

/// A 20mm cube with `v//vn` corners.
pub const OBJ_CUBE: TestModel = TestModel {
    bytes: include_bytes!("../../../res/cube/cube.obj"),
    vertex_count: 8,
    face_count: 12,
};

/// The same cube as `OBJ_CUBE`, described by quads.
pub const OFF_CUBE: TestModel = TestModel {
    bytes: include_bytes!("../../../res/cube/cube.off"),
    vertex_count: 8,
    face_count: 6,
};

/// A regular tetrahedron with per-face colors.
pub const OFF_TETRAHEDRON: TestModel = TestModel {
    bytes: include_bytes!("../../../res/tetrahedron/tetrahedron.off"),
    vertex_count: 4,
    face_count: 4,
};
