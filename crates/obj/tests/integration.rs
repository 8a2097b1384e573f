use cgmath::InnerSpace;
use float_eq::assert_float_eq;
use lathe_mesh::{centroid, extent, IndexMode, LoadOptions, MeshError, Vector3};
use lathe_obj::{parse_obj, read_obj, ObjReader};
use lathe_test_data::{OBJ_CUBE, OBJ_PYRAMID, OBJ_TEXTURED_QUAD, OBJ_TRIANGLE};

#[test]
fn single_triangle_without_attributes() {
    let mesh = parse_obj(OBJ_TRIANGLE.bytes, &LoadOptions::default()).unwrap();

    // Faces are kept even though the file declares no `vt` or `vn`.
    assert_eq!(mesh.face_count(), OBJ_TRIANGLE.face_count);
    assert_eq!(mesh.vertex_count(), OBJ_TRIANGLE.vertex_count);
    assert_eq!(mesh.faces[0].vertices(), &[0, 1, 2]);

    let n = mesh.face_normals[0];
    assert_float_eq!(n.x, 0.0, abs <= 0.0001);
    assert_float_eq!(n.y, 0.0, abs <= 0.0001);
    assert_float_eq!(n.z, 1.0, abs <= 0.0001);

    let c = centroid(&mesh.positions).unwrap();
    assert_float_eq!(c.magnitude(), 0.0, abs <= 0.0001);
    assert_float_eq!(extent(&mesh.positions, c), 1.0, abs <= 0.0001);
    assert_float_eq!(mesh.centroid.x, 1.0 / 3.0, abs <= 0.0001);
    assert!(mesh.vertex_normals.is_empty());
}

#[test]
fn textured_quad_keeps_uvs_and_file_normals() {
    let mesh = parse_obj(OBJ_TEXTURED_QUAD.bytes, &LoadOptions::default()).unwrap();
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.uvs.len(), 4);
    assert_eq!(mesh.normals, vec![Vector3::new(0.0, 0.0, 1.0)]);
    assert_eq!(mesh.faces[1].uv_indices(), &[0, 2, 3]);
    assert_eq!(mesh.faces[1].normal_indices(), &[0, 0, 0]);
    assert_eq!(mesh.positions[0], Vector3::new(-1.0, -1.0, 0.0));

    let expanded = mesh.index(IndexMode::Expanded).unwrap();
    assert_eq!(expanded.vertex_count(), 6);
    assert_eq!(expanded.uv_floats().unwrap().len(), 12);

    let dedup = mesh.index(IndexMode::Deduplicated).unwrap();
    assert_eq!(dedup.vertex_count(), 4);
    assert_eq!(dedup.indices, vec![0, 1, 2, 0, 2, 3]);
    assert!(dedup.normals.iter().all(|n| *n == Vector3::new(0.0, 0.0, 1.0)));
}

#[test]
fn pyramid_with_uvs_only() {
    let mesh = parse_obj(OBJ_PYRAMID.bytes, &LoadOptions::with_vertex_normals()).unwrap();
    assert_eq!(mesh.face_count(), OBJ_PYRAMID.face_count);
    assert!(mesh.normals.is_empty());
    assert!(mesh.faces.iter().all(|f| f.normal_indices().is_empty()));

    assert_eq!(mesh.vertex_normals.len(), OBJ_PYRAMID.vertex_count);
    for n in mesh.vertex_normals.iter().chain(&mesh.face_normals) {
        assert_float_eq!(n.magnitude(), 1.0, abs <= 0.0001);
    }
    // The apex normal points straight up.
    let apex = mesh.vertex_normals[4];
    assert_float_eq!(apex.x, 0.0, abs <= 0.0001);
    assert_float_eq!(apex.y, 1.0, abs <= 0.0001);
    assert_float_eq!(apex.z, 0.0, abs <= 0.0001);
}

#[test]
fn cube_face_normals_match_file_normals() {
    let mesh = parse_obj(OBJ_CUBE.bytes, &LoadOptions::default()).unwrap();
    assert_eq!(mesh.face_count(), OBJ_CUBE.face_count);
    for (face, computed) in mesh.faces.iter().zip(&mesh.face_normals) {
        let literal = mesh.normals[face.normal_indices()[0] as usize];
        assert_float_eq!(computed.dot(literal), 1.0, abs <= 0.0001);
    }

    let dedup = mesh.index(IndexMode::Deduplicated).unwrap();
    assert_eq!(dedup.vertex_count(), 24);
    assert_eq!(dedup.triangle_count(), 12);
}

#[test]
fn vertex_normals_take_priority_when_indexing() {
    let mesh = parse_obj(OBJ_CUBE.bytes, &LoadOptions::with_vertex_normals()).unwrap();
    let dedup = mesh.index(IndexMode::Deduplicated).unwrap();
    assert_eq!(dedup.vertex_count(), 8);
}

#[test]
fn read_through_buf_reader() {
    let mut reader = std::io::BufReader::new(OBJ_TRIANGLE.bytes);
    let mesh = reader.read_obj(&LoadOptions::default()).unwrap();
    assert_eq!(mesh.face_count(), 1);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = read_obj("does/not/exist.obj", &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, MeshError::Io(_)));
}

#[test]
fn empty_file_is_degenerate() {
    let err = parse_obj(b"# nothing here\n", &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, MeshError::DegenerateMesh(_)));
}
