use std::io::{BufRead, BufReader};
use std::path::Path;

use lathe_mesh::{Face, LoadOptions, Mesh, MeshError, Result, Vector2, Vector3};

mod layout;

pub use layout::{Corner, CornerLayout};

/// A face statement, kept until the corner layout of the file is known.
struct PendingFace {
    line: usize,
    corners: Vec<String>,
}

/// Reads `N` floats from `tokens`. Any further tokens on the line are left unread.
fn parse_floats<const N: usize>(
    line: usize,
    keyword: &str,
    tokens: &mut std::str::SplitWhitespace<'_>,
) -> Result<[f32; N]> {
    let mut out = [0.0; N];
    for value in out.iter_mut() {
        let token = tokens.next().ok_or_else(|| {
            MeshError::malformed(line, format!("`{}` needs {} coordinates", keyword, N))
        })?;
        *value = token.parse::<f32>().map_err(|_| {
            MeshError::malformed(line, format!("`{}` is not a number", token))
        })?;
    }
    Ok(out)
}

/// Parses OBJ statements into a mesh without running the post-parse pipeline.
fn read_statements<T: BufRead>(f: &mut T) -> Result<Mesh> {
    let mut mesh = Mesh::new("", "OBJ");
    let mut pending = Vec::<PendingFace>::new();

    for (i, line) in f.lines().enumerate() {
        let number = i + 1;
        let line = line.map_err(|e| MeshError::read_line(number, e))?;
        // Everything after a '#' is a comment.
        let content = line.split('#').next().unwrap_or("");
        let mut tokens = content.split_whitespace();
        let Some(keyword) = tokens.next() else {
            continue;
        };
        match keyword {
            "v" => {
                let [x, y, z] = parse_floats::<3>(number, keyword, &mut tokens)?;
                mesh.positions.push(Vector3 { x, y, z });
            }
            "vt" => {
                let [x, y] = parse_floats::<2>(number, keyword, &mut tokens)?;
                mesh.uvs.push(Vector2 { x, y });
            }
            "vn" => {
                let [x, y, z] = parse_floats::<3>(number, keyword, &mut tokens)?;
                mesh.normals.push(Vector3 { x, y, z });
            }
            "f" => pending.push(PendingFace {
                line: number,
                corners: tokens.map(str::to_owned).collect(),
            }),
            _ => log::trace!("line {}: skipping `{}` statement", number, keyword),
        }
    }

    let layout = CornerLayout::new(!mesh.uvs.is_empty(), !mesh.normals.is_empty());
    log::debug!(
        "read {} vertices, {} uvs, {} normals and {} faces with {:?} corners",
        mesh.positions.len(),
        mesh.uvs.len(),
        mesh.normals.len(),
        pending.len(),
        layout
    );
    mesh.faces = pending
        .into_iter()
        .map(|face| build_face(layout, face))
        .collect::<Result<Vec<_>>>()?;
    Ok(mesh)
}

fn build_face(layout: CornerLayout, face: PendingFace) -> Result<Face> {
    if face.corners.len() != 3 {
        return Err(MeshError::malformed(
            face.line,
            format!("expected a triangle, found {} corners", face.corners.len()),
        ));
    }
    let mut vertices = Vec::with_capacity(3);
    let mut uvs = Vec::new();
    let mut normals = Vec::new();
    for token in &face.corners {
        let corner = layout.parse_corner(token).ok_or_else(|| {
            MeshError::malformed(
                face.line,
                format!("corner `{}` does not match `{}`", token, layout.syntax()),
            )
        })?;
        vertices.push(corner.vertex);
        uvs.extend(corner.uv);
        normals.extend(corner.normal);
    }
    Face::with_attributes(vertices, uvs, normals)
}

fn read_text<T: BufRead>(f: &mut T, options: &LoadOptions) -> Result<Mesh> {
    let mut mesh = read_statements(f)?;
    mesh.finalize(options)?;
    Ok(mesh)
}

/// Loads an OBJ file, then normalizes it and computes its normals as `options` request.
pub fn read_obj<P: AsRef<Path>>(p: P, options: &LoadOptions) -> Result<Mesh> {
    let path = p.as_ref();
    log::debug!("loading {}", path.display());
    let f = std::fs::File::open(path)?;
    let mut mesh = read_statements(&mut BufReader::new(f))?;
    mesh.name = path.to_string_lossy().into_owned();
    mesh.finalize(options)?;
    Ok(mesh)
}

pub fn parse_obj(data: &[u8], options: &LoadOptions) -> Result<Mesh> {
    let mut c = std::io::Cursor::new(data);
    read_text(&mut c, options)
}

pub trait ObjReader: BufRead {
    fn read_obj(&mut self, options: &LoadOptions) -> Result<Mesh>;
}

impl<T: BufRead> ObjReader for T {
    fn read_obj(&mut self, options: &LoadOptions) -> Result<Mesh> {
        read_text(self, options)
    }
}
