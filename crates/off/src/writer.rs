use std::io::{BufWriter, Write};
use std::path::Path;

use lathe_mesh::{Mesh, Result};

fn write_mesh<W: Write>(w: &mut W, mesh: &Mesh) -> Result<()> {
    writeln!(w, "OFF")?;
    writeln!(
        w,
        "{} {} {}",
        mesh.vertex_count(),
        mesh.face_count(),
        mesh.edge_count()
    )?;
    for p in &mesh.positions {
        writeln!(w, "{} {} {}", p.x, p.y, p.z)?;
    }
    for face in &mesh.faces {
        write!(w, "{}", face.corner_count())?;
        for i in face.vertices() {
            write!(w, " {}", i)?;
        }
        writeln!(w)?;
    }
    w.flush()?;
    Ok(())
}

/// Writes the positions and faces of `mesh` as an OFF file. Normals and uvs are dropped.
pub fn write_off<P: AsRef<Path>>(p: P, mesh: &Mesh) -> Result<()> {
    let path = p.as_ref();
    log::debug!(
        "writing {} vertices and {} faces to {}",
        mesh.vertex_count(),
        mesh.face_count(),
        path.display()
    );
    let f = std::fs::File::create(path)?;
    write_mesh(&mut BufWriter::new(f), mesh)
}

pub trait OffWriter: Write {
    fn write_off(&mut self, mesh: &Mesh) -> Result<()>;
}

impl<T: Write> OffWriter for T {
    fn write_off(&mut self, mesh: &Mesh) -> Result<()> {
        write_mesh(self, mesh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lathe_mesh::{Face, Vector3};

    #[test]
    fn writes_header_vertices_and_faces() {
        let mut mesh = Mesh::new("quad", "OFF");
        mesh.positions = vec![
            Vector3::new(0.0, 0.0, 0.0),
            Vector3::new(1.5, 0.0, 0.0),
            Vector3::new(1.5, -2.0, 0.0),
            Vector3::new(0.0, -2.0, 0.25),
        ];
        mesh.faces = vec![Face::new(vec![0, 1, 2, 3])];
        mesh.declared_edge_count = 4;

        let mut out = Vec::new();
        out.write_off(&mesh).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "OFF\n4 1 4\n0 0 0\n1.5 0 0\n1.5 -2 0\n0 -2 0.25\n4 0 1 2 3\n"
        );
    }

    #[test]
    fn empty_mesh() {
        let mut out = Vec::new();
        out.write_off(&Mesh::default()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "OFF\n0 0 0\n");
    }
}
