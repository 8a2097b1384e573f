use std::fmt;

use lathe_mesh::{centroid, extent, LoadOptions, Mesh, Vector3};

use crate::{args::InfoArgs, load::load_mesh};

/// What `lathe info` prints about a mesh.
#[derive(Debug)]
pub struct Summary {
    pub name: String,
    pub format: String,
    pub vertices: usize,
    pub faces: usize,
    pub triangles: usize,
    pub edges: usize,
    pub centroid: Vector3,
    pub extent: f32,
    pub vertex_normals: usize,
}

impl Summary {
    pub fn of(mesh: &Mesh) -> Self {
        // An empty mesh has no centroid; report the origin.
        let center = centroid(&mesh.positions).unwrap_or(Vector3::new(0.0, 0.0, 0.0));
        Self {
            name: mesh.name.clone(),
            format: mesh.format.clone(),
            vertices: mesh.vertex_count(),
            faces: mesh.face_count(),
            triangles: lathe_mesh::TriangleMesh::triangle_count(mesh),
            edges: mesh.edge_count(),
            centroid: center,
            extent: extent(&mesh.positions, center),
            vertex_normals: mesh.vertex_normals.len(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.name, self.format)?;
        writeln!(f, "  vertices:       {}", self.vertices)?;
        writeln!(f, "  faces:          {}", self.faces)?;
        writeln!(f, "  triangles:      {}", self.triangles)?;
        writeln!(f, "  edges:          {}", self.edges)?;
        writeln!(f, "  vertex normals: {}", self.vertex_normals)?;
        writeln!(
            f,
            "  centroid:       {} {} {}",
            self.centroid.x, self.centroid.y, self.centroid.z
        )?;
        write!(f, "  extent:         {}", self.extent)
    }
}

pub fn info_command(args: InfoArgs) -> anyhow::Result<()> {
    let options = LoadOptions {
        vertex_normals: args.vertex_normals,
        normalize: !args.raw,
    };
    let mut mesh = load_mesh(&args.path, &options)?;
    if args.edges {
        mesh.build_edges();
    }
    println!("{}", Summary::of(&mesh));
    Ok(())
}
