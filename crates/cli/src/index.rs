use lathe_mesh::{IndexMode, LoadOptions};

use crate::{args::IndexArgs, load::load_mesh};

pub fn index_command(args: IndexArgs) -> anyhow::Result<()> {
    let options = LoadOptions {
        vertex_normals: args.vertex_normals,
        ..LoadOptions::default()
    };
    let mode = if args.dedup {
        IndexMode::Deduplicated
    } else {
        IndexMode::Expanded
    };
    let mesh = load_mesh(&args.path, &options)?;
    let indexed = mesh.index(mode)?;
    println!("{} ({:?})", mesh.name, mode);
    println!("  vertices:  {}", indexed.vertex_count());
    println!("  corners:   {}", indexed.corner_count());
    println!("  triangles: {}", indexed.triangle_count());
    println!("  uvs:       {}", indexed.uvs.is_some());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lathe_test_data::OBJ_TEXTURED_QUAD;

    #[test]
    fn index_textured_quad() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quad.obj");
        std::fs::write(&path, OBJ_TEXTURED_QUAD.bytes).unwrap();
        index_command(IndexArgs {
            path,
            dedup: true,
            vertex_normals: false,
        })
        .unwrap();
    }

    #[test]
    fn missing_file() {
        assert!(index_command(IndexArgs {
            path: "missing.obj".into(),
            dedup: false,
            vertex_normals: false,
        })
        .is_err());
    }
}
