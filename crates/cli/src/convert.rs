use anyhow::Context;
use lathe_mesh::{LoadOptions, Mesh, Vector3};

use crate::{args::ConvertArgs, load::load_mesh};

fn vector(values: &[f32]) -> Vector3 {
    Vector3::new(values[0], values[1], values[2])
}

/// Applies the scale, rotation and translation given on the command line, in that order.
pub fn apply_transforms(mesh: &mut Mesh, args: &ConvertArgs) -> anyhow::Result<()> {
    if let Some(scale) = &args.scale {
        mesh.scale(vector(scale));
    }
    if let Some(rotate) = &args.rotate {
        mesh.rotate(rotate[0].to_radians(), vector(&rotate[1..]))
            .context("invalid rotation")?;
    }
    if let Some(translate) = &args.translate {
        mesh.translate(vector(translate));
    }
    if mesh.normals_stale() {
        mesh.recompute_normals()?;
    }
    Ok(())
}

pub fn convert_command(args: ConvertArgs) -> anyhow::Result<()> {
    let options = LoadOptions {
        normalize: !args.raw,
        ..LoadOptions::default()
    };
    let mut mesh = load_mesh(&args.input, &options)?;
    apply_transforms(&mut mesh, &args)?;
    lathe_off::write_off(&args.output, &mesh)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    log::info!("wrote {}", args.output.display());
    Ok(())
}
