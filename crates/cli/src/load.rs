use std::path::Path;

use anyhow::{bail, Context};
use lathe_mesh::{LoadOptions, Mesh};

/// Loads an OBJ or OFF file, picking the reader from the file extension.
pub fn load_mesh(path: &Path, options: &LoadOptions) -> anyhow::Result<Mesh> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let mesh = match extension.as_deref() {
        Some("obj") => lathe_obj::read_obj(path, options),
        Some("off") => lathe_off::read_off(path, options),
        _ => bail!("{}: unsupported file type, expected .obj or .off", path.display()),
    }
    .with_context(|| format!("failed to load {}", path.display()))?;
    log::info!(
        "loaded {} ({} vertices, {} faces)",
        mesh.name,
        mesh.vertex_count(),
        mesh.face_count()
    );
    Ok(mesh)
}
