//! Alternate loader backed by `tobj`, for files the built-in parser rejects.
//! Only the first model of a file is used.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    error::{ObjError, ObjResult},
    mesh::{MeshData, MeshVertex},
};

/// Import the first model of an OBJ file as an indexed mesh.
pub fn import_path(path: impl AsRef<Path>) -> ObjResult<MeshData> {
    let path = path.as_ref();
    log::info!("Importing {} with tobj", path.display());
    let file = File::open(path).map_err(|source| ObjError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    import_reader(BufReader::new(file))
}

/// Import from a reader. Material libraries are not resolved.
pub fn import_reader<R: BufRead>(mut reader: R) -> ObjResult<MeshData> {
    let (models, _materials) = tobj::load_obj_buf(&mut reader, &load_options(), |_| {
        Ok((Vec::new(), Default::default()))
    })?;
    if models.len() > 1 {
        log::warn!("OBJ holds {} models, using the first one", models.len());
    }
    let model = models.into_iter().next().ok_or(ObjError::NoModels)?;
    Ok(mesh_data(model.mesh))
}

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        single_index: true,
        triangulate: true,
        ignore_points: true,
        ignore_lines: true,
        ..Default::default()
    }
}

fn mesh_data(mesh: tobj::Mesh) -> MeshData {
    let vertices = mesh
        .positions
        .chunks_exact(3)
        .enumerate()
        .map(|(i, p)| {
            let normal = mesh
                .normals
                .get(3 * i..3 * i + 3)
                .map_or([0.0; 3], |n| [n[0], n[1], n[2]]);
            let uv = mesh
                .texcoords
                .get(2 * i..2 * i + 2)
                .map_or([0.0; 2], |t| [t[0], t[1]]);
            MeshVertex::new([p[0], p[1], p[2]], normal, uv)
        })
        .collect();
    MeshData::new(vertices, mesh.indices)
}
