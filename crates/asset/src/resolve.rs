//! Flattens raw arrays into per-corner attribute sequences.

use crate::{
    error::{Attribute, ResolveError},
    mesh::Mesh,
    raw::RawObj,
};

/// Looks up every face corner in the raw arrays.
///
/// Missing uv/normal references fall back to the position index. Any index
/// of 0 or past the end of its array fails the whole operation.
pub fn resolve(raw: RawObj) -> Result<Mesh, ResolveError> {
    let RawObj {
        positions,
        uvs,
        normals,
        faces,
    } = raw;

    let mut mesh = Mesh::with_capacity(faces.len());
    for (entry, face) in faces.iter().enumerate() {
        let position = lookup(&positions, face.position, Attribute::Position, entry)?;
        let uv = lookup(&uvs, face.uv.unwrap_or(face.position), Attribute::Uv, entry)?;
        let normal = lookup(
            &normals,
            face.normal.unwrap_or(face.position),
            Attribute::Normal,
            entry,
        )?;
        mesh.push(position, uv, normal);
    }
    Ok(mesh)
}

fn lookup<T: Copy>(
    values: &[T],
    index: u32,
    attribute: Attribute,
    entry: usize,
) -> Result<T, ResolveError> {
    (index as usize)
        .checked_sub(1)
        .and_then(|i| values.get(i))
        .copied()
        .ok_or(ResolveError::IndexOutOfRange {
            attribute,
            index,
            len: values.len(),
            entry,
        })
}
