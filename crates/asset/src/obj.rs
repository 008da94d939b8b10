//! Minimal OBJ parser supporting positions, normals and texture coordinates.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, Read},
    path::Path,
    str::SplitWhitespace,
};

use corelib::{geometry, vec2, vec3};

use crate::{
    error::{ObjError, ObjResult, ParseError},
    face::FaceRecord,
    mesh::Mesh,
    options::ObjOptions,
    raw::RawObj,
    resolve::resolve,
};

/// Load an OBJ mesh from a file path with default options.
pub fn load_obj_from_path(path: impl AsRef<Path>) -> ObjResult<Mesh> {
    load_obj_from_path_with(path, &ObjOptions::default())
}

pub fn load_obj_from_path_with(path: impl AsRef<Path>, options: &ObjOptions) -> ObjResult<Mesh> {
    let path = path.as_ref();
    log::info!("Loading OBJ file {}", path.display());
    let file = File::open(path).map_err(|source| ObjError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    load_obj_from_reader_with(BufReader::new(file), options)
}

/// Load an OBJ mesh from a [`BufRead`] implementation.
pub fn load_obj_from_reader<R: BufRead>(reader: R) -> ObjResult<Mesh> {
    load_obj_from_reader_with(reader, &ObjOptions::default())
}

pub fn load_obj_from_reader_with<R: BufRead>(reader: R, options: &ObjOptions) -> ObjResult<Mesh> {
    let raw = parse_obj(reader, options)?;
    let mesh = resolve(raw)?;
    log::info!(
        "Loading done: {} corners, {} triangles",
        mesh.len(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// Convenience helper to parse an OBJ string literal.
pub fn load_obj_from_str(contents: &str) -> ObjResult<Mesh> {
    load_obj_from_reader(io::Cursor::new(contents))
}

pub fn load_obj_from_str_with(contents: &str, options: &ObjOptions) -> ObjResult<Mesh> {
    load_obj_from_reader_with(io::Cursor::new(contents), options)
}

/// Scans the whole source and returns the normalized raw arrays.
///
/// Stops at the first error; nothing collected so far is returned.
pub fn parse_obj<R: BufRead>(mut reader: R, options: &ObjOptions) -> ObjResult<RawObj> {
    let mut raw = RawObj::new();
    let mut buf: Vec<u8> = Vec::new();
    // Room for the longest allowed line plus "\r\n".
    let limit = (options.max_line_len as u64).saturating_add(2);
    let mut mirrored_faces = 0usize;

    for line_no in 1.. {
        buf.clear();
        let read = Read::by_ref(&mut reader)
            .take(limit)
            .read_until(b'\n', &mut buf)
            .map_err(|source| ObjError::ReadFailed {
                line: line_no,
                source,
            })?;
        if read == 0 {
            break;
        }

        let mut content = buf.as_slice();
        if let Some(rest) = content.strip_suffix(b"\n") {
            content = rest;
        }
        if let Some(rest) = content.strip_suffix(b"\r") {
            content = rest;
        }
        if content.len() > options.max_line_len {
            return Err(ParseError::LineTooLong {
                line: line_no,
                max: options.max_line_len,
            }
            .into());
        }

        let line = std::str::from_utf8(content).map_err(|e| ObjError::ReadFailed {
            line: line_no,
            source: io::Error::new(io::ErrorKind::InvalidData, e),
        })?;
        if scan_line(&mut raw, line, line_no, options)? {
            mirrored_faces += 1;
        }
    }

    log::debug!(
        "OBJ scan: positions={}, uvs={}, normals={}, face entries={}",
        raw.positions.len(),
        raw.uvs.len(),
        raw.normals.len(),
        raw.faces.len()
    );
    let fallbacks = raw.normalize();
    if mirrored_faces > 0 {
        log::warn!(
            "{} position-only faces reuse their position index for uv/normal",
            mirrored_faces
        );
    }
    if fallbacks.synthetic_uv {
        log::warn!("OBJ faces carry no uv references, using a single (0,0) uv");
    }
    if fallbacks.flat_normals > 0 {
        log::debug!(
            "OBJ has no normals, synthesized {} flat normals",
            fallbacks.flat_normals
        );
    }
    Ok(raw)
}

/// Returns `true` when a face took its uv/normal index from the position index.
fn scan_line(
    raw: &mut RawObj,
    line: &str,
    line_no: usize,
    options: &ObjOptions,
) -> Result<bool, ParseError> {
    let mut parts = line.split_whitespace();
    let Some(tag) = parts.next() else {
        return Ok(false);
    };

    match tag {
        "v" => {
            let [x, y, z] = parse_floats::<3>(&mut parts)
                .ok_or(ParseError::MalformedVertex { line: line_no })?;
            raw.positions.push(vec3(x, y, z));
        }
        "vt" => {
            let [u, v] =
                parse_floats::<2>(&mut parts).ok_or(ParseError::MalformedUv { line: line_no })?;
            let uv = vec2(u, v);
            raw.uvs
                .push(if options.flip_v { geometry::flip_v(uv) } else { uv });
        }
        "vn" => {
            let [nx, ny, nz] = parse_floats::<3>(&mut parts)
                .ok_or(ParseError::MalformedNormal { line: line_no })?;
            raw.normals.push(vec3(nx, ny, nz));
        }
        "f" => {
            let record = FaceRecord::probe(parts)
                .ok_or(ParseError::UnsupportedFaceFormat { line: line_no })?;
            let (uvs_seen, normals_seen) = (!raw.uvs.is_empty(), !raw.normals.is_empty());
            raw.faces.reserve(record.corner_count());
            record.emit(&mut raw.faces, uvs_seen, normals_seen);
            return Ok(record.mirrors_attributes(uvs_seen, normals_seen));
        }
        _ => {
            // Comments and directives we don't use (o/g/s/usemtl/mtllib/etc.)
        }
    }
    Ok(false)
}

/// Reads the next `N` tokens as floats. Trailing tokens are left untouched.
fn parse_floats<const N: usize>(parts: &mut SplitWhitespace<'_>) -> Option<[f32; N]> {
    let mut out = [0.0; N];
    for slot in &mut out {
        *slot = parts.next()?.parse().ok()?;
    }
    Some(out)
}
