//! objinfo: load a model and log what the loader produced.
//!
//! Usage: objinfo <path> [--flip-v] [--max-line-len=N] [--importer=builtin|tobj] [--indexed]

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use asset::{MeshData, ObjOptions};
use corelib::{Vec3, geometry};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Importer {
    Builtin,
    Tobj,
}

#[derive(Debug)]
struct Args {
    path: PathBuf,
    importer: Importer,
    options: ObjOptions,
    indexed: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Args> {
    let mut path: Option<PathBuf> = None;
    let mut importer = Importer::Builtin;
    let mut options = ObjOptions::default();
    let mut indexed = false;

    for arg in args {
        if arg == "--flip-v" {
            options = options.with_flip_v(true);
        } else if arg == "--indexed" {
            indexed = true;
        } else if let Some(v) = arg.strip_prefix("--max-line-len=") {
            let len = v
                .parse::<usize>()
                .with_context(|| format!("Invalid --max-line-len value '{}'", v))?;
            options = options.with_max_line_len(len);
        } else if let Some(v) = arg.strip_prefix("--importer=") {
            importer = match v.to_ascii_lowercase().as_str() {
                "builtin" | "obj" => Importer::Builtin,
                "tobj" => Importer::Tobj,
                other => {
                    log::warn!("Unknown importer '{}', falling back to builtin.", other);
                    Importer::Builtin
                }
            };
        } else if arg.starts_with("--") {
            log::warn!("Ignoring unknown flag '{}'", arg);
        } else if path.is_none() {
            path = Some(PathBuf::from(arg));
        } else {
            bail!("Unexpected extra argument '{}'", arg);
        }
    }

    let Some(path) = path else {
        bail!("Usage: objinfo <path> [--flip-v] [--max-line-len=N] [--importer=builtin|tobj] [--indexed]");
    };
    Ok(Args {
        path,
        importer,
        options,
        indexed,
    })
}

fn log_bounds(positions: &[Vec3]) {
    match geometry::bounds(positions) {
        Some((lo, hi)) => log::info!("Bounds: min={:?} max={:?}", lo, hi),
        None => log::info!("Bounds: empty"),
    }
}

fn log_indexed(data: &MeshData) {
    log::info!(
        "Indexed: {} unique vertices, {} indices, {} triangles",
        data.vertices.len(),
        data.indices.len(),
        data.triangle_count()
    );
}

fn run_builtin(args: &Args) -> Result<()> {
    let mesh = asset::load_obj_from_path_with(&args.path, &args.options)
        .with_context(|| format!("Failed to load {}", args.path.display()))?;
    log::info!(
        "Mesh: {} corners, {} triangles",
        mesh.len(),
        mesh.triangle_count()
    );
    log_bounds(&mesh.positions);
    if args.indexed {
        let data = mesh
            .to_indexed()
            .with_context(|| format!("Failed to index {}", args.path.display()))?;
        log_indexed(&data);
    }
    Ok(())
}

#[cfg(feature = "tobj")]
fn run_tobj(args: &Args) -> Result<()> {
    let data = asset::import::import_path(&args.path)
        .with_context(|| format!("Failed to import {}", args.path.display()))?;
    let positions: Vec<Vec3> = data
        .vertices
        .iter()
        .map(|v| Vec3::from_array(v.position))
        .collect();
    log_bounds(&positions);
    log_indexed(&data);
    Ok(())
}

#[cfg(not(feature = "tobj"))]
fn run_tobj(_args: &Args) -> Result<()> {
    bail!("objinfo was built without the 'tobj' feature")
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args(std::env::args().skip(1))?;
    log::info!(
        "objinfo: path={}, importer={:?}, flip_v={}, max_line_len={}",
        args.path.display(),
        args.importer,
        args.options.flip_v,
        args.options.max_line_len
    );

    match args.importer {
        Importer::Builtin => run_builtin(&args)?,
        Importer::Tobj => run_tobj(&args)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults() {
        let a = args(&["model.obj"]).unwrap();
        assert_eq!(a.path, PathBuf::from("model.obj"));
        assert_eq!(a.importer, Importer::Builtin);
        assert_eq!(a.options, ObjOptions::default());
        assert!(!a.indexed);
    }

    #[test]
    fn flags() {
        let a = args(&[
            "--flip-v",
            "--max-line-len=128",
            "--importer=TOBJ",
            "--indexed",
            "m.obj",
        ])
        .unwrap();
        assert!(a.options.flip_v);
        assert_eq!(a.options.max_line_len, 128);
        assert_eq!(a.importer, Importer::Tobj);
        assert!(a.indexed);
    }

    #[test]
    fn rejects_missing_path_and_bad_numbers() {
        assert!(args(&[]).is_err());
        assert!(args(&["m.obj", "--max-line-len=big"]).is_err());
        assert!(args(&["a.obj", "b.obj"]).is_err());
    }
}
