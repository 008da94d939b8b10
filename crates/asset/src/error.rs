//! Error taxonomy for model loading.

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// Top-level failure of a load operation. No partial mesh is ever returned.
#[derive(Debug, Error)]
pub enum ObjError {
    #[error("failed to open OBJ file '{}'", path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to read OBJ source at line {line}")]
    ReadFailed {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("too many vertices to index (>{})", u32::MAX)]
    TooManyVertices,

    #[cfg(feature = "tobj")]
    #[error("importer failed: {0}")]
    Import(#[from] tobj::LoadError),

    #[cfg(feature = "tobj")]
    #[error("importer found no models")]
    NoModels,
}

/// Structural errors found while scanning. Line numbers are 1-based.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed vertex position on line {line}")]
    MalformedVertex { line: usize },

    #[error("malformed texture coordinate on line {line}")]
    MalformedUv { line: usize },

    #[error("malformed vertex normal on line {line}")]
    MalformedNormal { line: usize },

    #[error("unsupported face format on line {line}: try exporting with other options")]
    UnsupportedFaceFormat { line: usize },

    #[error("line {line} exceeds the maximum length of {max} bytes")]
    LineTooLong { line: usize, max: usize },
}

/// Which raw array a face index refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attribute {
    Position,
    Uv,
    Normal,
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Attribute::Position => "position",
            Attribute::Uv => "uv",
            Attribute::Normal => "normal",
        })
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    /// `index` is the 1-based value from the face list, `entry` its position in that list.
    #[error("{attribute} index {index} out of range (len={len}) at face entry {entry}")]
    IndexOutOfRange {
        attribute: Attribute,
        index: u32,
        len: usize,
        entry: usize,
    },
}

pub type ObjResult<T> = Result<T, ObjError>;
