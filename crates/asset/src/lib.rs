//! Model loading: a small OBJ parser producing flat, render-ready attribute
//! arrays, plus optional indexing and a `tobj`-backed alternate importer.

pub mod error;
pub mod face;
#[cfg(feature = "tobj")]
pub mod import;
pub mod mesh;
pub mod obj;
pub mod options;
pub mod raw;
pub mod resolve;

pub use error::{Attribute, ObjError, ObjResult, ParseError, ResolveError};
pub use mesh::{Mesh, MeshData, MeshVertex};
pub use obj::{
    load_obj_from_path, load_obj_from_path_with, load_obj_from_reader, load_obj_from_reader_with,
    load_obj_from_str, load_obj_from_str_with, parse_obj,
};
pub use options::ObjOptions;
pub use raw::{FaceIndex, Fallbacks, RawObj};
pub use resolve::resolve;
