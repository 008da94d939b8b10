//! CPU-side mesh representations produced by loaders.

use std::collections::HashMap;

use corelib::{Vec2, Vec3};

use crate::error::{ObjError, ObjResult};

/// Flat, non-indexed triangle mesh: element `i` of each sequence describes
/// the same triangle corner.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Mesh {
    pub positions: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub normals: Vec<Vec3>,
}

impl Mesh {
    pub fn with_capacity(corners: usize) -> Self {
        Self {
            positions: Vec::with_capacity(corners),
            uvs: Vec::with_capacity(corners),
            normals: Vec::with_capacity(corners),
        }
    }

    pub fn push(&mut self, position: Vec3, uv: Vec2, normal: Vec3) {
        self.positions.push(position);
        self.uvs.push(uv);
        self.normals.push(normal);
    }

    /// Number of triangle corners.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.len() / 3
    }

    /// Iterates `(position, uv, normal)` per corner.
    pub fn iter(&self) -> impl Iterator<Item = (Vec3, Vec2, Vec3)> + '_ {
        self.positions
            .iter()
            .zip(&self.uvs)
            .zip(&self.normals)
            .map(|((&p, &uv), &n)| (p, uv, n))
    }

    /// Builds an index buffer by merging corners with bitwise-identical
    /// attributes. Vertices keep the order of their first occurrence.
    pub fn to_indexed(&self) -> ObjResult<MeshData> {
        let mut unique: HashMap<[u32; 8], u32> = HashMap::new();
        let mut vertices: Vec<MeshVertex> = Vec::new();
        let mut indices: Vec<u32> = Vec::with_capacity(self.len());

        for (position, uv, normal) in self.iter() {
            let vertex = MeshVertex::new(position.to_array(), normal.to_array(), uv.to_array());
            let index = match unique.get(&vertex.key()) {
                Some(&idx) => idx,
                None => {
                    let idx = vertex_index(vertices.len())?;
                    vertices.push(vertex);
                    unique.insert(vertex.key(), idx);
                    idx
                }
            };
            indices.push(index);
        }

        Ok(MeshData::new(vertices, indices))
    }
}

fn vertex_index(len: usize) -> ObjResult<u32> {
    u32::try_from(len).map_err(|_| ObjError::TooManyVertices)
}

/// Vertex with position/normal/uv. Values are in object space.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MeshVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl MeshVertex {
    pub fn new(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            uv,
        }
    }

    fn key(&self) -> [u32; 8] {
        let [px, py, pz] = self.position.map(f32::to_bits);
        let [nx, ny, nz] = self.normal.map(f32::to_bits);
        let [u, v] = self.uv.map(f32::to_bits);
        [px, py, pz, nx, ny, nz, u, v]
    }
}

/// Indexed triangle mesh with tightly-packed vertices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<MeshVertex>,
    pub indices: Vec<u32>,
}

impl MeshData {
    pub fn new(vertices: Vec<MeshVertex>, indices: Vec<u32>) -> Self {
        Self { vertices, indices }
    }

    /// Returns `true` if both vertex and index buffers are non-empty.
    pub fn is_valid(&self) -> bool {
        !self.vertices.is_empty() && !self.indices.is_empty()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}
