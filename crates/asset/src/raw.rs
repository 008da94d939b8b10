//! Raw attribute arrays as collected by the scanner.

use corelib::{Vec2, Vec3, geometry::flat_normal};

/// One corner reference of a face, 1-based.
///
/// `None` for `uv` or `normal` means the attribute was absent and the
/// position index stands in for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceIndex {
    pub position: u32,
    pub uv: Option<u32>,
    pub normal: Option<u32>,
}

impl FaceIndex {
    pub fn from_triple([position, uv, normal]: [u32; 3]) -> Self {
        Self {
            position,
            uv: Some(uv),
            normal: Some(normal),
        }
    }
}

/// Everything the scanner collected, in file order.
///
/// Entries `3k..3k+3` of `faces` form triangle `k`. Position-only polygons
/// are stored untriangulated, so a trailing group may be shorter than three.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawObj {
    pub positions: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub normals: Vec<Vec3>,
    pub faces: Vec<FaceIndex>,
}

/// Best-effort substitutions made by [`RawObj::normalize`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Fallbacks {
    /// Every face was pointed at one synthetic `(0,0)` uv.
    pub synthetic_uv: bool,
    /// Number of flat normals pushed, one per group of three face entries
    /// plus one zero normal for a trailing partial group.
    pub flat_normals: usize,
}

impl RawObj {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn triangle_count(&self) -> usize {
        self.faces.len() / 3
    }

    /// Fills in missing uvs and normals once the scan is complete.
    pub(crate) fn normalize(&mut self) -> Fallbacks {
        let mut fallbacks = Fallbacks::default();

        if self.uvs.len() < self.positions.len() {
            self.uvs.resize(self.positions.len(), Vec2::ZERO);
        }

        if self.faces.iter().all(|f| f.uv.is_none()) {
            self.uvs.push(Vec2::ZERO);
            let synthetic = one_based(self.uvs.len());
            for face in &mut self.faces {
                face.uv = Some(synthetic);
            }
            fallbacks.synthetic_uv = true;
        }

        if self.normals.is_empty() {
            self.synthesize_flat_normals();
            fallbacks.flat_normals = self.normals.len();
        }
        fallbacks
    }

    fn synthesize_flat_normals(&mut self) {
        let positions = &self.positions;
        let fetch = |index: u32| {
            (index as usize)
                .checked_sub(1)
                .and_then(|i| positions.get(i))
                .copied()
        };

        let mut groups = self.faces.chunks_exact_mut(3);
        for tri in &mut groups {
            // Out-of-range corners are reported by the resolver.
            let normal = match (fetch(tri[0].position), fetch(tri[1].position), fetch(tri[2].position)) {
                (Some(p1), Some(p2), Some(p3)) => flat_normal(p1, p2, p3),
                _ => Vec3::ZERO,
            };
            self.normals.push(normal);
            // Length after the push: the 1-based index of the new normal.
            let index = one_based(self.normals.len());
            for corner in tri {
                corner.normal = Some(index);
            }
        }

        // Leftover entries of an untriangulated polygon span no triangle.
        let rest = groups.into_remainder();
        if !rest.is_empty() {
            self.normals.push(Vec3::ZERO);
            let index = one_based(self.normals.len());
            for corner in rest {
                corner.normal = Some(index);
            }
        }
    }
}

/// Saturates so that an absurd length resolves as out of range instead of wrapping.
fn one_based(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use corelib::{vec2, vec3};

    fn corner(position: u32) -> FaceIndex {
        FaceIndex {
            position,
            uv: None,
            normal: None,
        }
    }

    #[test]
    fn pads_uvs_to_position_count() {
        let mut raw = RawObj {
            positions: vec![Vec3::ZERO; 3],
            uvs: vec![vec2(0.5, 0.5)],
            normals: vec![Vec3::Z],
            faces: vec![FaceIndex::from_triple([1, 1, 1]); 3],
        };
        raw.normalize();
        assert_eq!(raw.uvs, vec![vec2(0.5, 0.5), Vec2::ZERO, Vec2::ZERO]);
    }

    #[test]
    fn faces_without_uv_refs_point_at_synthetic_uv() {
        let mut raw = RawObj {
            positions: vec![Vec3::ZERO; 3],
            uvs: Vec::new(),
            normals: vec![Vec3::Z],
            faces: vec![corner(1), corner(2), corner(3)],
        };
        raw.normalize();
        assert_eq!(raw.uvs.len(), 4);
        assert!(raw.faces.iter().all(|f| f.uv == Some(4)));
    }

    #[test]
    fn synthesizes_one_normal_per_triangle() {
        let mut raw = RawObj {
            positions: vec![
                vec3(0.0, 0.0, 0.0),
                vec3(1.0, 0.0, 0.0),
                vec3(0.0, 1.0, 0.0),
                vec3(0.0, 0.0, 1.0),
            ],
            faces: vec![corner(1), corner(2), corner(3), corner(1), corner(2), corner(4)],
            ..RawObj::default()
        };
        raw.normalize();

        assert_eq!(raw.normals.len(), 2);
        assert_eq!(raw.normals[0], vec3(0.0, 0.0, 1.0));
        assert_eq!(raw.normals[1], vec3(0.0, -1.0, 0.0));
        let normal_refs: Vec<_> = raw.faces.iter().map(|f| f.normal).collect();
        assert_eq!(
            normal_refs,
            vec![Some(1), Some(1), Some(1), Some(2), Some(2), Some(2)]
        );
    }

    #[test]
    fn trailing_partial_group_gets_zero_normal() {
        let mut raw = RawObj {
            positions: vec![
                vec3(0.0, 0.0, 0.0),
                vec3(1.0, 0.0, 0.0),
                vec3(1.0, 1.0, 0.0),
                vec3(0.0, 1.0, 0.0),
            ],
            faces: vec![corner(1), corner(2), corner(3), corner(4)],
            ..RawObj::default()
        };
        let fallbacks = raw.normalize();

        assert_eq!(raw.normals, vec![vec3(0.0, 0.0, 1.0), Vec3::ZERO]);
        let normal_refs: Vec<_> = raw.faces.iter().map(|f| f.normal).collect();
        assert_eq!(normal_refs, vec![Some(1), Some(1), Some(1), Some(2)]);
        assert_eq!(
            fallbacks,
            Fallbacks {
                synthetic_uv: true,
                flat_normals: 2,
            }
        );
    }

    #[test]
    fn complete_files_need_no_fallbacks() {
        let mut raw = RawObj {
            positions: vec![Vec3::ZERO; 3],
            uvs: vec![Vec2::ZERO; 3],
            normals: vec![Vec3::Z],
            faces: vec![FaceIndex::from_triple([1, 1, 1]); 3],
        };
        assert_eq!(raw.normalize(), Fallbacks::default());
    }

    #[test]
    fn out_of_range_corner_gets_zero_normal() {
        let mut raw = RawObj {
            positions: vec![Vec3::ZERO, Vec3::X],
            faces: vec![corner(1), corner(2), corner(9)],
            ..RawObj::default()
        };
        raw.normalize();
        assert_eq!(raw.normals, vec![Vec3::ZERO]);
    }

    #[test]
    fn existing_normals_are_kept() {
        let mut raw = RawObj {
            positions: vec![Vec3::ZERO; 3],
            normals: vec![Vec3::Y],
            faces: vec![corner(1), corner(2), corner(3)],
            ..RawObj::default()
        };
        raw.normalize();
        assert_eq!(raw.normals, vec![Vec3::Y]);
        assert!(raw.faces.iter().all(|f| f.normal.is_none()));
    }
}
