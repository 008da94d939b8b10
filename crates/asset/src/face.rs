//! Face record classification.
//!
//! A face line is probed once and classified into one of the supported
//! encodings before anything is appended to the face list.

use crate::raw::FaceIndex;

/// `v/vt/vn`, all 1-based.
pub type IndexTriple = [u32; 3];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FaceRecord {
    /// Exactly four `v/vt/vn` references.
    QuadIndexed([IndexTriple; 4]),
    /// Exactly three `v/vt/vn` references.
    TriIndexed([IndexTriple; 3]),
    /// Three or more bare position indices.
    PositionOnly(Vec<u32>),
}

impl FaceRecord {
    /// Classifies the tokens following the `f` header. `None` means the
    /// record matches none of the supported encodings.
    pub fn probe<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Option<Self> {
        let tokens: Vec<&str> = tokens.into_iter().collect();

        let triples: Option<Vec<IndexTriple>> = tokens.iter().map(|t| parse_triple(t)).collect();
        if let Some(triples) = triples {
            match *triples.as_slice() {
                [a, b, c, d] => return Some(FaceRecord::QuadIndexed([a, b, c, d])),
                [a, b, c] => return Some(FaceRecord::TriIndexed([a, b, c])),
                _ => {}
            }
        }

        if tokens.len() < 3 {
            return None;
        }
        tokens
            .iter()
            .map(|t| t.parse::<u32>().ok())
            .collect::<Option<Vec<_>>>()
            .map(FaceRecord::PositionOnly)
    }

    /// Appends the record to the face list.
    ///
    /// Quads are split into four triangles, each leaving out one corner and
    /// keeping the other three in their original order. Position-only
    /// records append one entry per index, untriangulated; their uv/normal
    /// index mirrors the position index when the file declared that
    /// attribute before this face.
    pub fn emit(&self, faces: &mut Vec<FaceIndex>, uvs_seen: bool, normals_seen: bool) {
        match self {
            FaceRecord::QuadIndexed(corners) => {
                for skip in 0..4 {
                    faces.extend(
                        corners
                            .iter()
                            .enumerate()
                            .filter(|&(i, _)| i != skip)
                            .map(|(_, &t)| FaceIndex::from_triple(t)),
                    );
                }
            }
            FaceRecord::TriIndexed(corners) => {
                faces.extend(corners.iter().map(|&t| FaceIndex::from_triple(t)));
            }
            FaceRecord::PositionOnly(indices) => {
                let corner = |p: u32| FaceIndex {
                    position: p,
                    uv: uvs_seen.then_some(p),
                    normal: normals_seen.then_some(p),
                };
                faces.extend(indices.iter().map(|&p| corner(p)));
            }
        }
    }

    /// Whether [`emit`](Self::emit) would derive a uv or normal index from
    /// the position index.
    pub fn mirrors_attributes(&self, uvs_seen: bool, normals_seen: bool) -> bool {
        matches!(self, FaceRecord::PositionOnly(_)) && (uvs_seen || normals_seen)
    }

    /// Number of face entries [`emit`](Self::emit) appends.
    pub fn corner_count(&self) -> usize {
        match self {
            FaceRecord::QuadIndexed(_) => 12,
            FaceRecord::TriIndexed(_) => 3,
            FaceRecord::PositionOnly(indices) => indices.len(),
        }
    }
}

fn parse_triple(token: &str) -> Option<IndexTriple> {
    let mut split = token.split('/');
    let v = split.next()?.parse().ok()?;
    let vt = split.next()?.parse().ok()?;
    let vn = split.next()?.parse().ok()?;
    if split.next().is_some() {
        return None;
    }
    Some([v, vt, vn])
}
