use crate::{Vec2, Vec3};

/// Unnormalized flat normal of the triangle `(p1, p2, p3)`.
///
/// Computed as `(p1 - p2) x (p2 - p3)`. The edge order fixes the sign, so a
/// counter-clockwise triangle (seen from the front) yields a front-facing normal.
#[inline]
pub fn flat_normal(p1: Vec3, p2: Vec3, p3: Vec3) -> Vec3 {
    (p1 - p2).cross(p2 - p3)
}

/// Axis-aligned bounds of a point set, `None` when empty.
pub fn bounds(points: &[Vec3]) -> Option<(Vec3, Vec3)> {
    let first = *points.first()?;
    Some(
        points
            .iter()
            .fold((first, first), |(lo, hi), &p| (lo.min(p), hi.max(p))),
    )
}

/// Negates the V axis of a texture coordinate.
#[inline]
pub fn flip_v(uv: Vec2) -> Vec2 {
    Vec2::new(uv.x, -uv.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{vec2, vec3};

    #[test]
    fn flat_normal_uses_fixed_edge_order() {
        let n = flat_normal(
            vec3(0.0, 0.0, 0.0),
            vec3(1.0, 0.0, 0.0),
            vec3(0.0, 1.0, 0.0),
        );
        // (p1-p2) = (-1,0,0), (p2-p3) = (1,-1,0) -> (0,0,1)
        assert_eq!(n, vec3(0.0, 0.0, 1.0));
    }

    #[test]
    fn flat_normal_of_degenerate_triangle_is_zero() {
        let p = vec3(1.0, 2.0, 3.0);
        assert_eq!(flat_normal(p, p, p), Vec3::ZERO);
    }

    #[test]
    fn bounds_of_points() {
        assert!(bounds(&[]).is_none());
        let (lo, hi) = bounds(&[vec3(1.0, -2.0, 0.0), vec3(-1.0, 4.0, 0.5)]).unwrap();
        assert_eq!(lo, vec3(-1.0, -2.0, 0.0));
        assert_eq!(hi, vec3(1.0, 4.0, 0.5));
    }

    #[test]
    fn flip_v_negates_second_component() {
        assert_eq!(flip_v(vec2(0.25, 0.75)), vec2(0.25, -0.75));
    }
}
