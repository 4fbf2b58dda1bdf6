//! CPU side geometry for the primitives the renderer supports.
//!
//! All coordinates are window pixels, vertices are packed as flat `f32`
//! slices ready for `glBufferData`.

use super::math::Vec2;
use std::f32::consts::TAU;

const MIN_SEGMENTS: usize = 24;
const MAX_SEGMENTS: usize = 128;

pub fn circle_segments(radius: f32) -> usize {
    let wanted = (radius.abs().sqrt() * 6.0).ceil() as usize;
    wanted.clamp(MIN_SEGMENTS, MAX_SEGMENTS)
}

fn rim_point(center: Vec2, radius: f32, i: usize, segments: usize) -> [f32; 2] {
    let angle = TAU * i as f32 / segments as f32;
    [center.x + radius * angle.cos(), center.y + radius * angle.sin()]
}

/// Triangle fan: center first, then the rim closed back onto its first point.
pub fn filled_circle(center: Vec2, radius: f32) -> Vec<f32> {
    let segments = circle_segments(radius);
    let mut vertices = Vec::with_capacity((segments + 2) * 2);
    vertices.extend_from_slice(&[center.x, center.y]);
    for i in 0..=segments {
        vertices.extend_from_slice(&rim_point(center, radius, i % segments, segments));
    }
    vertices
}

/// Line loop, GL closes it.
pub fn circle_outline(center: Vec2, radius: f32) -> Vec<f32> {
    let segments = circle_segments(radius);
    let mut vertices = Vec::with_capacity(segments * 2);
    for i in 0..segments {
        vertices.extend_from_slice(&rim_point(center, radius, i, segments));
    }
    vertices
}

/// Two triangles, each vertex is `x, y, u, v`. v = 0 is the top edge.
pub fn textured_quad(x: f32, y: f32, w: f32, h: f32) -> [f32; 24] {
    let (l, r, t, b) = (x, x + w, y, y + h);
    #[rustfmt::skip]
    let quad = [
        l, t, 0.0, 0.0,
        l, b, 0.0, 1.0,
        r, b, 1.0, 1.0,
        l, t, 0.0, 0.0,
        r, b, 1.0, 1.0,
        r, t, 1.0, 0.0,
    ];
    quad
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn distance(p: &[f32], c: Vec2) -> f32 {
        ((p[0] - c.x).powi(2) + (p[1] - c.y).powi(2)).sqrt()
    }

    #[test]
    fn segments_grow_with_radius_within_bounds() {
        assert_eq!(circle_segments(0.0), MIN_SEGMENTS);
        assert_eq!(circle_segments(1.0e6), MAX_SEGMENTS);
        assert!(circle_segments(150.0) >= circle_segments(25.0));
    }

    #[test]
    fn filled_circle_is_a_closed_fan() {
        let center = Vec2::new(600.0, 350.0);
        let v = filled_circle(center, 50.0);
        let segments = circle_segments(50.0);

        assert_eq!(v.len(), (segments + 2) * 2);
        assert_eq!(&v[0..2], &[600.0, 350.0]);
        assert_eq!(&v[2..4], &v[v.len() - 2..]);
        for p in v[2..].chunks(2) {
            assert_relative_eq!(distance(p, center), 50.0, max_relative = 1e-4);
        }
    }

    #[test]
    fn outline_points_lie_on_the_circle() {
        let center = Vec2::new(600.0, 350.0);
        let v = circle_outline(center, 150.0);

        assert_eq!(v.len(), circle_segments(150.0) * 2);
        for p in v.chunks(2) {
            assert_relative_eq!(distance(p, center), 150.0, max_relative = 1e-4);
        }
    }

    #[test]
    fn quad_covers_the_box_with_top_at_v_zero() {
        let q = textured_quad(100.0, 150.0, 112.0, 16.0);
        for vertex in q.chunks(4) {
            let (x, y, u, v) = (vertex[0], vertex[1], vertex[2], vertex[3]);
            assert!(x == 100.0 || x == 212.0);
            assert!(y == 150.0 || y == 166.0);
            assert_eq!(u, if x == 100.0 { 0.0 } else { 1.0 });
            assert_eq!(v, if y == 150.0 { 0.0 } else { 1.0 });
        }
    }
}
