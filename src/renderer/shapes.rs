//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::sim::Rect;

/// Two triangles covering four corners given counter-clockwise
fn quad(corners: [Vec2; 4], color: [f32; 4]) -> Vec<Vertex> {
    let [a, b, c, d] = corners;
    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(d.x, d.y, color),
        Vertex::new(a.x, a.y, color),
    ]
}

/// Generate vertices for an axis-aligned filled rectangle
pub fn rect(r: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    quad(
        [
            Vec2::new(r.left, r.bottom),
            Vec2::new(r.right(), r.bottom),
            Vec2::new(r.right(), r.top()),
            Vec2::new(r.left, r.top()),
        ],
        color,
    )
}

/// Generate vertices for a square of half-size `half` rotated by `angle_deg`
pub fn rotated_square(center: Vec2, half: f32, angle_deg: f32, color: [f32; 4]) -> Vec<Vertex> {
    let rot = Vec2::from_angle(angle_deg.to_radians());
    let corners = [
        Vec2::new(-half, -half),
        Vec2::new(half, -half),
        Vec2::new(half, half),
        Vec2::new(-half, half),
    ]
    .map(|c| center + rot.rotate(c));
    quad(corners, color)
}

/// Generate vertices for a filled pointy-top hexagon
pub fn hexagon(center: Vec2, radius: f32, color: [f32; 4]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(6 * 3);

    for i in 0..6 {
        let theta1 = PI / 6.0 + i as f32 * PI / 3.0;
        let theta2 = theta1 + PI / 3.0;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}
