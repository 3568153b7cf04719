use glam::DVec3;

use super::{Face, Geometry};

/// Vertex index groups of the six faces; opposite faces are adjacent entries
pub const CUBE_FACES: [[usize; 4]; 6] = [
    [0, 1, 3, 2],
    [4, 5, 7, 6],
    [0, 1, 5, 4],
    [2, 3, 7, 6],
    [0, 2, 6, 4],
    [1, 3, 7, 5],
];

/// The 8 corners at `position ± scale`, x varying slowest and z fastest
pub fn cube_vertices(position: DVec3, scale: f64) -> [DVec3; 8] {
    let r = [-scale, scale];
    let mut vertices = [DVec3::ZERO; 8];
    for (i, dx) in r.iter().enumerate() {
        for (j, dy) in r.iter().enumerate() {
            for (k, dz) in r.iter().enumerate() {
                vertices[i * 4 + j * 2 + k] = position + DVec3::new(*dx, *dy, *dz);
            }
        }
    }
    vertices
}

pub fn cube_geometry(position: DVec3, scale: f64) -> Geometry {
    let vertices = cube_vertices(position, scale);
    let faces: Vec<Face> = CUBE_FACES
        .iter()
        .map(|indices| indices.iter().map(|&i| vertices[i]).collect())
        .collect();
    Geometry::Faces(faces)
}
