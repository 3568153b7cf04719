use glam::DVec3;

use super::Geometry;

/// Square base of half-width `scale` at the object's height, apex `2 * scale` above.
/// Four triangular sides followed by the base quad.
pub fn pyramid_geometry(position: DVec3, scale: f64) -> Geometry {
    let DVec3 { x, y, z } = position;
    let s = scale;

    let base = [
        DVec3::new(x - s, y - s, z),
        DVec3::new(x + s, y - s, z),
        DVec3::new(x + s, y + s, z),
        DVec3::new(x - s, y + s, z),
    ];
    let apex = DVec3::new(x, y, z + 2.0 * s);

    let mut faces: Vec<Vec<DVec3>> = (0..4)
        .map(|i| vec![base[i], base[(i + 1) % 4], apex])
        .collect();
    faces.push(base.to_vec());

    Geometry::Faces(faces)
}
