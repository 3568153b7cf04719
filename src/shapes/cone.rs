use std::f64::consts::TAU;

use glam::DVec3;

use super::{Face, Geometry};
use crate::math::linspace;

/// Angular samples of the base circle over [0, 2π], endpoint included
pub const CONE_SAMPLES: usize = 30;

/// Lateral triangles only: one per adjacent pair of base samples, no base cap.
/// The last sample coincides with the first so the fan still closes.
pub fn cone_geometry(position: DVec3, scale: f64) -> Geometry {
    let height = 2.0 * scale;
    let apex = position + DVec3::new(0.0, 0.0, height);

    let rim: Vec<DVec3> = linspace(0.0, TAU, CONE_SAMPLES)
        .into_iter()
        .map(|theta| {
            let (s, c) = theta.sin_cos();
            position + DVec3::new(scale * c, scale * s, 0.0)
        })
        .collect();

    let faces: Vec<Face> = rim
        .windows(2)
        .map(|pair| vec![pair[0], pair[1], apex])
        .collect();

    Geometry::Faces(faces)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cone_triangle_count() {
        let Geometry::Faces(faces) = cone_geometry(DVec3::ZERO, 1.0) else {
            panic!("cone must produce faces");
        };
        assert_eq!(faces.len(), CONE_SAMPLES - 1);
        assert!(faces.iter().all(|f| f.len() == 3));
    }

    #[test]
    fn test_cone_apex_height() {
        let Geometry::Faces(faces) = cone_geometry(DVec3::new(0.0, 0.0, 1.0), 1.5) else {
            panic!("cone must produce faces");
        };
        assert!(faces.iter().all(|f| f[2] == DVec3::new(0.0, 0.0, 4.0)));
    }

    #[test]
    fn test_cone_rim_on_base_circle() {
        let Geometry::Faces(faces) = cone_geometry(DVec3::ZERO, 2.0) else {
            panic!("cone must produce faces");
        };
        for face in &faces {
            for p in &face[..2] {
                assert_eq!(p.z, 0.0);
                assert!((p.truncate().length() - 2.0).abs() < 1e-9);
            }
        }
    }
}
