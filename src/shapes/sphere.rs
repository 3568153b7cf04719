use std::f64::consts::{PI, TAU};

use glam::DVec3;

use super::{Geometry, SurfaceGrid};
use crate::math::linspace;

/// Samples of the azimuthal parameter over [0, 2π], endpoint included
pub const SPHERE_AZIMUTH_SAMPLES: usize = 20;
/// Samples of the polar parameter over [0, π]
pub const SPHERE_POLAR_SAMPLES: usize = 10;

pub fn sphere_geometry(position: DVec3, scale: f64) -> Geometry {
    let u = linspace(0.0, TAU, SPHERE_AZIMUTH_SAMPLES);
    let v = linspace(0.0, PI, SPHERE_POLAR_SAMPLES);

    let grid = SurfaceGrid::from_fn(u.len(), v.len(), |r, c| {
        let (su, cu) = u[r].sin_cos();
        let (sv, cv) = v[c].sin_cos();
        position + scale * DVec3::new(cu * sv, su * sv, cv)
    });
    Geometry::Surface(grid)
}
