use std::f64::consts::TAU;

use glam::DVec3;

use super::{Geometry, SurfaceGrid};
use crate::math::linspace;

/// Angular samples over [0, 2π], endpoint included
pub const CYLINDER_SAMPLES: usize = 30;
/// Height levels from the base to `2 * scale` above it
pub const CYLINDER_LEVELS: usize = 10;

/// Lateral surface only; rows are height levels, columns are angles
pub fn cylinder_geometry(position: DVec3, scale: f64) -> Geometry {
    let levels = linspace(position.z, position.z + 2.0 * scale, CYLINDER_LEVELS);
    let theta = linspace(0.0, TAU, CYLINDER_SAMPLES);

    let grid = SurfaceGrid::from_fn(levels.len(), theta.len(), |r, c| {
        let (s, co) = theta[c].sin_cos();
        DVec3::new(scale * co + position.x, scale * s + position.y, levels[r])
    });
    Geometry::Surface(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cylinder_grid_size() {
        let Geometry::Surface(grid) = cylinder_geometry(DVec3::ZERO, 1.0) else {
            panic!("cylinder must produce a surface");
        };
        assert_eq!(grid.rows(), CYLINDER_LEVELS);
        assert_eq!(grid.cols(), CYLINDER_SAMPLES);
        assert_eq!(grid.quads().count(), 9 * 29);
    }

    #[test]
    fn test_cylinder_height_range() {
        let Geometry::Surface(grid) = cylinder_geometry(DVec3::new(0.0, 0.0, -1.0), 1.5) else {
            panic!("cylinder must produce a surface");
        };
        assert_eq!(grid.point(0, 0).z, -1.0);
        assert_eq!(grid.point(CYLINDER_LEVELS - 1, 0).z, 2.0);
    }

    #[test]
    fn test_cylinder_radius() {
        let centre = DVec3::new(4.0, -2.0, 0.0);
        let Geometry::Surface(grid) = cylinder_geometry(centre, 0.75) else {
            panic!("cylinder must produce a surface");
        };
        for p in grid.points() {
            assert!(((*p - centre).truncate().length() - 0.75).abs() < 1e-9);
        }
    }
}
