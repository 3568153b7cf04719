//! Per-shape geometry generators.
//!
//! Every generator is centred on the object position and sized by its scale.
//! Flat shapes produce explicit polygon faces; curved shapes produce a sampled
//! surface grid that the renderer splits into quads.

mod cone;
mod cube;
mod cylinder;
mod pyramid;
mod sphere;

use glam::DVec3;

use crate::math::{Rgb, AABB};
use crate::types::{SceneObject, ShapeKind};

pub use cone::{cone_geometry, CONE_SAMPLES};
pub use cube::{cube_geometry, cube_vertices, CUBE_FACES};
pub use cylinder::{cylinder_geometry, CYLINDER_LEVELS, CYLINDER_SAMPLES};
pub use pyramid::pyramid_geometry;
pub use sphere::{sphere_geometry, SPHERE_POLAR_SAMPLES, SPHERE_AZIMUTH_SAMPLES};

/// A planar polygon, vertices in drawing order
pub type Face = Vec<DVec3>;

/// Row-major grid of surface samples
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceGrid {
    rows: usize,
    cols: usize,
    points: Vec<DVec3>,
}

impl SurfaceGrid {
    /// Build a grid by evaluating `f(row, col)` for every cell
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> DVec3) -> Self {
        let points = (0..rows)
            .flat_map(|r| (0..cols).map(move |c| (r, c)))
            .map(|(r, c)| f(r, c))
            .collect();
        Self { rows, cols, points }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn point(&self, row: usize, col: usize) -> DVec3 {
        self.points[row * self.cols + col]
    }

    pub fn points(&self) -> &[DVec3] {
        &self.points
    }

    /// Quads between neighbouring samples, `(rows-1) * (cols-1)` of them
    pub fn quads(&self) -> impl Iterator<Item = [DVec3; 4]> + '_ {
        let rows = self.rows.saturating_sub(1);
        let cols = self.cols.saturating_sub(1);
        (0..rows).flat_map(move |r| {
            (0..cols).map(move |c| {
                [
                    self.point(r, c),
                    self.point(r, c + 1),
                    self.point(r + 1, c + 1),
                    self.point(r + 1, c),
                ]
            })
        })
    }
}

/// Generated geometry for one object
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Faces(Vec<Face>),
    Surface(SurfaceGrid),
}

impl Geometry {
    /// Every vertex, duplicates included
    pub fn vertices(&self) -> Box<dyn Iterator<Item = DVec3> + '_> {
        match self {
            Geometry::Faces(faces) => Box::new(faces.iter().flatten().copied()),
            Geometry::Surface(grid) => Box::new(grid.points().iter().copied()),
        }
    }

    pub fn bounds(&self) -> Option<AABB> {
        AABB::from_points(self.vertices())
    }

    /// Polygons as the renderer sees them
    pub fn polygons(&self) -> Vec<Face> {
        match self {
            Geometry::Faces(faces) => faces.clone(),
            Geometry::Surface(grid) => grid.quads().map(|q| q.to_vec()).collect(),
        }
    }
}

/// Fixed drawing style of a shape kind
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub fill: Rgb,
    pub alpha: f64,
    /// Outline colour and width in pixels
    pub edge: Option<(Rgb, u32)>,
    /// Light-shade each polygon by its normal
    pub shaded: bool,
}

impl ShapeKind {
    pub fn paint(self) -> Paint {
        match self {
            ShapeKind::Cube => Paint {
                fill: Rgb::CYAN,
                alpha: 0.5,
                edge: Some((Rgb::BLACK, 1)),
                shaded: false,
            },
            ShapeKind::Sphere => Paint {
                fill: Rgb::ORANGE,
                alpha: 0.6,
                edge: None,
                shaded: true,
            },
            ShapeKind::Pyramid => Paint {
                fill: Rgb::PURPLE,
                alpha: 0.6,
                edge: Some((Rgb::BLACK, 1)),
                shaded: false,
            },
            ShapeKind::Cone => Paint {
                fill: Rgb::GREEN,
                alpha: 0.6,
                edge: Some((Rgb::GREEN, 1)),
                shaded: false,
            },
            ShapeKind::Cylinder => Paint {
                fill: Rgb::BROWN,
                alpha: 0.5,
                edge: None,
                shaded: true,
            },
        }
    }

    /// Whether each face is depth-sorted on its own rather than as one group
    pub fn separate_faces(self) -> bool {
        matches!(self, ShapeKind::Cone)
    }

    /// Generate this kind's geometry at `position` with `scale`
    pub fn geometry(self, position: DVec3, scale: f64) -> Geometry {
        match self {
            ShapeKind::Cube => cube_geometry(position, scale),
            ShapeKind::Sphere => sphere_geometry(position, scale),
            ShapeKind::Pyramid => pyramid_geometry(position, scale),
            ShapeKind::Cone => cone_geometry(position, scale),
            ShapeKind::Cylinder => cylinder_geometry(position, scale),
        }
    }
}

/// Geometry plus style for one scene object
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeMesh {
    pub kind: ShapeKind,
    pub geometry: Geometry,
    pub paint: Paint,
}

impl ShapeMesh {
    pub fn build(object: &SceneObject) -> Self {
        let kind = object.kind();
        Self {
            kind,
            geometry: kind.geometry(object.position(), object.scale()),
            paint: kind.paint(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_grid_layout() {
        let grid = SurfaceGrid::from_fn(2, 3, |r, c| DVec3::new(r as f64, c as f64, 0.0));
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.points().len(), 6);
        assert_eq!(grid.point(1, 2), DVec3::new(1.0, 2.0, 0.0));
    }

    #[test]
    fn test_surface_grid_quads() {
        let grid = SurfaceGrid::from_fn(3, 4, |r, c| DVec3::new(r as f64, c as f64, 0.0));
        let quads: Vec<_> = grid.quads().collect();
        assert_eq!(quads.len(), 2 * 3);
        assert_eq!(
            quads[0],
            [
                DVec3::new(0.0, 0.0, 0.0),
                DVec3::new(0.0, 1.0, 0.0),
                DVec3::new(1.0, 1.0, 0.0),
                DVec3::new(1.0, 0.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_surface_grid_single_row_has_no_quads() {
        let grid = SurfaceGrid::from_fn(1, 5, |_, c| DVec3::new(c as f64, 0.0, 0.0));
        assert_eq!(grid.quads().count(), 0);
    }

    #[test]
    fn test_every_kind_has_paint_and_geometry() {
        for kind in ShapeKind::ALL {
            let paint = kind.paint();
            assert!(paint.alpha > 0.0 && paint.alpha <= 1.0);
            let geometry = kind.geometry(DVec3::ZERO, 1.0);
            assert!(!geometry.polygons().is_empty(), "{kind} produced no polygons");
        }
    }

    #[test]
    fn test_surfaces_are_shaded_and_faces_are_not() {
        assert!(ShapeKind::Sphere.paint().shaded);
        assert!(ShapeKind::Cylinder.paint().shaded);
        assert!(!ShapeKind::Cube.paint().shaded);
        assert!(!ShapeKind::Pyramid.paint().shaded);
        assert!(!ShapeKind::Cone.paint().shaded);
    }
}
