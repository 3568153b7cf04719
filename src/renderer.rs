use std::collections::BTreeSet;
use std::path::Path;

use glam::DVec3;
use log::{debug, warn};
use plotters::coord::cartesian::Cartesian3d;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::camera::{Camera, ViewAngles};
use crate::error::RenderError;
use crate::frame::RgbImage;
use crate::math::{shade_factor, Rgb, AABB};
use crate::scene::Scene;
use crate::shapes::ShapeMesh;
use crate::types::ShapeKind;

/// Half extent of the fixed plotting volume on every axis
pub const VIEW_EXTENT: f64 = 20.0;
const PROJECTION_SCALE: f64 = 0.8;
const CHART_MARGIN: u32 = 20;

/// Output size and decoration settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    /// Draw the labelled axis panels; needs a system font
    pub axes: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 800,
            axes: true,
        }
    }
}

/// One polygon with its final colour and depth
#[derive(Debug, Clone, PartialEq)]
pub struct DrawPolygon {
    pub points: Vec<DVec3>,
    pub fill: Rgb,
    pub alpha: f64,
    pub edge: Option<(Rgb, u32)>,
    pub depth: f64,
}

/// Polygons of one scene object, farthest first
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCollection {
    /// Index of the object in the scene
    pub object: usize,
    pub kind: ShapeKind,
    pub depth: f64,
    pub polygons: Vec<DrawPolygon>,
}

type SceneChart<'b, DB> =
    ChartContext<'b, DB, Cartesian3d<RangedCoordf64, RangedCoordf64, RangedCoordf64>>;

/// Draws a scene as seen from a camera onto a plotters 3D chart.
///
/// Nothing is cached: every call rebuilds all geometry.
pub struct Renderer<'a> {
    scene: &'a Scene,
    camera: &'a Camera,
    options: RenderOptions,
}

impl<'a> Renderer<'a> {
    pub fn new(scene: &'a Scene, camera: &'a Camera) -> Self {
        Self {
            scene,
            camera,
            options: RenderOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn view_angles(&self) -> ViewAngles {
        self.camera.view_angles()
    }

    /// Every object's polygons in painter order: collections farthest first,
    /// polygons inside a collection farthest first. Cone triangles are each a
    /// collection of their own.
    pub fn draw_list(&self) -> Vec<DrawCollection> {
        let angles = self.view_angles();

        let mut collections: Vec<DrawCollection> = self
            .scene
            .iter()
            .enumerate()
            .flat_map(|(index, object)| {
                let mesh = ShapeMesh::build(object);
                let collection = collect_polygons(index, &mesh, &angles);
                if mesh.kind.separate_faces() {
                    split_collection(collection)
                } else {
                    vec![collection]
                }
            })
            .collect();

        collections.sort_by(|a, b| b.depth.total_cmp(&a.depth));
        collections
    }

    /// Draw onto any plotters drawing area
    pub fn draw<DB: DrawingBackend>(&self, root: &DrawingArea<DB, Shift>) -> Result<(), RenderError> {
        let angles = self.view_angles();
        let collections = self.draw_list();

        debug!(
            "Rendering {} objects ({} depth groups) at azimuth {:.1}°, elevation {:.1}°",
            self.scene.len(),
            collections.len(),
            angles.azimuth,
            angles.elevation
        );
        warn_if_outside_volume(&collections);

        root.fill(&WHITE).map_err(RenderError::backend)?;
        let mut chart = self.chart(root)?;

        if self.options.axes {
            chart
                .configure_axes()
                .light_grid_style(BLACK.mix(0.15).stroke_width(1))
                .max_light_lines(3)
                .draw()
                .map_err(RenderError::backend)?;
        } else {
            chart
                .draw_series(volume_edges().map(|edge| {
                    PathElement::new(edge.map(to_plot).to_vec(), BLACK.mix(0.3).stroke_width(1))
                }))
                .map_err(RenderError::backend)?;
        }

        for polygon in collections.iter().flat_map(|c| &c.polygons) {
            let points: Vec<(f64, f64, f64)> = polygon.points.iter().copied().map(to_plot).collect();
            let Rgb(r, g, b) = polygon.fill;

            chart
                .draw_series(std::iter::once(Polygon::new(
                    points.clone(),
                    RGBColor(r, g, b).mix(polygon.alpha).filled(),
                )))
                .map_err(RenderError::backend)?;

            if let Some((Rgb(r, g, b), width)) = polygon.edge {
                let mut outline = points;
                outline.push(outline[0]);
                chart
                    .draw_series(std::iter::once(PathElement::new(
                        outline,
                        RGBColor(r, g, b).stroke_width(width),
                    )))
                    .map_err(RenderError::backend)?;
            }
        }

        Ok(())
    }

    /// Fixed-volume 3D chart looking along the camera's eye direction.
    ///
    /// With world points mapped through `to_plot`, plotters' yaw and pitch are
    /// exactly the azimuth and elevation, so its projected depth orders points
    /// the same way as [`ViewAngles::depth`].
    fn chart<'b, DB: DrawingBackend + 'b>(
        &self,
        root: &'b DrawingArea<DB, Shift>,
    ) -> Result<SceneChart<'b, DB>, RenderError> {
        let angles = self.view_angles();
        let range = -VIEW_EXTENT..VIEW_EXTENT;
        let mut chart = ChartBuilder::on(root)
            .margin(CHART_MARGIN)
            .build_cartesian_3d(range.clone(), range.clone(), range)
            .map_err(RenderError::backend)?;

        chart.with_projection(|mut pb| {
            pb.yaw = angles.azimuth.to_radians();
            pb.pitch = angles.elevation.to_radians();
            pb.scale = PROJECTION_SCALE;
            pb.into_matrix()
        });
        Ok(chart)
    }

    /// Render into an in-memory RGB buffer
    pub fn render_rgb(&self) -> Result<RgbImage, RenderError> {
        let (width, height) = self.checked_size()?;
        let mut pixels = vec![0u8; RgbImage::buffer_size(width, height)];
        {
            let root = BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
            self.draw(&root)?;
            root.present().map_err(RenderError::backend)?;
        }
        Ok(RgbImage::new(width, height, pixels))
    }

    /// Render to a `.png` or `.svg` file
    pub fn render_to_file(&self, path: &Path) -> Result<(), RenderError> {
        let size = self.checked_size()?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "png" => {
                let root = BitMapBackend::new(path, size).into_drawing_area();
                self.draw(&root)?;
                root.present().map_err(RenderError::backend)
            }
            "svg" => {
                let root = SVGBackend::new(path, size).into_drawing_area();
                self.draw(&root)?;
                root.present().map_err(RenderError::backend)
            }
            _ => Err(RenderError::UnsupportedFormat(path.display().to_string())),
        }
    }

    fn checked_size(&self) -> Result<(u32, u32), RenderError> {
        let RenderOptions { width, height, .. } = self.options;
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidSize { width, height });
        }
        Ok((width, height))
    }
}

/// World z is up and plotters treats its second axis as vertical. The cyclic
/// (y, z, x) order keeps the chart right-handed: a plain y/z swap would mirror
/// the scene and turn the orbit a quarter turn.
fn to_plot(p: DVec3) -> (f64, f64, f64) {
    (p.y, p.z, p.x)
}

fn collect_polygons(index: usize, mesh: &ShapeMesh, angles: &ViewAngles) -> DrawCollection {
    let paint = mesh.paint;

    let mut polygons: Vec<DrawPolygon> = mesh
        .geometry
        .polygons()
        .into_iter()
        .filter(|points| !points.is_empty())
        .map(|points| {
            let fill = if paint.shaded {
                paint.fill.scaled(shade_factor(polygon_normal(&points)))
            } else {
                paint.fill
            };
            DrawPolygon {
                depth: angles.depth(centroid(&points)),
                points,
                fill,
                alpha: paint.alpha,
                edge: paint.edge,
            }
        })
        .collect();

    polygons.sort_by(|a, b| b.depth.total_cmp(&a.depth));

    let depth = if polygons.is_empty() {
        0.0
    } else {
        polygons.iter().map(|p| p.depth).sum::<f64>() / polygons.len() as f64
    };

    DrawCollection {
        object: index,
        kind: mesh.kind,
        depth,
        polygons,
    }
}

/// One collection per polygon, keeping the owning object
fn split_collection(collection: DrawCollection) -> Vec<DrawCollection> {
    let DrawCollection {
        object,
        kind,
        polygons,
        ..
    } = collection;
    polygons
        .into_iter()
        .map(|polygon| DrawCollection {
            object,
            kind,
            depth: polygon.depth,
            polygons: vec![polygon],
        })
        .collect()
}

fn centroid(points: &[DVec3]) -> DVec3 {
    points.iter().copied().sum::<DVec3>() / points.len() as f64
}

/// Newell's method; zero for degenerate polygons
pub fn polygon_normal(points: &[DVec3]) -> DVec3 {
    points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .fold(DVec3::ZERO, |n, (a, b)| {
            n + DVec3::new(
                (a.y - b.y) * (a.z + b.z),
                (a.z - b.z) * (a.x + b.x),
                (a.x - b.x) * (a.y + b.y),
            )
        })
}

/// The 12 edges of the plotting volume
fn volume_edges() -> impl Iterator<Item = [DVec3; 2]> {
    let e = VIEW_EXTENT;
    let corner = move |i: usize| {
        DVec3::new(
            if i & 1 == 0 { -e } else { e },
            if i & 2 == 0 { -e } else { e },
            if i & 4 == 0 { -e } else { e },
        )
    };
    (0..8usize).flat_map(move |i| {
        [1usize, 2, 4]
            .into_iter()
            .filter(move |bit| i & bit == 0)
            .map(move |bit| [corner(i), corner(i | bit)])
    })
}

fn warn_if_outside_volume(collections: &[DrawCollection]) {
    let volume = AABB::cube(VIEW_EXTENT);
    let mut warned = BTreeSet::new();
    for collection in collections {
        if warned.contains(&collection.object) {
            continue;
        }
        let points = collection.polygons.iter().flat_map(|p| p.points.iter().copied());
        if let Some(bounds) = AABB::from_points(points) {
            if !volume.contains_box(&bounds) {
                warned.insert(collection.object);
                warn!(
                    "{} #{} extends beyond the [-{e}, {e}] view volume",
                    collection.kind,
                    collection.object,
                    e = VIEW_EXTENT
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_polygon_normal_unit_square() {
        let square = [
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
        ];
        let n = polygon_normal(&square);
        assert!((n.normalize() - DVec3::Z).length() < 1e-12);
    }

    #[test]
    fn test_polygon_normal_degenerate() {
        let collapsed = [DVec3::ONE, DVec3::ONE, DVec3::ONE, DVec3::ONE];
        assert_eq!(polygon_normal(&collapsed), DVec3::ZERO);
    }

    #[test]
    fn test_volume_edges() {
        let edges: Vec<_> = volume_edges().collect();
        assert_eq!(edges.len(), 12);
        for [a, b] in edges {
            assert!(((a - b).length() - 2.0 * VIEW_EXTENT).abs() < 1e-12);
        }
    }

    #[test]
    fn test_to_plot_puts_world_z_on_vertical_axis() {
        assert_eq!(to_plot(DVec3::new(1.0, 2.0, 3.0)), (2.0, 3.0, 1.0));
    }

    #[test]
    fn test_chart_depth_matches_view_depth() {
        let scene = Scene::new();
        let points = [
            DVec3::new(8.0, 0.0, 0.0),
            DVec3::new(-8.0, 0.0, 0.0),
            DVec3::new(0.0, 8.0, 0.0),
            DVec3::new(0.0, -8.0, 0.0),
            DVec3::new(0.0, 0.0, 8.0),
            DVec3::new(0.0, 0.0, -8.0),
            DVec3::new(5.0, -6.0, 3.0),
            DVec3::new(-4.0, 7.0, -5.0),
        ];
        let mut pixels = vec![0u8; RgbImage::buffer_size(400, 400)];
        let root = BitMapBackend::with_buffer(&mut pixels, (400, 400)).into_drawing_area();

        for (position, look_at) in [
            (DVec3::new(-10.0, 0.0, 0.0), DVec3::ZERO),
            (DVec3::new(0.0, -10.0, 0.0), DVec3::ZERO),
            (DVec3::splat(10.0), DVec3::ZERO),
            (DVec3::new(3.0, -7.0, -4.0), DVec3::new(-1.0, 2.0, 6.0)),
            (DVec3::new(0.0, 5.0, 12.0), DVec3::ZERO),
        ] {
            let camera = Camera::new(position, look_at);
            let renderer = Renderer::new(&scene, &camera);
            let angles = renderer.view_angles();
            let chart = renderer.chart(&root).unwrap();
            let coord = chart.as_coord_spec();

            for a in points {
                for b in points {
                    let ours = angles.depth(a) - angles.depth(b);
                    if ours.abs() < 2.0 {
                        continue;
                    }
                    let (ax, ay, az) = to_plot(a);
                    let (bx, by, bz) = to_plot(b);
                    let theirs = coord.projected_depth(&ax, &ay, &az)
                        - coord.projected_depth(&bx, &by, &bz);
                    assert_eq!(
                        ours > 0.0,
                        theirs > 0,
                        "depth order of {:?} and {:?} differs from the chart at {:?}",
                        a,
                        b,
                        angles
                    );
                }
            }
        }
    }

    #[test]
    fn test_cone_triangles_sorted_individually() {
        let mut scene = Scene::new();
        scene.add_object(ShapeKind::Cone, DVec3::ZERO, 1.0).unwrap();
        scene.add_object(ShapeKind::Cube, DVec3::new(5.0, 0.0, 0.0), 1.0).unwrap();
        let camera = Camera::default();

        let list = Renderer::new(&scene, &camera).draw_list();
        let cone: Vec<_> = list.iter().filter(|c| c.kind == ShapeKind::Cone).collect();
        assert_eq!(cone.len(), 29);
        assert!(cone.iter().all(|c| c.object == 0 && c.polygons.len() == 1));
        assert_eq!(list.iter().filter(|c| c.kind == ShapeKind::Cube).count(), 1);
        assert!(list.windows(2).all(|w| w[0].depth >= w[1].depth));
    }

    #[test]
    fn test_zero_size_rejected() {
        let scene = Scene::new();
        let camera = Camera::default();
        let renderer = Renderer::new(&scene, &camera).with_options(RenderOptions {
            width: 0,
            height: 10,
            axes: false,
        });
        assert!(matches!(
            renderer.render_rgb(),
            Err(RenderError::InvalidSize { width: 0, height: 10 })
        ));
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let scene = Scene::new();
        let camera = Camera::default();
        let renderer = Renderer::new(&scene, &camera);
        let err = renderer.render_to_file(Path::new("scene.bmpx")).unwrap_err();
        assert!(matches!(err, RenderError::UnsupportedFormat(_)));
    }
}
