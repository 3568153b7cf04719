use std::ops::RangeInclusive;
use std::path::Path;

use anyhow::{Context, Result};
use glam::DVec3;
use log::info;

use crate::camera::{Camera, ViewAngles};
use crate::frame::RenderedFrame;
use crate::renderer::{RenderOptions, Renderer, VIEW_EXTENT};
use crate::scene::Scene;
use crate::types::ShapeKind;

/// Slider range of every camera and look-at coordinate
pub const CAMERA_RANGE: RangeInclusive<f64> = -VIEW_EXTENT..=VIEW_EXTENT;
/// Slider range of the object scale
pub const SCALE_RANGE: RangeInclusive<f64> = 0.1..=5.0;

/// Current values of every input control
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Controls {
    pub camera_position: DVec3,
    pub look_at: DVec3,
    pub shape: ShapeKind,
    /// Unbounded number inputs
    pub object_position: DVec3,
    pub scale: f64,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            camera_position: DVec3::splat(10.0),
            look_at: DVec3::ZERO,
            shape: ShapeKind::Cube,
            object_position: DVec3::ZERO,
            scale: 1.0,
        }
    }
}

impl Controls {
    /// Fresh camera from the six sliders
    pub fn camera(&self) -> Camera {
        Camera::new(self.camera_position, self.look_at)
    }

    /// Slider values pinned to their ranges
    pub fn clamped(&self) -> Self {
        let clamp_vec = |v: DVec3| {
            DVec3::new(
                v.x.clamp(*CAMERA_RANGE.start(), *CAMERA_RANGE.end()),
                v.y.clamp(*CAMERA_RANGE.start(), *CAMERA_RANGE.end()),
                v.z.clamp(*CAMERA_RANGE.start(), *CAMERA_RANGE.end()),
            )
        };
        Self {
            camera_position: clamp_vec(self.camera_position),
            look_at: clamp_vec(self.look_at),
            scale: self.scale.clamp(*SCALE_RANGE.start(), *SCALE_RANGE.end()),
            ..*self
        }
    }

    /// Point the camera controls at an existing camera
    pub fn set_camera(&mut self, camera: &Camera) {
        self.camera_position = camera.position;
        self.look_at = camera.look_at;
    }
}

/// One viewer session: owns its scene for as long as the session lives
#[derive(Debug, Default)]
pub struct Session {
    scene: Scene,
    options: RenderOptions,
    cycles: u64,
}

impl Session {
    pub fn new(options: RenderOptions) -> Self {
        Self::with_scene(Scene::new(), options)
    }

    /// Start a session from a pre-populated scene
    pub fn with_scene(scene: Scene, options: RenderOptions) -> Self {
        Self {
            scene,
            options,
            cycles: 0,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Run one interaction cycle: build the camera, append an object when `add`
    /// fired, then re-render everything.
    pub fn interact(&mut self, controls: &Controls, add: bool) -> Result<RenderedFrame> {
        let controls = controls.clamped();
        let camera = controls.camera();

        if add {
            let object = *self
                .scene
                .add_object(controls.shape, controls.object_position, controls.scale)
                .with_context(|| format!("Failed to add {}", controls.shape))?;
            info!(
                "Added {} #{} at {:?}",
                object.kind(),
                self.scene.len(),
                object.position().to_array()
            );
        }

        let renderer = Renderer::new(&self.scene, &camera).with_options(self.options);
        let image = renderer.render_rgb().context("Failed to render scene")?;

        self.cycles += 1;
        Ok(RenderedFrame {
            number: self.cycles,
            angles: renderer.view_angles(),
            object_count: self.scene.len(),
            image,
        })
    }

    /// Headless cycle: render the current controls straight to a file
    pub fn render_to_file(&mut self, controls: &Controls, path: &Path) -> Result<ViewAngles> {
        let camera = controls.clamped().camera();
        let renderer = Renderer::new(&self.scene, &camera).with_options(self.options);
        renderer
            .render_to_file(path)
            .with_context(|| format!("Failed to write {:?}", path))?;

        self.cycles += 1;
        let angles = renderer.view_angles();
        info!(
            "Wrote {:?}: {} objects, azimuth {:.1}°, elevation {:.1}°",
            path,
            self.scene.len(),
            angles.azimuth,
            angles.elevation
        );
        Ok(angles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_controls_match_ui_defaults() {
        let controls = Controls::default();
        assert_eq!(controls.camera_position, DVec3::new(10.0, 10.0, 10.0));
        assert_eq!(controls.look_at, DVec3::ZERO);
        assert_eq!(controls.shape, ShapeKind::Cube);
        assert_eq!(controls.object_position, DVec3::ZERO);
        assert_eq!(controls.scale, 1.0);
    }

    #[test]
    fn test_clamped_limits_sliders_only() {
        let controls = Controls {
            camera_position: DVec3::new(25.0, -30.0, 5.0),
            look_at: DVec3::new(0.0, 0.0, 100.0),
            shape: ShapeKind::Cone,
            object_position: DVec3::new(50.0, -50.0, 0.0),
            scale: 9.0,
        }
        .clamped();

        assert_eq!(controls.camera_position, DVec3::new(20.0, -20.0, 5.0));
        assert_eq!(controls.look_at, DVec3::new(0.0, 0.0, 20.0));
        assert_eq!(controls.scale, 5.0);
        // Position inputs are unbounded
        assert_eq!(controls.object_position, DVec3::new(50.0, -50.0, 0.0));
    }

    #[test]
    fn test_controls_camera() {
        let controls = Controls {
            camera_position: DVec3::new(1.0, 2.0, 3.0),
            look_at: DVec3::new(4.0, 5.0, 6.0),
            ..Controls::default()
        };
        let camera = controls.camera();
        assert_eq!(camera.position, DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(camera.look_at, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_set_camera() {
        let mut controls = Controls::default();
        controls.set_camera(&Camera::new(DVec3::X, DVec3::Y));
        assert_eq!(controls.camera(), Camera::new(DVec3::X, DVec3::Y));
    }
}
