use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Viewer orbit angles in degrees
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ViewAngles {
    pub azimuth: f64,
    pub elevation: f64,
}

impl ViewAngles {
    pub fn new(azimuth: f64, elevation: f64) -> Self {
        Self { azimuth, elevation }
    }

    /// Unit vector from the scene centre toward the orbiting viewer
    pub fn eye_direction(&self) -> DVec3 {
        let (sa, ca) = self.azimuth.to_radians().sin_cos();
        let (se, ce) = self.elevation.to_radians().sin_cos();
        DVec3::new(ce * ca, ce * sa, se)
    }

    /// Distance along the view axis; larger values are farther from the viewer
    pub fn depth(&self, point: DVec3) -> f64 {
        -point.dot(self.eye_direction())
    }
}

/// Camera position and look-at point. Only the direction between them matters:
/// it picks the orbit angles around the fixed scene volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub position: DVec3,
    pub look_at: DVec3,
}

impl Camera {
    pub fn new(position: DVec3, look_at: DVec3) -> Self {
        Self { position, look_at }
    }

    pub fn direction(&self) -> DVec3 {
        self.look_at - self.position
    }

    /// Azimuth/elevation of the look direction.
    ///
    /// Coincident points (or non-finite input) fall back to (0°, 0°).
    pub fn view_angles(&self) -> ViewAngles {
        let d = self.direction();
        if !d.is_finite() || d.length_squared() <= f64::EPSILON * f64::EPSILON {
            return ViewAngles::default();
        }

        let horizontal = (d.x * d.x + d.y * d.y).sqrt();
        ViewAngles::new(
            d.y.atan2(d.x).to_degrees(),
            d.z.atan2(horizontal).to_degrees(),
        )
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(DVec3::splat(10.0), DVec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn angles_for(direction: DVec3) -> ViewAngles {
        Camera::new(DVec3::ZERO, direction).view_angles()
    }

    #[test]
    fn test_default_camera() {
        let camera = Camera::default();
        assert_eq!(camera.position, DVec3::splat(10.0));
        assert_eq!(camera.look_at, DVec3::ZERO);
    }

    #[test]
    fn test_default_camera_angles() {
        let angles = Camera::default().view_angles();
        assert!((angles.azimuth + 135.0).abs() < 1e-9);
        // atan(1 / sqrt(2))
        assert!((angles.elevation + 35.264389682754654).abs() < 1e-9);
    }

    #[test]
    fn test_negative_y_azimuth() {
        let angles = angles_for(DVec3::new(0.0, -1.0, 0.0));
        assert!((angles.azimuth + 90.0).abs() < 1e-12);
        assert_eq!(angles.elevation, 0.0);
    }

    #[test]
    fn test_non_finite_direction_falls_back() {
        let angles = angles_for(DVec3::new(f64::NAN, 1.0, 0.0));
        assert_eq!(angles, ViewAngles::default());
    }

    #[test]
    fn test_eye_direction_axes() {
        assert!((ViewAngles::new(0.0, 0.0).eye_direction() - DVec3::X).length() < 1e-12);
        assert!((ViewAngles::new(90.0, 0.0).eye_direction() - DVec3::Y).length() < 1e-12);
        assert!((ViewAngles::new(0.0, 90.0).eye_direction() - DVec3::Z).length() < 1e-12);
    }

    #[test]
    fn test_depth_orders_along_view() {
        let angles = ViewAngles::new(0.0, 0.0);
        // Viewer sits on +X, so -X is farther away
        assert!(angles.depth(DVec3::new(-5.0, 0.0, 0.0)) > angles.depth(DVec3::new(5.0, 0.0, 0.0)));
    }
}
