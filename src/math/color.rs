use glam::DVec3;

/// 8-bit RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const CYAN: Rgb = Rgb(0, 255, 255);
    pub const ORANGE: Rgb = Rgb(255, 165, 0);
    pub const PURPLE: Rgb = Rgb(128, 0, 128);
    pub const GREEN: Rgb = Rgb(0, 128, 0);
    pub const BROWN: Rgb = Rgb(165, 42, 42);

    /// Scale every channel by `factor`, clamped to [0, 1]
    pub fn scaled(self, factor: f64) -> Rgb {
        let f = factor.clamp(0.0, 1.0);
        let channel = |c: u8| (c as f64 * f).round() as u8;
        Rgb(channel(self.0), channel(self.1), channel(self.2))
    }
}

/// Azimuth/altitude (degrees) of the light used to shade surfaces
pub const LIGHT_AZIMUTH_DEG: f64 = 225.0;
pub const LIGHT_ALTITUDE_DEG: f64 = 19.4712;

/// Unit vector pointing toward the light source
pub fn light_direction() -> DVec3 {
    // azimuth is measured clockwise from north
    let az = (90.0 - LIGHT_AZIMUTH_DEG).to_radians();
    let alt = LIGHT_ALTITUDE_DEG.to_radians();
    DVec3::new(az.cos() * alt.cos(), az.sin() * alt.cos(), alt.sin())
}

/// Brightness factor for a face normal, in [0.3, 1.0]
///
/// Zero or non-finite normals leave the colour untouched.
pub fn shade_factor(normal: DVec3) -> f64 {
    let n = normal.normalize_or_zero();
    if n == DVec3::ZERO {
        return 1.0;
    }
    let d = n.dot(light_direction()).clamp(-1.0, 1.0);
    0.3 + 0.7 * (d + 1.0) * 0.5
}
