use std::fmt;
use std::str::FromStr;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::error::SceneError;

/// The five primitive shapes a scene can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Cube,
    Sphere,
    Pyramid,
    Cone,
    Cylinder,
}

impl ShapeKind {
    /// All kinds in selector order
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Cube,
        ShapeKind::Sphere,
        ShapeKind::Pyramid,
        ShapeKind::Cone,
        ShapeKind::Cylinder,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ShapeKind::Cube => "Cube",
            ShapeKind::Sphere => "Sphere",
            ShapeKind::Pyramid => "Pyramid",
            ShapeKind::Cone => "Cone",
            ShapeKind::Cylinder => "Cylinder",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = SceneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(tag))
            .ok_or_else(|| SceneError::UnsupportedShapeType(s.to_string()))
    }
}

/// A placed primitive: kind, centre position and uniform scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SceneObject {
    kind: ShapeKind,
    position: DVec3,
    scale: f64,
}

impl SceneObject {
    /// Validated constructor; rejects non-finite positions and non-positive scales
    pub fn new(kind: ShapeKind, position: DVec3, scale: f64) -> Result<Self, SceneError> {
        if !position.is_finite() {
            return Err(SceneError::InvalidPosition {
                x: position.x,
                y: position.y,
                z: position.z,
            });
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(SceneError::InvalidScale(scale));
        }

        Ok(Self {
            kind,
            position,
            scale,
        })
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}
