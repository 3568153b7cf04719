use anyhow::{Context, Result};
use glam::DVec3;
use log::info;
use serde::Deserialize;
use std::path::Path;

use crate::camera::Camera;
use crate::scene::Scene;

/// JSON seed used to pre-populate a session
#[derive(Debug, Clone, Deserialize)]
pub struct SceneFile {
    #[serde(default)]
    pub camera: Option<Camera>,
    #[serde(default)]
    pub objects: Vec<ObjectRecord>,
}

/// One object entry; the shape tag stays textual until validated
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectRecord {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub position: DVec3,
    #[serde(default = "default_scale")]
    pub scale: f64,
}

fn default_scale() -> f64 {
    1.0
}

impl SceneFile {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Malformed scene JSON")
    }

    /// Build a scene, failing on the first invalid record
    pub fn to_scene(&self) -> Result<Scene> {
        let mut scene = Scene::new();
        for (index, record) in self.objects.iter().enumerate() {
            scene
                .add_object_named(&record.kind, record.position, record.scale)
                .with_context(|| format!("Invalid object at index {}", index))?;
        }
        Ok(scene)
    }
}

/// Load a scene seed file, returning the scene and its optional camera
pub fn load_scene_file(path: impl AsRef<Path>) -> Result<(Scene, Option<Camera>)> {
    let path = path.as_ref();
    info!("Loading scene file: {:?}", path);

    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read scene file: {:?}", path))?;
    let file = SceneFile::from_json(&json)
        .with_context(|| format!("Failed to parse scene file: {:?}", path))?;
    let scene = file.to_scene()?;

    info!("Scene file loaded: {} objects", scene.len());
    Ok((scene, file.camera))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ShapeKind;

    #[test]
    fn test_parse_full_file() {
        let file = SceneFile::from_json(
            r#"{
                "camera": { "position": [1, 2, 3], "look_at": [0, 0, 0] },
                "objects": [
                    { "type": "Cube", "position": [0, 0, 0], "scale": 1.5 },
                    { "type": "cone" }
                ]
            }"#,
        )
        .unwrap();

        let camera = file.camera.unwrap();
        assert_eq!(camera.position, DVec3::new(1.0, 2.0, 3.0));

        let scene = file.to_scene().unwrap();
        assert_eq!(scene.len(), 2);
        assert_eq!(scene.objects()[0].scale(), 1.5);
        assert_eq!(scene.objects()[1].kind(), ShapeKind::Cone);
        assert_eq!(scene.objects()[1].position(), DVec3::ZERO);
        assert_eq!(scene.objects()[1].scale(), 1.0);
    }

    #[test]
    fn test_empty_object_is_valid() {
        let file = SceneFile::from_json("{}").unwrap();
        assert!(file.camera.is_none());
        assert!(file.to_scene().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_type_reports_index() {
        let file = SceneFile::from_json(
            r#"{ "objects": [ { "type": "Sphere" }, { "type": "Torus" } ] }"#,
        )
        .unwrap();
        let err = file.to_scene().unwrap_err();
        assert!(format!("{:#}", err).contains("index 1"));
        assert!(format!("{:#}", err).contains("Torus"));
    }

    #[test]
    fn test_malformed_json() {
        assert!(SceneFile::from_json("{ objects: ").is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(load_scene_file("/nonexistent/scene.json").is_err());
    }
}
