use glam::DVec3;
use log::debug;

use crate::error::SceneError;
use crate::math::AABB;
use crate::types::{SceneObject, ShapeKind};

/// Ordered, append-only collection of placed shapes.
///
/// Insertion order is render order. Objects are never removed or edited.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new object to the end of the scene
    pub fn add_object(
        &mut self,
        kind: ShapeKind,
        position: DVec3,
        scale: f64,
    ) -> Result<&SceneObject, SceneError> {
        let object = SceneObject::new(kind, position, scale)?;
        self.objects.push(object);
        debug!(
            "Added {} at ({:.2}, {:.2}, {:.2}) scale {:.2}; scene holds {} objects",
            kind,
            position.x,
            position.y,
            position.z,
            scale,
            self.objects.len()
        );
        Ok(&self.objects[self.objects.len() - 1])
    }

    /// Append using a textual shape tag such as `"Cube"`
    pub fn add_object_named(
        &mut self,
        type_name: &str,
        position: DVec3,
        scale: f64,
    ) -> Result<&SceneObject, SceneError> {
        let kind = type_name.parse::<ShapeKind>()?;
        self.add_object(kind, position, scale)
    }

    /// Read-only view of every object in insertion order
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SceneObject> {
        self.objects.iter()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Bounds of all generated geometry, None for an empty scene
    pub fn bounds(&self) -> Option<AABB> {
        self.objects
            .iter()
            .filter_map(|obj| obj.kind().geometry(obj.position(), obj.scale()).bounds())
            .reduce(|acc, b| acc.union(&b))
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a SceneObject;
    type IntoIter = std::slice::Iter<'a, SceneObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}
