pub mod scene_file;

pub use scene_file::{load_scene_file, ObjectRecord, SceneFile};
