pub mod camera;
pub mod cli;
pub mod error;
pub mod frame;
pub mod loaders;
pub mod math;
pub mod renderer;
pub mod scene;
pub mod session;
pub mod shapes;
pub mod types;
pub mod viewer;

pub use camera::{Camera, ViewAngles};
pub use error::{RenderError, SceneError};
pub use renderer::{RenderOptions, Renderer};
pub use scene::Scene;
pub use session::{Controls, Session};
pub use types::{SceneObject, ShapeKind};
