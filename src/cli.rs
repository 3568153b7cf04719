// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;
use glam::DVec3;

use crate::renderer::RenderOptions;

#[derive(Parser, Debug, Clone)]
#[command(name = "hidden-surface-viewer")]
#[command(about = "Place primitive shapes and view them from an orbiting camera", long_about = None)]
pub struct Cli {
    /// Render once to --output instead of opening a window
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// Output image for headless mode (.png or .svg)
    #[arg(long, default_value = "scene.png")]
    pub output: PathBuf,

    /// JSON file used to pre-populate the scene
    #[arg(long)]
    pub scene: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long, default_value_t = 1000)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Camera position as X,Y,Z
    #[arg(long, value_parser = parse_vec3, default_value = "10,10,10", allow_hyphen_values = true)]
    pub camera: DVec3,

    /// Look-at point as X,Y,Z
    #[arg(long = "look-at", value_parser = parse_vec3, default_value = "0,0,0", allow_hyphen_values = true)]
    pub look_at: DVec3,

    /// Skip the labelled axis panels
    #[arg(long = "no-axes", default_value = "false")]
    pub no_axes: bool,
}

impl Cli {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: self.width,
            height: self.height,
            axes: !self.no_axes,
        }
    }
}

/// Parse `"x,y,z"` into a vector
pub fn parse_vec3(s: &str) -> Result<DVec3, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected X,Y,Z but got {:?}", s));
    }

    let mut values = [0.0f64; 3];
    for (value, part) in values.iter_mut().zip(&parts) {
        *value = part
            .parse::<f64>()
            .map_err(|e| format!("invalid coordinate {:?}: {}", part, e))?;
        if !value.is_finite() {
            return Err(format!("coordinate {:?} is not finite", part));
        }
    }
    Ok(DVec3::from_array(values))
}
