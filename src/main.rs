use anyhow::Result;
use clap::Parser;
use log::info;
use winit::event_loop::EventLoop;

use hidden_surface_viewer::cli::Cli;
use hidden_surface_viewer::loaders::load_scene_file;
use hidden_surface_viewer::viewer::ViewerApp;
use hidden_surface_viewer::{Controls, Scene, Session};

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let (scene, seed_camera) = match &cli.scene {
        Some(path) => load_scene_file(path)?,
        None => (Scene::new(), None),
    };

    let mut controls = Controls {
        camera_position: cli.camera,
        look_at: cli.look_at,
        ..Controls::default()
    };
    if let Some(camera) = &seed_camera {
        controls.set_camera(camera);
    }

    let mut session = Session::with_scene(scene, cli.render_options());

    if cli.no_ui {
        session.render_to_file(&controls, &cli.output)?;
        return Ok(());
    }

    let event_loop = EventLoop::new()?;
    let mut app = ViewerApp::new(session, controls);

    info!("Hidden Surface Viewer - Escape to quit");
    event_loop.run_app(&mut app)?;

    Ok(())
}
