use crate::camera::ViewAngles;
use crate::session::{Controls, CAMERA_RANGE, SCALE_RANGE};
use crate::types::ShapeKind;

pub const TITLE: &str = "Hidden Surface Elimination - 3D Viewer";

/// What the user did with the side panel this pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PanelResponse {
    pub changed: bool,
    pub add: bool,
}

impl PanelResponse {
    pub fn merge(self, other: PanelResponse) -> PanelResponse {
        PanelResponse {
            changed: self.changed || other.changed,
            add: self.add || other.add,
        }
    }

    pub fn needs_render(&self) -> bool {
        self.changed || self.add
    }
}

/// Read-only facts shown under the controls
#[derive(Debug, Clone, Default)]
pub struct PanelStatus {
    pub object_count: usize,
    pub angles: ViewAngles,
    pub error: Option<String>,
}

/// Left side panel: camera sliders and the add-object form
pub fn show_controls(
    ctx: &egui::Context,
    controls: &mut Controls,
    status: &PanelStatus,
) -> PanelResponse {
    let mut response = PanelResponse::default();

    egui::SidePanel::left("controls")
        .resizable(false)
        .default_width(260.0)
        .show(ctx, |ui| {
            ui.heading("Camera Settings");
            for (label, value) in [
                ("Camera X", &mut controls.camera_position.x),
                ("Camera Y", &mut controls.camera_position.y),
                ("Camera Z", &mut controls.camera_position.z),
                ("Look At X", &mut controls.look_at.x),
                ("Look At Y", &mut controls.look_at.y),
                ("Look At Z", &mut controls.look_at.z),
            ] {
                response.changed |= ui
                    .add(egui::Slider::new(value, CAMERA_RANGE).text(label))
                    .changed();
            }

            ui.separator();
            ui.heading("Add 3D Object");

            egui::ComboBox::from_label("Object Type")
                .selected_text(controls.shape.name())
                .show_ui(ui, |ui| {
                    for kind in ShapeKind::ALL {
                        ui.selectable_value(&mut controls.shape, kind, kind.name());
                    }
                });

            for (label, value) in [
                ("X Position", &mut controls.object_position.x),
                ("Y Position", &mut controls.object_position.y),
                ("Z Position", &mut controls.object_position.z),
            ] {
                ui.horizontal(|ui| {
                    ui.label(label);
                    ui.add(egui::DragValue::new(value).speed(0.1));
                });
            }

            ui.add(egui::Slider::new(&mut controls.scale, SCALE_RANGE).text("Scale"));

            response.add = ui.button("Add Object").clicked();

            ui.separator();
            ui.label(format!("Objects: {}", status.object_count));
            ui.label(format!(
                "Azimuth {:.1}°  Elevation {:.1}°",
                status.angles.azimuth, status.angles.elevation
            ));
            if let Some(error) = &status.error {
                ui.colored_label(egui::Color32::RED, error);
            }
        });

    response
}

/// Central panel showing the last rendered image
pub fn show_scene(ctx: &egui::Context, texture: Option<&egui::TextureHandle>) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(TITLE);
        match texture {
            Some(texture) => {
                ui.add(
                    egui::Image::from_texture(egui::load::SizedTexture::from_handle(texture))
                        .shrink_to_fit(),
                );
            }
            None => {
                ui.label("Rendering…");
            }
        }
    });
}
