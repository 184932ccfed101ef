use crate::prelude::*;
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

pub struct ConfigEguiPlugin;

impl Plugin for ConfigEguiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, configure_visuals_system)
            .add_systems(Update, ui_system);
    }
}

fn configure_visuals_system(mut contexts: EguiContexts) {
    contexts.ctx_mut().set_visuals(egui::Visuals {
        window_corner_radius: 0.0.into(),
        ..Default::default()
    });
}

/// True once the user finished editing a control: a slider drag released, or
/// a discrete edit (click, keyboard entry). Intermediate drag values never
/// count, so a 100k-point regeneration cannot fire per mouse-move.
fn committed(response: &egui::Response) -> bool {
    response.drag_stopped() || (response.changed() && !response.dragged())
}

fn ui_system(
    mut contexts: EguiContexts,
    mut ui_config: ResMut<GalaxyConfigUi>,
    mut galaxy_config: ResMut<GalaxyConfig>,
    mut color_dirty: Local<bool>,
) {
    let ctx = contexts.ctx_mut();

    let minval = GalaxyConfig::MIN;
    let maxval = GalaxyConfig::MAX;

    let mut commit = false;
    egui::SidePanel::left("side_panel")
        .default_width(240.0)
        .show(ctx, |ui| {
            ui.heading("Galaxy");

            commit |= committed(&ui.add(
                egui::Slider::new(&mut ui_config.count, minval.count..=maxval.count)
                    .step_by(100.0)
                    .text("Count"),
            ));
            commit |= committed(&ui.add(
                egui::Slider::new(&mut ui_config.size, minval.size..=maxval.size)
                    .step_by(0.01)
                    .text("Size"),
            ));
            commit |= committed(&ui.add(
                egui::Slider::new(&mut ui_config.radius, minval.radius..=maxval.radius)
                    .step_by(1.0)
                    .text("Radius"),
            ));
            commit |= committed(&ui.add(
                egui::Slider::new(&mut ui_config.branches, minval.branches..=maxval.branches)
                    .text("Branches"),
            ));
            commit |= committed(&ui.add(
                egui::Slider::new(&mut ui_config.spin, minval.spin..=maxval.spin)
                    .step_by(0.001)
                    .text("Spin"),
            ));
            commit |= committed(&ui.add(
                egui::Slider::new(&mut ui_config.randomness, minval.randomness..=maxval.randomness)
                    .step_by(0.001)
                    .text("Randomness"),
            ));
            commit |= committed(&ui.add(
                egui::Slider::new(
                    &mut ui_config.randomness_power,
                    minval.randomness_power..=maxval.randomness_power,
                )
                .step_by(0.001)
                .text("Randomness Power"),
            ));

            ui.separator();

            // The picker streams changes while the mouse is down; hold them
            // until the pointer is released so the commit fires once.
            ui.horizontal(|ui| {
                *color_dirty |= ui
                    .color_edit_button_rgb(&mut ui_config.inside_color)
                    .changed();
                ui.label("Inside Color");
            });
            ui.horizontal(|ui| {
                *color_dirty |= ui
                    .color_edit_button_rgb(&mut ui_config.outside_color)
                    .changed();
                ui.label("Outside Color");
            });
        });

    if *color_dirty && !ctx.input(|i| i.pointer.any_down()) {
        *color_dirty = false;
        commit = true;
    }

    if commit {
        ui_config.commit(&mut galaxy_config);
    }
}
