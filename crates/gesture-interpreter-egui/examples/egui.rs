use eframe::{NativeOptions, egui};
use gesture_interpreter::math::{DVec3, Pos2};
use gesture_interpreter_egui::prelude::*;
use tracing_subscriber::EnvFilter;

/// Screen points per world unit
const POINTS_PER_UNIT: f32 = 100.0;

const CUBE_CORNERS: [[f64; 3]; 8] = [
    [-0.5, -0.5, -0.5],
    [0.5, -0.5, -0.5],
    [0.5, 0.5, -0.5],
    [-0.5, 0.5, -0.5],
    [-0.5, -0.5, 0.5],
    [0.5, -0.5, 0.5],
    [0.5, 0.5, 0.5],
    [-0.5, 0.5, 0.5],
];

const CUBE_EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

struct ExampleApp {
    interpreter: GestureInterpreter,
    config: GestureConfig,
    transform: Transform,
}

impl ExampleApp {
    fn new() -> Self {
        let interpreter = GestureInterpreter::default();
        let transform = Transform {
            scale: interpreter.scale(),
            ..Default::default()
        };

        Self {
            config: *interpreter.config(),
            interpreter,
            transform,
        }
    }

    fn draw_target(&mut self, ui: &mut egui::Ui) {
        let results = self.interpreter.interact(ui, &mut self.transform);
        for result in &results {
            tracing::debug!(?result, "gesture applied");
        }

        // The whole clipping area of the UI is used as viewport
        let viewport = ui.clip_rect();
        let center = viewport.center();
        let model_matrix = self.transform.model_matrix();

        let corners = CUBE_CORNERS.map(|corner| {
            let world = model_matrix.transform_point3(DVec3::from(corner));
            Pos2::new(
                center.x + world.x as f32 * POINTS_PER_UNIT,
                center.y - world.y as f32 * POINTS_PER_UNIT,
            )
        });

        let painter = ui.painter();
        for (from, to) in CUBE_EDGES {
            painter.line_segment(
                [corners[from], corners[to]],
                egui::Stroke::new(2.0, egui::Color32::WHITE),
            );
        }

        painter.text(
            viewport.left_bottom() + egui::vec2(8.0, -8.0),
            egui::Align2::LEFT_BOTTOM,
            format!("{:?}", self.interpreter.mode()),
            egui::FontId::monospace(14.0),
            egui::Color32::GRAY,
        );
    }

    fn draw_options(&mut self, ui: &mut egui::Ui) {
        ui.heading("Options");
        ui.separator();

        let mut changed = false;

        egui::Grid::new("options_grid")
            .num_columns(2)
            .show(ui, |ui| {
                ui.label("Rotation speed");
                changed |= ui
                    .add(egui::Slider::new(&mut self.config.rotation_speed, 0.05..=2.0))
                    .changed();
                ui.end_row();

                ui.label("Pan speed");
                changed |= ui
                    .add(egui::Slider::new(&mut self.config.pan_speed, 0.001..=0.05))
                    .changed();
                ui.end_row();

                ui.label("Zoom speed");
                changed |= ui
                    .add(egui::Slider::new(&mut self.config.zoom_speed, 0.001..=0.5))
                    .changed();
                ui.end_row();

                ui.label("Gestures");
                ui.horizontal(|ui| {
                    for kind in GestureKind::all() {
                        let mut enabled = self.config.gestures.contains(kind);
                        if ui.toggle_value(&mut enabled, format!("{kind:?}")).changed() {
                            changed = true;
                            if enabled {
                                self.config.gestures.insert(kind);
                            } else {
                                self.config.gestures.remove(kind);
                            }
                        }
                    }
                });
                ui.end_row();

                ui.label("One finger");
                egui::ComboBox::from_id_salt("one_finger_cb")
                    .selected_text(format!("{:?}", self.config.touch_mapping.one_finger))
                    .show_ui(ui, |ui| {
                        for kind in [None, Some(GestureKind::Rotate), Some(GestureKind::Pan)] {
                            changed |= ui
                                .selectable_value(
                                    &mut self.config.touch_mapping.one_finger,
                                    kind,
                                    format!("{kind:?}"),
                                )
                                .changed();
                        }
                    });
                ui.end_row();
            });

        if changed {
            match GestureInterpreter::new(self.config) {
                Ok(interpreter) => {
                    // A new interpreter starts at the minimum scale
                    self.interpreter = interpreter;
                    self.transform.scale = self.interpreter.scale();
                }
                Err(err) => tracing::warn!(%err, "keeping previous gesture config"),
            }
        }

        ui.separator();
        if ui.button("Reset target").clicked() {
            self.transform = Transform {
                scale: self.interpreter.scale(),
                ..Default::default()
            };
        }
    }
}

impl eframe::App for ExampleApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        egui::SidePanel::left("options_panel").show(ctx, |ui| {
            self.draw_options(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_target(ui);
        });
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    eframe::run_native(
        "gesture_interpreter_egui example",
        NativeOptions::default(),
        Box::new(|_| Ok(Box::new(ExampleApp::new()))),
    )
}
