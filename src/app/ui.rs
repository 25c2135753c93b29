use super::DocxTranslator;
use super::Status;
use crate::translate::Direction;
use crate::utils::human_size;
use eframe::egui::{self, Align2, Color32, RichText, Stroke};

const ACCENT: Color32 = Color32::from_rgb(64, 120, 192);
const SUCCESS_GREEN: Color32 = Color32::from_rgb(0, 180, 0);
const ERROR_RED: Color32 = Color32::from_rgb(220, 50, 50);

impl DocxTranslator {
    pub fn render(&mut self, ctx: &egui::Context) {
        // Files dragged over the window mark the drop target active; egui
        // clears hovered_files on its own when the drag leaves.
        let drag_active = ctx.input(|i| !i.raw.hovered_files.is_empty());
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if let Some(file) = dropped.first() {
            if let Some(path) = &file.path {
                self.handle_drop(path.clone());
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(20.0);
            ui.vertical_centered(|ui| {
                ui.heading("Docx Translator");
                ui.add_space(5.0);
                ui.label(
                    RichText::new("Translate Word documents between Arabic and English")
                        .color(ui.visuals().text_color().gamma_multiply(0.7)),
                );
            });

            ui.add_space(20.0);
            self.render_upload_area(ui, drag_active);

            ui.add_space(15.0);
            ui.horizontal(|ui| {
                ui.label("Direction:");
                egui::ComboBox::from_id_source("direction")
                    .selected_text(self.direction.label())
                    .show_ui(ui, |ui| {
                        for direction in Direction::ALL {
                            ui.selectable_value(&mut self.direction, direction, direction.label());
                        }
                    });
            });

            ui.add_space(15.0);
            ui.vertical_centered(|ui| {
                ui.add_enabled_ui(!self.state.status.is_busy(), |ui| {
                    let button =
                        egui::Button::new("🌐 Translate").min_size(egui::vec2(200.0, 40.0));
                    if ui.add(button).clicked() {
                        self.start_translation();
                    }
                });
            });

            ui.add_space(15.0);
            self.render_status(ui);
        });
    }

    fn render_upload_area(&mut self, ui: &mut egui::Ui, drag_active: bool) {
        let desired = egui::vec2(ui.available_width(), 110.0);
        let (rect, response) = ui.allocate_exact_size(desired, egui::Sense::click());

        let stroke = if drag_active {
            Stroke::new(2.0, ACCENT)
        } else {
            Stroke::new(1.0, ui.visuals().widgets.inactive.bg_stroke.color)
        };
        let fill = if drag_active {
            ui.visuals().extreme_bg_color
        } else {
            ui.visuals().faint_bg_color
        };
        ui.painter().rect(rect, 8.0, fill, stroke);

        let body_font = egui::TextStyle::Body.resolve(ui.style());
        let (line, color) = match &self.selected_file {
            Some(file) => (
                format!("📄 {} ({})", file.name, human_size(file.size)),
                ui.visuals().text_color(),
            ),
            None => (
                "Drop a .docx file here or click to browse".to_string(),
                ui.visuals().text_color().gamma_multiply(0.7),
            ),
        };
        ui.painter()
            .text(rect.center(), Align2::CENTER_CENTER, line, body_font, color);

        if response.clicked() {
            self.browse_for_file();
        }
    }

    fn render_status(&mut self, ui: &mut egui::Ui) {
        match &self.state.status {
            Status::Idle => {}
            Status::Busy(msg) => {
                ui.horizontal(|ui| {
                    ui.add(egui::Spinner::new());
                    ui.label(msg);
                });
            }
            Status::Success(msg) => {
                ui.colored_label(SUCCESS_GREEN, msg);
                if self.state.saved_path.is_some() {
                    ui.add_space(5.0);
                    if ui.button("📂 Open translated document").clicked() {
                        self.open_saved();
                    }
                }
            }
            Status::Error(msg) => {
                ui.colored_label(ERROR_RED, format!("Error: {}", msg));
            }
        }
    }
}
