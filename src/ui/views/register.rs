use egui::{self, RichText};
use std::path::Path;

use crate::db::Database;
use crate::models::IssueType;
use crate::ui::{
    state::{AppState, ComplaintFormData},
    theme::{Colors, Icons},
};
use crate::utils::{path::PHOTO_EXTENSIONS, photo::read_photo, AppError};

/// Resultat av senaste inskickningen
enum Outcome {
    Registered(String),
    Warning(String),
    Failed(String),
}

pub struct RegisterView {
    form_data: ComplaintFormData,
    outcome: Option<Outcome>,
    /// URI för förhandsvisning av valt foto
    preview_uri: Option<String>,
    picked_count: u32,
}

impl RegisterView {
    pub fn new() -> Self {
        Self {
            form_data: ComplaintFormData::default(),
            outcome: None,
            preview_uri: None,
            picked_count: 0,
        }
    }

    /// Visar formuläret och returnerar true om ett ärende registrerades
    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState, db: &Database) -> bool {
        let mut registered = false;

        ui.heading(format!("{} Register Your Problem", Icons::PIN));
        ui.add_space(8.0);

        egui::Grid::new("complaint_form_grid")
            .num_columns(2)
            .spacing([12.0, 10.0])
            .show(ui, |ui| {
                ui.label(format!("{} Area / Locality", Icons::LOCATION));
                ui.text_edit_singleline(&mut self.form_data.area);
                ui.end_row();

                ui.label("Type of Problem");
                egui::ComboBox::from_id_salt("issue_type")
                    .selected_text(self.form_data.issue_type.label())
                    .show_ui(ui, |ui| {
                        for issue in IssueType::ALL {
                            ui.selectable_value(
                                &mut self.form_data.issue_type,
                                *issue,
                                format!("{} {}", issue.icon(), issue.label()),
                            );
                        }
                    });
                ui.end_row();

                ui.label("Describe the problem");
                ui.add(
                    egui::TextEdit::multiline(&mut self.form_data.description)
                        .desired_rows(4)
                        .hint_text("Describe the problem clearly"),
                );
                ui.end_row();

                ui.label(format!("{} Photo (optional)", Icons::CAMERA));
                ui.horizontal(|ui| {
                    if ui.button("Choose image…").clicked() {
                        self.pick_photo(ui.ctx(), state);
                    }
                    let mut remove = false;
                    if let Some((name, _)) = &self.form_data.photo {
                        ui.label(RichText::new(name).small().color(Colors::TEXT_SECONDARY));
                        remove = ui.small_button(Icons::CROSS).on_hover_text("Remove photo").clicked();
                    }
                    if remove {
                        self.form_data.photo = None;
                        self.forget_preview(ui.ctx());
                    }
                });
                ui.end_row();

                ui.label(format!("{} Mobile Number", Icons::PHONE));
                ui.text_edit_singleline(&mut self.form_data.phone);
                ui.end_row();
            });

        if let Some(uri) = &self.preview_uri {
            ui.add_space(4.0);
            ui.add(
                egui::Image::new(uri.clone())
                    .max_width(240.0)
                    .max_height(180.0),
            );
        }

        ui.add_space(12.0);

        if ui
            .button(RichText::new("Submit Complaint").color(Colors::PRIMARY))
            .clicked()
        {
            registered = self.submit(state, db);
            if registered {
                self.forget_preview(ui.ctx());
            }
        }

        ui.add_space(12.0);

        match &self.outcome {
            Some(Outcome::Registered(complaint_no)) => {
                ui.label(
                    RichText::new(format!("{} Problem registered successfully!", Icons::CHECK))
                        .color(Colors::SUCCESS),
                );
                ui.label(
                    RichText::new(format!("{} Your Complaint Number: {}", Icons::RECEIPT, complaint_no))
                        .strong(),
                );
                ui.label(
                    RichText::new("Please save this number for future reference.")
                        .small()
                        .color(Colors::TEXT_MUTED),
                );
            }
            Some(Outcome::Warning(msg)) => {
                ui.label(RichText::new(msg).color(Colors::WARNING));
            }
            Some(Outcome::Failed(msg)) => {
                ui.label(RichText::new(msg).color(Colors::ERROR));
            }
            None => {}
        }

        registered
    }

    fn pick_photo(&mut self, ctx: &egui::Context, state: &mut AppState) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("Image", PHOTO_EXTENSIONS)
            .pick_file()
        else {
            return;
        };

        match read_photo(&path) {
            Ok(bytes) => {
                let name = file_name(&path);
                self.forget_preview(ctx);

                self.picked_count += 1;
                let uri = format!("bytes://form/{}/{}", self.picked_count, name);
                ctx.include_bytes(uri.clone(), bytes.clone());
                self.preview_uri = Some(uri);

                self.form_data.photo = Some((name, bytes));
            }
            Err(e) => {
                tracing::warn!("Kunde inte läsa foto {:?}: {}", path, e);
                state.show_warning(&e.to_string());
            }
        }
    }

    fn forget_preview(&mut self, ctx: &egui::Context) {
        if let Some(uri) = self.preview_uri.take() {
            ctx.forget_image(&uri);
        }
    }

    fn submit(&mut self, state: &mut AppState, db: &Database) -> bool {
        match db.complaints().create(&self.form_data.to_new_complaint()) {
            Ok(complaint_no) => {
                state.show_success(&format!("Complaint {} registered", complaint_no));
                self.form_data.clear();
                self.outcome = Some(Outcome::Registered(complaint_no));
                true
            }
            Err(AppError::Validation(e)) => {
                self.outcome = Some(Outcome::Warning(format!("Please fill all fields. {}", e)));
                false
            }
            Err(e) => {
                tracing::error!("Registrering misslyckades: {}", e);
                self.outcome = Some(Outcome::Failed(
                    "Could not register the complaint. Please try again later.".to_string(),
                ));
                state.show_error("Storage error");
                false
            }
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "photo".to_string())
}
