use egui::{self, RichText};

use crate::db::Database;
use crate::models::Complaint;
use crate::ui::{state::AppState, theme::{Colors, Icons}};
use crate::utils::date::format_date;

pub struct ComplaintListView {
    /// Cache
    complaints_cache: Vec<Complaint>,
    /// Bild-URI:er som registrerats i egui (för att kunna släppas vid refresh)
    image_uris: Vec<String>,
    needs_refresh: bool,
}

impl ComplaintListView {
    pub fn new() -> Self {
        Self {
            complaints_cache: Vec::new(),
            image_uris: Vec::new(),
            needs_refresh: true,
        }
    }

    pub fn show(&mut self, ui: &mut egui::Ui, _state: &mut AppState, db: &Database) {
        if self.needs_refresh {
            self.refresh(ui.ctx(), db);
            self.needs_refresh = false;
        }

        ui.horizontal(|ui| {
            ui.heading(format!("{} Registered Complaints", Icons::FOLDER));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button(Icons::REFRESH).on_hover_text("Refresh").clicked() {
                    self.needs_refresh = true;
                }
                ui.label(
                    RichText::new(format!("{} complaints", self.complaints_cache.len()))
                        .color(Colors::TEXT_SECONDARY),
                );
            });
        });

        ui.add_space(8.0);

        if self.complaints_cache.is_empty() {
            ui.label(RichText::new("No complaints registered yet").color(Colors::INFO));
            return;
        }

        egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            egui::Grid::new("complaints_grid")
                .num_columns(5)
                .striped(true)
                .spacing([16.0, 6.0])
                .show(ui, |ui| {
                    ui.label(RichText::new("Complaint No").strong());
                    ui.label(RichText::new("Area").strong());
                    ui.label(RichText::new("Issue").strong());
                    ui.label(RichText::new("Date").strong());
                    ui.label(RichText::new("Status").strong());
                    ui.end_row();

                    for complaint in &self.complaints_cache {
                        ui.monospace(&complaint.complaint_no);
                        ui.label(&complaint.area);
                        ui.label(issue_label(complaint));
                        ui.label(date_label(complaint));
                        ui.label(RichText::new(&complaint.status).color(Colors::SUCCESS));
                        ui.end_row();
                    }
                });

            ui.add_space(12.0);
            ui.separator();

            for complaint in &self.complaints_cache {
                Self::show_details(ui, complaint);
            }
        });
    }

    fn show_details(ui: &mut egui::Ui, complaint: &Complaint) {
        egui::CollapsingHeader::new(format!("{} · {}", complaint.complaint_no, complaint.area))
            .id_salt(("complaint_details", complaint.id))
            .show(ui, |ui| {
                ui.label(format!("{} {}", Icons::LOCATION, complaint.area));
                ui.label(issue_label(complaint));
                ui.label(format!("{} {}", Icons::CALENDAR, date_label(complaint)));
                ui.label(format!("{} {}", Icons::PHONE, complaint.phone));
                ui.add_space(4.0);
                ui.label(&complaint.description);

                if complaint.has_image() {
                    ui.add_space(4.0);
                    ui.add(
                        egui::Image::new(image_uri(complaint))
                            .max_width(320.0)
                            .max_height(240.0),
                    );
                } else {
                    ui.label(RichText::new("No photo").small().color(Colors::TEXT_MUTED));
                }
            });
    }

    /// Läs om alla ärenden och registrera deras bilder hos egui
    fn refresh(&mut self, ctx: &egui::Context, db: &Database) {
        for uri in self.image_uris.drain(..) {
            ctx.forget_image(&uri);
        }

        self.complaints_cache = db.complaints().list_all();

        for complaint in &self.complaints_cache {
            if let Some(bytes) = &complaint.image {
                let uri = image_uri(complaint);
                ctx.include_bytes(uri.clone(), bytes.clone());
                self.image_uris.push(uri);
            }
        }
    }

    pub fn mark_needs_refresh(&mut self) {
        self.needs_refresh = true;
    }
}

fn issue_label(complaint: &Complaint) -> String {
    match complaint.issue() {
        Some(issue) => format!("{} {}", issue.icon(), issue.label()),
        None => complaint.issue_type.clone(),
    }
}

fn date_label(complaint: &Complaint) -> String {
    complaint
        .date_reported
        .map(format_date)
        .unwrap_or_else(|| "Unknown".to_string())
}

fn image_uri(complaint: &Complaint) -> String {
    format!("bytes://complaint/{}/{}", complaint.id, complaint.complaint_no)
}
