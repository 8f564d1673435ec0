//! Huvudapplikation för NivasiSahay

use eframe::egui;
use std::sync::Arc;

use crate::db::Database;
use crate::models::AppSettings;
use crate::ui::{
    state::AppState,
    theme::{configure_style, Colors, Icons},
    views::{ComplaintListView, RegisterView},
    StatusType, View,
};

/// Huvudapplikation
pub struct NivasiApp {
    db: Arc<Database>,
    state: AppState,
    app_settings: AppSettings,

    // Vyer
    register: RegisterView,
    complaint_list: ComplaintListView,

    // Intern
    style_initialized: bool,
}

impl NivasiApp {
    /// Skapa ny applikation
    pub fn new(cc: &eframe::CreationContext<'_>, app_settings: AppSettings) -> Self {
        // Bildladdare för foton (bytes://)
        egui_extras::install_image_loaders(&cc.egui_ctx);

        // Öppna databas
        let db_path = app_settings.resolved_database_path();
        tracing::info!("Öppnar databas: {:?}", db_path);

        let db = match Database::open(&db_path) {
            Ok(db) => {
                if let Err(e) = db.ensure_schema() {
                    tracing::error!("Kunde inte förbereda schemat: {}", e);
                }
                Arc::new(db)
            }
            Err(e) => {
                tracing::error!("Kunde inte öppna databas: {}", e);
                // Försök med in-memory som fallback
                match Database::open_in_memory() {
                    Ok(db) => Arc::new(db),
                    Err(e) => {
                        tracing::error!("Kunde inte skapa in-memory databas: {}", e);
                        std::process::exit(1);
                    }
                }
            }
        };

        let mut state = AppState::new();
        state.dark_mode = app_settings.dark_mode;

        Self {
            db,
            state,
            app_settings,
            register: RegisterView::new(),
            complaint_list: ComplaintListView::new(),
            style_initialized: false,
        }
    }

    /// Navigera och uppdatera relevanta vyer
    fn navigate_to(&mut self, view: View) {
        let old = self.state.current_view;
        self.state.current_view = view;
        if old != view && view == View::ViewComplaints {
            self.complaint_list.mark_needs_refresh();
        }
    }

    fn toggle_dark_mode(&mut self, ctx: &egui::Context) {
        self.state.dark_mode = !self.state.dark_mode;
        configure_style(ctx, self.state.dark_mode);

        self.app_settings.dark_mode = self.state.dark_mode;
        if let Err(e) = self.app_settings.save() {
            tracing::warn!("Kunde inte spara inställningar: {}", e);
        }
    }
}

impl eframe::App for NivasiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.style_initialized {
            configure_style(ctx, self.state.dark_mode);
            self.style_initialized = true;
        }

        // Rensa gamla statusmeddelanden
        self.state.clear_old_status();

        // Topbar
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(format!("{} NivasiSahay", Icons::HOME));
                ui.label(
                    egui::RichText::new("Register Civic Issues with Proof")
                        .small()
                        .color(Colors::TEXT_SECONDARY),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_icon = if self.state.dark_mode { "🌙" } else { "☀" };
                    if ui.button(mode_icon).clicked() {
                        self.toggle_dark_mode(ctx);
                    }

                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                            .small()
                            .weak(),
                    );
                });
            });
        });

        // Meny
        egui::SidePanel::left("menu_panel")
            .resizable(false)
            .default_width(180.0)
            .show(ctx, |ui| {
                ui.add_space(8.0);
                ui.label(egui::RichText::new("Menu").strong());
                ui.add_space(4.0);

                let mut selected = self.state.current_view;
                for view in View::ALL {
                    ui.radio_value(&mut selected, *view, view.label());
                }
                if selected != self.state.current_view {
                    self.navigate_to(selected);
                }
            });

        // Statusbar
        if let Some(ref status) = self.state.status_message {
            egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
                let color = match status.status_type {
                    StatusType::Success => Colors::SUCCESS,
                    StatusType::Error => Colors::ERROR,
                    StatusType::Warning => Colors::WARNING,
                    StatusType::Info => Colors::INFO,
                };
                ui.colored_label(color, &status.text);
            });
        }

        // Huvudinnehåll
        egui::CentralPanel::default().show(ctx, |ui| match self.state.current_view {
            View::RegisterComplaint => {
                if self.register.show(ui, &mut self.state, &self.db) {
                    self.complaint_list.mark_needs_refresh();
                }
            }
            View::ViewComplaints => {
                self.complaint_list.show(ui, &mut self.state, &self.db);
            }
        });
    }
}
