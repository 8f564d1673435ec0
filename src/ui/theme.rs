use egui::{Color32, FontFamily, FontId, TextStyle, Visuals};

/// Konfigurera applikationens utseende
pub fn configure_style(ctx: &egui::Context, dark_mode: bool) {
    let mut style = (*ctx.style()).clone();

    // Typsnitt
    style.text_styles = [
        (TextStyle::Heading, FontId::new(24.0, FontFamily::Proportional)),
        (TextStyle::Name("heading2".into()), FontId::new(18.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(14.0, FontFamily::Proportional)),
        (TextStyle::Monospace, FontId::new(13.0, FontFamily::Monospace)),
        (TextStyle::Button, FontId::new(14.0, FontFamily::Proportional)),
        (TextStyle::Small, FontId::new(12.0, FontFamily::Proportional)),
    ]
    .into();

    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.button_padding = egui::vec2(14.0, 6.0);
    style.spacing.text_edit_width = 320.0;

    style.visuals = if dark_mode { dark_visuals() } else { light_visuals() };

    ctx.set_style(style);
}

fn dark_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    visuals.panel_fill = Color32::from_rgb(24, 28, 26);
    visuals.window_fill = Color32::from_rgb(32, 37, 34);
    visuals.extreme_bg_color = Color32::from_rgb(16, 19, 17);
    visuals.faint_bg_color = Color32::from_rgb(30, 35, 32);

    visuals.widgets.inactive.bg_fill = Color32::from_rgb(44, 52, 47);
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(54, 66, 59);
    visuals.widgets.active.bg_fill = Color32::from_rgb(64, 82, 71);

    // Accentfärg (grön)
    visuals.selection.bg_fill = Color32::from_rgb(30, 120, 70);
    visuals.hyperlink_color = Color32::from_rgb(90, 200, 140);

    visuals
}

fn light_visuals() -> Visuals {
    let mut visuals = Visuals::light();

    visuals.panel_fill = Color32::from_rgb(247, 250, 248);
    visuals.window_fill = Color32::WHITE;
    visuals.extreme_bg_color = Color32::from_rgb(255, 255, 255);
    visuals.faint_bg_color = Color32::from_rgb(240, 246, 242);

    visuals.widgets.inactive.bg_fill = Color32::from_rgb(228, 236, 231);
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(214, 228, 219);
    visuals.widgets.active.bg_fill = Color32::from_rgb(196, 218, 204);

    // Accentfärg (grön)
    visuals.selection.bg_fill = Color32::from_rgb(187, 247, 208);
    visuals.hyperlink_color = Color32::from_rgb(21, 128, 61);

    visuals
}

/// Färgpalett för applikationen
pub struct Colors;

impl Colors {
    pub const PRIMARY: Color32 = Color32::from_rgb(22, 163, 74);

    pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);
    pub const WARNING: Color32 = Color32::from_rgb(234, 179, 8);
    pub const ERROR: Color32 = Color32::from_rgb(239, 68, 68);
    pub const INFO: Color32 = Color32::from_rgb(59, 130, 246);

    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(107, 114, 128);
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(156, 163, 175);
}

/// Ikoner (Unicode)
pub struct Icons;

impl Icons {
    pub const HOME: &'static str = "🏘";
    pub const PIN: &'static str = "📌";
    pub const FOLDER: &'static str = "📂";
    pub const RECEIPT: &'static str = "🧾";
    pub const CAMERA: &'static str = "📷";
    pub const LOCATION: &'static str = "📍";
    pub const PHONE: &'static str = "📞";
    pub const CALENDAR: &'static str = "📅";
    pub const REFRESH: &'static str = "🔄";
    pub const CHECK: &'static str = "✅";
    pub const CROSS: &'static str = "✗";
}
