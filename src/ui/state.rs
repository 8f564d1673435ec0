/// Aktuell vy i applikationen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    RegisterComplaint,
    ViewComplaints,
}

impl View {
    pub const ALL: &'static [Self] = &[Self::RegisterComplaint, Self::ViewComplaints];

    pub fn label(&self) -> &'static str {
        match self {
            Self::RegisterComplaint => "Register Complaint",
            Self::ViewComplaints => "View Complaints",
        }
    }
}

/// Centraliserat applikationstillstånd
#[derive(Debug, Default)]
pub struct AppState {
    /// Aktuell vy
    pub current_view: View,

    /// Statusmeddelande
    pub status_message: Option<StatusMessage>,

    /// Dark mode
    pub dark_mode: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Visa statusmeddelande
    pub fn show_status(&mut self, message: &str, status_type: StatusType) {
        self.status_message = Some(StatusMessage {
            text: message.to_string(),
            status_type,
            created_at: std::time::Instant::now(),
        });
    }

    pub fn show_success(&mut self, message: &str) {
        self.show_status(message, StatusType::Success);
    }

    pub fn show_warning(&mut self, message: &str) {
        self.show_status(message, StatusType::Warning);
    }

    pub fn show_error(&mut self, message: &str) {
        self.show_status(message, StatusType::Error);
    }

    /// Rensa statusmeddelande om det är för gammalt
    pub fn clear_old_status(&mut self) {
        if let Some(ref status) = self.status_message {
            if status.created_at.elapsed().as_secs() > 5 {
                self.status_message = None;
            }
        }
    }
}

/// Statusmeddelande
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub status_type: StatusType,
    pub created_at: std::time::Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusType {
    Success,
    Error,
    Info,
    Warning,
}

/// Formulärdata för nytt ärende
#[derive(Debug, Default, Clone)]
pub struct ComplaintFormData {
    pub area: String,
    pub issue_type: crate::models::IssueType,
    pub description: String,
    pub phone: String,
    /// Valt foto: filnamn och bytes
    pub photo: Option<(String, Vec<u8>)>,
}

impl ComplaintFormData {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn to_new_complaint(&self) -> crate::models::NewComplaint {
        crate::models::NewComplaint::new(
            self.area.clone(),
            self.issue_type,
            self.description.clone(),
            self.phone.clone(),
            self.photo.as_ref().map(|(_, bytes)| bytes.clone()),
        )
    }
}
