use chrono::NaiveDate;
use std::fmt;
use uuid::Uuid;

/// Prefix för ärendenummer
pub const COMPLAINT_NO_PREFIX: &str = "NS-";

/// Antal hex-tecken efter prefixet
pub const COMPLAINT_NO_HEX_LEN: usize = 8;

/// Status som sätts vid registrering (inga övergångar finns)
pub const STATUS_REGISTERED: &str = "Registered";

/// Typ av problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum IssueType {
    #[default]
    WaterSupply,
    Garbage,
    Streetlight,
    Drainage,
    RoadDamage,
}

impl IssueType {
    pub const ALL: &'static [Self] = &[
        Self::WaterSupply,
        Self::Garbage,
        Self::Streetlight,
        Self::Drainage,
        Self::RoadDamage,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::WaterSupply => "Water Supply",
            Self::Garbage => "Garbage",
            Self::Streetlight => "Streetlight",
            Self::Drainage => "Drainage",
            Self::RoadDamage => "Road Damage",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::WaterSupply => "🚰",
            Self::Garbage => "🗑",
            Self::Streetlight => "💡",
            Self::Drainage => "🌊",
            Self::RoadDamage => "🚧",
        }
    }

    /// Tolka etiketten som den lagras i databasen
    pub fn from_db_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.label() == s)
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Obligatoriska formulärfält
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Area,
    Description,
    Phone,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Area => "area",
            Self::Description => "description",
            Self::Phone => "phone",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Ett eller flera obligatoriska fält saknas
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Missing required fields: {}", field_list(.missing))]
pub struct ValidationError {
    pub missing: Vec<Field>,
}

fn field_list(fields: &[Field]) -> String {
    fields
        .iter()
        .map(Field::label)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Indata för ett nytt ärende
#[derive(Debug, Clone, Default)]
pub struct NewComplaint {
    pub area: String,
    pub issue_type: IssueType,
    pub description: String,
    pub phone: String,
    pub image: Option<Vec<u8>>,
}

impl NewComplaint {
    pub fn new(
        area: impl Into<String>,
        issue_type: IssueType,
        description: impl Into<String>,
        phone: impl Into<String>,
        image: Option<Vec<u8>>,
    ) -> Self {
        Self {
            area: area.into(),
            issue_type,
            description: description.into(),
            phone: phone.into(),
            image,
        }
    }

    /// Kontrollera att alla obligatoriska fält har innehåll.
    /// Telefonnumret formatvalideras inte.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing: Vec<Field> = [
            (Field::Area, &self.area),
            (Field::Description, &self.description),
            (Field::Phone, &self.phone),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { missing })
        }
    }

    /// Bilddata att spara; en tom byte-sekvens räknas som ingen bild
    pub fn image_bytes(&self) -> Option<&[u8]> {
        self.image.as_deref().filter(|bytes| !bytes.is_empty())
    }
}

/// Ett registrerat ärende
#[derive(Debug, Clone, PartialEq)]
pub struct Complaint {
    pub id: i64,
    pub complaint_no: String,
    pub area: String,
    pub issue_type: String,
    pub description: String,
    pub phone: String,
    pub image: Option<Vec<u8>>,
    /// None om raden saknar datum eller har ett datum som inte är ISO
    pub date_reported: Option<NaiveDate>,
    pub status: String,
}

impl Complaint {
    pub fn issue(&self) -> Option<IssueType> {
        IssueType::from_db_str(&self.issue_type)
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}

/// Generera ett nytt ärendenummer, t.ex. `NS-3FA91C0B`.
///
/// Kollisioner kontrolleras inte; sannolikheten är låg men inte noll.
pub fn generate_complaint_no() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!(
        "{}{}",
        COMPLAINT_NO_PREFIX,
        hex[..COMPLAINT_NO_HEX_LEN].to_uppercase()
    )
}

/// Kontrollera formatet `NS-` följt av 8 versala hex-tecken
pub fn is_valid_complaint_no(s: &str) -> bool {
    let Some(rest) = s.strip_prefix(COMPLAINT_NO_PREFIX) else {
        return false;
    };

    rest.len() == COMPLAINT_NO_HEX_LEN
        && rest
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
}
