//! SQL-schema för NivasiSahay
//! Kolumnordningen är kompatibel med databaser från tidigare versioner

pub const COMPLAINTS_TABLE: &str = "complaints";

pub const CREATE_COMPLAINTS: &str = r#"
CREATE TABLE IF NOT EXISTS complaints (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    complaint_no TEXT,
    area TEXT,
    issue_type TEXT,
    description TEXT,
    phone TEXT,
    image BLOB,
    date_reported TEXT,
    status TEXT
);
"#;

/// Kolumner som lagts till efter första versionen: (namn, typ)
pub const ADDED_COLUMNS: &[(&str, &str)] = &[("image", "BLOB")];

/// Kolumn där första versionen sparade sökvägen till fotot
pub const LEGACY_IMAGE_PATH_COLUMN: &str = "image_path";
