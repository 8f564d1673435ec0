use chrono::NaiveDate;
use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, Row};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

use super::lock;
use crate::models::{generate_complaint_no, Complaint, NewComplaint, STATUS_REGISTERED};
use crate::utils::date::{parse_date, today};
use crate::utils::AppResult;

pub struct ComplaintRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ComplaintRepository {
    pub fn new(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    /// Registrera ett nytt ärende och returnera dess ärendenummer
    pub fn create(&self, complaint: &NewComplaint) -> AppResult<String> {
        self.create_on(complaint, today())
    }

    /// Som `create`, men med ett givet rapportdatum
    pub(crate) fn create_on(&self, complaint: &NewComplaint, date_reported: NaiveDate) -> AppResult<String> {
        complaint.validate()?;

        let complaint_no = generate_complaint_no();

        let conn = lock(&self.conn);
        conn.execute(
            "INSERT INTO complaints (complaint_no, area, issue_type, description, phone,
                                     image, date_reported, status)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                complaint_no,
                complaint.area.trim(),
                complaint.issue_type.label(),
                complaint.description.trim(),
                complaint.phone.trim(),
                complaint.image_bytes(),
                date_reported,
                STATUS_REGISTERED,
            ],
        )?;

        info!(
            "Registrerade ärende {} ({}, id {})",
            complaint_no,
            complaint.issue_type,
            conn.last_insert_rowid()
        );

        Ok(complaint_no)
    }

    /// Hämta alla ärenden, senaste först.
    ///
    /// Läsfel ger en tom lista i stället för ett fel.
    pub fn list_all(&self) -> Vec<Complaint> {
        let conn = lock(&self.conn);
        match Self::query_all(&conn) {
            Ok(complaints) => complaints,
            Err(e) => {
                warn!("Kunde inte läsa ärenden: {}", e);
                Vec::new()
            }
        }
    }

    fn query_all(conn: &Connection) -> rusqlite::Result<Vec<Complaint>> {
        let mut stmt = conn.prepare(
            "SELECT id, complaint_no, area, issue_type, description, phone,
                    image, date_reported, status
             FROM complaints
             ORDER BY id DESC",
        )?;

        let complaints = stmt
            .query_map([], Self::row_to_complaint)?
            .filter_map(|r| match r {
                Ok(complaint) => Some(complaint),
                Err(e) => {
                    warn!("Hoppar över oläsbar rad: {}", e);
                    None
                }
            })
            .collect();

        Ok(complaints)
    }

    /// Räkna antal ärenden
    pub fn count(&self) -> AppResult<i64> {
        let conn = lock(&self.conn);
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM complaints", [], |row| row.get(0))?;
        Ok(count)
    }

    /// Bara `id` måste kunna läsas; övriga kolumner tolkas tolerant så att
    /// äldre eller felaktiga rader ändå listas.
    fn row_to_complaint(row: &Row) -> rusqlite::Result<Complaint> {
        Ok(Complaint {
            id: row.get(0)?,
            complaint_no: text_at(row, 1)?,
            area: text_at(row, 2)?,
            issue_type: text_at(row, 3)?,
            description: text_at(row, 4)?,
            phone: text_at(row, 5)?,
            image: match row.get_ref(6)? {
                ValueRef::Blob(bytes) if !bytes.is_empty() => Some(bytes.to_vec()),
                _ => None,
            },
            date_reported: parse_date(&text_at(row, 7)?),
            status: text_at(row, 8)?,
        })
    }
}

/// Läs en textkolumn; NULL blir tom sträng och tal formateras som text
fn text_at(row: &Row, idx: usize) -> rusqlite::Result<String> {
    Ok(match row.get_ref(idx)? {
        ValueRef::Text(text) => String::from_utf8_lossy(text).into_owned(),
        ValueRef::Integer(i) => i.to_string(),
        ValueRef::Real(f) => f.to_string(),
        ValueRef::Null | ValueRef::Blob(_) => String::new(),
    })
}
