pub mod schema;
pub mod migrations;
pub mod complaint_repo;

use anyhow::Result;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

pub use complaint_repo::ComplaintRepository;

use crate::utils::AppResult;

/// Huvuddatabas-wrapper med thread-safe access
pub struct Database {
    conn: Arc<Mutex<Connection>>,
    /// Katalog som relativa fotosökvägar från äldre versioner tolkas mot
    base_dir: PathBuf,
}

impl Database {
    /// Öppna eller skapa databas
    pub fn open(path: &Path) -> Result<Self> {
        // Skapa katalog om den inte finns
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;

        // Konfigurera SQLite
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA busy_timeout = 5000;
            "
        )?;

        let base_dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
            base_dir,
        })
    }

    /// Öppna in-memory databas (för tester)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;

        let db = Self {
            conn: Arc::new(Mutex::new(conn)),
            base_dir: PathBuf::from("."),
        };
        db.ensure_schema()?;
        Ok(db)
    }

    /// Skapa/uppgradera schemat. Körs en gång vid start.
    pub fn ensure_schema(&self) -> AppResult<()> {
        let conn = lock(&self.conn);
        migrations::ensure_schema(&conn, &self.base_dir)
    }

    /// Hämta ärende-repository
    pub fn complaints(&self) -> ComplaintRepository {
        ComplaintRepository::new(Arc::clone(&self.conn))
    }

    /// Direkt tillgång till connection (för avancerade operationer)
    pub fn with_connection<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = lock(&self.conn);
        f(&conn)
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            conn: Arc::clone(&self.conn),
            base_dir: self.base_dir.clone(),
        }
    }
}

/// Lås connection. En förgiftad mutex används ändå; varje anrop är en
/// enskild sats så ingen halvfärdig transaktion kan ligga kvar.
pub(crate) fn lock(conn: &Mutex<Connection>) -> MutexGuard<'_, Connection> {
    conn.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{IssueType, NewComplaint};
    use chrono::NaiveDate;

    #[test]
    fn test_reopen_file_keeps_complaints() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("nivasisahay.db");

        let complaint_no = {
            let db = Database::open(&path).unwrap();
            db.ensure_schema().unwrap();
            db.complaints()
                .create(&NewComplaint::new("Ward 5", IssueType::WaterSupply, "No water", "555", Some(vec![7; 32])))
                .unwrap()
        };

        let db = Database::open(&path).unwrap();
        db.ensure_schema().unwrap();
        let all = db.complaints().list_all();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].complaint_no, complaint_no);
        assert_eq!(all[0].image, Some(vec![7; 32]));
    }

    #[test]
    fn test_legacy_file_is_upgraded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("legacy.db");
        let photo: Vec<u8> = (0..64u8).collect();
        std::fs::create_dir(dir.path().join("uploads")).unwrap();
        std::fs::write(dir.path().join("uploads").join("NS-1A2B3C4D.png"), &photo).unwrap();

        {
            let conn = Connection::open(&path).unwrap();
            conn.execute_batch(
                "CREATE TABLE complaints (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    complaint_no TEXT, area TEXT, issue_type TEXT, description TEXT,
                    phone TEXT, image_path TEXT, date_reported TEXT, status TEXT
                 );
                 INSERT INTO complaints (complaint_no, area, issue_type, description, phone, image_path, date_reported, status)
                 VALUES ('NS-1A2B3C4D', 'Market', 'Garbage', 'Bins full', '111', 'uploads/NS-1A2B3C4D.png', '2024-02-10', 'Registered');",
            )
            .unwrap();
        }

        let db = Database::open(&path).unwrap();
        db.ensure_schema().unwrap();

        let repo = db.complaints();
        let new_no = repo
            .create(&NewComplaint::new("Market", IssueType::Garbage, "Still full", "111", None))
            .unwrap();

        let all = repo.list_all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].complaint_no, new_no);
        assert_eq!(all[1].complaint_no, "NS-1A2B3C4D");
        assert_eq!(all[1].image, Some(photo));
        assert_eq!(all[1].date_reported, NaiveDate::from_ymd_opt(2024, 2, 10));
    }

    #[test]
    fn test_clone_shares_connection() {
        let db = Database::open_in_memory().unwrap();
        let other = db.clone();

        db.complaints()
            .create(&NewComplaint::new("A", IssueType::Drainage, "B", "C", None))
            .unwrap();

        assert_eq!(other.complaints().count().unwrap(), 1);
    }
}
