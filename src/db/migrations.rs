use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use super::schema::{ADDED_COLUMNS, COMPLAINTS_TABLE, CREATE_COMPLAINTS, LEGACY_IMAGE_PATH_COLUMN};
use crate::utils::AppResult;

/// Se till att tabellen finns och har alla kolumner koden förväntar sig.
///
/// Idempotent. Tar aldrig bort data eller kolumner. Misslyckade
/// `ADD COLUMN` sväljs och loggas; bara ett misslyckat `CREATE TABLE`
/// returneras som fel.
///
/// Foton som äldre versioner sparade som filer läses in i `image`;
/// relativa sökvägar tolkas mot `base_dir` (databasfilens katalog).
pub fn ensure_schema(conn: &Connection, base_dir: &Path) -> AppResult<()> {
    let existed = table_exists(conn, COMPLAINTS_TABLE)?;

    conn.execute_batch(CREATE_COMPLAINTS)?;

    if !existed {
        info!("Skapade tabellen {}", COMPLAINTS_TABLE);
        return Ok(());
    }

    for (column, sql_type) in ADDED_COLUMNS {
        add_column_if_missing(conn, COMPLAINTS_TABLE, column, sql_type);
    }

    match import_legacy_images(conn, base_dir) {
        Ok(0) => {}
        Ok(n) => info!("Migration: läste in {} foton från {}", n, LEGACY_IMAGE_PATH_COLUMN),
        Err(e) => warn!("Kunde inte läsa in gamla foton: {}", e),
    }

    Ok(())
}

/// Kopiera foton från filerna i `image_path` till `image` för rader som
/// saknar bild. Filer som inte går att läsa hoppas över. Returnerar antal
/// inlästa foton.
pub fn import_legacy_images(conn: &Connection, base_dir: &Path) -> rusqlite::Result<usize> {
    if !table_has_column(conn, COMPLAINTS_TABLE, LEGACY_IMAGE_PATH_COLUMN)?
        || !table_has_column(conn, COMPLAINTS_TABLE, "image")?
    {
        return Ok(0);
    }

    let pending: Vec<(i64, String)> = {
        let mut stmt = conn.prepare(&format!(
            "SELECT id, {col} FROM {table}
             WHERE image IS NULL AND {col} IS NOT NULL AND TRIM({col}) != ''",
            col = LEGACY_IMAGE_PATH_COLUMN,
            table = COMPLAINTS_TABLE,
        ))?;
        let rows = stmt.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
        rows.filter_map(|r| r.ok()).collect()
    };

    let mut imported = 0;
    for (id, stored_path) in pending {
        let path = resolve_legacy_path(base_dir, stored_path.trim());
        let bytes = match std::fs::read(&path) {
            Ok(bytes) if !bytes.is_empty() => bytes,
            Ok(_) => continue,
            Err(e) => {
                warn!("Foto för ärende {} kunde inte läsas ({}): {}", id, path.display(), e);
                continue;
            }
        };

        imported += conn.execute(
            &format!("UPDATE {} SET image = ?1 WHERE id = ?2 AND image IS NULL", COMPLAINTS_TABLE),
            params![bytes, id],
        )?;
    }

    Ok(imported)
}

/// Absoluta sökvägar används som de är. Relativa prövas först mot
/// `base_dir` och annars mot arbetskatalogen.
fn resolve_legacy_path(base_dir: &Path, stored: &str) -> PathBuf {
    let path = Path::new(stored);
    if path.is_absolute() {
        return path.to_path_buf();
    }

    let beside_db = base_dir.join(path);
    if beside_db.exists() {
        beside_db
    } else {
        path.to_path_buf()
    }
}

/// Lägg till en kolumn om den saknas. Fel loggas men propageras inte.
fn add_column_if_missing(conn: &Connection, table: &str, column: &str, sql_type: &str) {
    match table_has_column(conn, table, column) {
        Ok(true) => return,
        Ok(false) => {}
        Err(e) => {
            warn!("Kunde inte läsa kolumner för {}: {}", table, e);
        }
    }

    let sql = format!("ALTER TABLE {} ADD COLUMN {} {}", table, column, sql_type);
    match conn.execute_batch(&sql) {
        Ok(()) => info!("Migration: lade till {}.{}", table, column),
        Err(e) => warn!("Kunde inte lägga till {}.{}: {}", table, column, e),
    }
}

pub fn table_exists(conn: &Connection, table: &str) -> rusqlite::Result<bool> {
    conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name = ?1)",
        [table],
        |row| row.get(0),
    )
}

pub fn table_has_column(conn: &Connection, table: &str, column: &str) -> rusqlite::Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table))?;
    let names: Vec<String> = stmt
        .query_map([], |row| row.get::<_, String>(1))?
        .collect::<rusqlite::Result<_>>()?;

    Ok(names.iter().any(|name| name == column))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    /// Tabellen som den såg ut innan bilder sparades i databasen
    const LEGACY_SCHEMA: &str = "
        CREATE TABLE complaints (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            complaint_no TEXT,
            area TEXT,
            issue_type TEXT,
            description TEXT,
            phone TEXT,
            image_path TEXT,
            date_reported TEXT,
            status TEXT
        );
        INSERT INTO complaints (complaint_no, area, issue_type, description, phone, image_path, date_reported, status)
        VALUES ('NS-0000BEEF', 'Old Town', 'Drainage', 'Blocked drain', '12345', 'uploads/NS-0000BEEF.png', '2024-03-01', 'Registered');
    ";

    fn column_names(conn: &Connection) -> Vec<String> {
        conn.prepare("PRAGMA table_info(complaints)")
            .unwrap()
            .query_map([], |row| row.get(1))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect()
    }

    #[test]
    fn test_initial_schema() {
        let conn = Connection::open_in_memory().unwrap();
        ensure_schema(&conn, Path::new(".")).unwrap();

        assert_eq!(
            column_names(&conn),
            vec![
                "id", "complaint_no", "area", "issue_type", "description",
                "phone", "image", "date_reported", "status",
            ]
        );
    }

    #[test]
    fn test_idempotent_schema() {
        let conn = Connection::open_in_memory().unwrap();

        // Kör två gånger
        ensure_schema(&conn, Path::new(".")).unwrap();
        ensure_schema(&conn, Path::new(".")).unwrap();

        let columns = column_names(&conn);
        assert_eq!(columns.iter().filter(|c| *c == "image").count(), 1);
        assert_eq!(columns.len(), 9);
    }

    #[test]
    fn test_legacy_table_gets_image_column() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(LEGACY_SCHEMA).unwrap();
        assert!(!table_has_column(&conn, "complaints", "image").unwrap());

        ensure_schema(&conn, Path::new(".")).unwrap();

        assert!(table_has_column(&conn, "complaints", "image").unwrap());
        // Gamla kolumner och data finns kvar
        assert!(table_has_column(&conn, "complaints", "image_path").unwrap());
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM complaints", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn test_failed_add_column_is_swallowed() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(LEGACY_SCHEMA).unwrap();

        // Ogiltig typdefinition får ALTER att misslyckas
        add_column_if_missing(&conn, "complaints", "image", "BLOB DEFAULT (");

        assert!(!table_has_column(&conn, "complaints", "image").unwrap());
    }

    #[test]
    fn test_table_exists() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(!table_exists(&conn, "complaints").unwrap());
        ensure_schema(&conn, Path::new(".")).unwrap();
        assert!(table_exists(&conn, "complaints").unwrap());
    }

    #[test]
    fn test_legacy_photo_is_imported() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("uploads")).unwrap();
        let photo = vec![0x89, b'P', b'N', b'G', 1, 2, 3, 4];
        std::fs::write(dir.path().join("uploads").join("NS-0000BEEF.png"), &photo).unwrap();

        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(LEGACY_SCHEMA).unwrap();
        ensure_schema(&conn, dir.path()).unwrap();

        let image: Option<Vec<u8>> = conn
            .query_row("SELECT image FROM complaints WHERE complaint_no = 'NS-0000BEEF'", [], |row| row.get(0))
            .unwrap();
        assert_eq!(image, Some(photo));

        // Andra körningen rör inte redan inlästa foton
        assert_eq!(import_legacy_images(&conn, dir.path()).unwrap(), 0);
    }

    #[test]
    fn test_missing_legacy_photo_is_skipped() {
        let dir = tempfile::tempdir().unwrap();

        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(LEGACY_SCHEMA).unwrap();
        ensure_schema(&conn, dir.path()).unwrap();

        let image: Option<Vec<u8>> = conn
            .query_row("SELECT image FROM complaints", [], |row| row.get(0))
            .unwrap();
        assert!(image.is_none());
    }

    #[test]
    fn test_absolute_legacy_path() {
        let dir = tempfile::tempdir().unwrap();
        let photo_path = dir.path().join("elsewhere.jpg");
        std::fs::write(&photo_path, b"jpeg bytes").unwrap();

        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(LEGACY_SCHEMA).unwrap();
        conn.execute(
            "UPDATE complaints SET image_path = ?1",
            [photo_path.to_string_lossy().to_string()],
        )
        .unwrap();

        ensure_schema(&conn, Path::new("/nonexistent")).unwrap();

        let image: Option<Vec<u8>> = conn
            .query_row("SELECT image FROM complaints", [], |row| row.get(0))
            .unwrap();
        assert_eq!(image.as_deref(), Some(&b"jpeg bytes"[..]));
    }
}
