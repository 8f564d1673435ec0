use std::path::{Path, PathBuf};

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("in", "nivasisahay", "NivasiSahay")
}

/// Hämta databassökväg
pub fn get_database_path() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().join("nivasisahay.db"))
        .unwrap_or_else(|| PathBuf::from("nivasisahay.db"))
}

/// Hämta sökväg till inställningsfilen
pub fn get_settings_path() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.config_dir().join("settings.toml"))
        .unwrap_or_else(|| PathBuf::from("settings.toml"))
}

/// Hämta filändelse
pub fn get_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_lowercase())
}

/// Filändelser som accepteras för foton
pub const PHOTO_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// Kontrollera om en fil är ett foto vi tar emot
pub fn is_photo_file(path: &Path) -> bool {
    get_extension(path)
        .map(|ext| PHOTO_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_photo_file() {
        assert!(is_photo_file(Path::new("pothole.jpg")));
        assert!(is_photo_file(Path::new("bin.JPEG")));
        assert!(is_photo_file(Path::new("light.PNG")));
        assert!(!is_photo_file(Path::new("scan.gif")));
        assert!(!is_photo_file(Path::new("noext")));
    }

    #[test]
    fn test_default_paths_have_file_names() {
        assert_eq!(
            get_database_path().file_name().and_then(|n| n.to_str()),
            Some("nivasisahay.db")
        );
        assert_eq!(
            get_settings_path().file_name().and_then(|n| n.to_str()),
            Some("settings.toml")
        );
    }
}
