use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::utils::path::{get_database_path, get_settings_path};

/// Applikationsinställningar som inte sparas i databas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub dark_mode: bool,
    pub window_width: f32,
    pub window_height: f32,
    /// Egen sökväg till databasfilen (None = plattformens datakatalog)
    pub database_path: Option<PathBuf>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            window_width: 900.0,
            window_height: 700.0,
            database_path: None,
        }
    }
}

impl AppSettings {
    /// Ladda från standardplatsen, eller defaults om filen saknas/är trasig
    pub fn load() -> Self {
        Self::load_from(&get_settings_path())
    }

    pub fn load_from(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };

        match toml::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Kunde inte tolka {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&get_settings_path())
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Databasfil att öppna
    pub fn resolved_database_path(&self) -> PathBuf {
        self.database_path
            .clone()
            .unwrap_or_else(get_database_path)
    }
}
