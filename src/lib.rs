//! NivasiSahay - Registrering av medborgarärenden
//!
//! Invånare anmäler problem i sitt område och får ett ärendenummer.
//! Kärnan är `db` (schema och ärendelagring); `ui` är skalet ovanpå.

#![allow(dead_code)]

pub mod models;
pub mod db;
pub mod ui;
pub mod utils;

// Re-exports
pub use db::{ComplaintRepository, Database};
pub use models::*;
pub use ui::{AppState, View};
pub use utils::{AppError, AppResult};
