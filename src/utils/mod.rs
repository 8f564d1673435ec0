pub mod date;
pub mod error;
pub mod path;
pub mod photo;

pub use error::{AppError, AppResult};
