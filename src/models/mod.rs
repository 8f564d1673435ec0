pub mod complaint;
pub mod config;

pub use complaint::*;
pub use config::*;
