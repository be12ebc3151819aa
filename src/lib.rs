pub mod config;
pub mod dataset;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod table;
pub mod ui;

pub use error::{AppError, Result};
