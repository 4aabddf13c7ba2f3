pub mod config;
pub mod db;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod models;

pub use config::Config;
pub use error::{AppError, AppResult};
