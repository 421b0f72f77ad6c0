pub mod app;
pub mod error;
pub mod routes;

pub use app::{build_app, run_server};
pub use error::AppError;
