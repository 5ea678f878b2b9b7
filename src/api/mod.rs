//! Command line and HTTP surfaces over the tracker service.

mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use crate::error::AppError;

pub use routes::tracker_router;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
