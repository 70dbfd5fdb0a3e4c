//! HTTP server: one diagnostic JSON endpoint plus the static frontend.

mod app_server;
mod handlers;
mod routes;
mod static_folder;
mod utils;

pub use app_server::*;
pub use routes::build_router;
pub use static_folder::StaticFolder;
