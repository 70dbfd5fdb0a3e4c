//! Router composition.

use super::{
	handlers::{hello, serve_static},
	static_folder::StaticFolder,
};
use axum::{Router, routing::get};
use std::sync::Arc;

/// The API route plus the static folder as a catch-all fallback.
pub fn build_router(static_folder: Option<StaticFolder>) -> Router {
	let api_app = Router::new().route("/api/v1/hello", get(hello));
	let static_app = Router::new()
		.fallback(get(serve_static))
		.with_state(static_folder.map(Arc::new));
	api_app.merge(static_app)
}
