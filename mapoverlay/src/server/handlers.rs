//! HTTP handlers and small response helpers.

use super::static_folder::{StaticFolder, StaticResponse};
use axum::{
	Json,
	body::Body,
	extract::State,
	http::{StatusCode, Uri, header},
	response::Response,
};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Serialize, PartialEq)]
pub struct Message {
	pub message: &'static str,
}

/// `GET /api/v1/hello`
pub async fn hello() -> Json<Message> {
	log::debug!("handle hello request");
	Json(Message {
		message: "Hello, world!",
	})
}

/// Serves files from the static folder, 404 if there is none or the file is missing.
pub async fn serve_static(uri: Uri, State(folder): State<Option<Arc<StaticFolder>>>) -> Response<Body> {
	let path = uri.path();
	log::debug!("handle static request: {path}");

	match folder.as_deref().and_then(|folder| folder.get_data(path)) {
		Some(result) => ok_data(result),
		None => {
			log::debug!("send 404 to static request: {path}");
			error_404()
		}
	}
}

fn ok_data(result: StaticResponse) -> Response<Body> {
	Response::builder()
		.status(StatusCode::OK)
		.header(header::CONTENT_TYPE, result.mime)
		.body(Body::from(result.body))
		.expect("failed to build OK response")
}

pub fn error_404() -> Response<Body> {
	Response::builder()
		.status(StatusCode::NOT_FOUND)
		.header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
		.body(Body::from("Not Found"))
		.expect("failed to build error response")
}
