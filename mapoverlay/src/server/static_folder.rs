use super::utils::guess_mime;
use anyhow::{Context, Result, ensure};
use percent_encoding::percent_decode_str;
use std::{
	env::current_dir,
	fmt::Debug,
	fs,
	path::{Component, Path, PathBuf},
};

/// File contents plus the MIME type to send them with.
pub struct StaticResponse {
	pub body: Vec<u8>,
	pub mime: String,
}

/// A local folder served at the root of the server.
#[derive(Clone)]
pub struct StaticFolder {
	folder: PathBuf,
	name: String,
}

impl StaticFolder {
	pub fn from(path: &Path) -> Result<StaticFolder> {
		let folder = current_dir()?
			.join(path)
			.canonicalize()
			.with_context(|| format!("loading static folder from path: {path:?}"))?;

		ensure!(folder.is_dir(), "path {folder:?} must be a directory");

		Ok(StaticFolder {
			folder,
			name: path.display().to_string(),
		})
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	/// Looks up a request path like `/js/main.js`. The path is percent-decoded
	/// first. Directories resolve to their `index.html`; anything that would
	/// leave the folder is not found.
	pub fn get_data(&self, url_path: &str) -> Option<StaticResponse> {
		let decoded = percent_decode_str(url_path).decode_utf8().ok()?;
		let mut local_path = self.folder.clone();
		for part in Path::new(decoded.trim_start_matches('/')).components() {
			match part {
				Component::Normal(name) => local_path.push(name),
				Component::CurDir => {}
				_ => return None,
			}
		}

		if local_path.is_dir() {
			local_path.push("index.html");
		}

		// symlinks may still point outside
		let local_path = local_path.canonicalize().ok()?;
		if !local_path.starts_with(&self.folder) {
			return None;
		}

		match fs::read(&local_path) {
			Ok(body) => Some(StaticResponse {
				mime: guess_mime(&local_path),
				body,
			}),
			Err(err) => {
				log::debug!("cannot read {local_path:?}: {err}");
				None
			}
		}
	}
}

impl Debug for StaticFolder {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("StaticFolder")
			.field("folder", &self.folder)
			.field("name", &self.name)
			.finish()
	}
}
