use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_IP: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_FOLDER: &str = "public";

#[derive(Debug, Default, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
	/// IP to bind to. Default: 0.0.0.0
	pub ip: Option<String>,

	/// TCP port to bind to. Default: 3000
	pub port: Option<u16>,

	/// Folder with the pre-built frontend. Default: ./public
	pub static_folder: Option<PathBuf>,
}

impl ServerConfig {
	pub fn override_optional_ip(&mut self, ip: &Option<String>) {
		if ip.is_some() {
			self.ip.clone_from(ip);
		}
	}
	pub fn override_optional_port(&mut self, port: &Option<u16>) {
		if port.is_some() {
			self.port = *port;
		}
	}
	pub fn override_optional_static_folder(&mut self, static_folder: &Option<PathBuf>) {
		if static_folder.is_some() {
			self.static_folder.clone_from(static_folder);
		}
	}

	pub fn ip(&self) -> &str {
		self.ip.as_deref().unwrap_or(DEFAULT_IP)
	}

	pub fn port(&self) -> u16 {
		self.port.unwrap_or(DEFAULT_PORT)
	}

	pub fn static_folder(&self) -> &Path {
		self.static_folder.as_deref().unwrap_or(Path::new(DEFAULT_STATIC_FOLDER))
	}

	pub fn resolve_paths(&mut self, base: &Path) {
		if let Some(folder) = &self.static_folder
			&& folder.is_relative()
		{
			self.static_folder = Some(base.join(folder));
		}
	}
}
