use super::{OverlayConfig, ServerConfig};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
	fs::File,
	io::{BufReader, Read},
	path::Path,
};

#[derive(Default, Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// HTTP server configuration
	#[serde(default)]
	pub server: ServerConfig,

	/// Source polygon and rotation settings
	#[serde(default)]
	pub overlay: OverlayConfig,
}

impl Config {
	pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
		Ok(serde_yaml_ng::from_reader(reader)?)
	}

	pub fn from_string(text: &str) -> Result<Self> {
		Ok(serde_yaml_ng::from_str(text)?)
	}

	/// Parses a YAML file. Relative paths inside it are resolved against the file's folder.
	pub fn from_path(path: &Path) -> Result<Self> {
		let file = File::open(path).with_context(|| format!("opening config file {path:?}"))?;
		let mut cfg = Config::from_reader(BufReader::new(file)).with_context(|| format!("parsing config file {path:?}"))?;

		let base = path.parent().unwrap_or(Path::new("."));
		cfg.server.resolve_paths(base);
		cfg.overlay.resolve_paths(base);
		Ok(cfg)
	}
}
