use anyhow::Result;
use mapoverlay::{config::Config, server::AppServer};
use std::path::PathBuf;
use tokio::time::{Duration, sleep};

#[derive(clap::Args, Debug)]
#[command(disable_version_flag = true, verbatim_doc_comment)]
pub struct Subcommand {
	/// Path to a configuration file (YAML format).
	/// Command line arguments override configuration file settings.
	#[arg(short = 'c', long, value_name = "FILE", display_order = 0)]
	pub config: Option<PathBuf>,

	/// Serve via socket ip. Default: 0.0.0.0
	#[arg(short = 'i', long, display_order = 0)]
	pub ip: Option<String>,

	/// Serve via port. Default: 3000
	#[arg(short, long, env = "PORT", display_order = 0)]
	pub port: Option<u16>,

	/// Serve the frontend from this folder. Default: ./public
	#[arg(short = 's', long = "static", value_name = "FOLDER", display_order = 1)]
	pub static_folder: Option<PathBuf>,

	/// Shutdown server automatically after x milliseconds.
	#[arg(long, display_order = 4)]
	pub auto_shutdown: Option<u64>,
}

#[tokio::main]
pub async fn run(arguments: &Subcommand) -> Result<()> {
	let config = match &arguments.config {
		Some(path) => Config::from_path(path)?,
		None => Config::default(),
	};

	let mut server_config = config.server;
	server_config.override_optional_ip(&arguments.ip);
	server_config.override_optional_port(&arguments.port);
	server_config.override_optional_static_folder(&arguments.static_folder);

	let mut server = AppServer::from_config(&server_config);
	server.start().await?;

	if let Some(addr) = server.local_addr() {
		eprintln!("Server listening on {addr}");
	}

	if let Some(milliseconds) = arguments.auto_shutdown {
		sleep(Duration::from_millis(milliseconds)).await;
	} else {
		tokio::signal::ctrl_c().await?;
	}

	server.stop().await;
	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;

	#[test]
	fn serve_with_auto_shutdown() {
		run_command(vec![
			"mapoverlay",
			"serve",
			"-i",
			"127.0.0.1",
			"-p",
			"0",
			"-s",
			"/not/a/folder",
			"--auto-shutdown",
			"100",
		])
		.unwrap();
	}
}
