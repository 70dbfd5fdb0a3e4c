use super::{StaticFolder, build_router};
use crate::config::ServerConfig;
use anyhow::{Context, Result};
use std::net::SocketAddr;
use tokio::sync::oneshot::Sender;

pub struct AppServer {
	ip: String,
	port: u16,
	static_folder: Option<StaticFolder>,
	exit_signal: Option<Sender<()>>,
	local_addr: Option<SocketAddr>,
}

impl AppServer {
	pub fn new(ip: &str, port: u16) -> AppServer {
		AppServer {
			ip: ip.to_owned(),
			port,
			static_folder: None,
			exit_signal: None,
			local_addr: None,
		}
	}

	/// Builds a server from its configuration. A missing static folder is
	/// logged and skipped so the API stays reachable.
	pub fn from_config(config: &ServerConfig) -> AppServer {
		let mut server = AppServer::new(config.ip(), config.port());
		if let Err(err) = server.set_static_folder(config.static_folder()) {
			log::warn!("no static content will be served: {err:#}");
		}
		server
	}

	pub fn set_static_folder(&mut self, path: &std::path::Path) -> Result<()> {
		let folder = StaticFolder::from(path)?;
		log::info!("serve static folder: {}", folder.name());
		self.static_folder = Some(folder);
		Ok(())
	}

	pub fn has_static_folder(&self) -> bool {
		self.static_folder.is_some()
	}

	pub async fn start(&mut self) -> Result<()> {
		if self.exit_signal.is_some() {
			self.stop().await;
		}

		log::info!("starting server");

		let router = build_router(self.static_folder.clone());

		let addr = format!("{}:{}", self.ip, self.port);
		let listener = tokio::net::TcpListener::bind(&addr)
			.await
			.with_context(|| format!("binding to {addr}"))?;
		let local_addr = listener.local_addr()?;
		log::info!("server listening on {local_addr}");

		let (tx, rx) = tokio::sync::oneshot::channel::<()>();

		tokio::spawn(async move {
			let result = axum::serve(listener, router.into_make_service())
				.with_graceful_shutdown(async {
					rx.await.ok();
				})
				.await;
			if let Err(err) = result {
				log::error!("server stopped with error: {err}");
			}
		});

		self.exit_signal = Some(tx);
		self.local_addr = Some(local_addr);

		Ok(())
	}

	pub async fn stop(&mut self) {
		let Some(exit_signal) = self.exit_signal.take() else {
			return;
		};

		log::info!("stopping server");

		if exit_signal.send(()).is_err() {
			log::warn!("server task was already gone");
		}
		self.local_addr = None;
	}

	/// Address the server is bound to while running.
	pub fn local_addr(&self) -> Option<SocketAddr> {
		self.local_addr
	}
}
