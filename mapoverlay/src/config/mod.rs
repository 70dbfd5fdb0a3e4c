//! mapoverlay configuration.
//!
//! - [`Config`]: top-level configuration loader and YAML parser
//! - [`ServerConfig`]: network and static folder settings
//! - [`OverlayConfig`]: source polygon, anchor and rotation settings
//!
//! # Example YAML
//! ```yaml
//! server:
//!   ip: 127.0.0.1
//!   port: 3000
//!   static_folder: public
//! overlay:
//!   geojson: gaza.json
//!   anchor: [34.3796, 31.4290]
//!   rotation_step: 15
//!   seed: 42
//! ```

mod main;
mod overlay;
mod server;

pub use main::Config;
pub use overlay::OverlayConfig;
pub use server::ServerConfig;
