use anyhow::{Result, anyhow};
use mapoverlay::{
	config::{Config, OverlayConfig},
	geometry::geojson::polygon_to_feature,
};
use serde_json::{Map, Value};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(disable_version_flag = true, allow_negative_numbers = true)]
pub struct Subcommand {
	/// Longitude of the position in degrees.
	#[arg(long)]
	pub lon: f64,

	/// Latitude of the position in degrees.
	#[arg(long)]
	pub lat: f64,

	/// Path to a configuration file (YAML format); its `overlay` section is used.
	#[arg(short = 'c', long, value_name = "FILE")]
	pub config: Option<PathBuf>,

	/// GeoJSON file with the source polygon. Default: bundled Gaza Strip outline
	#[arg(short = 'g', long, value_name = "FILE")]
	pub geojson: Option<PathBuf>,

	/// Horizontal accuracy of the position in meters, copied into the output.
	#[arg(long)]
	pub accuracy: Option<f64>,

	/// Initial rotation in degrees. Default: 0, or random if --seed is given
	#[arg(long)]
	pub rotation: Option<f64>,

	/// Seed for a random initial rotation.
	#[arg(long, conflicts_with = "rotation")]
	pub seed: Option<u64>,

	/// Presses of the rotation controls: positive turns left, negative right.
	#[arg(long, default_value_t = 0)]
	pub steps: i32,

	/// Round output coordinates to this many decimals.
	#[arg(long)]
	pub precision: Option<u8>,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let feature = build_feature(arguments)?;
	println!("{}", serde_json::to_string_pretty(&feature)?);
	Ok(())
}

/// Relocates the polygon as the browser would after one position fix and
/// `steps` control presses.
pub fn build_feature(arguments: &Subcommand) -> Result<Value> {
	let mut overlay = match &arguments.config {
		Some(path) => Config::from_path(path)?.overlay,
		None => OverlayConfig::default(),
	};
	if arguments.geojson.is_some() {
		overlay.geojson.clone_from(&arguments.geojson);
	}
	if arguments.seed.is_some() {
		overlay.seed = arguments.seed;
		overlay.initial_rotation = None;
	}
	if arguments.rotation.is_some() {
		overlay.initial_rotation = arguments.rotation;
	}
	if overlay.initial_rotation.is_none() && overlay.seed.is_none() {
		overlay.initial_rotation = Some(0.0);
	}

	let mut session = overlay.build_session()?;
	session.on_position(arguments.lon, arguments.lat)?;
	if let Some(meters) = arguments.accuracy {
		session.on_accuracy(meters)?;
	}

	for _ in 0..arguments.steps.unsigned_abs() {
		if arguments.steps > 0 {
			session.rotate_left()?;
		} else {
			session.rotate_right()?;
		}
	}

	let mut properties = Map::new();
	if let Some(location) = session.location() {
		properties.insert("location".to_string(), location.to_json(None));
	}
	if let Some(translation) = session.translation() {
		properties.insert("translation".to_string(), translation.to_json(None));
	}
	if let Some(accuracy) = session.accuracy() {
		properties.insert("accuracy".to_string(), Value::from(accuracy));
	}
	properties.insert("rotation".to_string(), Value::from(session.rotation()));

	let polygon = session
		.polygon()
		.ok_or_else(|| anyhow!("no polygon after position fix"))?;
	Ok(polygon_to_feature(polygon, properties, arguments.precision))
}
