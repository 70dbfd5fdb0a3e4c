//! Reading and writing polygons as GeoJSON.
//!
//! Only the `Polygon` geometry type is supported. It may be given bare, wrapped
//! in a `Feature`, or as the first feature of a `FeatureCollection`.

use crate::{Coordinates, PolygonGeometry, RingGeometry};
use anyhow::{Context, Result, anyhow, bail, ensure};
use serde_json::{Map, Value, json};
use std::io::Read;

pub fn read_polygon(mut reader: impl Read) -> Result<PolygonGeometry> {
	let mut buffer = String::new();
	reader.read_to_string(&mut buffer)?;
	parse_polygon(&buffer)
}

pub fn parse_polygon(text: &str) -> Result<PolygonGeometry> {
	let value: Value = serde_json::from_str(text).context("parsing GeoJSON")?;
	polygon_from_value(&value)
}

/// Extracts a verified polygon from a GeoJSON value.
pub fn polygon_from_value(value: &Value) -> Result<PolygonGeometry> {
	let polygon = match get_type(value)? {
		"FeatureCollection" => {
			let first = value
				.get("features")
				.and_then(Value::as_array)
				.and_then(|features| features.first())
				.ok_or_else(|| anyhow!("FeatureCollection has no features"))?;
			polygon_from_value(first).context("reading first feature")?
		}
		"Feature" => {
			let geometry = value.get("geometry").ok_or_else(|| anyhow!("Feature has no geometry"))?;
			parse_polygon_geometry(geometry)?
		}
		_ => parse_polygon_geometry(value)?,
	};
	log::trace!("parsed polygon with {} ring(s)", polygon.len());
	Ok(polygon)
}

fn get_type(value: &Value) -> Result<&str> {
	value
		.get("type")
		.and_then(Value::as_str)
		.ok_or_else(|| anyhow!("GeoJSON object must have a string \"type\""))
}

fn parse_polygon_geometry(value: &Value) -> Result<PolygonGeometry> {
	let geometry_type = get_type(value)?;
	ensure!(
		geometry_type == "Polygon",
		"expected geometry type \"Polygon\", found \"{geometry_type}\""
	);

	let rings = value
		.get("coordinates")
		.and_then(Value::as_array)
		.ok_or_else(|| anyhow!("Polygon coordinates must be an array"))?;

	let polygon = PolygonGeometry(rings.iter().map(parse_ring).collect::<Result<Vec<_>>>()?);
	polygon.verify()?;
	Ok(polygon)
}

fn parse_ring(value: &Value) -> Result<RingGeometry> {
	let positions = value.as_array().ok_or_else(|| anyhow!("ring must be an array"))?;
	Ok(RingGeometry(
		positions.iter().map(parse_position).collect::<Result<Vec<_>>>()?,
	))
}

fn parse_position(value: &Value) -> Result<Coordinates> {
	match value.as_array().map(Vec::as_slice) {
		// altitude, if present, is dropped
		Some([x, y, ..]) => {
			let x = x.as_f64().ok_or_else(|| anyhow!("x must be a number, found {x}"))?;
			let y = y.as_f64().ok_or_else(|| anyhow!("y must be a number, found {y}"))?;
			Ok(Coordinates::new(x, y))
		}
		_ => bail!("position must be an array of at least two numbers, found {value}"),
	}
}

/// Builds a GeoJSON `Feature` with a `Polygon` geometry.
pub fn polygon_to_feature(polygon: &PolygonGeometry, properties: Map<String, Value>, precision: Option<u8>) -> Value {
	json!({
		"type": "Feature",
		"geometry": {
			"type": "Polygon",
			"coordinates": polygon.to_coord_json(precision),
		},
		"properties": properties,
	})
}
