//! Default configuration of the force graph and the typed record behind it.
//!
//! Every consumer gets its own copy from [`defaults`]; nothing here hands out a
//! shared value, so two graphs on one page never see each other's edits.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::{OptionsError, Result};
use super::types::{GraphData, GraphLink, GraphNode};

/// Viewport width in pixels.
pub const DEFAULT_WIDTH: f64 = 500.0;
/// Viewport height in pixels.
pub const DEFAULT_HEIGHT: f64 = 600.0;
/// Layout charge strength.
pub const DEFAULT_FORCE: f64 = 350.0;
/// Node diameter in pixels.
pub const DEFAULT_NODE_SIZE: f64 = 20.0;
/// Link stroke width in screen pixels.
pub const DEFAULT_LINK_WIDTH: f64 = 2.0;

/// Selection flags keyed by node id or link key. A missing key means "not selected".
pub type Selection = HashMap<String, bool>;

/// Viewport size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Size {
	/// Width.
	pub w: f64,
	/// Height.
	pub h: f64,
}

impl Default for Size {
	fn default() -> Self {
		Self {
			w: DEFAULT_WIDTH,
			h: DEFAULT_HEIGHT,
		}
	}
}

/// Initial pan offset in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Offset {
	/// Horizontal shift.
	pub x: f64,
	/// Vertical shift.
	pub y: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
	/// Draw on a `<canvas>` instead of inline SVG.
	pub canvas: bool,
	pub size: Size,
	/// Charge strength handed to the layout simulation.
	pub force: f64,
	pub offset: Offset,
	/// Node diameter in pixels.
	pub node_size: f64,
	/// Link stroke width in screen pixels, independent of zoom.
	pub link_width: f64,
	pub node_labels: bool,
	pub link_labels: bool,
	/// Link endpoints name node ids rather than node positions.
	pub str_links: bool,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			canvas: false,
			size: Size::default(),
			force: DEFAULT_FORCE,
			offset: Offset::default(),
			node_size: DEFAULT_NODE_SIZE,
			link_width: DEFAULT_LINK_WIDTH,
			node_labels: false,
			link_labels: false,
			str_links: true,
		}
	}
}

impl RenderOptions {
	pub fn validate(&self) -> Result<()> {
		positive("size.w", self.size.w)?;
		positive("size.h", self.size.h)?;
		positive("force", self.force)?;
		positive("nodeSize", self.node_size)?;
		positive("linkWidth", self.link_width)?;
		finite("offset.x", self.offset.x)?;
		finite("offset.y", self.offset.y)?;
		Ok(())
	}

	/// Whether moving from `self` to `other` needs a fresh simulation rather
	/// than a redraw.
	pub fn affects_layout(&self, other: &RenderOptions) -> bool {
		self.force != other.force || self.str_links != other.str_links || self.size != other.size
	}

	pub fn node_radius(&self) -> f64 {
		self.node_size / 2.0
	}
}

fn finite(field: &'static str, value: f64) -> Result<()> {
	if value.is_finite() {
		Ok(())
	} else {
		Err(OptionsError::NonFinite { field })
	}
}

fn positive(field: &'static str, value: f64) -> Result<()> {
	finite(field, value)?;
	if value > 0.0 {
		Ok(())
	} else {
		Err(OptionsError::NonPositive { field, value })
	}
}

/// Complete state handed to a graph component: data, selection and options.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GraphConfig {
	pub nodes: Vec<GraphNode>,
	pub links: Vec<GraphLink>,
	pub selected: Selection,
	pub links_selected: Selection,
	pub options: RenderOptions,
}

/// A fresh copy of the default graph configuration.
pub fn defaults() -> GraphConfig {
	GraphConfig::default()
}

impl GraphConfig {
	/// Parse a possibly partial JSON document; missing fields take their defaults.
	pub fn from_json(json: &str) -> Result<Self> {
		let config: GraphConfig = serde_json::from_str(json)?;
		config.validate()?;
		Ok(config)
	}

	/// Deep-merge `patch` over a copy of `self`. Objects merge key by key, any
	/// other value replaces what was there.
	pub fn merged(&self, patch: &Value) -> Result<Self> {
		let mut value = serde_json::to_value(self)?;
		deep_merge(&mut value, patch);
		let config: GraphConfig = serde_json::from_value(value)?;
		config.validate()?;
		Ok(config)
	}

	pub fn validate(&self) -> Result<()> {
		self.options.validate()
	}

	pub fn graph_data(&self) -> GraphData {
		GraphData {
			nodes: self.nodes.clone(),
			links: self.links.clone(),
		}
	}

	pub fn with_data(mut self, data: GraphData) -> Self {
		self.nodes = data.nodes;
		self.links = data.links;
		self
	}

	pub fn is_selected(&self, id: &str) -> bool {
		self.selected.get(id).copied().unwrap_or(false)
	}

	pub fn is_link_selected(&self, key: &str) -> bool {
		self.links_selected.get(key).copied().unwrap_or(false)
	}
}

fn deep_merge(base: &mut Value, incoming: &Value) {
	match (base, incoming) {
		(Value::Object(base_map), Value::Object(in_map)) => {
			for (key, in_value) in in_map {
				match base_map.get_mut(key) {
					Some(base_value) => deep_merge(base_value, in_value),
					None => {
						base_map.insert(key.clone(), in_value.clone());
					}
				}
			}
		}
		(slot, in_value) => *slot = in_value.clone(),
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;
	use crate::components::force_graph::state::resolve_links;

	#[test]
	fn shipped_defaults() {
		let config = defaults();
		let opts = &config.options;
		assert_eq!(opts.size, Size { w: 500.0, h: 600.0 });
		assert_eq!(opts.force, 350.0);
		assert_eq!(opts.offset, Offset { x: 0.0, y: 0.0 });
		assert_eq!(opts.node_size, 20.0);
		assert_eq!(opts.link_width, 2.0);
		assert!(opts.str_links);
		assert!(!opts.canvas && !opts.node_labels && !opts.link_labels);
		assert!(config.nodes.is_empty() && config.links.is_empty());
		assert!(config.selected.is_empty() && config.links_selected.is_empty());
		config.validate().unwrap();
	}

	#[test]
	fn each_call_is_independent() {
		let mut a = defaults();
		let b = defaults();
		assert_eq!(a, b);

		a.options.size.w = 42.0;
		a.selected.insert("n1".into(), true);
		a.nodes.push(GraphNode {
			id: "n1".into(),
			label: None,
			color: None,
			group: None,
		});

		assert_eq!(b, defaults());
		assert_ne!(a, b);
	}

	#[test]
	fn serializes_to_original_shape() {
		let value = serde_json::to_value(defaults()).unwrap();
		assert_eq!(
			value,
			json!({
				"nodes": [],
				"links": [],
				"selected": {},
				"linksSelected": {},
				"options": {
					"canvas": false,
					"size": { "w": 500.0, "h": 600.0 },
					"force": 350.0,
					"offset": { "x": 0.0, "y": 0.0 },
					"nodeSize": 20.0,
					"linkWidth": 2.0,
					"nodeLabels": false,
					"linkLabels": false,
					"strLinks": true
				}
			})
		);
	}

	#[test]
	fn partial_json_fills_in_defaults() {
		assert_eq!(GraphConfig::from_json("{}").unwrap(), defaults());

		let config =
			GraphConfig::from_json(r#"{"options":{"size":{"w":800},"nodeLabels":true}}"#).unwrap();
		assert_eq!(config.options.size, Size { w: 800.0, h: 600.0 });
		assert!(config.options.node_labels);
		assert_eq!(config.options.force, DEFAULT_FORCE);
	}

	#[test]
	fn numeric_node_ids_resolve_as_string_links() {
		let config = GraphConfig::from_json(
			r#"{"nodes":[{"id":1},{"id":2},{"id":3}],"links":[{"source":1,"target":2},{"source":3,"target":1}]}"#,
		)
		.unwrap();
		assert!(config.options.str_links);
		assert_eq!(config.nodes[0].id, "1");
		assert_eq!(
			resolve_links(&config.nodes, &config.links, config.options.str_links),
			vec![(0, 0, 1), (1, 2, 0)]
		);
	}

	#[test]
	fn numeric_endpoints_resolve_as_indices() {
		let config = GraphConfig::from_json(
			r#"{"nodes":[{"id":"a"},{"id":"b"}],"links":[{"source":0,"target":1},{"source":1,"target":5}],"options":{"strLinks":false}}"#,
		)
		.unwrap();
		assert_eq!(config.links[0].source, "0");
		assert_eq!(
			resolve_links(&config.nodes, &config.links, config.options.str_links),
			vec![(0, 0, 1)]
		);

		let merged = defaults()
			.merged(&json!({ "nodes": [{ "id": 7 }], "links": [{ "source": 7, "target": 7 }] }))
			.unwrap();
		assert_eq!(merged.links[0].target, "7");
	}

	#[test]
	fn rejects_invalid_values() {
		let err = GraphConfig::from_json(r#"{"options":{"size":{"w":0}}}"#).unwrap_err();
		assert!(matches!(err, OptionsError::NonPositive { field: "size.w", .. }));

		let err = GraphConfig::from_json(r#"{"options":{"force":-1}}"#).unwrap_err();
		assert!(matches!(err, OptionsError::NonPositive { field: "force", .. }));

		let mut opts = RenderOptions::default();
		opts.node_size = f64::NAN;
		assert!(matches!(
			opts.validate(),
			Err(OptionsError::NonFinite { field: "nodeSize" })
		));

		assert!(matches!(
			GraphConfig::from_json("[1, 2]"),
			Err(OptionsError::Json(_))
		));
	}

	#[test]
	fn merge_keeps_receiver_and_unpatched_fields() {
		let base = defaults();
		let merged = base
			.merged(&json!({ "options": { "offset": { "x": 15 }, "canvas": true } }))
			.unwrap();

		assert_eq!(merged.options.offset, Offset { x: 15.0, y: 0.0 });
		assert!(merged.options.canvas);
		assert_eq!(merged.options.size, Size::default());
		assert_eq!(base, defaults());

		assert!(base.merged(&json!({ "options": { "linkWidth": 0 } })).is_err());
	}

	#[test]
	fn selection_lookup_treats_missing_as_unselected() {
		let mut config = defaults();
		config.selected.insert("a".into(), true);
		config.selected.insert("b".into(), false);
		config.links_selected.insert("0".into(), true);
		assert!(config.is_selected("a"));
		assert!(!config.is_selected("b"));
		assert!(!config.is_selected("c"));
		assert!(config.is_link_selected("0"));
		assert!(!config.is_link_selected("1"));
	}

	#[test]
	fn layout_changes_are_detected() {
		let base = RenderOptions::default();
		let labels = RenderOptions {
			node_labels: true,
			canvas: true,
			..base.clone()
		};
		assert!(!base.affects_layout(&labels));
		let weaker = RenderOptions {
			force: 100.0,
			..base.clone()
		};
		assert!(base.affects_layout(&weaker));
		let indexed = RenderOptions {
			str_links: false,
			..base.clone()
		};
		assert!(base.affects_layout(&indexed));
	}
}
