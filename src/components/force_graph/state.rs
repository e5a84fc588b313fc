use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::{debug, warn};

use super::options::{GraphConfig, RenderOptions, Selection};
use super::scale;
use super::types::{GraphLink, GraphNode};

const COLORS: &[&str] = &[
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
	"#bcbd22", "#17becf",
];

pub const MIN_HIT_RADIUS: f64 = 12.0;
/// Extra screen-space tolerance (px) around a link's stroke for hit testing.
pub const LINK_HIT_SLOP: f64 = 4.0;
/// Pointer travel (screen px) below which a press counts as a click.
pub const CLICK_SLOP: f64 = 3.0;
const RING_RADIUS: f64 = 100.0;
/// Largest per-tick node displacement (world units) that still counts as at rest.
pub const SETTLE_DISTANCE: f64 = 0.05;
/// Consecutive resting ticks before the layout pauses.
pub const SETTLE_TICKS: u32 = 30;

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub id: String,
	pub label: Option<String>,
	pub color: String,
}

#[derive(Clone, Debug)]
pub struct LinkInfo {
	pub source: DefaultNodeIdx,
	pub target: DefaultNodeIdx,
	pub key: String,
	pub label: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub moved: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub moved: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<DefaultNodeIdx>,
	pub neighbors: HashSet<DefaultNodeIdx>,
	pub highlight_t: f64,
	pub prev_node: Option<DefaultNodeIdx>,
	pub prev_neighbors: HashSet<DefaultNodeIdx>,
	delay_t: f64,
}

/// Node and link selection owned by one graph instance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionState {
	pub selected: Selection,
	pub links_selected: Selection,
}

/// Positions and styling of one frame, independent of the drawing backend.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
	pub width: f64,
	pub height: f64,
	pub transform: ViewTransform,
	pub links: Vec<SceneLink>,
	/// Dimmed nodes first, highlighted nodes last.
	pub nodes: Vec<SceneNode>,
	pub node_labels: bool,
	pub link_labels: bool,
	pub highlight_t: f64,
	pub flow_time: f64,
}

impl Scene {
	/// Equal apart from the dash animation clock, which only the canvas draws.
	pub fn same_picture(&self, other: &Scene) -> bool {
		self.width == other.width
			&& self.height == other.height
			&& self.transform == other.transform
			&& self.node_labels == other.node_labels
			&& self.link_labels == other.link_labels
			&& self.highlight_t == other.highlight_t
			&& self.nodes == other.nodes
			&& self.links == other.links
	}
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneNode {
	pub id: String,
	pub x: f64,
	pub y: f64,
	pub radius: f64,
	pub glow_radius: f64,
	pub alpha: f64,
	pub color: String,
	pub label: Option<String>,
	pub hovered: bool,
	pub highlighted: bool,
	pub selected: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneLink {
	pub key: String,
	pub x1: f64,
	pub y1: f64,
	pub x2: f64,
	pub y2: f64,
	pub width: f64,
	pub alpha: f64,
	pub source_radius: f64,
	pub target_radius: f64,
	pub label: Option<String>,
	pub highlighted: bool,
	pub selected: bool,
}

pub struct ForceGraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub options: RenderOptions,
	pub selection: SelectionState,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	/// Cleared once the layout comes to rest; see [`ForceGraphState::wake`].
	pub animation_running: bool,
	pub flow_time: f64,
	links: Vec<LinkInfo>,
	still_ticks: u32,
}

/// Resolve link endpoints to node positions in `nodes`.
///
/// Returns `(link_index, source, target)` for every link whose endpoints exist.
pub fn resolve_links(
	nodes: &[GraphNode],
	links: &[GraphLink],
	str_links: bool,
) -> Vec<(usize, usize, usize)> {
	let ids: HashMap<&str, usize> = nodes
		.iter()
		.enumerate()
		.map(|(i, n)| (n.id.as_str(), i))
		.collect();
	let resolve = |endpoint: &str| {
		if str_links {
			ids.get(endpoint).copied()
		} else {
			endpoint
				.trim()
				.parse::<usize>()
				.ok()
				.filter(|&i| i < nodes.len())
		}
	};

	links
		.iter()
		.enumerate()
		.filter_map(|(i, link)| match (resolve(&link.source), resolve(&link.target)) {
			(Some(src), Some(tgt)) => Some((i, src, tgt)),
			_ => {
				warn!(
					"dropping link {} ({} -> {}): endpoint not found",
					link.key(i),
					link.source,
					link.target
				);
				None
			}
		})
		.collect()
}

impl ForceGraphState {
	pub fn new(config: &GraphConfig, width: f64, height: f64) -> Self {
		let options = config.options.clone();
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: options.force as f32,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});

		let ring = RING_RADIUS.max(options.node_size * 5.0);
		let count = config.nodes.len().max(1) as f64;
		let mut indices = Vec::with_capacity(config.nodes.len());
		for (i, node) in config.nodes.iter().enumerate() {
			let color = node.color.clone().unwrap_or_else(|| {
				node.group
					.map(|g| COLORS[g as usize % COLORS.len()].into())
					.unwrap_or(COLORS[0].into())
			});
			let angle = (i as f64) * 2.0 * PI / count;
			let idx = graph.add_node(NodeData {
				x: (ring * angle.cos()) as f32,
				y: (ring * angle.sin()) as f32,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					id: node.id.clone(),
					label: node.label.clone(),
					color,
				},
			});
			indices.push(idx);
		}

		let links: Vec<LinkInfo> = resolve_links(&config.nodes, &config.links, options.str_links)
			.into_iter()
			.map(|(i, src, tgt)| {
				graph.add_edge(indices[src], indices[tgt], EdgeData::default());
				let link = &config.links[i];
				LinkInfo {
					source: indices[src],
					target: indices[tgt],
					key: link.key(i),
					label: link.label.clone(),
				}
			})
			.collect();
		debug!(
			"graph state built: {} nodes, {} links, force {}",
			indices.len(),
			links.len(),
			options.force
		);

		Self {
			graph,
			links,
			selection: SelectionState {
				selected: config.selected.clone(),
				links_selected: config.links_selected.clone(),
			},
			transform: ViewTransform {
				x: width / 2.0 + options.offset.x,
				y: height / 2.0 + options.offset.y,
				k: 1.0,
			},
			options,
			drag: DragState::default(),
			pan: PanState::default(),
			hover: HoverState::default(),
			width,
			height,
			animation_running: true,
			flow_time: 0.0,
			still_ticks: 0,
		}
	}

	pub fn links(&self) -> &[LinkInfo] {
		&self.links
	}

	/// Swap in options that only change how the graph is drawn.
	pub fn set_options(&mut self, options: RenderOptions) {
		self.options = options;
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	fn positions(&self) -> HashMap<DefaultNodeIdx, (f64, f64)> {
		let mut positions = HashMap::new();
		self.graph.visit_nodes(|node| {
			positions.insert(node.index(), (node.x() as f64, node.y() as f64));
		});
		positions
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		// world-space, scales with zoom like nodes
		let hit_radius = self.options.node_radius().max(MIN_HIT_RADIUS);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			if (dx * dx + dy * dy).sqrt() < hit_radius {
				found = Some(node.index());
			}
		});
		found
	}

	/// Index into [`Self::links`] of the link closest to the pointer, if any is in reach.
	pub fn link_at_position(&self, sx: f64, sy: f64) -> Option<usize> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		// link width is drawn in screen space, so the reach shrinks as we zoom in
		let reach = (self.options.link_width / 2.0 + LINK_HIT_SLOP) / self.transform.k;
		let positions = self.positions();
		self.links
			.iter()
			.enumerate()
			.filter_map(|(i, link)| {
				let (x1, y1) = positions.get(&link.source)?;
				let (x2, y2) = positions.get(&link.target)?;
				let d = scale::distance_to_segment(gx, gy, *x1, *y1, *x2, *y2);
				(d <= reach).then_some((i, d))
			})
			.min_by(|a, b| a.1.total_cmp(&b.1))
			.map(|(i, _)| i)
	}

	pub fn node_id(&self, idx: DefaultNodeIdx) -> Option<String> {
		let mut id = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				id = Some(node.data.user_data.id.clone());
			}
		});
		id
	}

	/// Flip the selection flag of node `id`; returns the new flag.
	pub fn toggle_node_selection(&mut self, id: &str) -> bool {
		toggle(&mut self.selection.selected, id)
	}

	/// Flip the selection flag of the link at `link` in [`Self::links`].
	pub fn toggle_link_selection(&mut self, link: usize) -> Option<bool> {
		let key = self.links.get(link)?.key.clone();
		Some(toggle(&mut self.selection.links_selected, &key))
	}

	pub fn selection(&self) -> &SelectionState {
		&self.selection
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		if self.hover.node == node {
			return;
		}
		let was_hovering = self.hover.node.is_some();

		// Keep the previous highlight around while it fades out
		if was_hovering && node.is_none() {
			self.hover.prev_node = self.hover.node.take();
			self.hover.prev_neighbors = std::mem::take(&mut self.hover.neighbors);
		} else {
			self.hover.prev_node = None;
			self.hover.prev_neighbors.clear();
		}

		self.hover.node = node;
		self.hover.neighbors.clear();

		if let Some(idx) = node {
			if !was_hovering {
				self.hover.delay_t = 0.0;
			}
			for link in &self.links {
				if link.source == idx {
					self.hover.neighbors.insert(link.target);
				} else if link.target == idx {
					self.hover.neighbors.insert(link.source);
				}
			}
		}
	}

	pub fn is_highlighted(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx)
			|| self.hover.neighbors.contains(&idx)
			|| self.hover.prev_node == Some(idx)
			|| self.hover.prev_neighbors.contains(&idx)
	}

	pub fn is_hovered(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx) || self.hover.prev_node == Some(idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some() || self.hover.prev_node.is_some()
	}

	/// Restart the layout after it paused, e.g. when a node is dragged.
	pub fn wake(&mut self) {
		self.animation_running = true;
		self.still_ticks = 0;
	}

	fn step_layout(&mut self, dt: f32) {
		let before = self.positions();
		self.graph.update(dt);
		let mut moved: f64 = 0.0;
		self.graph.visit_nodes(|node| {
			if let Some((x, y)) = before.get(&node.index()) {
				moved = moved.max((node.x() as f64 - x).hypot(node.y() as f64 - y));
			}
		});

		if moved < SETTLE_DISTANCE {
			self.still_ticks += 1;
			if self.still_ticks >= SETTLE_TICKS {
				self.animation_running = false;
				debug!("layout settled after {} resting ticks", self.still_ticks);
			}
		} else {
			self.still_ticks = 0;
		}
	}

	/// Advance one frame: the layout while it is running, the hover fade always.
	pub fn tick(&mut self, dt: f32) {
		if self.animation_running {
			self.step_layout(dt);
		}
		self.flow_time += dt as f64;

		let (target, delay, speed) = if self.hover.node.is_some() {
			(1.0, 0.08, 1.8)
		} else {
			(0.0, 0.0, 1.26)
		};

		if self.hover.node.is_some() {
			self.hover.delay_t = (self.hover.delay_t + dt as f64).min(delay);
			if self.hover.delay_t >= delay {
				self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			}
		} else {
			self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			if self.hover.highlight_t < 0.01 {
				self.hover.highlight_t = 0.0;
				self.hover.prev_node = None;
				self.hover.prev_neighbors.clear();
			}
		}
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
	}

	/// Zoom around the screen point `(x, y)`, keeping it fixed.
	pub fn zoom_at(&mut self, x: f64, y: f64, delta_y: f64) {
		let new_k = scale::wheel_zoom(self.transform.k, delta_y);
		let ratio = new_k / self.transform.k;
		self.transform.x = x - (x - self.transform.x) * ratio;
		self.transform.y = y - (y - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	pub fn scene(&self) -> Scene {
		let t = scale::ease_out_cubic(self.hover.highlight_t);
		let has_highlight = self.has_active_highlight();
		let k = self.transform.k;
		let base_radius = self.options.node_radius();
		let line_width = self.options.link_width / k;

		let mut dimmed = Vec::new();
		let mut lit = Vec::new();
		let mut radii = HashMap::new();
		self.graph.visit_nodes(|node| {
			let idx = node.index();
			let info = &node.data.user_data;
			let highlighted = has_highlight && self.is_highlighted(idx);
			let hovered = self.is_hovered(idx);
			let (radius, glow_radius, alpha) = if !highlighted {
				(base_radius * (1.0 - 0.15 * t), 0.0, 1.0 - 0.7 * t)
			} else if hovered {
				(
					base_radius * (1.0 + 0.35 * t),
					base_radius * (1.8 + 1.2 * t),
					1.0,
				)
			} else {
				(
					base_radius * (1.0 + 0.2 * t),
					base_radius * (1.4 + 0.6 * t),
					1.0,
				)
			};
			radii.insert(idx, radius);
			let scene_node = SceneNode {
				id: info.id.clone(),
				x: node.x() as f64,
				y: node.y() as f64,
				radius,
				glow_radius,
				alpha,
				color: info.color.clone(),
				label: info.label.clone(),
				hovered: hovered && highlighted,
				highlighted,
				selected: self.selection.selected.get(&info.id).copied().unwrap_or(false),
			};
			if highlighted {
				lit.push(scene_node);
			} else {
				dimmed.push(scene_node);
			}
		});
		dimmed.extend(lit);

		let positions = self.positions();
		let links = self
			.links
			.iter()
			.filter_map(|link| {
				let (x1, y1) = *positions.get(&link.source)?;
				let (x2, y2) = *positions.get(&link.target)?;
				let highlighted = self.is_highlighted(link.source) && self.is_highlighted(link.target);
				// t=0: all links at 0.6; t=1: highlighted at 0.9, others at 0.15
				let (alpha, width) = if highlighted {
					(0.6 + 0.3 * t, line_width * (1.0 + 0.3 * t))
				} else {
					(0.6 - 0.45 * t, line_width * (1.0 - 0.3 * t))
				};
				Some(SceneLink {
					key: link.key.clone(),
					x1,
					y1,
					x2,
					y2,
					width,
					alpha,
					source_radius: radii.get(&link.source).copied().unwrap_or(0.0),
					target_radius: radii.get(&link.target).copied().unwrap_or(0.0),
					label: link.label.clone(),
					highlighted,
					selected: self
						.selection
						.links_selected
						.get(&link.key)
						.copied()
						.unwrap_or(false),
				})
			})
			.collect();

		Scene {
			width: self.width,
			height: self.height,
			transform: self.transform.clone(),
			links,
			nodes: dimmed,
			node_labels: self.options.node_labels,
			link_labels: self.options.link_labels,
			highlight_t: t,
			flow_time: self.flow_time,
		}
	}
}

fn toggle(selection: &mut Selection, key: &str) -> bool {
	let flag = selection.entry(key.to_string()).or_insert(false);
	*flag = !*flag;
	*flag
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::force_graph::options::{Offset, defaults};
	use crate::components::force_graph::types::GraphData;

	fn node(id: &str) -> GraphNode {
		GraphNode {
			id: id.into(),
			label: None,
			color: None,
			group: None,
		}
	}

	fn link(source: &str, target: &str) -> GraphLink {
		GraphLink {
			id: None,
			source: source.into(),
			target: target.into(),
			label: None,
		}
	}

	fn config(nodes: &[&str], links: &[(&str, &str)]) -> GraphConfig {
		defaults().with_data(GraphData {
			nodes: nodes.iter().map(|id| node(id)).collect(),
			links: links.iter().map(|(s, t)| link(s, t)).collect(),
		})
	}

	#[test]
	fn string_links_resolve_by_id() {
		let cfg = config(&["a", "b", "c"], &[("a", "b"), ("c", "a"), ("a", "zzz")]);
		assert_eq!(
			resolve_links(&cfg.nodes, &cfg.links, true),
			vec![(0, 0, 1), (1, 2, 0)]
		);
	}

	#[test]
	fn index_links_resolve_by_position() {
		let cfg = config(&["a", "b", "c"], &[("0", "2"), ("a", "b"), ("1", "3")]);
		assert_eq!(resolve_links(&cfg.nodes, &cfg.links, false), vec![(0, 0, 2)]);
	}

	#[test]
	fn state_uses_options() {
		let mut cfg = config(&["a", "b"], &[("a", "b"), ("a", "missing")]);
		cfg.options.offset = Offset { x: 10.0, y: -5.0 };
		cfg.selected.insert("a".into(), true);

		let state = ForceGraphState::new(&cfg, 500.0, 600.0);
		assert_eq!(state.links().len(), 1);
		assert_eq!(state.links()[0].key, "0");
		assert_eq!(
			state.transform,
			ViewTransform {
				x: 260.0,
				y: 295.0,
				k: 1.0
			}
		);
		assert_eq!(state.selection().selected.get("a"), Some(&true));
	}

	#[test]
	fn instances_do_not_share_selection() {
		let cfg = config(&["a"], &[]);
		let mut first = ForceGraphState::new(&cfg, 500.0, 600.0);
		let second = ForceGraphState::new(&cfg, 500.0, 600.0);
		assert!(first.toggle_node_selection("a"));
		assert!(second.selection().selected.is_empty());
		assert!(cfg.selected.is_empty());
		assert!(!first.toggle_node_selection("a"));
		assert_eq!(first.selection().selected.get("a"), Some(&false));
	}

	#[test]
	fn hit_testing_nodes_and_links() {
		let cfg = config(&["a", "b"], &[("a", "b")]);
		let state = ForceGraphState::new(&cfg, 500.0, 600.0);
		// "a" sits at (RING_RADIUS, 0), "b" at (-RING_RADIUS, ~0)
		let (cx, cy) = (state.transform.x, state.transform.y);

		let hit = state.node_at_position(cx + RING_RADIUS, cy).unwrap();
		assert_eq!(state.node_id(hit).as_deref(), Some("a"));
		assert_eq!(state.link_at_position(cx, cy + 1.0), Some(0));
		assert_eq!(state.link_at_position(cx, cy + 50.0), None);
		assert!(state.node_at_position(cx, cy + 50.0).is_none());
	}

	#[test]
	fn link_reach_follows_zoom() {
		let cfg = config(&["a", "b"], &[("a", "b")]);
		let mut state = ForceGraphState::new(&cfg, 500.0, 600.0);
		let (cx, cy) = (state.transform.x, state.transform.y);

		// zoomed in, a 2px stroke is only reachable a few pixels away on screen
		state.transform.k = 10.0;
		assert_eq!(state.link_at_position(cx, cy + 3.0), Some(0));
		assert_eq!(state.link_at_position(cx, cy + 40.0), None);

		// zoomed out, the same screen distance still reaches the link
		state.transform.k = 0.1;
		assert_eq!(state.link_at_position(cx, cy + 2.0), Some(0));
		assert_eq!(state.link_at_position(cx, cy + 6.0), None);
	}

	#[test]
	fn layout_pauses_at_rest_and_wakes() {
		let mut state = ForceGraphState::new(&config(&[], &[]), 500.0, 600.0);
		for _ in 0..SETTLE_TICKS - 1 {
			state.tick(0.016);
		}
		assert!(state.animation_running);
		state.tick(0.016);
		assert!(!state.animation_running);

		state.wake();
		assert!(state.animation_running);
		state.tick(0.016);
		assert!(state.animation_running);
	}

	#[test]
	fn paused_frames_repeat_the_same_picture() {
		let mut state = ForceGraphState::new(&config(&["a", "b"], &[("a", "b")]), 500.0, 600.0);
		state.animation_running = false;
		let first = state.scene();
		state.tick(0.016);
		let second = state.scene();
		assert!(first.same_picture(&second));
		assert_ne!(first.flow_time, second.flow_time);

		state.zoom_at(10.0, 10.0, -1.0);
		assert!(!second.same_picture(&state.scene()));
	}

	#[test]
	fn link_selection_uses_link_key() {
		let mut cfg = config(&["a", "b"], &[("a", "b")]);
		cfg.links[0].id = Some("ab".into());
		let mut state = ForceGraphState::new(&cfg, 500.0, 600.0);
		assert_eq!(state.toggle_link_selection(0), Some(true));
		assert_eq!(state.toggle_link_selection(3), None);
		assert_eq!(state.selection().links_selected.get("ab"), Some(&true));
		assert!(state.scene().links[0].selected);
	}

	#[test]
	fn zoom_keeps_pointer_fixed() {
		let mut state = ForceGraphState::new(&config(&[], &[]), 500.0, 600.0);
		let before = state.screen_to_graph(100.0, 80.0);
		state.zoom_at(100.0, 80.0, -1.0);
		let after = state.screen_to_graph(100.0, 80.0);
		assert!((state.transform.k - 1.1).abs() < 1e-9);
		assert!((before.0 - after.0).abs() < 1e-9 && (before.1 - after.1).abs() < 1e-9);
	}

	#[test]
	fn scene_reflects_render_toggles() {
		let mut state = ForceGraphState::new(&config(&["a", "b"], &[("a", "b")]), 500.0, 600.0);
		let scene = state.scene();
		assert_eq!(scene.nodes.len(), 2);
		assert_eq!(scene.nodes[0].radius, 10.0);
		assert_eq!(scene.links[0].width, 2.0);
		assert!(!scene.node_labels);

		let mut opts = state.options.clone();
		opts.node_labels = true;
		opts.node_size = 30.0;
		state.set_options(opts);
		let scene = state.scene();
		assert!(scene.node_labels);
		assert_eq!(scene.nodes[0].radius, 15.0);
	}

	#[test]
	fn hover_collects_neighbors() {
		let cfg = config(&["a", "b", "c"], &[("a", "b"), ("c", "b")]);
		let mut state = ForceGraphState::new(&cfg, 500.0, 600.0);
		let b = state.links()[0].target;
		state.set_hover(Some(b));
		assert_eq!(state.hover.neighbors.len(), 2);
		assert!(state.is_hovered(b));
		state.set_hover(None);
		assert!(state.hover.neighbors.is_empty());
		assert_eq!(state.hover.prev_node, Some(b));
	}
}
