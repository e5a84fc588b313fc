use leptos::prelude::*;
use log::warn;
use serde_json::json;

use crate::components::force_graph::{
	ForceGraphCanvas, GraphConfig, GraphData, GraphLink, GraphNode, RenderOptions, SelectionState,
	defaults,
};

/// Generate sample graph data (random tree similar to the JS example).
fn generate_sample_data(n: usize) -> GraphData {
	let nodes: Vec<GraphNode> = (0..n)
		.map(|i| GraphNode {
			id: format!("n{}", i),
			label: Some(format!("Node {}", i)),
			color: None,
			group: Some((i % 10) as u32),
		})
		.collect();

	let links: Vec<GraphLink> = (1..n)
		.map(|i| {
			let target = (rand_simple(i) * (i as f64)) as usize;
			GraphLink {
				id: Some(format!("l{}", i)),
				source: format!("n{}", i),
				target: format!("n{}", target),
				label: Some(format!("{} to {}", i, target)),
			}
		})
		.collect();

	GraphData { nodes, links }
}

/// Simple pseudo-random number generator (deterministic for consistency).
fn rand_simple(seed: usize) -> f64 {
	let x = ((seed + 1) * 9301 + 49297) % 233280;
	(x as f64) / 233280.0
}

/// Page configuration: the shipped defaults with a larger canvas.
fn page_config() -> GraphConfig {
	let base = defaults();
	base.merged(&json!({ "options": { "size": { "w": 900, "h": 640 } } }))
		.unwrap_or_else(|err| {
			warn!("page options rejected: {err}");
			base
		})
}

fn option_toggle(
	label: &'static str,
	options: RwSignal<RenderOptions>,
	get: fn(&RenderOptions) -> bool,
	set: fn(&mut RenderOptions, bool),
) -> impl IntoView {
	view! {
		<label class="option">
			<input
				type="checkbox"
				prop:checked=move || options.with(get)
				on:change=move |ev| {
					let checked = event_target_checked(&ev);
					options.update(|o| set(o, checked));
				}
			/>
			{label}
		</label>
	}
}

/// Default Home Page
#[component]
pub fn Home() -> impl IntoView {
	let config = page_config();
	let options = RwSignal::new(config.options);
	let graph_data = Signal::derive(move || generate_sample_data(60));
	let selected_count = RwSignal::new(0usize);

	let on_select = Callback::new(move |selection: SelectionState| {
		let count = selection
			.selected
			.values()
			.chain(selection.links_selected.values())
			.filter(|flag| **flag)
			.count();
		selected_count.set(count);
	});

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="graph-page">
				<div class="graph-options">
					<h1>"Force-Directed Graph"</h1>
					<p class="subtitle">
						"Drag nodes to reposition. Scroll to zoom. Click a node or link to select it."
					</p>
					{option_toggle("Canvas", options, |o| o.canvas, |o, v| o.canvas = v)}
					{option_toggle("Node labels", options, |o| o.node_labels, |o, v| o.node_labels = v)}
					{option_toggle("Link labels", options, |o| o.link_labels, |o, v| o.link_labels = v)}
					<label class="option">
						"Force "
						<input
							type="range"
							min="50"
							max="1000"
							step="50"
							prop:value=move || options.with(|o| o.force.to_string())
							on:change=move |ev| {
								if let Ok(force) = event_target_value(&ev).parse::<f64>() {
									options.update(|o| o.force = force);
								}
							}
						/>
					</label>
					<p>{move || format!("{} selected", selected_count.get())}</p>
				</div>
				<ForceGraphCanvas data=graph_data options=options on_select=on_select />
			</div>
		</ErrorBoundary>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sample_links_resolve_by_id() {
		let data = generate_sample_data(20);
		assert_eq!(data.nodes.len(), 20);
		assert_eq!(data.links.len(), 19);
		for link in &data.links {
			assert!(data.nodes.iter().any(|n| n.id == link.target));
		}
	}

	#[test]
	fn page_config_only_grows_the_canvas() {
		let config = page_config();
		assert_eq!(config.options.size.w, 900.0);
		assert_eq!(config.options.size.h, 640.0);
		assert_eq!(
			RenderOptions {
				size: Default::default(),
				..config.options
			},
			RenderOptions::default()
		);
	}
}
