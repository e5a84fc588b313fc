use leptos::prelude::*;

use super::scale::label_font_size;
use super::state::{Scene, SceneLink, SceneNode};

/// Inline SVG rendering of a frame, used when the canvas backend is off.
pub fn render(scene: &Scene) -> impl IntoView + use<> {
	let k = scene.transform.k;
	let transform = format!(
		"translate({} {}) scale({})",
		scene.transform.x, scene.transform.y, k
	);
	let links = scene
		.links
		.iter()
		.map(|link| link_view(link, scene.link_labels, k))
		.collect::<Vec<_>>();
	let nodes = scene
		.nodes
		.iter()
		.map(|node| node_view(node, scene.node_labels, scene.highlight_t, k))
		.collect::<Vec<_>>();

	view! {
		<svg
			class="force-graph-svg"
			width=scene.width.to_string()
			height=scene.height.to_string()
			style="display: block; background: #1a1a2e;"
		>
			<g transform=transform>{links}{nodes}</g>
		</svg>
	}
}

fn link_view(link: &SceneLink, show_label: bool, k: f64) -> impl IntoView + use<> {
	let stroke = if link.selected {
		format!("rgba(255, 209, 102, {})", link.alpha)
	} else {
		format!("rgba(100, 180, 255, {})", link.alpha)
	};
	let label = link.label.clone().filter(|_| show_label).map(|text| {
		view! {
			<text
				x=((link.x1 + link.x2) / 2.0).to_string()
				y=((link.y1 + link.y2) / 2.0).to_string()
				fill=format!("rgba(200, 220, 255, {})", link.alpha)
				font-size=(label_font_size(k) * 0.9).to_string()
				text-anchor="middle"
			>
				{text}
			</text>
		}
	});

	view! {
		<g class="link" data-key=link.key.clone()>
			<line
				x1=link.x1.to_string()
				y1=link.y1.to_string()
				x2=link.x2.to_string()
				y2=link.y2.to_string()
				stroke=stroke
				stroke-width=link.width.to_string()
			/>
			{label}
		</g>
	}
}

fn node_view(node: &SceneNode, show_label: bool, t: f64, k: f64) -> impl IntoView + use<> {
	let (stroke, stroke_width) = if node.selected {
		("#ffd166".to_string(), 2.0 / k)
	} else if node.hovered && t > 0.01 {
		(format!("rgba(255, 255, 255, {})", 0.7 * t), 1.5 / k)
	} else {
		("none".to_string(), 0.0)
	};
	let glow = (node.glow_radius > 0.0 && t > 0.01).then(|| {
		let alpha = if node.hovered { 0.35 * t } else { 0.2 * t };
		view! {
			<circle
				cx=node.x.to_string()
				cy=node.y.to_string()
				r=node.glow_radius.to_string()
				fill=format!("rgba(200, 220, 255, {})", alpha)
			/>
		}
	});
	let label = node.label.clone().filter(|_| show_label).map(|text| {
		let alpha = if node.highlighted { 1.0 } else { node.alpha * 0.8 };
		view! {
			<text
				x=(node.x + node.radius + 3.0).to_string()
				y=(node.y + 3.0).to_string()
				fill=format!("rgba(255, 255, 255, {})", alpha)
				font-size=label_font_size(k).to_string()
			>
				{text}
			</text>
		}
	});

	view! {
		<g class="node" data-id=node.id.clone()>
			{glow}
			<circle
				cx=node.x.to_string()
				cy=node.y.to_string()
				r=node.radius.to_string()
				fill=node.color.clone()
				opacity=node.alpha.to_string()
				stroke=stroke
				stroke-width=stroke_width.to_string()
			/>
			{label}
		</g>
	}
}
