use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::scale::label_font_size;
use super::state::{Scene, SceneLink, SceneNode};

const SELECTED_COLOR: &str = "#ffd166";

pub fn render(scene: &Scene, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str("#1a1a2e");
	ctx.fill_rect(0.0, 0.0, scene.width, scene.height);
	ctx.save();
	let _ = ctx.translate(scene.transform.x, scene.transform.y);
	let _ = ctx.scale(scene.transform.k, scene.transform.k);
	draw_links(scene, ctx);
	for node in &scene.nodes {
		draw_node(scene, node, ctx);
	}
	ctx.restore();
}

fn draw_links(scene: &Scene, ctx: &CanvasRenderingContext2d) {
	let k = scene.transform.k;
	let (dash, gap, arrow_size) = (8.0 / k, 4.0 / k, 8.0 / k);
	let dash_offset = -(scene.flow_time * 30.0) % (dash + gap);

	for link in &scene.links {
		let (dx, dy) = (link.x2 - link.x1, link.y2 - link.y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			continue;
		}
		let color = link_color(link);
		// arrows are drawn slightly stronger than the dashes
		let arrow_alpha = (link.alpha + 0.2).min(1.0);

		ctx.set_stroke_style_str(&format!("rgba({}, {})", color, link.alpha));
		ctx.set_line_width(link.width);
		let _ = ctx.set_line_dash(&js_sys::Array::of2(
			&JsValue::from_f64(dash),
			&JsValue::from_f64(gap),
		));
		ctx.set_line_dash_offset(dash_offset);

		let (ux, uy) = (dx / dist, dy / dist);
		ctx.begin_path();
		ctx.move_to(link.x1 + ux * link.source_radius, link.y1 + uy * link.source_radius);
		ctx.line_to(
			link.x2 - ux * (link.target_radius + arrow_size),
			link.y2 - uy * (link.target_radius + arrow_size),
		);
		ctx.stroke();

		let _ = ctx.set_line_dash(&js_sys::Array::new());
		ctx.set_fill_style_str(&format!("rgba({}, {})", color, arrow_alpha));
		let (tip_x, tip_y) = (
			link.x2 - ux * link.target_radius,
			link.y2 - uy * link.target_radius,
		);
		let (back_x, back_y) = (tip_x - ux * arrow_size, tip_y - uy * arrow_size);
		let (px, py) = (-uy * arrow_size * 0.5, ux * arrow_size * 0.5);
		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();

		if scene.link_labels {
			if let Some(label) = &link.label {
				ctx.set_fill_style_str(&format!("rgba(200, 220, 255, {})", link.alpha));
				ctx.set_font(&format!("{}px sans-serif", label_font_size(k) * 0.9));
				let _ = ctx.fill_text(label, (link.x1 + link.x2) / 2.0, (link.y1 + link.y2) / 2.0);
			}
		}
	}
	let _ = ctx.set_line_dash(&js_sys::Array::new());
}

fn link_color(link: &SceneLink) -> &'static str {
	if link.selected {
		"255, 209, 102"
	} else {
		"100, 180, 255"
	}
}

fn draw_node(scene: &Scene, node: &SceneNode, ctx: &CanvasRenderingContext2d) {
	let (k, t) = (scene.transform.k, scene.highlight_t);

	if node.glow_radius > 0.0 && t > 0.01 {
		if let Ok(gradient) =
			ctx.create_radial_gradient(node.x, node.y, node.radius * 0.3, node.x, node.y, node.glow_radius)
		{
			let alpha = if node.hovered { 0.35 * t } else { 0.2 * t };
			let _ = gradient.add_color_stop(0.0, &format!("rgba(255, 255, 255, {})", alpha));
			let _ = gradient.add_color_stop(0.6, &format!("rgba(200, 220, 255, {})", alpha * 0.3));
			let _ = gradient.add_color_stop(1.0, "rgba(255, 255, 255, 0)");
			ctx.begin_path();
			let _ = ctx.arc(node.x, node.y, node.glow_radius, 0.0, 2.0 * PI);
			#[allow(deprecated)]
			ctx.set_fill_style(&gradient);
			ctx.fill();
		}
	}

	ctx.set_global_alpha(node.alpha);
	ctx.begin_path();
	let _ = ctx.arc(node.x, node.y, node.radius, 0.0, 2.0 * PI);
	ctx.set_fill_style_str(&node.color);
	ctx.fill();
	ctx.set_global_alpha(1.0);

	if node.selected {
		ctx.begin_path();
		let _ = ctx.arc(node.x, node.y, node.radius + 3.0 / k, 0.0, 2.0 * PI);
		ctx.set_stroke_style_str(SELECTED_COLOR);
		ctx.set_line_width(2.0 / k);
		ctx.stroke();
	} else if node.hovered && t > 0.01 {
		ctx.begin_path();
		let _ = ctx.arc(node.x, node.y, node.radius + 2.0 / k, 0.0, 2.0 * PI);
		ctx.set_stroke_style_str(&format!("rgba(255, 255, 255, {})", 0.7 * t));
		ctx.set_line_width(1.5 / k);
		ctx.stroke();
	}

	if scene.node_labels {
		if let Some(label) = &node.label {
			let alpha = if node.highlighted { 1.0 } else { node.alpha * 0.8 };
			ctx.set_fill_style_str(&format!("rgba(255, 255, 255, {})", alpha));
			ctx.set_font(&format!("{}px sans-serif", label_font_size(k)));
			let _ = ctx.fill_text(label, node.x + node.radius + 3.0, node.y + 3.0);
		}
	}
}
