use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use super::options::{RenderOptions, defaults};
use super::render;
use super::state::{CLICK_SLOP, ForceGraphState, Scene, SelectionState};
use super::svg;
use super::types::GraphData;

type SharedState = Rc<RefCell<Option<ForceGraphState>>>;

fn window_size(window: &Window) -> Option<(f64, f64)> {
	Some((
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

/// Build a working state from a fresh copy of the defaults, carrying over the
/// selection of the state it replaces.
fn build_state(
	data: GraphData,
	options: RenderOptions,
	previous: Option<&ForceGraphState>,
	viewport: Option<(f64, f64)>,
) -> ForceGraphState {
	let options = match options.validate() {
		Ok(()) => options,
		Err(err) => {
			warn!("invalid graph options, falling back to defaults: {err}");
			RenderOptions::default()
		}
	};
	let (w, h) = viewport.unwrap_or((options.size.w, options.size.h));
	let mut config = defaults().with_data(data);
	config.options = options;
	if let Some(prev) = previous {
		config.selected = prev.selection.selected.clone();
		config.links_selected = prev.selection.links_selected.clone();
	}
	ForceGraphState::new(&config, w, h)
}

fn draw_canvas(canvas: &HtmlCanvasElement, scene: &Scene) {
	let (w, h) = (scene.width as u32, scene.height as u32);
	if canvas.width() != w {
		canvas.set_width(w);
	}
	if canvas.height() != h {
		canvas.set_height(h);
	}
	let Ok(Some(ctx)) = canvas.get_context("2d") else {
		return;
	};
	let Ok(ctx) = ctx.dyn_into::<CanvasRenderingContext2d>() else {
		return;
	};
	render::render(scene, &ctx);
}

#[component]
pub fn ForceGraphCanvas(
	#[prop(into)] data: Signal<GraphData>,
	#[prop(into)] options: Signal<RenderOptions>,
	#[prop(default = false)] fullscreen: bool,
	/// Called with the full selection after a click toggles a node or link.
	#[prop(optional)]
	on_select: Option<Callback<SelectionState>>,
) -> impl IntoView {
	let container_ref = NodeRef::<leptos::html::Div>::new();
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let scene = RwSignal::new(Scene::default());
	let use_canvas = Memo::new(move |_| options.with(|o| o.canvas));
	let state: SharedState = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let (state_init, animate_init, resize_cb_init) =
		(state.clone(), animate.clone(), resize_cb.clone());

	Effect::new(move |_| {
		if container_ref.get().is_none() {
			return;
		}
		let Some(window) = web_sys::window() else {
			return;
		};
		let graph = data.get();
		let viewport = if fullscreen { window_size(&window) } else { None };
		let built = build_state(
			graph,
			options.get_untracked(),
			state_init.borrow().as_ref(),
			viewport,
		);
		info!(
			"force graph ready: {} links, {}x{}",
			built.links().len(),
			built.width,
			built.height
		);
		*state_init.borrow_mut() = Some(built);

		if fullscreen && resize_cb_init.borrow().is_none() {
			let state_resize = state_init.clone();
			*resize_cb_init.borrow_mut() = Some(Closure::new(move || {
				let Some(size) = web_sys::window().as_ref().and_then(window_size) else {
					return;
				};
				if let Some(ref mut s) = *state_resize.borrow_mut() {
					s.resize(size.0, size.1);
				}
			}));
			if let Some(ref cb) = *resize_cb_init.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		if animate_init.borrow().is_some() {
			return;
		}
		let (state_anim, animate_inner) = (state_init.clone(), animate_init.clone());
		*animate_init.borrow_mut() = Some(Closure::new(move || {
			// component gone, let the loop die
			let Some(canvas_mode) = use_canvas.try_get_untracked() else {
				return;
			};
			if let Some(ref mut s) = *state_anim.borrow_mut() {
				s.tick(0.016);
				let frame = s.scene();
				if canvas_mode {
					if let Some(canvas) = canvas_ref.get_untracked() {
						draw_canvas(&canvas, &frame);
					}
				} else if scene
					.try_with_untracked(|prev| !prev.same_picture(&frame))
					.unwrap_or(false)
				{
					// the SVG subtree is rebuilt on every set, so skip frames at rest
					scene.try_set(frame);
				}
			}
			if let Some(ref cb) = *animate_inner.borrow() {
				if let Some(win) = web_sys::window() {
					let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
				}
			}
		}));
		if let Some(ref cb) = *animate_init.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	let state_opts = state.clone();
	Effect::new(move |_| {
		let opts = options.get();
		let mut guard = state_opts.borrow_mut();
		let Some(current) = guard.as_mut() else {
			return;
		};
		if let Err(err) = opts.validate() {
			warn!("ignoring graph options update: {err}");
			return;
		}
		if current.options.affects_layout(&opts) {
			let viewport = fullscreen.then_some((current.width, current.height));
			let rebuilt = build_state(data.get_untracked(), opts, Some(&*current), viewport);
			*current = rebuilt;
		} else {
			current.set_options(opts);
		}
	});

	let state_md = state.clone();
	let on_mousedown = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(container_ref, &ev) else {
			return;
		};

		if let Some(ref mut s) = *state_md.borrow_mut() {
			if let Some(idx) = s.node_at_position(x, y) {
				s.drag.active = true;
				s.drag.moved = false;
				s.drag.node_idx = Some(idx);
				s.drag.start_x = x;
				s.drag.start_y = y;
				s.graph.visit_nodes(|node| {
					if node.index() == idx {
						s.drag.node_start_x = node.x();
						s.drag.node_start_y = node.y();
					}
				});
			} else {
				s.pan.active = true;
				s.pan.moved = false;
				s.pan.start_x = x;
				s.pan.start_y = y;
				s.pan.transform_start_x = s.transform.x;
				s.pan.transform_start_y = s.transform.y;
			}
		}
	};

	let state_mm = state.clone();
	let on_mousemove = move |ev: MouseEvent| {
		let Some((x, y)) = pointer(container_ref, &ev) else {
			return;
		};

		if let Some(ref mut s) = *state_mm.borrow_mut() {
			if !s.drag.active {
				let hovered = s.node_at_position(x, y);
				s.set_hover(hovered);
			}

			if s.drag.active {
				let (sx, sy) = (x - s.drag.start_x, y - s.drag.start_y);
				s.drag.moved |= sx.hypot(sy) > CLICK_SLOP;
				if let (Some(idx), true) = (s.drag.node_idx, s.drag.moved) {
					s.wake();
					let k = s.transform.k;
					let (nx, ny) = (
						s.drag.node_start_x + (sx / k) as f32,
						s.drag.node_start_y + (sy / k) as f32,
					);
					s.graph.visit_nodes_mut(|node| {
						if node.index() == idx {
							node.data.x = nx;
							node.data.y = ny;
							node.data.is_anchor = true;
						}
					});
				}
			} else if s.pan.active {
				let (sx, sy) = (x - s.pan.start_x, y - s.pan.start_y);
				s.pan.moved |= sx.hypot(sy) > CLICK_SLOP;
				s.transform.x = s.pan.transform_start_x + sx;
				s.transform.y = s.pan.transform_start_y + sy;
			}
		}
	};

	let state_mu = state.clone();
	let on_mouseup = move |ev: MouseEvent| {
		let changed = {
			let mut guard = state_mu.borrow_mut();
			let Some(s) = guard.as_mut() else {
				return;
			};
			let clicked_node = match s.drag.node_idx {
				Some(idx) if s.drag.active && !s.drag.moved => s.node_id(idx),
				_ => None,
			};
			let clicked_background = s.pan.active && !s.pan.moved;
			s.drag.active = false;
			s.drag.node_idx = None;
			s.pan.active = false;

			if let Some(id) = clicked_node {
				s.toggle_node_selection(&id);
				Some(s.selection().clone())
			} else if clicked_background {
				pointer(container_ref, &ev)
					.and_then(|(x, y)| s.link_at_position(x, y))
					.and_then(|link| s.toggle_link_selection(link))
					.map(|_| s.selection().clone())
			} else {
				None
			}
		};
		if let (Some(selection), Some(cb)) = (changed, on_select) {
			cb.run(selection);
		}
	};

	let state_ml = state.clone();
	let on_mouseleave = move |_: MouseEvent| {
		if let Some(ref mut s) = *state_ml.borrow_mut() {
			s.drag.active = false;
			s.drag.node_idx = None;
			s.pan.active = false;
			s.set_hover(None);
		}
	};

	let state_wh = state.clone();
	let on_wheel = move |ev: WheelEvent| {
		ev.prevent_default();
		let Some((x, y)) = pointer(container_ref, &ev) else {
			return;
		};
		if let Some(ref mut s) = *state_wh.borrow_mut() {
			s.zoom_at(x, y, ev.delta_y());
		}
	};

	view! {
		<div
			node_ref=container_ref
			class="force-graph"
			on:mousedown=on_mousedown
			on:mousemove=on_mousemove
			on:mouseup=on_mouseup
			on:mouseleave=on_mouseleave
			on:wheel=on_wheel
			style="display: inline-block; cursor: grab;"
		>
			{move || {
				if use_canvas.get() {
					view! {
						<canvas node_ref=canvas_ref class="force-graph-canvas" style="display: block;" />
					}
						.into_any()
				} else {
					scene.with(svg::render).into_any()
				}
			}}
		</div>
	}
}

/// Pointer position relative to the graph container.
fn pointer(container_ref: NodeRef<leptos::html::Div>, ev: &MouseEvent) -> Option<(f64, f64)> {
	let container = container_ref.get_untracked()?;
	let rect = container.get_bounding_client_rect();
	Some((
		ev.client_x() as f64 - rect.left(),
		ev.client_y() as f64 - rect.top(),
	))
}
