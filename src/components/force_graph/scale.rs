//! Zoom and hit-testing geometry shared by the event handlers and both backends.

pub const MIN_ZOOM: f64 = 0.1;
pub const MAX_ZOOM: f64 = 10.0;

const ZOOM_IN: f64 = 1.1;
const ZOOM_OUT: f64 = 0.9;
const LABEL_FONT_PX: f64 = 10.0;

/// Next zoom level for a wheel event, clamped to [`MIN_ZOOM`, `MAX_ZOOM`].
pub fn wheel_zoom(k: f64, delta_y: f64) -> f64 {
	let factor = if delta_y > 0.0 { ZOOM_OUT } else { ZOOM_IN };
	(k * factor).clamp(MIN_ZOOM, MAX_ZOOM)
}

/// Label font size in world units; labels stop shrinking below half zoom.
pub fn label_font_size(k: f64) -> f64 {
	LABEL_FONT_PX / k.max(0.5)
}

/// Distance from `(px, py)` to the segment `(x1, y1)`-`(x2, y2)`.
pub fn distance_to_segment(px: f64, py: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
	let (dx, dy) = (x2 - x1, y2 - y1);
	let len_sq = dx * dx + dy * dy;
	let t = if len_sq < f64::EPSILON {
		0.0
	} else {
		(((px - x1) * dx + (py - y1) * dy) / len_sq).clamp(0.0, 1.0)
	};
	let (cx, cy) = (x1 + t * dx, y1 + t * dy);
	((px - cx).powi(2) + (py - cy).powi(2)).sqrt()
}

pub fn ease_out_cubic(t: f64) -> f64 {
	1.0 - (1.0 - t).powi(3)
}
