use super::types::LandmarkGraph;

pub const NODE_RADIUS: f64 = 10.0;

/// Padding around the node bounding box when fitting the viewport, in
/// screen pixels.
pub const FIT_PADDING: f64 = 50.0;

const MIN_ZOOM: f64 = 0.1;
const MAX_ZOOM: f64 = 10.0;

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Mutable canvas state: the immutable graph, the currently displayed path
/// and the view transform driven by fit/pan/zoom.
pub struct MapState {
	pub graph: LandmarkGraph,
	pub path: Vec<String>,
	pub transform: ViewTransform,
	pub pan: PanState,
	pub width: f64,
	pub height: f64,
}

impl MapState {
	pub fn new(graph: LandmarkGraph, width: f64, height: f64) -> Self {
		let mut state = Self {
			graph,
			path: Vec::new(),
			transform: ViewTransform::default(),
			pan: PanState::default(),
			width,
			height,
		};
		state.fit();
		state
	}

	/// Replace the displayed path wholesale. Any change of value re-frames
	/// the viewport around the full graph, so the fit fires both when a
	/// fetch clears the path and when a new one resolves.
	pub fn set_path(&mut self, path: Vec<String>) {
		if self.path != path {
			self.path = path;
			self.fit();
		}
	}

	/// Center the full graph in the canvas with [`FIT_PADDING`] around it,
	/// zooming as far in as both dimensions allow.
	pub fn fit(&mut self) {
		let nodes = self.graph.nodes();
		let Some(first) = nodes.first() else {
			self.transform = ViewTransform {
				x: self.width / 2.0,
				y: self.height / 2.0,
				k: 1.0,
			};
			return;
		};

		let (mut min_x, mut max_x, mut min_y, mut max_y) = (first.x, first.x, first.y, first.y);
		for node in nodes {
			min_x = min_x.min(node.x);
			max_x = max_x.max(node.x);
			min_y = min_y.min(node.y);
			max_y = max_y.max(node.y);
		}

		// A single node gives a zero-sized box; treat it as 1x1.
		let box_w = (max_x - min_x).max(1.0);
		let box_h = (max_y - min_y).max(1.0);
		let k = ((self.width - 2.0 * FIT_PADDING) / box_w)
			.min((self.height - 2.0 * FIT_PADDING) / box_h)
			.clamp(MIN_ZOOM, MAX_ZOOM);

		let (cx, cy) = ((min_x + max_x) / 2.0, (min_y + max_y) / 2.0);
		self.transform = ViewTransform {
			x: self.width / 2.0 - k * cx,
			y: self.height / 2.0 - k * cy,
			k,
		};
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn zoom_at(&mut self, sx: f64, sy: f64, factor: f64) {
		let new_k = (self.transform.k * factor).clamp(MIN_ZOOM, MAX_ZOOM);
		let ratio = new_k / self.transform.k;
		self.transform.x = sx - (sx - self.transform.x) * ratio;
		self.transform.y = sy - (sy - self.transform.y) * ratio;
		self.transform.k = new_k;
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.fit();
	}
}

#[cfg(test)]
mod tests {
	use super::super::types::landmark_graph;
	use super::*;

	fn graph_to_screen(state: &MapState, gx: f64, gy: f64) -> (f64, f64) {
		(
			state.transform.x + state.transform.k * gx,
			state.transform.y + state.transform.k * gy,
		)
	}

	#[test]
	fn fit_centers_the_node_bounding_box() {
		let state = MapState::new(landmark_graph(), 800.0, 600.0);
		// Landmark coordinates span x 100..500, y 50..300.
		let (sx, sy) = graph_to_screen(&state, 300.0, 175.0);
		assert!((sx - 400.0).abs() < 1e-9);
		assert!((sy - 300.0).abs() < 1e-9);
	}

	#[test]
	fn fit_keeps_every_node_inside_the_padded_area() {
		let state = MapState::new(landmark_graph(), 800.0, 600.0);
		for node in state.graph.nodes() {
			let (sx, sy) = graph_to_screen(&state, node.x, node.y);
			assert!(sx >= FIT_PADDING - 1e-9 && sx <= 800.0 - FIT_PADDING + 1e-9);
			assert!(sy >= FIT_PADDING - 1e-9 && sy <= 600.0 - FIT_PADDING + 1e-9);
		}
	}

	#[test]
	fn set_path_refits_only_on_value_change() {
		let mut state = MapState::new(landmark_graph(), 800.0, 600.0);
		state.zoom_at(0.0, 0.0, 2.0);
		let zoomed = state.transform.k;

		// Same value: no re-fit.
		state.set_path(Vec::new());
		assert_eq!(state.transform.k, zoomed);

		// New value: viewport re-framed.
		state.set_path(vec!["Museum".to_string(), "Library".to_string()]);
		assert_ne!(state.transform.k, zoomed);
	}

	#[test]
	fn screen_to_graph_inverts_the_transform() {
		let mut state = MapState::new(landmark_graph(), 800.0, 600.0);
		state.zoom_at(123.0, 45.0, 1.3);
		let (sx, sy) = graph_to_screen(&state, 250.0, 250.0);
		let (gx, gy) = state.screen_to_graph(sx, sy);
		assert!((gx - 250.0).abs() < 1e-9);
		assert!((gy - 250.0).abs() < 1e-9);
	}

	#[test]
	fn zoom_is_clamped() {
		let mut state = MapState::new(landmark_graph(), 800.0, 600.0);
		for _ in 0..100 {
			state.zoom_at(400.0, 300.0, 1.5);
		}
		assert!(state.transform.k <= 10.0);
		for _ in 0..200 {
			state.zoom_at(400.0, 300.0, 0.5);
		}
		assert!(state.transform.k >= 0.1);
	}
}
