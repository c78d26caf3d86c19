use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::state::{MapState, NODE_RADIUS};
use super::types::{Edge, LandmarkGraph};

const BACKGROUND_COLOR: &str = "#ffffff";
const ACCENT_COLOR: &str = "#e74c3c";
const BASE_NODE_COLOR: &str = "#3498db";
const BASE_EDGE_COLOR: &str = "rgba(0, 0, 0, 0.1)";
const LABEL_COLOR: &str = "#333";

/// Fill color for a node, derived purely from path membership.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeStyle {
	pub fill: &'static str,
}

/// Stroke color and width for an edge, derived purely from path membership.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeStyle {
	pub stroke: &'static str,
	pub width: f64,
}

pub fn node_style(graph: &LandmarkGraph, id: &str, path: &[String]) -> NodeStyle {
	NodeStyle {
		fill: if graph.is_on_path(id, path) {
			ACCENT_COLOR
		} else {
			BASE_NODE_COLOR
		},
	}
}

pub fn edge_style(graph: &LandmarkGraph, edge: &Edge, path: &[String]) -> EdgeStyle {
	if graph.is_edge_on_path(edge, path) {
		EdgeStyle {
			stroke: ACCENT_COLOR,
			width: 3.0,
		}
	} else {
		EdgeStyle {
			stroke: BASE_EDGE_COLOR,
			width: 1.0,
		}
	}
}

pub fn render(state: &MapState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND_COLOR);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_edges(state: &MapState, ctx: &CanvasRenderingContext2d) {
	for edge in state.graph.edges() {
		let (Some((x1, y1)), Some((x2, y2))) = (
			state.graph.position(&edge.source),
			state.graph.position(&edge.target),
		) else {
			continue;
		};

		let style = edge_style(&state.graph, edge, &state.path);
		ctx.set_stroke_style_str(style.stroke);
		ctx.set_line_width(style.width);
		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
		ctx.stroke();
	}
}

fn draw_nodes(state: &MapState, ctx: &CanvasRenderingContext2d) {
	// Labels keep a constant on-screen size while the circles scale.
	let font_size = 14.0 / state.transform.k.max(0.5);
	ctx.set_font(&format!("{}px sans-serif", font_size));
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");

	for node in state.graph.nodes() {
		let style = node_style(&state.graph, &node.id, &state.path);
		ctx.set_fill_style_str(style.fill);
		ctx.begin_path();
		let _ = ctx.arc(node.x, node.y, NODE_RADIUS, 0.0, 2.0 * PI);
		ctx.fill();

		ctx.set_fill_style_str(LABEL_COLOR);
		let _ = ctx.fill_text(&node.id, node.x, node.y - 15.0);
	}
}
