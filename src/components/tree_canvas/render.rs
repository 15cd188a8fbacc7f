use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::{Hit, TreeCanvasState};
use super::types::{Node, Rect, TreeConfig};

const BACKGROUND: &str = "#fce7f3";
const BLOCK_FILL: &str = "#db2777";
const BLOCK_BORDER: &str = "#be185d";
const BUTTON_FILL: &str = "#fbcfe8";
const BUTTON_TEXT: &str = "#be185d";
const EDGE_STROKE: &str = "black";
const SHADOW: &str = "rgba(0, 0, 0, 0.2)";

const CORNER_RADIUS: f64 = 6.0;
const BUTTON_RADIUS: f64 = 2.0;
const LABEL_TOP: f64 = 12.0;
const EDGE_WIDTH: f64 = 2.0;
const EDGE_DASH: f64 = 6.0;

pub fn render(state: &mut TreeCanvasState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(BACKGROUND);
	ctx.fill_rect(0.0, 0.0, state.viewport.width, state.viewport.height);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
}

fn draw_edges(state: &mut TreeCanvasState, ctx: &CanvasRenderingContext2d) {
	ctx.save();
	ctx.set_stroke_style_str(EDGE_STROKE);
	ctx.set_line_width(EDGE_WIDTH);
	let _ = ctx.set_line_dash(&js_sys::Array::of2(
		&JsValue::from_f64(EDGE_DASH),
		&JsValue::from_f64(EDGE_DASH),
	));

	for edge in state.edges() {
		let [first, rest @ ..] = &edge.points;
		ctx.begin_path();
		ctx.move_to(first.x, first.y);
		for p in rest {
			ctx.line_to(p.x, p.y);
		}
		ctx.stroke();
	}
	ctx.restore();
}

fn draw_nodes(state: &TreeCanvasState, ctx: &CanvasRenderingContext2d) {
	let config = state.store.config();
	for node in state.store.nodes() {
		let button_hovered = state.hover == Some(Hit::AddControl(node.id));
		draw_block(node, config, button_hovered, ctx);
	}
}

fn draw_block(node: &Node, config: &TreeConfig, button_hovered: bool, ctx: &CanvasRenderingContext2d) {
	let body = node.bounds(config);

	ctx.save();
	ctx.set_shadow_color(SHADOW);
	ctx.set_shadow_blur(15.0);
	ctx.set_shadow_offset_y(10.0);
	rounded_rect(ctx, &body, CORNER_RADIUS);
	ctx.set_fill_style_str(BLOCK_FILL);
	ctx.fill();
	ctx.restore();

	rounded_rect(ctx, &body, CORNER_RADIUS);
	ctx.set_stroke_style_str(BLOCK_BORDER);
	ctx.set_line_width(2.0);
	ctx.stroke();

	ctx.set_fill_style_str("white");
	ctx.set_font("600 16px sans-serif");
	ctx.set_text_align("center");
	ctx.set_text_baseline("top");
	let _ = ctx.fill_text(
		&node.id.to_string(),
		body.x + body.w / 2.0,
		body.y + LABEL_TOP,
	);

	let button = node.add_control(config);
	ctx.set_global_alpha(if button_hovered { 0.9 } else { 1.0 });
	rounded_rect(ctx, &button, BUTTON_RADIUS);
	ctx.set_fill_style_str(BUTTON_FILL);
	ctx.fill();
	ctx.set_fill_style_str(BUTTON_TEXT);
	ctx.set_font("bold 18px sans-serif");
	ctx.set_text_baseline("middle");
	let _ = ctx.fill_text("+", button.x + button.w / 2.0, button.y + button.h / 2.0);
	ctx.set_global_alpha(1.0);
}

fn rounded_rect(ctx: &CanvasRenderingContext2d, r: &Rect, radius: f64) {
	let (x0, y0, x1, y1) = (r.x, r.y, r.x + r.w, r.y + r.h);
	ctx.begin_path();
	ctx.move_to(x0 + radius, y0);
	let _ = ctx.arc_to(x1, y0, x1, y1, radius);
	let _ = ctx.arc_to(x1, y1, x0, y1, radius);
	let _ = ctx.arc_to(x0, y1, x0, y0, radius);
	let _ = ctx.arc_to(x0, y0, x1, y0, radius);
	ctx.close_path();
}
