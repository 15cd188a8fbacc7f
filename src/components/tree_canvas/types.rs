/// Sequential block id, also shown as the block's label.
pub type NodeId = u32;

/// Height of the add-control button inside a block.
pub const BUTTON_HEIGHT: f64 = 32.0;
/// Gap between the add-control and the bottom edge of its block.
pub const BUTTON_MARGIN: f64 = 12.0;
/// Share of the block width covered by the add-control.
pub const BUTTON_WIDTH_RATIO: f64 = 0.8;

/// Tunable geometry shared by clamping, routing and rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TreeConfig {
	/// Side length of a block's square footprint.
	pub size: f64,
	/// Margin kept between any block and the viewport edges.
	pub pad: f64,
}

impl Default for TreeConfig {
	fn default() -> Self {
		Self {
			size: 110.0,
			pad: 24.0,
		}
	}
}

impl TreeConfig {
	/// Valid `[min, max]` range for a block's corner along an axis of length `dim`.
	///
	/// The upper bound never drops below `pad`, so a viewport smaller than
	/// `size + 2 * pad` collapses the range to the single point `pad`.
	pub fn axis_range(&self, dim: f64) -> (f64, f64) {
		(self.pad, (dim - self.size - self.pad).max(self.pad))
	}

	pub fn clamp_axis(&self, value: f64, dim: f64) -> f64 {
		let (min, max) = self.axis_range(dim);
		value.clamp(min, max)
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
}

impl Viewport {
	pub fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	pub x: f64,
	pub y: f64,
}

impl Point {
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
	pub x: f64,
	pub y: f64,
	pub w: f64,
	pub h: f64,
}

impl Rect {
	pub fn contains(&self, px: f64, py: f64) -> bool {
		px >= self.x && px <= self.x + self.w && py >= self.y && py <= self.y + self.h
	}
}

/// A block on the canvas. `x`/`y` is the top-left corner of its footprint.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
	pub id: NodeId,
	pub parent_id: Option<NodeId>,
	pub x: f64,
	pub y: f64,
}

impl Node {
	pub fn bounds(&self, config: &TreeConfig) -> Rect {
		Rect {
			x: self.x,
			y: self.y,
			w: config.size,
			h: config.size,
		}
	}

	pub fn add_control(&self, config: &TreeConfig) -> Rect {
		let w = config.size * BUTTON_WIDTH_RATIO;
		Rect {
			x: self.x + (config.size - w) / 2.0,
			y: self.y + config.size - BUTTON_MARGIN - BUTTON_HEIGHT,
			w,
			h: BUTTON_HEIGHT,
		}
	}

	/// Bottom-center attachment point, where connectors to children start.
	pub fn bottom_anchor(&self, config: &TreeConfig) -> Point {
		Point::new(self.x + config.size / 2.0, self.y + config.size)
	}

	/// Top-center attachment point, where the connector from the parent ends.
	pub fn top_anchor(&self, config: &TreeConfig) -> Point {
		Point::new(self.x + config.size / 2.0, self.y)
	}
}

/// Derived connector between a parent and one of its children.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
	/// `(parent id, child id)`, stable across re-renders.
	pub key: (NodeId, NodeId),
	pub points: [Point; 4],
}
