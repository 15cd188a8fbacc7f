use log::debug;

use super::input::DragController;
use super::random::Random;
use super::router::EdgeCache;
use super::store::TreeStore;
use super::types::{Edge, Node, NodeId, TreeConfig, Viewport};

/// What a canvas point lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Hit {
	/// The draggable surface of a block.
	Block(NodeId),
	/// The "+" control of a block.
	AddControl(NodeId),
}

/// Everything the canvas needs between frames.
pub struct TreeCanvasState {
	pub store: TreeStore,
	pub drag: DragController,
	pub viewport: Viewport,
	pub hover: Option<Hit>,
	press: Option<Hit>,
	edges: EdgeCache,
	rng: Box<dyn Random>,
	dirty: bool,
}

impl TreeCanvasState {
	pub fn new(config: TreeConfig, viewport: Viewport, mut rng: Box<dyn Random>) -> Self {
		let mut store = TreeStore::new(config);
		store.create_root(viewport, rng.as_mut());
		Self {
			store,
			drag: DragController::default(),
			viewport,
			hover: None,
			press: None,
			edges: EdgeCache::default(),
			rng,
			dirty: true,
		}
	}

	/// Topmost block element under `(x, y)`; later blocks paint over earlier ones.
	pub fn hit_test(&self, x: f64, y: f64) -> Option<Hit> {
		let config = self.store.config();
		self.store.nodes().iter().rev().find_map(|node| {
			if node.add_control(config).contains(x, y) {
				Some(Hit::AddControl(node.id))
			} else if node.bounds(config).contains(x, y) {
				Some(Hit::Block(node.id))
			} else {
				None
			}
		})
	}

	/// Returns `true` when the press grabbed a block, so the caller should
	/// suppress the browser's default action.
	pub fn pointer_down(&mut self, x: f64, y: f64) -> bool {
		self.press = self.hit_test(x, y);
		match self.press {
			Some(Hit::Block(id)) => self.drag.pointer_down(&self.store, id, x, y),
			_ => false,
		}
	}

	pub fn pointer_move(&mut self, x: f64, y: f64) {
		if self.drag.is_dragging() {
			if self.drag.pointer_move(&mut self.store, x, y, self.viewport) {
				self.dirty = true;
			}
		} else {
			self.set_hover(self.hit_test(x, y));
		}
	}

	pub fn pointer_up(&mut self) {
		self.drag.pointer_up();
	}

	/// Adds a child when both press and release landed on the same add-control.
	pub fn click(&mut self, x: f64, y: f64) -> Option<Node> {
		let press = self.press.take();
		let Some(Hit::AddControl(parent)) = self.hit_test(x, y) else {
			return None;
		};
		if press != Some(Hit::AddControl(parent)) {
			return None;
		}
		let child = self
			.store
			.add_child(parent, self.viewport, self.rng.as_mut())?;
		self.dirty = true;
		Some(child)
	}

	/// Stores the new bounds for future clamping. Existing blocks stay where they are.
	pub fn resize(&mut self, width: f64, height: f64) {
		debug!("Viewport resized to {}x{}", width, height);
		self.viewport = Viewport::new(width, height);
		self.dirty = true;
	}

	pub fn set_hover(&mut self, hover: Option<Hit>) {
		if self.hover != hover {
			self.hover = hover;
			self.dirty = true;
		}
	}

	pub fn edges(&mut self) -> &[Edge] {
		self.edges.edges(&self.store)
	}

	pub fn cursor(&self) -> &'static str {
		if self.drag.is_dragging() {
			return "move";
		}
		match self.hover {
			Some(Hit::Block(_)) => "move",
			Some(Hit::AddControl(_)) => "pointer",
			None => "default",
		}
	}

	/// Returns whether a redraw is due and clears the flag.
	pub fn take_dirty(&mut self) -> bool {
		std::mem::take(&mut self.dirty)
	}
}
