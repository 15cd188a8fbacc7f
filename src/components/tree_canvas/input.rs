use log::debug;

use super::store::TreeStore;
use super::types::{NodeId, Viewport};

/// Which block is under the pointer and where the pointer grabbed it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
	pub node_id: NodeId,
	pub offset_x: f64,
	pub offset_y: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
	#[default]
	Idle,
	Dragging(DragSession),
}

/// Turns pointer down/move/up into store updates. Holds at most one session.
#[derive(Clone, Debug, Default)]
pub struct DragController {
	state: DragState,
}

impl DragController {
	/// Starts dragging `node_id`, keeping the grab offset so the block does
	/// not snap its corner to the pointer. Unknown ids leave the controller idle.
	pub fn pointer_down(&mut self, store: &TreeStore, node_id: NodeId, px: f64, py: f64) -> bool {
		let Some(node) = store.lookup(node_id) else {
			return false;
		};
		let session = DragSession {
			node_id,
			offset_x: px - node.x,
			offset_y: py - node.y,
		};
		debug!("Drag start on block {}", node_id);
		self.state = DragState::Dragging(session);
		true
	}

	/// Moves the dragged block after the pointer. Ignored while idle.
	pub fn pointer_move(&self, store: &mut TreeStore, px: f64, py: f64, viewport: Viewport) -> bool {
		match self.state {
			DragState::Dragging(s) => {
				store.set_position(s.node_id, px - s.offset_x, py - s.offset_y, viewport)
			}
			DragState::Idle => false,
		}
	}

	/// Ends the active session, if any, and returns it.
	pub fn pointer_up(&mut self) -> Option<DragSession> {
		match std::mem::take(&mut self.state) {
			DragState::Dragging(s) => {
				debug!("Drag end on block {}", s.node_id);
				Some(s)
			}
			DragState::Idle => None,
		}
	}

	pub fn state(&self) -> DragState {
		self.state
	}

	pub fn is_dragging(&self) -> bool {
		matches!(self.state(), DragState::Dragging(_))
	}
}
