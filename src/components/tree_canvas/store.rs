use std::collections::HashMap;

use log::{debug, info};

use super::random::Random;
use super::types::{Node, NodeId, TreeConfig, Viewport};

/// Authoritative list of blocks and the only place they are mutated.
///
/// Nodes are kept in creation order. Ids come from a counter owned by the
/// store rather than from the list length, and every mutation bumps
/// `version` so derived data can tell when it is stale.
#[derive(Clone, Debug)]
pub struct TreeStore {
	config: TreeConfig,
	nodes: Vec<Node>,
	index: HashMap<NodeId, usize>,
	next_id: NodeId,
	version: u64,
}

impl TreeStore {
	pub fn new(config: TreeConfig) -> Self {
		Self {
			config,
			nodes: Vec::new(),
			index: HashMap::new(),
			next_id: 0,
			version: 0,
		}
	}

	/// Resets the store to a single parentless node `0` at a random spot.
	pub fn create_root(&mut self, viewport: Viewport, rng: &mut dyn Random) -> Node {
		self.nodes.clear();
		self.index.clear();
		self.next_id = 0;
		let root = self.insert(None, viewport, rng);
		info!("Root block placed at ({}, {})", root.x, root.y);
		root
	}

	/// Appends a child of `parent_id` at a random spot.
	///
	/// Returns `None` and leaves the store untouched when the parent is unknown.
	pub fn add_child(
		&mut self,
		parent_id: NodeId,
		viewport: Viewport,
		rng: &mut dyn Random,
	) -> Option<Node> {
		if !self.index.contains_key(&parent_id) {
			return None;
		}
		let child = self.insert(Some(parent_id), viewport, rng);
		debug!(
			"Added block {} under {} at ({}, {}), {} blocks total",
			child.id,
			parent_id,
			child.x,
			child.y,
			self.len()
		);
		Some(child)
	}

	/// Moves a node, clamping the corner into the viewport margins.
	///
	/// Returns `false` for an unknown id.
	pub fn set_position(&mut self, id: NodeId, x: f64, y: f64, viewport: Viewport) -> bool {
		let Some(&idx) = self.index.get(&id) else {
			return false;
		};
		let node = &mut self.nodes[idx];
		node.x = self.config.clamp_axis(x, viewport.width);
		node.y = self.config.clamp_axis(y, viewport.height);
		self.version += 1;
		true
	}

	pub fn lookup(&self, id: NodeId) -> Option<&Node> {
		self.index.get(&id).map(|&idx| &self.nodes[idx])
	}

	/// All nodes in creation order.
	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn version(&self) -> u64 {
		self.version
	}

	pub fn config(&self) -> &TreeConfig {
		&self.config
	}

	fn insert(&mut self, parent_id: Option<NodeId>, viewport: Viewport, rng: &mut dyn Random) -> Node {
		let (min_x, max_x) = self.config.axis_range(viewport.width);
		let (min_y, max_y) = self.config.axis_range(viewport.height);
		let node = Node {
			id: self.next_id,
			parent_id,
			x: rng.random_in(min_x, max_x),
			y: rng.random_in(min_y, max_y),
		};
		self.next_id += 1;
		self.index.insert(node.id, self.nodes.len());
		self.nodes.push(node);
		self.version += 1;
		node
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::tree_canvas::random::SeededRandom;

	const VIEWPORT: Viewport = Viewport {
		width: 800.0,
		height: 600.0,
	};

	fn store_with_root() -> (TreeStore, SeededRandom) {
		let mut rng = SeededRandom::new(1);
		let mut store = TreeStore::new(TreeConfig::default());
		store.create_root(VIEWPORT, &mut rng);
		(store, rng)
	}

	#[test]
	fn root_lands_inside_margins() {
		let mut rng = SeededRandom::new(3);
		let mut store = TreeStore::new(TreeConfig::default());
		for _ in 0..200 {
			let root = store.create_root(VIEWPORT, &mut rng);
			assert_eq!(root.id, 0);
			assert_eq!(root.parent_id, None);
			assert!((24.0..=666.0).contains(&root.x));
			assert!((24.0..=466.0).contains(&root.y));
			assert_eq!(store.len(), 1);
		}
	}

	#[test]
	fn root_on_tiny_viewport_sits_at_pad() {
		let mut rng = SeededRandom::new(9);
		let mut store = TreeStore::new(TreeConfig::default());
		let root = store.create_root(Viewport::new(120.0, 90.0), &mut rng);
		assert_eq!((root.x, root.y), (24.0, 24.0));
	}

	#[test]
	fn add_child_links_to_parent() {
		let (mut store, mut rng) = store_with_root();
		let child = store.add_child(0, VIEWPORT, &mut rng).unwrap();
		assert_eq!(child.id, 1);
		assert_eq!(child.parent_id, Some(0));
		assert!((24.0..=666.0).contains(&child.x));
		assert!((24.0..=466.0).contains(&child.y));
		assert_eq!(store.lookup(1), Some(&child));
	}

	#[test]
	fn ids_are_sequential_and_append_only() {
		let (mut store, mut rng) = store_with_root();
		for i in 1..50u32 {
			let before: Vec<Node> = store.nodes().to_vec();
			let parent = i / 2;
			let child = store.add_child(parent, VIEWPORT, &mut rng).unwrap();
			assert_eq!(child.id, i);
			assert_eq!(store.len(), before.len() + 1);
			for (old, now) in before.iter().zip(store.nodes()) {
				assert_eq!((old.id, old.parent_id), (now.id, now.parent_id));
			}
		}
		let ids: Vec<NodeId> = store.nodes().iter().map(|n| n.id).collect();
		assert_eq!(ids, (0..50).collect::<Vec<_>>());
	}

	#[test]
	fn add_child_of_unknown_parent_is_ignored() {
		let (mut store, mut rng) = store_with_root();
		let version = store.version();
		assert!(store.add_child(17, VIEWPORT, &mut rng).is_none());
		assert_eq!(store.len(), 1);
		assert_eq!(store.version(), version);
	}

	#[test]
	fn set_position_clamps() {
		let (mut store, _) = store_with_root();
		assert!(store.set_position(0, 480.0, 470.0, VIEWPORT));
		let node = store.lookup(0).unwrap();
		assert_eq!((node.x, node.y), (480.0, 466.0));

		store.set_position(0, -50.0, 2000.0, VIEWPORT);
		let node = store.lookup(0).unwrap();
		assert_eq!((node.x, node.y), (24.0, 466.0));
	}

	#[test]
	fn set_position_unknown_id_is_noop() {
		let (mut store, _) = store_with_root();
		let before = store.nodes().to_vec();
		let version = store.version();
		assert!(!store.set_position(99, 100.0, 100.0, VIEWPORT));
		assert_eq!(store.nodes(), &before[..]);
		assert_eq!(store.version(), version);
	}

	#[test]
	fn mutations_bump_version() {
		let (mut store, mut rng) = store_with_root();
		let v0 = store.version();
		store.add_child(0, VIEWPORT, &mut rng);
		let v1 = store.version();
		store.set_position(1, 200.0, 200.0, VIEWPORT);
		assert!(v0 < v1 && v1 < store.version());
	}
}
