use super::store::TreeStore;
use super::types::{Edge, Point};

/// Orthogonal elbow connectors, one per node that has a parent.
///
/// Each path leaves the parent's bottom-center, drops to the midline between
/// the two anchors, runs horizontally to the child's x and drops into the
/// child's top-center. A child placed above its parent yields a path that
/// points upward; it is drawn as is.
pub fn route_edges(store: &TreeStore) -> Vec<Edge> {
	let config = store.config();
	store
		.nodes()
		.iter()
		.filter_map(|child| {
			let parent = store.lookup(child.parent_id?)?;
			let from = parent.bottom_anchor(config);
			let to = child.top_anchor(config);
			let mid_y = (from.y + to.y) / 2.0;
			Some(Edge {
				key: (parent.id, child.id),
				points: [from, Point::new(from.x, mid_y), Point::new(to.x, mid_y), to],
			})
		})
		.collect()
}

/// Routed edges memoised against the store version they were built from.
#[derive(Clone, Debug, Default)]
pub struct EdgeCache {
	version: Option<u64>,
	edges: Vec<Edge>,
}

impl EdgeCache {
	pub fn edges(&mut self, store: &TreeStore) -> &[Edge] {
		if self.version != Some(store.version()) {
			self.edges = route_edges(store);
			self.version = Some(store.version());
		}
		&self.edges
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::tree_canvas::random::SeededRandom;
	use crate::components::tree_canvas::types::{TreeConfig, Viewport};

	const VIEWPORT: Viewport = Viewport {
		width: 800.0,
		height: 600.0,
	};

	fn two_blocks(parent: (f64, f64), child: (f64, f64)) -> TreeStore {
		let mut rng = SeededRandom::new(5);
		let mut store = TreeStore::new(TreeConfig::default());
		store.create_root(VIEWPORT, &mut rng);
		store.add_child(0, VIEWPORT, &mut rng);
		store.set_position(0, parent.0, parent.1, VIEWPORT);
		store.set_position(1, child.0, child.1, VIEWPORT);
		store
	}

	#[test]
	fn elbow_between_parent_and_child() {
		let store = two_blocks((100.0, 100.0), (300.0, 400.0));
		let edges = route_edges(&store);
		assert_eq!(edges.len(), 1);
		assert_eq!(edges[0].key, (0, 1));
		assert_eq!(
			edges[0].points,
			[
				Point::new(155.0, 210.0),
				Point::new(155.0, 305.0),
				Point::new(355.0, 305.0),
				Point::new(355.0, 400.0),
			]
		);
	}

	#[test]
	fn aligned_blocks_give_straight_path() {
		let store = two_blocks((200.0, 50.0), (200.0, 300.0));
		let [a, b, c, d] = route_edges(&store)[0].points;
		assert_eq!(a.x, d.x);
		assert_eq!(b, c);
	}

	#[test]
	fn child_above_parent_is_not_corrected() {
		let store = two_blocks((300.0, 400.0), (100.0, 50.0));
		let [from, mid_a, mid_b, to] = route_edges(&store)[0].points;
		assert_eq!(from, Point::new(355.0, 510.0));
		assert_eq!(to, Point::new(155.0, 50.0));
		assert_eq!(mid_a.y, 280.0);
		assert_eq!(mid_b.y, 280.0);
	}

	#[test]
	fn one_edge_per_parented_node() {
		let mut rng = SeededRandom::new(11);
		let mut store = TreeStore::new(TreeConfig::default());
		store.create_root(VIEWPORT, &mut rng);
		assert!(route_edges(&store).is_empty());
		for i in 1..20u32 {
			store.add_child(i - 1, VIEWPORT, &mut rng);
			assert_eq!(route_edges(&store).len(), store.len() - 1);
		}
	}

	#[test]
	fn routing_is_idempotent() {
		let mut rng = SeededRandom::new(2);
		let mut store = TreeStore::new(TreeConfig::default());
		store.create_root(VIEWPORT, &mut rng);
		for _ in 0..10 {
			store.add_child(0, VIEWPORT, &mut rng);
		}
		assert_eq!(route_edges(&store), route_edges(&store));
	}

	#[test]
	fn cache_follows_store_version() {
		let mut store = two_blocks((100.0, 100.0), (300.0, 400.0));
		let mut cache = EdgeCache::default();
		assert_eq!(cache.edges(&store)[0].points[3], Point::new(355.0, 400.0));

		store.set_position(1, 200.0, 300.0, VIEWPORT);
		assert_eq!(cache.edges(&store)[0].points[3], Point::new(255.0, 300.0));
		assert_eq!(cache.edges(&store), &route_edges(&store)[..]);
	}
}
