//! Immutable landmark graph: the fixed node set, coordinates and edge list,
//! plus the membership predicates the renderer styles from.

use thiserror::Error;

/// Landmark names, in dropdown order.
pub const LANDMARKS: &[&str] = &[
	"Museum", "Library", "Park", "Theater", "Cafe", "Mall", "Station",
];

/// Undirected connections between landmarks.
const CONNECTIONS: &[(&str, &str)] = &[
	("Museum", "Library"),
	("Museum", "Park"),
	("Library", "Theater"),
	("Park", "Cafe"),
	("Theater", "Mall"),
	("Cafe", "Station"),
	("Mall", "Station"),
];

/// Fixed display coordinates, keeping the map stable between sessions.
const POSITIONS: &[(&str, f64, f64)] = &[
	("Museum", 100.0, 200.0),
	("Library", 250.0, 250.0),
	("Park", 100.0, 50.0),
	("Theater", 400.0, 300.0),
	("Cafe", 200.0, 100.0),
	("Mall", 500.0, 200.0),
	("Station", 300.0, 150.0),
];

/// A named landmark with its fixed display position.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
	/// Unique human-readable name.
	pub id: String,
	/// Fixed x coordinate.
	pub x: f64,
	/// Fixed y coordinate.
	pub y: f64,
}

/// An undirected connection between two landmarks.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
	/// One endpoint's node id.
	pub source: String,
	/// The other endpoint's node id.
	pub target: String,
}

/// Invalid graph data rejected at construction.
#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
	/// An edge endpoint does not name any node.
	#[error("edge endpoint {0:?} does not reference an existing node")]
	UnknownEndpoint(String),
	/// Two nodes share the same id.
	#[error("duplicate node id {0:?}")]
	DuplicateNode(String),
}

/// The immutable graph of landmarks. Constructed once at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct LandmarkGraph {
	nodes: Vec<Node>,
	edges: Vec<Edge>,
}

impl LandmarkGraph {
	/// Build a graph, checking that node ids are unique and every edge
	/// endpoint references an existing node.
	pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self, GraphError> {
		for (i, node) in nodes.iter().enumerate() {
			if nodes[..i].iter().any(|n| n.id == node.id) {
				return Err(GraphError::DuplicateNode(node.id.clone()));
			}
		}
		for edge in &edges {
			for endpoint in [&edge.source, &edge.target] {
				if !nodes.iter().any(|n| n.id == *endpoint) {
					return Err(GraphError::UnknownEndpoint(endpoint.clone()));
				}
			}
		}
		Ok(Self { nodes, edges })
	}

	/// All nodes, in declaration order.
	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	/// All edges, in declaration order.
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// Display coordinates for a node id.
	pub fn position(&self, id: &str) -> Option<(f64, f64)> {
		self.nodes.iter().find(|n| n.id == id).map(|n| (n.x, n.y))
	}

	/// Whether a node is a member of the given path.
	pub fn is_on_path(&self, id: &str, path: &[String]) -> bool {
		path.iter().any(|p| p == id)
	}

	/// Whether both endpoints of an edge are members of the given path.
	///
	/// This is a membership test, not an adjacency test: an edge between
	/// two path nodes counts even when the walk never traverses it.
	pub fn is_edge_on_path(&self, edge: &Edge, path: &[String]) -> bool {
		self.is_on_path(&edge.source, path) && self.is_on_path(&edge.target, path)
	}
}

/// The fixed tourist-landmark graph.
pub fn landmark_graph() -> LandmarkGraph {
	let nodes = POSITIONS
		.iter()
		.map(|&(id, x, y)| Node {
			id: id.to_string(),
			x,
			y,
		})
		.collect();
	let edges = CONNECTIONS
		.iter()
		.map(|&(source, target)| Edge {
			source: source.to_string(),
			target: target.to_string(),
		})
		.collect();
	LandmarkGraph::new(nodes, edges).expect("landmark dataset is internally consistent")
}

#[cfg(test)]
mod tests {
	use super::*;

	fn path(ids: &[&str]) -> Vec<String> {
		ids.iter().map(|s| s.to_string()).collect()
	}

	#[test]
	fn fixed_dataset_is_valid() {
		let graph = landmark_graph();
		assert_eq!(graph.nodes().len(), LANDMARKS.len());
		assert_eq!(graph.edges().len(), CONNECTIONS.len());
		assert_eq!(graph.position("Museum"), Some((100.0, 200.0)));
		assert_eq!(graph.position("Station"), Some((300.0, 150.0)));
		assert_eq!(graph.position("Harbor"), None);
	}

	#[test]
	fn rejects_edge_with_unknown_endpoint() {
		let nodes = vec![Node {
			id: "Museum".into(),
			x: 0.0,
			y: 0.0,
		}];
		let edges = vec![Edge {
			source: "Museum".into(),
			target: "Harbor".into(),
		}];
		assert_eq!(
			LandmarkGraph::new(nodes, edges),
			Err(GraphError::UnknownEndpoint("Harbor".into()))
		);
	}

	#[test]
	fn rejects_duplicate_node_ids() {
		let node = Node {
			id: "Museum".into(),
			x: 0.0,
			y: 0.0,
		};
		assert_eq!(
			LandmarkGraph::new(vec![node.clone(), node], vec![]),
			Err(GraphError::DuplicateNode("Museum".into()))
		);
	}

	#[test]
	fn node_membership_follows_path() {
		let graph = landmark_graph();
		let p = path(&["Museum", "Library", "Theater", "Mall"]);
		assert!(graph.is_on_path("Museum", &p));
		assert!(graph.is_on_path("Mall", &p));
		assert!(!graph.is_on_path("Park", &p));
		assert!(!graph.is_on_path("Museum", &[]));
	}

	#[test]
	fn edge_membership_is_a_superset_of_traversal() {
		// A triangle where the walk A-B-C skips the direct A-C edge.
		let nodes = ["A", "B", "C"]
			.iter()
			.map(|&id| Node {
				id: id.into(),
				x: 0.0,
				y: 0.0,
			})
			.collect();
		let edge = |source: &str, target: &str| Edge {
			source: source.into(),
			target: target.into(),
		};
		let graph =
			LandmarkGraph::new(nodes, vec![edge("A", "B"), edge("B", "C"), edge("A", "C")])
				.unwrap();

		let walk = path(&["A", "B", "C"]);
		assert!(graph.is_edge_on_path(&edge("A", "B"), &walk));
		assert!(graph.is_edge_on_path(&edge("B", "C"), &walk));
		// Untraversed, but both endpoints are path members.
		assert!(graph.is_edge_on_path(&edge("A", "C"), &walk));
	}

	#[test]
	fn single_node_path_highlights_no_edges() {
		let graph = landmark_graph();
		let p = path(&["Museum"]);
		assert!(graph.is_on_path("Museum", &p));
		for edge in graph.edges() {
			assert!(!graph.is_edge_on_path(edge, &p));
		}
	}
}
