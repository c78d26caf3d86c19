mod component;
mod render;
mod state;
mod types;

pub use component::LandmarkMapCanvas;
pub use types::{Edge, GraphError, LANDMARKS, LandmarkGraph, Node, landmark_graph};
