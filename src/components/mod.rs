//! UI components.

pub mod landmark_map;
