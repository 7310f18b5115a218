//! Dependency diagrams for services and licenses.
//!
//! [`DependencyGraph::build`] turns a focal entity and its outgoing/incoming
//! dependencies into nodes and labeled edges; [`layout`] assigns every node a
//! non-overlapping box with a layered (top-to-bottom or left-to-right)
//! placement. The result serializes straight to the renderer.

pub mod dependency;
pub mod layout;

pub use dependency::{DependencyGraph, FocalNode, GraphEdge, GraphNode, Neighbor, NodeKind};
pub use layout::{
    Direction, LaidOutGraph, LaidOutNode, LayoutOptions, NodeStyle, Position, Size, layout, layout_with,
};
