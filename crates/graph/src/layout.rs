//! Layered layout for dependency diagrams.
//!
//! Nodes are assigned to ranks by longest path from the sources, ordered
//! within a rank by the barycenter of their predecessors and centered on a
//! common axis. Back edges of a cycle are ignored for ranking, so any edge
//! set terminates. The layout is recomputed from scratch on every call.

use std::collections::{HashMap, HashSet};

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::{DfsEvent, depth_first_search};
use serde::{Deserialize, Serialize};

use crate::dependency::{DependencyGraph, GraphEdge, NodeKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Ranks stack downwards.
    #[default]
    #[serde(rename = "TB")]
    TopBottom,
    /// Ranks stack to the right.
    #[serde(rename = "LR")]
    LeftRight,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutOptions {
    pub direction: Direction,
    pub node_width: f64,
    pub node_height: f64,
    /// Gap between neighboring boxes in the same rank.
    pub node_sep: f64,
    /// Gap between consecutive ranks.
    pub rank_sep: f64,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            direction: Direction::TopBottom,
            node_width: 160.0,
            node_height: 48.0,
            node_sep: 50.0,
            rank_sep: 80.0,
        }
    }
}

impl LayoutOptions {
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeStyle {
    pub background: String,
    pub color: String,
    pub border: String,
    pub width: f64,
    pub height: f64,
}

/// A node with its top-left position and render hints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaidOutNode {
    pub id: String,
    pub kind: NodeKind,
    pub label: String,
    pub position: Position,
    pub size: Size,
    pub style: NodeStyle,
    pub draggable: bool,
}

impl LaidOutNode {
    pub fn center(&self) -> Position {
        Position {
            x: self.position.x + self.size.width / 2.0,
            y: self.position.y + self.size.height / 2.0,
        }
    }

    fn overlaps(&self, other: &LaidOutNode) -> bool {
        self.position.x < other.position.x + other.size.width
            && other.position.x < self.position.x + self.size.width
            && self.position.y < other.position.y + other.size.height
            && other.position.y < self.position.y + self.size.height
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaidOutGraph {
    pub nodes: Vec<LaidOutNode>,
    pub edges: Vec<GraphEdge>,
}

impl LaidOutGraph {
    pub fn node(&self, id: &str) -> Option<&LaidOutNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// True when no two node boxes intersect.
    pub fn is_overlap_free(&self) -> bool {
        self.nodes.iter().enumerate().all(|(i, a)| {
            self.nodes[i + 1..].iter().all(|b| !a.overlaps(b))
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Lay out with the default box and spacing, top to bottom.
pub fn layout(graph: &DependencyGraph) -> LaidOutGraph {
    layout_with(graph, &LayoutOptions::default())
}

pub fn layout_with(graph: &DependencyGraph, options: &LayoutOptions) -> LaidOutGraph {
    let edges = resolve_edges(graph);
    let ranks = assign_ranks(graph.nodes.len(), &edges);
    let layers = order_layers(&ranks, &edges);

    let (rank_extent, cross_extent) = match options.direction {
        Direction::TopBottom => (options.node_height, options.node_width),
        Direction::LeftRight => (options.node_width, options.node_height),
    };

    // Centers along (rank axis, cross axis), cross axis centered on 0.
    let mut centers = vec![(0.0, 0.0); graph.nodes.len()];
    for (rank, layer) in layers.iter().enumerate() {
        let along = rank as f64 * (rank_extent + options.rank_sep) + rank_extent / 2.0;
        let span = layer.len() as f64 * cross_extent
            + layer.len().saturating_sub(1) as f64 * options.node_sep;
        for (slot, &node) in layer.iter().enumerate() {
            let across = -span / 2.0 + slot as f64 * (cross_extent + options.node_sep)
                + cross_extent / 2.0;
            centers[node] = (along, across);
        }
    }

    let min_across = centers
        .iter()
        .map(|&(_, across)| across - cross_extent / 2.0)
        .fold(f64::INFINITY, f64::min);
    let shift = if min_across.is_finite() { -min_across } else { 0.0 };

    let nodes = graph
        .nodes
        .iter()
        .zip(&centers)
        .map(|(node, &(along, across))| {
            let (cx, cy) = match options.direction {
                Direction::TopBottom => (across + shift, along),
                Direction::LeftRight => (along, across + shift),
            };
            LaidOutNode {
                id: node.id.clone(),
                kind: node.kind,
                label: node.label.clone(),
                position: Position {
                    x: cx - options.node_width / 2.0,
                    y: cy - options.node_height / 2.0,
                },
                size: Size {
                    width: options.node_width,
                    height: options.node_height,
                },
                style: NodeStyle {
                    background: node.kind.background().to_string(),
                    color: node.kind.foreground().to_string(),
                    border: node.kind.border().to_string(),
                    width: options.node_width,
                    height: options.node_height,
                },
                draggable: false,
            }
        })
        .collect();

    tracing::debug!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        ranks = layers.len(),
        direction = ?options.direction,
        "dependency graph laid out"
    );

    LaidOutGraph {
        nodes,
        edges: graph.edges.clone(),
    }
}

/// Edges as node index pairs. Endpoints that name no node are skipped; a
/// repeated node id resolves to its first occurrence.
fn resolve_edges(graph: &DependencyGraph) -> Vec<(usize, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    for (i, node) in graph.nodes.iter().enumerate() {
        index.entry(node.id.as_str()).or_insert(i);
    }
    graph
        .edges
        .iter()
        .filter_map(|e| Some((*index.get(e.source.as_str())?, *index.get(e.target.as_str())?)))
        .collect()
}

/// Longest-path ranks over the graph with back edges removed.
fn assign_ranks(node_count: usize, edges: &[(usize, usize)]) -> Vec<usize> {
    let mut graph: DiGraph<(), ()> = DiGraph::with_capacity(node_count, edges.len());
    let nodes: Vec<NodeIndex> = (0..node_count).map(|_| graph.add_node(())).collect();
    for &(s, t) in edges {
        graph.add_edge(nodes[s], nodes[t], ());
    }

    let has_incoming: HashSet<usize> = edges.iter().map(|&(_, t)| t).collect();
    let starts = nodes
        .iter()
        .copied()
        .filter(|n| !has_incoming.contains(&n.index()))
        .chain(nodes.iter().copied());

    let mut back_edges = HashSet::new();
    depth_first_search(&graph, starts, |event| {
        if let DfsEvent::BackEdge(u, v) = event {
            back_edges.insert((u.index(), v.index()));
        }
    });

    let mut dag: DiGraph<(), ()> = DiGraph::with_capacity(node_count, edges.len());
    let dag_nodes: Vec<NodeIndex> = (0..node_count).map(|_| dag.add_node(())).collect();
    for &(s, t) in edges {
        if !back_edges.contains(&(s, t)) {
            dag.add_edge(dag_nodes[s], dag_nodes[t], ());
        }
    }

    let mut ranks = vec![0usize; node_count];
    // Acyclic by construction; an error would leave every node on rank 0.
    if let Ok(order) = toposort(&dag, None) {
        for u in order {
            for v in dag.neighbors(u) {
                ranks[v.index()] = ranks[v.index()].max(ranks[u.index()] + 1);
            }
        }
    }
    ranks
}

/// Group nodes by rank and order each rank by predecessor barycenter.
fn order_layers(ranks: &[usize], edges: &[(usize, usize)]) -> Vec<Vec<usize>> {
    let depth = ranks.iter().copied().max().map_or(0, |r| r + 1);
    let mut layers: Vec<Vec<usize>> = vec![Vec::new(); depth];
    for (node, &rank) in ranks.iter().enumerate() {
        layers[rank].push(node);
    }

    let mut slot = vec![0usize; ranks.len()];
    for layer in layers.iter_mut() {
        let mut keyed: Vec<(f64, usize)> = layer
            .iter()
            .map(|&node| {
                let preds: Vec<f64> = edges
                    .iter()
                    .filter(|&&(s, t)| t == node && ranks[s] < ranks[node])
                    .map(|&(s, _)| slot[s] as f64)
                    .collect();
                let key = if preds.is_empty() {
                    f64::MAX
                } else {
                    preds.iter().sum::<f64>() / preds.len() as f64
                };
                (key, node)
            })
            .collect();
        keyed.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
        *layer = keyed.into_iter().map(|(_, node)| node).collect();
        for (i, &node) in layer.iter().enumerate() {
            slot[node] = i;
        }
    }
    layers
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dependency::{FocalNode, Neighbor};
    use proptest::prelude::*;

    fn payroll() -> DependencyGraph {
        DependencyGraph::build(
            &FocalNode::new(1, "Payroll"),
            &[Neighbor::new(2, "Auth", "requires")],
            &[Neighbor::new(3, "Billing", "uses")],
        )
    }

    #[test]
    fn payroll_stacks_incoming_focal_outgoing() {
        let laid = layout(&payroll());

        let billing = laid.node("in-3").unwrap();
        let payroll = laid.node("curr-1").unwrap();
        let auth = laid.node("out-2").unwrap();

        assert_eq!(billing.position, Position { x: 0.0, y: 0.0 });
        assert_eq!(payroll.position, Position { x: 0.0, y: 128.0 });
        assert_eq!(auth.position, Position { x: 0.0, y: 256.0 });
        assert_eq!(payroll.size, Size { width: 160.0, height: 48.0 });
        assert!(!payroll.draggable);
        assert_eq!(payroll.style.background, "#007aff");
        assert_eq!(laid.edges.len(), 2);
    }

    #[test]
    fn left_right_swaps_axes() {
        let laid = layout_with(
            &payroll(),
            &LayoutOptions::default().with_direction(Direction::LeftRight),
        );

        assert_eq!(laid.node("in-3").unwrap().position, Position { x: 0.0, y: 0.0 });
        assert_eq!(laid.node("curr-1").unwrap().position, Position { x: 240.0, y: 0.0 });
        assert_eq!(laid.node("out-2").unwrap().position, Position { x: 480.0, y: 0.0 });
    }

    #[test]
    fn siblings_spread_around_a_centered_parent() {
        let graph = DependencyGraph::build(
            &FocalNode::new(1, "Core"),
            &[Neighbor::new(2, "A", "x"), Neighbor::new(3, "B", "x")],
            &[],
        );
        let laid = layout(&graph);

        let a = laid.node("out-2").unwrap();
        let b = laid.node("out-3").unwrap();
        let core = laid.node("curr-1").unwrap();

        assert_eq!(a.position, Position { x: 0.0, y: 128.0 });
        assert_eq!(b.position, Position { x: 210.0, y: 128.0 });
        assert_eq!(core.center().x, (a.center().x + b.center().x) / 2.0);
        assert!(laid.is_overlap_free());
    }

    #[test]
    fn cycles_still_terminate() {
        let mut graph = payroll();
        graph.edges.push(GraphEdge {
            id: "back".into(),
            source: "out-2".into(),
            target: "in-3".into(),
            label: String::new(),
            route: "smoothstep".into(),
            marker_end: "arrowclosed".into(),
        });
        let laid = layout(&graph);

        assert_eq!(laid.nodes.len(), 3);
        assert!(laid.is_overlap_free());
    }

    #[test]
    fn empty_graph_lays_out_to_nothing() {
        let laid = layout(&DependencyGraph::default());
        assert!(laid.nodes.is_empty());
    }

    #[test]
    fn serializes_positions_for_the_renderer() {
        let json: serde_json::Value = serde_json::from_str(&layout(&payroll()).to_json().unwrap()).unwrap();
        assert_eq!(json["nodes"][0]["id"], "curr-1");
        assert_eq!(json["nodes"][0]["position"]["y"], 128.0);
        assert_eq!(json["nodes"][0]["draggable"], false);
    }

    proptest! {
        #[test]
        fn every_node_gets_a_distinct_box(
            n in 0usize..15,
            m in 0usize..15,
            lr in any::<bool>(),
        ) {
            let out: Vec<_> = (0..n).map(|i| Neighbor::new(i, format!("o{i}"), "r")).collect();
            let inc: Vec<_> = (0..m).map(|i| Neighbor::new(i, format!("i{i}"), "r")).collect();
            let graph = DependencyGraph::build(&FocalNode::new(0, "f"), &out, &inc);
            let direction = if lr { Direction::LeftRight } else { Direction::TopBottom };
            let laid = layout_with(&graph, &LayoutOptions::default().with_direction(direction));

            prop_assert_eq!(laid.nodes.len(), 1 + n + m);
            prop_assert_eq!(laid.edges.len(), n + m);
            prop_assert!(laid.is_overlap_free());
            prop_assert!(laid.nodes.iter().all(|n| n.position.x >= 0.0 && n.position.y >= 0.0));

            // Edges always flow from a lower rank to a higher one.
            for edge in &laid.edges {
                let s = laid.node(&edge.source).unwrap().center();
                let t = laid.node(&edge.target).unwrap().center();
                match direction {
                    Direction::TopBottom => prop_assert!(s.y < t.y),
                    Direction::LeftRight => prop_assert!(s.x < t.x),
                }
            }
        }
    }
}
