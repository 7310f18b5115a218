//! Node and edge construction for a focal entity's dependency neighborhood.

use serde::{Deserialize, Serialize};

use assetdesk_core::model::{LicenseDependency, ServiceDependency};

/// The entity whose dependencies are being shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FocalNode {
    pub id: String,
    pub label: String,
}

impl FocalNode {
    pub fn new(id: impl ToString, label: impl Into<String>) -> Self {
        Self {
            id: id.to_string(),
            label: label.into(),
        }
    }
}

/// One dependency on either side of the focal node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighbor {
    pub id: String,
    pub label: String,
    /// Relationship name shown on the edge.
    pub relationship: String,
}

impl Neighbor {
    pub fn new(id: impl ToString, label: impl Into<String>, relationship: impl Into<String>) -> Self {
        Self {
            id: id.to_string(),
            label: label.into(),
            relationship: relationship.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Focal,
    /// Something the focal entity depends on.
    Outgoing,
    /// Something that depends on the focal entity.
    Incoming,
}

impl NodeKind {
    pub fn id_prefix(self) -> &'static str {
        match self {
            NodeKind::Focal => "curr",
            NodeKind::Outgoing => "out",
            NodeKind::Incoming => "in",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            NodeKind::Focal => "#007aff",
            NodeKind::Outgoing => "#FFEB3B",
            NodeKind::Incoming => "#4CAF50",
        }
    }

    pub fn foreground(self) -> &'static str {
        match self {
            NodeKind::Outgoing => "#000",
            NodeKind::Focal | NodeKind::Incoming => "#fff",
        }
    }

    pub fn border(self) -> &'static str {
        match self {
            NodeKind::Focal => "none",
            NodeKind::Outgoing | NodeKind::Incoming => "1px solid #aaa",
        }
    }

    fn node_id(self, id: &str) -> String {
        format!("{}-{}", self.id_prefix(), id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    pub kind: NodeKind,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub label: String,
    /// Edge routing style understood by the renderer.
    #[serde(rename = "type")]
    pub route: String,
    pub marker_end: String,
}

impl GraphEdge {
    fn new(id: String, source: String, target: String, label: &str) -> Self {
        Self {
            id,
            source,
            target,
            label: label.to_string(),
            route: "smoothstep".to_string(),
            marker_end: "arrowclosed".to_string(),
        }
    }
}

/// Unpositioned nodes and edges: focal first, then outgoing, then incoming.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyGraph {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl DependencyGraph {
    /// Focal node `curr-{id}`; outgoing neighbors `out-{id}` reached by
    /// `e-out-{idx}`; incoming neighbors `in-{id}` pointing at the focal node
    /// through `e-in-{idx}`.
    pub fn build(focal: &FocalNode, outgoing: &[Neighbor], incoming: &[Neighbor]) -> Self {
        let focal_id = NodeKind::Focal.node_id(&focal.id);
        let mut nodes = Vec::with_capacity(1 + outgoing.len() + incoming.len());
        let mut edges = Vec::with_capacity(outgoing.len() + incoming.len());

        nodes.push(GraphNode {
            id: focal_id.clone(),
            kind: NodeKind::Focal,
            label: focal.label.clone(),
        });

        for (idx, neighbor) in outgoing.iter().enumerate() {
            let id = NodeKind::Outgoing.node_id(&neighbor.id);
            edges.push(GraphEdge::new(
                format!("e-out-{idx}"),
                focal_id.clone(),
                id.clone(),
                &neighbor.relationship,
            ));
            nodes.push(GraphNode {
                id,
                kind: NodeKind::Outgoing,
                label: neighbor.label.clone(),
            });
        }

        for (idx, neighbor) in incoming.iter().enumerate() {
            let id = NodeKind::Incoming.node_id(&neighbor.id);
            edges.push(GraphEdge::new(
                format!("e-in-{idx}"),
                id.clone(),
                focal_id.clone(),
                &neighbor.relationship,
            ));
            nodes.push(GraphNode {
                id,
                kind: NodeKind::Incoming,
                label: neighbor.label.clone(),
            });
        }

        Self { nodes, edges }
    }

    /// Build from service dependency rows.
    ///
    /// `outgoing` rows have the focal service as `serviceId` and are labeled
    /// with `dependencyName`; `incoming` rows have it as `dependencyId` and are
    /// labeled with `serviceName`. Neighbor ids are the dependency row ids.
    pub fn from_service_dependencies(
        focal: &FocalNode,
        outgoing: &[ServiceDependency],
        incoming: &[ServiceDependency],
    ) -> Self {
        let out: Vec<Neighbor> = outgoing
            .iter()
            .map(|d| Neighbor::new(d.id, d.dependency_name.clone(), d.relationship_name.clone()))
            .collect();
        let inc: Vec<Neighbor> = incoming
            .iter()
            .map(|d| Neighbor::new(d.id, d.service_name.clone(), d.relationship_name.clone()))
            .collect();
        Self::build(focal, &out, &inc)
    }

    /// Same as [`Self::from_service_dependencies`] with `licenseName` on the
    /// incoming side.
    pub fn from_license_dependencies(
        focal: &FocalNode,
        outgoing: &[LicenseDependency],
        incoming: &[LicenseDependency],
    ) -> Self {
        let out: Vec<Neighbor> = outgoing
            .iter()
            .map(|d| Neighbor::new(d.id, d.dependency_name.clone(), d.relationship_name.clone()))
            .collect();
        let inc: Vec<Neighbor> = incoming
            .iter()
            .map(|d| Neighbor::new(d.id, d.license_name.clone(), d.relationship_name.clone()))
            .collect();
        Self::build(focal, &out, &inc)
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&GraphEdge> {
        self.edges.iter().find(|e| e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assetdesk_core::{RelationshipId, ServiceId};
    use proptest::prelude::*;

    fn neighbors(prefix: &str, n: usize) -> Vec<Neighbor> {
        (0..n)
            .map(|i| Neighbor::new(i, format!("{prefix}{i}"), "uses"))
            .collect()
    }

    #[test]
    fn payroll_scenario() {
        let graph = DependencyGraph::build(
            &FocalNode::new(1, "Payroll"),
            &[Neighbor::new(2, "Auth", "requires")],
            &[Neighbor::new(3, "Billing", "uses")],
        );

        assert_eq!(graph.nodes.len(), 3);
        assert_eq!(graph.edges.len(), 2);

        let auth = graph.edge("e-out-0").unwrap();
        assert_eq!((auth.source.as_str(), auth.target.as_str()), ("curr-1", "out-2"));
        assert_eq!(auth.label, "requires");

        let billing = graph.edge("e-in-0").unwrap();
        assert_eq!((billing.source.as_str(), billing.target.as_str()), ("in-3", "curr-1"));
        assert_eq!(billing.label, "uses");

        assert_eq!(graph.node("out-2").unwrap().label, "Auth");
        assert_eq!(graph.node("in-3").unwrap().kind, NodeKind::Incoming);
    }

    #[test]
    fn kinds_carry_render_colors() {
        assert_eq!(NodeKind::Focal.background(), "#007aff");
        assert_eq!(NodeKind::Outgoing.background(), "#FFEB3B");
        assert_eq!(NodeKind::Incoming.background(), "#4CAF50");
    }

    #[test]
    fn service_rows_pick_the_far_side_name() {
        let row = |id, service: &str, dependency: &str| ServiceDependency {
            id,
            service_id: ServiceId::new(1),
            service_name: service.into(),
            dependency_id: ServiceId::new(2),
            dependency_name: dependency.into(),
            relationship_id: RelationshipId::new(1),
            relationship_name: "calls".into(),
            note: None,
            deleted_at: None,
        };
        let graph = DependencyGraph::from_service_dependencies(
            &FocalNode::new(7, "API"),
            &[row(11, "API", "DB")],
            &[row(12, "Web", "API")],
        );

        assert_eq!(graph.node("out-11").unwrap().label, "DB");
        assert_eq!(graph.node("in-12").unwrap().label, "Web");
    }

    #[test]
    fn edges_serialize_for_the_renderer() {
        let graph = DependencyGraph::build(
            &FocalNode::new(1, "A"),
            &[Neighbor::new(2, "B", "needs")],
            &[],
        );
        let json = serde_json::to_value(&graph.edges[0]).unwrap();
        assert_eq!(json["type"], "smoothstep");
        assert_eq!(json["markerEnd"], "arrowclosed");
    }

    proptest! {
        #[test]
        fn shape_and_direction(n in 0usize..20, m in 0usize..20) {
            let graph = DependencyGraph::build(
                &FocalNode::new("f", "Focal"),
                &neighbors("o", n),
                &neighbors("i", m),
            );

            prop_assert_eq!(graph.nodes.len(), 1 + n + m);
            prop_assert_eq!(graph.edges.len(), n + m);

            for edge in &graph.edges {
                if edge.id.starts_with("e-out-") {
                    prop_assert_eq!(edge.source.as_str(), "curr-f");
                    prop_assert!(edge.target.starts_with("out-"));
                } else {
                    prop_assert!(edge.id.starts_with("e-in-"));
                    prop_assert!(edge.source.starts_with("in-"));
                    prop_assert_eq!(edge.target.as_str(), "curr-f");
                }
            }
        }
    }
}
