use crate::error::DecodeError;
use crate::node::{NodeData, TriggerData};
use ahash::AHashMap;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Id assigned to the implicitly created trigger node of a fresh graph.
pub const TRIGGER_SEED_ID: &str = "1";

/// A 2D canvas coordinate. Purely presentational.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The structural role of a node, deciding which config editor applies and
/// how its outgoing handles are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Trigger,
    Action,
    Condition,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Trigger => "trigger",
            NodeKind::Action => "action",
            NodeKind::Condition => "condition",
        };
        write!(f, "{}", name)
    }
}

/// Branch discriminator on edges leaving a condition node.
///
/// Serialized `"true"`/`"false"`; the legacy `"yes"`/`"no"` spellings are
/// accepted when decoding older automations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    #[serde(alias = "yes")]
    True,
    #[serde(alias = "no")]
    False,
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Branch::True => write!(f, "true"),
            Branch::False => write!(f, "false"),
        }
    }
}

/// A single unit of the automation: trigger, action or condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub position: Position,
    pub data: NodeData,
}

impl Node {
    /// Builds a node whose `kind` is derived from its payload, the only way
    /// the two stay consistent outside of decoding.
    pub fn new(id: impl Into<String>, position: Position, data: NodeData) -> Self {
        Self {
            id: id.into(),
            kind: data.kind(),
            position,
            data,
        }
    }
}

/// A directed connection between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(
        rename = "sourceHandle",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub source_handle: Option<Branch>,
}

impl Edge {
    /// Edge ids are a pure function of the endpoints and the branch handle.
    pub fn derive_id(source: &str, source_handle: Option<Branch>, target: &str) -> String {
        match source_handle {
            Some(branch) => format!("e{}-{}-{}", source, branch, target),
            None => format!("e{}-{}", source, target),
        }
    }
}

/// One automation definition under edit: the nodes and edges of a journey
/// or workflow. Node order is rendering z-order, never semantics.
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) edges: Vec<Edge>,
}

impl Graph {
    /// Creates a graph holding only its trigger node, the entry point every
    /// automation starts from.
    pub fn new(trigger_position: Position) -> Self {
        Self {
            nodes: vec![Node::new(
                TRIGGER_SEED_ID,
                trigger_position,
                NodeData::Trigger(TriggerData::default()),
            )],
            edges: Vec::new(),
        }
    }

    /// Rebuilds a graph from decoded parts, re-checking every structural
    /// invariant the editor maintains. Loading a server-provided automation
    /// goes through here.
    pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self, DecodeError> {
        if let Some(id) = nodes.iter().map(|n| &n.id).duplicates().next() {
            return Err(DecodeError::DuplicateNodeId(id.clone()));
        }
        for node in &nodes {
            if node.kind != node.data.kind() {
                return Err(DecodeError::NodeKindMismatch {
                    node_id: node.id.clone(),
                });
            }
        }

        let triggers = nodes
            .iter()
            .filter(|n| n.kind == NodeKind::Trigger)
            .count();
        match triggers {
            0 => return Err(DecodeError::MissingTrigger),
            1 => {}
            n => return Err(DecodeError::MultipleTriggers(n)),
        }

        let kinds: AHashMap<&str, NodeKind> =
            nodes.iter().map(|n| (n.id.as_str(), n.kind)).collect();
        let trigger_id = nodes
            .iter()
            .find(|n| n.kind == NodeKind::Trigger)
            .map(|n| n.id.clone())
            .unwrap_or_default();

        if let Some(id) = edges.iter().map(|e| &e.id).duplicates().next() {
            return Err(DecodeError::DuplicateEdgeId(id.clone()));
        }

        for edge in &edges {
            for endpoint in [&edge.source, &edge.target] {
                if !kinds.contains_key(endpoint.as_str()) {
                    return Err(DecodeError::DanglingEdge {
                        edge_id: edge.id.clone(),
                        node_id: endpoint.clone(),
                    });
                }
            }
            if edge.target == trigger_id {
                return Err(DecodeError::TriggerTargeted(edge.id.clone()));
            }
            // Same per-source-kind handle rule the editing operations apply.
            match (kinds[edge.source.as_str()], edge.source_handle) {
                (NodeKind::Condition, None) => {
                    return Err(DecodeError::MissingBranch(edge.id.clone()));
                }
                (NodeKind::Condition, Some(_)) => {}
                (_, Some(_)) => {
                    return Err(DecodeError::UnexpectedBranch(edge.id.clone()));
                }
                (_, None) => {}
            }
        }

        if let Some((source, branch)) = edges
            .iter()
            .filter_map(|e| e.source_handle.map(|b| (&e.source, b)))
            .duplicates()
            .next()
        {
            return Err(DecodeError::DuplicateBranch {
                node_id: source.clone(),
                branch,
            });
        }

        if let Some((source, target)) = edges
            .iter()
            .filter(|e| e.source_handle.is_none())
            .map(|e| (&e.source, &e.target))
            .duplicates()
            .next()
        {
            return Err(DecodeError::DuplicateEdge {
                source_id: source.clone(),
                target_id: target.clone(),
            });
        }

        Ok(Self { nodes, edges })
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// The unique, non-deletable entry point of the graph.
    ///
    /// Construction and every editing operation maintain "exactly one
    /// trigger", so this only returns `None` for a graph built from raw
    /// parts that bypassed [`Graph::from_parts`].
    pub fn trigger(&self) -> Option<&Node> {
        self.nodes.iter().find(|n| n.kind == NodeKind::Trigger)
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.iter().any(|n| n.id == id)
    }

    /// Outgoing edges of a node, in insertion order.
    pub fn edges_from<'a>(&'a self, source: &'a str) -> impl Iterator<Item = &'a Edge> {
        self.edges.iter().filter(move |e| e.source == source)
    }
}
