use crate::error::DecodeError;
use crate::graph::{Edge, Graph, Node};
use crate::node::{AudienceFilter, NodeData};
use serde::{Deserialize, Serialize};

/// The serialized automation attached to its parent Campaign or Workflow
/// record: `{name, nodes, edges, targetAudience?}` in the API's camelCase.
///
/// `target_audience` mirrors the trigger node's filter so list views can
/// show it without walking the graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomationPayload {
    pub name: String,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_audience: Option<AudienceFilter>,
}

impl AutomationPayload {
    /// Snapshots a graph for saving.
    pub fn from_graph(name: impl Into<String>, graph: &Graph) -> Self {
        let target_audience = graph.trigger().and_then(|node| match &node.data {
            NodeData::Trigger(data) => Some(data.audience().clone()),
            _ => None,
        });
        Self {
            name: name.into(),
            nodes: graph.nodes().to_vec(),
            edges: graph.edges().to_vec(),
            target_audience,
        }
    }

    /// Rebuilds the editable graph, re-checking structural invariants.
    pub fn into_graph(self) -> Result<Graph, DecodeError> {
        Graph::from_parts(self.nodes, self.edges)
    }
}

/// Serializes a payload for the API. Infallible for these shapes.
pub fn encode_automation(payload: &AutomationPayload) -> String {
    serde_json::to_string(payload).unwrap_or_default()
}

/// Parses a payload as stored by the API. Structural invariants are checked
/// by [`AutomationPayload::into_graph`], not here.
pub fn decode_automation(raw: &str) -> Result<AutomationPayload, DecodeError> {
    serde_json::from_str(raw).map_err(|e| DecodeError::Json(e.to_string()))
}
