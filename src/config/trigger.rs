use crate::error::EditError;
use crate::graph::Graph;
use crate::node::{AudienceFilter, Comparator, ContactStatus, DataPatch, NodeData, TriggerPatch};

/// Edits the trigger node's audience filter: a status equality and a
/// numeric lead-score comparison, each independently settable and
/// clearable. Every edit is committed to the graph immediately.
pub struct TriggerEditor<'g> {
    graph: &'g mut Graph,
    node_id: String,
}

impl<'g> TriggerEditor<'g> {
    pub(crate) fn new(graph: &'g mut Graph, node_id: &str) -> Self {
        Self {
            graph,
            node_id: node_id.to_string(),
        }
    }

    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    /// The filter as currently stored, for rendering the panel.
    pub fn audience(&self) -> Option<&AudienceFilter> {
        match &self.graph.node(&self.node_id)?.data {
            NodeData::Trigger(data) => Some(data.audience()),
            _ => None,
        }
    }

    pub fn set_status(&mut self, status: ContactStatus) -> Result<(), EditError> {
        self.commit(TriggerPatch::status(status))
    }

    pub fn clear_status(&mut self) -> Result<(), EditError> {
        self.commit(TriggerPatch::clear_status())
    }

    pub fn set_lead_score(
        &mut self,
        comparator: Comparator,
        threshold: i64,
    ) -> Result<(), EditError> {
        self.commit(TriggerPatch::lead_score(comparator, threshold))
    }

    pub fn clear_lead_score(&mut self) -> Result<(), EditError> {
        self.commit(TriggerPatch::clear_lead_score())
    }

    fn commit(&mut self, patch: TriggerPatch) -> Result<(), EditError> {
        self.graph
            .update_node_data(&self.node_id, DataPatch::Trigger(patch))
    }
}
