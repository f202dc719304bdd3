use crate::error::EditError;
use crate::graph::Graph;
use crate::node::{Comparator, ConditionData, ConditionPatch, ConditionType, DataPatch, NodeData};

/// Edits a condition node's comparison: which field, which operator, which
/// value. The automation runtime, not this crate, evaluates it to pick
/// the true/false branch.
pub struct ConditionEditor<'g> {
    graph: &'g mut Graph,
    node_id: String,
}

impl<'g> ConditionEditor<'g> {
    pub(crate) fn new(graph: &'g mut Graph, node_id: &str) -> Self {
        Self {
            graph,
            node_id: node_id.to_string(),
        }
    }

    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    /// The payload as currently stored, for rendering the panel.
    pub fn data(&self) -> Option<&ConditionData> {
        match &self.graph.node(&self.node_id)?.data {
            NodeData::Condition(data) => Some(data),
            _ => None,
        }
    }

    /// Switches the comparison type; moving to the email-opened check
    /// clears any custom field.
    pub fn set_condition_type(&mut self, condition_type: ConditionType) -> Result<(), EditError> {
        self.commit(ConditionPatch::condition_type(condition_type))
    }

    pub fn set_field(&mut self, field: impl Into<String>) -> Result<(), EditError> {
        self.commit(ConditionPatch::field(field))
    }

    pub fn set_operator(&mut self, operator: Comparator) -> Result<(), EditError> {
        self.commit(ConditionPatch::operator(operator))
    }

    pub fn set_value(&mut self, value: serde_json::Value) -> Result<(), EditError> {
        self.commit(ConditionPatch::value(value))
    }

    fn commit(&mut self, patch: ConditionPatch) -> Result<(), EditError> {
        self.graph
            .update_node_data(&self.node_id, DataPatch::Condition(patch))
    }
}
