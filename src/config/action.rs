use crate::error::EditError;
use crate::graph::Graph;
use crate::node::{ActionData, ActionKind, ActionPatch, DataPatch, NodeData};

/// Edits an action node's parameters.
///
/// The panel first offers the action type; [`ActionEditor::set_kind`]
/// replaces the payload with the new type's defaults so no stale cross-type
/// field survives (switching from "wait" to "send email" drops `days`).
/// Field setters only apply to the matching type and are rejected otherwise.
pub struct ActionEditor<'g> {
    graph: &'g mut Graph,
    node_id: String,
}

impl<'g> ActionEditor<'g> {
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
    pub fn data(&self) -> Option<&ActionData> {
        match &self.graph.node(&self.node_id)?.data {
            NodeData::Action(data) => Some(data),
            _ => None,
        }
    }

    pub fn kind(&self) -> Option<ActionKind> {
        self.data().map(ActionData::kind)
    }

    /// Switches the action type, resetting type-specific fields.
    pub fn set_kind(&mut self, kind: ActionKind) -> Result<(), EditError> {
        self.commit(ActionPatch::Kind(kind))
    }

    pub fn set_email_template(&mut self, template_id: impl Into<String>) -> Result<(), EditError> {
        self.commit(ActionPatch::EmailTemplateId(Some(template_id.into())))
    }

    pub fn clear_email_template(&mut self) -> Result<(), EditError> {
        self.commit(ActionPatch::EmailTemplateId(None))
    }

    pub fn set_wait_days(&mut self, days: u32) -> Result<(), EditError> {
        self.commit(ActionPatch::WaitDays(days))
    }

    pub fn set_task_title(&mut self, title: impl Into<String>) -> Result<(), EditError> {
        self.commit(ActionPatch::TaskTitle(title.into()))
    }

    pub fn set_update_field(&mut self, field: impl Into<String>) -> Result<(), EditError> {
        self.commit(ActionPatch::FieldUpdate {
            field: Some(field.into()),
            value: None,
        })
    }

    pub fn set_update_value(&mut self, value: impl Into<String>) -> Result<(), EditError> {
        self.commit(ActionPatch::FieldUpdate {
            field: None,
            value: Some(value.into()),
        })
    }

    pub fn set_webhook_url(&mut self, url: impl Into<String>) -> Result<(), EditError> {
        self.commit(ActionPatch::Webhook {
            url: Some(url.into()),
            payload_template: None,
        })
    }

    pub fn set_webhook_template(&mut self, template: impl Into<String>) -> Result<(), EditError> {
        self.commit(ActionPatch::Webhook {
            url: None,
            payload_template: Some(template.into()),
        })
    }

    fn commit(&mut self, patch: ActionPatch) -> Result<(), EditError> {
        self.graph
            .update_node_data(&self.node_id, DataPatch::Action(patch))
    }
}
