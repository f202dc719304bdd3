//! The static catalog of placeable node archetypes.
//!
//! The toolbox holds no state: each entry yields a [`DragPayload`] that the
//! UI shell attaches to the platform drag channel, and the canvas turns back
//! into a node on drop. The payload is ephemeral and never persisted.

use crate::error::DecodeError;
use crate::graph::NodeKind;
use crate::node::{ActionData, ActionKind, ConditionData, NodeData};
use serde::{Deserialize, Serialize};

/// One placeable archetype in the toolbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolboxEntry {
    pub kind: NodeKind,
    pub node_type: &'static str,
    pub label: &'static str,
}

impl ToolboxEntry {
    /// The serializable descriptor carried by a drag of this entry.
    pub fn payload(&self) -> DragPayload {
        DragPayload {
            kind: self.kind,
            node_type: self.node_type.to_string(),
            label: self.label.to_string(),
        }
    }
}

/// A named group of toolbox entries.
#[derive(Debug, Clone, Copy)]
pub struct ToolboxCategory {
    pub name: &'static str,
    pub entries: &'static [ToolboxEntry],
}

/// The fixed catalog rendered by the builder sidebars.
pub const CATALOG: &[ToolboxCategory] = &[
    ToolboxCategory {
        name: "Actions",
        entries: &[
            ToolboxEntry {
                kind: NodeKind::Action,
                node_type: "sendEmail",
                label: "Send Email",
            },
            ToolboxEntry {
                kind: NodeKind::Action,
                node_type: "wait",
                label: "Wait",
            },
            ToolboxEntry {
                kind: NodeKind::Action,
                node_type: "createTask",
                label: "Create Task",
            },
            ToolboxEntry {
                kind: NodeKind::Action,
                node_type: "updateField",
                label: "Update Field",
            },
            ToolboxEntry {
                kind: NodeKind::Action,
                node_type: "webhook",
                label: "Call Webhook",
            },
        ],
    },
    ToolboxCategory {
        name: "Logic",
        entries: &[ToolboxEntry {
            kind: NodeKind::Condition,
            node_type: "condition",
            label: "If / Else",
        }],
    },
];

/// Looks an entry up by its `node_type` discriminator.
pub fn entry(node_type: &str) -> Option<&'static ToolboxEntry> {
    CATALOG
        .iter()
        .flat_map(|category| category.entries)
        .find(|entry| entry.node_type == node_type)
}

/// The descriptor moved through the drag-and-drop data channel from the
/// toolbox to the canvas. Same-document, not versioned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragPayload {
    pub kind: NodeKind,
    pub node_type: String,
    pub label: String,
}

impl DragPayload {
    /// Serializes the payload for the drag channel.
    pub fn encode(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Parses a payload off the drag channel, rejecting foreign drops and
    /// unknown node types.
    pub fn decode(raw: &str) -> Result<Self, DecodeError> {
        let payload: DragPayload =
            serde_json::from_str(raw).map_err(|e| DecodeError::Json(e.to_string()))?;
        payload.default_data()?;
        Ok(payload)
    }

    /// The payload a freshly dropped node of this archetype starts with.
    pub fn default_data(&self) -> Result<NodeData, DecodeError> {
        match (self.kind, self.node_type.as_str()) {
            (NodeKind::Action, "sendEmail") => Ok(NodeData::Action(ActionData::default_for(
                ActionKind::SendEmail,
            ))),
            (NodeKind::Action, "wait") => {
                Ok(NodeData::Action(ActionData::default_for(ActionKind::Wait)))
            }
            (NodeKind::Action, "createTask") => Ok(NodeData::Action(ActionData::default_for(
                ActionKind::CreateTask,
            ))),
            (NodeKind::Action, "updateField") => Ok(NodeData::Action(ActionData::default_for(
                ActionKind::UpdateField,
            ))),
            (NodeKind::Action, "webhook") => Ok(NodeData::Action(ActionData::default_for(
                ActionKind::Webhook,
            ))),
            (NodeKind::Condition, "condition") => {
                Ok(NodeData::Condition(ConditionData::default()))
            }
            _ => Err(DecodeError::UnknownNodeType(self.node_type.clone())),
        }
    }
}
