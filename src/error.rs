use crate::graph::{Branch, NodeKind};
use thiserror::Error;

/// Rejections raised by graph editing operations.
///
/// Every rejection is total: the operation that produced it left the graph
/// exactly as it was. Callers surface these as transient notifications and
/// keep editing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditError {
    #[error("A node with id '{0}' already exists in the graph")]
    DuplicateNode(String),

    #[error("The trigger node cannot be removed")]
    TriggerNotRemovable,

    #[error("A graph has exactly one trigger; it cannot be placed from the toolbox")]
    TriggerNotPlaceable,

    #[error("The dropped payload carries unknown node type '{0}'")]
    UnknownNodeType(String),

    #[error("Edge endpoint '{0}' does not exist in the graph")]
    UnknownEndpoint(String),

    #[error("The trigger node does not accept incoming connections")]
    TriggerTargeted,

    #[error("Node '{0}' cannot connect to itself")]
    SelfConnection(String),

    #[error("Condition node '{node_id}' already has an outgoing '{branch}' edge")]
    DuplicateBranch { node_id: String, branch: Branch },

    #[error("An edge from '{source_id}' to '{target_id}' already exists")]
    DuplicateEdge { source_id: String, target_id: String },

    #[error("An edge leaving condition node '{0}' must carry a true/false branch")]
    MissingBranch(String),

    #[error("Node '{0}' is not a condition node and its edges carry no branch")]
    UnexpectedBranch(String),

    #[error("No connection is pending")]
    NoPendingConnection,

    #[error("Patch does not apply to node '{node_id}' of kind '{kind}'")]
    PatchKindMismatch { node_id: String, kind: NodeKind },

    #[error("No node is currently selected")]
    NothingSelected,
}

/// Errors raised while decoding a persisted automation or a drag payload.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    #[error("Failed to parse automation JSON: {0}")]
    Json(String),

    #[error("The automation has no trigger node")]
    MissingTrigger,

    #[error("The automation has {0} trigger nodes, expected exactly one")]
    MultipleTriggers(usize),

    #[error("Node id '{0}' appears more than once")]
    DuplicateNodeId(String),

    #[error("Node '{node_id}' declares a type that does not match its data payload")]
    NodeKindMismatch { node_id: String },

    #[error("Edge id '{0}' appears more than once")]
    DuplicateEdgeId(String),

    #[error("Edge '{edge_id}' references unknown node '{node_id}'")]
    DanglingEdge { edge_id: String, node_id: String },

    #[error("Edge '{0}' targets the trigger node")]
    TriggerTargeted(String),

    #[error("Edge '{0}' leaves a condition node but carries no branch")]
    MissingBranch(String),

    #[error("Edge '{0}' carries a branch but its source is not a condition node")]
    UnexpectedBranch(String),

    #[error("Condition node '{node_id}' has more than one outgoing '{branch}' edge")]
    DuplicateBranch { node_id: String, branch: Branch },

    #[error("More than one edge connects '{source_id}' to '{target_id}'")]
    DuplicateEdge { source_id: String, target_id: String },

    #[error("Unknown toolbox node type '{0}'")]
    UnknownNodeType(String),
}

/// Failures of the explicit, user-triggered save action.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SaveError {
    #[error("The automation cannot be saved ({} blocking issue(s))", .0.len())]
    Invalid(Vec<SaveBlocker>),

    #[error("A save request is already in flight")]
    AlreadyInFlight,

    #[error("No save request is in flight")]
    NotInFlight,

    #[error("The save request failed: {0}")]
    Transport(String),
}

/// A single required-field violation found by the pre-save check.
///
/// Blockers are collected, not short-circuited, so the page can list every
/// problem at once.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SaveBlocker {
    #[error("The trigger's audience filter must specify at least one criterion")]
    EmptyAudience,

    #[error("Send-email action '{0}' has no email template selected")]
    MissingEmailTemplate(String),

    #[error("Wait action '{0}' must wait at least one day")]
    ZeroWaitDays(String),

    #[error("Create-task action '{0}' has an empty task title")]
    EmptyTaskTitle(String),

    #[error("Update-field action '{0}' does not name a field to update")]
    MissingUpdateField(String),

    #[error("Webhook action '{0}' has no URL")]
    MissingWebhookUrl(String),

    #[error("Custom condition '{0}' does not name a comparison field")]
    MissingConditionField(String),
}
