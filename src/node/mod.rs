//! Type-specific node payloads.
//!
//! A node's `data` on the wire is a free-form object discriminated by
//! `nodeType` (or `conditionType` for conditions). Here each shape is a
//! variant of a tagged union, so every config editor's fields are statically
//! enumerable and switching an action's type structurally drops the prior
//! type's fields.

pub mod action;
pub mod condition;
pub mod trigger;

pub use action::*;
pub use condition::*;
pub use trigger::*;

use crate::graph::NodeKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind-specific payload attached to a node.
///
/// Serialized untagged: the three shapes are disjoint on the wire
/// (`nodeType: "targetAudience"`, the action `nodeType` values, and
/// `conditionType`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeData {
    Trigger(TriggerData),
    Action(ActionData),
    Condition(ConditionData),
}

impl NodeData {
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeData::Trigger(_) => NodeKind::Trigger,
            NodeData::Action(_) => NodeKind::Action,
            NodeData::Condition(_) => NodeKind::Condition,
        }
    }

    /// Applies a typed shallow-merge patch. Fails without touching the data
    /// when the patch family does not match the payload's kind.
    pub(crate) fn apply(&mut self, patch: DataPatch) -> Result<(), PatchMismatch> {
        match (self, patch) {
            (NodeData::Trigger(data), DataPatch::Trigger(patch)) => {
                patch.apply(data.audience_mut());
                Ok(())
            }
            (NodeData::Action(data), DataPatch::Action(patch)) => patch.apply(data),
            (NodeData::Condition(data), DataPatch::Condition(patch)) => {
                patch.apply(data);
                Ok(())
            }
            _ => Err(PatchMismatch),
        }
    }
}

/// A partial edit produced by one of the config editors.
///
/// Patches only carry the fields that were actually edited; applying one is
/// a shallow merge that leaves sibling fields untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum DataPatch {
    Trigger(TriggerPatch),
    Action(ActionPatch),
    Condition(ConditionPatch),
}

/// Marker for a patch that does not fit the node it was applied to.
/// The graph layer attaches the node id and kind before reporting it.
pub(crate) struct PatchMismatch;

/// Comparison operator shared by audience filters and condition expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Comparator {
    #[default]
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Comparator::Eq => "=",
            Comparator::Neq => "!=",
            Comparator::Gt => ">",
            Comparator::Gte => ">=",
            Comparator::Lt => "<",
            Comparator::Lte => "<=",
        };
        write!(f, "{}", symbol)
    }
}
