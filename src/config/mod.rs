//! Headless config-panel editors.
//!
//! Each editor binds the currently selected node and translates field edits
//! into shallow-merge patches applied through
//! [`Graph::update_node_data`](crate::graph::Graph::update_node_data),
//! the only mutation path the panels have. Editors never perform I/O and never
//! check required-ness; that is the save gate's job.

pub mod action;
pub mod condition;
pub mod trigger;

pub use action::ActionEditor;
pub use condition::ConditionEditor;
pub use trigger::TriggerEditor;

use crate::graph::{Graph, NodeKind};

/// The editor variant matching the selected node's kind.
pub enum ConfigEditor<'g> {
    Trigger(TriggerEditor<'g>),
    Action(ActionEditor<'g>),
    Condition(ConditionEditor<'g>),
}

impl<'g> ConfigEditor<'g> {
    /// Binds the editor appropriate for `id`, or `None` when the node does
    /// not exist (e.g. the selection outlived a delete).
    pub fn for_node(graph: &'g mut Graph, id: &str) -> Option<Self> {
        let kind = graph.node(id)?.kind;
        Some(match kind {
            NodeKind::Trigger => ConfigEditor::Trigger(TriggerEditor::new(graph, id)),
            NodeKind::Action => ConfigEditor::Action(ActionEditor::new(graph, id)),
            NodeKind::Condition => ConfigEditor::Condition(ConditionEditor::new(graph, id)),
        })
    }

    pub fn node_id(&self) -> &str {
        match self {
            ConfigEditor::Trigger(editor) => editor.node_id(),
            ConfigEditor::Action(editor) => editor.node_id(),
            ConfigEditor::Condition(editor) => editor.node_id(),
        }
    }
}
