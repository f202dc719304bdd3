use super::model::{Branch, Edge, Graph, Node, NodeKind, Position};
use crate::error::EditError;
use crate::node::DataPatch;
use tracing::debug;

/// Editing operations.
///
/// Each returns `Err` without modifying anything when the edit would break a
/// structural invariant; the caller surfaces the rejection as a transient
/// notification.
impl Graph {
    /// Appends a node. Rejects duplicate ids and second triggers.
    pub fn add_node(&mut self, node: Node) -> Result<(), EditError> {
        if self.contains_node(&node.id) {
            return Err(EditError::DuplicateNode(node.id));
        }
        if node.kind == NodeKind::Trigger && self.trigger().is_some() {
            return Err(EditError::TriggerNotPlaceable);
        }
        debug!(node_id = %node.id, kind = %node.kind, "add node");
        self.nodes.push(node);
        Ok(())
    }

    /// Removes a node and every edge referencing it. The trigger node is
    /// exempt and the graph is left unchanged when `id` is unknown.
    pub fn remove_node(&mut self, id: &str) -> Result<(), EditError> {
        let Some(node) = self.node(id) else {
            return Err(EditError::UnknownEndpoint(id.to_string()));
        };
        if node.kind == NodeKind::Trigger {
            return Err(EditError::TriggerNotRemovable);
        }
        debug!(node_id = %id, "remove node");
        self.nodes.retain(|n| n.id != id);
        self.edges.retain(|e| e.source != id && e.target != id);
        Ok(())
    }

    /// Connects `source` to `target`, returning the edge id derived from
    /// the endpoints and the branch handle.
    ///
    /// Condition sources must carry a branch and may use each branch once;
    /// other sources carry none. Edges into the trigger are rejected, as it
    /// has no input handle.
    pub fn add_edge(
        &mut self,
        source: &str,
        source_handle: Option<Branch>,
        target: &str,
    ) -> Result<String, EditError> {
        let Some(source_node) = self.node(source) else {
            return Err(EditError::UnknownEndpoint(source.to_string()));
        };
        let Some(target_node) = self.node(target) else {
            return Err(EditError::UnknownEndpoint(target.to_string()));
        };
        if source == target {
            return Err(EditError::SelfConnection(source.to_string()));
        }
        if target_node.kind == NodeKind::Trigger {
            return Err(EditError::TriggerTargeted);
        }

        match (source_node.kind, source_handle) {
            (NodeKind::Condition, None) => {
                return Err(EditError::MissingBranch(source.to_string()));
            }
            (NodeKind::Condition, Some(branch)) => {
                let taken = self
                    .edges_from(source)
                    .any(|e| e.source_handle == Some(branch));
                if taken {
                    return Err(EditError::DuplicateBranch {
                        node_id: source.to_string(),
                        branch,
                    });
                }
            }
            (_, Some(_)) => return Err(EditError::UnexpectedBranch(source.to_string())),
            (_, None) => {
                if self.edges_from(source).any(|e| e.target == target) {
                    return Err(EditError::DuplicateEdge {
                        source_id: source.to_string(),
                        target_id: target.to_string(),
                    });
                }
            }
        }

        let id = Edge::derive_id(source, source_handle, target);
        debug!(edge_id = %id, "add edge");
        self.edges.push(Edge {
            id: id.clone(),
            source: source.to_string(),
            target: target.to_string(),
            source_handle,
        });
        Ok(id)
    }

    /// Removes an edge. Unknown ids are a silent no-op, matching the
    /// delete-key UX where the selection may already be gone.
    pub fn remove_edge(&mut self, id: &str) {
        let before = self.edges.len();
        self.edges.retain(|e| e.id != id);
        if self.edges.len() != before {
            debug!(edge_id = %id, "remove edge");
        }
    }

    /// Applies a typed shallow-merge patch to a node's payload.
    ///
    /// Unknown ids are a silent no-op (the config panel may outlive a
    /// deleted node for a frame); a patch of the wrong family is rejected.
    pub fn update_node_data(&mut self, id: &str, patch: DataPatch) -> Result<(), EditError> {
        let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) else {
            return Ok(());
        };
        let kind = node.kind;
        node.data
            .apply(patch)
            .map_err(|_| EditError::PatchKindMismatch {
                node_id: id.to_string(),
                kind,
            })
    }

    /// Moves a node. Unknown ids are a silent no-op.
    pub fn move_node(&mut self, id: &str, position: Position) {
        if let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) {
            node.position = position;
        }
    }
}
