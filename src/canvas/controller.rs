use super::viewport::{snap_to_grid, Viewport};
use crate::config::ConfigEditor;
use crate::error::EditError;
use crate::graph::{Branch, Graph, Node, NodeKind, Position};
use crate::toolbox::DragPayload;
use tracing::debug;

/// A connection drag that has left a source handle but not yet landed on a
/// target.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingConnection {
    pub source: String,
    pub source_handle: Option<Branch>,
}

/// Bridges user gestures to graph operations and owns the transient
/// interaction state: the selection, a pending connection drag and the id
/// counter for dropped nodes.
///
/// The controller never persists anything; the page embedding it commits
/// the graph through [`SaveGate`](crate::persist::SaveGate) on explicit
/// user action. Rejected gestures come back as [`EditError`] values for the
/// page to surface as transient notifications.
#[derive(Debug, Clone)]
pub struct CanvasController {
    graph: Graph,
    viewport: Viewport,
    selection: Option<String>,
    pending: Option<PendingConnection>,
    next_id: u64,
    snap: bool,
}

impl CanvasController {
    /// Starts a fresh automation: a graph holding only its trigger node.
    pub fn new(trigger_position: Position) -> Self {
        Self::from_graph(Graph::new(trigger_position))
    }

    /// Wraps an existing (typically server-loaded) graph. The id counter is
    /// seeded above the highest numeric id already present so new nodes
    /// never collide.
    pub fn from_graph(graph: Graph) -> Self {
        let next_id = seed_next_id(&graph);
        Self {
            graph,
            viewport: Viewport::default(),
            selection: None,
            pending: None,
            next_id,
            snap: true,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Hands the graph back, e.g. to build the save payload.
    pub fn into_graph(self) -> Graph {
        self.graph
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// Toggles grid snapping for drops and drags.
    pub fn set_snap(&mut self, snap: bool) {
        self.snap = snap;
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// Selects a node; at most one node is selected at a time.
    pub fn select(&mut self, id: &str) -> Result<(), EditError> {
        if !self.graph.contains_node(id) {
            return Err(EditError::UnknownEndpoint(id.to_string()));
        }
        self.selection = Some(id.to_string());
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    /// The config editor bound to the currently selected node, if any.
    pub fn editor(&mut self) -> Option<ConfigEditor<'_>> {
        let id = self.selection.clone()?;
        ConfigEditor::for_node(&mut self.graph, &id)
    }

    /// Handles a toolbox drop: projects the drop position into graph
    /// coordinates, mints a fresh id, seeds the archetype's default payload
    /// and selects the new node. Returns the new node's id.
    pub fn drop_payload(
        &mut self,
        payload: &DragPayload,
        screen: Position,
    ) -> Result<String, EditError> {
        if payload.kind == NodeKind::Trigger {
            return Err(EditError::TriggerNotPlaceable);
        }
        let data = payload
            .default_data()
            .map_err(|_| EditError::UnknownNodeType(payload.node_type.clone()))?;

        let position = self.place(screen);
        let id = self.mint_id();
        debug!(node_id = %id, node_type = %payload.node_type, "toolbox drop");
        self.graph.add_node(Node::new(id.clone(), position, data))?;
        self.selection = Some(id.clone());
        Ok(id)
    }

    /// Moves a node under the pointer. Called repeatedly during a drag;
    /// nothing is persisted until the page saves.
    pub fn drag_node(&mut self, id: &str, screen: Position) {
        let position = self.place(screen);
        self.graph.move_node(id, position);
    }

    /// Starts a connection drag from a node's output handle.
    pub fn begin_connection(
        &mut self,
        source: &str,
        source_handle: Option<Branch>,
    ) -> Result<(), EditError> {
        if !self.graph.contains_node(source) {
            return Err(EditError::UnknownEndpoint(source.to_string()));
        }
        self.pending = Some(PendingConnection {
            source: source.to_string(),
            source_handle,
        });
        Ok(())
    }

    pub fn pending_connection(&self) -> Option<&PendingConnection> {
        self.pending.as_ref()
    }

    /// Drops the pending connection without creating an edge (drag released
    /// over empty canvas).
    pub fn cancel_connection(&mut self) {
        self.pending = None;
    }

    /// Lands the pending connection on a target handle. The pending state
    /// is consumed whether or not the edge is accepted.
    pub fn complete_connection(&mut self, target: &str) -> Result<String, EditError> {
        let Some(pending) = self.pending.take() else {
            return Err(EditError::NoPendingConnection);
        };
        self.graph
            .add_edge(&pending.source, pending.source_handle, target)
    }

    /// Removes a node (trigger exempt) and drops the selection if it
    /// pointed at it.
    pub fn remove_node(&mut self, id: &str) -> Result<(), EditError> {
        self.graph.remove_node(id)?;
        if self.selection.as_deref() == Some(id) {
            self.selection = None;
        }
        Ok(())
    }

    pub fn remove_edge(&mut self, id: &str) {
        self.graph.remove_edge(id);
    }

    /// Delete-key handler for the selected node.
    pub fn delete_selected(&mut self) -> Result<(), EditError> {
        let Some(id) = self.selection.clone() else {
            return Err(EditError::NothingSelected);
        };
        self.remove_node(&id)
    }

    fn place(&self, screen: Position) -> Position {
        let projected = self.viewport.project(screen);
        if self.snap {
            snap_to_grid(projected)
        } else {
            projected
        }
    }

    fn mint_id(&mut self) -> String {
        let id = self.next_id.to_string();
        self.next_id = self.next_id.saturating_add(1);
        id
    }
}

/// One above the highest numeric id in the graph; non-numeric ids (from
/// other clients) are ignored and can never collide with minted ones. The
/// counter saturates at the numeric ceiling, where a mint collides and the
/// drop is rejected as a duplicate instead of panicking.
fn seed_next_id(graph: &Graph) -> u64 {
    graph
        .nodes()
        .iter()
        .filter_map(|n| n.id.parse::<u64>().ok())
        .max()
        .unwrap_or(0)
        .saturating_add(1)
}
