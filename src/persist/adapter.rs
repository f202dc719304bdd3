use super::payload::AutomationPayload;
use super::validate::validate;
use crate::error::SaveError;
use crate::graph::Graph;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// What the API returns for a stored automation: its server-assigned id and
/// timestamp, both opaque to the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedRecord {
    pub id: String,
    pub updated_at: String,
}

/// A failed transport attempt, as reported by the host's API client.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{0}")]
pub struct TransportError(pub String);

/// The remote collaborator that stores automations. Implemented by the host
/// application over its CRUD client; tests use an in-memory recorder.
pub trait PersistenceAdapter {
    fn save(&mut self, payload: &AutomationPayload) -> Result<SavedRecord, TransportError>;
}

/// The explicit, user-triggered save action: validate first, then at most
/// one request in flight per page.
///
/// `begin` hands out the payload and flips the in-flight flag (the page
/// disables its save control while [`SaveGate::is_in_flight`] is true);
/// `complete` clears it and maps the outcome. A validation failure or
/// transport error never touches the local graph; the user keeps their
/// edits and retries.
#[derive(Debug, Clone, Default)]
pub struct SaveGate {
    in_flight: bool,
}

impl SaveGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Validates the graph and snapshots the payload to send. Blocks when a
    /// save is already outstanding; a blocked or invalid save issues no
    /// request at all.
    pub fn begin(&mut self, name: &str, graph: &Graph) -> Result<AutomationPayload, SaveError> {
        if self.in_flight {
            return Err(SaveError::AlreadyInFlight);
        }
        validate(graph).map_err(SaveError::Invalid)?;
        self.in_flight = true;
        debug!(name, nodes = graph.nodes().len(), "save started");
        Ok(AutomationPayload::from_graph(name, graph))
    }

    /// Records the outcome of the request issued after [`SaveGate::begin`].
    pub fn complete(
        &mut self,
        outcome: Result<SavedRecord, TransportError>,
    ) -> Result<SavedRecord, SaveError> {
        if !self.in_flight {
            return Err(SaveError::NotInFlight);
        }
        self.in_flight = false;
        outcome.map_err(|e| {
            warn!(error = %e, "save failed");
            SaveError::Transport(e.0)
        })
    }

    /// Begin-save-complete in one call, for synchronous adapters.
    pub fn save_with<A: PersistenceAdapter>(
        &mut self,
        adapter: &mut A,
        name: &str,
        graph: &Graph,
    ) -> Result<SavedRecord, SaveError> {
        let payload = self.begin(name, graph)?;
        let outcome = adapter.save(&payload);
        self.complete(outcome)
    }
}
