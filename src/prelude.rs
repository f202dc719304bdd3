//! Prelude module for convenient imports
//!
//! Re-exports the types a builder page touches: the graph model, the canvas
//! controller, the config editors and the save machinery.
//!
//! # Example
//!
//! ```rust,no_run
//! use keiro::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let raw = std::fs::read_to_string("path/to/automation.json")?;
//! let graph = decode_automation(&raw)?.into_graph()?;
//! let mut canvas = CanvasController::from_graph(graph);
//!
//! canvas.select("1")?;
//! if let Some(ConfigEditor::Trigger(mut editor)) = canvas.editor() {
//!     editor.set_lead_score(Comparator::Gte, 50)?;
//! }
//! # Ok(())
//! # }
//! ```

// Graph model
pub use crate::graph::{Branch, Edge, Graph, Node, NodeKind, Position, TRIGGER_SEED_ID};

// Node payloads
pub use crate::node::{
    ActionData, ActionKind, ActionPatch, AudienceFilter, Comparator, ConditionData,
    ConditionPatch, ConditionType, ContactStatus, DataPatch, LeadScoreFilter, NodeData,
    TriggerData, TriggerPatch,
};

// Canvas and interaction state
pub use crate::canvas::{CanvasController, PendingConnection, Viewport};

// Toolbox catalog
pub use crate::toolbox::{DragPayload, ToolboxCategory, ToolboxEntry, CATALOG};

// Config editors
pub use crate::config::{ActionEditor, ConditionEditor, ConfigEditor, TriggerEditor};

// Persistence boundary
pub use crate::persist::{
    decode_automation, encode_automation, validate, AutomationPayload, PersistenceAdapter,
    SaveGate, SavedRecord, TransportError,
};

// Error types
pub use crate::error::{DecodeError, EditError, SaveBlocker, SaveError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
