//! # Keiro - Flow-Graph Editing Engine
//!
//! **Keiro** is the headless editing model behind node-based automation
//! builders: marketing journeys and business-rule workflows authored as a
//! directed graph of trigger, action and condition nodes. The crate owns the
//! graph, its structural invariants and the save contract; a UI shell owns
//! rendering and binds pointer gestures to the controller's operations.
//!
//! ## Core Workflow
//!
//! 1.  **Open**: create a [`CanvasController`](canvas::CanvasController) for
//!     a fresh automation, or load a stored one through
//!     [`decode_automation`](persist::decode_automation) and
//!     [`AutomationPayload::into_graph`](persist::AutomationPayload::into_graph).
//! 2.  **Edit**: drop archetypes from the [`toolbox`] catalog, drag
//!     connections, and configure the selected node through its
//!     [`ConfigEditor`](config::ConfigEditor). Invalid edits are rejected
//!     without touching the graph, so the editor is never structurally broken.
//! 3.  **Save**: on explicit user action, run the
//!     [`SaveGate`](persist::SaveGate): required-field validation, then the
//!     [`PersistenceAdapter`](persist::PersistenceAdapter) the host
//!     implements over its API client.
//!
//! ## Quick Start
//!
//! ```rust
//! use keiro::prelude::*;
//!
//! # fn main() -> Result<()> {
//! // A fresh journey starts as a lone trigger node.
//! let mut canvas = CanvasController::new(Position::new(250.0, 5.0));
//!
//! // Drop a "Send Email" action from the toolbox catalog.
//! let payload = keiro::toolbox::entry("sendEmail")
//!     .ok_or("missing catalog entry")?
//!     .payload();
//! let action_id = canvas.drop_payload(&payload, Position::new(100.0, 100.0))?;
//!
//! // Connect trigger -> action.
//! let trigger_id = canvas.graph().trigger().ok_or("no trigger")?.id.clone();
//! canvas.begin_connection(&trigger_id, None)?;
//! canvas.complete_connection(&action_id)?;
//!
//! // Configure the selected action and the trigger's audience.
//! if let Some(ConfigEditor::Action(mut editor)) = canvas.editor() {
//!     editor.set_email_template("tmpl-welcome")?;
//! }
//! canvas.select(&trigger_id)?;
//! if let Some(ConfigEditor::Trigger(mut editor)) = canvas.editor() {
//!     editor.set_status(ContactStatus::Lead)?;
//! }
//!
//! // Save through an adapter (here: whatever the host wires in).
//! # struct Noop;
//! # impl PersistenceAdapter for Noop {
//! #     fn save(&mut self, _: &AutomationPayload) -> std::result::Result<SavedRecord, TransportError> {
//! #         Ok(SavedRecord { id: "42".into(), updated_at: "now".into() })
//! #     }
//! # }
//! # let mut adapter = Noop;
//! let mut gate = SaveGate::new();
//! let record = gate.save_with(&mut adapter, "Welcome journey", canvas.graph())?;
//! println!("saved as {}", record.id);
//! # Ok(())
//! # }
//! ```

pub mod canvas;
pub mod config;
pub mod error;
pub mod graph;
pub mod node;
pub mod persist;
pub mod prelude;
pub mod toolbox;
