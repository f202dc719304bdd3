//! Common test utilities for building automation graphs.
use keiro::prelude::*;

/// A graph as a fresh journey starts: the lone trigger node.
#[allow(dead_code)]
pub fn graph_with_trigger() -> Graph {
    Graph::new(Position::new(250.0, 5.0))
}

#[allow(dead_code)]
pub fn trigger_id(graph: &Graph) -> String {
    graph.trigger().expect("graph has a trigger").id.clone()
}

#[allow(dead_code)]
pub fn add_action(graph: &mut Graph, id: &str, data: ActionData) {
    graph
        .add_node(Node::new(
            id,
            Position::new(100.0, 100.0),
            NodeData::Action(data),
        ))
        .expect("action node should be accepted");
}

#[allow(dead_code)]
pub fn add_condition(graph: &mut Graph, id: &str) {
    graph
        .add_node(Node::new(
            id,
            Position::new(300.0, 200.0),
            NodeData::Condition(ConditionData::default()),
        ))
        .expect("condition node should be accepted");
}

#[allow(dead_code)]
pub fn send_email(template_id: Option<&str>) -> ActionData {
    ActionData::SendEmail {
        email_template_id: template_id.map(Into::into),
    }
}

/// A graph that passes the pre-save check: audience filter set, one
/// configured send-email action wired to the trigger.
#[allow(dead_code)]
pub fn ready_graph() -> Graph {
    let mut graph = graph_with_trigger();
    let trigger = trigger_id(&graph);
    graph
        .update_node_data(
            &trigger,
            DataPatch::Trigger(TriggerPatch::status(ContactStatus::Lead)),
        )
        .expect("trigger patch applies");
    add_action(&mut graph, "2", send_email(Some("tmpl-welcome")));
    graph
        .add_edge(&trigger, None, "2")
        .expect("trigger connects to the action");
    graph
}

/// Records every save; can be primed to fail like a dropped connection.
#[allow(dead_code)]
#[derive(Default)]
pub struct RecordingAdapter {
    pub saves: Vec<AutomationPayload>,
    pub fail_next: bool,
}

impl PersistenceAdapter for RecordingAdapter {
    fn save(
        &mut self,
        payload: &AutomationPayload,
    ) -> std::result::Result<SavedRecord, TransportError> {
        if self.fail_next {
            self.fail_next = false;
            return Err(TransportError("network down".to_string()));
        }
        self.saves.push(payload.clone());
        Ok(SavedRecord {
            id: format!("rec-{}", self.saves.len()),
            updated_at: "2024-04-02T10:00:00Z".to_string(),
        })
    }
}
