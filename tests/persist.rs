//! Tests for the wire shapes, the pre-save check and the save gate.
mod common;
use common::*;
use keiro::prelude::*;

#[test]
fn test_payload_round_trip() {
    let graph = ready_graph();
    let payload = AutomationPayload::from_graph("Welcome journey", &graph);
    let decoded = decode_automation(&encode_automation(&payload)).expect("round trip decodes");
    assert_eq!(decoded, payload);
    assert_eq!(decoded.into_graph().expect("still structurally valid"), graph);
}

#[test]
fn test_payload_mirrors_the_trigger_audience() {
    let payload = AutomationPayload::from_graph("J", &ready_graph());
    let audience = payload.target_audience.expect("audience mirrored");
    assert_eq!(audience.status, Some(ContactStatus::Lead));
}

#[test]
fn test_wire_format_uses_camel_case() {
    let mut graph = ready_graph();
    add_condition(&mut graph, "3");
    graph
        .add_edge("3", Some(Branch::True), "2")
        .expect("valid edge");

    let json: serde_json::Value =
        serde_json::from_str(&encode_automation(&AutomationPayload::from_graph("J", &graph)))
            .expect("valid json");

    assert!(json.get("targetAudience").is_some());
    let nodes = json["nodes"].as_array().expect("nodes array");
    let action = nodes
        .iter()
        .find(|n| n["id"] == "2")
        .expect("action serialized");
    assert_eq!(action["type"], "action");
    assert_eq!(action["data"]["nodeType"], "sendEmail");
    assert_eq!(action["data"]["emailTemplateId"], "tmpl-welcome");

    let edges = json["edges"].as_array().expect("edges array");
    let branch_edge = edges
        .iter()
        .find(|e| e["source"] == "3")
        .expect("branch edge serialized");
    assert_eq!(branch_edge["sourceHandle"], "true");
}

#[test]
fn test_decode_accepts_legacy_branch_spellings() {
    let raw = r#"{
        "name": "Legacy",
        "nodes": [
            {"id": "1", "type": "trigger", "position": {"x": 0.0, "y": 0.0},
             "data": {"nodeType": "targetAudience", "targetAudience": {"status": "lead"}}},
            {"id": "2", "type": "condition", "position": {"x": 0.0, "y": 120.0},
             "data": {"conditionType": "ifEmailOpened"}},
            {"id": "3", "type": "action", "position": {"x": 0.0, "y": 240.0},
             "data": {"nodeType": "wait", "days": 2}}
        ],
        "edges": [
            {"id": "e2-true-3", "source": "2", "target": "3", "sourceHandle": "yes"}
        ]
    }"#;

    let graph = decode_automation(raw)
        .expect("decodes")
        .into_graph()
        .expect("valid graph");
    assert_eq!(
        graph.edge("e2-true-3").expect("edge exists").source_handle,
        Some(Branch::True)
    );
    assert_eq!(
        graph.node("3").expect("node exists").data,
        NodeData::Action(ActionData::Wait { days: 2 })
    );
}

#[test]
fn test_structural_checks_on_load() {
    let trigger = |id: &str| {
        Node::new(
            id,
            Position::default(),
            NodeData::Trigger(TriggerData::default()),
        )
    };
    let action = |id: &str| {
        Node::new(
            id,
            Position::default(),
            NodeData::Action(ActionData::default_for(ActionKind::Wait)),
        )
    };
    let edge = |id: &str, source: &str, target: &str| Edge {
        id: id.to_string(),
        source: source.to_string(),
        target: target.to_string(),
        source_handle: None,
    };

    assert_eq!(
        Graph::from_parts(vec![action("2")], vec![]),
        Err(DecodeError::MissingTrigger)
    );
    assert_eq!(
        Graph::from_parts(vec![trigger("1"), trigger("9")], vec![]),
        Err(DecodeError::MultipleTriggers(2))
    );
    assert_eq!(
        Graph::from_parts(vec![trigger("1"), action("1")], vec![]),
        Err(DecodeError::DuplicateNodeId("1".to_string()))
    );
    assert_eq!(
        Graph::from_parts(
            vec![trigger("1"), action("2")],
            vec![edge("e1-9", "1", "9")]
        ),
        Err(DecodeError::DanglingEdge {
            edge_id: "e1-9".to_string(),
            node_id: "9".to_string(),
        })
    );
    assert_eq!(
        Graph::from_parts(
            vec![trigger("1"), action("2")],
            vec![edge("e2-1", "2", "1")]
        ),
        Err(DecodeError::TriggerTargeted("e2-1".to_string()))
    );
}

#[test]
fn test_edge_handle_rules_are_rechecked_on_load() {
    let trigger = Node::new(
        "1",
        Position::default(),
        NodeData::Trigger(TriggerData::default()),
    );
    let condition = Node::new(
        "2",
        Position::default(),
        NodeData::Condition(ConditionData::default()),
    );
    let action = |id: &str| {
        Node::new(
            id,
            Position::default(),
            NodeData::Action(ActionData::default_for(ActionKind::Wait)),
        )
    };

    // A branchless edge leaving a condition node cannot be loaded.
    assert_eq!(
        Graph::from_parts(
            vec![trigger.clone(), condition.clone(), action("3")],
            vec![Edge {
                id: "e2-3".to_string(),
                source: "2".to_string(),
                target: "3".to_string(),
                source_handle: None,
            }]
        ),
        Err(DecodeError::MissingBranch("e2-3".to_string()))
    );

    // A branch handle on a non-condition source cannot be loaded either.
    assert_eq!(
        Graph::from_parts(
            vec![trigger, condition, action("3"), action("4")],
            vec![Edge {
                id: "e3-true-4".to_string(),
                source: "3".to_string(),
                target: "4".to_string(),
                source_handle: Some(Branch::True),
            }]
        ),
        Err(DecodeError::UnexpectedBranch("e3-true-4".to_string()))
    );
}

#[test]
fn test_duplicate_edges_are_rejected_on_load() {
    let nodes = || {
        vec![
            Node::new(
                "1",
                Position::default(),
                NodeData::Trigger(TriggerData::default()),
            ),
            Node::new(
                "2",
                Position::default(),
                NodeData::Action(ActionData::default_for(ActionKind::Wait)),
            ),
        ]
    };
    let edge = |id: &str| Edge {
        id: id.to_string(),
        source: "1".to_string(),
        target: "2".to_string(),
        source_handle: None,
    };

    // Two copies of the same edge would make a single removal delete both,
    // breaking add/remove invertibility; they never get past loading.
    assert_eq!(
        Graph::from_parts(nodes(), vec![edge("e1-2"), edge("e1-2")]),
        Err(DecodeError::DuplicateEdgeId("e1-2".to_string()))
    );

    // Distinct ids connecting the same endpoints are just as unloadable.
    assert_eq!(
        Graph::from_parts(nodes(), vec![edge("e1-2"), edge("e1-2b")]),
        Err(DecodeError::DuplicateEdge {
            source_id: "1".to_string(),
            target_id: "2".to_string(),
        })
    );
}

#[test]
fn test_duplicate_branches_are_rejected_on_load() {
    let nodes = vec![
        Node::new(
            "1",
            Position::default(),
            NodeData::Trigger(TriggerData::default()),
        ),
        Node::new(
            "2",
            Position::default(),
            NodeData::Condition(ConditionData::default()),
        ),
        Node::new(
            "3",
            Position::default(),
            NodeData::Action(ActionData::default_for(ActionKind::Wait)),
        ),
        Node::new(
            "4",
            Position::default(),
            NodeData::Action(ActionData::default_for(ActionKind::Wait)),
        ),
    ];
    let edges = vec![
        Edge {
            id: "e2-true-3".to_string(),
            source: "2".to_string(),
            target: "3".to_string(),
            source_handle: Some(Branch::True),
        },
        Edge {
            id: "e2-true-4".to_string(),
            source: "2".to_string(),
            target: "4".to_string(),
            source_handle: Some(Branch::True),
        },
    ];

    assert_eq!(
        Graph::from_parts(nodes, edges),
        Err(DecodeError::DuplicateBranch {
            node_id: "2".to_string(),
            branch: Branch::True,
        })
    );
}

#[test]
fn test_validate_collects_every_blocker() {
    let mut graph = graph_with_trigger();
    add_action(&mut graph, "2", send_email(None));
    add_action(
        &mut graph,
        "3",
        ActionData::CreateTask {
            task_title: "  ".to_string(),
        },
    );
    add_action(&mut graph, "4", ActionData::Wait { days: 0 });

    let blockers = validate(&graph).expect_err("three actions and the audience are incomplete");
    assert_eq!(blockers.len(), 4);
    assert!(blockers.contains(&SaveBlocker::EmptyAudience));
    assert!(blockers.contains(&SaveBlocker::MissingEmailTemplate("2".to_string())));
    assert!(blockers.contains(&SaveBlocker::EmptyTaskTitle("3".to_string())));
    assert!(blockers.contains(&SaveBlocker::ZeroWaitDays("4".to_string())));
}

#[test]
fn test_custom_condition_requires_a_field() {
    let mut graph = ready_graph();
    add_condition(&mut graph, "3");
    graph
        .update_node_data(
            "3",
            DataPatch::Condition(ConditionPatch::condition_type(ConditionType::Custom)),
        )
        .expect("patch applies");

    let blockers = validate(&graph).expect_err("custom condition lacks a field");
    assert_eq!(
        blockers,
        vec![SaveBlocker::MissingConditionField("3".to_string())]
    );

    graph
        .update_node_data("3", DataPatch::Condition(ConditionPatch::field("status")))
        .expect("patch applies");
    assert!(validate(&graph).is_ok());
}

#[test]
fn test_blocked_save_never_reaches_the_adapter() {
    // An unset audience filter blocks the save locally; no request is made.
    let graph = graph_with_trigger();
    let mut adapter = RecordingAdapter::default();
    let mut gate = SaveGate::new();

    let err = gate
        .save_with(&mut adapter, "Draft", &graph)
        .expect_err("validation blocks the save");
    assert!(matches!(err, SaveError::Invalid(_)));
    assert!(adapter.saves.is_empty());
    assert!(!gate.is_in_flight());
}

#[test]
fn test_successful_save_delivers_the_payload() {
    let graph = ready_graph();
    let mut adapter = RecordingAdapter::default();
    let mut gate = SaveGate::new();

    let record = gate
        .save_with(&mut adapter, "Welcome journey", &graph)
        .expect("save succeeds");
    assert_eq!(record.id, "rec-1");
    assert_eq!(adapter.saves.len(), 1);
    assert_eq!(adapter.saves[0].name, "Welcome journey");
    assert_eq!(adapter.saves[0].nodes.len(), graph.nodes().len());
    assert!(!gate.is_in_flight());
}

#[test]
fn test_at_most_one_save_in_flight() {
    let graph = ready_graph();
    let mut gate = SaveGate::new();

    let _payload = gate.begin("J", &graph).expect("first save starts");
    assert!(gate.is_in_flight());
    assert_eq!(gate.begin("J", &graph), Err(SaveError::AlreadyInFlight));

    gate.complete(Ok(SavedRecord {
        id: "rec-9".to_string(),
        updated_at: "2024-04-02T10:00:00Z".to_string(),
    }))
    .expect("completion clears the gate");
    assert!(!gate.is_in_flight());
    assert!(gate.begin("J", &graph).is_ok());
}

#[test]
fn test_transport_failure_surfaces_and_clears_the_gate() {
    let graph = ready_graph();
    let mut adapter = RecordingAdapter {
        fail_next: true,
        ..RecordingAdapter::default()
    };
    let mut gate = SaveGate::new();

    let err = gate
        .save_with(&mut adapter, "J", &graph)
        .expect_err("transport fails");
    assert_eq!(err, SaveError::Transport("network down".to_string()));
    // The gate is reusable and the unsaved graph is untouched for a retry.
    assert!(!gate.is_in_flight());
    assert!(gate.save_with(&mut adapter, "J", &graph).is_ok());
}

#[test]
fn test_complete_without_begin_is_an_error() {
    let mut gate = SaveGate::new();
    assert_eq!(
        gate.complete(Err(TransportError("late".to_string()))),
        Err(SaveError::NotInFlight)
    );
}
