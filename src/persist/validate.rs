use crate::error::SaveBlocker;
use crate::graph::Graph;
use crate::node::{ActionData, ConditionType, NodeData};

/// The page-level pre-save check.
///
/// Required-field validation happens only here, never while editing: a
/// half-configured node is a normal editing state. Every blocker is
/// collected so the save notification can list them all.
///
/// Dangling references to external resources (e.g. an email template that
/// was deleted after being selected) are deliberately not checked; they
/// are a display-time concern.
pub fn validate(graph: &Graph) -> Result<(), Vec<SaveBlocker>> {
    let mut blockers = Vec::new();

    match graph.trigger().map(|node| &node.data) {
        Some(NodeData::Trigger(data)) if !data.audience().is_empty() => {}
        _ => blockers.push(SaveBlocker::EmptyAudience),
    }

    for node in graph.nodes() {
        match &node.data {
            NodeData::Action(ActionData::SendEmail { email_template_id }) => {
                if email_template_id.as_deref().is_none_or(str::is_empty) {
                    blockers.push(SaveBlocker::MissingEmailTemplate(node.id.clone()));
                }
            }
            NodeData::Action(ActionData::Wait { days: 0 }) => {
                blockers.push(SaveBlocker::ZeroWaitDays(node.id.clone()));
            }
            NodeData::Action(ActionData::CreateTask { task_title }) => {
                if task_title.trim().is_empty() {
                    blockers.push(SaveBlocker::EmptyTaskTitle(node.id.clone()));
                }
            }
            NodeData::Action(ActionData::UpdateField { field, .. }) => {
                if field.trim().is_empty() {
                    blockers.push(SaveBlocker::MissingUpdateField(node.id.clone()));
                }
            }
            NodeData::Action(ActionData::Webhook { url, .. }) => {
                if url.trim().is_empty() {
                    blockers.push(SaveBlocker::MissingWebhookUrl(node.id.clone()));
                }
            }
            NodeData::Condition(data) if data.condition_type == ConditionType::Custom => {
                if data.field.as_deref().is_none_or(|f| f.trim().is_empty()) {
                    blockers.push(SaveBlocker::MissingConditionField(node.id.clone()));
                }
            }
            _ => {}
        }
    }

    if blockers.is_empty() {
        Ok(())
    } else {
        Err(blockers)
    }
}
