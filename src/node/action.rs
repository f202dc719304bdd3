use super::PatchMismatch;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminant of the action payload variants, used by the toolbox and the
/// action editor's type selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionKind {
    SendEmail,
    Wait,
    CreateTask,
    UpdateField,
    Webhook,
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionKind::SendEmail => "sendEmail",
            ActionKind::Wait => "wait",
            ActionKind::CreateTask => "createTask",
            ActionKind::UpdateField => "updateField",
            ActionKind::Webhook => "webhook",
        };
        write!(f, "{}", name)
    }
}

/// Payload of an action node, tagged by `nodeType` on the wire.
///
/// Each variant owns exactly the fields its editor renders; switching the
/// variant is how stale cross-type data is prevented.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "nodeType", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ActionData {
    SendEmail {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        email_template_id: Option<String>,
    },
    Wait {
        #[serde(default = "default_wait_days")]
        days: u32,
    },
    CreateTask {
        #[serde(default)]
        task_title: String,
    },
    UpdateField {
        #[serde(default)]
        field: String,
        #[serde(default)]
        value: String,
    },
    Webhook {
        #[serde(default)]
        url: String,
        #[serde(default)]
        payload_template: String,
    },
}

fn default_wait_days() -> u32 {
    1
}

impl ActionData {
    pub fn kind(&self) -> ActionKind {
        match self {
            ActionData::SendEmail { .. } => ActionKind::SendEmail,
            ActionData::Wait { .. } => ActionKind::Wait,
            ActionData::CreateTask { .. } => ActionKind::CreateTask,
            ActionData::UpdateField { .. } => ActionKind::UpdateField,
            ActionData::Webhook { .. } => ActionKind::Webhook,
        }
    }

    /// The empty payload a freshly picked action type starts from.
    pub fn default_for(kind: ActionKind) -> Self {
        match kind {
            ActionKind::SendEmail => ActionData::SendEmail {
                email_template_id: None,
            },
            ActionKind::Wait => ActionData::Wait { days: 1 },
            ActionKind::CreateTask => ActionData::CreateTask {
                task_title: String::new(),
            },
            ActionKind::UpdateField => ActionData::UpdateField {
                field: String::new(),
                value: String::new(),
            },
            ActionKind::Webhook => ActionData::Webhook {
                url: String::new(),
                payload_template: String::new(),
            },
        }
    }
}

/// Partial edit of an action payload.
///
/// `Kind` replaces the whole variant (resetting type-specific fields); the
/// field patches apply only when the payload currently is of the matching
/// variant.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionPatch {
    Kind(ActionKind),
    EmailTemplateId(Option<String>),
    WaitDays(u32),
    TaskTitle(String),
    FieldUpdate {
        field: Option<String>,
        value: Option<String>,
    },
    Webhook {
        url: Option<String>,
        payload_template: Option<String>,
    },
}

impl ActionPatch {
    pub(crate) fn apply(self, data: &mut ActionData) -> Result<(), PatchMismatch> {
        match (self, data) {
            (ActionPatch::Kind(kind), data) => {
                // Re-selecting the current type keeps its fields.
                if data.kind() != kind {
                    *data = ActionData::default_for(kind);
                }
                Ok(())
            }
            (
                ActionPatch::EmailTemplateId(template),
                ActionData::SendEmail { email_template_id },
            ) => {
                *email_template_id = template;
                Ok(())
            }
            (ActionPatch::WaitDays(new_days), ActionData::Wait { days }) => {
                *days = new_days;
                Ok(())
            }
            (ActionPatch::TaskTitle(title), ActionData::CreateTask { task_title }) => {
                *task_title = title;
                Ok(())
            }
            (
                ActionPatch::FieldUpdate {
                    field: new_field,
                    value: new_value,
                },
                ActionData::UpdateField { field, value },
            ) => {
                if let Some(new_field) = new_field {
                    *field = new_field;
                }
                if let Some(new_value) = new_value {
                    *value = new_value;
                }
                Ok(())
            }
            (
                ActionPatch::Webhook {
                    url: new_url,
                    payload_template: new_template,
                },
                ActionData::Webhook {
                    url,
                    payload_template,
                },
            ) => {
                if let Some(new_url) = new_url {
                    *url = new_url;
                }
                if let Some(new_template) = new_template {
                    *payload_template = new_template;
                }
                Ok(())
            }
            _ => Err(PatchMismatch),
        }
    }
}
