use super::Comparator;
use serde::{Deserialize, Serialize};

/// Which comparison a condition node performs at execution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConditionType {
    /// Did the contact open the previously sent email? No field needed.
    #[default]
    IfEmailOpened,
    /// Compare an arbitrary contact field against a value.
    Custom,
}

/// Payload of a condition node, discriminated by `conditionType` on the
/// wire. The comparison decides which outgoing branch (true/false) the
/// automation runtime follows; this crate only edits it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionData {
    pub condition_type: ConditionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    #[serde(default)]
    pub operator: Comparator,
    #[serde(default)]
    pub value: serde_json::Value,
}

/// Partial edit of a condition payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConditionPatch {
    pub condition_type: Option<ConditionType>,
    pub field: Option<Option<String>>,
    pub operator: Option<Comparator>,
    pub value: Option<serde_json::Value>,
}

impl ConditionPatch {
    pub fn condition_type(condition_type: ConditionType) -> Self {
        Self {
            condition_type: Some(condition_type),
            ..Self::default()
        }
    }

    pub fn field(field: impl Into<String>) -> Self {
        Self {
            field: Some(Some(field.into())),
            ..Self::default()
        }
    }

    pub fn operator(operator: Comparator) -> Self {
        Self {
            operator: Some(operator),
            ..Self::default()
        }
    }

    pub fn value(value: serde_json::Value) -> Self {
        Self {
            value: Some(value),
            ..Self::default()
        }
    }

    pub(crate) fn apply(self, data: &mut ConditionData) {
        if let Some(condition_type) = self.condition_type {
            // The email-opened check compares a tracked event, not a contact
            // field; a leftover custom field would be stale data.
            if condition_type != data.condition_type
                && condition_type == ConditionType::IfEmailOpened
            {
                data.field = None;
            }
            data.condition_type = condition_type;
        }
        if let Some(field) = self.field {
            data.field = field;
        }
        if let Some(operator) = self.operator {
            data.operator = operator;
        }
        if let Some(value) = self.value {
            data.value = value;
        }
    }
}
