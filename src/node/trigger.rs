use super::Comparator;
use serde::{Deserialize, Serialize};

/// Payload of the trigger node: who enters the automation.
///
/// Currently the only trigger type is an audience filter
/// (`nodeType: "targetAudience"` on the wire); the tagged representation
/// leaves room for event-based triggers later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "nodeType", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum TriggerData {
    TargetAudience { target_audience: AudienceFilter },
}

impl TriggerData {
    pub fn audience(&self) -> &AudienceFilter {
        match self {
            TriggerData::TargetAudience { target_audience } => target_audience,
        }
    }

    pub fn audience_mut(&mut self) -> &mut AudienceFilter {
        match self {
            TriggerData::TargetAudience { target_audience } => target_audience,
        }
    }
}

impl Default for TriggerData {
    fn default() -> Self {
        TriggerData::TargetAudience {
            target_audience: AudienceFilter::default(),
        }
    }
}

/// Criteria selecting which contacts enter the journey.
///
/// An empty filter is a valid editing state but blocks saving.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudienceFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ContactStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lead_score: Option<LeadScoreFilter>,
}

impl AudienceFilter {
    /// True when no criterion has been set yet.
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.lead_score.is_none()
    }
}

/// CRM contact lifecycle stage matched by status equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    Lead,
    Prospect,
    Customer,
    Churned,
}

/// Numeric comparator + threshold applied to a contact's lead score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadScoreFilter {
    pub comparator: Comparator,
    pub threshold: i64,
}

/// Partial edit of the trigger's audience filter.
///
/// The outer `Option` marks whether the field was edited at all; the inner
/// one carries the new value, with `None` meaning "clear the criterion".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TriggerPatch {
    pub status: Option<Option<ContactStatus>>,
    pub lead_score: Option<Option<LeadScoreFilter>>,
}

impl TriggerPatch {
    pub fn status(status: ContactStatus) -> Self {
        Self {
            status: Some(Some(status)),
            ..Self::default()
        }
    }

    pub fn clear_status() -> Self {
        Self {
            status: Some(None),
            ..Self::default()
        }
    }

    pub fn lead_score(comparator: Comparator, threshold: i64) -> Self {
        Self {
            lead_score: Some(Some(LeadScoreFilter {
                comparator,
                threshold,
            })),
            ..Self::default()
        }
    }

    pub fn clear_lead_score() -> Self {
        Self {
            lead_score: Some(None),
            ..Self::default()
        }
    }

    pub(crate) fn apply(self, filter: &mut AudienceFilter) {
        if let Some(status) = self.status {
            filter.status = status;
        }
        if let Some(lead_score) = self.lead_score {
            filter.lead_score = lead_score;
        }
    }
}
