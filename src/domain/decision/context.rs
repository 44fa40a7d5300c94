//! Optional classification metadata attached to a session or request.

use serde::{Deserialize, Serialize};

use super::DecisionType;

/// Three-step scale used for urgency, impact, and alternative risk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Low,
    Medium,
    High,
}

/// Classification metadata for a decision under discussion.
///
/// Consumed when present but not required for core operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionContext {
    pub decision_type: DecisionType,
    pub urgency: Level,
    pub impact: Level,
    pub factors: Vec<String>,
    pub constraints: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub timeline: Option<String>,
}
