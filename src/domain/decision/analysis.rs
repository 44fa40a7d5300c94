//! Structured analysis summary accompanying a generated report.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Percentage;

use super::Level;

/// Structured summary of a decision analysis.
///
/// SWOT and timeline are optional on the wire; recommendation and
/// alternatives are always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionAnalysis {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub swot: Option<Swot>,
    pub alternatives: Vec<Alternative>,
    pub recommendation: Recommendation,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub timeline: Option<TimelinePlan>,
}

/// Strengths/weaknesses/opportunities/threats breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Swot {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub opportunities: Vec<String>,
    pub threats: Vec<String>,
}

/// One alternative option with its trade-offs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alternative {
    pub option: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub risk: Level,
}

/// The recommended choice with confidence and action steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub choice: String,
    pub confidence: Percentage,
    pub reason: String,
    pub action_steps: Vec<String>,
}

/// Immediate/short-term/long-term action horizon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelinePlan {
    pub immediate: Vec<String>,
    pub short_term: Vec<String>,
    pub long_term: Vec<String>,
}
