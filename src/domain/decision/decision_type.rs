//! Decision category enum used to select a report template.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed category set for decision classification.
///
/// `General` is the mandatory fallback when no category markers match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionType {
    Career,
    Financial,
    Relationship,
    Health,
    General,
}

impl DecisionType {
    /// All categories in classifier priority order, fallback last.
    pub const ALL: [DecisionType; 5] = [
        DecisionType::Career,
        DecisionType::Financial,
        DecisionType::Relationship,
        DecisionType::Health,
        DecisionType::General,
    ];
}

impl fmt::Display for DecisionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DecisionType::Career => "career",
            DecisionType::Financial => "financial",
            DecisionType::Relationship => "relationship",
            DecisionType::Health => "health",
            DecisionType::General => "general",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_to_snake_case() {
        assert_eq!(
            serde_json::to_string(&DecisionType::Career).unwrap(),
            "\"career\""
        );
        assert_eq!(
            serde_json::to_string(&DecisionType::General).unwrap(),
            "\"general\""
        );
    }

    #[test]
    fn displays_lowercase_name() {
        assert_eq!(DecisionType::Financial.to_string(), "financial");
    }

    #[test]
    fn all_lists_fallback_last() {
        assert_eq!(DecisionType::ALL.last(), Some(&DecisionType::General));
    }
}
