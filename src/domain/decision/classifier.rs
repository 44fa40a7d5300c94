//! Keyword-based decision classifier.
//!
//! Pure and total: every input maps to exactly one [`DecisionType`], with
//! `General` as the fallback. Categories are checked in a fixed priority
//! order, so an input carrying markers for two categories classifies as the
//! higher-priority one.

use super::DecisionType;

/// Marker substrings per category, scanned case-insensitively.
///
/// The marker lists carry both English and Chinese terms since user input
/// arrives in either language.
const CAREER_MARKERS: &[&str] = &[
    "job", "work", "career", "offer", "salary", "promotion", "resign",
    "工作", "职业", "薪资", "升职", "跳槽", "辞职",
];

const FINANCIAL_MARKERS: &[&str] = &[
    "invest", "money", "savings", "fund", "stock", "budget", "loan",
    "投资", "理财", "存款", "基金", "股票", "贷款",
];

const RELATIONSHIP_MARKERS: &[&str] = &[
    "partner", "breakup", "family", "friend", "marriage", "relationship",
    "恋爱", "分手", "家庭", "朋友", "婚姻", "关系",
];

const HEALTH_MARKERS: &[&str] = &[
    "treatment", "doctor", "diagnosis", "symptom", "surgery", "health",
    "治疗", "医生", "诊断", "症状", "手术", "健康",
];

/// Categories with their markers, in priority order.
const PRIORITY: &[(DecisionType, &[&str])] = &[
    (DecisionType::Career, CAREER_MARKERS),
    (DecisionType::Financial, FINANCIAL_MARKERS),
    (DecisionType::Relationship, RELATIONSHIP_MARKERS),
    (DecisionType::Health, HEALTH_MARKERS),
];

/// Maps free-text input to a decision category.
///
/// Returns the first category (career, financial, relationship, health) with
/// at least one marker found in the input, or `General` when none match.
pub fn classify(text: &str) -> DecisionType {
    let haystack = text.to_lowercase();
    for (decision_type, markers) in PRIORITY {
        if markers.iter().any(|marker| haystack.contains(marker)) {
            return *decision_type;
        }
    }
    DecisionType::General
}
