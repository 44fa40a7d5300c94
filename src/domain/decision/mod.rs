//! Decision module - classification categories, analysis types, and the
//! canned-report template engine.

mod analysis;
mod classifier;
mod context;
mod decision_type;
mod templates;

pub use analysis::{Alternative, DecisionAnalysis, Recommendation, Swot, TimelinePlan};
pub use classifier::classify;
pub use context::{DecisionContext, Level};
pub use decision_type::DecisionType;
pub use templates::{render, GeneratedReply, DEFAULT_CONFIDENCE, DEFAULT_KEY_ELEMENTS};
