//! Template response engine.
//!
//! A stateless dispatch table keyed by [`DecisionType`]: exactly one static
//! markdown body per category. The only per-call variation is the key-element
//! extraction from the raw input (career template) and verbatim inclusion of
//! the raw input (general template). Pure and total, no I/O.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::foundation::Percentage;

use super::{Alternative, DecisionAnalysis, DecisionType, Level, Recommendation};

/// Confidence attached to every canned recommendation.
pub const DEFAULT_CONFIDENCE: u8 = 75;

/// Phrase substituted when no key elements are found in the input.
pub const DEFAULT_KEY_ELEMENTS: &str = "important life choice";

/// Salient tokens extracted from the raw input: percentages plus domain words.
static KEY_ELEMENTS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\d+%|salary|job|offer|choice|decide|should|whether|薪资|工作|机会|选择|决定|应该|是否|要不要",
    )
    .expect("key-element pattern is valid")
});

/// A generated report plus its structured analysis summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedReply {
    pub report_markdown: String,
    pub analysis: DecisionAnalysis,
}

/// Renders the category's report template against the raw input.
pub fn render(decision_type: DecisionType, raw_input: &str) -> GeneratedReply {
    let report_markdown = match decision_type {
        DecisionType::Career => career_report(raw_input),
        DecisionType::Financial => financial_report(),
        DecisionType::Relationship => relationship_report(),
        DecisionType::Health => health_report(),
        DecisionType::General => general_report(raw_input),
    };

    GeneratedReply {
        report_markdown,
        analysis: default_analysis(),
    }
}

/// Joins all salient tokens found in the input, in order of appearance.
fn extract_key_elements(input: &str) -> String {
    let matches: Vec<&str> = KEY_ELEMENTS.find_iter(input).map(|m| m.as_str()).collect();
    if matches.is_empty() {
        DEFAULT_KEY_ELEMENTS.to_string()
    } else {
        matches.join(", ")
    }
}

/// The fixed-shape analysis summary shipped with every report.
fn default_analysis() -> DecisionAnalysis {
    DecisionAnalysis {
        swot: None,
        alternatives: vec![
            Alternative {
                option: "Option A".to_string(),
                pros: vec!["Advantage 1".to_string(), "Advantage 2".to_string()],
                cons: vec!["Drawback 1".to_string(), "Drawback 2".to_string()],
                risk: Level::Medium,
            },
            Alternative {
                option: "Option B".to_string(),
                pros: vec!["Advantage 1".to_string(), "Advantage 2".to_string()],
                cons: vec!["Drawback 1".to_string(), "Drawback 2".to_string()],
                risk: Level::Low,
            },
        ],
        recommendation: Recommendation {
            choice: "The option the analysis favors".to_string(),
            confidence: Percentage::new(DEFAULT_CONFIDENCE),
            reason: "Core rationale from the combined assessment".to_string(),
            action_steps: vec![
                "Step 1: gather more information".to_string(),
                "Step 2: draft a detailed plan".to_string(),
                "Step 3: execute and monitor".to_string(),
            ],
        },
        timeline: None,
    }
}

fn career_report(raw_input: &str) -> String {
    format!(
        r#"## Career Decision Analysis

### 1. Problem Framing
Key decision elements identified from your description:
- **Core conflict**: {key_elements}
- **Time pressure**: moderate (decide within 2-4 weeks)
- **Scope of impact**: career trajectory

### 2. SWOT Analysis

**Strengths**
- Existing experience and skill base
- Deep understanding of the industry
- Established professional network

**Weaknesses**
- Adaptation cost of a new environment
- Potential skill gaps
- Relationships to rebuild

**Opportunities**
- Financial uplift from higher compensation
- New skills and experience
- Expanded professional network

**Threats**
- Probation-period uncertainty
- Company-culture fit risk
- Work-life balance disruption

### 3. Decision Scoring Matrix

| Dimension | Weight | Current role | New opportunity |
|-----------|--------|--------------|-----------------|
| Compensation | 25% | 7/10 | 9/10 |
| Career growth | 25% | 6/10 | 8/10 |
| Job satisfaction | 20% | 8/10 | 7/10 |
| Location convenience | 15% | 9/10 | 5/10 |
| Company culture | 15% | 7/10 | 6/10 |
| **Weighted total** | **100%** | **7.2** | **7.3** |

### 4. Scenario Projections

**Best case (30% likely)**: fast adaptation, strong performance within three
months, valuable new network, foundation for the next two to three years.

**Worst case (20% likely)**: difficult cultural fit, living-cost increases
offset the raise, another move considered within a year.

**Realistic case (50% likely)**: three to six months of adjustment, the raise
genuinely improves quality of life, moderate skill growth.

### 5. Recommendation

**Recommended choice: accept the new opportunity**

**Confidence: 75%**

**Core reasons:**
1. Long-term career value outweighs short-term adaptation cost
2. Compounding benefit of the compensation increase
3. A new environment forces skill and network growth

### 6. 30-Day Action Plan

- Week 1: negotiate the offer and research the new team
- Week 2: plan the handover and the transition logistics
- Weeks 3-4: start, establish a routine, set 3- and 6-month checkpoints

Remember: there is no perfect decision, only the best choice given current
information. Keep a learning mindset and any choice can produce growth.
"#,
        key_elements = extract_key_elements(raw_input)
    )
}

fn financial_report() -> String {
    r#"## Financial Decision Analysis

### 1. Investment Framing
Assumed financial position:
- Investable assets: estimated from your description
- Risk tolerance: moderate
- Horizon: long term (3-5 years)

### 2. Risk/Return Comparison

| Option | Expected annual return | Risk | Liquidity | Suggested allocation |
|--------|------------------------|------|-----------|----------------------|
| Conservative savings | 2-3% | Low | High | 20-30% |
| Index funds | 6-8% | Medium | Medium | 40-50% |
| Individual stocks | 8-12% | High | Medium | 10-20% |
| Bond funds | 4-5% | Low-medium | Medium | 20-30% |

### 3. Scenario Stress Test

**Market drops 30%**: expected portfolio drawdown of 15-20%; assess your
tolerance and prepare a plan for adding on weakness.

### 4. Tax Considerations
- Use available tax-free allowances
- Prefer long-term holdings for favorable treatment
- Stagger entry points to reduce timing risk

### 5. Recommendation

**Confidence: 75%**

1. **Emergency fund first**: keep six months of living costs aside
2. **Diversify**: never put everything into a single option
3. **Review quarterly**: rebalance on a schedule, not on mood
4. **Stay long term**: ignore short-term market noise
"#
    .to_string()
}

fn relationship_report() -> String {
    r#"## Relationship Decision Analysis

### 1. Current State Assessment
Relationship health check:
- Communication quality
- Alignment of values
- Balance of emotional investment
- Consistency of future plans

### 2. Impact Projection

**Short term**: emotional swings, social-circle changes, daily routine shifts.

**Long term**: personal growth trajectory, future relationship patterns,
self-understanding.

### 3. Communication Strategy
Pick a moment when both sides are calm and have time for a real conversation.

- Use "I feel" statements
- Avoid accusatory language
- Set clear boundaries
- Leave room for the other side to speak

### 4. Self-Care Plan
Whatever you decide:
- Keep your support network close
- Maintain healthy routines
- Give yourself time to adjust
- Seek professional support if needed

### 5. Recommendation

**Confidence: 75%**

1. **Reflect**: name your real needs and hard limits
2. **Prepare**: rehearse the likely conversation paths
3. **Support**: tell a trusted friend or family member
4. **Follow up**: set a checkpoint to reassess
"#
    .to_string()
}

fn health_report() -> String {
    r#"## Health Decision Analysis

### 1. Medical Decision Framing
Decision elements:
- Effectiveness of each treatment option
- Risks and side effects
- Quality-of-life impact
- Financial cost

### 2. Evidence Review
Compare options against current medical research and clinical data.

### 3. Second-Opinion Checklist
Questions to put to your doctor:
1. Success rate and expected outcome
2. Possible complications and risks
3. Alternative treatments
4. Consequences of no treatment
5. Recovery period and quality-of-life impact

### 4. Support System
- Choice of medical team
- Family and friend support
- Mental-health resources

### 5. Recommendation

**Confidence: 75%**

Use decision aids before committing:
- A risk/benefit trade-off table
- A quality-of-life assessment scale
- A regret-minimization check
"#
    .to_string()
}

fn general_report(raw_input: &str) -> String {
    format!(
        r#"## General Decision Analysis

### 1. Problem Structuring
**Core decision:**
{raw_input}

**Key elements:**
- Clarity of the goal
- Identified constraints
- Definition of success

### 2. Information Gathering
List what you already know, then name the missing facts that would change
the decision.

### 3. Option Generation (SCAMPER)
- **Substitute**: what could be replaced?
- **Combine**: can options be merged?
- **Adapt**: what could be adjusted to fit?
- **Modify**: which aspects could change?
- **Put to other uses**: any other purpose?
- **Eliminate**: can it be simplified?
- **Rearrange**: what about a different order?

### 4. Decision Matrix
Define evaluation criteria and score each option against them.

### 5. Recommendation

**Confidence: 75%**

- Set SMART goals for the chosen path
- Build a feedback loop
- Plan how you will adjust course
"#,
        raw_input = raw_input
    )
}
