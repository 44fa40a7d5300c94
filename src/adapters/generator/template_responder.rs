//! Template Responder Adapter
//!
//! Implements the generation port with the local classifier + template
//! engine: classify the message, render the category's canned report.

use async_trait::async_trait;
use tracing::debug;

use crate::domain::decision::{classify, render, GeneratedReply};
use crate::ports::{GenerationError, GenerationRequest, ResponseGenerator};

/// Local generator backed by the template engine.
#[derive(Debug, Clone, Default)]
pub struct TemplateResponder;

impl TemplateResponder {
    /// Create a new template responder.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ResponseGenerator for TemplateResponder {
    async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedReply, GenerationError> {
        let decision_type = classify(&request.message);
        debug!(%decision_type, "classified message");
        Ok(render(decision_type, &request.message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn career_message_yields_career_report() {
        let responder = TemplateResponder::new();
        let request =
            GenerationRequest::new("我应该接受这个薪资更高的新工作吗？", &[], None);

        let reply = responder.generate(&request).await.unwrap();

        assert!(reply.report_markdown.contains("Career Decision Analysis"));
        assert_eq!(reply.analysis.recommendation.confidence.value(), 75);
        assert_eq!(reply.analysis.alternatives.len(), 2);
    }

    #[tokio::test]
    async fn financial_message_yields_financial_report() {
        let responder = TemplateResponder::new();
        let request = GenerationRequest::new("如何制定我的投资计划？", &[], None);

        let reply = responder.generate(&request).await.unwrap();
        assert!(reply.report_markdown.contains("Financial Decision Analysis"));
    }

    #[tokio::test]
    async fn unrecognized_message_echoes_input_in_general_report() {
        let responder = TemplateResponder::new();
        let request = GenerationRequest::new("asdf", &[], None);

        let reply = responder.generate(&request).await.unwrap();
        assert!(reply.report_markdown.contains("General Decision Analysis"));
        assert!(reply.report_markdown.contains("asdf"));
    }

    #[tokio::test]
    async fn identical_requests_yield_identical_replies() {
        let responder = TemplateResponder::new();
        let request = GenerationRequest::new("new job offer", &[], None);

        let first = responder.generate(&request).await.unwrap();
        let second = responder.generate(&request).await.unwrap();
        assert_eq!(first, second);
    }
}
