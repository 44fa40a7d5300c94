//! Generator adapters for the response-generation port.

mod template_responder;

pub use template_responder::TemplateResponder;
