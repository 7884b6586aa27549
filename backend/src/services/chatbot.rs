//! WhatsApp chatbot service
//!
//! Wraps the shared command grammar and renders replies as TwiML, the XML
//! envelope the messaging gateway expects. The reply text itself comes from
//! the same estimator the HTTP API uses, so both surfaces quote the same
//! numbers.

use shared::command::CommandResponder;
use shared::estimator::YieldEstimator;

/// Chatbot service for the messaging webhook
#[derive(Debug, Clone)]
pub struct ChatbotService {
    responder: CommandResponder,
}

impl ChatbotService {
    pub fn new(estimator: YieldEstimator) -> Self {
        Self {
            responder: CommandResponder::new(estimator),
        }
    }

    /// Plain-text reply for an incoming message body
    pub fn reply_text(&self, body: &str) -> String {
        self.responder.reply(body)
    }

    /// Full TwiML response document for an incoming message body
    pub fn reply_twiml(&self, body: &str) -> String {
        render_twiml(&self.reply_text(body))
    }
}

/// Wrap a message in a TwiML `<Response><Message>` envelope
pub fn render_twiml(message: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response><Message>{}</Message></Response>",
        escape_xml(message)
    )
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::catalog::SoilDistrictCatalog;

    fn service() -> ChatbotService {
        ChatbotService::new(YieldEstimator::new(SoilDistrictCatalog::canonical()))
    }

    #[test]
    fn yield_reply_is_wrapped_in_twiml() {
        assert_eq!(
            service().reply_twiml("yield Lucknow 5 alluvial"),
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?><Response><Message>Predicted yield: 518 quintals</Message></Response>"
        );
    }

    #[test]
    fn reply_text_is_escaped_in_the_envelope() {
        let twiml = service().reply_twiml("help");
        assert!(twiml.contains("Send &quot;yield &lt;district&gt; &lt;area&gt; &lt;soil&gt;&quot;"));
        assert!(!twiml.contains("<district>"));
    }

    #[test]
    fn greeting_for_unrecognized_messages() {
        let twiml = service().reply_twiml("namaste");
        assert!(twiml.contains("Hi! Send &quot;help&quot;"));
    }
}
