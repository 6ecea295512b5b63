//! Turning a classified question into a localized canned reply.

use serde::Serialize;

use super::matcher::TopicMatcher;
use super::topic::Topic;
use crate::i18n::Localizer;

/// Catalog key of the opening greeting.
pub const GREETING_KEY: &str = "assistant.greeting";
/// Catalog key of the follow-up that offers a human expert.
pub const EXPERT_SUGGESTION_KEY: &str = "assistant.expertSuggestion";

/// Default agriculture helpline, in E.164 form.
pub const DEFAULT_EXPERT_PHONE: &str = "+911800123456";
/// Default `WhatsApp` number for expert chat (digits only, as `wa.me` expects).
pub const DEFAULT_EXPERT_WHATSAPP: &str = "911800123456";
/// Message pre-filled when the user opens the expert chat.
const EXPERT_CHAT_MESSAGE: &str = "Hello, I need expert agricultural advice. My AI assistant referred me for complex farming questions.";

/// Where the escalation affordance sends the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpertContact {
    /// Phone number dialled by "Call Expert".
    pub phone: String,
    /// `WhatsApp` number used by "Chat with Expert".
    pub whatsapp: String,
}

impl Default for ExpertContact {
    fn default() -> Self {
        Self {
            phone: DEFAULT_EXPERT_PHONE.to_string(),
            whatsapp: DEFAULT_EXPERT_WHATSAPP.to_string(),
        }
    }
}

impl ExpertContact {
    /// `tel:` link for the helpline.
    #[must_use]
    pub fn call_uri(&self) -> String {
        format!("tel:{}", self.phone)
    }

    /// `wa.me` deep link with the pre-filled message.
    #[must_use]
    pub fn chat_uri(&self) -> String {
        let digits: String = self.whatsapp.chars().filter(char::is_ascii_digit).collect();
        format!("https://wa.me/{digits}?text={}", encode_query(EXPERT_CHAT_MESSAGE))
    }
}

/// Percent-encode a query value (unreserved characters kept, space as `%20`).
fn encode_query(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 3);
    for byte in text.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            out.push(char::from(byte));
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

/// UI side effect requested alongside a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ReplyAction {
    /// Switch to the camera view for a photo-based check.
    OpenCamera,
    /// Show "Call Expert" / "Chat with Expert" buttons.
    OfferExpert {
        /// `tel:` link.
        call_uri: String,
        /// Chat deep link.
        chat_uri: String,
    },
}

/// Assistant answer for one question.
///
/// Present `message` first. If `follow_up` is set, present it after a short
/// pause, together with `action`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reply {
    /// Topic the question was classified as.
    pub topic: Topic,
    /// Immediate canned answer in the active language.
    pub message: String,
    /// Secondary prompt offering a human expert.
    pub follow_up: Option<String>,
    /// Requested UI action, if any.
    pub action: Option<ReplyAction>,
}

/// Mock farming assistant: keyword classification plus canned replies.
#[derive(Debug, Clone, Default)]
pub struct Assistant {
    matcher: TopicMatcher,
    contact: ExpertContact,
}

impl Assistant {
    /// Create an assistant from a matcher and expert contact details.
    #[must_use]
    pub const fn new(matcher: TopicMatcher, contact: ExpertContact) -> Self {
        Self { matcher, contact }
    }

    /// Opening message in the active language.
    #[must_use]
    pub fn greeting(&self, loc: &Localizer) -> String {
        loc.t(GREETING_KEY)
    }

    /// What: Answer a user question.
    ///
    /// Inputs:
    /// - `loc`: Localizer providing the active language
    /// - `text`: Non-blank user question
    ///
    /// Output:
    /// - `Reply` with the canned message for the classified topic
    ///
    /// Details:
    /// - `ExpertEscalation` adds the expert follow-up and contact links
    /// - `Camera` asks the UI to open the camera
    #[must_use]
    pub fn respond(&self, loc: &Localizer, text: &str) -> Reply {
        let topic = self.matcher.classify(text);
        tracing::debug!(topic = %topic, language = %loc.active_language(), "Classified question");
        self.reply_for(loc, topic)
    }

    /// What: Build the reply for an already classified topic.
    #[must_use]
    pub fn reply_for(&self, loc: &Localizer, topic: Topic) -> Reply {
        let message = loc.t(&topic.reply_key());
        let (follow_up, action) = match topic {
            t if t.needs_expert() => (
                Some(loc.t(EXPERT_SUGGESTION_KEY)),
                Some(ReplyAction::OfferExpert {
                    call_uri: self.contact.call_uri(),
                    chat_uri: self.contact.chat_uri(),
                }),
            ),
            Topic::Camera => (None, Some(ReplyAction::OpenCamera)),
            _ => (None, None),
        };
        Reply {
            topic,
            message,
            follow_up,
            action,
        }
    }
}
