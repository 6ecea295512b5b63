//! Localized replies and the escalation protocol.

use std::sync::Arc;

use kheti_guru::assistant::{Assistant, ExpertContact, ReplyAction, Topic, TopicMatcher};
use kheti_guru::i18n::{Catalog, Language, Localizer};

fn localizer(lang: Language) -> Localizer {
    let catalog = Arc::new(Catalog::embedded().expect("built-in locales should parse"));
    let mut loc = Localizer::in_memory(catalog);
    loc.set_active_language(lang);
    loc
}

/// What: Escalation replies carry the follow-up and contact links
#[test]
fn escalation_offers_expert() {
    let loc = localizer(Language::En);
    let assistant = Assistant::new(
        TopicMatcher::chat(),
        ExpertContact {
            phone: "+91 1551".to_string(),
            whatsapp: "+91 98765 43210".to_string(),
        },
    );
    let reply = assistant.respond(&loc, "Is crop insurance legal here?");
    // "crop" is a domain keyword, so this is a crop question.
    assert_eq!(reply.topic, Topic::Crop);

    let reply = assistant.respond(&loc, "Is my insurance claim legal?");
    assert_eq!(reply.topic, Topic::ExpertEscalation);
    assert_eq!(
        reply.follow_up.as_deref(),
        Some(loc.t("assistant.expertSuggestion").as_str())
    );
    match reply.action {
        Some(ReplyAction::OfferExpert { call_uri, chat_uri }) => {
            assert_eq!(call_uri, "tel:+91 1551");
            assert!(chat_uri.starts_with("https://wa.me/919876543210?text="));
        }
        other => panic!("expected expert offer, got {other:?}"),
    }
}

/// What: Replies follow the active language and fall back to English
#[test]
fn replies_follow_language_with_fallback() {
    let assistant = Assistant::default();

    let hi = assistant.respond(&localizer(Language::Hi), "पानी कितना दें?");
    assert_eq!(hi.topic, Topic::Water);
    assert!(hi.message.contains("मिट्टी की नमी"));

    let en = assistant.respond(&localizer(Language::En), "water");
    let ta = assistant.respond(&localizer(Language::Ta), "water");
    assert_eq!(ta.message, en.message);
}

/// What: Camera questions ask the caller to open the camera
#[test]
fn camera_reply_requests_camera() {
    let reply = Assistant::default().respond(&localizer(Language::En), "Can I upload a photo?");
    assert_eq!(reply.topic, Topic::Camera);
    assert_eq!(reply.action, Some(ReplyAction::OpenCamera));
    assert!(reply.follow_up.is_none());
}

/// What: Replies serialize with kebab-case topic ids and tagged actions
#[test]
fn reply_serializes_to_json() {
    let reply = Assistant::default().respond(&localizer(Language::En), "strange disease");
    let json = serde_json::to_value(&reply).expect("reply should serialize");
    assert_eq!(json["topic"], "expert-escalation");
    assert_eq!(json["action"]["kind"], "offer-expert");
}
