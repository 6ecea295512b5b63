//! Keyword routing through the public matcher API.

use kheti_guru::assistant::{MatcherConfigError, MatcherProfile, Topic, TopicMatcher};

/// What: Reference questions in English and Hindi route to their topics
#[test]
fn reference_questions_route_to_topics() {
    let matcher = TopicMatcher::chat();
    assert_eq!(matcher.classify("आज का मौसम कैसा है?"), Topic::Weather);
    assert_eq!(matcher.classify("How much water today?"), Topic::Water);
    assert_eq!(
        matcher.classify("my plant has a strange disease"),
        Topic::ExpertEscalation
    );
    assert_eq!(matcher.classify("hello there"), Topic::Unknown);
}

/// What: Ties between domain topics follow the documented order
///
/// - Input: Text with both weather and market keywords
/// - Output: Weather, because it is evaluated before market
#[test]
fn weather_beats_market_on_tie() {
    let matcher = TopicMatcher::chat();
    let order = matcher.evaluation_order();
    let weather = order.iter().position(|t| *t == Topic::Weather);
    let market = order.iter().position(|t| *t == Topic::Market);
    assert!(weather < market);
    assert_eq!(
        matcher.classify("weather forecast and market rates"),
        Topic::Weather
    );
    assert_eq!(matcher.classify("बाजार भाव और मौसम"), Topic::Weather);
}

/// What: Domain topics are checked before escalation keywords
#[test]
fn domain_topic_wins_over_escalation() {
    let matcher = TopicMatcher::chat();
    assert_eq!(
        matcher.classify("pest attack caused a disease emergency"),
        Topic::Pest
    );
    assert!(matcher.is_complex("pest attack caused a disease emergency"));
}

/// What: The voice profile answers expert requests with contact details
#[test]
fn voice_profile_routes_expert_requests() {
    let voice = TopicMatcher::for_profile(MatcherProfile::Voice);
    assert_eq!(voice.classify("I want to talk to an expert"), Topic::ExpertContact);
    assert_eq!(voice.classify("विशेषज्ञ से बात करनी है"), Topic::ExpertContact);
    assert_eq!(voice.classify("send a photo"), Topic::Unknown);

    let chat = TopicMatcher::for_profile(MatcherProfile::Chat);
    assert_eq!(chat.classify("send a photo"), Topic::Camera);
}

/// What: Custom YAML definitions are validated and used in order
#[test]
fn yaml_matcher_definition() {
    let yaml = r"
rules:
  - topic: market
    keywords: [Mandi, price]
  - topic: weather
    keywords: [rain]
escalation: [lawyer]
";
    let matcher = TopicMatcher::from_yaml(yaml).expect("definition should load");
    assert_eq!(matcher.classify("MANDI price after rain"), Topic::Market);
    assert_eq!(matcher.classify("need a lawyer"), Topic::ExpertEscalation);

    let bad = "rules:\n  - topic: expert-escalation\n    keywords: [x]\n";
    assert!(matches!(
        TopicMatcher::from_yaml(bad),
        Err(MatcherConfigError::ReservedTopic(_))
    ));
}
