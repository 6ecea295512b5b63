//! Ordered keyword rules mapping free text to a [`Topic`].

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::topic::Topic;

/// Complex or sensitive subjects that warrant a human expert (English and Hindi).
const ESCALATION_KEYWORDS: &[&str] = &[
    "disease",
    "रोग",
    "बीमारी",
    "infection",
    "संक्रमण",
    "soil problem",
    "मिट्टी समस्या",
    "soil analysis",
    "मिट्टी जांच",
    "fertilizer problem",
    "खाद समस्या",
    "chemical",
    "रसायन",
    "crop failure",
    "फसल खराब",
    "plant death",
    "पौधे मर",
    "unusual symptom",
    "अजीब लक्षण",
    "strange",
    "अजीब",
    "emergency",
    "आपातकाल",
    "urgent",
    "जरूरी",
    "legal",
    "कानूनी",
    "insurance",
    "बीमा",
    "government scheme detail",
    "सरकारी योजना विस्तार",
];

/// Rules shared by every built-in profile, in evaluation order.
const COMMON_RULES: &[(Topic, &[&str])] = &[
    (Topic::Weather, &["weather", "मौसम"]),
    (Topic::Water, &["water", "पानी"]),
    (Topic::Crop, &["crop", "फसल"]),
    (Topic::Pest, &["pest", "कीट"]),
    (Topic::Market, &["market", "बाजार"]),
];

/// Built-in matcher flavours, one per assistant surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatcherProfile {
    /// Unified chat surface: the last domain rule routes photo questions to the camera.
    #[default]
    Chat,
    /// Voice surface: the last domain rule answers requests for an expert's contact.
    Voice,
}

impl MatcherProfile {
    /// Name used in settings and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Chat => "chat",
            Self::Voice => "voice",
        }
    }
}

impl fmt::Display for MatcherProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatcherProfile {
    type Err = MatcherConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chat" => Ok(Self::Chat),
            "voice" => Ok(Self::Voice),
            other => Err(MatcherConfigError::UnknownProfile(other.to_string())),
        }
    }
}

/// Errors from building a matcher out of configuration.
#[derive(Debug)]
pub enum MatcherConfigError {
    /// The YAML document could not be parsed.
    Parse(String),
    /// A rule used a topic that cannot be matched directly.
    ReservedTopic(Topic),
    /// A rule or the escalation list contained no usable keywords.
    EmptyKeywords(String),
    /// Profile name not recognised.
    UnknownProfile(String),
}

impl fmt::Display for MatcherConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "invalid matcher definition: {msg}"),
            Self::ReservedTopic(topic) => {
                write!(f, "topic '{topic}' is reserved and cannot have keyword rules")
            }
            Self::EmptyKeywords(what) => write!(f, "{what} has no keywords"),
            Self::UnknownProfile(name) => {
                write!(f, "unknown assistant profile '{name}' (expected chat or voice)")
            }
        }
    }
}

impl std::error::Error for MatcherConfigError {}

/// One domain rule: a topic and the keywords that select it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TopicRule {
    /// Topic returned when any keyword matches.
    pub topic: Topic,
    /// Keywords, stored lowercased.
    pub keywords: Vec<String>,
}

impl TopicRule {
    /// Build a rule, lowercasing keywords and dropping blank ones.
    #[must_use]
    pub fn new<I, S>(topic: Topic, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            topic,
            keywords: normalize_keywords(keywords),
        }
    }

    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }
}

/// YAML shape accepted by [`TopicMatcher::from_yaml`].
#[derive(Debug, Deserialize)]
struct MatcherDefinition {
    rules: Vec<TopicRule>,
    /// `None` when the key is absent; the built-in list then applies.
    escalation: Option<Vec<String>>,
}

/// First-match-wins keyword classifier.
///
/// Domain rules are tried in order; the escalation keywords are consulted only
/// when no domain rule matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicMatcher {
    rules: Vec<TopicRule>,
    escalation: Vec<String>,
}

impl Default for TopicMatcher {
    fn default() -> Self {
        Self::chat()
    }
}

impl TopicMatcher {
    /// What: Matcher for the unified chat surface.
    ///
    /// Details:
    /// - Order: weather, water, crop, pest, market, camera, then escalation
    #[must_use]
    pub fn chat() -> Self {
        Self::builtin(TopicRule::new(
            Topic::Camera,
            ["camera", "photo", "फोटो"],
        ))
    }

    /// What: Matcher for the voice surface.
    ///
    /// Details:
    /// - Order: weather, water, crop, pest, market, expert-contact, then escalation
    #[must_use]
    pub fn voice() -> Self {
        Self::builtin(TopicRule::new(Topic::ExpertContact, ["expert", "विशेषज्ञ"]))
    }

    /// Built-in matcher for a profile.
    #[must_use]
    pub fn for_profile(profile: MatcherProfile) -> Self {
        match profile {
            MatcherProfile::Chat => Self::chat(),
            MatcherProfile::Voice => Self::voice(),
        }
    }

    fn builtin(last_rule: TopicRule) -> Self {
        let mut rules: Vec<TopicRule> = COMMON_RULES
            .iter()
            .map(|(topic, keywords)| TopicRule::new(*topic, keywords.iter()))
            .collect();
        rules.push(last_rule);
        Self {
            rules,
            escalation: normalize_keywords(ESCALATION_KEYWORDS),
        }
    }

    /// What: Build a matcher from explicit rules.
    ///
    /// # Errors
    /// - `MatcherConfigError::ReservedTopic` if a rule targets `expert-escalation` or `unknown`
    /// - `MatcherConfigError::EmptyKeywords` if a rule has no non-blank keyword
    pub fn new(rules: Vec<TopicRule>, escalation: Vec<String>) -> Result<Self, MatcherConfigError> {
        let mut normalized = Vec::with_capacity(rules.len());
        for rule in rules {
            if matches!(rule.topic, Topic::ExpertEscalation | Topic::Unknown) {
                return Err(MatcherConfigError::ReservedTopic(rule.topic));
            }
            let rule = TopicRule::new(rule.topic, rule.keywords);
            if rule.keywords.is_empty() {
                return Err(MatcherConfigError::EmptyKeywords(format!(
                    "rule for '{}'",
                    rule.topic
                )));
            }
            normalized.push(rule);
        }
        Ok(Self {
            rules: normalized,
            escalation: normalize_keywords(escalation),
        })
    }

    /// What: Build a matcher from a YAML definition.
    ///
    /// Inputs:
    /// - `yaml`: Document with `rules: [{topic, keywords}]` and optional `escalation: [..]`
    ///
    /// Details:
    /// - Omitting `escalation` keeps the built-in escalation keywords
    /// - An explicit empty list (`escalation: []`) turns escalation off
    ///
    /// # Errors
    /// - `MatcherConfigError::Parse` for malformed YAML or unknown topic ids
    /// - Any error from [`TopicMatcher::new`]
    pub fn from_yaml(yaml: &str) -> Result<Self, MatcherConfigError> {
        let def: MatcherDefinition =
            serde_norway::from_str(yaml).map_err(|e| MatcherConfigError::Parse(e.to_string()))?;
        let escalation = def.escalation.unwrap_or_else(|| {
            ESCALATION_KEYWORDS.iter().map(ToString::to_string).collect()
        });
        Self::new(def.rules, escalation)
    }

    /// Topics in the order they are evaluated, escalation last.
    #[must_use]
    pub fn evaluation_order(&self) -> Vec<Topic> {
        self.rules
            .iter()
            .map(|r| r.topic)
            .chain(std::iter::once(Topic::ExpertEscalation))
            .collect()
    }

    /// What: Classify free text.
    ///
    /// Inputs:
    /// - `text`: User question in English, Hindi, or a mix
    ///
    /// Output:
    /// - First domain topic with a keyword contained in the text, else
    ///   `ExpertEscalation` when an escalation keyword is present, else `Unknown`
    ///
    /// Details:
    /// - Case-insensitive; no stemming or script normalization
    /// - Callers are expected not to pass blank input; it yields `Unknown`
    #[must_use]
    pub fn classify(&self, text: &str) -> Topic {
        let lowered = text.to_lowercase();
        if let Some(rule) = self.rules.iter().find(|r| r.matches(&lowered)) {
            return rule.topic;
        }
        if self.is_complex(&lowered) {
            return Topic::ExpertEscalation;
        }
        Topic::Unknown
    }

    /// Whether the text contains any escalation keyword, regardless of domain rules.
    #[must_use]
    pub fn is_complex(&self, text: &str) -> bool {
        let lowered = text.to_lowercase();
        self.escalation.iter().any(|k| lowered.contains(k.as_str()))
    }
}

fn normalize_keywords<I, S>(keywords: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    keywords
        .into_iter()
        .map(|k| k.as_ref().trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}
