//! Keyword-driven mock assistant.
//!
//! Questions are routed to a [`Topic`] by a [`TopicMatcher`]: an ordered list
//! of keyword rules where the first rule with a matching substring wins. When
//! no domain rule matches, a separate set of "complex question" keywords
//! decides whether the user should be offered a human expert.
//!
//! The [`Assistant`] turns the topic into a canned reply through the
//! [`crate::i18n::Localizer`], so answers follow the active language and fall
//! back to English like every other string.
//!
//! ```rust
//! use kheti_guru::assistant::{Topic, TopicMatcher};
//!
//! let matcher = TopicMatcher::chat();
//! assert_eq!(matcher.classify("How much water today?"), Topic::Water);
//! assert_eq!(matcher.classify("my plant has a strange disease"), Topic::ExpertEscalation);
//! assert_eq!(matcher.classify("hello there"), Topic::Unknown);
//! ```

mod matcher;
mod reply;
mod topic;

pub use matcher::{MatcherConfigError, MatcherProfile, TopicMatcher, TopicRule};
pub use reply::{
    Assistant, DEFAULT_EXPERT_PHONE, DEFAULT_EXPERT_WHATSAPP, EXPERT_SUGGESTION_KEY, ExpertContact,
    GREETING_KEY, Reply, ReplyAction,
};
pub use topic::Topic;
