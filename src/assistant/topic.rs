//! Conversation topics recognised by the keyword matcher.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical category of a user question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Topic {
    /// Today's weather and forecast.
    Weather,
    /// Irrigation amounts.
    Water,
    /// Crop health overview.
    Crop,
    /// Pest warnings and treatment.
    Pest,
    /// Mandi (market) prices.
    Market,
    /// Photo-based disease check; the UI should open the camera.
    Camera,
    /// Request for the expert helpline details.
    ExpertContact,
    /// Complex or sensitive question that needs a human expert.
    ExpertEscalation,
    /// Nothing matched.
    Unknown,
}

impl Topic {
    /// Topics that may appear in a domain rule (everything except the escalation
    /// and unknown sentinels).
    pub const DOMAIN: [Self; 7] = [
        Self::Weather,
        Self::Water,
        Self::Crop,
        Self::Pest,
        Self::Market,
        Self::Camera,
        Self::ExpertContact,
    ];

    /// Stable identifier, also the suffix of the reply catalog key.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Weather => "weather",
            Self::Water => "water",
            Self::Crop => "crop",
            Self::Pest => "pest",
            Self::Market => "market",
            Self::Camera => "camera",
            Self::ExpertContact => "expert-contact",
            Self::ExpertEscalation => "expert-escalation",
            Self::Unknown => "unknown",
        }
    }

    /// Parse a stable identifier.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        Self::DOMAIN
            .into_iter()
            .chain([Self::ExpertEscalation, Self::Unknown])
            .find(|t| t.id() == id)
    }

    /// Catalog key holding the canned reply for this topic.
    #[must_use]
    pub fn reply_key(self) -> String {
        format!("assistant.reply.{}", self.id())
    }

    /// Whether a reply on this topic should be followed by an expert offer.
    #[must_use]
    pub const fn needs_expert(self) -> bool {
        matches!(self, Self::ExpertEscalation)
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
