//! Supported display languages.

use std::fmt;
use std::str::FromStr;

/// Language codes understood by the catalog.
///
/// The set is closed: anything outside it is treated as "no language" by the
/// parsing helpers instead of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum Language {
    /// English, the reference locale.
    #[default]
    En,
    /// Hindi.
    Hi,
    /// Marathi.
    Mr,
    /// Punjabi.
    Pa,
    /// Tamil.
    Ta,
    /// Telugu.
    Te,
    /// Gujarati.
    Gu,
    /// Bengali.
    Bn,
}

impl Language {
    /// Every supported language, reference locale first.
    pub const ALL: [Self; 8] = [
        Self::En,
        Self::Hi,
        Self::Mr,
        Self::Pa,
        Self::Ta,
        Self::Te,
        Self::Gu,
        Self::Bn,
    ];

    /// What: Short code used as catalog key and persisted value.
    ///
    /// Output:
    /// - Two-letter lowercase code (e.g., "hi")
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
            Self::Mr => "mr",
            Self::Pa => "pa",
            Self::Ta => "ta",
            Self::Te => "te",
            Self::Gu => "gu",
            Self::Bn => "bn",
        }
    }

    /// English name of the language.
    #[must_use]
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Hi => "Hindi",
            Self::Mr => "Marathi",
            Self::Pa => "Punjabi",
            Self::Ta => "Tamil",
            Self::Te => "Telugu",
            Self::Gu => "Gujarati",
            Self::Bn => "Bengali",
        }
    }

    /// Name of the language written in its own script.
    #[must_use]
    pub const fn native_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Hi => "हिंदी",
            Self::Mr => "मराठी",
            Self::Pa => "ਪੰਜਾਬੀ",
            Self::Ta => "தமிழ்",
            Self::Te => "తెలుగు",
            Self::Gu => "ગુજરાતી",
            Self::Bn => "বাংলা",
        }
    }

    /// What: Parse a language code.
    ///
    /// Inputs:
    /// - `code`: Candidate code, e.g. "hi" or " HI "
    ///
    /// Output:
    /// - `Some(Language)` for a recognized code, `None` otherwise
    ///
    /// Details:
    /// - Trims whitespace and ignores ASCII case
    /// - Does not accept region suffixes ("hi-IN" is unrecognized)
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(code))
    }

    /// What: Match a persisted value exactly against the known codes.
    ///
    /// Details:
    /// - Unlike [`Language::from_code`], `" HI "` or `"Hi"` is not a match
    #[must_use]
    pub fn from_stored_code(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == value)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when parsing an unrecognized language code through `FromStr`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLanguage(pub String);

impl fmt::Display for UnknownLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let known: Vec<&str> = Language::ALL.iter().map(|l| l.code()).collect();
        write!(
            f,
            "unknown language code '{}' (expected one of: {})",
            self.0,
            known.join(", ")
        )
    }
}

impl std::error::Error for UnknownLanguage {}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| UnknownLanguage(s.to_string()))
    }
}
