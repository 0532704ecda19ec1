use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Language used for result messages, factor labels, and number formatting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    French,
    English,
}

impl Locale {
    pub const fn code(self) -> &'static str {
        match self {
            Self::French => "fr",
            Self::English => "en",
        }
    }

    pub const fn decision_message(self, approved: bool) -> &'static str {
        match (self, approved) {
            (Self::French, true) => "Prêt approuvé ✅",
            (Self::French, false) => "Prêt refusé ❌",
            (Self::English, true) => "Loan approved ✅",
            (Self::English, false) => "Loan declined ❌",
        }
    }

    pub const fn yes_no(self, value: bool) -> &'static str {
        match (self, value) {
            (Self::French, true) => "Oui",
            (Self::French, false) => "Non",
            (Self::English, true) => "Yes",
            (Self::English, false) => "No",
        }
    }

    pub const fn years_suffix(self) -> &'static str {
        match self {
            Self::French => "ans",
            Self::English => "years",
        }
    }

    pub(crate) const fn thousands_separator(self) -> char {
        match self {
            // narrow no-break space, as rendered by fr-FR number formatting
            Self::French => '\u{202f}',
            Self::English => ',',
        }
    }

    pub(crate) const fn decimal_separator(self) -> char {
        match self {
            Self::French => ',',
            Self::English => '.',
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported locale '{0}' (expected fr or en)")]
pub struct UnsupportedLocale(pub String);

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "fr" | "fr-fr" | "french" => Ok(Self::French),
            "en" | "en-us" | "en-gb" | "english" => Ok(Self::English),
            _ => Err(UnsupportedLocale(raw.to_string())),
        }
    }
}
