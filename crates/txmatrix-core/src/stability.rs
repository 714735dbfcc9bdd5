//! Release stability tiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The stability tier a version is published under.
///
/// Unrecognized labels are kept verbatim in [`Stability::Other`] so a table
/// can introduce a new tier without a code change. Serialized as the bare
/// label string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Stability {
    /// Previous stable series, still supported.
    OldStable,
    /// Current stable series.
    Stable,
    /// Pre-release of the upcoming series.
    Next,
    /// Any other tier label, passed through uninterpreted.
    Other(String),
}

impl Stability {
    /// Parse a tier label. Never fails; unknown labels become `Other`.
    pub fn parse(s: &str) -> Self {
        match s {
            "oldstable" => Stability::OldStable,
            "stable" => Stability::Stable,
            "next" => Stability::Next,
            other => Stability::Other(other.to_string()),
        }
    }

    /// The label as it appears in tables and generated output.
    pub fn as_str(&self) -> &str {
        match self {
            Stability::OldStable => "oldstable",
            Stability::Stable => "stable",
            Stability::Next => "next",
            Stability::Other(label) => label,
        }
    }

    /// Whether this is one of the built-in tiers.
    pub fn is_known(&self) -> bool {
        !matches!(self, Stability::Other(_))
    }
}

/// The built-in tiers, oldest first.
pub fn known_tiers() -> &'static [Stability] {
    &[Stability::OldStable, Stability::Stable, Stability::Next]
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Stability {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Stability::parse(s))
    }
}

impl From<String> for Stability {
    fn from(s: String) -> Self {
        match Stability::parse(&s) {
            Stability::Other(_) => Stability::Other(s),
            known => known,
        }
    }
}

impl From<Stability> for String {
    fn from(s: Stability) -> Self {
        match s {
            Stability::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_tiers() {
        assert_eq!(Stability::parse("oldstable"), Stability::OldStable);
        assert_eq!(Stability::parse("stable"), Stability::Stable);
        assert_eq!(Stability::parse("next"), Stability::Next);
    }

    #[test]
    fn unknown_tier_passes_through() {
        let s = Stability::parse("nightly");
        assert_eq!(s, Stability::Other("nightly".into()));
        assert!(!s.is_known());
        assert_eq!(s.as_str(), "nightly");
    }

    #[test]
    fn labels_are_case_sensitive() {
        assert_eq!(Stability::parse("Stable"), Stability::Other("Stable".into()));
    }

    #[test]
    fn string_conversions_agree() {
        for tier in known_tiers() {
            let label: String = tier.clone().into();
            assert_eq!(Stability::from(label.clone()), *tier);
            assert_eq!(tier.to_string(), label);
        }
    }
}
