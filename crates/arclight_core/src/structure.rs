//! Narrative structure templates.

use serde::{Deserialize, Serialize};

/// A labeled narrative phase covering a percentage range of total duration.
///
/// Ranges are taken as given: the engine does not validate a template for
/// gaps or overlaps. Blocks whose derived position falls in no act's range
/// are silently excluded from act-based metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActStructure {
    /// Act name (e.g. "Setup", "Confrontation")
    pub name: String,
    /// Start of the act's range as a percentage of total duration
    pub start: f64,
    /// End of the act's range as a percentage of total duration
    pub end: f64,
    /// Presentation color token, passed through untouched
    pub color: String,
    /// Short description of the act's narrative role
    #[serde(default)]
    pub description: Option<String>,
}

impl ActStructure {
    /// Whether a position falls inside this act's closed range.
    pub fn contains(&self, position: f64) -> bool {
        position >= self.start && position <= self.end
    }

    /// The fraction of total duration this act is expected to cover.
    pub fn expected_share(&self) -> f64 {
        (self.end - self.start) / 100.0
    }
}

/// Selector for one of the shipped narrative structure templates.
///
/// The wire form matches the template ids in the bundled TOML
/// (`"3-act"`, `"aristotelian"`, ...).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum StructureKind {
    /// Simple three-act structure: Setup / Confrontation / Resolution
    #[serde(rename = "3-act")]
    #[strum(serialize = "3-act")]
    ThreeAct,
    /// Aristotelian dramatic structure, seven stages
    Aristotelian,
    /// The Hero's Journey, ten stages
    HerosJourney,
    /// Four-act structure: Setup / Response / Attack / Resolution
    #[serde(rename = "4-act")]
    #[strum(serialize = "4-act")]
    FourAct,
    /// Save the Cat beat sheet, thirteen beats
    SaveTheCat,
    /// Freytag's Pyramid, five stages
    Freytag,
    /// Dan Harmon's Story Circle, eight segments
    StoryCircle,
}

impl StructureKind {
    /// Human-readable label for presentation surfaces.
    pub fn label(&self) -> &'static str {
        match self {
            Self::ThreeAct => "3-Act",
            Self::Aristotelian => "Aristotelian",
            Self::HerosJourney => "Hero's Journey",
            Self::FourAct => "4-Act",
            Self::SaveTheCat => "Save the Cat",
            Self::Freytag => "Freytag's Pyramid",
            Self::StoryCircle => "Story Circle",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn kind_ids_round_trip() {
        assert_eq!(StructureKind::ThreeAct.to_string(), "3-act");
        assert_eq!(StructureKind::HerosJourney.to_string(), "heros-journey");
        assert_eq!(
            StructureKind::from_str("save-the-cat").unwrap(),
            StructureKind::SaveTheCat
        );
        let json = serde_json::to_string(&StructureKind::FourAct).unwrap();
        assert_eq!(json, "\"4-act\"");
    }

    #[test]
    fn act_range_is_closed_on_both_ends() {
        let act = ActStructure {
            name: "Setup".into(),
            start: 0.0,
            end: 25.0,
            color: "bg-blue-500".into(),
            description: None,
        };
        assert!(act.contains(0.0));
        assert!(act.contains(25.0));
        assert!(!act.contains(25.1));
    }
}
