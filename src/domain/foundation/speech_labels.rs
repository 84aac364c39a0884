//! Speech delivery mode and speech type.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::assessment_levels::normalize_label;

/// How a speech reaches its audience.
///
/// Ordered by authenticity: an avatar stands in for the leader, a
/// teleprompter delivery is prepared, off-the-cuff is spontaneous.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum DeliveryMode {
    #[default]
    #[serde(rename = "avatar")]
    Avatar,
    #[serde(rename = "teleprompter")]
    Teleprompter,
    #[serde(rename = "off-the-cuff")]
    OffTheCuff,
}

impl DeliveryMode {
    pub fn all() -> &'static [DeliveryMode] {
        &[DeliveryMode::Avatar, DeliveryMode::Teleprompter, DeliveryMode::OffTheCuff]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match normalize_label(label).as_str() {
            "avatar" => Some(DeliveryMode::Avatar),
            "teleprompter" => Some(DeliveryMode::Teleprompter),
            "off_the_cuff" => Some(DeliveryMode::OffTheCuff),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryMode::Avatar => "avatar",
            DeliveryMode::Teleprompter => "teleprompter",
            DeliveryMode::OffTheCuff => "off-the-cuff",
        }
    }
}

impl fmt::Display for DeliveryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for DeliveryMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| format!("unknown delivery mode '{}'", s))
    }
}

/// Kind of leader speech.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SpeechType {
    StateOfCivilization,
    CrisisAddress,
    VictorySpeech,
    #[default]
    PolicyAnnouncement,
    EconomicUpdate,
    MilitaryBriefing,
    DiplomaticAddress,
    Rally,
    Memorial,
    CulturalCelebration,
}

impl SpeechType {
    pub fn from_label(label: &str) -> Option<Self> {
        match normalize_label(label).as_str() {
            "state_of_civilization" => Some(SpeechType::StateOfCivilization),
            "crisis_address" => Some(SpeechType::CrisisAddress),
            "victory_speech" => Some(SpeechType::VictorySpeech),
            "policy_announcement" => Some(SpeechType::PolicyAnnouncement),
            "economic_update" => Some(SpeechType::EconomicUpdate),
            "military_briefing" => Some(SpeechType::MilitaryBriefing),
            "diplomatic_address" => Some(SpeechType::DiplomaticAddress),
            "rally" => Some(SpeechType::Rally),
            "memorial" => Some(SpeechType::Memorial),
            "cultural_celebration" => Some(SpeechType::CulturalCelebration),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpeechType::StateOfCivilization => "state_of_civilization",
            SpeechType::CrisisAddress => "crisis_address",
            SpeechType::VictorySpeech => "victory_speech",
            SpeechType::PolicyAnnouncement => "policy_announcement",
            SpeechType::EconomicUpdate => "economic_update",
            SpeechType::MilitaryBriefing => "military_briefing",
            SpeechType::DiplomaticAddress => "diplomatic_address",
            SpeechType::Rally => "rally",
            SpeechType::Memorial => "memorial",
            SpeechType::CulturalCelebration => "cultural_celebration",
        }
    }
}

impl fmt::Display for SpeechType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SpeechType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| format!("unknown speech type '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delivery_mode_serializes_with_hyphens() {
        let json = serde_json::to_string(&DeliveryMode::OffTheCuff).unwrap();
        assert_eq!(json, "\"off-the-cuff\"");
        let back: DeliveryMode = serde_json::from_str("\"teleprompter\"").unwrap();
        assert_eq!(back, DeliveryMode::Teleprompter);
    }

    #[test]
    fn delivery_mode_parses_loose_labels() {
        assert_eq!("Off The Cuff".parse::<DeliveryMode>(), Ok(DeliveryMode::OffTheCuff));
        assert!("hologram".parse::<DeliveryMode>().is_err());
    }

    #[test]
    fn speech_type_parses_snake_case() {
        assert_eq!(SpeechType::from_label("crisis_address"), Some(SpeechType::CrisisAddress));
        assert_eq!(SpeechType::from_label("Victory Speech"), Some(SpeechType::VictorySpeech));
    }
}
