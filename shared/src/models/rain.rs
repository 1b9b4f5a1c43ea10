//! Rainfall journal models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A rainfall observation. Informational, never part of a balance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RainEvent {
    pub id: Uuid,
    pub date: NaiveDate,
    pub intensity: RainIntensity,
    pub period: RainPeriod,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RainIntensity {
    #[serde(rename = "FAIBLE")]
    Light,
    #[serde(rename = "MODERE")]
    Moderate,
    #[serde(rename = "FORTE")]
    Heavy,
}

/// Time of day the rain fell
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RainPeriod {
    #[serde(rename = "MATIN")]
    Morning,
    #[serde(rename = "APRES-MIDI")]
    Afternoon,
    #[serde(rename = "NUIT")]
    Night,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rain_event_from_store_json() {
        let json = format!(
            r#"{{"id":"{}","date":"2024-06-12","intensity":"FORTE","period":"APRES-MIDI"}}"#,
            Uuid::new_v4()
        );
        let event: RainEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event.intensity, RainIntensity::Heavy);
        assert_eq!(event.period, RainPeriod::Afternoon);
    }
}
