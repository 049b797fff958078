use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// External date layout, month first.
pub const GAME_DATE_FORMAT: &str = "%m/%d/%Y";

/// One player's shot attempts in one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShotRecord {
    #[serde(rename = "gameID")]
    pub game_id: u64,
    #[serde(rename = "playerID")]
    pub player_id: u64,
    #[serde(rename = "gameDate", with = "game_date_format")]
    pub game_date: NaiveDate,
    #[serde(rename = "fieldGoal2Attempted")]
    pub fg2_attempted: u32,
    #[serde(rename = "fieldGoal2Made")]
    pub fg2_made: u32,
    #[serde(rename = "fieldGoal3Attempted")]
    pub fg3_attempted: u32,
    #[serde(rename = "fieldGoal3Made")]
    pub fg3_made: u32,
    #[serde(rename = "freeThrowAttempted")]
    pub ft_attempted: u32,
    #[serde(rename = "freeThrowMade")]
    pub ft_made: u32,
}

impl ShotRecord {
    pub fn points(&self) -> u64 {
        2 * u64::from(self.fg2_made) + 3 * u64::from(self.fg3_made) + u64::from(self.ft_made)
    }

    pub fn field_goal_attempts(&self) -> u64 {
        u64::from(self.fg2_attempted) + u64::from(self.fg3_attempted)
    }
}

/// Parses an `MM/DD/YYYY` game date into a calendar date.
pub fn parse_game_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), GAME_DATE_FORMAT).map_err(|_| Error::InvalidDate {
        value: value.to_string(),
    })
}

mod game_date_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{parse_game_date, GAME_DATE_FORMAT};

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&date.format(GAME_DATE_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_game_date(&raw).map_err(serde::de::Error::custom)
    }
}
