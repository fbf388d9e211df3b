use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, Result};

pub const API_DATE_FORMAT: &str = "%Y-%m-%d";

// Inclusive range of calendar days requested from the schedule endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(AppError::InvalidDateRange {
                msg: format!("start date {} is after end date {}", start, end),
            });
        }

        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

// Schedule information

#[allow(non_snake_case)]
#[derive(Debug, Deserialize, Serialize)]
pub struct ScheduledGame {
    pub gamePk: u64,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ScheduleDate {
    pub date: String,
    #[serde(default)]
    pub games: Vec<ScheduledGame>,
}

impl ScheduleDate {
    pub fn game_date(&self) -> Result<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, API_DATE_FORMAT).map_err(|e| {
            AppError::ParseError {
                msg: format!("schedule date '{}': {}", self.date, e),
            }
        })
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct Schedule {
    #[serde(default)]
    pub dates: Vec<ScheduleDate>,
}

// Box score information

#[derive(Debug, Deserialize, Serialize)]
pub struct Team {
    pub name: String,
}

#[allow(non_snake_case)]
#[derive(Debug, Deserialize, Serialize)]
pub struct Person {
    pub id: u64,
    // Only read for skaters.
    #[serde(default)]
    pub fullName: String,
    pub currentTeam: Option<Team>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct SkaterStats {
    pub goals: u32,
    pub assists: u32,
}

// Goalies only carry "goalieStats" and scratched players an empty object.
#[allow(non_snake_case)]
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PlayerStats {
    pub skaterStats: Option<SkaterStats>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct BoxScorePlayer {
    pub person: Person,
    #[serde(default)]
    pub stats: PlayerStats,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct TeamBoxScore {
    pub team: Team,
    // Keyed by "ID<person id>".
    #[serde(default)]
    pub players: HashMap<String, BoxScorePlayer>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct BoxScoreTeams {
    pub home: TeamBoxScore,
    pub away: TeamBoxScore,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct GameBoxScore {
    pub teams: BoxScoreTeams,
}
