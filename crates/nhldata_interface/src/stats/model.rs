use std::fmt;

use serde::{Deserialize, Serialize};

// Header of every game file, in column order.
pub const PLAYER_COLUMNS: [&str; 6] = [
    "player_person_id",
    "player_person_currentTeam_name",
    "player_person_fullName",
    "player_stats_skaterStats_assists",
    "player_stats_skaterStats_goals",
    "side",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamSide {
    Home,
    Away,
}

impl TeamSide {
    pub const ALL: [TeamSide; 2] = [TeamSide::Home, TeamSide::Away];

    pub fn as_str(&self) -> &'static str {
        match self {
            TeamSide::Home => "home",
            TeamSide::Away => "away",
        }
    }
}

impl fmt::Display for TeamSide {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// One skater line of a game file. Field order matches PLAYER_COLUMNS.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct PlayerRow {
    #[serde(rename = "player_person_id")]
    pub player_id: String,
    #[serde(rename = "player_person_currentTeam_name")]
    pub team_name: String,
    #[serde(rename = "player_person_fullName")]
    pub full_name: String,
    #[serde(rename = "player_stats_skaterStats_assists")]
    pub assists: u32,
    #[serde(rename = "player_stats_skaterStats_goals")]
    pub goals: u32,
    pub side: TeamSide,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sides_iterate_home_first() {
        assert_eq!(TeamSide::ALL, [TeamSide::Home, TeamSide::Away]);
        assert_eq!(TeamSide::Away.to_string(), "away");
    }
}
