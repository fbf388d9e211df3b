use nhldata_interface::nhl::model::{BoxScorePlayer, GameBoxScore, TeamBoxScore};
use nhldata_interface::stats::model::{PlayerRow, TeamSide};

fn team(box_score: &GameBoxScore, side: TeamSide) -> &TeamBoxScore {
    match side {
        TeamSide::Home => &box_score.teams.home,
        TeamSide::Away => &box_score.teams.away,
    }
}

// Player keys look like "ID8471214". Falls back on the person id when the key
// carries no digits.
fn player_id(key: &str, player: &BoxScorePlayer) -> String {
    let digits = key.trim_start_matches(|c: char| !c.is_ascii_digit());

    if digits.is_empty() {
        player.person.id.to_string()
    } else {
        digits.to_string()
    }
}

/// Flattens a box score into one row per skater.
///
/// Home rows come before away rows, and rows within a side are ordered by
/// player id. Players without skater stats (goalies, scratches) are skipped.
pub fn player_rows(box_score: &GameBoxScore) -> Vec<PlayerRow> {
    let mut rows = Vec::new();

    for side in TeamSide::ALL {
        let team = team(box_score, side);

        let mut players: Vec<_> = team.players.iter().collect();
        players.sort_by_key(|(_, player)| player.person.id);

        for (key, player) in players {
            let Some(skater_stats) = &player.stats.skaterStats else {
                continue;
            };

            rows.push(PlayerRow {
                player_id: player_id(key, player),
                team_name: team.team.name.clone(),
                full_name: player.person.fullName.clone(),
                assists: skater_stats.assists,
                goals: skater_stats.goals,
                side,
            });
        }
    }

    rows
}
