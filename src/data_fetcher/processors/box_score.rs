use crate::data_fetcher::models::{GameContext, PlayerGameStats, TeamContext, score_line};
use crate::data_fetcher::processors::json_path::{
    get_i64, get_path, get_string, is_empty_document, require_i64,
};
use crate::data_fetcher::processors::play_by_play::read_game_context;
use crate::data_fetcher::processors::stat_line::read_stat_line;
use crate::error::AppError;
use chrono::Datelike;
use serde_json::Value;
use tracing::info;

/// Which side of the box score a player appears on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Away,
    Home,
}

impl Side {
    fn key(self) -> &'static str {
        match self {
            Side::Away => "away",
            Side::Home => "home",
        }
    }

    fn location(self) -> &'static str {
        match self {
            Side::Away => "A",
            Side::Home => "H",
        }
    }
}

/// Extracts one row per player from the box score of a live game feed.
///
/// Away players come first, then home players, each in feed order.
pub fn extract_player_game_stats(
    feed: &Value,
    game_id: i64,
) -> Result<Vec<PlayerGameStats>, AppError> {
    if is_empty_document(feed) {
        info!("No player game stats data for game {}", game_id);
        return Ok(Vec::new());
    }

    let context = read_game_context(feed, game_id)?;
    let runs = |side: Side| {
        get_i64(feed, &["liveData", "linescore", "teams", side.key(), "runs"]).unwrap_or(0)
    };
    let away_runs = runs(Side::Away);
    let home_runs = runs(Side::Home);

    let mut rows = Vec::new();
    for side in [Side::Away, Side::Home] {
        let (team, opponent, team_runs, opp_runs) = match side {
            Side::Away => (&context.away, &context.home, away_runs, home_runs),
            Side::Home => (&context.home, &context.away, home_runs, away_runs),
        };
        let players = get_path(feed, &["liveData", "boxscore", "teams", side.key(), "players"])
            .and_then(Value::as_object);

        for player in players.into_iter().flat_map(|map| map.values()) {
            rows.push(player_row(
                &context,
                player,
                side,
                team,
                opponent,
                (team_runs, opp_runs),
            )?);
        }
    }

    Ok(rows)
}

/// Positions played joined by `/`, e.g. `C/1B`.
fn position_path(player: &Value) -> Option<String> {
    let positions = get_path(player, &["allPositions"])?.as_array()?;
    let abbreviations: Vec<String> = positions
        .iter()
        .filter_map(|position| get_string(position, &["abbreviation"]))
        .collect();
    (!abbreviations.is_empty()).then(|| abbreviations.join("/"))
}

fn player_row(
    context: &GameContext,
    player: &Value,
    side: Side,
    team: &TeamContext,
    opponent: &TeamContext,
    (team_runs, opp_runs): (i64, i64),
) -> Result<PlayerGameStats, AppError> {
    let batting = read_stat_line(get_path(player, &["stats", "batting"]).unwrap_or(&Value::Null));
    let pitching =
        read_stat_line(get_path(player, &["stats", "pitching"]).unwrap_or(&Value::Null));

    Ok(PlayerGameStats {
        season: context.game_date.year(),
        game_id: context.game_id,
        game_date: context.game_date.format("%Y-%m-%d").to_string(),
        game_type: context.game_type.clone(),
        league_id: context.league_id,
        league_name: context.league_name.clone(),
        league_level_id: context.league_level_id,
        league_level_name: context.league_level_name.clone(),
        team_org_id: team.org_id,
        team_org_name: team.org_name.clone(),
        team_id: team.id,
        team_abv: team.abbreviation.clone(),
        team_name: team.name.clone(),
        loc: side.location(),
        opp_org_id: opponent.org_id,
        opp_org_name: opponent.org_name.clone(),
        opp_id: opponent.id,
        opp_abv: opponent.abbreviation.clone(),
        opp_name: opponent.name.clone(),
        team_runs,
        opp_runs,
        score: score_line(team_runs, opp_runs),
        player_id: require_i64(player, &["person", "id"], "box score player")?,
        player_jersey_number: get_string(player, &["jerseyNumber"]),
        player_full_name: get_string(player, &["person", "fullName"]),
        player_position: position_path(player),
        player_batting_order: get_string(player, &["battingOrder"]),
        batting_games: batting.games_played,
        batting_plate_appearances: batting.plate_appearances,
        batting_at_bats: batting.at_bats,
        batting_runs: batting.runs,
        batting_hits: batting.hits,
        batting_doubles: batting.doubles,
        batting_triples: batting.triples,
        batting_home_runs: batting.home_runs,
        batting_rbi: batting.rbi,
        batting_stolen_bases: batting.stolen_bases,
        batting_caught_stealing: batting.caught_stealing,
        batting_walks: batting.base_on_balls,
        batting_intentional_walks: batting.intentional_walks,
        batting_strikeouts: batting.strike_outs,
        batting_total_bases: batting.total_bases,
        batting_gidp: batting.ground_into_double_play,
        batting_gitp: batting.ground_into_triple_play,
        batting_hit_by_pitch: batting.hit_by_pitch,
        batting_sac_bunts: batting.sac_bunts,
        batting_sac_flies: batting.sac_flies,
        batting_catchers_interference: batting.catchers_interference,
        batting_fly_outs: batting.fly_outs,
        batting_ground_outs: batting.ground_outs,
        batting_left_on_base: batting.left_on_base,
        pitching_games: pitching.games_pitched,
        pitching_games_started: pitching.games_started,
        pitching_games_finished: pitching.games_finished,
        pitching_complete_games: pitching.complete_games,
        pitching_shutouts: pitching.shutouts,
        pitching_wins: pitching.wins,
        pitching_losses: pitching.losses,
        pitching_save_opportunities: pitching.save_opportunities,
        pitching_saves: pitching.saves,
        pitching_blown_saves: pitching.blown_saves,
        pitching_holds: pitching.holds,
        pitching_innings_pitched: pitching.innings_pitched_decimal(),
        pitching_innings_pitched_str: pitching.innings_pitched.clone(),
        pitching_runs: pitching.runs,
        pitching_earned_runs: pitching.earned_runs,
        pitching_batters_faced: pitching.batters_faced,
        pitching_at_bats: pitching.at_bats,
        pitching_hits: pitching.hits,
        pitching_doubles: pitching.doubles,
        pitching_triples: pitching.triples,
        pitching_home_runs: pitching.home_runs,
        pitching_rbi: pitching.rbi,
        pitching_walks: pitching.base_on_balls,
        pitching_intentional_walks: pitching.intentional_walks,
        pitching_strikeouts: pitching.strike_outs,
        pitching_hit_by_pitch: pitching.hit_by_pitch,
        pitching_balks: pitching.balks,
        pitching_wild_pitches: pitching.wild_pitches,
        pitching_ground_outs: pitching.ground_outs,
        pitching_air_outs: pitching.air_outs,
        pitching_stolen_bases: pitching.stolen_bases,
        pitching_caught_stealing: pitching.caught_stealing,
        pitching_sac_bunts: pitching.sac_bunts,
        pitching_sac_flies: pitching.sac_flies,
        pitching_catchers_interference: pitching.catchers_interference,
        pitching_passed_balls: pitching.passed_balls,
        pitching_pickoffs: pitching.pickoffs,
        pitching_inherited_runners: pitching.inherited_runners,
        pitching_inherited_runners_scored: pitching.inherited_runners_scored,
        pitching_pitches: pitching.number_of_pitches,
        pitching_pitch_strikes: pitching.strikes,
        pitching_pitch_balls: pitching.pitch_balls(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn feed() -> Value {
        json!({
            "gameData": {
                "game": {"type": "R"},
                "datetime": {"officialDate": "2024-06-01"},
                "teams": {
                    "away": {"id": 1, "abbreviation": "AWY", "league": {"id": 117}, "sport": {"id": 11}},
                    "home": {"id": 2, "abbreviation": "HOM"}
                }
            },
            "liveData": {
                "linescore": {"teams": {"away": {"runs": 5}, "home": {"runs": 3}}},
                "boxscore": {"teams": {
                    "away": {"players": {
                        "ID10": {
                            "person": {"id": 10, "fullName": "Two Way"},
                            "jerseyNumber": "21",
                            "battingOrder": "100",
                            "allPositions": [{"abbreviation": "P"}, {"abbreviation": "RF"}],
                            "stats": {
                                "batting": {"gamesPlayed": 1, "atBats": 4, "hits": 2},
                                "pitching": {"gamesPitched": 1, "gamesPlayed": 1, "outs": 16, "inningsPitched": "5.1", "numberOfPitches": 88, "strikes": 55, "balls": 33}
                            }
                        }
                    }},
                    "home": {"players": {
                        "ID20": {
                            "person": {"id": 20},
                            "stats": {"batting": {}, "pitching": {}}
                        }
                    }}
                }}
            }
        })
    }

    #[test]
    fn test_extract_player_game_stats() {
        let rows = extract_player_game_stats(&feed(), 777).unwrap();
        assert_eq!(rows.len(), 2);

        let away = &rows[0];
        assert_eq!(away.loc, "A");
        assert_eq!(away.score, "W 5-3");
        assert_eq!(away.team_abv.as_deref(), Some("AWY"));
        assert_eq!(away.opp_abv.as_deref(), Some("HOM"));
        assert_eq!(away.player_position.as_deref(), Some("P/RF"));
        assert_eq!(away.player_jersey_number.as_deref(), Some("21"));
        assert_eq!(away.batting_games, Some(1));
        assert_eq!(away.batting_hits, Some(2));
        assert_eq!(away.pitching_games, Some(1));
        assert_eq!(away.pitching_innings_pitched, Some(5.333));
        assert_eq!(away.pitching_innings_pitched_str.as_deref(), Some("5.1"));
        assert_eq!(away.pitching_pitch_balls, Some(33));
        assert_eq!(away.season, 2024);

        let home = &rows[1];
        assert_eq!(home.loc, "H");
        assert_eq!(home.score, "L 3-5");
        assert_eq!(home.player_position, None);
        assert_eq!(home.batting_at_bats, None);
        assert_eq!(home.pitching_innings_pitched, None);
    }

    #[test]
    fn test_empty_feed() {
        assert!(extract_player_game_stats(&json!({}), 1).unwrap().is_empty());
    }
}
