use crate::data_fetcher::models::ScheduleGame;
use crate::data_fetcher::processors::json_path::{
    get_f64, get_i64, get_opt, get_or_default, get_path, get_string, require_i64, require_string,
};
use crate::error::AppError;
use chrono::{Datelike, NaiveDate};
use serde_json::Value;
use tracing::debug;

fn items<'a>(root: &'a Value, key: &str) -> &'a [Value] {
    get_path(root, &[key])
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Flattens `dates[].games[]` of a schedule response into rows.
///
/// Every game needs a `gamePk` and every date group a parseable `date`;
/// anything else may be missing.
pub fn extract_schedule(document: &Value) -> Result<Vec<ScheduleGame>, AppError> {
    let mut games = Vec::new();

    for day in items(document, "dates") {
        let date = require_string(day, &["date"], "schedule date")?;
        let parsed = NaiveDate::parse_from_str(&date, "%Y-%m-%d").map_err(|e| {
            AppError::schema_violation("schedule date", format!("invalid date `{date}`: {e}"))
        })?;

        for game in items(day, "games") {
            games.push(schedule_row(game, &date, parsed)?);
        }
    }

    debug!("Parsed {} scheduled games", games.len());
    Ok(games)
}

fn schedule_row(game: &Value, date: &str, parsed: NaiveDate) -> Result<ScheduleGame, AppError> {
    let away = get_path(game, &["teams", "away"]).unwrap_or(&Value::Null);
    let home = get_path(game, &["teams", "home"]).unwrap_or(&Value::Null);
    let status = get_path(game, &["status"]).unwrap_or(&Value::Null);

    Ok(ScheduleGame {
        date: date.to_string(),
        game_pk: require_i64(game, &["gamePk"], "scheduled game")?,
        link: get_string(game, &["link"]),
        game_type: get_string(game, &["gameType"]),
        season: get_i64(game, &["season"]).and_then(|season| i32::try_from(season).ok()),
        game_date: get_string(game, &["gameDate"]),
        official_date: get_string(game, &["officialDate"]),
        is_tie: get_or_default(game, &["isTie"], false),
        game_number: get_i64(game, &["seriesStatus", "gameNumber"]),
        public_facing: get_opt(game, &["publicFacing"]),
        double_header: get_string(game, &["doubleHeader"]),
        gameday_type: get_string(game, &["gamedayType"]),
        tiebreaker: get_string(game, &["tiebreaker"]),
        calendar_event_id: get_string(game, &["calendarEventID"]),
        day_night: get_string(game, &["dayNight"]),
        scheduled_innings: get_i64(game, &["scheduledInnings"]),
        reverse_home_away_status: get_opt(game, &["reverseHomeAwayStatus"]),
        inning_break_length: get_i64(game, &["inningBreakLength"]),
        games_in_series: get_i64(game, &["gamesInSeries"]),
        series_game_number: get_i64(game, &["seriesGameNumber"]),
        series_description: get_string(game, &["seriesDescription"]),
        record_source: get_string(game, &["recordSource"]),
        if_necessary: get_string(game, &["ifNecessary"]),
        if_necessary_description: get_string(game, &["ifNecessaryDescription"]),
        description: get_string(game, &["description"]),
        status_abstract_game_state: get_string(status, &["abstractGameState"]),
        status_coded_game_state: get_string(status, &["codedGameState"]),
        status_detailed_state: get_string(status, &["detailedState"]),
        status_status_code: get_string(status, &["statusCode"]),
        status_start_time_tbd: get_opt(status, &["startTimeTBD"]),
        status_abstract_game_code: get_string(status, &["abstractGameCode"]),
        teams_away_score: get_i64(away, &["score"]),
        teams_away_is_winner: get_opt(away, &["isWinner"]),
        teams_away_split_squad: get_opt(away, &["splitSquad"]),
        teams_away_series_number: get_i64(away, &["seriesNumber"]),
        teams_away_league_record_wins: get_i64(away, &["leagueRecord", "wins"]),
        teams_away_league_record_losses: get_i64(away, &["leagueRecord", "losses"]),
        teams_away_league_record_pct: get_f64(away, &["leagueRecord", "pct"]),
        teams_away_team_id: get_i64(away, &["team", "id"]),
        teams_away_team_name: get_string(away, &["team", "name"]),
        teams_away_team_link: get_string(away, &["team", "link"]),
        teams_home_score: get_i64(home, &["score"]),
        teams_home_is_winner: get_opt(home, &["isWinner"]),
        teams_home_split_squad: get_opt(home, &["splitSquad"]),
        teams_home_series_number: get_i64(home, &["seriesNumber"]),
        teams_home_league_record_wins: get_i64(home, &["leagueRecord", "wins"]),
        teams_home_league_record_losses: get_i64(home, &["leagueRecord", "losses"]),
        teams_home_league_record_pct: get_f64(home, &["leagueRecord", "pct"]),
        teams_home_team_id: get_i64(home, &["team", "id"]),
        teams_home_team_name: get_string(home, &["team", "name"]),
        teams_home_team_link: get_string(home, &["team", "link"]),
        game_year: parsed.year(),
        game_month: parsed.month(),
        game_day: parsed.day(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document() -> Value {
        json!({
            "dates": [
                {
                    "date": "2024-04-02",
                    "games": [
                        {
                            "gamePk": 745001,
                            "gameType": "R",
                            "season": "2024",
                            "status": {"abstractGameState": "Final", "detailedState": "Final"},
                            "teams": {
                                "away": {
                                    "score": 4, "isWinner": true,
                                    "leagueRecord": {"wins": 1, "losses": 0, "pct": "1.000"},
                                    "team": {"id": 1, "name": "Away Club"}
                                },
                                "home": {
                                    "score": 2, "isWinner": false,
                                    "leagueRecord": {"wins": 0, "losses": 1, "pct": ".000"},
                                    "team": {"id": 2, "name": "Home Club"}
                                }
                            }
                        },
                        {"gamePk": "745002", "status": {"abstractGameState": "Preview", "detailedState": "Postponed"}}
                    ]
                },
                {"date": "2024-05-01", "games": [{"gamePk": 745100}]}
            ]
        })
    }

    #[test]
    fn test_extract_schedule() {
        let games = extract_schedule(&document()).unwrap();
        assert_eq!(games.len(), 3);

        let first = &games[0];
        assert_eq!(first.game_pk, 745001);
        assert_eq!(first.season, Some(2024));
        assert_eq!(first.teams_away_league_record_pct, Some(1.0));
        assert_eq!(first.teams_home_league_record_pct, Some(0.0));
        assert_eq!(first.teams_away_is_winner, Some(true));
        assert_eq!(first.teams_home_team_name.as_deref(), Some("Home Club"));
        assert_eq!((first.game_year, first.game_month, first.game_day), (2024, 4, 2));
        assert!(!first.is_tie);
        assert!(first.is_completed());

        assert_eq!(games[1].game_pk, 745002);
        assert!(!games[1].is_completed());
        assert_eq!(games[2].game_month, 5);
        assert_eq!(games[2].status_detailed_state, None);
    }

    #[test]
    fn test_empty_schedule() {
        assert!(extract_schedule(&json!({})).unwrap().is_empty());
        assert!(extract_schedule(&json!({"dates": []})).unwrap().is_empty());
    }

    #[test]
    fn test_missing_game_pk_fails() {
        let document = json!({"dates": [{"date": "2024-04-02", "games": [{"gameType": "R"}]}]});
        assert!(matches!(
            extract_schedule(&document).unwrap_err(),
            AppError::SchemaViolation { .. }
        ));
    }
}
