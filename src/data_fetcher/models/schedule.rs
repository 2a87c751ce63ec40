use crate::constants::game_status;
use serde::Serialize;

/// One scheduled game, flattened from `dates[].games[]` of the schedule endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleGame {
    pub date: String,
    pub game_pk: i64,
    pub link: Option<String>,
    pub game_type: Option<String>,
    pub season: Option<i32>,
    pub game_date: Option<String>,
    pub official_date: Option<String>,
    pub is_tie: bool,
    pub game_number: Option<i64>,
    pub public_facing: Option<bool>,
    pub double_header: Option<String>,
    pub gameday_type: Option<String>,
    pub tiebreaker: Option<String>,
    pub calendar_event_id: Option<String>,
    pub day_night: Option<String>,
    pub scheduled_innings: Option<i64>,
    pub reverse_home_away_status: Option<bool>,
    pub inning_break_length: Option<i64>,
    pub games_in_series: Option<i64>,
    pub series_game_number: Option<i64>,
    pub series_description: Option<String>,
    pub record_source: Option<String>,
    pub if_necessary: Option<String>,
    pub if_necessary_description: Option<String>,
    pub description: Option<String>,
    pub status_abstract_game_state: Option<String>,
    pub status_coded_game_state: Option<String>,
    pub status_detailed_state: Option<String>,
    pub status_status_code: Option<String>,
    pub status_start_time_tbd: Option<bool>,
    pub status_abstract_game_code: Option<String>,
    pub teams_away_score: Option<i64>,
    pub teams_away_is_winner: Option<bool>,
    pub teams_away_split_squad: Option<bool>,
    pub teams_away_series_number: Option<i64>,
    pub teams_away_league_record_wins: Option<i64>,
    pub teams_away_league_record_losses: Option<i64>,
    pub teams_away_league_record_pct: Option<f64>,
    pub teams_away_team_id: Option<i64>,
    pub teams_away_team_name: Option<String>,
    pub teams_away_team_link: Option<String>,
    pub teams_home_score: Option<i64>,
    pub teams_home_is_winner: Option<bool>,
    pub teams_home_split_squad: Option<bool>,
    pub teams_home_series_number: Option<i64>,
    pub teams_home_league_record_wins: Option<i64>,
    pub teams_home_league_record_losses: Option<i64>,
    pub teams_home_league_record_pct: Option<f64>,
    pub teams_home_team_id: Option<i64>,
    pub teams_home_team_name: Option<String>,
    pub teams_home_team_link: Option<String>,
    pub game_year: i32,
    pub game_month: u32,
    pub game_day: u32,
}

impl ScheduleGame {
    /// True when the game was played to completion: final, and not cancelled,
    /// postponed, still running or merely scheduled.
    pub fn is_completed(&self) -> bool {
        let is_final =
            self.status_abstract_game_state.as_deref() == Some(game_status::FINAL);
        let excluded = self
            .status_detailed_state
            .as_deref()
            .is_some_and(|state| game_status::EXCLUDED_DETAILED_STATES.contains(&state));
        is_final && !excluded
    }
}

/// Game ids of completed games played in `month`, in schedule order.
pub fn completed_game_ids_for_month(games: &[ScheduleGame], month: u32) -> Vec<i64> {
    games
        .iter()
        .filter(|game| game.game_month == month && game.is_completed())
        .map(|game| game.game_pk)
        .collect()
}

#[cfg(test)]
pub(crate) fn test_schedule_game(game_pk: i64, month: u32, abstract_state: &str, detailed_state: &str) -> ScheduleGame {
    ScheduleGame {
        date: format!("2024-{month:02}-10"),
        game_pk,
        link: None,
        game_type: Some("R".to_string()),
        season: Some(2024),
        game_date: None,
        official_date: None,
        is_tie: false,
        game_number: None,
        public_facing: None,
        double_header: None,
        gameday_type: None,
        tiebreaker: None,
        calendar_event_id: None,
        day_night: None,
        scheduled_innings: None,
        reverse_home_away_status: None,
        inning_break_length: None,
        games_in_series: None,
        series_game_number: None,
        series_description: None,
        record_source: None,
        if_necessary: None,
        if_necessary_description: None,
        description: None,
        status_abstract_game_state: Some(abstract_state.to_string()),
        status_coded_game_state: None,
        status_detailed_state: Some(detailed_state.to_string()),
        status_status_code: None,
        status_start_time_tbd: None,
        status_abstract_game_code: None,
        teams_away_score: None,
        teams_away_is_winner: None,
        teams_away_split_squad: None,
        teams_away_series_number: None,
        teams_away_league_record_wins: None,
        teams_away_league_record_losses: None,
        teams_away_league_record_pct: None,
        teams_away_team_id: None,
        teams_away_team_name: None,
        teams_away_team_link: None,
        teams_home_score: None,
        teams_home_is_winner: None,
        teams_home_split_squad: None,
        teams_home_series_number: None,
        teams_home_league_record_wins: None,
        teams_home_league_record_losses: None,
        teams_home_league_record_pct: None,
        teams_home_team_id: None,
        teams_home_team_name: None,
        teams_home_team_link: None,
        game_year: 2024,
        game_month: month,
        game_day: 10,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_completed() {
        assert!(test_schedule_game(1, 5, "Final", "Final").is_completed());
        assert!(test_schedule_game(1, 5, "Final", "Completed Early").is_completed());
        assert!(!test_schedule_game(1, 5, "Final", "Postponed").is_completed());
        assert!(!test_schedule_game(1, 5, "Final", "Cancelled").is_completed());
        assert!(!test_schedule_game(1, 5, "Live", "In Progress").is_completed());
        assert!(!test_schedule_game(1, 5, "Preview", "Scheduled").is_completed());
    }

    #[test]
    fn test_completed_game_ids_for_month() {
        let games = vec![
            test_schedule_game(10, 4, "Final", "Final"),
            test_schedule_game(11, 5, "Final", "Final"),
            test_schedule_game(12, 5, "Final", "Postponed"),
            test_schedule_game(13, 5, "Final", "Final"),
        ];
        assert_eq!(completed_game_ids_for_month(&games, 5), vec![11, 13]);
        assert_eq!(completed_game_ids_for_month(&games, 4), vec![10]);
        assert!(completed_game_ids_for_month(&games, 6).is_empty());
    }
}
