//! URL building utilities for API endpoints

use crate::data_fetcher::models::StatGroup;

/// Builds the live feed URL of a single game.
///
/// # Example
/// ```
/// use milb_stats::data_fetcher::api::build_game_feed_url;
///
/// let url = build_game_feed_url("https://api.example.com/api", 745001);
/// assert_eq!(url, "https://api.example.com/api/v1.1/game/745001/feed/live");
/// ```
pub fn build_game_feed_url(api_base: &str, game_id: i64) -> String {
    format!("{api_base}/v1.1/game/{game_id}/feed/live")
}

/// Builds the schedule URL hydrated with the starting lineups of one game.
///
/// # Example
/// ```
/// use milb_stats::data_fetcher::api::build_lineups_url;
///
/// let url = build_lineups_url("https://api.example.com/api", 745001);
/// assert_eq!(
///     url,
///     "https://api.example.com/api/v1/schedule?gamePk=745001&language=en&hydrate=lineups"
/// );
/// ```
pub fn build_lineups_url(api_base: &str, game_id: i64) -> String {
    format!("{api_base}/v1/schedule?gamePk={game_id}&language=en&hydrate=lineups")
}

/// Builds the season schedule URL for one or more sport ids.
///
/// # Arguments
/// * `api_base` - The base API URL
/// * `season` - The season year
/// * `sport_ids` - Sport ids joined with commas in the query
///
/// # Example
/// ```
/// use milb_stats::data_fetcher::api::build_schedule_url;
///
/// let url = build_schedule_url("https://api.example.com/api", 2024, &[11, 12]);
/// assert_eq!(
///     url,
///     "https://api.example.com/api/v1/schedule?lang=en&sportId=11,12&season=2024&eventTypes=primary&scheduleTypes=games"
/// );
/// ```
pub fn build_schedule_url(api_base: &str, season: i32, sport_ids: &[u32]) -> String {
    let sport_ids = sport_ids
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",");
    format!(
        "{api_base}/v1/schedule?lang=en&sportId={sport_ids}&season={season}&eventTypes=primary&scheduleTypes=games"
    )
}

/// Builds the team directory URL of a season.
///
/// # Example
/// ```
/// use milb_stats::data_fetcher::api::build_teams_url;
///
/// let url = build_teams_url("https://api.example.com/api", 2024);
/// assert_eq!(url, "https://api.example.com/api/v1/teams?season=2024");
/// ```
pub fn build_teams_url(api_base: &str, season: i32) -> String {
    format!("{api_base}/v1/teams?season={season}")
}

/// Builds the stats-service URL for the season lines of one team's players.
///
/// # Example
/// ```
/// use milb_stats::data_fetcher::api::build_player_stats_url;
/// use milb_stats::data_fetcher::models::StatGroup;
///
/// let url = build_player_stats_url("https://stats.example.com", 2024, 11, 534, StatGroup::Batting);
/// assert!(url.starts_with("https://stats.example.com/stats/player?stitch_env=prod&season=2024&sportId=11&teamId=534"));
/// assert!(url.contains("&group=hitting&"));
/// ```
pub fn build_player_stats_url(
    stats_base: &str,
    season: i32,
    sport_id: u32,
    team_id: i64,
    group: StatGroup,
) -> String {
    format!(
        "{stats_base}/stats/player?stitch_env=prod&season={season}&sportId={sport_id}&teamId={team_id}&stats=season&group={}&gameType=R&limit=100&offset=0&playerPool=ALL",
        group.api_group()
    )
}

/// Builds the stats-service URL for the season lines of every team at a level.
///
/// # Example
/// ```
/// use milb_stats::data_fetcher::api::build_team_stats_url;
/// use milb_stats::data_fetcher::models::StatGroup;
///
/// let url = build_team_stats_url("https://stats.example.com", 2024, 13, StatGroup::Pitching);
/// assert_eq!(
///     url,
///     "https://stats.example.com/stats/team?stitch_env=prod&season=2024&sportId=13&gameType=R&group=pitching&order=desc&sortStat=onBasePlusSlugging&stats=season&limit=200&offset=0"
/// );
/// ```
pub fn build_team_stats_url(
    stats_base: &str,
    season: i32,
    sport_id: u32,
    group: StatGroup,
) -> String {
    format!(
        "{stats_base}/stats/team?stitch_env=prod&season={season}&sportId={sport_id}&gameType=R&group={}&order=desc&sortStat=onBasePlusSlugging&stats=season&limit=200&offset=0",
        group.api_group()
    )
}
