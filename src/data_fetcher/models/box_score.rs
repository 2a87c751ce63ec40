use serde::Serialize;

/// One player's line in one game, read from the live feed box score.
///
/// Batting columns are empty for players who did not bat, pitching columns
/// for players who did not pitch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerGameStats {
    pub season: i32,
    pub game_id: i64,
    pub game_date: String,
    pub game_type: String,
    pub league_id: Option<i64>,
    pub league_name: Option<String>,
    pub league_level_id: Option<i64>,
    pub league_level_name: Option<String>,
    pub team_org_id: Option<i64>,
    pub team_org_name: Option<String>,
    pub team_id: Option<i64>,
    pub team_abv: Option<String>,
    pub team_name: Option<String>,
    pub loc: &'static str,
    pub opp_org_id: Option<i64>,
    pub opp_org_name: Option<String>,
    pub opp_id: Option<i64>,
    pub opp_abv: Option<String>,
    pub opp_name: Option<String>,
    pub team_runs: i64,
    pub opp_runs: i64,
    pub score: String,
    pub player_id: i64,
    pub player_jersey_number: Option<String>,
    pub player_full_name: Option<String>,
    pub player_position: Option<String>,
    pub player_batting_order: Option<String>,
    #[serde(rename = "batting_G")]
    pub batting_games: Option<i64>,
    #[serde(rename = "batting_PA")]
    pub batting_plate_appearances: Option<i64>,
    #[serde(rename = "batting_AB")]
    pub batting_at_bats: Option<i64>,
    #[serde(rename = "batting_R")]
    pub batting_runs: Option<i64>,
    #[serde(rename = "batting_H")]
    pub batting_hits: Option<i64>,
    #[serde(rename = "batting_2B")]
    pub batting_doubles: Option<i64>,
    #[serde(rename = "batting_3B")]
    pub batting_triples: Option<i64>,
    #[serde(rename = "batting_HR")]
    pub batting_home_runs: Option<i64>,
    #[serde(rename = "batting_RBI")]
    pub batting_rbi: Option<i64>,
    #[serde(rename = "batting_SB")]
    pub batting_stolen_bases: Option<i64>,
    #[serde(rename = "batting_CS")]
    pub batting_caught_stealing: Option<i64>,
    #[serde(rename = "batting_BB")]
    pub batting_walks: Option<i64>,
    #[serde(rename = "batting_IBB")]
    pub batting_intentional_walks: Option<i64>,
    #[serde(rename = "batting_SO")]
    pub batting_strikeouts: Option<i64>,
    #[serde(rename = "batting_TB")]
    pub batting_total_bases: Option<i64>,
    #[serde(rename = "batting_GiDP")]
    pub batting_gidp: Option<i64>,
    #[serde(rename = "batting_GiTP")]
    pub batting_gitp: Option<i64>,
    #[serde(rename = "batting_HBP")]
    pub batting_hit_by_pitch: Option<i64>,
    #[serde(rename = "batting_SH")]
    pub batting_sac_bunts: Option<i64>,
    #[serde(rename = "batting_SF")]
    pub batting_sac_flies: Option<i64>,
    #[serde(rename = "batting_CI")]
    pub batting_catchers_interference: Option<i64>,
    #[serde(rename = "batting_FO")]
    pub batting_fly_outs: Option<i64>,
    #[serde(rename = "batting_GO")]
    pub batting_ground_outs: Option<i64>,
    #[serde(rename = "batting_LOB")]
    pub batting_left_on_base: Option<i64>,
    #[serde(rename = "pitching_G")]
    pub pitching_games: Option<i64>,
    #[serde(rename = "pitching_GS")]
    pub pitching_games_started: Option<i64>,
    #[serde(rename = "pitching_GF")]
    pub pitching_games_finished: Option<i64>,
    #[serde(rename = "pitching_CG")]
    pub pitching_complete_games: Option<i64>,
    #[serde(rename = "pitching_SHO")]
    pub pitching_shutouts: Option<i64>,
    #[serde(rename = "pitching_W")]
    pub pitching_wins: Option<i64>,
    #[serde(rename = "pitching_L")]
    pub pitching_losses: Option<i64>,
    #[serde(rename = "pitching_SVO")]
    pub pitching_save_opportunities: Option<i64>,
    #[serde(rename = "pitching_SV")]
    pub pitching_saves: Option<i64>,
    #[serde(rename = "pitching_BS")]
    pub pitching_blown_saves: Option<i64>,
    #[serde(rename = "pitching_HLD")]
    pub pitching_holds: Option<i64>,
    #[serde(rename = "pitching_IP")]
    pub pitching_innings_pitched: Option<f64>,
    #[serde(rename = "pitching_IP_str")]
    pub pitching_innings_pitched_str: Option<String>,
    #[serde(rename = "pitching_R")]
    pub pitching_runs: Option<i64>,
    #[serde(rename = "pitching_ER")]
    pub pitching_earned_runs: Option<i64>,
    #[serde(rename = "pitching_BF")]
    pub pitching_batters_faced: Option<i64>,
    #[serde(rename = "pitching_AB")]
    pub pitching_at_bats: Option<i64>,
    #[serde(rename = "pitching_H")]
    pub pitching_hits: Option<i64>,
    #[serde(rename = "pitching_2B")]
    pub pitching_doubles: Option<i64>,
    #[serde(rename = "pitching_3B")]
    pub pitching_triples: Option<i64>,
    #[serde(rename = "pitching_HR")]
    pub pitching_home_runs: Option<i64>,
    #[serde(rename = "pitching_RBI")]
    pub pitching_rbi: Option<i64>,
    #[serde(rename = "pitching_BB")]
    pub pitching_walks: Option<i64>,
    #[serde(rename = "pitching_IBB")]
    pub pitching_intentional_walks: Option<i64>,
    #[serde(rename = "pitching_SO")]
    pub pitching_strikeouts: Option<i64>,
    #[serde(rename = "pitching_HBP")]
    pub pitching_hit_by_pitch: Option<i64>,
    #[serde(rename = "pitching_BK")]
    pub pitching_balks: Option<i64>,
    #[serde(rename = "pitching_WP")]
    pub pitching_wild_pitches: Option<i64>,
    #[serde(rename = "pitching_GO")]
    pub pitching_ground_outs: Option<i64>,
    #[serde(rename = "pitching_AO")]
    pub pitching_air_outs: Option<i64>,
    #[serde(rename = "pitching_SB")]
    pub pitching_stolen_bases: Option<i64>,
    #[serde(rename = "pitching_CS")]
    pub pitching_caught_stealing: Option<i64>,
    #[serde(rename = "pitching_SH")]
    pub pitching_sac_bunts: Option<i64>,
    #[serde(rename = "pitching_SF")]
    pub pitching_sac_flies: Option<i64>,
    #[serde(rename = "pitching_CI")]
    pub pitching_catchers_interference: Option<i64>,
    #[serde(rename = "pitching_PB")]
    pub pitching_passed_balls: Option<i64>,
    #[serde(rename = "pitching_PK")]
    pub pitching_pickoffs: Option<i64>,
    #[serde(rename = "pitching_IR")]
    pub pitching_inherited_runners: Option<i64>,
    #[serde(rename = "pitching_IRS")]
    pub pitching_inherited_runners_scored: Option<i64>,
    #[serde(rename = "pitching_PI")]
    pub pitching_pitches: Option<i64>,
    #[serde(rename = "pitching_PI_strikes")]
    pub pitching_pitch_strikes: Option<i64>,
    #[serde(rename = "pitching_PI_balls")]
    pub pitching_pitch_balls: Option<i64>,
}

/// Final score from one side's point of view, e.g. `W 5-3`.
pub fn score_line(team_runs: i64, opp_runs: i64) -> String {
    let outcome = match team_runs.cmp(&opp_runs) {
        std::cmp::Ordering::Greater => 'W',
        std::cmp::Ordering::Less => 'L',
        std::cmp::Ordering::Equal => 'T',
    };
    format!("{outcome} {team_runs}-{opp_runs}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_line() {
        assert_eq!(score_line(5, 3), "W 5-3");
        assert_eq!(score_line(3, 5), "L 3-5");
        assert_eq!(score_line(2, 2), "T 2-2");
    }
}
