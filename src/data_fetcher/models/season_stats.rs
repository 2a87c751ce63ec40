use serde::Serialize;

/// Season batting line of one player on one team.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSeasonBatting {
    pub season: i32,
    pub team_id: i64,
    pub team_abv: Option<String>,
    pub team_name: Option<String>,
    pub team_league_id: Option<i64>,
    pub team_league: Option<String>,
    pub team_level_id: u32,
    pub team_level_abv: &'static str,
    pub player_id: Option<i64>,
    pub player_full_name: Option<String>,
    pub player_first_name: Option<String>,
    pub player_last_name: Option<String>,
    pub player_use_name: Option<String>,
    pub player_initial_name: Option<String>,
    pub player_position: Option<String>,
    #[serde(rename = "G")]
    pub games: Option<i64>,
    #[serde(rename = "batting_PA")]
    pub plate_appearances: Option<i64>,
    #[serde(rename = "batting_AB")]
    pub at_bats: Option<i64>,
    #[serde(rename = "batting_R")]
    pub runs: Option<i64>,
    #[serde(rename = "batting_H")]
    pub hits: Option<i64>,
    #[serde(rename = "batting_2B")]
    pub doubles: Option<i64>,
    #[serde(rename = "batting_3B")]
    pub triples: Option<i64>,
    #[serde(rename = "batting_HR")]
    pub home_runs: Option<i64>,
    #[serde(rename = "batting_RBI")]
    pub rbi: Option<i64>,
    #[serde(rename = "batting_SB")]
    pub stolen_bases: Option<i64>,
    #[serde(rename = "batting_CS")]
    pub caught_stealing: Option<i64>,
    #[serde(rename = "batting_BB")]
    pub walks: Option<i64>,
    #[serde(rename = "batting_IBB")]
    pub intentional_walks: Option<i64>,
    #[serde(rename = "batting_SO")]
    pub strikeouts: Option<i64>,
    #[serde(rename = "batting_TB")]
    pub total_bases: Option<i64>,
    #[serde(rename = "batting_GiDP_Opp")]
    pub gidp_opportunities: Option<i64>,
    #[serde(rename = "batting_GiDP")]
    pub gidp: Option<i64>,
    #[serde(rename = "batting_SH")]
    pub sac_bunts: Option<i64>,
    #[serde(rename = "batting_SF")]
    pub sac_flies: Option<i64>,
    #[serde(rename = "batting_HBP")]
    pub hit_by_pitch: Option<i64>,
    #[serde(rename = "batting_XBH")]
    pub extra_base_hits: Option<i64>,
    #[serde(rename = "batting_GO")]
    pub ground_outs: Option<i64>,
    #[serde(rename = "batting_AO")]
    pub air_outs: Option<i64>,
    #[serde(rename = "batting_FO")]
    pub fly_outs: Option<i64>,
    #[serde(rename = "batting_PO")]
    pub pop_outs: Option<i64>,
    #[serde(rename = "batting_LO")]
    pub line_outs: Option<i64>,
    #[serde(rename = "batting_CI")]
    pub catchers_interference: Option<i64>,
    #[serde(rename = "batting_LOB")]
    pub left_on_base: Option<i64>,
    #[serde(rename = "batting_ground_hits")]
    pub ground_hits: Option<i64>,
    #[serde(rename = "batting_fly_hits")]
    pub fly_hits: Option<i64>,
    #[serde(rename = "batting_pop_hits")]
    pub pop_hits: Option<i64>,
    #[serde(rename = "batting_line_hits")]
    pub line_hits: Option<i64>,
    #[serde(rename = "batting_pitches_faced")]
    pub pitches_faced: Option<i64>,
    #[serde(rename = "batting_swings")]
    pub swings: Option<i64>,
    #[serde(rename = "batting_whiffs")]
    pub whiffs: Option<i64>,
    #[serde(rename = "batting_balls_in_play")]
    pub balls_in_play: Option<i64>,
    #[serde(rename = "batting_reached_on_error")]
    pub reached_on_error: Option<i64>,
    #[serde(rename = "batting_walkoffs")]
    pub walk_offs: Option<i64>,
    #[serde(rename = "batting_AVG")]
    pub avg: Option<f64>,
    #[serde(rename = "batting_OBP")]
    pub obp: Option<f64>,
    #[serde(rename = "batting_SLG")]
    pub slg: Option<f64>,
    #[serde(rename = "batting_OPS")]
    pub ops: Option<f64>,
    #[serde(rename = "batting_ISO")]
    pub iso: Option<f64>,
    #[serde(rename = "batting_BABiP")]
    pub babip: Option<f64>,
    #[serde(rename = "batting_GO/AO")]
    pub go_ao: Option<f64>,
}

/// Season pitching line of one player on one team.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSeasonPitching {
    pub season: i32,
    pub team_id: i64,
    pub team_abv: Option<String>,
    pub team_name: Option<String>,
    pub team_league_id: Option<i64>,
    pub team_league: Option<String>,
    pub team_level_id: u32,
    pub team_level_abv: &'static str,
    pub player_id: Option<i64>,
    pub player_full_name: Option<String>,
    pub player_first_name: Option<String>,
    pub player_last_name: Option<String>,
    pub player_use_name: Option<String>,
    pub player_initial_name: Option<String>,
    pub player_position: Option<String>,
    #[serde(rename = "pitching_W")]
    pub wins: Option<i64>,
    #[serde(rename = "pitching_L")]
    pub losses: Option<i64>,
    #[serde(rename = "pitching_G")]
    pub games: Option<i64>,
    #[serde(rename = "pitching_GS")]
    pub games_started: Option<i64>,
    #[serde(rename = "pitching_GF")]
    pub games_finished: Option<i64>,
    #[serde(rename = "pitching_CG")]
    pub complete_games: Option<i64>,
    #[serde(rename = "pitching_QS")]
    pub quality_starts: Option<i64>,
    #[serde(rename = "pitching_SHO")]
    pub shutouts: Option<i64>,
    #[serde(rename = "pitching_SVO")]
    pub save_opportunities: Option<i64>,
    #[serde(rename = "pitching_SV")]
    pub saves: Option<i64>,
    #[serde(rename = "pitching_HLD")]
    pub holds: Option<i64>,
    #[serde(rename = "pitching_BS")]
    pub blown_saves: Option<i64>,
    #[serde(rename = "pitching_IP_str")]
    pub innings_pitched_str: Option<String>,
    #[serde(rename = "pitching_IP")]
    pub innings_pitched: Option<f64>,
    #[serde(rename = "pitching_BF")]
    pub batters_faced: Option<i64>,
    #[serde(rename = "pitching_AB")]
    pub at_bats: Option<i64>,
    #[serde(rename = "pitching_R")]
    pub runs: Option<i64>,
    #[serde(rename = "pitching_ER")]
    pub earned_runs: Option<i64>,
    #[serde(rename = "pitching_H")]
    pub hits: Option<i64>,
    #[serde(rename = "pitching_2B")]
    pub doubles: Option<i64>,
    #[serde(rename = "pitching_3B")]
    pub triples: Option<i64>,
    #[serde(rename = "pitching_HR")]
    pub home_runs: Option<i64>,
    #[serde(rename = "pitching_TB")]
    pub total_bases: Option<i64>,
    #[serde(rename = "pitching_BB")]
    pub walks: Option<i64>,
    #[serde(rename = "pitching_IBB")]
    pub intentional_walks: Option<i64>,
    #[serde(rename = "pitching_SO")]
    pub strikeouts: Option<i64>,
    #[serde(rename = "pitching_HBP")]
    pub hit_by_pitch: Option<i64>,
    #[serde(rename = "pitching_BK")]
    pub balks: Option<i64>,
    #[serde(rename = "pitching_WP")]
    pub wild_pitches: Option<i64>,
    #[serde(rename = "pitching_GiDP")]
    pub gidp: Option<i64>,
    #[serde(rename = "pitching_GiDP_opp")]
    pub gidp_opportunities: Option<i64>,
    #[serde(rename = "pitching_CI")]
    pub catchers_interference: Option<i64>,
    #[serde(rename = "pitching_IR")]
    pub inherited_runners: Option<i64>,
    #[serde(rename = "pitching_IRS")]
    pub inherited_runners_scored: Option<i64>,
    #[serde(rename = "pitching_BqR")]
    pub bequeathed_runners: Option<i64>,
    #[serde(rename = "pitching_BqRS")]
    pub bequeathed_runners_scored: Option<i64>,
    #[serde(rename = "pitching_RS")]
    pub run_support: Option<i64>,
    #[serde(rename = "pitching_SH")]
    pub sac_bunts: Option<i64>,
    #[serde(rename = "pitching_SF")]
    pub sac_flies: Option<i64>,
    #[serde(rename = "pitching_SB")]
    pub stolen_bases: Option<i64>,
    #[serde(rename = "pitching_CS")]
    pub caught_stealing: Option<i64>,
    #[serde(rename = "pitching_PK")]
    pub pickoffs: Option<i64>,
    #[serde(rename = "pitching_FH")]
    pub fly_hits: Option<i64>,
    #[serde(rename = "pitching_PH")]
    pub pop_hits: Option<i64>,
    #[serde(rename = "pitching_LH")]
    pub line_hits: Option<i64>,
    #[serde(rename = "pitching_FO")]
    pub fly_outs: Option<i64>,
    #[serde(rename = "pitching_GO")]
    pub ground_outs: Option<i64>,
    #[serde(rename = "pitching_AO")]
    pub air_outs: Option<i64>,
    #[serde(rename = "pitching_pop_outs")]
    pub pop_outs: Option<i64>,
    #[serde(rename = "pitching_line_outs")]
    pub line_outs: Option<i64>,
    #[serde(rename = "pitching_PI")]
    pub pitches: Option<i64>,
    #[serde(rename = "pitching_PI_strikes")]
    pub pitch_strikes: Option<i64>,
    #[serde(rename = "pitching_PI_balls")]
    pub pitch_balls: Option<i64>,
    #[serde(rename = "pitching_total_swings")]
    pub total_swings: Option<i64>,
    #[serde(rename = "pitching_swing_and_misses")]
    pub swing_and_misses: Option<i64>,
    #[serde(rename = "pitching_balls_in_play")]
    pub balls_in_play: Option<i64>,
    #[serde(rename = "pitching_W%")]
    pub win_pct: Option<f64>,
    #[serde(rename = "pitching_ERA")]
    pub era: Option<f64>,
    #[serde(rename = "pitching_RA9")]
    pub ra9: Option<f64>,
    #[serde(rename = "pitching_WHIP")]
    pub whip: Option<f64>,
    #[serde(rename = "pitching_H/9")]
    pub h_per_9: Option<f64>,
    #[serde(rename = "pitching_HR/9")]
    pub hr_per_9: Option<f64>,
    #[serde(rename = "pitching_BB/9")]
    pub bb_per_9: Option<f64>,
    #[serde(rename = "pitching_SO/9")]
    pub so_per_9: Option<f64>,
    #[serde(rename = "pitching_BABiP")]
    pub babip: Option<f64>,
    #[serde(rename = "pitching_SO/BB")]
    pub so_bb: Option<f64>,
    #[serde(rename = "pitching_BA")]
    pub ba: Option<f64>,
    #[serde(rename = "pitching_OBP")]
    pub obp: Option<f64>,
    #[serde(rename = "pitching_SLG")]
    pub slg: Option<f64>,
    #[serde(rename = "pitching_OPS")]
    pub ops: Option<f64>,
    #[serde(rename = "pitching_ISO")]
    pub iso: Option<f64>,
    #[serde(rename = "pitching_SO%")]
    pub so_pct: Option<f64>,
    #[serde(rename = "pitching_BB/SO")]
    pub bb_so: Option<f64>,
    #[serde(rename = "pitching_PI/PA")]
    pub pi_pa: Option<f64>,
    #[serde(rename = "pitching_HR/PA")]
    pub hr_pa: Option<f64>,
    #[serde(rename = "pitching_BB/PA")]
    pub bb_pa: Option<f64>,
    #[serde(rename = "pitching_PI/IP")]
    pub pi_ip: Option<f64>,
}

/// Season batting totals of one team.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamSeasonBatting {
    pub season: i32,
    pub level_abv: &'static str,
    pub team_id: Option<i64>,
    pub team_abv: Option<String>,
    pub team_name: Option<String>,
    pub team_short_name: Option<String>,
    pub team_nickname: Option<String>,
    pub league_abv: Option<String>,
    pub league_name: Option<String>,
    pub league_short_name: Option<String>,
    #[serde(rename = "batting_G")]
    pub games: Option<i64>,
    #[serde(rename = "batting_PA")]
    pub plate_appearances: Option<i64>,
    #[serde(rename = "batting_AB")]
    pub at_bats: Option<i64>,
    #[serde(rename = "batting_R")]
    pub runs: Option<i64>,
    #[serde(rename = "batting_H")]
    pub hits: Option<i64>,
    #[serde(rename = "batting_2B")]
    pub doubles: Option<i64>,
    #[serde(rename = "batting_3B")]
    pub triples: Option<i64>,
    #[serde(rename = "batting_HR")]
    pub home_runs: Option<i64>,
    #[serde(rename = "batting_RBI")]
    pub rbi: Option<i64>,
    #[serde(rename = "batting_SB")]
    pub stolen_bases: Option<i64>,
    #[serde(rename = "batting_CS")]
    pub caught_stealing: Option<i64>,
    #[serde(rename = "batting_BB")]
    pub walks: Option<i64>,
    #[serde(rename = "batting_IBB")]
    pub intentional_walks: Option<i64>,
    #[serde(rename = "batting_SO")]
    pub strikeouts: Option<i64>,
    #[serde(rename = "batting_TB")]
    pub total_bases: Option<i64>,
    #[serde(rename = "batting_GiDP")]
    pub gidp: Option<i64>,
    #[serde(rename = "batting_HBP")]
    pub hit_by_pitch: Option<i64>,
    #[serde(rename = "batting_PI_faced")]
    pub pitches_faced: Option<i64>,
    #[serde(rename = "batting_LOB")]
    pub left_on_base: Option<i64>,
    #[serde(rename = "batting_CI")]
    pub catchers_interference: Option<i64>,
    #[serde(rename = "batting_GO")]
    pub ground_outs: Option<i64>,
    #[serde(rename = "batting_AO")]
    pub air_outs: Option<i64>,
    #[serde(rename = "batting_SH")]
    pub sac_bunts: Option<i64>,
    #[serde(rename = "batting_SF")]
    pub sac_flies: Option<i64>,
    #[serde(rename = "batting_AVG")]
    pub avg: Option<f64>,
    #[serde(rename = "batting_OBP")]
    pub obp: Option<f64>,
    #[serde(rename = "batting_SLG")]
    pub slg: Option<f64>,
    #[serde(rename = "batting_OPS")]
    pub ops: Option<f64>,
    #[serde(rename = "batting_ISO")]
    pub iso: Option<f64>,
    #[serde(rename = "batting_BABiP")]
    pub babip: Option<f64>,
    #[serde(rename = "batting_GO/AO")]
    pub go_ao: Option<f64>,
}

/// Season pitching totals of one team.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamSeasonPitching {
    pub season: i32,
    pub level_abv: &'static str,
    pub team_id: Option<i64>,
    pub team_abv: Option<String>,
    pub team_name: Option<String>,
    pub team_short_name: Option<String>,
    pub team_nickname: Option<String>,
    pub league_abv: Option<String>,
    pub league_name: Option<String>,
    pub league_short_name: Option<String>,
    #[serde(rename = "pitching_W")]
    pub wins: Option<i64>,
    #[serde(rename = "pitching_L")]
    pub losses: Option<i64>,
    #[serde(rename = "pitching_G")]
    pub games: Option<i64>,
    #[serde(rename = "pitching_GS")]
    pub games_started: Option<i64>,
    #[serde(rename = "pitching_GF")]
    pub games_finished: Option<i64>,
    #[serde(rename = "pitching_CG")]
    pub complete_games: Option<i64>,
    #[serde(rename = "pitching_QS")]
    pub quality_starts: Option<i64>,
    #[serde(rename = "pitching_SHO")]
    pub shutouts: Option<i64>,
    #[serde(rename = "pitching_SVO")]
    pub save_opportunities: Option<i64>,
    #[serde(rename = "pitching_SV")]
    pub saves: Option<i64>,
    #[serde(rename = "pitching_HLD")]
    pub holds: Option<i64>,
    #[serde(rename = "pitching_BS")]
    pub blown_saves: Option<i64>,
    #[serde(rename = "pitching_IP_str")]
    pub innings_pitched_str: Option<String>,
    #[serde(rename = "pitching_IP")]
    pub innings_pitched: Option<f64>,
    #[serde(rename = "pitching_BF")]
    pub batters_faced: Option<i64>,
    #[serde(rename = "pitching_AB")]
    pub at_bats: Option<i64>,
    #[serde(rename = "pitching_R")]
    pub runs: Option<i64>,
    #[serde(rename = "pitching_ER")]
    pub earned_runs: Option<i64>,
    #[serde(rename = "pitching_H")]
    pub hits: Option<i64>,
    #[serde(rename = "pitching_2B")]
    pub doubles: Option<i64>,
    #[serde(rename = "pitching_3B")]
    pub triples: Option<i64>,
    #[serde(rename = "pitching_HR")]
    pub home_runs: Option<i64>,
    #[serde(rename = "pitching_TB")]
    pub total_bases: Option<i64>,
    #[serde(rename = "pitching_BB")]
    pub walks: Option<i64>,
    #[serde(rename = "pitching_IBB")]
    pub intentional_walks: Option<i64>,
    #[serde(rename = "pitching_SO")]
    pub strikeouts: Option<i64>,
    #[serde(rename = "pitching_HBP")]
    pub hit_by_pitch: Option<i64>,
    #[serde(rename = "pitching_BK")]
    pub balks: Option<i64>,
    #[serde(rename = "pitching_WP")]
    pub wild_pitches: Option<i64>,
    #[serde(rename = "pitching_GiDP")]
    pub gidp: Option<i64>,
    #[serde(rename = "pitching_GiDP_opp")]
    pub gidp_opportunities: Option<i64>,
    #[serde(rename = "pitching_CI")]
    pub catchers_interference: Option<i64>,
    #[serde(rename = "pitching_IR")]
    pub inherited_runners: Option<i64>,
    #[serde(rename = "pitching_IRS")]
    pub inherited_runners_scored: Option<i64>,
    #[serde(rename = "pitching_BqR")]
    pub bequeathed_runners: Option<i64>,
    #[serde(rename = "pitching_BqRS")]
    pub bequeathed_runners_scored: Option<i64>,
    #[serde(rename = "pitching_RS")]
    pub run_support: Option<i64>,
    #[serde(rename = "pitching_SH")]
    pub sac_bunts: Option<i64>,
    #[serde(rename = "pitching_SF")]
    pub sac_flies: Option<i64>,
    #[serde(rename = "pitching_SB")]
    pub stolen_bases: Option<i64>,
    #[serde(rename = "pitching_CS")]
    pub caught_stealing: Option<i64>,
    #[serde(rename = "pitching_PK")]
    pub pickoffs: Option<i64>,
    #[serde(rename = "pitching_FH")]
    pub fly_hits: Option<i64>,
    #[serde(rename = "pitching_PH")]
    pub pop_hits: Option<i64>,
    #[serde(rename = "pitching_LH")]
    pub line_hits: Option<i64>,
    #[serde(rename = "pitching_FO")]
    pub fly_outs: Option<i64>,
    #[serde(rename = "pitching_GO")]
    pub ground_outs: Option<i64>,
    #[serde(rename = "pitching_AO")]
    pub air_outs: Option<i64>,
    #[serde(rename = "pitching_pop_outs")]
    pub pop_outs: Option<i64>,
    #[serde(rename = "pitching_line_outs")]
    pub line_outs: Option<i64>,
    #[serde(rename = "pitching_PI")]
    pub pitches: Option<i64>,
    #[serde(rename = "pitching_PI_strikes")]
    pub pitch_strikes: Option<i64>,
    #[serde(rename = "pitching_PI_balls")]
    pub pitch_balls: Option<i64>,
    #[serde(rename = "pitching_total_swings")]
    pub total_swings: Option<i64>,
    #[serde(rename = "pitching_swing_and_misses")]
    pub swing_and_misses: Option<i64>,
    #[serde(rename = "pitching_balls_in_play")]
    pub balls_in_play: Option<i64>,
    #[serde(rename = "pitching_W%")]
    pub win_pct: Option<f64>,
    #[serde(rename = "pitching_ERA")]
    pub era: Option<f64>,
    #[serde(rename = "pitching_RA9")]
    pub ra9: Option<f64>,
    #[serde(rename = "pitching_WHIP")]
    pub whip: Option<f64>,
    #[serde(rename = "pitching_H/9")]
    pub h_per_9: Option<f64>,
    #[serde(rename = "pitching_HR/9")]
    pub hr_per_9: Option<f64>,
    #[serde(rename = "pitching_BB/9")]
    pub bb_per_9: Option<f64>,
    #[serde(rename = "pitching_SO/9")]
    pub so_per_9: Option<f64>,
    #[serde(rename = "pitching_BABiP")]
    pub babip: Option<f64>,
    #[serde(rename = "pitching_SO/BB")]
    pub so_bb: Option<f64>,
    #[serde(rename = "pitching_BA")]
    pub ba: Option<f64>,
    #[serde(rename = "pitching_OBP")]
    pub obp: Option<f64>,
    #[serde(rename = "pitching_SLG")]
    pub slg: Option<f64>,
    #[serde(rename = "pitching_OPS")]
    pub ops: Option<f64>,
    #[serde(rename = "pitching_ISO")]
    pub iso: Option<f64>,
    #[serde(rename = "pitching_SO%")]
    pub so_pct: Option<f64>,
    #[serde(rename = "pitching_BB/SO")]
    pub bb_so: Option<f64>,
    #[serde(rename = "pitching_PI/PA")]
    pub pi_pa: Option<f64>,
    #[serde(rename = "pitching_HR/PA")]
    pub hr_pa: Option<f64>,
    #[serde(rename = "pitching_BB/PA")]
    pub bb_pa: Option<f64>,
    #[serde(rename = "pitching_PI/IP")]
    pub pi_ip: Option<f64>,
}
