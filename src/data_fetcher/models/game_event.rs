use chrono::NaiveDate;
use serde::Serialize;

/// Per-game constants read once from the `gameData` header of a live feed.
#[derive(Debug, Clone, PartialEq)]
pub struct GameContext {
    pub game_id: i64,
    pub game_type: String,
    pub game_date: NaiveDate,
    pub league_id: Option<i64>,
    pub league_name: Option<String>,
    pub league_level_id: Option<i64>,
    pub league_level_name: Option<String>,
    pub away: TeamContext,
    pub home: TeamContext,
}

/// Identity of one side of a game.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamContext {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub abbreviation: Option<String>,
    pub org_id: Option<i64>,
    pub org_name: Option<String>,
}

/// One emitted pitch of a play-by-play feed.
///
/// Column names follow the Statcast search export so files can be loaded
/// with the same tooling. `None` is written as an empty cell.
///
/// Columns whose source differs from a plain copy of the pitch event:
/// - `pitch_type`/`pitch_name`: the pitch classification `details.type`.
/// - `type`: the pitch call code `details.code` (`B`, `S`, `X`, ...).
/// - `events`: the plate appearance `result.eventType`, only on its last pitch.
/// - `description`: the pitch description `details.description`.
/// - `des`: the plate appearance `result.description`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameEvent {
    pub play_start_datetime: Option<String>,
    pub play_end_datetime: Option<String>,
    /// `details.type.code` of the pitch, e.g. `FF`.
    pub pitch_type: Option<String>,
    pub pitch_name: Option<String>,
    pub game_date: String,
    pub release_speed: Option<f64>,
    pub release_pos_x: Option<f64>,
    pub release_pos_y: Option<f64>,
    pub release_pos_z: Option<f64>,
    pub player_name: Option<String>,
    pub batter: i64,
    pub pitcher: i64,
    pub events: Option<String>,
    pub description: Option<String>,
    pub spin_dir: Option<f64>,
    pub zone: Option<i64>,
    pub des: Option<String>,
    pub game_type: String,
    pub stand: Option<String>,
    pub p_throws: Option<String>,
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    #[serde(rename = "type")]
    pub call_code: Option<String>,
    pub hit_location: Option<i64>,
    pub bb_type: Option<String>,
    pub balls: Option<i64>,
    pub strikes: Option<i64>,
    pub pfx_x: Option<f64>,
    pub pfx_z: Option<f64>,
    pub plate_x: Option<f64>,
    pub plate_z: Option<f64>,
    pub on_3b: Option<i64>,
    pub on_2b: Option<i64>,
    pub on_1b: Option<i64>,
    pub outs_when_up: Option<i64>,
    pub inning: i64,
    pub inning_topbot: String,
    pub hc_x: Option<f64>,
    pub hc_y: Option<f64>,
    pub vx0: Option<f64>,
    pub vy0: Option<f64>,
    pub vz0: Option<f64>,
    pub ax: Option<f64>,
    pub ay: Option<f64>,
    pub az: Option<f64>,
    pub sz_top: Option<f64>,
    pub sz_bot: Option<f64>,
    pub hit_distance_sc: Option<i64>,
    pub launch_speed: Option<f64>,
    pub launch_angle: Option<f64>,
    pub release_spin_rate: Option<f64>,
    pub release_extension: Option<f64>,
    pub game_pk: i64,
    pub pitcher_1: i64,
    pub fielder_2: Option<i64>,
    pub fielder_3: Option<i64>,
    pub fielder_4: Option<i64>,
    pub fielder_5: Option<i64>,
    pub fielder_6: Option<i64>,
    pub fielder_7: Option<i64>,
    pub fielder_8: Option<i64>,
    pub fielder_9: Option<i64>,
    pub at_bat_number: i64,
    pub pitch_number: Option<i64>,
    pub home_score: i64,
    pub away_score: i64,
    pub bat_score: i64,
    pub fld_score: i64,
    pub post_away_score: i64,
    pub post_home_score: i64,
    pub post_bat_score: i64,
    pub post_fld_score: i64,
    pub spin_axis: Option<f64>,
    pub game_month: u32,
    pub game_day: u32,
    pub game_year: i32,
    pub league_id: Option<i64>,
    pub league_name: Option<String>,
    pub league_level_id: Option<i64>,
    pub league_level_name: Option<String>,
    pub away_team_org_id: Option<i64>,
    pub away_team_org_name: Option<String>,
    pub home_team_org_id: Option<i64>,
    pub home_team_org_name: Option<String>,
}
