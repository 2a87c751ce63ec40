use crate::data_fetcher::models::{
    Level, PlayerSeasonBatting, PlayerSeasonPitching, StatLine, TeamSeasonBatting,
    TeamSeasonPitching,
};
use crate::data_fetcher::processors::json_path::{get_i64, get_path, get_string};
use crate::data_fetcher::processors::rates::{batting_rates, pitching_rates};
use crate::data_fetcher::processors::stat_line::read_stat_line;
use crate::error::AppError;
use serde_json::Value;
use tracing::info;

/// Entries of a stats-service response. A response reporting zero splits is
/// treated as empty regardless of what else it carries.
fn stats_entries(document: &Value) -> &[Value] {
    if get_i64(document, &["totalSplits"]).unwrap_or(0) == 0 {
        return &[];
    }
    get_path(document, &["stats"])
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// `SS` when the position played matches the primary one, otherwise
/// `primary/played`.
fn player_position(entry: &Value) -> Option<String> {
    let primary = get_string(entry, &["primaryPositionAbbrev"]);
    let played = get_string(entry, &["positionAbbrev"]);
    match (primary, played) {
        (Some(primary), Some(played)) if primary != played => {
            Some(format!("{primary}/{played}"))
        }
        (Some(primary), _) => Some(primary),
        (None, played) => played,
    }
}

/// Player batting lines of one team in one season.
pub fn extract_player_season_batting(
    document: &Value,
    season: i32,
    level: Level,
    team_id: i64,
) -> Result<Vec<PlayerSeasonBatting>, AppError> {
    let sport_id = level.require_sport_id()?;
    let entries = stats_entries(document);
    if entries.is_empty() {
        info!("No batting stats found for team {} in {}", team_id, season);
    }

    Ok(entries
        .iter()
        .map(|entry| player_batting_row(entry, season, level, sport_id, team_id))
        .collect())
}

fn player_batting_row(
    entry: &Value,
    season: i32,
    level: Level,
    sport_id: u32,
    team_id: i64,
) -> PlayerSeasonBatting {
    let line = read_stat_line(entry);
    let rates = batting_rates(&line);

    PlayerSeasonBatting {
        season,
        team_id,
        team_abv: get_string(entry, &["teamAbbrev"]),
        team_name: get_string(entry, &["teamName"]),
        team_league_id: get_i64(entry, &["leagueId"]),
        team_league: get_string(entry, &["leagueName"]),
        team_level_id: sport_id,
        team_level_abv: level.abbreviation(),
        player_id: get_i64(entry, &["playerId"]),
        player_full_name: get_string(entry, &["playerFullName"]),
        player_first_name: get_string(entry, &["playerFirstName"]),
        player_last_name: get_string(entry, &["playerLastName"]),
        player_use_name: get_string(entry, &["playerUseName"]),
        player_initial_name: get_string(entry, &["playerInitLastName"]),
        player_position: player_position(entry),
        games: line.games_played,
        plate_appearances: line.plate_appearances,
        at_bats: line.at_bats,
        runs: line.runs,
        hits: line.hits,
        doubles: line.doubles,
        triples: line.triples,
        home_runs: line.home_runs,
        rbi: line.rbi,
        stolen_bases: line.stolen_bases,
        caught_stealing: line.caught_stealing,
        walks: line.base_on_balls,
        intentional_walks: line.intentional_walks,
        strikeouts: line.strike_outs,
        total_bases: line.total_bases,
        gidp_opportunities: line.gidp_opportunities,
        gidp: line.ground_into_double_play,
        sac_bunts: line.sac_bunts,
        sac_flies: line.sac_flies,
        hit_by_pitch: line.hit_by_pitch,
        extra_base_hits: line.extra_base_hits,
        ground_outs: line.ground_outs,
        air_outs: line.air_outs,
        fly_outs: line.fly_outs,
        pop_outs: line.pop_outs,
        line_outs: line.line_outs,
        catchers_interference: line.catchers_interference,
        left_on_base: line.left_on_base,
        ground_hits: line.ground_hits,
        fly_hits: line.fly_hits,
        pop_hits: line.pop_hits,
        line_hits: line.line_hits,
        pitches_faced: line.number_of_pitches,
        swings: line.total_swings,
        whiffs: line.swing_and_misses,
        balls_in_play: line.balls_in_play,
        reached_on_error: line.reached_on_error,
        walk_offs: line.walk_offs,
        avg: rates.avg,
        obp: rates.obp,
        slg: rates.slg,
        ops: rates.ops,
        iso: rates.iso,
        babip: rates.babip,
        go_ao: rates.go_ao,
    }
}

/// Player pitching lines of one team in one season.
pub fn extract_player_season_pitching(
    document: &Value,
    season: i32,
    level: Level,
    team_id: i64,
) -> Result<Vec<PlayerSeasonPitching>, AppError> {
    let sport_id = level.require_sport_id()?;
    let entries = stats_entries(document);
    if entries.is_empty() {
        info!("No pitching stats found for team {} in {}", team_id, season);
    }

    Ok(entries
        .iter()
        .map(|entry| player_pitching_row(entry, season, level, sport_id, team_id))
        .collect())
}

fn player_pitching_row(
    entry: &Value,
    season: i32,
    level: Level,
    sport_id: u32,
    team_id: i64,
) -> PlayerSeasonPitching {
    let line = read_stat_line(entry);
    let rates = pitching_rates(&line);

    PlayerSeasonPitching {
        season,
        team_id,
        team_abv: get_string(entry, &["teamAbbrev"]),
        team_name: get_string(entry, &["teamName"]),
        team_league_id: get_i64(entry, &["leagueId"]),
        team_league: get_string(entry, &["leagueName"]),
        team_level_id: sport_id,
        team_level_abv: level.abbreviation(),
        player_id: get_i64(entry, &["playerId"]),
        player_full_name: get_string(entry, &["playerFullName"]),
        player_first_name: get_string(entry, &["playerFirstName"]),
        player_last_name: get_string(entry, &["playerLastName"]),
        player_use_name: get_string(entry, &["playerUseName"]),
        player_initial_name: get_string(entry, &["playerInitLastName"]),
        player_position: player_position(entry),
        wins: line.wins,
        losses: line.losses,
        games: line.games_pitched.or(line.games_played),
        games_started: line.games_started,
        games_finished: line.games_finished,
        complete_games: line.complete_games,
        quality_starts: line.quality_starts,
        shutouts: line.shutouts,
        save_opportunities: line.save_opportunities,
        saves: line.saves,
        holds: line.holds,
        blown_saves: line.blown_saves,
        innings_pitched_str: line.innings_pitched.clone(),
        innings_pitched: line.innings_pitched_decimal(),
        batters_faced: line.batters_faced,
        at_bats: line.at_bats,
        runs: line.runs,
        earned_runs: line.earned_runs,
        hits: line.hits,
        doubles: line.doubles,
        triples: line.triples,
        home_runs: line.home_runs,
        total_bases: line.total_bases,
        walks: line.base_on_balls,
        intentional_walks: line.intentional_walks,
        strikeouts: line.strike_outs,
        hit_by_pitch: line.hit_by_pitch,
        balks: line.balks,
        wild_pitches: line.wild_pitches,
        gidp: line.ground_into_double_play,
        gidp_opportunities: line.gidp_opportunities,
        catchers_interference: line.catchers_interference,
        inherited_runners: line.inherited_runners,
        inherited_runners_scored: line.inherited_runners_scored,
        bequeathed_runners: line.bequeathed_runners,
        bequeathed_runners_scored: line.bequeathed_runners_scored,
        run_support: line.run_support,
        sac_bunts: line.sac_bunts,
        sac_flies: line.sac_flies,
        stolen_bases: line.stolen_bases,
        caught_stealing: line.caught_stealing,
        pickoffs: line.pickoffs,
        fly_hits: line.fly_hits,
        pop_hits: line.pop_hits,
        line_hits: line.line_hits,
        fly_outs: line.fly_outs,
        ground_outs: line.ground_outs,
        air_outs: line.air_outs,
        pop_outs: line.pop_outs,
        line_outs: line.line_outs,
        pitches: line.number_of_pitches,
        pitch_strikes: line.strikes,
        pitch_balls: line.pitch_balls(),
        total_swings: line.total_swings,
        swing_and_misses: line.swing_and_misses,
        balls_in_play: line.balls_in_play,
        win_pct: rates.win_pct,
        era: rates.era,
        ra9: rates.ra9,
        whip: rates.whip,
        h_per_9: rates.h_per_9,
        hr_per_9: rates.hr_per_9,
        bb_per_9: rates.bb_per_9,
        so_per_9: rates.so_per_9,
        babip: rates.babip,
        so_bb: rates.so_bb,
        ba: rates.ba,
        obp: rates.obp,
        slg: rates.slg,
        ops: rates.ops,
        iso: rates.iso,
        so_pct: rates.so_pct,
        bb_so: rates.bb_so,
        pi_pa: rates.pi_pa,
        hr_pa: rates.hr_pa,
        bb_pa: rates.bb_pa,
        pi_ip: rates.pi_ip,
    }
}

/// Team batting lines of every team at one level in one season.
pub fn extract_team_season_batting(
    document: &Value,
    season: i32,
    level: Level,
) -> Result<Vec<TeamSeasonBatting>, AppError> {
    level.require_sport_id()?;
    let entries = stats_entries(document);
    if entries.is_empty() {
        info!("No team batting stats found for {} in {}", level, season);
    }

    Ok(entries
        .iter()
        .map(|entry| team_batting_row(entry, &read_stat_line(entry), season, level))
        .collect())
}

fn team_batting_row(
    entry: &Value,
    line: &StatLine,
    season: i32,
    level: Level,
) -> TeamSeasonBatting {
    let rates = batting_rates(line);

    TeamSeasonBatting {
        season,
        level_abv: level.abbreviation(),
        team_id: get_i64(entry, &["teamId"]),
        team_abv: get_string(entry, &["teamAbbrev"]),
        team_name: get_string(entry, &["teamName"]),
        team_short_name: get_string(entry, &["shortName"]),
        team_nickname: get_string(entry, &["teamShortName"]),
        league_abv: get_string(entry, &["leagueAbbrev"]),
        league_name: get_string(entry, &["leagueName"]),
        league_short_name: get_string(entry, &["leagueShortName"]),
        games: line.games_played,
        plate_appearances: line.plate_appearances,
        at_bats: line.at_bats,
        runs: line.runs,
        hits: line.hits,
        doubles: line.doubles,
        triples: line.triples,
        home_runs: line.home_runs,
        rbi: line.rbi,
        stolen_bases: line.stolen_bases,
        caught_stealing: line.caught_stealing,
        walks: line.base_on_balls,
        intentional_walks: line.intentional_walks,
        strikeouts: line.strike_outs,
        total_bases: line.total_bases,
        gidp: line.ground_into_double_play,
        hit_by_pitch: line.hit_by_pitch,
        pitches_faced: line.number_of_pitches,
        left_on_base: line.left_on_base,
        catchers_interference: line.catchers_interference,
        ground_outs: line.ground_outs,
        air_outs: line.air_outs,
        sac_bunts: line.sac_bunts,
        sac_flies: line.sac_flies,
        avg: rates.avg,
        obp: rates.obp,
        slg: rates.slg,
        ops: rates.ops,
        iso: rates.iso,
        babip: rates.babip,
        go_ao: rates.go_ao,
    }
}

/// Team pitching lines of every team at one level in one season.
pub fn extract_team_season_pitching(
    document: &Value,
    season: i32,
    level: Level,
) -> Result<Vec<TeamSeasonPitching>, AppError> {
    level.require_sport_id()?;
    let entries = stats_entries(document);
    if entries.is_empty() {
        info!("No team pitching stats found for {} in {}", level, season);
    }

    Ok(entries
        .iter()
        .map(|entry| team_pitching_row(entry, &read_stat_line(entry), season, level))
        .collect())
}

fn team_pitching_row(
    entry: &Value,
    line: &StatLine,
    season: i32,
    level: Level,
) -> TeamSeasonPitching {
    let rates = pitching_rates(line);

    TeamSeasonPitching {
        season,
        level_abv: level.abbreviation(),
        team_id: get_i64(entry, &["teamId"]),
        team_abv: get_string(entry, &["teamAbbrev"]),
        team_name: get_string(entry, &["teamName"]),
        team_short_name: get_string(entry, &["shortName"]),
        team_nickname: get_string(entry, &["teamShortName"]),
        league_abv: get_string(entry, &["leagueAbbrev"]),
        league_name: get_string(entry, &["leagueName"]),
        league_short_name: get_string(entry, &["leagueShortName"]),
        wins: line.wins,
        losses: line.losses,
        games: line.games_pitched.or(line.games_played),
        games_started: line.games_started,
        games_finished: line.games_finished,
        complete_games: line.complete_games,
        quality_starts: line.quality_starts,
        shutouts: line.shutouts,
        save_opportunities: line.save_opportunities,
        saves: line.saves,
        holds: line.holds,
        blown_saves: line.blown_saves,
        innings_pitched_str: line.innings_pitched.clone(),
        innings_pitched: line.innings_pitched_decimal(),
        batters_faced: line.batters_faced,
        at_bats: line.at_bats,
        runs: line.runs,
        earned_runs: line.earned_runs,
        hits: line.hits,
        doubles: line.doubles,
        triples: line.triples,
        home_runs: line.home_runs,
        total_bases: line.total_bases,
        walks: line.base_on_balls,
        intentional_walks: line.intentional_walks,
        strikeouts: line.strike_outs,
        hit_by_pitch: line.hit_by_pitch,
        balks: line.balks,
        wild_pitches: line.wild_pitches,
        gidp: line.ground_into_double_play,
        gidp_opportunities: line.gidp_opportunities,
        catchers_interference: line.catchers_interference,
        inherited_runners: line.inherited_runners,
        inherited_runners_scored: line.inherited_runners_scored,
        bequeathed_runners: line.bequeathed_runners,
        bequeathed_runners_scored: line.bequeathed_runners_scored,
        run_support: line.run_support,
        sac_bunts: line.sac_bunts,
        sac_flies: line.sac_flies,
        stolen_bases: line.stolen_bases,
        caught_stealing: line.caught_stealing,
        pickoffs: line.pickoffs,
        fly_hits: line.fly_hits,
        pop_hits: line.pop_hits,
        line_hits: line.line_hits,
        fly_outs: line.fly_outs,
        ground_outs: line.ground_outs,
        air_outs: line.air_outs,
        pop_outs: line.pop_outs,
        line_outs: line.line_outs,
        pitches: line.number_of_pitches,
        pitch_strikes: line.strikes,
        pitch_balls: line.pitch_balls(),
        total_swings: line.total_swings,
        swing_and_misses: line.swing_and_misses,
        balls_in_play: line.balls_in_play,
        win_pct: rates.win_pct,
        era: rates.era,
        ra9: rates.ra9,
        whip: rates.whip,
        h_per_9: rates.h_per_9,
        hr_per_9: rates.hr_per_9,
        bb_per_9: rates.bb_per_9,
        so_per_9: rates.so_per_9,
        babip: rates.babip,
        so_bb: rates.so_bb,
        ba: rates.ba,
        obp: rates.obp,
        slg: rates.slg,
        ops: rates.ops,
        iso: rates.iso,
        so_pct: rates.so_pct,
        bb_so: rates.bb_so,
        pi_pa: rates.pi_pa,
        hr_pa: rates.hr_pa,
        bb_pa: rates.bb_pa,
        pi_ip: rates.pi_ip,
    }
}
