use crate::data_fetcher::models::StatLine;
use crate::data_fetcher::processors::json_path::{get_i64, get_string};
use serde_json::Value;

/// Reads counting stats keyed the way box scores and the stats service key
/// them. An empty group yields an empty line.
pub fn read_stat_line(group: &Value) -> StatLine {
    let count = |key: &str| get_i64(group, &[key]);

    StatLine {
        games_played: count("gamesPlayed"),
        games_pitched: count("gamesPitched"),
        games_started: count("gamesStarted"),
        games_finished: count("gamesFinished"),
        complete_games: count("completeGames"),
        quality_starts: count("qualityStarts"),
        shutouts: count("shutouts"),
        wins: count("wins"),
        losses: count("losses"),
        save_opportunities: count("saveOpportunities"),
        saves: count("saves"),
        holds: count("holds"),
        blown_saves: count("blownSaves"),
        plate_appearances: count("plateAppearances"),
        at_bats: count("atBats"),
        batters_faced: count("battersFaced"),
        runs: count("runs"),
        earned_runs: count("earnedRuns"),
        hits: count("hits"),
        doubles: count("doubles"),
        triples: count("triples"),
        home_runs: count("homeRuns"),
        rbi: count("rbi"),
        stolen_bases: count("stolenBases"),
        caught_stealing: count("caughtStealing"),
        base_on_balls: count("baseOnBalls"),
        intentional_walks: count("intentionalWalks"),
        strike_outs: count("strikeOuts"),
        total_bases: count("totalBases"),
        ground_into_double_play: count("groundIntoDoublePlay"),
        ground_into_triple_play: count("groundIntoTriplePlay"),
        gidp_opportunities: count("gidpOpp"),
        sac_bunts: count("sacBunts"),
        sac_flies: count("sacFlies"),
        hit_by_pitch: count("hitByPitch"),
        extra_base_hits: count("extraBaseHits"),
        ground_outs: count("groundOuts"),
        air_outs: count("airOuts"),
        fly_outs: count("flyOuts"),
        pop_outs: count("popOuts"),
        line_outs: count("lineOuts"),
        catchers_interference: count("catchersInterference"),
        left_on_base: count("leftOnBase"),
        ground_hits: count("groundHits"),
        fly_hits: count("flyHits"),
        pop_hits: count("popHits"),
        line_hits: count("lineHits"),
        number_of_pitches: count("numberOfPitches"),
        strikes: count("strikes"),
        balls: count("balls"),
        total_swings: count("totalSwings"),
        swing_and_misses: count("swingAndMisses"),
        balls_in_play: count("ballsInPlay"),
        reached_on_error: count("reachedOnError"),
        walk_offs: count("walkOffs"),
        outs: count("outs"),
        innings_pitched: get_string(group, &["inningsPitched"]),
        balks: count("balks"),
        wild_pitches: count("wildPitches"),
        passed_balls: count("passedBall"),
        pickoffs: count("pickoffs"),
        inherited_runners: count("inheritedRunners"),
        inherited_runners_scored: count("inheritedRunnersScored"),
        bequeathed_runners: count("bequeathedRunners"),
        bequeathed_runners_scored: count("bequeathedRunnersScored"),
        run_support: count("runSupport"),
    }
}
