use crate::data_fetcher::models::{
    DefensiveSlot, FielderAssignment, GameContext, GameEvent, HalfInning, Position, TeamContext,
};
use crate::data_fetcher::processors::event_classifier::{SubEventKind, classify};
use crate::data_fetcher::processors::json_path::{
    get_f64, get_i64, get_or_default, get_path, get_string, is_empty_document, require_i64,
    require_string,
};
use crate::error::AppError;
use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde_json::Value;
use tracing::{debug, info, warn};

const FEED_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";
const OUTPUT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// Reads the per-game header from `gameData`.
///
/// Game type and official date are required; everything else is optional.
pub fn read_game_context(feed: &Value, game_id: i64) -> Result<GameContext, AppError> {
    let game_type = require_string(feed, &["gameData", "game", "type"], "game header")?;
    let official_date =
        require_string(feed, &["gameData", "datetime", "officialDate"], "game header")?;
    let game_date = NaiveDate::parse_from_str(&official_date, "%Y-%m-%d").map_err(|e| {
        AppError::schema_violation(
            "game header",
            format!("invalid official date `{official_date}`: {e}"),
        )
    })?;

    let away = get_path(feed, &["gameData", "teams", "away"]).unwrap_or(&Value::Null);

    Ok(GameContext {
        game_id,
        game_type,
        game_date,
        league_id: get_i64(away, &["league", "id"]),
        league_name: get_string(away, &["league", "name"]),
        league_level_id: get_i64(away, &["sport", "id"]),
        league_level_name: get_string(away, &["sport", "name"]),
        away: read_team(feed, "away"),
        home: read_team(feed, "home"),
    })
}

fn read_team(feed: &Value, side: &str) -> TeamContext {
    let team = get_path(feed, &["gameData", "teams", side]).unwrap_or(&Value::Null);
    TeamContext {
        id: get_i64(team, &["id"]),
        name: get_string(team, &["name"]),
        abbreviation: get_string(team, &["abbreviation"]),
        org_id: get_i64(team, &["parentOrgId"]),
        org_name: get_string(team, &["parentOrgName"]),
    }
}

/// Starting defensive alignments of both teams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StartingFielders {
    pub home: FielderAssignment,
    pub away: FielderAssignment,
}

/// Reads starting fielders from a schedule document hydrated with lineups.
///
/// Returns `Ok(None)` when the document carries no lineups. Pitchers and
/// designated hitters are not fielders and are skipped, as are players listed
/// under a generic position such as `OF` or `TWP`.
pub fn starting_fielders(lineups: &Value) -> Result<Option<StartingFielders>, AppError> {
    let Some(section) = get_path(lineups, &["dates", "0", "games", "0", "lineups"]) else {
        return Ok(None);
    };

    let mut fielders = StartingFielders::default();
    for (key, assignment) in [
        ("awayPlayers", &mut fielders.away),
        ("homePlayers", &mut fielders.home),
    ] {
        let players = get_path(section, &[key])
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();
        for player in players {
            let player_id = require_i64(player, &["id"], "starting lineup")?;
            let abbreviation =
                require_string(player, &["primaryPosition", "abbreviation"], "starting lineup")?;
            match DefensiveSlot::from_abbreviation(&abbreviation) {
                Ok(slot) => {
                    assignment.apply(slot, player_id);
                }
                Err(e) => {
                    warn!("Leaving player {} out of the starting fielders: {}", player_id, e)
                }
            }
        }
    }
    Ok(Some(fielders))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Score {
    away: i64,
    home: i64,
}

impl Score {
    /// `(batting, fielding)` runs for the team at bat in `half`.
    fn perspective(self, half: HalfInning) -> (i64, i64) {
        match half {
            HalfInning::Top => (self.away, self.home),
            HalfInning::Bottom => (self.home, self.away),
        }
    }
}

/// Per plate appearance state shared by every pitch it contains.
struct PlateAppearance<'a> {
    play: &'a Value,
    at_bat_number: i64,
    inning: i64,
    half: HalfInning,
    batter: i64,
    pitcher: i64,
    before: Score,
    after: Score,
}

/// Extracts one record per pitch from a live game feed.
///
/// `lineups` seeds the fielder alignments; when it is missing or carries no
/// lineups, or the lineups cannot be read, the fielder columns stay empty until
/// a substitution fills them. Unknown half-inning labels or substitution
/// position codes fail the whole game.
pub fn extract_game_events(
    feed: &Value,
    lineups: Option<&Value>,
    game_id: i64,
) -> Result<Vec<GameEvent>, AppError> {
    if is_empty_document(feed) {
        info!("No play-by-play data for game {}", game_id);
        return Ok(Vec::new());
    }

    let context = read_game_context(feed, game_id)?;

    let starting = match lineups.map(starting_fielders).transpose() {
        Ok(Some(Some(starting))) => starting,
        Ok(_) => {
            warn!("Lineups data not found for game {}, fielders start unset", game_id);
            StartingFielders::default()
        }
        Err(e) => {
            warn!("Unreadable lineups for game {}, fielders start unset: {}", game_id, e);
            StartingFielders::default()
        }
    };
    let mut home_fielders = starting.home;
    let mut away_fielders = starting.away;

    let plays = get_path(feed, &["liveData", "plays", "allPlays"])
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let mut records = Vec::new();
    let mut score = Score::default();

    for play in plays {
        let half = HalfInning::parse(&require_string(
            play,
            &["about", "halfInning"],
            "plate appearance",
        )?)?;
        let after = Score {
            away: get_i64(play, &["result", "awayScore"]).unwrap_or(score.away),
            home: get_i64(play, &["result", "homeScore"]).unwrap_or(score.home),
        };
        let mut appearance = PlateAppearance {
            play,
            at_bat_number: require_i64(play, &["atBatIndex"], "plate appearance")?,
            inning: require_i64(play, &["about", "inning"], "plate appearance")?,
            half,
            batter: require_i64(play, &["matchup", "batter", "id"], "plate appearance")?,
            pitcher: require_i64(play, &["matchup", "pitcher", "id"], "plate appearance")?,
            before: score,
            after,
        };

        let sub_events = get_path(play, &["playEvents"])
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();
        let kinds: Vec<SubEventKind> = sub_events.iter().map(classify).collect();
        let final_pitch = kinds.iter().rposition(|kind| *kind == SubEventKind::Pitch);

        for (index, (sub_event, kind)) in sub_events.iter().zip(&kinds).enumerate() {
            match kind {
                SubEventKind::PitchingChange => {
                    appearance.pitcher =
                        require_i64(sub_event, &["player", "id"], "pitching substitution")?;
                }
                SubEventKind::DefensiveChange => {
                    let code =
                        require_string(sub_event, &["position", "code"], "defensive substitution")?;
                    let slot = DefensiveSlot::from_code(&code)?;
                    let player_id =
                        require_i64(sub_event, &["player", "id"], "defensive substitution")?;
                    let fielding = match half {
                        HalfInning::Top => &mut home_fielders,
                        HalfInning::Bottom => &mut away_fielders,
                    };
                    if fielding.apply(slot, player_id) {
                        debug!(
                            "Game {}: player {} takes position {} in inning {}",
                            game_id, player_id, code, appearance.inning
                        );
                    }
                }
                SubEventKind::PinchHitter => {
                    appearance.batter =
                        require_i64(sub_event, &["player", "id"], "offensive substitution")?;
                }
                SubEventKind::Skip => {}
                SubEventKind::Pitch => {
                    let fielding = match half {
                        HalfInning::Top => &home_fielders,
                        HalfInning::Bottom => &away_fielders,
                    };
                    records.push(pitch_record(
                        &context,
                        &appearance,
                        sub_event,
                        fielding,
                        final_pitch == Some(index),
                    ));
                }
            }
        }

        score = after;
    }

    debug!("Extracted {} pitches from game {}", records.len(), game_id);
    Ok(records)
}

fn feed_timestamp(sub_event: &Value, key: &str) -> Option<String> {
    let raw = get_string(sub_event, &[key])?;
    NaiveDateTime::parse_from_str(&raw, FEED_TIMESTAMP_FORMAT)
        .ok()
        .map(|timestamp| timestamp.format(OUTPUT_TIMESTAMP_FORMAT).to_string())
}

fn pitch_record(
    context: &GameContext,
    appearance: &PlateAppearance<'_>,
    sub_event: &Value,
    fielders: &FielderAssignment,
    is_final_pitch: bool,
) -> GameEvent {
    let play = appearance.play;
    let pitch_data = get_path(sub_event, &["pitchData"]).unwrap_or(&Value::Null);
    let pitch = |path: &[&str]| get_f64(pitch_data, path);
    let coordinate = |key: &str| get_f64(pitch_data, &["coordinates", key]);

    let in_play: bool = get_or_default(sub_event, &["details", "isInPlay"], false);
    let hit_data = in_play
        .then(|| get_path(sub_event, &["hitData"]))
        .flatten()
        .unwrap_or(&Value::Null);

    let (bat_score, fld_score) = appearance.before.perspective(appearance.half);
    let (post_bat_score, post_fld_score) = appearance.after.perspective(appearance.half);
    let date = context.game_date;

    GameEvent {
        play_start_datetime: feed_timestamp(sub_event, "startTime"),
        play_end_datetime: feed_timestamp(sub_event, "endTime"),
        pitch_type: get_string(sub_event, &["details", "type", "code"]),
        pitch_name: get_string(sub_event, &["details", "type", "description"]),
        game_date: date.format("%Y-%m-%d").to_string(),
        release_speed: pitch(&["startSpeed"]),
        release_pos_x: coordinate("x0"),
        release_pos_y: coordinate("y0"),
        release_pos_z: coordinate("z0"),
        player_name: get_string(play, &["matchup", "pitcher", "fullName"]),
        batter: appearance.batter,
        pitcher: appearance.pitcher,
        events: is_final_pitch
            .then(|| get_string(play, &["result", "eventType"]))
            .flatten(),
        description: get_string(sub_event, &["details", "description"]),
        spin_dir: pitch(&["breaks", "spinDirection"]),
        zone: get_i64(pitch_data, &["zone"]),
        des: get_string(play, &["result", "description"]),
        game_type: context.game_type.clone(),
        stand: get_string(play, &["matchup", "batSide", "code"]),
        p_throws: get_string(play, &["matchup", "pitchHand", "code"]),
        home_team: context.home.abbreviation.clone(),
        away_team: context.away.abbreviation.clone(),
        call_code: get_string(sub_event, &["details", "code"]),
        hit_location: get_i64(hit_data, &["location"]),
        bb_type: get_string(hit_data, &["trajectory"]),
        balls: get_i64(sub_event, &["count", "balls"]),
        strikes: get_i64(sub_event, &["count", "strikes"]),
        pfx_x: coordinate("pfxX"),
        pfx_z: coordinate("pfxZ"),
        plate_x: coordinate("pX"),
        plate_z: coordinate("pZ"),
        on_3b: get_i64(play, &["matchup", "postOnThird", "id"]),
        on_2b: get_i64(play, &["matchup", "postOnSecond", "id"]),
        on_1b: get_i64(play, &["matchup", "postOnFirst", "id"]),
        outs_when_up: get_i64(sub_event, &["count", "outs"]),
        inning: appearance.inning,
        inning_topbot: appearance.half.label().to_string(),
        hc_x: get_f64(hit_data, &["coordinates", "coordX"]),
        hc_y: get_f64(hit_data, &["coordinates", "coordY"]),
        vx0: coordinate("vX0"),
        vy0: coordinate("vY0"),
        vz0: coordinate("vZ0"),
        ax: coordinate("aX"),
        ay: coordinate("aY"),
        az: coordinate("aZ"),
        sz_top: pitch(&["strikeZoneTop"]),
        sz_bot: pitch(&["strikeZoneBottom"]),
        hit_distance_sc: get_f64(hit_data, &["totalDistance"]).map(|distance| distance as i64),
        launch_speed: get_f64(hit_data, &["launchSpeed"]),
        launch_angle: get_f64(hit_data, &["launchAngle"]),
        release_spin_rate: pitch(&["breaks", "spinRate"]),
        release_extension: pitch(&["extension"]),
        game_pk: context.game_id,
        pitcher_1: appearance.pitcher,
        fielder_2: fielders.get(Position::Catcher),
        fielder_3: fielders.get(Position::FirstBase),
        fielder_4: fielders.get(Position::SecondBase),
        fielder_5: fielders.get(Position::ThirdBase),
        fielder_6: fielders.get(Position::Shortstop),
        fielder_7: fielders.get(Position::LeftField),
        fielder_8: fielders.get(Position::CenterField),
        fielder_9: fielders.get(Position::RightField),
        at_bat_number: appearance.at_bat_number,
        pitch_number: get_i64(sub_event, &["pitchNumber"]),
        home_score: appearance.before.home,
        away_score: appearance.before.away,
        bat_score,
        fld_score,
        post_away_score: appearance.after.away,
        post_home_score: appearance.after.home,
        post_bat_score,
        post_fld_score,
        spin_axis: pitch(&["breaks", "spinDirection"]),
        game_month: date.month(),
        game_day: date.day(),
        game_year: date.year(),
        league_id: context.league_id,
        league_name: context.league_name.clone(),
        league_level_id: context.league_level_id,
        league_level_name: context.league_level_name.clone(),
        away_team_org_id: context.away.org_id,
        away_team_org_name: context.away.org_name.clone(),
        home_team_org_id: context.home.org_id,
        home_team_org_name: context.home.org_name.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn feed(plays: Value) -> Value {
        json!({
            "gameData": {
                "game": {"pk": 745001, "type": "R"},
                "datetime": {"officialDate": "2024-05-14"},
                "teams": {
                    "away": {
                        "id": 1, "name": "Away Club", "abbreviation": "AWY",
                        "parentOrgId": 100, "parentOrgName": "Away Parent",
                        "league": {"id": 117, "name": "International League"},
                        "sport": {"id": 11, "name": "Triple-A"}
                    },
                    "home": {
                        "id": 2, "name": "Home Club", "abbreviation": "HOM",
                        "parentOrgId": 200, "parentOrgName": "Home Parent"
                    }
                }
            },
            "liveData": {"plays": {"allPlays": plays}}
        })
    }

    fn lineups() -> Value {
        json!({
            "dates": [{"games": [{"lineups": {
                "homePlayers": [
                    {"id": 12, "primaryPosition": {"abbreviation": "C"}},
                    {"id": 16, "primaryPosition": {"abbreviation": "SS"}},
                    {"id": 10, "primaryPosition": {"abbreviation": "DH"}},
                    {"id": 11, "primaryPosition": {"abbreviation": "P"}}
                ],
                "awayPlayers": [
                    {"id": 22, "primaryPosition": {"abbreviation": "C"}},
                    {"id": 29, "primaryPosition": {"abbreviation": "RF"}}
                ]
            }}]}]
        })
    }

    fn play(half: &str, events: Value, away_score: i64, home_score: i64) -> Value {
        json!({
            "atBatIndex": 0,
            "about": {"inning": 1, "halfInning": half},
            "matchup": {
                "batter": {"id": 500, "fullName": "Bat Ter"},
                "pitcher": {"id": 600, "fullName": "Pitch Er"},
                "batSide": {"code": "L"},
                "pitchHand": {"code": "R"}
            },
            "result": {
                "eventType": "single", "description": "Bat Ter singles.",
                "awayScore": away_score, "homeScore": home_score
            },
            "playEvents": events
        })
    }

    fn pitch(balls: i64, strikes: i64, outs: i64) -> Value {
        json!({
            "isPitch": true,
            "details": {"code": "B", "description": "Ball", "type": {"code": "FF", "description": "Four-Seam Fastball"}},
            "count": {"balls": balls, "strikes": strikes, "outs": outs},
            "pitchData": {"startSpeed": 94.1, "strikeZoneTop": 3.4, "strikeZoneBottom": 1.6},
            "pitchNumber": 1
        })
    }

    #[test]
    fn test_single_pitch_in_top_half() {
        let feed = feed(json!([play("top", json!([pitch(1, 0, 0)]), 0, 0)]));
        let records = extract_game_events(&feed, Some(&lineups()), 745001).unwrap();

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.inning_topbot, "Top");
        assert_eq!(record.balls, Some(1));
        assert_eq!(record.strikes, Some(0));
        assert_eq!(record.outs_when_up, Some(0));
        assert_eq!(record.fielder_2, Some(12));
        assert_eq!(record.fielder_6, Some(16));
        assert_eq!(record.fielder_9, None);
        assert_eq!(record.game_pk, 745001);
        assert_eq!(record.game_date, "2024-05-14");
        assert_eq!((record.game_year, record.game_month, record.game_day), (2024, 5, 14));
        assert_eq!(record.home_team.as_deref(), Some("HOM"));
        assert_eq!(record.league_level_name.as_deref(), Some("Triple-A"));
        assert_eq!(record.pitch_type.as_deref(), Some("FF"));
        assert_eq!(record.call_code.as_deref(), Some("B"));
        assert_eq!(record.events.as_deref(), Some("single"));
    }

    #[test]
    fn test_bottom_half_uses_away_fielders() {
        let feed = feed(json!([play("bottom", json!([pitch(0, 0, 0)]), 0, 0)]));
        let records = extract_game_events(&feed, Some(&lineups()), 1).unwrap();
        assert_eq!(records[0].inning_topbot, "Bot");
        assert_eq!(records[0].fielder_2, Some(22));
        assert_eq!(records[0].fielder_9, Some(29));
    }

    #[test]
    fn test_substitution_updates_following_pitches() {
        let events = json!([
            pitch(0, 0, 0),
            {
                "isPitch": false,
                "details": {"eventType": "defensive_substitution"},
                "player": {"id": 77},
                "position": {"code": "2"}
            },
            pitch(1, 0, 0)
        ]);
        let feed = feed(json!([play("top", events, 0, 0)]));
        let records = extract_game_events(&feed, Some(&lineups()), 1).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].fielder_2, Some(12));
        assert_eq!(records[1].fielder_2, Some(77));
        assert_eq!(records[0].events, None);
        assert_eq!(records[1].events.as_deref(), Some("single"));
    }

    #[test]
    fn test_pitching_change_and_pinch_hitter() {
        let events = json!([
            {"isPitch": false, "details": {"eventType": "pitching_substitution"}, "player": {"id": 601}},
            {"isPitch": false, "details": {"eventType": "offensive_substitution"}, "player": {"id": 501}},
            pitch(0, 0, 0)
        ]);
        let feed = feed(json!([play("top", events, 0, 0)]));
        let records = extract_game_events(&feed, None, 1).unwrap();
        assert_eq!(records[0].pitcher, 601);
        assert_eq!(records[0].pitcher_1, 601);
        assert_eq!(records[0].batter, 501);
    }

    #[test]
    fn test_designated_hitter_substitution_is_ignored() {
        let events = json!([
            {"isPitch": false, "details": {"eventType": "defensive_switch"}, "player": {"id": 88}, "position": {"code": "10"}},
            pitch(0, 0, 0)
        ]);
        let feed = feed(json!([play("top", events, 0, 0)]));
        let records = extract_game_events(&feed, Some(&lineups()), 1).unwrap();
        assert_eq!(records[0].fielder_2, Some(12));
    }

    #[test]
    fn test_unknown_position_code_fails() {
        let events = json!([
            {"isPitch": false, "details": {"eventType": "defensive_switch"}, "player": {"id": 88}, "position": {"code": "11"}}
        ]);
        let feed = feed(json!([play("top", events, 0, 0)]));
        let err = extract_game_events(&feed, None, 1).unwrap_err();
        assert!(matches!(err, AppError::SchemaViolation { .. }));
    }

    #[test]
    fn test_unknown_half_inning_fails() {
        let feed = feed(json!([play("middle", json!([pitch(0, 0, 0)]), 0, 0)]));
        assert!(matches!(
            extract_game_events(&feed, None, 1).unwrap_err(),
            AppError::SchemaViolation { .. }
        ));
    }

    #[test]
    fn test_score_carries_between_appearances() {
        let mut second = play("bottom", json!([pitch(0, 0, 1)]), 1, 3);
        second["atBatIndex"] = json!(1);
        let feed = feed(json!([play("top", json!([pitch(0, 0, 0)]), 1, 0), second]));
        let records = extract_game_events(&feed, None, 1).unwrap();

        let first = &records[0];
        assert_eq!((first.away_score, first.home_score), (0, 0));
        assert_eq!((first.post_away_score, first.post_home_score), (1, 0));
        assert_eq!((first.post_bat_score, first.post_fld_score), (1, 0));

        let second = &records[1];
        assert_eq!((second.away_score, second.home_score), (1, 0));
        assert_eq!((second.bat_score, second.fld_score), (0, 1));
        assert_eq!((second.post_bat_score, second.post_fld_score), (3, 1));
    }

    #[test]
    fn test_missing_measurements_are_empty() {
        let feed = feed(json!([play("top", json!([pitch(0, 0, 0)]), 0, 0)]));
        let record = &extract_game_events(&feed, None, 1).unwrap()[0];
        assert_eq!(record.release_spin_rate, None);
        assert_eq!(record.spin_axis, None);
        assert_eq!(record.plate_x, None);
        assert_eq!(record.launch_speed, None);
        assert_eq!(record.release_speed, Some(94.1));
        assert_eq!(record.fielder_2, None);
    }

    #[test]
    fn test_hit_data_only_for_balls_in_play() {
        let mut in_play = pitch(2, 1, 1);
        in_play["details"]["isInPlay"] = json!(true);
        in_play["hitData"] = json!({
            "location": "8", "trajectory": "fly_ball", "totalDistance": 362.6,
            "launchSpeed": 98.2, "launchAngle": 27.0,
            "coordinates": {"coordX": 120.5, "coordY": 60.25}
        });
        let mut not_in_play = pitch(2, 1, 1);
        not_in_play["hitData"] = json!({"location": "8"});

        let feed = feed(json!([play("top", json!([not_in_play, in_play]), 0, 0)]));
        let records = extract_game_events(&feed, None, 1).unwrap();
        assert_eq!(records[0].hit_location, None);
        assert_eq!(records[1].hit_location, Some(8));
        assert_eq!(records[1].bb_type.as_deref(), Some("fly_ball"));
        assert_eq!(records[1].hit_distance_sc, Some(362));
        assert_eq!(records[1].hc_y, Some(60.25));
    }

    #[test]
    fn test_empty_documents() {
        assert!(extract_game_events(&json!({}), None, 1).unwrap().is_empty());
        assert!(extract_game_events(&Value::Null, None, 1).unwrap().is_empty());
        assert!(extract_game_events(&feed(json!([])), None, 1).unwrap().is_empty());
    }

    #[test]
    fn test_missing_game_type_fails() {
        let mut feed = feed(json!([]));
        feed["gameData"]["game"] = json!({});
        assert!(matches!(
            extract_game_events(&feed, None, 1).unwrap_err(),
            AppError::SchemaViolation { .. }
        ));
    }

    #[test]
    fn test_timestamps() {
        let mut timed = pitch(0, 0, 0);
        timed["startTime"] = json!("2024-05-14T23:05:12.345Z");
        timed["endTime"] = json!("not a time");
        let feed = feed(json!([play("top", json!([timed]), 0, 0)]));
        let record = &extract_game_events(&feed, None, 1).unwrap()[0];
        assert_eq!(record.play_start_datetime.as_deref(), Some("2024-05-14 23:05:12.345"));
        assert_eq!(record.play_end_datetime, None);
    }

    #[test]
    fn test_generic_lineup_positions_are_skipped() {
        let generic = json!({"dates": [{"games": [{"lineups": {
            "homePlayers": [
                {"id": 12, "primaryPosition": {"abbreviation": "C"}},
                {"id": 1, "primaryPosition": {"abbreviation": "TWP"}},
                {"id": 2, "primaryPosition": {"abbreviation": "OF"}}
            ]
        }}]}]});
        let starting = starting_fielders(&generic).unwrap().unwrap();
        assert_eq!(starting.home.get(Position::Catcher), Some(12));
        assert!(starting.away.is_empty());
        assert_eq!(starting_fielders(&json!({"dates": []})).unwrap(), None);
    }

    #[test]
    fn test_outfielder_in_lineup_still_emits_pitches() {
        let lineups = json!({"dates": [{"games": [{"lineups": {
            "homePlayers": [
                {"id": 12, "primaryPosition": {"abbreviation": "C"}},
                {"id": 17, "primaryPosition": {"abbreviation": "OF"}}
            ]
        }}]}]});
        let feed = feed(json!([play("top", json!([pitch(1, 0, 0)]), 0, 0)]));
        let records = extract_game_events(&feed, Some(&lineups), 1).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].fielder_2, Some(12));
        assert_eq!(records[0].fielder_7, None);
    }

    #[test]
    fn test_unreadable_lineups_leave_fielders_unset() {
        let lineups = json!({"dates": [{"games": [{"lineups": {
            "homePlayers": [{"primaryPosition": {"abbreviation": "C"}}]
        }}]}]});
        let feed = feed(json!([play("top", json!([pitch(0, 0, 0)]), 0, 0)]));
        let records = extract_game_events(&feed, Some(&lineups), 1).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].fielder_2, None);
    }
}
