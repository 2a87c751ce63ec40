/// Counting stats shared by box scores and the stats service.
///
/// Both sources use the same camelCase keys, so one struct covers batting
/// and pitching groups. A key the source does not carry stays `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatLine {
    pub games_played: Option<i64>,
    pub games_pitched: Option<i64>,
    pub games_started: Option<i64>,
    pub games_finished: Option<i64>,
    pub complete_games: Option<i64>,
    pub quality_starts: Option<i64>,
    pub shutouts: Option<i64>,
    pub wins: Option<i64>,
    pub losses: Option<i64>,
    pub save_opportunities: Option<i64>,
    pub saves: Option<i64>,
    pub holds: Option<i64>,
    pub blown_saves: Option<i64>,
    pub plate_appearances: Option<i64>,
    pub at_bats: Option<i64>,
    pub batters_faced: Option<i64>,
    pub runs: Option<i64>,
    pub earned_runs: Option<i64>,
    pub hits: Option<i64>,
    pub doubles: Option<i64>,
    pub triples: Option<i64>,
    pub home_runs: Option<i64>,
    pub rbi: Option<i64>,
    pub stolen_bases: Option<i64>,
    pub caught_stealing: Option<i64>,
    pub base_on_balls: Option<i64>,
    pub intentional_walks: Option<i64>,
    pub strike_outs: Option<i64>,
    pub total_bases: Option<i64>,
    pub ground_into_double_play: Option<i64>,
    pub ground_into_triple_play: Option<i64>,
    pub gidp_opportunities: Option<i64>,
    pub sac_bunts: Option<i64>,
    pub sac_flies: Option<i64>,
    pub hit_by_pitch: Option<i64>,
    pub extra_base_hits: Option<i64>,
    pub ground_outs: Option<i64>,
    pub air_outs: Option<i64>,
    pub fly_outs: Option<i64>,
    pub pop_outs: Option<i64>,
    pub line_outs: Option<i64>,
    pub catchers_interference: Option<i64>,
    pub left_on_base: Option<i64>,
    pub ground_hits: Option<i64>,
    pub fly_hits: Option<i64>,
    pub pop_hits: Option<i64>,
    pub line_hits: Option<i64>,
    pub number_of_pitches: Option<i64>,
    pub strikes: Option<i64>,
    pub balls: Option<i64>,
    pub total_swings: Option<i64>,
    pub swing_and_misses: Option<i64>,
    pub balls_in_play: Option<i64>,
    pub reached_on_error: Option<i64>,
    pub walk_offs: Option<i64>,
    pub outs: Option<i64>,
    pub innings_pitched: Option<String>,
    pub balks: Option<i64>,
    pub wild_pitches: Option<i64>,
    pub passed_balls: Option<i64>,
    pub pickoffs: Option<i64>,
    pub inherited_runners: Option<i64>,
    pub inherited_runners_scored: Option<i64>,
    pub bequeathed_runners: Option<i64>,
    pub bequeathed_runners_scored: Option<i64>,
    pub run_support: Option<i64>,
}

impl StatLine {
    /// Innings pitched as a decimal (outs / 3), rounded to three places.
    pub fn innings_pitched_decimal(&self) -> Option<f64> {
        self.outs
            .map(|outs| (outs as f64 / 3.0 * 1000.0).round() / 1000.0)
    }

    /// Pitches thrown that were not strikes, when the service omits the count.
    pub fn pitch_balls(&self) -> Option<i64> {
        self.balls.or_else(|| {
            self.number_of_pitches
                .zip(self.strikes)
                .map(|(pitches, strikes)| pitches - strikes)
        })
    }

    pub fn is_empty(&self) -> bool {
        *self == StatLine::default()
    }
}
