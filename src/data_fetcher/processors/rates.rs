//! Derived rate statistics for season aggregates.
//!
//! Every rate is rounded to three decimal places. A rate is `None` when one
//! of its inputs is missing, its denominator is zero, or the result is not
//! finite, so empty cells never masquerade as zero.

use crate::data_fetcher::models::StatLine;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BattingRates {
    pub avg: Option<f64>,
    pub obp: Option<f64>,
    pub slg: Option<f64>,
    pub ops: Option<f64>,
    pub iso: Option<f64>,
    pub babip: Option<f64>,
    pub go_ao: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PitchingRates {
    pub win_pct: Option<f64>,
    pub era: Option<f64>,
    pub ra9: Option<f64>,
    pub whip: Option<f64>,
    pub h_per_9: Option<f64>,
    pub hr_per_9: Option<f64>,
    pub bb_per_9: Option<f64>,
    pub so_per_9: Option<f64>,
    pub babip: Option<f64>,
    pub so_bb: Option<f64>,
    pub ba: Option<f64>,
    pub obp: Option<f64>,
    pub slg: Option<f64>,
    pub ops: Option<f64>,
    pub iso: Option<f64>,
    pub so_pct: Option<f64>,
    pub bb_so: Option<f64>,
    pub pi_pa: Option<f64>,
    pub hr_pa: Option<f64>,
    pub bb_pa: Option<f64>,
    pub pi_ip: Option<f64>,
}

/// Rounds to three decimal places.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// `numerator / denominator`, rounded, or `None` when undefined.
pub fn ratio(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    let (numerator, denominator) = (numerator?, denominator?);
    if denominator == 0.0 {
        return None;
    }
    finite(numerator / denominator)
}

/// Nine-inning rate of `count` over `innings`.
fn per_nine(count: Option<i64>, innings: Option<f64>) -> Option<f64> {
    ratio(count.map(|c| 9.0 * c as f64), innings)
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then(|| round3(value))
}

fn float(value: Option<i64>) -> Option<f64> {
    value.map(|v| v as f64)
}

fn sum(values: &[Option<i64>]) -> Option<f64> {
    values
        .iter()
        .try_fold(0i64, |acc, value| value.map(|v| acc + v))
        .map(|total| total as f64)
}

fn add(left: Option<f64>, right: Option<f64>) -> Option<f64> {
    finite(left? + right?)
}

/// On-base percentage, (H + BB + HBP) / (AB + BB + HBP + SF).
fn on_base(line: &StatLine) -> Option<f64> {
    ratio(
        sum(&[line.hits, line.base_on_balls, line.hit_by_pitch]),
        sum(&[
            line.at_bats,
            line.base_on_balls,
            line.hit_by_pitch,
            line.sac_flies,
        ]),
    )
}

/// Balls in play average, (H - HR) / (AB - SO - HR + SF).
fn babip(line: &StatLine) -> Option<f64> {
    let (hits, home_runs) = (line.hits?, line.home_runs?);
    let balls_in_play =
        line.at_bats? - line.strike_outs? - home_runs + line.sac_flies?;
    ratio(Some((hits - home_runs) as f64), Some(balls_in_play as f64))
}

/// Total bases, falling back to the hit breakdown when the source omits it.
fn total_bases(line: &StatLine) -> Option<i64> {
    line.total_bases.or_else(|| {
        Some(line.hits? + line.doubles? + 2 * line.triples? + 3 * line.home_runs?)
    })
}

pub fn batting_rates(line: &StatLine) -> BattingRates {
    let at_bats = float(line.at_bats);
    let bases = total_bases(line);
    let obp = on_base(line);
    let slg = ratio(float(bases), at_bats);

    BattingRates {
        avg: ratio(float(line.hits), at_bats),
        obp,
        slg,
        ops: add(obp, slg),
        iso: ratio(
            bases.zip(line.hits).map(|(tb, h)| (tb - h) as f64),
            at_bats,
        ),
        babip: babip(line),
        go_ao: ratio(float(line.ground_outs), float(line.air_outs)),
    }
}

pub fn pitching_rates(line: &StatLine) -> PitchingRates {
    let innings = line.innings_pitched_decimal();
    let at_bats = float(line.at_bats);
    let batters_faced = float(line.batters_faced);

    let ba = ratio(float(line.hits), at_bats);
    let obp = on_base(line);
    let slg = ratio(float(total_bases(line)), at_bats);

    PitchingRates {
        win_pct: ratio(float(line.wins), sum(&[line.wins, line.losses])),
        era: per_nine(line.earned_runs, innings),
        ra9: per_nine(line.runs, innings),
        whip: ratio(sum(&[line.base_on_balls, line.hits]), innings),
        h_per_9: per_nine(line.hits, innings),
        hr_per_9: per_nine(line.home_runs, innings),
        bb_per_9: per_nine(line.base_on_balls, innings),
        so_per_9: per_nine(line.strike_outs, innings),
        babip: babip(line),
        so_bb: ratio(float(line.strike_outs), float(line.base_on_balls)),
        ba,
        obp,
        slg,
        ops: add(obp, slg),
        iso: slg.zip(ba).and_then(|(slg, ba)| finite(slg - ba)),
        so_pct: ratio(float(line.strike_outs), batters_faced),
        bb_so: ratio(float(line.base_on_balls), float(line.strike_outs)),
        pi_pa: ratio(float(line.number_of_pitches), batters_faced),
        hr_pa: ratio(float(line.home_runs), batters_faced),
        bb_pa: ratio(float(line.base_on_balls), batters_faced),
        pi_ip: ratio(float(line.number_of_pitches), innings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batter() -> StatLine {
        StatLine {
            plate_appearances: Some(50),
            at_bats: Some(40),
            hits: Some(12),
            doubles: Some(3),
            triples: Some(1),
            home_runs: Some(2),
            total_bases: Some(23),
            base_on_balls: Some(6),
            hit_by_pitch: Some(2),
            sac_flies: Some(2),
            strike_outs: Some(10),
            ground_outs: Some(9),
            air_outs: Some(6),
            ..StatLine::default()
        }
    }

    #[test]
    fn test_batting_rates() {
        let rates = batting_rates(&batter());
        assert_eq!(rates.avg, Some(0.3));
        // (12 + 6 + 2) / (40 + 6 + 2 + 2)
        assert_eq!(rates.obp, Some(0.4));
        assert_eq!(rates.slg, Some(0.575));
        assert_eq!(rates.ops, Some(0.975));
        assert_eq!(rates.iso, Some(0.275));
        // (12 - 2) / (40 - 10 - 2 + 2)
        assert_eq!(rates.babip, Some(0.333));
        assert_eq!(rates.go_ao, Some(1.5));
    }

    #[test]
    fn test_zero_denominators_are_empty() {
        let line = StatLine {
            at_bats: Some(0),
            hits: Some(0),
            total_bases: Some(0),
            base_on_balls: Some(0),
            hit_by_pitch: Some(0),
            sac_flies: Some(0),
            strike_outs: Some(0),
            home_runs: Some(0),
            ground_outs: Some(2),
            air_outs: Some(0),
            ..StatLine::default()
        };
        let rates = batting_rates(&line);
        assert_eq!(rates, BattingRates::default());
    }

    #[test]
    fn test_missing_inputs_are_empty() {
        assert_eq!(batting_rates(&StatLine::default()), BattingRates::default());
        assert_eq!(pitching_rates(&StatLine::default()), PitchingRates::default());
    }

    #[test]
    fn test_pitching_rates() {
        let line = StatLine {
            wins: Some(3),
            losses: Some(1),
            outs: Some(60),
            earned_runs: Some(8),
            runs: Some(10),
            hits: Some(18),
            doubles: Some(4),
            triples: Some(0),
            home_runs: Some(2),
            base_on_balls: Some(5),
            hit_by_pitch: Some(1),
            strike_outs: Some(25),
            at_bats: Some(75),
            batters_faced: Some(82),
            sac_flies: Some(1),
            number_of_pitches: Some(320),
            ..StatLine::default()
        };
        let rates = pitching_rates(&line);
        assert_eq!(rates.win_pct, Some(0.75));
        assert_eq!(rates.era, Some(3.6));
        assert_eq!(rates.ra9, Some(4.5));
        assert_eq!(rates.whip, Some(1.15));
        assert_eq!(rates.so_per_9, Some(11.25));
        assert_eq!(rates.so_bb, Some(5.0));
        assert_eq!(rates.ba, Some(0.24));
        // total bases 18 + 4 + 0 + 6 = 28
        assert_eq!(rates.slg, Some(0.373));
        assert_eq!(rates.iso, Some(0.133));
        assert_eq!(rates.so_pct, Some(0.305));
        assert_eq!(rates.pi_ip, Some(16.0));
        // (18 - 2) / (75 - 25 - 2 + 1)
        assert_eq!(rates.babip, Some(0.327));
    }

    #[test]
    fn test_win_pct_without_decisions() {
        let line = StatLine {
            wins: Some(0),
            losses: Some(0),
            ..StatLine::default()
        };
        assert_eq!(pitching_rates(&line).win_pct, None);
    }
}
