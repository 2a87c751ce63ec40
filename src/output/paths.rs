//! Output file layout for every batch kind.

use std::path::{Path, PathBuf};

use crate::data_fetcher::models::{Level, StatGroup};

/// `schedule/{season}_{level}_schedule.csv`
pub fn schedule_path(root: &Path, season: i32, level: Level) -> PathBuf {
    root.join("schedule")
        .join(format!("{season}_{}_schedule.csv", level.file_label()))
}

/// `pbp/{season}_{month}_{level}_pbp.csv`.
pub fn play_by_play_path(root: &Path, season: i32, month: u32, level: Level) -> PathBuf {
    root.join("pbp")
        .join(format!("{season}_{month}_{}_pbp.csv", level.file_label()))
}

pub fn player_game_stats_path(root: &Path, season: i32, month: u32, level: Level) -> PathBuf {
    root.join("game_stats").join("player").join(format!(
        "{season}_{month}_{}_player_game_stats.csv",
        level.file_label()
    ))
}

pub fn player_season_stats_path(
    root: &Path,
    season: i32,
    level: Level,
    group: StatGroup,
) -> PathBuf {
    root.join("season_stats").join("player").join(format!(
        "{season}_{}_season_{group}_stats.csv",
        level.file_label()
    ))
}

pub fn team_season_stats_path(root: &Path, season: i32, level: Level, group: StatGroup) -> PathBuf {
    root.join("season_stats").join("team").join(format!(
        "{season}_{}_season_{group}_stats.csv",
        level.file_label()
    ))
}

/// `teams/{season}_teams.csv`
pub fn teams_path(root: &Path, season: i32) -> PathBuf {
    root.join("teams").join(format!("{season}_teams.csv"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_paths() {
        let root = Path::new("out");
        assert_eq!(
            schedule_path(root, 2024, Level::All),
            PathBuf::from("out/schedule/2024_all_schedule.csv")
        );
        assert_eq!(
            play_by_play_path(root, 2024, 6, Level::TripleA),
            PathBuf::from("out/pbp/2024_6_aaa_pbp.csv")
        );
        assert_eq!(
            player_game_stats_path(root, 2024, 10, Level::Rookie),
            PathBuf::from("out/game_stats/player/2024_10_rk_player_game_stats.csv")
        );
        assert_eq!(
            player_season_stats_path(root, 2023, Level::HighA, StatGroup::Batting),
            PathBuf::from("out/season_stats/player/2023_a+_season_batting_stats.csv")
        );
        assert_eq!(
            team_season_stats_path(root, 2023, Level::DoubleA, StatGroup::Pitching),
            PathBuf::from("out/season_stats/team/2023_aa_season_pitching_stats.csv")
        );
        assert_eq!(teams_path(root, 2022), PathBuf::from("out/teams/2022_teams.csv"));
    }
}
