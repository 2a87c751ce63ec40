//! Batch runners behind each subcommand.
//!
//! Every runner walks its entities one at a time: a failing entity is logged
//! and skipped, except for [`AppError::AccessDenied`], which aborts the whole
//! batch because every following request would be refused as well.

use chrono::{Datelike, Local, NaiveDate};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::Config;
use crate::constants::seasons::FIRST_STATS_SEASON;
use crate::data_fetcher::Fetcher;
use crate::data_fetcher::models::{
    GameEvent, Level, PlayerGameStats, StatGroup, completed_game_ids_for_month,
    team_ids_for_sport,
};
use crate::data_fetcher::processors::{
    extract_game_events, extract_player_game_stats, extract_player_season_batting,
    extract_player_season_pitching, extract_schedule, extract_team_directory,
    extract_team_season_batting, extract_team_season_pitching,
};
use crate::error::AppError;
use crate::output::{RecordTable, paths};

/// Lower bound a command puts on `--season`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonFloor {
    None,
    StatsService,
}

/// Expands `--season`/`--end-season` into the inclusive list of seasons.
///
/// Seasons after next year are rejected, as are ranges whose end is not
/// strictly after the start. Season aggregates only exist from 2005 on.
pub fn season_range(
    season: i32,
    end_season: Option<i32>,
    floor: SeasonFloor,
    current_year: i32,
) -> Result<Vec<i32>, AppError> {
    let last_allowed = current_year + 1;
    let check = |value: i32| -> Result<(), AppError> {
        if floor == SeasonFloor::StatsService && value < FIRST_STATS_SEASON {
            return Err(AppError::invalid_argument(format!(
                "`season` must be {FIRST_STATS_SEASON} or later, got {value}"
            )));
        }
        if value > last_allowed {
            return Err(AppError::invalid_argument(format!(
                "`season` cannot be greater than {last_allowed}, got {value}"
            )));
        }
        Ok(())
    };

    check(season)?;
    match end_season {
        None => Ok(vec![season]),
        Some(end) if end < season => Err(AppError::invalid_argument(
            "`--season` cannot be greater than `--end-season`",
        )),
        Some(end) if end == season => Err(AppError::invalid_argument(
            "`--end-season` cannot be equal to `--season`",
        )),
        Some(end) => {
            check(end)?;
            Ok((season..=end).collect())
        }
    }
}

/// Months to download for a season.
///
/// An explicit month wins. The season in progress only covers the current
/// month, plus the previous one during the first five days of a month. Any
/// other season covers the whole calendar.
pub fn month_window(
    season: i32,
    month: Option<u32>,
    today: NaiveDate,
) -> Result<Vec<u32>, AppError> {
    if let Some(month) = month {
        if !(1..=12).contains(&month) {
            return Err(AppError::invalid_argument(format!(
                "`month` must be between 1 and 12, got {month}"
            )));
        }
        return Ok(vec![month]);
    }

    if season != today.year() {
        return Ok((1..=12).collect());
    }

    if today.day() <= 5 && today.month() > 1 {
        Ok(vec![today.month() - 1, today.month()])
    } else {
        Ok(vec![today.month()])
    }
}

/// Logs and swallows a per-entity failure unless it must abort the batch.
fn skip_or_abort(error: AppError, entity: &str) -> Result<(), AppError> {
    if error.is_batch_fatal() {
        return Err(error);
    }
    warn!("Skipping {}: {}", entity, error);
    Ok(())
}

async fn write_table<T: Serialize>(
    table: &RecordTable<T>,
    path: &Path,
) -> Result<(), AppError> {
    if table.write_csv(path).await? {
        info!("Wrote {} rows to {}", table.len(), path.display());
    }
    Ok(())
}

async fn write_rows<T: Serialize>(rows: Vec<T>, path: &Path) -> Result<(), AppError> {
    let mut table = RecordTable::new();
    table.extend(rows);
    write_table(&table, path).await
}

/// Runs the subcommands against one fetcher and output directory.
pub struct Runner {
    fetcher: Fetcher,
    output_root: PathBuf,
}

impl Runner {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        Ok(Self {
            fetcher: Fetcher::new(config)?,
            output_root: PathBuf::from(&config.output_dir),
        })
    }

    /// Writes `schedule/{season}_{level}_schedule.csv`.
    pub async fn run_schedule(&self, season: i32, level: Level) -> Result<PathBuf, AppError> {
        let document = self.fetcher.fetch_schedule(season, level).await?;
        let mut table = RecordTable::new();
        table.extend(extract_schedule(&document)?);

        let path = paths::schedule_path(&self.output_root, season, level);
        write_table(&table, &path).await?;
        Ok(path)
    }

    /// Game ids of completed games per requested month.
    async fn completed_games(
        &self,
        season: i32,
        level: Level,
        months: &[u32],
    ) -> Result<Vec<(u32, Vec<i64>)>, AppError> {
        let document = self.fetcher.fetch_schedule(season, level).await?;
        let schedule = extract_schedule(&document)?;

        Ok(months
            .iter()
            .map(|&month| (month, completed_game_ids_for_month(&schedule, month)))
            .collect())
    }

    /// Play-by-play of one game. Missing lineups leave fielders unset.
    pub async fn game_events(&self, game_id: i64) -> Result<Vec<GameEvent>, AppError> {
        let feed = self.fetcher.fetch_game_feed(game_id).await?;
        let lineups = match self.fetcher.fetch_lineups(game_id).await {
            Ok(document) => Some(document),
            Err(e) if e.is_batch_fatal() => return Err(e),
            Err(e) => {
                warn!("No lineups for game {}: {}", game_id, e);
                None
            }
        };
        extract_game_events(&feed, lineups.as_ref(), game_id)
    }

    pub async fn player_game_stats(
        &self,
        game_id: i64,
    ) -> Result<Vec<PlayerGameStats>, AppError> {
        let feed = self.fetcher.fetch_game_feed(game_id).await?;
        extract_player_game_stats(&feed, game_id)
    }

    /// Writes one `pbp/{season}_{month}_{level}_pbp.csv` per month.
    pub async fn run_play_by_play(
        &self,
        season: i32,
        level: Level,
        months: &[u32],
    ) -> Result<Vec<PathBuf>, AppError> {
        level.require_sport_id()?;
        let mut written = Vec::new();

        for (month, game_ids) in self.completed_games(season, level, months).await? {
            info!("{} games to process for {}-{:02}", game_ids.len(), season, month);
            let mut table = RecordTable::new();
            for game_id in game_ids {
                match self.game_events(game_id).await {
                    Ok(events) => table.extend(events),
                    Err(e) => skip_or_abort(e, &format!("game {game_id}"))?,
                }
            }

            let path = paths::play_by_play_path(&self.output_root, season, month, level);
            write_table(&table, &path).await?;
            if !table.is_empty() {
                written.push(path);
            }
        }

        Ok(written)
    }

    /// Writes one player game stats file per month.
    pub async fn run_player_game_stats(
        &self,
        season: i32,
        level: Level,
        months: &[u32],
    ) -> Result<Vec<PathBuf>, AppError> {
        level.require_sport_id()?;
        let mut written = Vec::new();

        for (month, game_ids) in self.completed_games(season, level, months).await? {
            info!("{} games to process for {}-{:02}", game_ids.len(), season, month);
            let mut table = RecordTable::new();
            for game_id in game_ids {
                match self.player_game_stats(game_id).await {
                    Ok(rows) => table.extend(rows),
                    Err(e) => skip_or_abort(e, &format!("game {game_id}"))?,
                }
            }

            let path = paths::player_game_stats_path(&self.output_root, season, month, level);
            write_table(&table, &path).await?;
            if !table.is_empty() {
                written.push(path);
            }
        }

        Ok(written)
    }

    /// Season lines of each team, skipping teams whose request or document fails.
    async fn player_season_table<T, F>(
        &self,
        season: i32,
        level: Level,
        group: StatGroup,
        team_ids: &[i64],
        extract: F,
    ) -> Result<RecordTable<T>, AppError>
    where
        T: Serialize,
        F: Fn(&Value, i32, Level, i64) -> Result<Vec<T>, AppError>,
    {
        let mut table = RecordTable::new();
        for &team_id in team_ids {
            let rows = self
                .fetcher
                .fetch_player_season_stats(season, level, team_id, group)
                .await
                .and_then(|document| extract(&document, season, level, team_id));
            match rows {
                Ok(rows) => table.extend(rows),
                Err(e) => skip_or_abort(e, &format!("team {team_id}"))?,
            }
        }
        Ok(table)
    }

    /// Writes player season lines of every team at the level.
    pub async fn run_player_season_stats(
        &self,
        season: i32,
        level: Level,
        group: StatGroup,
    ) -> Result<PathBuf, AppError> {
        let sport_id = level.require_sport_id()?;
        let directory = extract_team_directory(&self.fetcher.fetch_teams(season).await?, season)?;
        let team_ids = team_ids_for_sport(&directory, sport_id);
        info!("{} {} teams in {}", team_ids.len(), level, season);

        let path = paths::player_season_stats_path(&self.output_root, season, level, group);
        match group {
            StatGroup::Batting => {
                let extract = extract_player_season_batting;
                let table = self
                    .player_season_table(season, level, group, &team_ids, extract)
                    .await?;
                write_table(&table, &path).await?;
            }
            StatGroup::Pitching => {
                let extract = extract_player_season_pitching;
                let table = self
                    .player_season_table(season, level, group, &team_ids, extract)
                    .await?;
                write_table(&table, &path).await?;
            }
        }

        Ok(path)
    }

    /// Writes team season lines of the level.
    pub async fn run_team_season_stats(
        &self,
        season: i32,
        level: Level,
        group: StatGroup,
    ) -> Result<PathBuf, AppError> {
        let document = self
            .fetcher
            .fetch_team_season_stats(season, level, group)
            .await?;
        let path = paths::team_season_stats_path(&self.output_root, season, level, group);

        match group {
            StatGroup::Batting => {
                let rows = extract_team_season_batting(&document, season, level)?;
                write_rows(rows, &path).await?;
            }
            StatGroup::Pitching => {
                let rows = extract_team_season_pitching(&document, season, level)?;
                write_rows(rows, &path).await?;
            }
        }

        Ok(path)
    }

    /// Writes `teams/{season}_teams.csv`.
    pub async fn run_teams(&self, season: i32) -> Result<PathBuf, AppError> {
        let document = self.fetcher.fetch_teams(season).await?;
        let mut table = RecordTable::new();
        table.extend(extract_team_directory(&document, season)?);

        let path = paths::teams_path(&self.output_root, season);
        write_table(&table, &path).await?;
        Ok(path)
    }
}

/// Current local date, used for season bounds and month windows.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_season_range() {
        assert_eq!(
            season_range(2022, None, SeasonFloor::None, 2024).unwrap(),
            vec![2022]
        );
        assert_eq!(
            season_range(2021, Some(2023), SeasonFloor::StatsService, 2024).unwrap(),
            vec![2021, 2022, 2023]
        );
        assert!(season_range(2026, None, SeasonFloor::None, 2024).is_err());
        assert!(season_range(2025, None, SeasonFloor::None, 2024).is_ok());
        assert!(season_range(2004, None, SeasonFloor::StatsService, 2024).is_err());
        assert!(season_range(2004, None, SeasonFloor::None, 2024).is_ok());
    }

    #[test]
    fn test_season_range_rejects_bad_end() {
        let equal = season_range(2022, Some(2022), SeasonFloor::None, 2024).unwrap_err();
        assert!(equal.to_string().contains("cannot be equal"));
        let reversed = season_range(2022, Some(2020), SeasonFloor::None, 2024).unwrap_err();
        assert!(reversed.to_string().contains("cannot be greater"));
        assert!(season_range(2022, Some(2030), SeasonFloor::None, 2024).is_err());
    }

    #[test]
    fn test_month_window() {
        let today = date(2024, 6, 20);
        assert_eq!(month_window(2023, None, today).unwrap(), (1..=12).collect::<Vec<_>>());
        assert_eq!(month_window(2024, None, today).unwrap(), vec![6]);
        assert_eq!(month_window(2024, None, date(2024, 6, 3)).unwrap(), vec![5, 6]);
        assert_eq!(month_window(2024, None, date(2024, 1, 2)).unwrap(), vec![1]);
        assert_eq!(month_window(2024, Some(4), today).unwrap(), vec![4]);
        assert!(month_window(2024, Some(13), today).is_err());
        assert!(month_window(2024, Some(0), today).is_err());
    }
}
