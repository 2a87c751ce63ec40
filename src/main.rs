// src/main.rs
mod cli;
mod logging;

use chrono::{Datelike, NaiveDate};
use clap::{CommandFactory, Parser};
use cli::{Args, Command, SeasonArgs};
use milb_stats::commands::{Runner, SeasonFloor, month_window, season_range, today};
use milb_stats::config::Config;
use milb_stats::error::AppError;
use tracing::{error, info};

fn seasons(args: SeasonArgs, floor: SeasonFloor, today: NaiveDate) -> Result<Vec<i32>, AppError> {
    season_range(args.season, args.end_season, floor, today.year())
}

async fn run(runner: &Runner, command: Command, today: NaiveDate) -> Result<(), AppError> {
    match command {
        Command::Schedule { seasons: range, level } => {
            for season in seasons(range, SeasonFloor::None, today)? {
                runner.run_schedule(season, level).await?;
            }
        }
        Command::Pbp {
            seasons: range,
            level,
            month,
        } => {
            for season in seasons(range, SeasonFloor::None, today)? {
                let months = month_window(season, month, today)?;
                runner.run_play_by_play(season, level, &months).await?;
            }
        }
        Command::PlayerGameStats {
            seasons: range,
            level,
            month,
        } => {
            for season in seasons(range, SeasonFloor::None, today)? {
                let months = month_window(season, month, today)?;
                runner.run_player_game_stats(season, level, &months).await?;
            }
        }
        Command::PlayerSeasonStats {
            seasons: range,
            level,
            stat_type,
        } => {
            for season in seasons(range, SeasonFloor::StatsService, today)? {
                runner.run_player_season_stats(season, level, stat_type).await?;
            }
        }
        Command::TeamSeasonStats {
            seasons: range,
            level,
            stat_type,
        } => {
            for season in seasons(range, SeasonFloor::StatsService, today)? {
                runner.run_team_season_stats(season, level, stat_type).await?;
            }
        }
        Command::Teams { seasons: range } => {
            for season in seasons(range, SeasonFloor::None, today)? {
                runner.run_teams(season).await?;
            }
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    if args.list_config {
        return Config::display().await;
    }

    let Some(command) = args.command else {
        Args::command().print_help()?;
        return Ok(());
    };

    let config = Config::load().await?;
    let (log_file_path, _guard) =
        logging::setup_logging(args.debug, args.log_file.as_deref(), Some(&config)).await?;
    info!("Logs are written to {}", log_file_path);

    let runner = Runner::new(&config)?;
    if let Err(e) = run(&runner, command, today()).await {
        error!("Aborting: {}", e);
        return Err(e);
    }

    Ok(())
}
