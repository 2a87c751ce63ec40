use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};
use milb_stats::data_fetcher::models::{Level, StatGroup};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Minor League Baseball stats downloader
///
/// Pulls schedules, play-by-play, box scores, season aggregates and team
/// directories from the MLB Stats API and writes them as CSV files under the
/// configured output directory.
///
/// Game feeds and lineups can be cached on disk by enabling `cache_enabled`
/// in the config file or with MILB_CACHE_ENABLED=true.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Enable debug level logging on stdout and in the log file.
    #[arg(long = "debug", global = true, help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", global = true, help_heading = "Debug")]
    pub log_file: Option<String>,
}

/// Season selection shared by every subcommand.
#[derive(clap::Args, Debug, Clone, Copy)]
pub struct SeasonArgs {
    /// Season to download.
    #[arg(long)]
    pub season: i32,

    /// Last season of an inclusive range starting at `--season`.
    #[arg(long = "end-season")]
    pub end_season: Option<i32>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Download the season schedule of a level.
    Schedule {
        #[command(flatten)]
        seasons: SeasonArgs,

        /// AAA, AA, A+, A, A-, RK or all.
        #[arg(long)]
        level: Level,
    },

    /// Download pitch-level play-by-play, one file per month.
    Pbp {
        #[command(flatten)]
        seasons: SeasonArgs,

        /// AAA, AA, A+, A, A- or RK.
        #[arg(long)]
        level: Level,

        /// Only download this month (1-12).
        #[arg(long)]
        month: Option<u32>,
    },

    /// Download player box score lines, one file per month.
    PlayerGameStats {
        #[command(flatten)]
        seasons: SeasonArgs,

        /// AAA, AA, A+, A, A- or RK.
        #[arg(long)]
        level: Level,

        /// Only download this month (1-12).
        #[arg(long)]
        month: Option<u32>,
    },

    /// Download player season aggregates for every team at a level.
    PlayerSeasonStats {
        #[command(flatten)]
        seasons: SeasonArgs,

        /// AAA, AA, A+, A, A- or RK.
        #[arg(long)]
        level: Level,

        /// batting or pitching.
        #[arg(long = "stat-type", default_value = "batting")]
        stat_type: StatGroup,
    },

    /// Download team season aggregates of a level.
    TeamSeasonStats {
        #[command(flatten)]
        seasons: SeasonArgs,

        /// AAA, AA, A+, A, A- or RK.
        #[arg(long)]
        level: Level,

        /// batting or pitching.
        #[arg(long = "stat-type", default_value = "batting")]
        stat_type: StatGroup,
    },

    /// Download the team directory of a season.
    Teams {
        #[command(flatten)]
        seasons: SeasonArgs,
    },
}
