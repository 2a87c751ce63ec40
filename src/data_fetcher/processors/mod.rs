pub mod box_score;
pub mod event_classifier;
pub mod json_path;
pub mod play_by_play;
pub mod rates;
pub mod schedule;
pub mod season_stats;
pub mod stat_line;
pub mod teams;

pub use box_score::extract_player_game_stats;
pub use event_classifier::{SubEventKind, classify};
pub use json_path::{get_or_default, get_path, is_empty_document};
pub use play_by_play::{StartingFielders, extract_game_events, read_game_context, starting_fielders};
pub use rates::{BattingRates, PitchingRates, batting_rates, pitching_rates};
pub use schedule::extract_schedule;
pub use season_stats::{
    extract_player_season_batting, extract_player_season_pitching, extract_team_season_batting,
    extract_team_season_pitching,
};
pub use stat_line::read_stat_line;
pub use teams::extract_team_directory;
