pub mod box_score;
pub mod fielders;
pub mod game_event;
pub mod level;
pub mod resource;
pub mod schedule;
pub mod season_stats;
pub mod stat_line;
pub mod teams;

pub use box_score::{PlayerGameStats, score_line};
pub use fielders::{DefensiveSlot, FielderAssignment, HalfInning, Position};
pub use game_event::{GameContext, GameEvent, TeamContext};
pub use level::{Level, StatGroup};
pub use resource::ResourceKind;
pub use schedule::{ScheduleGame, completed_game_ids_for_month};
pub use season_stats::{
    PlayerSeasonBatting, PlayerSeasonPitching, TeamSeasonBatting, TeamSeasonPitching,
};
pub use stat_line::StatLine;
pub use teams::{TeamDirectoryEntry, team_ids_for_sport};
