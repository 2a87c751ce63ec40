use crate::error::AppError;
use std::fmt;
use std::str::FromStr;

/// Minor league level, mapped to the Stats API `sportId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    TripleA,
    DoubleA,
    HighA,
    SingleA,
    ShortSeasonA,
    Rookie,
    /// Every minor league level at once. Only meaningful for schedules.
    All,
}

impl Level {
    /// Every concrete level, in sport id order.
    pub const CONCRETE: [Level; 6] = [
        Level::TripleA,
        Level::DoubleA,
        Level::HighA,
        Level::SingleA,
        Level::ShortSeasonA,
        Level::Rookie,
    ];

    /// Sport id for a concrete level, `None` for [`Level::All`].
    pub fn sport_id(self) -> Option<u32> {
        match self {
            Level::TripleA => Some(11),
            Level::DoubleA => Some(12),
            Level::HighA => Some(13),
            Level::SingleA => Some(14),
            Level::ShortSeasonA => Some(15),
            Level::Rookie => Some(16),
            Level::All => None,
        }
    }

    /// Sport ids to request from the schedule endpoint.
    pub fn sport_ids(self) -> Vec<u32> {
        match self.sport_id() {
            Some(id) => vec![id],
            None => Level::CONCRETE
                .iter()
                .filter_map(|level| level.sport_id())
                .collect(),
        }
    }

    /// Sport id, or an error for levels the stats service cannot query.
    pub fn require_sport_id(self) -> Result<u32, AppError> {
        self.sport_id().ok_or_else(|| {
            AppError::invalid_argument(
                "`level` must be set to \"AAA\", \"AA\", \"A+\", \"A\", \"A-\", or \"RK\"",
            )
        })
    }

    /// Abbreviation written into season stats rows.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Level::TripleA => "AAA",
            Level::DoubleA => "AA",
            Level::HighA => "A+",
            Level::SingleA => "A",
            Level::ShortSeasonA => "A-",
            Level::Rookie => "RK",
            Level::All => "ALL",
        }
    }

    /// Lower-case label used in output file names.
    pub fn file_label(self) -> &'static str {
        match self {
            Level::TripleA => "aaa",
            Level::DoubleA => "aa",
            Level::HighA => "a+",
            Level::SingleA => "a",
            Level::ShortSeasonA => "a-",
            Level::Rookie => "rk",
            Level::All => "all",
        }
    }
}

impl FromStr for Level {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "aaa" | "triple-a" | "triple a" => Ok(Level::TripleA),
            "aa" | "double-a" | "double a" => Ok(Level::DoubleA),
            "a+" | "high-a" | "high a" => Ok(Level::HighA),
            "a" | "single-a" | "single a" => Ok(Level::SingleA),
            "a-" | "short-a" | "short a" => Ok(Level::ShortSeasonA),
            "rk" | "rok" | "rookie" => Ok(Level::Rookie),
            "all" => Ok(Level::All),
            other => Err(AppError::invalid_argument(format!(
                "Unhandled MiLB level: `{other}`"
            ))),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Which side of the game a stats request is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatGroup {
    Batting,
    Pitching,
}

impl StatGroup {
    /// Group name the stats service expects.
    pub fn api_group(self) -> &'static str {
        match self {
            StatGroup::Batting => "hitting",
            StatGroup::Pitching => "pitching",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StatGroup::Batting => "batting",
            StatGroup::Pitching => "pitching",
        }
    }
}

impl FromStr for StatGroup {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "batting" => Ok(StatGroup::Batting),
            "pitching" => Ok(StatGroup::Pitching),
            _ => Err(AppError::invalid_argument(
                "`stat_type` must be set to \"batting\" or \"pitching\"",
            )),
        }
    }
}

impl fmt::Display for StatGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_aliases() {
        assert_eq!("AAA".parse::<Level>().unwrap(), Level::TripleA);
        assert_eq!("Triple-A".parse::<Level>().unwrap(), Level::TripleA);
        assert_eq!("double a".parse::<Level>().unwrap(), Level::DoubleA);
        assert_eq!("High-A".parse::<Level>().unwrap(), Level::HighA);
        assert_eq!("single a".parse::<Level>().unwrap(), Level::SingleA);
        assert_eq!("Short-A".parse::<Level>().unwrap(), Level::ShortSeasonA);
        assert_eq!("ROK".parse::<Level>().unwrap(), Level::Rookie);
        assert_eq!(" all ".parse::<Level>().unwrap(), Level::All);
    }

    #[test]
    fn test_unknown_level_is_rejected() {
        let err = "mlb".parse::<Level>().unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
        assert!(err.to_string().contains("mlb"));
    }

    #[test]
    fn test_sport_ids() {
        assert_eq!(Level::TripleA.sport_id(), Some(11));
        assert_eq!(Level::Rookie.sport_id(), Some(16));
        assert_eq!(Level::HighA.sport_ids(), vec![13]);
        assert_eq!(Level::All.sport_ids(), vec![11, 12, 13, 14, 15, 16]);
        assert!(Level::All.require_sport_id().is_err());
        assert_eq!(Level::DoubleA.require_sport_id().unwrap(), 12);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Level::HighA.file_label(), "a+");
        assert_eq!(Level::HighA.abbreviation(), "A+");
        assert_eq!(Level::Rookie.to_string(), "RK");
    }

    #[test]
    fn test_stat_group() {
        assert_eq!("Batting".parse::<StatGroup>().unwrap(), StatGroup::Batting);
        assert_eq!(StatGroup::Batting.api_group(), "hitting");
        assert_eq!(StatGroup::Pitching.api_group(), "pitching");
        assert!("fielding".parse::<StatGroup>().is_err());
    }
}
