use crate::error::AppError;
use std::fmt;

/// The eight non-pitcher defensive positions, numbered as in scorekeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Catcher,
    FirstBase,
    SecondBase,
    ThirdBase,
    Shortstop,
    LeftField,
    CenterField,
    RightField,
}

impl Position {
    pub const ALL: [Position; 8] = [
        Position::Catcher,
        Position::FirstBase,
        Position::SecondBase,
        Position::ThirdBase,
        Position::Shortstop,
        Position::LeftField,
        Position::CenterField,
        Position::RightField,
    ];

    /// Scorekeeping number, 2 (catcher) through 9 (right field).
    pub fn number(self) -> u8 {
        match self {
            Position::Catcher => 2,
            Position::FirstBase => 3,
            Position::SecondBase => 4,
            Position::ThirdBase => 5,
            Position::Shortstop => 6,
            Position::LeftField => 7,
            Position::CenterField => 8,
            Position::RightField => 9,
        }
    }

    fn index(self) -> usize {
        usize::from(self.number() - 2)
    }
}

/// Where a player ends up after a lineup entry or a defensive change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefensiveSlot {
    Fielder(Position),
    Pitcher,
    DesignatedHitter,
}

impl DefensiveSlot {
    /// Parses the numeric position code carried by substitution events.
    pub fn from_code(code: &str) -> Result<Self, AppError> {
        let slot = match code.trim() {
            "1" => DefensiveSlot::Pitcher,
            "2" => DefensiveSlot::Fielder(Position::Catcher),
            "3" => DefensiveSlot::Fielder(Position::FirstBase),
            "4" => DefensiveSlot::Fielder(Position::SecondBase),
            "5" => DefensiveSlot::Fielder(Position::ThirdBase),
            "6" => DefensiveSlot::Fielder(Position::Shortstop),
            "7" => DefensiveSlot::Fielder(Position::LeftField),
            "8" => DefensiveSlot::Fielder(Position::CenterField),
            "9" => DefensiveSlot::Fielder(Position::RightField),
            "10" => DefensiveSlot::DesignatedHitter,
            other => {
                return Err(AppError::schema_violation(
                    "defensive substitution",
                    format!("unhandled position code `{other}`"),
                ));
            }
        };
        Ok(slot)
    }

    /// Parses the position abbreviation used in starting lineups.
    pub fn from_abbreviation(abbreviation: &str) -> Result<Self, AppError> {
        let slot = match abbreviation.trim() {
            "P" => DefensiveSlot::Pitcher,
            "C" => DefensiveSlot::Fielder(Position::Catcher),
            "1B" => DefensiveSlot::Fielder(Position::FirstBase),
            "2B" => DefensiveSlot::Fielder(Position::SecondBase),
            "3B" => DefensiveSlot::Fielder(Position::ThirdBase),
            "SS" => DefensiveSlot::Fielder(Position::Shortstop),
            "LF" => DefensiveSlot::Fielder(Position::LeftField),
            "CF" => DefensiveSlot::Fielder(Position::CenterField),
            "RF" => DefensiveSlot::Fielder(Position::RightField),
            "DH" => DefensiveSlot::DesignatedHitter,
            other => {
                return Err(AppError::schema_violation(
                    "starting lineup",
                    format!("unhandled starting player position `{other}`"),
                ));
            }
        };
        Ok(slot)
    }
}

/// Current defensive alignment of one team, excluding the pitcher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FielderAssignment {
    slots: [Option<i64>; 8],
}

impl FielderAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, position: Position) -> Option<i64> {
        self.slots[position.index()]
    }

    pub fn assign(&mut self, position: Position, player_id: i64) {
        self.slots[position.index()] = Some(player_id);
    }

    /// Applies a slot change. Pitcher and designated hitter changes do not
    /// touch the fielders; returns whether a fielder slot changed.
    pub fn apply(&mut self, slot: DefensiveSlot, player_id: i64) -> bool {
        match slot {
            DefensiveSlot::Fielder(position) => {
                self.assign(position, player_id);
                true
            }
            DefensiveSlot::Pitcher | DefensiveSlot::DesignatedHitter => false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

/// Half of an inning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalfInning {
    /// Visiting team bats, home team fields.
    Top,
    /// Home team bats, visiting team fields.
    Bottom,
}

impl HalfInning {
    pub fn parse(label: &str) -> Result<Self, AppError> {
        match label.to_lowercase().as_str() {
            "top" => Ok(HalfInning::Top),
            "bottom" => Ok(HalfInning::Bottom),
            other => Err(AppError::schema_violation(
                "plate appearance",
                format!("unhandled baseball inning state `{other}`"),
            )),
        }
    }

    /// Label written to the `inning_topbot` column.
    pub fn label(self) -> &'static str {
        match self {
            HalfInning::Top => "Top",
            HalfInning::Bottom => "Bot",
        }
    }
}

impl fmt::Display for HalfInning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
