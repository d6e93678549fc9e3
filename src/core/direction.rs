//! Slide directions.
//!
//! A direction names the leading edge tiles move toward. The engine reduces
//! every direction to a leftward slide by re-orienting the board first:
//!
//! | direction | transpose | reverse rows |
//! |-----------|-----------|--------------|
//! | left      | no        | no           |
//! | right     | no        | yes          |
//! | up        | yes       | no           |
//! | down      | yes       | yes          |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ParseDirectionError;

/// One of the four slide directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Whether this direction slides along columns.
    #[must_use]
    pub const fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Whether the leading edge is the far end of the row/column.
    #[must_use]
    pub const fn is_reversed(self) -> bool {
        matches!(self, Direction::Down | Direction::Right)
    }

    /// Map a browser keyboard key name (`"ArrowUp"` etc.) to a direction.
    pub fn from_key(key: &str) -> Result<Self, ParseDirectionError> {
        match key {
            "ArrowUp" => Ok(Direction::Up),
            "ArrowDown" => Ok(Direction::Down),
            "ArrowLeft" => Ok(Direction::Left),
            "ArrowRight" => Ok(Direction::Right),
            other => Err(ParseDirectionError(other.to_string())),
        }
    }

    /// Lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_flags() {
        assert!(!Direction::Left.is_vertical());
        assert!(!Direction::Left.is_reversed());
        assert!(!Direction::Right.is_vertical());
        assert!(Direction::Right.is_reversed());
        assert!(Direction::Up.is_vertical());
        assert!(!Direction::Up.is_reversed());
        assert!(Direction::Down.is_vertical());
        assert!(Direction::Down.is_reversed());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("up".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("LEFT".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!(" Down ".parse::<Direction>(), Ok(Direction::Down));
        assert_eq!(
            "north".parse::<Direction>(),
            Err(ParseDirectionError("north".to_string()))
        );
    }

    #[test]
    fn test_display_round_trip() {
        for dir in Direction::ALL {
            assert_eq!(dir.to_string().parse::<Direction>(), Ok(dir));
        }
    }

    #[test]
    fn test_from_key() {
        assert_eq!(Direction::from_key("ArrowUp"), Ok(Direction::Up));
        assert_eq!(Direction::from_key("ArrowDown"), Ok(Direction::Down));
        assert_eq!(Direction::from_key("ArrowLeft"), Ok(Direction::Left));
        assert_eq!(Direction::from_key("ArrowRight"), Ok(Direction::Right));
        assert!(Direction::from_key("Enter").is_err());
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Direction::Right).unwrap();
        assert_eq!(json, "\"right\"");
        let deserialized: Direction = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Direction::Right);
    }
}
