//! Zone addressing.
//!
//! Foundations and lanes are addressed with bounds-checked, 0-based index
//! newtypes. `Location` names the source or destination of a card move; the
//! stock is never a move endpoint (stock clicks carry no location).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of foundations (3 decks × 4 suits).
pub const FOUNDATION_COUNT: usize = 12;

/// Number of tableau lanes.
pub const LANE_COUNT: usize = 13;

/// A raw zone index with no zone behind it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexOutOfRange {
    pub index: usize,
    pub count: usize,
}

impl fmt::Display for IndexOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "index {} out of range 0..{}", self.index, self.count)
    }
}

impl std::error::Error for IndexOutOfRange {}

/// Foundation index, 0 through 11.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct FoundationIndex(u8);

impl FoundationIndex {
    /// Create a foundation index, returning `None` if out of range.
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < FOUNDATION_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate all foundations in scan order (0..11).
    pub fn all() -> impl Iterator<Item = FoundationIndex> {
        (0..FOUNDATION_COUNT as u8).map(FoundationIndex)
    }
}

impl TryFrom<u8> for FoundationIndex {
    type Error = IndexOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value as usize).ok_or(IndexOutOfRange {
            index: value as usize,
            count: FOUNDATION_COUNT,
        })
    }
}

impl fmt::Display for FoundationIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "F{}", self.0)
    }
}

/// Lane index, 0 through 12.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8")]
pub struct LaneIndex(u8);

impl LaneIndex {
    /// Create a lane index, returning `None` if out of range.
    #[must_use]
    pub const fn new(index: usize) -> Option<Self> {
        if index < LANE_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Get the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate all lanes left to right.
    pub fn all() -> impl Iterator<Item = LaneIndex> {
        (0..LANE_COUNT as u8).map(LaneIndex)
    }
}

impl TryFrom<u8> for LaneIndex {
    type Error = IndexOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value as usize).ok_or(IndexOutOfRange {
            index: value as usize,
            count: LANE_COUNT,
        })
    }
}

impl fmt::Display for LaneIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}", self.0)
    }
}

/// Source or destination of a card move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    Waste,
    Foundation(FoundationIndex),
    Lane(LaneIndex),
}

impl Location {
    #[must_use]
    pub const fn is_foundation(self) -> bool {
        matches!(self, Location::Foundation(_))
    }

    #[must_use]
    pub const fn is_lane(self) -> bool {
        matches!(self, Location::Lane(_))
    }
}

impl From<FoundationIndex> for Location {
    fn from(index: FoundationIndex) -> Self {
        Location::Foundation(index)
    }
}

impl From<LaneIndex> for Location {
    fn from(index: LaneIndex) -> Self {
        Location::Lane(index)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Waste => f.write_str("W"),
            Location::Foundation(i) => write!(f, "{}", i),
            Location::Lane(i) => write!(f, "{}", i),
        }
    }
}

impl FromStr for Location {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_index = |digits: &str| digits.parse::<usize>().map_err(|_| format!("invalid location '{}'", s));
        match s.as_bytes().first() {
            Some(b'W') if s.len() == 1 => Ok(Location::Waste),
            Some(b'F') => FoundationIndex::new(parse_index(&s[1..])?)
                .map(Location::Foundation)
                .ok_or_else(|| format!("foundation out of range '{}'", s)),
            Some(b'L') => LaneIndex::new(parse_index(&s[1..])?)
                .map(Location::Lane)
                .ok_or_else(|| format!("lane out of range '{}'", s)),
            _ => Err(format!("invalid location '{}'", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_bounds() {
        assert!(FoundationIndex::new(11).is_some());
        assert!(FoundationIndex::new(12).is_none());
        assert!(LaneIndex::new(12).is_some());
        assert!(LaneIndex::new(13).is_none());

        assert_eq!(FoundationIndex::all().count(), FOUNDATION_COUNT);
        assert_eq!(LaneIndex::all().count(), LANE_COUNT);
    }

    #[test]
    fn test_location_text() {
        let lane = Location::Lane(LaneIndex::new(3).unwrap());
        let foundation = Location::Foundation(FoundationIndex::new(11).unwrap());

        assert_eq!(lane.to_string(), "L3");
        assert_eq!(foundation.to_string(), "F11");
        assert_eq!(Location::Waste.to_string(), "W");

        assert_eq!("L3".parse::<Location>(), Ok(lane));
        assert_eq!("F11".parse::<Location>(), Ok(foundation));
        assert_eq!("W".parse::<Location>(), Ok(Location::Waste));

        assert!("L13".parse::<Location>().is_err());
        assert!("F12".parse::<Location>().is_err());
        assert!("X1".parse::<Location>().is_err());
        assert!("Lx".parse::<Location>().is_err());
    }

    #[test]
    fn test_deserialization_checks_range() {
        assert_eq!(serde_json::from_str::<LaneIndex>("12").unwrap(), LaneIndex::new(12).unwrap());
        assert!(serde_json::from_str::<LaneIndex>("13").is_err());
        assert!(serde_json::from_str::<FoundationIndex>("12").is_err());
        assert!(serde_json::from_str::<Location>(r#"{"Lane":99}"#).is_err());
        assert_eq!(
            LaneIndex::try_from(200),
            Err(IndexOutOfRange { index: 200, count: LANE_COUNT })
        );
    }
}
