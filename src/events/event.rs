//! Game event types.
//!
//! Events tell collaborators what changed after a state-changing call
//! completes. They carry just enough to decide what to refresh; the
//! current contents are read back through the engine's query surface.

use serde::{Deserialize, Serialize};

use crate::zones::{FoundationIndex, LaneIndex, Location};

/// A change notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new deal or a restored snapshot replaced every zone.
    BoardReset,
    StockChanged,
    WasteChanged,
    FoundationChanged(FoundationIndex),
    LaneChanged(LaneIndex),
    MoveCountChanged(u32),
    TimeChanged(u32),
    /// The undo history became empty or non-empty.
    UndoAvailabilityChanged(bool),
    /// The clock started or stopped.
    ClockChanged { running: bool },
    /// Terminal: every card is on a foundation.
    Won { time_in_seconds: u32, move_count: u32 },
}

impl GameEvent {
    /// The "zone updated" event for a move endpoint.
    #[must_use]
    pub fn zone_changed(location: Location) -> Self {
        match location {
            Location::Waste => GameEvent::WasteChanged,
            Location::Foundation(f) => GameEvent::FoundationChanged(f),
            Location::Lane(l) => GameEvent::LaneChanged(l),
        }
    }

    /// Whether this event reports a zone's contents changing.
    #[must_use]
    pub fn is_zone_change(&self) -> bool {
        matches!(
            self,
            GameEvent::BoardReset
                | GameEvent::StockChanged
                | GameEvent::WasteChanged
                | GameEvent::FoundationChanged(_)
                | GameEvent::LaneChanged(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_changed() {
        let f = FoundationIndex::new(2).unwrap();
        let l = LaneIndex::new(7).unwrap();

        assert_eq!(GameEvent::zone_changed(Location::Waste), GameEvent::WasteChanged);
        assert_eq!(GameEvent::zone_changed(f.into()), GameEvent::FoundationChanged(f));
        assert_eq!(GameEvent::zone_changed(l.into()), GameEvent::LaneChanged(l));
    }

    #[test]
    fn test_is_zone_change() {
        assert!(GameEvent::StockChanged.is_zone_change());
        assert!(!GameEvent::MoveCountChanged(1).is_zone_change());
        assert!(!GameEvent::Won { time_in_seconds: 1, move_count: 2 }.is_zone_change());
    }

    #[test]
    fn test_event_serialization() {
        let event = GameEvent::Won { time_in_seconds: 90, move_count: 400 };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: GameEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
