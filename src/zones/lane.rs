//! Tableau lane: a face-down stack feeding a face-up cascade.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// One tableau lane.
///
/// - `stack`: face-down cards, top of stack is the last element.
/// - `cascade`: face-up cards, the last element is the exposed card.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lane {
    pub stack: Vec<Card>,
    pub cascade: Vec<Card>,
}

impl Lane {
    /// Create a lane from its parts.
    #[must_use]
    pub fn new(stack: Vec<Card>, cascade: Vec<Card>) -> Self {
        Self { stack, cascade }
    }

    /// The exposed (movable) cascade card.
    #[must_use]
    pub fn exposed(&self) -> Option<Card> {
        self.cascade.last().copied()
    }

    /// No cards at all, face-down or face-up.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty() && self.cascade.is_empty()
    }

    /// The face-down top card may be turned over.
    #[must_use]
    pub fn can_flip(&self) -> bool {
        self.cascade.is_empty() && !self.stack.is_empty()
    }

    /// Total cards in the lane.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len() + self.cascade.len()
    }

    /// The last `count` cascade cards, bottom first.
    ///
    /// Returns `None` if `count` is zero or exceeds the cascade.
    #[must_use]
    pub fn top_run(&self, count: usize) -> Option<&[Card]> {
        if count == 0 || count > self.cascade.len() {
            return None;
        }
        Some(&self.cascade[self.cascade.len() - count..])
    }

    /// Remove the last `count` cascade cards.
    pub(crate) fn truncate_cascade(&mut self, count: usize) {
        let keep = self.cascade.len().saturating_sub(count);
        self.cascade.truncate(keep);
    }

    /// Turn over the top stack card onto the cascade.
    pub(crate) fn flip(&mut self) -> Option<Card> {
        let card = self.stack.pop()?;
        self.cascade.push(card);
        Some(card)
    }

    /// Return the single cascade card to the stack.
    pub(crate) fn unflip(&mut self) -> Option<Card> {
        let card = self.cascade.pop()?;
        self.stack.push(card);
        Some(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(texts: &[&str]) -> Vec<Card> {
        texts.iter().map(|t| t.parse().unwrap()).collect()
    }

    #[test]
    fn test_exposed_and_run() {
        let lane = Lane::new(cards(&["clubs2"]), cards(&["hearts9", "spades8", "diamonds7"]));

        assert_eq!(lane.exposed(), Some("diamonds7".parse().unwrap()));
        assert_eq!(lane.top_run(2), Some(&cards(&["spades8", "diamonds7"])[..]));
        assert_eq!(lane.top_run(3).map(<[Card]>::len), Some(3));
        assert!(lane.top_run(0).is_none());
        assert!(lane.top_run(4).is_none());
        assert_eq!(lane.len(), 4);
    }

    #[test]
    fn test_flip_and_unflip() {
        let mut lane = Lane::new(cards(&["clubs2", "hearts5"]), Vec::new());
        assert!(lane.can_flip());

        assert_eq!(lane.flip(), Some("hearts5".parse().unwrap()));
        assert_eq!(lane.cascade, cards(&["hearts5"]));
        assert!(!lane.can_flip());

        assert_eq!(lane.unflip(), Some("hearts5".parse().unwrap()));
        assert_eq!(lane.stack, cards(&["clubs2", "hearts5"]));
        assert!(lane.cascade.is_empty());
    }

    #[test]
    fn test_empty_lane() {
        let mut lane = Lane::default();
        assert!(lane.is_empty());
        assert!(!lane.can_flip());
        assert_eq!(lane.flip(), None);
    }

    #[test]
    fn test_truncate_cascade() {
        let mut lane = Lane::new(Vec::new(), cards(&["hearts9", "spades8", "diamonds7"]));
        lane.truncate_cascade(2);
        assert_eq!(lane.cascade, cards(&["hearts9"]));
    }
}
