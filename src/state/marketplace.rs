//! The shared marketplace.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::core::CardId;

/// The card offering shared by all players.
///
/// A fixed number of slots; a `None` slot is a card that has been sold and
/// not yet replaced. Marketplace ids are always disjoint from the deck's
/// and from every player's collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Marketplace {
    /// Card slots in display order.
    pub slots: Vector<Option<Card>>,
}

impl Marketplace {
    /// Build a marketplace from an ordered card draw.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            slots: cards.into_iter().map(Some).collect(),
        }
    }

    /// Find the slot index holding `card_id`, if it is still for sale.
    #[must_use]
    pub fn slot_of(&self, card_id: &CardId) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|c| c.id() == card_id))
    }

    /// Cards currently for sale, in slot order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.slots.iter().filter_map(|slot| slot.as_ref())
    }

    /// Copy of this marketplace with the given slot emptied.
    #[must_use]
    pub fn with_slot_sold(&self, index: usize) -> Self {
        Self {
            slots: self.slots.update(index, None),
        }
    }
}
