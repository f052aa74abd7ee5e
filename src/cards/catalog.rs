//! The fixed card catalog.
//!
//! Cards are immutable value objects once drawn; the catalog stamps each
//! copy with a fresh [`CardId`] so two copies of the same card never
//! collide in the deck, the marketplace, or a player's collection.

use serde::{Deserialize, Serialize};

use crate::core::CardId;

/// Effect carried by a permanent or single-use card.
///
/// The engine stores and transfers effects; applying them to die rolls or
/// payouts is the consuming layer's concern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardEffect {
    /// +1 damage whenever a monster number is hit.
    ExtraDamageOnHit,
    /// Earn 1 gold whenever a monster number is hit.
    GoldPerHit,
    /// Double the gold reward for hitting the point.
    PointHitBonus,
    /// Ignore the first crap-out rollback each turn.
    DamageShield,
    /// Marketplace refreshes cost 1 less gold.
    CheaperRefresh,
    /// Reroll both dice once.
    Reroll,
    /// Treat the next roll as a hit on a monster number of choice.
    AutoHit,
    /// Skip the current monster without defeating it.
    EscapeMonster,
    /// Return to the game after elimination.
    Revive,
}

/// A card as it exists in the deck, the marketplace, or a player's hand.
///
/// Closed over the three variants the game knows; each carries only the
/// fields that variant uses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Card {
    /// Stays in front of the player for the rest of the game.
    Permanent {
        id: CardId,
        name: String,
        cost: u32,
        effect: CardEffect,
        description: String,
    },
    /// Consumed when used.
    SingleUse {
        id: CardId,
        name: String,
        cost: u32,
        effect: CardEffect,
        description: String,
    },
    /// Converts to victory points on purchase.
    Point {
        id: CardId,
        name: String,
        cost: u32,
        points: u32,
    },
}

impl Card {
    /// This card's unique id.
    #[must_use]
    pub fn id(&self) -> &CardId {
        match self {
            Card::Permanent { id, .. } | Card::SingleUse { id, .. } | Card::Point { id, .. } => id,
        }
    }

    /// This card's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Card::Permanent { name, .. }
            | Card::SingleUse { name, .. }
            | Card::Point { name, .. } => name,
        }
    }

    /// Gold price to buy this card from the marketplace.
    #[must_use]
    pub fn cost(&self) -> u32 {
        match self {
            Card::Permanent { cost, .. }
            | Card::SingleUse { cost, .. }
            | Card::Point { cost, .. } => *cost,
        }
    }

    /// Is this a permanent card (counts against the permanent-card limit)?
    #[must_use]
    pub fn is_permanent(&self) -> bool {
        matches!(self, Card::Permanent { .. })
    }
}

struct PermanentSpec {
    name: &'static str,
    cost: u32,
    effect: CardEffect,
    description: &'static str,
    copies: usize,
}

struct SingleUseSpec {
    name: &'static str,
    cost: u32,
    effect: CardEffect,
    description: &'static str,
    copies: usize,
}

struct PointSpec {
    name: &'static str,
    cost: u32,
    points: u32,
    copies: usize,
}

const PERMANENTS: [PermanentSpec; 5] = [
    PermanentSpec {
        name: "Serrated Dice",
        cost: 4,
        effect: CardEffect::ExtraDamageOnHit,
        description: "Deal 1 extra damage whenever you hit a monster number.",
        copies: 2,
    },
    PermanentSpec {
        name: "Coin Magnet",
        cost: 3,
        effect: CardEffect::GoldPerHit,
        description: "Earn 1 gold whenever you hit a monster number.",
        copies: 2,
    },
    PermanentSpec {
        name: "Lucky Charm",
        cost: 5,
        effect: CardEffect::PointHitBonus,
        description: "Hitting your point pays double gold.",
        copies: 2,
    },
    PermanentSpec {
        name: "Iron Ward",
        cost: 5,
        effect: CardEffect::DamageShield,
        description: "Ignore the first seven rolled each turn.",
        copies: 2,
    },
    PermanentSpec {
        name: "Merchant's Seal",
        cost: 2,
        effect: CardEffect::CheaperRefresh,
        description: "Refreshing the marketplace costs 1 less gold.",
        copies: 2,
    },
];

const SINGLE_USES: [SingleUseSpec; 4] = [
    SingleUseSpec {
        name: "Second Chance",
        cost: 2,
        effect: CardEffect::Reroll,
        description: "Reroll both dice once.",
        copies: 3,
    },
    SingleUseSpec {
        name: "Guided Strike",
        cost: 3,
        effect: CardEffect::AutoHit,
        description: "Your next roll counts as a hit on a monster number of your choice.",
        copies: 3,
    },
    SingleUseSpec {
        name: "Smoke Bomb",
        cost: 3,
        effect: CardEffect::EscapeMonster,
        description: "Slip past the current monster without defeating it.",
        copies: 3,
    },
    SingleUseSpec {
        name: "Phoenix Feather",
        cost: 4,
        effect: CardEffect::Revive,
        description: "Return to the game after being eliminated.",
        copies: 3,
    },
];

const POINTS: [PointSpec; 3] = [
    PointSpec {
        name: "Minor Trophy",
        cost: 3,
        points: 1,
        copies: 4,
    },
    PointSpec {
        name: "Gilded Trophy",
        cost: 5,
        points: 2,
        copies: 3,
    },
    PointSpec {
        name: "Royal Trophy",
        cost: 7,
        points: 3,
        copies: 2,
    },
];

/// Stamp out one copy of every catalog card, in catalog order.
///
/// Every returned card carries a fresh unique id.
#[must_use]
pub fn catalog_cards() -> Vec<Card> {
    let mut cards = Vec::new();
    let mut entry = 0usize;
    let mut next_id = |entry: &mut usize| {
        let id = CardId::for_catalog_entry(*entry);
        *entry += 1;
        id
    };

    for spec in &PERMANENTS {
        for _ in 0..spec.copies {
            cards.push(Card::Permanent {
                id: next_id(&mut entry),
                name: spec.name.to_string(),
                cost: spec.cost,
                effect: spec.effect,
                description: spec.description.to_string(),
            });
        }
    }
    for spec in &SINGLE_USES {
        for _ in 0..spec.copies {
            cards.push(Card::SingleUse {
                id: next_id(&mut entry),
                name: spec.name.to_string(),
                cost: spec.cost,
                effect: spec.effect,
                description: spec.description.to_string(),
            });
        }
    }
    for spec in &POINTS {
        for _ in 0..spec.copies {
            cards.push(Card::Point {
                id: next_id(&mut entry),
                name: spec.name.to_string(),
                cost: spec.cost,
                points: spec.points,
            });
        }
    }

    cards
}
