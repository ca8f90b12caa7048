//! Items: consumable pickups and the capacity-bound inventory.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::data::colors::{CLR_BRIGHT_CYAN, CLR_BRIGHT_MAGENTA, CLR_MAGENTA, CLR_RED, CLR_YELLOW};
use crate::entity::{Entity, RenderOrder};
use crate::magic::ItemEffect;
use crate::message::Message;

mod inventory;

pub use inventory::{AddItem, Inventory};

/// The closed set of item kinds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter,
)]
pub enum ItemKind {
    #[strum(serialize = "Healing Potion")]
    HealingPotion,
    #[strum(serialize = "Fireball Scroll")]
    FireballScroll,
    #[strum(serialize = "Confusion Scroll")]
    ConfusionScroll,
    #[strum(serialize = "Lightning Scroll")]
    LightningScroll,
}

/// Pickup capability component.
///
/// `effect` drives what activation does; `targeting` items wait for a
/// spatial target, announced with `targeting_message`. Whether a charge
/// was actually spent is reported by the effect, not hard-coded here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub kind: ItemKind,
    pub effect: Option<ItemEffect>,
    pub targeting: bool,
    pub targeting_message: Option<Message>,
}

impl ItemKind {
    /// Create an item entity of this kind at a position.
    pub fn spawn(self, x: i32, y: i32) -> Entity {
        let (glyph, color, name, item) = match self {
            ItemKind::HealingPotion => (
                '!',
                CLR_MAGENTA,
                "Healing Potion",
                Item {
                    kind: self,
                    effect: Some(ItemEffect::Heal { amount: 4 }),
                    targeting: false,
                    targeting_message: None,
                },
            ),
            ItemKind::FireballScroll => (
                '#',
                CLR_RED,
                "Fireball Scroll",
                Item {
                    kind: self,
                    effect: Some(ItemEffect::Fireball {
                        damage: 12,
                        radius: 3,
                    }),
                    targeting: true,
                    targeting_message: Some(Message::new(
                        "Left-click a target tile for the fireball, or right-click to cancel.",
                        CLR_BRIGHT_CYAN,
                    )),
                },
            ),
            ItemKind::ConfusionScroll => (
                '#',
                CLR_BRIGHT_MAGENTA,
                "Confusion Scroll",
                Item {
                    kind: self,
                    effect: Some(ItemEffect::Confuse { duration: 10 }),
                    targeting: true,
                    targeting_message: Some(Message::new(
                        "Left-click an enemy to confuse it, or right-click to cancel.",
                        CLR_BRIGHT_CYAN,
                    )),
                },
            ),
            ItemKind::LightningScroll => (
                '#',
                CLR_YELLOW,
                "Lightning Scroll",
                Item {
                    kind: self,
                    effect: Some(ItemEffect::Lightning {
                        damage: 20,
                        maximum_range: 5,
                    }),
                    targeting: false,
                    targeting_message: None,
                },
            ),
        };
        let mut entity = Entity::new(x, y, glyph, color, name);
        entity.render_order = RenderOrder::Item;
        entity.item = Some(item);
        entity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_kind_spawns_a_usable_item() {
        for kind in ItemKind::iter() {
            let e = kind.spawn(1, 2);
            let item = e.item.expect("item component");
            assert!(item.effect.is_some());
            assert!(!e.blocks);
            assert_eq!(e.render_order, RenderOrder::Item);
        }
    }

    #[test]
    fn targeting_items_carry_a_prompt() {
        for kind in ItemKind::iter() {
            let item = kind.spawn(0, 0).item.unwrap();
            assert_eq!(item.targeting, item.targeting_message.is_some());
        }
    }
}
