//! Monster kinds and AI behavior.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use crate::combat::Fighter;
use crate::data::colors::{CLR_BRIGHT_GREEN, CLR_GREEN};
use crate::entity::Entity;

mod ai;

pub use ai::Ai;

/// The closed set of monster kinds.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter,
)]
pub enum MonsterKind {
    Orc,
    Troll,
}

impl MonsterKind {
    /// Create a monster of this kind at a position.
    pub fn spawn(self, x: i32, y: i32) -> Entity {
        let (glyph, color, name, fighter) = match self {
            MonsterKind::Orc => ('o', CLR_GREEN, "orc", Fighter::new(10, 0, 3)),
            MonsterKind::Troll => ('T', CLR_BRIGHT_GREEN, "troll", Fighter::new(16, 1, 4)),
        };
        let mut entity = Entity::new(x, y, glyph, color, name);
        entity.blocks = true;
        entity.fighter = Some(fighter);
        entity.ai = Some(Ai::Basic);
        entity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_kind_spawns_an_acting_blocker() {
        for kind in MonsterKind::iter() {
            let m = kind.spawn(3, 4);
            assert!(m.blocks);
            assert!(m.fighter.is_some());
            assert!(m.ai.is_some());
            assert_eq!((m.x, m.y), (3, 4));
        }
    }

    #[test]
    fn troll_outclasses_orc() {
        let orc = MonsterKind::Orc.spawn(0, 0).fighter.unwrap();
        let troll = MonsterKind::Troll.spawn(0, 0).fighter.unwrap();
        assert!(troll.max_hp > orc.max_hp);
        assert!(troll.power > orc.power);
    }
}
