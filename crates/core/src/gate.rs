//! Gate evaluation
//!
//! The exit gate is a pure function of switch coverage: it is open exactly
//! while every switch cell also holds a box. There is no latching; pushing a
//! box off a switch closes the gate again, and a puzzle without switches has
//! an always-open gate.

use tui_ninelives_types::EntityKind;

use crate::entity::Entity;

/// Whether every switch in the table is covered by a box
pub(crate) fn evaluate(entities: &[Entity]) -> bool {
    entities
        .iter()
        .filter(|e| e.kind == EntityKind::Switch)
        .all(|switch| {
            entities
                .iter()
                .any(|e| e.kind == EntityKind::Box && e.cell == switch.cell)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityId;
    use tui_ninelives_types::Cell;

    fn entity(id: u32, kind: EntityKind, x: i8, y: i8) -> Entity {
        Entity::new(EntityId(id), kind, Cell::new(x, y))
    }

    #[test]
    fn no_switches_means_open() {
        let entities = [
            entity(0, EntityKind::Actor, 0, 0),
            entity(1, EntityKind::Box, 1, 0),
        ];
        assert!(evaluate(&entities));
    }

    #[test]
    fn every_switch_must_be_covered() {
        let mut entities = vec![
            entity(0, EntityKind::Actor, 0, 0),
            entity(1, EntityKind::Switch, 2, 0),
            entity(2, EntityKind::Switch, 3, 0),
            entity(3, EntityKind::Box, 2, 0),
        ];
        assert!(!evaluate(&entities), "one switch still bare");

        entities.push(entity(4, EntityKind::Box, 3, 0));
        assert!(evaluate(&entities));
    }

    #[test]
    fn actor_on_a_switch_does_not_count() {
        let entities = [
            entity(0, EntityKind::Actor, 2, 0),
            entity(1, EntityKind::Switch, 2, 0),
        ];
        assert!(!evaluate(&entities));
    }
}
