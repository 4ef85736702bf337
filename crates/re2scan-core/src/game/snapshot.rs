use serde::Serialize;

use crate::game::{Enemy, GameTimer, InventoryEntry, Player, RankManager};
use crate::memory::layout::{enemy, inventory, shortcut};

pub const MAX_ITEMS: usize = inventory::MAX_ITEMS;
pub const MAX_SHORTCUTS: usize = shortcut::MAX_SHORTCUTS;
pub const MAX_ENEMIES: usize = enemy::MAX_ENEMIES;

/// Aggregate mirror of the game state, handed to the consumer.
///
/// Allocated once with fixed capacities and overwritten in place on
/// every refresh; the consumer always sees a structurally complete
/// snapshot with sentinel values in unavailable slots. Callers
/// holding the borrowed view must not retain it across refreshes;
/// `clone()` it for a stable copy.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameSnapshot {
    pub timer: GameTimer,
    pub rank: RankManager,
    pub player: Player,

    pub items: [InventoryEntry; MAX_ITEMS],
    pub shortcuts: [InventoryEntry; MAX_SHORTCUTS],
    pub sub_shortcuts: [InventoryEntry; MAX_SHORTCUTS],
    pub equipped_main: InventoryEntry,
    pub equipped_sub: InventoryEntry,
    /// Live slot count reported by the inventory object.
    pub inventory_count: i32,
    /// Unlocked slot capacity reported by the inventory object.
    pub inventory_max_count: i32,

    pub enemies: [Enemy; MAX_ENEMIES],
    pub enemy_count: i32,
    pub enemy_kill_count: i32,

    pub location_id: i32,
    pub location_name: String,
    pub map_id: i32,
    pub map_name: String,
}

impl GameSnapshot {
    pub fn new() -> Self {
        Self {
            timer: GameTimer::default(),
            rank: RankManager::default(),
            player: Player::default(),
            items: std::array::from_fn(|i| InventoryEntry::empty(i as i32)),
            shortcuts: std::array::from_fn(|i| InventoryEntry::empty(i as i32)),
            sub_shortcuts: std::array::from_fn(|i| InventoryEntry::empty(i as i32)),
            equipped_main: InventoryEntry::empty(-1),
            equipped_sub: InventoryEntry::empty(-1),
            inventory_count: 0,
            inventory_max_count: 0,
            enemies: [Enemy::empty(); MAX_ENEMIES],
            enemy_count: 0,
            enemy_kill_count: 0,
            location_id: -1,
            location_name: String::new(),
            map_id: -1,
            map_name: String::new(),
        }
    }

    /// Roster entries that currently hold a live enemy.
    pub fn live_enemies(&self) -> impl Iterator<Item = &Enemy> {
        self.enemies.iter().filter(|e| !e.is_empty())
    }

    /// Inventory entries that currently hold an item or weapon.
    pub fn occupied_items(&self) -> impl Iterator<Item = &InventoryEntry> {
        self.items.iter().filter(|e| !e.is_empty_slot())
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_snapshot_is_all_sentinels() {
        let snapshot = GameSnapshot::new();
        assert!(snapshot.items.iter().all(|e| e.is_empty_slot()));
        assert!(snapshot.enemies.iter().all(|e| e.is_empty()));
        assert_eq!(snapshot.live_enemies().count(), 0);
        assert_eq!(snapshot.occupied_items().count(), 0);
        assert_eq!(snapshot.items[7].slot_no, 7);
    }

    #[test]
    fn test_capacities() {
        let snapshot = GameSnapshot::new();
        assert_eq!(snapshot.items.len(), 20);
        assert_eq!(snapshot.shortcuts.len(), 4);
        assert_eq!(snapshot.sub_shortcuts.len(), 4);
        assert_eq!(snapshot.enemies.len(), 32);
    }
}
