//! Memory layout constants for the remote game structures.
//!
//! This module centralizes every fixed offset used when walking the
//! game's heap objects. Constants are organized by structure type and
//! mirror the field offsets of the in-game C++ objects; they are
//! identical across all supported builds except where noted (see
//! `rank`).

/// Pointer chains hung off the seven root offsets.
pub mod chains {
    /// PlayerManager -> PlayerCondition.
    pub const PLAYER_CONDITION: [u64; 3] = [0x50, 0x10, 0x20];
    /// InventoryManager global -> InventoryManager object.
    pub const INVENTORY_MANAGER: [u64; 1] = [0x58];
    /// InventoryManager global -> main ShortcutManager.
    pub const SHORTCUT_MANAGER: [u64; 2] = [0x50, 0xB8];
    /// InventoryManager global -> sub ShortcutManager.
    pub const SUB_SHORTCUT_MANAGER: [u64; 2] = [0x50, 0xC0];
    /// InventoryManager global -> equipped main item record.
    pub const MAIN_SLOT: [u64; 4] = [0x50, 0xA0, 0x18, 0x10];
    /// InventoryManager global -> equipped sub item record.
    pub const SUB_SLOT: [u64; 4] = [0x50, 0xA8, 0x18, 0x10];
}

/// GameClock and its save-data record.
pub mod clock {
    /// GameClock -> GameSaveData pointer.
    pub const GAME_SAVE_DATA: u64 = 0x20;

    // GameSaveData tick counters (10 MHz ticks, u64 each)
    pub const GAME_ELAPSED_TIME: u64 = 0x18;
    pub const DEMO_SPENDING_TIME: u64 = 0x20;
    pub const INVENTORY_SPENDING_TIME: u64 = 0x28;
    pub const PAUSE_SPENDING_TIME: u64 = 0x30;

    /// Clock tick frequency of the RE engine timers.
    pub const TICKS_PER_SECOND: u64 = 10_000_000;
}

/// GameRankSystem and its per-difficulty parameter records.
pub mod rank {
    pub const GAME_RANK_PARAMETER: u64 = 0x48;
    pub const GAME_RANK: u64 = 0x58;
    pub const RANK_POINT: u64 = 0x5C;

    /// GameRankParameterData difficulty pointers, DX12 builds.
    pub const PARAM_EASY_DX12: u64 = 0x20;
    pub const PARAM_NORMAL_DX12: u64 = 0x28;
    pub const PARAM_HARD_DX12: u64 = 0x30;

    /// DX11 builds carry one extra leading field in the parameter
    /// record, shifting the difficulty pointers by 8 bytes.
    pub const PARAM_EASY_DX11: u64 = 0x28;
    pub const PARAM_NORMAL_DX11: u64 = 0x30;
    pub const PARAM_HARD_DX11: u64 = 0x38;

    // DifficultyParamClass fields (f32 each)
    pub const RANK_POINT_MIN: u64 = 0x10;
    pub const RANK_POINT_MAX: u64 = 0x14;
    pub const DAMAGE_SCALE: u64 = 0x18;
}

/// PlayerCondition and its sub-objects.
pub mod player {
    /// PlayerCondition -> CostumeChanger pointer.
    pub const COSTUME_CHANGER: u64 = 0x2E0;
    /// PlayerCondition -> HitPointController pointer.
    pub const HIT_POINT_CONTROLLER: u64 = 0x230;
    /// CostumeChanger costume id (i32).
    pub const COSTUME_ID: u64 = 0x54;
}

/// HitPointController fields, shared by the player and enemies.
pub mod hit_points {
    pub const MAX_HP: u64 = 0x54;
    pub const CURRENT_HP: u64 = 0x58;
}

/// InventoryManager object graph.
///
/// The slot array is a managed array: a pointer-sized header region
/// followed by pointer elements at a fixed stride.
pub mod inventory {
    pub const MAX_ITEMS: usize = 20;

    /// InventoryManager -> ListInventory pointer.
    pub const LIST_INVENTORY: u64 = 0x10;
    /// ListInventory -> Inventory pointer.
    pub const INVENTORY: u64 = 0x20;
    /// Inventory live slot count (i32).
    pub const CURRENT_SLOT_SIZE: u64 = 0x90;
    /// Inventory -> Slots record pointer.
    pub const LIST_SLOTS: u64 = 0x98;
    /// Slots record -> slot array pointer.
    pub const SLOTS_ARRAY: u64 = 0x10;
    /// Slots record capacity (i32).
    pub const SLOTS_COUNT: u64 = 0x18;

    /// Byte offset of element 0 inside the slot array.
    pub const ARRAY_HEADER: u64 = 0x20;
    /// Byte distance between consecutive slot pointers.
    pub const SLOT_STRIDE: u64 = 0x8;
}

/// Slot record shared by inventory and shortcut managers.
pub mod slot {
    /// Slot -> slot body pointer.
    pub const BODY: u64 = 0x18;
    /// Slot body -> item record pointer.
    pub const ITEM: u64 = 0x10;
    /// Slot body slot index (i32).
    pub const INDEX: u64 = 0x28;
}

/// Item record (`PrimitiveItem`) fields, also used for the equipped
/// main/sub slots.
pub mod item {
    pub const ITEM_ID: u64 = 0x10;
    pub const WEAPON_ID: u64 = 0x14;
    pub const WEAPON_PARTS: u64 = 0x18;
    pub const BULLET_ID: u64 = 0x1C;
    pub const COUNT: u64 = 0x20;
}

/// ShortcutManager object graph (main and sub managers share it).
pub mod shortcut {
    pub const MAX_SHORTCUTS: usize = 4;

    /// ShortcutManager -> entry array pointer.
    pub const ENTRIES: u64 = 0x18;
    /// Byte offset of entry 0 inside the entry array.
    pub const ARRAY_HEADER: u64 = 0x30;
    /// Byte distance between consecutive entries.
    pub const ENTRY_STRIDE: u64 = 0x18;
}

/// EnemyManager object graph.
pub mod enemy {
    pub const MAX_ENEMIES: usize = 32;

    /// EnemyManager -> active enemy list pointer.
    pub const ACTIVE_ENEMY_LIST: u64 = 0x50;
    /// EnemyManager running total kill count (i32).
    pub const TOTAL_KILL_COUNT: u64 = 0x148;

    /// Active list -> enemy array pointer.
    pub const LIST_ARRAY: u64 = 0x10;
    /// Active list live count (i32).
    pub const LIST_COUNT: u64 = 0x18;
    /// Byte offset of element 0 inside the enemy array.
    pub const ARRAY_HEADER: u64 = 0x20;
    /// Byte distance between consecutive enemy pointers.
    pub const ENEMY_STRIDE: u64 = 0x8;

    /// Enemy -> condition record pointer.
    pub const CONDITION: u64 = 0x140;
    /// Condition record enemy type id (i32).
    pub const TYPE_ID: u64 = 0x54;
    /// Enemy -> hit-point holder pointer.
    pub const HIT_POINT_HOLDER: u64 = 0x218;
    /// Holder -> HitPointController pointer.
    pub const HIT_POINT_CONTROLLER: u64 = 0xB8;
}
