//! Refresh orchestrator: walks the pointer chains and mirrors the
//! game subsystems into the aggregate snapshot.
//!
//! One scanner exclusively owns its memory reader, all pointer
//! chains, and the snapshot. Refreshes are synchronous and pull
//! based; updaters run in a fixed order and are independent of each
//! other. A failed read or a broken chain only affects the field or
//! slot being read; the refresh as a whole still completes and the
//! snapshot stays structurally complete.

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::game::{
    DifficultyParam, Enemy, GameSnapshot, HitPoints, InventoryEntry, WeaponParts, location_name,
    map_name,
};
use crate::memory::layout::{
    chains, clock, enemy, hit_points, inventory, item, player, rank, shortcut, slot,
};
use crate::memory::{PointerChain, ReadMemory};
use crate::offset::{OffsetsCollection, select_offsets};
use crate::version::{BuildFamily, GameVersion};

use crate::memory::{ProcessHandle, ProcessInfo};

/// Offsets of the three difficulty pointers inside the rank
/// parameter record, fixed per build family at initialization.
#[derive(Debug, Clone, Copy)]
struct RankParamOffsets {
    easy: u64,
    normal: u64,
    hard: u64,
}

impl RankParamOffsets {
    fn for_family(family: BuildFamily) -> Self {
        match family {
            BuildFamily::Dx12 => Self {
                easy: rank::PARAM_EASY_DX12,
                normal: rank::PARAM_NORMAL_DX12,
                hard: rank::PARAM_HARD_DX12,
            },
            BuildFamily::Dx11 => Self {
                easy: rank::PARAM_EASY_DX11,
                normal: rank::PARAM_NORMAL_DX11,
                hard: rank::PARAM_HARD_DX11,
            },
        }
    }
}

/// The pointer chains re-walked on every refresh.
struct Chains {
    game_clock: PointerChain,
    rank_system: PointerChain,
    player_condition: PointerChain,
    inventory_manager: PointerChain,
    shortcut_manager: PointerChain,
    sub_shortcut_manager: PointerChain,
    main_slot: PointerChain,
    sub_slot: PointerChain,
    enemy_manager: PointerChain,
}

impl Chains {
    fn build(base: u64, offsets: &OffsetsCollection) -> Self {
        Self {
            game_clock: PointerChain::new(base + offsets.game_clock, &[]),
            rank_system: PointerChain::new(base + offsets.rank_system, &[]),
            player_condition: PointerChain::new(
                base + offsets.player_manager,
                &chains::PLAYER_CONDITION,
            ),
            inventory_manager: PointerChain::new(
                base + offsets.inventory_manager,
                &chains::INVENTORY_MANAGER,
            ),
            shortcut_manager: PointerChain::new(
                base + offsets.inventory_manager,
                &chains::SHORTCUT_MANAGER,
            ),
            sub_shortcut_manager: PointerChain::new(
                base + offsets.inventory_manager,
                &chains::SUB_SHORTCUT_MANAGER,
            ),
            main_slot: PointerChain::new(base + offsets.inventory_manager, &chains::MAIN_SLOT),
            sub_slot: PointerChain::new(base + offsets.inventory_manager, &chains::SUB_SLOT),
            enemy_manager: PointerChain::new(base + offsets.enemy_manager, &[]),
        }
    }
}

/// Scanner over one target process.
pub struct Scanner<R: ReadMemory> {
    reader: R,
    base_address: u64,
    version: GameVersion,
    offsets: OffsetsCollection,
    rank_params: RankParamOffsets,
    chains: Chains,
    snapshot: GameSnapshot,
    has_scanned: bool,
}

impl Scanner<ProcessHandle> {
    /// Attach to a located process: detect the game version from its
    /// executable, open a read handle, and build the scanner.
    pub fn attach(info: &ProcessInfo) -> Result<Self> {
        let version = crate::version::detect_version(&info.exe_path)?;
        let reader = ProcessHandle::open(info.pid)?;
        Self::new(reader, info.base_address, version)
    }
}

impl<R: ReadMemory> Scanner<R> {
    /// Build a scanner for a detected game version.
    ///
    /// Fails with `UnsupportedVersion` before building any pointer
    /// chain if the version has no known layout; a failed scanner is
    /// never left half-initialized.
    pub fn new(reader: R, base_address: u64, version: GameVersion) -> Result<Self> {
        let offsets = select_offsets(version)?;
        // select_offsets succeeding implies a known family
        let family = version
            .family()
            .ok_or_else(|| Error::UnsupportedVersion(version.to_string()))?;

        debug!(
            "Initializing scanner: version={}, base={:#x}",
            version, base_address
        );

        Ok(Self {
            reader,
            base_address,
            version,
            offsets,
            rank_params: RankParamOffsets::for_family(family),
            chains: Chains::build(base_address, &offsets),
            snapshot: GameSnapshot::new(),
            has_scanned: false,
        })
    }

    pub fn version(&self) -> GameVersion {
        self.version
    }

    pub fn base_address(&self) -> u64 {
        self.base_address
    }

    /// Whether at least one refresh has completed.
    pub fn has_scanned(&self) -> bool {
        self.has_scanned
    }

    pub fn process_running(&self) -> bool {
        self.reader.is_alive()
    }

    pub fn process_exit_code(&self) -> Option<u32> {
        self.reader.exit_code()
    }

    /// The last produced snapshot, without refreshing.
    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    /// Re-walk every pointer chain and overwrite the snapshot in
    /// place, returning a view of it.
    ///
    /// Fails fast with `ProcessTerminated`, without touching the
    /// snapshot, when the target process has exited.
    pub fn refresh(&mut self) -> Result<&GameSnapshot> {
        if !self.reader.is_alive() {
            return Err(Error::ProcessTerminated {
                exit_code: self.reader.exit_code(),
            });
        }

        self.update_clock();
        self.update_rank();
        self.update_player();
        self.update_inventory();
        self.update_shortcuts();
        self.update_equipped();
        self.update_enemies();
        self.update_location();

        self.has_scanned = true;
        trace!("Refresh complete");
        Ok(&self.snapshot)
    }

    fn update_clock(&mut self) {
        let game_clock = self.chains.game_clock.resolve(&self.reader);
        if game_clock == 0 {
            return;
        }
        let Ok(save_data) = self.reader.read_u64(game_clock + clock::GAME_SAVE_DATA) else {
            return;
        };
        if save_data == 0 {
            return;
        }

        let timer = &mut self.snapshot.timer;
        if let Ok(v) = self.reader.read_u64(save_data + clock::GAME_ELAPSED_TIME) {
            timer.game_elapsed_ticks = v;
        }
        if let Ok(v) = self.reader.read_u64(save_data + clock::DEMO_SPENDING_TIME) {
            timer.demo_spending_ticks = v;
        }
        if let Ok(v) = self.reader.read_u64(save_data + clock::INVENTORY_SPENDING_TIME) {
            timer.inventory_spending_ticks = v;
        }
        if let Ok(v) = self.reader.read_u64(save_data + clock::PAUSE_SPENDING_TIME) {
            timer.pause_spending_ticks = v;
        }
    }

    fn update_rank(&mut self) {
        let rank_system = self.chains.rank_system.resolve(&self.reader);
        if rank_system == 0 {
            return;
        }

        if let Ok(v) = self.reader.read_i32(rank_system + rank::GAME_RANK) {
            self.snapshot.rank.rank = v;
        }
        if let Ok(v) = self.reader.read_f32(rank_system + rank::RANK_POINT) {
            self.snapshot.rank.rank_point = v;
        }

        let Ok(parameter) = self.reader.read_u64(rank_system + rank::GAME_RANK_PARAMETER) else {
            return;
        };
        if parameter == 0 {
            return;
        }

        let tiers = [
            self.rank_params.easy,
            self.rank_params.normal,
            self.rank_params.hard,
        ];
        for (i, tier_offset) in tiers.into_iter().enumerate() {
            if let Some(param) = self.read_difficulty_param(parameter + tier_offset) {
                self.snapshot.rank.params[i] = param;
            }
        }
    }

    fn read_difficulty_param(&self, pointer_address: u64) -> Option<DifficultyParam> {
        let record = self.reader.read_u64(pointer_address).ok()?;
        if record == 0 {
            return None;
        }
        Some(DifficultyParam {
            rank_point_min: self.reader.read_f32(record + rank::RANK_POINT_MIN).ok()?,
            rank_point_max: self.reader.read_f32(record + rank::RANK_POINT_MAX).ok()?,
            damage_scale: self.reader.read_f32(record + rank::DAMAGE_SCALE).ok()?,
        })
    }

    fn update_player(&mut self) {
        let condition = self.chains.player_condition.resolve(&self.reader);
        if condition == 0 {
            return;
        }

        if let Ok(changer) = self.reader.read_u64(condition + player::COSTUME_CHANGER)
            && changer != 0
            && let Ok(costume) = self.reader.read_i32(changer + player::COSTUME_ID)
        {
            self.snapshot.player.costume_id = costume;
        }

        if let Ok(controller) = self.reader.read_u64(condition + player::HIT_POINT_CONTROLLER)
            && controller != 0
            && let Some(hp) = self.read_hit_points(controller)
        {
            self.snapshot.player.hp = hp;
        }
    }

    fn read_hit_points(&self, controller: u64) -> Option<HitPoints> {
        Some(HitPoints {
            max: self.reader.read_i32(controller + hit_points::MAX_HP).ok()?,
            current: self
                .reader
                .read_i32(controller + hit_points::CURRENT_HP)
                .ok()?,
        })
    }

    fn update_inventory(&mut self) {
        let manager = self.chains.inventory_manager.resolve(&self.reader);
        let Some((slots_array, live_count, max_count)) = self.read_inventory_header(manager)
        else {
            for i in 0..inventory::MAX_ITEMS {
                self.snapshot.items[i] = InventoryEntry::empty(i as i32);
            }
            self.snapshot.inventory_count = 0;
            self.snapshot.inventory_max_count = 0;
            return;
        };

        self.snapshot.inventory_count = live_count;
        self.snapshot.inventory_max_count = max_count;

        let live = live_count.clamp(0, inventory::MAX_ITEMS as i32) as usize;
        for i in 0..inventory::MAX_ITEMS {
            // Slots at and past the live count are cleared rather
            // than left at their last-read values.
            self.snapshot.items[i] = if i < live {
                self.read_slot(slots_array, inventory::ARRAY_HEADER, inventory::SLOT_STRIDE, i)
                    .unwrap_or_else(|| InventoryEntry::empty(i as i32))
            } else {
                InventoryEntry::empty(i as i32)
            };
        }
    }

    fn read_inventory_header(&self, manager: u64) -> Option<(u64, i32, i32)> {
        if manager == 0 {
            return None;
        }
        let list = self.reader.read_u64(manager + inventory::LIST_INVENTORY).ok()?;
        if list == 0 {
            return None;
        }
        let inv = self.reader.read_u64(list + inventory::INVENTORY).ok()?;
        if inv == 0 {
            return None;
        }
        let live_count = self.reader.read_i32(inv + inventory::CURRENT_SLOT_SIZE).ok()?;
        let slots = self.reader.read_u64(inv + inventory::LIST_SLOTS).ok()?;
        if slots == 0 {
            return None;
        }
        let max_count = self.reader.read_i32(slots + inventory::SLOTS_COUNT).ok()?;
        let array = self.reader.read_u64(slots + inventory::SLOTS_ARRAY).ok()?;
        if array == 0 {
            return None;
        }
        Some((array, live_count, max_count))
    }

    /// Walk one slot of a managed slot array: slot pointer, slot
    /// body, then the item record.
    fn read_slot(
        &self,
        array: u64,
        header: u64,
        stride: u64,
        index: usize,
    ) -> Option<InventoryEntry> {
        let slot_ptr = self
            .reader
            .read_u64(array + header + index as u64 * stride)
            .ok()?;
        if slot_ptr == 0 {
            return None;
        }
        let body = self.reader.read_u64(slot_ptr + slot::BODY).ok()?;
        if body == 0 {
            return None;
        }
        let item_ptr = self.reader.read_u64(body + slot::ITEM).ok()?;
        let slot_no = self.reader.read_i32(body + slot::INDEX).ok()?;
        if item_ptr == 0 {
            return None;
        }
        self.read_item_record(item_ptr, slot_no)
    }

    fn read_item_record(&self, record: u64, slot_no: i32) -> Option<InventoryEntry> {
        Some(InventoryEntry {
            slot_no,
            item_id: self.reader.read_i32(record + item::ITEM_ID).ok()?,
            weapon_id: self.reader.read_i32(record + item::WEAPON_ID).ok()?,
            weapon_parts: WeaponParts(self.reader.read_i32(record + item::WEAPON_PARTS).ok()?),
            bullet_id: self.reader.read_i32(record + item::BULLET_ID).ok()?,
            count: self.reader.read_i32(record + item::COUNT).ok()?,
        })
    }

    fn update_shortcuts(&mut self) {
        let main = self.chains.shortcut_manager.resolve(&self.reader);
        let sub = self.chains.sub_shortcut_manager.resolve(&self.reader);
        let main_entries = self.shortcut_entries(main);
        let sub_entries = self.shortcut_entries(sub);

        for i in 0..shortcut::MAX_SHORTCUTS {
            self.snapshot.shortcuts[i] = self
                .read_shortcut_slot(main_entries, i)
                .unwrap_or_else(|| InventoryEntry::empty(i as i32));
            self.snapshot.sub_shortcuts[i] = self
                .read_shortcut_slot(sub_entries, i)
                .unwrap_or_else(|| InventoryEntry::empty(i as i32));
        }
    }

    fn shortcut_entries(&self, manager: u64) -> Option<u64> {
        if manager == 0 {
            return None;
        }
        let entries = self.reader.read_u64(manager + shortcut::ENTRIES).ok()?;
        (entries != 0).then_some(entries)
    }

    fn read_shortcut_slot(&self, entries: Option<u64>, index: usize) -> Option<InventoryEntry> {
        self.read_slot(
            entries?,
            shortcut::ARRAY_HEADER,
            shortcut::ENTRY_STRIDE,
            index,
        )
    }

    fn update_equipped(&mut self) {
        let main = self.chains.main_slot.resolve(&self.reader);
        self.snapshot.equipped_main = self
            .read_equipped(main)
            .unwrap_or_else(|| InventoryEntry::empty(-1));

        let sub = self.chains.sub_slot.resolve(&self.reader);
        self.snapshot.equipped_sub = self
            .read_equipped(sub)
            .unwrap_or_else(|| InventoryEntry::empty(-1));
    }

    fn read_equipped(&self, record: u64) -> Option<InventoryEntry> {
        if record == 0 {
            return None;
        }
        self.read_item_record(record, -1)
    }

    fn update_enemies(&mut self) {
        let manager = self.chains.enemy_manager.resolve(&self.reader);
        let Some((array, live_count)) = self.read_enemy_list(manager) else {
            self.snapshot.enemies = [Enemy::empty(); enemy::MAX_ENEMIES];
            self.snapshot.enemy_count = 0;
            return;
        };

        if let Ok(kills) = self.reader.read_i32(manager + enemy::TOTAL_KILL_COUNT) {
            self.snapshot.enemy_kill_count = kills;
        }
        self.snapshot.enemy_count = live_count;

        let live = live_count.clamp(0, enemy::MAX_ENEMIES as i32) as usize;
        for i in 0..enemy::MAX_ENEMIES {
            self.snapshot.enemies[i] = if i < live {
                self.read_enemy(array, i).unwrap_or_else(Enemy::empty)
            } else {
                Enemy::empty()
            };
        }
    }

    fn read_enemy_list(&self, manager: u64) -> Option<(u64, i32)> {
        if manager == 0 {
            return None;
        }
        let list = self.reader.read_u64(manager + enemy::ACTIVE_ENEMY_LIST).ok()?;
        if list == 0 {
            return None;
        }
        let array = self.reader.read_u64(list + enemy::LIST_ARRAY).ok()?;
        if array == 0 {
            return None;
        }
        let live_count = self.reader.read_i32(list + enemy::LIST_COUNT).ok()?;
        Some((array, live_count))
    }

    fn read_enemy(&self, array: u64, index: usize) -> Option<Enemy> {
        let enemy_ptr = self
            .reader
            .read_u64(array + enemy::ARRAY_HEADER + index as u64 * enemy::ENEMY_STRIDE)
            .ok()?;
        if enemy_ptr == 0 {
            return None;
        }
        let condition = self.reader.read_u64(enemy_ptr + enemy::CONDITION).ok()?;
        if condition == 0 {
            return None;
        }
        let type_id = self.reader.read_i32(condition + enemy::TYPE_ID).ok()?;

        Some(Enemy {
            type_id,
            hp: self.read_enemy_hit_points(enemy_ptr),
        })
    }

    fn read_enemy_hit_points(&self, enemy_ptr: u64) -> Option<HitPoints> {
        let holder = self
            .reader
            .read_u64(enemy_ptr + enemy::HIT_POINT_HOLDER)
            .ok()?;
        if holder == 0 {
            return None;
        }
        let controller = self
            .reader
            .read_u64(holder + enemy::HIT_POINT_CONTROLLER)
            .ok()?;
        if controller == 0 {
            return None;
        }
        self.read_hit_points(controller)
    }

    fn update_location(&mut self) {
        // Location and map ids are plain globals, not pointer chains.
        if let Ok(id) = self.reader.read_i32(self.base_address + self.offsets.location_id) {
            self.snapshot.location_id = id;
            self.snapshot.location_name = location_name(id);
        }
        if let Ok(id) = self.reader.read_i32(self.base_address + self.offsets.map_id) {
            self.snapshot.map_id = id;
            self.snapshot.map_name = map_name(id);
        }
    }
}
