//! # re2scan-core
//!
//! Core library for the RE2 remake memory scanner.
//!
//! This crate provides:
//! - Game build identification by executable hash
//! - Windows process memory reading
//! - Multi-level pointer chain resolution
//! - Subsystem snapshot updaters (timer, rank, player, inventory,
//!   shortcuts, enemies, location)

pub mod error;
pub mod game;
pub mod memory;
pub mod offset;
pub mod scanner;
pub mod version;

pub use error::{Error, Result};
pub use game::{
    DifficultyParam, Enemy, GameSnapshot, GameTimer, HitPoints, InventoryEntry, ItemId, LocationId,
    MapId, Player, RankManager, WeaponKind, WeaponParts, item_name, location_name, map_name,
    weapon_name,
};
pub use memory::{PointerChain, ProcessHandle, ProcessInfo, ReadMemory, find_process};
pub use offset::{OFFSETS_DX11, OFFSETS_DX12, OffsetsCollection, select_offsets};
pub use scanner::Scanner;
pub use version::{BuildFamily, GameVersion, detect_version, detect_version_from_bytes};

/// Process image name of the game's main executable.
pub const GAME_PROCESS_NAME: &str = "re2.exe";
