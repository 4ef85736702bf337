use crate::error::{Error, Result};
use crate::version::GameVersion;

/// Root offsets of the seven subsystem globals, relative to the main
/// module base address. One set per build family; selected once at
/// initialization and never mutated afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OffsetsCollection {
    pub game_clock: u64,
    pub rank_system: u64,
    pub player_manager: u64,
    pub inventory_manager: u64,
    pub enemy_manager: u64,
    pub location_id: u64,
    pub map_id: u64,
}

impl OffsetsCollection {
    pub fn is_valid(&self) -> bool {
        self.game_clock != 0
            && self.rank_system != 0
            && self.player_manager != 0
            && self.inventory_manager != 0
            && self.enemy_manager != 0
            && self.location_id != 0
            && self.map_id != 0
    }
}

/// DX12 builds (11636119 world-wide and its CERO Z twin).
pub const OFFSETS_DX12: OffsetsCollection = OffsetsCollection {
    game_clock: 0x091A_ED68,
    rank_system: 0x0918_4F98,
    player_manager: 0x091A_D2C0,
    inventory_manager: 0x091A_6DC0,
    enemy_manager: 0x091A_6AF8,
    location_id: 0x091A_8070,
    map_id: 0x091A_8074,
};

/// DX11 builds (11055033 world-wide and its CERO Z twin).
pub const OFFSETS_DX11: OffsetsCollection = OffsetsCollection {
    game_clock: 0x070A_EBB8,
    rank_system: 0x070B_8528,
    player_manager: 0x070A_A850,
    inventory_manager: 0x070B_23A8,
    enemy_manager: 0x070A_69E0,
    location_id: 0x070A_7D80,
    map_id: 0x070A_7D84,
};

/// Select the root offsets for a detected game version.
///
/// Pure table lookup. Supporting a new build is a data addition here
/// plus a digest entry in `version`, never a logic change.
pub fn select_offsets(version: GameVersion) -> Result<OffsetsCollection> {
    match version {
        GameVersion::Ww11636119 | GameVersion::CerozZ11636615 => Ok(OFFSETS_DX12),
        GameVersion::Ww11055033 | GameVersion::CerozZ11055259 => Ok(OFFSETS_DX11),
        GameVersion::Unknown => Err(Error::UnsupportedVersion(version.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SUPPORTED: [GameVersion; 4] = [
        GameVersion::Ww11636119,
        GameVersion::CerozZ11636615,
        GameVersion::Ww11055033,
        GameVersion::CerozZ11055259,
    ];

    #[test]
    fn test_all_supported_versions_have_complete_offsets() {
        for version in SUPPORTED {
            let offsets = select_offsets(version).unwrap();
            assert!(offsets.is_valid(), "incomplete offsets for {version}");
        }
    }

    #[test]
    fn test_region_twins_share_offsets() {
        assert_eq!(
            select_offsets(GameVersion::Ww11636119).unwrap(),
            select_offsets(GameVersion::CerozZ11636615).unwrap()
        );
        assert_eq!(
            select_offsets(GameVersion::Ww11055033).unwrap(),
            select_offsets(GameVersion::CerozZ11055259).unwrap()
        );
        assert_ne!(
            select_offsets(GameVersion::Ww11636119).unwrap(),
            select_offsets(GameVersion::Ww11055033).unwrap()
        );
    }

    #[test]
    fn test_unknown_version_is_rejected() {
        let result = select_offsets(GameVersion::Unknown);
        assert!(matches!(result, Err(Error::UnsupportedVersion(_))));
    }

    #[test]
    fn test_default_collection_is_invalid() {
        assert!(!OffsetsCollection::default().is_valid());
    }
}
