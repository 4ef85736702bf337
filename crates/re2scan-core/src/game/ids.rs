//! Numeric id to name mappings for snapshot display.
//!
//! The tables cover the commonly seen ids; an id outside a table
//! formats as `Unknown(<id>)` rather than failing, since the game
//! uses many placeholder values.

use serde::Serialize;
use strum::{Display, FromRepr, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, FromRepr, Display, IntoStaticStr)]
#[repr(i32)]
pub enum ItemId {
    None = 0,
    FirstAidSpray = 0x01,
    #[strum(serialize = "Herb_Green1")]
    HerbGreen1 = 0x02,
    #[strum(serialize = "Herb_Red1")]
    HerbRed1 = 0x03,
    #[strum(serialize = "Herb_Blue1")]
    HerbBlue1 = 0x04,
    #[strum(serialize = "Herb_Mixed_GG")]
    HerbMixedGg = 0x05,
    #[strum(serialize = "Herb_Mixed_GR")]
    HerbMixedGr = 0x06,
    #[strum(serialize = "Herb_Mixed_GB")]
    HerbMixedGb = 0x07,
    #[strum(serialize = "Herb_Mixed_GGB")]
    HerbMixedGgb = 0x08,
    #[strum(serialize = "Herb_Mixed_GGG")]
    HerbMixedGgg = 0x09,
    #[strum(serialize = "Herb_Mixed_GRB")]
    HerbMixedGrb = 0x0A,
    #[strum(serialize = "Herb_Mixed_RB")]
    HerbMixedRb = 0x0B,
    HandgunBullets = 0x0F,
    ShotgunShells = 0x10,
    SubmachineGunAmmo = 0x11,
    MagAmmo = 0x12,
    GrenadeAcidRounds = 0x16,
    GrenadeFlameRounds = 0x17,
    NeedleCartridges = 0x18,
    Fuel = 0x19,
    InkRibbon = 0x20,
    WoodenBoard = 0x21,
    Gunpowder = 0x24,
    GunpowderLarge = 0x25,
    MatildaHighCapacityMagazine = 0x30,
    MatildaMuzzleBrake = 0x31,
    MatildaGunStock = 0x32,
    SpareKey = 0x70,
    HipPouch = 0x0106,
    PortableSafe = 0x0123,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, FromRepr, Display, IntoStaticStr)]
#[repr(i32)]
pub enum WeaponKind {
    Invalid = -1,
    BareHand = 0,
    #[strum(serialize = "Handgun_Matilda")]
    HandgunMatilda = 0x01,
    #[strum(serialize = "Handgun_M19")]
    HandgunM19 = 0x02,
    #[strum(serialize = "Handgun_JMB_Hp3")]
    HandgunJmbHp3 = 0x03,
    #[strum(serialize = "Handgun_Quickdraw_Army")]
    HandgunQuickdrawArmy = 0x04,
    #[strum(serialize = "Handgun_MUP")]
    HandgunMup = 0x07,
    #[strum(serialize = "Handgun_BroomHc")]
    HandgunBroomHc = 0x08,
    #[strum(serialize = "Handgun_SLS60")]
    HandgunSls60 = 0x09,
    #[strum(serialize = "Shotgun_W870")]
    ShotgunW870 = 0x0B,
    #[strum(serialize = "SMG_MQ11")]
    SmgMq11 = 0x15,
    #[strum(serialize = "Handgun_LightningHawk")]
    HandgunLightningHawk = 0x1F,
    #[strum(serialize = "GrenadeLauncher_GM79")]
    GrenadeLauncherGm79 = 0x2A,
    ChemicalFlamethrower = 0x2B,
    SparkShot = 0x2C,
    #[strum(serialize = "ATM4")]
    Atm4 = 0x2D,
    CombatKnife = 0x2E,
    #[strum(serialize = "CombatKnife_Infinite")]
    CombatKnifeInfinite = 0x2F,
    AntiTankRocketLauncher = 0x31,
    Minigun = 0x32,
    HandGrenade = 0x41,
    FlashGrenade = 0x42,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, FromRepr, Display, IntoStaticStr)]
#[repr(i32)]
pub enum LocationId {
    Invalid = -1,
    RaccoonCity = 0x00,
    PoliceStation = 0x01,
    Shelter = 0x02,
    Sewers = 0x03,
    Laboratory = 0x05,
    GunShop = 0x0A,
    ParkingGarage = 0x0B,
    Orphanage = 0x0C,
    ClockTower = 0x0D,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, FromRepr, Display, IntoStaticStr)]
#[repr(i32)]
pub enum MapId {
    Invalid = -1,
    MainHall1F = 0x00,
    EastWing1F = 0x01,
    EastWing2F = 0x02,
    WestWing1F = 0x03,
    WestWing2F = 0x04,
    WestWing3F = 0x05,
    Basement1F = 0x06,
    Basement2F = 0x07,
    SewersUpper = 0x10,
    SewersLower = 0x11,
    LabMainShaft = 0x20,
    LabGreenhouse = 0x21,
}

fn name_or_unknown(name: Option<&'static str>, id: i32) -> String {
    match name {
        Some(name) => name.to_string(),
        None => format!("Unknown({id})"),
    }
}

pub fn item_name(id: i32) -> String {
    name_or_unknown(ItemId::from_repr(id).map(Into::into), id)
}

pub fn weapon_name(id: i32) -> String {
    name_or_unknown(WeaponKind::from_repr(id).map(Into::into), id)
}

pub fn location_name(id: i32) -> String {
    name_or_unknown(LocationId::from_repr(id).map(Into::into), id)
}

pub fn map_name(id: i32) -> String {
    name_or_unknown(MapId::from_repr(id).map(Into::into), id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_ids_map_to_names() {
        assert_eq!(item_name(ItemId::HerbGreen1 as i32), "Herb_Green1");
        assert_eq!(weapon_name(WeaponKind::HandgunMatilda as i32), "Handgun_Matilda");
        assert_eq!(location_name(LocationId::PoliceStation as i32), "PoliceStation");
        assert_eq!(map_name(MapId::SewersUpper as i32), "SewersUpper");
    }

    #[test]
    fn test_unknown_ids_format_readably() {
        assert_eq!(location_name(0x7FFF), "Unknown(32767)");
        assert_eq!(item_name(-42), "Unknown(-42)");
    }
}
