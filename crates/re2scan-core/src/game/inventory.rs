use serde::Serialize;

use crate::game::ids::{ItemId, WeaponKind, item_name, weapon_name};

/// Weapon attachment flags as stored in the item record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WeaponParts(pub i32);

impl WeaponParts {
    pub const FIRST: i32 = 1;
    pub const SECOND: i32 = 2;
    pub const THIRD: i32 = 4;

    pub fn has_first(&self) -> bool {
        self.0 & Self::FIRST != 0
    }

    pub fn has_second(&self) -> bool {
        self.0 & Self::SECOND != 0
    }

    pub fn has_third(&self) -> bool {
        self.0 & Self::THIRD != 0
    }

    /// Attachment names joined with `_`, e.g. `First_Third`.
    pub fn flag_names(&self) -> String {
        let mut parts = Vec::new();
        if self.has_first() {
            parts.push("First");
        }
        if self.has_second() {
            parts.push("Second");
        }
        if self.has_third() {
            parts.push("Third");
        }
        parts.join("_")
    }
}

/// One inventory or shortcut slot as read from the remote item record.
///
/// Ids are kept raw: the classification below and the name tables in
/// `ids` interpret them, so an id the tables do not know still round
/// trips through the snapshot unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InventoryEntry {
    pub slot_no: i32,
    pub item_id: i32,
    pub weapon_id: i32,
    pub weapon_parts: WeaponParts,
    pub bullet_id: i32,
    pub count: i32,
}

impl InventoryEntry {
    /// The sentinel written for slots with no current data.
    pub fn empty(slot_no: i32) -> Self {
        Self {
            slot_no,
            item_id: ItemId::None as i32,
            weapon_id: WeaponKind::Invalid as i32,
            weapon_parts: WeaponParts::default(),
            bullet_id: ItemId::None as i32,
            count: 0,
        }
    }

    /// A non-weapon item occupies the slot.
    pub fn is_item(&self) -> bool {
        self.item_id != ItemId::None as i32
            && (self.weapon_id == WeaponKind::Invalid as i32
                || self.weapon_id == WeaponKind::BareHand as i32)
    }

    /// A weapon occupies the slot.
    pub fn is_weapon(&self) -> bool {
        self.item_id == ItemId::None as i32
            && self.weapon_id != WeaponKind::Invalid as i32
            && self.weapon_id != WeaponKind::BareHand as i32
    }

    pub fn is_empty_slot(&self) -> bool {
        !self.is_item() && !self.is_weapon()
    }

    pub fn item_name(&self) -> String {
        item_name(self.item_id)
    }

    pub fn weapon_name(&self) -> String {
        weapon_name(self.weapon_id)
    }

    /// Human-readable slot content for display output.
    pub fn display_name(&self) -> String {
        if self.is_item() {
            self.item_name()
        } else if self.is_weapon() {
            let flags = self.weapon_parts.flag_names();
            if flags.is_empty() {
                self.weapon_name()
            } else {
                format!("{}{}", self.weapon_name(), flags)
            }
        } else {
            "Empty".to_string()
        }
    }
}

impl Default for InventoryEntry {
    fn default() -> Self {
        Self::empty(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(item_id: i32, weapon_id: i32) -> InventoryEntry {
        InventoryEntry {
            slot_no: 0,
            item_id,
            weapon_id,
            weapon_parts: WeaponParts::default(),
            bullet_id: 0,
            count: 1,
        }
    }

    const NONE: i32 = ItemId::None as i32;
    const INVALID: i32 = WeaponKind::Invalid as i32;
    const BARE_HAND: i32 = WeaponKind::BareHand as i32;
    const MATILDA: i32 = WeaponKind::HandgunMatilda as i32;
    const HERB: i32 = ItemId::HerbGreen1 as i32;

    #[test]
    fn test_item_classification() {
        assert!(entry(HERB, INVALID).is_item());
        assert!(entry(HERB, BARE_HAND).is_item());
    }

    #[test]
    fn test_weapon_classification() {
        assert!(entry(NONE, MATILDA).is_weapon());
    }

    #[test]
    fn test_empty_classification() {
        assert!(entry(NONE, INVALID).is_empty_slot());
        assert!(entry(NONE, BARE_HAND).is_empty_slot());
        // Both ids set is not a valid slot state.
        assert!(entry(HERB, MATILDA).is_empty_slot());
    }

    #[test]
    fn test_exactly_one_classification_holds() {
        for item_id in [NONE, HERB] {
            for weapon_id in [INVALID, BARE_HAND, MATILDA] {
                let e = entry(item_id, weapon_id);
                let classified =
                    [e.is_item(), e.is_weapon(), e.is_empty_slot()];
                assert_eq!(
                    classified.iter().filter(|&&c| c).count(),
                    1,
                    "item={item_id} weapon={weapon_id}: {classified:?}"
                );
            }
        }
    }

    #[test]
    fn test_weapon_parts_flags() {
        let parts = WeaponParts(WeaponParts::FIRST | WeaponParts::THIRD);
        assert!(parts.has_first());
        assert!(!parts.has_second());
        assert!(parts.has_third());
        assert_eq!(parts.flag_names(), "First_Third");
    }

    #[test]
    fn test_display_name() {
        assert_eq!(entry(HERB, INVALID).display_name(), "Herb_Green1");
        assert_eq!(entry(NONE, INVALID).display_name(), "Empty");

        let mut weapon = entry(NONE, MATILDA);
        weapon.weapon_parts = WeaponParts(WeaponParts::FIRST);
        assert_eq!(weapon.display_name(), "Handgun_MatildaFirst");
    }
}
