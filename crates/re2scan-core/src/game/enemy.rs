use serde::Serialize;

/// Hit-point record shared by the player and enemies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HitPoints {
    pub current: i32,
    pub max: i32,
}

impl HitPoints {
    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    /// Current health as a percentage of max, clamped to 0..=100.
    pub fn percentage(&self) -> f32 {
        if self.max <= 0 {
            return 0.0;
        }
        (self.current.clamp(0, self.max) as f32 / self.max as f32) * 100.0
    }
}

/// Id written to roster slots beyond the live enemy count.
pub const ENEMY_NONE: i32 = -1;

/// One slot of the fixed-capacity enemy roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Enemy {
    pub type_id: i32,
    pub hp: Option<HitPoints>,
}

impl Enemy {
    pub fn empty() -> Self {
        Self {
            type_id: ENEMY_NONE,
            hp: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.type_id == ENEMY_NONE
    }
}

impl Default for Enemy {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage() {
        let hp = HitPoints { current: 600, max: 1200 };
        assert_eq!(hp.percentage(), 50.0);

        let overheal = HitPoints { current: 1500, max: 1200 };
        assert_eq!(overheal.percentage(), 100.0);

        let dead = HitPoints { current: -5, max: 1200 };
        assert_eq!(dead.percentage(), 0.0);
        assert!(!dead.is_alive());
    }

    #[test]
    fn test_zero_max_does_not_divide() {
        let hp = HitPoints { current: 10, max: 0 };
        assert_eq!(hp.percentage(), 0.0);
    }

    #[test]
    fn test_empty_sentinel() {
        let enemy = Enemy::empty();
        assert!(enemy.is_empty());
        assert_eq!(enemy.type_id, ENEMY_NONE);
        assert!(enemy.hp.is_none());
    }
}
