use serde::Serialize;

use crate::game::enemy::HitPoints;

/// Player condition: health plus the active costume.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Player {
    pub costume_id: i32,
    pub hp: HitPoints,
}

impl Player {
    pub fn health_percentage(&self) -> f32 {
        self.hp.percentage()
    }
}
