use serde::Serialize;

/// One difficulty tier of the adaptive-difficulty parameter set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DifficultyParam {
    pub rank_point_min: f32,
    pub rank_point_max: f32,
    pub damage_scale: f32,
}

/// Adaptive difficulty state: current rank, rank points, and the
/// parameter records for the three fixed tiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RankManager {
    pub rank: i32,
    pub rank_point: f32,
    pub params: [DifficultyParam; 3],
}

impl RankManager {
    pub fn easy(&self) -> &DifficultyParam {
        &self.params[0]
    }

    pub fn normal(&self) -> &DifficultyParam {
        &self.params[1]
    }

    pub fn hard(&self) -> &DifficultyParam {
        &self.params[2]
    }
}
