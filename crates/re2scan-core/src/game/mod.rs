mod enemy;
mod ids;
mod inventory;
mod player;
mod rank;
mod snapshot;
mod timer;

pub use enemy::*;
pub use ids::*;
pub use inventory::*;
pub use player::*;
pub use rank::*;
pub use snapshot::*;
pub use timer::*;
