//! Match session modules

pub mod player;
pub mod pool;
pub mod session;

pub use player::{Challenger, PlayerSlot};
pub use pool::{MatchId, MatchPool};
pub use session::{LastAnswer, MatchSession, MatchState};
