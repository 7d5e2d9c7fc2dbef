//! Rules-engine collaborator contract
//!
//! The simulation authority lives outside this crate; the session core only
//! needs the narrow surface below: legality checks, action application with a
//! synchronous mid-resolution observer, and per-viewpoint status snapshots.

use crate::protocol::{ActionMsg, GameStatus, OpponentProfile, PlayerId, Sphere, SpellRef};

/// Public phase of the simulation as exposed to the session core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Both players still owe a bid
    WaitingForBids,
    /// One bid is in; this player still owes theirs
    WaitingForBid(PlayerId),
    Attack(PlayerId),
    Defend(PlayerId),
    Win(PlayerId),
    Draw,
}

/// A wire action translated into engine terms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineAction {
    pub player: PlayerId,
    pub kind: EngineActionKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineActionKind {
    Cast(SpellRef),
    Bid(i32),
    Pass,
}

/// Receives mid-resolution status callbacks from inside [`RulesEngine::apply`].
///
/// The callback is synchronous and runs on the caller's thread with the match
/// lock held; the session core relies on it completing before `apply` returns.
pub trait StatusObserver {
    fn on_status_update(&mut self, p1_view: GameStatus, p2_view: GameStatus);
}

/// The external simulation authority, one instance per match slot.
///
/// `init` is called each time the slot hosts a new match and must fully reset
/// the instance.
pub trait RulesEngine: Send {
    fn init(&mut self, player1: &OpponentProfile, player2: &OpponentProfile);

    fn phase(&self) -> Phase;

    /// Mana currently at stake in the open contest, and its sphere
    fn pot(&self) -> (i32, Sphere);

    /// Winner of the most recent bid contest, `None` on a tie
    fn last_bid_winner(&self) -> Option<PlayerId>;

    fn bid_in_progress(&self) -> bool;

    /// Resolve a deck index to a spell, if the player owns one at that index
    fn spell_in_deck(&self, player: PlayerId, index: i32) -> Option<SpellRef>;

    fn validate(&self, action: &EngineAction) -> bool;

    /// Apply an action, reporting mid-resolution state through `observer`.
    /// Returns false if the action was rejected.
    fn apply(&mut self, action: &EngineAction, observer: &mut dyn StatusObserver) -> bool;

    fn available_actions(&self, player: PlayerId) -> Vec<ActionMsg>;

    /// Status snapshot from one player's viewpoint
    fn status(&self, viewpoint: PlayerId) -> GameStatus;
}
