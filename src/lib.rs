//! Duel match server - per-match session core for a two-player duel game
//!
//! This crate owns the session protocol of one match: challenger
//! assignment, the launch acknowledgement handshake, the asset-loading
//! barrier, the action/response exchange with its synchronization barrier,
//! and termination through win, draw, leave or disconnect. The simulation
//! authority (rules engine), message framing (transport) and matchmaking
//! stay outside, behind the traits in [`engine`] and [`transport`].
//!
//! Sessions are pooled: [`game::MatchPool`] recycles fixed slots through
//! generation-checked handles rather than allocating per match.

pub mod config;
pub mod engine;
pub mod game;
pub mod protocol;
pub mod transport;

pub use config::Config;
pub use game::{Challenger, LastAnswer, MatchId, MatchPool, MatchSession, MatchState};
