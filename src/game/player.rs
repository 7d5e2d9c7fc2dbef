//! Per-player match bookkeeping

use uuid::Uuid;

use crate::protocol::OpponentProfile;

/// One side of a formed match, as handed over by matchmaking
#[derive(Debug, Clone)]
pub struct Challenger {
    pub session_id: Uuid,
    pub profile: OpponentProfile,
}

/// Per-match, per-player bookkeeping record.
///
/// The connection itself stays owned by the transport layer; the slot only
/// keeps the session id used to route outbound messages, plus the flags the
/// state machine tracks and the opponent-visible profile snapshot captured
/// when the match was formed.
#[derive(Debug, Clone, Default)]
pub struct PlayerSlot {
    pub session_id: Option<Uuid>,
    pub send_failed: bool,
    pub launch_finished: bool,
    pub launch_ok: bool,
    pub loading_finished: bool,
    pub sync_finished: bool,
    pub profile: OpponentProfile,
}

impl PlayerSlot {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn init(&mut self, session_id: Uuid, profile: OpponentProfile) {
        self.reset();
        self.session_id = Some(session_id);
        self.profile = profile;
    }

    pub fn is(&self, session_id: Uuid) -> bool {
        self.session_id == Some(session_id)
    }
}
