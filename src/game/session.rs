//! Match session state machine, synchronization barrier and command dispatch
//!
//! One `MatchSession` owns everything mutable about a single two-player
//! match behind a single lock: the lifecycle state machine, both player
//! slots, the rendezvous barrier that keeps the two clients' deterministic
//! simulations in step, and the dispatch logic that fans a broadcast command
//! out into two per-recipient views.
//!
//! No timeout or heartbeat is modeled for a stalled acknowledgement or
//! barrier: a silent client wedges its match until the transport layer
//! reports a disconnect. The integrating system owns that policy.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::engine::{EngineAction, EngineActionKind, Phase, RulesEngine, StatusObserver};
use crate::game::player::{Challenger, PlayerSlot};
use crate::game::pool::MatchPool;
use crate::protocol::{
    ActionMsg, CancelAnswer, ClientMsg, CommandAnswer, CommandKind, GameStatus, LaunchAnswer,
    LoadingAnswer, LoadingProgress, MatchCommand, PlayerId, ServerMsg, SpellKind,
};
use crate::transport::Transport;

/// Lifecycle state of one match.
///
/// Transitions are monotonic for the lifetime of a match; the only loop is
/// through the synchronization barrier while remaining in `Started`.
/// `Released` is terminal until the pool resets the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    WaitingChallengers,
    WaitingAck,
    Loading,
    Started,
    Finished,
    Released,
}

/// Logical type of the most recently broadcast command.
///
/// This is the implicit second state machine layered on top of
/// [`MatchState`]: the same physical action (a cast, say) is interpreted
/// differently depending on which notice it answers. Each variant carries
/// what the next transition needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastAnswer {
    /// Nothing broadcast yet
    None,
    /// A mana contest is open; the next actions are bids
    AwaitingBid,
    /// It is `caster`'s turn; the next action opens the exchange
    AwaitingTurn { caster: PlayerId },
    /// `caster`'s spell is in flight; the defender answers it
    AwaitingSpellResolution { caster: PlayerId, spell_id: i32 },
    /// `caster`'s trick is in flight; the defender answers it
    AwaitingTrickResolution { caster: PlayerId, spell_id: i32 },
    /// `caster`'s retribution is in flight; the defender answers it
    AwaitingRetributionResolution { caster: PlayerId, spell_id: i32 },
    /// `caster` passed; the defender closes the exchange
    AwaitingPassResolution { caster: PlayerId },
    /// The last broadcast was barrier-gated; no player action is legal until
    /// the barrier clears and the follow-up command is dispatched
    Gated,
}

impl LastAnswer {
    /// Classify the sub-state implied by a just-broadcast command
    fn after(command: CommandKind) -> Self {
        match command {
            CommandKind::WillContest { .. } => LastAnswer::AwaitingBid,
            CommandKind::PlayerTurn { caster } => LastAnswer::AwaitingTurn { caster },
            CommandKind::PlayerCastSpell { caster, spell_id } => {
                LastAnswer::AwaitingSpellResolution { caster, spell_id }
            }
            CommandKind::PlayerCastTrick { caster, spell_id } => {
                LastAnswer::AwaitingTrickResolution { caster, spell_id }
            }
            CommandKind::PlayerCastRetribution { caster, spell_id } => {
                LastAnswer::AwaitingRetributionResolution { caster, spell_id }
            }
            CommandKind::PlayerStartPass { caster } => {
                LastAnswer::AwaitingPassResolution { caster }
            }
            CommandKind::GameStart
            | CommandKind::WillResolve { .. }
            | CommandKind::PlayerSpellCountered { .. }
            | CommandKind::PlayerSpellHit
            | CommandKind::PlayerSpellHitAfterTrick { .. }
            | CommandKind::PlayerPassFinish
            | CommandKind::PlayerPassFinishAfterTrick { .. }
            | CommandKind::PlayerRetributionHit
            | CommandKind::PlayerRetributionHitAfterTrick { .. }
            | CommandKind::PlayerTrickHit
            | CommandKind::PlayerTrickHitAfterTrick { .. }
            | CommandKind::GameFinished { .. }
            | CommandKind::PlayerLeft { .. } => LastAnswer::Gated,
        }
    }
}

/// All mutable match state, guarded by exactly one lock
struct Inner {
    state: MatchState,
    level_id: i32,
    last_answer: LastAnswer,
    sync_in_progress: bool,
    /// Re-entrancy guard: a send failure during leave cleanup must not
    /// recurse into the leave handler
    leave_in_progress: bool,
    players: [PlayerSlot; 2],
    engine: Box<dyn RulesEngine>,
    /// Intermediate state snapshots fed by the engine's mid-resolution
    /// callback, one per recipient viewpoint
    inter_status: [Option<GameStatus>; 2],
}

impl Inner {
    fn player(&self, id: PlayerId) -> &PlayerSlot {
        &self.players[idx(id)]
    }

    fn player_mut(&mut self, id: PlayerId) -> &mut PlayerSlot {
        &mut self.players[idx(id)]
    }

    fn resolve(&self, session_id: Uuid) -> Option<PlayerId> {
        if self.players[0].is(session_id) {
            Some(PlayerId::P1)
        } else if self.players[1].is(session_id) {
            Some(PlayerId::P2)
        } else {
            None
        }
    }
}

fn idx(player: PlayerId) -> usize {
    match player {
        PlayerId::P1 => 0,
        PlayerId::P2 => 1,
    }
}

/// The inter-status cache doubles as the engine's status observer; the
/// callback runs synchronously with the match lock held.
impl StatusObserver for [Option<GameStatus>; 2] {
    fn on_status_update(&mut self, p1_view: GameStatus, p2_view: GameStatus) {
        self[0] = Some(p1_view);
        self[1] = Some(p2_view);
    }
}

/// A pooled two-player match session.
///
/// Every public operation acquires the match lock for its full duration,
/// including outbound sends; this is what guarantees both players observe
/// broadcast command *n* before either client's action toward command *n+1*
/// can be accepted.
pub struct MatchSession {
    slot: u32,
    pool: Weak<MatchPool>,
    transport: Arc<dyn Transport>,
    inner: Mutex<Inner>,
}

impl MatchSession {
    pub(crate) fn new(
        slot: u32,
        pool: Weak<MatchPool>,
        transport: Arc<dyn Transport>,
        engine: Box<dyn RulesEngine>,
    ) -> Self {
        Self {
            slot,
            pool,
            transport,
            inner: Mutex::new(Inner {
                state: MatchState::WaitingChallengers,
                level_id: 0,
                last_answer: LastAnswer::None,
                sync_in_progress: false,
                leave_in_progress: false,
                players: [PlayerSlot::default(), PlayerSlot::default()],
                engine,
                inter_status: [None, None],
            }),
        }
    }

    /// Clear all per-match state so the slot can host a new match. Only the
    /// pool calls this, on the acquire path.
    pub(crate) fn reset(&self) {
        let mut inner = self.inner.lock();
        inner.players[0].reset();
        inner.players[1].reset();
        inner.level_id = 0;
        inner.last_answer = LastAnswer::None;
        inner.sync_in_progress = false;
        inner.leave_in_progress = false;
        inner.inter_status = [None, None];
        inner.state = MatchState::WaitingChallengers;
    }

    pub fn state(&self) -> MatchState {
        self.inner.lock().state
    }

    pub fn last_answer(&self) -> LastAnswer {
        self.inner.lock().last_answer
    }

    pub fn sync_in_progress(&self) -> bool {
        self.inner.lock().sync_in_progress
    }

    /// Seat both challengers, snapshot their opponent-visible profiles and
    /// initialize the rules engine. Moves the match to `WaitingAck`.
    pub fn assign_challengers(&self, player1: Challenger, player2: Challenger, level_id: i32) {
        let mut inner = self.inner.lock();
        if inner.state != MatchState::WaitingChallengers {
            warn!(state = ?inner.state, "challengers assigned to a busy match slot, ignored");
            return;
        }

        inner.players[0].init(player1.session_id, player1.profile);
        inner.players[1].init(player2.session_id, player2.profile);

        let Inner { engine, players, .. } = &mut *inner;
        engine.init(&players[0].profile, &players[1].profile);

        inner.level_id = level_id;
        inner.sync_in_progress = false;
        inner.state = MatchState::WaitingAck;

        info!(slot = self.slot, level_id, "challengers assigned, awaiting launch acknowledgements");
    }

    /// Matchmaking failed to seat a second challenger; return the slot to the
    /// pool unused. Ignored once a match is underway.
    pub fn no_challengers(&self) {
        let mut inner = self.inner.lock();
        if inner.state != MatchState::WaitingChallengers {
            warn!(state = ?inner.state, "no-challengers abort on an active match, ignored");
            return;
        }
        info!(slot = self.slot, "match aborted before challengers were seated");
        self.release(&mut inner);
    }

    /// Route any inbound client message to the matching handler
    pub fn handle_message(&self, session_id: Uuid, msg: ClientMsg) {
        match msg {
            ClientMsg::LaunchAck => self.handle_launch_ack(session_id),
            ClientMsg::CancelQuickMatch => self.handle_cancel(session_id),
            ClientMsg::Loading { progress } => self.handle_loading(session_id, progress),
            ClientMsg::Command { command } => self.handle_command(session_id, command),
            ClientMsg::Chat { message } => self.handle_chat(session_id, message),
        }
    }

    pub fn handle_launch_ack(&self, session_id: Uuid) {
        let mut inner = self.inner.lock();
        let Some(player) = inner.resolve(session_id) else {
            warn!(session_id = %session_id, "launch ack from a session not in this match, ignored");
            return;
        };
        self.launch(&mut inner, player, true);
    }

    pub fn handle_cancel(&self, session_id: Uuid) {
        let mut inner = self.inner.lock();
        let Some(player) = inner.resolve(session_id) else {
            warn!(session_id = %session_id, "cancel from a session not in this match, ignored");
            return;
        };
        self.launch(&mut inner, player, false);
    }

    pub fn handle_loading(&self, session_id: Uuid, progress: LoadingProgress) {
        let mut inner = self.inner.lock();
        if inner.state != MatchState::Loading {
            warn!(session_id = %session_id, state = ?inner.state,
                "loading message outside the loading stage, ignored");
            return;
        }
        let Some(player) = inner.resolve(session_id) else {
            warn!(session_id = %session_id, "loading message from a session not in this match, ignored");
            return;
        };

        if progress == LoadingProgress::Finished {
            inner.player_mut(player).loading_finished = true;
        }

        let relayed = match progress {
            LoadingProgress::Progress { percent } => LoadingAnswer::OpponentProgress { percent },
            LoadingProgress::Finished => LoadingAnswer::OpponentFinished,
        };
        self.send(&mut inner, player.opponent(), ServerMsg::LoadingAnswer { answer: relayed });

        // The relay above may have torn the match down on a send failure.
        if inner.state == MatchState::Loading
            && inner.players[0].loading_finished
            && inner.players[1].loading_finished
        {
            inner.state = MatchState::Started;
            self.dispatch_command(&mut inner, CommandKind::GameStart, true);
        }
    }

    pub fn handle_command(&self, session_id: Uuid, command: MatchCommand) {
        let mut inner = self.inner.lock();
        match command {
            MatchCommand::Synchronize => {
                let Some(player) = inner.resolve(session_id) else {
                    warn!(session_id = %session_id,
                        "synchronization ack from a session not in this match, ignored");
                    return;
                };
                self.synchronize(&mut inner, player);
            }
            MatchCommand::LeaveGame => self.leave(&mut inner, session_id),
            MatchCommand::Action { action } => self.player_action(&mut inner, session_id, action),
        }
    }

    /// Chat is relayed verbatim to the opponent, with no state interaction
    pub fn handle_chat(&self, session_id: Uuid, message: String) {
        let mut inner = self.inner.lock();
        let Some(player) = inner.resolve(session_id) else {
            warn!(session_id = %session_id, "chat from a session not in this match, ignored");
            return;
        };
        self.send(&mut inner, player.opponent(), ServerMsg::ChatAnswer { message });
    }

    /// A transport-reported disconnect is handled exactly like an explicit
    /// leave request
    pub fn handle_disconnect(&self, session_id: Uuid) {
        let mut inner = self.inner.lock();
        self.leave(&mut inner, session_id);
    }

    // ---- internals; every method below runs with the match lock held ----

    fn launch(&self, inner: &mut Inner, player: PlayerId, ok: bool) {
        if inner.state != MatchState::WaitingAck {
            warn!(player = player.index(), state = ?inner.state,
                "launch answer outside the acknowledgement stage, ignored");
            return;
        }

        {
            let slot = inner.player_mut(player);
            slot.launch_finished = true;
            slot.launch_ok = ok;
        }

        if !(inner.players[0].launch_finished && inner.players[1].launch_finished) {
            return;
        }

        if inner.players[0].launch_ok && inner.players[1].launch_ok {
            // Both players acked the match; loading can begin.
            let answer1 = ServerMsg::LaunchAnswer {
                answer: LaunchAnswer::MatchLaunched {
                    player_index: PlayerId::P1,
                    level_id: inner.level_id,
                    opponent: inner.players[1].profile.clone(),
                },
            };
            let answer2 = ServerMsg::LaunchAnswer {
                answer: LaunchAnswer::MatchLaunched {
                    player_index: PlayerId::P2,
                    level_id: inner.level_id,
                    opponent: inner.players[0].profile.clone(),
                },
            };
            self.send(inner, PlayerId::P1, answer1);
            self.send(inner, PlayerId::P2, answer2);
            // A send failure above may already have torn the match down.
            if inner.state == MatchState::WaitingAck {
                inner.state = MatchState::Loading;
            }
        } else {
            // At least one side cancelled or dropped. The side that acked (if
            // any) learns the opponent cancelled; the cancelling side gets
            // its cancellation acknowledged. A send to a dropped session is a
            // no-op through the send-failed flag.
            let launch = ServerMsg::LaunchAnswer { answer: LaunchAnswer::OpponentCancelled };
            let cancel = ServerMsg::CancelAnswer { answer: CancelAnswer::QuickMatchCancelled };
            if inner.players[0].launch_ok {
                self.send(inner, PlayerId::P1, launch);
                self.send(inner, PlayerId::P2, cancel);
            } else if inner.players[1].launch_ok {
                self.send(inner, PlayerId::P1, cancel);
                self.send(inner, PlayerId::P2, launch);
            } else {
                self.send(inner, PlayerId::P1, cancel.clone());
                self.send(inner, PlayerId::P2, cancel);
            }
            self.release(inner);
        }
    }

    /// Arm the synchronization barrier. Arming while one is outstanding is a
    /// bug in the dispatch logic, not client misbehavior, and fails loudly.
    fn start_barrier(&self, inner: &mut Inner) {
        if inner.sync_in_progress {
            panic!("synchronization barrier started while one is already in progress");
        }
        inner.players[0].sync_finished = false;
        inner.players[1].sync_finished = false;
        inner.sync_in_progress = true;
    }

    fn synchronize(&self, inner: &mut Inner, player: PlayerId) {
        if !inner.sync_in_progress {
            warn!(player = player.index(),
                "synchronization ack with no barrier outstanding, ignored");
            return;
        }

        inner.player_mut(player).sync_finished = true;
        inner.sync_in_progress =
            !(inner.players[0].sync_finished && inner.players[1].sync_finished);

        if !inner.sync_in_progress {
            self.barrier_complete(inner);
        }
    }

    /// Both clients have applied the last command; consult the engine's
    /// phase to synthesize and dispatch the follow-up command.
    fn barrier_complete(&self, inner: &mut Inner) {
        match inner.engine.phase() {
            Phase::WaitingForBids => {
                let (mana_count, mana_sphere) = inner.engine.pot();
                self.dispatch_command(
                    inner,
                    CommandKind::WillContest { mana_count, mana_sphere },
                    false,
                );
            }
            Phase::Attack(caster) => {
                self.dispatch_command(inner, CommandKind::PlayerTurn { caster }, false);
            }
            Phase::Win(winner) => {
                inner.state = MatchState::Finished;
                self.dispatch_command(
                    inner,
                    CommandKind::GameFinished { winner: Some(winner) },
                    false,
                );
            }
            Phase::Draw => {
                inner.state = MatchState::Finished;
                self.dispatch_command(inner, CommandKind::GameFinished { winner: None }, false);
            }
            phase @ (Phase::WaitingForBid(_) | Phase::Defend(_)) => {
                // A barrier is never armed in the middle of a half-finished
                // exchange; reaching here means the dispatch table itself is
                // inconsistent.
                panic!("synchronization barrier completed in unexpected phase {phase:?}");
            }
        }
    }

    fn player_action(&self, inner: &mut Inner, session_id: Uuid, action: ActionMsg) {
        if inner.state != MatchState::Started {
            warn!(session_id = %session_id, state = ?inner.state,
                "player action outside a started match, ignored");
            return;
        }
        if inner.sync_in_progress {
            warn!(session_id = %session_id,
                "player action while a synchronization is in progress, ignored");
            return;
        }
        let Some(player) = inner.resolve(session_id) else {
            warn!(session_id = %session_id, "action from a session not in this match, ignored");
            return;
        };

        // Translate the wire action into engine terms. An unresolvable spell
        // index degrades to a pass instead of failing the match.
        let kind = match action {
            ActionMsg::Cast { index } => match inner.engine.spell_in_deck(player, index) {
                Some(spell) => EngineActionKind::Cast(spell),
                None => {
                    warn!(player = player.index(), index,
                        "cast references an unknown spell, substituting a pass");
                    EngineActionKind::Pass
                }
            },
            ActionMsg::Bid { quantity } => EngineActionKind::Bid(quantity),
            ActionMsg::Pass => EngineActionKind::Pass,
        };
        let engine_action = EngineAction { player, kind };

        if !inner.engine.validate(&engine_action) {
            warn!(player = player.index(), "invalid player action, ignored");
            return;
        }

        match inner.last_answer {
            LastAnswer::AwaitingBid => {
                if apply(inner, &engine_action) && !inner.engine.bid_in_progress() {
                    let bid_winner = inner.engine.last_bid_winner();
                    self.dispatch_command(inner, CommandKind::WillResolve { bid_winner }, true);
                }
            }

            LastAnswer::AwaitingTurn { .. } => {
                // Classify before applying: an out-of-place bid must not
                // mutate the engine.
                let command = match kind {
                    EngineActionKind::Cast(spell) => match spell.kind {
                        SpellKind::Trick => CommandKind::PlayerCastTrick {
                            caster: player,
                            spell_id: spell.id,
                        },
                        SpellKind::Retribution => CommandKind::PlayerCastRetribution {
                            caster: player,
                            spell_id: spell.id,
                        },
                        SpellKind::Spell | SpellKind::Counter => CommandKind::PlayerCastSpell {
                            caster: player,
                            spell_id: spell.id,
                        },
                    },
                    EngineActionKind::Pass => CommandKind::PlayerStartPass { caster: player },
                    EngineActionKind::Bid(_) => {
                        warn!(player = player.index(), "bid during a turn notice, ignored");
                        return;
                    }
                };
                if apply(inner, &engine_action) {
                    // The defender still answers this notice, so no barrier yet.
                    self.dispatch_command(inner, command, false);
                }
            }

            LastAnswer::AwaitingSpellResolution { .. } => {
                if apply(inner, &engine_action) {
                    let command = match kind {
                        EngineActionKind::Cast(spell) if spell.kind == SpellKind::Counter => {
                            CommandKind::PlayerSpellCountered {
                                caster: player,
                                spell_id: spell.id,
                            }
                        }
                        EngineActionKind::Cast(spell) if spell.kind == SpellKind::Trick => {
                            CommandKind::PlayerSpellHitAfterTrick {
                                caster: player,
                                spell_id: spell.id,
                            }
                        }
                        _ => CommandKind::PlayerSpellHit,
                    };
                    self.dispatch_command(inner, command, true);
                }
            }

            LastAnswer::AwaitingPassResolution { .. } => {
                if apply(inner, &engine_action) {
                    let command = match kind {
                        EngineActionKind::Cast(spell) if spell.kind == SpellKind::Trick => {
                            CommandKind::PlayerPassFinishAfterTrick {
                                caster: player,
                                spell_id: spell.id,
                            }
                        }
                        _ => CommandKind::PlayerPassFinish,
                    };
                    self.dispatch_command(inner, command, true);
                }
            }

            LastAnswer::AwaitingRetributionResolution { .. } => {
                if apply(inner, &engine_action) {
                    let command = match kind {
                        EngineActionKind::Cast(spell) if spell.kind == SpellKind::Trick => {
                            CommandKind::PlayerRetributionHitAfterTrick {
                                caster: player,
                                spell_id: spell.id,
                            }
                        }
                        _ => CommandKind::PlayerRetributionHit,
                    };
                    self.dispatch_command(inner, command, true);
                }
            }

            LastAnswer::AwaitingTrickResolution { .. } => {
                if apply(inner, &engine_action) {
                    let command = match kind {
                        EngineActionKind::Cast(spell) if spell.kind == SpellKind::Trick => {
                            CommandKind::PlayerTrickHitAfterTrick {
                                caster: player,
                                spell_id: spell.id,
                            }
                        }
                        _ => CommandKind::PlayerTrickHit,
                    };
                    self.dispatch_command(inner, command, true);
                }
            }

            LastAnswer::None | LastAnswer::Gated => {
                warn!(player = player.index(), last_answer = ?inner.last_answer,
                    "action does not follow the last broadcast command, ignored");
            }
        }
    }

    /// Broadcast `master` to both players, each with their own status
    /// snapshot, the opponent's cached intermediate state, and their list of
    /// currently legal actions.
    fn dispatch_command(&self, inner: &mut Inner, master: CommandKind, requires_barrier: bool) {
        // The barrier must be armed strictly before any send, so the session
        // is already awaiting acknowledgement by the time either client can
        // possibly reply.
        if requires_barrier {
            self.start_barrier(inner);
        }

        for player in [PlayerId::P1, PlayerId::P2] {
            let answer = CommandAnswer {
                command: master,
                status: Some(inner.engine.status(player)),
                opponent_inter_status: inner.inter_status[idx(player)].clone(),
                available_actions: inner.engine.available_actions(player),
            };
            self.send(inner, player, ServerMsg::CommandAnswer { answer });
        }

        inner.last_answer = LastAnswer::after(master);
    }

    /// Leave handler shared by explicit leave requests, disconnects and
    /// implicit leaves synthesized from send failures
    fn leave(&self, inner: &mut Inner, session_id: Uuid) {
        let Some(player) = inner.resolve(session_id) else {
            debug!(session_id = %session_id, "leave from a session not in this match, ignored");
            return;
        };
        let opponent = player.opponent();

        inner.leave_in_progress = true;
        match inner.state {
            MatchState::WaitingAck => {
                // A drop before the ack counts as a cancel; the match is not
                // released until the opponent has answered too.
                self.launch(inner, player, false);
            }
            MatchState::Loading => {
                // A drop before loading completes cancels the match with no
                // penalty; the opponent learns immediately.
                self.send(
                    inner,
                    opponent,
                    ServerMsg::LoadingAnswer { answer: LoadingAnswer::OpponentDropped },
                );
                self.release(inner);
            }
            state @ (MatchState::Started | MatchState::Finished) => {
                if state == MatchState::Started {
                    // A rage quit mid-match is a resignation.
                    self.send(
                        inner,
                        opponent,
                        bare_command(CommandKind::GameFinished { winner: Some(opponent) }),
                    );
                }
                self.send(inner, opponent, bare_command(CommandKind::PlayerLeft { player }));
                self.release(inner);
            }
            MatchState::WaitingChallengers | MatchState::Released => {}
        }
        inner.leave_in_progress = false;
    }

    /// Deliver one message to one player. A failure marks the player as gone
    /// and, unless teardown is already running, is handled like an explicit
    /// leave from that player.
    fn send(&self, inner: &mut Inner, to: PlayerId, msg: ServerMsg) {
        let slot = inner.player(to);
        if slot.send_failed {
            return;
        }
        let Some(session_id) = slot.session_id else {
            return;
        };

        if let Err(error) = self.transport.send(session_id, &msg) {
            warn!(session_id = %session_id, %error,
                "outbound send failed, treating player as gone");
            inner.player_mut(to).send_failed = true;
            if !inner.leave_in_progress {
                self.leave(inner, session_id);
            }
        }
    }

    fn release(&self, inner: &mut Inner) {
        inner.state = MatchState::Released;
        if let Some(pool) = self.pool.upgrade() {
            pool.mark_released(self.slot);
        }
    }
}

/// Apply an action to the engine; the inter-status cache doubles as the
/// mid-resolution observer
fn apply(inner: &mut Inner, action: &EngineAction) -> bool {
    let Inner { engine, inter_status, .. } = inner;
    engine.apply(action, inter_status)
}

/// A command-answer with no status payload, used for teardown notices
fn bare_command(command: CommandKind) -> ServerMsg {
    ServerMsg::CommandAnswer {
        answer: CommandAnswer {
            command,
            status: None,
            opponent_inter_status: None,
            available_actions: Vec::new(),
        },
    }
}
