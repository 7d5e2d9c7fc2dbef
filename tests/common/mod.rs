//! Shared fakes for session integration tests: a scripted rules engine and a
//! recording transport.
#![allow(dead_code)] // not every test binary uses every helper

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use duel_match_server::engine::{EngineAction, Phase, RulesEngine, StatusObserver};
use duel_match_server::protocol::{
    ActionMsg, GameStatus, OpponentProfile, PlayerId, ServerMsg, Sphere, SpellRef,
};
use duel_match_server::transport::{Transport, TransportError};
use duel_match_server::{Challenger, MatchId, MatchPool, MatchSession};

/// Script controlling what the fake engine reports to the session core
pub struct EngineScript {
    pub phase: Phase,
    pub pot: (i32, Sphere),
    pub last_bid_winner: Option<PlayerId>,
    pub bid_in_progress: bool,
    pub deck: HashMap<(PlayerId, i32), SpellRef>,
    pub valid: bool,
    pub apply_ok: bool,
    /// When set, `apply` fires the mid-resolution observer with these views
    pub emit_inter_status: Option<(GameStatus, GameStatus)>,
    pub applied: Vec<EngineAction>,
    pub init_count: usize,
}

impl Default for EngineScript {
    fn default() -> Self {
        Self {
            phase: Phase::WaitingForBids,
            pot: (3, Sphere::Energy),
            last_bid_winner: None,
            bid_in_progress: true,
            deck: HashMap::new(),
            valid: true,
            apply_ok: true,
            emit_inter_status: None,
            applied: Vec::new(),
            init_count: 0,
        }
    }
}

/// Rules-engine fake driven by a shared, mutable script
#[derive(Clone)]
pub struct ScriptedEngine {
    pub script: Arc<Mutex<EngineScript>>,
    busy: Arc<AtomicBool>,
    overlap: Arc<AtomicBool>,
}

impl ScriptedEngine {
    pub fn new() -> Self {
        Self {
            script: Arc::new(Mutex::new(EngineScript::default())),
            busy: Arc::new(AtomicBool::new(false)),
            overlap: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn set_phase(&self, phase: Phase) {
        self.script.lock().unwrap().phase = phase;
    }

    pub fn add_spell(&self, player: PlayerId, index: i32, spell: SpellRef) {
        self.script.lock().unwrap().deck.insert((player, index), spell);
    }

    pub fn applied(&self) -> Vec<EngineAction> {
        self.script.lock().unwrap().applied.clone()
    }

    /// True if two `apply` calls ever overlapped in time
    pub fn saw_overlapping_apply(&self) -> bool {
        self.overlap.load(Ordering::SeqCst)
    }
}

impl RulesEngine for ScriptedEngine {
    fn init(&mut self, _p1: &OpponentProfile, _p2: &OpponentProfile) {
        let mut script = self.script.lock().unwrap();
        script.init_count += 1;
        script.applied.clear();
    }

    fn phase(&self) -> Phase {
        self.script.lock().unwrap().phase
    }

    fn pot(&self) -> (i32, Sphere) {
        self.script.lock().unwrap().pot
    }

    fn last_bid_winner(&self) -> Option<PlayerId> {
        self.script.lock().unwrap().last_bid_winner
    }

    fn bid_in_progress(&self) -> bool {
        self.script.lock().unwrap().bid_in_progress
    }

    fn spell_in_deck(&self, player: PlayerId, index: i32) -> Option<SpellRef> {
        self.script.lock().unwrap().deck.get(&(player, index)).copied()
    }

    fn validate(&self, _action: &EngineAction) -> bool {
        self.script.lock().unwrap().valid
    }

    fn apply(&mut self, action: &EngineAction, observer: &mut dyn StatusObserver) -> bool {
        // The busy flag lives outside the script mutex so overlapping calls
        // would actually be observed rather than serialized here.
        if self.busy.swap(true, Ordering::SeqCst) {
            self.overlap.store(true, Ordering::SeqCst);
        }
        std::thread::sleep(std::time::Duration::from_micros(200));

        let ok;
        {
            let mut script = self.script.lock().unwrap();
            ok = script.apply_ok;
            if ok {
                script.applied.push(*action);
                if let Some((p1_view, p2_view)) = script.emit_inter_status.clone() {
                    drop(script);
                    observer.on_status_update(p1_view, p2_view);
                }
            }
        }

        self.busy.store(false, Ordering::SeqCst);
        ok
    }

    fn available_actions(&self, _player: PlayerId) -> Vec<ActionMsg> {
        vec![ActionMsg::Pass]
    }

    fn status(&self, _viewpoint: PlayerId) -> GameStatus {
        GameStatus::default()
    }
}

/// Transport fake recording every delivery, with per-session failure injection
#[derive(Clone, Default)]
pub struct RecordingTransport {
    sent: Arc<Mutex<Vec<(Uuid, ServerMsg)>>>,
    failing: Arc<Mutex<HashSet<Uuid>>>,
}

impl RecordingTransport {
    pub fn sent_to(&self, session_id: Uuid) -> Vec<ServerMsg> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .filter(|(to, _)| *to == session_id)
            .map(|(_, msg)| msg.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.sent.lock().unwrap().clear();
    }

    pub fn fail_sends_to(&self, session_id: Uuid) {
        self.failing.lock().unwrap().insert(session_id);
    }
}

impl Transport for RecordingTransport {
    fn send(&self, session_id: Uuid, msg: &ServerMsg) -> Result<(), TransportError> {
        if self.failing.lock().unwrap().contains(&session_id) {
            return Err(TransportError::SendFailed(
                session_id,
                "connection reset".to_string(),
            ));
        }
        self.sent.lock().unwrap().push((session_id, msg.clone()));
        Ok(())
    }
}

/// Route session logs through the test harness when RUST_LOG is set
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn profile(name: &str) -> OpponentProfile {
    OpponentProfile {
        name: name.to_string(),
        character: 1,
        xp: 120,
        equipped_stuff: vec![4, 9],
    }
}

/// One pooled match plus everything needed to drive and observe it
pub struct Harness {
    pub pool: Arc<MatchPool>,
    pub id: MatchId,
    pub session: Arc<MatchSession>,
    pub transport: RecordingTransport,
    pub engine: ScriptedEngine,
    pub p1: Uuid,
    pub p2: Uuid,
}

impl Harness {
    pub fn new() -> Self {
        init_logging();
        let transport = RecordingTransport::default();
        let engine = ScriptedEngine::new();
        let factory_engine = engine.clone();
        let pool = MatchPool::new(1, Arc::new(transport.clone()), move || {
            Box::new(factory_engine.clone())
        });
        let id = pool.acquire().expect("fresh pool has a free slot");
        let session = pool.get(id).expect("freshly acquired handle is live");
        Self {
            pool,
            id,
            session,
            transport,
            engine,
            p1: Uuid::new_v4(),
            p2: Uuid::new_v4(),
        }
    }

    pub fn assign(&self) {
        self.session.assign_challengers(
            Challenger {
                session_id: self.p1,
                profile: profile("alice"),
            },
            Challenger {
                session_id: self.p2,
                profile: profile("bob"),
            },
            7,
        );
    }

    pub fn to_loading(&self) {
        self.assign();
        self.session.handle_launch_ack(self.p1);
        self.session.handle_launch_ack(self.p2);
    }

    /// Drive to `Started`; leaves the game-start barrier armed
    pub fn to_started(&self) {
        use duel_match_server::protocol::LoadingProgress;
        self.to_loading();
        self.session.handle_loading(self.p1, LoadingProgress::Finished);
        self.session.handle_loading(self.p2, LoadingProgress::Finished);
    }

    /// Acknowledge the outstanding barrier from both sides
    pub fn clear_barrier(&self) {
        use duel_match_server::protocol::MatchCommand;
        self.session.handle_command(self.p1, MatchCommand::Synchronize);
        self.session.handle_command(self.p2, MatchCommand::Synchronize);
    }

    pub fn action(&self, session_id: Uuid, action: ActionMsg) {
        use duel_match_server::protocol::MatchCommand;
        self.session
            .handle_command(session_id, MatchCommand::Action { action });
    }

    /// Commands broadcast to one player, ignoring other answer kinds
    pub fn commands_to(&self, session_id: Uuid) -> Vec<duel_match_server::protocol::CommandKind> {
        self.transport
            .sent_to(session_id)
            .into_iter()
            .filter_map(|msg| match msg {
                ServerMsg::CommandAnswer { answer } => Some(answer.command),
                _ => None,
            })
            .collect()
    }
}
