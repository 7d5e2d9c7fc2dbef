//! Session protocol message definitions
//! These are the message shapes exchanged with clients; framing and
//! encoding belong to the transport layer

use serde::{Deserialize, Serialize};

/// Player seat inside a match, also used as the rules-engine player handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerId {
    P1,
    P2,
}

impl PlayerId {
    /// 1-based index as shown to clients
    pub fn index(self) -> u8 {
        match self {
            PlayerId::P1 => 1,
            PlayerId::P2 => 2,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            PlayerId::P1 => PlayerId::P2,
            PlayerId::P2 => PlayerId::P1,
        }
    }
}

/// Spell categories; the category decides which resolution notice a cast produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpellKind {
    Spell,
    Counter,
    Trick,
    Retribution,
}

/// A spell resolved from a player's deck
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellRef {
    pub id: i32,
    pub kind: SpellKind,
}

/// Mana spheres
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sphere {
    Energy,
    Life,
    Spirit,
}

/// Opponent-visible profile, snapshotted once when the match is formed
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentProfile {
    pub name: String,
    pub character: i32,
    pub xp: i32,
    pub equipped_stuff: Vec<i32>,
}

/// Per-sphere state of one player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SphereStatus {
    pub mana: i32,
    pub absorb: i32,
    pub chaining: i32,
    pub impair: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpellCooldown {
    pub spell_id: i32,
    pub cooldown: i32,
}

/// Full state of the recipient's own wizard
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStatus {
    pub health: i32,
    pub willpower: i32,
    pub next_turns_to_see: i32,
    pub has_vantage: bool,
    pub spheres: [SphereStatus; 3],
    pub cooldowns: Vec<SpellCooldown>,
}

/// What the recipient is allowed to see of the opponent
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentStatus {
    pub health: i32,
    pub has_vantage: bool,
    pub spheres: [SphereStatus; 3],
}

/// One player's view of the whole match state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStatus {
    pub player: PlayerStatus,
    pub opponent: OpponentStatus,
}

/// A player action as it arrives off the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionMsg {
    /// Cast the spell at this index in the player's deck
    Cast { index: i32 },
    /// Bid this quantity of willpower in a mana contest
    Bid { quantity: i32 },
    Pass,
}

/// Loading progress reports sent while clients load match assets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LoadingProgress {
    Progress { percent: u32 },
    Finished,
}

/// In-match commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MatchCommand {
    /// Acknowledge a synchronization barrier
    Synchronize,
    LeaveGame,
    Action { action: ActionMsg },
}

/// Messages sent from client to server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMsg {
    /// Acknowledge the match launch proposal
    LaunchAck,
    /// Back out of the proposed quick match
    CancelQuickMatch,
    Loading { progress: LoadingProgress },
    Command { command: MatchCommand },
    Chat { message: String },
}

/// Command-type tag of a broadcast command-answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CommandKind {
    /// Both clients finished loading; match begins
    GameStart,
    /// A mana contest is open for bids
    WillContest { mana_count: i32, mana_sphere: Sphere },
    /// Both bids are in; winner (or a tie) is about to be resolved
    WillResolve { bid_winner: Option<PlayerId> },
    /// It is `caster`'s turn to act
    PlayerTurn { caster: PlayerId },
    PlayerCastSpell { caster: PlayerId, spell_id: i32 },
    PlayerCastTrick { caster: PlayerId, spell_id: i32 },
    PlayerCastRetribution { caster: PlayerId, spell_id: i32 },
    PlayerSpellCountered { caster: PlayerId, spell_id: i32 },
    PlayerSpellHit,
    PlayerSpellHitAfterTrick { caster: PlayerId, spell_id: i32 },
    PlayerStartPass { caster: PlayerId },
    PlayerPassFinish,
    PlayerPassFinishAfterTrick { caster: PlayerId, spell_id: i32 },
    PlayerRetributionHit,
    PlayerRetributionHitAfterTrick { caster: PlayerId, spell_id: i32 },
    PlayerTrickHit,
    PlayerTrickHitAfterTrick { caster: PlayerId, spell_id: i32 },
    /// Match over; `None` means a draw
    GameFinished { winner: Option<PlayerId> },
    PlayerLeft { player: PlayerId },
}

/// A broadcast command as seen by one recipient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandAnswer {
    pub command: CommandKind,
    /// Recipient's status snapshot; absent on bare teardown notices
    pub status: Option<GameStatus>,
    /// Intermediate state surfaced by the opponent's trick/counter resolution
    pub opponent_inter_status: Option<GameStatus>,
    /// Actions currently legal for the recipient
    pub available_actions: Vec<ActionMsg>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LaunchAnswer {
    MatchLaunched {
        player_index: PlayerId,
        level_id: i32,
        opponent: OpponentProfile,
    },
    OpponentCancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CancelAnswer {
    QuickMatchCancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LoadingAnswer {
    OpponentProgress { percent: u32 },
    OpponentFinished,
    OpponentDropped,
}

/// Messages sent from server to client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMsg {
    LaunchAnswer { answer: LaunchAnswer },
    CancelAnswer { answer: CancelAnswer },
    LoadingAnswer { answer: LoadingAnswer },
    ChatAnswer { message: String },
    CommandAnswer { answer: CommandAnswer },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn client_messages_use_snake_case_type_tags() {
        let msg: ClientMsg = serde_json::from_value(json!({
            "type": "command",
            "command": {
                "type": "action",
                "action": { "type": "bid", "quantity": 3 }
            }
        }))
        .unwrap();
        assert_eq!(
            msg,
            ClientMsg::Command {
                command: MatchCommand::Action {
                    action: ActionMsg::Bid { quantity: 3 }
                }
            }
        );

        let sync: ClientMsg = serde_json::from_value(json!({
            "type": "command",
            "command": { "type": "synchronize" }
        }))
        .unwrap();
        assert_eq!(sync, ClientMsg::Command { command: MatchCommand::Synchronize });
    }

    #[test]
    fn command_answers_round_trip() {
        let answer = ServerMsg::CommandAnswer {
            answer: CommandAnswer {
                command: CommandKind::WillResolve { bid_winner: Some(PlayerId::P2) },
                status: Some(GameStatus::default()),
                opponent_inter_status: None,
                available_actions: vec![ActionMsg::Pass, ActionMsg::Cast { index: 2 }],
            },
        };

        let encoded = serde_json::to_value(&answer).unwrap();
        assert_eq!(encoded["type"], "command_answer");
        assert_eq!(encoded["answer"]["command"]["type"], "will_resolve");
        assert_eq!(encoded["answer"]["command"]["bid_winner"], "p2");

        let decoded: ServerMsg = serde_json::from_value(encoded).unwrap();
        assert_eq!(decoded, answer);
    }
}
