//! Pooled match slots addressed through generation-checked handles
//!
//! Match sessions are recycled rather than allocated per match. The pool
//! owns a fixed vector of slots and hands out `(index, generation)` handles;
//! releasing a slot bumps its generation, so stale handles can never reach a
//! slot that has since been reused.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tracing::debug;

use crate::config::Config;
use crate::engine::RulesEngine;
use crate::game::session::MatchSession;
use crate::transport::Transport;

/// Handle to a pooled match slot; fails the generation check once the slot
/// has been released
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MatchId {
    index: u32,
    generation: u32,
}

struct PoolState {
    free_list: Vec<u32>,
    generations: Vec<u32>,
    in_use: Vec<bool>,
}

/// Fixed-capacity arena of recyclable match sessions
pub struct MatchPool {
    slots: Vec<Arc<MatchSession>>,
    state: Mutex<PoolState>,
}

impl MatchPool {
    /// Allocate `capacity` slots up front, each with its own rules-engine
    /// instance produced by `engine_factory`
    pub fn new(
        capacity: usize,
        transport: Arc<dyn Transport>,
        mut engine_factory: impl FnMut() -> Box<dyn RulesEngine>,
    ) -> Arc<Self> {
        Arc::new_cyclic(|pool: &Weak<MatchPool>| {
            let slots = (0..capacity)
                .map(|slot| {
                    Arc::new(MatchSession::new(
                        slot as u32,
                        pool.clone(),
                        transport.clone(),
                        engine_factory(),
                    ))
                })
                .collect();

            MatchPool {
                slots,
                state: Mutex::new(PoolState {
                    free_list: (0..capacity as u32).rev().collect(),
                    generations: vec![0; capacity],
                    in_use: vec![false; capacity],
                }),
            }
        })
    }

    pub fn with_config(
        config: &Config,
        transport: Arc<dyn Transport>,
        engine_factory: impl FnMut() -> Box<dyn RulesEngine>,
    ) -> Arc<Self> {
        Self::new(config.pool_capacity, transport, engine_factory)
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn available(&self) -> usize {
        self.state.lock().free_list.len()
    }

    /// Take a free slot, reset it, and hand out a fresh handle. Returns
    /// `None` when every slot is hosting a match.
    pub fn acquire(&self) -> Option<MatchId> {
        let (index, generation) = {
            let mut state = self.state.lock();
            let index = state.free_list.pop()?;
            state.in_use[index as usize] = true;
            (index, state.generations[index as usize])
        };

        // Reset outside the pool lock; the session lock is ordered before
        // the pool lock on the release path.
        self.slots[index as usize].reset();

        debug!(slot = index, generation, "match slot acquired");
        Some(MatchId { index, generation })
    }

    /// Generation-checked lookup; stale or released handles yield `None`
    pub fn get(&self, id: MatchId) -> Option<Arc<MatchSession>> {
        let state = self.state.lock();
        let index = id.index as usize;
        if *state.generations.get(index)? != id.generation || !state.in_use[index] {
            return None;
        }
        Some(self.slots[index].clone())
    }

    /// Called by a session reaching `Released`: mark the slot free and bump
    /// its generation so outstanding handles go stale
    pub(crate) fn mark_released(&self, index: u32) {
        let mut state = self.state.lock();
        let slot = index as usize;
        if !state.in_use[slot] {
            return;
        }
        state.in_use[slot] = false;
        state.generations[slot] = state.generations[slot].wrapping_add(1);
        state.free_list.push(index);
        debug!(slot = index, "match slot returned to the pool");
    }
}
