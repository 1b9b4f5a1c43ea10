//! In-memory snapshot of every store table

use serde::{Deserialize, Serialize};

use super::{
    Advance, Contractor, Harvest, MarketSettings, RainEvent, UserProfile, WorkTask, Worker,
};
use crate::ledger::{self, RosterRow};
use crate::types::WorkerId;

/// One materialization of the hosted store, as fetched together.
///
/// The ledger reads from it and never mutates it; a refresh builds a new one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LedgerSnapshot {
    #[serde(default)]
    pub workers: Vec<Worker>,
    #[serde(default)]
    pub contractors: Vec<Contractor>,
    #[serde(default)]
    pub harvests: Vec<Harvest>,
    #[serde(default)]
    pub tasks: Vec<WorkTask>,
    #[serde(default)]
    pub advances: Vec<Advance>,
    #[serde(default)]
    pub rain_events: Vec<RainEvent>,
    #[serde(default)]
    pub settings: MarketSettings,
    #[serde(default)]
    pub profiles: Vec<UserProfile>,
}

impl LedgerSnapshot {
    pub fn worker(&self, id: WorkerId) -> Option<&Worker> {
        self.workers.iter().find(|w| w.id == id)
    }

    /// Workers offered by harvest and task entry forms
    pub fn active_workers(&self) -> impl Iterator<Item = &Worker> {
        self.workers.iter().filter(|w| w.accepts_new_entries())
    }

    /// Per-worker balances for the whole roster
    pub fn roster_report(&self) -> Vec<RosterRow<'_>> {
        ledger::roster_report(&self.workers, &self.harvests, &self.tasks, &self.advances)
    }
}
