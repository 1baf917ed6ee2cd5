//! Session leaderboard
//!
//! Keeps the best 10 finished runs of a session in memory. A run is judged
//! by score, then by the level it got to, then by how few ticks it took.
//! Storing the table anywhere is the host's business; it is serde-ready.

use std::cmp::{Ordering, Reverse};

use serde::{Deserialize, Serialize};

use crate::sim::Snapshot;

/// Runs kept on the board
pub const BOARD_SIZE: usize = 10;

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord {
    pub score: u64,
    /// Level the craft was flying when the run ended
    pub level: u32,
    /// Ticks flown
    pub ticks: u64,
}

impl RunRecord {
    /// Final state of a run, read off its last snapshot
    pub fn from_snapshot(snap: &Snapshot) -> Self {
        Self {
            score: snap.score,
            level: snap.level,
            ticks: snap.tick,
        }
    }

    fn sort_key(&self) -> (Reverse<u64>, Reverse<u32>, u64) {
        (Reverse(self.score), Reverse(self.level), self.ticks)
    }

    /// Board order: better runs compare `Less`
    pub fn board_cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

/// Best runs first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HighScores {
    pub runs: Vec<RunRecord>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// 1-based place `run` would take, `None` if it stays off the board
    ///
    /// Scoreless runs never place. A run equal to one already on the board
    /// goes below it.
    pub fn rank_of(&self, run: &RunRecord) -> Option<usize> {
        if run.score == 0 {
            return None;
        }
        let slot = self
            .runs
            .partition_point(|held| held.board_cmp(run) != Ordering::Greater);
        (slot < BOARD_SIZE).then_some(slot + 1)
    }

    /// Put a finished run on the board, returning its place
    pub fn record(&mut self, run: RunRecord) -> Option<usize> {
        let rank = self.rank_of(&run)?;
        self.runs.insert(rank - 1, run);
        self.runs.truncate(BOARD_SIZE);
        log::debug!(
            "Run of {} (level {}, {} ticks) placed #{rank}",
            run.score,
            run.level,
            run.ticks
        );
        Some(rank)
    }

    pub fn best(&self) -> Option<&RunRecord> {
        self.runs.first()
    }
}
