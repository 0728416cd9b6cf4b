//! Playback ordering
//!
//! A strategy is bound to one playlist at a time and hands out songs one by
//! one in either direction. The set of orderings is closed, so the strategy
//! is an enum and calls dispatch with `match`.

mod random;
mod sequential;

pub use random::RandomStrategy;
pub use sequential::SequentialStrategy;

use crate::error::Result;
use crate::model::{SharedPlaylist, SongRef};
use serde::{Deserialize, Serialize};

/// Which ordering to play a playlist in
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// Front to back, following live playlist edits
    #[default]
    Sequential,

    /// Shuffled snapshot with undo history
    Random,
}

impl StrategyKind {
    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::Sequential => "sequential",
            StrategyKind::Random => "random",
        }
    }
}

/// Active play-order state
#[derive(Debug)]
pub enum PlayStrategy {
    Sequential(SequentialStrategy),
    Random(RandomStrategy),
}

impl PlayStrategy {
    /// Create an unbound strategy. `seed` only affects `Random`.
    pub fn new(kind: StrategyKind, seed: Option<u64>) -> Self {
        match kind {
            StrategyKind::Sequential => PlayStrategy::Sequential(SequentialStrategy::new()),
            StrategyKind::Random => PlayStrategy::Random(RandomStrategy::new(seed)),
        }
    }

    pub fn kind(&self) -> StrategyKind {
        match self {
            PlayStrategy::Sequential(_) => StrategyKind::Sequential,
            PlayStrategy::Random(_) => StrategyKind::Random,
        }
    }

    /// Bind a playlist, discarding any previous position or history
    pub fn set_playlist(&mut self, playlist: &SharedPlaylist) {
        match self {
            PlayStrategy::Sequential(s) => s.set_playlist(playlist),
            PlayStrategy::Random(s) => s.set_playlist(playlist),
        }
    }

    pub fn unbind(&mut self) {
        match self {
            PlayStrategy::Sequential(s) => s.unbind(),
            PlayStrategy::Random(s) => s.unbind(),
        }
    }

    pub fn is_bound(&self) -> bool {
        match self {
            PlayStrategy::Sequential(s) => s.is_bound(),
            PlayStrategy::Random(s) => s.is_bound(),
        }
    }

    pub fn has_next(&self) -> bool {
        match self {
            PlayStrategy::Sequential(s) => s.has_next(),
            PlayStrategy::Random(s) => s.has_next(),
        }
    }

    pub fn next(&mut self) -> Result<SongRef> {
        match self {
            PlayStrategy::Sequential(s) => s.next(),
            PlayStrategy::Random(s) => s.next(),
        }
    }

    pub fn has_previous(&self) -> bool {
        match self {
            PlayStrategy::Sequential(s) => s.has_previous(),
            PlayStrategy::Random(s) => s.has_previous(),
        }
    }

    pub fn previous(&mut self) -> Result<SongRef> {
        match self {
            PlayStrategy::Sequential(s) => s.previous(),
            PlayStrategy::Random(s) => s.previous(),
        }
    }
}

impl Default for PlayStrategy {
    fn default() -> Self {
        Self::new(StrategyKind::default(), None)
    }
}
