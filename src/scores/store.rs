//! Score history storage.

use tracing::{debug, instrument};

use super::record::GameRecord;
use crate::core::{GameKind, Result};

/// Score history collaborator.
///
/// Hosts receive a store by injection; there is no process-wide instance.
pub trait ScoreStore {
    /// Append a finished round.
    fn insert(&mut self, record: GameRecord) -> Result<()>;

    /// Records newest first, optionally limited to one game.
    fn history(&self, filter: Option<GameKind>) -> Result<Vec<GameRecord>>;

    /// Delete every record.
    fn clear_all(&mut self) -> Result<()>;
}

impl<S: ScoreStore + ?Sized> ScoreStore for &mut S {
    fn insert(&mut self, record: GameRecord) -> Result<()> {
        (**self).insert(record)
    }

    fn history(&self, filter: Option<GameKind>) -> Result<Vec<GameRecord>> {
        (**self).history(filter)
    }

    fn clear_all(&mut self) -> Result<()> {
        (**self).clear_all()
    }
}

/// In-memory store with byte snapshots for saving between runs.
///
/// Records with equal timestamps come back most recently inserted first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InMemoryScoreStore {
    /// Insertion order.
    records: Vec<GameRecord>,
}

impl InMemoryScoreStore {
    /// Empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if no records are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Encode all records.
    pub fn snapshot(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(&self.records)?)
    }

    /// Rebuild a store from [`snapshot`](Self::snapshot) bytes.
    ///
    /// Fails if any record pairs a game with the other game's difficulty.
    pub fn restore(bytes: &[u8]) -> Result<Self> {
        let records: Vec<GameRecord> = bincode::deserialize(bytes)?;
        for record in &records {
            record.validate()?;
        }
        debug!(count = records.len(), "restored score history");
        Ok(Self { records })
    }
}

impl ScoreStore for InMemoryScoreStore {
    #[instrument(level = "debug", skip(self))]
    fn insert(&mut self, record: GameRecord) -> Result<()> {
        record.validate()?;
        self.records.push(record);
        Ok(())
    }

    fn history(&self, filter: Option<GameKind>) -> Result<Vec<GameRecord>> {
        let mut out: Vec<GameRecord> = self
            .records
            .iter()
            .rev()
            .filter(|r| filter.map_or(true, |kind| r.game_type == kind))
            .cloned()
            .collect();
        // Stable: ties keep the newest insert first.
        out.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(out)
    }

    #[instrument(level = "debug", skip(self))]
    fn clear_all(&mut self) -> Result<()> {
        self.records.clear();
        Ok(())
    }
}
