//! Per-key and per-run outcomes.

/// What happened to one key signature during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Output directory already existed; nothing was loaded or rendered.
    Skipped,
    /// Output directory was created and every chord was dispatched.
    /// `failed` counts renders that reported an error.
    Downloaded { chords: usize, failed: usize },
}

/// Result of one render pool pass over a key's chords.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolReport {
    pub dispatched: usize,
    pub failed: usize,
}

/// Outcomes for every key signature, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub keys: Vec<(String, KeyOutcome)>,
}

impl RunSummary {
    pub fn downloaded_keys(&self) -> usize {
        self.keys
            .iter()
            .filter(|(_, o)| matches!(o, KeyOutcome::Downloaded { .. }))
            .count()
    }

    pub fn skipped_keys(&self) -> usize {
        self.keys
            .iter()
            .filter(|(_, o)| *o == KeyOutcome::Skipped)
            .count()
    }

    /// Total chords dispatched across downloaded keys.
    pub fn dispatched_chords(&self) -> usize {
        self.keys
            .iter()
            .map(|(_, o)| match o {
                KeyOutcome::Downloaded { chords, .. } => *chords,
                KeyOutcome::Skipped => 0,
            })
            .sum()
    }

    pub fn failed_renders(&self) -> usize {
        self.keys
            .iter()
            .map(|(_, o)| match o {
                KeyOutcome::Downloaded { failed, .. } => *failed,
                KeyOutcome::Skipped => 0,
            })
            .sum()
    }
}
