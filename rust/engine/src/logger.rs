use serde::{Deserialize, Serialize};

use crate::engine::RoundSummary;
use crate::events::{PileView, RoundEnd, Tally};

/// One finished round as written to the history file.
/// Serialized to JSONL, one record per line.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Identifier for this round (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    /// Seed the game's deck was shuffled with
    pub seed: Option<u64>,
    /// 1-based round number within the game
    pub round: u32,
    /// Name of the round winner
    pub winner: String,
    /// How the round ended
    pub reason: RoundEnd,
    /// Used piles when the round ended
    pub piles: Vec<PileView>,
    /// Block counts after the round
    pub tallies: Vec<Tally>,
    /// Timestamp when the round ended (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl RoundRecord {
    pub fn from_summary(round_id: String, seed: Option<u64>, summary: &RoundSummary) -> Self {
        Self {
            round_id,
            seed,
            round: summary.round,
            winner: summary.winner_name.clone(),
            reason: summary.reason,
            piles: summary.piles.clone(),
            tallies: summary.tallies.clone(),
            ts: None,
        }
    }
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }

    /// Assigns the next id and writes the summary.
    pub fn log_round(&mut self, seed: Option<u64>, summary: &RoundSummary) -> std::io::Result<()> {
        let id = self.next_id();
        self.write(&RoundRecord::from_summary(id, seed, summary))
    }
}

impl std::fmt::Debug for RoundLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RoundLogger")
            .field("date", &self.date)
            .field("seq", &self.seq)
            .finish()
    }
}
