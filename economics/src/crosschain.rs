//! Per-chain burn / reward accumulators.
//!
//! The transport that delivers remote reports (at-least-once, possibly
//! duplicated) is out of scope; this module is the boundary where reports
//! land. Application is idempotent: each chain's reports carry a
//! monotonically increasing sequence number, a replayed sequence is skipped,
//! and a gap is rejected.

use {
    crate::error::EconomicsError,
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
    std::collections::BTreeMap,
    vela_tokenomics::SupplyState,
};

/// Version byte written at the start of the persisted accumulator record.
pub const CHAIN_ACCUMULATORS_VERSION: u8 = 1;

/// Lifetime totals for one chain. Append-only: both counters are
/// monotonically non-decreasing.
#[derive(
    Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct ChainAccumulator {
    /// Total base units burned on this chain.
    pub total_burned: u128,
    /// Total reward base units received on this chain.
    pub total_rewards_received: u128,
    /// Next inbound report sequence expected from this chain.
    pub next_inbound_sequence: u64,
}

/// An inbound report of a remote chain's burn / reward activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct ChainReport {
    pub chain_id: String,
    /// Per-chain sequence number, starting at 0.
    pub sequence: u64,
    /// Base units burned since the previous report.
    pub burned: u64,
    /// Reward base units received since the previous report.
    pub rewards_received: u64,
}

/// Outcome of applying an inbound report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportOutcome {
    /// The report advanced the accumulator.
    Applied,
    /// The report was a redelivery of an already-applied sequence.
    Duplicate,
}

/// The per-chain accumulator map, owned exclusively by the engine.
///
/// `BTreeMap` keeps iteration deterministic — this state is part of
/// consensus and must serialize identically on every validator.
#[derive(
    Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub struct ChainAccumulators {
    entries: BTreeMap<String, ChainAccumulator>,
}

impl ChainAccumulators {
    /// Look up one chain's totals.
    pub fn get(&self, chain_id: &str) -> Option<&ChainAccumulator> {
        self.entries.get(chain_id)
    }

    /// Iterate all chains in deterministic (lexicographic) order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &ChainAccumulator)> {
        self.entries.iter()
    }

    /// Fold a local burn into the local chain's entry.
    pub fn record_local_burn(&mut self, chain_id: &str, amount: u64) -> Result<(), EconomicsError> {
        let entry = self.entries.entry(chain_id.to_string()).or_default();
        entry.total_burned = entry
            .total_burned
            .checked_add(amount as u128)
            .ok_or(EconomicsError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Fold locally minted rewards into the local chain's entry.
    pub fn record_local_rewards(
        &mut self,
        chain_id: &str,
        amount: u64,
    ) -> Result<(), EconomicsError> {
        let entry = self.entries.entry(chain_id.to_string()).or_default();
        entry.total_rewards_received = entry
            .total_rewards_received
            .checked_add(amount as u128)
            .ok_or(EconomicsError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Apply an inbound remote report, idempotently.
    ///
    /// A sequence below the chain's next expected one is a redelivery and is
    /// skipped; a sequence above it means the transport lost a report, which
    /// at-least-once delivery rules out — so it is rejected loudly.
    pub fn apply_report(&mut self, report: &ChainReport) -> Result<ReportOutcome, EconomicsError> {
        let entry = self.entries.entry(report.chain_id.clone()).or_default();
        if report.sequence < entry.next_inbound_sequence {
            return Ok(ReportOutcome::Duplicate);
        }
        if report.sequence > entry.next_inbound_sequence {
            return Err(EconomicsError::OutOfOrderReport {
                chain_id: report.chain_id.clone(),
                expected: entry.next_inbound_sequence,
                got: report.sequence,
            });
        }
        let burned = entry
            .total_burned
            .checked_add(report.burned as u128)
            .ok_or(EconomicsError::ArithmeticOverflow)?;
        let rewards = entry
            .total_rewards_received
            .checked_add(report.rewards_received as u128)
            .ok_or(EconomicsError::ArithmeticOverflow)?;
        entry.total_burned = burned;
        entry.total_rewards_received = rewards;
        entry.next_inbound_sequence = report.sequence.saturating_add(1);
        Ok(ReportOutcome::Applied)
    }

    /// Check the local chain's entry against the global supply ledger: the
    /// per-chain totals must never exceed what the ledger has seen.
    pub fn reconciles_with(&self, local_chain_id: &str, supply: &SupplyState) -> bool {
        match self.entries.get(local_chain_id) {
            None => true,
            Some(entry) => {
                entry.total_burned <= supply.total_burned
                    && entry.total_rewards_received <= supply.total_minted
            }
        }
    }

    /// Deserialise from raw record data (expects the leading version byte).
    pub fn deserialize(data: &[u8]) -> Result<Self, std::io::Error> {
        if data.is_empty() || data[0] != CHAIN_ACCUMULATORS_VERSION {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                "missing or unsupported chain accumulators version",
            ));
        }
        let mut cursor = &data[1..];
        BorshDeserialize::deserialize_reader(&mut cursor)
    }

    /// Serialise into a fresh versioned record.
    pub fn to_record_bytes(&self) -> Result<Vec<u8>, std::io::Error> {
        let mut data = vec![CHAIN_ACCUMULATORS_VERSION];
        BorshSerialize::serialize(self, &mut data)?;
        Ok(data)
    }
}
