use {
    crate::config::FeeMarketParams,
    borsh::{BorshDeserialize, BorshSerialize},
    serde::{Deserialize, Serialize},
};

/// Discrete utilization classification that selects the burn rate.
///
/// Classification is stateless: it is re-derived every block purely from the
/// current utilization value, with no memory of the previous tier. The three
/// variants cover all of [0, 10 000] bps, and each boundary belongs to the
/// higher tier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
pub enum BurnTier {
    /// `utilization < util_cool_threshold_bps`
    Cool,
    /// `util_cool_threshold_bps ≤ utilization < util_hot_threshold_bps`
    Normal,
    /// `utilization ≥ util_hot_threshold_bps`
    Hot,
}

impl BurnTier {
    /// Map a utilization value to its tier. Total over the whole bps range.
    pub fn classify(utilization_bps: u32, params: &FeeMarketParams) -> Self {
        if utilization_bps >= params.util_hot_threshold_bps {
            Self::Hot
        } else if utilization_bps >= params.util_cool_threshold_bps {
            Self::Normal
        } else {
            Self::Cool
        }
    }

    /// The burn fraction this tier selects, in bps.
    pub fn burn_bps(self, params: &FeeMarketParams) -> u32 {
        match self {
            Self::Cool => params.burn_cool_bps,
            Self::Normal => params.burn_normal_bps,
            Self::Hot => params.burn_hot_bps,
        }
    }

    /// Human-readable tier name for queries and logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::Cool => "cool",
            Self::Normal => "normal",
            Self::Hot => "hot",
        }
    }
}
