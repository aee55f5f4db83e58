//! Candidate extraction strategies.
//!
//! Every strategy is a stateless transform `(&[f64], &StrategyParams) ->
//! Extrema`. Indices always refer to positions in the raw input. Strategies
//! ignore the parameter fields they have no use for.
//!
//! - [`simple`] – immediate-neighbour comparison with a tolerance.
//! - [`window`] – the point must dominate a symmetric window.
//! - [`slope`] – sign changes of the first difference.
//! - [`alternating`] – 5-point strict extrema walked into a max/min alternation.
//! - [`neighborhood`] – 7-point strict extrema with a minimum ceiling; backs
//!   both the `enhanced` and the `strict` strategy.
//!
//! The last three belong to the "alternating family": read in index order,
//! their output never contains two consecutive extrema of the same kind.

pub mod alternating;
pub mod neighborhood;
pub mod simple;
pub mod slope;
pub mod window;

pub use neighborhood::{MinCeiling, NeighborhoodRules};

use crate::types::Extrema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Parameters shared by all strategies.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyParams {
    /// Comparison tolerance / minimum value change.
    pub threshold: f64,
    /// Half-width of the dominance window (`window` strategy only).
    pub window_size: usize,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            threshold: 1e-4,
            window_size: 3,
        }
    }
}

/// One of the six concrete detection algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Simple,
    Window,
    Slope,
    Alternating,
    Enhanced,
    Strict,
}

impl Strategy {
    pub const ALL: [Strategy; 6] = [
        Strategy::Simple,
        Strategy::Window,
        Strategy::Slope,
        Strategy::Alternating,
        Strategy::Enhanced,
        Strategy::Strict,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Simple => "simple",
            Strategy::Window => "window",
            Strategy::Slope => "slope",
            Strategy::Alternating => "alternating",
            Strategy::Enhanced => "enhanced",
            Strategy::Strict => "strict",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }

    /// Strategies whose output alternates max/min by construction.
    pub fn is_alternating_family(self) -> bool {
        matches!(
            self,
            Strategy::Alternating | Strategy::Enhanced | Strategy::Strict
        )
    }

    /// Run the strategy on `seq`.
    pub fn detect(self, seq: &[f64], params: &StrategyParams) -> Extrema {
        match self {
            Strategy::Simple => simple::detect(seq, params.threshold),
            Strategy::Window => window::detect(seq, params.window_size),
            Strategy::Slope => slope::detect(seq, params.threshold),
            Strategy::Alternating => alternating::detect(seq, params.threshold),
            Strategy::Enhanced => {
                neighborhood::detect(seq, params.threshold, &NeighborhoodRules::ENHANCED)
            }
            Strategy::Strict => {
                neighborhood::detect(seq, params.threshold, &NeighborhoodRules::STRICT)
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_case_insensitively() {
        for s in Strategy::ALL {
            assert_eq!(Strategy::from_name(&s.name().to_uppercase()), Some(s));
        }
        assert_eq!(Strategy::from_name("improved_window"), None);
    }

    #[test]
    fn alternating_family_membership() {
        let family: Vec<_> = Strategy::ALL
            .into_iter()
            .filter(|s| s.is_alternating_family())
            .collect();
        assert_eq!(
            family,
            vec![Strategy::Alternating, Strategy::Enhanced, Strategy::Strict]
        );
    }

    #[test]
    fn short_sequences_yield_nothing_for_every_strategy() {
        let params = StrategyParams::default();
        for s in Strategy::ALL {
            for seq in [&[][..], &[1.0][..], &[1.0, 2.0][..]] {
                assert!(s.detect(seq, &params).is_empty(), "{s} on {seq:?}");
            }
        }
    }
}
