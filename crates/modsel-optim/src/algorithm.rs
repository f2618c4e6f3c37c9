//! Names of the available coordinate descent algorithms.

use modsel_core::error::{OptimizerError, OptimizerResult};
use std::fmt;
use std::str::FromStr;

/// Algorithm entry points of [`ModselFunction`](crate::ModselFunction).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Sequential coordinate descent tracking the objective
    Cda,
    /// Sequential coordinate descent that never evaluates the objective
    CdaUntracked,
    /// Block (Jacobi) coordinate descent
    BlockCda,
    /// Sequential coordinate descent with Newton steps and step halving
    CdaNewton,
    /// Block coordinate descent with joint Newton steps and step halving
    BlockCdaNewton,
}

impl Algorithm {
    /// All algorithms, in declaration order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Cda,
        Algorithm::CdaUntracked,
        Algorithm::BlockCda,
        Algorithm::CdaNewton,
        Algorithm::BlockCdaNewton,
    ];

    /// Short name used in messages and for parsing.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Cda => "cda",
            Algorithm::CdaUntracked => "cda-untracked",
            Algorithm::BlockCda => "blockcda",
            Algorithm::CdaNewton => "cdanewton",
            Algorithm::BlockCdaNewton => "blockcdanewton",
        }
    }

    /// Whether the algorithm evaluates the objective.
    pub fn tracks_objective(self) -> bool {
        !matches!(self, Algorithm::CdaUntracked)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = OptimizerError;

    fn from_str(s: &str) -> OptimizerResult<Self> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                OptimizerError::invalid_configuration("unknown algorithm", "algorithm", s)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.name().parse::<Algorithm>().unwrap(), algorithm);
        }
        assert_eq!(" BlockCDA ".parse::<Algorithm>().unwrap(), Algorithm::BlockCda);
        assert!("gradient-descent".parse::<Algorithm>().is_err());
    }

    #[test]
    fn test_requirements() {
        assert!(!Algorithm::CdaUntracked.tracks_objective());
        assert!(Algorithm::BlockCda.tracks_objective());
        assert!(Algorithm::BlockCdaNewton.tracks_objective());
    }
}
