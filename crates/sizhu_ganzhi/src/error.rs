//! Error types for sexagenary values.

use thiserror::Error;

/// Errors from constructing or parsing stems, branches, and pillars.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GanzhiError {
    /// Character is not one of the ten heavenly stems.
    #[error("unknown heavenly stem '{0}'")]
    UnknownStem(char),
    /// Character is not one of the twelve earthly branches.
    #[error("unknown earthly branch '{0}'")]
    UnknownBranch(char),
    /// Stem and branch have different yin/yang parity; no such pillar exists.
    #[error("stem {stem} and branch {branch} differ in parity")]
    ParityMismatch { stem: char, branch: char },
    /// Pillar text is not exactly one stem followed by one branch.
    #[error("invalid pillar text '{0}'")]
    InvalidPillarText(String),
}
