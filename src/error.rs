use thiserror::Error;

/// Invalid arguments rejected by the range-checked entry points.
///
/// The partition kernels themselves are total, every error is raised before an element moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    #[error("range [{left}, {right}] is not valid for a sequence of length {len}")]
    InvalidRange { left: usize, right: usize, len: usize },

    #[error("rank {k} is outside of [1, {len}]")]
    InvalidRank { k: usize, len: usize },
}

pub type Result<T> = core::result::Result<T, Error>;
