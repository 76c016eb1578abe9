//! Partition kernels. Every kernel partitions the whole slice it is given around its last element
//! and returns the final position of that element.

pub mod hoare_vacancy;
pub mod lomuto;

mod randomized;

pub use randomized::{randomize_pivot, Randomized};

/// Kernel used by the crate level entry points.
pub type DefaultPartition = hoare_vacancy::PartitionImpl;
