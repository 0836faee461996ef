pub mod create_batch;
pub mod find_effective_between;
pub mod repo_impl;

pub use repo_impl::PointAdjustmentRepositoryImpl;
