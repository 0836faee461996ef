pub mod create_batch;
pub mod count_by_category;
pub mod find_by_employee;
pub mod find_countable_since;
pub mod repo_impl;
pub mod set_adjusted_points;
pub mod void;

pub use repo_impl::CorrectiveActionRepositoryImpl;
