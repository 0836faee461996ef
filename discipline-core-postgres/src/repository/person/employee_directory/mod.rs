pub mod exist_by_ids;
pub mod repo_impl;

pub use repo_impl::EmployeeDirectoryImpl;
