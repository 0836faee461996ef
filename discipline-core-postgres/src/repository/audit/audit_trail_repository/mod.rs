pub mod append;
pub mod find_by_entity;
pub mod repo_impl;

pub use repo_impl::AuditTrailRepositoryImpl;
