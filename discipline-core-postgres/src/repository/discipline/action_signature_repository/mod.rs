pub mod exists;
pub mod find_by_action;
pub mod record;
pub mod repo_impl;

pub use repo_impl::ActionSignatureRepositoryImpl;
