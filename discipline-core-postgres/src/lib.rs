pub mod postgres_repositories;
pub mod repository;
pub mod utils;

pub use postgres_repositories::{DisciplineRepositories, DisciplineServices, PostgresRepositories};

#[cfg(test)]
pub mod test_helper;
