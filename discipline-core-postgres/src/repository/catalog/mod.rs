pub mod violation_category_repository;

pub use violation_category_repository::ViolationCategoryRepositoryImpl;
