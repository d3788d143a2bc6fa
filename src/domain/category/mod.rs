// src/domain/category/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{Category, CategoryId, CategoryName, NewCategory};
pub use repository::CategoryRepository;
