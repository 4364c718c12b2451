//! Domain layer for the Book Catalog context.

pub mod book;
pub mod commands;
pub mod repository;
