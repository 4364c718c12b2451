//! Infrastructure adapters for the Book Catalog context.

pub mod in_memory;
