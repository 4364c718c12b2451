//! The book record sold by the storefront.

use folio_core::error::DomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A purchasable book.
///
/// The cart holds copies of these as value snapshots; two snapshots with the
/// same `id` always refer to the same catalog entry, whatever their other
/// fields say.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Catalog identifier.
    pub id: Uuid,
    /// Title shown to customers.
    pub name: String,
    /// Author line.
    #[serde(default)]
    pub author: String,
    /// Short description.
    pub description: String,
    /// Genre used for browsing.
    pub genre: String,
    /// Unit price.
    pub price: Decimal,
}

impl Book {
    /// Creates a book with empty author, description and genre.
    #[must_use]
    pub fn new(id: Uuid, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            author: String::new(),
            description: String::new(),
            genre: String::new(),
            price,
        }
    }

    /// Checks the fields an administrator must fill in before a book can be
    /// saved.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` listing every offending field.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut problems = Vec::new();
        if self.name.trim().is_empty() {
            problems.push("name is required");
        }
        if self.description.trim().is_empty() {
            problems.push("description is required");
        }
        if self.genre.trim().is_empty() {
            problems.push("genre is required");
        }
        if self.price.is_sign_negative() {
            problems.push("price must not be negative");
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(DomainError::Validation(problems.join("; ")))
        }
    }
}
