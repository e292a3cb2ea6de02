//! Book entity representing a rentable catalog title.

use serde::{Deserialize, Serialize};

/// Availability status of a book, derived from its free copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookStatus {
    Available,
    Rented,
}

/// A book in the catalog.
///
/// `id` is the catalog identifier (the ISBN in the shipped catalog). A book has
/// `total_copies` rentable copies; every active rental holds exactly one of
/// them, so `total_copies - available_copies` is the number of active rentals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub published_year: Option<i32>,
    pub description: Option<String>,
    pub total_copies: u32,
    pub available_copies: u32,
}

impl Book {
    /// Creates a book with every copy available.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        total_copies: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            published_year: None,
            description: None,
            total_copies,
            available_copies: total_copies,
        }
    }

    pub fn with_published_year(mut self, year: i32) -> Self {
        self.published_year = Some(year);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns `Available` while at least one copy is on the shelf.
    pub fn status(&self) -> BookStatus {
        if self.available_copies > 0 {
            BookStatus::Available
        } else {
            BookStatus::Rented
        }
    }

    pub fn is_available(&self) -> bool {
        self.status() == BookStatus::Available
    }

    /// Number of copies currently held by active rentals.
    pub fn rented_copies(&self) -> u32 {
        self.total_copies.saturating_sub(self.available_copies)
    }

    /// Takes one copy off the shelf. Returns `false` when none is left.
    pub fn checkout_copy(&mut self) -> bool {
        if self.available_copies == 0 {
            return false;
        }
        self.available_copies -= 1;
        true
    }

    /// Puts one copy back. Returns `false` if every copy is already on the shelf.
    pub fn checkin_copy(&mut self) -> bool {
        if self.available_copies >= self.total_copies {
            return false;
        }
        self.available_copies += 1;
        true
    }
}
