//! In-memory implementation of the book and rental repositories.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::{Book, NewRental, Rental, RentalStatus};
use crate::domain::repositories::{BookFilter, BookRepository, RentalRepository};
use crate::error::AppError;

#[derive(Debug, Default)]
struct LibraryState {
    /// Keyed by book id, so iteration is in id order.
    books: BTreeMap<String, Book>,
    /// Insertion order is rental order.
    rentals: Vec<Rental>,
    rental_index: HashMap<Uuid, usize>,
}

impl LibraryState {
    fn has_active_rental(&self, book_id: &str, user_id: &str) -> bool {
        self.rentals
            .iter()
            .any(|r| r.is_active() && r.book_id == book_id && r.user_id == user_id)
    }
}

/// Owned store holding every book and rental behind a single lock.
///
/// Reads share the lock; renting and returning take it exclusively, which keeps
/// the copy counters and the rental records consistent under concurrent
/// requests. Each instance is independent, so tests get isolated state by
/// building their own.
#[derive(Debug, Default)]
pub struct InMemoryLibrary {
    state: RwLock<LibraryState>,
}

impl InMemoryLibrary {
    /// Creates a store seeded with the given books.
    ///
    /// Books are expected to have unique ids; a later duplicate replaces an
    /// earlier one. Use [`crate::infrastructure::catalog`] to load a validated
    /// seed.
    pub fn new(books: impl IntoIterator<Item = Book>) -> Self {
        let books = books
            .into_iter()
            .map(|book| (book.id.clone(), book))
            .collect();

        Self {
            state: RwLock::new(LibraryState {
                books,
                ..LibraryState::default()
            }),
        }
    }
}

#[async_trait]
impl BookRepository for InMemoryLibrary {
    async fn list(&self, filter: BookFilter) -> Result<Vec<Book>, AppError> {
        let state = self.state.read().await;

        let mut books: Vec<Book> = state
            .books
            .values()
            .filter(|book| filter.matches(book))
            .cloned()
            .collect();

        books.sort_by(|a, b| {
            a.title
                .to_lowercase()
                .cmp(&b.title.to_lowercase())
                .then_with(|| a.id.cmp(&b.id))
        });

        Ok(books)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Book>, AppError> {
        Ok(self.state.read().await.books.get(id).cloned())
    }

    async fn find_by_title(&self, title: &str) -> Result<Option<Book>, AppError> {
        let state = self.state.read().await;
        let needle = title.to_lowercase();

        Ok(state
            .books
            .values()
            .find(|book| book.title.to_lowercase() == needle)
            .cloned())
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.state.read().await.books.len())
    }
}

#[async_trait]
impl RentalRepository for InMemoryLibrary {
    async fn create(&self, new_rental: NewRental) -> Result<(Rental, Book), AppError> {
        let mut guard = self.state.write().await;
        let state = &mut *guard;

        if !state.books.contains_key(&new_rental.book_id) {
            return Err(AppError::not_found(
                "Book not found",
                json!({ "book_id": new_rental.book_id }),
            ));
        }

        if state.has_active_rental(&new_rental.book_id, &new_rental.user_id) {
            return Err(AppError::conflict(
                "Book already rented by this user",
                json!({ "book_id": new_rental.book_id, "user_id": new_rental.user_id }),
            ));
        }

        let book = state
            .books
            .get_mut(&new_rental.book_id)
            .ok_or_else(|| AppError::internal("Book disappeared from catalog", json!({})))?;

        if !book.checkout_copy() {
            return Err(AppError::conflict(
                "There are no copies of this book available for rent",
                json!({ "book_id": book.id, "total_copies": book.total_copies }),
            ));
        }
        let book = book.clone();

        let rental = Rental::start(new_rental, Utc::now());
        state.rental_index.insert(rental.id, state.rentals.len());
        state.rentals.push(rental.clone());

        Ok((rental, book))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Rental>, AppError> {
        let state = self.state.read().await;

        Ok(state
            .rental_index
            .get(&id)
            .and_then(|&idx| state.rentals.get(idx))
            .cloned())
    }

    async fn mark_returned(&self, id: Uuid, user_id: &str) -> Result<(Rental, Book), AppError> {
        let mut guard = self.state.write().await;
        let state = &mut *guard;

        let rental = state
            .rental_index
            .get(&id)
            .and_then(|&idx| state.rentals.get_mut(idx))
            .ok_or_else(|| AppError::not_found("Rental not found", json!({ "rental_id": id })))?;

        if !rental.is_owned_by(user_id) {
            return Err(AppError::forbidden(
                "This rental belongs to another user",
                json!({ "rental_id": id }),
            ));
        }

        if !rental.is_active() {
            return Err(AppError::conflict(
                "Book already returned",
                json!({ "rental_id": id, "returned_at": rental.returned_at }),
            ));
        }

        let book = state.books.get_mut(&rental.book_id).ok_or_else(|| {
            AppError::internal(
                "Rental references a missing book",
                json!({ "rental_id": id, "book_id": rental.book_id }),
            )
        })?;

        if !book.checkin_copy() {
            return Err(AppError::internal(
                "Copy counter out of sync",
                json!({ "book_id": book.id, "available_copies": book.available_copies }),
            ));
        }

        rental.mark_returned(Utc::now());

        Ok((rental.clone(), book.clone()))
    }

    async fn list_by_user(
        &self,
        user_id: &str,
        status: Option<RentalStatus>,
    ) -> Result<Vec<Rental>, AppError> {
        let state = self.state.read().await;

        Ok(state
            .rentals
            .iter()
            .rev()
            .filter(|r| r.user_id == user_id)
            .filter(|r| status.is_none_or(|s| r.status() == s))
            .cloned()
            .collect())
    }
}
