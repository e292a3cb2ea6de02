//! Renting and returning books.

use crate::application::services::catalog_service::resolve_book;
use crate::domain::entities::{Book, NewRental, Rental, RentalStatus};
use crate::domain::repositories::{BookRepository, RentalRepository};
use crate::error::AppError;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

/// A rental joined with the book it refers to.
#[derive(Debug, Clone)]
pub struct RentalWithBook {
    pub rental: Rental,
    pub book: Book,
}

/// Service orchestrating rent and return operations.
///
/// Resolves book references through the catalog before handing the atomic
/// copy bookkeeping to the [`RentalRepository`].
pub struct RentalService<B: BookRepository, R: RentalRepository> {
    book_repository: Arc<B>,
    rental_repository: Arc<R>,
}

impl<B: BookRepository, R: RentalRepository> RentalService<B, R> {
    /// Creates a new rental service.
    pub fn new(book_repository: Arc<B>, rental_repository: Arc<R>) -> Self {
        Self {
            book_repository,
            rental_repository,
        }
    }

    /// Rents a copy of a book for a user.
    ///
    /// `book_key` is resolved like [`crate::application::services::CatalogService::get_book`]:
    /// id first, then title.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the book is unknown.
    /// Returns [`AppError::Conflict`] if no copy is free or the user already
    /// holds this book.
    pub async fn rent_book(&self, book_key: &str, user_id: &str) -> Result<RentalWithBook, AppError> {
        let book = resolve_book(self.book_repository.as_ref(), book_key).await?;

        let new_rental = NewRental {
            book_id: book.id,
            user_id: user_id.to_string(),
        };

        match self.rental_repository.create(new_rental).await {
            Ok((rental, book)) => {
                tracing::info!(
                    rental_id = %rental.id,
                    book_id = %book.id,
                    user_id,
                    available_copies = book.available_copies,
                    "Book rented"
                );
                Ok(RentalWithBook { rental, book })
            }
            Err(err) => {
                tracing::info!(book_key, user_id, error = %err, "Rent rejected");
                Err(err)
            }
        }
    }

    /// Returns a rented book.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the rental is unknown.
    /// Returns [`AppError::Forbidden`] if it belongs to another user.
    /// Returns [`AppError::Conflict`] if it was already returned.
    pub async fn return_book(
        &self,
        rental_id: Uuid,
        user_id: &str,
    ) -> Result<RentalWithBook, AppError> {
        match self.rental_repository.mark_returned(rental_id, user_id).await {
            Ok((rental, book)) => {
                tracing::info!(
                    rental_id = %rental.id,
                    book_id = %book.id,
                    user_id,
                    available_copies = book.available_copies,
                    "Book returned"
                );
                Ok(RentalWithBook { rental, book })
            }
            Err(err) => {
                tracing::info!(rental_id = %rental_id, user_id, error = %err, "Return rejected");
                Err(err)
            }
        }
    }

    /// Lists a user's rentals, newest first, each joined with its book.
    ///
    /// An unknown user simply has no rentals.
    pub async fn list_user_rentals(
        &self,
        user_id: &str,
        status: Option<RentalStatus>,
    ) -> Result<Vec<RentalWithBook>, AppError> {
        let rentals = self.rental_repository.list_by_user(user_id, status).await?;

        let mut books: HashMap<String, Book> = HashMap::new();
        let mut items = Vec::with_capacity(rentals.len());

        for rental in rentals {
            let book = match books.get(&rental.book_id) {
                Some(book) => book.clone(),
                None => {
                    let Some(book) = self.book_repository.find_by_id(&rental.book_id).await? else {
                        tracing::warn!(
                            rental_id = %rental.id,
                            book_id = %rental.book_id,
                            "Rental references a book missing from the catalog"
                        );
                        continue;
                    };
                    books.insert(book.id.clone(), book.clone());
                    book
                }
            };

            items.push(RentalWithBook { rental, book });
        }

        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockBookRepository, MockRentalRepository};
    use chrono::Utc;
    use serde_json::json;

    fn dune() -> Book {
        Book::new("9780441013593", "Dune", "Frank Herbert", 1)
    }

    fn rented(book: &Book, user_id: &str) -> Rental {
        Rental::start(
            NewRental {
                book_id: book.id.clone(),
                user_id: user_id.to_string(),
            },
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn test_rent_book_by_title() {
        let mut books = MockBookRepository::new();
        books.expect_find_by_id().returning(|_| Ok(None));
        books
            .expect_find_by_title()
            .withf(|title| title == "Dune")
            .returning(|_| Ok(Some(dune())));

        let mut rentals = MockRentalRepository::new();
        rentals
            .expect_create()
            .withf(|new| new.book_id == "9780441013593" && new.user_id == "alice")
            .times(1)
            .returning(|new| {
                let mut book = dune();
                book.checkout_copy();
                Ok((Rental::start(new, Utc::now()), book))
            });

        let service = RentalService::new(Arc::new(books), Arc::new(rentals));
        let result = service.rent_book("Dune", "alice").await.unwrap();

        assert_eq!(result.rental.user_id, "alice");
        assert!(!result.book.is_available());
    }

    #[tokio::test]
    async fn test_rent_unknown_book_never_touches_rentals() {
        let mut books = MockBookRepository::new();
        books.expect_find_by_id().returning(|_| Ok(None));
        books.expect_find_by_title().returning(|_| Ok(None));

        let mut rentals = MockRentalRepository::new();
        rentals.expect_create().never();

        let service = RentalService::new(Arc::new(books), Arc::new(rentals));
        let result = service.rent_book("Missing", "alice").await;

        assert!(matches!(result, Err(AppError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_rent_conflict_is_propagated() {
        let mut books = MockBookRepository::new();
        books.expect_find_by_id().returning(|_| Ok(Some(dune())));

        let mut rentals = MockRentalRepository::new();
        rentals
            .expect_create()
            .returning(|_| Err(AppError::conflict("No copies", json!({}))));

        let service = RentalService::new(Arc::new(books), Arc::new(rentals));
        let result = service.rent_book("9780441013593", "bob").await;

        assert!(matches!(result, Err(AppError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_return_book() {
        let books = MockBookRepository::new();
        let mut rentals = MockRentalRepository::new();
        rentals
            .expect_mark_returned()
            .withf(|_, user| user == "alice")
            .times(1)
            .returning(|_, user| {
                let book = dune();
                let mut rental = rented(&book, user);
                rental.mark_returned(Utc::now());
                Ok((rental, book))
            });

        let service = RentalService::new(Arc::new(books), Arc::new(rentals));
        let result = service.return_book(Uuid::new_v4(), "alice").await.unwrap();

        assert_eq!(result.rental.status(), RentalStatus::Returned);
        assert!(result.book.is_available());
    }

    #[tokio::test]
    async fn test_return_forbidden_is_propagated() {
        let books = MockBookRepository::new();
        let mut rentals = MockRentalRepository::new();
        rentals
            .expect_mark_returned()
            .returning(|_, _| Err(AppError::forbidden("Not yours", json!({}))));

        let service = RentalService::new(Arc::new(books), Arc::new(rentals));
        let result = service.return_book(Uuid::new_v4(), "mallory").await;

        assert!(matches!(result, Err(AppError::Forbidden { .. })));
    }

    #[tokio::test]
    async fn test_list_user_rentals_joins_books_once() {
        let mut books = MockBookRepository::new();
        books
            .expect_find_by_id()
            .withf(|id| id == "9780441013593")
            .times(1)
            .returning(|_| Ok(Some(dune())));

        let mut rentals = MockRentalRepository::new();
        rentals
            .expect_list_by_user()
            .withf(|user, status| user == "alice" && status.is_none())
            .returning(|user, _| {
                let book = dune();
                let mut old = rented(&book, user);
                old.mark_returned(Utc::now());
                Ok(vec![rented(&book, user), old])
            });

        let service = RentalService::new(Arc::new(books), Arc::new(rentals));
        let items = service.list_user_rentals("alice", None).await.unwrap();

        assert_eq!(items.len(), 2);
        assert!(items.iter().all(|item| item.book.title == "Dune"));
    }

    #[tokio::test]
    async fn test_list_user_rentals_empty() {
        let books = MockBookRepository::new();
        let mut rentals = MockRentalRepository::new();
        rentals.expect_list_by_user().returning(|_, _| Ok(vec![]));

        let service = RentalService::new(Arc::new(books), Arc::new(rentals));

        assert!(service.list_user_rentals("nobody", None).await.unwrap().is_empty());
    }
}
