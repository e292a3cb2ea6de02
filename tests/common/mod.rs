#![allow(dead_code)]

use axum_test::TestServer;
use book_rental::domain::entities::Book;
use book_rental::infrastructure::persistence::InMemoryLibrary;
use book_rental::routes::{RouterOptions, router};
use book_rental::state::AppState;
use serde_json::Value;
use std::sync::Arc;

pub const DUNE_ID: &str = "9780441013593";
pub const EMMA_ID: &str = "9780141439587";
pub const LEFT_HAND_ID: &str = "9780441478125";

/// Seed catalog shared by the HTTP tests.
pub fn test_books() -> Vec<Book> {
    vec![
        Book::new(DUNE_ID, "Dune", "Frank Herbert", 1).with_published_year(1965),
        Book::new(EMMA_ID, "Emma", "Jane Austen", 2),
        Book::new(LEFT_HAND_ID, "The Left Hand of Darkness", "Ursula K. Le Guin", 1)
            .with_description("Gethen in winter."),
    ]
}

pub fn create_test_state(books: Vec<Book>) -> (AppState, Arc<InMemoryLibrary>) {
    let library = Arc::new(InMemoryLibrary::new(books));
    (AppState::new(library.clone()), library)
}

/// Full `/v1` router over a fresh store, without rate limiting.
pub fn make_server() -> TestServer {
    make_server_with(test_books())
}

pub fn make_server_with(books: Vec<Book>) -> TestServer {
    let (state, _) = create_test_state(books);
    let app = router(state, RouterOptions::default()).unwrap();
    TestServer::new(app).unwrap()
}

/// Rents `book` for `user` and returns the response body, asserting 200.
pub async fn rent(server: &TestServer, book: &str, user: &str) -> Value {
    let response = server
        .post(&format!("/v1/books/{book}/rent"))
        .add_query_param("user_id", user)
        .await;

    response.assert_status_ok();
    response.json::<Value>()
}

/// Returns `rental_id` for `user` and returns the response body, asserting 200.
pub async fn return_rental(server: &TestServer, rental_id: &str, user: &str) -> Value {
    let response = server
        .post(&format!("/v1/rentals/{rental_id}/return"))
        .add_query_param("user_id", user)
        .await;

    response.assert_status_ok();
    response.json::<Value>()
}
