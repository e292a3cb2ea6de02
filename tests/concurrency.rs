mod common;

use book_rental::domain::repositories::{BookRepository, RentalRepository};
use std::sync::Arc;

/// Races many rent requests for a single-copy book through the services.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_rents_yield_one_rental() {
    let (state, library) = common::create_test_state(common::test_books());
    let state = Arc::new(state);

    let handles: Vec<_> = (0..32)
        .map(|i| {
            let state = state.clone();
            tokio::spawn(async move {
                state
                    .rental_service
                    .rent_book("Dune", &format!("reader-{i}"))
                    .await
            })
        })
        .collect();

    let mut successes = 0;
    for handle in handles {
        if handle.await.unwrap().is_ok() {
            successes += 1;
        }
    }

    assert_eq!(successes, 1);

    let mut recorded = 0;
    for i in 0..32 {
        recorded += library
            .list_by_user(&format!("reader-{i}"), None)
            .await
            .unwrap()
            .len();
    }
    assert_eq!(recorded, 1);

    let dune = BookRepository::find_by_id(library.as_ref(), common::DUNE_ID)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(dune.available_copies, 0);
}
