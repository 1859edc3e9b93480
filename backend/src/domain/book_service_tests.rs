//! Tests for the catalogue services.

use std::sync::Arc;

use rstest::{fixture, rstest};

use super::*;
use crate::domain::ports::MockBookRepository;
use crate::domain::{Book, BookDetails, ErrorCode};
use crate::outbound::memory::InMemoryBookRepository;

fn details(name: &str) -> BookDetails {
    BookDetails::new(name, "A", None, 1, 2000)
}

#[fixture]
fn store() -> Arc<InMemoryBookRepository> {
    Arc::new(InMemoryBookRepository::new())
}

#[rstest]
#[tokio::test]
async fn create_rejects_empty_name_before_touching_the_store() {
    let mut repo = MockBookRepository::new();
    repo.expect_count_by_identity().times(0);
    repo.expect_insert().times(0);

    let service = BookCommandService::new(Arc::new(repo));
    let error = service
        .create_book(CreateBookRequest { book: details("") })
        .await
        .expect_err("empty name is invalid");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(error.message(), INVALID_BOOK_MESSAGE);
}

#[rstest]
#[tokio::test]
async fn create_twice_reports_duplicate(store: Arc<InMemoryBookRepository>) {
    let service = BookCommandService::new(store.clone());

    let created = service
        .create_book(CreateBookRequest { book: details("X") })
        .await
        .expect("first create succeeds");
    let error = service
        .create_book(CreateBookRequest { book: details("X") })
        .await
        .expect_err("second create is a duplicate");

    assert_eq!(error.code(), ErrorCode::Conflict);
    let stored = store.list_all().await.expect("list succeeds");
    assert_eq!(stored, vec![created.book]);
}

#[rstest]
#[tokio::test]
async fn duplicate_check_ignores_isbn(store: Arc<InMemoryBookRepository>) {
    let service = BookCommandService::new(store);
    let mut first = details("X");
    first.isbn = Some("111".to_owned());
    let mut second = details("X");
    second.isbn = Some("222".to_owned());

    service
        .create_book(CreateBookRequest { book: first })
        .await
        .expect("first create succeeds");
    let error = service
        .create_book(CreateBookRequest { book: second })
        .await
        .expect_err("same identity is a duplicate");

    assert_eq!(error.code(), ErrorCode::Conflict);
}

#[rstest]
#[tokio::test]
async fn create_maps_store_level_duplicate_to_conflict() {
    let mut repo = MockBookRepository::new();
    repo.expect_count_by_identity().times(1).return_once(|_| Ok(0));
    repo.expect_insert()
        .times(1)
        .return_once(|_| Err(BookRepositoryError::duplicate("E11000 duplicate key")));

    let service = BookCommandService::new(Arc::new(repo));
    let error = service
        .create_book(CreateBookRequest { book: details("X") })
        .await
        .expect_err("unique index rejects the insert");

    assert_eq!(error.code(), ErrorCode::Conflict);
}

#[rstest]
#[case(BookRepositoryError::connection("no primary"))]
#[case(BookRepositoryError::timeout("count_by_identity"))]
#[tokio::test]
async fn create_maps_unreachable_store_to_service_unavailable(#[case] failure: BookRepositoryError) {
    let mut repo = MockBookRepository::new();
    repo.expect_count_by_identity()
        .times(1)
        .return_once(move |_| Err(failure));
    repo.expect_insert().times(0);

    let service = BookCommandService::new(Arc::new(repo));
    let error = service
        .create_book(CreateBookRequest { book: details("X") })
        .await
        .expect_err("store is unavailable");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}

#[rstest]
#[tokio::test]
async fn update_returns_post_image(store: Arc<InMemoryBookRepository>) {
    let original = store.insert(&details("Old")).await.expect("insert succeeds");
    let service = BookCommandService::new(store.clone());

    let replacement = BookDetails::new("New", "B", Some("123".to_owned()), 10, 1999);
    let response = service
        .update_book(UpdateBookRequest {
            id: original.id().to_hex(),
            book: replacement.clone(),
        })
        .await
        .expect("update succeeds");

    assert_eq!(response.book, Book::new(original.id(), replacement));
    let stored = store.list_all().await.expect("list succeeds");
    assert_eq!(stored, vec![response.book]);
}

#[rstest]
#[tokio::test]
async fn update_unknown_id_is_not_found(store: Arc<InMemoryBookRepository>) {
    let service = BookCommandService::new(store);
    let error = service
        .update_book(UpdateBookRequest {
            id: BookId::generate().to_hex(),
            book: details("New"),
        })
        .await
        .expect_err("unknown id");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn update_rejects_malformed_id_without_store_access() {
    let mut repo = MockBookRepository::new();
    repo.expect_replace().times(0);

    let service = BookCommandService::new(Arc::new(repo));
    let error = service
        .update_book(UpdateBookRequest {
            id: "nope".to_owned(),
            book: details("New"),
        })
        .await
        .expect_err("malformed id");

    assert_eq!(error.code(), ErrorCode::InvalidId);
}

#[rstest]
#[tokio::test]
async fn delete_semantics(store: Arc<InMemoryBookRepository>) {
    let created = store.insert(&details("X")).await.expect("insert succeeds");
    let service = BookCommandService::new(store);
    let request = DeleteBookRequest {
        id: created.id().to_hex(),
    };

    let response = service
        .delete_book(request.clone())
        .await
        .expect("first delete succeeds");
    assert_eq!(response.id, created.id());

    let error = service
        .delete_book(request)
        .await
        .expect_err("second delete finds nothing");
    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[tokio::test]
async fn delete_rejects_malformed_id_without_store_access() {
    let mut repo = MockBookRepository::new();
    repo.expect_delete().times(0);

    let service = BookCommandService::new(Arc::new(repo));
    let error = service
        .delete_book(DeleteBookRequest {
            id: "not-hex".to_owned(),
        })
        .await
        .expect_err("malformed id");

    assert_eq!(error.code(), ErrorCode::InvalidId);
    assert_eq!(error.message(), INVALID_ID_MESSAGE);
}

#[rstest]
#[tokio::test]
async fn listing_an_empty_store_is_empty(store: Arc<InMemoryBookRepository>) {
    let service = BookQueryService::new(store);

    assert!(service.list_books().await.expect("list succeeds").is_empty());
    assert!(service.list_book_pages().await.expect("list succeeds").is_empty());
}

#[rstest]
#[tokio::test]
async fn listings_project_the_same_records(store: Arc<InMemoryBookRepository>) {
    store.insert(&details("X")).await.expect("insert succeeds");
    store.insert(&details("Y")).await.expect("insert succeeds");
    let service = BookQueryService::new(store);

    let api = service.list_books().await.expect("list succeeds");
    let pages = service.list_book_pages().await.expect("list succeeds");

    assert_eq!(api.len(), 2);
    for (api_view, page_view) in api.iter().zip(&pages) {
        assert_eq!(api_view.id, page_view.id);
        assert_eq!(api_view.name, page_view.name);
        assert_eq!(api_view.year, page_view.year);
    }
}

#[rstest]
#[tokio::test]
async fn listing_maps_query_failure_to_internal_error() {
    let mut repo = MockBookRepository::new();
    repo.expect_list_all()
        .times(1)
        .return_once(|| Err(BookRepositoryError::query("decode failed")));

    let service = BookQueryService::new(Arc::new(repo));
    let error = service.list_books().await.expect_err("query fails");

    assert_eq!(error.code(), ErrorCode::InternalError);
}
