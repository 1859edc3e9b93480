//! End-to-end catalogue flows over the process-local store.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::{fixture, rstest};
use futures_util::future::join_all;
use serde_json::{Value, json};

use bookstore::Trace;
use bookstore::domain::ports::BookRepository;
use bookstore::domain::{BookSeeder, SeedOutcome, TRACE_ID_HEADER, default_seed_books};
use bookstore::inbound::http::configure;
use bookstore::inbound::http::health::HealthState;
use bookstore::outbound::memory::InMemoryBookRepository;
use bookstore::test_support::http::in_memory_http_state;

async fn seeded(store: InMemoryBookRepository) -> Arc<InMemoryBookRepository> {
    let store = Arc::new(store);
    BookSeeder::new(store.clone())
        .ensure_seeded(&default_seed_books())
        .await
        .expect("seeding succeeds");
    store
}

#[fixture]
async fn seeded_store() -> Arc<InMemoryBookRepository> {
    seeded(InMemoryBookRepository::new()).await
}

/// Store matching the server's no-database fallback with default settings.
#[fixture]
async fn unique_store() -> Arc<InMemoryBookRepository> {
    seeded(InMemoryBookRepository::with_unique_identity()).await
}

macro_rules! init_app {
    ($store:expr) => {
        actix_test::init_service(
            App::new()
                .wrap(Trace)
                .app_data(web::Data::new(in_memory_http_state($store)))
                .app_data(web::Data::new(HealthState::new()))
                .configure(configure),
        )
        .await
    };
}

async fn list_names<S>(app: &S) -> Vec<String>
where
    S: actix_web::dev::Service<
            actix_http::Request,
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
        >,
{
    let request = actix_test::TestRequest::get().uri("/api/books").to_request();
    let body: Vec<Value> = actix_test::call_and_read_body_json(app, request).await;
    body.iter()
        .filter_map(|book| book.get("name").and_then(Value::as_str))
        .map(str::to_owned)
        .collect()
}

#[rstest]
#[actix_web::test]
async fn seeded_catalogue_is_listed(#[future] seeded_store: Arc<InMemoryBookRepository>) {
    let app = init_app!(seeded_store.await);

    let mut names = list_names(&app).await;
    names.sort();

    assert_eq!(names, vec!["Frankenstein", "The Black Cat", "The Vortex"]);
}

#[rstest]
#[actix_web::test]
async fn create_update_delete_round_trip(#[future] seeded_store: Arc<InMemoryBookRepository>) {
    let app = init_app!(seeded_store.await);

    let create = actix_test::TestRequest::post()
        .uri("/api/books")
        .set_json(json!({
            "name": "Dune",
            "author": "Frank Herbert",
            "isbn": "978-0-441-17271-9",
            "pages": 412,
            "year": 1965
        }))
        .to_request();
    let response = actix_test::call_service(&app, create).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: Value = actix_test::read_body_json(response).await;
    assert_eq!(created["message"], "Book created successfully");
    let id = created["id"].as_str().expect("id string").to_owned();

    let update = actix_test::TestRequest::put()
        .uri("/api/books")
        .set_json(json!({
            "id": id,
            "name": "Dune Messiah",
            "author": "Frank Herbert",
            "pages": 256,
            "year": 1969
        }))
        .to_request();
    let response = actix_test::call_service(&app, update).await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated: Value = actix_test::read_body_json(response).await;
    assert_eq!(updated["message"], "Book modified successfully");
    assert_eq!(updated["id"], id.as_str());

    let names = list_names(&app).await;
    assert!(names.contains(&"Dune Messiah".to_owned()));
    assert!(!names.contains(&"Dune".to_owned()));

    let delete = actix_test::TestRequest::delete()
        .uri(&format!("/api/books/{id}"))
        .to_request();
    let response = actix_test::call_service(&app, delete).await;
    assert_eq!(response.status(), StatusCode::OK);
    let deleted: Value = actix_test::read_body_json(response).await;
    assert_eq!(deleted["message"], "Book deleted successfully");

    assert_eq!(list_names(&app).await.len(), 3);
}

#[rstest]
#[actix_web::test]
async fn exact_duplicate_is_rejected(#[future] seeded_store: Arc<InMemoryBookRepository>) {
    let app = init_app!(seeded_store.await);

    let request = actix_test::TestRequest::post()
        .uri("/api/books")
        .set_json(json!({
            "name": "Frankenstein",
            "author": "Mary Shelley",
            "pages": 280,
            "year": 1818
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "conflict");
    assert_eq!(body["message"], "There already exists the exact book!");
}

#[rstest]
#[actix_web::test]
async fn empty_fields_are_rejected(#[future] seeded_store: Arc<InMemoryBookRepository>) {
    let app = init_app!(seeded_store.await);

    let request = actix_test::TestRequest::post()
        .uri("/api/books")
        .set_json(json!({"name": "Untitled"}))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(list_names(&app).await.len(), 3);
}

#[rstest]
#[case::malformed("not-an-object-id", StatusCode::BAD_REQUEST)]
#[case::unknown("65a1f0c2e4b0a1b2c3d4e5f6", StatusCode::NOT_FOUND)]
#[actix_web::test]
async fn delete_reports_bad_targets(
    #[future] seeded_store: Arc<InMemoryBookRepository>,
    #[case] id: &str,
    #[case] expected: StatusCode,
) {
    let app = init_app!(seeded_store.await);

    let request = actix_test::TestRequest::delete()
        .uri(&format!("/api/books/{id}"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), expected);
}

#[rstest]
#[actix_web::test]
async fn update_of_unknown_book_is_not_found(
    #[future] seeded_store: Arc<InMemoryBookRepository>,
) {
    let app = init_app!(seeded_store.await);

    let request = actix_test::TestRequest::put()
        .uri("/api/books")
        .set_json(json!({
            "id": "65a1f0c2e4b0a1b2c3d4e5f6",
            "name": "Ghost",
            "author": "Nobody",
            "pages": 1,
            "year": 1
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[case::books("/books", "The Vortex")]
#[case::authors("/authors", "Mary Shelley")]
#[case::years("/years", "1843")]
#[actix_web::test]
async fn views_render_stored_books(
    #[future] seeded_store: Arc<InMemoryBookRepository>,
    #[case] path: &str,
    #[case] expected: &str,
) {
    let app = init_app!(seeded_store.await);

    let request = actix_test::TestRequest::get().uri(path).to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = actix_test::read_body(response).await;
    let html = String::from_utf8(body.to_vec()).expect("utf-8 html");
    assert!(html.contains(expected), "{path} should mention {expected}");
}

#[rstest]
#[actix_web::test]
async fn responses_carry_a_trace_id(#[future] seeded_store: Arc<InMemoryBookRepository>) {
    let app = init_app!(seeded_store.await);

    let request = actix_test::TestRequest::get().uri("/api/books").to_request();
    let response = actix_test::call_service(&app, request).await;

    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .expect("trace id header")
        .to_str()
        .expect("ascii header");
    assert!(!header.is_empty());
}

#[rstest]
#[actix_web::test]
async fn concurrent_identical_creates_store_one_copy(
    #[future] unique_store: Arc<InMemoryBookRepository>,
) {
    let app = init_app!(unique_store.await);
    let body = json!({"name": "Dune", "author": "Frank Herbert", "pages": 412, "year": 1965});

    let responses = join_all((0..8).map(|_| {
        let request = actix_test::TestRequest::post()
            .uri("/api/books")
            .set_json(&body)
            .to_request();
        actix_test::call_service(&app, request)
    }))
    .await;

    let statuses: Vec<StatusCode> = responses.iter().map(|response| response.status()).collect();
    assert_eq!(
        statuses.iter().filter(|status| **status == StatusCode::CREATED).count(),
        1
    );
    assert!(
        statuses
            .iter()
            .all(|status| *status == StatusCode::CREATED || *status == StatusCode::CONFLICT)
    );
    let names = list_names(&app).await;
    assert_eq!(names.iter().filter(|name| name.as_str() == "Dune").count(), 1);
}

#[rstest]
#[actix_web::test]
async fn update_of_unknown_id_with_taken_identity_is_not_found(
    #[future] unique_store: Arc<InMemoryBookRepository>,
) {
    let app = init_app!(unique_store.await);

    let request = actix_test::TestRequest::put()
        .uri("/api/books")
        .set_json(json!({
            "id": "65a1f0c2e4b0a1b2c3d4e5f6",
            "name": "The Vortex",
            "author": "José Eustasio Rivera",
            "pages": 292,
            "year": 1924
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn reseeding_after_an_isbn_edit_keeps_starting(
    #[future] unique_store: Arc<InMemoryBookRepository>,
) {
    let store = unique_store.await;
    let frankenstein = store
        .list_all()
        .await
        .expect("list succeeds")
        .into_iter()
        .find(|book| book.name() == "Frankenstein")
        .expect("seeded frankenstein");
    let app = init_app!(store.clone());

    let request = actix_test::TestRequest::put()
        .uri("/api/books")
        .set_json(json!({
            "id": frankenstein.id().to_hex(),
            "name": "Frankenstein",
            "author": "Mary Shelley",
            "isbn": "edited",
            "pages": 280,
            "year": 1818
        }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let report = BookSeeder::new(store.clone())
        .ensure_seeded(&default_seed_books())
        .await
        .expect("restart seeding succeeds");

    assert_eq!(report.outcomes[1], SeedOutcome::Conflicting);
    assert_eq!(list_names(&app).await.len(), 3);
}
