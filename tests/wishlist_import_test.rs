use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use minilibrary::csv::import::{ImportError, SkipReason, import_wishlist};
use minilibrary::domain::{BookMetadata, DomainError, MetadataProvider};
use minilibrary::integrations::google_books::GoogleBooksClient;
use minilibrary::integrations::openlibrary::OpenLibraryCovers;
use minilibrary::services::CoverService;

/// Scripted provider: pops one canned response per lookup and records how it
/// was called. An exhausted script answers with zero results.
struct StubProvider {
    responses: Mutex<VecDeque<Result<Vec<BookMetadata>, DomainError>>>,
    calls: Mutex<Vec<String>>,
}

impl StubProvider {
    fn new(responses: Vec<Result<Vec<BookMetadata>, DomainError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn next_response(&self) -> Result<Vec<BookMetadata>, DomainError> {
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(Vec::new()))
    }
}

#[async_trait]
impl MetadataProvider for StubProvider {
    async fn search_by_isbn(&self, isbn: &str) -> Result<Vec<BookMetadata>, DomainError> {
        self.calls.lock().unwrap().push(format!("isbn:{}", isbn));
        self.next_response()
    }

    async fn search_by_title_author(
        &self,
        title: &str,
        author: &str,
    ) -> Result<Vec<BookMetadata>, DomainError> {
        self.calls
            .lock()
            .unwrap()
            .push(format!("title:{}|author:{}", title, author));
        self.next_response()
    }
}

fn metadata(title: &str, author: &str) -> BookMetadata {
    BookMetadata {
        title: title.to_string(),
        authors: vec![author.to_string()],
        ..Default::default()
    }
}

#[tokio::test]
async fn fewer_than_two_lines_is_empty_input() {
    let provider = StubProvider::new(vec![]);

    let err = import_wishlist("Title,Author,ISBN\n", &provider)
        .await
        .unwrap_err();
    assert_eq!(err, ImportError::EmptyInput);
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn isbn_lookup_is_preferred_when_present() {
    let provider = StubProvider::new(vec![Ok(vec![metadata("Dune", "Frank Herbert")])]);

    let outcome = import_wishlist("Title,Author,ISBN\nDune,Frank Herbert,9780441172719\n", &provider)
        .await
        .expect("import should succeed");

    assert_eq!(outcome.imported(), 1);
    assert_eq!(provider.calls(), vec!["isbn:9780441172719"]);

    let book = &outcome.books[0];
    assert!(book.is_wishlist_item);
    assert_eq!(book.total_copies, 0);
    assert_eq!(book.available_copies, 0);
    assert_eq!(book.title, "Dune");
    assert_eq!(book.author, "Frank Herbert");
}

#[tokio::test]
async fn missing_isbn_falls_back_to_title_author_search() {
    let provider = StubProvider::new(vec![Ok(vec![metadata("Matilda", "Roald Dahl")])]);

    let outcome = import_wishlist("Title,Author,ISBN\nMatilda,Roald Dahl,\n", &provider)
        .await
        .expect("import should succeed");

    assert_eq!(outcome.imported(), 1);
    assert_eq!(provider.calls(), vec!["title:Matilda|author:Roald Dahl"]);
}

#[tokio::test]
async fn zero_results_skip_the_row_without_creating_an_entry() {
    let provider = StubProvider::new(vec![Ok(Vec::new())]);

    let outcome = import_wishlist("Title,Author,ISBN\nDune,,\n", &provider)
        .await
        .expect("import should succeed");

    assert_eq!(outcome.imported(), 0);
    assert_eq!(outcome.skipped.len(), 1);
    assert_eq!(outcome.skipped[0].reason, SkipReason::NoMatch);
    assert_eq!(provider.calls(), vec!["title:Dune|author:"]);
}

#[tokio::test]
async fn lookup_failure_is_absorbed_and_the_batch_continues() {
    let provider = StubProvider::new(vec![
        Err(DomainError::External("connection refused".to_string())),
        Ok(vec![metadata("Momo", "Michael Ende")]),
    ]);

    let text = "Title,Author,ISBN\nDune,,\nMomo,Michael Ende,\n";
    let outcome = import_wishlist(text, &provider)
        .await
        .expect("import should succeed");

    assert_eq!(outcome.imported(), 1);
    assert_eq!(outcome.skipped.len(), 1);
    assert!(matches!(outcome.skipped[0].reason, SkipReason::Lookup(_)));
    assert_eq!(outcome.skipped[0].row, 1);
    assert_eq!(outcome.books[0].title, "Momo");
}

#[tokio::test]
async fn rows_are_looked_up_strictly_in_input_order() {
    let provider = StubProvider::new(vec![]);

    let text = "Title,Author,ISBN\nFirst,,111\nSecond,,\nThird,,333\n";
    let outcome = import_wishlist(text, &provider)
        .await
        .expect("import should succeed");

    assert_eq!(outcome.imported(), 0);
    assert_eq!(
        provider.calls(),
        vec!["isbn:111", "title:Second|author:", "isbn:333"]
    );
}

#[tokio::test]
async fn empty_title_skips_before_any_lookup() {
    let provider = StubProvider::new(vec![]);

    let outcome = import_wishlist("Title,Author,ISBN\n,Ann,123\n", &provider)
        .await
        .expect("import should succeed");

    assert_eq!(outcome.imported(), 0);
    assert_eq!(outcome.skipped[0].reason, SkipReason::MissingTitle);
    assert!(provider.calls().is_empty());
}

#[tokio::test]
async fn fields_beyond_the_third_are_ignored() {
    let provider = StubProvider::new(vec![Ok(vec![metadata("Dune", "Frank Herbert")])]);

    let outcome = import_wishlist("Title,Author,ISBN\nDune,Frank Herbert,42,surplus,more\n", &provider)
        .await
        .expect("import should succeed");

    assert_eq!(outcome.imported(), 1);
    assert_eq!(provider.calls(), vec!["isbn:42"]);
}

// --- GoogleBooksClient against a mock server ---

fn volume_json() -> serde_json::Value {
    serde_json::json!({
        "items": [{
            "volumeInfo": {
                "title": "Dune",
                "authors": ["Frank Herbert"],
                "publisher": "Ace",
                "publishedDate": "1990-09-01",
                "description": "Desert planet.",
                "pageCount": 688,
                "language": "en",
                "industryIdentifiers": [
                    {"type": "ISBN_10", "identifier": "0441172717"},
                    {"type": "ISBN_13", "identifier": "9780441172719"}
                ],
                "imageLinks": {"thumbnail": "http://books.google.com/dune.jpg"}
            }
        }]
    })
}

#[tokio::test]
async fn google_books_isbn_lookup_parses_volume_metadata() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/volumes"))
        .and(query_param("q", "isbn:9780441172719"))
        .respond_with(ResponseTemplate::new(200).set_body_json(volume_json()))
        .mount(&server)
        .await;

    let client =
        GoogleBooksClient::new(server.uri(), Duration::from_secs(2)).expect("client builds");
    let results = client
        .search_by_isbn("9780441172719")
        .await
        .expect("lookup succeeds");

    assert_eq!(results.len(), 1);
    let meta = &results[0];
    assert_eq!(meta.title, "Dune");
    assert_eq!(meta.authors, vec!["Frank Herbert".to_string()]);
    assert_eq!(meta.isbn.as_deref(), Some("9780441172719"));
    assert_eq!(meta.publisher.as_deref(), Some("Ace"));
    assert_eq!(meta.page_count, Some(688));
    assert_eq!(meta.language.as_deref(), Some("en"));
    // http thumbnails get upgraded
    assert_eq!(
        meta.cover_url.as_deref(),
        Some("https://books.google.com/dune.jpg")
    );
}

#[tokio::test]
async fn google_books_no_items_means_zero_results() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/volumes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client =
        GoogleBooksClient::new(server.uri(), Duration::from_secs(2)).expect("client builds");
    let results = client
        .search_by_title_author("Nothing", "Nobody")
        .await
        .expect("lookup succeeds");

    assert!(results.is_empty());
}

#[tokio::test]
async fn google_books_server_error_becomes_external_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/volumes"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client =
        GoogleBooksClient::new(server.uri(), Duration::from_secs(2)).expect("client builds");
    let err = client.search_by_isbn("123").await.unwrap_err();

    assert!(matches!(err, DomainError::External(_)));
}

#[tokio::test]
async fn wishlist_import_works_end_to_end_against_mock_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/volumes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(volume_json()))
        .mount(&server)
        .await;

    let client =
        GoogleBooksClient::new(server.uri(), Duration::from_secs(2)).expect("client builds");
    let outcome = import_wishlist("Title,Author,ISBN\nDune,,9780441172719\n", &client)
        .await
        .expect("import should succeed");

    assert_eq!(outcome.imported(), 1);
    assert_eq!(outcome.books[0].isbn.as_deref(), Some("9780441172719"));
    assert!(outcome.books[0].is_wishlist_item);
}

// --- Cover service ---

#[tokio::test]
async fn cover_service_caches_the_first_hit() {
    let mut with_cover = metadata("Dune", "Frank Herbert");
    with_cover.cover_url = Some("https://example.org/dune.jpg".to_string());
    // Only one scripted response; a second provider call would answer NoMatch
    let provider = Arc::new(StubProvider::new(vec![Ok(vec![with_cover])]));

    let fallback = OpenLibraryCovers::new("http://127.0.0.1:1", Duration::from_millis(200))
        .expect("covers client builds");
    let covers = CoverService::new(provider.clone(), fallback);

    let first = covers.cover_url("9780441172719").await;
    let second = covers.cover_url("9780441172719").await;

    assert_eq!(first.as_deref(), Some("https://example.org/dune.jpg"));
    assert_eq!(second, first);
    assert_eq!(provider.calls().len(), 1);
}

#[tokio::test]
async fn cover_service_falls_back_to_openlibrary() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/b/isbn/9780441172719-L.jpg"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let provider = Arc::new(StubProvider::new(vec![Ok(Vec::new())]));
    let fallback =
        OpenLibraryCovers::new(server.uri(), Duration::from_secs(2)).expect("covers client builds");
    let covers = CoverService::new(provider, fallback);

    let url = covers.cover_url("9780441172719").await;
    assert_eq!(
        url,
        Some(format!("{}/b/isbn/9780441172719-L.jpg", server.uri()))
    );
}

#[tokio::test]
async fn cover_enrich_skips_books_that_already_have_a_cover() {
    let provider = Arc::new(StubProvider::new(vec![]));
    let fallback = OpenLibraryCovers::new("http://127.0.0.1:1", Duration::from_millis(200))
        .expect("covers client builds");
    let covers = CoverService::new(provider.clone(), fallback);

    let mut book = minilibrary::models::Book::new("Dune", "Frank Herbert", 1);
    book.isbn = Some("9780441172719".to_string());
    book.cover_image_url = Some("https://example.org/existing.jpg".to_string());

    covers.enrich(&mut book).await;

    assert_eq!(
        book.cover_image_url.as_deref(),
        Some("https://example.org/existing.jpg")
    );
    assert!(provider.calls().is_empty());
}
