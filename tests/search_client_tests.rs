use cliniccloud::search::{
    DocumentId, HttpSearchClient, SEARCH_LIMIT, SEARCH_OFFSET, SearchBackend, SearchError,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Request shape
// ============================================================================

#[tokio::test]
async fn test_search_posts_exact_query_with_first_page_window() {
    let mock_server = MockServer::start().await;

    // The matcher is the assertion: anything but this exact body 404s
    // and the expect(1) below fails.
    Mock::given(method("POST"))
        .and(path("/api/search/"))
        .and(body_json(json!({
            "query": "headache",
            "limit": 20,
            "offset": 0
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpSearchClient::new(mock_server.uri());
    let result = client.search("headache", SEARCH_LIMIT, SEARCH_OFFSET).await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_empty());
}

// ============================================================================
// Response parsing
// ============================================================================

#[tokio::test]
async fn test_search_parses_documents_in_order() {
    let mock_server = MockServer::start().await;

    let body = json!({
        "results": [
            {
                "id": 12,
                "titulo": "Cefalea tensional",
                "texto_resumen": "Dolor de cabeza por tensión muscular.",
                "url_fuente": "https://example.org/doc/12",
                "fecha_publicacion": "2024-05-10",
                "autor": ["García, M."],
                "categoria": {"nombre": "Neurología"}
            },
            {
                "id": "doc-99",
                "titulo": "Migraña crónica",
                "texto_resumen": null
            }
        ]
    });

    Mock::given(method("POST"))
        .and(path("/api/search/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&mock_server)
        .await;

    let client = HttpSearchClient::new(mock_server.uri());
    let docs = client
        .search("cefalea", SEARCH_LIMIT, SEARCH_OFFSET)
        .await
        .unwrap();

    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0].id, DocumentId::Int(12));
    assert_eq!(docs[0].title, "Cefalea tensional");
    assert_eq!(docs[0].authors, vec!["García, M."]);
    assert_eq!(docs[0].category.as_ref().unwrap().name, "Neurología");

    // Sparse document: only id and titulo present
    assert_eq!(docs[1].id, DocumentId::Text("doc-99".to_string()));
    assert!(docs[1].summary.is_none());
    assert!(docs[1].authors.is_empty());
    assert!(docs[1].category.is_none());
}

// ============================================================================
// Error normalization
// ============================================================================

#[tokio::test]
async fn test_non_success_status_is_a_service_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/search/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&mock_server)
        .await;

    let client = HttpSearchClient::new(mock_server.uri());
    let result = client.search("anything", SEARCH_LIMIT, SEARCH_OFFSET).await;

    match result {
        Err(SearchError::Service { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "internal error");
        }
        other => panic!("Expected Service error, got {:?}", other.map(|d| d.len())),
    }
}

#[tokio::test]
async fn test_client_errors_are_service_errors_too() {
    // No status-code-specific handling: a 404 normalizes the same way a 500 does.
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/search/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = HttpSearchClient::new(mock_server.uri());
    let result = client.search("anything", SEARCH_LIMIT, SEARCH_OFFSET).await;

    assert!(matches!(
        result,
        Err(SearchError::Service { status: 404, .. })
    ));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_a_network_error() {
    // Nothing is listening on this port.
    let client = HttpSearchClient::new("http://127.0.0.1:1".to_string());
    let result = client.search("anything", SEARCH_LIMIT, SEARCH_OFFSET).await;

    assert!(matches!(result, Err(SearchError::Network(_))));
}

#[tokio::test]
async fn test_malformed_success_body_is_a_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/search/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = HttpSearchClient::new(mock_server.uri());
    let result = client.search("anything", SEARCH_LIMIT, SEARCH_OFFSET).await;

    assert!(matches!(result, Err(SearchError::Parse(_))));
}
